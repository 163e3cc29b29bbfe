//! Progress reporting for optimization runs

pub mod reporter;
