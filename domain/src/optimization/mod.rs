//! Optimization domain
//!
//! Configuration, feedback trail and result types of one optimization run.
//! The algorithms that produce them live in the application layer.

pub mod config;
pub mod feedback;
pub mod mode;
pub mod result;
