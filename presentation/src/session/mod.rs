//! Client-side bookkeeping of the current optimization result

mod result_session;

pub use result_session::{ResultSession, SessionError};
