//! API route handlers.

mod approvals;
mod family;
mod notifications;
mod questions;

pub use approvals::*;
pub use family::*;
pub use notifications::*;
pub use questions::*;
