//! Post-hoc screening of generated tutor responses.

mod policy;
mod reason;
mod validator;

pub use policy::OutputPolicy;
pub use reason::{OutputReason, OutputVerdict};
pub use validator::OutputValidator;
