//! State management module.
//!
//! Contains the hosting [`Session`] and the channel [`Membership`] table it
//! resolves mentions against.

mod membership;
mod session;

pub use membership::Membership;
pub use session::Session;
