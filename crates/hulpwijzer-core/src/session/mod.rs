//! Session identity.
//!
//! A session is identified by one opaque token that survives restarts. The
//! token lives behind [`SessionIdRepository`]; [`SessionIdentityStore`] is the
//! only type that talks to it.

mod id;
mod identity;
mod repository;

pub use id::SessionId;
pub use identity::SessionIdentityStore;
pub use repository::SessionIdRepository;

#[cfg(test)]
pub(crate) mod testing;
