//! # quadmarket-accounts
//!
//! **Account Registry**: owns user identities and credentials.
//!
//! The registry is the only component that ever sees a password. The check
//! is plain string equality — the contract inherited from the original
//! service — but it is isolated behind [`AccountRegistry::login`] so a
//! hashing scheme can replace it without touching callers.

pub mod registry;

pub use registry::AccountRegistry;
