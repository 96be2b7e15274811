//! An immutable JSON Web Key Set with lookup by key ID.
//!
//! Fetching, caching and parsing key material happen elsewhere; a [`KeySet`]
//! only holds the resulting key records and selects one for a token's `kid`.

mod error;
mod jwks;

// Public Interface
pub use error::{Error, Result};
pub use jwks::KeySet;
pub use jwks::jwk::{Jwk, KeyRecord};
