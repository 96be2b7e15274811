//! JSON Web Key Set (JWKS) module
pub(crate) mod jwk;

use crate::error::{Error, Result};
use crate::jwks::jwk::{Jwk, KeyRecord};
use std::sync::Arc;

/// JSON Web Key Set (JWKS)
///
/// An ordered, immutable collection of key records. The keys and their order
/// are fixed at construction; clones share the same backing storage, so a set
/// can be handed to any number of reader threads without locking.
///
/// ```
/// use jwkset::{Jwk, KeyRecord, KeySet};
///
/// let set = KeySet::new(vec![
///     Jwk::new_rsa("n1", "AQAB", Some("k1".into())),
///     Jwk::new_rsa("n2", "AQAB", Some("k2".into())),
/// ]);
///
/// assert_eq!(set.get_key(Some("k2")).and_then(|k| k.kid()), Some("k2"));
/// assert!(set.get_key(None).is_none());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct KeySet<K = Jwk> {
    keys: Arc<[K]>,
}

impl<K> KeySet<K> {
    /// Create an empty JWK set
    pub fn empty() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
        }
    }

    /// Create a JWK set holding a single key
    pub fn single(key: K) -> Self {
        Self::new(vec![key])
    }

    /// Create a JWK set from a list of keys, keeping their order
    pub fn new(keys: Vec<K>) -> Self {
        Self {
            keys: Arc::from(keys),
        }
    }

    /// Create a JWK set from a key that may be absent
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `key` is `None`.
    pub fn try_single(key: Option<K>) -> Result<Self> {
        key.map(Self::single)
            .ok_or_else(|| Error::InvalidArgument("The JWK must not be null".into()))
    }

    /// Create a JWK set from a list of keys that may be absent
    ///
    /// Only the list itself is checked; an empty list is a valid, empty set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `keys` is `None`.
    pub fn try_new(keys: Option<Vec<K>>) -> Result<Self> {
        keys.map(Self::new)
            .ok_or_else(|| Error::InvalidArgument("The JWK list must not be null".into()))
    }

    /// The keys of this set, in insertion order
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }
}

impl<K: KeyRecord> KeySet<K> {
    /// Get the first key whose key ID equals `kid`
    ///
    /// Keys without a kid never match, so a `None` query always returns `None`.
    /// Duplicate kids are not rejected; the earliest key wins.
    pub fn get_key(&self, kid: Option<&str>) -> Option<&K> {
        self.keys
            .iter()
            .find(|key| key.kid().is_some() && key.kid() == kid)
    }

    /// Get the key matching `kid`, falling back to the only key of a
    /// single-key set when no kid is given
    ///
    /// Compatibility lookup for callers written against key sources that
    /// always held exactly one key and never sent a kid. The fallback returns
    /// the single key whatever its own kid is. Prefer [`KeySet::get_key`] or
    /// [`KeySet::resolve`] in new code.
    pub fn key_by_id_or_single_entry(&self, kid: Option<&str>) -> Option<&K> {
        if kid.is_none() && self.keys.len() == 1 {
            tracing::trace!("jwks: no kid given, using the only key in the set");
            return self.keys.first();
        }

        self.get_key(kid)
    }

    /// Resolve the key to verify a token with, treating ambiguity as an error
    ///
    /// Returns an error if:
    /// - No key matches the given kid
    /// - Multiple keys match the same kid (ambiguous)
    /// - No kid is provided but the JWKS contains multiple keys (ambiguous)
    /// - No kid is provided and the JWKS is empty
    pub fn resolve(&self, kid: Option<&str>) -> Result<&K> {
        if let Some(kid) = kid {
            let mut matches = self.keys.iter().filter(|k| k.kid() == Some(kid));

            let Some(first) = matches.next() else {
                tracing::debug!(kid, "jwks: no matching key found");
                return Err(Error::KeyNotFound { kid: kid.into() });
            };

            let others = matches.count();
            if others > 0 {
                // Multiple keys with same kid - ambiguous, fail verification
                let count = others + 1;
                tracing::debug!(kid, count, "jwks: kid matches multiple keys");
                return Err(Error::MultipleKeysFound {
                    kid: kid.into(),
                    count,
                });
            }

            Ok(first)
        } else {
            match &*self.keys {
                [] => {
                    tracing::debug!("jwks: no kid given and the set is empty");
                    Err(Error::EmptyKeySet)
                }
                // Single key without kid - safe fallback
                [only] => Ok(only),
                keys => {
                    let key_count = keys.len();
                    tracing::debug!(key_count, "jwks: kid required to choose a key");
                    Err(Error::KeyIdRequired { key_count })
                }
            }
        }
    }
}

impl<K> Clone for KeySet<K> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
        }
    }
}

impl<K> Default for KeySet<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> From<Vec<K>> for KeySet<K> {
    fn from(keys: Vec<K>) -> Self {
        Self::new(keys)
    }
}

impl<K> FromIterator<K> for KeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a, K> IntoIterator for &'a KeySet<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
