//! JWK (JSON Web Key) record and the key ID accessor trait

use std::rc::Rc;
use std::sync::Arc;

/// A key record that can be stored in a [`KeySet`](crate::KeySet).
///
/// The set only needs the key ID to select a record; everything else about
/// the key is opaque to it.
pub trait KeyRecord {
    /// Key ID (kid), or `None` if the key does not declare one
    fn kid(&self) -> Option<&str>;
}

impl<T: KeyRecord + ?Sized> KeyRecord for &T {
    fn kid(&self) -> Option<&str> {
        (**self).kid()
    }
}

impl<T: KeyRecord + ?Sized> KeyRecord for Box<T> {
    fn kid(&self) -> Option<&str> {
        (**self).kid()
    }
}

impl<T: KeyRecord + ?Sized> KeyRecord for Rc<T> {
    fn kid(&self) -> Option<&str> {
        (**self).kid()
    }
}

impl<T: KeyRecord + ?Sized> KeyRecord for Arc<T> {
    fn kid(&self) -> Option<&str> {
        (**self).kid()
    }
}

/// JSON Web Key (JWK) structure
///
/// Members are stored as given. Nothing here checks that the key type, curve
/// or Base64URL fields are consistent; that is left to whoever turns the
/// record into a verification key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Jwk {
    /// Key type (e.g., "RSA")
    kty: Option<String>,
    /// Key ID
    kid: Option<String>,
    /// Algorithm (advisory field per RFC 7517)
    alg: Option<String>,
    /// Key use (RFC 7517 Section 4.2)
    ///
    /// - "sig" for signature verification
    /// - "enc" for encryption
    ///
    /// If absent, the key may be used for any purpose.
    key_use: Option<String>,
    // RSA fields
    /// RSA modulus (Base64URL-encoded)
    n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    e: Option<String>,
    // ECDSA fields
    /// Elliptic curve name (e.g., "P-256", "P-384", "P-521")
    crv: Option<String>,
    /// ECDSA x-coordinate (Base64URL-encoded)
    x: Option<String>,
    /// ECDSA y-coordinate (Base64URL-encoded)
    y: Option<String>,
}

impl Jwk {
    /// RSA public key from the Base64URL-encoded modulus (`n`) and exponent (`e`),
    /// along with an optional (but recommended) key ID.
    pub fn new_rsa(n: impl Into<String>, e: impl Into<String>, kid: Option<String>) -> Self {
        Self {
            kty: Some("RSA".into()),
            kid,
            n: Some(n.into()),
            e: Some(e.into()),
            ..Self::default()
        }
    }

    /// EC public key from the curve name and the Base64URL-encoded `x` and `y`
    /// coordinates, along with an optional (but recommended) key ID.
    pub fn new_ec(
        crv: impl Into<String>,
        x: impl Into<String>,
        y: impl Into<String>,
        kid: Option<String>,
    ) -> Self {
        Self {
            kty: Some("EC".into()),
            kid,
            crv: Some(crv.into()),
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    /// Set the key ID
    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Set the advisory algorithm
    pub fn with_alg(mut self, alg: impl Into<String>) -> Self {
        self.alg = Some(alg.into());
        self
    }

    /// Set the key use ("sig" or "enc")
    pub fn with_key_use(mut self, key_use: impl Into<String>) -> Self {
        self.key_use = Some(key_use.into());
        self
    }

    pub fn kty(&self) -> Option<&str> {
        self.kty.as_deref()
    }

    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    pub fn key_use(&self) -> Option<&str> {
        self.key_use.as_deref()
    }

    pub fn n(&self) -> Option<&str> {
        self.n.as_deref()
    }

    pub fn e(&self) -> Option<&str> {
        self.e.as_deref()
    }

    pub fn crv(&self) -> Option<&str> {
        self.crv.as_deref()
    }

    pub fn x(&self) -> Option<&str> {
        self.x.as_deref()
    }

    pub fn y(&self) -> Option<&str> {
        self.y.as_deref()
    }
}

impl KeyRecord for Jwk {
    fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rsa() {
        let jwk = Jwk::new_rsa("abc", "AQAB", Some("k1".into()));
        assert_eq!(jwk.kty(), Some("RSA"));
        assert_eq!(jwk.kid(), Some("k1"));
        assert_eq!(jwk.n(), Some("abc"));
        assert_eq!(jwk.e(), Some("AQAB"));
        assert_eq!(jwk.crv(), None);
        assert_eq!(jwk.alg(), None);
    }

    #[test]
    fn test_new_ec() {
        let jwk = Jwk::new_ec("P-256", "xx", "yy", None);
        assert_eq!(jwk.kty(), Some("EC"));
        assert_eq!(jwk.kid(), None);
        assert_eq!(jwk.crv(), Some("P-256"));
        assert_eq!(jwk.x(), Some("xx"));
        assert_eq!(jwk.y(), Some("yy"));
        assert_eq!(jwk.n(), None);
    }

    #[test]
    fn test_builder_fields() {
        let jwk = Jwk::default()
            .with_kid("k2")
            .with_alg("RS256")
            .with_key_use("sig");
        assert_eq!(jwk.kid(), Some("k2"));
        assert_eq!(jwk.alg(), Some("RS256"));
        assert_eq!(jwk.key_use(), Some("sig"));
        assert_eq!(jwk.kty(), None);
    }

    #[test]
    fn test_empty_kid_is_declared() {
        let jwk = Jwk::default().with_kid("");
        assert_eq!(jwk.kid(), Some(""));
    }

    #[test]
    fn test_kid_through_smart_pointers() {
        fn owned_kid<K: KeyRecord>(key: K) -> Option<String> {
            key.kid().map(ToString::to_string)
        }

        let jwk = Jwk::default().with_kid("shared");
        assert_eq!(owned_kid(&jwk).as_deref(), Some("shared"));
        assert_eq!(owned_kid(Box::new(jwk.clone())).as_deref(), Some("shared"));
        assert_eq!(owned_kid(Rc::new(jwk.clone())).as_deref(), Some("shared"));
        assert_eq!(owned_kid(Arc::new(jwk)).as_deref(), Some("shared"));
    }
}
