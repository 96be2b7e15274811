//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwkset=trace cargo run --example lookup -- 2024-01 unknown
//! ```
//!
//! Each argument is treated as the `kid` from a token header. Without
//! arguments the lookup runs once with no kid.

use jwkset::{Jwk, KeyRecord, KeySet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("{}=debug,jwkset=debug", env!("CARGO_CRATE_NAME")).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let set = KeySet::new(vec![
        Jwk::new_rsa("n-2024", "AQAB", Some("2024-01".into())).with_alg("RS256"),
        Jwk::new_ec("P-256", "x-2024", "y-2024", Some("2024-02".into())).with_alg("ES256"),
    ]);

    let kids: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<Option<&str>> = if kids.is_empty() {
        vec![None]
    } else {
        kids.iter().map(|kid| Some(kid.as_str())).collect()
    };

    for kid in queries {
        match set.resolve(kid) {
            Ok(jwk) => tracing::info!(
                kid = jwk.kid(),
                kty = jwk.kty(),
                alg = jwk.alg(),
                "resolved key"
            ),
            Err(e) => tracing::warn!("key resolution failed: {}", e),
        }
    }
}
