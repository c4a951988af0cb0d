//! OAuth 1.0a HMAC-SHA1 signing implementation for websign.
//!
//! This crate computes the `Authorization` header for outbound requests to
//! APIs that authenticate with OAuth 1.0a signatures.
//!
//! ## Overview
//!
//! Signing happens in stateless stages:
//!
//! 1. [`make_nonce`] and [`make_timestamp`] produce the per-request values.
//! 2. [`make_signature_base`] encodes, sorts and joins every protocol and extra
//!    parameter into the signature base string.
//! 3. [`sign_base64`] (or [`sign_hex`]) computes HMAC-SHA1 over the base with a
//!    caller-supplied key, usually [`Credential::signing_key`].
//! 4. [`make_header`] renders the final header value.
//!
//! Every stage is a pure function apart from the random draw behind the nonce
//! and optional trace logging, so all of them are safe to call concurrently.
//!
//! ## Percent-encoding
//!
//! Only `[A-Za-z0-9-_.~]` pass through unchanged. Space is always `%20`.
//!
//! ## Parameter ordering
//!
//! Pairs are sorted by their whole encoded `key=value` text, not by key then
//! value. Both orders agree unless one key is a prefix of another key, in
//! which case a verifier using key-then-value ordering will compute a different
//! base string.
//!
//! ## Quick Start
//!
//! ```no_run
//! use websign_core::{Context, OsEnv, OsRandom, Signer};
//! use websign_oauth1::{RequestSigner, StaticCredentialProvider};
//!
//! # async fn example() -> websign_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv).with_random(OsRandom);
//!
//! let loader = StaticCredentialProvider::new("consumer_key", "consumer_secret")
//!     .with_token("token", "token_secret");
//! let signer = Signer::new(ctx, loader, RequestSigner::new());
//!
//! let mut req = http::Request::get("https://api.example.com/1/items?page=2")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the stages directly
//!
//! ```
//! use websign_core::{Context, Logger, OsRandom};
//! use websign_oauth1::{make_header, make_nonce, make_signature_base, make_timestamp, sign_base64, KeyValuePair, OAuthParams};
//!
//! let ctx = Context::new().with_random(OsRandom);
//! let nonce = make_nonce(&ctx).unwrap();
//! let timestamp = make_timestamp();
//! let params = OAuthParams {
//!     consumer_key: "ck",
//!     token: "tk",
//!     nonce: &nonce,
//!     timestamp: &timestamp,
//! };
//!
//! let extra = [KeyValuePair::new("status", "hello world")];
//! let base = make_signature_base(ctx.logger(), &params, "POST", "https://api.example.com/1/statuses", &extra);
//! let signature = sign_base64(&base, "consumer_secret&token_secret");
//! let header = make_header(&params, &signature);
//! assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\", "));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{
    OAUTH_ENCODE_SET, WEBSIGN_OAUTH_CONSUMER_KEY, WEBSIGN_OAUTH_CONSUMER_SECRET,
    WEBSIGN_OAUTH_TOKEN, WEBSIGN_OAUTH_TOKEN_SECRET,
};

mod encode;
pub use encode::{encode_pair, encode_pair_quoted, find_value, percent_encode, KeyValuePair};

mod nonce;
pub use nonce::{make_nonce, NONCE_LEN};

mod timestamp;
pub use timestamp::{format_timestamp, make_timestamp};

mod signature_base;
pub use signature_base::{make_parameter_string, make_signature_base, OAuthParams};

mod signature;
pub use signature::{sign, sign_base64, sign_hex, Digest, DIGEST_LEN};

mod header;
pub use header::make_header;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
