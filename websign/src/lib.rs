#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use websign_core::*;

#[cfg(feature = "oauth1")]
pub mod oauth1 {
    //! OAuth 1.0a HMAC-SHA1 signing.
    pub use websign_oauth1::*;
}
