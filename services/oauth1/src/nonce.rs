// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use websign_core::hash::base64_url_encode;
use websign_core::{Context, Result};

/// Number of random bytes behind each nonce.
pub const NONCE_LEN: usize = 32;

/// Make a fresh nonce for one signing operation.
///
/// Draws [`NONCE_LEN`] bytes from the context's secure random source and
/// returns them in URL-safe base64. Padding is kept, callers must not rely
/// on a fixed length.
///
/// Fails with [`websign_core::ErrorKind::RandomSource`] when the random source
/// cannot supply bytes. No retry happens here.
pub fn make_nonce(ctx: &Context) -> Result<String> {
    let bytes = ctx.random_bytes(NONCE_LEN)?;
    Ok(base64_url_encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use websign_core::{Error, ErrorKind, OsRandom, SecureRandom};

    #[test]
    fn test_make_nonce_is_url_safe() {
        let ctx = Context::new().with_random(OsRandom);
        let nonce = make_nonce(&ctx).expect("nonce must be generated");

        // 32 bytes encode into 43 symbols plus one padding char.
        assert_eq!(nonce.len(), 44);
        assert!(nonce
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '='));
    }

    #[test]
    fn test_make_nonce_never_repeats() {
        let ctx = Context::new().with_random(OsRandom);
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let nonce = make_nonce(&ctx).expect("nonce must be generated");
            assert!(seen.insert(nonce), "nonce repeated");
        }
    }

    #[derive(Debug)]
    struct ExhaustedRandom;

    impl SecureRandom for ExhaustedRandom {
        fn fill_bytes(&self, _: &mut [u8]) -> websign_core::Result<()> {
            Err(Error::random_source("entropy exhausted"))
        }
    }

    #[test]
    fn test_make_nonce_surfaces_random_source_error() {
        let ctx = Context::new().with_random(ExhaustedRandom);
        let err = make_nonce(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RandomSource);
    }

    #[test]
    fn test_make_nonce_without_random_source() {
        let err = make_nonce(&Context::new()).unwrap_err();
        assert!(err.is_random_source_error());
    }
}
