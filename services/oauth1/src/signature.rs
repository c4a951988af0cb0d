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

//! HMAC-SHA1 signing of the signature base string.
//!
//! The secret is used verbatim as the HMAC key. Joining consumer and token
//! secrets is the caller's job, see [`crate::Credential::signing_key`].

use std::fmt::{self, Debug};
use websign_core::hash::{base64_encode, hex_encode, hmac_sha1};

/// Length of an HMAC-SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Digest is the raw HMAC-SHA1 output over a signature base.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Standard base64 form with padding.
    pub fn to_base64(&self) -> String {
        base64_encode(&self.0)
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.to_hex()).finish()
    }
}

/// Compute HMAC-SHA1 over `base` keyed with `secret`.
pub fn sign(base: &str, secret: &str) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hmac_sha1(secret.as_bytes(), base.as_bytes()));
    Digest(out)
}

/// HMAC-SHA1 signature in lowercase hex.
pub fn sign_hex(base: &str, secret: &str) -> String {
    sign(base, secret).to_hex()
}

/// HMAC-SHA1 signature in standard base64.
pub fn sign_base64(base: &str, secret: &str) -> String {
    sign(base, secret).to_base64()
}
