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

use crate::encode::percent_encode;
use websign_core::utils::Redact;
use websign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the consumer and token key pairs.
#[derive(Default, Clone)]
pub struct Credential {
    /// Consumer key issued to the client application.
    pub consumer_key: String,
    /// Consumer secret paired with the consumer key.
    pub consumer_secret: String,
    /// Access token, empty when the request is signed without one.
    pub token: String,
    /// Token secret paired with the access token.
    pub token_secret: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}

impl Credential {
    /// HMAC key for this credential: `percentEncode(consumer_secret)&percentEncode(token_secret)`.
    ///
    /// The `&` is kept even when the token secret is empty.
    pub fn signing_key(&self) -> String {
        format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.token_secret)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key() {
        let cred = Credential {
            consumer_key: "ck".to_string(),
            consumer_secret: "consumer secret".to_string(),
            token: "tk".to_string(),
            token_secret: "t&s".to_string(),
        };
        assert_eq!(cred.signing_key(), "consumer%20secret&t%26s");

        let cred = Credential {
            consumer_secret: "cs".to_string(),
            ..Default::default()
        };
        assert_eq!(cred.signing_key(), "cs&");
    }

    #[test]
    fn test_is_valid() {
        assert!(!Credential::default().is_valid());
        let cred = Credential {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            ..Default::default()
        };
        assert!(cred.is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential {
            consumer_key: "consumer-key-0123456789".to_string(),
            consumer_secret: "consumer-secret-0123456789".to_string(),
            token: String::new(),
            token_secret: "short".to_string(),
        };
        let out = format!("{cred:?}");
        assert!(!out.contains("consumer-secret-0123456789"));
        assert!(out.contains("con***789"));
        assert!(out.contains("EMPTY"));
        assert!(out.contains("***"));
    }
}
