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

//! `Authorization` header assembly.

use crate::constants::{AUTHORIZATION_SCHEME, OAUTH_SIGNATURE};
use crate::encode::encode_pair_quoted;
use crate::signature_base::OAuthParams;
use std::iter;

/// Render the `Authorization` header value.
///
/// The seven protocol pairs are percent-encoded, double-quoted, sorted by
/// their whole text and joined with `", "`:
///
/// ```text
/// OAuth oauth_consumer_key="..", oauth_nonce="..", oauth_signature="..", oauth_signature_method="HMAC-SHA1", oauth_timestamp="..", oauth_token="..", oauth_version="1.0"
/// ```
pub fn make_header(params: &OAuthParams<'_>, signature: &str) -> String {
    let mut pairs: Vec<String> = params
        .protocol_pairs()
        .iter()
        .map(|(k, v)| encode_pair_quoted(k, v))
        .chain(iter::once(encode_pair_quoted(OAUTH_SIGNATURE, signature)))
        .collect();
    pairs.sort_unstable();

    format!("{AUTHORIZATION_SCHEME}{}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_make_header() {
        let params = OAuthParams {
            consumer_key: "ck",
            token: "tk",
            nonce: "nnn",
            timestamp: "1000000000",
        };

        assert_eq!(
            make_header(&params, "3L8eSp5wcgfhlqKDSEUEe0J+9Lc="),
            r#"OAuth oauth_consumer_key="ck", oauth_nonce="nnn", oauth_signature="3L8eSp5wcgfhlqKDSEUEe0J%2B9Lc%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1000000000", oauth_token="tk", oauth_version="1.0""#
        );
    }

    #[test]
    fn test_make_header_order_is_fixed() {
        // Values chosen so that sorting by value would scramble the order.
        let params = OAuthParams {
            consumer_key: "zzz",
            token: "aaa",
            nonce: "~~~",
            timestamp: "0",
        };

        let header = make_header(&params, "");
        let keys: Vec<&str> = header
            .trim_start_matches("OAuth ")
            .split(", ")
            .map(|p| p.split_once('=').expect("pair must contain '='").0)
            .collect();

        assert_eq!(
            keys,
            vec![
                "oauth_consumer_key",
                "oauth_nonce",
                "oauth_signature",
                "oauth_signature_method",
                "oauth_timestamp",
                "oauth_token",
                "oauth_version",
            ]
        );
    }

    #[test]
    fn test_make_header_encodes_before_quoting() {
        let params = OAuthParams {
            consumer_key: "key with \"quotes\"",
            token: "",
            nonce: "a,b",
            timestamp: "1",
        };

        let header = make_header(&params, "sig");
        assert!(header.contains(r#"oauth_consumer_key="key%20with%20%22quotes%22""#));
        assert!(header.contains(r#"oauth_nonce="a%2Cb""#));
        assert!(header.contains(r#"oauth_token="""#));
    }
}
