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

//! Canonical percent-encoding of protocol parameters.

use crate::constants::OAUTH_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

/// Percent-encode `s`, keeping only `[A-Za-z0-9-_.~]` as-is.
///
/// Every other byte of the utf-8 input becomes `%XX` with uppercase hex.
/// Space is encoded as `%20`.
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, &OAUTH_ENCODE_SET).to_string()
}

/// Format `key=value` with both sides percent-encoded.
pub fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", percent_encode(key), percent_encode(value))
}

/// Format `key="value"` with both sides percent-encoded before quoting.
pub fn encode_pair_quoted(key: &str, value: &str) -> String {
    format!("{}=\"{}\"", percent_encode(key), percent_encode(value))
}

/// KeyValuePair is one extra request parameter taking part in the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyValuePair {
    /// Parameter name, not encoded.
    pub key: String,
    /// Parameter value, not encoded.
    pub value: String,
}

impl KeyValuePair {
    /// Create a new pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Encoded `key=value` form of this pair.
    pub fn encode(&self) -> String {
        encode_pair(&self.key, &self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValuePair {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Find the value of the first pair named `key`.
pub fn find_value<'a>(pairs: &'a [KeyValuePair], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|p| p.key == key)
        .map(|p| p.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", ""; "empty")]
    #[test_case("abcXYZ019", "abcXYZ019"; "alphanumeric")]
    #[test_case("-_.~", "-_.~"; "unreserved marks")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("a+b", "a%2Bb"; "plus")]
    #[test_case("!*'();:@&=$,/?#[]", "%21%2A%27%28%29%3B%3A%40%26%3D%24%2C%2F%3F%23%5B%5D"; "reserved")]
    #[test_case("é", "%C3%A9"; "two byte utf8")]
    #[test_case("☃", "%E2%98%83"; "three byte utf8")]
    #[test_case("http://example.com/resource", "http%3A%2F%2Fexample.com%2Fresource"; "url")]
    fn test_percent_encode(input: &str, expected: &str) {
        assert_eq!(percent_encode(input), expected);
    }

    #[test]
    fn test_percent_encode_every_ascii_byte() {
        for b in 0u8..=127 {
            let input = (b as char).to_string();
            let output = percent_encode(&input);
            if b.is_ascii_alphanumeric() || b"-_.~".contains(&b) {
                assert_eq!(output, input);
            } else {
                assert_eq!(output, format!("%{:02X}", b));
            }
        }
    }

    #[test]
    fn test_encode_pair() {
        assert_eq!(encode_pair("oauth_token", "a b"), "oauth_token=a%20b");
        assert_eq!(encode_pair("", ""), "=");
        assert_eq!(encode_pair("k=1", "v&2"), "k%3D1=v%262");
    }

    #[test]
    fn test_encode_pair_quoted() {
        assert_eq!(
            encode_pair_quoted("oauth_signature", "3L8e/9Lc="),
            "oauth_signature=\"3L8e%2F9Lc%3D\""
        );
        assert_eq!(encode_pair_quoted("k", ""), "k=\"\"");
    }

    #[test]
    fn test_key_value_pair() {
        let pairs: Vec<KeyValuePair> =
            vec![("a", "1").into(), ("b", "2").into(), ("a", "3").into()];
        assert_eq!(pairs[1].encode(), "b=2");
        assert_eq!(find_value(&pairs, "a"), Some("1"));
        assert_eq!(find_value(&pairs, "c"), None);
    }
}
