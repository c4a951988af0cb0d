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

//! Signature base string construction.

use crate::constants::*;
use crate::encode::{encode_pair, percent_encode, KeyValuePair};
use websign_core::Logger;

/// OAuthParams carries the per-request protocol values shared by the
/// signature base and the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAuthParams<'a> {
    /// Consumer key issued to the client.
    pub consumer_key: &'a str,
    /// Access token, may be empty.
    pub token: &'a str,
    /// Single-use nonce, see [`crate::make_nonce`].
    pub nonce: &'a str,
    /// Seconds since the unix epoch as a decimal string.
    pub timestamp: &'a str,
}

impl<'a> OAuthParams<'a> {
    /// The six protocol parameters, `oauth_signature` excluded.
    pub(crate) fn protocol_pairs(&self) -> [(&'static str, &'a str); 6] {
        [
            (OAUTH_CONSUMER_KEY, self.consumer_key),
            (OAUTH_NONCE, self.nonce),
            (OAUTH_SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1),
            (OAUTH_TIMESTAMP, self.timestamp),
            (OAUTH_TOKEN, self.token),
            (OAUTH_VERSION, VERSION_1_0),
        ]
    }
}

/// Build the parameter string: every protocol and extra parameter encoded as
/// `key=value`, sorted and joined with `&`.
///
/// Pairs are ordered by their whole encoded text, byte-wise. This can differ
/// from a key-then-value ordering when one key is a prefix of another, for
/// example `a=2` sorts after `a-b=1` here.
pub fn make_parameter_string(params: &OAuthParams<'_>, extra_params: &[KeyValuePair]) -> String {
    let mut pairs: Vec<String> = params
        .protocol_pairs()
        .iter()
        .map(|(k, v)| encode_pair(k, v))
        .chain(extra_params.iter().map(KeyValuePair::encode))
        .collect();
    pairs.sort_unstable();
    pairs.join("&")
}

/// Build the signature base string
/// `METHOD&percentEncode(url)&percentEncode(parameter string)`.
///
/// `target_url` is encoded as opaque text without any validation. Both the
/// parameter string and the result are traced to `logger`.
pub fn make_signature_base(
    logger: &Logger,
    params: &OAuthParams<'_>,
    http_method: &str,
    target_url: &str,
    extra_params: &[KeyValuePair],
) -> String {
    let parameter_string = make_parameter_string(params, extra_params);
    logger.trace(format_args!("oauth1 parameter string: {parameter_string}"));

    let base = format!(
        "{}&{}&{}",
        http_method,
        percent_encode(target_url),
        percent_encode(&parameter_string)
    );
    logger.trace(format_args!("oauth1 signature base: {base}"));

    base
}
