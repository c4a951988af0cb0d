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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Env value holding the consumer key.
pub const WEBSIGN_OAUTH_CONSUMER_KEY: &str = "WEBSIGN_OAUTH_CONSUMER_KEY";
/// Env value holding the consumer secret.
pub const WEBSIGN_OAUTH_CONSUMER_SECRET: &str = "WEBSIGN_OAUTH_CONSUMER_SECRET";
/// Env value holding the access token.
pub const WEBSIGN_OAUTH_TOKEN: &str = "WEBSIGN_OAUTH_TOKEN";
/// Env value holding the token secret.
pub const WEBSIGN_OAUTH_TOKEN_SECRET: &str = "WEBSIGN_OAUTH_TOKEN_SECRET";

// Protocol parameter names.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

// Fixed protocol values.
pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";
pub const VERSION_1_0: &str = "1.0";

/// Scheme prefix of the `Authorization` header value.
pub const AUTHORIZATION_SCHEME: &str = "OAuth ";

/// AsciiSet for [RFC 3986 unreserved characters](https://datatracker.ietf.org/doc/html/rfc3986#section-2.3)
///
/// - Percent encode every byte except 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Space always becomes `%20`, never `+`.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
