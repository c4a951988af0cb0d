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

use crate::credential::Credential;
use crate::encode::KeyValuePair;
use crate::header::make_header;
use crate::nonce::make_nonce;
use crate::signature::sign_base64;
use crate::signature_base::{make_signature_base, OAuthParams};
use crate::timestamp::format_timestamp;
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderValue, Uri};
use log::debug;
use websign_core::time::{now, DateTime};
use websign_core::utils::Redact;
use websign_core::{Context, Result, SignRequest};

/// RequestSigner for OAuth 1.0a HMAC-SHA1 signature.
///
/// The request URI without its query is the signed target url. Query pairs
/// are decoded and signed as extra parameters, together with any pairs added
/// through [`RequestSigner::with_extra_params`] (form body fields, for example).
#[derive(Debug, Default)]
pub struct RequestSigner {
    extra_params: Vec<KeyValuePair>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new builder for oauth1 signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign these parameters in addition to the request's query pairs.
    pub fn with_extra_params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<KeyValuePair>,
    {
        self.extra_params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Ok(());
        };

        let nonce = make_nonce(ctx)?;
        let timestamp = format_timestamp(self.get_time());
        let params = OAuthParams {
            consumer_key: &cred.consumer_key,
            token: &cred.token,
            nonce: &nonce,
            timestamp: &timestamp,
        };

        let (target_url, mut extra_params) = split_target(&req.uri);
        extra_params.extend(self.extra_params.iter().cloned());

        let base = make_signature_base(
            ctx.logger(),
            &params,
            req.method.as_str(),
            &target_url,
            &extra_params,
        );
        let signature = sign_base64(&base, &cred.signing_key());

        let mut header_value: HeaderValue = make_header(&params, &signature).parse()?;
        header_value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, header_value);

        debug!(
            "signed {} {} for consumer {}",
            req.method,
            target_url,
            Redact::from(&cred.consumer_key)
        );
        Ok(())
    }
}

/// Split `uri` into the target url (scheme, authority and path) and its
/// decoded query pairs.
fn split_target(uri: &Uri) -> (String, Vec<KeyValuePair>) {
    let mut url = String::new();
    if let Some(scheme) = uri.scheme_str() {
        url.push_str(scheme);
        url.push_str("://");
    }
    if let Some(authority) = uri.authority() {
        url.push_str(authority.as_str());
    }
    url.push_str(uri.path());

    let query = uri
        .query()
        .map(|v| {
            form_urlencoded::parse(v.as_bytes())
                .map(|(k, v)| KeyValuePair::new(k, v))
                .collect()
        })
        .unwrap_or_default();

    (url, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use websign_core::time::parse_unix_timestamp;
    use websign_core::SecureRandom;

    #[derive(Debug)]
    struct ZeroRandom;

    impl SecureRandom for ZeroRandom {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
            dest.fill(0);
            Ok(())
        }
    }

    fn credential() -> Credential {
        Credential {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            token: "tk".to_string(),
            token_secret: "ts".to_string(),
        }
    }

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::get(uri)
            .body(())
            .expect("request must build")
            .into_parts()
            .0
    }

    #[test]
    fn test_split_target() {
        let uri: Uri = "https://api.example.com:8443/1/items?b=2&a=hello%20world&c=x+y"
            .parse()
            .unwrap();
        let (url, query) = split_target(&uri);

        assert_eq!(url, "https://api.example.com:8443/1/items");
        assert_eq!(
            query,
            vec![
                KeyValuePair::new("b", "2"),
                KeyValuePair::new("a", "hello world"),
                KeyValuePair::new("c", "x y"),
            ]
        );
    }

    #[tokio::test]
    async fn test_sign_request() -> anyhow::Result<()> {
        let ctx = Context::new().with_random(ZeroRandom);
        let signer = RequestSigner::new().with_time(parse_unix_timestamp("1000000000")?);

        let mut req = parts("http://example.com/resource?b=2&a=hello%20world");
        signer.sign_request(&ctx, &mut req, Some(&credential())).await?;

        let value = req.headers.get(AUTHORIZATION).expect("header must be set");
        assert!(value.is_sensitive());
        assert_eq!(
            value.to_str()?,
            r#"OAuth oauth_consumer_key="ck", oauth_nonce="AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA%3D", oauth_signature="6pqN6Nk2ZVYdN2GBlzNtxrfUQHw%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1000000000", oauth_token="tk", oauth_version="1.0""#
        );
        // The uri is left untouched.
        assert_eq!(req.uri, "http://example.com/resource?b=2&a=hello%20world");

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_extra_params_match_query() -> anyhow::Result<()> {
        let ctx = Context::new().with_random(ZeroRandom);
        let time = parse_unix_timestamp("1000000000")?;

        let mut from_query = parts("http://example.com/resource?b=2&a=hello%20world");
        RequestSigner::new()
            .with_time(time)
            .sign_request(&ctx, &mut from_query, Some(&credential()))
            .await?;

        let mut from_extra = parts("http://example.com/resource");
        RequestSigner::new()
            .with_time(time)
            .with_extra_params([("a", "hello world"), ("b", "2")])
            .sign_request(&ctx, &mut from_extra, Some(&credential()))
            .await?;

        assert_eq!(
            from_query.headers[AUTHORIZATION],
            from_extra.headers[AUTHORIZATION]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_credential() -> anyhow::Result<()> {
        let mut req = parts("http://example.com/resource");
        RequestSigner::new()
            .sign_request(&Context::new(), &mut req, None)
            .await?;

        assert!(req.headers.get(AUTHORIZATION).is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_random_source() {
        let mut req = parts("http://example.com/resource");
        let err = RequestSigner::new()
            .sign_request(&Context::new(), &mut req, Some(&credential()))
            .await
            .unwrap_err();

        assert!(err.is_random_source_error());
        assert!(req.headers.get(AUTHORIZATION).is_none());
    }
}
