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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use websign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads oauth1 credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `WEBSIGN_OAUTH_CONSUMER_KEY`: The consumer key
/// - `WEBSIGN_OAUTH_CONSUMER_SECRET`: The consumer secret
/// - `WEBSIGN_OAUTH_TOKEN`: The access token (optional)
/// - `WEBSIGN_OAUTH_TOKEN_SECRET`: The token secret (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let consumer_key = envs.get(WEBSIGN_OAUTH_CONSUMER_KEY);
        let consumer_secret = envs.get(WEBSIGN_OAUTH_CONSUMER_SECRET);

        match (consumer_key, consumer_secret) {
            (Some(ck), Some(cs)) => Ok(Some(Credential {
                consumer_key: ck.clone(),
                consumer_secret: cs.clone(),
                token: envs.get(WEBSIGN_OAUTH_TOKEN).cloned().unwrap_or_default(),
                token_secret: envs
                    .get(WEBSIGN_OAUTH_TOKEN_SECRET)
                    .cloned()
                    .unwrap_or_default(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use websign_core::StaticEnv;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (WEBSIGN_OAUTH_CONSUMER_KEY.to_string(), "ck".to_string()),
            (WEBSIGN_OAUTH_CONSUMER_SECRET.to_string(), "cs".to_string()),
            (WEBSIGN_OAUTH_TOKEN.to_string(), "tk".to_string()),
            (WEBSIGN_OAUTH_TOKEN_SECRET.to_string(), "ts".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.consumer_key, "ck");
        assert_eq!(cred.consumer_secret, "cs");
        assert_eq!(cred.token, "tk");
        assert_eq!(cred.token_secret, "ts");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        // Only the consumer key.
        let envs = HashMap::from([(WEBSIGN_OAUTH_CONSUMER_KEY.to_string(), "ck".to_string())]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
