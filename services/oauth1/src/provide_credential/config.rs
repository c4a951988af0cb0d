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

use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use websign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider builds credentials from an explicit [`Config`].
///
/// Env values are not consulted, chain this provider with
/// [`crate::EnvCredentialProvider`] or call [`Config::from_env`] first.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(ck), Some(cs)) = (&self.config.consumer_key, &self.config.consumer_secret)
        else {
            return Ok(None);
        };

        Ok(Some(Credential {
            consumer_key: ck.clone(),
            consumer_secret: cs.clone(),
            token: self.config.token.clone().unwrap_or_default(),
            token_secret: self.config.token_secret.clone().unwrap_or_default(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_credential_provider() -> anyhow::Result<()> {
        let config = Config {
            consumer_key: Some("ck".to_string()),
            consumer_secret: Some("cs".to_string()),
            token: Some("tk".to_string()),
            token_secret: None,
        };

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&Context::new())
            .await?
            .unwrap();
        assert_eq!(cred.consumer_key, "ck");
        assert_eq!(cred.token, "tk");
        assert_eq!(cred.token_secret, "");

        let cred = ConfigCredentialProvider::new(Arc::new(Config::default()))
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
