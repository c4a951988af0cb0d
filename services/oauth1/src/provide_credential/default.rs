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

use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use websign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Explicit [`Config`] values
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use websign_oauth1::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::default()
    ///     .push_front(StaticCredentialProvider::new("consumer_key", "consumer_secret"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use std::collections::HashMap;
    use websign_core::StaticEnv;

    fn env_ctx() -> Context {
        Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (WEBSIGN_OAUTH_CONSUMER_KEY.to_string(), "env_key".to_string()),
                (WEBSIGN_OAUTH_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
            ]),
        })
    }

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let loader = DefaultCredentialProvider::default();
        let credential = loader.provide_credential(&Context::new()).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let loader = DefaultCredentialProvider::default();
        let credential = loader.provide_credential(&env_ctx()).await.unwrap().unwrap();

        assert_eq!("env_key", credential.consumer_key);
        assert_eq!("env_secret", credential.consumer_secret);
    }

    #[tokio::test]
    async fn test_default_loader_prefers_config() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = Config {
            consumer_key: Some("config_key".to_string()),
            consumer_secret: Some("config_secret".to_string()),
            ..Default::default()
        };
        let loader = DefaultCredentialProvider::new(Arc::new(config));
        let credential = loader.provide_credential(&env_ctx()).await.unwrap().unwrap();

        assert_eq!("config_key", credential.consumer_key);
    }

    #[tokio::test]
    async fn test_default_loader_push_front() {
        let _ = env_logger::builder().is_test(true).try_init();

        let loader = DefaultCredentialProvider::default()
            .push_front(StaticCredentialProvider::new("static_key", "static_secret"));
        let credential = loader.provide_credential(&env_ctx()).await.unwrap().unwrap();

        assert_eq!("static_key", credential.consumer_key);
    }
}
