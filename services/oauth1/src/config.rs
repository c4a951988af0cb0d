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

use super::constants::*;
use websign_core::Context;

/// Config carries all the configuration for oauth1 signing.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIGN_OAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIGN_OAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIGN_OAUTH_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIGN_OAUTH_TOKEN_SECRET`]
    pub token_secret: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(WEBSIGN_OAUTH_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIGN_OAUTH_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIGN_OAUTH_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(WEBSIGN_OAUTH_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use websign_core::StaticEnv;

    #[test]
    fn test_from_env_keeps_explicit_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (WEBSIGN_OAUTH_CONSUMER_KEY.to_string(), "env_key".to_string()),
                (WEBSIGN_OAUTH_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
                (WEBSIGN_OAUTH_TOKEN.to_string(), "env_token".to_string()),
            ]),
        });

        let cfg = Config {
            consumer_key: Some("explicit_key".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(cfg.consumer_key.as_deref(), Some("explicit_key"));
        assert_eq!(cfg.consumer_secret.as_deref(), Some("env_secret"));
        assert_eq!(cfg.token.as_deref(), Some("env_token"));
        assert_eq!(cfg.token_secret, None);
    }
}
