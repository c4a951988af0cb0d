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

use crate::Credential;
use async_trait::async_trait;
use websign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides static oauth1 credentials.
///
/// This provider is used when the consumer key pair (and optionally the token
/// pair) are known up front and need no dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with consumer key and consumer secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            token: String::new(),
            token_secret: String::new(),
        }
    }

    /// Set the access token and its secret.
    pub fn with_token(mut self, token: &str, token_secret: &str) -> Self {
        self.token = token.to_string();
        self.token_secret = token_secret.to_string();
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            token: self.token.clone(),
            token_secret: self.token_secret.clone(),
        }))
    }
}
