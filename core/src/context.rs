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

use crate::{Env, Logger, NoopEnv, NoopRandom, Result, SecureRandom};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the collaborators used during request signing.
///
/// ## Important
///
/// websign provides NO default environment or random source. Users MUST configure
/// the components they need. Any unconfigured component will use a no-op
/// implementation that returns errors or empty values when called. The logger
/// defaults to forwarding into the `log` facade.
///
/// ## Example
///
/// ```
/// use websign_core::{Context, OsEnv, OsRandom};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_random(OsRandom);
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    random: Arc<dyn SecureRandom>,
    logger: Logger,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("random", &self.random)
            .field("logger", &self.logger)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    ///
    /// Use the `with_*` methods to configure the components you need.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            random: Arc::new(NoopRandom),
            logger: Logger::default(),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the secure random source.
    pub fn with_random(mut self, random: impl SecureRandom) -> Self {
        self.random = Arc::new(random);
        self
    }

    /// Replace the diagnostic logger.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }

    /// Draw `n` bytes from the secure random source.
    pub fn random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0; n];
        self.random.fill_bytes(&mut buf)?;
        Ok(buf)
    }

    /// The diagnostic logger.
    #[inline]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
