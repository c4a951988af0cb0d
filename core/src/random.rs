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

use crate::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt::Debug;

/// SecureRandom supplies cryptographically secure random bytes.
///
/// Implementations must be safe to share between threads. Failures are
/// reported as [`crate::ErrorKind::RandomSource`] and never retried here.
pub trait SecureRandom: Debug + Send + Sync + 'static {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// OsRandom draws bytes from the operating system's secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            Error::random_source("operating system random source failed")
                .with_source(anyhow::Error::new(e))
        })
    }
}

/// NoopRandom is a no-op implementation that always returns an error.
///
/// This is used when no random source is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRandom;

impl SecureRandom for NoopRandom {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::random_source(
            "random bytes not supported: no random source configured",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.fill_bytes(&mut a).expect("os random must work");
        OsRandom.fill_bytes(&mut b).expect("os random must work");
        assert_ne!(a, b);
    }

    #[test]
    fn test_noop_random_fails() {
        let mut buf = [0u8; 4];
        let err = NoopRandom.fill_bytes(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RandomSource);
    }
}
