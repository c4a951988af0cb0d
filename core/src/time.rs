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

//! Time related utils.

use crate::Error;
use crate::Result;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format time into unix timestamp in whole seconds: `1000000000`
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Parse unix timestamp in whole seconds into DateTime.
pub fn parse_unix_timestamp(s: &str) -> Result<DateTime> {
    let secs: i64 = s.parse().map_err(|e| {
        Error::unexpected(format!("parse unix timestamp failed: {s}"))
            .with_source(anyhow::Error::new(e))
    })?;

    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::unexpected(format!("unix timestamp out of range: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_timestamp() {
        let t = parse_unix_timestamp("1000000000").expect("must parse");
        assert_eq!(t.to_rfc3339(), "2001-09-09T01:46:40+00:00");
        assert_eq!(format_unix_timestamp(t), "1000000000");
    }

    #[test]
    fn test_parse_unix_timestamp_rejects_garbage() {
        assert!(parse_unix_timestamp("yesterday").is_err());
    }
}
