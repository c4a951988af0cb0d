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

use websign_core::time::{format_unix_timestamp, now, DateTime};

/// Seconds since the unix epoch of the current wall-clock time, as a decimal string.
///
/// Whole-second resolution, the same value SQL `current_timestamp()` would give.
pub fn make_timestamp() -> String {
    format_timestamp(now())
}

/// Format `t` as whole seconds since the unix epoch.
pub fn format_timestamp(t: DateTime) -> String {
    format_unix_timestamp(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use websign_core::time::parse_unix_timestamp;

    #[test]
    fn test_make_timestamp_is_whole_seconds() {
        let ts = make_timestamp();
        assert!(ts.chars().all(|c| c.is_ascii_digit()), "{ts}");
        let parsed = parse_unix_timestamp(&ts).expect("timestamp must parse");
        assert!((now() - parsed).num_seconds().abs() <= 1);
    }

    #[test]
    fn test_format_timestamp() {
        let t = parse_unix_timestamp("1000000000").unwrap();
        assert_eq!(format_timestamp(t), "1000000000");
    }
}
