// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

// Compiled once per process and shared read-only thereafter.
// All patterns are anchored; validators match the whole (trimmed) input.
lazy_static! {
    /// Four dot-separated decimal octets, 0-255. Lenient about leading
    /// zeros ("010.1.1.1" is accepted and normalizes on round-trip).
    pub(crate) static ref IPV4: Regex = Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    ).unwrap();

    /// Uncompressed 8-group IPv6 form only.
    pub(crate) static ref IPV6_STANDARD: Regex =
        Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").unwrap();

    /// Single 1-4 digit hex group.
    pub(crate) static ref HEX_GROUP: Regex = Regex::new(r"^[0-9a-fA-F]{1,4}$").unwrap();

    /// First run of >=2 consecutive all-zero groups in a fully expanded
    /// rendering, for `::` compression.
    pub(crate) static ref ZERO_RUN: Regex = Regex::new(r"(^|:)(0+(:|$)){2,8}").unwrap();

    /// Six 1-2 digit hex groups, uniformly colon- or hyphen-delimited.
    pub(crate) static ref MAC6: Regex = Regex::new(
        r"^(?:(?:[0-9a-fA-F]{1,2}:){5}[0-9a-fA-F]{1,2}|(?:[0-9a-fA-F]{1,2}-){5}[0-9a-fA-F]{1,2})$"
    ).unwrap();

    /// Strict colon-delimited six-group form (normalization input).
    pub(crate) static ref MAC6_COLON: Regex =
        Regex::new(r"^(?:[0-9a-fA-F]{1,2}:){5}[0-9a-fA-F]{1,2}$").unwrap();

    /// Hyphen-delimited MAC with a hyphen-delimited mask: `mac/mac`.
    pub(crate) static ref MAC6_WITH_MASK: Regex = Regex::new(
        r"^(?:[0-9a-fA-F]{1,2}-){5}[0-9a-fA-F]{1,2}/(?:[0-9a-fA-F]{1,2}-){5}[0-9a-fA-F]{1,2}$"
    ).unwrap();

    /// Cisco-style three-group MAC: `xxxx-xxxx-xxxx`.
    pub(crate) static ref MAC3: Regex =
        Regex::new(r"^(?:[0-9a-fA-F]{1,4}-){2}[0-9a-fA-F]{1,4}$").unwrap();

    /// Three-group MAC with mask: `mac3/mac3`.
    pub(crate) static ref MAC3_WITH_MASK: Regex = Regex::new(
        r"^(?:[0-9a-fA-F]{1,4}-){2}[0-9a-fA-F]{1,4}/(?:[0-9a-fA-F]{1,4}-){2}[0-9a-fA-F]{1,4}$"
    ).unwrap();
}
