// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static COLON: &str = ":";
pub(crate) static DASH: &str = "-";
pub(crate) static SLASH: &str = "/";
pub(crate) static DOUBLE_COLON: &str = "::";

// ipv4.rs / ipv6.rs
pub(crate) static ERR_INVALID_IP: &str = "not a legal IP address";
pub(crate) static ERR_INVALID_V4: &str = "not a legal IPv4 address";
pub(crate) static ERR_INVALID_MASK: &str = "not a legal IPv4 address or prefix length";
pub(crate) static ERR_ADDR_SPACE: &str = "address arithmetic left the 32-bit address space";

// mac.rs
pub(crate) static ERR_INVALID_MAC: &str = "not a legal MAC address";

// ranges.rs
pub(crate) static ERR_RNG_EMPTY: &str = "range has no bounds";
pub(crate) static ERR_RNG_FMT: &str = "invalid range format";
pub(crate) static ERR_MISMATCH: &str = "cannot compare IPv4 and IPv6 addresses";

// resolve.rs
pub(crate) static ERR_RESOLVE: &str = "host name resolution failed";
pub(crate) static ERR_BLANK_HOST: &str = "host name is blank";

/// Whether a string is empty or whitespace-only.
#[inline]
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
