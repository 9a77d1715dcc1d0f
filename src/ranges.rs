// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ipv4::{ipv4_to_u32, is_legal_ipv4},
    ipv6::{ipv6_to_u128, is_legal_ipv6},
    strings::*,
    structs::IpFam,
    AddressError,
};
use std::cmp::Ordering;

/**
Checks whether `mask` is a legal IPv4 subnet mask: four strict decimal
octets (no leading zeros) whose combined bit pattern is a contiguous
run of ones followed by a contiguous run of zeros.

```
use addrutils::is_legal_mask;

assert!(is_legal_mask("255.255.255.0"));
assert!(is_legal_mask("0.0.0.0"));
assert!(!is_legal_mask("255.0.255.0"));
assert!(!is_legal_mask("255.255.255.016"));
```
*/
pub fn is_legal_mask(mask: &str) -> bool {
    if is_blank(mask) {
        return false;
    }
    let parts: Vec<&str> = mask.trim().split(DOT).collect();
    if parts.len() != 4 {
        return false;
    }

    let mut value: u32 = 0;
    for part in parts {
        if part.len() > 1 && part.starts_with('0') {
            return false;
        }
        let octet: u32 = match part.parse::<u8>() {
            Ok(o) => o as u32,
            Err(_) => return false,
        };
        value = value << 8 | octet;
    }

    // contiguous ones then zeros, checked with exact bit arithmetic
    value.leading_ones() + value.trailing_zeros() == 32
}

/// Address family of a legal IP string, None if it is neither family.
pub fn family_of(ip: &str) -> Option<IpFam> {
    if is_legal_ipv4(ip) {
        Some(IpFam::V4)
    } else if is_legal_ipv6(ip) {
        Some(IpFam::V6)
    } else {
        None
    }
}

/// Whether both strings are legal IPv4 addresses or both legal IPv6
/// addresses. Illegal input on either side yields false.
pub fn same_address_family(a: &str, b: &str) -> bool {
    match (family_of(a), family_of(b)) {
        (Some(fa), Some(fb)) => fa == fb,
        _ => false,
    }
}

/**
Total-order comparison of two same-family IP strings.

### Errors
Fails with [AddressError::Mismatch] if the operands are of different
families or either is not a legal address. A cross-family comparison is
a contract violation, not an "out of range" answer, so it surfaces as
an error instead of a silent boolean.
*/
pub fn compare_ip(a: &str, b: &str) -> Result<Ordering, AddressError> {
    match (family_of(a), family_of(b)) {
        (Some(IpFam::V4), Some(IpFam::V4)) => Ok(ipv4_to_u32(a).cmp(&ipv4_to_u32(b))),
        (Some(IpFam::V6), Some(IpFam::V6)) => Ok(ipv6_to_u128(a).cmp(&ipv6_to_u128(b))),
        _ => Err(AddressError::Mismatch(a.to_string(), b.to_string())),
    }
}

/**
Whether `ip` lies in the inclusive range [`beg`, `end`].

A missing or blank bound defaults to the other one, turning the range
into a single point; both bounds missing is an error.

```
use addrutils::ip_in_range;

assert!(ip_in_range("192.168.1.4", Some("192.168.1.2"), Some("192.168.1.5")).unwrap());
assert!(!ip_in_range("192.168.1.1", Some("192.168.1.3"), Some("192.168.1.5")).unwrap());
assert!(ip_in_range("192.168.1.2", Some("192.168.1.2"), None).unwrap());
```

### Errors
- [AddressError::EmptyRange] if neither bound is given
- [AddressError::Mismatch] if `ip` and a bound are not the same family
  (or any operand is illegal)
*/
pub fn ip_in_range(
    ip: &str,
    beg: Option<&str>,
    end: Option<&str>,
) -> Result<bool, AddressError> {
    let beg: Option<&str> = beg.filter(|s| !is_blank(s));
    let end: Option<&str> = end.filter(|s| !is_blank(s));

    let (beg, end) = match (beg, end) {
        (Some(b), Some(e)) => (b, e),
        (Some(b), None) => (b, b),
        (None, Some(e)) => (e, e),
        (None, None) => return Err(AddressError::EmptyRange),
    };

    // evaluate both comparisons before answering, so a mismatched end
    // bound is an error even when the start bound already excludes ip
    let at_or_after_beg: bool = compare_ip(ip, beg)? != Ordering::Less;
    let at_or_before_end: bool = compare_ip(ip, end)? != Ordering::Greater;
    Ok(at_or_after_beg && at_or_before_end)
}

/**
Whether `ip` lies in a textual range such as `192.168.1.2-192.168.1.5`.

`range` is split on `delimiter` into one or two bounds (trimmed); a
single bound is a single-point range. Delegates to [ip_in_range].

### Errors
- [AddressError::InvalidRangeFmt] on a blank range or more than two bounds
- the [ip_in_range] errors
*/
pub fn ip_in_delimited_range(
    ip: &str,
    range: &str,
    delimiter: &str,
) -> Result<bool, AddressError> {
    if is_blank(range) {
        return Err(AddressError::InvalidRangeFmt(range.to_string()));
    }
    let bounds: Vec<&str> = range.trim().split(delimiter).map(str::trim).collect();
    match bounds.as_slice() {
        [only] => ip_in_range(ip, Some(only), None),
        [beg, end] => ip_in_range(ip, Some(beg), Some(end)),
        _ => Err(AddressError::InvalidRangeFmt(range.to_string())),
    }
}

/* -------------------------------------------------------------------------- */
