// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{patterns, strings::*, structs::IpClass, AddressError, IP_INVALID};

/**
Checks whether `ip` is a legal dotted-decimal IPv4 address.

Surrounding whitespace is ignored; blank input is not legal. The octet
grammar is lenient about leading zeros ("010.1.1.1" is accepted).

```
use addrutils::is_legal_ipv4;

assert!(is_legal_ipv4("192.168.0.1"));
assert!(!is_legal_ipv4(" "));
assert!(!is_legal_ipv4("256.1.2.3"));
assert!(!is_legal_ipv4("192.0."));
```
*/
pub fn is_legal_ipv4(ip: &str) -> bool {
    !is_blank(ip) && patterns::IPV4.is_match(ip.trim())
}

/**
Convert a dotted-decimal IPv4 string to its packed big-endian `u32`.

Returns [IP_INVALID] (0) for illegal input instead of failing, so bulk
callers can validate and convert in one step.

```
use addrutils::ipv4_to_u32;

assert_eq!(ipv4_to_u32("192.168.0.1"), 3232235521);
assert_eq!(ipv4_to_u32("256.168.0.1"), 0);
```
*/
pub fn ipv4_to_u32(ip: &str) -> u32 {
    if !is_legal_ipv4(ip) {
        return IP_INVALID;
    }
    packed_octets(ip.trim()).unwrap_or(IP_INVALID)
}

/// Fold validated octets into a packed value. None on a parse failure,
/// which the validator should have made impossible.
fn packed_octets(ip: &str) -> Option<u32> {
    let mut value: u32 = 0;
    for part in ip.split(DOT) {
        value = value << 8 | part.parse::<u32>().ok()?;
    }
    Some(value)
}

/**
Render a packed `u32` as a canonical dotted-decimal IPv4 string.

Total over the whole `u32` domain; `0` renders as `0.0.0.0`.
*/
pub fn u32_to_ipv4(value: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        value >> 24 & 255,
        value >> 16 & 255,
        value >> 8 & 255,
        value & 255
    )
}

/**
Classful-addressing class of a legal IPv4 address.

The class is a pure function of the first octet's leading one-bits:
`0xxxxxxx` A, `10xxxxxx` B, `110xxxxx` C, `1110xxxx` D, `1111xxxx` E.

### Errors
Fails with [AddressError::InvalidV4] if `ip` is not a legal IPv4 string.
*/
pub fn class_of_ipv4(ip: &str) -> Result<IpClass, AddressError> {
    if !is_legal_ipv4(ip) {
        return Err(AddressError::InvalidV4(ip.to_string()));
    }
    let first: u8 = (ipv4_to_u32(ip) >> 24) as u8;
    Ok(match first.leading_ones() {
        0 => IpClass::A,
        1 => IpClass::B,
        2 => IpClass::C,
        3 => IpClass::D,
        _ => IpClass::E,
    })
}

/**
Compare two IPv4 strings by packed value: the sign of `a - b`.

Positive when `a > b`, zero when equal, negative when `a < b`. Illegal
operands convert to the [IP_INVALID] sentinel and compare as 0.
*/
pub fn compare_ipv4(a: &str, b: &str) -> i64 {
    ipv4_to_u32(a) as i64 - ipv4_to_u32(b) as i64
}

/// Distance from `beg` to `end` in addresses: `end - beg`, negative
/// when the bounds are reversed.
pub fn range_between_ipv4(beg: &str, end: &str) -> i64 {
    ipv4_to_u32(end) as i64 - ipv4_to_u32(beg) as i64
}

/**
Network (subnet) address of `ip` under `mask`: the octet-wise AND.

### Errors
Fails with [AddressError::InvalidV4] if either operand is not a legal
IPv4 string. Mask contiguity is not checked here; see
[crate::is_legal_mask] for that.
*/
pub fn subnet_address(ip: &str, mask: &str) -> Result<String, AddressError> {
    if !is_legal_ipv4(ip) {
        return Err(AddressError::InvalidV4(ip.to_string()));
    }
    if !is_legal_ipv4(mask) {
        return Err(AddressError::InvalidV4(mask.to_string()));
    }
    Ok(u32_to_ipv4(ipv4_to_u32(ip) & ipv4_to_u32(mask)))
}

/**
First usable host address of a subnet: the subnet address plus one.

### Errors
Fails with [AddressError::InvalidV4] on illegal input and with
[AddressError::AddrSpace] if the increment leaves the 32-bit space
(`255.255.255.255` has no successor).
*/
pub fn first_usable_address(subnet: &str) -> Result<String, AddressError> {
    if !is_legal_ipv4(subnet) {
        return Err(AddressError::InvalidV4(subnet.to_string()));
    }
    let next: u32 = ipv4_to_u32(subnet)
        .checked_add(1)
        .ok_or_else(|| AddressError::AddrSpace(subnet.to_string()))?;
    Ok(u32_to_ipv4(next))
}

/**
Number of one-bits in an IPv4 mask string, i.e. the prefix length for a
contiguous mask.

A bare prefix number ("24") is accepted as-is, so callers can feed
either representation of a netmask through the same path.

### Errors
Fails with [AddressError::InvalidMask] if `mask` is neither a legal
IPv4 string nor a plain number.
*/
pub fn mask_to_prefix_len(mask: &str) -> Result<u8, AddressError> {
    if is_legal_ipv4(mask) {
        return Ok(ipv4_to_u32(mask).count_ones() as u8);
    }
    mask.trim()
        .parse::<u8>()
        .map_err(|_| AddressError::InvalidMask(mask.to_string()))
}

/**
IPv4 netmask string for a prefix length.

The length is clamped to `0..=32`: anything at or below 0 yields
`0.0.0.0`, anything at or above 32 yields `255.255.255.255`.
*/
pub fn prefix_len_to_mask_v4(len: i32) -> String {
    if len <= 0 {
        return u32_to_ipv4(0);
    }
    if len >= 32 {
        return u32_to_ipv4(u32::MAX);
    }
    u32_to_ipv4(!0u32 << (32 - len))
}

/* -------------------------------------------------------------------------- */
