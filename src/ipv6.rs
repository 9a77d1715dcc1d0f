// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ipv4::{ipv4_to_u32, is_legal_ipv4},
    patterns,
    strings::*,
    IPV6_INVALID,
};

/**
Checks whether `ip` is a legal IPv6 address in the standard 8-group
form or the `::`-compressed form.

Exactly one compression point is allowed and the explicit groups around
it must number at most 7; `::` on its own (the all-zeros address) is
legal. Groups are 1-4 hex digits; dotted-quad-embedded forms are kept
out of this predicate so it gates [ipv6_to_u128] exactly - see
[is_legal_ipv6_compatible] for detecting them.

```
use addrutils::is_legal_ipv6;

assert!(is_legal_ipv6("ff06:0:0:0:0:0:0:c3"));
assert!(is_legal_ipv6("ff06::c3"));
assert!(is_legal_ipv6("::"));
assert!(!is_legal_ipv6("2001:0:3238:DFE1:63:::FEFB"));
assert!(!is_legal_ipv6("0:0:0:0:0:ffff:192.1.56.10"));
```
*/
pub fn is_legal_ipv6(ip: &str) -> bool {
    if is_blank(ip) {
        return false;
    }
    let ip: &str = ip.trim();
    if patterns::IPV6_STANDARD.is_match(ip) {
        return true;
    }

    let Some(pos) = ip.find(DOUBLE_COLON) else {
        return false;
    };
    // a second marker (or a `:::`) means more than one compression point
    if ip[pos + 1..].contains(DOUBLE_COLON) {
        return false;
    }

    let head: &str = &ip[..pos];
    let tail: &str = &ip[pos + 2..];
    match (hex_groups(head), hex_groups(tail)) {
        (Some(h), Some(t)) => h + t <= 7,
        _ => false,
    }
}

/// Checks the strict, uncompressed 8-group IPv6 form only.
pub fn is_legal_ipv6_standard(ip: &str) -> bool {
    !is_blank(ip) && patterns::IPV6_STANDARD.is_match(ip.trim())
}

/**
Checks an `<ipv6>/<prefix>` form: exactly one slash, not trailing, with
a prefix length in `0..=128` carrying no leading zero.
*/
pub fn is_legal_ipv6_prefix(ip: &str) -> bool {
    if is_blank(ip) {
        return false;
    }
    let ip: &str = ip.trim();
    if ip.matches(SLASH).count() != 1 || ip.ends_with(SLASH) {
        return false;
    }
    let Some((addr, prefix)) = ip.split_once(SLASH) else {
        return false;
    };
    if prefix.len() > 1 && prefix.starts_with('0') {
        return false;
    }
    match prefix.parse::<u32>() {
        Ok(len) => len <= 128 && is_legal_ipv6(addr),
        Err(_) => false,
    }
}

/**
Checks the deprecated IPv4-compatible embedded form: an IPv6 address
whose last 32 bits are written as a dotted quad, such as
`::192.1.56.10`.

Exactly three dots, a legal IPv4 tail and a hex part that expands to a
full eight-group address. The IPv4-mapped `::ffff:a.b.c.d` form names
an IPv4 address rather than an IPv6 one and is not accepted. This is
detection only; [ipv6_to_u128] does not convert embedded forms.

```
use addrutils::is_legal_ipv6_compatible;

assert!(is_legal_ipv6_compatible("::192.1.56.10"));
assert!(!is_legal_ipv6_compatible("0:0:0:0:0:ffff:192.1.56.10"));
assert!(!is_legal_ipv6_compatible("192.168.0.1"));
```
*/
pub fn is_legal_ipv6_compatible(ip: &str) -> bool {
    if is_blank(ip) {
        return false;
    }
    let ip: &str = ip.trim();
    if ip.matches(DOT).count() != 3 {
        return false;
    }
    let Some((head, quad)) = ip.rsplit_once(COLON) else {
        return false;
    };
    if head.is_empty() || !is_legal_ipv4(quad) {
        return false;
    }

    // substitute the quad with its two hex groups and validate the rest
    let packed: u32 = ipv4_to_u32(quad);
    let expanded: String = format!("{head}:{:x}:{:x}", packed >> 16, packed & 0xffff);
    if !is_legal_ipv6(&expanded) {
        return false;
    }
    // `::ffff:a.b.c.d` is the IPv4-mapped form, an IPv4 address in v6 clothing
    ipv6_to_u128(&expanded) >> 32 != 0xffff
}

/// Checks whether `ip` is a legal IPv6 address, IPv4-compatible
/// embedded form, or prefix form.
pub fn is_legal_ipv6_all(ip: &str) -> bool {
    is_legal_ipv6(ip) || is_legal_ipv6_compatible(ip) || is_legal_ipv6_prefix(ip)
}

/// Count colon-separated 1-4 digit hex groups; None if any group is
/// malformed. The empty string holds zero groups.
fn hex_groups(part: &str) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }
    let mut count: usize = 0;
    for group in part.split(COLON) {
        if !patterns::HEX_GROUP.is_match(group) {
            return None;
        }
        count += 1;
    }
    Some(count)
}

/**
Convert an IPv6 string to its 128-bit integer value.

Returns [IPV6_INVALID] (0) for illegal input instead of failing
(sentinel policy, same as [crate::ipv4_to_u32]).

```
use addrutils::ipv6_to_u128;

let n: u128 = 338984292706304756556241983349463187651;
assert_eq!(ipv6_to_u128("ff06:0:0:0:0:0:0:c3"), n);
assert_eq!(ipv6_to_u128("ff06::c3"), n);
assert_eq!(ipv6_to_u128(""), 0);
```
*/
pub fn ipv6_to_u128(ip: &str) -> u128 {
    if !is_legal_ipv6(ip) {
        return IPV6_INVALID;
    }
    group_sum(ip.trim()).unwrap_or(IPV6_INVALID)
}

/**
Accumulate the group values of a pre-validated IPv6 string.

With a `::` marker, the text before it is converted recursively and
shifted left by `16 * (7 - colons-before-the-marker)` bits, so the
omitted groups land as zeros in the middle; the text after the marker
keeps one leading `:` so its first (empty) token reads as zero. Without
a marker, each group is shifted by 16 bits per position from the end.
*/
fn group_sum(ip: &str) -> Option<u128> {
    if let Some(pos) = ip.find(DOUBLE_COLON) {
        let head: &str = &ip[..pos];
        let tail: &str = &ip[pos + 1..];
        let colons: usize = head.matches(COLON).count();
        let high: u128 = group_sum(head)?;
        let low: u128 = group_sum(tail)?;
        return Some((high << (16 * (7 - colons as u32))) + low);
    }

    let parts: Vec<&str> = ip.split(COLON).collect();
    let mut value: u128 = 0;
    for (i, part) in parts.iter().enumerate() {
        let group: u128 = if part.is_empty() {
            0
        } else {
            u128::from_str_radix(part, 16).ok()?
        };
        value += group << (16 * (parts.len() - i - 1) as u32);
    }
    Some(value)
}

/// Render all eight groups, lowercase and colon-joined, no compression.
fn expanded_groups(value: u128) -> String {
    let groups: Vec<String> = (0..8)
        .rev()
        .map(|i: u32| format!("{:x}", value >> (16 * i) & 0xffff))
        .collect();
    groups.join(COLON)
}

/**
Render a 128-bit integer as a compressed IPv6 string: eight lowercase
hex groups with the first run of >=2 consecutive zero groups collapsed
to `::`.

The collapse picks the first qualifying run, not the longest one, which
keeps rendered forms stable under expand-and-recompress round trips.

```
use addrutils::u128_to_ipv6;

assert_eq!(u128_to_ipv6(338984292706304756556241983349463187651), "ff06::c3");
assert_eq!(u128_to_ipv6(0), "::");
assert_eq!(u128_to_ipv6(1), "::1");
```
*/
pub fn u128_to_ipv6(value: u128) -> String {
    let expanded: String = expanded_groups(value);
    patterns::ZERO_RUN.replace(&expanded, DOUBLE_COLON).into_owned()
}

/// Compare two IPv6 strings by 128-bit value: the sign of `a - b`,
/// saturating at the `i128` limits. Illegal operands convert to the
/// [IPV6_INVALID] sentinel and compare as 0.
pub fn compare_ipv6(a: &str, b: &str) -> i128 {
    signed_diff(ipv6_to_u128(a), ipv6_to_u128(b))
}

/// Distance from `beg` to `end` in addresses: `end - beg`, negative
/// when the bounds are reversed. Saturating at the `i128` limits.
pub fn range_between_ipv6(beg: &str, end: &str) -> i128 {
    signed_diff(ipv6_to_u128(end), ipv6_to_u128(beg))
}

/// `x - y` as a saturating signed value.
#[inline]
fn signed_diff(x: u128, y: u128) -> i128 {
    if x >= y {
        i128::try_from(x - y).unwrap_or(i128::MAX)
    } else {
        i128::try_from(y - x).map(|d: i128| -d).unwrap_or(i128::MIN)
    }
}

/**
IPv6 netmask string for a prefix length, rendered as plain uncollapsed
groups (`ffff:ffff:8000:0:0:0:0:0` style).

The length is clamped to `0..=128`: anything at or below 0 yields the
all-zeros mask, anything at or above 128 the all-ones mask.
*/
pub fn prefix_len_to_mask_v6(len: i32) -> String {
    if len <= 0 {
        return expanded_groups(0);
    }
    if len >= 128 {
        return expanded_groups(u128::MAX);
    }
    expanded_groups(!0u128 << (128 - len))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const V6_TEST_STR: &str = "ff06:0:0:0:0:0:0:c3";
    const V6_TEST_SHORT: &str = "ff06::c3";
    const V6_TEST_NUM: u128 = 338984292706304756556241983349463187651;

    #[test]
    fn test_is_legal_ipv6() {
        assert!(is_legal_ipv6(V6_TEST_STR));
        assert!(is_legal_ipv6(V6_TEST_SHORT));
        assert!(is_legal_ipv6("2001:0000:3238:DFE1:0063:0000:0000:FEFB"));
        assert!(is_legal_ipv6("2001:0000:3238:DFE1:63:0000:0000:FEFB"));
        assert!(is_legal_ipv6("2001:0:3238:DFE1:63::FEFB"));
        assert!(is_legal_ipv6("::"));
        assert!(is_legal_ipv6("::1"));
        assert!(is_legal_ipv6("1:2:3:4:5:6:7::"));

        assert!(!is_legal_ipv6(""));
        assert!(!is_legal_ipv6(" "));
        assert!(!is_legal_ipv6("2001:0:3238:DFE1:63:::FEFB"));
        assert!(!is_legal_ipv6("GFEA:0:3238:DFE1:63::FEFB"));
        assert!(!is_legal_ipv6("1::2::3"));
        assert!(!is_legal_ipv6("1:2:3:4:5:6:7:8:9"));
        assert!(!is_legal_ipv6("1:2:3:4:5:6:7:8::"));
        // embedded dotted-quad forms are rejected
        assert!(!is_legal_ipv6("0:0:0:0:0:ffff:192.1.56.10"));
        assert!(!is_legal_ipv6("192.168.0.1"));
    }

    #[test]
    fn test_is_legal_ipv6_standard() {
        assert!(is_legal_ipv6_standard(V6_TEST_STR));
        assert!(is_legal_ipv6_standard("2001:0000:3238:DFE1:0063:0000:0000:FEFB"));
        assert!(!is_legal_ipv6_standard(V6_TEST_SHORT));
        assert!(!is_legal_ipv6_standard("::1"));
        assert!(!is_legal_ipv6_standard(""));
    }

    #[test]
    fn test_is_legal_ipv6_prefix() {
        assert!(is_legal_ipv6_prefix("ff06::c3/64"));
        assert!(is_legal_ipv6_prefix("::/0"));
        assert!(is_legal_ipv6_prefix("2001:db8::/128"));

        assert!(!is_legal_ipv6_prefix("ff06::c3"));
        assert!(!is_legal_ipv6_prefix("ff06::c3/"));
        assert!(!is_legal_ipv6_prefix("ff06::c3/129"));
        assert!(!is_legal_ipv6_prefix("ff06::c3/064"));
        assert!(!is_legal_ipv6_prefix("ff06::c3/64/64"));
        assert!(!is_legal_ipv6_prefix("bogus/64"));
    }

    #[test]
    fn test_is_legal_ipv6_compatible() {
        assert!(is_legal_ipv6_compatible("::192.1.56.10"));
        assert!(is_legal_ipv6_compatible("0:0:0:0:0:0:192.1.56.10"));
        assert!(is_legal_ipv6_compatible("1:2:3:4:5:6:1.2.3.4"));
        assert!(is_legal_ipv6_compatible(" ::10.0.0.1 "));

        // the IPv4-mapped form names an IPv4 address, not an IPv6 one
        assert!(!is_legal_ipv6_compatible("0:0:0:0:0:ffff:192.1.56.10"));
        assert!(!is_legal_ipv6_compatible("::ffff:192.1.56.10"));

        assert!(!is_legal_ipv6_compatible("192.168.0.1"));
        assert!(!is_legal_ipv6_compatible("::1.2.3"));
        assert!(!is_legal_ipv6_compatible("::1.2.3.4.5"));
        assert!(!is_legal_ipv6_compatible("::256.1.56.10"));
        assert!(!is_legal_ipv6_compatible("1:2:3:4:5:6:7:1.2.3.4"));
        assert!(!is_legal_ipv6_compatible(V6_TEST_SHORT));
        assert!(!is_legal_ipv6_compatible(""));
    }

    #[test]
    fn test_is_legal_ipv6_all() {
        assert!(is_legal_ipv6_all(V6_TEST_SHORT));
        assert!(is_legal_ipv6_all("ff06::c3/64"));
        assert!(is_legal_ipv6_all("::192.1.56.10"));
        assert!(!is_legal_ipv6_all("ff06::c3/"));
        assert!(!is_legal_ipv6_all("0:0:0:0:0:ffff:192.1.56.10"));
    }

    #[test]
    fn test_ipv6_to_u128() {
        assert_eq!(ipv6_to_u128(V6_TEST_STR), V6_TEST_NUM);
        assert_eq!(ipv6_to_u128(V6_TEST_SHORT), V6_TEST_NUM);
        assert_eq!(ipv6_to_u128("::"), 0);
        assert_eq!(ipv6_to_u128("::1"), 1);
        assert_eq!(ipv6_to_u128("1::"), 1u128 << 112);
        assert_eq!(ipv6_to_u128("1:2:3:4:5:6:7::"), ipv6_to_u128("1:2:3:4:5:6:7:0"));
        assert_eq!(
            ipv6_to_u128("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            u128::MAX
        );
        assert_eq!(ipv6_to_u128(""), IPV6_INVALID);
        assert_eq!(ipv6_to_u128("1::2::3"), IPV6_INVALID);
    }

    #[test]
    fn test_u128_to_ipv6() {
        assert_eq!(u128_to_ipv6(V6_TEST_NUM), V6_TEST_SHORT);
        assert_eq!(u128_to_ipv6(0), "::");
        assert_eq!(u128_to_ipv6(1), "::1");
        assert_eq!(u128_to_ipv6(1u128 << 112), "1::");
        assert_eq!(
            u128_to_ipv6(u128::MAX),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_collapse_is_first_match() {
        // two zero runs: the first one found is collapsed, not the longest
        let value: u128 = ipv6_to_u128("1:0:0:2:0:0:0:3");
        assert_eq!(u128_to_ipv6(value), "1::2:0:0:0:3");
    }

    #[test]
    fn test_round_trip() {
        for n in [0u128, 1, 0xffff, V6_TEST_NUM, u128::MAX, 1u128 << 64] {
            assert_eq!(ipv6_to_u128(&u128_to_ipv6(n)), n, "round trip of {n:#x}");
        }
        // expand then recompress reproduces the compressed form
        let expanded: String = expanded_groups(V6_TEST_NUM);
        assert_eq!(ipv6_to_u128(&expanded), V6_TEST_NUM);
        assert_eq!(u128_to_ipv6(ipv6_to_u128(&expanded)), V6_TEST_SHORT);
    }

    #[test]
    fn test_compare_ipv6() {
        assert_eq!(compare_ipv6(V6_TEST_STR, V6_TEST_SHORT), 0);
        assert_eq!(compare_ipv6("ff06::c4", "ff06::c3"), 1);
        assert_eq!(compare_ipv6("ff06:0:0:0:0:0:1:c3", "ff06::c3"), 65536);
        assert_eq!(compare_ipv6("ff06::c3", "ff06:0:0:0:0:0:1:c3"), -65536);
    }

    #[test]
    fn test_range_between_ipv6() {
        assert_eq!(range_between_ipv6("ff06::c3", "ff06::c4"), 1);
        assert_eq!(range_between_ipv6("ff06::c3", "ff06:0:0:0:0:0:1:c3"), 65536);
        assert_eq!(range_between_ipv6("ff06:0:0:0:0:0:1:c3", "ff06::c3"), -65536);
    }

    #[test]
    fn test_prefix_len_to_mask_v6() {
        assert_eq!(
            prefix_len_to_mask_v6(128),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
        assert_eq!(prefix_len_to_mask_v6(0), "0:0:0:0:0:0:0:0");
        assert_eq!(prefix_len_to_mask_v6(-1), "0:0:0:0:0:0:0:0");
        assert_eq!(prefix_len_to_mask_v6(200), prefix_len_to_mask_v6(128));
        assert_eq!(prefix_len_to_mask_v6(33), "ffff:ffff:8000:0:0:0:0:0");
        assert_eq!(prefix_len_to_mask_v6(64), "ffff:ffff:ffff:ffff:0:0:0:0");
    }

    #[test]
    fn test_prefix_mask_against_ipnet() {
        for len in [0u8, 1, 33, 64, 127, 128] {
            let net: ipnet::Ipv6Net = format!("::/{len}").parse().unwrap();
            let mask: u128 = u128::from(net.netmask());
            assert_eq!(
                ipv6_to_u128(&prefix_len_to_mask_v6(len as i32)),
                mask,
                "prefix {len}"
            );
        }
    }
}
