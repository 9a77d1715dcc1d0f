// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{patterns, strings::*, AddressError, MAC_INVALID};

/**
Checks whether `mac` is a legal six-group MAC address: groups of 1-2
hex digits, uniformly colon- or uniformly hyphen-delimited,
case-insensitive.

```
use addrutils::is_legal_mac;

assert!(is_legal_mac("60:a0:10:50:d0:30"));
assert!(is_legal_mac("60-A0-10-50-D0-30"));
assert!(!is_legal_mac("60:a0-10:50-d0:30"));
assert!(!is_legal_mac("12:34::"));
assert!(!is_legal_mac(""));
```
*/
pub fn is_legal_mac(mac: &str) -> bool {
    !is_blank(mac) && patterns::MAC6.is_match(mac.trim())
}

/// Checks a hyphen-delimited masked MAC: `xx-xx-xx-xx-xx-xx/xx-xx-xx-xx-xx-xx`.
pub fn is_legal_mac_with_mask(mac: &str) -> bool {
    !is_blank(mac) && patterns::MAC6_WITH_MASK.is_match(mac.trim())
}

/// Checks a Cisco-style three-group MAC: `xxxx-xxxx-xxxx`.
pub fn is_legal_mac3(mac: &str) -> bool {
    !is_blank(mac) && patterns::MAC3.is_match(mac.trim())
}

/// Checks a three-group masked MAC: `xxxx-xxxx-xxxx/xxxx-xxxx-xxxx`.
pub fn is_legal_mac3_with_mask(mac: &str) -> bool {
    !is_blank(mac) && patterns::MAC3_WITH_MASK.is_match(mac.trim())
}

/**
Convert a MAC string to its 48-bit integer value.

Delimiters are dropped and the remaining hex digits accumulated one
nibble at a time, so a single-digit group contributes a single nibble.
Returns [MAC_INVALID] (0) for illegal input (sentinel policy).

```
use addrutils::mac_to_u64;

assert_eq!(mac_to_u64("60:a0:10:50:d0:30"), 106240584765488);
assert_eq!(mac_to_u64("60-A0-10-50-D0-30"), 106240584765488);
assert_eq!(mac_to_u64("not-a-mac"), 0);
```
*/
pub fn mac_to_u64(mac: &str) -> u64 {
    if !is_legal_mac(mac) {
        return MAC_INVALID;
    }
    let mut value: u64 = 0;
    for ch in mac.trim().chars() {
        let nibble: u64 = match ch {
            '0'..='9' => ch as u64 - '0' as u64,
            'a'..='f' => ch as u64 - 'a' as u64 + 10,
            'A'..='F' => ch as u64 - 'A' as u64 + 10,
            _ => continue,
        };
        value = value << 4 | nibble;
    }
    value
}

/**
Render the low 48 bits of `value` as the canonical MAC string: twelve
lowercase hex digits in hyphen-joined pairs.

```
use addrutils::u64_to_mac;

assert_eq!(u64_to_mac(106240584765488), "60-a0-10-50-d0-30");
```
*/
pub fn u64_to_mac(value: u64) -> String {
    let hex: String = format!("{:012x}", value & 0xffff_ffff_ffff);
    let pairs: Vec<&str> = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect();
    pairs.join(DASH)
}

/**
Normalize a strictly colon-delimited MAC by padding single-digit groups
with a leading zero: `6:a0:1:50:d0:30` becomes `06:a0:01:50:d0:30`.

### Errors
Fails with [AddressError::InvalidMac] unless the input is six
colon-delimited groups of 1-2 hex digits.
*/
pub fn normalize_mac(mac: &str) -> Result<String, AddressError> {
    if is_blank(mac) || !patterns::MAC6_COLON.is_match(mac.trim()) {
        return Err(AddressError::InvalidMac(mac.to_string()));
    }
    let groups: Vec<String> = mac
        .trim()
        .split(COLON)
        .map(|g: &str| {
            if g.len() == 1 {
                format!("0{g}")
            } else {
                g.to_string()
            }
        })
        .collect();
    Ok(groups.join(COLON))
}

/**
Leniently re-chunk a colon- and/or hyphen-delimited MAC-ish string into
2-character colon-joined groups.

Hyphens are mapped to colons first; any over-long chunk is split into
pairs, with an odd tail contributing its last character. Blank input is
returned unchanged. No hex validation is performed.
*/
pub fn format_mac(mac: &str) -> String {
    if is_blank(mac) {
        return mac.to_string();
    }
    let colonized: String = mac.replace(DASH, COLON);
    let mut groups: Vec<String> = Vec::new();

    for chunk in colonized.split(COLON) {
        let chars: Vec<char> = chunk.chars().collect();
        let size: usize = chars.len();
        if size > 2 {
            let mut j: usize = 0;
            while j < size {
                if j + 2 <= size {
                    groups.push(chars[j..j + 2].iter().collect());
                } else {
                    groups.push(chars[size - 1].to_string());
                }
                j += 2;
            }
        } else {
            groups.push(chunk.to_string());
        }
    }
    groups.join(COLON)
}

/// Whether `mac` equals any MAC in `set`, compared numerically so case
/// and delimiter choice do not matter. Illegal MACs never match.
pub fn mac_in_set(mac: &str, set: &[impl AsRef<str>]) -> bool {
    if !is_legal_mac(mac) {
        return false;
    }
    let target: u64 = mac_to_u64(mac);
    set.iter()
        .filter(|m| is_legal_mac(m.as_ref()))
        .any(|m| mac_to_u64(m.as_ref()) == target)
}

/// Whether `mac` lies in the inclusive numeric interval [`beg`, `end`].
/// Illegal operands yield false.
pub fn mac_in_range(mac: &str, beg: &str, end: &str) -> bool {
    if !is_legal_mac(mac) || !is_legal_mac(beg) || !is_legal_mac(end) {
        return false;
    }
    let value: u64 = mac_to_u64(mac);
    mac_to_u64(beg) <= value && value <= mac_to_u64(end)
}

/* -------------------------------------------------------------------------- */
