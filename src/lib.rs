// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4, IPv6 and MAC address parsing, validation, conversion and
range/subnet membership utilities, operating on strings and fixed-width
integers.

Every function is a pure, stateless computation; the only shared state
is a set of compiled patterns built once per process, so everything can
be called concurrently without coordination. Conversion functions use a
sentinel value (0) for malformed input, while classification, subnet
arithmetic and comparison fail loudly on contract violations - see the
per-function docs.
*/

mod ipv4;
mod ipv6;
mod mac;
mod patterns;
mod ranges;
mod resolve;
mod strings;
mod structs;

use std::{error, fmt};
use strings::*;

pub use ipv4::*;
pub use ipv6::*;
pub use mac::*;
pub use ranges::*;
pub use resolve::{lookup_host, HostResolver};
pub use structs::{IpClass, IpFam};

/// Sentinel result of [ipv4_to_u32] for malformed input.
pub const IP_INVALID: u32 = 0;
/// Sentinel result of [ipv6_to_u128] for malformed input.
pub const IPV6_INVALID: u128 = 0;
/// Sentinel result of [mac_to_u64] for malformed input.
pub const MAC_INVALID: u64 = 0;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// not a legal IP address
    Invalid(String),
    /// not a legal IPv4 address
    InvalidV4(String),
    /// neither a legal mask string nor a prefix number
    InvalidMask(String),
    /// not a legal MAC address
    InvalidMac(String),
    /// increment walked off the end of the address space
    AddrSpace(String),
    /// range has neither bound
    EmptyRange,
    /// range text is malformed
    InvalidRangeFmt(String),
    /// operands are not the same IP family (v4 vs v6)
    Mismatch(String, String),
    /// host name is blank or empty
    BlankHost,
    /// the resolver collaborator failed
    Resolve { host: String },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Invalid(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            AddressError::InvalidV4(ip) => {
                write!(f, "{ERR_INVALID_V4}: '{ip}'")
            }
            AddressError::InvalidMask(mask) => {
                write!(f, "{ERR_INVALID_MASK}: '{mask}'")
            }
            AddressError::InvalidMac(mac) => {
                write!(f, "{ERR_INVALID_MAC}: '{mac}'")
            }
            AddressError::AddrSpace(ip) => {
                write!(f, "{ERR_ADDR_SPACE}: '{ip}'")
            }
            AddressError::EmptyRange => {
                write!(f, "{ERR_RNG_EMPTY}")
            }
            AddressError::InvalidRangeFmt(rng) => {
                write!(f, "{ERR_RNG_FMT}: '{rng}'")
            }
            AddressError::Mismatch(a, b) => {
                write!(f, "{ERR_MISMATCH}: {a} - {b}")
            }
            AddressError::BlankHost => {
                write!(f, "{ERR_BLANK_HOST}")
            }
            AddressError::Resolve { host } => {
                write!(f, "{ERR_RESOLVE}: '{host}'")
            }
        }
    }
}

impl error::Error for AddressError {}
