// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum IpFam {
    V4,
    V6,
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "IPv4"),
            IpFam::V6 => write!(f, "IPv6"),
        }
    }
}

/**
Legacy classful IPv4 partition, classes A through E.

Classification reads only the first octet's high-order bits, so each
class covers a fixed slice of the 32-bit address space. The derived
ordering follows the leading-bit count: A < B < C < D < E.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum IpClass {
    /// `0xxxxxxx` - 0.0.0.0 - 127.255.255.255
    A,
    /// `10xxxxxx` - 128.0.0.0 - 191.255.255.255
    B,
    /// `110xxxxx` - 192.0.0.0 - 223.255.255.255
    C,
    /// `1110xxxx` - 224.0.0.0 - 239.255.255.255
    D,
    /// `1111xxxx` - 240.0.0.0 - 255.255.255.255
    E,
}

impl IpClass {
    /// The dotted-decimal address range covered by this class.
    pub fn range(&self) -> &'static str {
        match self {
            IpClass::A => "0.0.0.0-127.255.255.255",
            IpClass::B => "128.0.0.0-191.255.255.255",
            IpClass::C => "192.0.0.0-223.255.255.255",
            IpClass::D => "224.0.0.0-239.255.255.255",
            IpClass::E => "240.0.0.0-255.255.255.255",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpClass::A => write!(f, "A"),
            IpClass::B => write!(f, "B"),
            IpClass::C => write!(f, "C"),
            IpClass::D => write!(f, "D"),
            IpClass::E => write!(f, "E"),
        }
    }
}

/* -------------------------------------------------------------------------- */
