// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{strings::*, AddressError};
use tracing::error;

/**
External host-name resolution collaborator.

The library itself never performs name lookups; callers plug in a
resolver (system stub, DNS client, test double) behind this trait.
Implementations return the host's addresses as text, in whatever order
the underlying resolver provides, or fail with a resolution error.
This is a blocking call.
*/
pub trait HostResolver {
    fn resolve(&self, host: &str) -> Result<Vec<String>, AddressError>;
}

/**
Resolve `host` to its address list through the given collaborator.

A thin pass-through: the host is trimmed and checked for blankness,
the resolver's answer is returned as-is. No ordering guarantee beyond
the resolver's own.

### Errors
- [AddressError::BlankHost] for a blank host name
- whatever the resolver fails with, logged before propagation
*/
pub fn lookup_host<R: HostResolver>(resolver: &R, host: &str) -> Result<Vec<String>, AddressError> {
    let host: &str = host.trim();
    if host.is_empty() {
        return Err(AddressError::BlankHost);
    }
    resolver.resolve(host).map_err(|e| {
        error!(host, "{ERR_RESOLVE}: {e}");
        e
    })
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(Vec<String>);

    impl HostResolver for FixedResolver {
        fn resolve(&self, host: &str) -> Result<Vec<String>, AddressError> {
            if self.0.is_empty() {
                return Err(AddressError::Resolve {
                    host: host.to_string(),
                });
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_lookup_host() {
        let resolver = FixedResolver(vec!["192.168.0.1".to_string(), "ff06::c3".to_string()]);
        let addrs: Vec<String> = lookup_host(&resolver, " example.test ").unwrap();
        assert_eq!(addrs, vec!["192.168.0.1", "ff06::c3"]);
    }

    #[test]
    fn test_lookup_host_blank() {
        let resolver = FixedResolver(vec![]);
        assert_eq!(lookup_host(&resolver, ""), Err(AddressError::BlankHost));
        assert_eq!(lookup_host(&resolver, "  "), Err(AddressError::BlankHost));
        // blank host is its own error, not a malformed-address one
        assert_eq!(AddressError::BlankHost.to_string(), "host name is blank");
    }

    #[test]
    fn test_lookup_host_failure() {
        let resolver = FixedResolver(vec![]);
        assert_eq!(
            lookup_host(&resolver, "nohost.test"),
            Err(AddressError::Resolve { host: "nohost.test".to_string() })
        );
    }
}
