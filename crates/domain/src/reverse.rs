//! Reverse lookup (PTR) name construction.
//!
//! IPv4 addresses map into `in-addr.arpa` (RFC 1035 §3.5), IPv6 addresses
//! into nibble-reversed `ip6.arpa` (RFC 3596 §2.5).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::errors::DomainError;

/// Converts an address literal into its fully-qualified reverse lookup name.
pub fn ptr_query_name(query: &str) -> Result<String, DomainError> {
    let ip: IpAddr = query
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(query.to_string()))?;

    Ok(reverse_name(&ip))
}

pub fn reverse_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut name = String::with_capacity(73);
            for byte in ipv6.octets().iter().rev() {
                name.push_str(&format!("{:x}.{:x}.", byte & 0x0f, byte >> 4));
            }
            name.push_str("ip6.arpa.");
            name
        }
    }
}

/// Recovers the address from a reverse lookup name, with or without the
/// trailing root dot.
pub fn ip_from_ptr_name(name: &str) -> Option<IpAddr> {
    let name = name.trim_end_matches('.');

    if let Some(v4) = name.strip_suffix(".in-addr.arpa") {
        let parts: Vec<&str> = v4.split('.').collect();
        if parts.len() != 4 {
            return None;
        }
        let reversed: Vec<&str> = parts.iter().rev().copied().collect();
        return reversed
            .join(".")
            .parse::<Ipv4Addr>()
            .ok()
            .map(IpAddr::V4);
    }

    if let Some(v6) = name.strip_suffix(".ip6.arpa") {
        let nibbles: Vec<u8> = v6
            .split('.')
            .map(|n| u8::from_str_radix(n, 16).ok().filter(|_| n.len() == 1))
            .collect::<Option<Vec<u8>>>()?;
        if nibbles.len() != 32 {
            return None;
        }

        let mut octets = [0u8; 16];
        for (i, pair) in nibbles.chunks(2).enumerate() {
            octets[15 - i] = (pair[1] << 4) | pair[0];
        }
        return Some(IpAddr::V6(Ipv6Addr::from(octets)));
    }

    None
}
