// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _};
use nodejoin_util::net::{outbound_ipv4, resolve_ipv4};
use std::net::Ipv4Addr;

/// Result of seeder discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeder {
    /// Dotted-quad IPv4 address, or empty if no usable address was established.
    pub address: String,
    /// Whether the address points at an existing cluster node.
    pub existing: bool,
}

impl Seeder {
    fn none() -> Self {
        Self {
            address: String::new(),
            existing: false,
        }
    }

    fn existing(address: String) -> Self {
        Self {
            address,
            existing: true,
        }
    }
}

/// Decide whether a resolved address is usable as the seeder address.
///
/// Returns `None` if the name yielded no IPv4 address or a loopback
/// address. Such a name does not point at a routable external endpoint
/// and the caller has to fall back to autodetection.
fn seeder_from_resolved(ip: Option<Ipv4Addr>) -> Option<Seeder> {
    match ip {
        Some(ip) if !ip.is_loopback() => Some(Seeder::existing(ip.to_string())),
        _ => None,
    }
}

/// Map the outbound autodetection outcome to the fallback seeder result.
///
/// If autodetection failed, no usable address was established:
/// the address stays empty and the existing-flag reverts to false.
fn seeder_from_autodetect(ip: ah::Result<Ipv4Addr>) -> Seeder {
    match ip {
        Ok(ip) => Seeder::existing(ip.to_string()),
        Err(e) => {
            log::warn!("Outbound IP autodetection failed: {e:?}");
            Seeder::none()
        }
    }
}

/// Determine the seeder address to advertise for cluster bootstrap.
///
/// A literal IPv4 address is used unchanged, even a loopback one.
/// Anything else is treated as a DNS name and resolved. An unresolvable
/// name is a fatal error. A name that resolves to a loopback address
/// (anywhere in 127.0.0.0/8) is not reachable by other nodes, so the
/// local outbound address is advertised instead.
pub async fn discover(input: Option<String>) -> ah::Result<Seeder> {
    let Some(input) = input else {
        return Ok(Seeder::none());
    };

    if input.parse::<Ipv4Addr>().is_ok() {
        return Ok(Seeder::existing(input));
    }

    let ip = resolve_ipv4(&input).await.with_context(|| {
        format!("User-provided seeder name '{input}' could not be resolved to an IP")
    })?;

    if let Some(seeder) = seeder_from_resolved(ip) {
        log::debug!("Seeder name '{input}' resolved to {}.", seeder.address);
        return Ok(seeder);
    }

    // The name did not resolve to a routable external endpoint.
    log::debug!("Seeder name '{input}' is not externally routable. Autodetecting.");
    Ok(seeder_from_autodetect(outbound_ipv4().await))
}


// vim: ts=4 sw=4 expandtab
