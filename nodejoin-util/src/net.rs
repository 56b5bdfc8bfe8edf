// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _, format_err as err};
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;

/// Well-known public endpoint used to force outbound route selection.
///
/// The connect() only makes the OS pick a route and a source address.
/// No packet has to reach this endpoint.
const ROUTE_PROBE_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Autodetect the local outbound IPv4 address.
///
/// Fails if the host has no route towards the public internet.
pub async fn outbound_ipv4() -> ah::Result<Ipv4Addr> {
    let sock = UdpSocket::bind("0.0.0.0:0")
        .await
        .context("Bind UDP route probe socket")?;
    sock.connect(ROUTE_PROBE_ADDR)
        .await
        .context("Select outbound route")?;
    let local = sock.local_addr().context("Get local socket address")?;
    match local.ip() {
        IpAddr::V4(ip) => Ok(ip),
        IpAddr::V6(_) => Err(err!("The outbound socket has no IPv4 source address.")),
    }
}

/// Resolve a host name to an IPv4 address via forward DNS lookup.
///
/// Returns `Ok(None)` if the name resolves, but yields no IPv4 address.
/// Returns an error if the name cannot be resolved at all.
pub async fn resolve_ipv4(name: &str) -> ah::Result<Option<Ipv4Addr>> {
    let resolver = TokioResolver::builder_tokio()
        .context("Create DNS resolver from system configuration")?
        .build();
    let lookup = resolver
        .lookup_ip(name)
        .await
        .with_context(|| format!("Resolve host name '{name}'"))?;
    Ok(lookup.iter().find_map(|addr| match addr {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(_) => None,
    }))
}

// vim: ts=4 sw=4 expandtab
