// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

use anyhow::{self as ah, Context as _};
use clap::Parser;
use nodejoin_util::net::outbound_ipv4;
use serde::Serialize;
use tokio::runtime;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct Output {
    ip: String,
}

async fn async_main() -> ah::Result<()> {
    let ip = outbound_ipv4()
        .await
        .context("Autodetect outbound IP address")?;
    log::debug!("Autodetected outbound IP address: {ip}");

    let out = Output { ip: ip.to_string() };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("NODEJOIN_LOG", "warn")
            .write_style_or("NODEJOIN_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("nodejoin-localip version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Tokio runtime builder")?
        .block_on(async_main())
}


// vim: ts=4 sw=4 expandtab
