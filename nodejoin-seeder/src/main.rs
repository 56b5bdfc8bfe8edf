// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod discover;

use crate::discover::{Seeder, discover};
use anyhow::{self as ah, Context as _};
use clap::Parser;
use nodejoin_util::strings::pick_input;
use serde::Serialize;
use tokio::runtime;

/// Environment variable that can preset the seeder.
const SEEDER_ENV: &str = "SEEDER";

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Seeder host name or literal IPv4 address.
    ///
    /// If this is not given, the SEEDER environment variable is consulted.
    /// If that is unset as well, an empty address is reported and
    /// 'existing' is false.
    seeder: Option<String>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct Output {
    address: String,
    existing: &'static str,
}

impl From<Seeder> for Output {
    fn from(seeder: Seeder) -> Self {
        Self {
            address: seeder.address,
            existing: if seeder.existing { "true" } else { "false" },
        }
    }
}

async fn async_main(opts: Opts) -> ah::Result<()> {
    let input = pick_input(
        opts.seeder.as_deref(),
        std::env::var(SEEDER_ENV).ok().as_deref(),
    );

    let seeder = discover(input).await?;

    let out: Output = seeder.into();
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
        println!("nodejoin-seeder version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Tokio runtime builder")?
        .block_on(async_main(opts))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_output_json() {
        let out: Output = Seeder {
            address: "10.0.0.5".to_string(),
            existing: true,
        }
        .into();
        assert_eq!(
            serde_json::to_string_pretty(&out).unwrap(),
            "{\n  \"address\": \"10.0.0.5\",\n  \"existing\": \"true\"\n}"
        );

        let out: Output = Seeder {
            address: String::new(),
            existing: false,
        }
        .into();
        assert_eq!(
            serde_json::to_string_pretty(&out).unwrap(),
            "{\n  \"address\": \"\",\n  \"existing\": \"false\"\n}"
        );
    }
}

// vim: ts=4 sw=4 expandtab
