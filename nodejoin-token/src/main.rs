// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod token;

use crate::token::generate_token;
use anyhow as ah;
use clap::Parser;
use nodejoin_util::strings::pick_input;
use serde::Serialize;

/// Environment variable that can preset the token.
const TOKEN_ENV: &str = "TOKEN";

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Join token to emit verbatim instead of generating a fresh one.
    ///
    /// If this is not given, the TOKEN environment variable is consulted.
    /// If that is unset as well, a fresh token is generated.
    ///
    /// No format validation is applied to a supplied token.
    token: Option<String>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct Output {
    token: String,
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("NODEJOIN_LOG", "warn")
            .write_style_or("NODEJOIN_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("nodejoin-token version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let token = pick_input(
        opts.token.as_deref(),
        std::env::var(TOKEN_ENV).ok().as_deref(),
    )
    .unwrap_or_else(generate_token);

    println!("{}", serde_json::to_string_pretty(&Output { token })?);
    Ok(())
}


// vim: ts=4 sw=4 expandtab
