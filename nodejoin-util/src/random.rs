// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, format_err as err};

/// Get cryptographically secure random bytes from the operating system.
///
/// Tokens generated from these bytes are used as cluster join secrets,
/// so a seeded pseudorandom generator is not acceptable here.
pub fn secure_random<const SZ: usize>() -> ah::Result<[u8; SZ]> {
    let mut buf: [u8; SZ] = [0; SZ];
    getrandom::fill(&mut buf).map_err(|e| {
        err!("Failed to read secure random bytes from the operating system (getrandom): {e}")
    })?;

    // For lengths bigger than 11 bytes the likelyhood of the sanity checks below
    // triggering on good generator is low enough.
    if SZ >= 12 {
        // Sanity check if getrandom implementation
        // is a no-op or otherwise trivially broken.
        assert_ne!(buf, [0; SZ]);
        assert_ne!(buf, [0xFF; SZ]);
        let first = buf[0];
        assert!(!buf.iter().all(|x| *x == first));
    }

    Ok(buf)
}

// vim: ts=4 sw=4 expandtab
