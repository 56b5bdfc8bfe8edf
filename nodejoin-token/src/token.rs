// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use nodejoin_util::{random::secure_random, strings::hex};

/// Token ID part: 3 random bytes, 6 hex characters.
const ID_LEN: usize = 3;
/// Token secret part: 8 random bytes, 16 hex characters.
const SECRET_LEN: usize = 8;

/// Generate a fresh kubeadm-compatible join token.
///
/// The format is `XXXXXX.YYYYYYYYYYYYYYYY`: 6 lowercase hex characters,
/// a literal dot and 16 lowercase hex characters.
/// Both parts are zero-padded to their full width.
///
/// If the operating system random source fails, an empty string is
/// returned instead. Callers must treat an empty string as
/// "no token available", not as a valid credential.
pub fn generate_token() -> String {
    let raw: [u8; ID_LEN + SECRET_LEN] = match secure_random() {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Join token generation failed: {e:?}");
            return String::new();
        }
    };
    format!("{}.{}", hex(&raw[..ID_LEN]), hex(&raw[ID_LEN..]))
}

#[cfg(test)]
mod test {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_token_format() {
        for _ in 0..64 {
            let token = generate_token();
            let (id, secret) = token.split_once('.').unwrap();
            assert_eq!(id.len(), ID_LEN * 2);
            assert_eq!(secret.len(), SECRET_LEN * 2);
            assert!(is_lower_hex(id));
            assert!(is_lower_hex(secret));
        }
    }

    #[test]
    fn test_token_uniqueness() {
        // 88 bits of entropy. Two equal tokens mean a broken generator.
        assert_ne!(generate_token(), generate_token());
    }
}

// vim: ts=4 sw=4 expandtab
