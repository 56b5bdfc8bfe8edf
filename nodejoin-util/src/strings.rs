// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Convert a byte slice to a lowercase hex string.
///
/// Every byte yields exactly two hex digits.
pub fn hex(data: &[u8]) -> String {
    let mut ret = String::with_capacity(data.len() * 2);
    for b in data {
        ret.push_str(&format!("{b:02x}"));
    }
    ret
}

/// Select the helper input value.
///
/// A present command line argument takes precedence over the environment
/// value, even if the argument trims down to nothing.
/// The selected value is whitespace-trimmed.
/// A value that trims down to the empty string counts as "no input".
pub fn pick_input(arg: Option<&str>, env_val: Option<&str>) -> Option<String> {
    let raw = match arg {
        Some(arg) => Some(arg),
        None => env_val,
    };
    let raw = raw?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[]), "");
        assert_eq!(hex(&[0x00]), "00");
        assert_eq!(hex(&[0x01, 0x23, 0xAB]), "0123ab");
        assert_eq!(hex(&[0x00, 0x00, 0x0F]), "00000f");
        assert_eq!(hex(&[0xFF; 8]), "ffffffffffffffff");
    }

    #[test]
    fn test_pick_input() {
        assert_eq!(pick_input(None, None), None);
        assert_eq!(pick_input(Some("foo"), None), Some("foo".to_string()));
        assert_eq!(pick_input(None, Some("bar")), Some("bar".to_string()));
        // The argument wins over the environment.
        assert_eq!(pick_input(Some("foo"), Some("bar")), Some("foo".to_string()));
        // An empty argument does not fall through to the environment.
        assert_eq!(pick_input(Some(""), Some("bar")), None);
        assert_eq!(pick_input(Some("  "), Some("bar")), None);
        // Whitespace is trimmed.
        assert_eq!(pick_input(Some("  foo\n"), None), Some("foo".to_string()));
        assert_eq!(pick_input(None, Some("\tbar ")), Some("bar".to_string()));
        // An empty environment value counts as unset.
        assert_eq!(pick_input(None, Some("")), None);
    }
}

// vim: ts=4 sw=4 expandtab
