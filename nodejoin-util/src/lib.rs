// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

pub mod net;
pub mod random;
pub mod strings;

// vim: ts=4 sw=4 expandtab
