// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for confshift
//!
//! Versioned configuration files that conversions read from and write back to.

pub mod holder;

pub use holder::*;
