// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod workbench;

pub use workbench::workbench;
