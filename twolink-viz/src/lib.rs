// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// The `twolink-viz` library draws a two-link arm in the terminal.
///
/// Every frame takes one target, solves it with `twolink-core`, draws the
/// resulting pose onto a character `canvas` and prints the `status` text.
/// Targets come from a `program` played back at a fixed frame rate or from
/// lines on standard input, and the `viewer` writes every frame out.
pub mod canvas;
pub mod config;
pub mod frame;
pub mod program;
pub mod status;
pub mod viewer;
