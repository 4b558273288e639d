// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Handwriter: annotate hand-drawn letterforms and preview handwritten text

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    handwriter::run(EventLoop::with_user_event())
}
