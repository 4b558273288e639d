// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Painting display lists into a Vello scene

use kurbo::{Affine, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;

use crate::scene::{DisplayList, Mark, dot_circle};

/// Paint `list` with positions mapped through `transform`.
///
/// Stroke widths and dot diameters stay in device pixels so hairlines and
/// point markers keep their size at every zoom.
pub fn paint_display_list(list: &DisplayList, scene: &mut Scene, transform: Affine) {
    for mark in list.marks() {
        let brush = Brush::Solid(mark.color());
        match mark {
            Mark::Fill { path, .. } => {
                let path = transform * path;
                scene.fill(peniko::Fill::NonZero, Affine::IDENTITY, &brush, None, &path);
            }
            Mark::Stroke { path, width, .. } => {
                let path = transform * path;
                scene.stroke(&Stroke::new(*width), Affine::IDENTITY, &brush, None, &path);
            }
            Mark::Dot {
                center, diameter, ..
            } => {
                let circle = dot_circle(transform * *center, *diameter);
                scene.fill(
                    peniko::Fill::NonZero,
                    Affine::IDENTITY,
                    &brush,
                    None,
                    &circle,
                );
            }
        }
    }
}
