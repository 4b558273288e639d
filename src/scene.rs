// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Toolkit-independent display lists
//!
//! The editor and the preview describe a frame as an ordered list of
//! marks. Widgets paint the list into a Vello scene
//! (`components::paint`); tests inspect it directly.

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Color;

/// Tolerance used when flattening shapes into paths
const PATH_TOLERANCE: f64 = 0.1;

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Filled outline (non-zero winding)
    Fill { path: BezPath, color: Color },
    /// Stroked outline; `width` is in device pixels, not scaled by the view
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
    },
    /// Round point marker of fixed on-screen size
    Dot {
        center: Point,
        diameter: f64,
        color: Color,
    },
}

impl Mark {
    pub fn color(&self) -> Color {
        match self {
            Mark::Fill { color, .. } | Mark::Stroke { color, .. } | Mark::Dot { color, .. } => {
                *color
            }
        }
    }
}

/// Marks in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    marks: Vec<Mark>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_path(rect.to_path(PATH_TOLERANCE), color);
    }

    pub fn fill_path(&mut self, path: BezPath, color: Color) {
        self.push(Mark::Fill { path, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.push(Mark::Stroke {
            path: rect.to_path(PATH_TOLERANCE),
            color,
            width,
        });
    }

    pub fn dot(&mut self, center: Point, diameter: f64, color: Color) {
        self.push(Mark::Dot {
            center,
            diameter,
            color,
        });
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// The circle drawn for a `Dot`
pub fn dot_circle(center: Point, diameter: f64) -> Circle {
    Circle::new(center, diameter / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_keep_paint_order() {
        let red = Color::from_rgb8(0xff, 0, 0);
        let blue = Color::from_rgb8(0, 0, 0xff);
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), red);
        list.dot(Point::new(5.0, 5.0), 4.0, blue);

        assert_eq!(list.len(), 2);
        assert_eq!(list.marks()[0].color(), red);
        assert!(matches!(list.marks()[1], Mark::Dot { diameter, .. } if diameter == 4.0));
    }

    #[test]
    fn test_stroke_rect_bounds() {
        let mut list = DisplayList::new();
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        list.stroke_rect(rect, Color::from_rgb8(0, 0, 0), 1.0);
        let Mark::Stroke { path, .. } = &list.marks()[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(path.bounding_box(), rect);
    }
}
