// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Line-wrapping placement of sorts on a page.
//!
//! Every character becomes one sort. The cursor starts at the top-left of
//! the margin rect and moves right by each sort's advance:
//!
//! - a drawn glyph is scaled to the line height; its advance is its
//!   scaled width plus the letter spacing (negative spacing overlaps).
//!   The cursor never moves left of the margin.
//! - a character the font cannot draw becomes a blank sort one line
//!   height wide, so it still pushes later glyphs along
//! - when a sort would cross the right margin, the cursor returns to the
//!   left margin one line lower. A sort ending exactly on the margin
//!   stays on its line.
//! - `'\n'` starts a new line
//! - sorts whose line would cross the bottom margin are dropped and
//!   counted in `TextLayout::overflowed`

use kurbo::{Point, Rect, Size};
use std::path::Path;

use super::data::{Sort, SortKind};
use crate::model::{FontMap, VariantPicker};

/// Slack for accumulated floating point error in margin checks
const MARGIN_EPSILON: f64 = 1e-9;

/// Inputs that do not depend on the text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Area text may occupy
    pub margins: Rect,
    /// Height of every glyph and of every line
    pub line_height: f64,
    /// Advance of a blank sort
    pub blank_advance: f64,
    /// Added to every glyph advance
    pub letter_spacing: f64,
}

/// Result of a layout pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub sorts: Vec<Sort>,
    /// Characters that did not fit above the bottom margin
    pub overflowed: usize,
}

impl TextLayout {
    /// Sorts that draw something
    pub fn glyphs(&self) -> impl Iterator<Item = &Sort> {
        self.sorts.iter().filter(|s| !s.is_blank())
    }

    pub fn line_count(&self) -> usize {
        self.sorts.last().map(|s| s.line + 1).unwrap_or(0)
    }
}

/// Lay out `text` with `font`.
///
/// `natural_size` reports the unscaled size of a glyph asset, or `None`
/// when the asset cannot be drawn; such characters are set as blanks.
pub fn lay_out_text(
    text: &str,
    font: &FontMap,
    params: &LayoutParams,
    picker: &mut dyn VariantPicker,
    mut natural_size: impl FnMut(&Path) -> Option<Size>,
) -> TextLayout {
    let margins = params.margins;
    let mut layout = TextLayout::default();
    let mut cursor = Point::new(margins.x0, margins.y0);
    let mut line = 0;
    let mut line_start = true;

    for symbol in text.chars() {
        if symbol == '\n' {
            cursor = Point::new(margins.x0, cursor.y + params.line_height);
            line += 1;
            line_start = true;
            continue;
        }

        let (kind, size, advance) = match choose_glyph(symbol, font, picker, &mut natural_size) {
            Some((asset, natural)) => {
                let scale = params.line_height / natural.height;
                let size = natural * scale;
                let advance = size.width + params.letter_spacing;
                let kind = SortKind::Glyph {
                    symbol,
                    asset: asset.to_path_buf(),
                    scale,
                };
                (kind, size, advance)
            }
            None => {
                let size = Size::new(params.blank_advance, params.line_height);
                (SortKind::Blank { symbol }, size, params.blank_advance)
            }
        };

        if !line_start && cursor.x + advance > margins.x1 + MARGIN_EPSILON {
            cursor = Point::new(margins.x0, cursor.y + params.line_height);
            line += 1;
        }

        if cursor.y + params.line_height > margins.y1 + MARGIN_EPSILON {
            layout.overflowed += 1;
            continue;
        }

        layout.sorts.push(Sort {
            kind,
            position: cursor,
            size,
            advance,
            line,
        });
        cursor.x = (cursor.x + advance).max(margins.x0);
        line_start = false;
    }

    if layout.overflowed > 0 {
        tracing::warn!(
            "{} characters did not fit on the page",
            layout.overflowed
        );
    }
    layout
}

/// Pick a drawable variant for `symbol`
fn choose_glyph<'a>(
    symbol: char,
    font: &'a FontMap,
    picker: &mut dyn VariantPicker,
    natural_size: &mut impl FnMut(&Path) -> Option<Size>,
) -> Option<(&'a Path, Size)> {
    let variants = font.variants(symbol);
    if variants.is_empty() {
        return None;
    }
    let index = picker.pick(variants.len()).min(variants.len() - 1);
    let asset = variants[index].as_path();
    let size = natural_size(asset).filter(|s| s.width > 0.0 && s.height > 0.0)?;
    Some((asset, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FirstVariant, RandomPicker};
    use crate::sort::page::PageGeometry;
    use std::collections::HashMap;
    use std::path::PathBuf;

    const EPS: f64 = 1e-9;

    fn square_font(symbols: &str) -> (FontMap, HashMap<PathBuf, Size>) {
        let mut font = FontMap::new();
        let mut sizes = HashMap::new();
        for c in symbols.chars() {
            let path = PathBuf::from(format!("{c}.glif"));
            font.insert(c, path.clone());
            sizes.insert(path, Size::new(100.0, 100.0));
        }
        (font, sizes)
    }

    fn params(width: f64, height: f64, spacing: f64) -> LayoutParams {
        LayoutParams {
            margins: Rect::new(0.0, 0.0, width, height),
            line_height: 100.0,
            blank_advance: 100.0,
            letter_spacing: spacing,
        }
    }

    fn run(text: &str, font: &FontMap, sizes: &HashMap<PathBuf, Size>, p: &LayoutParams) -> TextLayout {
        lay_out_text(text, font, p, &mut FirstVariant, |path| sizes.get(path).copied())
    }

    fn first_line_len(layout: &TextLayout) -> usize {
        layout.sorts.iter().filter(|s| s.line == 0).count()
    }

    #[test]
    fn test_exactly_full_line_does_not_wrap() {
        let (font, sizes) = square_font("a");
        let layout = run(&"a".repeat(10), &font, &sizes, &params(1000.0, 1000.0, 0.0));
        assert_eq!(first_line_len(&layout), 10);
        assert_eq!(layout.line_count(), 1);

        let layout = run(&"a".repeat(11), &font, &sizes, &params(1000.0, 1000.0, 0.0));
        assert_eq!(first_line_len(&layout), 10);
        assert_eq!(layout.sorts[10].position, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_chars_per_line_is_floor_of_width_over_advance() {
        let (font, sizes) = square_font("a");
        for (width, spacing) in [(1000.0, -10.0), (1000.0, 5.0), (950.0, 0.0), (333.0, 11.0)] {
            let layout = run(&"a".repeat(40), &font, &sizes, &params(width, 5000.0, spacing));
            let expected = (width / (100.0 + spacing)).floor() as usize;
            assert_eq!(first_line_len(&layout), expected, "width {width} spacing {spacing}");
        }
    }

    #[test]
    fn test_negative_spacing_overlaps() {
        let (font, sizes) = square_font("a");
        let layout = run("aa", &font, &sizes, &params(1000.0, 1000.0, -10.0));
        assert_eq!(layout.sorts[0].position.x, 0.0);
        assert_eq!(layout.sorts[1].position.x, 90.0);
        assert_eq!(layout.sorts[1].size.width, 100.0);
    }

    #[test]
    fn test_missing_glyph_advances_blank() {
        let (font, sizes) = square_font("a");
        let p = LayoutParams {
            blank_advance: 70.0,
            ..params(1000.0, 1000.0, -10.0)
        };
        let layout = run("a?a", &font, &sizes, &p);

        assert_eq!(layout.sorts.len(), 3);
        assert_eq!(layout.glyphs().count(), 2);
        assert!(layout.sorts[1].is_blank());
        assert_eq!(layout.sorts[1].symbol(), '?');
        assert_eq!(layout.sorts[1].position.x, 90.0);
        // Blank advance carries no letter spacing
        assert_eq!(layout.sorts[2].position.x, 160.0);
    }

    #[test]
    fn test_missing_glyphs_still_wrap() {
        let (font, sizes) = square_font("a");
        let layout = run("??????a", &font, &sizes, &params(500.0, 1000.0, 0.0));
        assert_eq!(first_line_len(&layout), 5);
        let a = layout.glyphs().next().unwrap();
        assert_eq!(a.line, 1);
        assert_eq!(a.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_unloadable_variant_is_blank() {
        let mut font = FontMap::new();
        font.insert('x', PathBuf::from("broken.glif"));
        let layout = lay_out_text("x", &font, &params(1000.0, 1000.0, 0.0), &mut FirstVariant, |_| None);
        assert_eq!(layout.sorts.len(), 1);
        assert!(layout.sorts[0].is_blank());
    }

    #[test]
    fn test_spacing_beyond_glyph_width_stays_inside_margin() {
        let (font, sizes) = square_font("a");
        let layout = run("a??", &font, &sizes, &params(150.0, 1000.0, -150.0));

        assert_eq!(layout.sorts.len(), 3);
        assert!(layout.sorts.iter().all(|s| s.position.x >= 0.0));
        assert_eq!(layout.sorts[1].position, Point::new(0.0, 0.0));
        assert_eq!(layout.sorts[2].position, Point::new(0.0, 100.0));
        assert_eq!(layout.sorts[2].line, 1);
    }

    #[test]
    fn test_newline_breaks_line() {
        let (font, sizes) = square_font("ab");
        let layout = run("a\nb", &font, &sizes, &params(1000.0, 1000.0, 0.0));
        assert_eq!(layout.sorts.len(), 2);
        assert_eq!(layout.sorts[1].position, Point::new(0.0, 100.0));
        assert_eq!(layout.sorts[1].line, 1);
    }

    #[test]
    fn test_glyph_wider_than_margin_stays_on_its_line() {
        let (font, sizes) = square_font("a");
        let layout = run("aa", &font, &sizes, &params(50.0, 1000.0, 0.0));
        assert_eq!(layout.sorts[0].position, Point::new(0.0, 0.0));
        assert_eq!(layout.sorts[1].position, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_text_below_bottom_margin_is_dropped() {
        let (font, sizes) = square_font("a");
        // Two lines of three glyphs fit
        let layout = run(&"a".repeat(8), &font, &sizes, &params(300.0, 200.0, 0.0));
        assert_eq!(layout.sorts.len(), 6);
        assert_eq!(layout.overflowed, 2);
        assert!(layout.sorts.iter().all(|s| s.rect().y1 <= 200.0));
    }

    #[test]
    fn test_glyph_scaled_to_line_height_keeps_aspect() {
        let mut font = FontMap::new();
        font.insert('l', PathBuf::from("l.glif"));
        let layout = lay_out_text(
            "l",
            &font,
            &params(1000.0, 1000.0, 0.0),
            &mut FirstVariant,
            |_| Some(Size::new(20.0, 400.0)),
        );
        let sort = &layout.sorts[0];
        assert!((sort.size.height - 100.0).abs() < EPS);
        assert!((sort.size.width - 5.0).abs() < EPS);
        assert!(matches!(sort.kind, SortKind::Glyph { scale, .. } if (scale - 0.25).abs() < EPS));
    }

    #[test]
    fn test_a4_example() {
        // 'A' -> two variants, 300 dpi, 6 mm glyphs, -10 spacing
        let mut font = FontMap::new();
        font.insert('A', PathBuf::from("A1.glif"));
        font.insert('A', PathBuf::from("A2.glif"));
        let page = PageGeometry::new(300);
        let height = 6.0 * (300.0 / 25.4);
        let p = LayoutParams {
            margins: page.margins,
            line_height: page.mm(6.0),
            blank_advance: page.mm(6.0),
            letter_spacing: -10.0,
        };

        let mut picker = RandomPicker::seeded(3);
        let layout = lay_out_text("AA", &font, &p, &mut picker, |path| {
            if path == Path::new("A1.glif") {
                Some(Size::new(50.0, 100.0))
            } else {
                Some(Size::new(80.0, 100.0))
            }
        });

        assert_eq!(layout.sorts.len(), 2);
        for sort in &layout.sorts {
            assert!((sort.size.height - height).abs() < 1e-9);
            assert_eq!(sort.line, 0);
        }
        let first = &layout.sorts[0];
        let gap = layout.sorts[1].position.x - first.position.x;
        assert!((gap - (first.size.width - 10.0)).abs() < 1e-9);
        assert_eq!(first.position, Point::new(page.margins.x0, page.margins.y0));
    }
}
