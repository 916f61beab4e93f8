//! Content stream assembly on top of `lopdf::content::Operation`.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use super::color::Color;
use super::fonts::Font;

/// Encodes text as WinAnsi bytes, which is the encoding the report's Type1
/// fonts are registered with. ASCII passes through; the handful of
/// typographic characters the narrative uses are mapped explicitly and
/// anything else degrades to '?'.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{00a9}' => 0xa9,
            _ => b'?',
        })
        .collect()
}

// The writer escapes literal-string delimiters itself, so the bytes go in
// unescaped.
fn pdf_string(text: &str) -> Object {
    Object::String(encode_winansi(text), StringFormat::Literal)
}

/// Accumulates drawing operations for one page.
#[derive(Default)]
pub struct ContentBuilder {
    ops: Vec<Operation>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.ops
    }

    /// Fills the rectangle with the given color. Coordinates are PDF page
    /// space: origin bottom-left, y up.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let [r, g, b] = color.components();
        self.ops.push(Operation::new("q", vec![]));
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    /// Strokes a straight line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let [r, g, b] = color.components();
        self.ops.push(Operation::new("q", vec![]));
        self.ops
            .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        self.ops.push(Operation::new("w", vec![width.into()]));
        self.ops.push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.ops.push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.ops.push(Operation::new("S", vec![]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    /// Draws a single line of text with its baseline at (x, y).
    pub fn text(&mut self, text: &str, font: Font, size: f32, color: Color, x: f32, y: f32) {
        let [r, g, b] = color.components();
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![font.resource_name().into(), size.into()],
        ));
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.ops.push(Operation::new("Tj", vec![pdf_string(text)]));
        self.ops.push(Operation::new("ET", vec![]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::palette;

    #[test]
    fn test_encode_winansi_ascii_passthrough() {
        assert_eq!(encode_winansi("SBOM Report 1.0"), b"SBOM Report 1.0");
    }

    #[test]
    fn test_encode_winansi_bullet() {
        assert_eq!(encode_winansi("\u{2022}"), vec![0x95]);
    }

    #[test]
    fn test_encode_winansi_unknown_degrades() {
        assert_eq!(encode_winansi("\u{4e16}"), b"?");
    }

    #[test]
    fn test_pdf_string_keeps_delimiters_unescaped() {
        let Object::String(bytes, StringFormat::Literal) = pdf_string("(SBOM) a\\b") else {
            panic!("expected a literal string");
        };
        assert_eq!(bytes, b"(SBOM) a\\b".to_vec());
    }

    #[test]
    fn test_text_emits_balanced_text_object() {
        let mut builder = ContentBuilder::new();
        builder.text(
            "Hello",
            Font::Helvetica,
            10.0,
            palette::BLACK,
            72.0,
            700.0,
        );
        let ops = builder.into_operations();
        assert_eq!(ops.first().unwrap().operator, "BT");
        assert_eq!(ops.last().unwrap().operator, "ET");
        assert!(ops.iter().any(|op| op.operator == "Tj"));
    }

    #[test]
    fn test_fill_rect_saves_and_restores_state() {
        let mut builder = ContentBuilder::new();
        builder.fill_rect(0.0, 0.0, 612.0, 792.0, palette::PAGE_TINT);
        let ops = builder.into_operations();
        assert_eq!(ops.first().unwrap().operator, "q");
        assert_eq!(ops.last().unwrap().operator, "Q");
    }
}
