/// An opaque RGB color, stored as 8-bit channels and emitted into content
/// streams as 0..1 reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values scaled to the 0.0..=1.0 range PDF operators expect.
    pub fn components(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// The report palette.
pub mod palette {
    use super::Color;

    /// Heading and table-header blue (#1e40af).
    pub const HEADING_BLUE: Color = Color::rgb(0x1e, 0x40, 0xaf);
    /// Subsection slate (#334155).
    pub const SLATE: Color = Color::rgb(0x33, 0x41, 0x55);
    /// Title page and zebra-row tint (#f8fafc).
    pub const PAGE_TINT: Color = Color::rgb(0xf8, 0xfa, 0xfc);
    /// Confidentiality notice red (#dc2626).
    pub const ALERT_RED: Color = Color::rgb(0xdc, 0x26, 0x26);
    /// Footer text and grid lines.
    pub const GREY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Table header text (whitesmoke).
    pub const WHITESMOKE: Color = Color::rgb(0xf5, 0xf5, 0xf5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_scale_to_unit_range() {
        let [r, g, b] = palette::WHITE.components();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));

        let [r, g, b] = palette::BLACK.components();
        assert_eq!((r, g, b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_heading_blue_channels() {
        let c = palette::HEADING_BLUE;
        assert_eq!((c.r, c.g, c.b), (0x1e, 0x40, 0xaf));
    }
}
