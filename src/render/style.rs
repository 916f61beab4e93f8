//! Named text and table styles for the report, mirroring the original
//! stylesheet: blue section headings, slate subsections, 10pt justified
//! body text, and blue-headed zebra-striped tables.

use super::color::{palette, Color};
use super::fonts::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// How a run of paragraph text is set.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub align: Align,
    pub space_before: f32,
    pub space_after: f32,
}

pub const SECTION_HEADING: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 16.0,
    leading: 19.0,
    color: palette::HEADING_BLUE,
    align: Align::Left,
    space_before: 20.0,
    space_after: 12.0,
};

pub const SUBSECTION_HEADING: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 14.0,
    leading: 17.0,
    color: palette::SLATE,
    align: Align::Left,
    space_before: 15.0,
    space_after: 10.0,
};

pub const BODY: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 10.0,
    leading: 14.0,
    color: palette::BLACK,
    align: Align::Left,
    space_before: 0.0,
    space_after: 6.0,
};

pub const BODY_BOLD: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 10.0,
    leading: 14.0,
    color: palette::BLACK,
    align: Align::Left,
    space_before: 4.0,
    space_after: 4.0,
};

pub const NOTE: TextStyle = TextStyle {
    font: Font::HelveticaOblique,
    size: 10.0,
    leading: 14.0,
    color: palette::BLACK,
    align: Align::Left,
    space_before: 0.0,
    space_after: 6.0,
};

pub const FOOTER: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 8.0,
    leading: 10.0,
    color: palette::GREY,
    align: Align::Center,
    space_before: 0.0,
    space_after: 0.0,
};

/// Visual treatment shared by all report tables.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub header_fill: Color,
    pub header_text: Color,
    pub header_font: Font,
    pub header_size: f32,
    pub body_font: Font,
    pub body_size: f32,
    pub body_text: Color,
    pub zebra_fill: Color,
    pub grid_color: Color,
    pub grid_width: f32,
    pub cell_padding: f32,
}

pub const TABLE: TableStyle = TableStyle {
    header_fill: palette::HEADING_BLUE,
    header_text: palette::WHITESMOKE,
    header_font: Font::HelveticaBold,
    header_size: 10.0,
    body_font: Font::Helvetica,
    body_size: 9.0,
    body_text: palette::BLACK,
    zebra_fill: palette::PAGE_TINT,
    grid_color: palette::GREY,
    grid_width: 1.0,
    cell_padding: 6.0,
};
