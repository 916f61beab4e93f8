//! A small flowable layout engine over `lopdf`: styled paragraphs, bullets,
//! zebra-striped tables, page breaks, and footers, emitted as PDF 1.7 with
//! the base-14 Helvetica faces.

mod color;
mod content;
mod fonts;
pub mod style;
mod table;

pub mod document;

pub use color::{palette, Color};
pub use content::ContentBuilder;
pub use document::{DocumentBuilder, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
pub use fonts::{wrap, Font};
pub use table::TableLayout;
