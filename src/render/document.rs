//! Flowable-based page layout over `lopdf`.
//!
//! The builder keeps a top-down cursor on the current page, breaks pages when
//! content runs past the bottom margin, and assembles the final PDF 1.7
//! object tree (fonts, content streams, page tree, catalog) when finished.

use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use super::color::Color;
use super::content::ContentBuilder;
use super::fonts::{wrap, Font};
use super::style::{Align, TextStyle, FOOTER};
use super::table::{LaidOutRow, TableLayout};

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 54.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Baseline of the page footer, in points from the page bottom.
const FOOTER_BASELINE: f32 = 36.0;

/// Hanging indent for bullet list items.
const BULLET_INDENT: f32 = 18.0;

pub struct DocumentBuilder {
    doc: Document,
    /// Finished pages as raw operation lists; encoded in `finish`.
    pages: Vec<Vec<lopdf::content::Operation>>,
    current: ContentBuilder,
    /// Distance from the top of the page to the next free position.
    cursor: f32,
    footer_text: String,
    footer_on_current_page: bool,
}

impl DocumentBuilder {
    pub fn new(footer_text: String) -> Self {
        Self {
            doc: Document::with_version("1.7"),
            pages: Vec::new(),
            current: ContentBuilder::new(),
            cursor: MARGIN,
            footer_text,
            footer_on_current_page: true,
        }
    }

    fn baseline(&self, size: f32) -> f32 {
        PAGE_HEIGHT - (self.cursor + size)
    }

    fn at_top_of_page(&self) -> bool {
        self.cursor == MARGIN && self.current.is_empty()
    }

    /// Makes sure at least `needed` points of vertical space remain,
    /// breaking the page otherwise.
    pub fn ensure_room(&mut self, needed: f32) {
        if self.cursor + needed > PAGE_HEIGHT - MARGIN {
            self.break_page();
        }
    }

    /// Finishes the current page and starts a fresh one. A break at the very
    /// top of an empty page is a no-op, so consecutive breaks don't emit
    /// blank pages.
    pub fn break_page(&mut self) {
        if self.at_top_of_page() && !self.pages.is_empty() {
            return;
        }
        self.flush_page();
        self.cursor = MARGIN;
        self.footer_on_current_page = true;
    }

    fn flush_page(&mut self) {
        let mut page = std::mem::replace(&mut self.current, ContentBuilder::new());
        if self.footer_on_current_page {
            let text = format!("Page {} | {}", self.pages.len() + 1, self.footer_text);
            let width = FOOTER.font.text_width(&text, FOOTER.size);
            page.text(
                &text,
                FOOTER.font,
                FOOTER.size,
                FOOTER.color,
                (PAGE_WIDTH - width) / 2.0,
                FOOTER_BASELINE,
            );
        }
        self.pages.push(page.into_operations());
    }

    fn line_x(&self, line: &str, style: &TextStyle, indent: f32) -> f32 {
        match style.align {
            Align::Left => MARGIN + indent,
            Align::Center => {
                let width = style.font.text_width(line, style.size);
                (PAGE_WIDTH - width) / 2.0
            }
        }
    }

    pub fn add_paragraph(&mut self, text: &str, style: &TextStyle) {
        self.add_indented(text, style, 0.0);
    }

    fn add_indented(&mut self, text: &str, style: &TextStyle, indent: f32) {
        if !self.at_top_of_page() {
            self.cursor += style.space_before;
        }
        let lines = wrap(text, style.font, style.size, CONTENT_WIDTH - indent);
        for line in lines {
            self.ensure_room(style.leading);
            let x = self.line_x(&line, style, indent);
            let y = self.baseline(style.size);
            self.current.text(&line, style.font, style.size, style.color, x, y);
            self.cursor += style.leading;
        }
        self.cursor += style.space_after;
    }

    /// A bullet item: glyph in the margin, text with a hanging indent.
    pub fn add_bullet(&mut self, text: &str, style: &TextStyle) {
        if !self.at_top_of_page() {
            self.cursor += style.space_before;
        }
        let lines = wrap(text, style.font, style.size, CONTENT_WIDTH - BULLET_INDENT);
        for (i, line) in lines.iter().enumerate() {
            self.ensure_room(style.leading);
            let y = self.baseline(style.size);
            if i == 0 {
                self.current.text(
                    "\u{2022}",
                    style.font,
                    style.size,
                    style.color,
                    MARGIN + 6.0,
                    y,
                );
            }
            self.current.text(
                line,
                style.font,
                style.size,
                style.color,
                MARGIN + BULLET_INDENT,
                y,
            );
            self.cursor += style.leading;
        }
        self.cursor += style.space_after;
    }

    /// Draws a measured table, splitting between rows when a row would cross
    /// the bottom margin and re-emitting the header on continuation pages.
    pub fn add_table(&mut self, layout: &TableLayout) {
        let first_rows = layout.body.first().map(|r| r.height).unwrap_or(0.0);
        self.ensure_room(layout.header.height + first_rows);
        self.draw_header(layout);
        for (i, row) in layout.body.iter().enumerate() {
            if self.cursor + row.height > PAGE_HEIGHT - MARGIN {
                self.break_page();
                self.draw_header(layout);
            }
            let fill = if i % 2 == 1 {
                Some(layout.style.zebra_fill)
            } else {
                None
            };
            self.draw_row(
                layout,
                row,
                fill,
                layout.style.body_font,
                layout.style.body_size,
                layout.style.body_text,
            );
        }
        self.cursor += 12.0;
    }

    fn draw_header(&mut self, layout: &TableLayout) {
        self.draw_row(
            layout,
            &layout.header,
            Some(layout.style.header_fill),
            layout.style.header_font,
            layout.style.header_size,
            layout.style.header_text,
        );
    }

    fn draw_row(
        &mut self,
        layout: &TableLayout,
        row: &LaidOutRow,
        fill: Option<Color>,
        font: Font,
        size: f32,
        text_color: Color,
    ) {
        let x0 = MARGIN;
        let top = self.cursor;
        let bottom = top + row.height;
        let width = layout.width();
        let padding = layout.style.cell_padding;
        let line_height = TableLayout::line_height(size);

        if let Some(color) = fill {
            self.current.fill_rect(
                x0,
                PAGE_HEIGHT - bottom,
                width,
                row.height,
                color,
            );
        }

        let mut x = x0;
        for (cell, col_width) in row.cells.iter().zip(&layout.col_widths) {
            let mut line_top = top + padding;
            for line in cell {
                self.current.text(
                    line,
                    font,
                    size,
                    text_color,
                    x + padding,
                    PAGE_HEIGHT - (line_top + size),
                );
                line_top += line_height;
            }
            x += col_width;
        }

        // Grid: row borders plus one vertical segment per column boundary.
        let grid = layout.style.grid_color;
        let grid_width = layout.style.grid_width;
        let y_top = PAGE_HEIGHT - top;
        let y_bottom = PAGE_HEIGHT - bottom;
        self.current.line(x0, y_top, x0 + width, y_top, grid_width, grid);
        self.current
            .line(x0, y_bottom, x0 + width, y_bottom, grid_width, grid);
        let mut boundary = x0;
        for col_width in &layout.col_widths {
            self.current
                .line(boundary, y_top, boundary, y_bottom, grid_width, grid);
            boundary += col_width;
        }
        self.current
            .line(boundary, y_top, boundary, y_bottom, grid_width, grid);

        self.cursor = bottom;
    }

    /// Paints a full-bleed page at absolute positions, without a footer.
    /// Used for the title page; the normal cursor flow is not involved.
    pub fn paint_cover<F>(&mut self, paint: F)
    where
        F: FnOnce(&mut ContentBuilder),
    {
        self.footer_on_current_page = false;
        paint(&mut self.current);
        self.flush_page();
        self.cursor = MARGIN;
        self.footer_on_current_page = true;
    }

    /// Centered text helper for cover pages.
    pub fn centered_line(
        content: &mut ContentBuilder,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
        y: f32,
    ) {
        let width = font.text_width(text, size);
        content.text(text, font, size, color, (PAGE_WIDTH - width) / 2.0, y);
    }

    /// Encodes the buffered pages and wires up fonts, page tree, catalog,
    /// and trailer. Content streams are left uncompressed.
    pub fn finish(mut self) -> Result<Document, lopdf::Error> {
        if !self.current.is_empty() {
            self.flush_page();
        }

        let pages_id = self.doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in Font::all() {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(
                font.resource_name().as_bytes(),
                Object::Dictionary(single_font_dict),
            );
        }
        let resources_id = self.doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let mut page_ids: Vec<Object> = Vec::with_capacity(self.pages.len());
        let page_count = self.pages.len();
        for operations in self.pages {
            let content = Content { operations };
            let content_id = self
                .doc
                .add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = self.doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count as i64,
        };
        self.doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        Ok(self.doc)
    }
}
