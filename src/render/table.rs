//! Table layout: wraps cell text to the fixed column widths and derives
//! row heights, so the document builder can paginate between rows.

use super::fonts::{wrap, Font};
use super::style::TableStyle;

/// A row with its cells wrapped into lines and its final height known.
#[derive(Debug, Clone)]
pub struct LaidOutRow {
    /// Wrapped lines per column.
    pub cells: Vec<Vec<String>>,
    pub height: f32,
}

/// A fully measured table, ready to draw.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub col_widths: Vec<f32>,
    pub header: LaidOutRow,
    pub body: Vec<LaidOutRow>,
    pub style: TableStyle,
}

fn line_height(size: f32) -> f32 {
    size * 1.25
}

fn lay_out_row(
    cells: &[String],
    col_widths: &[f32],
    font: Font,
    size: f32,
    padding: f32,
) -> LaidOutRow {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(col_widths)
        .map(|(text, width)| wrap(text, font, size, width - 2.0 * padding))
        .collect();
    let max_lines = wrapped.iter().map(|lines| lines.len()).max().unwrap_or(1);
    LaidOutRow {
        cells: wrapped,
        height: max_lines as f32 * line_height(size) + 2.0 * padding,
    }
}

impl TableLayout {
    pub fn build(
        columns: &[&str],
        rows: &[Vec<String>],
        col_widths: &[f32],
        style: TableStyle,
    ) -> Self {
        let header_cells: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let header = lay_out_row(
            &header_cells,
            col_widths,
            style.header_font,
            style.header_size,
            style.cell_padding,
        );
        let body = rows
            .iter()
            .map(|row| {
                lay_out_row(
                    row,
                    col_widths,
                    style.body_font,
                    style.body_size,
                    style.cell_padding,
                )
            })
            .collect();
        Self {
            col_widths: col_widths.to_vec(),
            header,
            body,
            style,
        }
    }

    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Baseline line height for a row set at `size`.
    pub fn line_height(size: f32) -> f32 {
        line_height(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::TABLE;

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["react".into(), "^18.3.1".into()],
            vec!["@radix-ui/react-dropdown-menu".into(), "^2.1.16".into()],
        ]
    }

    #[test]
    fn test_single_line_row_height() {
        let layout = TableLayout::build(
            &["Component Name", "Version"],
            &sample_rows(),
            &[198.0, 102.0],
            TABLE,
        );
        let expected = TableLayout::line_height(TABLE.body_size) + 2.0 * TABLE.cell_padding;
        assert_eq!(layout.body[0].height, expected);
    }

    #[test]
    fn test_long_cell_wraps_and_grows_row() {
        let layout = TableLayout::build(
            &["Component Name", "Version"],
            &sample_rows(),
            &[80.0, 60.0],
            TABLE,
        );
        assert!(layout.body[1].cells[0].len() > 1);
        assert!(layout.body[1].height > layout.body[0].height);
    }

    #[test]
    fn test_header_uses_header_metrics() {
        let layout = TableLayout::build(
            &["Metric", "Value"],
            &sample_rows(),
            &[216.0, 144.0],
            TABLE,
        );
        let expected = TableLayout::line_height(TABLE.header_size) + 2.0 * TABLE.cell_padding;
        assert_eq!(layout.header.height, expected);
    }

    #[test]
    fn test_width_is_column_sum() {
        let layout =
            TableLayout::build(&["A", "B"], &sample_rows(), &[216.0, 144.0], TABLE);
        assert_eq!(layout.width(), 360.0);
    }
}
