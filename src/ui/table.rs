//! Table rendering for CLI outputs.
//!
//! Widths are measured in terminal columns (`unicode-width`), so comments
//! written in non-Latin scripts stay aligned. Columns with a `max_width`
//! wrap their content over several lines.

use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width: Some(max_width.max(1)),
        }
    }
}

pub struct Cell {
    pub text: String,
    pub colour: Option<Colour>,
}

impl Cell {
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            colour: None,
        }
    }

    pub fn coloured<T: Into<String>>(text: T, colour: Colour) -> Self {
        Self {
            text: text.into(),
            colour: Some(colour),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.text.width())
                    .max()
                    .unwrap_or(0);
                let natural = content.max(col.header.width());
                match col.max_width {
                    Some(max) => natural.min(max.max(col.header.width())),
                    None => natural,
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.header, *w))
            .collect();
        push_line(&mut out, &header);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule);

        // Rows
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    let text = row.get(i).map(|c| c.text.as_str()).unwrap_or("");
                    match col.max_width {
                        Some(_) if !text.is_empty() => textwrap::wrap(text, *w)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect(),
                        _ => vec![text.to_string()],
                    }
                })
                .collect();

            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line_no in 0..height {
                let cells: Vec<String> = wrapped
                    .iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(i, (lines, w))| {
                        let text = lines.get(line_no).map(String::as_str).unwrap_or("");
                        let padded = pad(text, *w);
                        match row.get(i).and_then(|c| c.colour) {
                            Some(colour) if !text.is_empty() => colour.paint(padded).to_string(),
                            _ => padded,
                        }
                    })
                    .collect();
                push_line(&mut out, &cells);
            }
        }

        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(" | ").trim_end());
    out.push('\n');
}
