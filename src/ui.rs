//! Terminal UI utilities.
//!
//! A small table with Unicode box-drawing borders, used by `gcx list`. Cell
//! widths are measured with `console` so coloured cells line up.

use colored::*;
use std::cmp;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| console::measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], console::measure_text_width(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let sep = |left: &str, mid: &str, right: &str| -> String {
            let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}", left, inner.join(mid), right)
        };
        let line = |cells: &[String], bold: bool| -> String {
            let mut s = String::from("  │");
            for (cell, width) in cells.iter().zip(&widths) {
                let padding = width.saturating_sub(console::measure_text_width(cell));
                let shown = if bold {
                    cell.bold().to_string()
                } else {
                    cell.clone()
                };
                s.push_str(&format!(" {}{} │", shown, " ".repeat(padding)));
            }
            s
        };

        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(sep("┌", "┬", "┐"));
        out.push(line(&self.headers, true));
        out.push(sep("├", "┼", "┤"));
        for row in &self.rows {
            out.push(line(row, false));
        }
        out.push(sep("└", "┴", "┘"));
        out.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}
