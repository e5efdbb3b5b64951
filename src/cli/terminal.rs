//! Terminal capability detection and output helpers.

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output.
pub trait Colorize {
    /// Color as success (green).
    fn success(&self) -> String;
    /// Color as warning (amber).
    fn warning(&self) -> String;
    /// Dim the text.
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

/// Renders one aligned table row from cell/width pairs.
///
/// The last cell is printed unpadded so rows never carry trailing spaces.
pub fn row(cells: &[(&str, usize)]) -> String {
    let mut line = String::new();
    for (position, &(cell, width)) in cells.iter().enumerate() {
        if position + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::row;

    #[test]
    fn rows_pad_all_but_the_last_cell() {
        assert_eq!(row(&[("id", 4), ("name", 8)]), "id    name");
    }
}
