//! Status display for command output
//!
//! Semantic output helpers that replace raw println! usage with
//! color-aware formatting on any writer.

use console::Style;
use std::io::{self, Stdout, Write};

use crate::logger::use_color;
use crate::primitives::{ColorIntent, LogOutput};

const CHECKMARK: &str = "✓";
const BULLET: &str = "•";
const ARROW: &str = "→";

/// Status display manager for command output
pub struct StatusDisplay<W: Write> {
    out: W,
    styled: bool,
}

impl StatusDisplay<Stdout> {
    /// Display on stdout, styled according to `color`
    pub fn stdout(color: ColorIntent) -> Self {
        Self::new(io::stdout(), use_color(color, LogOutput::Stdout))
    }
}

impl<W: Write> StatusDisplay<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    fn style(&self, style: Style) -> Style {
        style.force_styling(self.styled)
    }

    /// Display a success status
    ///
    /// Output: `✓ Wrote 13 handles`
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let symbol = self.style(Style::new().green()).apply_to(CHECKMARK);
        writeln!(self.out, "{symbol} {message}")
    }

    /// Display an emphasized heading
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        let text = self.style(Style::new().bold()).apply_to(text);
        writeln!(self.out, "{text}")
    }

    /// Display a bulleted list item
    pub fn item(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "  {BULLET} {text}")
    }

    /// Display a dependency arrow with a muted annotation
    ///
    /// Output: `  → VkDevice (strong)`
    pub fn arrow(&mut self, target: &str, note: &str) -> io::Result<()> {
        let note = self.style(Style::new().dim()).apply_to(format!("({note})"));
        writeln!(self.out, "  {ARROW} {target} {note}")
    }

    /// Display muted secondary text
    pub fn subtle(&mut self, text: &str) -> io::Result<()> {
        let text = self.style(Style::new().dim()).apply_to(text);
        writeln!(self.out, "{text}")
    }

    /// Display a plain message without symbols
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
