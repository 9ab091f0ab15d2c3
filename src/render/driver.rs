//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer. It enters/leaves the alternate
//! screen with mouse capture (the stepper's touches arrive as mouse events)
//! and writes rendered strips to the terminal.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::strip::{CellStyle, Strip};

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// The driver does NOT enter the alternate screen on creation; call
/// [`enter`](Self::enter) explicitly and [`leave`](Self::leave) before exit.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter alternate screen, enable raw mode, mouse capture and focus reports.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        )?;
        Ok(())
    }

    /// Undo everything [`enter`](Self::enter) did.
    ///
    /// Raw mode is disabled even when the screen commands fail. The first
    /// error is returned.
    pub fn leave(&mut self) -> io::Result<()> {
        let screen = execute!(
            self.writer,
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }

    /// Queue every cell of `strips`. Cells at negative positions are skipped.
    ///
    /// Call [`flush`](Self::flush) afterward to send to the terminal.
    pub fn draw(&mut self, strips: &[Strip]) -> io::Result<()> {
        for strip in strips {
            let (Ok(y), Ok(x)) = (u16::try_from(strip.y), u16::try_from(strip.x_offset)) else {
                continue;
            };
            queue!(self.writer, cursor::MoveTo(x, y))?;
            for cell in &strip.cells {
                self.apply_cell_style(&cell.style)?;
                queue!(self.writer, Print(cell.ch), SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Queue crossterm style commands for a given `CellStyle`.
    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(color) = style.fg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetForegroundColor(color))?;
        }
        if let Some(color) = style.bg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetBackgroundColor(color))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if style.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm `Color`.
///
/// Supports `#rrggbb`, `#rgb`, and the basic named colors (`red`, `dark_blue`,
/// `grey`, ...). Returns `None` if the string cannot be parsed.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().replace('-', "_").as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" => Some(Color::DarkRed),
        "dark_green" => Some(Color::DarkGreen),
        "dark_yellow" => Some(Color::DarkYellow),
        "dark_blue" => Some(Color::DarkBlue),
        "dark_magenta" => Some(Color::DarkMagenta),
        "dark_cyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

/// Parse a hex color string (without the leading `#`).
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }),
        3 => {
            let (r, g, b) = (channel(0..1)?, channel(1..2)?, channel(2..3)?);
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_6digit() {
        assert_eq!(parse_color("#ff8800"), Some(Color::Rgb { r: 255, g: 136, b: 0 }));
    }

    #[test]
    fn parse_hex_3digit_expanded() {
        assert_eq!(parse_color("#abc"), Some(Color::Rgb { r: 0xaa, g: 0xbb, b: 0xcc }));
    }

    #[test]
    fn parse_hex_invalid() {
        assert_eq!(parse_color("#ff00"), None);
        assert_eq!(parse_color("#gghhii"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn parse_named() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color(" Red "), Some(Color::Red));
        assert_eq!(parse_color("dark-blue"), Some(Color::DarkBlue));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("chartreuse"), None);
    }
}
