//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

/// Number of character rows on the 128x64 OLED (6x8 font)
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// The renderer fills this in, the display task pushes it to a
/// `DisplayBackend` implementation.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Selection/highlight state per row (start_col, end_col)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            highlights: [None; SCREEN_ROWS],
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        for highlight in &mut self.highlights {
            *highlight = None;
        }
    }

    /// Set the content of a specific row, truncating if too long
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.lines[row].clear();
            let mut end = text.len().min(LINE_LEN);
            // Back off to a char boundary so a multi-byte character
            // straddling the cut is dropped whole
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            let _ = self.lines[row].push_str(&text[..end]);
        }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(|s| s.as_str()).unwrap_or("")
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col));
        }
    }

    /// Highlight region of a row, if any
    pub fn highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_lines() {
        let mut screen = Screen::new();
        screen.set_line(0, "DHT11 Sensor");
        assert_eq!(screen.line(0), "DHT11 Sensor");
        assert_eq!(screen.line(1), "");
        // Out-of-range access is harmless
        assert_eq!(screen.line(99), "");
    }

    #[test]
    fn test_long_lines_truncate() {
        let mut screen = Screen::new();
        screen.set_line(0, "this line is much longer than twenty-one chars");
        assert_eq!(screen.line(0).len(), LINE_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut screen = Screen::new();
        // The two-byte degree sign starts at byte 20 and would be
        // split by a cut at byte 21
        screen.set_line(0, "12345678901234567890°C");
        assert_eq!(screen.line(0), "12345678901234567890");
    }

    #[test]
    fn test_clear_resets_highlights() {
        let mut screen = Screen::new();
        screen.set_line(2, "selected");
        screen.set_highlight(2, 0, 8);
        assert_eq!(screen.highlight(2), Some((0, 8)));

        screen.clear();
        assert_eq!(screen.highlight(2), None);
        assert_eq!(screen.line(2), "");
    }
}
