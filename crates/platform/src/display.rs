//! Character display abstraction (2 x 20 LCD)

/// Columns per LCD line.
pub const LCD_COLUMNS: usize = 20;

/// LCD line selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayLine {
    /// Top line
    Line1,
    /// Bottom line
    Line2,
}

/// Character display trait.
///
/// Writes are queued by the driver; the caller never waits for the bus.
pub trait CharacterDisplay {
    /// Replace the contents of one line, starting at column 0.
    fn write_line(&mut self, line: DisplayLine, text: &str);

    /// Blank the whole display.
    fn clear(&mut self);
}
