//! Now-playing display task: song title on line 1, button legend on line 2.

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::{NowPlayingTask, BUTTON_BANNER, SCROLL_PAD, TITLE_CAPACITY};
    use platform::mocks::{MockDisplay, RecordingTransport};
    use platform::{DisplayLine, Instant, Task, LCD_COLUMNS};

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    fn source(title: &'static str, artist: &'static str) -> RecordingTransport {
        let mut src = RecordingTransport::new();
        src.title = title;
        src.artist = artist;
        src
    }

    #[test]
    fn test_banner_fills_one_line() {
        assert_eq!(BUTTON_BANNER.len(), LCD_COLUMNS);
    }

    #[test]
    fn test_initialize_clears_and_draws_banner() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source("A", "B");
        task.initialize(at(0), &mut src);
        assert_eq!(task.display().clear_count(), 1);
        assert_eq!(task.display().line(DisplayLine::Line2), BUTTON_BANNER);
    }

    #[test]
    fn test_short_title_padded_and_static() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source("Song", "Me");
        task.initialize(at(0), &mut src);
        task.run_tick(at(199), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "");
        task.run_tick(at(200), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "Song - Me           ");
        task.run_tick(at(400), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "Song - Me           ");
    }

    #[test]
    fn test_long_title_scrolls_every_200ms() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source("Twinkle Twinkle Little Star", "Or... The ABC's?");
        task.initialize(at(0), &mut src);
        task.run_tick(at(200), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "Twinkle Twinkle Litt");
        task.run_tick(at(300), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "Twinkle Twinkle Litt");
        task.run_tick(at(400), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "winkle Twinkle Littl");
    }

    #[test]
    fn test_scroll_wraps_through_padding() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        // 21 characters of text, 26 with the gap: one full lap is 26 steps.
        let mut src = source("ABCDEFGHIJKLMNOPQ", "R");
        task.initialize(at(0), &mut src);
        let mut t = 0;
        for _ in 0..26 {
            t += 200;
            task.run_tick(at(t), &mut src);
        }
        assert_eq!(task.title_len(), 21 + SCROLL_PAD.len());
        assert_eq!(task.display().line(DisplayLine::Line1), " ABCDEFGHIJKLMNOPQ -");
        t += 200;
        task.run_tick(at(t), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "ABCDEFGHIJKLMNOPQ - ");
    }

    #[test]
    fn test_song_change_restarts_title() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source("Twinkle Twinkle Little Star", "x");
        task.initialize(at(0), &mut src);
        task.run_tick(at(200), &mut src);
        task.run_tick(at(400), &mut src);
        src.index = 1;
        src.title = "Hot Cross Buns";
        src.artist = "?";
        task.run_tick(at(600), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "Hot Cross Buns - ?  ");
    }

    #[test]
    fn test_title_bounded() {
        let long = "0123456789012345678901234567890123456789012345678901234567890123456789\
                    0123456789012345678901234567890123456789";
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source(long, "artist");
        task.initialize(at(0), &mut src);
        task.run_tick(at(200), &mut src);
        assert_eq!(task.title_len(), TITLE_CAPACITY);
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut task = NowPlayingTask::new(MockDisplay::new());
        let mut src = source("Für Elise", "B");
        task.initialize(at(0), &mut src);
        task.run_tick(at(200), &mut src);
        assert_eq!(task.display().line(DisplayLine::Line1), "F?r Elise - B       ");
    }
}

use platform::{CharacterDisplay, DisplayLine, Instant, NowPlaying, Task, LCD_COLUMNS};

/// Button legend for line 2, aligned over the three transport buttons.
pub const BUTTON_BANNER: &str = "||>   <<    >>      ";

/// Title refresh and scroll step period.
pub const SCROLL_PERIOD_MS: u32 = 200;

/// Upper bound on the title line, gap included.
pub const TITLE_CAPACITY: usize = 100;

/// Gap between the end and the start of a scrolling title.
const SCROLL_PAD: &str = "     ";

/// Writes the current song on line 1, scrolling it when it does not fit.
pub struct NowPlayingTask<D> {
    display: D,
    /// ASCII bytes of `"<title> - <artist>"` plus padding.
    title: heapless::Vec<u8, TITLE_CAPACITY>,
    shown_song: Option<usize>,
    scroll_timer: Instant,
    offset: usize,
}

impl<D: CharacterDisplay> NowPlayingTask<D> {
    /// Create the task around a display.
    pub fn new(display: D) -> Self {
        Self {
            display,
            title: heapless::Vec::new(),
            shown_song: None,
            scroll_timer: Instant::ZERO,
            offset: 0,
        }
    }

    /// The display being driven.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Length of the title line including padding.
    #[must_use]
    pub fn title_len(&self) -> usize {
        self.title.len()
    }

    fn push_text(&mut self, text: &str, limit: usize) {
        for ch in text.chars() {
            if self.title.len() >= limit {
                return;
            }
            let byte = u8::try_from(ch).ok().filter(u8::is_ascii).unwrap_or(b'?');
            let _ = self.title.push(byte);
        }
    }

    fn set_title(&mut self, title: &str, artist: &str) {
        self.title.clear();
        self.offset = 0;
        let text_limit = TITLE_CAPACITY.saturating_sub(SCROLL_PAD.len());
        self.push_text(title, text_limit);
        self.push_text(" - ", text_limit);
        self.push_text(artist, text_limit);
        if self.title.len() > LCD_COLUMNS {
            self.push_text(SCROLL_PAD, TITLE_CAPACITY);
        } else {
            while self.title.len() < LCD_COLUMNS {
                let _ = self.title.push(b' ');
            }
        }
    }

    fn render(&mut self) {
        let len = self.title.len();
        let mut line: heapless::String<LCD_COLUMNS> = heapless::String::new();
        if len <= LCD_COLUMNS {
            for &byte in &self.title {
                let _ = line.push(char::from(byte));
            }
        } else {
            let (head, tail) = self.title.split_at(self.offset.min(len));
            for &byte in tail.iter().chain(head.iter()).take(LCD_COLUMNS) {
                let _ = line.push(char::from(byte));
            }
            let next = self.offset.saturating_add(1);
            self.offset = if next >= len { 0 } else { next };
        }
        self.display.write_line(DisplayLine::Line1, &line);
    }
}

impl<D, S> Task<S> for NowPlayingTask<D>
where
    D: CharacterDisplay,
    S: NowPlaying + ?Sized,
{
    fn initialize(&mut self, now: Instant, _source: &mut S) {
        self.display.clear();
        self.shown_song = None;
        self.scroll_timer = now;
        self.display.write_line(DisplayLine::Line2, BUTTON_BANNER);
    }

    fn run_tick(&mut self, now: Instant, source: &mut S) {
        let index = source.current_song_index();
        if self.shown_song != Some(index) {
            self.shown_song = Some(index);
            self.set_title(source.current_song_title(), source.current_song_artist());
        }
        if now.is_time_up(self.scroll_timer, SCROLL_PERIOD_MS) {
            self.scroll_timer = now;
            self.render();
        }
    }
}
