//! Player control seams.
//!
//! Remote link messages and local buttons both end up as a [`Command`] and go
//! through the single [`Command::dispatch`] path into whatever implements
//! [`TransportControl`]. The display only ever sees [`NowPlaying`].

/// A transport command, from the link or from a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Flip between playing and paused.
    PlayPause,
    /// Go to the previous song (wrapping) and play it.
    PreviousSong,
    /// Go to the next song (wrapping) and play it.
    NextSong,
}

impl Command {
    /// Every command, in wire-field order.
    pub const ALL: [Command; 3] = [Command::PlayPause, Command::PreviousSong, Command::NextSong];

    /// Number of commands.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this command in [`Command::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Command::PlayPause => 0,
            Command::PreviousSong => 1,
            Command::NextSong => 2,
        }
    }

    /// Short name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::PlayPause => "play/pause",
            Command::PreviousSong => "previous",
            Command::NextSong => "next",
        }
    }

    /// Apply this command to a player.
    pub fn dispatch<T: TransportControl + ?Sized>(self, transport: &mut T) {
        match self {
            Command::PlayPause => transport.toggle_play_pause(),
            Command::PreviousSong => transport.previous_song(),
            Command::NextSong => transport.next_song(),
        }
    }
}

/// Transport controls exposed by the player.
pub trait TransportControl {
    /// Flip between playing and paused.
    fn toggle_play_pause(&mut self);

    /// Advance to the next song, reset playback position, start playing.
    fn next_song(&mut self);

    /// Go back to the previous song, reset playback position, start playing.
    fn previous_song(&mut self);
}

/// Read-only now-playing queries exposed by the player.
pub trait NowPlaying {
    /// Title of the current song.
    fn current_song_title(&self) -> &str;

    /// Artist of the current song.
    fn current_song_artist(&self) -> &str;

    /// Index of the current song in the song table.
    fn current_song_index(&self) -> usize;

    /// Whether the player is currently playing.
    fn is_playing(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::{Command, TransportControl};

    #[derive(Default)]
    struct Counts {
        toggles: u32,
        nexts: u32,
        previouses: u32,
    }

    impl TransportControl for Counts {
        fn toggle_play_pause(&mut self) {
            self.toggles += 1;
        }
        fn next_song(&mut self) {
            self.nexts += 1;
        }
        fn previous_song(&mut self) {
            self.previouses += 1;
        }
    }

    #[test]
    fn test_dispatch_routes_each_command() {
        let mut counts = Counts::default();
        Command::PlayPause.dispatch(&mut counts);
        Command::NextSong.dispatch(&mut counts);
        Command::NextSong.dispatch(&mut counts);
        Command::PreviousSong.dispatch(&mut counts);
        assert_eq!(counts.toggles, 1);
        assert_eq!(counts.nexts, 2);
        assert_eq!(counts.previouses, 1);
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, cmd) in Command::ALL.iter().enumerate() {
            assert_eq!(cmd.index(), i);
        }
    }
}
