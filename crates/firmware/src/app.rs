//! The application: four tasks and their per-quantum order.
//!
//! Every call to [`App::tick`] runs, in this order:
//!
//! 1. the connection manager, lent the sequencer as its transport,
//! 2. the LED driver behind the connection manager's indicator,
//! 3. the button router, lent the sequencer as its transport,
//! 4. the note sequencer,
//! 5. the now-playing display, lent the sequencer as its source.
//!
//! A command received over the link or from a button is therefore heard in
//! the same quantum it arrives in.

use link::ConnectionManager;
use platform::{
    ChannelConfig, CharacterDisplay, Indicator, InputDevice, Instant, LinkRadio, Task, ToneOutput,
};
use playback::{NoteSequencer, SongTable};
use ui::NowPlayingTask;

use crate::input::ButtonRouter;

/// All application tasks.
pub struct App<'a, R, L, I, O, D> {
    link: ConnectionManager<R, L>,
    buttons: ButtonRouter<I>,
    player: NoteSequencer<'a, O>,
    display: NowPlayingTask<D>,
}

impl<'a, R, L, I, O, D> App<'a, R, L, I, O, D>
where
    R: LinkRadio,
    L: Indicator + Task,
    I: InputDevice,
    O: ToneOutput,
    D: CharacterDisplay,
{
    /// Wire the tasks. Nothing touches a collaborator until
    /// [`initialize`](Self::initialize).
    pub fn new(
        config: ChannelConfig,
        radio: R,
        indicator: L,
        input: I,
        tone: O,
        display: D,
        songs: SongTable<'a>,
    ) -> Self {
        Self {
            link: ConnectionManager::new(config, radio, indicator),
            buttons: ButtonRouter::new(input),
            player: NoteSequencer::new(songs, tone),
            display: NowPlayingTask::new(display),
        }
    }

    /// Run every task's `initialize`, in tick order.
    pub fn initialize(&mut self, now: Instant) {
        let Self {
            link,
            buttons,
            player,
            display,
        } = self;
        link.initialize(now, player);
        link.indicator_mut().initialize(now, &mut ());
        buttons.initialize(now, player);
        player.initialize(now, &mut ());
        display.initialize(now, player);
    }

    /// Run one scheduler quantum.
    pub fn tick(&mut self, now: Instant) {
        let Self {
            link,
            buttons,
            player,
            display,
        } = self;
        link.run_tick(now, player);
        link.indicator_mut().run_tick(now, &mut ());
        buttons.run_tick(now, player);
        player.run_tick(now, &mut ());
        display.run_tick(now, player);
    }

    pub fn link(&self) -> &ConnectionManager<R, L> {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut ConnectionManager<R, L> {
        &mut self.link
    }

    pub fn buttons(&self) -> &ButtonRouter<I> {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonRouter<I> {
        &mut self.buttons
    }

    pub fn player(&self) -> &NoteSequencer<'a, O> {
        &self.player
    }

    pub fn display(&self) -> &NowPlayingTask<D> {
        &self.display
    }
}
