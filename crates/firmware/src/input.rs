//! Front-panel button routing.
//!
//! Buttons are a second source of the same [`Command`]s the link delivers,
//! and go through the same [`Command::dispatch`] path into the player.

pub use platform::{Button, InputDevice, InputEvent};
use platform::{Command, Instant, Task, TransportControl};

/// Command bound to a button, if any.
pub const fn button_command(button: Button) -> Option<Command> {
    match button {
        Button::PlayPause => Some(Command::PlayPause),
        Button::Previous => Some(Command::PreviousSong),
        Button::Next => Some(Command::NextSong),
        Button::Aux => None,
    }
}

/// Polls an [`InputDevice`] and dispatches at most one press per tick.
pub struct ButtonRouter<I> {
    input: I,
    dispatched: u32,
}

impl<I: InputDevice> ButtonRouter<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            dispatched: 0,
        }
    }

    /// Number of presses turned into commands so far.
    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

impl<I, T> Task<T> for ButtonRouter<I>
where
    I: InputDevice,
    T: TransportControl + ?Sized,
{
    fn initialize(&mut self, _now: Instant, _player: &mut T) {
        self.dispatched = 0;
    }

    fn run_tick(&mut self, _now: Instant, player: &mut T) {
        let Some(InputEvent::ButtonPress(button)) = self.input.poll_event() else {
            return;
        };
        if let Some(command) = button_command(button) {
            #[cfg(feature = "defmt")]
            defmt::debug!("button: {=str}", command.name());
            #[cfg(all(feature = "emulator", not(feature = "defmt")))]
            tracing::debug!(command = command.name(), "button");
            command.dispatch(player);
            self.dispatched = self.dispatched.wrapping_add(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use platform::mocks::{MockInput, RecordingTransport};

    fn router_with(buttons: &[Button]) -> ButtonRouter<MockInput> {
        let mut input = MockInput::new();
        for b in buttons {
            input.press(*b).expect("queue has room");
        }
        ButtonRouter::new(input)
    }

    #[test]
    fn test_buttons_map_to_commands() {
        assert_eq!(button_command(Button::PlayPause), Some(Command::PlayPause));
        assert_eq!(button_command(Button::Previous), Some(Command::PreviousSong));
        assert_eq!(button_command(Button::Next), Some(Command::NextSong));
        assert_eq!(button_command(Button::Aux), None);
    }

    #[test]
    fn test_one_press_per_tick() {
        let mut router = router_with(&[Button::Next, Button::PlayPause]);
        let mut player = RecordingTransport::new();

        router.run_tick(Instant::from_millis(1), &mut player);
        assert_eq!(player.commands.as_slice(), &[Command::NextSong]);
        assert_eq!(router.input().pending(), 1);

        router.run_tick(Instant::from_millis(2), &mut player);
        assert_eq!(
            player.commands.as_slice(),
            &[Command::NextSong, Command::PlayPause]
        );
        assert_eq!(router.dispatched(), 2);
    }

    #[test]
    fn test_aux_button_is_ignored() {
        let mut router = router_with(&[Button::Aux]);
        let mut player = RecordingTransport::new();

        router.run_tick(Instant::from_millis(1), &mut player);
        assert!(player.commands.is_empty());
        assert_eq!(router.dispatched(), 0);
        assert_eq!(router.input().pending(), 0);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut router = router_with(&[]);
        let mut player = RecordingTransport::new();
        router.run_tick(Instant::from_millis(1), &mut player);
        assert!(player.commands.is_empty());
    }
}
