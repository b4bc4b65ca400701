//! Input device abstraction

/// Input device trait for the front-panel buttons
pub trait InputDevice {
    /// Poll for event (non-blocking). Debouncing is the device's job.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Input events from buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button pressed (reported once per press)
    ButtonPress(Button),
}

/// Physical buttons, labelled by the banner on display line 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// BUTTON0: play/pause ("||>")
    PlayPause,
    /// BUTTON1: previous song ("<<")
    Previous,
    /// BUTTON2: next song (">>")
    Next,
    /// BUTTON3: unassigned
    Aux,
}

impl Button {
    /// All buttons, in board order.
    pub const ALL: [Button; 4] = [Button::PlayPause, Button::Previous, Button::Next, Button::Aux];
}
