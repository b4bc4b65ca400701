//! Board drivers.
//!
//! LEDs and buttons are written against `embedded-hal` 1.0 digital pins so
//! they run on the host under `embedded-hal-mock`. The PWM buzzers need an
//! Embassy timer and only exist with the `hardware` feature.

use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Deque;
use platform::{
    Button, ChannelConfig, ChannelId, ChannelStatus, CharacterDisplay, DisplayLine,
    InboundMessage, Indicator, InputDevice, InputEvent, Instant, Led, LedPattern, LinkRadio, Task,
};

use crate::config::BUTTON_DEBOUNCE_SAMPLES;

// ---------------------------------------------------------------------------
// LEDs
// ---------------------------------------------------------------------------

struct LedSlot<P> {
    pin: P,
    pattern: LedPattern,
    lit: bool,
    /// Start of the current blink phase. `None` until the first tick after
    /// the pattern changed.
    since: Option<Instant>,
}

impl<P: OutputPin> LedSlot<P> {
    fn drive(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_ok() {
            self.lit = on;
        }
    }
}

/// Four active-high LEDs. Blink patterns are rendered by ticking this as
/// a task.
pub struct GpioIndicator<P> {
    leds: [LedSlot<P>; 4],
}

impl<P: OutputPin> GpioIndicator<P> {
    pub fn new(red: P, green: P, blue: P, white: P) -> Self {
        let slot = |pin| LedSlot {
            pin,
            pattern: LedPattern::Off,
            lit: false,
            since: None,
        };
        Self {
            leds: [slot(red), slot(green), slot(blue), slot(white)],
        }
    }

    /// Pattern currently shown on `led`.
    pub fn pattern(&self, led: Led) -> LedPattern {
        self.leds
            .get(led.index())
            .map_or(LedPattern::Off, |slot| slot.pattern)
    }

    /// Whether `led` is lit right now.
    pub fn is_lit(&self, led: Led) -> bool {
        self.leds.get(led.index()).is_some_and(|slot| slot.lit)
    }

    /// Give the pins back, in red, green, blue, white order.
    pub fn release(self) -> [P; 4] {
        self.leds.map(|slot| slot.pin)
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_indicator(&mut self, led: Led, pattern: LedPattern) {
        let Some(slot) = self.leds.get_mut(led.index()) else {
            return;
        };
        if slot.pattern == pattern {
            return;
        }
        slot.pattern = pattern;
        slot.since = None;
        slot.drive(pattern != LedPattern::Off);
    }
}

impl<P: OutputPin> Task for GpioIndicator<P> {
    fn initialize(&mut self, now: Instant, _ctx: &mut ()) {
        for slot in &mut self.leds {
            slot.since = Some(now);
            slot.drive(slot.pattern != LedPattern::Off);
        }
    }

    fn run_tick(&mut self, now: Instant, _ctx: &mut ()) {
        for slot in &mut self.leds {
            let LedPattern::Blink(rate) = slot.pattern else {
                continue;
            };
            // The first half period counts from the tick that sees the
            // new pattern.
            let Some(since) = slot.since else {
                slot.since = Some(now);
                continue;
            };
            if now.is_time_up(since, rate.half_period_ms()) {
                let on = !slot.lit;
                slot.drive(on);
                slot.since = Some(now);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

struct ButtonSlot<P> {
    button: Button,
    pin: P,
    pressed: bool,
    streak: u8,
}

/// Three active-low buttons with pull-ups, debounced by counting
/// consecutive samples. Each [`InputDevice::poll_event`] call takes one
/// sample of every pin.
pub struct GpioButtons<P> {
    buttons: [ButtonSlot<P>; 3],
    samples: u8,
    pending: Deque<InputEvent, 4>,
}

impl<P: InputPin> GpioButtons<P> {
    pub fn new(play_pause: P, previous: P, next: P) -> Self {
        let slot = |button, pin| ButtonSlot {
            button,
            pin,
            pressed: false,
            streak: 0,
        };
        Self {
            buttons: [
                slot(Button::PlayPause, play_pause),
                slot(Button::Previous, previous),
                slot(Button::Next, next),
            ],
            samples: BUTTON_DEBOUNCE_SAMPLES,
            pending: Deque::new(),
        }
    }

    /// Override the number of stable samples needed (minimum 1).
    #[must_use]
    pub fn with_debounce(mut self, samples: u8) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Give the pins back, in play/pause, previous, next order.
    pub fn release(self) -> [P; 3] {
        self.buttons.map(|slot| slot.pin)
    }

    fn sample(&mut self) {
        for slot in &mut self.buttons {
            // A pin read error counts as released.
            let down = slot.pin.is_low().unwrap_or(false);
            if down == slot.pressed {
                slot.streak = 0;
                continue;
            }
            slot.streak = slot.streak.saturating_add(1);
            if slot.streak >= self.samples {
                slot.pressed = down;
                slot.streak = 0;
                if down {
                    // Full queue: the press is dropped.
                    let _ = self.pending.push_back(InputEvent::ButtonPress(slot.button));
                }
            }
        }
    }
}

impl<P: InputPin> InputDevice for GpioButtons<P> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.sample();
        self.pending.pop_front()
    }
}

// ---------------------------------------------------------------------------
// Collaborators without a driver yet
// ---------------------------------------------------------------------------

/// Radio used until an ANT co-processor driver is linked.
///
/// Channel configuration and open always fail, so the link task settles in
/// its error state at boot while the buttons keep driving the player. It is
/// also its own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("no ANT co-processor driver linked")]
pub struct DetachedRadio;

impl LinkRadio for DetachedRadio {
    type Error = DetachedRadio;

    fn configure_channel(&mut self, _config: &ChannelConfig) -> Result<(), Self::Error> {
        Err(DetachedRadio)
    }

    fn open_channel(&mut self, _channel: ChannelId) -> Result<(), Self::Error> {
        Err(DetachedRadio)
    }

    fn close_channel(&mut self, _channel: ChannelId) {}

    fn channel_status(&mut self, _channel: ChannelId) -> ChannelStatus {
        ChannelStatus::Closed
    }

    fn try_read_message(&mut self) -> Option<InboundMessage> {
        None
    }
}

/// Display sink used when no LCD is fitted. Writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedDisplay;

impl CharacterDisplay for DetachedDisplay {
    fn write_line(&mut self, _line: DisplayLine, _text: &str) {}

    fn clear(&mut self) {}
}

// ---------------------------------------------------------------------------
// Buzzers (hardware only)
// ---------------------------------------------------------------------------

#[cfg(feature = "hardware")]
pub use pwm::PwmTone;

#[cfg(feature = "hardware")]
mod pwm {
    use embassy_stm32::peripherals::{TIM3, TIM4};
    use embassy_stm32::time::Hertz;
    use embassy_stm32::timer::simple_pwm::SimplePwm;
    use embassy_stm32::timer::Channel;
    use platform::{ToneChannel, ToneOutput};

    /// Two piezo buzzers on timer PWM outputs, driven at 50 % duty.
    ///
    /// Right channel: TIM3 CH1. Left channel: TIM4 CH1.
    pub struct PwmTone<'d> {
        right: SimplePwm<'d, TIM3>,
        left: SimplePwm<'d, TIM4>,
    }

    impl<'d> PwmTone<'d> {
        pub fn new(right: SimplePwm<'d, TIM3>, left: SimplePwm<'d, TIM4>) -> Self {
            let mut tone = Self { right, left };
            tone.disable(ToneChannel::Right);
            tone.disable(ToneChannel::Left);
            tone
        }
    }

    impl ToneOutput for PwmTone<'_> {
        fn set_frequency(&mut self, channel: ToneChannel, hz: u16) {
            // A zero period is not programmable; rests are silenced by
            // disable() anyway.
            if hz == 0 {
                return;
            }
            let freq = Hertz(u32::from(hz));
            match channel {
                ToneChannel::Right => {
                    self.right.set_frequency(freq);
                    let half = self.right.get_max_duty() / 2;
                    self.right.set_duty(Channel::Ch1, half);
                }
                ToneChannel::Left => {
                    self.left.set_frequency(freq);
                    let half = self.left.get_max_duty() / 2;
                    self.left.set_duty(Channel::Ch1, half);
                }
            }
        }

        fn enable(&mut self, channel: ToneChannel) {
            match channel {
                ToneChannel::Right => self.right.enable(Channel::Ch1),
                ToneChannel::Left => self.left.enable(Channel::Ch1),
            }
        }

        fn disable(&mut self, channel: ToneChannel) {
            match channel {
                ToneChannel::Right => self.right.disable(Channel::Ch1),
                ToneChannel::Left => self.left.disable(Channel::Ch1),
            }
        }
    }
}
