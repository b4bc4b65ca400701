//! Whole-application scenarios over simulated time.
// Test file: expect/arithmetic are intentional test mechanisms.
#![allow(clippy::expect_used, clippy::panic, clippy::arithmetic_side_effects)]

use firmware::config::CHANNEL_CONFIG;
use firmware::App;
use link::{CommandFrame, ConnectionState, LinkFailure};
use link::manager::{CONNECTED_PATTERN, FAULT_PATTERN, SEARCH_PATTERN};
use platform::mocks::{MockDisplay, MockIndicator, MockInput, MockRadio, MockTone};
use platform::{
    Button, ChannelStatus, DisplayLine, InboundMessage, Instant, Led, LedPattern, NowPlaying,
    ToneChannel,
};
use playback::notes::F5;
use playback::SongTable;
use ui::BUTTON_BANNER;

type TestApp = App<'static, MockRadio, MockIndicator, MockInput, MockTone, MockDisplay>;

fn app() -> TestApp {
    App::new(
        CHANNEL_CONFIG,
        MockRadio::new(),
        MockIndicator::new(),
        MockInput::new(),
        MockTone::new(),
        MockDisplay::new(),
        SongTable::builtin().expect("built-in songs validate"),
    )
}

fn at(ms: u32) -> Instant {
    Instant::from_millis(ms)
}

fn run(app: &mut TestApp, from: u32, to: u32) {
    for t in from..=to {
        app.tick(at(t));
    }
}

/// Initialize, let the radio report open, and tick until the link is up.
/// Returns the last tick time.
fn connect(app: &mut TestApp) -> u32 {
    app.initialize(at(0));
    app.link_mut().radio_mut().status = ChannelStatus::Open;
    for t in 1..=1_000 {
        app.tick(at(t));
        if app.link().state() == ConnectionState::Open {
            return t;
        }
    }
    panic!("link never opened");
}

fn frame(play_pause: u8, previous: u8, next: u8) -> InboundMessage {
    InboundMessage::data(CommandFrame::new([play_pause, previous, next]).encode())
}

#[test]
fn boots_paused_with_banner_and_title() {
    let mut app = app();
    app.initialize(at(0));
    assert!(!app.player().is_playing());
    assert_eq!(app.display().display().line(DisplayLine::Line2), BUTTON_BANNER);

    run(&mut app, 1, 200);
    assert_eq!(
        app.display().display().line(DisplayLine::Line1),
        "Music Box Theme - Tr"
    );
    for channel in ToneChannel::ALL {
        assert_eq!(app.player().output().sounding(channel), 0);
    }
}

#[test]
fn link_leds_follow_connection() {
    let mut app = app();
    app.initialize(at(0));
    run(&mut app, 1, 501);
    assert_eq!(app.link().state(), ConnectionState::AwaitingOpen);
    assert_eq!(app.link().indicator().pattern(Led::Green), SEARCH_PATTERN);

    app.link_mut().radio_mut().status = ChannelStatus::Open;
    app.tick(at(502));
    assert_eq!(app.link().state(), ConnectionState::Open);
    assert_eq!(app.link().indicator().pattern(Led::Green), CONNECTED_PATTERN);
    // The LED driver is ticked once per quantum.
    assert_eq!(app.link().indicator().ticks(), 502);
}

#[test]
fn remote_toggle_is_heard_in_the_same_quantum() {
    let mut app = app();
    let t = connect(&mut app);
    app.link_mut()
        .radio_mut()
        .push_message(frame(1, 0, 0))
        .expect("inbox has room");

    app.tick(at(t + 1));
    assert!(app.player().is_playing());
    assert_eq!(app.player().output().sounding(ToneChannel::Right), F5);
}

#[test]
fn repeated_broadcast_toggles_once() {
    let mut app = app();
    let t = connect(&mut app);
    for _ in 0..4 {
        app.link_mut()
            .radio_mut()
            .push_message(frame(1, 0, 0))
            .expect("inbox has room");
    }
    run(&mut app, t + 1, t + 10);
    assert!(app.player().is_playing());
}

#[test]
fn link_runs_before_buttons() {
    let mut app = app();
    let t = connect(&mut app);
    app.link_mut()
        .radio_mut()
        .push_message(frame(1, 0, 0))
        .expect("inbox has room");
    app.buttons_mut()
        .input_mut()
        .press(Button::Next)
        .expect("queue has room");

    // Toggle (paused -> playing) then next (stays playing).
    app.tick(at(t + 1));
    assert!(app.player().is_playing());
    assert_eq!(app.player().current_song_index(), 1);
}

#[test]
fn buttons_work_without_a_link() {
    let mut app = app();
    app.link_mut().radio_mut().configure_ok = false;
    app.initialize(at(0));
    assert_eq!(app.link().state(), ConnectionState::Error);
    assert_eq!(
        app.link().last_failure(),
        Some(LinkFailure::ConfigurationFailure)
    );
    assert_eq!(app.link().indicator().pattern(Led::Red), FAULT_PATTERN);

    app.buttons_mut()
        .input_mut()
        .press(Button::Next)
        .expect("queue has room");
    run(&mut app, 1, 200);
    assert!(app.player().is_playing());
    assert_eq!(app.player().current_song_index(), 1);
    assert_eq!(
        app.display().display().line(DisplayLine::Line1),
        "Hot Cross Buns - ?  "
    );

    app.buttons_mut()
        .input_mut()
        .press(Button::PlayPause)
        .expect("queue has room");
    app.tick(at(201));
    assert!(!app.player().is_playing());
    for channel in ToneChannel::ALL {
        assert_eq!(app.player().output().sounding(channel), 0);
    }
    assert_eq!(app.buttons().dispatched(), 2);
}

#[test]
fn previous_from_first_song_wraps_to_last() {
    let mut app = app();
    app.initialize(at(0));
    app.buttons_mut()
        .input_mut()
        .press(Button::Previous)
        .expect("queue has room");
    app.tick(at(1));
    assert_eq!(app.player().current_song_index(), 2);
    assert!(app.player().is_playing());
}

#[test]
fn dropped_link_reconnects_while_music_plays() {
    let mut app = app();
    let t = connect(&mut app);
    app.link_mut()
        .radio_mut()
        .push_message(frame(1, 0, 0))
        .expect("inbox has room");
    app.tick(at(t + 1));
    assert!(app.player().is_playing());

    app.link_mut().radio_mut().status = ChannelStatus::Closed;
    app.tick(at(t + 2));
    assert_eq!(app.link().state(), ConnectionState::Closing);
    app.tick(at(t + 3));
    assert_eq!(app.link().state(), ConnectionState::Idle);
    assert_eq!(app.link().reconnect_count(), 1);
    assert_eq!(app.link().indicator().pattern(Led::Green), LedPattern::Off);

    app.link_mut().radio_mut().status = ChannelStatus::Open;
    run(&mut app, t + 4, t + 5);
    assert_eq!(app.link().state(), ConnectionState::Open);
    assert!(app.player().is_playing());

    // Counters survive the reconnect: the same frame does not toggle again.
    app.link_mut()
        .radio_mut()
        .push_message(frame(1, 0, 0))
        .expect("inbox has room");
    app.tick(at(t + 6));
    assert!(app.player().is_playing());
}
