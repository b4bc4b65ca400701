//! Host simulator: the full application against a scripted remote and a
//! scripted front panel.
//!
//! ```text
//! RUST_LOG=info cargo run -p firmware --bin simulator --features emulator [-- SECONDS]
//! ```
//!
//! Runs in real time for `SECONDS` (default 40) on a 1 ms interval.

use firmware::config::{CHANNEL_CONFIG, TICK_PERIOD_MS};
use firmware::sim::{
    SimButtons, SimRadio, TracingDisplay, TracingIndicator, TracingTone, PANEL_SCRIPT, SCRIPT,
};
use firmware::App;
use platform::{Instant, NowPlaying};
use playback::SongTable;
use tracing_subscriber::EnvFilter;

const DEFAULT_RUN_SECONDS: u32 = 40;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seconds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u32>().ok())
        .unwrap_or(DEFAULT_RUN_SECONDS);
    let end_ms = seconds.saturating_mul(1_000);

    let songs = match SongTable::builtin() {
        Ok(songs) => songs,
        Err(e) => {
            tracing::error!(error = %e, "song table rejected");
            std::process::exit(1);
        }
    };

    tracing::info!(
        app = platform::config::APP_NAME,
        version = platform::config::APP_VERSION,
        seconds,
        "simulator start"
    );

    let mut app = App::new(
        CHANNEL_CONFIG,
        SimRadio::new(SCRIPT),
        TracingIndicator::new(),
        SimButtons::new(PANEL_SCRIPT),
        TracingTone::new(),
        TracingDisplay::new(),
        songs,
    );
    app.initialize(Instant::ZERO);

    let mut interval = tokio::time::interval(std::time::Duration::from_millis(TICK_PERIOD_MS));
    let mut elapsed_ms: u32 = 0;
    while elapsed_ms < end_ms {
        interval.tick().await;
        elapsed_ms = elapsed_ms.saturating_add(1);
        let now = Instant::from_millis(elapsed_ms);
        app.link_mut().radio_mut().advance(now);
        app.buttons_mut().input_mut().advance(now);
        app.tick(now);
    }

    tracing::info!(
        song = app.player().current_song_index(),
        playing = app.player().is_playing(),
        reconnects = app.link().reconnect_count(),
        open_timeouts = app.link().open_timeouts(),
        discarded = app.link().discarded_messages(),
        "simulator done"
    );
}
