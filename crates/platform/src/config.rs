//! Application configuration and constants
//!
//! Central naming and version values. Board-specific settings (link channel,
//! pin maps) live in the `firmware` crate.

/// The application name
pub const APP_NAME: &str = "ANT Music Box";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Firmware version major number
pub const VERSION_MAJOR: u8 = 1;

/// Firmware version minor number
pub const VERSION_MINOR: u8 = 20;

/// Length of one scheduler quantum in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1;

/// Boot banner for the debug log
pub const fn boot_banner() -> &'static str {
    "ANT Music Box - two voice player"
}
