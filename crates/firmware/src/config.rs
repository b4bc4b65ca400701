//! Board configuration.
//!
//! Everything here is `const`: the link channel is fixed at build time and
//! assigned once at startup.

use link::channel::slave_channel;
use platform::ChannelConfig;

/// Co-processor channel used for the remote.
pub const ANT_CHANNEL: u8 = 0;

/// Device number of the paired master (the remote).
pub const MASTER_DEVICE_ID: u16 = 0x9070;

/// Device type code shared with the master.
pub const MASTER_DEVICE_TYPE: u8 = 15;

/// Transmission type code shared with the master.
pub const MASTER_TRANSMISSION_TYPE: u8 = 77;

/// Link channel configuration applied at startup.
pub const CHANNEL_CONFIG: ChannelConfig = slave_channel(
    ANT_CHANNEL,
    MASTER_DEVICE_ID,
    MASTER_DEVICE_TYPE,
    MASTER_TRANSMISSION_TYPE,
);

/// Scheduler quantum in milliseconds.
pub const TICK_PERIOD_MS: u64 = platform::config::TICK_PERIOD_MS as u64;

/// LCD rows.
pub const LCD_ROWS: usize = 2;

/// LCD columns.
pub const LCD_COLUMNS: usize = platform::LCD_COLUMNS;

/// Consecutive identical samples before a button level is trusted.
/// One sample per tick, so this is also the debounce time in ms.
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 20;

#[cfg(test)]
mod tests {
    use super::*;
    use platform::{ChannelId, ChannelRole};

    #[test]
    fn test_channel_config_pairs_with_remote() {
        assert_eq!(CHANNEL_CONFIG.channel, ChannelId(ANT_CHANNEL));
        assert_eq!(CHANNEL_CONFIG.role, ChannelRole::Slave);
        assert_eq!(CHANNEL_CONFIG.device_id, 0x9070);
        assert_eq!(CHANNEL_CONFIG.device_type, 15);
        assert_eq!(CHANNEL_CONFIG.transmission_type, 77);
    }

    #[test]
    fn test_tick_is_one_millisecond() {
        assert_eq!(TICK_PERIOD_MS, 1);
    }
}
