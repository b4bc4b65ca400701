//! Slave channel configuration helpers.

use platform::link::DEFAULT_NETWORK_KEY;
use platform::{ChannelConfig, ChannelId, ChannelRole, TxPower};

/// Default channel period: 0x2000 / 32768 s, i.e. 4 messages per second.
pub const DEFAULT_PERIOD: u16 = 0x2000;

/// Default RF channel: 2466 MHz.
pub const DEFAULT_RF_FREQUENCY: u8 = 66;

/// Base of the ANT RF band in MHz.
pub const RF_BASE_MHZ: u16 = 2400;

/// A slave channel pairing with one master, using the public network key,
/// the default period and RF channel, and full transmit power.
#[must_use]
pub const fn slave_channel(
    channel: u8,
    device_id: u16,
    device_type: u8,
    transmission_type: u8,
) -> ChannelConfig {
    ChannelConfig {
        channel: ChannelId(channel),
        role: ChannelRole::Slave,
        period: DEFAULT_PERIOD,
        device_id,
        device_type,
        transmission_type,
        rf_frequency: DEFAULT_RF_FREQUENCY,
        tx_power: TxPower::Plus4dBm,
        network_key: DEFAULT_NETWORK_KEY,
    }
}

/// Carrier frequency of a configuration in MHz.
#[must_use]
pub const fn rf_frequency_mhz(config: &ChannelConfig) -> u16 {
    RF_BASE_MHZ.saturating_add(config.rf_frequency as u16)
}

/// Messages per second for a channel period (32768 / period).
#[must_use]
pub const fn message_rate_hz(config: &ChannelConfig) -> u32 {
    match 32_768_u32.checked_div(config.period as u32) {
        Some(rate) => rate,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slave_channel_defaults() {
        let cfg = slave_channel(0, 0x9070, 15, 77);
        assert_eq!(cfg.role, ChannelRole::Slave);
        assert_eq!(cfg.channel, ChannelId(0));
        assert_eq!(cfg.tx_power, TxPower::Plus4dBm);
        assert_eq!(cfg.network_key, DEFAULT_NETWORK_KEY);
    }

    #[test]
    fn test_default_rf_and_rate() {
        let cfg = slave_channel(0, 1, 1, 1);
        assert_eq!(rf_frequency_mhz(&cfg), 2466);
        assert_eq!(message_rate_hz(&cfg), 4);
    }
}
