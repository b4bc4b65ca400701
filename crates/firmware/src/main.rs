//! ANT music box firmware - main entry point
//!
//! Hardware-only entry point for STM32H743ZI.

#![no_std]
#![no_main]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, OutputType, Pin as _, Pull, Speed};
use embassy_stm32::time::khz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::timer::CountingMode;
use embassy_time::{Duration, Ticker, Timer};

use firmware::board::{DetachedDisplay, DetachedRadio, GpioButtons, GpioIndicator, PwmTone};
use firmware::config::{CHANNEL_CONFIG, TICK_PERIOD_MS};
use firmware::App;
use playback::SongTable;

// Panic handler
use panic_probe as _;

/// Clock tree: HSI (64 MHz) / 4 x 50 / 2 = 400 MHz system clock.
fn build_embassy_config() -> embassy_stm32::Config {
    use embassy_stm32::rcc::*;

    let mut config = embassy_stm32::Config::default();
    config.rcc.hsi = Some(HSIPrescaler::DIV1);
    config.rcc.csi = true;
    config.rcc.pll1 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV4,
        mul: PllMul::MUL50,
        divp: Some(PllDiv::DIV2), // 400 MHz - system clock
        divq: None,
        divr: None,
    });
    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV2; // 200 MHz
    config.rcc.apb1_pre = APBPrescaler::DIV2; // 100 MHz (TIM2/3/4 kernel x2)
    config.rcc.apb2_pre = APBPrescaler::DIV2;
    config.rcc.apb3_pre = APBPrescaler::DIV2;
    config.rcc.apb4_pre = APBPrescaler::DIV2;
    config.rcc.voltage_scale = VoltageScale::Scale1;
    config
}

/// Embassy time truncated to the wrapping 32-bit millisecond base.
#[allow(clippy::cast_possible_truncation)]
fn now() -> platform::Instant {
    platform::Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    defmt::info!(
        "{=str} v{=str}",
        platform::config::APP_NAME,
        platform::config::APP_VERSION
    );

    let p = embassy_stm32::init(build_embassy_config());

    // -----------------------------------------------------------------------
    // Pin assignments:
    //   PA6  = TIM3_CH1  right buzzer
    //   PD12 = TIM4_CH1  left buzzer
    //   PB14 = red LED, PB0 = green LED, PB7 = blue LED, PE1 = white LED
    //   PA0  = play/pause, PA1 = previous, PA2 = next
    //          (active-low, internal pull-up)
    // -----------------------------------------------------------------------
    let right = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new_ch1(p.PA6, OutputType::PushPull)),
        None,
        None,
        None,
        khz(1),
        CountingMode::EdgeAlignedUp,
    );
    let left = SimplePwm::new(
        p.TIM4,
        Some(PwmPin::new_ch1(p.PD12, OutputType::PushPull)),
        None,
        None,
        None,
        khz(1),
        CountingMode::EdgeAlignedUp,
    );
    let tone = PwmTone::new(right, left);

    let leds = GpioIndicator::new(
        Output::new(p.PB14.degrade(), Level::Low, Speed::Low),
        Output::new(p.PB0.degrade(), Level::Low, Speed::Low),
        Output::new(p.PB7.degrade(), Level::Low, Speed::Low),
        Output::new(p.PE1.degrade(), Level::Low, Speed::Low),
    );

    let buttons = GpioButtons::new(
        Input::new(p.PA0.degrade(), Pull::Up),
        Input::new(p.PA1.degrade(), Pull::Up),
        Input::new(p.PA2.degrade(), Pull::Up),
    );

    let songs = match SongTable::builtin() {
        Ok(songs) => songs,
        Err(e) => {
            defmt::error!("song table rejected: {}", e);
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    };
    defmt::info!("{=usize} songs", songs.len());

    let mut app = App::new(
        CHANNEL_CONFIG,
        DetachedRadio,
        leds,
        buttons,
        tone,
        DetachedDisplay,
        songs,
    );
    app.initialize(now());

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    loop {
        ticker.next().await;
        app.tick(now());
    }
}
