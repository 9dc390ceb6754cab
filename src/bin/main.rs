//! Analog watch face firmware
//! ========================================
//! needs to be run in WSL2 terminal
//! source ~/export-esp.sh
//! cargo run --release --features devkit-esp32s3-disp128
//! ========================================
//!
//! Reads the PCF85063 once at boot, then keeps time from the system timer
//! and redraws the analog face on the GC9A01 every second.

//% CHIPS: esp32s3

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

// Module imports
use analog_face::{
    display::setup_display,
    rtc_pcf85063::Pcf85063,
    wiring::{init_board_pins, BoardPins},
    FaceConfig, GraphicsContext, TickService, TimeSample, WallClock, WatchFace,
};

use esp_backtrace as _;

// ESP-HAL imports
use esp_hal::{
    delay::Delay,
    i2c::master::{Config as I2cConfig, I2c},
    main,
    time::{Instant, Rate},
    Config,
};

use embedded_graphics::prelude::Dimensions;
use esp_println::println;

// How often the clock is sampled; frames are only drawn when the second changes.
const POLL_MS: u32 = 50;

#[main]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);
    println!("analog face booting");

    // Initialize peripherals
    let peripherals = esp_hal::init(Config::default());
    let BoardPins {
        display_pins,
        rtc_pins,
    } = init_board_pins(peripherals);

    let mut display_buf = [0u8; 512];
    let mut display = setup_display(display_pins, &mut display_buf);

    // -------------------- RTC --------------------
    let i2c = I2c::new(
        rtc_pins.i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(400)),
    )
    .expect("I2C0 config rejected")
    .with_sda(rtc_pins.sda)
    .with_scl(rtc_pins.scl);

    let mut rtc = Pcf85063::new(i2c);
    let boot_secs = match rtc.now() {
        Ok(now) => {
            log::info!(
                "[RTC] boot time {:02}:{:02}:{:02}",
                now.hour,
                now.minute,
                now.second
            );
            now.seconds_of_day()
        }
        Err(e) => {
            log::warn!("[RTC] {}, starting at 00:00:00", e);
            0
        }
    };
    let boot = Instant::now();

    // -------------------- Face --------------------
    let bounds = display.bounding_box();
    let mut face = WatchFace::new(FaceConfig::default(), bounds).expect("invalid face config");
    let mut ticks = TickService::new();
    let delay = Delay::new();

    // Main loop: sample the clock, redraw on every new second
    loop {
        let elapsed = boot.elapsed().as_secs() as u32;
        let now = TimeSample::from_unix_seconds(boot_secs.wrapping_add(elapsed));

        if ticks.last() != Some(now) {
            let mut ctx =
                GraphicsContext::new(&mut display).with_background(face.config().background);
            ctx.clear();
            ticks.tick(now, &mut face, bounds, &mut ctx);
        }

        delay.delay_millis(POLL_MS);
    }
}
