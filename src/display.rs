//! GC9A01 (240x240 round LCD) bring-up over SPI2 via mipidsi.

use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    delay::Delay,
    gpio::Output,
    spi::master::{Config as SpiConfig, Spi},
    spi::Mode,
    time::Rate,
    Blocking,
};
use mipidsi::interface::SpiInterface;
use mipidsi::{
    models::GC9A01,
    options::{ColorInversion, ColorOrder, Orientation, Rotation},
    Builder as DisplayBuilder,
};

use crate::wiring::DisplayPins;

pub const RESOLUTION: u16 = 240;

pub type DisplayType<'a> = mipidsi::Display<
    SpiInterface<'a, ExclusiveDevice<Spi<'a, Blocking>, Output<'a>, NoDelay>, Output<'a>>,
    GC9A01,
    Output<'a>,
>;

/// Resets the panel, turns the backlight on and returns a ready display.
///
/// `display_buf` batches pixel writes for the SPI interface. Any failure here
/// leaves the watch without a screen, so it panics.
pub fn setup_display<'a>(display_pins: DisplayPins<'a>, display_buf: &'a mut [u8]) -> DisplayType<'a> {
    let DisplayPins {
        spi2,
        spi_sck,
        spi_mosi,
        lcd_cs,
        lcd_dc,
        lcd_rst,
        mut lcd_bl,
    } = display_pins;

    // SPI @ 40 MHz, Mode 0
    let spi_cfg = SpiConfig::default()
        .with_frequency(Rate::from_mhz(40))
        .with_mode(Mode::_0);

    let spi = Spi::new(spi2, spi_cfg)
        .expect("SPI2 config rejected")
        .with_sck(spi_sck)
        .with_mosi(spi_mosi);

    let spi_dev = ExclusiveDevice::new(spi, lcd_cs, NoDelay).expect("LCD CS pin unusable");
    let di = SpiInterface::new(spi_dev, lcd_dc, display_buf);
    let mut delay = Delay::new();

    let display = DisplayBuilder::new(GC9A01, di)
        .display_size(RESOLUTION, RESOLUTION)
        .display_offset(0, 0)
        .orientation(Orientation::new().rotate(Rotation::Deg180))
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(lcd_rst)
        .init(&mut delay)
        .expect("GC9A01 init failed");

    // Backlight only after init so the panel never shows garbage.
    lcd_bl.set_high();
    log::info!("GC9A01 ready, {}x{}", RESOLUTION, RESOLUTION);
    display
}
