//! Polling demo for STM32 with Embassy
//!
//! Free-running loop that polls the AS5013 joystick and logs position
//! changes and button presses over defmt-RTT.
//!
//! Hardware setup (mikroBUS socket):
//! - AS5013 connected via I2C1: SCL=PB6, SDA=PB7, 100 kHz
//! - RST on PA8 (output), CS button on PA9 (input), INT on PA10 (input)
//! - Address jumper J1 in position 0 (0x40)

#![no_std]
#![no_main]

use as5013::{As5013, Position, SlaveAddress};
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{
    gpio::{Input, Level, Output, Pull, Speed},
    i2c,
    time::Hertz,
};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let i2c = i2c::I2c::new_blocking(p.I2C1, p.PB6, p.PB7, Hertz(100_000), Default::default());

    let rst = Output::new(p.PA8, Level::High, Speed::Low);
    let cs = Input::new(p.PA9, Pull::Up);
    let int = Input::new(p.PA10, Pull::None);

    let mut sensor = As5013::new(i2c, SlaveAddress::Jumper0, rst, cs, int, Delay).unwrap();

    Timer::after_millis(100).await;

    match sensor.check_id_code() {
        Ok(true) => info!("AS5013 joystick found"),
        Ok(false) => warn!("Unexpected ID code, continuing anyway"),
        Err(e) => error!("ID check failed: {:?}", e),
    }

    sensor.set_default_configuration().unwrap();

    info!("Joystick driver initialized");

    let mut last_position = Position::Center;
    let mut button_was_pressed = false;

    loop {
        match sensor.position() {
            Ok(position) => {
                if position != last_position {
                    info!("Position: {:?}", position);
                    last_position = position;
                }
            }
            Err(e) => error!("Position read failed: {:?}", e),
        }

        match sensor.button_pressed() {
            Ok(pressed) => {
                if pressed && !button_was_pressed {
                    info!("Button is pressed");
                }
                button_was_pressed = pressed;
            }
            Err(e) => error!("Button read failed: {:?}", e),
        }

        Timer::after_millis(10).await;
    }
}
