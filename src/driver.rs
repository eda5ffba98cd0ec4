//! Driver for the AS5013 Hall-effect joystick sensor (blocking I2C)

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    i2c::I2c,
};

use crate::{
    error::Error,
    position::Position,
    register::{AgcRegister, ControlRegister1, ControlRegister2, Register},
};

/// Required test bits of Control Register 2
const CONTROL2_TEST_CMD: u8 = 0x84;
/// Maximum sensitivity of the Hall element direct read register
const AGC_MAX_SENSITIVITY_CMD: u8 = 0x3F;
/// Scaling factor of 90.8% for the T_ctrl register
const T_CTRL_SCALING_90_8_CMD: u8 = 0x0A;
/// Scaling factor of 100% for the T_ctrl register
const T_CTRL_SCALING_100_CMD: u8 = 0x09;
/// Soft reset command byte for Control Register 1
const CONTROL1_RESET_CMD: u8 = 0x88;
/// Invert the channel voltage command for Control Register 2
const INVERT_SPINNING_CMD: u8 = 0x86;

/// Expected value of the ID code register
pub const EXPECTED_ID_CODE: u8 = 0x0C;
/// Expected value of the ID version register
pub const EXPECTED_ID_VERSION: u8 = 0x0D;

/// Settle time after an axis result read, and the reset pulse width
const SETTLE_DELAY_US: u32 = 10;

/// I2C slave address, selected by the J1 address jumper on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlaveAddress {
    /// J1 in position 0
    Jumper0 = 0x40,
    /// J1 in position 1
    Jumper1 = 0x41,
}

impl From<SlaveAddress> for u8 {
    fn from(address: SlaveAddress) -> u8 {
        address as u8
    }
}

/// AS5013 driver instance (blocking)
///
/// Owns the I2C bus handle, the bound slave address, the three board pins
/// (reset output, chip-select button input, interrupt input) and a delay
/// provider for the device's conversion and reset timing.
#[derive(Debug)]
pub struct As5013<I2C, RST, CS, INT, D> {
    i2c: I2C,
    address: SlaveAddress,
    rst: RST,
    cs: CS,
    int: INT,
    delay: D,
}

impl<I2C, E, RST, CS, INT, D> As5013<I2C, RST, CS, INT, D>
where
    I2C: I2c<Error = E>,
    RST: OutputPin,
    CS: InputPin,
    INT: InputPin,
    D: DelayNs,
{
    /// Create a new AS5013 driver instance bound to `address`.
    ///
    /// Drives the reset pin high to take the device out of hardware reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if the reset pin cannot be driven.
    pub fn new(
        i2c: I2C,
        address: SlaveAddress,
        mut rst: RST,
        cs: CS,
        int: INT,
        delay: D,
    ) -> Result<Self, Error<E>> {
        rst.set_high().map_err(|_| Error::Pin)?;

        Ok(Self {
            i2c,
            address,
            rst,
            cs,
            int,
            delay,
        })
    }

    /// Release the bus, pins and delay provider, consuming the driver
    pub fn release(self) -> (I2C, RST, CS, INT, D) {
        (self.i2c, self.rst, self.cs, self.int, self.delay)
    }

    /// Write an 8-bit value to a device register.
    ///
    /// Issues a single 2-byte write transaction (`[address, value]`)
    /// terminated with a stop condition.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<E>> {
        let address = u8::from(register);

        #[cfg(feature = "defmt")]
        defmt::trace!("Writing 0x{:02X} to register 0x{:02X}", value, address);

        self.i2c
            .write(self.address.into(), &[address, value])
            .map_err(Error::Communication)
    }

    /// Read an 8-bit value from a device register, reinterpreted as signed.
    ///
    /// Issues the register-indexed read the AS5013 expects: a 1-byte write of
    /// the register address followed by a 1-byte read, chained with a
    /// repeated start so no other controller can claim the bus between the
    /// two phases.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn read_register(&mut self, register: Register) -> Result<i8, Error<E>> {
        let address = u8::from(register);

        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.address.into(), &[address], &mut buffer)
            .map_err(Error::Communication)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Register 0x{:02X} value: 0x{:02X}", address, buffer[0]);

        Ok(i8::from_le_bytes(buffer))
    }

    /// Read Control Register 1, rewrite it through `f`.
    fn modify_control1(&mut self, f: impl FnOnce(u8) -> u8) -> Result<(), Error<E>> {
        let current = self.read_register(Register::Control1)?.cast_unsigned();
        self.write_register(Register::Control1, f(current))
    }

    /// Apply the device's default configuration.
    ///
    /// Sets the required test bits of Control Register 2, maximum Hall
    /// sensitivity and a 90.8% scaling factor, then resets the device through
    /// Control Register 1 while preserving its bit 0. The reset comes last so
    /// normal operation resumes from the control bits just written.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn set_default_configuration(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::Control2, CONTROL2_TEST_CMD)?;
        self.write_register(Register::Agc, AGC_MAX_SENSITIVITY_CMD)?;
        self.write_register(Register::TCtrl, T_CTRL_SCALING_90_8_CMD)?;

        self.modify_control1(|control1| CONTROL1_RESET_CMD | (control1 & 0x01))
    }

    /// Check the manufacturer ID code register against its expected value.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn check_id_code(&mut self) -> Result<bool, Error<E>> {
        let id = self.read_register(Register::IdCode)?.cast_unsigned();

        #[cfg(feature = "defmt")]
        if id != EXPECTED_ID_CODE {
            defmt::warn!("Unexpected ID code: 0x{:02X}", id);
        }

        Ok(id == EXPECTED_ID_CODE)
    }

    /// Check the component ID version register against its expected value.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn check_id_version(&mut self) -> Result<bool, Error<E>> {
        let version = self.read_register(Register::IdVersion)?.cast_unsigned();

        #[cfg(feature = "defmt")]
        if version != EXPECTED_ID_VERSION {
            defmt::warn!("Unexpected ID version: 0x{:02X}", version);
        }

        Ok(version == EXPECTED_ID_VERSION)
    }

    /// Select the low power measurement time base.
    ///
    /// The measurements are triggered by an internal low power oscillator
    /// with 8 selectable timings (20 ms up to 320 ms); `timing` wraps modulo
    /// 8 rather than erroring on out-of-range input. Packs the selector into
    /// bits 4-6 of Control Register 1 with bit 7 cleared and bits 0-3 left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn set_low_power_mode(&mut self, timing: u8) -> Result<(), Error<E>> {
        let timing = timing % 8;

        self.modify_control1(|control1| (control1 & 0x7F) | (timing << 4))
    }

    /// Set the scaling factor mapping the raw Hall signal to the 8-bit
    /// result range.
    ///
    /// Valid codes are 1..=31 (500.0% down to 31.3%); anything 32 or above
    /// saturates to the 100% code rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_scaling_factor(&mut self, factor: u8) -> Result<(), Error<E>> {
        if factor < 32 {
            self.write_register(Register::TCtrl, factor)
        } else {
            self.write_register(Register::TCtrl, T_CTRL_SCALING_100_CMD)
        }
    }

    /// Enable the interrupt output.
    ///
    /// Control Register 1 updates are rewritten through the soft reset
    /// command byte, so every call also pulses the reset bit. The device
    /// tolerates this; it is the documented update pattern for this IC.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn enable_interrupt(&mut self) -> Result<(), Error<E>> {
        self.modify_control1(|control1| CONTROL1_RESET_CMD | (control1 | 0x04))
    }

    /// Disable the interrupt output.
    ///
    /// Masks Control Register 1 down to its interrupt bit before rewriting
    /// through the soft reset command byte, matching the device's documented
    /// update pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn disable_interrupt(&mut self) -> Result<(), Error<E>> {
        self.modify_control1(|control1| CONTROL1_RESET_CMD | (control1 & 0x04))
    }

    /// Invert the channel voltage for an inverted magnet polarity.
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn invert_polarity(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::Control2, INVERT_SPINNING_CMD)
    }

    /// Soft reset the device.
    ///
    /// All internal registers reload their reset values; bit 0 of Control
    /// Register 1 is preserved across the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.modify_control1(|control1| CONTROL1_RESET_CMD | (control1 & 0x01))
    }

    /// Hardware reset the device by pulsing the RST pin low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if the reset pin cannot be driven
    pub fn hardware_reset(&mut self) -> Result<(), Error<E>> {
        self.rst.set_low().map_err(|_| Error::Pin)?;
        self.delay.delay_us(SETTLE_DELAY_US);
        self.rst.set_high().map_err(|_| Error::Pin)
    }

    /// Read the signed X axis result register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn x(&mut self) -> Result<i8, Error<E>> {
        self.read_register(Register::X)
    }

    /// Read the signed Y axis result register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn y(&mut self) -> Result<i8, Error<E>> {
        self.read_register(Register::YResInt)
    }

    /// Read both axis result registers and classify them into one of the 9
    /// discrete positions.
    ///
    /// A short settle delay follows each axis read to respect the device's
    /// conversion timing.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the I2C transactions fail
    pub fn position(&mut self) -> Result<Position, Error<E>> {
        let ox = self.read_register(Register::X)?;
        self.delay.delay_us(SETTLE_DELAY_US);
        let oy = self.read_register(Register::YResInt)?;
        self.delay.delay_us(SETTLE_DELAY_US);

        Ok(Position::from_axes(ox, oy))
    }

    /// Read the joystick button state from the chip-select line.
    ///
    /// The button is a plain polled digital input, not an I2C transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if the pin level cannot be read
    pub fn button_pressed(&mut self) -> Result<bool, Error<E>> {
        self.cs.is_high().map_err(|_| Error::Pin)
    }

    /// Read the level of the interrupt output pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if the pin level cannot be read
    pub fn interrupt_asserted(&mut self) -> Result<bool, Error<E>> {
        self.int.is_high().map_err(|_| Error::Pin)
    }

    /// Read Control Register 1 as a typed view
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn control1(&mut self) -> Result<ControlRegister1, Error<E>> {
        self.read_register(Register::Control1)
            .map(|value| ControlRegister1(value.cast_unsigned()))
    }

    /// Read Control Register 2 as a typed view
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn control2(&mut self) -> Result<ControlRegister2, Error<E>> {
        self.read_register(Register::Control2)
            .map(|value| ControlRegister2(value.cast_unsigned()))
    }

    /// Read the AGC register as a typed view
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn agc(&mut self) -> Result<AgcRegister, Error<E>> {
        self.read_register(Register::Agc)
            .map(|value| AgcRegister(value.cast_unsigned()))
    }
}
