//! Register addresses for the AS5013 Hall IC.

/// Register addresses for AS5013
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Manufacturer ID code
    IdCode = 0x0C,
    /// Component ID version
    IdVersion = 0x0D,
    /// Silicon revision
    SiliconRevision = 0x0E,
    /// Control register 1 (power mode, reset, interrupt enable)
    Control1 = 0x0F,
    /// X axis result (signed)
    X = 0x10,
    /// Y axis result (signed)
    YResInt = 0x11,
    /// Positive X direction raw Hall value
    Xp = 0x12,
    /// Negative X direction raw Hall value
    Xn = 0x13,
    /// Positive Y direction raw Hall value
    Yp = 0x14,
    /// Negative Y direction raw Hall value
    Yn = 0x15,
    /// Automatic gain control
    Agc = 0x2A,
    /// Control register for the middle Hall element C5
    MCtrl = 0x2B,
    /// Sector dependent attenuation of the outer Hall elements
    JCtrl = 0x2C,
    /// Scale input to fit the 8-bit result registers
    TCtrl = 0x2D,
    /// Control register 2 (test mode, polarity inversion)
    Control2 = 0x2E,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

bitfield::bitfield! {
    /// CONTROL1
    ///
    /// Writing the soft reset bit reloads all internal registers with their
    /// reset values; the bit returns to 0 once the sequence finishes
    pub struct ControlRegister1(u8);
    impl Debug;
    u8;
    /// Soft reset command bit
    pub soft_rst, set_soft_rst: 7;
    /// Low power time base selector (8 timings, 20 ms to 320 ms)
    pub low_power_timebase, set_low_power_timebase: 6, 4;
    /// Interrupt output enable
    pub int_enabled, set_int_enabled: 2;
}

bitfield::bitfield! {
    /// CONTROL2
    pub struct ControlRegister2(u8);
    impl Debug;
    u8;
    /// Required test bit, set by every Control 2 command byte
    pub test_mode, set_test_mode: 7;
    /// Second required test bit of the configuration command
    pub test_enable, set_test_enable: 2;
    /// Invert the channel voltage (inverted magnet polarity)
    pub invert_spinning, set_invert_spinning: 1;
}

bitfield::bitfield! {
    /// AGC
    ///
    /// Direct read gain of the Hall elements; 0x3F is maximum sensitivity
    pub struct AgcRegister(u8);
    impl Debug;
    u8;
    /// Automatic gain control value
    pub agc, set_agc: 5, 0;
}
