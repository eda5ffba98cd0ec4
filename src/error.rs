/// Error type for AS5013 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error on the I2C bus
    Communication(E),
    /// Failure reading or driving one of the sensor's GPIO lines
    Pin,
}
