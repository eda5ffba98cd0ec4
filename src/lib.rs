#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod driver;
mod error;
mod position;
mod register;

pub use driver::{As5013, EXPECTED_ID_CODE, EXPECTED_ID_VERSION, SlaveAddress};
pub use error::Error;
pub use position::Position;
pub use register::{AgcRegister, ControlRegister1, ControlRegister2, Register};
