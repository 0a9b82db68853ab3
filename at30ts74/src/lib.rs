/*! `at30ts74` is an [`embedded_hal`](https://github.com/rust-embedded/embedded-hal) crate for
accessing [Atmel/Microchip AT30TS74](https://www.microchip.com/en-us/product/AT30TS74)
temperature sensors over an I2C bus.

The AT30TS74 consists of 4 registers and a writeable register pointer. The register this
crate cares about is the temperature register (address `0x00`), a 12-bit two's-complement
reading in units of 1/16 degree Celsius, left-aligned in a big-endian byte pair. The
configuration register (address `0x01`) selects conversion resolution among other things;
[`configure`](At30ts74::configure) sets it to 12 bits.

The driver keeps no state besides the bus address: every call is a fresh bus transaction,
and the transport is handed back untouched by [`free`](At30ts74::free). After
[`configure`](At30ts74::configure) the sensor's register pointer is left on the temperature
register; [`temperature`](At30ts74::temperature) relies on that and performs a bare 2-byte
read. Calling it on an unconfigured sensor returns whatever register was last selected -
that ordering is the caller's contract, not enforced here. */
#![no_std]
#![doc(html_root_url = "https://docs.rs/at30ts74/0.1.0")]

use core::fmt;
use core::result::Result;
use embedded_hal::blocking::i2c::{Read, Write, WriteRead};

mod config;
mod temp;

pub use config::{AlertPolarity, CompInt, ConfigReg, FaultQueue, OneShot, Resolution, Shutdown};
pub use temp::Temperature;

const REG_TEMP: u8 = 0x00;
const REG_CONF: u8 = 0x01;

/// The eight bus addresses selectable via the A2..A0 pins.
///
/// 0x4a: AT30TS74-U1FMCB-T
pub const ADDRESSES: [u8; 8] = [0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f];

/** A struct for describing how to read and write an AT30TS74 temperature sensor's registers
via an [`embedded_hal`] implementation.

The transport (an open I2C bus handle) belongs to the caller; the driver holds it until
[`free`](At30ts74::free) hands it back and never opens or closes anything itself. Addresses
outside [`ADDRESSES`] are not rejected - the sensor at such an address simply won't answer
the probe. */
pub struct At30ts74<T>
where
    T: Read + Write + WriteRead,
{
    ctx: T,
    address: u8,
}

#[derive(Debug, PartialEq)]
/// Enum for describing possible error conditions when reading/writing an AT30TS74
/// temperature sensor.
pub enum Error<E> {
    /** The presence probe read failed; the sensor did not acknowledge at the given
    address. [`configure`](At30ts74::configure) attempts nothing further. */
    Probe(E),
    /** The register pointer could not be set to select the temperature register. */
    RegPtr(E),
    /** Reading the temperature register via `embedded_hal` failed. Contains the error
    propagated from the [`embedded_hal`] implementation. */
    Read(E),
    /** Writing the configuration register via `embedded_hal` failed. */
    Write(E),
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Probe(e) => write!(f, "presence probe read failed: {:?}", e),
            Error::RegPtr(e) => write!(f, "register pointer write failed: {:?}", e),
            Error::Read(e) => write!(f, "temperature register read failed: {:?}", e),
            Error::Write(e) => write!(f, "configuration register write failed: {:?}", e),
        }
    }
}

impl<T, E> At30ts74<T>
where
    T: Read<Error = E> + Write<Error = E> + WriteRead<Error = E>,
{
    pub fn new(ctx: T, address: u8) -> Self {
        At30ts74 { ctx, address }
    }

    /** Probe the sensor and configure it for 12-bit conversions.

    Reads 2 bytes from whatever register is currently selected to confirm something
    acknowledges at this address, writes the configuration register, then leaves the
    register pointer on the temperature register as [`temperature`](At30ts74::temperature)
    expects. A failed probe aborts before any write is issued. */
    pub fn configure(&mut self) -> Result<(), Error<E>> {
        let mut probe = [0u8; 2];
        self.ctx.read(self.address, &mut probe).map_err(Error::Probe)?;

        self.set_config_reg(ConfigReg::new().with_resolution(Resolution::Bits12))?;
        self.set_reg_ptr(REG_TEMP)
    }

    /// Overwrite the sensor configuration register.
    pub fn set_config_reg(&mut self, cfg: ConfigReg) -> Result<(), Error<E>> {
        self.ctx
            .write(self.address, &[REG_CONF, cfg.into_bytes()[0]])
            .map_err(Error::Write)
    }

    fn set_reg_ptr(&mut self, ptr: u8) -> Result<(), Error<E>> {
        self.ctx
            .write(self.address, &ptr.to_le_bytes())
            .map_err(Error::RegPtr)
    }

    /** Read the current temperature.

    Issues a single 2-byte read; the register pointer must already be on the temperature
    register (see [`configure`](At30ts74::configure)). A transport failure is returned
    as-is, nothing is decoded from partial data and nothing is retried. */
    pub fn temperature(&mut self) -> Result<Temperature, Error<E>> {
        let mut buf = [0u8; 2];

        match self.ctx.read(self.address, &mut buf) {
            Ok(_) => Ok(Temperature::from_be_bytes(buf)),
            Err(e) => Err(Error::Read(e)),
        }
    }

    pub fn free(self) -> T {
        self.ctx
    }
}
