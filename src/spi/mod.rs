
use log::debug;
use rppal::spi::{Bus, Error as SpiError, Mode, SlaveSelect, Spi};

use crate::error::{Error, Result};

// The startKIT hangs off SPI0 behind the second slave select, clocked well
// below the controller maximum to tolerate the longer wiring between the
// boards. This can only take a few specific values supported by the clock
// divider.
pub const BUS_CLOCK_HZ:u32 = 1_310_720;
pub const WORD_BITS:u8     = 8;

/// Fixed transfer parameters for the board. Built once per invocation and
/// handed to [`SpiBus::open`]; nothing here is user-configurable from the
/// command line.
#[derive(Debug, Clone)]
pub struct BusConfig {
	pub bus: Bus,
	pub slave: SlaveSelect,
	pub clock_hz: u32,
	pub word_bits: u8,
}

impl Default for BusConfig {

	fn default() -> Self {
		BusConfig {
			bus: Bus::Spi0,
			slave: SlaveSelect::Ss1,
			clock_hz: BUS_CLOCK_HZ,
			word_bits: WORD_BITS,
		}
	}

}

/// One blocking full-duplex transfer.
///
/// While the header bytes of `tx` are being written, the board is already
/// asserting response bytes; the filler bytes written after the header keep
/// the clock running so the board can finish shifting its response out.
/// Implementations must transfer all of `tx` in a single operation, with
/// chip select held for the whole exchange, and return exactly `tx.len()`
/// bytes. No retries and no partial transfers.
pub trait Exchange {
	fn exchange(&mut self, tx:&[u8]) -> Result<Vec<u8>>;
}

impl<E: Exchange + ?Sized> Exchange for &mut E {
	fn exchange(&mut self, tx:&[u8]) -> Result<Vec<u8>> { (**self).exchange(tx) }
}

/// Production bus bound to the kernel SPI driver.
pub struct SpiBus {
	spi: Spi,
}

impl SpiBus {

	/// Open the device node and apply the fixed transfer parameters: mode 0,
	/// 8-bit words, the configured clock rate. Any rejection is fatal.
	pub fn open(config:&BusConfig) -> Result<Self> {
		let mut spi = Spi::new(config.bus, config.slave, config.clock_hz, Mode::Mode0).map_err(|e| match e {
			SpiError::Io(io)                     => Error::DeviceUnavailable(io.to_string()),
			SpiError::ClockSpeedNotSupported(hz) => Error::ConfigurationRejected("clock speed", format!("{} Hz not supported", hz)),
			other                                => Error::ConfigurationRejected("mode", other.to_string()),
		})?;

		spi.set_bits_per_word(config.word_bits)
			.map_err(|e| Error::ConfigurationRejected("bits per word", e.to_string()))?;

		debug!("opened {:?}/{:?} at {} Hz, {}-bit words", config.bus, config.slave, config.clock_hz, config.word_bits);

		Ok(SpiBus { spi })
	}

}

impl Exchange for SpiBus {

	fn exchange(&mut self, tx:&[u8]) -> Result<Vec<u8>> {
		let mut rx = vec![0u8; tx.len()];

		let n = self.spi.transfer(&mut rx, tx)
			.map_err(|e| Error::ExchangeFailed(e.to_string()))?;
		if n != tx.len() {
			return Err(Error::ExchangeFailed(format!("short transfer: {} of {} bytes", n, tx.len())));
		}

		Ok(rx)
	}

}
