
use std::thread;
use std::time::Duration;

use log::debug;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::spi::Exchange;
use crate::tlv::{decode, Command};

// The board finishes sampling well inside a second, so pacing delays are
// capped rather than trusted as given
pub const MAX_DELAY_MS:u64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode { Continuous, Normal, Single }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerDirection { Rising, Falling }

impl TriggerMode {
	pub fn value(self) -> u8 {
		match self {
			TriggerMode::Continuous => 0,
			TriggerMode::Normal     => 1,
			TriggerMode::Single     => 2,
		}
	}
}

impl TriggerDirection {
	pub fn value(self) -> u8 {
		match self {
			TriggerDirection::Rising  => 0,
			TriggerDirection::Falling => 1,
		}
	}
}

/// Typed client for the startKIT acquisition board.
///
/// Each method runs one complete encode/exchange/decode transaction. The
/// board itself holds all acquisition state between calls; nothing here
/// remembers whether a capture is pending.
pub struct StartKitScope<E: Exchange> {
	bus: E,
}

impl<E: Exchange> StartKitScope<E> {

	pub fn new(bus:E) -> Self { StartKitScope { bus } }

	/// Arm the board to capture a fresh trace.
	pub fn request_trace(&mut self) -> Result<()> {
		self.run(Command::RequestTrace).map(|_| ())
	}

	/// Shift out the samples captured by an earlier [`request_trace`].
	///
	/// [`request_trace`]: StartKitScope::request_trace
	pub fn retrieve_trace(&mut self) -> Result<Vec<u8>> {
		self.run(Command::RetrieveTrace)
	}

	pub fn set_timebase(&mut self, div:u8) -> Result<()> {
		self.run(Command::SetTimebase(div)).map(|_| ())
	}

	/// Set the trigger threshold. Values above 255 clamp to full scale.
	pub fn set_trigger_level(&mut self, level:u32) -> Result<()> {
		self.run(Command::SetTrigLevel(level.min(255) as u8)).map(|_| ())
	}

	pub fn set_trigger_direction(&mut self, dir:TriggerDirection) -> Result<()> {
		self.run(Command::SetTrigDir(dir.value())).map(|_| ())
	}

	pub fn set_trigger_mode(&mut self, mode:TriggerMode) -> Result<()> {
		self.run(Command::SetTrigMode(mode.value())).map(|_| ())
	}

	/// Arm a capture, give the board time to sample, then pull the trace.
	/// The settle delay is clamped the same way as [`delay_ms`].
	pub fn capture(&mut self, settle_ms:u64) -> Result<Vec<u8>> {
		self.request_trace()?;
		delay_ms(settle_ms);
		self.retrieve_trace()
	}

	// One full transaction: build the frame, run the exchange, keep the
	// reportable bytes
	fn run(&mut self, cmd:Command) -> Result<Vec<u8>> {
		let frame = cmd.encode();
		debug!("tx tag={:#04x} xfer_len={}", frame.bytes()[0], frame.len());

		let rx = self.bus.exchange(frame.bytes())?;
		Ok(decode::reportable(&rx).to_vec())
	}

}

/// Sleep between the two phases of a capture, clamped to [`MAX_DELAY_MS`].
pub fn delay_ms(msec:u64) {
	thread::sleep(settle(msec));
}

fn settle(msec:u64) -> Duration {
	Duration::from_millis(msec.min(MAX_DELAY_MS))
}
