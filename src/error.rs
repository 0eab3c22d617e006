
use thiserror::Error;

/// Failures reaching the acquisition board over the SPI bus.
///
/// Every variant is fatal to the invocation that hits it: the tool performs
/// a single exchange per run, so there is no retry or degraded path.
#[derive(Debug, Error)]
pub enum Error {
	/// The SPI device node could not be opened.
	#[error("error opening device: {0}")]
	DeviceUnavailable(String),

	/// The bus driver refused one of the fixed transfer parameters.
	/// The first field names the parameter that was rejected.
	#[error("error setting SPI {0}: {1}")]
	ConfigurationRejected(&'static str, String),

	/// The full-duplex exchange itself failed.
	#[error("error performing SPI exchange: {0}")]
	ExchangeFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_names_the_failing_operation() {
		let e = Error::DeviceUnavailable("No such file or directory".to_string());
		assert_eq!(e.to_string(), "error opening device: No such file or directory");

		let e = Error::ConfigurationRejected("clock speed", "22 Hz not supported".to_string());
		assert_eq!(e.to_string(), "error setting SPI clock speed: 22 Hz not supported");

		let e = Error::ExchangeFailed("Input/output error".to_string());
		assert_eq!(e.to_string(), "error performing SPI exchange: Input/output error");
	}

	#[test]
	fn implements_std_error() {
		fn assert_std_error<T: std::error::Error>() {}
		assert_std_error::<Error>();
	}
}
