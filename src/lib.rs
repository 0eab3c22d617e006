
// Tag-length-value framing, the command protocol spoken over the SPI bus
pub mod tlv;

// SPI bus configuration and the full-duplex exchange it has to provide
pub mod spi;

// Module for devices controlled over the TLV protocol
pub mod devices;

// Crate-wide error type
pub mod error;
