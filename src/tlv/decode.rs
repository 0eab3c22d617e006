
// The read side of a transaction. The bus hands back exactly as many bytes
// as were clocked out; the last three are protocol overhead and never reach
// the caller.

use super::TRAILER_LEN;

/// The slice of a response buffer that is surfaced to the caller: every
/// byte except the three-byte trailer.
pub fn reportable(rx:&[u8]) -> &[u8] {
	&rx[..rx.len().saturating_sub(TRAILER_LEN)]
}

/// Render bytes as one line of comma-separated two-digit lowercase hex,
/// newline-terminated. The first byte takes no comma; every later byte is
/// comma-prefixed.
pub fn hex_line(data:&[u8]) -> String {
	let mut line = String::with_capacity(3*data.len() + 1);
	for (idx, byte) in data.iter().enumerate() {
		if idx == 0 { line.push_str(&format!("{:02x}",  byte)); }
		else        { line.push_str(&format!(",{:02x}", byte)); }
	}
	line.push('\n');
	line
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shortest_response_is_one_token_without_comma() {
		let rx = [0xab, 0x01, 0x02, 0x03];
		assert_eq!(hex_line(reportable(&rx)), "ab\n");
	}

	#[test]
	fn trace_response_yields_one_token_per_sample() {
		let rx = vec![0x55u8; 1003];
		let line = hex_line(reportable(&rx));
		assert_eq!(line.trim_end().split(',').count(), 1000);
		assert!(line.ends_with('\n'));
	}

	#[test]
	fn full_dump_response_yields_4000_tokens() {
		let rx = vec![0x00u8; 4003];
		let line = hex_line(reportable(&rx));
		assert_eq!(line.trim_end().split(',').count(), 4000);
	}

	#[test]
	fn tokens_are_two_digit_lowercase_hex() {
		let rx = [0x00, 0x0f, 0xff, 0xaa, 0xbb, 0xcc];
		assert_eq!(hex_line(reportable(&rx)), "00,0f,ff\n");
	}

	#[test]
	fn trailer_is_never_reported() {
		let rx = [0x10, 0x20, 0x30, 0x40, 0xde, 0xad, 0xbe];
		assert_eq!(reportable(&rx), &[0x10, 0x20, 0x30, 0x40][..]);
	}
}
