
// Command tags
pub const TAG_RETRIEVE_TRACE:u8 = 0x00;
pub const TAG_REQUEST_TRACE:u8  = 0x03;
pub const TAG_SET_TIMEBASE:u8   = 0x04;
pub const TAG_SET_TRIG_LEVEL:u8 = 0x06;
pub const TAG_SET_TRIG_DIR:u8   = 0x08;
pub const TAG_SET_TRIG_MODE:u8  = 0x0a;

// A frame starts with the tag and a big-endian u16 length field; the board
// answers with the same three bytes of overhead at the end of its response
pub const HEADER_LEN:usize  = 3;
pub const TRAILER_LEN:usize = 3;

// Bytes shifted out by the board for the two read-style commands
pub const TRACE_LEN:usize     = 1000;
pub const FULL_DUMP_LEN:usize = 4000;

use byteorder::{BigEndian, ByteOrder};

pub mod decode;

/// One host-to-board command. Each variant maps to exactly one wire frame
/// with a fixed transfer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Arm the board to capture a fresh trace.
	RequestTrace,
	/// Shift out the samples captured by an earlier RequestTrace.
	RetrieveTrace,
	SetTimebase(u8),
	/// Trigger threshold, already clamped to the 8-bit sample range.
	SetTrigLevel(u8),
	SetTrigDir(u8),
	SetTrigMode(u8),
	/// Fallback for command ids outside the table: tag 0x03 (the same tag
	/// RequestTrace uses) with a 4000-byte transfer. The board firmware has
	/// always been driven this way, so the collision is kept as-is and noted
	/// in DESIGN.md rather than reassigned.
	Unrecognized,
}

impl Command {

	/// Map a raw command id and parameter onto a command. Total over all
	/// inputs: unknown ids take the fallback and every parameter except the
	/// trigger level is truncated to a single byte by the encoding.
	pub fn from_id(id:u32, param:u32) -> Self {
		match id {
			3  => Command::RequestTrace,
			0  => Command::RetrieveTrace,
			4  => Command::SetTimebase(param as u8),
			6  => Command::SetTrigLevel(param.min(255) as u8),
			8  => Command::SetTrigDir(param as u8),
			10 => Command::SetTrigMode(param as u8),
			_  => Command::Unrecognized,
		}
	}

	pub fn tag(&self) -> u8 {
		match self {
			Command::RequestTrace    => TAG_REQUEST_TRACE,
			Command::RetrieveTrace   => TAG_RETRIEVE_TRACE,
			Command::SetTimebase(_)  => TAG_SET_TIMEBASE,
			Command::SetTrigLevel(_) => TAG_SET_TRIG_LEVEL,
			Command::SetTrigDir(_)   => TAG_SET_TRIG_DIR,
			Command::SetTrigMode(_)  => TAG_SET_TRIG_MODE,
			Command::Unrecognized    => TAG_REQUEST_TRACE,
		}
	}

	/// Value carried in the two-byte length field.
	pub fn length_field(&self) -> u16 {
		match self {
			Command::RetrieveTrace => TRACE_LEN as u16,
			Command::Unrecognized  => FULL_DUMP_LEN as u16,
			_                      => 1,
		}
	}

	pub fn payload(&self) -> Option<u8> {
		match self {
			Command::SetTimebase(v)  => Some(*v),
			Command::SetTrigLevel(v) => Some(*v),
			Command::SetTrigDir(v)   => Some(*v),
			Command::SetTrigMode(v)  => Some(*v),
			_                        => None,
		}
	}

	/// Total bytes clocked in each direction for this command. Fixed per
	/// variant; shortening it would truncate the board's response.
	pub fn transfer_len(&self) -> usize {
		match self {
			Command::RetrieveTrace => HEADER_LEN + TRACE_LEN,
			Command::Unrecognized  => HEADER_LEN + FULL_DUMP_LEN,
			_                      => HEADER_LEN + 1,
		}
	}

	pub fn encode(&self) -> Frame { Frame::encode(self) }

}

/// A fully built request frame: the three-byte header, the value byte for
/// the set-style commands, and zeroed filler out to the transfer length.
/// The filler carries no content; it exists to keep the bus clock running
/// while the board shifts out the rest of its response.
pub struct Frame {
	buff: Vec<u8>,
}

impl Frame {

	pub fn encode(cmd:&Command) -> Self {
		let mut buff = vec![0u8; cmd.transfer_len()];
		buff[0] = cmd.tag();
		BigEndian::write_u16(&mut buff[1..HEADER_LEN], cmd.length_field());
		if let Some(v) = cmd.payload() { buff[HEADER_LEN] = v; }
		Frame { buff }
	}

	pub fn bytes(&self) -> &[u8] { &self.buff }

	pub fn len(&self) -> usize { self.buff.len() }

	pub fn is_empty(&self) -> bool { self.buff.is_empty() }

}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_trace_frame() {
		let frame = Command::from_id(3, 0).encode();
		assert_eq!(frame.len(), 4);
		assert_eq!(frame.bytes(), &[0x03, 0x00, 0x01, 0x00][..]);
	}

	#[test]
	fn retrieve_trace_frame() {
		let frame = Command::from_id(0, 0).encode();
		assert_eq!(frame.len(), 1003);
		assert_eq!(&frame.bytes()[..3], &[0x00, 0x03, 0xe8][..]);
	}

	#[test]
	fn set_timebase_frame() {
		let frame = Command::from_id(4, 50).encode();
		assert_eq!(frame.len(), 4);
		assert_eq!(frame.bytes(), &[0x04, 0x00, 0x01, 0x32][..]);
	}

	#[test]
	fn trig_level_clamps_to_full_scale() {
		assert_eq!(Command::from_id(6, 300), Command::SetTrigLevel(0xff));
		assert_eq!(Command::from_id(6, 255), Command::SetTrigLevel(0xff));
		assert_eq!(Command::from_id(6, 0),   Command::SetTrigLevel(0x00));

		let frame = Command::from_id(6, 300).encode();
		assert_eq!(frame.bytes(), &[0x06, 0x00, 0x01, 0xff][..]);
	}

	#[test]
	fn trig_dir_and_mode_frames() {
		assert_eq!(Command::from_id(8,  1).encode().bytes(), &[0x08, 0x00, 0x01, 0x01][..]);
		assert_eq!(Command::from_id(10, 2).encode().bytes(), &[0x0a, 0x00, 0x01, 0x02][..]);
	}

	#[test]
	fn wide_parameters_wrap_to_one_byte() {
		// Only the trigger level clamps; the rest truncate modulo 256
		assert_eq!(Command::from_id(4, 0x132).encode().bytes()[3], 0x32);
		assert_eq!(Command::from_id(8, 256).encode().bytes()[3], 0x00);
	}

	#[test]
	fn unmapped_ids_fall_back_to_full_dump() {
		for id in &[1u32, 2, 5, 7, 9, 11, 99, u32::MAX] {
			let cmd = Command::from_id(*id, 7);
			assert_eq!(cmd, Command::Unrecognized);

			let frame = cmd.encode();
			assert_eq!(frame.len(), 4003);
			assert_eq!(&frame.bytes()[..3], &[0x03, 0x0f, 0xa0][..]);
		}
	}

	#[test]
	fn filler_is_zeroed() {
		let frame = Command::Unrecognized.encode();
		assert!(frame.bytes()[HEADER_LEN..].iter().all(|b| *b == 0));

		let frame = Command::RetrieveTrace.encode();
		assert!(frame.bytes()[HEADER_LEN..].iter().all(|b| *b == 0));
	}

	#[test]
	fn length_field_matches_transfer_len_for_set_commands() {
		for cmd in &[Command::SetTimebase(9), Command::SetTrigLevel(9), Command::SetTrigDir(9), Command::SetTrigMode(9)] {
			assert_eq!(cmd.length_field() as usize, cmd.transfer_len() - HEADER_LEN);
		}
	}
}
