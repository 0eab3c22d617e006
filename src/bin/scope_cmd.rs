
// Single-shot command bridge to the startKIT scope board. Takes a command
// id and an optional parameter, runs one full-duplex exchange, and prints
// the board's response as one line of comma-separated hex.
//
// Two-phase acquisition is driven from the shell: invoke with command 3 to
// arm a capture, wait for the board to sample, then invoke with command 0
// to pull the trace. The board, not this process, remembers the armed state.

use std::env;
use std::process;

use startkit_scope::error::Result;
use startkit_scope::spi::{BusConfig, Exchange, SpiBus};
use startkit_scope::tlv::{decode, Command};

fn main() {
	env_logger::init();

	if let Err(e) = run() {
		eprintln!("{}", e);
		process::exit(1);
	}
}

// Both positional arguments are optional and default to zero; anything that
// fails to parse as an integer behaves as if it were absent
fn arg_or_zero(n:usize) -> u32 {
	env::args().nth(n).and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn run() -> Result<()> {
	let cmd = Command::from_id(arg_or_zero(1), arg_or_zero(2));
	let frame = cmd.encode();

	let mut bus = SpiBus::open(&BusConfig::default())?;
	let rx = bus.exchange(frame.bytes())?;

	print!("{}", decode::hex_line(decode::reportable(&rx)));

	Ok(())
}
