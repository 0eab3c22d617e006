
// Capture one trace end to end: arm the board, let it sample, pull the
// 1000 samples back, and dump them to a JSON file for plotting.

use std::process;

use startkit_scope::devices::startkit::{StartKitScope, TriggerMode};
use startkit_scope::error::Result;
use startkit_scope::spi::{BusConfig, SpiBus};

const SETTLE_MS:u64 = 99;
const OUT_PATH:&str = "./trace.json";

fn main() {
	env_logger::init();

	if let Err(e) = run() {
		eprintln!("{}", e);
		process::exit(1);
	}
}

fn run() -> Result<()> {
	let bus = SpiBus::open(&BusConfig::default())?;
	let mut scope = StartKitScope::new(bus);

	scope.set_trigger_mode(TriggerMode::Single)?;
	let trace = scope.capture(SETTLE_MS)?;

	let trace_json = serde_json::to_string_pretty(&trace).unwrap();
	std::fs::write(OUT_PATH, trace_json.as_bytes()).unwrap();

	println!("wrote {} samples to {}", trace.len(), OUT_PATH);

	Ok(())
}
