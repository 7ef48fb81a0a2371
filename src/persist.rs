//! Saving and loading machines as JSON files.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::error::Error;
use crate::machine::Machine;
use crate::snapshot::MachineSnapshot;

const TAB: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum PersistError {
	#[error("cannot access state file: {0}")]
	Io(#[from] io::Error),

	#[error("state file is not a machine snapshot: {0}")]
	Json(#[from] serde_json::Error),

	#[error("snapshot is not valid UTF-8: {0}")]
	Encoding(#[from] std::string::FromUtf8Error),

	#[error(transparent)]
	Rejected(#[from] Error),
}

pub fn to_string(machine: &Machine) -> Result<String, PersistError> {
	let mut buf = Vec::new();
	let fmt = serde_json::ser::PrettyFormatter::with_indent(TAB);
	let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
	machine.snapshot().serialize(&mut ser)?;
	Ok(String::from_utf8(buf)?)
}

pub fn from_str(json: &str) -> Result<Machine, PersistError> {
	let snapshot: MachineSnapshot = serde_json::from_str(json)?;
	Ok(Machine::restore(snapshot)?)
}

pub fn save<P: AsRef<Path>>(path: P, machine: &Machine) -> Result<(), PersistError> {
	let json = to_string(machine)?;
	fs::write(path.as_ref(), json)?;
	info!(path = %path.as_ref().display(), "machine saved");
	Ok(())
}

/// Reads a snapshot without restoring it, for callers that want to attach
/// an observer.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<MachineSnapshot, PersistError> {
	let json = fs::read_to_string(path.as_ref())?;
	Ok(serde_json::from_str(&json)?)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Machine, PersistError> {
	let machine = Machine::restore(read_snapshot(path.as_ref())?)?;
	info!(path = %path.as_ref().display(), "machine loaded");
	Ok(machine)
}
