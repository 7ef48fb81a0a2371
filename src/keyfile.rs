//! Keyfiles: either a saved JSON snapshot or a short text description.
//!
//! ```text
//! # four symbols, one wired rotor, one cable
//! alphabet W X Y Z
//! rotor    spare Z Y X W
//! wired    cyc W X Y Z / X Y Z W
//! plug     W X
//! use      3 first
//! use      1 second
//! ```

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::event::Observer;
use crate::machine::Machine;
use crate::persist::{self, PersistError};
use crate::rotor::Rotor;
use crate::wiring::WireMap;

#[derive(Debug, Error)]
pub enum KeyfileError {
	#[error("cannot read keyfile: {0}")]
	Io(#[from] io::Error),

	#[error(transparent)]
	Snapshot(#[from] PersistError),

	#[error("line {line}: {reason}")]
	Syntax { line: usize, reason: String },

	#[error("line {line}: {source}")]
	Rejected { line: usize, source: Error },

	#[error("keyfile does not declare an alphabet")]
	NoAlphabet,
}

fn syntax(line: usize, reason: impl Into<String>) -> KeyfileError {
	KeyfileError::Syntax { line, reason: reason.into() }
}

/// Loads `path`; files ending in `.json` are snapshots, anything else is
/// parsed as text.
pub fn load<P: AsRef<Path>>(path: P, observer: Option<Box<dyn Observer>>) -> Result<Machine, KeyfileError> {
	let path = path.as_ref();
	if path.extension().map_or(false, |e| e == "json") {
		let snapshot = persist::read_snapshot(path)?;
		let machine = match observer {
			Some(o) => Machine::restore_with_observer(snapshot, o),
			None => Machine::restore(snapshot),
		};
		return Ok(machine.map_err(PersistError::from)?);
	}

	let text = fs::read_to_string(path)?;
	parse(&text, observer)
}

pub fn parse(text: &str, observer: Option<Box<dyn Observer>>) -> Result<Machine, KeyfileError> {
	let mut observer = observer;
	let mut machine: Option<Machine> = None;

	for (n, raw) in text.lines().enumerate() {
		let line = n + 1;
		let content = raw.split('#').next().unwrap_or("");
		let mut words = content.split_whitespace();
		let directive = match words.next() {
			Some(d) => d,
			None => continue,
		};
		let args: Vec<&str> = words.collect();
		let rejected = |source| KeyfileError::Rejected { line, source };

		if directive == "alphabet" {
			if machine.is_some() {
				return Err(syntax(line, "alphabet declared twice"));
			}
			let io = Alphabet::new(args.iter().copied()).map_err(rejected)?;
			machine = Some(match observer.take() {
				Some(o) => Machine::with_observer(io, o),
				None => Machine::new(io),
			});
			continue;
		}

		let m = match machine.as_mut() {
			Some(m) => m,
			None => return Err(syntax(line, format!("{} before alphabet", directive))),
		};

		match directive {
			"rotor" => {
				let (name, order) = match args.split_first() {
					Some((name, order)) => (*name, order),
					None => return Err(syntax(line, "rotor needs a name")),
				};
				let order = m.alphabet().reordered(order).map_err(rejected)?;
				m.add_rotor(Rotor::new(name, &order)).map_err(rejected)?;
			}

			"wired" => {
				let (name, rest) = match args.split_first() {
					Some((name, rest)) => (*name, rest),
					None => return Err(syntax(line, "wired rotor needs a name")),
				};
				let slash = match rest.iter().position(|w| *w == "/") {
					Some(i) => i,
					None => return Err(syntax(line, "expected `/` between order and wiring")),
				};
				let (from, to) = (&rest[..slash], &rest[slash + 1..]);
				if from.len() != to.len() {
					return Err(syntax(line, "order and wiring differ in length"));
				}
				let order = m.alphabet().reordered(from).map_err(rejected)?;
				let wiring: WireMap = from.iter()
					.zip(to)
					.map(|(a, b)| (a.to_string(), b.to_string()))
					.collect();
				let rotor = Rotor::with_wiring(name, &order, wiring).map_err(rejected)?;
				m.add_rotor(rotor).map_err(rejected)?;
			}

			"plug" => {
				if args.len() != 2 {
					return Err(syntax(line, "plug takes two symbols"));
				}
				m.connect_plugs(args[0], args[1]).map_err(rejected)?;
			}

			"use" => {
				if args.len() < 2 {
					return Err(syntax(line, "use takes a position and a name"));
				}
				let position: usize = args[0]
					.parse()
					.map_err(|_| syntax(line, format!("bad rotor position {:?}", args[0])))?;
				// names may contain spaces
				let name = args[1..].join(" ");
				m.retrieve(position, &name).map_err(rejected)?;
			}

			other => return Err(syntax(line, format!("unknown directive {:?}", other))),
		}
	}

	let machine = machine.ok_or(KeyfileError::NoAlphabet)?;
	debug!(rotors = machine.rotors().len(), "keyfile parsed");
	Ok(machine)
}
