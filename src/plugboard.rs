use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::wiring::{self, WireMap, Wiring};

/// Involutive substitution applied on the way in and on the way out.
/// Starts as the identity: no cables plugged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
	connections:	WireMap,
	io:				Alphabet,
}

impl Plugboard {
	pub fn new(io: &Alphabet) -> Self {
		Plugboard {
			connections:	wiring::identity(io),
			io:				io.clone(),
		}
	}

	/// Rebuilds a plugboard from stored connections.
	pub fn from_connections(io: &Alphabet, connections: WireMap) -> Result<Self> {
		wiring::check_involution(io, &connections)?;
		Ok(Plugboard { connections, io: io.clone() })
	}

	/// Plugs a cable between two free sockets.
	pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
		for s in [a, b] {
			if !self.io.contains(s) {
				return Err(Error::SymbolNotFound(s.to_string()));
			}
			if self.connections[s] != s {
				return Err(Error::PlugInUse(s.to_string()));
			}
		}
		if a == b {
			return Err(Error::PlugInUse(a.to_string()));
		}

		self.connections.insert(a.to_string(), b.to_string());
		self.connections.insert(b.to_string(), a.to_string());
		debug!(a, b, "plugboard connected");
		Ok(())
	}

	/// Unplugs whatever cable `a` is on; a free socket is left alone.
	pub fn disconnect(&mut self, a: &str) -> Result<()> {
		let other = match self.connections.get(a) {
			Some(other) => other.clone(),
			None => return Err(Error::SymbolNotFound(a.to_string())),
		};
		self.connections.insert(a.to_string(), a.to_string());
		self.connections.insert(other.clone(), other);
		Ok(())
	}

	pub fn clear(&mut self) {
		self.connections = wiring::identity(&self.io);
	}

	pub fn connections(&self) -> &WireMap {
		&self.connections
	}

	pub fn io(&self) -> &Alphabet {
		&self.io
	}

	/// Connected pairs, each reported once.
	pub fn pairs(&self) -> Vec<(&str, &str)> {
		self.io
			.iter()
			.filter_map(|s| {
				let t = self.connections[s].as_str();
				if self.io.position(s) < self.io.position(t) {
					Some((s, t))
				} else {
					None
				}
			})
			.collect()
	}
}

impl Wiring for Plugboard {
	fn apply_at(&self, index: usize) -> usize {
		wiring::substitute(&self.io, &self.connections, index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn board() -> Plugboard {
		Plugboard::new(&Alphabet::from_chars("WXYZ").unwrap())
	}

	#[test]
	fn default_is_identity() {
		let p = board();
		for i in 0..4 {
			assert_eq!(p.apply_at(i), i);
		}
		assert!(p.pairs().is_empty());
	}

	#[test]
	fn connect_pairs_both_ways() {
		let mut p = board();
		p.connect("W", "Y").unwrap();
		assert_eq!(p.apply_at(0), 2);
		assert_eq!(p.apply_at(2), 0);
		assert_eq!(p.apply_at(1), 1);
		assert_eq!(p.pairs(), vec![("W", "Y")]);
	}

	#[test]
	fn connect_refuses_busy_or_unknown_sockets() {
		let mut p = board();
		p.connect("W", "Y").unwrap();
		assert_eq!(p.connect("Y", "Z"), Err(Error::PlugInUse("Y".into())));
		assert_eq!(p.connect("X", "X"), Err(Error::PlugInUse("X".into())));
		assert_eq!(p.connect("X", "Q"), Err(Error::SymbolNotFound("Q".into())));
	}

	#[test]
	fn disconnect_and_clear() {
		let mut p = board();
		p.connect("W", "Y").unwrap();
		p.connect("X", "Z").unwrap();
		p.disconnect("Y").unwrap();
		assert_eq!(p.apply_at(0), 0);
		assert_eq!(p.apply_at(1), 3);
		p.disconnect("W").unwrap();
		p.clear();
		assert_eq!(p, board());
	}

	#[test]
	fn stays_involutive() {
		let mut p = board();
		p.connect("Z", "X").unwrap();
		for i in 0..4 {
			assert_eq!(p.apply_at(p.apply_at(i)), i);
		}
	}

	#[test]
	fn from_connections_rejects_one_way_cable() {
		let io = Alphabet::from_chars("WXYZ").unwrap();
		let mut m = wiring::identity(&io);
		m.insert("W".into(), "X".into());
		assert!(Plugboard::from_connections(&io, m).is_err());
	}
}
