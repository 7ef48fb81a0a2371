use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::rotor::Rotor;

pub const DEFAULT_ROTOR: &str = "default";

/// The rotor box. Position 0 always holds the default template, which
/// cannot be taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorCatalog {
	rotors: Vec<Rotor>,
}

impl RotorCatalog {
	pub fn new(io: &Alphabet) -> Self {
		RotorCatalog { rotors: vec![Rotor::new(DEFAULT_ROTOR, io)] }
	}

	/// Catalog from stored templates; the first one is taken as the default.
	pub fn from_rotors(rotors: Vec<Rotor>) -> Result<Self> {
		if rotors.is_empty() {
			return Err(Error::MalformedSnapshot("rotor box is empty".into()));
		}
		Ok(RotorCatalog { rotors })
	}

	pub fn add(&mut self, rotor: Rotor) {
		debug!(name = rotor.name(), "rotor added to box");
		self.rotors.push(rotor);
	}

	/// Takes out the template at `position` (0-based). The default and
	/// positions past the end are ignored.
	pub fn remove(&mut self, position: usize) -> Option<Rotor> {
		if position == 0 || position >= self.rotors.len() {
			return None;
		}
		let rotor = self.rotors.remove(position);
		debug!(name = rotor.name(), "rotor removed from box");
		Some(rotor)
	}

	pub fn default_rotor(&self) -> &Rotor {
		&self.rotors[0]
	}

	pub fn get(&self, position: usize) -> Option<&Rotor> {
		self.rotors.get(position)
	}

	pub fn names(&self) -> Vec<&str> {
		self.rotors.iter().map(Rotor::name).collect()
	}

	pub fn list(&self) -> &[Rotor] {
		&self.rotors
	}

	pub fn len(&self) -> usize {
		self.rotors.len()
	}

	// always false: the default never leaves
	pub fn is_empty(&self) -> bool {
		self.rotors.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wxyz() -> Alphabet {
		Alphabet::from_chars("WXYZ").unwrap()
	}

	#[test]
	fn starts_with_default() {
		let c = RotorCatalog::new(&wxyz());
		assert_eq!(c.names(), vec![DEFAULT_ROTOR]);
		assert_eq!(c.default_rotor().name(), DEFAULT_ROTOR);
	}

	#[test]
	fn add_keeps_insertion_order() {
		let io = wxyz();
		let mut c = RotorCatalog::new(&io);
		c.add(Rotor::new("one", &io));
		c.add(Rotor::new("two", &io.reordered(&["Z", "Y", "X", "W"]).unwrap()));
		assert_eq!(c.names(), vec!["default", "one", "two"]);
		assert_eq!(c.list()[2].peek(), "Z");
	}

	#[test]
	fn default_cannot_be_removed() {
		let mut c = RotorCatalog::new(&wxyz());
		assert!(c.remove(0).is_none());
		assert_eq!(c.len(), 1);
	}

	#[test]
	fn remove_others() {
		let io = wxyz();
		let mut c = RotorCatalog::new(&io);
		c.add(Rotor::new("one", &io));
		c.add(Rotor::new("one", &io));
		assert_eq!(c.remove(1).map(|r| r.name().to_string()), Some("one".into()));
		assert!(c.remove(5).is_none());
		assert_eq!(c.len(), 2);
	}

	#[test]
	fn restore_needs_a_template() {
		assert!(RotorCatalog::from_rotors(Vec::new()).is_err());
	}
}
