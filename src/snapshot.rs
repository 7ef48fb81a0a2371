//! Serializable picture of a machine, and the checks a picture has to pass
//! before it becomes a machine again.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::catalog::{RotorCatalog, DEFAULT_ROTOR};
use crate::error::{Error, Result};
use crate::event::Observer;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::WireMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugboardRecord {
	pub connections:	WireMap,
	pub io:				Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectorRecord {
	pub inversions:	WireMap,
	pub io:			Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorRecord {
	pub name:		String,
	pub rotation:	usize,
	#[serde(alias = "rotorRight")]
	pub right:		Vec<String>,
	#[serde(alias = "rotorLeft")]
	pub left:		Vec<String>,
	#[serde(alias = "rotorWiring")]
	pub wiring:		WireMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
	pub plugboard:		PlugboardRecord,
	pub inverter:		ReflectorRecord,
	#[serde(rename = "rotorBox")]
	pub rotor_box:		Vec<RotorRecord>,
	#[serde(rename = "rotorsToUse")]
	pub rotors_to_use:	Vec<RotorRecord>,
	pub io:				Vec<String>,
	pub original:		String,
	pub encrypted:		String,
}

fn malformed(what: &str, e: Error) -> Error {
	Error::MalformedSnapshot(format!("{}: {}", what, e))
}

fn component_alphabet(machine: &Alphabet, symbols: &[String], what: &str) -> Result<Alphabet> {
	let io = Alphabet::new(symbols.iter().cloned()).map_err(|e| malformed(what, e))?;
	if !machine.same_symbols(io.symbols()) {
		return Err(malformed(what, Error::mismatch(what)));
	}
	Ok(io)
}

impl From<&Rotor> for RotorRecord {
	fn from(r: &Rotor) -> Self {
		RotorRecord {
			name:		r.name().to_string(),
			rotation:	r.rotation(),
			right:		r.right().to_vec(),
			left:		r.left().to_vec(),
			wiring:		r.wiring().clone(),
		}
	}
}

impl RotorRecord {
	/// Rebuilds the rotor at home position and replays `rotation` steps; the
	/// stored rings must agree with the result.
	pub fn to_rotor(&self, machine: &Alphabet) -> Result<Rotor> {
		let what = format!("rotor {:?}", self.name);
		component_alphabet(machine, &self.right, &what)?;
		if self.rotation >= self.right.len() {
			return Err(Error::MalformedSnapshot(format!(
				"{} has rotation {} of {}", what, self.rotation, self.right.len()
			)));
		}

		let mut home = self.right.clone();
		home.rotate_right(self.rotation);
		let rotor = Rotor::from_spec(self.name.as_str(), &home, self.wiring.clone(), self.rotation)?;

		if rotor.right() != self.right.as_slice() || rotor.left() != self.left.as_slice() {
			return Err(Error::MalformedSnapshot(format!("{} rings disagree with its rotation", what)));
		}
		Ok(rotor)
	}
}

impl From<&Machine> for MachineSnapshot {
	fn from(m: &Machine) -> Self {
		MachineSnapshot {
			plugboard: PlugboardRecord {
				connections:	m.plugboard().connections().clone(),
				io:				m.plugboard().io().symbols().to_vec(),
			},
			inverter: ReflectorRecord {
				inversions:	m.reflector().inversions().clone(),
				io:			m.reflector().io().symbols().to_vec(),
			},
			rotor_box:		m.catalog().list().iter().map(RotorRecord::from).collect(),
			rotors_to_use:	m.rotors().iter().map(RotorRecord::from).collect(),
			io:				m.alphabet().symbols().to_vec(),
			original:		m.plaintext().to_string(),
			encrypted:		m.ciphertext().to_string(),
		}
	}
}

impl MachineSnapshot {
	pub(crate) fn into_machine(self, observer: Option<Box<dyn Observer>>) -> Result<Machine> {
		let io = Alphabet::new(self.io).map_err(|e| malformed("io", e))?;

		let pb_io = component_alphabet(&io, &self.plugboard.io, "plugboard")?;
		let plugboard = Plugboard::from_connections(&pb_io, self.plugboard.connections)?;

		let inv_io = component_alphabet(&io, &self.inverter.io, "inverter")?;
		let reflector = Reflector::from_inversions(&inv_io, &self.inverter.inversions)?;

		match self.rotor_box.first() {
			Some(r) if r.name == DEFAULT_ROTOR => {}
			_ => return Err(Error::MalformedSnapshot("rotor box must start with the default rotor".into())),
		}
		let templates = self.rotor_box
			.iter()
			.map(|r| r.to_rotor(&io))
			.collect::<Result<Vec<_>>>()?;
		if templates[0].wiring().iter().any(|(from, to)| from != to) {
			return Err(Error::MalformedSnapshot("default rotor must be wired straight through".into()));
		}
		let catalog = RotorCatalog::from_rotors(templates)?;

		let rotors = self.rotors_to_use
			.iter()
			.map(|r| r.to_rotor(&io))
			.collect::<Result<Vec<_>>>()?;

		Ok(Machine::from_parts(
			io, plugboard, reflector, catalog, rotors, self.original, self.encrypted, observer,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn machine() -> Machine {
		let mut m = Machine::new(Alphabet::from_chars("WXYZ").unwrap());
		m.retrieve(1, "first").unwrap();
		m.retrieve(1, "second").unwrap();
		m.encrypt_all(["W", "X", "Y"]).unwrap();
		m
	}

	#[test]
	fn rotor_record_round_trip() {
		let m = machine();
		let rec = RotorRecord::from(&m.rotors()[0]);
		assert_eq!(rec.rotation, 3);
		assert_eq!(rec.right, ["Z", "W", "X", "Y"]);
		let back = rec.to_rotor(m.alphabet()).unwrap();
		assert_eq!(&back, &m.rotors()[0]);
	}

	#[test]
	fn restore_reproduces_state() {
		let m = machine();
		let restored = Machine::restore(m.snapshot()).unwrap();
		assert_eq!(restored.plaintext(), "WXY");
		assert_eq!(restored.ciphertext(), m.ciphertext());
		assert_eq!(restored.rotors(), m.rotors());
		assert_eq!(restored.catalog(), m.catalog());
		assert_eq!(restored.snapshot(), m.snapshot());
	}

	#[test]
	fn rejects_inconsistent_rings() {
		let mut snap = machine().snapshot();
		snap.rotors_to_use[0].left.swap(0, 1);
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedSnapshot(_))));
	}

	#[test]
	fn rejects_rotation_past_revolution() {
		let mut snap = machine().snapshot();
		snap.rotors_to_use[1].rotation = 4;
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedSnapshot(_))));
	}

	#[test]
	fn rejects_broken_wiring() {
		let mut snap = machine().snapshot();
		snap.rotor_box[0].wiring.insert("W".into(), "X".into());
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedWiring { .. })));
	}

	#[test]
	fn rejects_foreign_plugboard() {
		let mut snap = machine().snapshot();
		snap.plugboard.io[0] = "Q".into();
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedSnapshot(_))));
	}

	#[test]
	fn rejects_missing_default() {
		let mut snap = machine().snapshot();
		snap.rotor_box[0].name = "renamed".into();
		assert!(Machine::restore(snap.clone()).is_err());
		snap.rotor_box.clear();
		assert!(Machine::restore(snap).is_err());
	}

	#[test]
	fn rejects_rewired_default() {
		let mut snap = machine().snapshot();
		let wiring = &mut snap.rotor_box[0].wiring;
		wiring.insert("W".into(), "X".into());
		wiring.insert("X".into(), "W".into());
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedSnapshot(_))));
	}

	#[test]
	fn rejects_odd_alphabet() {
		let mut snap = machine().snapshot();
		snap.io.pop();
		assert!(matches!(Machine::restore(snap), Err(Error::MalformedSnapshot(_))));
	}

	#[test]
	fn keeps_plugboard_connections() {
		let mut m = Machine::new(Alphabet::from_chars("WXYZ").unwrap());
		m.connect_plugs("W", "Y").unwrap();
		let restored = Machine::restore(m.snapshot()).unwrap();
		assert_eq!(restored.plugboard().pairs(), vec![("W", "Y")]);
	}
}
