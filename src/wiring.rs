use std::collections::{BTreeMap, HashSet};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Symbol to symbol table as stored by every substitution device.
pub type WireMap = BTreeMap<String, String>;

/// Forward substitution by position: the one thing plugboard, reflector and
/// rotor have in common.
pub trait Wiring {
	/// `index` and the result are positions in the device's own alphabet copy.
	fn apply_at(&self, index: usize) -> usize;
}

/// Checks that `map` is a total bijection over `io`.
pub fn check_bijection(io: &Alphabet, map: &WireMap) -> Result<()> {
	if map.len() != io.len() {
		return Err(Error::malformed_wiring(format!(
			"{} entries for {} symbols", map.len(), io.len()
		)));
	}

	let mut images = HashSet::with_capacity(map.len());
	for s in io.iter() {
		let out = match map.get(s) {
			Some(out) => out,
			None => return Err(Error::malformed_wiring(format!("no wire from {:?}", s))),
		};
		if !io.contains(out) {
			return Err(Error::malformed_wiring(format!("{:?} wired to unknown {:?}", s, out)));
		}
		if !images.insert(out.as_str()) {
			return Err(Error::malformed_wiring(format!("{:?} is wired twice", out)));
		}
	}

	Ok(())
}

/// Checks that `map` is a total bijection and its own inverse.
pub fn check_involution(io: &Alphabet, map: &WireMap) -> Result<()> {
	check_bijection(io, map)?;
	for (from, to) in map {
		if map.get(to) != Some(from) {
			return Err(Error::malformed_wiring(format!(
				"{:?} -> {:?} is not paired back", from, to
			)));
		}
	}
	Ok(())
}

pub(crate) fn identity(io: &Alphabet) -> WireMap {
	io.iter().map(|s| (s.to_string(), s.to_string())).collect()
}

pub(crate) fn invert(map: &WireMap) -> WireMap {
	map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Looks `io[index]` up in `map` and returns the image's position in `io`.
/// Callers only hold maps already checked against `io`.
pub(crate) fn substitute(io: &Alphabet, map: &WireMap, index: usize) -> usize {
	let image = &map[io.symbol(index)];
	io.position(image).expect("checked wiring maps into its own alphabet")
}
