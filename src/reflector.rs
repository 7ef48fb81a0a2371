use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::wiring::{self, WireMap, Wiring};

/// Fixed reflector: the k-th symbol pairs with the (N-1-k)-th. Never moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
	inversions:	WireMap,
	io:			Alphabet,
}

impl Reflector {
	pub fn new(io: &Alphabet) -> Self {
		let n = io.len();
		let inversions = (0..n)
			.map(|k| (io.symbol(k).to_string(), io.symbol(n - 1 - k).to_string()))
			.collect();
		Reflector { inversions, io: io.clone() }
	}

	/// Accepts stored inversions only if they are the pairing `io` implies.
	pub fn from_inversions(io: &Alphabet, inversions: &WireMap) -> Result<Self> {
		let rebuilt = Reflector::new(io);
		if &rebuilt.inversions != inversions {
			return Err(Error::MalformedSnapshot(
				"reflector inversions do not match its alphabet".into(),
			));
		}
		Ok(rebuilt)
	}

	pub fn inversions(&self) -> &WireMap {
		&self.inversions
	}

	pub fn io(&self) -> &Alphabet {
		&self.io
	}
}

impl Wiring for Reflector {
	fn apply_at(&self, index: usize) -> usize {
		wiring::substitute(&self.io, &self.inversions, index)
	}
}
