use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::wiring::{self, WireMap, Wiring};

/// A wired wheel. `wiring` is fixed for life; stepping only turns the two
/// contact rings `right` and `left`, always together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
	name:		String,
	rotation:	usize,
	right:		Vec<String>,
	left:		Vec<String>,
	wiring:		WireMap,
	inverse:	WireMap,	// wiring read left to right
}

impl Rotor {
	/// Wires `right[i]` to `left[i]` with both rings in `order`; the result
	/// is the identity substitution, only the window sequence follows `order`.
	pub fn new(name: impl Into<String>, order: &Alphabet) -> Self {
		let right = order.symbols().to_vec();
		let left = right.clone();
		let wiring: WireMap = right.iter().cloned().zip(left.iter().cloned()).collect();
		let inverse = wiring::invert(&wiring);

		Rotor { name: name.into(), rotation: 0, right, left, wiring, inverse }
	}

	/// Rings in `order`, each symbol wired to `wiring[symbol]`.
	pub fn with_wiring(name: impl Into<String>, order: &Alphabet, wiring: WireMap) -> Result<Self> {
		Rotor::from_spec(name, order.symbols(), wiring, 0)
	}

	/// Rebuilds a rotor at its home position from `sequence` and `wiring`,
	/// then replays `rotation` steps.
	pub fn from_spec<S: AsRef<str>>(
		name: impl Into<String>,
		sequence: &[S],
		wiring: WireMap,
		rotation: usize,
	) -> Result<Self> {
		let order = Alphabet::new(sequence.iter().map(|s| str::to_string(s.as_ref())))
			.map_err(|e| Error::malformed_wiring(e.to_string()))?;
		wiring::check_bijection(&order, &wiring)?;
		if rotation >= order.len() {
			return Err(Error::malformed_wiring(format!(
				"rotation {} on a {}-position rotor", rotation, order.len()
			)));
		}

		let right = order.symbols().to_vec();
		let left = right.clone();
		let inverse = wiring::invert(&wiring);
		let mut rotor = Rotor { name: name.into(), rotation: 0, right, left, wiring, inverse };
		for _ in 0..rotation {
			rotor.step();
		}
		Ok(rotor)
	}

	/// Independent copy at rotation 0 starting from this rotor's current
	/// window, under a new name.
	pub fn copy_as(&self, name: impl Into<String>) -> Rotor {
		Rotor {
			name:		name.into(),
			rotation:	0,
			right:		self.right.clone(),
			left:		self.right.clone(),
			wiring:		self.wiring.clone(),
			inverse:	self.inverse.clone(),
		}
	}

	/// Right to left: `index` is a position on the right ring.
	pub fn forward(&self, index: usize) -> usize {
		Rotor::pass(&self.right, &self.left, &self.wiring, index)
	}

	/// Left to right: `index` is a position on the left ring.
	pub fn backward(&self, index: usize) -> usize {
		Rotor::pass(&self.left, &self.right, &self.inverse, index)
	}

	fn pass(input: &[String], output: &[String], map: &WireMap, index: usize) -> usize {
		let image = &map[&input[index]];
		output
			.iter()
			.position(|s| s == image)
			.expect("rotor wiring maps onto its own rings")
	}

	/// Advances one position. Returns true when a full revolution completes.
	pub fn step(&mut self) -> bool {
		self.right.rotate_left(1);
		self.left.rotate_left(1);
		self.rotation += 1;
		trace!(rotor = %self.name, rotation = self.rotation, "step");

		if self.rotation == self.right.len() {
			self.rotation = 0;
			true
		} else {
			false
		}
	}

	/// Symbol showing in the window.
	pub fn peek(&self) -> &str {
		&self.right[0]
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn rotation(&self) -> usize {
		self.rotation
	}

	pub fn right(&self) -> &[String] {
		&self.right
	}

	pub fn left(&self) -> &[String] {
		&self.left
	}

	pub fn wiring(&self) -> &WireMap {
		&self.wiring
	}

	pub fn len(&self) -> usize {
		self.right.len()
	}

	pub fn is_empty(&self) -> bool {
		self.right.is_empty()
	}

	/// Ring order at rotation 0.
	pub fn home(&self) -> Vec<String> {
		let mut home = self.right.clone();
		home.rotate_right(self.rotation);
		home
	}
}

impl Wiring for Rotor {
	fn apply_at(&self, index: usize) -> usize {
		self.forward(index)
	}
}
