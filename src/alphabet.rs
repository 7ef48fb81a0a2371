use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};

/// The ordered symbol set every component of a machine works over.
///
/// Order is fixed once the alphabet is built; indices handed between the
/// plugboard, rotors and reflector are positions in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	symbols:	Vec<String>,
	index:		HashMap<String, usize>,
}

impl Alphabet {
	/// Builds an alphabet, rejecting odd sizes, fewer than two symbols,
	/// empty symbols and duplicates.
	pub fn new<I, S>(symbols: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

		if symbols.len() < 2 {
			return Err(Error::invalid_alphabet(format!(
				"needs at least 2 symbols, got {}", symbols.len()
			)));
		}
		if symbols.len() % 2 != 0 {
			return Err(Error::invalid_alphabet(format!(
				"size must be even, got {}", symbols.len()
			)));
		}

		let mut index = HashMap::with_capacity(symbols.len());
		for (i, s) in symbols.iter().enumerate() {
			if s.is_empty() {
				return Err(Error::invalid_alphabet("empty symbol"));
			}
			if index.insert(s.clone(), i).is_some() {
				return Err(Error::invalid_alphabet(format!("duplicate symbol {:?}", s)));
			}
		}

		Ok(Alphabet { symbols, index })
	}

	/// One symbol per character of `s`.
	pub fn from_chars(s: &str) -> Result<Self> {
		Alphabet::new(s.chars().map(String::from))
	}

	/// `A` through `Z`.
	pub fn latin() -> Self {
		let symbols: Vec<String> = (b'A'..=b'Z').map(|c| (c as char).to_string()).collect();
		let index = symbols.iter().cloned().enumerate().map(|(i, s)| (s, i)).collect();
		Alphabet { symbols, index }
	}

	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	// never true for a constructed alphabet, kept for the len() convention
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	pub fn position(&self, symbol: &str) -> Option<usize> {
		self.index.get(symbol).copied()
	}

	pub fn contains(&self, symbol: &str) -> bool {
		self.index.contains_key(symbol)
	}

	/// Panics if `i` is out of range, like slice indexing.
	pub fn symbol(&self, i: usize) -> &str {
		&self.symbols[i]
	}

	pub fn symbols(&self) -> &[String] {
		&self.symbols
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
		self.symbols.iter().map(String::as_str)
	}

	/// True when `other` holds exactly the same symbols, in any order.
	pub fn same_symbols<S: AsRef<str>>(&self, other: &[S]) -> bool {
		if other.len() != self.len() {
			return false;
		}
		let mut seen = HashSet::with_capacity(other.len());
		other.iter().all(|s| {
			let s: &str = s.as_ref();
			self.contains(s) && seen.insert(s)
		})
	}

	/// Re-orders this alphabet, failing unless `order` is a permutation of it.
	pub fn reordered<S: AsRef<str>>(&self, order: &[S]) -> Result<Alphabet> {
		if !self.same_symbols(order) {
			return Err(Error::mismatch("rotor order"));
		}
		Alphabet::new(order.iter().map(|s| str::to_string(s.as_ref())))
	}
}

impl fmt::Display for Alphabet {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[{}]", self.symbols.join(", "))
	}
}
