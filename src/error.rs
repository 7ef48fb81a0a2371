use thiserror::Error;

/// Everything the engine can refuse to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("invalid alphabet: {reason}")]
	InvalidAlphabet { reason: String },

	#[error("symbol {0:?} is not part of the alphabet")]
	SymbolNotFound(String),

	#[error("rotor box position {index} is outside 1..={len}")]
	CatalogIndexOutOfRange { index: usize, len: usize },

	#[error("malformed wiring: {reason}")]
	MalformedWiring { reason: String },

	#[error("{component} does not use the machine alphabet")]
	AlphabetMismatch { component: String },

	#[error("plug socket {0:?} is already connected")]
	PlugInUse(String),

	#[error("snapshot rejected as malformed: {0}")]
	MalformedSnapshot(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub(crate) fn invalid_alphabet(reason: impl Into<String>) -> Self {
		Error::InvalidAlphabet { reason: reason.into() }
	}

	pub(crate) fn malformed_wiring(reason: impl Into<String>) -> Self {
		Error::MalformedWiring { reason: reason.into() }
	}

	pub(crate) fn mismatch(component: impl Into<String>) -> Self {
		Error::AlphabetMismatch { component: component.into() }
	}
}
