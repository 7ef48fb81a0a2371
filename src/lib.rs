//! Rotor cipher machine over any even-sized alphabet.
//!
//! A [`Machine`] chains a [`Plugboard`], a stack of [`Rotor`] copies taken
//! from its [`RotorCatalog`] and a [`Reflector`] into one substitution that
//! changes after every symbol.
//!
//! ```
//! use enigma::{Alphabet, Machine};
//!
//! let mut m = Machine::new(Alphabet::from_chars("WXYZ").unwrap());
//! m.retrieve(1, "I").unwrap();
//! assert_eq!(m.encrypt_all(["W", "X", "Y", "Z"]).unwrap(), "ZYXW");
//! assert_eq!(m.rotors()[0].rotation(), 0);
//! ```

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod event;
pub mod keyfile;
pub mod machine;
pub mod persist;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod snapshot;
pub mod wiring;

pub use alphabet::Alphabet;
pub use catalog::{RotorCatalog, DEFAULT_ROTOR};
pub use error::{Error, Result};
pub use event::{Event, EventLog, Observer, TracingObserver};
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use snapshot::{MachineSnapshot, PlugboardRecord, ReflectorRecord, RotorRecord};
pub use wiring::{WireMap, Wiring};
