use std::fmt;

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::catalog::RotorCatalog;
use crate::error::{Error, Result};
use crate::event::{Event, Observer};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::snapshot::MachineSnapshot;
use crate::wiring::Wiring;

/// The whole machine: plugboard, reflector, rotor box, the installed rotor
/// stack and the running transcripts.
pub struct Machine {
	io:			Alphabet,
	plugboard:	Plugboard,
	reflector:	Reflector,
	catalog:	RotorCatalog,
	rotors:		Vec<Rotor>,		// stack order, index 0 sees the plugboard first
	plaintext:	String,
	ciphertext:	String,
	observer:	Option<Box<dyn Observer>>,
}

impl Machine {
	pub fn new(io: Alphabet) -> Self {
		Machine::build(io, None)
	}

	pub fn with_observer(io: Alphabet, observer: Box<dyn Observer>) -> Self {
		Machine::build(io, Some(observer))
	}

	fn build(io: Alphabet, observer: Option<Box<dyn Observer>>) -> Self {
		let mut m = Machine {
			plugboard:	Plugboard::new(&io),
			reflector:	Reflector::new(&io),
			catalog:	RotorCatalog::new(&io),
			rotors:		Vec::new(),
			plaintext:	String::new(),
			ciphertext:	String::new(),
			observer,
			io,
		};
		debug!(size = m.io.len(), "machine initialized");
		let alphabet = m.io.to_string();
		m.notify(Event::Created { alphabet });
		m
	}

	/// Assembles a machine from already validated parts.
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn from_parts(
		io: Alphabet,
		plugboard: Plugboard,
		reflector: Reflector,
		catalog: RotorCatalog,
		rotors: Vec<Rotor>,
		plaintext: String,
		ciphertext: String,
		observer: Option<Box<dyn Observer>>,
	) -> Self {
		let mut m = Machine { io, plugboard, reflector, catalog, rotors, plaintext, ciphertext, observer };
		m.notify(Event::Restored);
		m
	}

	fn notify(&mut self, event: Event) {
		if let Some(observer) = self.observer.as_mut() {
			observer.notify(&event);
		}
	}

	/// Puts a copy of rotor box entry `position` (1-based) at the end of
	/// the stack under `name`.
	pub fn retrieve(&mut self, position: usize, name: &str) -> Result<()> {
		let len = self.catalog.len();
		let template = match position.checked_sub(1).and_then(|i| self.catalog.get(i)) {
			Some(t) => t,
			None => return Err(Error::CatalogIndexOutOfRange { index: position, len }),
		};

		let rotor = template.copy_as(name);
		debug!(name, position, "rotor installed");
		self.rotors.push(rotor);
		self.notify(Event::RotorRetrieved { name: name.to_string(), position });
		Ok(())
	}

	/// Adds a template to the rotor box. Its rings must hold this machine's
	/// symbols.
	pub fn add_rotor(&mut self, rotor: Rotor) -> Result<()> {
		if !self.io.same_symbols(rotor.right()) {
			return Err(Error::mismatch(format!("rotor {:?}", rotor.name())));
		}
		let name = rotor.name().to_string();
		self.catalog.add(rotor);
		self.notify(Event::RotorAdded { name });
		Ok(())
	}

	/// Takes rotor box entry `position` (1-based) out. The default rotor and
	/// unknown positions are left alone and yield `None`.
	pub fn remove_rotor(&mut self, position: usize) -> Option<Rotor> {
		let rotor = self.catalog.remove(position.checked_sub(1)?)?;
		self.notify(Event::RotorRemoved { name: rotor.name().to_string() });
		Some(rotor)
	}

	pub fn catalog_names(&mut self) -> Vec<String> {
		self.notify(Event::CatalogViewed);
		self.catalog.names().into_iter().map(String::from).collect()
	}

	pub fn connect_plugs(&mut self, a: &str, b: &str) -> Result<()> {
		self.plugboard.connect(a, b)?;
		self.notify(Event::PlugsConnected { a: a.to_string(), b: b.to_string() });
		Ok(())
	}

	pub fn disconnect_plug(&mut self, symbol: &str) -> Result<()> {
		self.plugboard.disconnect(symbol)?;
		self.notify(Event::PlugDisconnected { symbol: symbol.to_string() });
		Ok(())
	}

	pub fn clear_plugboard(&mut self) {
		self.plugboard.clear();
		self.notify(Event::PlugboardCleared);
	}

	/// Enciphers one symbol, then moves the rotors.
	pub fn encrypt(&mut self, symbol: &str) -> Result<String> {
		let i0 = match self.plugboard.io().position(symbol) {
			Some(i) => i,
			None => return Err(Error::SymbolNotFound(symbol.to_string())),
		};
		let i3 = self.encipher(i0);

		let out = self.plugboard.io().symbol(i3).to_string();
		trace!(input = symbol, output = %out, "enciphered");
		self.plaintext.push_str(symbol);
		self.ciphertext.push_str(&out);
		Ok(out)
	}

	/// Enciphers a whole sequence. Nothing moves if any symbol is unknown.
	pub fn encrypt_all<I, S>(&mut self, symbols: I) -> Result<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let symbols: Vec<S> = symbols.into_iter().collect();
		for s in &symbols {
			let s: &str = s.as_ref();
			if !self.io.contains(s) {
				return Err(Error::SymbolNotFound(s.to_string()));
			}
		}

		let mut out = String::new();
		for s in &symbols {
			out.push_str(&self.encrypt(s.as_ref())?);
		}
		Ok(out)
	}

	fn encipher(&mut self, i0: usize) -> usize {
		let i1 = self.plugboard.apply_at(i0);

		if self.rotors.is_empty() {
			let i2 = self.reflector.apply_at(i1);
			return self.plugboard.apply_at(i2);
		}

		// do rotors forward
		let mut c = i1;
		for r in &self.rotors {
			c = r.forward(c);
		}

		c = self.reflector.apply_at(c);

		// do rotors reverse
		for r in self.rotors.iter().rev() {
			c = r.backward(c);
		}

		let i3 = self.plugboard.apply_at(c);
		self.advance_rotors();
		i3
	}

	// Odometer: every rotor but the last turns each time, and a completed
	// revolution also turns its neighbour.
	fn advance_rotors(&mut self) {
		let n = self.rotors.len();
		if n == 1 {
			self.rotors[0].step();
			return;
		}

		for k in 0..n.saturating_sub(1) {
			if self.rotors[k].step() {
				self.rotors[k + 1].step();
			}
		}
	}

	/// Window symbols of the installed rotors, in stack order.
	pub fn windows(&self) -> Vec<&str> {
		self.rotors.iter().map(Rotor::peek).collect()
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.io
	}

	pub fn plugboard(&self) -> &Plugboard {
		&self.plugboard
	}

	pub fn reflector(&self) -> &Reflector {
		&self.reflector
	}

	pub fn catalog(&self) -> &RotorCatalog {
		&self.catalog
	}

	pub fn rotors(&self) -> &[Rotor] {
		&self.rotors
	}

	pub fn plaintext(&self) -> &str {
		&self.plaintext
	}

	pub fn ciphertext(&self) -> &str {
		&self.ciphertext
	}

	pub fn snapshot(&self) -> MachineSnapshot {
		MachineSnapshot::from(self)
	}

	pub fn restore(snapshot: MachineSnapshot) -> Result<Self> {
		snapshot.into_machine(None)
	}

	pub fn restore_with_observer(snapshot: MachineSnapshot, observer: Box<dyn Observer>) -> Result<Self> {
		snapshot.into_machine(Some(observer))
	}
}

impl fmt::Debug for Machine {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Machine")
			.field("io", &self.io)
			.field("plugboard", &self.plugboard)
			.field("reflector", &self.reflector)
			.field("catalog", &self.catalog)
			.field("rotors", &self.rotors)
			.field("plaintext", &self.plaintext)
			.field("ciphertext", &self.ciphertext)
			.field("observed", &self.observer.is_some())
			.finish()
	}
}
