use std::fmt;

use tracing::info;

/// State changes a machine reports to its observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	Created { alphabet: String },
	Restored,
	RotorAdded { name: String },
	RotorRemoved { name: String },
	RotorRetrieved { name: String, position: usize },
	CatalogViewed,
	PlugsConnected { a: String, b: String },
	PlugDisconnected { symbol: String },
	PlugboardCleared,
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Event::Created { alphabet } =>
				write!(f, "machine initialized over {}", alphabet),
			Event::Restored =>
				write!(f, "machine restored from a saved session"),
			Event::RotorAdded { name } =>
				write!(f, "rotor {:?} added to the rotor box", name),
			Event::RotorRemoved { name } =>
				write!(f, "rotor {:?} removed from the rotor box", name),
			Event::RotorRetrieved { name, position } =>
				write!(f, "rotor {:?} installed, copied from rotor box position {}", name, position),
			Event::CatalogViewed =>
				write!(f, "rotor box viewed"),
			Event::PlugsConnected { a, b } =>
				write!(f, "plugboard connected {} <-> {}", a, b),
			Event::PlugDisconnected { symbol } =>
				write!(f, "plugboard disconnected {}", symbol),
			Event::PlugboardCleared =>
				write!(f, "plugboard cleared"),
		}
	}
}

/// Receives machine events. Injected at construction; there is no global log.
pub trait Observer {
	fn notify(&mut self, event: &Event);
}

/// Keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
	events: Vec<Event>,
}

impl EventLog {
	pub fn new() -> Self {
		EventLog::default()
	}

	pub fn events(&self) -> &[Event] {
		&self.events
	}

	pub fn clear(&mut self) {
		self.events.clear();
	}
}

impl Observer for EventLog {
	fn notify(&mut self, event: &Event) {
		self.events.push(event.clone());
	}
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
	fn notify(&mut self, event: &Event) {
		info!(target: "enigma::event", "{}", event);
	}
}

// lets a caller keep a handle on a log it lent to a machine
impl<O: Observer + ?Sized> Observer for std::rc::Rc<std::cell::RefCell<O>> {
	fn notify(&mut self, event: &Event) {
		self.borrow_mut().notify(event);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_keeps_order() {
		let mut log = EventLog::new();
		log.notify(&Event::Restored);
		log.notify(&Event::CatalogViewed);
		assert_eq!(log.events(), [Event::Restored, Event::CatalogViewed]);
		log.clear();
		assert!(log.events().is_empty());
	}

	#[test]
	fn descriptions() {
		let e = Event::RotorRetrieved { name: "I".into(), position: 2 };
		assert_eq!(e.to_string(), "rotor \"I\" installed, copied from rotor box position 2");
		let e = Event::PlugsConnected { a: "A".into(), b: "B".into() };
		assert_eq!(e.to_string(), "plugboard connected A <-> B");
	}
}
