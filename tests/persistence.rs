use std::fs;

use enigma::persist::{self, PersistError};
use enigma::{Alphabet, Error, Machine, Rotor, WireMap};

fn session() -> Machine {
	let io = Alphabet::from_chars("ABCDEFGH").unwrap();
	let wiring: WireMap = "ABCDEFGH"
		.chars()
		.zip("HFBDGACE".chars())
		.map(|(a, b)| (a.to_string(), b.to_string()))
		.collect();
	let order = io.reordered(&["C", "A", "H", "B", "G", "D", "F", "E"]).unwrap();

	let mut m = Machine::new(io);
	m.add_rotor(Rotor::with_wiring("scrambler", &order, wiring).unwrap()).unwrap();
	m.retrieve(2, "slow").unwrap();
	m.retrieve(1, "middle").unwrap();
	m.retrieve(2, "fast").unwrap();
	m.connect_plugs("A", "E").unwrap();
	m.encrypt_all("HEADBADCAFEBABE".chars().map(String::from)).unwrap();
	m
}

#[test]
fn file_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("enigma.json");
	let mut original = session();
	persist::save(&path, &original).unwrap();

	let mut loaded = persist::load(&path).unwrap();
	assert_eq!(loaded.plaintext(), original.plaintext());
	assert_eq!(loaded.ciphertext(), original.ciphertext());

	let names = |m: &Machine| m.rotors().iter().map(|r| r.name().to_string()).collect::<Vec<_>>();
	let rotations = |m: &Machine| m.rotors().iter().map(Rotor::rotation).collect::<Vec<_>>();
	assert_eq!(names(&loaded), names(&original));
	assert_eq!(rotations(&loaded), rotations(&original));
	assert_eq!(loaded.catalog_names(), original.catalog_names());

	// both continue identically
	assert_eq!(
		loaded.encrypt_all(["D", "E", "A", "D"]).unwrap(),
		original.encrypt_all(["D", "E", "A", "D"]).unwrap()
	);
}

#[test]
fn saved_layout_uses_record_names() {
	let json = persist::to_string(&session()).unwrap();
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	for key in ["plugboard", "inverter", "rotorBox", "rotorsToUse", "io", "original", "encrypted"] {
		assert!(value.get(key).is_some(), "missing {}", key);
	}
	let rotor = &value["rotorsToUse"][0];
	for key in ["name", "rotation", "right", "left", "wiring"] {
		assert!(rotor.get(key).is_some(), "missing rotor {}", key);
	}
	assert_eq!(value["plugboard"]["connections"]["A"], "E");
	assert_eq!(value["inverter"]["inversions"]["A"], "H");
}

#[test]
fn accepts_legacy_rotor_field_names() {
	let json = persist::to_string(&session())
		.unwrap()
		.replace("\"right\"", "\"rotorRight\"")
		.replace("\"left\"", "\"rotorLeft\"")
		.replace("\"wiring\"", "\"rotorWiring\"");
	let m = persist::from_str(&json).unwrap();
	assert_eq!(m.rotors().len(), 3);
}

#[test]
fn missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = persist::load(dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(err, PersistError::Io(_)));
}

#[test]
fn tampered_wiring_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("enigma.json");
	persist::save(&path, &session()).unwrap();

	let mut value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
	value["rotorsToUse"][0]["wiring"]["A"] = serde_json::Value::String("B".into());
	fs::write(&path, value.to_string()).unwrap();

	let err = persist::load(&path).unwrap_err();
	assert!(matches!(err, PersistError::Rejected(Error::MalformedWiring { .. })));
}

#[test]
fn tampered_reflector_is_rejected() {
	let mut value: serde_json::Value = serde_json::from_str(&persist::to_string(&session()).unwrap()).unwrap();
	value["inverter"]["inversions"]["A"] = serde_json::Value::String("B".into());
	let err = persist::from_str(&value.to_string()).unwrap_err();
	assert!(matches!(err, PersistError::Rejected(Error::MalformedSnapshot(_))));
}
