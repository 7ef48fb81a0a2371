//! Rotor machine simulator over an arbitrary alphabet
//! by Nicholas Cyprus (ngc0202)

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use enigma::{keyfile, persist, Alphabet, Machine, Observer, TracingObserver};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
	let _ = writeln!(io::stderr(), "Usage: [keyfile] <infile> [statefile]");
	std::process::exit(1);
}

macro_rules! unwrap {
    ($res:expr) => (
    	match $res {
    		Ok(v) => v,
    		Err(e) => {
    			let _ = writeln!(io::stderr(), "{}", e);
				std::process::exit(1);
    		}
    	}
    )
}

// symbol for `c`, trying the upper-case form when only that is known
fn symbol_for(en: &Machine, c: char) -> Option<String> {
	let s = c.to_string();
	if en.alphabet().contains(&s) {
		return Some(s);
	}
	let upper: String = c.to_uppercase().collect();
	if en.alphabet().contains(&upper) {
		Some(upper)
	} else {
		None
	}
}

fn encipher_file(path: &str, en: &mut Machine) -> Result<String, Box<dyn std::error::Error>> {
	let mut text = String::new();
	BufReader::new(File::open(path)?).read_to_string(&mut text)?;

	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match symbol_for(en, c) {
			Some(s) => out.push_str(&en.encrypt(&s)?),
			None => out.push(c),
		}
	}
	Ok(out)
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	let args: Vec<_> = env::args().collect();
	let observer: Box<dyn Observer> = Box::new(TracingObserver);

	let (mut en, infile, statefile) = match args.len() {
		4 => (unwrap!(keyfile::load(&args[1], Some(observer))), &args[2], Some(&args[3])),
		3 => (unwrap!(keyfile::load(&args[1], Some(observer))), &args[2], None),
		2 => (Machine::with_observer(Alphabet::latin(), observer), &args[1], None),
		_ => usage(),
	};

	let out = unwrap!(encipher_file(infile, &mut en));
	println!("{}", out);

	if let Some(path) = statefile {
		unwrap!(persist::save(path, &en));
	}
}
