//! Resolves and encodes each command-line argument as an event
//! specification, printing its canonical string and machine codes.
//! Direct descendant of the teacher's `src/bin/parse.rs`: argv in,
//! println! out, no argument-parsing crate.

use std::env;
use std::process;

use pfm_core::{get_event_encoding, initialize, PrivilegeMask};

fn main() {
    env_logger::init();
    initialize().expect("library initialization cannot fail");

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: pfm-encode <event-spec> [event-spec ...]");
        process::exit(1);
    }

    let mut had_error = false;
    for spec in &args {
        match get_event_encoding(spec, PrivilegeMask::all()) {
            Ok((codes, fstr)) => {
                let words: Vec<String> = codes.iter().map(|c| format!("0x{:x}", c)).collect();
                println!("{} -> {}", fstr, words.join(", "));
            }
            Err(e) => {
                eprintln!("{}: {}", spec, e.strerror());
                had_error = true;
            }
        }
    }

    if had_error {
        process::exit(1);
    }
}
