//! Enumerates every active PMU, its events, and each event's attributes.
//! Direct descendant of the teacher's `src/bin/list.rs`: a plain
//! discovery front-end with no argument parsing beyond `std::env::args`.

use pfm_core::iter;
use pfm_core::{PfmError, Registry};

fn print_attr(attr: &iter::AttrInfo) {
    let kind = match attr.kind {
        iter::AttrKind::Umask => "umask",
        iter::AttrKind::Modifier => "mod",
    };
    let default = if attr.is_default { " (default)" } else { "" };
    println!("      [{}] {}{} -- {}", kind, attr.name, default, attr.desc);
}

fn main() {
    env_logger::init();

    let registry = Registry::global();

    println!("Active PMUs:");
    println!("------------");
    for pmu in iter::pmus(registry) {
        println!("{} ({}) -- {} events, max_encoding={}", pmu.name, pmu.desc, pmu.events.len(), pmu.max_encoding);
        for event in iter::events(pmu) {
            println!("  {}", event.name);
            for attr in iter::attrs(pmu, event) {
                print_attr(&attr);
            }
        }
    }

    if iter::pmus(registry).next().is_none() {
        eprintln!("{}", PfmError::NoInit.strerror());
    }
}
