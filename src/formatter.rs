//! Renders a resolved event back into its canonical string form: umasks
//! in schema-declaration order, then modifiers in the PMU's declared
//! order, each printed with its resolved value (defaults included).

use std::fmt::Write;

use crate::resolver::EncodedEvent;

/// Builds the canonical `pmu::EVENT:UMASK1:UMASK2:mod=val:...` string for
/// a resolved event. Always round-trips back through [`crate::resolve`]
/// to the same encoding, though not necessarily to the same source text
/// (bareword modifiers and omitted defaults are spelled out explicitly).
pub fn format_canonical(ev: &EncodedEvent) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}::{}", ev.pmu.name, ev.event.name);

    for (_, umask) in &ev.umasks {
        let _ = write!(out, ":{}", umask.name);
    }
    if let Some(raw) = ev.raw_umask {
        let _ = write!(out, ":0x{:x}", raw);
    }

    for (name, value) in &ev.modifiers {
        let _ = write!(out, ":{}={}", name, value);
    }

    out
}
