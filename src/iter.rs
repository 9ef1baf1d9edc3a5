//! Read-only enumeration over the registry's schema: PMUs, events, and
//! each event's attributes (umasks and modifiers alike, tagged by kind).
//! Used by introspection tools (`pfm-list`) rather than the resolve path.

use crate::registry::Registry;
use crate::schema::{EventDesc, PmuDesc, UmaskDesc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Umask,
    Modifier,
}

#[derive(Debug)]
pub struct AttrInfo {
    pub kind: AttrKind,
    pub name: &'static str,
    pub desc: &'static str,
    pub is_default: bool,
}

/// Iterates every active PMU in registration order.
pub fn pmus(registry: &'static Registry) -> impl Iterator<Item = &'static PmuDesc> {
    registry.active().iter().copied()
}

/// Iterates every event of a PMU in table order.
pub fn events(pmu: &'static PmuDesc) -> impl Iterator<Item = &'static EventDesc> {
    pmu.events.iter()
}

/// Iterates an event's umasks followed by its owning PMU's modifiers, the
/// same order the formatter prints a fully-resolved event in.
pub fn attrs(pmu: &'static PmuDesc, event: &'static EventDesc) -> Vec<AttrInfo> {
    let mut out = Vec::with_capacity(event.umasks.len() + pmu.modifiers.len());
    for u in event.umasks {
        out.push(AttrInfo {
            kind: AttrKind::Umask,
            name: u.name,
            desc: u.desc,
            is_default: u.default,
        });
    }
    for m in pmu.modifiers {
        out.push(AttrInfo {
            kind: AttrKind::Modifier,
            name: m.name,
            desc: m.desc,
            is_default: false,
        });
    }
    out
}

pub fn umask_count(event: &'static EventDesc) -> usize {
    event.umasks.len()
}

pub fn umask_at(event: &'static EventDesc, idx: usize) -> Option<&'static UmaskDesc> {
    event.umasks.get(idx)
}
