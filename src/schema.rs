//! The declarative per-PMU schema: events, umasks, modifiers, and the
//! capability record each PMU plugs into the registry with. PMUs are
//! dispatched polymorphically through `&'static dyn PmuEncoder` rather
//! than an inheritance hierarchy.

use crate::encoder::PmuEncoder;

bitflags! {
    /// Per-PMU policy bits.
    pub struct PmuFlags: u32 {
        /// A core PMU: privilege (`k`/`u`) and any-thread (`t`) bits apply.
        const CORE = 1 << 0;
        /// An uncore PMU: no privilege levels, no any-thread bit.
        const UNCORE = 1 << 1;
        /// `e` (edge detect) may be set without an accompanying non-zero
        /// `c` (counter mask). False on Nehalem/Westmere/Sandy Bridge-class
        /// cores; true on Core 2 and Atom.
        const EDGE_WITHOUT_CMASK_OK = 1 << 2;
    }
}

bitflags! {
    /// Per-event encoding semantics.
    pub struct EventFlags: u32 {
        /// A bareword of the form `0xNNN` that doesn't name a declared
        /// umask is accepted as a raw numeric umask, subject to a width
        /// check.
        const ALLOW_RAW_UMASK = 1 << 0;
        /// An offcore-response-style event: its umasks route into a
        /// second 64-bit word instead of the first word's umask field.
        const OFFCORE = 1 << 1;
    }
}

/// Stable numeric identity for a registered PMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PmuId(pub u32);

/// One or two base code fragments an event contributes before umasks and
/// modifiers are folded in. `Two` is used by offcore-style events, where
/// the second fragment is a fixed umask byte rather than a second event
/// select.
#[derive(Debug, Clone, Copy)]
pub enum EventCode {
    One(u64),
    Two(u64, u64),
}

/// A sub-selector narrowing what an event counts.
#[derive(Debug)]
pub struct UmaskDesc {
    pub name: &'static str,
    pub value: u64,
    /// Combinability group: umasks in the same `grpid` OR together by
    /// default; at most one is the group's default.
    pub grpid: u32,
    pub default: bool,
    /// May not combine with any sibling, in or out of its group.
    pub exclusive: bool,
    pub desc: &'static str,
}

/// A named attribute orthogonal to the event itself (privilege level,
/// edge detect, counter mask, threshold, ...).
#[derive(Debug, Clone, Copy)]
pub enum ModifierKind {
    Bool,
    Int { max: u64 },
}

#[derive(Debug)]
pub struct ModifierDesc {
    pub name: &'static str,
    pub kind: ModifierKind,
    /// Bit position in the encoded word this modifier occupies. Purely
    /// documentary for the table validator's overlap check; the actual
    /// shift is owned by the PMU's encoder.
    pub bit: u32,
    pub width: u32,
    pub default: u64,
    /// Marks `k`/`u`: if the user sets neither, both default from the
    /// `privilege_mask` hint; if either is set explicitly, the other
    /// defaults to 0 instead of its usual `default`.
    pub privilege_pair: bool,
    pub desc: &'static str,
}

/// A countable phenomenon, one entry per PMU event table.
pub struct EventDesc {
    pub name: &'static str,
    /// Generic equivalence-class name (e.g. `branch_instructions_retired`)
    /// that resolves onto this model-specific event.
    pub alias: Option<&'static str>,
    pub code: EventCode,
    pub umasks: &'static [UmaskDesc],
    pub flags: EventFlags,
    /// Bit width of the raw-numeric-umask field, when `ALLOW_RAW_UMASK`
    /// is set.
    pub raw_umask_width: u32,
    pub desc: &'static str,
}

/// A named hardware model.
pub struct PmuDesc {
    pub id: PmuId,
    pub name: &'static str,
    pub desc: &'static str,
    pub max_encoding: usize,
    pub events: &'static [EventDesc],
    pub modifiers: &'static [ModifierDesc],
    pub flags: PmuFlags,
    pub encoder: &'static dyn PmuEncoder,
}

impl EventDesc {
    pub fn find_umask(&self, name: &str) -> Option<(usize, &'static UmaskDesc)> {
        self.umasks
            .iter()
            .enumerate()
            .find(|(_, u)| u.name.eq_ignore_ascii_case(name))
    }
}

impl PmuDesc {
    pub fn find_event(&self, name: &str) -> Option<&'static EventDesc> {
        self.events.iter().find(|e| {
            e.name.eq_ignore_ascii_case(name)
                || e.alias.map_or(false, |a| a.eq_ignore_ascii_case(name))
        })
    }

    pub fn find_modifier(&self, name: &str) -> Option<&'static ModifierDesc> {
        self.modifiers.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }
}
