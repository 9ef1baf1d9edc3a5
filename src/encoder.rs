//! PMU-specific encoding algorithms.
//!
//! Each encoder is a capability object: a zero-sized type implementing
//! [`PmuEncoder`], referenced by `&'static dyn PmuEncoder` from the owning
//! [`crate::schema::PmuDesc`] -- a vtable-like structure, not an
//! inheritance hierarchy. `encode` is a pure function of the resolved
//! record: no I/O, no global state, deterministic for equal inputs.

use crate::resolver::EncodedEvent;
use crate::schema::EventCode;

/// Up to `max_encoding` 64-bit words. Every encoder family in this crate
/// needs at most two (offcore / Netburst / SPARC Niagara).
pub type Codes = Vec<u64>;

pub trait PmuEncoder: Sync {
    fn encode(&self, ev: &EncodedEvent) -> Codes;
}

const BIT_USR: u64 = 1 << 16;
const BIT_OS: u64 = 1 << 17;
const BIT_EDGE: u64 = 1 << 18;
const BIT_INT: u64 = 1 << 20;
const BIT_ANY: u64 = 1 << 21;
const BIT_EN: u64 = 1 << 22;
const BIT_INV: u64 = 1 << 23;

fn umask_sum(ev: &EncodedEvent) -> u64 {
    let named: u64 = ev.umasks.iter().map(|(_, u)| u.value).fold(0, |a, b| a | b);
    named | ev.raw_umask.unwrap_or(0)
}

fn base_fragments(ev: &EncodedEvent) -> (u64, u64) {
    match ev.event.code {
        EventCode::One(c) => (c, 0),
        EventCode::Two(a, b) => (a, b),
    }
}

/// Generic Intel core-style PERFEVTSEL encoder. Backs `core`, `atom`,
/// `nhm`, `wsm`. Offcore events (flagged `OFFCORE`) route their umask
/// selections into a second word instead of `code[0]`'s umask field.
pub struct X86CoreEncoder;

impl PmuEncoder for X86CoreEncoder {
    fn encode(&self, ev: &EncodedEvent) -> Codes {
        let (event_sel, fixed_umask) = base_fragments(ev);
        let k = ev.modifier_bool("k");
        let u = ev.modifier_bool("u");
        let e = ev.modifier_bool("e");
        let inv = ev.modifier_bool("i");
        let t = ev.modifier_bool("t");
        let cmask = ev.modifier_value("c");

        let umask0 = if ev.event.flags.contains(crate::schema::EventFlags::OFFCORE) {
            fixed_umask
        } else {
            umask_sum(ev)
        };

        let mut code0 = event_sel;
        code0 |= umask0 << 8;
        if u {
            code0 |= BIT_USR;
        }
        if k {
            code0 |= BIT_OS;
        }
        if e {
            code0 |= BIT_EDGE;
        }
        code0 |= BIT_INT;
        if t {
            code0 |= BIT_ANY;
        }
        code0 |= BIT_EN;
        if inv {
            code0 |= BIT_INV;
        }
        code0 |= cmask << 24;

        let mut out = Codes::new();
        out.push(code0);
        if ev.event.flags.contains(crate::schema::EventFlags::OFFCORE) {
            let (request, response) = split_offcore_groups(ev);
            out.push(request | response);
        }
        out
    }
}

/// Splits an offcore event's selected umasks into its two families by
/// `grpid`: group 0 is the request mask, group 1 the response mask. Both
/// OR together independently, then the two masks combine by a plain OR
/// into `code[1]` (the chosen umask values already occupy disjoint bit
/// ranges, so no further shifting is needed).
fn split_offcore_groups(ev: &EncodedEvent) -> (u64, u64) {
    let mut request = 0u64;
    let mut response = 0u64;
    for (_, u) in &ev.umasks {
        if u.grpid == 0 {
            request |= u.value;
        } else {
            response |= u.value;
        }
    }
    (request, response)
}

/// Same PERFEVTSEL shape as [`X86CoreEncoder`] but uncore events have no
/// privilege levels and no any-thread bit; an `o` (opcode/filter)
/// modifier takes their place in the upper word. Backs `wsm_unc`.
pub struct X86UncoreEncoder;

impl PmuEncoder for X86UncoreEncoder {
    fn encode(&self, ev: &EncodedEvent) -> Codes {
        let (event_sel, _) = base_fragments(ev);
        let e = ev.modifier_bool("e");
        let inv = ev.modifier_bool("i");
        let cmask = ev.modifier_value("c");
        let opcode = ev.modifier_value("o");

        let mut code0 = event_sel;
        code0 |= umask_sum(ev) << 8;
        if e {
            code0 |= BIT_EDGE;
        }
        code0 |= BIT_INT;
        code0 |= BIT_EN;
        if inv {
            code0 |= BIT_INV;
        }
        code0 |= cmask << 24;
        code0 |= opcode << 32;

        let mut out = Codes::new();
        out.push(code0);
        out
    }
}

/// AMD64 PERFEVTSEL-shaped encoder: like [`X86CoreEncoder`] but without
/// the any-thread bit (AMD has no equivalent before SVM's `h`/`g`, which
/// this crate's one AMD PMU predates). Backs `amd64_k8`.
pub struct Amd64Encoder;

impl PmuEncoder for Amd64Encoder {
    fn encode(&self, ev: &EncodedEvent) -> Codes {
        let (event_sel, _) = base_fragments(ev);
        let k = ev.modifier_bool("k");
        let u = ev.modifier_bool("u");
        let e = ev.modifier_bool("e");
        let inv = ev.modifier_bool("i");
        let cmask = ev.modifier_value("c");

        let mut code0 = event_sel;
        code0 |= umask_sum(ev) << 8;
        if u {
            code0 |= BIT_USR;
        }
        if k {
            code0 |= BIT_OS;
        }
        if e {
            code0 |= BIT_EDGE;
        }
        code0 |= BIT_INT;
        code0 |= BIT_EN;
        if inv {
            code0 |= BIT_INV;
        }
        code0 |= cmask << 24;

        let mut out = Codes::new();
        out.push(code0);
        out
    }
}

/// Two-word ESCR/CCCR encoder for the Netburst (Pentium 4) family. Event
/// and umask select live in the ESCR word; enable, compare, complement,
/// threshold and edge live in the CCCR word. Backs `netburst`.
pub struct NetburstEncoder;

const CCCR_ENABLE: u64 = 1 << 12;
const CCCR_COMPARE: u64 = 1 << 18;
const CCCR_COMPLEMENT: u64 = 1 << 19;
const CCCR_OVF_PMI: u64 = 1 << 26;

impl PmuEncoder for NetburstEncoder {
    fn encode(&self, ev: &EncodedEvent) -> Codes {
        let (event_sel, _) = base_fragments(ev);
        let k = ev.modifier_bool("k");
        let u = ev.modifier_bool("u");
        let e = ev.modifier_bool("e");
        let cmpl = ev.modifier_bool("cmpl");
        let thr = ev.modifier_value("thr");

        let mut escr = (event_sel & 0x7f) << 25;
        escr |= umask_sum(ev) << 9;
        if u {
            escr |= 1 << 2;
        }
        if k {
            escr |= 1 << 1;
        }
        if cmpl {
            escr |= CCCR_COMPARE;
        }

        let mut cccr = CCCR_ENABLE | CCCR_OVF_PMI;
        if e {
            cccr |= 1 << 24;
        }
        if cmpl {
            cccr |= CCCR_COMPLEMENT;
        }
        cccr |= thr << 20;

        let mut out = Codes::new();
        out.push(escr);
        out.push(cccr);
        out
    }
}

/// SPARC Niagara I/II encoder, grounded directly on the PMU record shape
/// in `pfmlib_sparc_niagara.c` (`max_encoding = 2`): word 0 carries the
/// control-register event select, word 1 the counter-select/mask field.
/// Backs `niagara1`.
pub struct SparcNiagaraEncoder;

impl PmuEncoder for SparcNiagaraEncoder {
    fn encode(&self, ev: &EncodedEvent) -> Codes {
        let (event_sel, _) = base_fragments(ev);
        let mut word0 = event_sel;
        word0 |= umask_sum(ev) << 6;

        let mut out = Codes::new();
        out.push(word0);
        out.push(0);
        out
    }
}
