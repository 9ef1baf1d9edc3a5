//! Event-name resolution and encoding core for a performance-monitoring
//! support library.
//!
//! Translates a human-written performance counter specification --
//! `wsm::OFFCORE_RESPONSE_0:DMND_RFO:LOCAL_DRAM:k=1:u=0:c=2` -- into the
//! 64-bit machine codes a host kernel interface expects, and performs
//! the reverse projection back to a canonical string. This crate does
//! not open counters, read samples, or talk to the OS; it stops at
//! producing the bag of bits a caller passes through to one.

#[macro_use]
extern crate bitflags;

pub mod encoder;
pub mod error;
pub mod formatter;
pub mod iter;
pub mod registry;
pub mod resolver;
pub mod schema;
mod tables;
pub mod tokenizer;
pub mod validate;

pub use encoder::Codes;
pub use error::{PfmError, Result};
pub use registry::Registry;
pub use resolver::{EncodedEvent, PrivilegeMask};
pub use schema::{EventDesc, PmuDesc, PmuId, UmaskDesc};

/// One-shot library initialization: forces the registry's `lazy_static`
/// barrier to run. Idempotent and safe to call from multiple threads
/// racing to initialize; all observe the fully-built registry before any
/// call returns.
pub fn initialize() -> Result<()> {
    let _ = Registry::global();
    Ok(())
}

/// The principal entry point: resolves `name` against the active
/// registry, encodes it, and formats its canonical string. `name` may
/// carry a `pmu::` prefix; `privilege_mask` biases `k`/`u` defaults when
/// the user does not specify them.
pub fn get_event_encoding(name: &str, privilege_mask: PrivilegeMask) -> Result<(Codes, String)> {
    let registry = Registry::global();
    let resolved = resolver::resolve(registry, name, privilege_mask)?;
    let codes = resolved.pmu.encoder.encode(&resolved);
    let fstr = formatter::format_canonical(&resolved);
    Ok((codes, fstr))
}

/// Resolves `name` without encoding it, for callers that only need the
/// canonical string or the attribute breakdown (e.g. a listing tool).
pub fn get_event_info(name: &str, privilege_mask: PrivilegeMask) -> Result<EncodedEvent> {
    resolver::resolve(Registry::global(), name, privilege_mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inst_retired_any_p() {
        let (codes, _) = get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::all()).unwrap();
        assert_eq!(codes, vec![0x5300c0]);
    }

    #[test]
    fn repeated_bareword_modifier_is_idempotent() {
        let (codes, _) =
            get_event_encoding("core::INST_RETIRED:ANY_P:u:u", PrivilegeMask::all()).unwrap();
        assert_eq!(codes, vec![0x5100c0]);
    }

    #[test]
    fn conflicting_modifier_resets_are_rejected() {
        let err = get_event_encoding("core::INST_RETIRED:ANY_P:u=0:k=1:u=1", PrivilegeMask::all())
            .unwrap_err();
        assert_eq!(err, PfmError::AttrSet);
    }

    #[test]
    fn out_of_range_cmask_is_attr_val() {
        let err =
            get_event_encoding("core::INST_RETIRED:ANY_P:c=320", PrivilegeMask::all()).unwrap_err();
        assert_eq!(err, PfmError::AttrVal);
    }

    #[test]
    fn exclusive_umask_combination_is_featcomb() {
        let err = get_event_encoding("core::L2_LINES_IN:SELF:BOTH_CORES", PrivilegeMask::all())
            .unwrap_err();
        assert_eq!(err, PfmError::FeatComb);
    }

    #[test]
    fn edge_without_cmask_rejected_on_nehalem() {
        let err = get_event_encoding("nhm::INST_RETIRED:ANY_P:e", PrivilegeMask::all()).unwrap_err();
        assert_eq!(err, PfmError::Attr);
    }

    #[test]
    fn edge_without_cmask_accepted_on_atom() {
        let (codes, _) = get_event_encoding("atom::INST_RETIRED:ANY_P:e", PrivilegeMask::all()).unwrap();
        assert_eq!(codes, vec![0x5700c0]);
    }

    #[test]
    fn offcore_response_two_word_encoding() {
        let (codes, _) = get_event_encoding(
            "wsm::offcore_response_0:DMND_RFO:DMND_DATA_RD:LOCAL_DRAM:REMOTE_DRAM",
            PrivilegeMask::all(),
        )
        .unwrap();
        assert_eq!(codes, vec![0x5301b7, 0x6003]);
    }

    #[test]
    fn comma_cuts_the_string() {
        let (codes, _) =
            get_event_encoding("core::RAT_STALLS:ANY:u:c=1,cycles", PrivilegeMask::all()).unwrap();
        assert_eq!(codes, vec![0x01510fd2]);
    }

    #[test]
    fn out_of_range_threshold_is_attr_val() {
        let err = get_event_encoding(
            "netburst::global_power_events:RUNNING:cmpl:thr=32:u",
            PrivilegeMask::all(),
        )
        .unwrap_err();
        assert_eq!(err, PfmError::AttrVal);
    }

    #[test]
    fn l2_lines_in_formats_with_defaults_spelled_out() {
        let resolved = get_event_info("core::L2_LINES_IN:SELF", PrivilegeMask::all()).unwrap();
        let fstr = formatter::format_canonical(&resolved);
        assert_eq!(fstr, "core::L2_LINES_IN:SELF:ANY:k=1:u=1:e=0:i=0:c=0");
    }
}
