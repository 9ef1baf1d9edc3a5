//! Integration coverage for the invariants in spec.md §8 that don't fit
//! naturally as unit tests inside `lib.rs`: purity, round-tripping
//! through the formatter, default injection, and the table validator's
//! guarantees over every shipped PMU.

use pfm_core::{get_event_encoding, get_event_info, PrivilegeMask, Registry};

#[test]
fn encoding_is_pure() {
    let a = get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::all()).unwrap();
    let b = get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::all()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn code_count_never_exceeds_max_encoding() {
    let resolved = get_event_info("wsm::offcore_response_0:DMND_RFO:LOCAL_DRAM", PrivilegeMask::all()).unwrap();
    let codes = resolved.pmu.encoder.encode(&resolved);
    assert!(!codes.is_empty());
    assert!(codes.len() <= resolved.pmu.max_encoding);
}

#[test]
fn formatter_roundtrips_through_resolver() {
    let (_, fstr) = get_event_encoding("core::L2_LINES_IN:SELF", PrivilegeMask::all()).unwrap();
    assert_eq!(fstr, "core::L2_LINES_IN:SELF:ANY:k=1:u=1:e=0:i=0:c=0");

    let (codes_from_original, _) = get_event_encoding("core::L2_LINES_IN:SELF", PrivilegeMask::all()).unwrap();
    let (codes_from_fstr, fstr_again) = get_event_encoding(&fstr, PrivilegeMask::all()).unwrap();
    assert_eq!(codes_from_original, codes_from_fstr);
    assert_eq!(fstr, fstr_again);
}

#[test]
fn default_injection_matches_explicit_default() {
    let implicit = get_event_encoding("core::INST_RETIRED", PrivilegeMask::all()).unwrap();
    let explicit = get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::all()).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn disjoint_groups_or_together() {
    let (codes, _) = get_event_encoding(
        "wsm::offcore_response_0:DMND_RFO:LOCAL_DRAM",
        PrivilegeMask::all(),
    )
    .unwrap();
    // request (grpid 0) = 0x0001, response (grpid 1) = 0x2000; disjoint
    // groups OR together in code[1].
    assert_eq!(codes[1], 0x0001 | 0x2000);
}

#[test]
fn privilege_mask_biases_ku_defaults_when_unspecified() {
    let (codes_kernel_only, _) =
        get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::PLM0).unwrap();
    let (codes_user_only, _) =
        get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::PLM3).unwrap();
    assert_ne!(codes_kernel_only, codes_user_only);

    let (codes_both, _) = get_event_encoding(
        "core::INST_RETIRED:ANY_P",
        PrivilegeMask::PLM0 | PrivilegeMask::PLM3,
    )
    .unwrap();
    assert_eq!(codes_both, vec![0x5300c0]);
}

#[test]
fn explicit_k_zeroes_unspecified_u() {
    let (codes, _) = get_event_encoding("core::INST_RETIRED:ANY_P:k=1", PrivilegeMask::all()).unwrap();
    // k=1 explicit, u unspecified -> u defaults to 0, not its usual 1.
    assert_eq!(codes, vec![0x5200c0]);
}

#[test]
fn every_registered_pmu_passes_table_validation() {
    let registry = Registry::global();
    // Every PMU that fails `validate::validate_pmu` is excluded from
    // `all()`, so a non-empty `all()` here is itself evidence the
    // shipped tables have no duplicate names, no double defaults, and
    // no overlapping modifier bit ranges (spec.md §8 invariant 7).
    assert!(!registry.all().is_empty());
    assert_eq!(registry.all().len(), registry.active().len());
}

#[test]
fn unknown_pmu_prefix_is_notfound() {
    let err = get_event_encoding("bogus::SOMETHING", PrivilegeMask::all()).unwrap_err();
    assert_eq!(err, pfm_core::PfmError::NotFound);
}

#[test]
fn unknown_event_name_is_notfound() {
    let err = get_event_encoding("core::NOT_A_REAL_EVENT", PrivilegeMask::all()).unwrap_err();
    assert_eq!(err, pfm_core::PfmError::NotFound);
}

#[test]
fn alias_resolves_to_model_specific_event() {
    let (codes_by_alias, _) =
        get_event_encoding("core::instructions_retired:ANY_P", PrivilegeMask::all()).unwrap();
    let (codes_by_name, _) =
        get_event_encoding("core::INST_RETIRED:ANY_P", PrivilegeMask::all()).unwrap();
    assert_eq!(codes_by_alias, codes_by_name);
}

#[test]
fn malformed_raw_umask_value_is_attr_val() {
    let err = get_event_encoding("wsm::uops_issued:0xff=", PrivilegeMask::all()).unwrap_err();
    assert_eq!(err, pfm_core::PfmError::AttrVal);
}

#[test]
fn out_of_range_raw_umask_is_attr() {
    let err = get_event_encoding("wsm::uops_issued:0xfff", PrivilegeMask::all()).unwrap_err();
    assert_eq!(err, pfm_core::PfmError::Attr);
}

#[test]
fn in_range_raw_umask_is_accepted() {
    let (codes, _) = get_event_encoding("wsm::uops_issued:0x0f", PrivilegeMask::all()).unwrap();
    assert_eq!(codes.len(), 1);
}

#[test]
fn nehalem_any_thread_modifier_sets_any_bit() {
    let (codes, fstr) =
        get_event_encoding("nhm::INST_RETIRED:ANY_P:t=1", PrivilegeMask::all()).unwrap();
    assert_eq!(codes, vec![0x7300c0]);
    assert!(fstr.ends_with(":t=1"));
}

#[test]
fn westmere_formats_any_thread_default() {
    let (_, fstr) = get_event_encoding("wsm::offcore_response_0:DMND_RFO", PrivilegeMask::all()).unwrap();
    assert!(fstr.ends_with(":t=0"));
}
