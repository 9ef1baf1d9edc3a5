//! Matches tokens against a PMU's schema, classifies each as umask or
//! modifier, enforces combinability, and materializes the intermediate
//! encoded-event record the encoder and formatter both consume.

use std::collections::{HashMap, HashSet};

use crate::error::{PfmError, Result};
use crate::registry::Registry;
use crate::schema::{EventDesc, EventFlags, ModifierKind, PmuDesc, PmuFlags, UmaskDesc};
use crate::tokenizer::{self, AttrToken};

bitflags! {
    /// Privilege-level hint: biases `k`/`u`/`h`/`g` defaults when the
    /// user does not specify them explicitly.
    pub struct PrivilegeMask: u32 {
        const PLM0 = 1 << 0;
        const PLM1 = 1 << 1;
        const PLM2 = 1 << 2;
        const PLM3 = 1 << 3;
    }
}

/// The resolver's intermediate record. Stack-scoped: built here, consumed
/// immediately by [`crate::encoder`] and/or [`crate::formatter`], then
/// dropped.
#[derive(Debug)]
pub struct EncodedEvent {
    pub pmu: &'static PmuDesc,
    pub event: &'static EventDesc,
    /// Selected umasks tagged with their schema index, so the formatter
    /// can print them in declaration order regardless of the order the
    /// user wrote (or the resolver inserted) them (spec.md §4.4).
    pub umasks: Vec<(usize, &'static UmaskDesc)>,
    pub raw_umask: Option<u64>,
    /// One resolved value per `pmu.modifiers` entry, same order.
    pub modifiers: Vec<(&'static str, u64)>,
    /// Modifier names the user actually wrote.
    pub specified: HashSet<&'static str>,
}

impl EncodedEvent {
    pub fn modifier_value(&self, name: &str) -> u64 {
        self.modifiers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    pub fn modifier_bool(&self, name: &str) -> bool {
        self.modifier_value(name) != 0
    }
}

struct ModifierState {
    value: u64,
    user_specified: bool,
}

pub fn resolve(registry: &'static Registry, name: &str, privilege_mask: PrivilegeMask) -> Result<EncodedEvent> {
    let parsed = tokenizer::tokenize(name)?;

    let (pmu, event) = select_pmu_and_event(registry, &parsed.pmu, &parsed.event)?;

    let mut modifier_state: HashMap<&'static str, ModifierState> = HashMap::new();
    let mut grpid_selected: HashMap<u32, Vec<(usize, &'static UmaskDesc)>> = HashMap::new();
    let mut grpid_has_exclusive: HashMap<u32, bool> = HashMap::new();
    let mut raw_umask: Option<u64> = None;

    for attr in &parsed.attrs {
        classify_attr(
            pmu,
            event,
            attr,
            &mut modifier_state,
            &mut grpid_selected,
            &mut grpid_has_exclusive,
            &mut raw_umask,
        )?;
    }

    // Phase C: default injection for untouched groups, in schema order.
    let mut seen_grpids: Vec<u32> = Vec::new();
    for u in event.umasks {
        if !seen_grpids.contains(&u.grpid) {
            seen_grpids.push(u.grpid);
        }
    }
    for grpid in seen_grpids {
        if !grpid_selected.contains_key(&grpid) {
            if let Some((idx, def)) = event
                .umasks
                .iter()
                .enumerate()
                .find(|(_, u)| u.grpid == grpid && u.default)
            {
                grpid_selected.entry(grpid).or_default().push((idx, def));
            }
        }
    }

    let mut umasks: Vec<(usize, &'static UmaskDesc)> = grpid_selected.into_values().flatten().collect();
    umasks.sort_by_key(|(idx, _)| *idx);

    let specified: HashSet<&'static str> = modifier_state
        .iter()
        .filter(|(_, s)| s.user_specified)
        .map(|(n, _)| *n)
        .collect();

    apply_privilege_pair(pmu, &mut modifier_state, privilege_mask);

    let mut modifiers = Vec::with_capacity(pmu.modifiers.len());
    for m in pmu.modifiers {
        let value = modifier_state
            .get(m.name)
            .map(|s| s.value)
            .unwrap_or(m.default);
        modifiers.push((m.name, value));
    }

    check_edge_without_cmask(pmu, &modifiers)?;

    Ok(EncodedEvent {
        pmu,
        event,
        umasks,
        raw_umask,
        modifiers,
        specified,
    })
}

fn select_pmu_and_event(
    registry: &'static Registry,
    pmu_name: &Option<String>,
    event_name: &str,
) -> Result<(&'static PmuDesc, &'static EventDesc)> {
    match pmu_name {
        Some(p) => {
            let pmu = registry.find_active_by_name(p).ok_or(PfmError::NotFound)?;
            let event = pmu.find_event(event_name).ok_or(PfmError::NotFound)?;
            Ok((pmu, event))
        }
        None => {
            for pmu in registry.active() {
                if let Some(event) = pmu.find_event(event_name) {
                    return Ok((*pmu, event));
                }
            }
            Err(PfmError::NotFound)
        }
    }
}

fn set_modifier(
    state: &mut HashMap<&'static str, ModifierState>,
    modifier: &'static crate::schema::ModifierDesc,
    value: u64,
) -> Result<()> {
    match modifier.kind {
        ModifierKind::Bool => {
            if value > 1 {
                return Err(PfmError::AttrVal);
            }
        }
        ModifierKind::Int { max } => {
            if value > max {
                return Err(PfmError::AttrVal);
            }
        }
    }

    match state.get(modifier.name) {
        Some(existing) if existing.user_specified && existing.value != value => {
            return Err(PfmError::AttrSet);
        }
        _ => {}
    }

    state.insert(
        modifier.name,
        ModifierState {
            value,
            user_specified: true,
        },
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn classify_attr(
    pmu: &'static PmuDesc,
    event: &'static EventDesc,
    attr: &AttrToken,
    modifier_state: &mut HashMap<&'static str, ModifierState>,
    grpid_selected: &mut HashMap<u32, Vec<(usize, &'static UmaskDesc)>>,
    grpid_has_exclusive: &mut HashMap<u32, bool>,
    raw_umask: &mut Option<u64>,
) -> Result<()> {
    match &attr.value {
        Some(value_str) => {
            let modifier = pmu.find_modifier(&attr.name).ok_or(PfmError::Attr)?;
            let value = tokenizer::parse_intlit(value_str)?;
            set_modifier(modifier_state, modifier, value)
        }
        None => {
            if let Some(modifier) = pmu.find_modifier(&attr.name) {
                return set_modifier(modifier_state, modifier, 1);
            }
            if let Some((idx, umask)) = event.find_umask(&attr.name) {
                return add_umask(grpid_selected, grpid_has_exclusive, idx, umask);
            }
            if (attr.name.starts_with("0x") || attr.name.starts_with("0X"))
                && event.flags.contains(EventFlags::ALLOW_RAW_UMASK)
            {
                let value = tokenizer::parse_intlit(&attr.name).map_err(|_| PfmError::Attr)?;
                let max = if event.raw_umask_width >= 64 {
                    u64::MAX
                } else {
                    (1u64 << event.raw_umask_width) - 1
                };
                if value > max {
                    return Err(PfmError::Attr);
                }
                *raw_umask = Some(raw_umask.unwrap_or(0) | value);
                return Ok(());
            }
            Err(PfmError::Attr)
        }
    }
}

fn add_umask(
    grpid_selected: &mut HashMap<u32, Vec<(usize, &'static UmaskDesc)>>,
    grpid_has_exclusive: &mut HashMap<u32, bool>,
    idx: usize,
    umask: &'static UmaskDesc,
) -> Result<()> {
    let existing = grpid_selected.entry(umask.grpid).or_default();
    let group_has_exclusive = *grpid_has_exclusive.get(&umask.grpid).unwrap_or(&false);
    if !existing.is_empty() && (umask.exclusive || group_has_exclusive) {
        return Err(PfmError::FeatComb);
    }
    if umask.exclusive {
        grpid_has_exclusive.insert(umask.grpid, true);
    }
    if existing.iter().any(|(i, _)| *i == idx) {
        return Ok(());
    }
    existing.push((idx, umask));
    Ok(())
}

fn apply_privilege_pair(
    pmu: &'static PmuDesc,
    state: &mut HashMap<&'static str, ModifierState>,
    privilege_mask: PrivilegeMask,
) {
    let has_k = pmu.find_modifier("k").is_some();
    let has_u = pmu.find_modifier("u").is_some();
    if !has_k && !has_u {
        return;
    }

    let k_specified = state.get("k").map_or(false, |s| s.user_specified);
    let u_specified = state.get("u").map_or(false, |s| s.user_specified);

    if !k_specified && !u_specified {
        if has_k {
            let v = privilege_mask.contains(PrivilegeMask::PLM0) as u64;
            state.insert("k", ModifierState { value: v, user_specified: false });
        }
        if has_u {
            let v = privilege_mask.contains(PrivilegeMask::PLM3) as u64;
            state.insert("u", ModifierState { value: v, user_specified: false });
        }
    } else if k_specified && !u_specified && has_u {
        state.insert("u", ModifierState { value: 0, user_specified: false });
    } else if u_specified && !k_specified && has_k {
        state.insert("k", ModifierState { value: 0, user_specified: false });
    }
}

fn check_edge_without_cmask(pmu: &'static PmuDesc, modifiers: &[(&'static str, u64)]) -> Result<()> {
    let e = modifiers.iter().find(|(n, _)| *n == "e").map(|(_, v)| *v);
    let c = modifiers.iter().find(|(n, _)| *n == "c").map(|(_, v)| *v);
    if let (Some(e), Some(c)) = (e, c) {
        if e != 0 && c == 0 && !pmu.flags.contains(PmuFlags::EDGE_WITHOUT_CMASK_OK) {
            return Err(PfmError::Attr);
        }
    }
    Ok(())
}
