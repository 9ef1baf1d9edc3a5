//! The set of PMUs this build knows about, and which ones are "active"
//! for the current resolution -- the pool [`crate::resolver::resolve`]
//! searches when no explicit `pmu::` prefix narrows the lookup.
//!
//! A real deployment would only activate PMUs matching the host CPU;
//! this crate has no CPUID/cpuinfo probing layer of its own; a
//! [`CpuProbe`] is the seam where one would plug in. Absent an override,
//! every table this crate ships is active, which lets the test suite
//! exercise core, uncore, Netburst and SPARC tables side by side.

use std::env;

use lazy_static::lazy_static;

use crate::schema::PmuDesc;
use crate::tables;
use crate::validate;

/// Decides whether a compiled-in PMU table applies to the running host.
/// The default probe activates everything; supply a different one (or
/// set `PFM_FORCE_PMU`) to narrow the active set.
pub trait CpuProbe: Sync {
    fn is_active(&self, pmu: &PmuDesc) -> bool;
}

struct AlwaysActive;
impl CpuProbe for AlwaysActive {
    fn is_active(&self, _pmu: &PmuDesc) -> bool {
        true
    }
}

struct ForcedPmu(Vec<String>);
impl CpuProbe for ForcedPmu {
    fn is_active(&self, pmu: &PmuDesc) -> bool {
        self.0.iter().any(|n| n.eq_ignore_ascii_case(pmu.name))
    }
}

pub struct Registry {
    all: Vec<&'static PmuDesc>,
    active: Vec<&'static PmuDesc>,
}

impl Registry {
    fn build() -> Registry {
        let all = tables::all_pmus();

        let mut rejected = Vec::new();
        let valid: Vec<&'static PmuDesc> = all
            .into_iter()
            .filter(|pmu| {
                let errors = validate::validate_pmu(pmu);
                if errors.is_empty() {
                    true
                } else {
                    rejected.push(pmu.name);
                    false
                }
            })
            .collect();
        for name in rejected {
            log::warn!("pmu {} excluded from registry: failed table validation", name);
        }

        let probe: Box<dyn CpuProbe> = match env::var("PFM_FORCE_PMU") {
            Ok(val) if !val.is_empty() => {
                let names = val.split(',').map(|s| s.trim().to_string()).collect();
                Box::new(ForcedPmu(names))
            }
            _ => Box::new(AlwaysActive),
        };

        let active = valid.iter().copied().filter(|pmu| probe.is_active(pmu)).collect();

        Registry { all: valid, active }
    }

    pub fn global() -> &'static Registry {
        lazy_static! {
            static ref REGISTRY: Registry = Registry::build();
        }
        &REGISTRY
    }

    /// Every PMU that passed table validation, active or not.
    pub fn all(&self) -> &[&'static PmuDesc] {
        &self.all
    }

    pub fn active(&self) -> &[&'static PmuDesc] {
        &self.active
    }

    pub fn find_active_by_name(&self, name: &str) -> Option<&'static PmuDesc> {
        self.active.iter().copied().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
