//! Sanity-checks a PMU's static tables at registration time: duplicate
//! names, more than one default per umask group, code fragments that
//! overflow `max_encoding`, and overlapping modifier bit ranges. A
//! malformed PMU is logged and excluded rather than allowed to panic the
//! process on first lookup.

use std::collections::HashMap;

use crate::schema::{EventCode, PmuDesc};

#[derive(Debug)]
pub struct ValidationError {
    pub pmu: &'static str,
    pub reason: String,
}

pub fn validate_pmu(pmu: &'static PmuDesc) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen_events: HashMap<&str, usize> = HashMap::new();
    for event in pmu.events {
        *seen_events.entry(event.name).or_insert(0) += 1;

        let width = match event.code {
            EventCode::One(_) => 1,
            EventCode::Two(_, _) => 2,
        };
        if width > pmu.max_encoding {
            errors.push(ValidationError {
                pmu: pmu.name,
                reason: format!(
                    "event {} needs {} code words but pmu declares max_encoding={}",
                    event.name, width, pmu.max_encoding
                ),
            });
        }

        let mut seen_umasks: HashMap<&str, usize> = HashMap::new();
        let mut group_defaults: HashMap<u32, usize> = HashMap::new();
        for umask in event.umasks {
            *seen_umasks.entry(umask.name).or_insert(0) += 1;
            if umask.default {
                *group_defaults.entry(umask.grpid).or_insert(0) += 1;
            }
        }
        for (name, count) in &seen_umasks {
            if *count > 1 {
                errors.push(ValidationError {
                    pmu: pmu.name,
                    reason: format!("event {} declares umask {} more than once", event.name, name),
                });
            }
        }
        for (grpid, count) in &group_defaults {
            if *count > 1 {
                errors.push(ValidationError {
                    pmu: pmu.name,
                    reason: format!(
                        "event {} grpid {} declares {} defaults, want at most one",
                        event.name, grpid, count
                    ),
                });
            }
        }
    }
    for (name, count) in &seen_events {
        if *count > 1 {
            errors.push(ValidationError {
                pmu: pmu.name,
                reason: format!("duplicate event name {}", name),
            });
        }
    }

    let mut seen_modifiers: HashMap<&str, usize> = HashMap::new();
    for modifier in pmu.modifiers {
        *seen_modifiers.entry(modifier.name).or_insert(0) += 1;
    }
    for (name, count) in &seen_modifiers {
        if *count > 1 {
            errors.push(ValidationError {
                pmu: pmu.name,
                reason: format!("duplicate modifier name {}", name),
            });
        }
    }
    for i in 0..pmu.modifiers.len() {
        for j in (i + 1)..pmu.modifiers.len() {
            let a = &pmu.modifiers[i];
            let b = &pmu.modifiers[j];
            let a_end = a.bit + a.width;
            let b_end = b.bit + b.width;
            if a.bit < b_end && b.bit < a_end {
                errors.push(ValidationError {
                    pmu: pmu.name,
                    reason: format!(
                        "modifiers {} and {} overlap at bit range [{},{}) / [{},{})",
                        a.name, b.name, a.bit, a_end, b.bit, b_end
                    ),
                });
            }
        }
    }

    for error in &errors {
        log::warn!("pmu {} rejected: {}", error.pmu, error.reason);
    }

    errors
}
