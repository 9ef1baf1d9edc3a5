//! Static per-PMU tables. Each submodule owns one PMU's event/umask/
//! modifier schema, constructed through `lazy_static!` so `bitflags`
//! combinations (non-`const fn` in this crate's bitflags version) and
//! `Vec`-backed slices can be built as ordinary runtime code instead of
//! const-evaluated literals, while still handing back `&'static` data to
//! the registry.

mod amd64_k8;
mod atom;
mod core;
mod netburst;
mod nhm;
mod niagara;
mod wsm;
mod wsm_unc;

use crate::schema::PmuDesc;

/// Every PMU this build ships, in registration order. The table
/// validator and the registry's active-set computation both run over
/// this list once, at first access.
pub fn all_pmus() -> Vec<&'static PmuDesc> {
    vec![
        &*core::PMU,
        &*atom::PMU,
        &*nhm::PMU,
        &*wsm::PMU,
        &*wsm_unc::PMU,
        &*netburst::PMU,
        &*amd64_k8::PMU,
        &*niagara::PMU,
    ]
}
