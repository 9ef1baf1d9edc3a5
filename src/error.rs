//! The stable error taxonomy returned by every public entry point.
//!
//! Variants map one-to-one onto the coarse-grained failure kinds of the
//! original C ABI this crate's interface is modeled on; success has no
//! variant here because it is represented by `Ok(_)` in the Rust surface.

use thiserror::Error;

/// Coarse-grained failure kind. Never constructed for recoverable internal
/// state; a failure always means "no partial state was produced".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PfmError {
    /// PMU or event name did not match anything in the active registry.
    #[error("event or pmu not found")]
    NotFound,

    /// An attribute token could not be classified as a modifier, a named
    /// umask, or an in-range raw umask.
    #[error("unknown attribute")]
    Attr,

    /// An attribute was recognized but its value was malformed or
    /// out-of-range for its field width.
    #[error("invalid attribute value")]
    AttrVal,

    /// The same modifier was set twice with two different values.
    #[error("attribute set twice with conflicting values")]
    AttrSet,

    /// Two umasks could not legally combine (same-group conflict, or an
    /// exclusive umask combined with anything else).
    #[error("illegal combination of umasks")]
    FeatComb,

    /// Allocation failed. Never actually constructed on a safe Rust path
    /// (allocation failure aborts the process) but kept for ABI/string
    /// parity with the original error taxonomy.
    #[error("out of memory")]
    NoMem,

    /// A caller-supplied argument was structurally invalid (e.g. an empty
    /// event string).
    #[error("invalid argument")]
    Inval,

    /// The registry has not been initialized yet.
    #[error("library not initialized")]
    NoInit,
}

impl PfmError {
    /// Textual form of an error kind, mirroring the C `pfm_strerror` entry
    /// point.
    pub fn strerror(&self) -> &'static str {
        match self {
            PfmError::NotFound => "event or pmu not found",
            PfmError::Attr => "unknown attribute",
            PfmError::AttrVal => "invalid attribute value",
            PfmError::AttrSet => "attribute set twice with conflicting values",
            PfmError::FeatComb => "illegal combination of umasks",
            PfmError::NoMem => "out of memory",
            PfmError::Inval => "invalid argument",
            PfmError::NoInit => "library not initialized",
        }
    }
}

pub type Result<T> = std::result::Result<T, PfmError>;
