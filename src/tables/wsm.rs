//! Intel Westmere PMU. Carries the two-word `OFFCORE_RESPONSE_0` family
//! (request mask in `grpid` 0, response mask in `grpid` 1, both routed
//! into a second machine word instead of the first word's umask field)
//! and a raw-numeric-umask event used to pin down the open question
//! between a malformed literal (`ATTR_VAL`) and an out-of-range one
//! (`ATTR`).

use lazy_static::lazy_static;

use crate::encoder::X86CoreEncoder;
use crate::schema::*;

lazy_static! {
    static ref OFFCORE_RESPONSE_0_UMASKS: Vec<UmaskDesc> = vec![
        UmaskDesc { name: "DMND_DATA_RD", value: 0x0002, grpid: 0, default: false, exclusive: false, desc: "demand data read requests" },
        UmaskDesc { name: "DMND_RFO", value: 0x0001, grpid: 0, default: false, exclusive: false, desc: "demand read-for-ownership requests" },
        UmaskDesc { name: "LOCAL_DRAM", value: 0x2000, grpid: 1, default: false, exclusive: false, desc: "response supplied by local DRAM" },
        UmaskDesc { name: "REMOTE_DRAM", value: 0x4000, grpid: 1, default: false, exclusive: false, desc: "response supplied by remote DRAM" },
    ];

    static ref EVENTS: Vec<EventDesc> = vec![
        EventDesc {
            name: "OFFCORE_RESPONSE_0",
            alias: None,
            code: EventCode::Two(0xb7, 0x01),
            umasks: OFFCORE_RESPONSE_0_UMASKS.as_slice(),
            flags: EventFlags::OFFCORE,
            raw_umask_width: 0,
            desc: "offcore response, counter 0",
        },
        EventDesc {
            name: "UOPS_ISSUED",
            alias: None,
            code: EventCode::One(0x0e),
            umasks: &[],
            flags: EventFlags::ALLOW_RAW_UMASK,
            raw_umask_width: 8,
            desc: "micro-ops issued",
        },
    ];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "k", kind: ModifierKind::Bool, bit: 17, width: 1, default: 1, privilege_pair: true, desc: "count in ring 0" },
        ModifierDesc { name: "u", kind: ModifierKind::Bool, bit: 16, width: 1, default: 1, privilege_pair: true, desc: "count in ring 3" },
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
        ModifierDesc { name: "i", kind: ModifierKind::Bool, bit: 23, width: 1, default: 0, privilege_pair: false, desc: "invert counter mask comparison" },
        ModifierDesc { name: "c", kind: ModifierKind::Int { max: 255 }, bit: 24, width: 8, default: 0, privilege_pair: false, desc: "counter mask" },
        ModifierDesc { name: "t", kind: ModifierKind::Bool, bit: 21, width: 1, default: 0, privilege_pair: false, desc: "any thread" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(3),
        name: "wsm",
        desc: "Intel Westmere",
        max_encoding: 2,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE,
        encoder: &X86CoreEncoder,
    };
}
