//! Intel Core 2 Duo/Quad PMU. Small hand-picked event set: enough to
//! exercise the PERFEVTSEL encoder, its `grpid`/`EXCL` combinability
//! rules, and the edge-without-cmask policy Core 2 relaxes.

use lazy_static::lazy_static;

use crate::encoder::X86CoreEncoder;
use crate::schema::*;

lazy_static! {
    static ref INST_RETIRED_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "ANY_P",
        value: 0x00,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "all instructions retired",
    }];

    static ref L2_LINES_IN_UMASKS: Vec<UmaskDesc> = vec![
        UmaskDesc {
            name: "SELF",
            value: 0x01,
            grpid: 0,
            default: false,
            exclusive: false,
            desc: "lines brought in by this core",
        },
        UmaskDesc {
            name: "BOTH_CORES",
            value: 0x02,
            grpid: 0,
            default: false,
            exclusive: true,
            desc: "lines brought in by either core",
        },
        UmaskDesc {
            name: "ANY",
            value: 0x00,
            grpid: 1,
            default: true,
            exclusive: false,
            desc: "any way, any state",
        },
    ];

    static ref RAT_STALLS_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "ANY",
        value: 0x0f,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "any stall condition",
    }];

    static ref EVENTS: Vec<EventDesc> = vec![
        EventDesc {
            name: "INST_RETIRED",
            alias: Some("instructions_retired"),
            code: EventCode::One(0xc0),
            umasks: INST_RETIRED_UMASKS.as_slice(),
            flags: EventFlags::empty(),
            raw_umask_width: 0,
            desc: "instructions retired",
        },
        EventDesc {
            name: "L2_LINES_IN",
            alias: None,
            code: EventCode::One(0x26),
            umasks: L2_LINES_IN_UMASKS.as_slice(),
            flags: EventFlags::empty(),
            raw_umask_width: 0,
            desc: "L2 cache lines allocated",
        },
        EventDesc {
            name: "RAT_STALLS",
            alias: None,
            code: EventCode::One(0xd2),
            umasks: RAT_STALLS_UMASKS.as_slice(),
            flags: EventFlags::empty(),
            raw_umask_width: 0,
            desc: "resource allocation table stall cycles",
        },
    ];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "k", kind: ModifierKind::Bool, bit: 17, width: 1, default: 1, privilege_pair: true, desc: "count in ring 0" },
        ModifierDesc { name: "u", kind: ModifierKind::Bool, bit: 16, width: 1, default: 1, privilege_pair: true, desc: "count in ring 3" },
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
        ModifierDesc { name: "i", kind: ModifierKind::Bool, bit: 23, width: 1, default: 0, privilege_pair: false, desc: "invert counter mask comparison" },
        ModifierDesc { name: "c", kind: ModifierKind::Int { max: 255 }, bit: 24, width: 8, default: 0, privilege_pair: false, desc: "counter mask" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(0),
        name: "core",
        desc: "Intel Core 2 Duo/Quad",
        max_encoding: 1,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE | PmuFlags::EDGE_WITHOUT_CMASK_OK,
        encoder: &X86CoreEncoder,
    };
}
