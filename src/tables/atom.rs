//! Intel Atom PMU. Shares `core`'s PERFEVTSEL shape; relaxes the
//! edge-without-cmask policy the same way Core 2 does.

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

    static ref EVENTS: Vec<EventDesc> = vec![EventDesc {
        name: "INST_RETIRED",
        alias: Some("instructions_retired"),
        code: EventCode::One(0xc0),
        umasks: INST_RETIRED_UMASKS.as_slice(),
        flags: EventFlags::empty(),
        raw_umask_width: 0,
        desc: "instructions retired",
    }];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "k", kind: ModifierKind::Bool, bit: 17, width: 1, default: 1, privilege_pair: true, desc: "count in ring 0" },
        ModifierDesc { name: "u", kind: ModifierKind::Bool, bit: 16, width: 1, default: 1, privilege_pair: true, desc: "count in ring 3" },
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
        ModifierDesc { name: "i", kind: ModifierKind::Bool, bit: 23, width: 1, default: 0, privilege_pair: false, desc: "invert counter mask comparison" },
        ModifierDesc { name: "c", kind: ModifierKind::Int { max: 255 }, bit: 24, width: 8, default: 0, privilege_pair: false, desc: "counter mask" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(1),
        name: "atom",
        desc: "Intel Atom",
        max_encoding: 1,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE | PmuFlags::EDGE_WITHOUT_CMASK_OK,
        encoder: &X86CoreEncoder,
    };
}
