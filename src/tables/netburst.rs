//! Pentium 4 (Netburst) PMU: two-word ESCR/CCCR encoding. Event select
//! and umask live in the ESCR word; enable, complement, threshold and
//! edge live in the CCCR word.

use lazy_static::lazy_static;

use crate::encoder::NetburstEncoder;
use crate::schema::*;

lazy_static! {
    static ref GLOBAL_POWER_EVENTS_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "RUNNING",
        value: 0x01,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "processor is not stopped",
    }];

    static ref EVENTS: Vec<EventDesc> = vec![EventDesc {
        name: "GLOBAL_POWER_EVENTS",
        alias: None,
        code: EventCode::One(0x13),
        umasks: GLOBAL_POWER_EVENTS_UMASKS.as_slice(),
        flags: EventFlags::empty(),
        raw_umask_width: 0,
        desc: "time during which the processor is not stopped",
    }];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "k", kind: ModifierKind::Bool, bit: 1, width: 1, default: 1, privilege_pair: true, desc: "count in ring 0" },
        ModifierDesc { name: "u", kind: ModifierKind::Bool, bit: 2, width: 1, default: 1, privilege_pair: true, desc: "count in ring 3" },
        ModifierDesc { name: "cmpl", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "complement the threshold comparison" },
        ModifierDesc { name: "thr", kind: ModifierKind::Int { max: 15 }, bit: 20, width: 4, default: 0, privilege_pair: false, desc: "event count threshold" },
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 24, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(5),
        name: "netburst",
        desc: "Intel Pentium 4 / Netburst",
        max_encoding: 2,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE,
        encoder: &NetburstEncoder,
    };
}
