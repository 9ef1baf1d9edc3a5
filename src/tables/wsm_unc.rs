//! Westmere uncore PMU: no privilege levels, no any-thread bit, but an
//! `o` (opcode filter) modifier occupying the word's upper bits.

use lazy_static::lazy_static;

use crate::encoder::X86UncoreEncoder;
use crate::schema::*;

lazy_static! {
    static ref UNC_QMC_NORMAL_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "READS",
        value: 0x0f,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "normal read requests to any channel",
    }];

    static ref EVENTS: Vec<EventDesc> = vec![EventDesc {
        name: "UNC_QMC_NORMAL_READS",
        alias: None,
        code: EventCode::One(0x2c),
        umasks: UNC_QMC_NORMAL_UMASKS.as_slice(),
        flags: EventFlags::empty(),
        raw_umask_width: 0,
        desc: "uncore memory controller normal read requests",
    }];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
        ModifierDesc { name: "i", kind: ModifierKind::Bool, bit: 23, width: 1, default: 0, privilege_pair: false, desc: "invert counter mask comparison" },
        ModifierDesc { name: "c", kind: ModifierKind::Int { max: 255 }, bit: 24, width: 8, default: 0, privilege_pair: false, desc: "counter mask" },
        ModifierDesc { name: "o", kind: ModifierKind::Int { max: 0xff }, bit: 32, width: 8, default: 0, privilege_pair: false, desc: "opcode filter" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(4),
        name: "wsm_unc",
        desc: "Intel Westmere uncore",
        max_encoding: 1,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::UNCORE,
        encoder: &X86UncoreEncoder,
    };
}
