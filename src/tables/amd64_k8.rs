//! AMD64 K8 PMU: the same PERFEVTSEL byte layout as the Intel core
//! encoders minus the any-thread bit, which K8 predates.

use lazy_static::lazy_static;

use crate::encoder::Amd64Encoder;
use crate::schema::*;

lazy_static! {
    static ref DISPATCHED_FPU_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "OPS_ADD",
        value: 0x01,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "FPU pipe 0 (add) dispatched ops",
    }];

    static ref EVENTS: Vec<EventDesc> = vec![EventDesc {
        name: "DISPATCHED_FPU",
        alias: None,
        code: EventCode::One(0x00),
        umasks: DISPATCHED_FPU_UMASKS.as_slice(),
        flags: EventFlags::empty(),
        raw_umask_width: 0,
        desc: "dispatched FPU operations",
    }];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![
        ModifierDesc { name: "k", kind: ModifierKind::Bool, bit: 17, width: 1, default: 1, privilege_pair: true, desc: "count in ring 0" },
        ModifierDesc { name: "u", kind: ModifierKind::Bool, bit: 16, width: 1, default: 1, privilege_pair: true, desc: "count in ring 3" },
        ModifierDesc { name: "e", kind: ModifierKind::Bool, bit: 18, width: 1, default: 0, privilege_pair: false, desc: "edge detect" },
        ModifierDesc { name: "i", kind: ModifierKind::Bool, bit: 23, width: 1, default: 0, privilege_pair: false, desc: "invert counter mask comparison" },
        ModifierDesc { name: "c", kind: ModifierKind::Int { max: 255 }, bit: 24, width: 8, default: 0, privilege_pair: false, desc: "counter mask" },
    ];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(6),
        name: "amd64_k8",
        desc: "AMD64 K8",
        max_encoding: 1,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE,
        encoder: &Amd64Encoder,
    };
}
