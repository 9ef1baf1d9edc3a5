//! SPARC Niagara I/II PMU. `pfmlib_sparc_niagara.c` registers these
//! models with `max_encoding = 2` but does not expose its encoding
//! algorithm in the surviving source; the two-word split here (control
//! word + counter-select word) follows the shape that record implies.

use lazy_static::lazy_static;

use crate::encoder::SparcNiagaraEncoder;
use crate::schema::*;

lazy_static! {
    static ref INSTR_CNT_UMASKS: Vec<UmaskDesc> = vec![UmaskDesc {
        name: "ALL",
        value: 0x00,
        grpid: 0,
        default: true,
        exclusive: false,
        desc: "all instructions",
    }];

    static ref EVENTS: Vec<EventDesc> = vec![EventDesc {
        name: "INSTR_CNT",
        alias: Some("instructions_retired"),
        code: EventCode::One(0x02),
        umasks: INSTR_CNT_UMASKS.as_slice(),
        flags: EventFlags::empty(),
        raw_umask_width: 0,
        desc: "instruction count",
    }];

    static ref MODIFIERS: Vec<ModifierDesc> = vec![];

    pub static ref PMU: PmuDesc = PmuDesc {
        id: PmuId(7),
        name: "niagara1",
        desc: "Sun UltraSPARC T1 (Niagara)",
        max_encoding: 2,
        events: EVENTS.as_slice(),
        modifiers: MODIFIERS.as_slice(),
        flags: PmuFlags::CORE,
        encoder: &SparcNiagaraEncoder,
    };
}
