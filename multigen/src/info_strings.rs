pub const GENERATED_HEADER: &str = "// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.\n";

pub const SPRITE_HEADER_STR: &str = r#"
use super::{SpriteName, SpriteNum};
use crate::defs::NUMSPRITEFREESLOTS;

impl SpriteNum {"#;

pub const SPRITE_SLOTS_STR: &str = r#"
    pub const FIRSTFREESLOT: SpriteNum = SpriteNum(NUM_BUILTIN_SPRITES as u16);
    pub const LASTFREESLOT: SpriteNum =
        SpriteNum((NUM_BUILTIN_SPRITES + NUMSPRITEFREESLOTS - 1) as u16);
    pub const NUMSPRITES: SpriteNum =
        SpriteNum((NUM_BUILTIN_SPRITES + NUMSPRITEFREESLOTS) as u16);
}
"#;

pub const SPRITE_NAME_ARRAY_STR: &str = r#"
pub const SPRNAMES: [SpriteName; NUM_BUILTIN_SPRITES] = ["#;

pub const SOUND_HEADER_STR: &str = r#"
use super::SfxNum;

impl SfxNum {"#;

pub const SOUND_NAME_ARRAY_STR: &str = r#"
pub const SFX_NAMES: [&str; NUMSFX] = ["#;

pub const STATE_HEADER_STR: &str = r#"
use super::{Action, SpriteNum, State, StateNum};
use crate::defs::NUMSTATEFREESLOTS;

impl StateNum {"#;

pub const STATE_SLOTS_STR: &str = r#"
    pub const FIRSTFREESLOT: StateNum = StateNum(NUM_BUILTIN_STATES as u16);
    pub const LASTFREESLOT: StateNum =
        StateNum((NUM_BUILTIN_STATES + NUMSTATEFREESLOTS - 1) as u16);
    pub const NUMSTATES: StateNum = StateNum((NUM_BUILTIN_STATES + NUMSTATEFREESLOTS) as u16);
}
"#;

pub const STATE_NAME_ARRAY_STR: &str = r#"
pub const STATE_NAMES: [&str; NUM_BUILTIN_STATES] = ["#;

pub const STATE_ARRAY_STR: &str = r#"
pub const STATES: [State; NUM_BUILTIN_STATES] = ["#;

pub const MOBJ_INFO_HEADER_STR: &str = r#"
use super::{MapObjInfo, MobjType, SfxNum, StateNum};
use crate::defs::{MapObjFlag, NUMMOBJFREESLOTS};

impl MobjType {"#;

pub const MOBJ_SLOTS_STR: &str = r#"
    pub const FIRSTFREESLOT: MobjType = MobjType(NUM_BUILTIN_MOBJS as u16);
    pub const LASTFREESLOT: MobjType =
        MobjType((NUM_BUILTIN_MOBJS + NUMMOBJFREESLOTS - 1) as u16);
    pub const NUMMOBJTYPES: MobjType = MobjType((NUM_BUILTIN_MOBJS + NUMMOBJFREESLOTS) as u16);
}
"#;

pub const MOBJ_NAME_ARRAY_STR: &str = r#"
pub const MOBJ_NAMES: [&str; NUM_BUILTIN_MOBJS] = ["#;

pub const MOBJ_INFO_ARRAY_STR: &str = r#"
pub const MOBJINFO: [MapObjInfo; NUM_BUILTIN_MOBJS] = ["#;

pub const SKINCOLOR_HEADER_STR: &str = r#"
use std::borrow::Cow;

use super::{SkinColor, SkinColorNum};
use crate::defs::{ChatColor, NUMCOLORFREESLOTS};

impl SkinColorNum {"#;

pub const SKINCOLOR_SLOTS_STR: &str = r#"
    pub const FIRSTFREESLOT: SkinColorNum = SkinColorNum(NUM_BUILTIN_SKINCOLORS as u16);
    pub const LASTFREESLOT: SkinColorNum =
        SkinColorNum((NUM_BUILTIN_SKINCOLORS + NUMCOLORFREESLOTS - 1) as u16);
    pub const MAXSKINCOLORS: SkinColorNum =
        SkinColorNum((NUM_BUILTIN_SKINCOLORS + NUMCOLORFREESLOTS) as u16);
}
"#;

pub const SKINCOLOR_IDENT_ARRAY_STR: &str = r#"
pub const SKINCOLOR_IDENTS: [&str; NUM_BUILTIN_SKINCOLORS] = ["#;

pub const SKINCOLOR_ARRAY_STR: &str = r#"
pub const SKINCOLORS: [SkinColor; NUM_BUILTIN_SKINCOLORS] = ["#;

pub const ARRAY_END_STR: &str = r#"
];
"#;
