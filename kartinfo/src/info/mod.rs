//! Row types for the sprite, state, object and skin color tables, and the
//! built-in rows generated by `multigen`.
//!
//! Every table is indexed by a newtype (`SpriteNum`, `StateNum`, `MobjType`,
//! `SkinColorNum`, `SfxNum`). The built-in entries are associated consts on
//! those types, followed by a range of free slots which patches can claim at
//! runtime:
//!
//! ```text,ignore
//!   0                      FIRSTFREESLOT            LASTFREESLOT
//!   ├── built-in rows ───────┼─────── free slots ─────────┤
//! ```

#[rustfmt::skip]
mod map_object_info;
#[rustfmt::skip]
mod skin_colors;
#[rustfmt::skip]
mod sounds;
#[rustfmt::skip]
mod sprites;
#[rustfmt::skip]
mod states;

pub use map_object_info::{MOBJ_NAMES, MOBJINFO, NUM_BUILTIN_MOBJS};
pub use skin_colors::{NUM_BUILTIN_SKINCOLORS, SKINCOLOR_IDENTS, SKINCOLORS};
pub use sounds::{NUMSFX, SFX_NAMES};
pub use sprites::{NUM_BUILTIN_SPRITES, SPRNAMES};
pub use states::{NUM_BUILTIN_STATES, STATE_NAMES, STATES};

use crate::Action;
use crate::defs::{COLORRAMPSIZE, ChatColor, FF_FRAMEMASK, FF_TRANSMASK, FF_TRANSSHIFT, FrameFlag};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

macro_rules! table_index {
    ($name:ident) => {
        #[derive(
            Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub u16);

        impl $name {
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            fn from(n: $name) -> usize {
                n.0 as usize
            }
        }
    };
}

table_index!(SpriteNum);
table_index!(StateNum);
table_index!(MobjType);
table_index!(SkinColorNum);
table_index!(SfxNum);

/// A four character sprite prefix. Graphics lumps are looked up as the
/// prefix followed by the frame letter and rotation, e.g. `JAWZA1`.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteName(pub [u8; 4]);

impl SpriteName {
    /// Entry past the last sprite
    pub const TERMINATOR: SpriteName = SpriteName([0; 4]);

    /// `None` unless `name` is exactly four ASCII alphanumerics
    pub fn new(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        let mut out = [0; 4];
        for (o, b) in out.iter_mut().zip(bytes) {
            *o = b.to_ascii_uppercase();
        }
        Some(SpriteName(out))
    }

    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|b| *b == 0).unwrap_or(4);
        std::str::from_utf8(&self.0[..len]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl fmt::Debug for SpriteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpriteName({:?})", self.as_str())
    }
}

impl fmt::Display for SpriteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of an object's animation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Sprite to use
    pub sprite: SpriteNum,
    /// The frame within this sprite to show for the state, or'd with
    /// `FrameFlag`s and a translucency level
    pub frame: u32,
    /// How many tics this state takes. `-1` holds the state forever
    pub tics: i32,
    /// An action callback to run on this state
    pub action: Action,
    pub var1: i32,
    pub var2: i32,
    /// The state that should come after this. Can be looped.
    pub next_state: StateNum,
}

impl State {
    pub const EMPTY: State = State {
        sprite: SpriteNum(0),
        frame: 0,
        tics: 0,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum(0),
    };

    pub const fn frame_index(&self) -> u32 {
        self.frame & FF_FRAMEMASK
    }

    pub const fn has_flag(&self, flag: FrameFlag) -> bool {
        self.frame & flag as u32 != 0
    }

    /// Translucency level, 0 (opaque) to 9
    pub const fn translucency(&self) -> u32 {
        (self.frame & FF_TRANSMASK) >> FF_TRANSSHIFT
    }
}

/// The template a live map object is spawned from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObjInfo {
    /// Editor thing number, `-1` if it can't be placed in a map
    pub doomednum: i32,
    pub spawnstate: StateNum,
    pub spawnhealth: i32,
    pub seestate: StateNum,
    pub seesound: SfxNum,
    pub reactiontime: i32,
    pub attacksound: SfxNum,
    pub painstate: StateNum,
    pub painchance: i32,
    pub painsound: SfxNum,
    pub meleestate: StateNum,
    pub missilestate: StateNum,
    pub deathstate: StateNum,
    pub xdeathstate: StateNum,
    pub deathsound: SfxNum,
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    /// Draw order offset against objects at the same distance
    pub dispoffset: i32,
    pub mass: i32,
    pub damage: i32,
    pub activesound: SfxNum,
    pub flags: u32,
    pub raisestate: StateNum,
}

impl MapObjInfo {
    pub const EMPTY: MapObjInfo = MapObjInfo {
        doomednum: 0,
        spawnstate: StateNum(0),
        spawnhealth: 0,
        seestate: StateNum(0),
        seesound: SfxNum(0),
        reactiontime: 0,
        attacksound: SfxNum(0),
        painstate: StateNum(0),
        painchance: 0,
        painsound: SfxNum(0),
        meleestate: StateNum(0),
        missilestate: StateNum(0),
        deathstate: StateNum(0),
        xdeathstate: StateNum(0),
        deathsound: SfxNum(0),
        speed: 0.0,
        radius: 0.0,
        height: 0.0,
        dispoffset: 0,
        mass: 0,
        damage: 0,
        activesound: SfxNum(0),
        flags: 0,
        raisestate: StateNum(0),
    };

    /// Every state this template can enter directly, with its field name
    pub fn state_fields(&self) -> [(&'static str, StateNum); 8] {
        [
            ("spawnstate", self.spawnstate),
            ("seestate", self.seestate),
            ("painstate", self.painstate),
            ("meleestate", self.meleestate),
            ("missilestate", self.missilestate),
            ("deathstate", self.deathstate),
            ("xdeathstate", self.xdeathstate),
            ("raisestate", self.raisestate),
        ]
    }

    pub fn sound_fields(&self) -> [(&'static str, SfxNum); 5] {
        [
            ("seesound", self.seesound),
            ("attacksound", self.attacksound),
            ("painsound", self.painsound),
            ("deathsound", self.deathsound),
            ("activesound", self.activesound),
        ]
    }
}

/// A palette ramp used to recolor a character or vehicle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinColor {
    /// Display name, at most `MAXCOLORNAME` bytes
    pub name: Cow<'static, str>,
    /// Palette indices from lightest to darkest
    pub ramp: [u8; COLORRAMPSIZE],
    /// The color shown opposite this one, e.g. on the finish sign
    pub invcolor: SkinColorNum,
    /// Index into `invcolor`'s ramp used for text and highlights
    pub invshade: u8,
    pub chatcolor: ChatColor,
    /// Whether players may pick this color
    pub accessible: bool,
}

impl SkinColor {
    pub const EMPTY: SkinColor = SkinColor {
        name: Cow::Borrowed(""),
        ramp: [0; COLORRAMPSIZE],
        invcolor: SkinColorNum(0),
        invshade: 0,
        chatcolor: ChatColor::None,
        accessible: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::MapObjFlag;

    #[test]
    fn sprite_names() {
        assert_eq!(SpriteName::new("jawz"), Some(SpriteName(*b"JAWZ")));
        assert!(SpriteName::new("JAW").is_none());
        assert!(SpriteName::new("JAWZZ").is_none());
        assert!(SpriteName::new("JA-Z").is_none());
        assert_eq!(SPRNAMES[SpriteNum::PLAY.index()].as_str(), "PLAY");
        assert!(SpriteName::TERMINATOR.is_empty());
        assert_eq!(SpriteName::TERMINATOR.as_str(), "");
    }

    #[test]
    fn builtin_tables_line_up() {
        assert_eq!(STATES.len(), STATE_NAMES.len());
        assert_eq!(MOBJINFO.len(), MOBJ_NAMES.len());
        assert_eq!(SKINCOLORS.len(), SKINCOLOR_IDENTS.len());
        assert_eq!(STATE_NAMES[StateNum::JAWZ1.index()], "S_JAWZ1");
        assert_eq!(MOBJ_NAMES[MobjType::JAWZ.index()], "MT_JAWZ");
        assert_eq!(SKINCOLOR_IDENTS[SkinColorNum::BLUE.index()], "SKINCOLOR_BLUE");
        assert_eq!(SFX_NAMES[SfxNum::SPRING.index()], "sfx_spring");
        assert_eq!(StateNum::FIRSTFREESLOT.index(), NUM_BUILTIN_STATES);
        assert_eq!(MobjType::FIRSTFREESLOT.index(), NUM_BUILTIN_MOBJS);
        assert_eq!(SpriteNum::FIRSTFREESLOT.index(), NUM_BUILTIN_SPRITES);
        assert_eq!(SkinColorNum::FIRSTFREESLOT.index(), NUM_BUILTIN_SKINCOLORS);
    }

    #[test]
    fn state_frames() {
        let st = &STATES[StateNum::RANDOMITEM1.index()];
        assert_eq!(st.frame_index(), 0);
        assert!(st.has_flag(FrameFlag::Fullbright));
        assert!(st.has_flag(FrameFlag::Animate));
        assert_eq!(st.tics, -1);

        let st = &STATES[StateNum::MINEEXPLOSION4.index()];
        assert_eq!(st.frame_index(), 3);
        assert_eq!(st.translucency(), 6);
        assert!(!st.has_flag(FrameFlag::Animate));
    }

    #[test]
    fn springs() {
        let info = &MOBJINFO[MobjType::REDSPRING.index()];
        assert_eq!(info.doomednum, 551);
        assert_eq!(info.painstate, StateNum::REDSPRING2);
        assert_eq!(info.painsound, SfxNum::SPRING);
        assert_eq!(info.mass, 32 * crate::defs::FRACUNIT);
        assert!(info.flags & MapObjFlag::Spring as u32 != 0);
    }

    #[test]
    fn skin_color_pairs() {
        let white = &SKINCOLORS[SkinColorNum::WHITE.index()];
        assert_eq!(white.name, "White");
        assert_eq!(white.invcolor, SkinColorNum::BLACK);
        assert_eq!(SKINCOLORS[SkinColorNum::BLACK.index()].invcolor, SkinColorNum::WHITE);
        assert!(!SKINCOLORS[SkinColorNum::NONE.index()].accessible);
    }
}
