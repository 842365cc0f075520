//! Constants, flag sets and small enums shared by the info tables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of sprite slots reserved for runtime definitions
pub const NUMSPRITEFREESLOTS: usize = NUMMOBJFREESLOTS;
/// Number of object type slots reserved for runtime definitions
pub const NUMMOBJFREESLOTS: usize = 512;
/// Number of state slots reserved for runtime definitions
pub const NUMSTATEFREESLOTS: usize = NUMMOBJFREESLOTS * 8;
/// Number of skin color slots reserved for runtime definitions
pub const NUMCOLORFREESLOTS: usize = 1024;

pub const FRACUNIT: i32 = 1 << 16;

/// Entries in a skin color ramp
pub const COLORRAMPSIZE: usize = 16;
/// Longest skin color display name in bytes
pub const MAXCOLORNAME: usize = 32;

/// Frame index part of `State::frame`
pub const FF_FRAMEMASK: u32 = 0xff;
/// Translucency level part of `State::frame`, `0..=9` shifted by `FF_TRANSSHIFT`
pub const FF_TRANSMASK: u32 = 0xf0000;
pub const FF_TRANSSHIFT: u32 = 16;

/// Flags or'd into `State::frame` above the frame index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameFlag {
    /// Cycle through `var1` more frames, `var2` tics each.
    Animate = 0x4000,
    /// Draw without sector lighting.
    Fullbright = 0x8000,
    /// Draw as a flat, wall-like sprite.
    Papersprite = 0x10_0000,
}

impl FromStr for FrameFlag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FF_ANIMATE" => Ok(Self::Animate),
            "FF_FULLBRIGHT" => Ok(Self::Fullbright),
            "FF_PAPERSPRITE" => Ok(Self::Papersprite),
            _ => Err(()),
        }
    }
}

/// Per-object behaviour flags carried in `MapObjInfo::flags`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapObjFlag {
    /// Call the touch special when a player touches it.
    Special = 0x1,
    /// Blocks.
    Solid = 0x2,
    /// Can be hit.
    Shootable = 0x4,
    /// Don't use the sector links (invisible but touchable).
    Nosector = 0x8,
    /// Don't use the block links (inert but displayable).
    Noblockmap = 0x10,
    /// Thin, paper-like collision bound.
    Papercollision = 0x20,
    /// Can be pushed by players.
    Pushable = 0x40,
    /// Object is a boss.
    Boss = 0x80,
    /// On level spawning, hang from the ceiling instead of standing on the
    /// floor.
    Spawnceiling = 0x100,
    /// Don't apply gravity every tic.
    Nogravity = 0x200,
    /// Plays its active sound on a timer.
    Ambient = 0x400,
    /// Slides against walls.
    Slideme = 0x800,
    /// Player cheat or intangible effect.
    Noclip = 0x1000,
    /// Allow moves to any height, no gravity.
    Float = 0x2000,
    /// Monitor icon.
    Boxicon = 0x4000,
    /// Flies in a straight line and explodes on contact.
    Missile = 0x8000,
    /// Launches players using `mass` and `damage` as strengths.
    Spring = 0x1_0000,
    /// Bounces off walls and floors.
    Bounce = 0x2_0000,
    /// Item monitor.
    Monitor = 0x4_0000,
    /// Don't run the thinker.
    Nothink = 0x8_0000,
    /// Burns.
    Fire = 0x10_0000,
    /// Ignore floor and ceiling heights when moving.
    Noclipheight = 0x20_0000,
    /// Counts as an enemy.
    Enemy = 0x40_0000,
    /// Scenery, skips most interaction checks.
    Scenery = 0x80_0000,
    /// Hurts players on contact.
    Pain = 0x100_0000,
    /// Sticks to surfaces it hits.
    Sticky = 0x200_0000,
    /// Special item for the bonus stage.
    Nightsitem = 0x400_0000,
    /// Passes through other objects.
    Noclipthing = 0x800_0000,
    /// Bounces like a grenade, losing speed.
    Grenadebounce = 0x1000_0000,
    /// Runs its spawn state action on spawn.
    Runspawnfunc = 0x2000_0000,
}

impl MapObjFlag {
    pub const ALL: [MapObjFlag; 30] = [
        MapObjFlag::Special,
        MapObjFlag::Solid,
        MapObjFlag::Shootable,
        MapObjFlag::Nosector,
        MapObjFlag::Noblockmap,
        MapObjFlag::Papercollision,
        MapObjFlag::Pushable,
        MapObjFlag::Boss,
        MapObjFlag::Spawnceiling,
        MapObjFlag::Nogravity,
        MapObjFlag::Ambient,
        MapObjFlag::Slideme,
        MapObjFlag::Noclip,
        MapObjFlag::Float,
        MapObjFlag::Boxicon,
        MapObjFlag::Missile,
        MapObjFlag::Spring,
        MapObjFlag::Bounce,
        MapObjFlag::Monitor,
        MapObjFlag::Nothink,
        MapObjFlag::Fire,
        MapObjFlag::Noclipheight,
        MapObjFlag::Enemy,
        MapObjFlag::Scenery,
        MapObjFlag::Pain,
        MapObjFlag::Sticky,
        MapObjFlag::Nightsitem,
        MapObjFlag::Noclipthing,
        MapObjFlag::Grenadebounce,
        MapObjFlag::Runspawnfunc,
    ];

    /// The `MF_` identifier used in patch files
    pub fn name(self) -> String {
        format!("MF_{:?}", self).to_ascii_uppercase()
    }

    /// Split a flag word back into its `MF_` names
    pub fn names(flags: u32) -> Vec<String> {
        Self::ALL
            .iter()
            .filter(|f| flags & **f as u32 != 0)
            .map(|f| f.name())
            .collect()
    }
}

impl FromStr for MapObjFlag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        Self::ALL.iter().copied().find(|f| f.name() == s).ok_or(())
    }
}

/// Bits accepted by `InfoTables::reset_data`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResetFlag {
    Sprites = 1,
    States = 2,
    MobjInfo = 4,
    SkinColors = 8,
}

impl ResetFlag {
    pub const ALL: u32 = ResetFlag::Sprites as u32
        | ResetFlag::States as u32
        | ResetFlag::MobjInfo as u32
        | ResetFlag::SkinColors as u32;
}

/// Text color used when a player's name is printed in chat.
#[repr(u16)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatColor {
    #[default]
    None = 0,
    Magenta = 0x100,
    Yellow = 0x200,
    Green = 0x300,
    Blue = 0x400,
    Red = 0x500,
    Gray = 0x600,
    Orange = 0x700,
    Sky = 0x800,
    Purple = 0x900,
    Aqua = 0xA00,
    Peridot = 0xB00,
    Azure = 0xC00,
    Brown = 0xD00,
    Rosy = 0xE00,
    Invert = 0xF00,
}

impl FromStr for ChatColor {
    type Err = ();

    /// Accepts `V_YELLOWMAP`, `YELLOW` or `yellow`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        let s = s.trim_start_matches("V_").trim_end_matches("MAP");
        match s {
            "" | "0" | "NONE" => Ok(Self::None),
            "MAGENTA" => Ok(Self::Magenta),
            "YELLOW" => Ok(Self::Yellow),
            "GREEN" => Ok(Self::Green),
            "BLUE" => Ok(Self::Blue),
            "RED" => Ok(Self::Red),
            "GRAY" | "GREY" => Ok(Self::Gray),
            "ORANGE" => Ok(Self::Orange),
            "SKY" => Ok(Self::Sky),
            "PURPLE" => Ok(Self::Purple),
            "AQUA" => Ok(Self::Aqua),
            "PERIDOT" => Ok(Self::Peridot),
            "AZURE" => Ok(Self::Azure),
            "BROWN" => Ok(Self::Brown),
            "ROSY" => Ok(Self::Rosy),
            "INVERT" => Ok(Self::Invert),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatColor, MapObjFlag};
    use std::str::FromStr;

    #[test]
    fn flag_names() {
        assert_eq!(MapObjFlag::Noclipheight.name(), "MF_NOCLIPHEIGHT");
        assert_eq!(
            MapObjFlag::from_str("mf_nogravity"),
            Ok(MapObjFlag::Nogravity)
        );
        assert!(MapObjFlag::from_str("MF_NOPE").is_err());

        let flags = MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32;
        assert_eq!(MapObjFlag::names(flags), vec!["MF_SOLID", "MF_SPRING"]);
    }

    #[test]
    fn flags_are_distinct_bits() {
        let mut seen = 0u32;
        for flag in MapObjFlag::ALL {
            let bit = flag as u32;
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
    }

    #[test]
    fn chat_colors() {
        assert_eq!(ChatColor::from_str("V_YELLOWMAP"), Ok(ChatColor::Yellow));
        assert_eq!(ChatColor::from_str("grey"), Ok(ChatColor::Gray));
        assert_eq!(ChatColor::from_str("0"), Ok(ChatColor::None));
        assert!(ChatColor::from_str("V_PLAIDMAP").is_err());
    }
}
