//! Sprite, animation state, object template and skin color tables for the
//! kart engine, plus the runtime copy of those tables that patches modify.
//!
//! The built-in rows live in `info` as const arrays generated by `multigen`.
//! `InfoTables` copies them into growable storage with a block of free slots
//! after each table:
//!
//! ```text,ignore
//!  InfoTables::new()
//!        │
//!        ├─ patch_info_tables()   zero the free slots, name free sprites F001..
//!        ├─ backup_tables()       LZF snapshot of every table
//!        ├─ freeslot("MT_FOO")    claim a free slot by name
//!        ├─ apply_soc(text)       patch rows from a text lump
//!        └─ reset_data(flags)     roll tables back to the snapshot
//! ```

mod action;
mod backup;
pub mod defs;
mod freeslot;
pub mod info;
mod soc;
mod tables;
mod translation;
mod walk;

pub use action::Action;
pub use backup::{TableBackup, TablesBackup};
pub use defs::{ChatColor, FrameFlag, MapObjFlag, ResetFlag};
pub use freeslot::{FreeSlots, SlotKind};
pub use info::{
    MapObjInfo, MobjType, SfxNum, SkinColor, SkinColorNum, SpriteName, SpriteNum, State, StateNum,
};
pub use log;
pub use soc::SocSummary;
pub use tables::InfoTables;
pub use translation::{DEFAULT_STARTTRANSCOLOR, TranslationKind};
pub use walk::{ChainEnd, StateChain, animation_frame};

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InfoError {
    /// `reset_data` was called before `backup_tables`
    NoBackup,
    /// A snapshot failed its length or checksum check
    BackupCorrupt(&'static str),
    Serialize(String),
    NoFreeSlots(SlotKind),
    AlreadyAllocated(String),
    UnknownSlotKind(String),
    BadSpriteName(String),
    /// A loop of states that all take zero tics, the thinker would never
    /// leave it
    ZeroTicCycle(StateNum),
    InvalidReference(String),
    DuplicateDoomEdNum {
        doomednum: i32,
        first: MobjType,
        second: MobjType,
    },
    BadColor(SkinColorNum),
}

impl Error for InfoError {}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoError::NoBackup => write!(f, "No table backup has been taken"),
            InfoError::BackupCorrupt(table) => write!(f, "Backup of {} is corrupt", table),
            InfoError::Serialize(m) => write!(f, "Serialise: {}", m),
            InfoError::NoFreeSlots(kind) => write!(f, "Out of {:?} free slots", kind),
            InfoError::AlreadyAllocated(name) => write!(f, "{} is already allocated", name),
            InfoError::UnknownSlotKind(name) => {
                write!(f, "{} has no SPR_, S_, MT_ or SKINCOLOR_ prefix", name)
            }
            InfoError::BadSpriteName(name) => {
                write!(f, "Sprite name {} must be four letters or digits", name)
            }
            InfoError::ZeroTicCycle(state) => {
                write!(f, "Infinite zero tic state cycle at state {}", state.0)
            }
            InfoError::InvalidReference(m) => write!(f, "{}", m),
            InfoError::DuplicateDoomEdNum {
                doomednum,
                first,
                second,
            } => write!(
                f,
                "Doomednum {} is used by object {} and object {}",
                doomednum, first.0, second.0
            ),
            InfoError::BadColor(color) => write!(f, "Skin color {} is not in use", color.0),
        }
    }
}
