//! Registry of free slots claimed by name at runtime.

use crate::info::{MobjType, SkinColorNum, SpriteName, SpriteNum, StateNum};
use crate::{InfoError, InfoTables};
use log::debug;

/// The table a free slot belongs to, picked by the name prefix
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlotKind {
    Sprite,
    State,
    MobjType,
    SkinColor,
}

impl SlotKind {
    /// Split `SPR_`, `S_`, `MT_` or `SKINCOLOR_` off the front of `name`
    pub fn from_name(name: &str) -> Option<(SlotKind, &str)> {
        // SKINCOLOR_ and SPR_ both start with S, check them before S_
        for (prefix, kind) in [
            ("SKINCOLOR_", SlotKind::SkinColor),
            ("SPR_", SlotKind::Sprite),
            ("MT_", SlotKind::MobjType),
            ("S_", SlotKind::State),
        ] {
            if let Some(head) = name.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) && name.len() > prefix.len() {
                    return Some((kind, &name[prefix.len()..]));
                }
            }
        }
        None
    }

    pub const fn capacity(self) -> usize {
        use crate::defs::*;
        match self {
            SlotKind::Sprite => NUMSPRITEFREESLOTS,
            SlotKind::State => NUMSTATEFREESLOTS,
            SlotKind::MobjType => NUMMOBJFREESLOTS,
            SlotKind::SkinColor => NUMCOLORFREESLOTS,
        }
    }
}

/// Allocated identifiers per table, in slot order. Slot `i` of a kind is
/// `FIRSTFREESLOT + i`. Slots are handed out in order and never given back.
#[derive(Debug, Default, Clone)]
pub struct FreeSlots {
    sprites: Vec<String>,
    states: Vec<String>,
    mobjs: Vec<String>,
    colors: Vec<String>,
}

impl FreeSlots {
    fn names(&self, kind: SlotKind) -> &Vec<String> {
        match kind {
            SlotKind::Sprite => &self.sprites,
            SlotKind::State => &self.states,
            SlotKind::MobjType => &self.mobjs,
            SlotKind::SkinColor => &self.colors,
        }
    }

    fn names_mut(&mut self, kind: SlotKind) -> &mut Vec<String> {
        match kind {
            SlotKind::Sprite => &mut self.sprites,
            SlotKind::State => &mut self.states,
            SlotKind::MobjType => &mut self.mobjs,
            SlotKind::SkinColor => &mut self.colors,
        }
    }

    pub fn used(&self, kind: SlotKind) -> usize {
        self.names(kind).len()
    }

    /// Offset from `FIRSTFREESLOT` of an allocated identifier
    pub fn position(&self, kind: SlotKind, ident: &str) -> Option<usize> {
        self.names(kind)
            .iter()
            .position(|n| n.eq_ignore_ascii_case(ident))
    }

    /// Identifier allocated at offset `slot` from `FIRSTFREESLOT`
    pub fn ident(&self, kind: SlotKind, slot: usize) -> Option<&str> {
        self.names(kind).get(slot).map(String::as_str)
    }

    fn claim(&mut self, kind: SlotKind, ident: String) -> Result<usize, InfoError> {
        let names = self.names_mut(kind);
        if names.len() >= kind.capacity() {
            return Err(InfoError::NoFreeSlots(kind));
        }
        names.push(ident);
        Ok(names.len() - 1)
    }
}

impl InfoTables {
    /// Claim the next free slot for `name`, returning the table index it
    /// now occupies. The prefix picks the table: `SPR_JAWZ`, `S_JAWZ9`,
    /// `MT_JAWZ_DUD` or `SKINCOLOR_SPEARMINT`.
    ///
    /// Sprite slots get the four letter prefix written into the sprite name
    /// table. Skin color slots raise `num_skincolors` to cover the new slot.
    pub fn freeslot(&mut self, name: &str) -> Result<u16, InfoError> {
        let name = name.trim();
        let (kind, word) =
            SlotKind::from_name(name).ok_or_else(|| InfoError::UnknownSlotKind(name.to_string()))?;
        let ident = name.to_ascii_uppercase();

        let index = match kind {
            SlotKind::Sprite => {
                let sprname =
                    SpriteName::new(word).ok_or_else(|| InfoError::BadSpriteName(word.to_string()))?;
                if self.sprite_by_name(sprname.as_str()).is_some() {
                    return Err(InfoError::AlreadyAllocated(ident));
                }
                let slot = self.freeslots.claim(kind, ident.clone())?;
                let index = SpriteNum::FIRSTFREESLOT.index() + slot;
                self.sprnames[index] = sprname;
                index
            }
            SlotKind::State => {
                if self.state_by_name(&ident).is_some() {
                    return Err(InfoError::AlreadyAllocated(ident));
                }
                StateNum::FIRSTFREESLOT.index() + self.freeslots.claim(kind, ident.clone())?
            }
            SlotKind::MobjType => {
                if self.mobj_by_name(&ident).is_some() {
                    return Err(InfoError::AlreadyAllocated(ident));
                }
                MobjType::FIRSTFREESLOT.index() + self.freeslots.claim(kind, ident.clone())?
            }
            SlotKind::SkinColor => {
                if self.skincolor_by_ident(&ident).is_some() {
                    return Err(InfoError::AlreadyAllocated(ident));
                }
                let index =
                    SkinColorNum::FIRSTFREESLOT.index() + self.freeslots.claim(kind, ident.clone())?;
                self.num_skincolors = self.num_skincolors.max(index as u16 + 1);
                index
            }
        };
        debug!("Free slot {ident} is {kind:?} {index}");
        Ok(index as u16)
    }

    pub fn free_slots(&self) -> &FreeSlots {
        &self.freeslots
    }
}

#[cfg(test)]
mod tests {
    use super::SlotKind;
    use crate::defs::NUMSPRITEFREESLOTS;
    use crate::info::{MobjType, SkinColorNum, SpriteNum, StateNum};
    use crate::{InfoError, InfoTables};

    #[test]
    fn slot_prefixes() {
        assert_eq!(SlotKind::from_name("SPR_JAWZ"), Some((SlotKind::Sprite, "JAWZ")));
        assert_eq!(SlotKind::from_name("s_foo"), Some((SlotKind::State, "foo")));
        assert_eq!(
            SlotKind::from_name("SKINCOLOR_SPEARMINT"),
            Some((SlotKind::SkinColor, "SPEARMINT"))
        );
        assert_eq!(SlotKind::from_name("MT_"), None);
        assert_eq!(SlotKind::from_name("sfx_boing"), None);
    }

    #[test]
    fn allocate_in_order() {
        let mut tables = InfoTables::new();
        assert_eq!(
            tables.freeslot("MT_JAWZ_DUD").unwrap(),
            MobjType::FIRSTFREESLOT.0
        );
        assert_eq!(
            tables.freeslot("MT_BANANA_DUD").unwrap(),
            MobjType::FIRSTFREESLOT.0 + 1
        );
        assert_eq!(tables.freeslot("S_DUD1").unwrap(), StateNum::FIRSTFREESLOT.0);
        assert_eq!(
            tables.mobj_by_name("mt_banana_dud"),
            Some(MobjType(MobjType::FIRSTFREESLOT.0 + 1))
        );
    }

    #[test]
    fn sprite_slot_takes_name() {
        let mut tables = InfoTables::new();
        let spr = tables.freeslot("SPR_dudz").unwrap();
        assert_eq!(spr, SpriteNum::FIRSTFREESLOT.0);
        assert_eq!(tables.sprnames[spr as usize].as_str(), "DUDZ");
        assert_eq!(tables.sprite_by_name("SPR_DUDZ"), Some(SpriteNum(spr)));

        assert_eq!(
            tables.freeslot("SPR_TOOLONG"),
            Err(InfoError::BadSpriteName("TOOLONG".to_string()))
        );
        assert_eq!(
            tables.freeslot("SPR_JAWZ"),
            Err(InfoError::AlreadyAllocated("SPR_JAWZ".to_string()))
        );
    }

    #[test]
    fn skincolor_slot_grows_count() {
        let mut tables = InfoTables::new();
        assert_eq!(tables.num_skincolors(), SkinColorNum::FIRSTFREESLOT);
        let color = tables.freeslot("SKINCOLOR_SPEARMINT").unwrap();
        assert_eq!(color, SkinColorNum::FIRSTFREESLOT.0);
        assert_eq!(tables.num_skincolors(), SkinColorNum(color + 1));
        assert_eq!(
            tables.freeslot("SKINCOLOR_SPEARMINT"),
            Err(InfoError::AlreadyAllocated("SKINCOLOR_SPEARMINT".to_string()))
        );
    }

    #[test]
    fn duplicates_and_unknowns() {
        let mut tables = InfoTables::new();
        assert_eq!(
            tables.freeslot("MT_PLAYER"),
            Err(InfoError::AlreadyAllocated("MT_PLAYER".to_string()))
        );
        assert_eq!(
            tables.freeslot("TH_THING"),
            Err(InfoError::UnknownSlotKind("TH_THING".to_string()))
        );
    }

    #[test]
    fn sprites_run_out() {
        let mut tables = InfoTables::new();
        for i in 0..NUMSPRITEFREESLOTS {
            tables.freeslot(&format!("SPR_X{i:03}")).unwrap();
        }
        assert_eq!(
            tables.freeslot("SPR_ZZZZ"),
            Err(InfoError::NoFreeSlots(SlotKind::Sprite))
        );
    }
}
