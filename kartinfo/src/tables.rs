use crate::backup::TablesBackup;
use crate::freeslot::{FreeSlots, SlotKind};
use crate::info::{
    MOBJ_NAMES, MOBJINFO, MapObjInfo, MobjType, SKINCOLOR_IDENTS, SKINCOLORS, SPRNAMES,
    STATE_NAMES, STATES, SkinColor, SkinColorNum, SpriteName, SpriteNum, State, StateNum,
};
use log::{debug, info};

/// The live, patchable copy of every info table.
///
/// Each table is sized for its built-in rows plus its free slots, so an
/// index taken from any of the `FIRSTFREESLOT..=LASTFREESLOT` ranges is
/// always in bounds. The sprite name table carries one more entry, the
/// all-zero terminator at `SpriteNum::NUMSPRITES`.
#[derive(Debug, Clone)]
pub struct InfoTables {
    pub sprnames: Vec<SpriteName>,
    pub states: Vec<State>,
    pub mobjinfo: Vec<MapObjInfo>,
    pub skincolors: Vec<SkinColor>,
    /// One past the last skin color in use
    pub(crate) num_skincolors: u16,
    pub(crate) freeslots: FreeSlots,
    pub(crate) backup: Option<TablesBackup>,
}

impl Default for InfoTables {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoTables {
    /// Copy the built-in tables and prepare their free slots
    pub fn new() -> Self {
        let mut sprnames = SPRNAMES.to_vec();
        sprnames.resize(SpriteNum::NUMSPRITES.index() + 1, SpriteName::TERMINATOR);
        let mut states = STATES.to_vec();
        states.resize(StateNum::NUMSTATES.index(), State::EMPTY);
        let mut mobjinfo = MOBJINFO.to_vec();
        mobjinfo.resize(MobjType::NUMMOBJTYPES.index(), MapObjInfo::EMPTY);
        let mut skincolors = SKINCOLORS.to_vec();
        skincolors.resize(SkinColorNum::MAXSKINCOLORS.index(), SkinColor::EMPTY);

        let mut tables = Self {
            sprnames,
            states,
            mobjinfo,
            skincolors,
            num_skincolors: SkinColorNum::FIRSTFREESLOT.0,
            freeslots: FreeSlots::default(),
            backup: None,
        };
        tables.patch_info_tables();
        info!(
            "Info tables: {} sprites, {} states, {} objects, {} skin colors",
            tables.sprnames.len() - 1,
            tables.states.len(),
            tables.mobjinfo.len(),
            tables.skincolors.len()
        );
        tables
    }

    /// Put every free slot back to its blank state and forget all
    /// allocations. Free sprites are named `F001`, `F002` and on so that
    /// each still has a unique lump prefix.
    pub fn patch_info_tables(&mut self) {
        self.freeslots = FreeSlots::default();
        let first = SpriteNum::FIRSTFREESLOT.index();
        for (i, name) in self.sprnames[first..SpriteNum::NUMSPRITES.index()]
            .iter_mut()
            .enumerate()
        {
            let numbered = format!("F{:03}", i + 1);
            *name = SpriteName::new(&numbered).unwrap_or(SpriteName::TERMINATOR);
        }
        self.sprnames[SpriteNum::NUMSPRITES.index()] = SpriteName::TERMINATOR;

        self.states[StateNum::FIRSTFREESLOT.index()..].fill(State::EMPTY);

        let blank = MapObjInfo {
            doomednum: -1,
            ..MapObjInfo::EMPTY
        };
        self.mobjinfo[MobjType::FIRSTFREESLOT.index()..].fill(blank);

        self.skincolors[SkinColorNum::FIRSTFREESLOT.index()..].fill(SkinColor::EMPTY);
        self.num_skincolors = SkinColorNum::FIRSTFREESLOT.0;
        debug!("Free slots blanked");
    }

    pub fn sprite(&self, sprite: SpriteNum) -> Option<&SpriteName> {
        self.sprnames[..SpriteNum::NUMSPRITES.index()].get(sprite.index())
    }

    pub fn state(&self, state: StateNum) -> Option<&State> {
        self.states.get(state.index())
    }

    pub fn state_mut(&mut self, state: StateNum) -> Option<&mut State> {
        self.states.get_mut(state.index())
    }

    pub fn mobjinfo(&self, kind: MobjType) -> Option<&MapObjInfo> {
        self.mobjinfo.get(kind.index())
    }

    pub fn mobjinfo_mut(&mut self, kind: MobjType) -> Option<&mut MapObjInfo> {
        self.mobjinfo.get_mut(kind.index())
    }

    pub fn skincolor(&self, color: SkinColorNum) -> Option<&SkinColor> {
        self.skincolors.get(color.index())
    }

    pub fn skincolor_mut(&mut self, color: SkinColorNum) -> Option<&mut SkinColor> {
        self.skincolors.get_mut(color.index())
    }

    /// One past the last skin color in use
    pub fn num_skincolors(&self) -> SkinColorNum {
        SkinColorNum(self.num_skincolors)
    }

    /// Find a sprite by its four letter prefix, with or without `SPR_`.
    /// Only built-in and allocated sprites are searched.
    pub fn sprite_by_name(&self, name: &str) -> Option<SpriteNum> {
        let name = strip_prefix(name, "SPR_");
        let end = SpriteNum::FIRSTFREESLOT.index() + self.freeslots.used(SlotKind::Sprite);
        self.sprnames[..end]
            .iter()
            .position(|s| !s.is_empty() && s.as_str().eq_ignore_ascii_case(name))
            .map(|i| SpriteNum(i as u16))
    }

    /// Find a state by identifier, `S_JAWZ1` or `JAWZ1`
    pub fn state_by_name(&self, name: &str) -> Option<StateNum> {
        let ident = with_prefix(name, "S_");
        lookup(&STATE_NAMES, &self.freeslots, SlotKind::State, &ident).map(StateNum)
    }

    /// Find an object type by identifier, `MT_JAWZ` or `JAWZ`
    pub fn mobj_by_name(&self, name: &str) -> Option<MobjType> {
        let ident = with_prefix(name, "MT_");
        lookup(&MOBJ_NAMES, &self.freeslots, SlotKind::MobjType, &ident).map(MobjType)
    }

    /// Find a skin color by identifier, `SKINCOLOR_BLUE` or `BLUE`
    pub fn skincolor_by_ident(&self, name: &str) -> Option<SkinColorNum> {
        let ident = with_prefix(name, "SKINCOLOR_");
        lookup(&SKINCOLOR_IDENTS, &self.freeslots, SlotKind::SkinColor, &ident).map(SkinColorNum)
    }

    /// Find a skin color in use by its display name, ignoring case
    pub fn skincolor_by_name(&self, name: &str) -> Option<SkinColorNum> {
        let name = name.trim();
        self.skincolors[..self.num_skincolors as usize]
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, c)| !c.name.is_empty() && c.name.eq_ignore_ascii_case(name))
            .map(|(i, _)| SkinColorNum(i as u16))
    }

    /// The first object type placed by editor thing number `doomednum`
    pub fn mobj_by_doomednum(&self, doomednum: i32) -> Option<MobjType> {
        if doomednum < 0 {
            return None;
        }
        self.mobjinfo
            .iter()
            .position(|m| m.doomednum == doomednum)
            .map(|i| MobjType(i as u16))
    }

    pub fn state_ident(&self, state: StateNum) -> Option<&str> {
        ident(&STATE_NAMES, &self.freeslots, SlotKind::State, state.index())
    }

    pub fn mobj_ident(&self, kind: MobjType) -> Option<&str> {
        ident(&MOBJ_NAMES, &self.freeslots, SlotKind::MobjType, kind.index())
    }

    pub fn skincolor_ident(&self, color: SkinColorNum) -> Option<&str> {
        ident(
            &SKINCOLOR_IDENTS,
            &self.freeslots,
            SlotKind::SkinColor,
            color.index(),
        )
    }
}

fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    let name = name.trim();
    match name.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &name[prefix.len()..],
        _ => name,
    }
}

fn with_prefix(name: &str, prefix: &str) -> String {
    format!("{prefix}{}", strip_prefix(name, prefix)).to_ascii_uppercase()
}

fn lookup(builtin: &[&str], slots: &FreeSlots, kind: SlotKind, ident: &str) -> Option<u16> {
    builtin
        .iter()
        .position(|n| *n == ident)
        .or_else(|| {
            slots
                .position(kind, ident)
                .map(|slot| builtin.len() + slot)
        })
        .map(|i| i as u16)
}

fn ident<'a>(
    builtin: &'static [&'static str],
    slots: &'a FreeSlots,
    kind: SlotKind,
    index: usize,
) -> Option<&'a str> {
    match builtin.get(index) {
        Some(name) => Some(*name),
        None => slots.ident(kind, index - builtin.len()),
    }
}

#[cfg(test)]
mod tests {
    use crate::freeslot::SlotKind;
    use crate::InfoTables;
    use crate::info::{
        MapObjInfo, MobjType, NUM_BUILTIN_STATES, STATES, SkinColorNum, SpriteName, SpriteNum,
        State, StateNum,
    };

    #[test]
    fn table_sizes() {
        let tables = InfoTables::new();
        assert_eq!(tables.sprnames.len(), SpriteNum::NUMSPRITES.index() + 1);
        assert_eq!(tables.states.len(), StateNum::NUMSTATES.index());
        assert_eq!(tables.mobjinfo.len(), MobjType::NUMMOBJTYPES.index());
        assert_eq!(tables.skincolors.len(), SkinColorNum::MAXSKINCOLORS.index());
        assert_eq!(&tables.states[..NUM_BUILTIN_STATES], &STATES[..]);
    }

    #[test]
    fn free_slots_are_blank() {
        let tables = InfoTables::new();
        let first = SpriteNum::FIRSTFREESLOT.index();
        assert_eq!(tables.sprnames[first].as_str(), "F001");
        assert_eq!(tables.sprnames[first + 9].as_str(), "F010");
        assert_eq!(
            tables.sprnames[SpriteNum::LASTFREESLOT.index()].as_str(),
            "F512"
        );
        assert!(tables.sprnames[SpriteNum::NUMSPRITES.index()].is_empty());

        assert_eq!(tables.states[StateNum::LASTFREESLOT.index()], State::EMPTY);
        let info = &tables.mobjinfo[MobjType::FIRSTFREESLOT.index()];
        assert_eq!(info.doomednum, -1);
        assert_eq!(info.spawnstate, StateNum::NULL);
        let color = &tables.skincolors[SkinColorNum::FIRSTFREESLOT.index()];
        assert!(color.name.is_empty());
        assert!(!color.accessible);
    }

    #[test]
    fn patch_blanks_edited_slots() {
        let mut tables = InfoTables::new();
        let slot = MobjType::FIRSTFREESLOT.index();
        tables.mobjinfo[slot] = MapObjInfo {
            doomednum: 4000,
            ..MapObjInfo::EMPTY
        };
        tables.sprnames[SpriteNum::FIRSTFREESLOT.index()] = SpriteName(*b"DUDZ");
        tables.num_skincolors += 3;

        tables.patch_info_tables();
        assert_eq!(tables.mobjinfo[slot].doomednum, -1);
        assert_eq!(
            tables.sprnames[SpriteNum::FIRSTFREESLOT.index()].as_str(),
            "F001"
        );
        assert_eq!(tables.num_skincolors(), SkinColorNum::FIRSTFREESLOT);
    }

    #[test]
    fn patch_releases_allocations() {
        let mut tables = InfoTables::new();
        let first = SpriteNum::FIRSTFREESLOT;
        assert_eq!(tables.freeslot("SPR_DUDZ"), Ok(first.0));
        assert_eq!(tables.freeslot("S_DUDZ1"), Ok(StateNum::FIRSTFREESLOT.0));

        tables.patch_info_tables();
        assert_eq!(tables.sprite_by_name("DUDZ"), None);
        assert_eq!(tables.sprite_by_name("F001"), None);
        assert_eq!(tables.state_by_name("S_DUDZ1"), None);
        assert_eq!(tables.free_slots().used(SlotKind::Sprite), 0);

        assert_eq!(tables.freeslot("SPR_DUDZ"), Ok(first.0));
        assert_eq!(tables.sprite_by_name("DUDZ"), Some(first));
        assert_eq!(tables.free_slots().used(SlotKind::Sprite), 1);
    }

    #[test]
    fn lookups() {
        let tables = InfoTables::new();
        assert_eq!(tables.sprite_by_name("SPR_JAWZ"), Some(SpriteNum::JAWZ));
        assert_eq!(tables.sprite_by_name("bana"), Some(SpriteNum::BANA));
        assert_eq!(tables.sprite_by_name("F001"), None);
        assert_eq!(tables.state_by_name("S_JAWZ1"), Some(StateNum::JAWZ1));
        assert_eq!(tables.state_by_name("kart_stnd2"), Some(StateNum::KART_STND2));
        assert_eq!(tables.mobj_by_name("MT_SPB"), Some(MobjType::SPB));
        assert_eq!(tables.mobj_by_name("MT_CYBERDEMON"), None);
        assert_eq!(
            tables.skincolor_by_ident("SKINCOLOR_BLUE"),
            Some(SkinColorNum::BLUE)
        );
        assert_eq!(tables.skincolor_by_name("blue"), Some(SkinColorNum::BLUE));
        assert_eq!(tables.skincolor_by_name("None"), None);
        assert_eq!(tables.mobj_by_doomednum(551), Some(MobjType::REDSPRING));
        assert_eq!(tables.mobj_by_doomednum(-1), None);
        assert_eq!(tables.state_ident(StateNum::NULL), Some("S_NULL"));
        assert_eq!(tables.mobj_ident(MobjType::FIRSTFREESLOT), None);
    }
}
