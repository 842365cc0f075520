//! Plain text listings of the tables for the terminal.

use crate::cli::ListKind;
use kartinfo::defs::{FRACUNIT, MapObjFlag};
use kartinfo::info::SFX_NAMES;
use kartinfo::{
    ChainEnd, InfoError, InfoTables, MobjType, SfxNum, SkinColorNum, SlotKind, SpriteNum, State,
    StateNum, TranslationKind,
};
use std::fmt::Write;

fn state_name(tables: &InfoTables, state: StateNum) -> String {
    tables
        .state_ident(state)
        .map(str::to_string)
        .unwrap_or_else(|| state.0.to_string())
}

fn sound_name(sound: SfxNum) -> String {
    SFX_NAMES
        .get(sound.index())
        .map(|s| s.to_string())
        .unwrap_or_else(|| sound.0.to_string())
}

fn sprite_name(tables: &InfoTables, sprite: SpriteNum) -> String {
    tables
        .sprite(sprite)
        .map(|s| format!("SPR_{s}"))
        .unwrap_or_else(|| sprite.0.to_string())
}

fn state_row(tables: &InfoTables, state: &State) -> String {
    format!(
        "{:<8} {:>3}{} {:>4} {:<18} {:<22} {} {}",
        sprite_name(tables, state.sprite),
        state.frame_index(),
        if state.frame & !0xff != 0 {
            format!("|{:#x}", state.frame & !0xff)
        } else {
            String::new()
        },
        state.tics,
        state.action.to_string(),
        state_name(tables, state.next_state),
        state.var1,
        state.var2
    )
}

/// Every row in use in one table
pub fn list(tables: &InfoTables, kind: ListKind) -> String {
    let slots = tables.free_slots();
    let mut out = String::new();
    match kind {
        ListKind::Sprites => {
            let end = SpriteNum::FIRSTFREESLOT.index() + slots.used(SlotKind::Sprite);
            for (i, name) in tables.sprnames[..end].iter().enumerate() {
                let _ = writeln!(out, "{i:>5} SPR_{name}");
            }
        }
        ListKind::States => {
            let end = StateNum::FIRSTFREESLOT.index() + slots.used(SlotKind::State);
            for (i, state) in tables.states[..end].iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{i:>5} {:<24} {}",
                    state_name(tables, StateNum(i as u16)),
                    state_row(tables, state)
                );
            }
        }
        ListKind::Objects => {
            let end = MobjType::FIRSTFREESLOT.index() + slots.used(SlotKind::MobjType);
            for (i, info) in tables.mobjinfo[..end].iter().enumerate() {
                let kind = MobjType(i as u16);
                let _ = writeln!(
                    out,
                    "{i:>5} {:<24} {:>5} {}",
                    tables.mobj_ident(kind).unwrap_or("?"),
                    info.doomednum,
                    state_name(tables, info.spawnstate)
                );
            }
        }
        ListKind::Colors => {
            for i in 0..tables.num_skincolors().index() {
                let color = SkinColorNum(i as u16);
                if let Some(c) = tables.skincolor(color) {
                    let _ = writeln!(
                        out,
                        "{i:>5} {:<24} {:<16} {}",
                        tables.skincolor_ident(color).unwrap_or("?"),
                        c.name,
                        if c.accessible { "" } else { "hidden" }
                    );
                }
            }
        }
    }
    out
}

pub fn object(tables: &InfoTables, kind: MobjType) -> Result<String, InfoError> {
    let info = tables.mobjinfo(kind).ok_or_else(|| {
        InfoError::InvalidReference(format!("Object {} does not exist", kind.0))
    })?;
    let mut out = String::new();
    let _ = writeln!(out, "{}", tables.mobj_ident(kind).unwrap_or("?"));
    let _ = writeln!(out, "  doomednum     {}", info.doomednum);
    let _ = writeln!(out, "  spawnhealth   {}", info.spawnhealth);
    let _ = writeln!(out, "  reactiontime  {}", info.reactiontime);
    let _ = writeln!(out, "  painchance    {}", info.painchance);
    for (field, state) in info.state_fields() {
        let _ = writeln!(out, "  {field:<13} {}", state_name(tables, state));
    }
    for (field, sound) in info.sound_fields() {
        let _ = writeln!(out, "  {field:<13} {}", sound_name(sound));
    }
    let _ = writeln!(out, "  speed         {}", info.speed);
    let _ = writeln!(out, "  radius        {}", info.radius);
    let _ = writeln!(out, "  height        {}", info.height);
    let _ = writeln!(out, "  dispoffset    {}", info.dispoffset);
    let _ = writeln!(
        out,
        "  mass          {} ({}*FRACUNIT)",
        info.mass,
        info.mass as f32 / FRACUNIT as f32
    );
    let _ = writeln!(out, "  damage        {}", info.damage);
    let _ = writeln!(
        out,
        "  flags         {}",
        MapObjFlag::names(info.flags).join("|")
    );
    Ok(out)
}

pub fn state_chain(tables: &InfoTables, start: StateNum) -> Result<String, InfoError> {
    let chain = tables.state_chain(start)?;
    let mut out = String::new();
    for state in chain.states.iter() {
        if let Some(st) = tables.state(*state) {
            let _ = writeln!(
                out,
                "{:<24} {}",
                state_name(tables, *state),
                state_row(tables, st)
            );
        }
    }
    let end = match chain.end {
        ChainEnd::Null => "removed at S_NULL".to_string(),
        ChainEnd::Hold(s) => format!("holds on {}", state_name(tables, s)),
        ChainEnd::Loop(s) => format!("loops to {}", state_name(tables, s)),
    };
    let _ = writeln!(out, "{} tics, {end}", chain.tics);
    Ok(out)
}

pub fn color(tables: &InfoTables, color: SkinColorNum, start: u8) -> Result<String, InfoError> {
    let c = tables.skincolor(color).ok_or(InfoError::BadColor(color))?;
    let map = tables.translation(TranslationKind::Skin, color, start)?;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} \"{}\"",
        tables.skincolor_ident(color).unwrap_or("?"),
        c.name
    );
    let _ = writeln!(
        out,
        "  ramp        {}",
        c.ramp.map(|r| r.to_string()).join(",")
    );
    let _ = writeln!(
        out,
        "  invcolor    {} shade {}",
        tables.skincolor_ident(c.invcolor).unwrap_or("?"),
        c.invshade
    );
    let _ = writeln!(out, "  chatcolor   {:?}", c.chatcolor);
    let _ = writeln!(out, "  accessible  {}", c.accessible);
    let start = start as usize;
    let end = (start + 16).min(256);
    let _ = writeln!(
        out,
        "  translation {start}..{end} -> {:?}",
        &map[start..end]
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_include_allocations() {
        let mut tables = InfoTables::new();
        tables.apply_soc(
            "FREESLOT\nMT_DUD\nSKINCOLOR_SPEARMINT\n\n\
             SKINCOLOR SKINCOLOR_SPEARMINT\nNAME = Spearmint\n",
        );
        let objects = list(&tables, ListKind::Objects);
        assert!(objects.contains("MT_PLAYER"));
        assert!(objects.contains("MT_DUD"));
        let colors = list(&tables, ListKind::Colors);
        assert!(colors.contains("SKINCOLOR_SPEARMINT"));
        assert!(colors.contains("Spearmint"));
        let sprites = list(&tables, ListKind::Sprites);
        assert!(sprites.contains("SPR_JAWZ"));
        assert!(!sprites.contains("F001"));
    }

    #[test]
    fn object_fields() {
        let tables = InfoTables::new();
        let out = object(&tables, MobjType::YELLOWSPRING).unwrap();
        assert!(out.contains("doomednum     550"));
        assert!(out.contains("MF_SPRING"));
        assert!(out.contains("sfx_spring"));
    }

    #[test]
    fn chain_summary() {
        let tables = InfoTables::new();
        let out = state_chain(&tables, StateNum::KART_STND1).unwrap();
        assert!(out.ends_with("2 tics, loops to S_KART_STND1\n"));
    }

    #[test]
    fn color_translation() {
        let tables = InfoTables::new();
        let out = color(&tables, SkinColorNum::WHITE, 96).unwrap();
        assert!(out.starts_with("SKINCOLOR_WHITE \"White\""));
        assert!(out.contains("SKINCOLOR_BLACK"));
        assert!(color(&tables, SkinColorNum::NONE, 96).is_err());
    }
}
