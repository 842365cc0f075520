//! Plain text table patches.
//!
//! A patch is a run of blocks separated by blank lines. The first line of a
//! block names what it edits, every following line is a `KEY = VALUE` pair:
//!
//! ```text,ignore
//! FREESLOT
//! MT_DUD
//! S_DUD1
//!
//! STATE S_DUD1
//! SPRITENAME = SPR_JAWZ
//! SPRITEFRAME = B|FF_FULLBRIGHT|FF_TRANS30
//! DURATION = 4
//! NEXT = S_DUD1
//!
//! OBJECT MT_DUD
//! MAPTHINGNUM = 4000
//! SPAWNSTATE = S_DUD1
//! RADIUS = 16*FRACUNIT
//! FLAGS = MF_SPECIAL|MF_NOGRAVITY
//! ```
//!
//! Keywords ignore case and `#` starts a comment. A bad line is reported and
//! skipped, the rest of the patch still applies.

use crate::defs::{
    COLORRAMPSIZE, ChatColor, FF_TRANSSHIFT, FRACUNIT, FrameFlag, MAXCOLORNAME, MapObjFlag,
};
use crate::freeslot::SlotKind;
use crate::info::{MobjType, SFX_NAMES, SfxNum, SkinColorNum, SpriteNum, StateNum};
use crate::{Action, InfoTables};
use log::{debug, info, warn};
use std::str::FromStr;

/// Tics per second
pub const TICRATE: i32 = 35;

/// What `InfoTables::apply_soc` changed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SocSummary {
    pub freeslots: usize,
    pub states: usize,
    pub objects: usize,
    pub skincolors: usize,
    /// Every line that was skipped, with its line number
    pub warnings: Vec<String>,
}

impl SocSummary {
    fn warn(&mut self, line: usize, msg: impl AsRef<str>) {
        let msg = format!("line {}: {}", line, msg.as_ref());
        warn!("{msg}");
        self.warnings.push(msg);
    }
}

struct Block<'a> {
    line: usize,
    header: &'a str,
    arg: &'a str,
    body: Vec<(usize, &'a str)>,
}

fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if raw.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        match current.as_mut() {
            Some(block) => block.body.push((i + 1, line)),
            None => {
                let (header, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                current = Some(Block {
                    line: i + 1,
                    header,
                    arg: arg.trim(),
                    body: Vec::new(),
                });
            }
        }
    }
    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

/// Split `KEY = VALUE`, or `KEY VALUE`, returning the key in upper case
fn key_value(line: &str) -> (String, &str) {
    let (key, value) = line
        .split_once('=')
        .or_else(|| line.split_once(char::is_whitespace))
        .unwrap_or((line, ""));
    (key.trim().to_ascii_uppercase(), value.trim())
}

fn parse_int(s: &str) -> Option<i32> {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, s),
    };
    let n = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    let n = if neg { -n } else { n };
    if n < i32::MIN as i64 || n > u32::MAX as i64 {
        return None;
    }
    Some(n as u32 as i32)
}

/// Sprite frame letters, `A` is frame 0
fn frame_letter(s: &str) -> Option<i32> {
    match s.as_bytes() {
        [c @ b'A'..=b'Z'] => Some((c - b'A') as i32),
        [c @ b'a'..=b'z'] => Some((c - b'a') as i32 + 36),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_uppercase().as_str() {
        "TRUE" | "YES" | "ON" | "1" => Some(true),
        "FALSE" | "NO" | "OFF" | "0" => Some(false),
        _ => None,
    }
}

impl InfoTables {
    /// Apply a text patch to the tables. Lines that can't be applied are
    /// logged and listed in the summary's warnings.
    pub fn apply_soc(&mut self, text: &str) -> SocSummary {
        let mut summary = SocSummary::default();
        for block in blocks(text) {
            match block.header.to_ascii_uppercase().as_str() {
                "FREESLOT" => self.soc_freeslot(&block, &mut summary),
                "STATE" | "FRAME" => self.soc_state(&block, &mut summary),
                "OBJECT" | "MOBJ" | "THING" => self.soc_object(&block, &mut summary),
                "SKINCOLOR" => self.soc_skincolor(&block, &mut summary),
                _ => summary.warn(
                    block.line,
                    format!("Unknown block {}, skipping", block.header),
                ),
            }
        }
        info!(
            "Patch applied: {} free slots, {} states, {} objects, {} skin colors, {} warnings",
            summary.freeslots,
            summary.states,
            summary.objects,
            summary.skincolors,
            summary.warnings.len()
        );
        summary
    }

    fn soc_freeslot(&mut self, block: &Block, summary: &mut SocSummary) {
        let names = std::iter::once((block.line, block.arg)).chain(block.body.iter().copied());
        for (line, text) in names {
            for name in text.split(|c: char| c == ',' || c.is_whitespace()) {
                if name.is_empty() {
                    continue;
                }
                match self.freeslot(name) {
                    Ok(_) => summary.freeslots += 1,
                    Err(e) => summary.warn(line, e.to_string()),
                }
            }
        }
    }

    fn soc_state(&mut self, block: &Block, summary: &mut SocSummary) {
        let Some(num) = self.soc_target(block, SlotKind::State, summary) else {
            return;
        };
        for &(line, text) in block.body.iter() {
            let (key, value) = key_value(text);
            let result = match key.as_str() {
                "SPRITENAME" | "SPRITE" => self.sprite_value(value).map(|v| {
                    self.states[num].sprite = v;
                }),
                "SPRITEFRAME" | "FRAME" => self.frame_value(value).map(|v| {
                    self.states[num].frame = v as u32;
                }),
                "DURATION" | "TICS" => self.resolve(value).map(|v| {
                    self.states[num].tics = v;
                }),
                "NEXT" => self.state_value(value).map(|v| {
                    self.states[num].next_state = v;
                }),
                "ACTION" => Action::from_str(value).map(|v| {
                    self.states[num].action = v;
                }),
                "VAR1" => self.resolve(value).map(|v| {
                    self.states[num].var1 = v;
                }),
                "VAR2" => self.resolve(value).map(|v| {
                    self.states[num].var2 = v;
                }),
                _ => Err(format!("Unknown state field {key}")),
            };
            if let Err(e) = result {
                summary.warn(line, e);
            }
        }
        debug!("Patched state {num}");
        summary.states += 1;
    }

    fn soc_object(&mut self, block: &Block, summary: &mut SocSummary) {
        let Some(num) = self.soc_target(block, SlotKind::MobjType, summary) else {
            return;
        };
        for &(line, text) in block.body.iter() {
            let (key, value) = key_value(text);
            let result = match key.as_str() {
                "MAPTHINGNUM" | "DOOMEDNUM" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].doomednum = v;
                }),
                "SPAWNHEALTH" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].spawnhealth = v;
                }),
                "REACTIONTIME" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].reactiontime = v;
                }),
                "PAINCHANCE" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].painchance = v;
                }),
                "DISPOFFSET" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].dispoffset = v;
                }),
                "MASS" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].mass = v;
                }),
                "DAMAGE" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].damage = v;
                }),
                "FLAGS" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].flags = v as u32;
                }),
                "SPEED" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].speed = v as f32 / FRACUNIT as f32;
                }),
                "RADIUS" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].radius = v as f32 / FRACUNIT as f32;
                }),
                "HEIGHT" => self.resolve(value).map(|v| {
                    self.mobjinfo[num].height = v as f32 / FRACUNIT as f32;
                }),
                "SPAWNSTATE" | "SEESTATE" | "PAINSTATE" | "MELEESTATE" | "MISSILESTATE"
                | "DEATHSTATE" | "XDEATHSTATE" | "RAISESTATE" => {
                    self.state_value(value).map(|v| {
                        let info = &mut self.mobjinfo[num];
                        let field = match key.as_str() {
                            "SPAWNSTATE" => &mut info.spawnstate,
                            "SEESTATE" => &mut info.seestate,
                            "PAINSTATE" => &mut info.painstate,
                            "MELEESTATE" => &mut info.meleestate,
                            "MISSILESTATE" => &mut info.missilestate,
                            "DEATHSTATE" => &mut info.deathstate,
                            "XDEATHSTATE" => &mut info.xdeathstate,
                            _ => &mut info.raisestate,
                        };
                        *field = v;
                    })
                }
                "SEESOUND" | "ATTACKSOUND" | "PAINSOUND" | "DEATHSOUND" | "ACTIVESOUND" => {
                    self.sound_value(value).map(|v| {
                        let info = &mut self.mobjinfo[num];
                        let field = match key.as_str() {
                            "SEESOUND" => &mut info.seesound,
                            "ATTACKSOUND" => &mut info.attacksound,
                            "PAINSOUND" => &mut info.painsound,
                            "DEATHSOUND" => &mut info.deathsound,
                            _ => &mut info.activesound,
                        };
                        *field = v;
                    })
                }
                _ => Err(format!("Unknown object field {key}")),
            };
            if let Err(e) = result {
                summary.warn(line, e);
            }
        }
        debug!("Patched object {num}");
        summary.objects += 1;
    }

    fn soc_skincolor(&mut self, block: &Block, summary: &mut SocSummary) {
        let Some(num) = self.soc_target(block, SlotKind::SkinColor, summary) else {
            return;
        };
        for &(line, text) in block.body.iter() {
            let (key, value) = key_value(text);
            let result = match key.as_str() {
                "NAME" => {
                    let mut name = value.to_string();
                    if name.len() > MAXCOLORNAME {
                        let mut end = MAXCOLORNAME;
                        while !name.is_char_boundary(end) {
                            end -= 1;
                        }
                        name.truncate(end);
                        summary.warn(line, format!("Skin color name cut to {name}"));
                    }
                    self.skincolors[num].name = name.into();
                    Ok(())
                }
                "RAMP" => self.ramp_value(value).map(|ramp| {
                    self.skincolors[num].ramp = ramp;
                }),
                "INVCOLOR" => self.color_value(value).map(|v| {
                    self.skincolors[num].invcolor = v;
                }),
                "INVSHADE" => self.resolve(value).and_then(|v| {
                    if (0..COLORRAMPSIZE as i32).contains(&v) {
                        self.skincolors[num].invshade = v as u8;
                        Ok(())
                    } else {
                        Err(format!("Inverse shade {v} is outside the ramp"))
                    }
                }),
                "CHATCOLOR" => ChatColor::from_str(value)
                    .map(|v| {
                        self.skincolors[num].chatcolor = v;
                    })
                    .map_err(|_| format!("Unknown chat color {value}")),
                "ACCESSIBLE" => parse_bool(value)
                    .map(|v| {
                        self.skincolors[num].accessible = v;
                    })
                    .ok_or_else(|| format!("Expected true or false, got {value}")),
                _ => Err(format!("Unknown skin color field {key}")),
            };
            if let Err(e) = result {
                summary.warn(line, e);
            }
        }
        debug!("Patched skin color {num}");
        summary.skincolors += 1;
    }

    /// Table index named on a block's first line
    fn soc_target(&self, block: &Block, kind: SlotKind, summary: &mut SocSummary) -> Option<usize> {
        let arg = block.arg;
        let found = match parse_int(arg) {
            Some(n) => usize::try_from(n).ok(),
            None => match kind {
                SlotKind::State => self.state_by_name(arg).map(usize::from),
                SlotKind::MobjType => self.mobj_by_name(arg).map(usize::from),
                SlotKind::SkinColor => self.skincolor_by_ident(arg).map(usize::from),
                SlotKind::Sprite => self.sprite_by_name(arg).map(usize::from),
            },
        };
        let end = match kind {
            SlotKind::State => StateNum::NUMSTATES.index(),
            SlotKind::MobjType => MobjType::NUMMOBJTYPES.index(),
            SlotKind::SkinColor => self.num_skincolors as usize,
            SlotKind::Sprite => SpriteNum::NUMSPRITES.index(),
        };
        // Skin color 0 is the "no color" entry and can't be edited
        let start = usize::from(kind == SlotKind::SkinColor);
        match found {
            Some(n) if (start..end).contains(&n) => Some(n),
            _ => {
                summary.warn(
                    block.line,
                    format!("No {:?} named {:?}, skipping block", kind, arg),
                );
                None
            }
        }
    }

    /// Evaluate a patch value: numbers, table identifiers, flag names and
    /// `N*FRACUNIT`, or'd together with `|`
    pub fn resolve(&self, expr: &str) -> Result<i32, String> {
        self.resolve_with(expr, |_| None)
    }

    fn resolve_with(&self, expr: &str, extra: impl Fn(&str) -> Option<i32>) -> Result<i32, String> {
        let mut value = 0;
        for term in expr.split('|') {
            let term = term.trim();
            if term.is_empty() {
                return Err(format!("Missing value in {expr:?}"));
            }
            value |= match extra(term) {
                Some(v) => v,
                None => self.resolve_term(term)?,
            };
        }
        Ok(value)
    }

    fn resolve_term(&self, term: &str) -> Result<i32, String> {
        if let Some((lhs, rhs)) = term.split_once('*') {
            let lhs = self.resolve_term(lhs.trim())?;
            let rhs = self.resolve_term(rhs.trim())?;
            return lhs
                .checked_mul(rhs)
                .ok_or_else(|| format!("{term} is too large"));
        }
        if let Some(n) = parse_int(term) {
            return Ok(n);
        }

        let upper = term.to_ascii_uppercase();
        match upper.as_str() {
            "FRACUNIT" => return Ok(FRACUNIT),
            "TICRATE" => return Ok(TICRATE),
            _ => {}
        }
        if let Ok(flag) = MapObjFlag::from_str(&upper) {
            return Ok(flag as i32);
        }
        if let Ok(flag) = FrameFlag::from_str(&upper) {
            return Ok(flag as i32);
        }
        if let Some(level) = upper.strip_prefix("FF_TRANS") {
            return match level.parse::<i32>() {
                Ok(n) if n % 10 == 0 && (10..=90).contains(&n) => Ok((n / 10) << FF_TRANSSHIFT),
                _ => Err(format!("Unknown translucency {term}")),
            };
        }
        if upper.starts_with("SFX_") {
            return SFX_NAMES
                .iter()
                .position(|n| n.eq_ignore_ascii_case(term))
                .map(|i| i as i32)
                .ok_or_else(|| format!("Unknown sound {term}"));
        }
        let found = match SlotKind::from_name(&upper) {
            Some((SlotKind::Sprite, _)) => self.sprite_by_name(&upper).map(|n| n.0),
            Some((SlotKind::State, _)) => self.state_by_name(&upper).map(|n| n.0),
            Some((SlotKind::MobjType, _)) => self.mobj_by_name(&upper).map(|n| n.0),
            Some((SlotKind::SkinColor, _)) => self.skincolor_by_ident(&upper).map(|n| n.0),
            None => None,
        };
        found
            .map(i32::from)
            .ok_or_else(|| format!("Unknown value {term}"))
    }

    fn frame_value(&self, expr: &str) -> Result<i32, String> {
        self.resolve_with(expr, frame_letter)
    }

    fn sprite_value(&self, expr: &str) -> Result<SpriteNum, String> {
        // A bare prefix such as JAWZ is a sprite name, not a lookup
        if let Some(n) = self.sprite_by_name(expr) {
            return Ok(n);
        }
        let v = self.resolve(expr)?;
        if (0..SpriteNum::NUMSPRITES.0 as i32).contains(&v) {
            Ok(SpriteNum(v as u16))
        } else {
            Err(format!("Sprite {v} is out of range"))
        }
    }

    fn state_value(&self, expr: &str) -> Result<StateNum, String> {
        let v = self.resolve(expr)?;
        if (0..StateNum::NUMSTATES.0 as i32).contains(&v) {
            Ok(StateNum(v as u16))
        } else {
            Err(format!("State {v} is out of range"))
        }
    }

    fn sound_value(&self, expr: &str) -> Result<SfxNum, String> {
        let v = self.resolve(expr)?;
        if (0..SFX_NAMES.len() as i32).contains(&v) {
            Ok(SfxNum(v as u16))
        } else {
            Err(format!("Sound {v} is out of range"))
        }
    }

    fn color_value(&self, expr: &str) -> Result<SkinColorNum, String> {
        let v = self.resolve(expr)?;
        if (0..self.num_skincolors as i32).contains(&v) {
            Ok(SkinColorNum(v as u16))
        } else {
            Err(format!("Skin color {v} is not in use"))
        }
    }

    fn ramp_value(&self, expr: &str) -> Result<[u8; COLORRAMPSIZE], String> {
        let entries: Vec<&str> = expr.split(',').map(str::trim).collect();
        if entries.len() != COLORRAMPSIZE {
            return Err(format!(
                "Ramp needs {COLORRAMPSIZE} entries, found {}",
                entries.len()
            ));
        }
        let mut ramp = [0; COLORRAMPSIZE];
        for (slot, entry) in ramp.iter_mut().zip(entries) {
            let v = self.resolve(entry)?;
            *slot = u8::try_from(v).map_err(|_| format!("Palette index {v} is out of range"))?;
        }
        Ok(ramp)
    }
}

#[cfg(test)]
mod tests {
    use super::{blocks, parse_int};
    use crate::defs::{ChatColor, FRACUNIT, FrameFlag, MapObjFlag};
    use crate::info::{MobjType, SfxNum, SkinColorNum, SpriteNum, StateNum};
    use crate::{Action, InfoTables};

    const DUD: &str = "\
FREESLOT
MT_DUD
S_DUD1, S_DUD2
SPR_DUDZ

# a harmless jawz
STATE S_DUD1
SPRITENAME = SPR_DUDZ
SPRITEFRAME = B|FF_FULLBRIGHT|FF_TRANS30
DURATION = 4
NEXT = S_DUD2
ACTION = A_PlaySound
VAR1 = sfx_jawz

State S_DUD2
SpriteName = DUDZ
SpriteFrame = C
Duration = 2*TICRATE
Next = S_DUD1

OBJECT MT_DUD
MAPTHINGNUM = 4000
SPAWNSTATE = S_DUD1
DEATHSTATE = S_EXPLOSION1
DEATHSOUND = sfx_bomb
SPAWNHEALTH = 1
SPEED = 8*FRACUNIT
RADIUS = 16*FRACUNIT
HEIGHT = 32768
FLAGS = MF_SPECIAL|MF_NOGRAVITY # bobs
";

    #[test]
    fn numbers() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-1"), Some(-1));
        assert_eq!(parse_int("0x8000"), Some(0x8000));
        assert_eq!(parse_int("0xFFFFFFFF"), Some(-1));
        assert_eq!(parse_int("S_NULL"), None);
    }

    #[test]
    fn values() {
        let tables = InfoTables::new();
        assert_eq!(tables.resolve("3*FRACUNIT"), Ok(3 * FRACUNIT));
        assert_eq!(
            tables.resolve("MF_SOLID|MF_SPRING"),
            Ok((MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32) as i32)
        );
        assert_eq!(tables.resolve("S_JAWZ1"), Ok(StateNum::JAWZ1.0 as i32));
        assert_eq!(tables.resolve("sfx_spring"), Ok(SfxNum::SPRING.0 as i32));
        assert_eq!(tables.resolve("FF_TRANS50"), Ok(5 << 16));
        assert!(tables.resolve("FF_TRANS55").is_err());
        assert!(tables.resolve("MF_").is_err());
        assert!(tables.resolve("1|").is_err());
    }

    #[test]
    fn block_split() {
        let found = blocks("# lead comment\nFREESLOT\nMT_A\n# note\nMT_B\n\n\nSTATE 5\nTICS 1\n");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].header, "FREESLOT");
        assert_eq!(found[0].body.len(), 2);
        assert_eq!(found[1].arg, "5");
        assert_eq!(found[1].body, vec![(9, "TICS 1")]);
    }

    #[test]
    fn new_object() {
        let mut tables = InfoTables::new();
        let summary = tables.apply_soc(DUD);
        assert!(summary.warnings.is_empty(), "{:?}", summary.warnings);
        assert_eq!(summary.freeslots, 4);
        assert_eq!(summary.states, 2);
        assert_eq!(summary.objects, 1);

        let dud1 = tables.state_by_name("S_DUD1").unwrap();
        let dud2 = tables.state_by_name("S_DUD2").unwrap();
        let dudz = tables.sprite_by_name("DUDZ").unwrap();
        let st = tables.states[dud1.index()];
        assert_eq!(st.sprite, dudz);
        assert_eq!(st.frame_index(), 1);
        assert!(st.has_flag(FrameFlag::Fullbright));
        assert_eq!(st.translucency(), 3);
        assert_eq!(st.next_state, dud2);
        assert_eq!(st.action, Action::PlaySound);
        assert_eq!(st.var1, SfxNum::JAWZ.0 as i32);
        assert_eq!(tables.states[dud2.index()].tics, 70);
        assert_eq!(tables.states[dud2.index()].sprite, dudz);

        let mt = tables.mobj_by_doomednum(4000).unwrap();
        assert_eq!(Some(mt), tables.mobj_by_name("MT_DUD"));
        let info = &tables.mobjinfo[mt.index()];
        assert_eq!(info.spawnstate, dud1);
        assert_eq!(info.deathstate, StateNum::EXPLOSION1);
        assert_eq!(info.deathsound, SfxNum::BOMB);
        assert_eq!(info.speed, 8.0);
        assert_eq!(info.radius, 16.0);
        assert_eq!(info.height, 0.5);
        assert_eq!(
            info.flags,
            MapObjFlag::Special as u32 | MapObjFlag::Nogravity as u32
        );
    }

    #[test]
    fn edit_builtin() {
        let mut tables = InfoTables::new();
        let summary = tables.apply_soc("OBJECT MT_BANANA\nSPAWNHEALTH = 3\n\nSTATE 0\nDURATION 5\n");
        assert_eq!(summary.objects, 1);
        assert_eq!(summary.states, 1);
        assert_eq!(tables.mobjinfo[MobjType::BANANA.index()].spawnhealth, 3);
        assert_eq!(tables.states[StateNum::NULL.index()].tics, 5);
        assert_eq!(tables.states[StateNum::NULL.index()].sprite, SpriteNum::UNKN);
    }

    #[test]
    fn new_skincolor() {
        let mut tables = InfoTables::new();
        let summary = tables.apply_soc(
            "FREESLOT\nSKINCOLOR_SPEARMINT\n\n\
             SKINCOLOR SKINCOLOR_SPEARMINT\n\
             NAME = Spearmint\n\
             RAMP = 0,208,208,209,209,210,210,211,211,212,212,213,213,214,214,215\n\
             INVCOLOR = SKINCOLOR_PINK\n\
             INVSHADE = 6\n\
             CHATCOLOR = V_GREENMAP\n\
             ACCESSIBLE = true\n",
        );
        assert!(summary.warnings.is_empty(), "{:?}", summary.warnings);
        let mint = tables.skincolor_by_name("spearmint").unwrap();
        assert_eq!(mint, SkinColorNum::FIRSTFREESLOT);
        let color = &tables.skincolors[mint.index()];
        assert_eq!(color.ramp[1], 208);
        assert_eq!(color.invcolor, SkinColorNum::PINK);
        assert_eq!(color.invshade, 6);
        assert_eq!(color.chatcolor, ChatColor::Green);
        assert!(color.accessible);
    }

    #[test]
    fn bad_lines_are_skipped() {
        let mut tables = InfoTables::new();
        let summary = tables.apply_soc(
            "OBJECT MT_SPB\nSPAWNHEALTH = 9\nWOBBLE = 1\nSEESOUND = sfx_nope\n\n\
             OBJECT MT_NOTHING\nSPAWNHEALTH = 2\n\n\
             SKINCOLOR SKINCOLOR_NONE\nNAME = Nothing\n\n\
             SPRITE SPR_JAWZ\n",
        );
        assert_eq!(summary.objects, 1);
        assert_eq!(summary.skincolors, 0);
        assert_eq!(summary.warnings.len(), 5);
        assert!(summary.warnings[0].starts_with("line 3:"));
        assert_eq!(tables.mobjinfo[MobjType::SPB.index()].spawnhealth, 9);
        assert_eq!(tables.skincolors[0].name, "None");
    }
}
