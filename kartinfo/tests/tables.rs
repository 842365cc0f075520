use kartinfo::defs::MapObjFlag;
use kartinfo::{
    Action, ChainEnd, InfoError, InfoTables, MobjType, ResetFlag, SkinColorNum, SpriteNum,
    StateNum, TranslationKind,
};

const ORBITER: &str = "\
FREESLOT
SPR_ORBT
S_ORBITER1
S_ORBITER2
MT_ORBITER
SKINCOLOR_SEAFOAM

STATE S_ORBITER1
SPRITENAME = ORBT
SPRITEFRAME = A|FF_ANIMATE
DURATION = 8
VAR1 = 3
VAR2 = 2
NEXT = S_ORBITER2

STATE S_ORBITER2
SPRITENAME = ORBT
SPRITEFRAME = E
DURATION = -1
NEXT = S_ORBITER1

OBJECT MT_ORBITER
MAPTHINGNUM = 3999
SPAWNSTATE = S_ORBITER1
DEATHSTATE = S_EXPLOSION1
RADIUS = 24*FRACUNIT
HEIGHT = 24*FRACUNIT
FLAGS = MF_SPECIAL|MF_NOGRAVITY|MF_FLOAT

SKINCOLOR SKINCOLOR_SEAFOAM
NAME = Seafoam
RAMP = 0,208,208,209,209,210,210,211,211,212,212,213,213,214,214,215
INVCOLOR = SKINCOLOR_RED
INVSHADE = 8
CHATCOLOR = V_AQUAMAP
ACCESSIBLE = yes
";

#[test]
fn patch_walk_and_reset() {
    let mut tables = InfoTables::new();
    tables.backup_tables().unwrap();

    let summary = tables.apply_soc(ORBITER);
    assert!(summary.warnings.is_empty(), "{:?}", summary.warnings);
    assert_eq!(summary.freeslots, 5);
    assert_eq!(summary.skincolors, 1);
    assert!(tables.validate().is_empty());

    let orbiter = tables.mobj_by_doomednum(3999).unwrap();
    assert_eq!(orbiter, MobjType::FIRSTFREESLOT);
    let info = tables.mobjinfo(orbiter).unwrap();
    assert_eq!(info.radius, 24.0);
    assert_ne!(info.flags & MapObjFlag::Float as u32, 0);

    let chain = tables.state_chain(info.spawnstate).unwrap();
    let second = tables.state_by_name("S_ORBITER2").unwrap();
    assert_eq!(chain.states.len(), 2);
    assert_eq!(chain.end, ChainEnd::Hold(second));
    assert_eq!(chain.tics, 8);

    let first = tables.state(chain.states[0]).unwrap();
    assert_eq!(kartinfo::animation_frame(first, 5), 2);
    assert_eq!(
        tables.sprite(first.sprite).map(|s| s.as_str()),
        Some("ORBT")
    );
    assert_eq!(first.sprite, SpriteNum::FIRSTFREESLOT);

    let seafoam = tables.skincolor_by_name("SEAFOAM").unwrap();
    let map = tables
        .translation(TranslationKind::Inverse, seafoam, 96)
        .unwrap();
    let red = tables.skincolor(SkinColorNum::RED).unwrap();
    assert_eq!(map[96..112], red.ramp);

    tables.reset_data(ResetFlag::ALL).unwrap();
    assert_eq!(tables.mobj_by_doomednum(3999), None);
    assert_eq!(tables.mobj_by_name("MT_ORBITER"), Some(orbiter));
    assert_eq!(tables.state(second).map(|s| s.tics), Some(0));
    assert_eq!(tables.skincolor_by_name("Seafoam"), None);
    // The slot is still allocated, so the count keeps covering it
    assert_eq!(tables.num_skincolors(), SkinColorNum(seafoam.0 + 1));
    assert_eq!(tables.sprite_by_name("ORBT"), Some(SpriteNum::FIRSTFREESLOT));
    assert!(tables.validate().is_empty());
}

#[test]
fn edited_builtins_roll_back() {
    let mut tables = InfoTables::new();
    tables.backup_tables().unwrap();
    tables.apply_soc("STATE S_JAWZ1\nACTION = NULL\nDURATION = 0\nNEXT = S_JAWZ1\n");
    assert_eq!(
        tables.validate(),
        vec![InfoError::ZeroTicCycle(StateNum::JAWZ1)]
    );

    tables.reset_data(ResetFlag::States as u32).unwrap();
    let jawz = tables.state(StateNum::JAWZ1).unwrap();
    assert_eq!(jawz.action, Action::JawzChase);
    assert_eq!(jawz.next_state, StateNum::JAWZ2);
    assert!(tables.validate().is_empty());
}

#[test]
fn reset_without_backup() {
    let mut tables = InfoTables::new();
    tables.apply_soc("OBJECT MT_SPB\nSPAWNHEALTH = 2\n");
    assert_eq!(
        tables.reset_data(ResetFlag::MobjInfo as u32),
        Err(InfoError::NoBackup)
    );
    assert_eq!(tables.mobjinfo(MobjType::SPB).map(|m| m.spawnhealth), Some(2));
}
