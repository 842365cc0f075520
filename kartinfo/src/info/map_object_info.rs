// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.

use super::{MapObjInfo, MobjType, SfxNum, StateNum};
use crate::defs::{MapObjFlag, NUMMOBJFREESLOTS};

impl MobjType {
    pub const NULL: MobjType = MobjType(0);
    pub const UNKNOWN: MobjType = MobjType(1);
    pub const THOK: MobjType = MobjType(2);
    pub const PLAYER: MobjType = MobjType(3);
    pub const SIGN: MobjType = MobjType(4);
    pub const RANDOMITEM: MobjType = MobjType(5);
    pub const BANANA: MobjType = MobjType(6);
    pub const BANANA_SHIELD: MobjType = MobjType(7);
    pub const ORBINAUT: MobjType = MobjType(8);
    pub const JAWZ: MobjType = MobjType(9);
    pub const SSMINE: MobjType = MobjType(10);
    pub const MINEEXPLOSION: MobjType = MobjType(11);
    pub const EGGMANITEM: MobjType = MobjType(12);
    pub const SPB: MobjType = MobjType(13);
    pub const THUNDERSHIELD: MobjType = MobjType(14);
    pub const HYUDORO: MobjType = MobjType(15);
    pub const POGOSPRING: MobjType = MobjType(16);
    pub const SINK: MobjType = MobjType(17);
    pub const SINK_SHIELD: MobjType = MobjType(18);
    pub const BALLHOG: MobjType = MobjType(19);
    pub const DRIFTSPARK: MobjType = MobjType(20);
    pub const DRIFTDUST: MobjType = MobjType(21);
    pub const SNEAKERTRAIL: MobjType = MobjType(22);
    pub const SMOKE: MobjType = MobjType(23);
    pub const EXPLODE: MobjType = MobjType(24);
    pub const SPARKLE: MobjType = MobjType(25);
    pub const YELLOWSPRING: MobjType = MobjType(26);
    pub const REDSPRING: MobjType = MobjType(27);
    pub const BLUESPRING: MobjType = MobjType(28);
    pub const FIRSTFREESLOT: MobjType = MobjType(NUM_BUILTIN_MOBJS as u16);
    pub const LASTFREESLOT: MobjType =
        MobjType((NUM_BUILTIN_MOBJS + NUMMOBJFREESLOTS - 1) as u16);
    pub const NUMMOBJTYPES: MobjType = MobjType((NUM_BUILTIN_MOBJS + NUMMOBJFREESLOTS) as u16);
}

pub const NUM_BUILTIN_MOBJS: usize = 29;

pub const MOBJ_NAMES: [&str; NUM_BUILTIN_MOBJS] = [
    "MT_NULL",
    "MT_UNKNOWN",
    "MT_THOK",
    "MT_PLAYER",
    "MT_SIGN",
    "MT_RANDOMITEM",
    "MT_BANANA",
    "MT_BANANA_SHIELD",
    "MT_ORBINAUT",
    "MT_JAWZ",
    "MT_SSMINE",
    "MT_MINEEXPLOSION",
    "MT_EGGMANITEM",
    "MT_SPB",
    "MT_THUNDERSHIELD",
    "MT_HYUDORO",
    "MT_POGOSPRING",
    "MT_SINK",
    "MT_SINK_SHIELD",
    "MT_BALLHOG",
    "MT_DRIFTSPARK",
    "MT_DRIFTDUST",
    "MT_SNEAKERTRAIL",
    "MT_SMOKE",
    "MT_EXPLODE",
    "MT_SPARKLE",
    "MT_YELLOWSPRING",
    "MT_REDSPRING",
    "MT_BLUESPRING",
];

pub const MOBJINFO: [MapObjInfo; NUM_BUILTIN_MOBJS] = [
    // MT_NULL
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::NULL,
        spawnhealth: 0,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 0,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 0.0,
        height: 0.0,
        dispoffset: 0,
        mass: 0,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: 0,
        raisestate: StateNum::NULL,
    },
    // MT_UNKNOWN
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::UNKNOWN,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 32.0,
        height: 64.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_THOK
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::THOK,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 32.0,
        height: 64.0,
        dispoffset: 0,
        mass: 16,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_PLAYER
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::KART_STND1,
        spawnhealth: 1,
        seestate: StateNum::KART_WALK1,
        seesound: SfxNum::NONE,
        reactiontime: 0,
        attacksound: SfxNum::NONE,
        painstate: StateNum::KART_PAIN,
        painchance: 255,
        painsound: SfxNum::KPAIN,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::KART_DEAD,
        xdeathstate: StateNum::KART_DEAD,
        deathsound: SfxNum::KDEATH,
        speed: 0.0,
        radius: 16.0,
        height: 48.0,
        dispoffset: 0,
        mass: 1000,
        damage: 0,
        activesound: SfxNum::DRIFT,
        flags: MapObjFlag::Solid as u32 | MapObjFlag::Shootable as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SIGN
    MapObjInfo {
        doomednum: 501,
        spawnstate: StateNum::SIGN1,
        spawnhealth: 1000,
        seestate: StateNum::SIGN_END,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::SIGN,
        speed: 0.0,
        radius: 8.0,
        height: 32.0,
        dispoffset: 0,
        mass: 16,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noclip as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_RANDOMITEM
    MapObjInfo {
        doomednum: 2000,
        spawnstate: StateNum::RANDOMITEM1,
        spawnhealth: 1,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 0,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::ITEMPOP1,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::ITPOP,
        speed: 0.0,
        radius: 36.0,
        height: 36.0,
        dispoffset: 1,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Slideme as u32 | MapObjFlag::Special as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Noclipheight as u32,
        raisestate: StateNum::NULL,
    },
    // MT_BANANA
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::BANANA,
        spawnhealth: 2,
        seestate: StateNum::NULL,
        seesound: SfxNum::TOSSED,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::BANANA_DEAD,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::PEEL,
        speed: 0.0,
        radius: 16.0,
        height: 32.0,
        dispoffset: 1,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32,
        raisestate: StateNum::NULL,
    },
    // MT_BANANA_SHIELD
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::BANANA,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::BANANA_DEAD,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 16.0,
        height: 32.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noclip as u32 | MapObjFlag::Noclipthing as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_ORBINAUT
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::ORBINAUT1,
        spawnhealth: 1,
        seestate: StateNum::NULL,
        seesound: SfxNum::TOSSED,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::ORBINAUT_DEAD,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 64.0,
        radius: 16.0,
        height: 32.0,
        dispoffset: 0,
        mass: 100,
        damage: 1,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32,
        raisestate: StateNum::NULL,
    },
    // MT_JAWZ
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::JAWZ1,
        spawnhealth: 1,
        seestate: StateNum::NULL,
        seesound: SfxNum::JAWZ,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::JAWZ_DEAD1,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 64.0,
        radius: 16.0,
        height: 32.0,
        dispoffset: 0,
        mass: 100,
        damage: 1,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SSMINE
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SSMINE1,
        spawnhealth: 1,
        seestate: StateNum::SSMINE_DEPLOY1,
        seesound: SfxNum::TOSSED,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::SSMINE_EXPLODE,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::MINE,
        speed: 0.0,
        radius: 16.0,
        height: 24.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32 | MapObjFlag::Grenadebounce as u32,
        raisestate: StateNum::NULL,
    },
    // MT_MINEEXPLOSION
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::MINEEXPLOSION1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 64.0,
        height: 64.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Nogravity as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Noblockmap as u32,
        raisestate: StateNum::NULL,
    },
    // MT_EGGMANITEM
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::EGGMANITEM1,
        spawnhealth: 1,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::EGGMANITEM_DEAD,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 0.0,
        radius: 24.0,
        height: 48.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Shootable as u32 | MapObjFlag::Special as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SPB
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SPB1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::SPBCHASE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::SPB_DEAD,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 64.0,
        radius: 24.0,
        height: 48.0,
        dispoffset: 0,
        mass: 100,
        damage: 1,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Nogravity as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Shootable as u32,
        raisestate: StateNum::NULL,
    },
    // MT_THUNDERSHIELD
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::THUNDERSHIELD1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::THUNDER,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 16.0,
        height: 56.0,
        dispoffset: 2,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_HYUDORO
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::HYUDORO,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::HYUDORO,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::HYUDORO_FADE,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 32.0,
        height: 24.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Special as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Noclipheight as u32,
        raisestate: StateNum::NULL,
    },
    // MT_POGOSPRING
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::POGOSPRING1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::KPOGOS,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 48.0,
        height: 32.0,
        dispoffset: 0,
        mass: 4718592,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SINK
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SINK,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::SINK,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 0.0,
        radius: 16.0,
        height: 24.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Bounce as u32 | MapObjFlag::Shootable as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SINK_SHIELD
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SINK_SHIELD,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 16.0,
        height: 24.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noclip as u32 | MapObjFlag::Noclipthing as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_BALLHOG
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::BALLHOG1,
        spawnhealth: 1,
        seestate: StateNum::NULL,
        seesound: SfxNum::TOSSED,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::BALLHOGBOOM1,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 64.0,
        radius: 16.0,
        height: 32.0,
        dispoffset: 0,
        mass: 100,
        damage: 1,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Missile as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Bounce as u32,
        raisestate: StateNum::NULL,
    },
    // MT_DRIFTSPARK
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::DRIFTSPARK1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 8.0,
        height: 8.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_DRIFTDUST
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::DRIFTDUST1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 8.0,
        height: 8.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SNEAKERTRAIL
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SNEAKERTRAIL1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::BOOST,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 8.0,
        height: 8.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SMOKE
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SMOKE1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 8.0,
        height: 8.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_EXPLODE
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::EXPLOSION1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::BOMB,
        speed: 0.0,
        radius: 8.0,
        height: 16.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_SPARKLE
    MapObjInfo {
        doomednum: -1,
        spawnstate: StateNum::SPARKLE1,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::NULL,
        painchance: 0,
        painsound: SfxNum::NONE,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 8.0,
        height: 8.0,
        dispoffset: 0,
        mass: 100,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Noblockmap as u32 | MapObjFlag::Noclip as u32 | MapObjFlag::Noclipheight as u32 | MapObjFlag::Nogravity as u32 | MapObjFlag::Scenery as u32,
        raisestate: StateNum::NULL,
    },
    // MT_YELLOWSPRING
    MapObjInfo {
        doomednum: 550,
        spawnstate: StateNum::YELLOWSPRING,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::YELLOWSPRING2,
        painchance: 0,
        painsound: SfxNum::SPRING,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 20.0,
        height: 16.0,
        dispoffset: 0,
        mass: 1310720,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_REDSPRING
    MapObjInfo {
        doomednum: 551,
        spawnstate: StateNum::REDSPRING,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::REDSPRING2,
        painchance: 0,
        painsound: SfxNum::SPRING,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 20.0,
        height: 16.0,
        dispoffset: 0,
        mass: 2097152,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
    // MT_BLUESPRING
    MapObjInfo {
        doomednum: 552,
        spawnstate: StateNum::BLUESPRING,
        spawnhealth: 1000,
        seestate: StateNum::NULL,
        seesound: SfxNum::NONE,
        reactiontime: 8,
        attacksound: SfxNum::NONE,
        painstate: StateNum::BLUESPRING2,
        painchance: 0,
        painsound: SfxNum::SPRING,
        meleestate: StateNum::NULL,
        missilestate: StateNum::NULL,
        deathstate: StateNum::NULL,
        xdeathstate: StateNum::NULL,
        deathsound: SfxNum::NONE,
        speed: 0.0,
        radius: 20.0,
        height: 16.0,
        dispoffset: 0,
        mass: 720896,
        damage: 0,
        activesound: SfxNum::NONE,
        flags: MapObjFlag::Solid as u32 | MapObjFlag::Spring as u32 | MapObjFlag::Nogravity as u32,
        raisestate: StateNum::NULL,
    },
];
