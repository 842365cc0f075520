// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.

use super::{Action, SpriteNum, State, StateNum};
use crate::defs::NUMSTATEFREESLOTS;

impl StateNum {
    pub const NULL: StateNum = StateNum(0);
    pub const UNKNOWN: StateNum = StateNum(1);
    pub const INVISIBLE: StateNum = StateNum(2);
    pub const SPAWNSTATE: StateNum = StateNum(3);
    pub const SEESTATE: StateNum = StateNum(4);
    pub const DEATHSTATE: StateNum = StateNum(5);
    pub const THOK: StateNum = StateNum(6);
    pub const KART_STND1: StateNum = StateNum(7);
    pub const KART_STND2: StateNum = StateNum(8);
    pub const KART_WALK1: StateNum = StateNum(9);
    pub const KART_WALK2: StateNum = StateNum(10);
    pub const KART_RUN1: StateNum = StateNum(11);
    pub const KART_RUN2: StateNum = StateNum(12);
    pub const KART_DRIFT_L1: StateNum = StateNum(13);
    pub const KART_DRIFT_L2: StateNum = StateNum(14);
    pub const KART_DRIFT_R1: StateNum = StateNum(15);
    pub const KART_DRIFT_R2: StateNum = StateNum(16);
    pub const KART_SPIN: StateNum = StateNum(17);
    pub const KART_PAIN: StateNum = StateNum(18);
    pub const KART_SQUISH: StateNum = StateNum(19);
    pub const KART_DEAD: StateNum = StateNum(20);
    pub const SIGN1: StateNum = StateNum(21);
    pub const SIGN2: StateNum = StateNum(22);
    pub const SIGN3: StateNum = StateNum(23);
    pub const SIGN_END: StateNum = StateNum(24);
    pub const RANDOMITEM1: StateNum = StateNum(25);
    pub const ITEMPOP1: StateNum = StateNum(26);
    pub const ITEMPOP2: StateNum = StateNum(27);
    pub const ITEMPOP3: StateNum = StateNum(28);
    pub const BANANA: StateNum = StateNum(29);
    pub const BANANA_DEAD: StateNum = StateNum(30);
    pub const ORBINAUT1: StateNum = StateNum(31);
    pub const ORBINAUT2: StateNum = StateNum(32);
    pub const ORBINAUT3: StateNum = StateNum(33);
    pub const ORBINAUT4: StateNum = StateNum(34);
    pub const ORBINAUT5: StateNum = StateNum(35);
    pub const ORBINAUT6: StateNum = StateNum(36);
    pub const ORBINAUT_DEAD: StateNum = StateNum(37);
    pub const JAWZ1: StateNum = StateNum(38);
    pub const JAWZ2: StateNum = StateNum(39);
    pub const JAWZ3: StateNum = StateNum(40);
    pub const JAWZ4: StateNum = StateNum(41);
    pub const JAWZ5: StateNum = StateNum(42);
    pub const JAWZ6: StateNum = StateNum(43);
    pub const JAWZ7: StateNum = StateNum(44);
    pub const JAWZ8: StateNum = StateNum(45);
    pub const JAWZ_DEAD1: StateNum = StateNum(46);
    pub const JAWZ_DEAD2: StateNum = StateNum(47);
    pub const SSMINE1: StateNum = StateNum(48);
    pub const SSMINE2: StateNum = StateNum(49);
    pub const SSMINE3: StateNum = StateNum(50);
    pub const SSMINE4: StateNum = StateNum(51);
    pub const SSMINE_DEPLOY1: StateNum = StateNum(52);
    pub const SSMINE_DEPLOY2: StateNum = StateNum(53);
    pub const SSMINE_DEPLOY3: StateNum = StateNum(54);
    pub const SSMINE_EXPLODE: StateNum = StateNum(55);
    pub const MINEEXPLOSION1: StateNum = StateNum(56);
    pub const MINEEXPLOSION2: StateNum = StateNum(57);
    pub const MINEEXPLOSION3: StateNum = StateNum(58);
    pub const MINEEXPLOSION4: StateNum = StateNum(59);
    pub const EGGMANITEM1: StateNum = StateNum(60);
    pub const EGGMANITEM_DEAD: StateNum = StateNum(61);
    pub const SPB1: StateNum = StateNum(62);
    pub const SPB2: StateNum = StateNum(63);
    pub const SPB3: StateNum = StateNum(64);
    pub const SPB4: StateNum = StateNum(65);
    pub const SPB_DEAD: StateNum = StateNum(66);
    pub const THUNDERSHIELD1: StateNum = StateNum(67);
    pub const THUNDERSHIELD2: StateNum = StateNum(68);
    pub const THUNDERSHIELD3: StateNum = StateNum(69);
    pub const THUNDERSHIELD4: StateNum = StateNum(70);
    pub const HYUDORO: StateNum = StateNum(71);
    pub const HYUDORO_FADE: StateNum = StateNum(72);
    pub const POGOSPRING1: StateNum = StateNum(73);
    pub const POGOSPRING2: StateNum = StateNum(74);
    pub const SINK: StateNum = StateNum(75);
    pub const SINK_SHIELD: StateNum = StateNum(76);
    pub const BALLHOG1: StateNum = StateNum(77);
    pub const BALLHOG2: StateNum = StateNum(78);
    pub const BALLHOG3: StateNum = StateNum(79);
    pub const BALLHOG4: StateNum = StateNum(80);
    pub const BALLHOGBOOM1: StateNum = StateNum(81);
    pub const BALLHOGBOOM2: StateNum = StateNum(82);
    pub const BALLHOGBOOM3: StateNum = StateNum(83);
    pub const BALLHOGBOOM4: StateNum = StateNum(84);
    pub const DRIFTSPARK1: StateNum = StateNum(85);
    pub const DRIFTSPARK2: StateNum = StateNum(86);
    pub const DRIFTSPARK3: StateNum = StateNum(87);
    pub const DRIFTDUST1: StateNum = StateNum(88);
    pub const DRIFTDUST2: StateNum = StateNum(89);
    pub const DRIFTDUST3: StateNum = StateNum(90);
    pub const DRIFTDUST4: StateNum = StateNum(91);
    pub const SNEAKERTRAIL1: StateNum = StateNum(92);
    pub const SNEAKERTRAIL2: StateNum = StateNum(93);
    pub const SNEAKERTRAIL3: StateNum = StateNum(94);
    pub const SMOKE1: StateNum = StateNum(95);
    pub const SMOKE2: StateNum = StateNum(96);
    pub const SMOKE3: StateNum = StateNum(97);
    pub const SMOKE4: StateNum = StateNum(98);
    pub const SMOKE5: StateNum = StateNum(99);
    pub const EXPLOSION1: StateNum = StateNum(100);
    pub const EXPLOSION2: StateNum = StateNum(101);
    pub const EXPLOSION3: StateNum = StateNum(102);
    pub const EXPLOSION4: StateNum = StateNum(103);
    pub const EXPLOSION5: StateNum = StateNum(104);
    pub const EXPLOSION6: StateNum = StateNum(105);
    pub const SPARKLE1: StateNum = StateNum(106);
    pub const SPARKLE2: StateNum = StateNum(107);
    pub const SPARKLE3: StateNum = StateNum(108);
    pub const YELLOWSPRING: StateNum = StateNum(109);
    pub const YELLOWSPRING2: StateNum = StateNum(110);
    pub const YELLOWSPRING3: StateNum = StateNum(111);
    pub const YELLOWSPRING4: StateNum = StateNum(112);
    pub const REDSPRING: StateNum = StateNum(113);
    pub const REDSPRING2: StateNum = StateNum(114);
    pub const REDSPRING3: StateNum = StateNum(115);
    pub const REDSPRING4: StateNum = StateNum(116);
    pub const BLUESPRING: StateNum = StateNum(117);
    pub const BLUESPRING2: StateNum = StateNum(118);
    pub const BLUESPRING3: StateNum = StateNum(119);
    pub const BLUESPRING4: StateNum = StateNum(120);
    pub const FIRSTFREESLOT: StateNum = StateNum(NUM_BUILTIN_STATES as u16);
    pub const LASTFREESLOT: StateNum =
        StateNum((NUM_BUILTIN_STATES + NUMSTATEFREESLOTS - 1) as u16);
    pub const NUMSTATES: StateNum = StateNum((NUM_BUILTIN_STATES + NUMSTATEFREESLOTS) as u16);
}

pub const NUM_BUILTIN_STATES: usize = 121;

pub const STATE_NAMES: [&str; NUM_BUILTIN_STATES] = [
    "S_NULL",
    "S_UNKNOWN",
    "S_INVISIBLE",
    "S_SPAWNSTATE",
    "S_SEESTATE",
    "S_DEATHSTATE",
    "S_THOK",
    "S_KART_STND1",
    "S_KART_STND2",
    "S_KART_WALK1",
    "S_KART_WALK2",
    "S_KART_RUN1",
    "S_KART_RUN2",
    "S_KART_DRIFT_L1",
    "S_KART_DRIFT_L2",
    "S_KART_DRIFT_R1",
    "S_KART_DRIFT_R2",
    "S_KART_SPIN",
    "S_KART_PAIN",
    "S_KART_SQUISH",
    "S_KART_DEAD",
    "S_SIGN1",
    "S_SIGN2",
    "S_SIGN3",
    "S_SIGN_END",
    "S_RANDOMITEM1",
    "S_ITEMPOP1",
    "S_ITEMPOP2",
    "S_ITEMPOP3",
    "S_BANANA",
    "S_BANANA_DEAD",
    "S_ORBINAUT1",
    "S_ORBINAUT2",
    "S_ORBINAUT3",
    "S_ORBINAUT4",
    "S_ORBINAUT5",
    "S_ORBINAUT6",
    "S_ORBINAUT_DEAD",
    "S_JAWZ1",
    "S_JAWZ2",
    "S_JAWZ3",
    "S_JAWZ4",
    "S_JAWZ5",
    "S_JAWZ6",
    "S_JAWZ7",
    "S_JAWZ8",
    "S_JAWZ_DEAD1",
    "S_JAWZ_DEAD2",
    "S_SSMINE1",
    "S_SSMINE2",
    "S_SSMINE3",
    "S_SSMINE4",
    "S_SSMINE_DEPLOY1",
    "S_SSMINE_DEPLOY2",
    "S_SSMINE_DEPLOY3",
    "S_SSMINE_EXPLODE",
    "S_MINEEXPLOSION1",
    "S_MINEEXPLOSION2",
    "S_MINEEXPLOSION3",
    "S_MINEEXPLOSION4",
    "S_EGGMANITEM1",
    "S_EGGMANITEM_DEAD",
    "S_SPB1",
    "S_SPB2",
    "S_SPB3",
    "S_SPB4",
    "S_SPB_DEAD",
    "S_THUNDERSHIELD1",
    "S_THUNDERSHIELD2",
    "S_THUNDERSHIELD3",
    "S_THUNDERSHIELD4",
    "S_HYUDORO",
    "S_HYUDORO_FADE",
    "S_POGOSPRING1",
    "S_POGOSPRING2",
    "S_SINK",
    "S_SINK_SHIELD",
    "S_BALLHOG1",
    "S_BALLHOG2",
    "S_BALLHOG3",
    "S_BALLHOG4",
    "S_BALLHOGBOOM1",
    "S_BALLHOGBOOM2",
    "S_BALLHOGBOOM3",
    "S_BALLHOGBOOM4",
    "S_DRIFTSPARK1",
    "S_DRIFTSPARK2",
    "S_DRIFTSPARK3",
    "S_DRIFTDUST1",
    "S_DRIFTDUST2",
    "S_DRIFTDUST3",
    "S_DRIFTDUST4",
    "S_SNEAKERTRAIL1",
    "S_SNEAKERTRAIL2",
    "S_SNEAKERTRAIL3",
    "S_SMOKE1",
    "S_SMOKE2",
    "S_SMOKE3",
    "S_SMOKE4",
    "S_SMOKE5",
    "S_EXPLOSION1",
    "S_EXPLOSION2",
    "S_EXPLOSION3",
    "S_EXPLOSION4",
    "S_EXPLOSION5",
    "S_EXPLOSION6",
    "S_SPARKLE1",
    "S_SPARKLE2",
    "S_SPARKLE3",
    "S_YELLOWSPRING",
    "S_YELLOWSPRING2",
    "S_YELLOWSPRING3",
    "S_YELLOWSPRING4",
    "S_REDSPRING",
    "S_REDSPRING2",
    "S_REDSPRING3",
    "S_REDSPRING4",
    "S_BLUESPRING",
    "S_BLUESPRING2",
    "S_BLUESPRING3",
    "S_BLUESPRING4",
];

pub const STATES: [State; NUM_BUILTIN_STATES] = [
    State { // S_NULL
        sprite: SpriteNum::UNKN,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_UNKNOWN
        sprite: SpriteNum::UNKN,
        frame: 32768,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_INVISIBLE
        sprite: SpriteNum::NULL,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::INVISIBLE,
    },
    State { // S_SPAWNSTATE
        sprite: SpriteNum::NULL,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SEESTATE
        sprite: SpriteNum::NULL,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_DEATHSTATE
        sprite: SpriteNum::NULL,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_THOK
        sprite: SpriteNum::THOK,
        frame: 327680,
        tics: 8,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_KART_STND1
        sprite: SpriteNum::PLAY,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_STND2,
    },
    State { // S_KART_STND2
        sprite: SpriteNum::PLAY,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_STND1,
    },
    State { // S_KART_WALK1
        sprite: SpriteNum::PLAY,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_WALK2,
    },
    State { // S_KART_WALK2
        sprite: SpriteNum::PLAY,
        frame: 3,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_WALK1,
    },
    State { // S_KART_RUN1
        sprite: SpriteNum::PLAY,
        frame: 4,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_RUN2,
    },
    State { // S_KART_RUN2
        sprite: SpriteNum::PLAY,
        frame: 5,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_RUN1,
    },
    State { // S_KART_DRIFT_L1
        sprite: SpriteNum::PLAY,
        frame: 6,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_DRIFT_L2,
    },
    State { // S_KART_DRIFT_L2
        sprite: SpriteNum::PLAY,
        frame: 7,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_DRIFT_L1,
    },
    State { // S_KART_DRIFT_R1
        sprite: SpriteNum::PLAY,
        frame: 8,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_DRIFT_R2,
    },
    State { // S_KART_DRIFT_R2
        sprite: SpriteNum::PLAY,
        frame: 9,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_DRIFT_R1,
    },
    State { // S_KART_SPIN
        sprite: SpriteNum::PLAY,
        frame: 10,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_SPIN,
    },
    State { // S_KART_PAIN
        sprite: SpriteNum::PLAY,
        frame: 11,
        tics: -1,
        action: Action::Pain,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_STND1,
    },
    State { // S_KART_SQUISH
        sprite: SpriteNum::PLAY,
        frame: 12,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::KART_STND1,
    },
    State { // S_KART_DEAD
        sprite: SpriteNum::PLAY,
        frame: 11,
        tics: -1,
        action: Action::Scream,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SIGN1
        sprite: SpriteNum::SIGN,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SIGN2,
    },
    State { // S_SIGN2
        sprite: SpriteNum::SIGN,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SIGN3,
    },
    State { // S_SIGN3
        sprite: SpriteNum::SIGN,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SIGN1,
    },
    State { // S_SIGN_END
        sprite: SpriteNum::SIGN,
        frame: 3,
        tics: -1,
        action: Action::SignPlayer,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_RANDOMITEM1
        sprite: SpriteNum::RNDM,
        frame: 49152,
        tics: -1,
        action: Action::None,
        var1: 23,
        var2: 3,
        next_state: StateNum::NULL,
    },
    State { // S_ITEMPOP1
        sprite: SpriteNum::RPOP,
        frame: 32768,
        tics: 5,
        action: Action::ItemPop,
        var1: 0,
        var2: 0,
        next_state: StateNum::ITEMPOP2,
    },
    State { // S_ITEMPOP2
        sprite: SpriteNum::RPOP,
        frame: 32769,
        tics: 5,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ITEMPOP3,
    },
    State { // S_ITEMPOP3
        sprite: SpriteNum::RPOP,
        frame: 32770,
        tics: 5,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_BANANA
        sprite: SpriteNum::BANA,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_BANANA_DEAD
        sprite: SpriteNum::BANA,
        frame: 0,
        tics: 160,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_ORBINAUT1
        sprite: SpriteNum::ORBN,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT2,
    },
    State { // S_ORBINAUT2
        sprite: SpriteNum::ORBN,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT3,
    },
    State { // S_ORBINAUT3
        sprite: SpriteNum::ORBN,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT4,
    },
    State { // S_ORBINAUT4
        sprite: SpriteNum::ORBN,
        frame: 3,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT5,
    },
    State { // S_ORBINAUT5
        sprite: SpriteNum::ORBN,
        frame: 4,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT6,
    },
    State { // S_ORBINAUT6
        sprite: SpriteNum::ORBN,
        frame: 5,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::ORBINAUT1,
    },
    State { // S_ORBINAUT_DEAD
        sprite: SpriteNum::ORBN,
        frame: 6,
        tics: 105,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_JAWZ1
        sprite: SpriteNum::JAWZ,
        frame: 0,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ2,
    },
    State { // S_JAWZ2
        sprite: SpriteNum::JAWZ,
        frame: 1,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ3,
    },
    State { // S_JAWZ3
        sprite: SpriteNum::JAWZ,
        frame: 2,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ4,
    },
    State { // S_JAWZ4
        sprite: SpriteNum::JAWZ,
        frame: 3,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ5,
    },
    State { // S_JAWZ5
        sprite: SpriteNum::JAWZ,
        frame: 4,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ6,
    },
    State { // S_JAWZ6
        sprite: SpriteNum::JAWZ,
        frame: 5,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ7,
    },
    State { // S_JAWZ7
        sprite: SpriteNum::JAWZ,
        frame: 6,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ8,
    },
    State { // S_JAWZ8
        sprite: SpriteNum::JAWZ,
        frame: 7,
        tics: 1,
        action: Action::JawzChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ1,
    },
    State { // S_JAWZ_DEAD1
        sprite: SpriteNum::JAWZ,
        frame: 0,
        tics: 1,
        action: Action::JawzExplode,
        var1: 0,
        var2: 0,
        next_state: StateNum::JAWZ_DEAD2,
    },
    State { // S_JAWZ_DEAD2
        sprite: SpriteNum::JAWZ,
        frame: 8,
        tics: 105,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SSMINE1
        sprite: SpriteNum::SSMN,
        frame: 0,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE2,
    },
    State { // S_SSMINE2
        sprite: SpriteNum::SSMN,
        frame: 1,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE3,
    },
    State { // S_SSMINE3
        sprite: SpriteNum::SSMN,
        frame: 2,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE4,
    },
    State { // S_SSMINE4
        sprite: SpriteNum::SSMN,
        frame: 3,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE1,
    },
    State { // S_SSMINE_DEPLOY1
        sprite: SpriteNum::SSMN,
        frame: 4,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE_DEPLOY2,
    },
    State { // S_SSMINE_DEPLOY2
        sprite: SpriteNum::SSMN,
        frame: 5,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SSMINE_DEPLOY3,
    },
    State { // S_SSMINE_DEPLOY3
        sprite: SpriteNum::SSMN,
        frame: 6,
        tics: 2,
        action: Action::PlaySound,
        var1: 6,
        var2: 0,
        next_state: StateNum::SSMINE1,
    },
    State { // S_SSMINE_EXPLODE
        sprite: SpriteNum::SSMN,
        frame: 2,
        tics: 1,
        action: Action::MineExplode,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_MINEEXPLOSION1
        sprite: SpriteNum::KRBM,
        frame: 32768,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::MINEEXPLOSION2,
    },
    State { // S_MINEEXPLOSION2
        sprite: SpriteNum::KRBM,
        frame: 32769,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::MINEEXPLOSION3,
    },
    State { // S_MINEEXPLOSION3
        sprite: SpriteNum::KRBM,
        frame: 229378,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::MINEEXPLOSION4,
    },
    State { // S_MINEEXPLOSION4
        sprite: SpriteNum::KRBM,
        frame: 425987,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_EGGMANITEM1
        sprite: SpriteNum::FITM,
        frame: 49152,
        tics: -1,
        action: Action::None,
        var1: 23,
        var2: 3,
        next_state: StateNum::NULL,
    },
    State { // S_EGGMANITEM_DEAD
        sprite: SpriteNum::FITM,
        frame: 32768,
        tics: 1,
        action: Action::Scream,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION1,
    },
    State { // S_SPB1
        sprite: SpriteNum::SPBM,
        frame: 0,
        tics: 1,
        action: Action::SPBChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::SPB2,
    },
    State { // S_SPB2
        sprite: SpriteNum::SPBM,
        frame: 1,
        tics: 1,
        action: Action::SPBChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::SPB3,
    },
    State { // S_SPB3
        sprite: SpriteNum::SPBM,
        frame: 0,
        tics: 1,
        action: Action::SPBChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::SPB4,
    },
    State { // S_SPB4
        sprite: SpriteNum::SPBM,
        frame: 2,
        tics: 1,
        action: Action::SPBChase,
        var1: 0,
        var2: 0,
        next_state: StateNum::SPB1,
    },
    State { // S_SPB_DEAD
        sprite: SpriteNum::SPBM,
        frame: 3,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_THUNDERSHIELD1
        sprite: SpriteNum::THNS,
        frame: 32768,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::THUNDERSHIELD2,
    },
    State { // S_THUNDERSHIELD2
        sprite: SpriteNum::THNS,
        frame: 32769,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::THUNDERSHIELD3,
    },
    State { // S_THUNDERSHIELD3
        sprite: SpriteNum::THNS,
        frame: 32770,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::THUNDERSHIELD4,
    },
    State { // S_THUNDERSHIELD4
        sprite: SpriteNum::THNS,
        frame: 32771,
        tics: 2,
        action: Action::ThunderShield,
        var1: 0,
        var2: 0,
        next_state: StateNum::THUNDERSHIELD1,
    },
    State { // S_HYUDORO
        sprite: SpriteNum::HYUU,
        frame: 196608,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_HYUDORO_FADE
        sprite: SpriteNum::HYUU,
        frame: 458752,
        tics: 8,
        action: Action::HyudoroDecay,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_POGOSPRING1
        sprite: SpriteNum::POGS,
        frame: 0,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::POGOSPRING2,
    },
    State { // S_POGOSPRING2
        sprite: SpriteNum::POGS,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::POGOSPRING1,
    },
    State { // S_SINK
        sprite: SpriteNum::SINK,
        frame: 16384,
        tics: -1,
        action: Action::None,
        var1: 3,
        var2: 4,
        next_state: StateNum::NULL,
    },
    State { // S_SINK_SHIELD
        sprite: SpriteNum::SINK,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_BALLHOG1
        sprite: SpriteNum::BHOG,
        frame: 32768,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOG2,
    },
    State { // S_BALLHOG2
        sprite: SpriteNum::BHOG,
        frame: 32769,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOG3,
    },
    State { // S_BALLHOG3
        sprite: SpriteNum::BHOG,
        frame: 32770,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOG4,
    },
    State { // S_BALLHOG4
        sprite: SpriteNum::BHOG,
        frame: 32771,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOG1,
    },
    State { // S_BALLHOGBOOM1
        sprite: SpriteNum::BHBM,
        frame: 32768,
        tics: 1,
        action: Action::BallhogExplode,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOGBOOM2,
    },
    State { // S_BALLHOGBOOM2
        sprite: SpriteNum::BHBM,
        frame: 32769,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOGBOOM3,
    },
    State { // S_BALLHOGBOOM3
        sprite: SpriteNum::BHBM,
        frame: 32770,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BALLHOGBOOM4,
    },
    State { // S_BALLHOGBOOM4
        sprite: SpriteNum::BHBM,
        frame: 360451,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_DRIFTSPARK1
        sprite: SpriteNum::DRIF,
        frame: 163840,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::DRIFTSPARK2,
    },
    State { // S_DRIFTSPARK2
        sprite: SpriteNum::DRIF,
        frame: 163841,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::DRIFTSPARK3,
    },
    State { // S_DRIFTSPARK3
        sprite: SpriteNum::DRIF,
        frame: 163842,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_DRIFTDUST1
        sprite: SpriteNum::DUST,
        frame: 0,
        tics: 3,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::DRIFTDUST2,
    },
    State { // S_DRIFTDUST2
        sprite: SpriteNum::DUST,
        frame: 1,
        tics: 3,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::DRIFTDUST3,
    },
    State { // S_DRIFTDUST3
        sprite: SpriteNum::DUST,
        frame: 196610,
        tics: 3,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::DRIFTDUST4,
    },
    State { // S_DRIFTDUST4
        sprite: SpriteNum::DUST,
        frame: 393219,
        tics: 3,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SNEAKERTRAIL1
        sprite: SpriteNum::BOST,
        frame: 32768,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SNEAKERTRAIL2,
    },
    State { // S_SNEAKERTRAIL2
        sprite: SpriteNum::BOST,
        frame: 229377,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SNEAKERTRAIL3,
    },
    State { // S_SNEAKERTRAIL3
        sprite: SpriteNum::BOST,
        frame: 425986,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SMOKE1
        sprite: SpriteNum::SMOK,
        frame: 0,
        tics: 4,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SMOKE2,
    },
    State { // S_SMOKE2
        sprite: SpriteNum::SMOK,
        frame: 1,
        tics: 4,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SMOKE3,
    },
    State { // S_SMOKE3
        sprite: SpriteNum::SMOK,
        frame: 2,
        tics: 4,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SMOKE4,
    },
    State { // S_SMOKE4
        sprite: SpriteNum::SMOK,
        frame: 262147,
        tics: 4,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SMOKE5,
    },
    State { // S_SMOKE5
        sprite: SpriteNum::SMOK,
        frame: 458756,
        tics: 4,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_EXPLOSION1
        sprite: SpriteNum::BOM1,
        frame: 32768,
        tics: 2,
        action: Action::Scream,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION2,
    },
    State { // S_EXPLOSION2
        sprite: SpriteNum::BOM1,
        frame: 32769,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION3,
    },
    State { // S_EXPLOSION3
        sprite: SpriteNum::BOM1,
        frame: 32770,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION4,
    },
    State { // S_EXPLOSION4
        sprite: SpriteNum::BOM1,
        frame: 32771,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION5,
    },
    State { // S_EXPLOSION5
        sprite: SpriteNum::BOM1,
        frame: 294916,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::EXPLOSION6,
    },
    State { // S_EXPLOSION6
        sprite: SpriteNum::BOM1,
        frame: 491525,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_SPARKLE1
        sprite: SpriteNum::SPRK,
        frame: 32768,
        tics: 2,
        action: Action::SetRandomTics,
        var1: 1,
        var2: 4,
        next_state: StateNum::SPARKLE2,
    },
    State { // S_SPARKLE2
        sprite: SpriteNum::SPRK,
        frame: 32769,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::SPARKLE3,
    },
    State { // S_SPARKLE3
        sprite: SpriteNum::SPRK,
        frame: 360450,
        tics: 2,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_YELLOWSPRING
        sprite: SpriteNum::SPRY,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_YELLOWSPRING2
        sprite: SpriteNum::SPRY,
        frame: 1,
        tics: 4,
        action: Action::PlaySound,
        var1: 2,
        var2: 0,
        next_state: StateNum::YELLOWSPRING3,
    },
    State { // S_YELLOWSPRING3
        sprite: SpriteNum::SPRY,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::YELLOWSPRING4,
    },
    State { // S_YELLOWSPRING4
        sprite: SpriteNum::SPRY,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::YELLOWSPRING,
    },
    State { // S_REDSPRING
        sprite: SpriteNum::SPRR,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_REDSPRING2
        sprite: SpriteNum::SPRR,
        frame: 1,
        tics: 4,
        action: Action::PlaySound,
        var1: 2,
        var2: 0,
        next_state: StateNum::REDSPRING3,
    },
    State { // S_REDSPRING3
        sprite: SpriteNum::SPRR,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::REDSPRING4,
    },
    State { // S_REDSPRING4
        sprite: SpriteNum::SPRR,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::REDSPRING,
    },
    State { // S_BLUESPRING
        sprite: SpriteNum::SPRB,
        frame: 0,
        tics: -1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::NULL,
    },
    State { // S_BLUESPRING2
        sprite: SpriteNum::SPRB,
        frame: 1,
        tics: 4,
        action: Action::PlaySound,
        var1: 2,
        var2: 0,
        next_state: StateNum::BLUESPRING3,
    },
    State { // S_BLUESPRING3
        sprite: SpriteNum::SPRB,
        frame: 2,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BLUESPRING4,
    },
    State { // S_BLUESPRING4
        sprite: SpriteNum::SPRB,
        frame: 1,
        tics: 1,
        action: Action::None,
        var1: 0,
        var2: 0,
        next_state: StateNum::BLUESPRING,
    },
];
