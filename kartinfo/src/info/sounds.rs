// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.

use super::SfxNum;

impl SfxNum {
    pub const NONE: SfxNum = SfxNum(0);
    pub const THOK: SfxNum = SfxNum(1);
    pub const SPRING: SfxNum = SfxNum(2);
    pub const ITPOP: SfxNum = SfxNum(3);
    pub const PEEL: SfxNum = SfxNum(4);
    pub const TOSSED: SfxNum = SfxNum(5);
    pub const MINE: SfxNum = SfxNum(6);
    pub const BOMB: SfxNum = SfxNum(7);
    pub const JAWZ: SfxNum = SfxNum(8);
    pub const SPBCHASE: SfxNum = SfxNum(9);
    pub const THUNDER: SfxNum = SfxNum(10);
    pub const HYUDORO: SfxNum = SfxNum(11);
    pub const KPOGOS: SfxNum = SfxNum(12);
    pub const SINK: SfxNum = SfxNum(13);
    pub const BOOST: SfxNum = SfxNum(14);
    pub const DRIFT: SfxNum = SfxNum(15);
    pub const KPAIN: SfxNum = SfxNum(16);
    pub const KDEATH: SfxNum = SfxNum(17);
    pub const SIGN: SfxNum = SfxNum(18);
}

pub const NUMSFX: usize = 19;

pub const SFX_NAMES: [&str; NUMSFX] = [
    "sfx_None",
    "sfx_thok",
    "sfx_spring",
    "sfx_itpop",
    "sfx_peel",
    "sfx_tossed",
    "sfx_mine",
    "sfx_bomb",
    "sfx_jawz",
    "sfx_spbchase",
    "sfx_thunder",
    "sfx_hyudoro",
    "sfx_kpogos",
    "sfx_sink",
    "sfx_boost",
    "sfx_drift",
    "sfx_kpain",
    "sfx_kdeath",
    "sfx_sign",
];
