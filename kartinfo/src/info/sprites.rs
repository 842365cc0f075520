// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.

use super::{SpriteName, SpriteNum};
use crate::defs::NUMSPRITEFREESLOTS;

impl SpriteNum {
    pub const NULL: SpriteNum = SpriteNum(0);
    pub const UNKN: SpriteNum = SpriteNum(1);
    pub const THOK: SpriteNum = SpriteNum(2);
    pub const PLAY: SpriteNum = SpriteNum(3);
    pub const SIGN: SpriteNum = SpriteNum(4);
    pub const RNDM: SpriteNum = SpriteNum(5);
    pub const RPOP: SpriteNum = SpriteNum(6);
    pub const BANA: SpriteNum = SpriteNum(7);
    pub const ORBN: SpriteNum = SpriteNum(8);
    pub const JAWZ: SpriteNum = SpriteNum(9);
    pub const SSMN: SpriteNum = SpriteNum(10);
    pub const KRBM: SpriteNum = SpriteNum(11);
    pub const FITM: SpriteNum = SpriteNum(12);
    pub const SPBM: SpriteNum = SpriteNum(13);
    pub const THNS: SpriteNum = SpriteNum(14);
    pub const HYUU: SpriteNum = SpriteNum(15);
    pub const POGS: SpriteNum = SpriteNum(16);
    pub const SINK: SpriteNum = SpriteNum(17);
    pub const BHOG: SpriteNum = SpriteNum(18);
    pub const BHBM: SpriteNum = SpriteNum(19);
    pub const DRIF: SpriteNum = SpriteNum(20);
    pub const DUST: SpriteNum = SpriteNum(21);
    pub const BOST: SpriteNum = SpriteNum(22);
    pub const SMOK: SpriteNum = SpriteNum(23);
    pub const BOM1: SpriteNum = SpriteNum(24);
    pub const SPRK: SpriteNum = SpriteNum(25);
    pub const SPRY: SpriteNum = SpriteNum(26);
    pub const SPRR: SpriteNum = SpriteNum(27);
    pub const SPRB: SpriteNum = SpriteNum(28);
    pub const FIRSTFREESLOT: SpriteNum = SpriteNum(NUM_BUILTIN_SPRITES as u16);
    pub const LASTFREESLOT: SpriteNum =
        SpriteNum((NUM_BUILTIN_SPRITES + NUMSPRITEFREESLOTS - 1) as u16);
    pub const NUMSPRITES: SpriteNum =
        SpriteNum((NUM_BUILTIN_SPRITES + NUMSPRITEFREESLOTS) as u16);
}

pub const NUM_BUILTIN_SPRITES: usize = 29;

pub const SPRNAMES: [SpriteName; NUM_BUILTIN_SPRITES] = [
    SpriteName(*b"NULL"),
    SpriteName(*b"UNKN"),
    SpriteName(*b"THOK"),
    SpriteName(*b"PLAY"),
    SpriteName(*b"SIGN"),
    SpriteName(*b"RNDM"),
    SpriteName(*b"RPOP"),
    SpriteName(*b"BANA"),
    SpriteName(*b"ORBN"),
    SpriteName(*b"JAWZ"),
    SpriteName(*b"SSMN"),
    SpriteName(*b"KRBM"),
    SpriteName(*b"FITM"),
    SpriteName(*b"SPBM"),
    SpriteName(*b"THNS"),
    SpriteName(*b"HYUU"),
    SpriteName(*b"POGS"),
    SpriteName(*b"SINK"),
    SpriteName(*b"BHOG"),
    SpriteName(*b"BHBM"),
    SpriteName(*b"DRIF"),
    SpriteName(*b"DUST"),
    SpriteName(*b"BOST"),
    SpriteName(*b"SMOK"),
    SpriteName(*b"BOM1"),
    SpriteName(*b"SPRK"),
    SpriteName(*b"SPRY"),
    SpriteName(*b"SPRR"),
    SpriteName(*b"SPRB"),
];
