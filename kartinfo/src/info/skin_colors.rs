// Generated by multigen from multigen/kartinfo.txt. Do not edit by hand.

use std::borrow::Cow;

use super::{SkinColor, SkinColorNum};
use crate::defs::{ChatColor, NUMCOLORFREESLOTS};

impl SkinColorNum {
    pub const NONE: SkinColorNum = SkinColorNum(0);
    pub const WHITE: SkinColorNum = SkinColorNum(1);
    pub const SILVER: SkinColorNum = SkinColorNum(2);
    pub const GREY: SkinColorNum = SkinColorNum(3);
    pub const NICKEL: SkinColorNum = SkinColorNum(4);
    pub const BLACK: SkinColorNum = SkinColorNum(5);
    pub const SKUNK: SkinColorNum = SkinColorNum(6);
    pub const FAIRY: SkinColorNum = SkinColorNum(7);
    pub const POPCORN: SkinColorNum = SkinColorNum(8);
    pub const ARTICHOKE: SkinColorNum = SkinColorNum(9);
    pub const PIGEON: SkinColorNum = SkinColorNum(10);
    pub const SEPIA: SkinColorNum = SkinColorNum(11);
    pub const BEIGE: SkinColorNum = SkinColorNum(12);
    pub const WALNUT: SkinColorNum = SkinColorNum(13);
    pub const BROWN: SkinColorNum = SkinColorNum(14);
    pub const LEATHER: SkinColorNum = SkinColorNum(15);
    pub const SALMON: SkinColorNum = SkinColorNum(16);
    pub const PINK: SkinColorNum = SkinColorNum(17);
    pub const ROSE: SkinColorNum = SkinColorNum(18);
    pub const BRICK: SkinColorNum = SkinColorNum(19);
    pub const CINNAMON: SkinColorNum = SkinColorNum(20);
    pub const RUBY: SkinColorNum = SkinColorNum(21);
    pub const RASPBERRY: SkinColorNum = SkinColorNum(22);
    pub const CHERRY: SkinColorNum = SkinColorNum(23);
    pub const RED: SkinColorNum = SkinColorNum(24);
    pub const CRIMSON: SkinColorNum = SkinColorNum(25);
    pub const MAROON: SkinColorNum = SkinColorNum(26);
    pub const LEMONADE: SkinColorNum = SkinColorNum(27);
    pub const FLAME: SkinColorNum = SkinColorNum(28);
    pub const SCARLET: SkinColorNum = SkinColorNum(29);
    pub const KETCHUP: SkinColorNum = SkinColorNum(30);
    pub const DAWN: SkinColorNum = SkinColorNum(31);
    pub const SUNSLAM: SkinColorNum = SkinColorNum(32);
    pub const CREAMSICLE: SkinColorNum = SkinColorNum(33);
    pub const ORANGE: SkinColorNum = SkinColorNum(34);
    pub const ROSEWOOD: SkinColorNum = SkinColorNum(35);
    pub const TANGERINE: SkinColorNum = SkinColorNum(36);
    pub const PEACH: SkinColorNum = SkinColorNum(37);
    pub const CARAMEL: SkinColorNum = SkinColorNum(38);
    pub const CREAM: SkinColorNum = SkinColorNum(39);
    pub const GOLD: SkinColorNum = SkinColorNum(40);
    pub const ROYAL: SkinColorNum = SkinColorNum(41);
    pub const BRONZE: SkinColorNum = SkinColorNum(42);
    pub const COPPER: SkinColorNum = SkinColorNum(43);
    pub const QUARRY: SkinColorNum = SkinColorNum(44);
    pub const YELLOW: SkinColorNum = SkinColorNum(45);
    pub const MUSTARD: SkinColorNum = SkinColorNum(46);
    pub const CROCODILE: SkinColorNum = SkinColorNum(47);
    pub const OLIVE: SkinColorNum = SkinColorNum(48);
    pub const VOMIT: SkinColorNum = SkinColorNum(49);
    pub const GARDEN: SkinColorNum = SkinColorNum(50);
    pub const LIME: SkinColorNum = SkinColorNum(51);
    pub const HANDHELD: SkinColorNum = SkinColorNum(52);
    pub const TEA: SkinColorNum = SkinColorNum(53);
    pub const PISTACHIO: SkinColorNum = SkinColorNum(54);
    pub const MOSS: SkinColorNum = SkinColorNum(55);
    pub const CAMOUFLAGE: SkinColorNum = SkinColorNum(56);
    pub const ROBOHOOD: SkinColorNum = SkinColorNum(57);
    pub const MINT: SkinColorNum = SkinColorNum(58);
    pub const GREEN: SkinColorNum = SkinColorNum(59);
    pub const PINETREE: SkinColorNum = SkinColorNum(60);
    pub const EMERALD: SkinColorNum = SkinColorNum(61);
    pub const SWAMP: SkinColorNum = SkinColorNum(62);
    pub const DREAM: SkinColorNum = SkinColorNum(63);
    pub const PLAGUE: SkinColorNum = SkinColorNum(64);
    pub const ALGAE: SkinColorNum = SkinColorNum(65);
    pub const CARIBBEAN: SkinColorNum = SkinColorNum(66);
    pub const AZURE: SkinColorNum = SkinColorNum(67);
    pub const AQUA: SkinColorNum = SkinColorNum(68);
    pub const TEAL: SkinColorNum = SkinColorNum(69);
    pub const CYAN: SkinColorNum = SkinColorNum(70);
    pub const JAWZ: SkinColorNum = SkinColorNum(71);
    pub const CERULEAN: SkinColorNum = SkinColorNum(72);
    pub const NAVY: SkinColorNum = SkinColorNum(73);
    pub const PLATINUM: SkinColorNum = SkinColorNum(74);
    pub const SLATE: SkinColorNum = SkinColorNum(75);
    pub const STEEL: SkinColorNum = SkinColorNum(76);
    pub const THUNDER: SkinColorNum = SkinColorNum(77);
    pub const RUST: SkinColorNum = SkinColorNum(78);
    pub const WRISTWATCH: SkinColorNum = SkinColorNum(79);
    pub const JET: SkinColorNum = SkinColorNum(80);
    pub const SAPPHIRE: SkinColorNum = SkinColorNum(81);
    pub const PERIWINKLE: SkinColorNum = SkinColorNum(82);
    pub const BLUE: SkinColorNum = SkinColorNum(83);
    pub const BLUEBERRY: SkinColorNum = SkinColorNum(84);
    pub const NOVA: SkinColorNum = SkinColorNum(85);
    pub const PASTEL: SkinColorNum = SkinColorNum(86);
    pub const MOONSLAM: SkinColorNum = SkinColorNum(87);
    pub const ULTRAVIOLET: SkinColorNum = SkinColorNum(88);
    pub const DUSK: SkinColorNum = SkinColorNum(89);
    pub const BUBBLEGUM: SkinColorNum = SkinColorNum(90);
    pub const PURPLE: SkinColorNum = SkinColorNum(91);
    pub const FUCHSIA: SkinColorNum = SkinColorNum(92);
    pub const TOXIC: SkinColorNum = SkinColorNum(93);
    pub const MAUVE: SkinColorNum = SkinColorNum(94);
    pub const LAVENDER: SkinColorNum = SkinColorNum(95);
    pub const BYZANTIUM: SkinColorNum = SkinColorNum(96);
    pub const POMEGRANATE: SkinColorNum = SkinColorNum(97);
    pub const LILAC: SkinColorNum = SkinColorNum(98);
    pub const FIRSTFREESLOT: SkinColorNum = SkinColorNum(NUM_BUILTIN_SKINCOLORS as u16);
    pub const LASTFREESLOT: SkinColorNum =
        SkinColorNum((NUM_BUILTIN_SKINCOLORS + NUMCOLORFREESLOTS - 1) as u16);
    pub const MAXSKINCOLORS: SkinColorNum =
        SkinColorNum((NUM_BUILTIN_SKINCOLORS + NUMCOLORFREESLOTS) as u16);
}

pub const NUM_BUILTIN_SKINCOLORS: usize = 99;

pub const SKINCOLOR_IDENTS: [&str; NUM_BUILTIN_SKINCOLORS] = [
    "SKINCOLOR_NONE",
    "SKINCOLOR_WHITE",
    "SKINCOLOR_SILVER",
    "SKINCOLOR_GREY",
    "SKINCOLOR_NICKEL",
    "SKINCOLOR_BLACK",
    "SKINCOLOR_SKUNK",
    "SKINCOLOR_FAIRY",
    "SKINCOLOR_POPCORN",
    "SKINCOLOR_ARTICHOKE",
    "SKINCOLOR_PIGEON",
    "SKINCOLOR_SEPIA",
    "SKINCOLOR_BEIGE",
    "SKINCOLOR_WALNUT",
    "SKINCOLOR_BROWN",
    "SKINCOLOR_LEATHER",
    "SKINCOLOR_SALMON",
    "SKINCOLOR_PINK",
    "SKINCOLOR_ROSE",
    "SKINCOLOR_BRICK",
    "SKINCOLOR_CINNAMON",
    "SKINCOLOR_RUBY",
    "SKINCOLOR_RASPBERRY",
    "SKINCOLOR_CHERRY",
    "SKINCOLOR_RED",
    "SKINCOLOR_CRIMSON",
    "SKINCOLOR_MAROON",
    "SKINCOLOR_LEMONADE",
    "SKINCOLOR_FLAME",
    "SKINCOLOR_SCARLET",
    "SKINCOLOR_KETCHUP",
    "SKINCOLOR_DAWN",
    "SKINCOLOR_SUNSLAM",
    "SKINCOLOR_CREAMSICLE",
    "SKINCOLOR_ORANGE",
    "SKINCOLOR_ROSEWOOD",
    "SKINCOLOR_TANGERINE",
    "SKINCOLOR_PEACH",
    "SKINCOLOR_CARAMEL",
    "SKINCOLOR_CREAM",
    "SKINCOLOR_GOLD",
    "SKINCOLOR_ROYAL",
    "SKINCOLOR_BRONZE",
    "SKINCOLOR_COPPER",
    "SKINCOLOR_QUARRY",
    "SKINCOLOR_YELLOW",
    "SKINCOLOR_MUSTARD",
    "SKINCOLOR_CROCODILE",
    "SKINCOLOR_OLIVE",
    "SKINCOLOR_VOMIT",
    "SKINCOLOR_GARDEN",
    "SKINCOLOR_LIME",
    "SKINCOLOR_HANDHELD",
    "SKINCOLOR_TEA",
    "SKINCOLOR_PISTACHIO",
    "SKINCOLOR_MOSS",
    "SKINCOLOR_CAMOUFLAGE",
    "SKINCOLOR_ROBOHOOD",
    "SKINCOLOR_MINT",
    "SKINCOLOR_GREEN",
    "SKINCOLOR_PINETREE",
    "SKINCOLOR_EMERALD",
    "SKINCOLOR_SWAMP",
    "SKINCOLOR_DREAM",
    "SKINCOLOR_PLAGUE",
    "SKINCOLOR_ALGAE",
    "SKINCOLOR_CARIBBEAN",
    "SKINCOLOR_AZURE",
    "SKINCOLOR_AQUA",
    "SKINCOLOR_TEAL",
    "SKINCOLOR_CYAN",
    "SKINCOLOR_JAWZ",
    "SKINCOLOR_CERULEAN",
    "SKINCOLOR_NAVY",
    "SKINCOLOR_PLATINUM",
    "SKINCOLOR_SLATE",
    "SKINCOLOR_STEEL",
    "SKINCOLOR_THUNDER",
    "SKINCOLOR_RUST",
    "SKINCOLOR_WRISTWATCH",
    "SKINCOLOR_JET",
    "SKINCOLOR_SAPPHIRE",
    "SKINCOLOR_PERIWINKLE",
    "SKINCOLOR_BLUE",
    "SKINCOLOR_BLUEBERRY",
    "SKINCOLOR_NOVA",
    "SKINCOLOR_PASTEL",
    "SKINCOLOR_MOONSLAM",
    "SKINCOLOR_ULTRAVIOLET",
    "SKINCOLOR_DUSK",
    "SKINCOLOR_BUBBLEGUM",
    "SKINCOLOR_PURPLE",
    "SKINCOLOR_FUCHSIA",
    "SKINCOLOR_TOXIC",
    "SKINCOLOR_MAUVE",
    "SKINCOLOR_LAVENDER",
    "SKINCOLOR_BYZANTIUM",
    "SKINCOLOR_POMEGRANATE",
    "SKINCOLOR_LILAC",
];

pub const SKINCOLORS: [SkinColor; NUM_BUILTIN_SKINCOLORS] = [
    SkinColor { // SKINCOLOR_NONE
        name: Cow::Borrowed("None"),
        ramp: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        invcolor: SkinColorNum::NONE,
        invshade: 0,
        chatcolor: ChatColor::None,
        accessible: false,
    },
    SkinColor { // SKINCOLOR_WHITE
        name: Cow::Borrowed("White"),
        ramp: [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        invcolor: SkinColorNum::BLACK,
        invshade: 7,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SILVER
        name: Cow::Borrowed("Silver"),
        ramp: [2, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
        invcolor: SkinColorNum::NICKEL,
        invshade: 8,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_GREY
        name: Cow::Borrowed("Grey"),
        ramp: [6, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20],
        invcolor: SkinColorNum::GREY,
        invshade: 9,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_NICKEL
        name: Cow::Borrowed("Nickel"),
        ramp: [10, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24],
        invcolor: SkinColorNum::SILVER,
        invshade: 10,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BLACK
        name: Cow::Borrowed("Black"),
        ramp: [16, 16, 17, 18, 19, 20, 21, 22, 22, 23, 24, 25, 26, 27, 28, 29],
        invcolor: SkinColorNum::WHITE,
        invshade: 11,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SKUNK
        name: Cow::Borrowed("Skunk"),
        ramp: [18, 18, 19, 20, 21, 22, 23, 24, 24, 25, 26, 27, 28, 29, 30, 31],
        invcolor: SkinColorNum::WHITE,
        invshade: 12,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_FAIRY
        name: Cow::Borrowed("Fairy"),
        ramp: [200, 200, 201, 202, 203, 204, 204, 205, 207, 208, 209, 209, 210, 211, 212, 213],
        invcolor: SkinColorNum::ARTICHOKE,
        invshade: 7,
        chatcolor: ChatColor::Rosy,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_POPCORN
        name: Cow::Borrowed("Popcorn"),
        ramp: [64, 64, 65, 66, 67, 68, 68, 69, 71, 72, 73, 73, 74, 75, 76, 77],
        invcolor: SkinColorNum::WRISTWATCH,
        invshade: 7,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ARTICHOKE
        name: Cow::Borrowed("Artichoke"),
        ramp: [102, 102, 103, 104, 105, 106, 106, 107, 109, 110, 111, 111, 112, 113, 114, 115],
        invcolor: SkinColorNum::ROSE,
        invshade: 10,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PIGEON
        name: Cow::Borrowed("Pigeon"),
        ramp: [150, 150, 151, 152, 153, 154, 154, 155, 157, 158, 159, 159, 160, 161, 162, 163],
        invcolor: SkinColorNum::SUNSLAM,
        invshade: 10,
        chatcolor: ChatColor::Azure,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SEPIA
        name: Cow::Borrowed("Sepia"),
        ramp: [224, 224, 225, 226, 227, 228, 228, 229, 231, 232, 233, 233, 234, 235, 236, 237],
        invcolor: SkinColorNum::CARIBBEAN,
        invshade: 7,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BEIGE
        name: Cow::Borrowed("Beige"),
        ramp: [226, 226, 227, 228, 229, 230, 230, 231, 233, 234, 235, 235, 236, 237, 238, 239],
        invcolor: SkinColorNum::AQUA,
        invshade: 8,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_WALNUT
        name: Cow::Borrowed("Walnut"),
        ramp: [230, 230, 231, 232, 233, 234, 234, 235, 237, 238, 239, 239, 240, 241, 242, 243],
        invcolor: SkinColorNum::CYAN,
        invshade: 10,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BROWN
        name: Cow::Borrowed("Brown"),
        ramp: [228, 228, 229, 230, 231, 232, 232, 233, 235, 236, 237, 237, 238, 239, 240, 241],
        invcolor: SkinColorNum::TEAL,
        invshade: 9,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_LEATHER
        name: Cow::Borrowed("Leather"),
        ramp: [232, 232, 233, 234, 235, 236, 236, 237, 239, 240, 241, 241, 242, 243, 244, 245],
        invcolor: SkinColorNum::CERULEAN,
        invshade: 11,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SALMON
        name: Cow::Borrowed("Salmon"),
        ramp: [202, 202, 203, 204, 205, 206, 206, 207, 209, 210, 211, 211, 212, 213, 214, 215],
        invcolor: SkinColorNum::CROCODILE,
        invshade: 8,
        chatcolor: ChatColor::Rosy,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PINK
        name: Cow::Borrowed("Pink"),
        ramp: [204, 204, 205, 206, 207, 208, 208, 209, 211, 212, 213, 213, 214, 215, 216, 217],
        invcolor: SkinColorNum::GARDEN,
        invshade: 9,
        chatcolor: ChatColor::Rosy,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ROSE
        name: Cow::Borrowed("Rose"),
        ramp: [206, 206, 207, 208, 209, 210, 210, 211, 213, 214, 215, 215, 216, 217, 218, 219],
        invcolor: SkinColorNum::PISTACHIO,
        invshade: 10,
        chatcolor: ChatColor::Rosy,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BRICK
        name: Cow::Borrowed("Brick"),
        ramp: [38, 38, 39, 40, 41, 42, 42, 43, 45, 46, 47, 47, 48, 49, 50, 51],
        invcolor: SkinColorNum::DREAM,
        invshade: 10,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CINNAMON
        name: Cow::Borrowed("Cinnamon"),
        ramp: [56, 56, 57, 58, 59, 60, 60, 61, 63, 64, 65, 65, 66, 67, 68, 69],
        invcolor: SkinColorNum::BLUE,
        invshade: 11,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_RUBY
        name: Cow::Borrowed("Ruby"),
        ramp: [36, 36, 37, 38, 39, 40, 40, 41, 43, 44, 45, 45, 46, 47, 48, 49],
        invcolor: SkinColorNum::SWAMP,
        invshade: 9,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_RASPBERRY
        name: Cow::Borrowed("Raspberry"),
        ramp: [188, 188, 189, 190, 191, 192, 192, 193, 195, 196, 197, 197, 198, 199, 200, 201],
        invcolor: SkinColorNum::LIME,
        invshade: 9,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CHERRY
        name: Cow::Borrowed("Cherry"),
        ramp: [34, 34, 35, 36, 37, 38, 38, 39, 41, 42, 43, 43, 44, 45, 46, 47],
        invcolor: SkinColorNum::EMERALD,
        invshade: 8,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_RED
        name: Cow::Borrowed("Red"),
        ramp: [32, 32, 33, 34, 35, 36, 36, 37, 39, 40, 41, 41, 42, 43, 44, 45],
        invcolor: SkinColorNum::MINT,
        invshade: 7,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CRIMSON
        name: Cow::Borrowed("Crimson"),
        ramp: [40, 40, 41, 42, 43, 44, 44, 45, 47, 48, 49, 49, 50, 51, 52, 53],
        invcolor: SkinColorNum::PLAGUE,
        invshade: 11,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MAROON
        name: Cow::Borrowed("Maroon"),
        ramp: [42, 42, 43, 44, 45, 46, 46, 47, 49, 50, 51, 51, 52, 53, 54, 55],
        invcolor: SkinColorNum::ALGAE,
        invshade: 12,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_LEMONADE
        name: Cow::Borrowed("Lemonade"),
        ramp: [208, 208, 209, 210, 211, 212, 212, 213, 215, 216, 217, 217, 218, 219, 220, 221],
        invcolor: SkinColorNum::MOSS,
        invshade: 11,
        chatcolor: ChatColor::Rosy,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_FLAME
        name: Cow::Borrowed("Flame"),
        ramp: [52, 52, 53, 54, 55, 56, 56, 57, 59, 60, 61, 61, 62, 63, 64, 65],
        invcolor: SkinColorNum::SAPPHIRE,
        invshade: 9,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SCARLET
        name: Cow::Borrowed("Scarlet"),
        ramp: [36, 36, 37, 38, 39, 40, 40, 41, 43, 44, 45, 45, 46, 47, 48, 49],
        invcolor: SkinColorNum::SWAMP,
        invshade: 9,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_KETCHUP
        name: Cow::Borrowed("Ketchup"),
        ramp: [38, 38, 39, 40, 41, 42, 42, 43, 45, 46, 47, 47, 48, 49, 50, 51],
        invcolor: SkinColorNum::DREAM,
        invshade: 10,
        chatcolor: ChatColor::Red,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_DAWN
        name: Cow::Borrowed("Dawn"),
        ramp: [48, 48, 49, 50, 51, 52, 52, 53, 55, 56, 57, 57, 58, 59, 60, 61],
        invcolor: SkinColorNum::JAWZ,
        invshade: 7,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SUNSLAM
        name: Cow::Borrowed("Sunslam"),
        ramp: [50, 50, 51, 52, 53, 54, 54, 55, 57, 58, 59, 59, 60, 61, 62, 63],
        invcolor: SkinColorNum::NAVY,
        invshade: 8,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CREAMSICLE
        name: Cow::Borrowed("Creamsicle"),
        ramp: [50, 50, 51, 52, 53, 54, 54, 55, 57, 58, 59, 59, 60, 61, 62, 63],
        invcolor: SkinColorNum::NAVY,
        invshade: 8,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ORANGE
        name: Cow::Borrowed("Orange"),
        ramp: [52, 52, 53, 54, 55, 56, 56, 57, 59, 60, 61, 61, 62, 63, 64, 65],
        invcolor: SkinColorNum::SAPPHIRE,
        invshade: 9,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ROSEWOOD
        name: Cow::Borrowed("Rosewood"),
        ramp: [56, 56, 57, 58, 59, 60, 60, 61, 63, 64, 65, 65, 66, 67, 68, 69],
        invcolor: SkinColorNum::BLUE,
        invshade: 11,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_TANGERINE
        name: Cow::Borrowed("Tangerine"),
        ramp: [54, 54, 55, 56, 57, 58, 58, 59, 61, 62, 63, 63, 64, 65, 66, 67],
        invcolor: SkinColorNum::PERIWINKLE,
        invshade: 10,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PEACH
        name: Cow::Borrowed("Peach"),
        ramp: [48, 48, 49, 50, 51, 52, 52, 53, 55, 56, 57, 57, 58, 59, 60, 61],
        invcolor: SkinColorNum::JAWZ,
        invshade: 7,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CARAMEL
        name: Cow::Borrowed("Caramel"),
        ramp: [226, 226, 227, 228, 229, 230, 230, 231, 233, 234, 235, 235, 236, 237, 238, 239],
        invcolor: SkinColorNum::AQUA,
        invshade: 8,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CREAM
        name: Cow::Borrowed("Cream"),
        ramp: [64, 64, 65, 66, 67, 68, 68, 69, 71, 72, 73, 73, 74, 75, 76, 77],
        invcolor: SkinColorNum::WRISTWATCH,
        invshade: 7,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_GOLD
        name: Cow::Borrowed("Gold"),
        ramp: [70, 70, 71, 72, 73, 74, 74, 75, 77, 78, 79, 79, 80, 81, 82, 83],
        invcolor: SkinColorNum::MOONSLAM,
        invshade: 10,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ROYAL
        name: Cow::Borrowed("Royal"),
        ramp: [68, 68, 69, 70, 71, 72, 72, 73, 75, 76, 77, 77, 78, 79, 80, 81],
        invcolor: SkinColorNum::PASTEL,
        invshade: 9,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BRONZE
        name: Cow::Borrowed("Bronze"),
        ramp: [72, 72, 73, 74, 75, 76, 76, 77, 79, 80, 81, 81, 82, 83, 84, 85],
        invcolor: SkinColorNum::ULTRAVIOLET,
        invshade: 11,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_COPPER
        name: Cow::Borrowed("Copper"),
        ramp: [58, 58, 59, 60, 61, 62, 62, 63, 65, 66, 67, 67, 68, 69, 70, 71],
        invcolor: SkinColorNum::BLUEBERRY,
        invshade: 12,
        chatcolor: ChatColor::Orange,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_QUARRY
        name: Cow::Borrowed("Quarry"),
        ramp: [234, 234, 235, 236, 237, 238, 238, 239, 241, 242, 243, 243, 244, 245, 246, 247],
        invcolor: SkinColorNum::CERULEAN,
        invshade: 12,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_YELLOW
        name: Cow::Borrowed("Yellow"),
        ramp: [66, 66, 67, 68, 69, 70, 70, 71, 73, 74, 75, 75, 76, 77, 78, 79],
        invcolor: SkinColorNum::NOVA,
        invshade: 8,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MUSTARD
        name: Cow::Borrowed("Mustard"),
        ramp: [72, 72, 73, 74, 75, 76, 76, 77, 79, 80, 81, 81, 82, 83, 84, 85],
        invcolor: SkinColorNum::ULTRAVIOLET,
        invshade: 11,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CROCODILE
        name: Cow::Borrowed("Crocodile"),
        ramp: [104, 104, 105, 106, 107, 108, 108, 109, 111, 112, 113, 113, 114, 115, 116, 117],
        invcolor: SkinColorNum::LEMONADE,
        invshade: 11,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_OLIVE
        name: Cow::Borrowed("Olive"),
        ramp: [96, 96, 97, 98, 99, 100, 100, 101, 103, 104, 105, 105, 106, 107, 108, 109],
        invcolor: SkinColorNum::BYZANTIUM,
        invshade: 11,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_VOMIT
        name: Cow::Borrowed("Vomit"),
        ramp: [92, 92, 93, 94, 95, 96, 96, 97, 99, 100, 101, 101, 102, 103, 104, 105],
        invcolor: SkinColorNum::FUCHSIA,
        invshade: 9,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_GARDEN
        name: Cow::Borrowed("Garden"),
        ramp: [98, 98, 99, 100, 101, 102, 102, 103, 105, 106, 107, 107, 108, 109, 110, 111],
        invcolor: SkinColorNum::SALMON,
        invshade: 8,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_LIME
        name: Cow::Borrowed("Lime"),
        ramp: [88, 88, 89, 90, 91, 92, 92, 93, 95, 96, 97, 97, 98, 99, 100, 101],
        invcolor: SkinColorNum::RASPBERRY,
        invshade: 7,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_HANDHELD
        name: Cow::Borrowed("Handheld"),
        ramp: [94, 94, 95, 96, 97, 98, 98, 99, 101, 102, 103, 103, 104, 105, 106, 107],
        invcolor: SkinColorNum::MAUVE,
        invshade: 10,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_TEA
        name: Cow::Borrowed("Tea"),
        ramp: [90, 90, 91, 92, 93, 94, 94, 95, 97, 98, 99, 99, 100, 101, 102, 103],
        invcolor: SkinColorNum::BUBBLEGUM,
        invshade: 8,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PISTACHIO
        name: Cow::Borrowed("Pistachio"),
        ramp: [96, 96, 97, 98, 99, 100, 100, 101, 103, 104, 105, 105, 106, 107, 108, 109],
        invcolor: SkinColorNum::FAIRY,
        invshade: 7,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MOSS
        name: Cow::Borrowed("Moss"),
        ramp: [102, 102, 103, 104, 105, 106, 106, 107, 109, 110, 111, 111, 112, 113, 114, 115],
        invcolor: SkinColorNum::ROSE,
        invshade: 10,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CAMOUFLAGE
        name: Cow::Borrowed("Camouflage"),
        ramp: [106, 106, 107, 108, 109, 110, 110, 111, 113, 114, 115, 115, 116, 117, 118, 119],
        invcolor: SkinColorNum::LEMONADE,
        invshade: 12,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ROBOHOOD
        name: Cow::Borrowed("Robohood"),
        ramp: [104, 104, 105, 106, 107, 108, 108, 109, 111, 112, 113, 113, 114, 115, 116, 117],
        invcolor: SkinColorNum::LEMONADE,
        invshade: 11,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MINT
        name: Cow::Borrowed("Mint"),
        ramp: [112, 112, 113, 114, 115, 116, 116, 117, 119, 120, 121, 121, 122, 123, 124, 125],
        invcolor: SkinColorNum::BRICK,
        invshade: 7,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_GREEN
        name: Cow::Borrowed("Green"),
        ramp: [100, 100, 101, 102, 103, 104, 104, 105, 107, 108, 109, 109, 110, 111, 112, 113],
        invcolor: SkinColorNum::PINK,
        invshade: 9,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PINETREE
        name: Cow::Borrowed("Pinetree"),
        ramp: [106, 106, 107, 108, 109, 110, 110, 111, 113, 114, 115, 115, 116, 117, 118, 119],
        invcolor: SkinColorNum::LEMONADE,
        invshade: 12,
        chatcolor: ChatColor::Green,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_EMERALD
        name: Cow::Borrowed("Emerald"),
        ramp: [116, 116, 117, 118, 119, 120, 120, 121, 123, 124, 125, 125, 126, 127, 128, 129],
        invcolor: SkinColorNum::CHERRY,
        invshade: 9,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SWAMP
        name: Cow::Borrowed("Swamp"),
        ramp: [120, 120, 121, 122, 123, 124, 124, 125, 127, 128, 129, 129, 130, 131, 132, 133],
        invcolor: SkinColorNum::CRIMSON,
        invshade: 11,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_DREAM
        name: Cow::Borrowed("Dream"),
        ramp: [114, 114, 115, 116, 117, 118, 118, 119, 121, 122, 123, 123, 124, 125, 126, 127],
        invcolor: SkinColorNum::RUBY,
        invshade: 8,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PLAGUE
        name: Cow::Borrowed("Plague"),
        ramp: [118, 118, 119, 120, 121, 122, 122, 123, 125, 126, 127, 127, 128, 129, 130, 131],
        invcolor: SkinColorNum::RED,
        invshade: 10,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ALGAE
        name: Cow::Borrowed("Algae"),
        ramp: [118, 118, 119, 120, 121, 122, 122, 123, 125, 126, 127, 127, 128, 129, 130, 131],
        invcolor: SkinColorNum::RED,
        invshade: 10,
        chatcolor: ChatColor::Aqua,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CARIBBEAN
        name: Cow::Borrowed("Caribbean"),
        ramp: [132, 132, 133, 134, 135, 136, 136, 137, 139, 140, 141, 141, 142, 143, 144, 145],
        invcolor: SkinColorNum::WALNUT,
        invshade: 9,
        chatcolor: ChatColor::Sky,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_AZURE
        name: Cow::Borrowed("Azure"),
        ramp: [146, 146, 147, 148, 149, 150, 150, 151, 153, 154, 155, 155, 156, 157, 158, 159],
        invcolor: SkinColorNum::FLAME,
        invshade: 8,
        chatcolor: ChatColor::Azure,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_AQUA
        name: Cow::Borrowed("Aqua"),
        ramp: [128, 128, 129, 130, 131, 132, 132, 133, 135, 136, 137, 137, 138, 139, 140, 141],
        invcolor: SkinColorNum::SEPIA,
        invshade: 7,
        chatcolor: ChatColor::Sky,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_TEAL
        name: Cow::Borrowed("Teal"),
        ramp: [134, 134, 135, 136, 137, 138, 138, 139, 141, 142, 143, 143, 144, 145, 146, 147],
        invcolor: SkinColorNum::BROWN,
        invshade: 10,
        chatcolor: ChatColor::Sky,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CYAN
        name: Cow::Borrowed("Cyan"),
        ramp: [130, 130, 131, 132, 133, 134, 134, 135, 137, 138, 139, 139, 140, 141, 142, 143],
        invcolor: SkinColorNum::BEIGE,
        invshade: 8,
        chatcolor: ChatColor::Sky,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_JAWZ
        name: Cow::Borrowed("Jawz"),
        ramp: [156, 156, 157, 158, 159, 160, 160, 161, 163, 164, 165, 165, 166, 167, 168, 169],
        invcolor: SkinColorNum::DAWN,
        invshade: 9,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_CERULEAN
        name: Cow::Borrowed("Cerulean"),
        ramp: [136, 136, 137, 138, 139, 140, 140, 141, 143, 144, 145, 145, 146, 147, 148, 149],
        invcolor: SkinColorNum::LEATHER,
        invshade: 11,
        chatcolor: ChatColor::Sky,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_NAVY
        name: Cow::Borrowed("Navy"),
        ramp: [162, 162, 163, 164, 165, 166, 166, 167, 169, 170, 171, 171, 172, 173, 174, 175],
        invcolor: SkinColorNum::ORANGE,
        invshade: 12,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PLATINUM
        name: Cow::Borrowed("Platinum"),
        ramp: [144, 144, 145, 146, 147, 148, 148, 149, 151, 152, 153, 153, 154, 155, 156, 157],
        invcolor: SkinColorNum::CINNAMON,
        invshade: 7,
        chatcolor: ChatColor::Azure,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SLATE
        name: Cow::Borrowed("Slate"),
        ramp: [148, 148, 149, 150, 151, 152, 152, 153, 155, 156, 157, 157, 158, 159, 160, 161],
        invcolor: SkinColorNum::DAWN,
        invshade: 9,
        chatcolor: ChatColor::Azure,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_STEEL
        name: Cow::Borrowed("Steel"),
        ramp: [152, 152, 153, 154, 155, 156, 156, 157, 159, 160, 161, 161, 162, 163, 164, 165],
        invcolor: SkinColorNum::CREAMSICLE,
        invshade: 11,
        chatcolor: ChatColor::Azure,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_THUNDER
        name: Cow::Borrowed("Thunder"),
        ramp: [68, 68, 69, 70, 71, 72, 72, 73, 75, 76, 77, 77, 78, 79, 80, 81],
        invcolor: SkinColorNum::PASTEL,
        invshade: 9,
        chatcolor: ChatColor::Yellow,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_RUST
        name: Cow::Borrowed("Rust"),
        ramp: [232, 232, 233, 234, 235, 236, 236, 237, 239, 240, 241, 241, 242, 243, 244, 245],
        invcolor: SkinColorNum::CERULEAN,
        invshade: 11,
        chatcolor: ChatColor::Brown,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_WRISTWATCH
        name: Cow::Borrowed("Wristwatch"),
        ramp: [184, 184, 185, 186, 187, 188, 188, 189, 191, 192, 193, 193, 194, 195, 196, 197],
        invcolor: SkinColorNum::BRONZE,
        invshade: 11,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_JET
        name: Cow::Borrowed("Jet"),
        ramp: [18, 18, 19, 20, 21, 22, 23, 24, 24, 25, 26, 27, 28, 29, 30, 31],
        invcolor: SkinColorNum::WHITE,
        invshade: 12,
        chatcolor: ChatColor::Gray,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_SAPPHIRE
        name: Cow::Borrowed("Sapphire"),
        ramp: [158, 158, 159, 160, 161, 162, 162, 163, 165, 166, 167, 167, 168, 169, 170, 171],
        invcolor: SkinColorNum::SUNSLAM,
        invshade: 10,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PERIWINKLE
        name: Cow::Borrowed("Periwinkle"),
        ramp: [154, 154, 155, 156, 157, 158, 158, 159, 161, 162, 163, 163, 164, 165, 166, 167],
        invcolor: SkinColorNum::FLAME,
        invshade: 8,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BLUE
        name: Cow::Borrowed("Blue"),
        ramp: [156, 156, 157, 158, 159, 160, 160, 161, 163, 164, 165, 165, 166, 167, 168, 169],
        invcolor: SkinColorNum::DAWN,
        invshade: 9,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BLUEBERRY
        name: Cow::Borrowed("Blueberry"),
        ramp: [160, 160, 161, 162, 163, 164, 164, 165, 167, 168, 169, 169, 170, 171, 172, 173],
        invcolor: SkinColorNum::CREAMSICLE,
        invshade: 11,
        chatcolor: ChatColor::Blue,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_NOVA
        name: Cow::Borrowed("Nova"),
        ramp: [176, 176, 177, 178, 179, 180, 180, 181, 183, 184, 185, 185, 186, 187, 188, 189],
        invcolor: SkinColorNum::POPCORN,
        invshade: 7,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PASTEL
        name: Cow::Borrowed("Pastel"),
        ramp: [178, 178, 179, 180, 181, 182, 182, 183, 185, 186, 187, 187, 188, 189, 190, 191],
        invcolor: SkinColorNum::CREAM,
        invshade: 8,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MOONSLAM
        name: Cow::Borrowed("Moonslam"),
        ramp: [182, 182, 183, 184, 185, 186, 186, 187, 189, 190, 191, 191, 192, 193, 194, 195],
        invcolor: SkinColorNum::ROYAL,
        invshade: 10,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_ULTRAVIOLET
        name: Cow::Borrowed("Ultraviolet"),
        ramp: [180, 180, 181, 182, 183, 184, 184, 185, 187, 188, 189, 189, 190, 191, 192, 193],
        invcolor: SkinColorNum::GOLD,
        invshade: 9,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_DUSK
        name: Cow::Borrowed("Dusk"),
        ramp: [186, 186, 187, 188, 189, 190, 190, 191, 193, 194, 195, 195, 196, 197, 198, 199],
        invcolor: SkinColorNum::YELLOW,
        invshade: 12,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BUBBLEGUM
        name: Cow::Borrowed("Bubblegum"),
        ramp: [184, 184, 185, 186, 187, 188, 188, 189, 191, 192, 193, 193, 194, 195, 196, 197],
        invcolor: SkinColorNum::OLIVE,
        invshade: 7,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_PURPLE
        name: Cow::Borrowed("Purple"),
        ramp: [180, 180, 181, 182, 183, 184, 184, 185, 187, 188, 189, 189, 190, 191, 192, 193],
        invcolor: SkinColorNum::GOLD,
        invshade: 9,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_FUCHSIA
        name: Cow::Borrowed("Fuchsia"),
        ramp: [188, 188, 189, 190, 191, 192, 192, 193, 195, 196, 197, 197, 198, 199, 200, 201],
        invcolor: SkinColorNum::LIME,
        invshade: 9,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_TOXIC
        name: Cow::Borrowed("Toxic"),
        ramp: [90, 90, 91, 92, 93, 94, 94, 95, 97, 98, 99, 99, 100, 101, 102, 103],
        invcolor: SkinColorNum::BUBBLEGUM,
        invshade: 8,
        chatcolor: ChatColor::Peridot,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_MAUVE
        name: Cow::Borrowed("Mauve"),
        ramp: [190, 190, 191, 192, 193, 194, 194, 195, 197, 198, 199, 199, 200, 201, 202, 203],
        invcolor: SkinColorNum::HANDHELD,
        invshade: 10,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_LAVENDER
        name: Cow::Borrowed("Lavender"),
        ramp: [178, 178, 179, 180, 181, 182, 182, 183, 185, 186, 187, 187, 188, 189, 190, 191],
        invcolor: SkinColorNum::CREAM,
        invshade: 8,
        chatcolor: ChatColor::Purple,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_BYZANTIUM
        name: Cow::Borrowed("Byzantium"),
        ramp: [192, 192, 193, 194, 195, 196, 196, 197, 199, 200, 201, 201, 202, 203, 204, 205],
        invcolor: SkinColorNum::TEA,
        invshade: 11,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_POMEGRANATE
        name: Cow::Borrowed("Pomegranate"),
        ramp: [194, 194, 195, 196, 197, 198, 198, 199, 201, 202, 203, 203, 204, 205, 206, 207],
        invcolor: SkinColorNum::TOXIC,
        invshade: 12,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
    SkinColor { // SKINCOLOR_LILAC
        name: Cow::Borrowed("Lilac"),
        ramp: [186, 186, 187, 188, 189, 190, 190, 191, 193, 194, 195, 195, 196, 197, 198, 199],
        invcolor: SkinColorNum::VOMIT,
        invshade: 8,
        chatcolor: ChatColor::Magenta,
        accessible: true,
    },
];
