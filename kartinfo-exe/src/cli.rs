use argh::FromArgs;
use kartinfo::log;
use std::str::FromStr;

/// Which table `--list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Sprites,
    States,
    Objects,
    Colors,
}

impl FromStr for ListKind {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sprites" => Ok(Self::Sprites),
            "states" => Ok(Self::States),
            "objects" | "mobjs" => Ok(Self::Objects),
            "colors" | "skincolors" => Ok(Self::Colors),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "Invalid table, expected sprites, states, objects or colors",
            )),
        }
    }
}

/// Inspect, patch and check the kart info tables
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// path to a text patch to apply, may be repeated
    #[argh(option)]
    pub soc: Vec<String>,
    /// print a table <sprites, states, objects, colors>
    #[argh(option)]
    pub list: Option<ListKind>,
    /// print an object template, by MT_ name or number
    #[argh(option)]
    pub object: Option<String>,
    /// print the object placed by an editor thing number
    #[argh(option)]
    pub doomednum: Option<i32>,
    /// print the chain of states starting at an S_ name or number
    #[argh(option)]
    pub state: Option<String>,
    /// print a skin color and its translation, by name or SKINCOLOR_ ident
    #[argh(option)]
    pub color: Option<String>,
    /// first palette index replaced by skin color translations
    #[argh(option)]
    pub start_trans_color: Option<u8>,
    /// check every cross reference in the tables after patching
    #[argh(switch)]
    pub validate: bool,
    /// roll tables back after patching: 1 sprites, 2 states, 4 objects, 8
    /// skin colors, or'd together
    #[argh(option)]
    pub reset: Option<u32>,
    /// don't snapshot the tables before patching
    #[argh(switch)]
    pub no_backup: bool,
    /// write the patch list and options used to the user config
    #[argh(switch)]
    pub save_config: bool,
}
