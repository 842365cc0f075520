//! Generates the `kartinfo` table modules from the plain text table source.
//!
//! ```text,ignore
//! cargo run -p multigen -- --info multigen/kartinfo.txt --out kartinfo/src/info
//! ```

mod info_strings;
mod parse_info;
mod strings;

use crate::info_strings::*;
use crate::parse_info::{Data, parse_data};
use crate::strings::{color_to_string, const_line, info_to_string, state_to_string};
use gumdrop::Options;
use log::info;
use simplelog::TermLogger;
use std::collections::HashMap;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Options)]
struct CLIOptions {
    #[options(no_short, meta = "", help = "path to info data")]
    info: PathBuf,
    #[options(no_short, meta = "", help = "directory to write generated files to")]
    out: PathBuf,
    #[options(help = "multigen options help")]
    help: bool,
}

type InfoType = HashMap<String, String>;
type InfoGroupType = HashMap<String, InfoType>;

fn main() -> Result<(), Box<dyn Error>> {
    let options = CLIOptions::parse_args_default_or_exit();

    TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // Lines starting with:
    // - `;` are comments
    // - `SPR_` are sprite names, `sfx_` are sound names, in table order
    // - `$` are MapObjInfo, and may not include all possible fields
    // - `S_` are `StateNum::*`, and `State`
    // - `SKINCOLOR_` are `SkinColorNum::*`, and `SkinColor`
    let data = read_file(options.info)?;
    let data = parse_data(&data);
    info!(
        "Parsed {} sprites, {} sounds, {} states, {} objects, {} skin colors",
        data.sprites.len(),
        data.sounds.len(),
        data.state_order.len(),
        data.mobj_order.len(),
        data.color_order.len()
    );

    write_file(&options.out.join("sprites.rs"), &sprites_file(&data)?)?;
    write_file(&options.out.join("sounds.rs"), &sounds_file(&data))?;
    write_file(&options.out.join("states.rs"), &states_file(&data))?;
    write_file(&options.out.join("map_object_info.rs"), &mobj_info_file(&data))?;
    write_file(&options.out.join("skin_colors.rs"), &skin_colors_file(&data))?;
    Ok(())
}

fn read_file(path: PathBuf) -> Result<String, io::Error> {
    let mut file = OpenOptions::new().read(true).open(&path)?;
    let mut buf = String::new();
    if file.read_to_string(&mut buf)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{path:?} had no data"),
        ));
    }
    Ok(buf)
}

fn write_file(path: &Path, data: &str) -> Result<(), io::Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data.as_bytes())?;
    info!("Wrote {path:?}");
    Ok(())
}

fn sprites_file(data: &Data) -> Result<String, io::Error> {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(SPRITE_HEADER_STR);
    for (i, name) in data.sprites.iter().enumerate() {
        out.push_str(&const_line("SpriteNum", name, i));
    }
    out.push_str(SPRITE_SLOTS_STR);
    out.push_str(&format!(
        "\npub const NUM_BUILTIN_SPRITES: usize = {};\n",
        data.sprites.len()
    ));
    out.push_str(SPRITE_NAME_ARRAY_STR);
    for name in data.sprites.iter() {
        if name.len() != 4 || !name.is_ascii() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Sprite name {name} must be four ASCII characters"),
            ));
        }
        out.push_str(&format!("\n    SpriteName(*b\"{name}\"),"));
    }
    out.push_str(ARRAY_END_STR);
    Ok(out)
}

fn sounds_file(data: &Data) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(SOUND_HEADER_STR);
    for (i, name) in data.sounds.iter().enumerate() {
        let name = name.trim_start_matches("sfx_").to_ascii_uppercase();
        out.push_str(&const_line("SfxNum", &name, i));
    }
    out.push_str("\n}\n");
    out.push_str(&format!(
        "\npub const NUMSFX: usize = {};\n",
        data.sounds.len()
    ));
    out.push_str(SOUND_NAME_ARRAY_STR);
    for name in data.sounds.iter() {
        out.push_str(&format!("\n    \"{name}\","));
    }
    out.push_str(ARRAY_END_STR);
    out
}

fn states_file(data: &Data) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(STATE_HEADER_STR);
    for (i, name) in data.state_order.iter().enumerate() {
        out.push_str(&const_line("StateNum", name.trim_start_matches("S_"), i));
    }
    out.push_str(STATE_SLOTS_STR);
    out.push_str(&format!(
        "\npub const NUM_BUILTIN_STATES: usize = {};\n",
        data.state_order.len()
    ));
    out.push_str(STATE_NAME_ARRAY_STR);
    for name in data.state_order.iter() {
        out.push_str(&format!("\n    \"{name}\","));
    }
    out.push_str(ARRAY_END_STR);
    out.push_str(STATE_ARRAY_STR);
    for name in data.state_order.iter() {
        if let Some(state) = data.states.get(name) {
            out.push_str(&state_to_string(name, state));
        }
    }
    out.push_str(ARRAY_END_STR);
    out
}

fn mobj_info_file(data: &Data) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(MOBJ_INFO_HEADER_STR);
    for (i, name) in data.mobj_order.iter().enumerate() {
        out.push_str(&const_line("MobjType", name.trim_start_matches("MT_"), i));
    }
    out.push_str(MOBJ_SLOTS_STR);
    out.push_str(&format!(
        "\npub const NUM_BUILTIN_MOBJS: usize = {};\n",
        data.mobj_order.len()
    ));
    out.push_str(MOBJ_NAME_ARRAY_STR);
    for name in data.mobj_order.iter() {
        out.push_str(&format!("\n    \"{name}\","));
    }
    out.push_str(ARRAY_END_STR);
    out.push_str(MOBJ_INFO_ARRAY_STR);
    for name in data.mobj_order.iter() {
        if let Some(info) = data.mobj_info.get(name) {
            out.push_str(&info_to_string(name, info));
        }
    }
    out.push_str(ARRAY_END_STR);
    out
}

fn skin_colors_file(data: &Data) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(SKINCOLOR_HEADER_STR);
    for (i, name) in data.color_order.iter().enumerate() {
        out.push_str(&const_line(
            "SkinColorNum",
            name.trim_start_matches("SKINCOLOR_"),
            i,
        ));
    }
    out.push_str(SKINCOLOR_SLOTS_STR);
    out.push_str(&format!(
        "\npub const NUM_BUILTIN_SKINCOLORS: usize = {};\n",
        data.color_order.len()
    ));
    out.push_str(SKINCOLOR_IDENT_ARRAY_STR);
    for name in data.color_order.iter() {
        out.push_str(&format!("\n    \"{name}\","));
    }
    out.push_str(ARRAY_END_STR);
    out.push_str(SKINCOLOR_ARRAY_STR);
    for name in data.color_order.iter() {
        if let Some(color) = data.skin_colors.get(name) {
            out.push_str(&color_to_string(name, color));
        }
    }
    out.push_str(ARRAY_END_STR);
    out
}

#[cfg(test)]
mod tests {
    use crate::parse_info::parse_data;
    use crate::{read_file, sprites_file, states_file};
    use std::path::PathBuf;

    #[test]
    fn generated_sprites() {
        let data = read_file(PathBuf::from("kartinfo.txt")).unwrap();
        let data = parse_data(&data);
        let out = sprites_file(&data).unwrap();
        assert!(out.contains("pub const NULL: SpriteNum = SpriteNum(0);"));
        assert!(out.contains("pub const PLAY: SpriteNum = SpriteNum(3);"));
        assert!(out.contains("SpriteName(*b\"JAWZ\"),"));
    }

    #[test]
    fn bad_sprite_name() {
        let data = parse_data("SPR_TOOLONG\n");
        assert!(sprites_file(&data).is_err());
    }

    #[test]
    fn generated_states() {
        let data = read_file(PathBuf::from("kartinfo.txt")).unwrap();
        let data = parse_data(&data);
        let out = states_file(&data);
        assert!(out.contains("pub const NULL: StateNum = StateNum(0);"));
        assert!(out.contains("\"S_KART_STND1\","));
        assert_eq!(
            out.matches("State { //").count(),
            data.state_order.len()
        );
    }
}
