use std::collections::HashMap;

use log::warn;

use crate::{InfoGroupType, InfoType};

/// Object fields held as world units (`f32`) in the generated tables
const FLOAT_FIELDS: [&str; 3] = ["speed", "radius", "height"];
const FRACUNIT: i64 = 1 << 16;

#[derive(Debug, Default)]
pub struct Data {
    pub sprites: Vec<String>,
    pub sounds: Vec<String>,
    pub state_order: Vec<String>,
    pub states: InfoGroupType,
    pub mobj_order: Vec<String>,
    pub mobj_info: InfoGroupType,
    pub color_order: Vec<String>,
    pub skin_colors: InfoGroupType,
}

#[derive(PartialOrd, PartialEq)]
enum LineState {
    InfoType(String),
    None,
}

pub fn parse_data(input: &str) -> Data {
    let mut data = Data::default();
    let mut line_state = LineState::None;

    for line in input.lines() {
        if line.starts_with(';') {
            continue;
        }

        if let LineState::InfoType(name) = &line_state {
            let name = name.clone();
            if line.trim().is_empty() {
                // reset
                line_state = LineState::None;
                continue;
            }
            let split: Vec<&str> = line.split_whitespace().collect();
            if split.len() < 2 {
                continue;
            }
            if let Some(entry) = data.mobj_info.get_mut(&name) {
                entry.insert(split[0].to_string(), validate_field(split[0], split[1]));
            }
            continue;
        }

        if line.starts_with('$') {
            let split: Vec<&str> = line.split_whitespace().collect();
            if split.len() < 2 {
                warn!("Object line without a name: {line}");
                continue;
            }
            let name = split[1].to_string();
            data.mobj_info.insert(name.clone(), HashMap::new());
            data.mobj_order.push(name.clone());
            line_state = LineState::InfoType(name);
        } else if line.starts_with("SPR_") {
            data.sprites
                .push(line.trim().trim_start_matches("SPR_").to_string());
        } else if line.starts_with("sfx_") {
            data.sounds.push(line.trim().to_string());
        } else if line.starts_with("S_") {
            if let Some((name, state)) = parse_state(line) {
                data.state_order.push(name.clone());
                data.states.insert(name, state);
            }
        } else if line.starts_with("SKINCOLOR_") {
            if let Some((name, color)) = parse_skin_color(line) {
                data.color_order.push(name.clone());
                data.skin_colors.insert(name, color);
            }
        }
    }

    data
}

/// `S_` line order: statename sprite frame tics action nextstate [var1] [var2]
fn parse_state(line: &str) -> Option<(String, InfoType)> {
    let split: Vec<&str> = line.split_whitespace().collect();
    if split.len() < 6 {
        warn!("State line is missing fields: {line}");
        return None;
    }

    let mut state = HashMap::new();
    state.insert("sprite".to_string(), format!("SpriteNum::{}", split[1]));
    state.insert("frame".to_string(), parse_frame(split[2]).to_string());
    state.insert("tics".to_string(), split[3].to_string());
    state.insert("action".to_string(), action_name(split[4]));
    state.insert("next_state".to_string(), state_const(split[5]));
    if let Some(var1) = split.get(6) {
        state.insert("var1".to_string(), var1.to_string());
    }
    if let Some(var2) = split.get(7) {
        state.insert("var2".to_string(), var2.to_string());
    }
    Some((split[0].to_string(), state))
}

/// `SKINCOLOR_` line order: ident "Name" ramp invcolor invshade chatcolor accessible
fn parse_skin_color(line: &str) -> Option<(String, InfoType)> {
    let split: Vec<&str> = line.split_whitespace().collect();
    if split.len() < 7 {
        warn!("Skin color line is missing fields: {line}");
        return None;
    }

    let ramp: Vec<&str> = split[2].split(',').collect();
    if ramp.len() != 16 {
        warn!("Skin color {} ramp must have 16 entries", split[0]);
        return None;
    }

    let mut color = HashMap::new();
    color.insert("name".to_string(), split[1].trim_matches('"').to_string());
    color.insert("ramp".to_string(), ramp.join(", "));
    color.insert("invcolor".to_string(), skincolor_const(split[3]));
    color.insert("invshade".to_string(), split[4].to_string());
    color.insert("chatcolor".to_string(), chat_color(split[5]));
    color.insert("accessible".to_string(), split[6].to_string());
    Some((split[0].to_string(), color))
}

/// Frames are a letter or number, optionally or'd with `FF_` flags. The
/// result is emitted as a plain number.
pub fn parse_frame(input: &str) -> u32 {
    let mut frame = 0;
    for (i, part) in input.split('|').enumerate() {
        if i == 0 {
            let mut chars = part.chars();
            frame = match (chars.next(), chars.next()) {
                (Some(c @ 'A'..='Z'), None) => c as u32 - 'A' as u32,
                _ => part.parse().unwrap_or(0),
            };
            continue;
        }
        frame |= match part {
            "FF_ANIMATE" => 0x4000,
            "FF_FULLBRIGHT" => 0x8000,
            "FF_PAPERSPRITE" => 0x10_0000,
            p if p.starts_with("FF_TRANS") => {
                match p.trim_start_matches("FF_TRANS").parse::<u32>() {
                    Ok(n) if n % 10 == 0 && (10..=90).contains(&n) => (n / 10) << 16,
                    _ => {
                        warn!("Unknown translucency {p}");
                        0
                    }
                }
            }
            p => {
                warn!("Unknown frame flag {p}");
                0
            }
        };
    }
    frame
}

fn validate_field(field: &str, input: &str) -> String {
    let is_float = FLOAT_FIELDS.contains(&field);
    if input.contains("*FRACUNIT") {
        let value = input.trim_end_matches("*FRACUNIT");
        if is_float {
            // Convert to something we can parse with f32
            format!("{value}.0")
        } else {
            value
                .parse::<i64>()
                .map(|n| (n * FRACUNIT).to_string())
                .unwrap_or_else(|_| input.to_string())
        }
    } else if input.starts_with("S_") {
        state_const(input)
    } else if input.starts_with("sfx_") {
        sound_const(input)
    } else if input.starts_with("MF_") {
        input
            .split('|')
            .map(|mf| {
                let append = mf.trim_start_matches("MF_").to_ascii_lowercase();
                format!("MapObjFlag::{} as u32", capitalize(&append))
            })
            .collect::<Vec<String>>()
            .join(" | ")
    } else if is_float && !input.contains('.') {
        format!("{input}.0")
    } else {
        input.to_string()
    }
}

fn action_name(input: &str) -> String {
    if input == "NULL" || input == "0" {
        "Action::None".to_string()
    } else {
        format!("Action::{}", input.trim_start_matches("A_"))
    }
}

fn state_const(input: &str) -> String {
    if input == "0" {
        "StateNum::NULL".to_string()
    } else {
        format!("StateNum::{}", input.trim_start_matches("S_"))
    }
}

fn sound_const(input: &str) -> String {
    format!(
        "SfxNum::{}",
        input.trim_start_matches("sfx_").to_ascii_uppercase()
    )
}

fn skincolor_const(input: &str) -> String {
    format!("SkinColorNum::{}", input.trim_start_matches("SKINCOLOR_"))
}

fn chat_color(input: &str) -> String {
    if input == "0" {
        return "ChatColor::None".to_string();
    }
    let name = input
        .trim_start_matches("V_")
        .trim_end_matches("MAP")
        .to_ascii_lowercase();
    format!("ChatColor::{}", capitalize(&name))
}

pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_data, parse_frame};
    use crate::read_file;
    use std::path::PathBuf;

    #[test]
    fn frames() {
        assert_eq!(parse_frame("A"), 0);
        assert_eq!(parse_frame("C"), 2);
        assert_eq!(parse_frame("12"), 12);
        assert_eq!(parse_frame("A|FF_FULLBRIGHT"), 32768);
        assert_eq!(parse_frame("B|FF_FULLBRIGHT|FF_ANIMATE"), 0xC001);
        assert_eq!(parse_frame("D|FF_TRANS60"), 0x6_0003);
        assert_eq!(parse_frame("A|FF_TRANS90"), 0x9_0000);
    }

    #[test]
    fn bad_translucency_is_dropped() {
        assert_eq!(parse_frame("D|FF_TRANS55"), 3);
        assert_eq!(parse_frame("D|FF_TRANS100"), 3);
        assert_eq!(parse_frame("D|FF_TRANS0"), 3);
        assert_eq!(parse_frame("B|FF_TRANSHALF|FF_FULLBRIGHT"), 0x8001);
    }

    #[test]
    fn test_info() {
        let data = read_file(PathBuf::from("kartinfo.txt")).unwrap();
        let data = parse_data(&data);

        assert_eq!(data.mobj_order[0], "MT_NULL");
        assert_eq!(data.mobj_order[3], "MT_PLAYER");

        let jawz = data.mobj_info.get("MT_JAWZ").unwrap();
        assert_eq!(jawz.get("spawnstate").unwrap(), "StateNum::JAWZ1");
        assert_eq!(jawz.get("deathstate").unwrap(), "StateNum::JAWZ_DEAD1");
        assert_eq!(jawz.get("seesound").unwrap(), "SfxNum::JAWZ");
        assert_eq!(jawz.get("speed").unwrap(), "64.0");
        assert_eq!(
            jawz.get("flags").unwrap(),
            "MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32"
        );

        let item = data.mobj_info.get("MT_RANDOMITEM").unwrap();
        assert_eq!(item.get("doomednum").unwrap(), "2000");
        assert_eq!(item.get("radius").unwrap(), "36.0");

        // Integer fields keep the raw fixed point value
        let spring = data.mobj_info.get("MT_REDSPRING").unwrap();
        assert_eq!(*spring.get("mass").unwrap(), (32 * 65536).to_string());
    }

    #[test]
    fn test_states() {
        let data = read_file(PathBuf::from("kartinfo.txt")).unwrap();
        let data = parse_data(&data);

        assert_eq!(data.state_order[0], "S_NULL");
        assert_eq!(data.sprites[0], "NULL");
        assert_eq!(data.sounds[0], "sfx_None");

        let state = data.states.get("S_JAWZ8").unwrap();
        assert_eq!(state.get("sprite").unwrap(), "SpriteNum::JAWZ");
        assert_eq!(state.get("frame").unwrap(), "7");
        assert_eq!(state.get("action").unwrap(), "Action::JawzChase");
        assert_eq!(state.get("next_state").unwrap(), "StateNum::JAWZ1");

        let state = data.states.get("S_RANDOMITEM1").unwrap();
        assert_eq!(state.get("frame").unwrap(), "49152");
        assert_eq!(state.get("tics").unwrap(), "-1");
        assert_eq!(state.get("var1").unwrap(), "23");
        assert_eq!(state.get("var2").unwrap(), "3");

        let state = data.states.get("S_KART_STND1").unwrap();
        assert_eq!(state.get("action").unwrap(), "Action::None");
        assert!(state.get("var1").is_none());
    }

    #[test]
    fn test_skin_colors() {
        let data = read_file(PathBuf::from("kartinfo.txt")).unwrap();
        let data = parse_data(&data);

        assert_eq!(data.color_order[0], "SKINCOLOR_NONE");
        let none = data.skin_colors.get("SKINCOLOR_NONE").unwrap();
        assert_eq!(none.get("chatcolor").unwrap(), "ChatColor::None");
        assert_eq!(none.get("accessible").unwrap(), "false");

        let white = data.skin_colors.get("SKINCOLOR_WHITE").unwrap();
        assert_eq!(white.get("name").unwrap(), "White");
        assert_eq!(white.get("invcolor").unwrap(), "SkinColorNum::BLACK");
        assert_eq!(white.get("chatcolor").unwrap(), "ChatColor::Gray");
        assert_eq!(white.get("ramp").unwrap().split(", ").count(), 16);
    }
}
