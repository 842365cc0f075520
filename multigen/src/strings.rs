use crate::InfoType;

pub fn const_line(ty: &str, name: &str, index: usize) -> String {
    format!("\n    pub const {name}: {ty} = {ty}({index});")
}

#[rustfmt::skip]
pub fn state_to_string(name: &str, info: &InfoType) -> String {
    format!(
        r#"
    State {{ // {name}
        sprite: {sprite},
        frame: {frame},
        tics: {tics},
        action: {action},
        var1: {var1},
        var2: {var2},
        next_state: {next_state},
    }},"#,
        sprite = info.get("sprite").expect("State requires sprite name"),
        frame = info.get("frame").expect("State requires frame"),
        tics = info.get("tics").expect("State requires tics"),
        action = info.get("action").expect("State requires action"),
        var1 = info.get("var1").map(String::as_str).unwrap_or("0"),
        var2 = info.get("var2").map(String::as_str).unwrap_or("0"),
        next_state = info
            .get("next_state")
            .expect("State requires next_state name"),
    )
}

fn state_or_null(info: &InfoType, field: &str) -> String {
    info.get(field)
        .map(String::as_str)
        .map(|n| if n == "0" { "StateNum::NULL" } else { n })
        .unwrap_or("StateNum::NULL")
        .to_string()
}

fn sound_or_none(info: &InfoType, field: &str) -> String {
    info.get(field)
        .map(String::as_str)
        .map(|n| if n == "0" { "SfxNum::NONE" } else { n })
        .unwrap_or("SfxNum::NONE")
        .to_string()
}

fn field_or<'a>(info: &'a InfoType, field: &str, default: &'a str) -> &'a str {
    info.get(field).map(String::as_str).unwrap_or(default)
}

pub fn info_to_string(name: &str, info: &InfoType) -> String {
    format!(
        r#"
    // {name}
    MapObjInfo {{
        doomednum: {doomednum},
        spawnstate: {spawnstate},
        spawnhealth: {spawnhealth},
        seestate: {seestate},
        seesound: {seesound},
        reactiontime: {reactiontime},
        attacksound: {attacksound},
        painstate: {painstate},
        painchance: {painchance},
        painsound: {painsound},
        meleestate: {meleestate},
        missilestate: {missilestate},
        deathstate: {deathstate},
        xdeathstate: {xdeathstate},
        deathsound: {deathsound},
        speed: {speed},
        radius: {radius},
        height: {height},
        dispoffset: {dispoffset},
        mass: {mass},
        damage: {damage},
        activesound: {activesound},
        flags: {flags},
        raisestate: {raisestate},
    }},"#,
        doomednum = field_or(info, "doomednum", "-1"),
        spawnstate = state_or_null(info, "spawnstate"),
        spawnhealth = field_or(info, "spawnhealth", "0"),
        seestate = state_or_null(info, "seestate"),
        seesound = sound_or_none(info, "seesound"),
        reactiontime = field_or(info, "reactiontime", "8"),
        attacksound = sound_or_none(info, "attacksound"),
        painstate = state_or_null(info, "painstate"),
        painchance = field_or(info, "painchance", "0"),
        painsound = sound_or_none(info, "painsound"),
        meleestate = state_or_null(info, "meleestate"),
        missilestate = state_or_null(info, "missilestate"),
        deathstate = state_or_null(info, "deathstate"),
        xdeathstate = state_or_null(info, "xdeathstate"),
        deathsound = sound_or_none(info, "deathsound"),
        speed = field_or(info, "speed", "0.0"),
        radius = field_or(info, "radius", "20.0"),
        height = field_or(info, "height", "16.0"),
        dispoffset = field_or(info, "dispoffset", "0"),
        mass = field_or(info, "mass", "100"),
        damage = field_or(info, "damage", "0"),
        activesound = sound_or_none(info, "activesound"),
        flags = field_or(info, "flags", "0"),
        raisestate = state_or_null(info, "raisestate"),
    )
}

pub fn color_to_string(ident: &str, info: &InfoType) -> String {
    format!(
        r#"
    SkinColor {{ // {ident}
        name: Cow::Borrowed("{name}"),
        ramp: [{ramp}],
        invcolor: {invcolor},
        invshade: {invshade},
        chatcolor: {chatcolor},
        accessible: {accessible},
    }},"#,
        name = field_or(info, "name", ""),
        ramp = field_or(info, "ramp", "0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0"),
        invcolor = field_or(info, "invcolor", "SkinColorNum::NONE"),
        invshade = field_or(info, "invshade", "0"),
        chatcolor = field_or(info, "chatcolor", "ChatColor::None"),
        accessible = field_or(info, "accessible", "false"),
    )
}

#[cfg(test)]
mod tests {
    use crate::parse_info::parse_data;
    use crate::strings::{color_to_string, info_to_string, state_to_string};

    const DATA: &str = r#"
S_BANANA        BANA A|FF_FULLBRIGHT    -1  NULL    S_NULL  2   4

$ MT_BANANA
spawnstate      S_BANANA
seesound        sfx_tossed
radius          16*FRACUNIT
flags           MF_SHOOTABLE|MF_BOUNCE

SKINCOLOR_WHITE "White" 0,0,1,2,3,4,5,6,7,8,9,10,11,12,13,14 SKINCOLOR_BLACK 7 V_GRAYMAP true
"#;

    #[test]
    fn state_string() {
        let data = parse_data(DATA);
        let state = data.states.get("S_BANANA").unwrap();
        let out = state_to_string("S_BANANA", state);
        assert!(out.contains("State { // S_BANANA"));
        assert!(out.contains("sprite: SpriteNum::BANA,"));
        assert!(out.contains("frame: 32768,"));
        assert!(out.contains("var2: 4,"));
        assert!(out.contains("next_state: StateNum::NULL,"));
    }

    #[test]
    fn info_string_defaults() {
        let data = parse_data(DATA);
        let info = data.mobj_info.get("MT_BANANA").unwrap();
        let out = info_to_string("MT_BANANA", info);
        assert!(out.contains("doomednum: -1,"));
        assert!(out.contains("reactiontime: 8,"));
        assert!(out.contains("radius: 16.0,"));
        assert!(out.contains("height: 16.0,"));
        assert!(out.contains("seesound: SfxNum::TOSSED,"));
        assert!(out.contains("deathsound: SfxNum::NONE,"));
        assert!(out.contains("flags: MapObjFlag::Shootable as u32 | MapObjFlag::Bounce as u32,"));
    }

    #[test]
    fn color_string() {
        let data = parse_data(DATA);
        let info = data.skin_colors.get("SKINCOLOR_WHITE").unwrap();
        let out = color_to_string("SKINCOLOR_WHITE", info);
        assert!(out.contains(r#"name: Cow::Borrowed("White"),"#));
        assert!(out.contains("ramp: [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],"));
        assert!(out.contains("invcolor: SkinColorNum::BLACK,"));
        assert!(out.contains("chatcolor: ChatColor::Gray,"));
    }
}
