//! `kartinfo` loads the kart info tables, applies any text patches given to
//! it, and prints or checks the result.
//!
//! ```text,ignore
//! kartinfo --soc dud.soc --object MT_DUD --validate
//! kartinfo --list colors
//! kartinfo --soc dud.soc --reset 6 --state S_JAWZ1
//! ```

mod cli;
mod config;
mod dump;

use cli::*;
use kartinfo::log::{self, error, info, warn};
use kartinfo::{InfoTables, MobjType, StateNum};
use simplelog::TermLogger;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::UserConfig;

const BASE_DIR: &str = "kartinfo/";

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = UserConfig::load()?;
    user_config.sync_cli(&mut options);
    if options.save_config {
        user_config.write()?;
    }

    let mut tables = InfoTables::new();
    if !options.no_backup {
        tables.backup_tables()?;
    }

    for path in options.soc.iter() {
        let text = read_file(PathBuf::from(path))?;
        let summary = tables.apply_soc(&text);
        if !summary.warnings.is_empty() {
            warn!("{} had {} problems", path, summary.warnings.len());
        }
    }

    if let Some(flags) = options.reset {
        tables.reset_data(flags)?;
    }

    if let Some(kind) = options.list {
        print!("{}", dump::list(&tables, kind));
    }

    if let Some(name) = options.object.as_deref() {
        let kind = name
            .parse::<u16>()
            .ok()
            .map(MobjType)
            .or_else(|| tables.mobj_by_name(name))
            .ok_or_else(|| format!("No object named {name}"))?;
        print!("{}", dump::object(&tables, kind)?);
    }

    if let Some(doomednum) = options.doomednum {
        let kind = tables
            .mobj_by_doomednum(doomednum)
            .ok_or_else(|| format!("No object has doomednum {doomednum}"))?;
        print!("{}", dump::object(&tables, kind)?);
    }

    if let Some(name) = options.state.as_deref() {
        let state = name
            .parse::<u16>()
            .ok()
            .map(StateNum)
            .or_else(|| tables.state_by_name(name))
            .ok_or_else(|| format!("No state named {name}"))?;
        print!("{}", dump::state_chain(&tables, state)?);
    }

    if let Some(name) = options.color.as_deref() {
        let color = tables
            .skincolor_by_name(name)
            .or_else(|| tables.skincolor_by_ident(name))
            .ok_or_else(|| format!("No skin color named {name}"))?;
        let start = options
            .start_trans_color
            .unwrap_or(user_config.start_trans_color);
        print!("{}", dump::color(&tables, color, start)?);
    }

    if options.validate {
        let problems = tables.validate();
        for problem in problems.iter() {
            error!("{problem}");
        }
        if !problems.is_empty() {
            return Err(format!("{} problems found in the info tables", problems.len()).into());
        }
        info!("Info tables are consistent");
    }
    Ok(())
}

fn read_file(path: PathBuf) -> Result<String, io::Error> {
    let mut file = OpenOptions::new().read(true).open(&path)?;
    let mut buf = String::new();
    if file.read_to_string(&mut buf)? == 0 {
        warn!("{path:?} had no data");
    }
    Ok(buf)
}
