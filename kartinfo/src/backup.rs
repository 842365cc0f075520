//! Compressed snapshots of the info tables, taken once everything built in
//! has loaded so that patches can be rolled back.

use crate::defs::ResetFlag;
use crate::freeslot::SlotKind;
use crate::info::{MapObjInfo, SkinColor, SpriteName, SpriteNum, State};
use crate::{InfoError, InfoTables};
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One table, serialised and then LZF compressed. Tables that LZF can't
/// shrink are stored as is.
#[derive(Debug, Clone)]
pub struct TableBackup {
    data: Vec<u8>,
    raw_len: usize,
    crc: u32,
    compressed: bool,
}

impl TableBackup {
    pub fn new<T: Serialize + ?Sized>(table: &T) -> Result<Self, InfoError> {
        let raw = bincode::serialize(table).map_err(|e| InfoError::Serialize(e.to_string()))?;
        let crc = crc32fast::hash(&raw);
        let raw_len = raw.len();
        let (data, compressed) = match lzf::compress(&raw) {
            Ok(data) => (data, true),
            Err(e) => {
                debug!("Storing {raw_len} bytes uncompressed: {e:?}");
                (raw, false)
            }
        };
        Ok(Self {
            data,
            raw_len,
            crc,
            compressed,
        })
    }

    /// Unpack the table, checking it against the length and checksum taken
    /// when it was stored
    pub fn restore<T: DeserializeOwned>(&self, table: &'static str) -> Result<T, InfoError> {
        let raw = if self.compressed {
            lzf::decompress(&self.data, self.raw_len).map_err(|e| {
                warn!("Could not decompress {table}: {e:?}");
                InfoError::BackupCorrupt(table)
            })?
        } else {
            self.data.clone()
        };
        if raw.len() != self.raw_len || crc32fast::hash(&raw) != self.crc {
            return Err(InfoError::BackupCorrupt(table));
        }
        bincode::deserialize(&raw).map_err(|e| InfoError::Serialize(e.to_string()))
    }

    /// Bytes held by the snapshot
    pub fn stored_len(&self) -> usize {
        self.data.len()
    }

    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

#[derive(Debug, Clone)]
pub struct TablesBackup {
    pub sprnames: TableBackup,
    pub states: TableBackup,
    pub mobjinfo: TableBackup,
    pub skincolors: TableBackup,
}

impl TablesBackup {
    pub fn stored_len(&self) -> usize {
        self.sprnames.stored_len()
            + self.states.stored_len()
            + self.mobjinfo.stored_len()
            + self.skincolors.stored_len()
    }

    pub fn raw_len(&self) -> usize {
        self.sprnames.raw_len()
            + self.states.raw_len()
            + self.mobjinfo.raw_len()
            + self.skincolors.raw_len()
    }
}

impl InfoTables {
    /// Snapshot every table, replacing any earlier snapshot
    pub fn backup_tables(&mut self) -> Result<(), InfoError> {
        let backup = TablesBackup {
            sprnames: TableBackup::new(&self.sprnames)?,
            states: TableBackup::new(&self.states)?,
            mobjinfo: TableBackup::new(&self.mobjinfo)?,
            skincolors: TableBackup::new(&self.skincolors)?,
        };
        info!(
            "Backed up info tables, {} bytes packed to {}",
            backup.raw_len(),
            backup.stored_len()
        );
        self.backup = Some(backup);
        Ok(())
    }

    pub fn backup(&self) -> Option<&TablesBackup> {
        self.backup.as_ref()
    }

    /// Restore the tables selected by `flags`, a set of `ResetFlag` bits,
    /// from the last snapshot. Free slot allocations are kept, and allocated
    /// sprites keep their names.
    ///
    /// Nothing is changed unless every selected table restores cleanly.
    pub fn reset_data(&mut self, flags: u32) -> Result<(), InfoError> {
        let backup = self.backup.as_ref().ok_or(InfoError::NoBackup)?;
        let wants = |flag: ResetFlag| flags & flag as u32 != 0;

        let sprnames = if wants(ResetFlag::Sprites) {
            Some(backup.sprnames.restore::<Vec<SpriteName>>("sprnames")?)
        } else {
            None
        };
        let states = if wants(ResetFlag::States) {
            Some(backup.states.restore::<Vec<State>>("states")?)
        } else {
            None
        };
        let mobjinfo = if wants(ResetFlag::MobjInfo) {
            Some(backup.mobjinfo.restore::<Vec<MapObjInfo>>("mobjinfo")?)
        } else {
            None
        };
        let skincolors = if wants(ResetFlag::SkinColors) {
            Some(backup.skincolors.restore::<Vec<SkinColor>>("skincolors")?)
        } else {
            None
        };

        if sprnames.as_ref().is_some_and(|t| t.len() != self.sprnames.len()) {
            return Err(InfoError::BackupCorrupt("sprnames"));
        }
        if states.as_ref().is_some_and(|t| t.len() != self.states.len()) {
            return Err(InfoError::BackupCorrupt("states"));
        }
        if mobjinfo.as_ref().is_some_and(|t| t.len() != self.mobjinfo.len()) {
            return Err(InfoError::BackupCorrupt("mobjinfo"));
        }
        if skincolors.as_ref().is_some_and(|t| t.len() != self.skincolors.len()) {
            return Err(InfoError::BackupCorrupt("skincolors"));
        }

        if let Some(sprnames) = sprnames {
            let allocated = self.freeslots.used(SlotKind::Sprite);
            let first = SpriteNum::FIRSTFREESLOT.index();
            let kept: Vec<_> = self.sprnames[first..first + allocated].to_vec();
            self.sprnames = sprnames;
            self.sprnames[first..first + allocated].copy_from_slice(&kept);
            debug!("Reset sprite names");
        }
        if let Some(states) = states {
            self.states = states;
            debug!("Reset states");
        }
        if let Some(mobjinfo) = mobjinfo {
            self.mobjinfo = mobjinfo;
            debug!("Reset object info");
        }
        if let Some(skincolors) = skincolors {
            self.skincolors = skincolors;
            debug!("Reset skin colors");
        }
        info!("Reset info tables with flags {flags:#x}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TableBackup;
    use crate::defs::ResetFlag;
    use crate::info::{MobjType, SkinColorNum, SpriteNum, StateNum};
    use crate::{Action, InfoError, InfoTables};

    #[test]
    fn reset_needs_backup() {
        let mut tables = InfoTables::new();
        assert_eq!(tables.reset_data(ResetFlag::ALL), Err(InfoError::NoBackup));
    }

    #[test]
    fn tables_compress() {
        let mut tables = InfoTables::new();
        tables.backup_tables().unwrap();
        let backup = tables.backup().unwrap();
        // The free slots are long runs of identical rows
        assert!(backup.states.is_compressed());
        assert!(backup.stored_len() < backup.raw_len());
    }

    #[test]
    fn incompressible_data_kept_raw() {
        // Too short for LZF to gain anything
        let backup = TableBackup::new(&[7u8, 1, 250]).unwrap();
        assert!(!backup.is_compressed());
        assert_eq!(backup.restore::<[u8; 3]>("test").unwrap(), [7, 1, 250]);
    }

    #[test]
    fn reset_selected_tables() {
        let mut tables = InfoTables::new();
        tables.backup_tables().unwrap();

        tables.states[StateNum::JAWZ1.index()].tics = 99;
        tables.states[StateNum::JAWZ1.index()].action = Action::None;
        tables.mobjinfo[MobjType::JAWZ.index()].doomednum = 1234;
        tables.skincolors[SkinColorNum::BLUE.index()].accessible = false;

        tables.reset_data(ResetFlag::States as u32).unwrap();
        assert_eq!(tables.states[StateNum::JAWZ1.index()].action, Action::JawzChase);
        assert_ne!(tables.states[StateNum::JAWZ1.index()].tics, 99);
        assert_eq!(tables.mobjinfo[MobjType::JAWZ.index()].doomednum, 1234);

        tables
            .reset_data(ResetFlag::MobjInfo as u32 | ResetFlag::SkinColors as u32)
            .unwrap();
        assert_eq!(tables.mobjinfo[MobjType::JAWZ.index()].doomednum, -1);
        assert!(tables.skincolors[SkinColorNum::BLUE.index()].accessible);
    }

    #[test]
    fn allocations_survive_reset() {
        let mut tables = InfoTables::new();
        tables.backup_tables().unwrap();
        let spr = tables.freeslot("SPR_DUDZ").unwrap();
        let mt = tables.freeslot("MT_DUD").unwrap();
        tables.mobjinfo[mt as usize].doomednum = 4000;

        tables.reset_data(ResetFlag::ALL).unwrap();
        assert_eq!(tables.sprnames[spr as usize].as_str(), "DUDZ");
        assert_eq!(
            tables.sprnames[SpriteNum::FIRSTFREESLOT.index() + 1].as_str(),
            "F002"
        );
        assert_eq!(tables.mobj_by_name("MT_DUD"), Some(MobjType(mt)));
        assert_eq!(tables.mobjinfo[mt as usize].doomednum, -1);
    }

    #[test]
    fn corrupt_backup_is_refused() {
        let mut tables = InfoTables::new();
        tables.backup_tables().unwrap();
        tables.mobjinfo[MobjType::SPB.index()].doomednum = 77;
        if let Some(backup) = tables.backup.as_mut() {
            backup.mobjinfo.crc ^= 1;
        }
        assert_eq!(
            tables.reset_data(ResetFlag::ALL),
            Err(InfoError::BackupCorrupt("mobjinfo"))
        );
        // Nothing restored, including the tables that were intact
        assert_eq!(tables.mobjinfo[MobjType::SPB.index()].doomednum, 77);
    }
}
