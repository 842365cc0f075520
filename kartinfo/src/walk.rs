//! Following `next_state` links, and checking the tables hang together.

use crate::defs::{COLORRAMPSIZE, FrameFlag};
use crate::info::{MobjType, NUMSFX, SkinColorNum, SpriteNum, State, StateNum};
use crate::{InfoError, InfoTables};
use log::debug;
use std::collections::HashMap;

/// How a run of states finishes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChainEnd {
    /// Reached `S_NULL`, the object is removed
    Null,
    /// Stops on a state that lasts forever
    Hold(StateNum),
    /// Jumps back to a state already in the chain
    Loop(StateNum),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChain {
    /// Every state visited, in order, without repeats
    pub states: Vec<StateNum>,
    pub end: ChainEnd,
    /// Tics spent before the end is reached, or for one pass of a loop
    pub tics: u64,
}

/// Frame index shown by `state` once it has been entered for `elapsed` tics.
///
/// An `FF_ANIMATE` state steps from its own frame up through `var1` more
/// frames, `var2` tics each, then starts over.
pub fn animation_frame(state: &State, elapsed: u32) -> u32 {
    let frame = state.frame_index();
    if !state.has_flag(FrameFlag::Animate) || state.var1 <= 0 {
        return frame;
    }
    let per_frame = state.var2.max(1) as u32;
    frame + (elapsed / per_frame) % (state.var1 as u32 + 1)
}

impl InfoTables {
    /// Walk `next_state` from `start` until the chain ends
    pub fn state_chain(&self, start: StateNum) -> Result<StateChain, InfoError> {
        let mut seen: HashMap<StateNum, usize> = HashMap::new();
        let mut states = Vec::new();
        let mut tics = 0u64;
        let mut current = start;

        let end = loop {
            if current == StateNum::NULL {
                break ChainEnd::Null;
            }
            if let Some(&pos) = seen.get(&current) {
                if states[pos..].iter().all(|s: &StateNum| self.states[s.index()].tics == 0) {
                    return Err(InfoError::ZeroTicCycle(current));
                }
                break ChainEnd::Loop(current);
            }
            let state = self.state(current).ok_or_else(|| {
                InfoError::InvalidReference(format!("State {} does not exist", current.0))
            })?;
            seen.insert(current, states.len());
            states.push(current);
            if state.tics < 0 {
                break ChainEnd::Hold(current);
            }
            tics += state.tics as u64;
            current = state.next_state;
        };

        Ok(StateChain { states, end, tics })
    }

    /// Check every cross reference in the tables. Returns all problems found,
    /// an empty list means the tables are usable.
    pub fn validate(&self) -> Vec<InfoError> {
        let mut problems = Vec::new();
        self.validate_states(&mut problems);
        self.validate_mobjinfo(&mut problems);
        self.validate_skincolors(&mut problems);
        debug!("Validated info tables, {} problems", problems.len());
        problems
    }

    fn state_label(&self, state: StateNum) -> String {
        self.state_ident(state)
            .map(str::to_string)
            .unwrap_or_else(|| format!("state {}", state.0))
    }

    fn validate_states(&self, problems: &mut Vec<InfoError>) {
        let num_states = self.states.len();
        for (i, state) in self.states.iter().enumerate() {
            let label = || self.state_label(StateNum(i as u16));
            if state.sprite.index() >= SpriteNum::NUMSPRITES.index() {
                problems.push(InfoError::InvalidReference(format!(
                    "{} uses sprite {}",
                    label(),
                    state.sprite.0
                )));
            }
            if state.next_state.index() >= num_states {
                problems.push(InfoError::InvalidReference(format!(
                    "{} goes to state {}",
                    label(),
                    state.next_state.0
                )));
            }
        }

        // Every state has one successor, so a walk that comes back onto its
        // own path has found a cycle
        const NEW: u8 = 0;
        const ON_PATH: u8 = 1;
        const DONE: u8 = 2;
        let mut mark = vec![NEW; num_states];
        for start in 0..num_states {
            let mut path = Vec::new();
            let mut cycle_at = None;
            let mut current = start;
            while current < num_states {
                match mark[current] {
                    NEW => {}
                    ON_PATH => {
                        cycle_at = Some(current);
                        break;
                    }
                    _ => break,
                }
                mark[current] = ON_PATH;
                path.push(current);
                let state = &self.states[current];
                if current == StateNum::NULL.index() || state.tics < 0 {
                    break;
                }
                current = state.next_state.index();
            }
            if let Some(at) = cycle_at {
                if let Some(pos) = path.iter().position(|&s| s == at) {
                    if path[pos..].iter().all(|&s| self.states[s].tics == 0) {
                        problems.push(InfoError::ZeroTicCycle(StateNum(at as u16)));
                    }
                }
            }
            for s in path {
                mark[s] = DONE;
            }
        }
    }

    fn validate_mobjinfo(&self, problems: &mut Vec<InfoError>) {
        let mut doomednums: HashMap<i32, MobjType> = HashMap::new();
        for (i, info) in self.mobjinfo.iter().enumerate() {
            let kind = MobjType(i as u16);
            let label = || {
                self.mobj_ident(kind)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("object {i}"))
            };
            for (field, state) in info.state_fields() {
                if state.index() >= self.states.len() {
                    problems.push(InfoError::InvalidReference(format!(
                        "{} {field} is state {}",
                        label(),
                        state.0
                    )));
                }
            }
            for (field, sound) in info.sound_fields() {
                if sound.index() >= NUMSFX {
                    problems.push(InfoError::InvalidReference(format!(
                        "{} {field} is sound {}",
                        label(),
                        sound.0
                    )));
                }
            }
            if info.doomednum >= 0 {
                if let Some(first) = doomednums.get(&info.doomednum) {
                    problems.push(InfoError::DuplicateDoomEdNum {
                        doomednum: info.doomednum,
                        first: *first,
                        second: kind,
                    });
                } else {
                    doomednums.insert(info.doomednum, kind);
                }
            }
        }
    }

    fn validate_skincolors(&self, problems: &mut Vec<InfoError>) {
        let in_use = self.num_skincolors as usize;
        for (i, color) in self.skincolors.iter().enumerate().take(in_use).skip(1) {
            let label = || {
                self.skincolor_ident(SkinColorNum(i as u16))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("skin color {i}"))
            };
            if color.invcolor.index() >= in_use {
                problems.push(InfoError::InvalidReference(format!(
                    "{} inverts to unused color {}",
                    label(),
                    color.invcolor.0
                )));
            }
            if color.invshade as usize >= COLORRAMPSIZE {
                problems.push(InfoError::InvalidReference(format!(
                    "{} inverse shade {} is past the ramp",
                    label(),
                    color.invshade
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChainEnd, animation_frame};
    use crate::info::{MobjType, STATES, SkinColorNum, SpriteNum, StateNum};
    use crate::{InfoError, InfoTables};

    #[test]
    fn builtin_tables_are_valid() {
        let tables = InfoTables::new();
        assert_eq!(tables.validate(), Vec::new());
    }

    #[test]
    fn chain_ends() {
        let tables = InfoTables::new();

        let chain = tables.state_chain(StateNum::KART_STND1).unwrap();
        assert_eq!(chain.states, vec![StateNum::KART_STND1, StateNum::KART_STND2]);
        assert_eq!(chain.end, ChainEnd::Loop(StateNum::KART_STND1));
        assert_eq!(chain.tics, 2);

        let chain = tables.state_chain(StateNum::EGGMANITEM_DEAD).unwrap();
        assert_eq!(chain.states[1], StateNum::EXPLOSION1);
        assert_eq!(chain.end, ChainEnd::Null);

        let chain = tables.state_chain(StateNum::RANDOMITEM1).unwrap();
        assert_eq!(chain.end, ChainEnd::Hold(StateNum::RANDOMITEM1));
        assert_eq!(chain.tics, 0);

        let chain = tables.state_chain(StateNum::NULL).unwrap();
        assert!(chain.states.is_empty());
        assert_eq!(chain.end, ChainEnd::Null);
    }

    #[test]
    fn zero_tic_cycle() {
        let mut tables = InfoTables::new();
        let a = StateNum::FIRSTFREESLOT;
        let b = StateNum(a.0 + 1);
        tables.states[a.index()].next_state = b;
        tables.states[b.index()].next_state = a;

        assert_eq!(tables.state_chain(a), Err(InfoError::ZeroTicCycle(a)));
        assert_eq!(tables.validate(), vec![InfoError::ZeroTicCycle(a)]);

        tables.states[b.index()].tics = 1;
        assert_eq!(tables.state_chain(a).unwrap().end, ChainEnd::Loop(a));
        assert!(tables.validate().is_empty());
    }

    #[test]
    fn bad_references() {
        let mut tables = InfoTables::new();
        tables.mobjinfo[MobjType::BANANA.index()].doomednum = 551;
        tables.mobjinfo[MobjType::ORBINAUT.index()].painsound.0 = 500;
        tables.skincolors[SkinColorNum::BLUE.index()].invshade = 16;

        let problems = tables.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems.contains(&InfoError::DuplicateDoomEdNum {
            doomednum: 551,
            first: MobjType::BANANA,
            second: MobjType::REDSPRING,
        }));
    }

    #[test]
    fn long_chain_tics() {
        let mut tables = InfoTables::new();
        let summary = tables.apply_soc(
            "FREESLOT\nS_SLOW1\nS_SLOW2\nS_SLOW3\n\n\
             STATE S_SLOW1\nDURATION = 2147483647\nNEXT = S_SLOW2\n\n\
             STATE S_SLOW2\nDURATION = 2147483647\nNEXT = S_SLOW3\n\n\
             STATE S_SLOW3\nDURATION = 2147483647\nNEXT = S_SLOW1\n",
        );
        assert!(summary.warnings.is_empty(), "{:?}", summary.warnings);

        let first = tables.state_by_name("S_SLOW1").unwrap();
        let chain = tables.state_chain(first).unwrap();
        assert_eq!(chain.states.len(), 3);
        assert_eq!(chain.end, ChainEnd::Loop(first));
        assert_eq!(chain.tics, 3 * i32::MAX as u64);
    }

    #[test]
    fn out_of_range_references() {
        let mut tables = InfoTables::new();
        let a = StateNum::FIRSTFREESLOT;
        let b = StateNum(a.0 + 1);
        let mobj = MobjType::FIRSTFREESLOT;
        tables.states[a.index()].sprite = SpriteNum::NUMSPRITES;
        tables.states[b.index()].next_state = StateNum::NUMSTATES;
        tables.mobjinfo[mobj.index()].deathstate = StateNum::NUMSTATES;
        tables.skincolors[SkinColorNum::BLUE.index()].invcolor = SkinColorNum::FIRSTFREESLOT;

        let problems = tables.validate();
        assert_eq!(
            problems,
            vec![
                InfoError::InvalidReference(format!(
                    "state {} uses sprite {}",
                    a.0,
                    SpriteNum::NUMSPRITES.0
                )),
                InfoError::InvalidReference(format!(
                    "state {} goes to state {}",
                    b.0,
                    StateNum::NUMSTATES.0
                )),
                InfoError::InvalidReference(format!(
                    "object {} deathstate is state {}",
                    mobj.0,
                    StateNum::NUMSTATES.0
                )),
                InfoError::InvalidReference(format!(
                    "SKINCOLOR_BLUE inverts to unused color {}",
                    SkinColorNum::FIRSTFREESLOT.0
                )),
            ]
        );
    }

    #[test]
    fn animation() {
        let st = &STATES[StateNum::RANDOMITEM1.index()];
        assert_eq!(animation_frame(st, 0), 0);
        assert_eq!(animation_frame(st, 2), 0);
        assert_eq!(animation_frame(st, 3), 1);
        assert_eq!(animation_frame(st, 3 * 23), 23);
        assert_eq!(animation_frame(st, 3 * 24), 0);

        let st = &STATES[StateNum::JAWZ1.index()];
        assert_eq!(animation_frame(st, 100), st.frame_index());
    }
}
