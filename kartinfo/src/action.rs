use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Callback run when an object enters a state. The tables only name the
/// action; the thinker binds each name to code and passes it the state's
/// `var1` and `var2`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// For a state with no action
    #[default]
    None,
    Look,
    Chase,
    Pain,
    Scream,
    Fall,
    /// `var1` is the sound to play
    PlaySound,
    /// Tics become a random value in `var1..=var2`
    SetRandomTics,
    /// Jump to a random state in `var1..=var2`
    RandomStateRange,
    /// Replace the object's flags with `var1`
    SetObjectFlags,
    ItemPop,
    JawzChase,
    JawzExplode,
    MineExplode,
    SPBChase,
    BallhogExplode,
    ThunderShield,
    HyudoroDecay,
    SignPlayer,
}

impl Action {
    pub const ALL: [Action; 19] = [
        Action::None,
        Action::Look,
        Action::Chase,
        Action::Pain,
        Action::Scream,
        Action::Fall,
        Action::PlaySound,
        Action::SetRandomTics,
        Action::RandomStateRange,
        Action::SetObjectFlags,
        Action::ItemPop,
        Action::JawzChase,
        Action::JawzExplode,
        Action::MineExplode,
        Action::SPBChase,
        Action::BallhogExplode,
        Action::ThunderShield,
        Action::HyudoroDecay,
        Action::SignPlayer,
    ];

    /// The `A_` identifier used in patch files, or `NULL`
    pub fn name(self) -> String {
        match self {
            Action::None => "NULL".to_string(),
            action => format!("A_{action:?}"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("NULL") || s.eq_ignore_ascii_case("None") || s == "0" {
            return Ok(Action::None);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown action {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Action;
    use std::str::FromStr;

    #[test]
    fn names() {
        assert_eq!(Action::JawzChase.name(), "A_JawzChase");
        assert_eq!(Action::None.to_string(), "NULL");
        assert_eq!(Action::from_str("a_spbchase"), Ok(Action::SPBChase));
        assert_eq!(Action::from_str("NULL"), Ok(Action::None));
        assert!(Action::from_str("A_Teleport").is_err());
    }
}
