use crate::info::SkinColorNum;
use crate::{InfoError, InfoTables};

/// First palette index of the green ramp that player sprites are drawn in
pub const DEFAULT_STARTTRANSCOLOR: u8 = 96;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TranslationKind {
    /// Swap the sprite's ramp for the skin color's
    Skin,
    /// Swap in the ramp of the skin color's inverse
    Inverse,
    /// Every index to palette entry 0
    AllWhite,
}

impl InfoTables {
    /// Build a 256 entry palette remap for drawing a sprite in `color`. The
    /// sixteen indices from `start` are replaced, the rest map to themselves.
    pub fn translation(
        &self,
        kind: TranslationKind,
        color: SkinColorNum,
        start: u8,
    ) -> Result<[u8; 256], InfoError> {
        if kind == TranslationKind::AllWhite {
            return Ok([0; 256]);
        }

        let in_use = 1..self.num_skincolors as usize;
        if !in_use.contains(&color.index()) {
            return Err(InfoError::BadColor(color));
        }
        let color = match kind {
            TranslationKind::Inverse => {
                let inverse = self.skincolors[color.index()].invcolor;
                if !in_use.contains(&inverse.index()) {
                    return Err(InfoError::BadColor(inverse));
                }
                inverse
            }
            _ => color,
        };

        let mut map = [0u8; 256];
        for (i, entry) in map.iter_mut().enumerate() {
            *entry = i as u8;
        }
        let ramp = &self.skincolors[color.index()].ramp;
        for (entry, shade) in map[start as usize..].iter_mut().zip(ramp) {
            *entry = *shade;
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_STARTTRANSCOLOR, TranslationKind};
    use crate::info::{SKINCOLORS, SkinColorNum};
    use crate::{InfoError, InfoTables};

    #[test]
    fn skin_ramp() {
        let tables = InfoTables::new();
        let map = tables
            .translation(TranslationKind::Skin, SkinColorNum::BLUE, DEFAULT_STARTTRANSCOLOR)
            .unwrap();
        let start = DEFAULT_STARTTRANSCOLOR as usize;
        assert_eq!(map[0], 0);
        assert_eq!(map[start - 1], start as u8 - 1);
        assert_eq!(
            &map[start..start + 16],
            &SKINCOLORS[SkinColorNum::BLUE.index()].ramp[..]
        );
        assert_eq!(map[start + 16], start as u8 + 16);
    }

    #[test]
    fn inverse_ramp() {
        let tables = InfoTables::new();
        let map = tables
            .translation(TranslationKind::Inverse, SkinColorNum::WHITE, 0)
            .unwrap();
        assert_eq!(&map[..16], &SKINCOLORS[SkinColorNum::BLACK.index()].ramp[..]);
    }

    #[test]
    fn ramp_clipped_at_palette_end() {
        let tables = InfoTables::new();
        let map = tables
            .translation(TranslationKind::Skin, SkinColorNum::WHITE, 250)
            .unwrap();
        assert_eq!(&map[250..], &SKINCOLORS[SkinColorNum::WHITE.index()].ramp[..6]);
    }

    #[test]
    fn colors_out_of_use() {
        let tables = InfoTables::new();
        assert_eq!(
            tables.translation(TranslationKind::Skin, SkinColorNum::NONE, 96),
            Err(InfoError::BadColor(SkinColorNum::NONE))
        );
        assert_eq!(
            tables.translation(TranslationKind::Skin, SkinColorNum::FIRSTFREESLOT, 96),
            Err(InfoError::BadColor(SkinColorNum::FIRSTFREESLOT))
        );
        assert_eq!(
            tables.translation(TranslationKind::AllWhite, SkinColorNum::NONE, 96),
            Ok([0; 256])
        );
    }

    #[test]
    fn inverse_of_unused_color() {
        let mut tables = InfoTables::new();
        tables.skincolors[SkinColorNum::BLUE.index()].invcolor = SkinColorNum::FIRSTFREESLOT;
        assert_eq!(
            tables.translation(TranslationKind::Inverse, SkinColorNum::BLUE, 96),
            Err(InfoError::BadColor(SkinColorNum::FIRSTFREESLOT))
        );
        assert!(
            tables
                .translation(TranslationKind::Skin, SkinColorNum::BLUE, 96)
                .is_ok()
        );
    }
}
