use domino_canvas::pixel::Rgba8;

use crate::error::DominoError;

/// Number of distinct pip colors; also bounds the largest supported pip count.
pub const PALETTE_LEN: usize = 13;

const PIP_COLORS: [u32; PALETTE_LEN] = [
    0x000000, 0xFF6F00, 0xE454DD, 0x34E024, 0xFFC000, 0x61CBF3, 0x078F00, 0x0070C0, 0x9FA65F,
    0x7030A0, 0x808080, 0x9E6900, 0xD30000,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub line: Rgba8,
    pub background: Rgba8,
    pips: [Rgba8; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line: Rgba8::from_rgb_hex(0x000000),
            background: Rgba8::from_rgb_hex(0xFFFFFF),
            pips: PIP_COLORS.map(Rgba8::from_rgb_hex),
        }
    }
}

impl Palette {
    pub const MAX_PIPS: u8 = (PALETTE_LEN - 1) as u8;

    pub fn pip(&self, pips: u8) -> Result<Rgba8, DominoError> {
        self.pips
            .get(usize::from(pips))
            .copied()
            .ok_or(DominoError::PipCountOutOfRange {
                pips,
                max: Self::MAX_PIPS,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pip_color_is_distinct_and_opaque() {
        let palette = Palette::default();
        let colors: Vec<_> = (0..=Palette::MAX_PIPS)
            .map(|p| palette.pip(p).unwrap())
            .collect();
        assert!(colors.iter().all(|c| c.alpha() == 0xFF));
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn last_entry_is_max_pips() {
        let palette = Palette::default();
        assert_eq!(palette.pip(12).unwrap(), Rgba8::from_rgb_hex(0xD30000));
        assert!(matches!(
            palette.pip(13),
            Err(DominoError::PipCountOutOfRange { pips: 13, max: 12 })
        ));
    }
}
