use clap::ValueEnum;
use macroquad::prelude::Color;

use crate::domain::CellState;

/// Colour lookup for live cell ages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    /// A distinct colour for every age 1..=12
    #[default]
    Full,
    /// Odd ages only; even ages render as background
    Reference,
}

/// Age 1..=12, indexed from 0
const FULL: [(u8, u8, u8); 12] = [
    (255, 0, 0),
    (255, 10, 122),
    (255, 20, 147),
    (255, 92, 74),
    (255, 165, 0),
    (250, 188, 0),
    (245, 211, 0),
    (181, 225, 11),
    (116, 238, 21),
    (59, 247, 138),
    (1, 255, 255),
    (240, 0, 255),
];

const REFERENCE: [(u8, (u8, u8, u8)); 6] = [
    (1, (255, 0, 0)),
    (3, (255, 20, 147)),
    (5, (255, 165, 0)),
    (7, (245, 211, 0)),
    (9, (116, 238, 21)),
    (11, (1, 255, 255)),
];

const BACKGROUND: (u8, u8, u8) = (14, 17, 17);

impl Palette {
    /// Colour of a cell, or `None` when it draws as background
    pub fn color(self, state: CellState) -> Option<Color> {
        let age = state.get();
        let (r, g, b) = match self {
            Palette::Full => *FULL.get(usize::from(age).checked_sub(1)?)?,
            Palette::Reference => REFERENCE
                .iter()
                .find(|(key, _)| *key == age)
                .map(|&(_, rgb)| rgb)?,
        };
        Some(Color::from_rgba(r, g, b, 255))
    }

    pub fn background() -> Color {
        let (r, g, b) = BACKGROUND;
        Color::from_rgba(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(v: u8) -> CellState {
        CellState::new(v).unwrap()
    }

    #[test]
    fn test_dead_is_background_in_both() {
        assert_eq!(Palette::Full.color(CellState::DEAD), None);
        assert_eq!(Palette::Reference.color(CellState::DEAD), None);
    }

    #[test]
    fn test_full_covers_every_age() {
        let colors: Vec<Color> = (1..=CellState::MAX_AGE)
            .map(|age| Palette::Full.color(state(age)).unwrap())
            .collect();
        assert_eq!(colors.len(), 12);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_reference_colors_odd_ages_only() {
        for age in 1..=CellState::MAX_AGE {
            let color = Palette::Reference.color(state(age));
            assert_eq!(color.is_some(), age % 2 == 1, "age {age}");
        }
    }

    #[test]
    fn test_palettes_agree_on_shared_hues() {
        for age in [1, 3, 5, 7, 9, 11] {
            assert_eq!(
                Palette::Full.color(state(age)),
                Palette::Reference.color(state(age))
            );
        }
    }
}
