use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of facelet positions on the cube's surface.
pub const FACELET_COUNT: usize = 24;

/// Facelet colors.
///
/// The derived ordering follows the ASCII order of the one-letter symbols
/// (B < G < O < R < W < Y), so comparing two states is the same as comparing
/// their rendered 24-letter strings. The canonical-form minimum relies on
/// this.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Color {
    Blue,
    Green,
    Orange,
    Red,
    White,
    Yellow,
}

impl Color {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Color> {
        Some(match letter {
            'B' => Color::Blue,
            'G' => Color::Green,
            'O' => Color::Orange,
            'R' => Color::Red,
            'W' => Color::White,
            'Y' => Color::Yellow,
            _ => return None,
        })
    }
}

/// One of the six faces, in the order their facelet blocks appear in the
/// fixed index layout:
///
/// ```text
///      0  1
///      2  3
/// 4 5  8  9 12 13 16 17
/// 6 7 10 11 14 15 18 19
///     20 21
///     22 23
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Index of the face's first facelet in the fixed layout.
    #[must_use]
    pub const fn base(self) -> usize {
        self as usize * 4
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        Some(match letter {
            'U' => Face::Up,
            'L' => Face::Left,
            'F' => Face::Front,
            'R' => Face::Right,
            'B' => Face::Back,
            'D' => Face::Down,
            _ => return None,
        })
    }
}

/// A full facelet configuration: one color per position in the fixed
/// layout. Value-like; every operation produces a new state.
///
/// A well-formed state is a permutation of the solved multiset (four
/// facelets of each color). Move application preserves this structurally,
/// and callers constructing states by hand are responsible for it; it is
/// deliberately not validated here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeState {
    pub(crate) facelets: [Color; FACELET_COUNT],
}

impl CubeState {
    /// The reference configuration `YYYYBBBBRRRRGGGGOOOOWWWW`: one color
    /// per face.
    pub const SOLVED: CubeState = {
        use Color::{Blue, Green, Orange, Red, White, Yellow};
        CubeState {
            facelets: [
                Yellow, Yellow, Yellow, Yellow, Blue, Blue, Blue, Blue, Red, Red, Red, Red, Green,
                Green, Green, Green, Orange, Orange, Orange, Orange, White, White, White, White,
            ],
        }
    };

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.facelets {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeState({self})")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseStateError {
    #[error("expected {FACELET_COUNT} facelets, found {0}")]
    WrongLength(usize),
    #[error("unknown color symbol `{0}`")]
    UnknownColor(char),
}

impl FromStr for CubeState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != FACELET_COUNT {
            return Err(ParseStateError::WrongLength(s.chars().count()));
        }

        let mut facelets = [Color::Yellow; FACELET_COUNT];

        for (spot, letter) in facelets.iter_mut().zip(s.chars()) {
            *spot = Color::from_letter(letter).ok_or(ParseStateError::UnknownColor(letter))?;
        }

        Ok(CubeState { facelets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_round_trips_through_display() {
        assert_eq!(CubeState::SOLVED.to_string(), "YYYYBBBBRRRRGGGGOOOOWWWW");
        assert_eq!(
            "YYYYBBBBRRRRGGGGOOOOWWWW".parse::<CubeState>(),
            Ok(CubeState::SOLVED),
        );
        assert!(CubeState::SOLVED.is_solved());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "YYYY".parse::<CubeState>(),
            Err(ParseStateError::WrongLength(4)),
        );
        assert_eq!(
            "YYYYBBBBRRRRGGGGOOOOWWWX".parse::<CubeState>(),
            Err(ParseStateError::UnknownColor('X')),
        );
    }

    #[test]
    fn test_state_ordering_matches_string_ordering() {
        let a: CubeState = "BROOWGRGWYWBGBOYWOGYRYBR".parse().unwrap();
        let b = CubeState::SOLVED;
        assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
        assert!(a < b);
    }

    #[test]
    fn test_face_bases_tile_the_layout() {
        let bases: Vec<usize> = Face::ALL.iter().map(|face| face.base()).collect();
        assert_eq!(bases, vec![0, 4, 8, 12, 16, 20]);
    }
}
