use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::cube::{CubeState, Face};

/// Rotation amount of a single face turn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Twist {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Twist {
    /// Quarter-turn applications realizing the twist. Quarter turns have
    /// order four, so a counter-clockwise turn is three clockwise ones.
    const fn quarter_turns(self) -> usize {
        match self {
            Twist::Clockwise => 1,
            Twist::Half => 2,
            Twist::CounterClockwise => 3,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Twist::Clockwise => "",
            Twist::CounterClockwise => "'",
            Twist::Half => "2",
        }
    }
}

/// One of the eighteen face turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub face: Face,
    pub twist: Twist,
}

/// Clockwise quarter-turn cycles indexed by face: the four facelets of the
/// turning face, then the eight border facelets on the neighboring faces.
/// Counter-clockwise and half turns reuse the same row, so there is exactly
/// one rotation rule for the whole move set.
const CYCLES: [[usize; 12]; 6] = [
    [0, 2, 3, 1, 4, 5, 8, 9, 12, 13, 16, 17],      // U
    [4, 6, 7, 5, 17, 19, 22, 20, 10, 8, 2, 0],     // L
    [8, 10, 11, 9, 5, 7, 20, 21, 14, 12, 3, 2],    // F
    [12, 14, 15, 13, 1, 3, 9, 11, 21, 23, 18, 16], // R
    [16, 18, 19, 17, 6, 4, 0, 1, 13, 15, 23, 22],  // B
    [20, 22, 23, 21, 19, 18, 15, 14, 11, 10, 7, 6], // D
];

/// One clockwise quarter turn: the face facelets rotate one step in their
/// 4-cycle, and the border facelets form two interleaved 4-cycles, so each
/// border destination receives the value two slots ahead modulo eight.
fn quarter_turn(state: &CubeState, cycle: &[usize; 12]) -> CubeState {
    let mut next = *state;

    for i in 0..4 {
        next.facelets[cycle[i]] = state.facelets[cycle[(i + 1) % 4]];
    }

    for i in 0..8 {
        next.facelets[cycle[4 + i]] = state.facelets[cycle[4 + (i + 2) % 8]];
    }

    next
}

impl Move {
    /// The full move set, in wire-token order.
    pub const ALL: [Move; 18] = {
        let faces = [
            Face::Up,
            Face::Down,
            Face::Front,
            Face::Back,
            Face::Left,
            Face::Right,
        ];
        let twists = [Twist::Clockwise, Twist::CounterClockwise, Twist::Half];

        let mut moves = [Move {
            face: Face::Up,
            twist: Twist::Clockwise,
        }; 18];
        let mut i = 0;
        while i < 18 {
            moves[i] = Move {
                face: faces[i / 3],
                twist: twists[i % 3],
            };
            i += 1;
        }
        moves
    };

    /// The move undoing this one. Involutive; half turns are self-inverse.
    #[must_use]
    pub const fn inverse(self) -> Move {
        let twist = match self.twist {
            Twist::Clockwise => Twist::CounterClockwise,
            Twist::CounterClockwise => Twist::Clockwise,
            Twist::Half => Twist::Half,
        };
        Move {
            face: self.face,
            twist,
        }
    }
}

impl CubeState {
    /// Apply a single move, producing the successor state.
    #[must_use]
    pub fn apply(&self, mv: Move) -> CubeState {
        let cycle = &CYCLES[mv.face as usize];

        let mut state = *self;
        for _ in 0..mv.twist.quarter_turns() {
            state = quarter_turn(&state, cycle);
        }
        state
    }

    /// Apply a move sequence left to right.
    #[must_use]
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        moves.iter().fold(*self, |state, &mv| state.apply(mv))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.twist.suffix())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown move `{0}`")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter);
        let twist = match chars.as_str() {
            "" => Some(Twist::Clockwise),
            "'" => Some(Twist::CounterClockwise),
            "2" => Some(Twist::Half),
            _ => None,
        };

        match (face, twist) {
            (Some(face), Some(twist)) => Ok(Move { face, twist }),
            _ => Err(ParseMoveError(s.to_owned())),
        }
    }
}

/// Parse a whitespace-separated move sequence.
pub fn parse_alg(alg: &str) -> Result<Vec<Move>, ParseMoveError> {
    alg.split_whitespace().map(str::parse).collect()
}

/// Render a move sequence as space-joined wire tokens.
#[must_use]
pub fn format_alg(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
