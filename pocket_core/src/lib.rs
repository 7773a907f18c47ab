//! Facelet-level model of the 2×2×2 pocket cube: the state representation,
//! the eighteen face turns, and whole-cube rotational symmetry reduction.
//!
//! Everything in this crate is a pure function over value-like states; all
//! mutation happens by producing new [`CubeState`] values.

pub mod cube;
pub mod moves;
pub mod symmetry;

pub use cube::{Color, CubeState, FACELET_COUNT, Face, ParseStateError};
pub use moves::{Move, ParseMoveError, Twist, format_alg, parse_alg};
pub use symmetry::{canonicalize, reorientations};
