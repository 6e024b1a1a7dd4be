//! Text formats for exchanging patterns with the outside world.

pub mod rle;

pub use rle::{RlePattern, decode, encode};
