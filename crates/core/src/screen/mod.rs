//! Types for 2D screen space. Nothing in here knows about hex coordinates;
//! see [Grid](crate::Grid) for converting between the two spaces.

pub mod shape;
mod unit;

pub use self::unit::*;
