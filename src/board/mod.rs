pub mod board;
pub use board::*;

pub mod color;
pub use color::*;

pub mod point;
pub use point::*;

pub mod sides;
pub use sides::*;
