pub mod dice;
pub use dice::*;

pub mod game;
pub use game::*;

pub mod phase;
pub use phase::*;

pub mod roll;
pub use roll::*;

pub mod stall;
pub use stall::*;

pub mod violation;
pub use violation::*;
