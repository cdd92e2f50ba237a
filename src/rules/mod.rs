pub mod legality;
pub use legality::*;

pub mod play;
pub use play::*;

pub mod spot;
pub use spot::*;
