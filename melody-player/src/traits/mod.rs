pub mod timer;
pub mod tone;

pub use timer::*;
pub use tone::*;
