pub mod error;
pub mod melody;

pub use error::*;
pub use melody::*;
