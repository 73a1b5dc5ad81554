pub mod backend;
pub mod input;

pub use backend::*;
pub use input::*;
