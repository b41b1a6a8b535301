pub mod calc;
pub mod demo;
pub mod text;

pub use calc::*;
pub use demo::*;
pub use text::*;
