pub mod calculator;
pub mod cli;
pub mod config;
pub mod core;
pub mod string_processor;

pub use calculator::Calculator;
pub use config::DemoConfig;
pub use self::core::{Arithmetic, CalcError, CalcResult, Operation, TextTransform};
pub use string_processor::StringProcessor;
