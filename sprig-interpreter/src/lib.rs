pub mod environment;
pub mod error;
pub mod evaluator;
pub mod value;
