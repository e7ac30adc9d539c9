pub mod cli;
pub mod value;
