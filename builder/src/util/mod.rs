pub mod process;
pub mod scratch;
