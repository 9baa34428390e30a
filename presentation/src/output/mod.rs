//! Report output: terminal rendering and file export

pub mod console;
pub mod export;
