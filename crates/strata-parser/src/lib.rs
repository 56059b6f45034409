pub mod ast;
pub mod compilation;
pub mod parser;

pub use compilation::{Compilation, MAX_SCOPE_DEPTH};
pub use parser::{parse_file, Parser, Program, TopLevelItem};
