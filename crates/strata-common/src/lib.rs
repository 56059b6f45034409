//! Shared types for the Strata compiler: spans, the string interner, the
//! generic arena/handle machinery, the token vocabulary, file loading, and
//! the diagnostic/error model every other crate builds on.

pub mod arena;
pub mod diagnostic;
pub mod error;
pub mod file;
pub mod intern;
pub mod span;
pub mod token;

pub use arena::Arena;
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use error::CompileError;
pub use file::{FileArena, FileId, FileRecord};
pub use intern::{Keywords, StringArena, StringId};
pub use span::{LineIndex, Span};
pub use token::{keyword_from_str, Token, TokenKind};
