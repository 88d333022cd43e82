//! Front end for a line-oriented quantum circuit language.
//!
//! Source text is split into statements, every word is resolved to a numeric
//! token code, statements are classified by their leading code and a program
//! tree is built from the classified statements.

pub mod ast;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod dump;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod string_storage;
pub mod token;

pub use ast::{Ast, AstNode, Leaf, LeafId, LeafValue, NodeId, NodeKind};
pub use classifier::{Statement, StatementKind};
pub use config::{FrontendConfig, LinePartPolicy};
pub use parser::{FrontendError, ParseError, parse_file, parse_source, tokenize};
pub use token::Token;
