//! Textual dumps consumed by the CLI and external tooling.
//!
//! Both formats print one block per statement or node, in source order, each
//! block followed by a blank line.

use std::fmt;

use crate::ast::{Ast, identifier_to_string};
use crate::classifier::Statement;

/// Statement dump: kind, token codes, raw text
///
/// The text is escaped so every block stays three lines long, even for
/// bodies spanning several lines.
///
/// ```text
/// Allocation
/// {0,3000000,24,1000000}
/// "let x = 5"
/// ```
pub struct StatementDump<'a>(pub &'a [Statement]);

impl fmt::Display for StatementDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for statement in self.0 {
            writeln!(f, "{}", statement.kind)?;
            writeln!(f, "{{{}}}", identifier_to_string(&statement.codes()))?;
            writeln!(f, "{:?}", statement.text)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tree trace: node kind and data, then one line per leaf
///
/// ```text
/// Allocation "let x = 5"
///   leaf 0: "x"
/// ```
pub struct AstDump<'a>(pub &'a Ast);

impl fmt::Display for AstDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ast = self.0;
        for &node_idx in ast.top_level() {
            let node = ast.node(node_idx);
            writeln!(f, "{} {:?}", node.statement_kind(), node.data)?;
            for leaf in ast.leaves_of(node_idx) {
                writeln!(f, "  leaf {}: {}", leaf.id, leaf.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn dump_statements(statements: &[Statement]) -> String {
    StatementDump(statements).to_string()
}

pub fn dump_ast(ast: &Ast) -> String {
    AstDump(ast).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;
    use crate::parser::{parse_source, tokenize};

    #[test]
    fn test_statement_dump_format() {
        let statements = tokenize("let x = 5;\nH x;", &FrontendConfig::default()).unwrap();
        assert_eq!(
            dump_statements(&statements),
            "Allocation\n{0,3000000,24,1000000}\n\"let x = 5\"\n\n\
             Expression\n{5,3000001}\n\"H x\"\n\n"
        );
    }

    #[test]
    fn test_ast_dump_format() {
        let ast = parse_source("let x = 5; gate g { H q; }; 3;", &FrontendConfig::default())
            .unwrap();
        assert_eq!(
            dump_ast(&ast),
            "Allocation \"let x = 5\"\n  leaf 0: \"x\"\n\n\
             Process \"g\"\n  leaf 0: \"gate g { H q; }\"\n  leaf 1: 3\n\n"
        );
    }

    #[test]
    fn test_statement_dump_keeps_multi_line_text_on_one_line() {
        let source = "gate g {\n  H q;\n\n  T q;\n};\nlet z = 0;";
        let statements = tokenize(source, &FrontendConfig::default()).unwrap();
        let dump = dump_statements(&statements);

        let blocks: Vec<_> = dump.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), statements.len());
        assert!(blocks.iter().all(|block| block.lines().count() == 3));
        assert_eq!(
            blocks[0].lines().last(),
            Some("\"gate g {\\n  H q;\\n\\n  T q;\\n}\"")
        );
    }

    #[test]
    fn test_empty_dumps() {
        assert_eq!(dump_statements(&[]), "");
        assert_eq!(dump_ast(&Ast::new()), "");
    }
}
