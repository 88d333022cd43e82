// Parser module - tokenization pipeline and AST builder
mod error;
mod statements;

// Public exports
pub use error::{FrontendError, ParseError};

use std::path::Path;

use crate::ast::Ast;
use crate::classifier::{Statement, StatementKind};
use crate::config::{FrontendConfig, LinePartPolicy};
use crate::lexer;
use crate::resolver::Resolver;

/// Lex, resolve and classify a whole source
///
/// One resolver serves the entire source so dynamic counters run across
/// statements. The first Unknown statement aborts the run.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, config: &FrontendConfig) -> Result<Vec<Statement>, ParseError> {
    let raw_statements = lexer::lex(source, config)?;
    let mut resolver = Resolver::new();
    let mut statements = Vec::with_capacity(raw_statements.len());

    for (index, raw) in raw_statements.into_iter().enumerate() {
        let tokens = resolver.resolve_words(&raw.words)?;
        let statement = Statement::new(index, raw.text, tokens);

        if statement.kind == StatementKind::Unknown {
            let code = statement.tokens.first().map(|t| t.code);
            return Err(ParseError::unclassified(index, &statement.text, code));
        }

        tracing::trace!(index, kind = %statement.kind, "classified statement");
        statements.push(statement);
    }

    tracing::debug!(
        statements = statements.len(),
        punctuation = resolver.punctuation_count(),
        "tokenized source"
    );
    Ok(statements)
}

// Builder structure
pub struct Parser<'a> {
    statements: &'a [Statement],
    current: usize,
    ast: Ast,
    line_parts: LinePartPolicy,
}

impl<'a> Parser<'a> {
    pub fn new(statements: &'a [Statement], config: &FrontendConfig) -> Self {
        Self {
            statements,
            current: 0,
            ast: Ast::with_limit(config.max_ast_nodes),
            line_parts: config.line_parts,
        }
    }

    // Main building entry point
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        while self.current < self.statements.len() {
            self.parse_statement()?;
            self.current += 1;
        }
        tracing::debug!(
            nodes = self.ast.node_count(),
            leaves = self.ast.leaf_count(),
            "built program tree"
        );
        Ok(self.ast)
    }

    /// Helper: statement under construction
    fn current_statement(&self) -> &'a Statement {
        &self.statements[self.current]
    }
}

/// Build the program tree from classified statements
pub fn build(statements: &[Statement], config: &FrontendConfig) -> Result<Ast, ParseError> {
    Parser::new(statements, config).parse()
}

/// Parse source text into a program tree
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str, config: &FrontendConfig) -> Result<Ast, ParseError> {
    let statements = tokenize(source, config)?;
    build(&statements, config)
}

/// Read a file and parse it; I/O failures stay distinct from parse failures
pub fn parse_file<P: AsRef<Path>>(path: P, config: &FrontendConfig) -> Result<Ast, FrontendError> {
    let source = read_source(path.as_ref())?;
    Ok(parse_source(&source, config)?)
}

/// Read a source file into memory
pub fn read_source(path: &Path) -> Result<String, FrontendError> {
    std::fs::read_to_string(path).map_err(|e| FrontendError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LeafValue;
    use crate::token::{IDENTIFIER_BASE, NUMERIC_BASE};

    fn parse(source: &str) -> Result<Ast, ParseError> {
        parse_source(source, &FrontendConfig::default())
    }

    #[test]
    fn test_tokenize_single_allocation() {
        let statements = tokenize("let x = 5;", &FrontendConfig::default()).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].kind, StatementKind::Allocation);
        assert_eq!(
            statements[0].codes(),
            vec![0, IDENTIFIER_BASE, 24, NUMERIC_BASE]
        );
        assert_eq!(statements[0].text, "let x = 5");
    }

    #[test]
    fn test_tokenize_counters_span_statements() {
        let statements = tokenize("let a = 1; let b = 2;", &FrontendConfig::default()).unwrap();
        assert_eq!(statements[1].codes()[1], IDENTIFIER_BASE + 1);
        assert_eq!(statements[1].codes()[3], NUMERIC_BASE + 1);
        assert_eq!(statements[1].index, 1);
    }

    #[test]
    fn test_tokenize_rejects_unknown_leading_code() {
        let result = tokenize("H q; SDG q;", &FrontendConfig::default());
        assert_eq!(
            result,
            Err(ParseError::UnclassifiedStatement {
                index: 1,
                text: "SDG q".to_string(),
                code: Some(18),
            })
        );
    }

    #[test]
    fn test_parse_allocation_leaf() {
        let ast = parse("let x = 5;").unwrap();
        assert_eq!(ast.top_level().len(), 1);
        let node = ast.node(ast.top_level()[0]);
        assert_eq!(node.statement_kind(), StatementKind::Allocation);
        assert_eq!(node.data, "let x = 5");
        let leaves: Vec<_> = ast.leaves_of(ast.top_level()[0]).collect();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].value, LeafValue::Str("x".into()));
    }

    #[test]
    fn test_unknown_aborts_whole_parse() {
        assert!(matches!(
            parse("let a = 1; SDG a;"),
            Err(ParseError::UnclassifiedStatement { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_file_reports_io_separately() {
        let result = parse_file("/nonexistent/qompiler/input.qc", &FrontendConfig::default());
        assert!(matches!(result, Err(FrontendError::Io { .. })));
    }

    #[test]
    fn test_parse_file_reads_source() {
        let path = std::env::temp_dir().join("qompiler_parse_file_test.qc");
        std::fs::write(&path, "gate g { H q; };\nH q;\n").unwrap();

        let ast = parse_file(&path, &FrontendConfig::default()).unwrap();
        assert_eq!(ast.top_level().len(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
