use super::{ParseError, Parser};
use crate::ast::{AstNode, LeafValue, NodeId, NodeKind};
use crate::classifier::StatementKind;
use crate::config::LinePartPolicy;

// Per-kind node construction
impl<'a> Parser<'a> {
    /// Build whatever the current statement contributes to the tree
    pub(super) fn parse_statement(&mut self) -> Result<(), ParseError> {
        let statement = self.current_statement();
        match statement.kind {
            StatementKind::Allocation => {
                self.parse_allocation()?;
            }
            StatementKind::Process => {
                self.parse_process()?;
            }
            StatementKind::Expression => {
                self.parse_expression()?;
            }
            StatementKind::LinePart => self.parse_line_part()?,
            StatementKind::Unknown => {
                let code = statement.tokens.first().map(|t| t.code);
                return Err(ParseError::unclassified(
                    statement.index,
                    &statement.text,
                    code,
                ));
            }
        }
        Ok(())
    }

    /// Allocation: one leaf holding the variable name
    fn parse_allocation(&mut self) -> Result<NodeId, ParseError> {
        let statement = self.current_statement();
        let var_name = self.operand()?;

        let node = AstNode::new(
            NodeKind::Allocation {
                var_name: var_name.clone(),
            },
            statement.codes(),
            statement.text.as_str(),
        );
        let node_idx = self.ast.add_top_level(node)?;
        self.ast.append_leaf(node_idx, LeafValue::Str(var_name))?;

        Ok(node_idx)
    }

    /// Process: one leaf per physical line of the body
    fn parse_process(&mut self) -> Result<NodeId, ParseError> {
        let statement = self.current_statement();
        let name = self.operand()?;

        let node = AstNode::new(
            NodeKind::Process { name: name.clone() },
            statement.codes(),
            name,
        );
        let node_idx = self.ast.add_top_level(node)?;

        for sub_line in statement.text.split('\n') {
            self.ast
                .append_leaf(node_idx, LeafValue::Str(sub_line.trim().to_string()))?;
        }

        Ok(node_idx)
    }

    /// Expression: one leaf holding the referenced operand
    fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        let statement = self.current_statement();
        let reference = self.operand()?;

        let node = AstNode::new(
            NodeKind::Expression {
                reference: reference.clone(),
            },
            statement.codes(),
            reference.clone(),
        );
        let node_idx = self.ast.add_top_level(node)?;
        self.ast.append_leaf(node_idx, LeafValue::Str(reference))?;

        Ok(node_idx)
    }

    /// Continuation: attach to the previous node or drop, per policy
    fn parse_line_part(&mut self) -> Result<(), ParseError> {
        let statement = self.current_statement();

        if self.line_parts == LinePartPolicy::Drop {
            tracing::debug!(index = statement.index, "dropping line part");
            return Ok(());
        }

        match self.ast.last_top_level() {
            Some(parent) => {
                self.ast
                    .append_leaf(parent, LeafValue::infer(&statement.text))?;
            }
            None => {
                tracing::warn!(
                    index = statement.index,
                    text = %statement.text,
                    "line part before any statement node; dropping it"
                );
            }
        }
        Ok(())
    }

    /// Helper: second word of the current statement
    fn operand(&self) -> Result<String, ParseError> {
        let statement = self.current_statement();
        statement
            .word(1)
            .map(str::to_string)
            .ok_or_else(|| ParseError::MissingOperand {
                index: statement.index,
                text: statement.text.clone(),
            })
    }
}
