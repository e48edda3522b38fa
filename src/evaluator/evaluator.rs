use std::collections::HashMap;

use log::trace;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Operator,
};

/// Variable name to value. Names are case-sensitive.
pub type Bindings = HashMap<String, f64>;

/// Reduces trees against one read-only binding table.
pub struct Evaluator<'a> {
    bindings: &'a Bindings,
}

impl<'a> Evaluator<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        Evaluator { bindings }
    }

    /// Evaluates `node` post-order: children first, then the operator.
    pub fn evaluate_node(&self, node: &Node) -> Result<f64, Error> {
        match node {
            Node::Number { value, .. } => Ok(*value),
            Node::Variable { name, span } => self.bindings.get(name).copied().ok_or_else(|| {
                Error::new(ErrorImpl::UndefinedVariable { variable: name.clone() }, span.start)
            }),
            Node::Operation { operator, left, right, span } => {
                let left = self.evaluate_node(left)?;
                let right = match right {
                    Some(right) => Some(self.evaluate_node(right)?),
                    None => None,
                };

                let result = apply(*operator, left, right)
                    .map_err(|error_impl| Error::new(error_impl, span.start))?;
                trace!("{} {:?} {:?} = {}", operator, left, right, result);
                Ok(result)
            }
        }
    }
}

fn apply(operator: Operator, left: f64, right: Option<f64>) -> Result<f64, ErrorImpl> {
    match (operator, right) {
        (Operator::Add, Some(right)) => Ok(left + right),
        (Operator::Subtract, Some(right)) => Ok(left - right),
        (Operator::Subtract, None) => Ok(-left),
        (Operator::Multiply, Some(right)) => Ok(left * right),
        (Operator::Divide, Some(right)) => {
            if right == 0.0 {
                Err(ErrorImpl::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        (Operator::Power, Some(right)) => Ok(left.powf(right)),
        (Operator::Root, None) => {
            if left < 0.0 {
                Err(ErrorImpl::NegativeRadicand { value: left })
            } else {
                Ok(left.sqrt())
            }
        }
        (operator, _) => Err(ErrorImpl::InternalInconsistency { operator }),
    }
}

/// Evaluates an expression tree with the given variable bindings.
pub fn evaluate(root: &Node, bindings: &Bindings) -> Result<f64, Error> {
    Evaluator::new(bindings).evaluate_node(root)
}
