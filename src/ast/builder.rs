use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::{lookups::Arity, postfix::PostfixItem},
    Position,
};

use super::ast::Node;

/// Builds an expression tree from a postfix sequence.
///
/// Leaves are pushed onto a node stack. A unary operator pops one node as
/// its left child; a binary operator pops the right operand first, then the
/// left. Exactly one node has to be left at the end.
pub fn build_tree(postfix: Vec<PostfixItem>) -> Result<Node, Error> {
    let mut stack: Vec<Node> = vec![];

    for item in postfix {
        match item {
            PostfixItem::Number { value, span } => stack.push(Node::number(value, span)),
            PostfixItem::Identifier { name, span } => stack.push(Node::variable(name, span)),
            PostfixItem::Operator { operator, arity: Arity::Unary, span } => {
                let operand = stack.pop().ok_or_else(|| {
                    Error::new(ErrorImpl::MissingOperand { operator }, span.start)
                })?;
                stack.push(Node::unary(operator, operand, span));
            }
            PostfixItem::Operator { operator, arity: Arity::Binary, span } => {
                let found = stack.len();
                match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => stack.push(Node::binary(operator, left, right, span)),
                    _ => {
                        return Err(Error::new(
                            ErrorImpl::InsufficientOperands { operator, found },
                            span.start,
                        ))
                    }
                }
            }
        }
    }

    match stack.len() {
        0 => Err(Error::new(ErrorImpl::EmptyExpression, Position(0))),
        1 => {
            let root = stack.remove(0);
            debug!("built tree with {} nodes, depth {}", root.size(), root.depth());
            Ok(root)
        }
        roots => Err(Error::new(
            ErrorImpl::MalformedExpression { roots },
            stack[1].get_span().start,
        )),
    }
}
