use std::fmt::Display;

use crate::{lexer::tokens::Operator, Span};

/// Expression tree node.
///
/// A unary node (`√` or negation) keeps its operand in `left` and has no
/// `right` child. The missing right child is what marks it unary; it is
/// never the same thing as a right child that evaluates to zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number {
        value: f64,
        span: Span,
    },
    Variable {
        name: String,
        span: Span,
    },
    Operation {
        operator: Operator,
        left: Box<Node>,
        right: Option<Box<Node>>,
        span: Span,
    },
}

impl Node {
    pub fn number(value: f64, span: Span) -> Self {
        Node::Number { value, span }
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Node::Variable { name: name.into(), span }
    }

    pub fn unary(operator: Operator, operand: Node, span: Span) -> Self {
        Node::Operation {
            operator,
            left: Box::new(operand),
            right: None,
            span,
        }
    }

    pub fn binary(operator: Operator, left: Node, right: Node, span: Span) -> Self {
        Node::Operation {
            operator,
            left: Box::new(left),
            right: Some(Box::new(right)),
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Node::Number { span, .. } | Node::Variable { span, .. } | Node::Operation { span, .. } => span,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Operation { .. })
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Operation { left, .. } => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Operation { right, .. } => right.as_deref(),
            _ => None,
        }
    }

    /// Children in left, right order.
    pub fn children(&self) -> Vec<&Node> {
        self.left().into_iter().chain(self.right()).collect()
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|child| child.size()).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|child| child.depth()).max().unwrap_or(0)
    }
}

/// The label a node is shown with: its value, name or operator symbol.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number { value, .. } => write!(f, "{}", value),
            Node::Variable { name, .. } => write!(f, "{}", name),
            Node::Operation { operator, .. } => write!(f, "{}", operator),
        }
    }
}
