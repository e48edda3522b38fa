use log::trace;

use crate::lexer::tokens::ROOT_SYMBOL;

/// Removes every whitespace character from the raw input.
pub fn clean_input(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Characters an operand can end with. A sign after one of these is infix.
fn ends_operand(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == ')'
}

/// Collapses every run of `+`/`-` into a single sign.
///
/// The sign of a run is `-` when it holds an odd number of `-`, otherwise
/// `+`. A run in prefix position (start of input, after `(` or `√`, or
/// directly before a `√` that does not follow an operand) is unary: a
/// unary `+` is dropped and a unary `-` is kept. Anywhere else the sign is
/// an infix operator and is always emitted.
///
/// Every other character is copied through, unknown ones included; the
/// lexer is the one to reject them.
pub fn normalize_signs(expression: &str) -> String {
    let mut normalized = String::with_capacity(expression.len());
    let mut chars = expression.chars().peekable();

    while let Some(current) = chars.next() {
        if !is_sign(current) {
            normalized.push(current);
            continue;
        }

        let mut negatives = usize::from(current == '-');
        while let Some(&next) = chars.peek() {
            if !is_sign(next) {
                break;
            }
            if next == '-' {
                negatives += 1;
            }
            chars.next();
        }

        let previous = normalized.chars().last();
        let before_root = chars.peek() == Some(&ROOT_SYMBOL);
        let is_unary = match previous {
            None => true,
            Some('(') => true,
            Some(c) if c == ROOT_SYMBOL => true,
            Some(c) => before_root && !ends_operand(c),
        };

        let negative = negatives % 2 == 1;
        match (is_unary, negative) {
            (true, false) => {}
            (_, true) => normalized.push('-'),
            (false, false) => normalized.push('+'),
        }
    }

    trace!("normalized {:?} into {:?}", expression, normalized);
    normalized
}
