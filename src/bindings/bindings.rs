use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    evaluator::evaluator::Bindings,
    Position,
};

lazy_static! {
    static ref BINDING: Regex = Regex::new("^\\s*(\\p{Alphabetic}+)\\s*=\\s*(.*?)\\s*$").unwrap();
}

/// Separates the binding prefix of a line from its expression.
///
/// A line shaped like `x=7, y=5 : x*y` yields the expression `x*y` and the
/// table `{x: 7, y: 5}`. Without a `:` the whole line is the expression and
/// the table is empty. Blank entries are skipped and a later binding of the
/// same name replaces an earlier one.
///
/// # Errors
///
/// * `InvalidBinding` - an entry is not `name=value` with an alphabetic name
/// * `InvalidBindingValue` - the value is not a number
pub fn parse_bindings(line: &str) -> Result<(String, Bindings), Error> {
    let mut bindings = Bindings::new();

    let Some((head, expression)) = line.split_once(':') else {
        return Ok((line.trim().to_string(), bindings));
    };

    let mut offset = 0;
    for entry in head.split(',') {
        let position = Position(line[..offset].chars().count() as u32);
        offset += entry.len() + 1;

        if entry.trim().is_empty() {
            continue;
        }

        let captures = BINDING.captures(entry).ok_or_else(|| {
            Error::new(ErrorImpl::InvalidBinding { binding: entry.trim().to_string() }, position)
        })?;
        let name = &captures[1];
        let value = &captures[2];

        let parsed = value.parse::<f64>().map_err(|_| {
            Error::new(
                ErrorImpl::InvalidBindingValue { name: name.to_string(), value: value.to_string() },
                position,
            )
        })?;

        bindings.insert(name.to_string(), parsed);
    }

    debug!("parsed {} bindings", bindings.len());
    Ok((expression.trim().to_string(), bindings))
}
