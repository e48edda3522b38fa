//! Variable binding prefix parsing (`x=7, y=5 : expression`).

pub mod bindings;

#[cfg(test)]
mod tests;
