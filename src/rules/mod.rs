//! Rule sets and the function registry used by the template compiler.

pub(crate) mod functions;
pub(crate) mod template;

#[cfg(test)]
mod tests;
