pub mod ast;
pub mod parser;
pub mod error;

pub use parser::parse_source;

#[cfg(test)]
mod tests;
