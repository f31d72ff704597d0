//! Parse tests split into multiple modules for maintainability.

#[macro_use]
mod support;
mod parse;
