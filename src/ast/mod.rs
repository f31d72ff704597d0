//! Native Rust AST types for PostgreSQL parse trees.
//!
//! This module provides the node structs built by the parser. The shapes,
//! field names and enumeration encodings follow PostgreSQL's own raw parse
//! tree, so that [`crate::node_to_string`] can reproduce PostgreSQL's
//! nodeToString() dump for any tree built here.
//!
//! # Example
//!
//! ```rust
//! use pg_parse::ast::Node;
//!
//! let result = pg_parse::parse("SELECT * FROM users WHERE id = 1").unwrap();
//! for stmt in &result.stmts {
//!     match &stmt.stmt {
//!         Node::SelectStmt(select) => {
//!             for table in select.from_clause.iter().flatten() {
//!                 if let Node::RangeVar(rv) = table {
//!                     println!("Table: {}", rv.relname);
//!                 }
//!             }
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod enums;
mod nodes;

pub use enums::*;
pub use nodes::*;
