//! `pg_parse` is a native Rust parser for the PostgreSQL SQL dialect.
//!
//! It tokenizes and parses SQL source text into an abstract syntax tree
//! whose node shapes, field names and enumeration encodings mirror
//! PostgreSQL's own raw parse tree (parsenodes.h / primnodes.h). A tree can
//! be rendered into PostgreSQL's nodeToString() debug-dump format with
//! [`node_to_string`], which is what the differential test harness compares
//! against the output of a real PostgreSQL instance.
//!
//! Parsing is purely synchronous and shares no mutable state between calls;
//! concurrent `parse` calls from multiple threads are safe.
//!
//! # Example
//!
//! ```rust
//! use pg_parse::ast::Node;
//!
//! let result = pg_parse::parse("SELECT 1; SELECT 2").unwrap();
//! assert_eq!(result.stmts.len(), 2);
//! assert!(matches!(result.stmts[0].stmt, Node::SelectStmt(_)));
//! ```

pub mod ast;
pub mod keywords;
pub mod lexer;
mod outfuncs;
mod parser;

use serde::{Deserialize, Serialize};

pub use ast::{Node, ParseResult, RawStmt};
pub use outfuncs::node_to_string;

/// An error detected while lexing or parsing.
///
/// `position` is the byte offset into the source text at which the error
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses SQL source text into a list of statements.
///
/// Empty input, or input holding only whitespace and comments, yields an
/// empty statement list. The first lexical or syntax error aborts the parse.
///
/// # Example
///
/// ```rust
/// let result = pg_parse::parse("SELECT * FROM users").unwrap();
/// assert_eq!(result.stmts.len(), 1);
///
/// let err = pg_parse::parse("SELECT 'oops").unwrap_err();
/// assert_eq!(err.message, "unterminated quoted string");
/// ```
pub fn parse(sql: &str) -> Result<ParseResult> {
    let stmts = parser::Parser::new(sql).parse_statements()?;
    Ok(ParseResult { stmts })
}

/// Parses SQL source text and serializes the resulting parse tree to JSON.
///
/// # Example
///
/// ```rust
/// let json = pg_parse::parse_to_json("SELECT 1").unwrap();
/// assert!(json.contains("SelectStmt"));
/// ```
pub fn parse_to_json(sql: &str) -> Result<String> {
    let result = parse(sql)?;
    // serializing an owned tree cannot fail
    Ok(serde_json::to_string(&result).expect("parse tree serializes"))
}

impl ParseResult {
    /// Returns the distinct relation names referenced anywhere in the
    /// parsed statements, in first-seen order.
    ///
    /// # Example
    ///
    /// ```rust
    /// let result = pg_parse::parse("SELECT * FROM users u JOIN orders o ON u.id = o.user_id").unwrap();
    /// assert_eq!(result.tables(), vec!["users", "orders"]);
    /// ```
    pub fn tables(&self) -> Vec<String> {
        use itertools::Itertools;

        let value = serde_json::to_value(&self.stmts).expect("parse tree serializes");
        let mut tables = Vec::new();
        collect_relnames(&value, &mut tables);
        tables.into_iter().unique().collect()
    }

    /// Returns the node tag of each top-level statement.
    pub fn statement_types(&self) -> Vec<&'static str> {
        self.stmts.iter().map(|raw| statement_type(&raw.stmt)).collect()
    }
}

/// Walks the JSON rendering of the tree looking for RangeVar shapes; any
/// object with a string `relname` field is one.
fn collect_relnames(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(relname) = map.get("relname").and_then(|v| v.as_str()) {
                out.push(relname.to_string());
            }
            for child in map.values() {
                collect_relnames(child, out);
            }
        }
        serde_json::Value::Array(items) => {
            for child in items {
                collect_relnames(child, out);
            }
        }
        _ => {}
    }
}

fn statement_type(node: &Node) -> &'static str {
    match node {
        Node::SelectStmt(_) => "SelectStmt",
        Node::InsertStmt(_) => "InsertStmt",
        Node::UpdateStmt(_) => "UpdateStmt",
        Node::DeleteStmt(_) => "DeleteStmt",
        Node::MergeStmt(_) => "MergeStmt",
        Node::CreateStmt(_) => "CreateStmt",
        Node::AlterTableStmt(_) => "AlterTableStmt",
        Node::DropStmt(_) => "DropStmt",
        Node::TruncateStmt(_) => "TruncateStmt",
        Node::IndexStmt(_) => "IndexStmt",
        Node::ViewStmt(_) => "ViewStmt",
        Node::CreateTableAsStmt(_) => "CreateTableAsStmt",
        Node::TransactionStmt(_) => "TransactionStmt",
        Node::VariableSetStmt(_) => "VariableSetStmt",
        Node::VariableShowStmt(_) => "VariableShowStmt",
        Node::ExplainStmt(_) => "ExplainStmt",
        Node::CopyStmt(_) => "CopyStmt",
        Node::GrantStmt(_) => "GrantStmt",
        Node::GrantRoleStmt(_) => "GrantRoleStmt",
        Node::LockStmt(_) => "LockStmt",
        Node::VacuumStmt(_) => "VacuumStmt",
        Node::PrepareStmt(_) => "PrepareStmt",
        Node::ExecuteStmt(_) => "ExecuteStmt",
        Node::DeallocateStmt(_) => "DeallocateStmt",
        Node::CommentStmt(_) => "CommentStmt",
        Node::CreateSchemaStmt(_) => "CreateSchemaStmt",
        Node::CreateFunctionStmt(_) => "CreateFunctionStmt",
        Node::AlterFunctionStmt(_) => "AlterFunctionStmt",
        Node::CreateSeqStmt(_) => "CreateSeqStmt",
        Node::AlterSeqStmt(_) => "AlterSeqStmt",
        Node::CreateDomainStmt(_) => "CreateDomainStmt",
        Node::RefreshMatViewStmt(_) => "RefreshMatViewStmt",
        Node::CreateTrigStmt(_) => "CreateTrigStmt",
        Node::RuleStmt(_) => "RuleStmt",
        Node::CreateRoleStmt(_) => "CreateRoleStmt",
        Node::AlterRoleStmt(_) => "AlterRoleStmt",
        Node::DropRoleStmt(_) => "DropRoleStmt",
        Node::CreatedbStmt(_) => "CreatedbStmt",
        Node::DropdbStmt(_) => "DropdbStmt",
        Node::CreateExtensionStmt(_) => "CreateExtensionStmt",
        Node::CreateEnumStmt(_) => "CreateEnumStmt",
        Node::CompositeTypeStmt(_) => "CompositeTypeStmt",
        Node::RenameStmt(_) => "RenameStmt",
        Node::AlterTableCmd(_) => "AlterTableCmd",
        Node::DoStmt(_) => "DoStmt",
        Node::CallStmt(_) => "CallStmt",
        Node::NotifyStmt(_) => "NotifyStmt",
        Node::ListenStmt(_) => "ListenStmt",
        Node::UnlistenStmt(_) => "UnlistenStmt",
        Node::CheckPointStmt(_) => "CheckPointStmt",
        Node::DiscardStmt(_) => "DiscardStmt",
        Node::DeclareCursorStmt(_) => "DeclareCursorStmt",
        Node::ClosePortalStmt(_) => "ClosePortalStmt",
        Node::FetchStmt(_) => "FetchStmt",
        _ => "Other",
    }
}
