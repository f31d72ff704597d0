//! Shared helpers for the parse tests.

pub use pg_parse::ast::*;
pub use pg_parse::{parse, ParseError};

/// Parses input expected to hold exactly one statement and returns it.
pub fn parse_stmt(input: &str) -> Node {
    let result = parse(input).unwrap_or_else(|err| panic!("parse failed for {input:?}: {err}"));
    assert_eq!(result.stmts.len(), 1, "expected 1 statement in {input:?}");
    result.stmts.into_iter().next().unwrap().stmt
}

/// Parses input expected to be a single SELECT.
pub fn parse_select(input: &str) -> Box<SelectStmt> {
    match parse_stmt(input) {
        Node::SelectStmt(stmt) => stmt,
        other => panic!("expected SelectStmt for {input:?}, got {other:?}"),
    }
}

/// The value expression of the n-th entry of a SELECT's target list.
pub fn target_val(stmt: &SelectStmt, n: usize) -> &Node {
    let targets = stmt.target_list.as_ref().expect("target list");
    match &targets[n] {
        Node::ResTarget(rt) => rt.val.as_ref().expect("target value"),
        other => panic!("expected ResTarget, got {other:?}"),
    }
}

/// Unwraps an integer A_Const.
pub fn int_const(node: &Node) -> i64 {
    match node {
        Node::AConst(ac) => match &ac.val {
            Some(Node::Integer(i)) => i.ival,
            other => panic!("expected integer constant, got {other:?}"),
        },
        other => panic!("expected A_Const, got {other:?}"),
    }
}

/// Unwraps a string A_Const.
pub fn str_const(node: &Node) -> &str {
    match node {
        Node::AConst(ac) => match &ac.val {
            Some(Node::String(s)) => &s.sval,
            other => panic!("expected string constant, got {other:?}"),
        },
        other => panic!("expected A_Const, got {other:?}"),
    }
}

mod basic;
mod ddl;
mod dml;
mod errors;
mod select;
mod utility;
