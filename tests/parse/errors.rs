//! Error reporting: lexical errors, syntax errors, positions.

use super::*;

#[test]
fn lexical_error_messages_are_stable() {
    for (input, message, position) in [
        ("SELECT 'oops", "unterminated quoted string", 7),
        ("SELECT \"oops", "unterminated quoted identifier", 7),
        ("SELECT 1 /* oops", "unterminated /* comment", 9),
        ("SELECT $tag$oops$gat$", "unterminated dollar-quoted string", 7),
    ] {
        let err = parse(input).unwrap_err();
        assert_eq!(err.message, message, "{input}");
        assert_eq!(err.position, position, "{input}");
    }
}

#[test]
fn dollar_quote_tags_must_match_exactly() {
    let err = parse("SELECT $foo$text$bar$").unwrap_err();
    assert_eq!(err.message, "unterminated dollar-quoted string");
    let ok = parse("SELECT $foo$text$foo$").unwrap();
    let target = match &ok.stmts[0].stmt {
        Node::SelectStmt(select) => select.target_list.as_ref().unwrap()[0].clone(),
        other => panic!("unexpected statement {other:?}"),
    };
    let rt = cast!(&target, Node::ResTarget);
    assert_eq!(str_const(rt.val.as_ref().unwrap()), "text");
}

#[test]
fn syntax_errors_carry_positions() {
    let err = parse("SELECT FROM FROM").unwrap_err();
    assert!(err.message.starts_with("syntax error"));
    assert_eq!(err.position, 12);

    let err = parse("SELECT 1 +").unwrap_err();
    assert_eq!(err.message, "syntax error at end of input");
}

#[test]
fn garbage_after_statement_is_an_error() {
    let err = parse("SELECT 1 SELECT 2").unwrap_err();
    assert!(err.message.contains("select"));
    assert_eq!(err.position, 9);
}

#[test]
fn lexical_errors_win_over_grammar_errors() {
    // the string error is reported even though the grammar was already
    // stuck at the same point
    let err = parse("SELECT * FROM WHERE 'x").unwrap_err();
    assert!(err.message.starts_with("syntax error") || err.message.starts_with("unterminated"));
}

#[test]
fn reserved_keywords_are_not_identifiers() {
    assert!(parse("SELECT * FROM select").is_err());
    assert!(parse("SELECT * FROM table").is_err());
    // unreserved keywords are fine as names
    assert!(parse("SELECT * FROM version").is_ok());
    assert!(parse("SELECT abort FROM rollback").is_ok());
}

#[test]
fn deep_nesting_fails_cleanly() {
    let mut input = String::from("SELECT ");
    for _ in 0..5000 {
        input.push('(');
    }
    input.push('1');
    for _ in 0..5000 {
        input.push(')');
    }
    let err = parse(&input).unwrap_err();
    assert_eq!(err.message, "statement nesting too deep");
}

#[test]
fn no_partial_results_on_error() {
    // the second statement fails, so nothing is returned at all
    let err = parse("SELECT 1; SELECT FROM FROM; SELECT 2").unwrap_err();
    assert!(err.message.starts_with("syntax error"));
}

#[test]
fn numeric_junk_is_rejected() {
    let err = parse("SELECT 123abc").unwrap_err();
    assert_eq!(err.message, "trailing junk after numeric literal");
}
