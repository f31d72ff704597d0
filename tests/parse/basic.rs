//! Basic statement structure: constants, expressions, statement lists.

use super::*;

#[test]
fn it_parses_empty_input() {
    assert_eq!(parse("").unwrap().stmts.len(), 0);
    assert_eq!(parse("  \t\n ").unwrap().stmts.len(), 0);
    assert_eq!(parse("-- just a comment").unwrap().stmts.len(), 0);
    assert_eq!(parse("/* block */").unwrap().stmts.len(), 0);
    assert_eq!(parse(";;").unwrap().stmts.len(), 0);
}

#[test]
fn it_parses_multiple_statements() {
    let result = parse("SELECT 1; SELECT 2; SELECT 3").unwrap();
    assert_eq!(result.stmts.len(), 3);
    assert_eq!(
        result.statement_types(),
        vec!["SelectStmt", "SelectStmt", "SelectStmt"]
    );
}

#[test]
fn it_tracks_statement_locations() {
    let result = parse("SELECT 1;\nSELECT 22").unwrap();
    assert_eq!(result.stmts[0].stmt_location, 0);
    assert_eq!(result.stmts[0].stmt_len, 8);
    assert_eq!(result.stmts[1].stmt_location, 10);
    assert_eq!(result.stmts[1].stmt_len, 0);
}

#[test]
fn it_parses_integer_constant() {
    let stmt = parse_select("SELECT 42");
    assert_eq!(int_const(target_val(&stmt, 0)), 42);
}

#[test]
fn it_parses_negative_integer_as_literal() {
    // unary minus folds into the constant
    let stmt = parse_select("SELECT -42");
    assert_eq!(int_const(target_val(&stmt, 0)), -42);
}

#[test]
fn it_parses_float_constant() {
    let stmt = parse_select("SELECT 3.14");
    let val = target_val(&stmt, 0);
    let ac = cast!(val, Node::AConst);
    let f = cast!(ac.val.as_ref().unwrap(), Node::Float);
    assert_eq!(f.fval, "3.14");
}

#[test]
fn it_parses_string_constant() {
    let stmt = parse_select("SELECT 'hello'");
    assert_eq!(str_const(target_val(&stmt, 0)), "hello");
}

#[test]
fn it_parses_boolean_and_null_constants() {
    let stmt = parse_select("SELECT true, false, NULL");
    let t = cast!(target_val(&stmt, 0), Node::AConst);
    assert_eq!(cast!(t.val.as_ref().unwrap(), Node::Boolean).boolval, true);
    let f = cast!(target_val(&stmt, 1), Node::AConst);
    assert_eq!(cast!(f.val.as_ref().unwrap(), Node::Boolean).boolval, false);
    let n = cast!(target_val(&stmt, 2), Node::AConst);
    assert!(n.isnull);
    assert!(n.val.is_none());
}

#[test]
fn it_parses_bit_string_constants() {
    let stmt = parse_select("SELECT B'101', X'1F'");
    let b = cast!(target_val(&stmt, 0), Node::AConst);
    assert_eq!(cast!(b.val.as_ref().unwrap(), Node::BitString).bsval, "b101");
    let x = cast!(target_val(&stmt, 1), Node::AConst);
    assert_eq!(cast!(x.val.as_ref().unwrap(), Node::BitString).bsval, "x1F");
}

#[test]
fn it_parses_parameters() {
    let stmt = parse_select("SELECT $1, $2");
    let p1 = cast!(target_val(&stmt, 0), Node::ParamRef);
    assert_eq!(p1.number, 1);
    let p2 = cast!(target_val(&stmt, 1), Node::ParamRef);
    assert_eq!(p2.number, 2);
}

#[test]
fn it_parses_column_refs() {
    let stmt = parse_select("SELECT a, t.b, s.t.c");
    let a = cast!(target_val(&stmt, 0), Node::ColumnRef);
    assert_eq!(a.fields.as_ref().unwrap().len(), 1);
    let b = cast!(target_val(&stmt, 1), Node::ColumnRef);
    assert_eq!(b.fields.as_ref().unwrap().len(), 2);
    let c = cast!(target_val(&stmt, 2), Node::ColumnRef);
    assert_eq!(c.fields.as_ref().unwrap().len(), 3);
}

#[test]
fn it_folds_unquoted_identifiers_to_lowercase() {
    let stmt = parse_select("SELECT Foo FROM Bar");
    let col = cast!(target_val(&stmt, 0), Node::ColumnRef);
    let name = cast!(&col.fields.as_ref().unwrap()[0], Node::String);
    assert_eq!(name.sval, "foo");
    let rel = cast!(&stmt.from_clause.as_ref().unwrap()[0], Node::RangeVar);
    assert_eq!(rel.relname, "bar");
}

#[test]
fn it_preserves_quoted_identifier_case() {
    let stmt = parse_select(r#"SELECT "Foo" FROM "Bar""#);
    let col = cast!(target_val(&stmt, 0), Node::ColumnRef);
    let name = cast!(&col.fields.as_ref().unwrap()[0], Node::String);
    assert_eq!(name.sval, "Foo");
    let rel = cast!(&stmt.from_clause.as_ref().unwrap()[0], Node::RangeVar);
    assert_eq!(rel.relname, "Bar");
}

#[test]
fn it_parses_qualified_star() {
    let stmt = parse_select("SELECT t.* FROM t");
    let col = cast!(target_val(&stmt, 0), Node::ColumnRef);
    let fields = col.fields.as_ref().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(matches!(fields[1], Node::AStar(_)));
}

#[test]
fn it_parses_operator_expressions() {
    let stmt = parse_select("SELECT 1 + 2 * 3");
    let add = cast!(target_val(&stmt, 0), Node::AExpr);
    assert_eq!(add.kind, AExprKind::Op);
    let op = cast!(&add.name.as_ref().unwrap()[0], Node::String);
    assert_eq!(op.sval, "+");
    // multiplication binds tighter
    let rhs = cast!(add.rexpr.as_ref().unwrap(), Node::AExpr);
    let mul = cast!(&rhs.name.as_ref().unwrap()[0], Node::String);
    assert_eq!(mul.sval, "*");
}

#[test]
fn it_flattens_and_chains() {
    let stmt = parse_select("SELECT * FROM t WHERE a = 1 AND b = 2 AND c = 3");
    let where_clause = cast!(stmt.where_clause.as_ref().unwrap(), Node::BoolExpr);
    assert_eq!(where_clause.boolop, BoolExprType::And);
    assert_eq!(where_clause.args.as_ref().unwrap().len(), 3);
}

#[test]
fn it_keeps_or_binding_looser_than_and() {
    let stmt = parse_select("SELECT * FROM t WHERE a OR b AND c");
    let or_expr = cast!(stmt.where_clause.as_ref().unwrap(), Node::BoolExpr);
    assert_eq!(or_expr.boolop, BoolExprType::Or);
    let args = or_expr.args.as_ref().unwrap();
    assert_eq!(args.len(), 2);
    let and_expr = cast!(&args[1], Node::BoolExpr);
    assert_eq!(and_expr.boolop, BoolExprType::And);
}

#[test]
fn it_parses_not_expr() {
    let stmt = parse_select("SELECT * FROM t WHERE NOT a");
    let not_expr = cast!(stmt.where_clause.as_ref().unwrap(), Node::BoolExpr);
    assert_eq!(not_expr.boolop, BoolExprType::Not);
    assert_eq!(not_expr.args.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_typecast() {
    let stmt = parse_select("SELECT a::integer");
    let cast = cast!(target_val(&stmt, 0), Node::TypeCast);
    let tn = cast.type_name.as_ref().unwrap();
    let names = tn.names.as_ref().unwrap();
    assert_eq!(cast!(&names[0], Node::String).sval, "pg_catalog");
    assert_eq!(cast!(&names[1], Node::String).sval, "int4");
}

#[test]
fn it_parses_cast_call() {
    let stmt = parse_select("SELECT CAST(a AS text)");
    let cast = cast!(target_val(&stmt, 0), Node::TypeCast);
    let tn = cast.type_name.as_ref().unwrap();
    let names = tn.names.as_ref().unwrap();
    assert_eq!(cast!(&names[0], Node::String).sval, "text");
}

#[test]
fn it_parses_typed_string_literal() {
    let stmt = parse_select("SELECT date '2024-01-07'");
    let cast = cast!(target_val(&stmt, 0), Node::TypeCast);
    assert_eq!(str_const(cast.arg.as_ref().unwrap()), "2024-01-07");
    let names = cast.type_name.as_ref().unwrap().names.as_ref().unwrap();
    assert_eq!(cast!(&names[0], Node::String).sval, "date");
}

#[test]
fn it_parses_interval_literal_with_fields() {
    let stmt = parse_select("SELECT interval '1' hour");
    let cast = cast!(target_val(&stmt, 0), Node::TypeCast);
    let tn = cast.type_name.as_ref().unwrap();
    let names = tn.names.as_ref().unwrap();
    assert_eq!(cast!(&names[1], Node::String).sval, "interval");
    let typmods = tn.typmods.as_ref().unwrap();
    assert_eq!(cast!(&typmods[0], Node::Integer).ival, INTERVAL_MASK_HOUR as i64);
}

#[test]
fn it_parses_function_calls() {
    let stmt = parse_select("SELECT count(*), sum(x), coalesce(a, b)");
    let count = cast!(target_val(&stmt, 0), Node::FuncCall);
    assert!(count.agg_star);
    let sum = cast!(target_val(&stmt, 1), Node::FuncCall);
    assert_eq!(sum.args.as_ref().unwrap().len(), 1);
    let coalesce = cast!(target_val(&stmt, 2), Node::CoalesceExpr);
    assert_eq!(coalesce.args.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_aggregate_decorations() {
    let stmt = parse_select("SELECT count(DISTINCT a) FILTER (WHERE b > 0) FROM t");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    assert!(fc.agg_distinct);
    assert!(fc.agg_filter.is_some());
}

#[test]
fn it_parses_named_function_arguments() {
    let stmt = parse_select("SELECT f(a => 1, b := 2)");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    let args = fc.args.as_ref().unwrap();
    let first = cast!(&args[0], Node::NamedArgExpr);
    assert_eq!(first.name, "a");
    assert_eq!(first.argnumber, -1);
    let second = cast!(&args[1], Node::NamedArgExpr);
    assert_eq!(second.name, "b");
}

#[test]
fn it_parses_window_function() {
    let stmt = parse_select("SELECT row_number() OVER (PARTITION BY a ORDER BY b) FROM t");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    let over = fc.over.as_ref().unwrap();
    assert_eq!(over.partition_clause.as_ref().unwrap().len(), 1);
    assert_eq!(over.order_clause.as_ref().unwrap().len(), 1);
    assert_eq!(over.frame_options, FRAMEOPTION_DEFAULTS);
}

#[test]
fn it_parses_window_frame_clause() {
    let stmt =
        parse_select("SELECT sum(x) OVER (ORDER BY a ROWS BETWEEN 1 PRECEDING AND CURRENT ROW) FROM t");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    let over = fc.over.as_ref().unwrap();
    assert!(over.frame_options & FRAMEOPTION_ROWS != 0);
    assert!(over.frame_options & FRAMEOPTION_BETWEEN != 0);
    assert!(over.frame_options & FRAMEOPTION_START_OFFSET_PRECEDING != 0);
    assert!(over.frame_options & FRAMEOPTION_END_CURRENT_ROW != 0);
    assert!(over.start_offset.is_some());
}

#[test]
fn it_parses_case_searched() {
    let stmt = parse_select("SELECT CASE WHEN x = 1 THEN 'one' ELSE 'other' END FROM t");
    let case = cast!(target_val(&stmt, 0), Node::CaseExpr);
    assert!(case.arg.is_none());
    assert_eq!(case.args.as_ref().unwrap().len(), 1);
    let when = cast!(&case.args.as_ref().unwrap()[0], Node::CaseWhen);
    assert!(matches!(when.expr.as_ref().unwrap(), Node::AExpr(_)));
    assert_eq!(str_const(when.result.as_ref().unwrap()), "one");
    assert_eq!(str_const(case.defresult.as_ref().unwrap()), "other");
}

#[test]
fn it_parses_case_simple() {
    let stmt = parse_select("SELECT CASE x WHEN 1 THEN 'one' WHEN 2 THEN 'two' END FROM t");
    let case = cast!(target_val(&stmt, 0), Node::CaseExpr);
    assert!(case.arg.is_some());
    assert_eq!(case.args.as_ref().unwrap().len(), 2);
    // no ELSE means no default result, not an implicit NULL constant
    assert!(case.defresult.is_none());
}

#[test]
fn it_parses_null_tests() {
    let stmt = parse_select("SELECT a IS NULL, b IS NOT NULL, c ISNULL FROM t");
    let is_null = cast!(target_val(&stmt, 0), Node::NullTest);
    assert_eq!(is_null.nulltesttype, NullTestType::IsNull);
    let not_null = cast!(target_val(&stmt, 1), Node::NullTest);
    assert_eq!(not_null.nulltesttype, NullTestType::IsNotNull);
    let shorthand = cast!(target_val(&stmt, 2), Node::NullTest);
    assert_eq!(shorthand.nulltesttype, NullTestType::IsNull);
}

#[test]
fn it_parses_boolean_tests() {
    let stmt = parse_select("SELECT a IS TRUE, b IS NOT FALSE, c IS UNKNOWN FROM t");
    assert_eq!(
        cast!(target_val(&stmt, 0), Node::BooleanTest).booltesttype,
        BoolTestType::IsTrue
    );
    assert_eq!(
        cast!(target_val(&stmt, 1), Node::BooleanTest).booltesttype,
        BoolTestType::IsNotFalse
    );
    assert_eq!(
        cast!(target_val(&stmt, 2), Node::BooleanTest).booltesttype,
        BoolTestType::IsUnknown
    );
}

#[test]
fn it_parses_is_distinct_from() {
    let stmt = parse_select("SELECT a IS DISTINCT FROM b");
    let expr = cast!(target_val(&stmt, 0), Node::AExpr);
    assert_eq!(expr.kind, AExprKind::Distinct);
    assert_eq!(cast!(&expr.name.as_ref().unwrap()[0], Node::String).sval, "=");
}

#[test]
fn it_parses_between() {
    let stmt = parse_select("SELECT a BETWEEN 1 AND 10, b NOT BETWEEN SYMMETRIC 2 AND 3");
    let between = cast!(target_val(&stmt, 0), Node::AExpr);
    assert_eq!(between.kind, AExprKind::Between);
    let bounds = cast!(between.rexpr.as_ref().unwrap(), Node::List);
    assert_eq!(bounds.len(), 2);
    let not_between = cast!(target_val(&stmt, 1), Node::AExpr);
    assert_eq!(not_between.kind, AExprKind::NotBetweenSym);
}

#[test]
fn it_parses_like_family() {
    let stmt = parse_select("SELECT a LIKE 'x%', b NOT ILIKE 'y%', c SIMILAR TO 'z'");
    let like = cast!(target_val(&stmt, 0), Node::AExpr);
    assert_eq!(like.kind, AExprKind::Like);
    assert_eq!(cast!(&like.name.as_ref().unwrap()[0], Node::String).sval, "~~");
    let not_ilike = cast!(target_val(&stmt, 1), Node::AExpr);
    assert_eq!(not_ilike.kind, AExprKind::Ilike);
    assert_eq!(cast!(&not_ilike.name.as_ref().unwrap()[0], Node::String).sval, "!~~*");
    // SIMILAR TO routes the pattern through similar_to_escape
    let similar = cast!(target_val(&stmt, 2), Node::AExpr);
    assert_eq!(similar.kind, AExprKind::Similar);
    let func = cast!(similar.rexpr.as_ref().unwrap(), Node::FuncCall);
    let names = func.funcname.as_ref().unwrap();
    assert_eq!(cast!(&names[1], Node::String).sval, "similar_to_escape");
}

#[test]
fn it_parses_in_list() {
    let stmt = parse_select("SELECT * FROM t WHERE x IN (1, 2, 3)");
    let expr = cast!(stmt.where_clause.as_ref().unwrap(), Node::AExpr);
    assert_eq!(expr.kind, AExprKind::In);
    assert_eq!(cast!(&expr.name.as_ref().unwrap()[0], Node::String).sval, "=");
    assert_eq!(cast!(expr.rexpr.as_ref().unwrap(), Node::List).len(), 3);
}

#[test]
fn it_parses_not_in_list() {
    let stmt = parse_select("SELECT * FROM t WHERE x NOT IN (1, 2)");
    let expr = cast!(stmt.where_clause.as_ref().unwrap(), Node::AExpr);
    assert_eq!(expr.kind, AExprKind::In);
    assert_eq!(cast!(&expr.name.as_ref().unwrap()[0], Node::String).sval, "<>");
}

#[test]
fn it_parses_row_constructors() {
    // a single parenthesized expression stays a plain expression
    let stmt = parse_select("SELECT (42)");
    assert_eq!(int_const(target_val(&stmt, 0)), 42);

    // two or more items become an implicit row
    let stmt = parse_select("SELECT (1, 2)");
    let row = cast!(target_val(&stmt, 0), Node::RowExpr);
    assert_eq!(row.row_format, CoercionForm::ImplicitCast);
    assert_eq!(row.args.as_ref().unwrap().len(), 2);

    // ROW() is always explicit, at any arity
    let stmt = parse_select("SELECT ROW(1), ROW()");
    let row1 = cast!(target_val(&stmt, 0), Node::RowExpr);
    assert_eq!(row1.row_format, CoercionForm::ExplicitCall);
    assert_eq!(row1.args.as_ref().unwrap().len(), 1);
    let row0 = cast!(target_val(&stmt, 1), Node::RowExpr);
    assert_eq!(row0.args.as_ref().unwrap().len(), 0);
}

#[test]
fn it_parses_array_constructor() {
    let stmt = parse_select("SELECT ARRAY[1, 2, 3], ARRAY[[1, 2], [3, 4]]");
    let arr = cast!(target_val(&stmt, 0), Node::AArrayExpr);
    assert_eq!(arr.elements.as_ref().unwrap().len(), 3);
    let nested = cast!(target_val(&stmt, 1), Node::AArrayExpr);
    assert!(matches!(nested.elements.as_ref().unwrap()[0], Node::AArrayExpr(_)));
}

#[test]
fn it_parses_subscripts_and_slices() {
    let stmt = parse_select("SELECT a[1], b[1:2] FROM t");
    let sub = cast!(target_val(&stmt, 0), Node::AIndirection);
    let idx = cast!(&sub.indirection.as_ref().unwrap()[0], Node::AIndices);
    assert!(!idx.is_slice);
    assert_eq!(int_const(idx.uidx.as_ref().unwrap()), 1);
    let slice = cast!(target_val(&stmt, 1), Node::AIndirection);
    let idx = cast!(&slice.indirection.as_ref().unwrap()[0], Node::AIndices);
    assert!(idx.is_slice);
    assert_eq!(int_const(idx.lidx.as_ref().unwrap()), 1);
    assert_eq!(int_const(idx.uidx.as_ref().unwrap()), 2);
}

#[test]
fn it_parses_greatest_least_nullif() {
    let stmt = parse_select("SELECT GREATEST(a, b), LEAST(a, b), NULLIF(a, b)");
    assert_eq!(cast!(target_val(&stmt, 0), Node::MinMaxExpr).op, MinMaxOp::Greatest);
    assert_eq!(cast!(target_val(&stmt, 1), Node::MinMaxExpr).op, MinMaxOp::Least);
    let nullif = cast!(target_val(&stmt, 2), Node::AExpr);
    assert_eq!(nullif.kind, AExprKind::Nullif);
}

#[test]
fn it_parses_sql_value_functions() {
    let stmt = parse_select("SELECT CURRENT_DATE, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP(3), CURRENT_USER");
    assert_eq!(cast!(target_val(&stmt, 0), Node::SqlValueFunction).op, SvfOp::CurrentDate);
    assert_eq!(
        cast!(target_val(&stmt, 1), Node::SqlValueFunction).op,
        SvfOp::CurrentTimestamp
    );
    let with_precision = cast!(target_val(&stmt, 2), Node::SqlValueFunction);
    assert_eq!(with_precision.op, SvfOp::CurrentTimestampN);
    assert_eq!(with_precision.typmod, 3);
    assert_eq!(cast!(target_val(&stmt, 3), Node::SqlValueFunction).op, SvfOp::CurrentUser);
}

#[test]
fn it_parses_extract() {
    let stmt = parse_select("SELECT EXTRACT(YEAR FROM created_at) FROM t");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    assert_eq!(fc.funcformat, CoercionForm::SqlSyntax);
    let names = fc.funcname.as_ref().unwrap();
    assert_eq!(cast!(&names[1], Node::String).sval, "extract");
    assert_eq!(str_const(&fc.args.as_ref().unwrap()[0]), "year");
}

#[test]
fn it_parses_position_and_trim() {
    let stmt = parse_select("SELECT POSITION('a' IN b), TRIM(LEADING FROM c)");
    let position = cast!(target_val(&stmt, 0), Node::FuncCall);
    assert_eq!(
        cast!(&position.funcname.as_ref().unwrap()[1], Node::String).sval,
        "position"
    );
    // argument order is (string, substring)
    assert_eq!(str_const(&position.args.as_ref().unwrap()[1]), "a");
    let trim = cast!(target_val(&stmt, 1), Node::FuncCall);
    assert_eq!(cast!(&trim.funcname.as_ref().unwrap()[1], Node::String).sval, "ltrim");
}

#[test]
fn it_parses_at_time_zone() {
    let stmt = parse_select("SELECT ts AT TIME ZONE 'utc' FROM t");
    let fc = cast!(target_val(&stmt, 0), Node::FuncCall);
    assert_eq!(cast!(&fc.funcname.as_ref().unwrap()[1], Node::String).sval, "timezone");
    assert_eq!(fc.args.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_collate_clause() {
    let stmt = parse_select(r#"SELECT a COLLATE "C" FROM t"#);
    let coll = cast!(target_val(&stmt, 0), Node::CollateClause);
    assert_eq!(cast!(&coll.collname.as_ref().unwrap()[0], Node::String).sval, "C");
}

#[test]
fn it_parses_target_aliases() {
    let stmt = parse_select("SELECT a AS x, b y FROM t");
    let targets = stmt.target_list.as_ref().unwrap();
    assert_eq!(cast!(&targets[0], Node::ResTarget).name, "x");
    assert_eq!(cast!(&targets[1], Node::ResTarget).name, "y");
}
