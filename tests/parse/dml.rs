//! INSERT / UPDATE / DELETE / MERGE structure.

use super::*;

#[test]
fn it_parses_insert_values() {
    let stmt = parse_stmt("INSERT INTO users (id, name) VALUES (1, 'ada')");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert_eq!(insert.relation.as_ref().unwrap().relname, "users");
    let cols = insert.cols.as_ref().unwrap();
    assert_eq!(cols.len(), 2);
    assert_eq!(cast!(&cols[0], Node::ResTarget).name, "id");
    let select = cast!(insert.select_stmt.as_ref().unwrap(), Node::SelectStmt);
    let rows = select.values_lists.as_ref().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(insert.override_, OverridingKind::NotSet);
}

#[test]
fn it_parses_insert_select() {
    let stmt = parse_stmt("INSERT INTO backup SELECT * FROM users");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert!(insert.cols.is_none());
    let select = cast!(insert.select_stmt.as_ref().unwrap(), Node::SelectStmt);
    assert!(select.from_clause.is_some());
}

#[test]
fn it_parses_insert_default_values() {
    let stmt = parse_stmt("INSERT INTO t DEFAULT VALUES");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert!(insert.select_stmt.is_none());
}

#[test]
fn it_parses_insert_with_default_in_row() {
    let stmt = parse_stmt("INSERT INTO t VALUES (1, DEFAULT)");
    let insert = cast!(&stmt, Node::InsertStmt);
    let select = cast!(insert.select_stmt.as_ref().unwrap(), Node::SelectStmt);
    let row = cast!(&select.values_lists.as_ref().unwrap()[0], Node::List);
    assert!(matches!(row[1], Node::SetToDefault(_)));
}

#[test]
fn it_parses_insert_overriding() {
    let stmt = parse_stmt("INSERT INTO t (id) OVERRIDING SYSTEM VALUE VALUES (1)");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert_eq!(insert.override_, OverridingKind::SystemValue);
}

#[test]
fn it_parses_on_conflict_do_nothing() {
    let stmt = parse_stmt("INSERT INTO t (a) VALUES (1) ON CONFLICT (a) DO NOTHING");
    let insert = cast!(&stmt, Node::InsertStmt);
    let conflict = insert.on_conflict_clause.as_ref().unwrap();
    assert_eq!(conflict.action, OnConflictAction::Nothing);
    let infer = conflict.infer.as_ref().unwrap();
    assert_eq!(infer.index_elems.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_on_conflict_do_update() {
    let stmt = parse_stmt(
        "INSERT INTO t (a, b) VALUES (1, 2) ON CONFLICT ON CONSTRAINT t_pkey DO UPDATE SET b = excluded.b WHERE t.a > 0",
    );
    let insert = cast!(&stmt, Node::InsertStmt);
    let conflict = insert.on_conflict_clause.as_ref().unwrap();
    assert_eq!(conflict.action, OnConflictAction::Update);
    assert_eq!(conflict.infer.as_ref().unwrap().conname, "t_pkey");
    assert_eq!(conflict.target_list.as_ref().unwrap().len(), 1);
    assert!(conflict.where_clause.is_some());
}

#[test]
fn it_parses_insert_returning() {
    let stmt = parse_stmt("INSERT INTO t (a) VALUES (1) RETURNING id, a * 2");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert_eq!(insert.returning_list.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_update() {
    let stmt = parse_stmt("UPDATE t SET a = 1, b = DEFAULT WHERE c = 2");
    let update = cast!(&stmt, Node::UpdateStmt);
    let targets = update.target_list.as_ref().unwrap();
    assert_eq!(targets.len(), 2);
    let first = cast!(&targets[0], Node::ResTarget);
    assert_eq!(first.name, "a");
    assert_eq!(int_const(first.val.as_ref().unwrap()), 1);
    let second = cast!(&targets[1], Node::ResTarget);
    assert!(matches!(second.val.as_ref().unwrap(), Node::SetToDefault(_)));
    assert!(update.where_clause.is_some());
}

#[test]
fn it_parses_update_multi_assignment() {
    let stmt = parse_stmt("UPDATE t SET (a, b) = (1, 2)");
    let update = cast!(&stmt, Node::UpdateStmt);
    let targets = update.target_list.as_ref().unwrap();
    assert_eq!(targets.len(), 2);
    let first = cast!(&targets[0], Node::ResTarget);
    let mar = cast!(first.val.as_ref().unwrap(), Node::MultiAssignRef);
    assert_eq!(mar.colno, 1);
    assert_eq!(mar.ncolumns, 2);
    assert!(matches!(mar.source.as_ref().unwrap(), Node::RowExpr(_)));
    let second = cast!(&targets[1], Node::ResTarget);
    let mar = cast!(second.val.as_ref().unwrap(), Node::MultiAssignRef);
    assert_eq!(mar.colno, 2);
}

#[test]
fn it_parses_update_from() {
    let stmt = parse_stmt("UPDATE t SET a = u.a FROM u WHERE u.id = t.id");
    let update = cast!(&stmt, Node::UpdateStmt);
    assert_eq!(update.from_clause.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_update_where_current_of() {
    let stmt = parse_stmt("UPDATE t SET a = 1 WHERE CURRENT OF cur");
    let update = cast!(&stmt, Node::UpdateStmt);
    let current = cast!(update.where_clause.as_ref().unwrap(), Node::CurrentOfExpr);
    assert_eq!(current.cursor_name, "cur");
}

#[test]
fn it_parses_delete() {
    let stmt = parse_stmt("DELETE FROM t USING u WHERE t.id = u.id RETURNING t.id");
    let delete = cast!(&stmt, Node::DeleteStmt);
    assert_eq!(delete.relation.as_ref().unwrap().relname, "t");
    assert_eq!(delete.using_clause.as_ref().unwrap().len(), 1);
    assert!(delete.where_clause.is_some());
    assert_eq!(delete.returning_list.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_delete_with_alias() {
    let stmt = parse_stmt("DELETE FROM ONLY t AS x WHERE x.a = 1");
    let delete = cast!(&stmt, Node::DeleteStmt);
    let rel = delete.relation.as_ref().unwrap();
    assert!(!rel.inh);
    assert_eq!(rel.alias.as_ref().unwrap().aliasname, "x");
}

// ============================================================================
// MERGE
// ============================================================================

#[test]
fn it_parses_merge_update() {
    let stmt = parse_stmt(
        "MERGE INTO target t USING source s ON t.id = s.id WHEN MATCHED THEN UPDATE SET col = s.col",
    );
    let merge = cast!(&stmt, Node::MergeStmt);
    let rel = merge.relation.as_ref().unwrap();
    assert_eq!(rel.relname, "target");
    assert_eq!(rel.alias.as_ref().unwrap().aliasname, "t");
    assert!(merge.source_relation.is_some());
    assert!(merge.join_condition.is_some());
    let whens = merge.merge_when_clauses.as_ref().unwrap();
    assert_eq!(whens.len(), 1);
    let when = cast!(&whens[0], Node::MergeWhenClause);
    assert_eq!(when.kind, MergeMatchKind::Matched);
    assert_eq!(when.command_type, CmdType::Update);
    assert!(when.target_list.is_some());
    assert!(when.values.is_none());
}

#[test]
fn it_parses_merge_insert() {
    let stmt = parse_stmt(
        "MERGE INTO t USING s ON t.id = s.id WHEN NOT MATCHED THEN INSERT (col) VALUES (s.col)",
    );
    let merge = cast!(&stmt, Node::MergeStmt);
    let when = cast!(&merge.merge_when_clauses.as_ref().unwrap()[0], Node::MergeWhenClause);
    assert_eq!(when.kind, MergeMatchKind::NotMatchedByTarget);
    assert_eq!(when.command_type, CmdType::Insert);
    assert_eq!(when.target_list.as_ref().unwrap().len(), 1);
    assert_eq!(when.values.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_merge_when_clause_order_and_conditions() {
    let stmt = parse_stmt(
        "MERGE INTO t USING s ON t.id = s.id \
         WHEN MATCHED AND t.x > 0 THEN DELETE \
         WHEN MATCHED THEN DO NOTHING \
         WHEN NOT MATCHED BY SOURCE THEN DELETE \
         WHEN NOT MATCHED THEN INSERT DEFAULT VALUES",
    );
    let merge = cast!(&stmt, Node::MergeStmt);
    let whens = merge.merge_when_clauses.as_ref().unwrap();
    assert_eq!(whens.len(), 4);

    let first = cast!(&whens[0], Node::MergeWhenClause);
    assert_eq!(first.kind, MergeMatchKind::Matched);
    assert_eq!(first.command_type, CmdType::Delete);
    assert!(first.condition.is_some());

    let second = cast!(&whens[1], Node::MergeWhenClause);
    assert_eq!(second.command_type, CmdType::Nothing);
    assert!(second.condition.is_none());

    let third = cast!(&whens[2], Node::MergeWhenClause);
    assert_eq!(third.kind, MergeMatchKind::NotMatchedBySource);

    let fourth = cast!(&whens[3], Node::MergeWhenClause);
    assert_eq!(fourth.kind, MergeMatchKind::NotMatchedByTarget);
    assert_eq!(fourth.command_type, CmdType::Insert);
    assert!(fourth.values.is_none());
}

#[test]
fn it_parses_with_clause_on_dml() {
    let stmt = parse_stmt("WITH ids AS (SELECT 1 AS id) INSERT INTO t SELECT * FROM ids");
    let insert = cast!(&stmt, Node::InsertStmt);
    assert!(insert.with_clause.is_some());

    let stmt = parse_stmt("WITH ids AS (SELECT 1) UPDATE t SET a = 0");
    let update = cast!(&stmt, Node::UpdateStmt);
    assert!(update.with_clause.is_some());

    let stmt = parse_stmt("WITH ids AS (SELECT 1) DELETE FROM t");
    let delete = cast!(&stmt, Node::DeleteStmt);
    assert!(delete.with_clause.is_some());
}
