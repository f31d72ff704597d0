//! Utility statements: transactions, SET/SHOW, EXPLAIN, COPY, GRANT, LOCK,
//! VACUUM, prepared statements, cursors and notifications.

use super::*;

#[test]
fn it_parses_transaction_control() {
    let begin = cast!(&parse_stmt("BEGIN"), Node::TransactionStmt).clone();
    assert_eq!(begin.kind, TransactionStmtKind::Begin);

    let start = cast!(&parse_stmt("START TRANSACTION ISOLATION LEVEL SERIALIZABLE, READ ONLY"), Node::TransactionStmt).clone();
    assert_eq!(start.kind, TransactionStmtKind::Start);
    let options = start.options.as_ref().unwrap();
    assert_eq!(options.len(), 2);
    let iso = cast!(&options[0], Node::DefElem);
    assert_eq!(iso.defname, "transaction_isolation");
    assert_eq!(str_const(iso.arg.as_ref().unwrap()), "serializable");

    let commit = cast!(&parse_stmt("COMMIT AND CHAIN"), Node::TransactionStmt).clone();
    assert_eq!(commit.kind, TransactionStmtKind::Commit);
    assert!(commit.chain);

    let end = cast!(&parse_stmt("END"), Node::TransactionStmt).clone();
    assert_eq!(end.kind, TransactionStmtKind::Commit);

    let rollback = cast!(&parse_stmt("ROLLBACK WORK"), Node::TransactionStmt).clone();
    assert_eq!(rollback.kind, TransactionStmtKind::Rollback);

    let abort = cast!(&parse_stmt("ABORT"), Node::TransactionStmt).clone();
    assert_eq!(abort.kind, TransactionStmtKind::Rollback);
}

#[test]
fn it_parses_savepoints() {
    let sp = cast!(&parse_stmt("SAVEPOINT sp1"), Node::TransactionStmt).clone();
    assert_eq!(sp.kind, TransactionStmtKind::Savepoint);
    assert_eq!(sp.savepoint_name, "sp1");

    let release = cast!(&parse_stmt("RELEASE SAVEPOINT sp1"), Node::TransactionStmt).clone();
    assert_eq!(release.kind, TransactionStmtKind::Release);

    let rollback_to = cast!(&parse_stmt("ROLLBACK TO SAVEPOINT sp1"), Node::TransactionStmt).clone();
    assert_eq!(rollback_to.kind, TransactionStmtKind::RollbackTo);
    assert_eq!(rollback_to.savepoint_name, "sp1");
}

#[test]
fn it_parses_two_phase_commit() {
    let prepare = cast!(&parse_stmt("PREPARE TRANSACTION 'gid-1'"), Node::TransactionStmt).clone();
    assert_eq!(prepare.kind, TransactionStmtKind::Prepare);
    assert_eq!(prepare.gid, "gid-1");

    let commit = cast!(&parse_stmt("COMMIT PREPARED 'gid-1'"), Node::TransactionStmt).clone();
    assert_eq!(commit.kind, TransactionStmtKind::CommitPrepared);

    let rollback = cast!(&parse_stmt("ROLLBACK PREPARED 'gid-1'"), Node::TransactionStmt).clone();
    assert_eq!(rollback.kind, TransactionStmtKind::RollbackPrepared);
}

#[test]
fn it_parses_set_variants() {
    let set = cast!(&parse_stmt("SET search_path = public, 'aux'"), Node::VariableSetStmt).clone();
    assert_eq!(set.kind, VariableSetKind::SetValue);
    assert_eq!(set.name, "search_path");
    assert_eq!(set.args.as_ref().unwrap().len(), 2);
    assert!(!set.is_local);

    let local = cast!(&parse_stmt("SET LOCAL work_mem TO '64MB'"), Node::VariableSetStmt).clone();
    assert!(local.is_local);

    let default = cast!(&parse_stmt("SET datestyle TO DEFAULT"), Node::VariableSetStmt).clone();
    assert_eq!(default.kind, VariableSetKind::SetDefault);
    assert!(default.args.is_none());

    let tz = cast!(&parse_stmt("SET TIME ZONE 'UTC'"), Node::VariableSetStmt).clone();
    assert_eq!(tz.name, "timezone");
    assert_eq!(str_const(&tz.args.as_ref().unwrap()[0]), "UTC");

    let on = cast!(&parse_stmt("SET standard_conforming_strings = on"), Node::VariableSetStmt).clone();
    assert_eq!(str_const(&on.args.as_ref().unwrap()[0]), "on");

    let txn = cast!(&parse_stmt("SET TRANSACTION READ ONLY"), Node::VariableSetStmt).clone();
    assert_eq!(txn.kind, VariableSetKind::SetMulti);
    assert_eq!(txn.name, "TRANSACTION");
}

#[test]
fn it_parses_reset_and_show() {
    let reset = cast!(&parse_stmt("RESET work_mem"), Node::VariableSetStmt).clone();
    assert_eq!(reset.kind, VariableSetKind::Reset);
    assert_eq!(reset.name, "work_mem");

    let reset_all = cast!(&parse_stmt("RESET ALL"), Node::VariableSetStmt).clone();
    assert_eq!(reset_all.kind, VariableSetKind::ResetAll);

    let show = cast!(&parse_stmt("SHOW search_path"), Node::VariableShowStmt).clone();
    assert_eq!(show.name, "search_path");

    let show_all = cast!(&parse_stmt("SHOW ALL"), Node::VariableShowStmt).clone();
    assert_eq!(show_all.name, "all");

    let show_tz = cast!(&parse_stmt("SHOW TIME ZONE"), Node::VariableShowStmt).clone();
    assert_eq!(show_tz.name, "timezone");
}

#[test]
fn it_parses_explain() {
    let stmt = parse_stmt("EXPLAIN ANALYZE VERBOSE SELECT 1");
    let explain = cast!(&stmt, Node::ExplainStmt);
    let options = explain.options.as_ref().unwrap();
    assert_eq!(cast!(&options[0], Node::DefElem).defname, "analyze");
    assert_eq!(cast!(&options[1], Node::DefElem).defname, "verbose");
    assert!(matches!(explain.query.as_ref().unwrap(), Node::SelectStmt(_)));
}

#[test]
fn it_parses_explain_option_list() {
    let stmt = parse_stmt("EXPLAIN (ANALYZE, COSTS off, FORMAT json) SELECT 1");
    let explain = cast!(&stmt, Node::ExplainStmt);
    let options = explain.options.as_ref().unwrap();
    assert_eq!(options.len(), 3);
    let costs = cast!(&options[1], Node::DefElem);
    assert_eq!(costs.defname, "costs");
    let format = cast!(&options[2], Node::DefElem);
    assert_eq!(format.defname, "format");
    assert_eq!(cast!(format.arg.as_ref().unwrap(), Node::String).sval, "json");
}

#[test]
fn it_parses_copy_from_stdin() {
    let stmt = parse_stmt("COPY t (a, b) FROM STDIN");
    let copy = cast!(&stmt, Node::CopyStmt);
    assert!(copy.is_from);
    assert!(copy.filename.is_empty());
    assert_eq!(copy.attlist.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_copy_with_generic_options() {
    let stmt = parse_stmt("COPY t TO '/tmp/out' WITH (FORMAT json, HEADER, DELIMITER ',')");
    let copy = cast!(&stmt, Node::CopyStmt);
    assert!(!copy.is_from);
    assert_eq!(copy.filename, "/tmp/out");
    let options = copy.options.as_ref().unwrap();
    // FORMAT before JSON arrives via the lookahead token and still names
    // the option
    let format = cast!(&options[0], Node::DefElem);
    assert_eq!(format.defname, "format");
    assert_eq!(cast!(format.arg.as_ref().unwrap(), Node::String).sval, "json");
    let header = cast!(&options[1], Node::DefElem);
    assert!(header.arg.is_none());
}

#[test]
fn it_parses_copy_legacy_options() {
    let stmt = parse_stmt("COPY t FROM 'in.csv' WITH CSV HEADER DELIMITER AS ';'");
    let copy = cast!(&stmt, Node::CopyStmt);
    let options = copy.options.as_ref().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(cast!(&options[0], Node::DefElem).defname, "format");
    assert_eq!(cast!(&options[1], Node::DefElem).defname, "header");
    assert_eq!(cast!(&options[2], Node::DefElem).defname, "delimiter");
}

#[test]
fn it_parses_copy_query_and_where() {
    let stmt = parse_stmt("COPY (SELECT * FROM t) TO STDOUT");
    let copy = cast!(&stmt, Node::CopyStmt);
    assert!(copy.relation.is_none());
    assert!(matches!(copy.query.as_ref().unwrap(), Node::SelectStmt(_)));

    let stmt = parse_stmt("COPY t FROM PROGRAM 'cat data' WHERE a > 0");
    let copy = cast!(&stmt, Node::CopyStmt);
    assert!(copy.is_program);
    assert!(copy.where_clause.is_some());
}

#[test]
fn it_parses_grant_on_table() {
    let stmt = parse_stmt("GRANT SELECT, UPDATE (a, b) ON TABLE t TO alice WITH GRANT OPTION");
    let grant = cast!(&stmt, Node::GrantStmt);
    assert!(grant.is_grant);
    assert_eq!(grant.objtype, ObjectType::Table);
    assert_eq!(grant.targtype, GrantTargetType::Object);
    assert!(grant.grant_option);
    let privileges = grant.privileges.as_ref().unwrap();
    assert_eq!(cast!(&privileges[0], Node::AccessPriv).priv_name, "select");
    let update = cast!(&privileges[1], Node::AccessPriv);
    assert_eq!(update.priv_name, "update");
    assert_eq!(update.cols.as_ref().unwrap().len(), 2);
    let grantee = cast!(&grant.grantees.as_ref().unwrap()[0], Node::RoleSpec);
    assert_eq!(grantee.rolename, "alice");
}

#[test]
fn it_parses_grant_all_privileges() {
    let stmt = parse_stmt("GRANT ALL PRIVILEGES ON mytable TO PUBLIC");
    let grant = cast!(&stmt, Node::GrantStmt);
    assert!(grant.privileges.is_none());
    let grantee = cast!(&grant.grantees.as_ref().unwrap()[0], Node::RoleSpec);
    assert_eq!(grantee.roletype, RoleSpecType::Public);
}

#[test]
fn it_parses_grant_all_in_schema() {
    let stmt = parse_stmt("GRANT SELECT ON ALL TABLES IN SCHEMA public, app TO reader");
    let grant = cast!(&stmt, Node::GrantStmt);
    assert_eq!(grant.targtype, GrantTargetType::AllInSchema);
    assert_eq!(grant.objects.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_revoke() {
    let stmt = parse_stmt("REVOKE GRANT OPTION FOR SELECT ON t FROM bob CASCADE");
    let revoke = cast!(&stmt, Node::GrantStmt);
    assert!(!revoke.is_grant);
    assert!(revoke.grant_option);
    assert_eq!(revoke.behavior, DropBehavior::Cascade);
}

#[test]
fn it_parses_grant_role() {
    let stmt = parse_stmt("GRANT admin TO alice WITH ADMIN OPTION GRANTED BY CURRENT_USER");
    let grant = cast!(&stmt, Node::GrantRoleStmt);
    assert!(grant.is_grant);
    let granted = cast!(&grant.granted_roles.as_ref().unwrap()[0], Node::AccessPriv);
    assert_eq!(granted.priv_name, "admin");
    assert!(grant.opt.is_some());
    assert_eq!(
        grant.grantor.as_ref().unwrap().roletype,
        RoleSpecType::CurrentUser
    );
}

#[test]
fn it_parses_lock_table() {
    let stmt = parse_stmt("LOCK TABLE a, b IN SHARE ROW EXCLUSIVE MODE NOWAIT");
    let lock = cast!(&stmt, Node::LockStmt);
    assert_eq!(lock.relations.as_ref().unwrap().len(), 2);
    assert_eq!(lock.mode, SHARE_ROW_EXCLUSIVE_LOCK);
    assert!(lock.nowait);

    // the default mode is ACCESS EXCLUSIVE
    let stmt = parse_stmt("LOCK t");
    let lock = cast!(&stmt, Node::LockStmt);
    assert_eq!(lock.mode, ACCESS_EXCLUSIVE_LOCK);
}

#[test]
fn it_parses_vacuum() {
    let stmt = parse_stmt("VACUUM FULL FREEZE VERBOSE t (a, b)");
    let vacuum = cast!(&stmt, Node::VacuumStmt);
    assert!(vacuum.is_vacuumcmd);
    let options = vacuum.options.as_ref().unwrap();
    assert_eq!(options.len(), 3);
    let rel = cast!(&vacuum.rels.as_ref().unwrap()[0], Node::VacuumRelation);
    assert_eq!(rel.va_cols.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_vacuum_option_list() {
    let stmt = parse_stmt("VACUUM (ANALYZE, SKIP_LOCKED true) t");
    let vacuum = cast!(&stmt, Node::VacuumStmt);
    let options = vacuum.options.as_ref().unwrap();
    assert_eq!(cast!(&options[0], Node::DefElem).defname, "analyze");
    let skip = cast!(&options[1], Node::DefElem);
    assert_eq!(skip.defname, "skip_locked");
    assert_eq!(cast!(skip.arg.as_ref().unwrap(), Node::Boolean).boolval, true);
}

#[test]
fn it_parses_analyze() {
    let stmt = parse_stmt("ANALYZE VERBOSE t");
    let analyze = cast!(&stmt, Node::VacuumStmt);
    assert!(!analyze.is_vacuumcmd);
    assert_eq!(analyze.rels.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_prepare_and_execute() {
    let stmt = parse_stmt("PREPARE getuser (integer) AS SELECT * FROM users WHERE id = $1");
    let prepare = cast!(&stmt, Node::PrepareStmt);
    assert_eq!(prepare.name, "getuser");
    assert_eq!(prepare.argtypes.as_ref().unwrap().len(), 1);
    assert!(matches!(prepare.query.as_ref().unwrap(), Node::SelectStmt(_)));

    let stmt = parse_stmt("EXECUTE getuser (42)");
    let execute = cast!(&stmt, Node::ExecuteStmt);
    assert_eq!(execute.name, "getuser");
    assert_eq!(int_const(&execute.params.as_ref().unwrap()[0]), 42);

    let stmt = parse_stmt("DEALLOCATE PREPARE getuser");
    let dealloc = cast!(&stmt, Node::DeallocateStmt);
    assert_eq!(dealloc.name, "getuser");
    assert!(!dealloc.isall);

    let stmt = parse_stmt("DEALLOCATE ALL");
    let dealloc = cast!(&stmt, Node::DeallocateStmt);
    assert!(dealloc.isall);
}

#[test]
fn it_parses_cursor_statements() {
    let stmt = parse_stmt("DECLARE cur NO SCROLL CURSOR WITH HOLD FOR SELECT * FROM t");
    let declare = cast!(&stmt, Node::DeclareCursorStmt);
    assert_eq!(declare.portalname, "cur");
    assert_ne!(declare.options & CURSOR_OPT_NO_SCROLL, 0);
    assert_ne!(declare.options & CURSOR_OPT_HOLD, 0);

    let stmt = parse_stmt("FETCH FORWARD 5 FROM cur");
    let fetch = cast!(&stmt, Node::FetchStmt);
    assert_eq!(fetch.direction, FetchDirection::Forward);
    assert_eq!(fetch.how_many, 5);
    assert!(!fetch.ismove);

    let stmt = parse_stmt("FETCH LAST IN cur");
    let fetch = cast!(&stmt, Node::FetchStmt);
    assert_eq!(fetch.direction, FetchDirection::Absolute);
    assert_eq!(fetch.how_many, -1);

    let stmt = parse_stmt("FETCH ALL cur");
    let fetch = cast!(&stmt, Node::FetchStmt);
    assert_eq!(fetch.how_many, FETCH_ALL);

    let stmt = parse_stmt("MOVE BACKWARD ALL IN cur");
    let fetch = cast!(&stmt, Node::FetchStmt);
    assert!(fetch.ismove);
    assert_eq!(fetch.direction, FetchDirection::Backward);

    let stmt = parse_stmt("CLOSE cur");
    let close = cast!(&stmt, Node::ClosePortalStmt);
    assert_eq!(close.portalname, "cur");

    let stmt = parse_stmt("CLOSE ALL");
    let close = cast!(&stmt, Node::ClosePortalStmt);
    assert!(close.portalname.is_empty());
}

#[test]
fn it_parses_notifications() {
    let stmt = parse_stmt("LISTEN events");
    assert_eq!(cast!(&stmt, Node::ListenStmt).conditionname, "events");

    let stmt = parse_stmt("NOTIFY events, 'payload'");
    let notify = cast!(&stmt, Node::NotifyStmt);
    assert_eq!(notify.conditionname, "events");
    assert_eq!(notify.payload, "payload");

    let stmt = parse_stmt("UNLISTEN *");
    assert!(cast!(&stmt, Node::UnlistenStmt).conditionname.is_empty());
}

#[test]
fn it_parses_checkpoint_and_discard() {
    assert!(matches!(parse_stmt("CHECKPOINT"), Node::CheckPointStmt(_)));
    let discard = cast!(&parse_stmt("DISCARD PLANS"), Node::DiscardStmt).clone();
    assert_eq!(discard.target, DiscardMode::Plans);
}

#[test]
fn it_parses_do_block() {
    let stmt = parse_stmt("DO LANGUAGE plpgsql $$ BEGIN END $$");
    let do_stmt = cast!(&stmt, Node::DoStmt);
    let args = do_stmt.args.as_ref().unwrap();
    assert_eq!(cast!(&args[0], Node::DefElem).defname, "language");
    assert_eq!(cast!(&args[1], Node::DefElem).defname, "as");
}

#[test]
fn it_parses_call() {
    let stmt = parse_stmt("CALL do_maintenance(1, 'fast')");
    let call = cast!(&stmt, Node::CallStmt);
    let fc = call.funccall.as_ref().unwrap();
    assert_eq!(cast!(&fc.funcname.as_ref().unwrap()[0], Node::String).sval, "do_maintenance");
    assert_eq!(fc.args.as_ref().unwrap().len(), 2);
}
