//! nodeToString serialization of parse trees.
//!
//! Renders a node tree into PostgreSQL's debug-dump text format:
//! `{TAGNAME :field value ...}` for nodes, `(a b c)` for lists, `<>` for an
//! absent node, quoted-and-escaped strings, bare integers and floats, and
//! `true`/`false` booleans. Enum-valued fields are written as their integer
//! encoding. Node and list fields are written only when present; scalar
//! fields are always written.
//!
//! The output is the acceptance oracle used by the differential test
//! harness, which byte-compares it against the dump a real PostgreSQL
//! instance produces for the same input.

use std::fmt::Write;

use crate::ast::*;

/// Renders a node tree into its canonical dump text.
///
/// Serialization is pure and deterministic; the same tree always yields the
/// same string.
pub fn node_to_string(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    // trees can nest arbitrarily deep and this has no error channel, so
    // grow the stack rather than overflow it
    stacker::maybe_grow(32 * 1024, 1024 * 1024, || write_node_inner(out, node));
}

fn write_node_inner(out: &mut String, node: &Node) {
    match node {
        Node::List(items) => write_list(out, items),
        Node::Null => out.push_str("<>"),
        Node::Integer(n) => {
            let _ = write!(out, "{}", n.ival);
        }
        Node::Float(n) => out.push_str(&n.fval),
        Node::Boolean(n) => out.push_str(if n.boolval { "true" } else { "false" }),
        Node::String(n) => quoted(out, &n.sval),
        Node::BitString(n) => {
            out.push_str("b\"");
            out.push_str(&n.bsval);
            out.push('"');
        }
        Node::AStar(_) => out.push_str("{A_STAR}"),
        Node::CheckPointStmt(_) => out.push_str("{CHECKPOINTSTMT}"),

        Node::RawStmt(n) => write_raw_stmt(out, n),
        Node::SelectStmt(n) => write_select_stmt(out, n),
        Node::InsertStmt(n) => write_insert_stmt(out, n),
        Node::UpdateStmt(n) => write_update_stmt(out, n),
        Node::DeleteStmt(n) => write_delete_stmt(out, n),
        Node::MergeStmt(n) => write_merge_stmt(out, n),
        Node::MergeWhenClause(n) => write_merge_when_clause(out, n),

        Node::CreateStmt(n) => write_create_stmt(out, n),
        Node::AlterTableStmt(n) => write_alter_table_stmt(out, n),
        Node::AlterTableCmd(n) => write_alter_table_cmd(out, n),
        Node::DropStmt(n) => write_drop_stmt(out, n),
        Node::TruncateStmt(n) => write_truncate_stmt(out, n),
        Node::CommentStmt(n) => write_comment_stmt(out, n),
        Node::IndexStmt(n) => write_index_stmt(out, n),
        Node::CreateSchemaStmt(n) => write_create_schema_stmt(out, n),
        Node::ViewStmt(n) => write_view_stmt(out, n),
        Node::CreateFunctionStmt(n) => write_create_function_stmt(out, n),
        Node::AlterFunctionStmt(n) => write_alter_function_stmt(out, n),
        Node::CreateSeqStmt(n) => write_create_seq_stmt(out, n),
        Node::AlterSeqStmt(n) => write_alter_seq_stmt(out, n),
        Node::CreateDomainStmt(n) => write_create_domain_stmt(out, n),
        Node::CreateTableAsStmt(n) => write_create_table_as_stmt(out, n),
        Node::RefreshMatViewStmt(n) => write_refresh_mat_view_stmt(out, n),
        Node::CreateTrigStmt(n) => write_create_trig_stmt(out, n),
        Node::RuleStmt(n) => write_rule_stmt(out, n),
        Node::CreateRoleStmt(n) => write_create_role_stmt(out, n),
        Node::AlterRoleStmt(n) => write_alter_role_stmt(out, n),
        Node::DropRoleStmt(n) => write_drop_role_stmt(out, n),
        Node::CreatedbStmt(n) => write_createdb_stmt(out, n),
        Node::DropdbStmt(n) => write_dropdb_stmt(out, n),
        Node::CreateExtensionStmt(n) => write_create_extension_stmt(out, n),
        Node::CreateEnumStmt(n) => write_create_enum_stmt(out, n),
        Node::CompositeTypeStmt(n) => write_composite_type_stmt(out, n),
        Node::RenameStmt(n) => write_rename_stmt(out, n),

        Node::TransactionStmt(n) => write_transaction_stmt(out, n),

        Node::AExpr(n) => write_a_expr(out, n),
        Node::ColumnRef(n) => write_column_ref(out, n),
        Node::ParamRef(n) => write_param_ref(out, n),
        Node::AConst(n) => write_a_const(out, n),
        Node::TypeCast(n) => write_type_cast(out, n),
        Node::CollateClause(n) => write_collate_clause(out, n),
        Node::FuncCall(n) => write_func_call(out, n),
        Node::AIndices(n) => write_a_indices(out, n),
        Node::AIndirection(n) => write_a_indirection(out, n),
        Node::AArrayExpr(n) => write_a_array_expr(out, n),
        Node::SubLink(n) => write_sub_link(out, n),
        Node::BoolExpr(n) => write_bool_expr(out, n),
        Node::NullTest(n) => write_null_test(out, n),
        Node::BooleanTest(n) => write_boolean_test(out, n),
        Node::CaseExpr(n) => write_case_expr(out, n),
        Node::CaseWhen(n) => write_case_when(out, n),
        Node::CoalesceExpr(n) => write_coalesce_expr(out, n),
        Node::MinMaxExpr(n) => write_min_max_expr(out, n),
        Node::SqlValueFunction(n) => write_sql_value_function(out, n),
        Node::RowExpr(n) => write_row_expr(out, n),
        Node::NamedArgExpr(n) => write_named_arg_expr(out, n),
        Node::GroupingFunc(n) => write_grouping_func(out, n),
        Node::GroupingSet(n) => write_grouping_set(out, n),
        Node::MultiAssignRef(n) => write_multi_assign_ref(out, n),
        Node::SetToDefault(n) => write_set_to_default(out, n),
        Node::CurrentOfExpr(n) => write_current_of_expr(out, n),

        Node::ResTarget(n) => write_res_target(out, n),
        Node::RangeVar(n) => write_range_var(out, n),
        Node::RangeSubselect(n) => write_range_subselect(out, n),
        Node::RangeFunction(n) => write_range_function(out, n),
        Node::JoinExpr(n) => write_join_expr(out, n),

        Node::SortBy(n) => write_sort_by(out, n),
        Node::WindowDef(n) => write_window_def(out, n),
        Node::WithClause(n) => write_with_clause(out, n),
        Node::CommonTableExpr(n) => write_common_table_expr(out, n),
        Node::IntoClause(n) => write_into_clause(out, n),
        Node::OnConflictClause(n) => write_on_conflict_clause(out, n),
        Node::InferClause(n) => write_infer_clause(out, n),
        Node::LockingClause(n) => write_locking_clause(out, n),

        Node::TypeName(n) => write_type_name(out, n),
        Node::ColumnDef(n) => write_column_def(out, n),
        Node::Constraint(n) => write_constraint(out, n),
        Node::DefElem(n) => write_def_elem(out, n),
        Node::IndexElem(n) => write_index_elem(out, n),
        Node::TableLikeClause(n) => write_table_like_clause(out, n),
        Node::PartitionSpec(n) => write_partition_spec(out, n),
        Node::PartitionElem(n) => write_partition_elem(out, n),

        Node::Alias(n) => write_alias(out, n),
        Node::RoleSpec(n) => write_role_spec(out, n),
        Node::FunctionParameter(n) => write_function_parameter(out, n),
        Node::AccessPriv(n) => write_access_priv(out, n),
        Node::ObjectWithArgs(n) => write_object_with_args(out, n),
        Node::TriggerTransition(n) => write_trigger_transition(out, n),
        Node::VacuumRelation(n) => write_vacuum_relation(out, n),

        Node::VariableSetStmt(n) => write_variable_set_stmt(out, n),
        Node::VariableShowStmt(n) => write_variable_show_stmt(out, n),
        Node::ExplainStmt(n) => write_explain_stmt(out, n),
        Node::CopyStmt(n) => write_copy_stmt(out, n),
        Node::GrantStmt(n) => write_grant_stmt(out, n),
        Node::GrantRoleStmt(n) => write_grant_role_stmt(out, n),
        Node::LockStmt(n) => write_lock_stmt(out, n),
        Node::VacuumStmt(n) => write_vacuum_stmt(out, n),

        Node::DoStmt(n) => write_do_stmt(out, n),
        Node::CallStmt(n) => write_call_stmt(out, n),
        Node::NotifyStmt(n) => write_notify_stmt(out, n),
        Node::ListenStmt(n) => write_listen_stmt(out, n),
        Node::UnlistenStmt(n) => write_unlisten_stmt(out, n),
        Node::DiscardStmt(n) => write_discard_stmt(out, n),
        Node::PrepareStmt(n) => write_prepare_stmt(out, n),
        Node::ExecuteStmt(n) => write_execute_stmt(out, n),
        Node::DeallocateStmt(n) => write_deallocate_stmt(out, n),
        Node::DeclareCursorStmt(n) => write_declare_cursor_stmt(out, n),
        Node::ClosePortalStmt(n) => write_close_portal_stmt(out, n),
        Node::FetchStmt(n) => write_fetch_stmt(out, n),
    }
}

// ---------------------------------------------------------------------------
// field helpers

fn write_list(out: &mut String, items: &[Node]) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_node(out, item);
    }
    out.push(')');
}

fn quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// A node field, written only when present.
fn node_field(out: &mut String, label: &str, value: &Option<Node>) {
    if let Some(node) = value {
        out.push_str(" :");
        out.push_str(label);
        out.push(' ');
        write_node(out, node);
    }
}

/// A list field, written only when the list is present (a present-but-empty
/// list still prints as `()`).
fn list_field(out: &mut String, label: &str, value: &Option<Vec<Node>>) {
    if let Some(items) = value {
        out.push_str(" :");
        out.push_str(label);
        out.push(' ');
        write_list(out, items);
    }
}

/// A string field, written only when non-empty.
fn str_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(" :");
        out.push_str(label);
        out.push(' ');
        quoted(out, value);
    }
}

fn bool_field(out: &mut String, label: &str, value: bool) {
    let _ = write!(out, " :{} {}", label, value);
}

fn int_field(out: &mut String, label: &str, value: i64) {
    let _ = write!(out, " :{} {}", label, value);
}

fn char_field(out: &mut String, label: &str, value: char) {
    let _ = write!(out, " :{} {}", label, value);
}

// ---------------------------------------------------------------------------
// statements

fn write_raw_stmt(out: &mut String, n: &RawStmt) {
    out.push_str("{RAWSTMT");
    out.push_str(" :stmt ");
    write_node(out, &n.stmt);
    int_field(out, "stmt_location", n.stmt_location as i64);
    int_field(out, "stmt_len", n.stmt_len as i64);
    out.push('}');
}

fn write_select_stmt(out: &mut String, n: &SelectStmt) {
    out.push_str("{SELECTSTMT");
    list_field(out, "distinctClause", &n.distinct_clause);
    if let Some(into) = &n.into_clause {
        out.push_str(" :intoClause ");
        write_into_clause(out, into);
    }
    list_field(out, "targetList", &n.target_list);
    list_field(out, "fromClause", &n.from_clause);
    node_field(out, "whereClause", &n.where_clause);
    list_field(out, "groupClause", &n.group_clause);
    if n.group_distinct {
        out.push_str(" :groupDistinct true");
    }
    node_field(out, "havingClause", &n.having_clause);
    list_field(out, "windowClause", &n.window_clause);
    list_field(out, "valuesLists", &n.values_lists);
    list_field(out, "sortClause", &n.sort_clause);
    node_field(out, "limitOffset", &n.limit_offset);
    node_field(out, "limitCount", &n.limit_count);
    if n.limit_option != LimitOption::Count {
        int_field(out, "limitOption", n.limit_option as i64);
    }
    list_field(out, "lockingClause", &n.locking_clause);
    if let Some(with) = &n.with_clause {
        out.push_str(" :withClause ");
        write_with_clause(out, with);
    }
    if n.op != SetOperation::None {
        int_field(out, "op", n.op as i64);
    }
    if n.all {
        out.push_str(" :all true");
    }
    if let Some(larg) = &n.larg {
        out.push_str(" :larg ");
        write_select_stmt(out, larg);
    }
    if let Some(rarg) = &n.rarg {
        out.push_str(" :rarg ");
        write_select_stmt(out, rarg);
    }
    out.push('}');
}

fn write_insert_stmt(out: &mut String, n: &InsertStmt) {
    out.push_str("{INSERTSTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "cols", &n.cols);
    node_field(out, "selectStmt", &n.select_stmt);
    if let Some(occ) = &n.on_conflict_clause {
        out.push_str(" :onConflictClause ");
        write_on_conflict_clause(out, occ);
    }
    list_field(out, "returningList", &n.returning_list);
    if let Some(with) = &n.with_clause {
        out.push_str(" :withClause ");
        write_with_clause(out, with);
    }
    if n.override_ != OverridingKind::NotSet {
        int_field(out, "override", n.override_ as i64);
    }
    out.push('}');
}

fn write_update_stmt(out: &mut String, n: &UpdateStmt) {
    out.push_str("{UPDATESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "targetList", &n.target_list);
    node_field(out, "whereClause", &n.where_clause);
    list_field(out, "fromClause", &n.from_clause);
    list_field(out, "returningList", &n.returning_list);
    if let Some(with) = &n.with_clause {
        out.push_str(" :withClause ");
        write_with_clause(out, with);
    }
    out.push('}');
}

fn write_delete_stmt(out: &mut String, n: &DeleteStmt) {
    out.push_str("{DELETESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "usingClause", &n.using_clause);
    node_field(out, "whereClause", &n.where_clause);
    list_field(out, "returningList", &n.returning_list);
    if let Some(with) = &n.with_clause {
        out.push_str(" :withClause ");
        write_with_clause(out, with);
    }
    out.push('}');
}

fn write_merge_stmt(out: &mut String, n: &MergeStmt) {
    out.push_str("{MERGESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    node_field(out, "sourceRelation", &n.source_relation);
    node_field(out, "joinCondition", &n.join_condition);
    list_field(out, "mergeWhenClauses", &n.merge_when_clauses);
    list_field(out, "returningList", &n.returning_list);
    if let Some(with) = &n.with_clause {
        out.push_str(" :withClause ");
        write_with_clause(out, with);
    }
    out.push('}');
}

fn write_merge_when_clause(out: &mut String, n: &MergeWhenClause) {
    out.push_str("{MERGEWHENCLAUSE");
    int_field(out, "matchKind", n.kind as i64);
    int_field(out, "commandType", n.command_type as i64);
    int_field(out, "override", n.override_ as i64);
    node_field(out, "condition", &n.condition);
    list_field(out, "targetList", &n.target_list);
    list_field(out, "values", &n.values);
    out.push('}');
}

fn write_create_stmt(out: &mut String, n: &CreateStmt) {
    out.push_str("{CREATESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "tableElts", &n.table_elts);
    list_field(out, "inhRelations", &n.inh_relations);
    if let Some(spec) = &n.partspec {
        out.push_str(" :partspec ");
        write_partition_spec(out, spec);
    }
    if let Some(of_type) = &n.of_typename {
        out.push_str(" :ofTypename ");
        write_type_name(out, of_type);
    }
    list_field(out, "constraints", &n.constraints);
    list_field(out, "options", &n.options);
    int_field(out, "oncommit", n.oncommit as i64);
    str_field(out, "tablespacename", &n.tablespacename);
    str_field(out, "accessMethod", &n.access_method);
    bool_field(out, "if_not_exists", n.if_not_exists);
    out.push('}');
}

fn write_alter_table_stmt(out: &mut String, n: &AlterTableStmt) {
    out.push_str("{ALTERTABLESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "cmds", &n.cmds);
    int_field(out, "objtype", n.objtype as i64);
    bool_field(out, "missing_ok", n.missing_ok);
    out.push('}');
}

fn write_alter_table_cmd(out: &mut String, n: &AlterTableCmd) {
    out.push_str("{ALTERTABLECMD");
    int_field(out, "subtype", n.subtype as i64);
    str_field(out, "name", &n.name);
    int_field(out, "num", n.num as i64);
    if let Some(role) = &n.newowner {
        out.push_str(" :newowner ");
        write_role_spec(out, role);
    }
    node_field(out, "def", &n.def);
    int_field(out, "behavior", n.behavior as i64);
    bool_field(out, "missing_ok", n.missing_ok);
    out.push('}');
}

fn write_drop_stmt(out: &mut String, n: &DropStmt) {
    out.push_str("{DROPSTMT");
    list_field(out, "objects", &n.objects);
    int_field(out, "removeType", n.remove_type as i64);
    int_field(out, "behavior", n.behavior as i64);
    bool_field(out, "missing_ok", n.missing_ok);
    bool_field(out, "concurrent", n.concurrent);
    out.push('}');
}

fn write_truncate_stmt(out: &mut String, n: &TruncateStmt) {
    out.push_str("{TRUNCATESTMT");
    list_field(out, "relations", &n.relations);
    bool_field(out, "restart_seqs", n.restart_seqs);
    int_field(out, "behavior", n.behavior as i64);
    out.push('}');
}

fn write_comment_stmt(out: &mut String, n: &CommentStmt) {
    out.push_str("{COMMENTSTMT");
    int_field(out, "objtype", n.objtype as i64);
    node_field(out, "object", &n.object);
    str_field(out, "comment", &n.comment);
    out.push('}');
}

fn write_index_stmt(out: &mut String, n: &IndexStmt) {
    out.push_str("{INDEXSTMT");
    str_field(out, "idxname", &n.idxname);
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    str_field(out, "accessMethod", &n.access_method);
    str_field(out, "tableSpace", &n.table_space);
    list_field(out, "indexParams", &n.index_params);
    list_field(out, "indexIncludingParams", &n.index_including_params);
    list_field(out, "options", &n.options);
    node_field(out, "whereClause", &n.where_clause);
    bool_field(out, "unique", n.unique);
    bool_field(out, "nulls_not_distinct", n.nulls_not_distinct);
    bool_field(out, "primary", n.primary);
    bool_field(out, "isconstraint", n.isconstraint);
    bool_field(out, "deferrable", n.deferrable);
    bool_field(out, "initdeferred", n.initdeferred);
    bool_field(out, "concurrent", n.concurrent);
    bool_field(out, "if_not_exists", n.if_not_exists);
    out.push('}');
}

fn write_create_schema_stmt(out: &mut String, n: &CreateSchemaStmt) {
    out.push_str("{CREATESCHEMASTMT");
    str_field(out, "schemaname", &n.schemaname);
    if let Some(role) = &n.authrole {
        out.push_str(" :authrole ");
        write_role_spec(out, role);
    }
    list_field(out, "schemaElts", &n.schema_elts);
    bool_field(out, "if_not_exists", n.if_not_exists);
    out.push('}');
}

fn write_view_stmt(out: &mut String, n: &ViewStmt) {
    out.push_str("{VIEWSTMT");
    if let Some(view) = &n.view {
        out.push_str(" :view ");
        write_range_var(out, view);
    }
    list_field(out, "aliases", &n.aliases);
    node_field(out, "query", &n.query);
    bool_field(out, "replace", n.replace);
    list_field(out, "options", &n.options);
    int_field(out, "withCheckOption", n.with_check_option as i64);
    out.push('}');
}

fn write_create_function_stmt(out: &mut String, n: &CreateFunctionStmt) {
    out.push_str("{CREATEFUNCTIONSTMT");
    bool_field(out, "is_procedure", n.is_procedure);
    bool_field(out, "replace", n.replace);
    list_field(out, "funcname", &n.funcname);
    list_field(out, "parameters", &n.parameters);
    if let Some(rt) = &n.return_type {
        out.push_str(" :returnType ");
        write_type_name(out, rt);
    }
    list_field(out, "options", &n.options);
    node_field(out, "sql_body", &n.sql_body);
    out.push('}');
}

fn write_alter_function_stmt(out: &mut String, n: &AlterFunctionStmt) {
    out.push_str("{ALTERFUNCTIONSTMT");
    int_field(out, "objtype", n.objtype as i64);
    if let Some(func) = &n.func {
        out.push_str(" :func ");
        write_object_with_args(out, func);
    }
    list_field(out, "actions", &n.actions);
    out.push('}');
}

fn write_create_seq_stmt(out: &mut String, n: &CreateSeqStmt) {
    out.push_str("{CREATESEQSTMT");
    if let Some(seq) = &n.sequence {
        out.push_str(" :sequence ");
        write_range_var(out, seq);
    }
    list_field(out, "options", &n.options);
    bool_field(out, "for_identity", n.for_identity);
    bool_field(out, "if_not_exists", n.if_not_exists);
    out.push('}');
}

fn write_alter_seq_stmt(out: &mut String, n: &AlterSeqStmt) {
    out.push_str("{ALTERSEQSTMT");
    if let Some(seq) = &n.sequence {
        out.push_str(" :sequence ");
        write_range_var(out, seq);
    }
    list_field(out, "options", &n.options);
    bool_field(out, "for_identity", n.for_identity);
    bool_field(out, "missing_ok", n.missing_ok);
    out.push('}');
}

fn write_create_domain_stmt(out: &mut String, n: &CreateDomainStmt) {
    out.push_str("{CREATEDOMAINSTMT");
    list_field(out, "domainname", &n.domainname);
    if let Some(tn) = &n.type_name {
        out.push_str(" :typeName ");
        write_type_name(out, tn);
    }
    if let Some(coll) = &n.coll_clause {
        out.push_str(" :collClause ");
        write_collate_clause(out, coll);
    }
    list_field(out, "constraints", &n.constraints);
    out.push('}');
}

fn write_create_table_as_stmt(out: &mut String, n: &CreateTableAsStmt) {
    out.push_str("{CREATETABLEASSTMT");
    node_field(out, "query", &n.query);
    if let Some(into) = &n.into {
        out.push_str(" :into ");
        write_into_clause(out, into);
    }
    int_field(out, "objtype", n.objtype as i64);
    bool_field(out, "is_select_into", n.is_select_into);
    bool_field(out, "if_not_exists", n.if_not_exists);
    out.push('}');
}

fn write_refresh_mat_view_stmt(out: &mut String, n: &RefreshMatViewStmt) {
    out.push_str("{REFRESHMATVIEWSTMT");
    bool_field(out, "concurrent", n.concurrent);
    bool_field(out, "skipData", n.skip_data);
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    out.push('}');
}

fn write_create_trig_stmt(out: &mut String, n: &CreateTrigStmt) {
    out.push_str("{CREATETRIGSTMT");
    bool_field(out, "replace", n.replace);
    bool_field(out, "isconstraint", n.isconstraint);
    str_field(out, "trigname", &n.trigname);
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "funcname", &n.funcname);
    list_field(out, "args", &n.args);
    bool_field(out, "row", n.row);
    int_field(out, "timing", n.timing as i64);
    int_field(out, "events", n.events as i64);
    list_field(out, "columns", &n.columns);
    node_field(out, "whenClause", &n.when_clause);
    list_field(out, "transitionRels", &n.transition_rels);
    bool_field(out, "deferrable", n.deferrable);
    bool_field(out, "initdeferred", n.initdeferred);
    if let Some(rel) = &n.constrrel {
        out.push_str(" :constrrel ");
        write_range_var(out, rel);
    }
    out.push('}');
}

fn write_rule_stmt(out: &mut String, n: &RuleStmt) {
    out.push_str("{RULESTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    str_field(out, "rulename", &n.rulename);
    node_field(out, "whereClause", &n.where_clause);
    int_field(out, "event", n.event as i64);
    bool_field(out, "instead", n.instead);
    list_field(out, "actions", &n.actions);
    bool_field(out, "replace", n.replace);
    out.push('}');
}

fn write_create_role_stmt(out: &mut String, n: &CreateRoleStmt) {
    out.push_str("{CREATEROLESTMT");
    int_field(out, "stmt_type", n.stmt_type as i64);
    str_field(out, "role", &n.role);
    list_field(out, "options", &n.options);
    out.push('}');
}

fn write_alter_role_stmt(out: &mut String, n: &AlterRoleStmt) {
    out.push_str("{ALTERROLESTMT");
    if let Some(role) = &n.role {
        out.push_str(" :role ");
        write_role_spec(out, role);
    }
    list_field(out, "options", &n.options);
    int_field(out, "action", n.action as i64);
    out.push('}');
}

fn write_drop_role_stmt(out: &mut String, n: &DropRoleStmt) {
    out.push_str("{DROPROLESTMT");
    list_field(out, "roles", &n.roles);
    bool_field(out, "missing_ok", n.missing_ok);
    out.push('}');
}

fn write_createdb_stmt(out: &mut String, n: &CreatedbStmt) {
    out.push_str("{CREATEDBSTMT");
    str_field(out, "dbname", &n.dbname);
    list_field(out, "options", &n.options);
    out.push('}');
}

fn write_dropdb_stmt(out: &mut String, n: &DropdbStmt) {
    out.push_str("{DROPDBSTMT");
    str_field(out, "dbname", &n.dbname);
    bool_field(out, "missing_ok", n.missing_ok);
    list_field(out, "options", &n.options);
    out.push('}');
}

fn write_create_extension_stmt(out: &mut String, n: &CreateExtensionStmt) {
    out.push_str("{CREATEEXTENSIONSTMT");
    str_field(out, "extname", &n.extname);
    bool_field(out, "if_not_exists", n.if_not_exists);
    list_field(out, "options", &n.options);
    out.push('}');
}

fn write_create_enum_stmt(out: &mut String, n: &CreateEnumStmt) {
    out.push_str("{CREATEENUMSTMT");
    list_field(out, "typeName", &n.type_name);
    list_field(out, "vals", &n.vals);
    out.push('}');
}

fn write_composite_type_stmt(out: &mut String, n: &CompositeTypeStmt) {
    out.push_str("{COMPOSITETYPESTMT");
    if let Some(tv) = &n.typevar {
        out.push_str(" :typevar ");
        write_range_var(out, tv);
    }
    list_field(out, "coldeflist", &n.coldeflist);
    out.push('}');
}

fn write_rename_stmt(out: &mut String, n: &RenameStmt) {
    out.push_str("{RENAMESTMT");
    int_field(out, "renameType", n.rename_type as i64);
    int_field(out, "relationType", n.relation_type as i64);
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    node_field(out, "object", &n.object);
    str_field(out, "subname", &n.subname);
    str_field(out, "newname", &n.newname);
    int_field(out, "behavior", n.behavior as i64);
    bool_field(out, "missing_ok", n.missing_ok);
    out.push('}');
}

fn write_transaction_stmt(out: &mut String, n: &TransactionStmt) {
    out.push_str("{TRANSACTIONSTMT");
    int_field(out, "kind", n.kind as i64);
    list_field(out, "options", &n.options);
    str_field(out, "savepoint_name", &n.savepoint_name);
    str_field(out, "gid", &n.gid);
    bool_field(out, "chain", n.chain);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

// ---------------------------------------------------------------------------
// expressions

fn write_a_expr(out: &mut String, n: &AExpr) {
    out.push_str("{A_EXPR");
    int_field(out, "kind", n.kind as i64);
    list_field(out, "name", &n.name);
    node_field(out, "lexpr", &n.lexpr);
    node_field(out, "rexpr", &n.rexpr);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_column_ref(out: &mut String, n: &ColumnRef) {
    out.push_str("{COLUMNREF");
    list_field(out, "fields", &n.fields);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_param_ref(out: &mut String, n: &ParamRef) {
    out.push_str("{PARAMREF");
    int_field(out, "number", n.number as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_a_const(out: &mut String, n: &AConst) {
    out.push_str("{A_CONST");
    if n.isnull {
        out.push_str(" :isnull true");
    } else if let Some(val) = &n.val {
        out.push_str(" :val ");
        write_node(out, val);
    }
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_type_cast(out: &mut String, n: &TypeCast) {
    out.push_str("{TYPECAST");
    node_field(out, "arg", &n.arg);
    if let Some(tn) = &n.type_name {
        out.push_str(" :typeName ");
        write_type_name(out, tn);
    }
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_collate_clause(out: &mut String, n: &CollateClause) {
    out.push_str("{COLLATECLAUSE");
    node_field(out, "arg", &n.arg);
    list_field(out, "collname", &n.collname);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_type_name(out: &mut String, n: &TypeName) {
    out.push_str("{TYPENAME");
    list_field(out, "names", &n.names);
    int_field(out, "typeOid", 0);
    bool_field(out, "setof", n.setof);
    bool_field(out, "pct_type", n.pct_type);
    list_field(out, "typmods", &n.typmods);
    int_field(out, "typemod", n.typemod as i64);
    list_field(out, "arrayBounds", &n.array_bounds);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_func_call(out: &mut String, n: &FuncCall) {
    out.push_str("{FUNCCALL");
    list_field(out, "funcname", &n.funcname);
    list_field(out, "args", &n.args);
    list_field(out, "agg_order", &n.agg_order);
    node_field(out, "agg_filter", &n.agg_filter);
    if let Some(over) = &n.over {
        out.push_str(" :over ");
        write_window_def(out, over);
    }
    bool_field(out, "agg_within_group", n.agg_within_group);
    bool_field(out, "agg_star", n.agg_star);
    bool_field(out, "agg_distinct", n.agg_distinct);
    bool_field(out, "func_variadic", n.func_variadic);
    int_field(out, "funcformat", n.funcformat as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_a_indices(out: &mut String, n: &AIndices) {
    out.push_str("{A_INDICES");
    bool_field(out, "is_slice", n.is_slice);
    node_field(out, "lidx", &n.lidx);
    node_field(out, "uidx", &n.uidx);
    out.push('}');
}

fn write_a_indirection(out: &mut String, n: &AIndirection) {
    out.push_str("{A_INDIRECTION");
    node_field(out, "arg", &n.arg);
    list_field(out, "indirection", &n.indirection);
    out.push('}');
}

fn write_a_array_expr(out: &mut String, n: &AArrayExpr) {
    out.push_str("{A_ARRAYEXPR");
    list_field(out, "elements", &n.elements);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_sub_link(out: &mut String, n: &SubLink) {
    out.push_str("{SUBLINK");
    int_field(out, "subLinkType", n.sub_link_type as i64);
    int_field(out, "subLinkId", n.sub_link_id as i64);
    node_field(out, "testexpr", &n.testexpr);
    list_field(out, "operName", &n.oper_name);
    node_field(out, "subselect", &n.subselect);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_bool_expr(out: &mut String, n: &BoolExpr) {
    out.push_str("{BOOLEXPR");
    int_field(out, "boolop", n.boolop as i64);
    list_field(out, "args", &n.args);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_null_test(out: &mut String, n: &NullTest) {
    out.push_str("{NULLTEST");
    node_field(out, "arg", &n.arg);
    int_field(out, "nulltesttype", n.nulltesttype as i64);
    bool_field(out, "argisrow", n.argisrow);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_boolean_test(out: &mut String, n: &BooleanTest) {
    out.push_str("{BOOLEANTEST");
    node_field(out, "arg", &n.arg);
    int_field(out, "booltesttype", n.booltesttype as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_case_expr(out: &mut String, n: &CaseExpr) {
    out.push_str("{CASEEXPR");
    node_field(out, "arg", &n.arg);
    list_field(out, "args", &n.args);
    node_field(out, "defresult", &n.defresult);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_case_when(out: &mut String, n: &CaseWhen) {
    out.push_str("{CASEWHEN");
    node_field(out, "expr", &n.expr);
    node_field(out, "result", &n.result);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_coalesce_expr(out: &mut String, n: &CoalesceExpr) {
    out.push_str("{COALESCEEXPR");
    list_field(out, "args", &n.args);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_min_max_expr(out: &mut String, n: &MinMaxExpr) {
    out.push_str("{MINMAXEXPR");
    int_field(out, "op", n.op as i64);
    list_field(out, "args", &n.args);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_sql_value_function(out: &mut String, n: &SqlValueFunction) {
    out.push_str("{SQLVALUEFUNCTION");
    int_field(out, "op", n.op as i64);
    int_field(out, "typmod", n.typmod as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_row_expr(out: &mut String, n: &RowExpr) {
    out.push_str("{ROWEXPR");
    list_field(out, "args", &n.args);
    int_field(out, "row_format", n.row_format as i64);
    list_field(out, "colnames", &n.colnames);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_named_arg_expr(out: &mut String, n: &NamedArgExpr) {
    out.push_str("{NAMEDARGEXPR");
    node_field(out, "arg", &n.arg);
    str_field(out, "name", &n.name);
    int_field(out, "argnumber", n.argnumber as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_grouping_func(out: &mut String, n: &GroupingFunc) {
    out.push_str("{GROUPINGFUNC");
    list_field(out, "args", &n.args);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_grouping_set(out: &mut String, n: &GroupingSet) {
    out.push_str("{GROUPINGSET");
    int_field(out, "kind", n.kind as i64);
    list_field(out, "content", &n.content);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_multi_assign_ref(out: &mut String, n: &MultiAssignRef) {
    out.push_str("{MULTIASSIGNREF");
    node_field(out, "source", &n.source);
    int_field(out, "colno", n.colno as i64);
    int_field(out, "ncolumns", n.ncolumns as i64);
    out.push('}');
}

fn write_set_to_default(out: &mut String, n: &SetToDefault) {
    out.push_str("{SETTODEFAULT");
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_current_of_expr(out: &mut String, n: &CurrentOfExpr) {
    out.push_str("{CURRENTOFEXPR");
    str_field(out, "cursor_name", &n.cursor_name);
    int_field(out, "cursor_param", n.cursor_param as i64);
    out.push('}');
}

// ---------------------------------------------------------------------------
// targets and range table entries

fn write_res_target(out: &mut String, n: &ResTarget) {
    out.push_str("{RESTARGET");
    str_field(out, "name", &n.name);
    list_field(out, "indirection", &n.indirection);
    node_field(out, "val", &n.val);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_range_var(out: &mut String, n: &RangeVar) {
    out.push_str("{RANGEVAR");
    str_field(out, "catalogname", &n.catalogname);
    str_field(out, "schemaname", &n.schemaname);
    str_field(out, "relname", &n.relname);
    bool_field(out, "inh", n.inh);
    char_field(out, "relpersistence", n.relpersistence);
    if let Some(alias) = &n.alias {
        out.push_str(" :alias ");
        write_alias(out, alias);
    }
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_range_subselect(out: &mut String, n: &RangeSubselect) {
    out.push_str("{RANGESUBSELECT");
    bool_field(out, "lateral", n.lateral);
    node_field(out, "subquery", &n.subquery);
    if let Some(alias) = &n.alias {
        out.push_str(" :alias ");
        write_alias(out, alias);
    }
    out.push('}');
}

fn write_range_function(out: &mut String, n: &RangeFunction) {
    out.push_str("{RANGEFUNCTION");
    bool_field(out, "lateral", n.lateral);
    bool_field(out, "ordinality", n.ordinality);
    bool_field(out, "is_rowsfrom", n.is_rowsfrom);
    list_field(out, "functions", &n.functions);
    if let Some(alias) = &n.alias {
        out.push_str(" :alias ");
        write_alias(out, alias);
    }
    list_field(out, "coldeflist", &n.coldeflist);
    out.push('}');
}

fn write_join_expr(out: &mut String, n: &JoinExpr) {
    out.push_str("{JOINEXPR");
    int_field(out, "jointype", n.jointype as i64);
    bool_field(out, "isNatural", n.is_natural);
    node_field(out, "larg", &n.larg);
    node_field(out, "rarg", &n.rarg);
    list_field(out, "usingClause", &n.using_clause);
    if let Some(alias) = &n.join_using_alias {
        out.push_str(" :join_using_alias ");
        write_alias(out, alias);
    }
    node_field(out, "quals", &n.quals);
    if let Some(alias) = &n.alias {
        out.push_str(" :alias ");
        write_alias(out, alias);
    }
    int_field(out, "rtindex", n.rtindex as i64);
    out.push('}');
}

// ---------------------------------------------------------------------------
// clauses

fn write_sort_by(out: &mut String, n: &SortBy) {
    out.push_str("{SORTBY");
    node_field(out, "node", &n.node);
    int_field(out, "sortby_dir", n.sortby_dir as i64);
    int_field(out, "sortby_nulls", n.sortby_nulls as i64);
    list_field(out, "useOp", &n.use_op);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_window_def(out: &mut String, n: &WindowDef) {
    out.push_str("{WINDOWDEF");
    str_field(out, "name", &n.name);
    str_field(out, "refname", &n.refname);
    list_field(out, "partitionClause", &n.partition_clause);
    list_field(out, "orderClause", &n.order_clause);
    int_field(out, "frameOptions", n.frame_options as i64);
    node_field(out, "startOffset", &n.start_offset);
    node_field(out, "endOffset", &n.end_offset);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_with_clause(out: &mut String, n: &WithClause) {
    out.push_str("{WITHCLAUSE");
    list_field(out, "ctes", &n.ctes);
    bool_field(out, "recursive", n.recursive);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_common_table_expr(out: &mut String, n: &CommonTableExpr) {
    out.push_str("{COMMONTABLEEXPR");
    str_field(out, "ctename", &n.ctename);
    list_field(out, "aliascolnames", &n.aliascolnames);
    int_field(out, "ctematerialized", n.ctematerialized as i64);
    node_field(out, "ctequery", &n.ctequery);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_into_clause(out: &mut String, n: &IntoClause) {
    out.push_str("{INTOCLAUSE");
    if let Some(rel) = &n.rel {
        out.push_str(" :rel ");
        write_range_var(out, rel);
    }
    list_field(out, "colNames", &n.col_names);
    str_field(out, "accessMethod", &n.access_method);
    list_field(out, "options", &n.options);
    int_field(out, "onCommit", n.on_commit as i64);
    str_field(out, "tableSpaceName", &n.table_space_name);
    bool_field(out, "skipData", n.skip_data);
    out.push('}');
}

fn write_on_conflict_clause(out: &mut String, n: &OnConflictClause) {
    out.push_str("{ONCONFLICTCLAUSE");
    int_field(out, "action", n.action as i64);
    if let Some(infer) = &n.infer {
        out.push_str(" :infer ");
        write_infer_clause(out, infer);
    }
    list_field(out, "targetList", &n.target_list);
    node_field(out, "whereClause", &n.where_clause);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_infer_clause(out: &mut String, n: &InferClause) {
    out.push_str("{INFERCLAUSE");
    list_field(out, "indexElems", &n.index_elems);
    node_field(out, "whereClause", &n.where_clause);
    str_field(out, "conname", &n.conname);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_locking_clause(out: &mut String, n: &LockingClause) {
    out.push_str("{LOCKINGCLAUSE");
    list_field(out, "lockedRels", &n.locked_rels);
    int_field(out, "strength", n.strength as i64);
    int_field(out, "waitPolicy", n.wait_policy as i64);
    out.push('}');
}

// ---------------------------------------------------------------------------
// definition support nodes

fn write_column_def(out: &mut String, n: &ColumnDef) {
    out.push_str("{COLUMNDEF");
    str_field(out, "colname", &n.colname);
    if let Some(tn) = &n.type_name {
        out.push_str(" :typeName ");
        write_type_name(out, tn);
    }
    out.push_str(" :compression ");
    quoted(out, &n.compression);
    int_field(out, "inhcount", n.inhcount as i64);
    bool_field(out, "is_local", n.is_local);
    bool_field(out, "is_not_null", n.is_not_null);
    bool_field(out, "is_from_type", n.is_from_type);
    char_field(out, "storage", n.storage);
    node_field(out, "raw_default", &n.raw_default);
    if n.identity != '\0' {
        char_field(out, "identity", n.identity);
    }
    if n.generated != '\0' {
        char_field(out, "generated", n.generated);
    }
    if let Some(coll) = &n.coll_clause {
        out.push_str(" :collClause ");
        write_collate_clause(out, coll);
    }
    list_field(out, "constraints", &n.constraints);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_constraint(out: &mut String, n: &Constraint) {
    out.push_str("{CONSTRAINT");
    int_field(out, "contype", n.contype as i64);
    str_field(out, "conname", &n.conname);
    bool_field(out, "deferrable", n.deferrable);
    bool_field(out, "initdeferred", n.initdeferred);
    int_field(out, "location", n.location as i64);
    bool_field(out, "is_no_inherit", n.is_no_inherit);
    node_field(out, "raw_expr", &n.raw_expr);
    if n.generated_when != '\0' {
        char_field(out, "generated_when", n.generated_when);
    }
    if n.nulls_not_distinct {
        out.push_str(" :nulls_not_distinct true");
    }
    list_field(out, "keys", &n.keys);
    list_field(out, "including", &n.including);
    list_field(out, "options", &n.options);
    str_field(out, "indexname", &n.indexname);
    str_field(out, "indexspace", &n.indexspace);
    str_field(out, "access_method", &n.access_method);
    node_field(out, "where_clause", &n.where_clause);
    if let Some(pktable) = &n.pktable {
        out.push_str(" :pktable ");
        write_range_var(out, pktable);
        list_field(out, "fk_attrs", &n.fk_attrs);
        list_field(out, "pk_attrs", &n.pk_attrs);
        char_field(out, "fk_matchtype", n.fk_matchtype);
        char_field(out, "fk_upd_action", n.fk_upd_action);
        char_field(out, "fk_del_action", n.fk_del_action);
        list_field(out, "fk_del_set_cols", &n.fk_del_set_cols);
    }
    bool_field(out, "skip_validation", n.skip_validation);
    bool_field(out, "initially_valid", n.initially_valid);
    out.push('}');
}

fn write_def_elem(out: &mut String, n: &DefElem) {
    out.push_str("{DEFELEM");
    str_field(out, "defnamespace", &n.defnamespace);
    str_field(out, "defname", &n.defname);
    node_field(out, "arg", &n.arg);
    int_field(out, "defaction", n.defaction as i64);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_index_elem(out: &mut String, n: &IndexElem) {
    out.push_str("{INDEXELEM");
    str_field(out, "name", &n.name);
    node_field(out, "expr", &n.expr);
    str_field(out, "indexcolname", &n.indexcolname);
    list_field(out, "collation", &n.collation);
    list_field(out, "opclass", &n.opclass);
    list_field(out, "opclassopts", &n.opclassopts);
    int_field(out, "ordering", n.ordering as i64);
    int_field(out, "nulls_ordering", n.nulls_ordering as i64);
    out.push('}');
}

fn write_table_like_clause(out: &mut String, n: &TableLikeClause) {
    out.push_str("{TABLELIKECLAUSE");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    int_field(out, "options", n.options as i64);
    out.push('}');
}

fn write_partition_spec(out: &mut String, n: &PartitionSpec) {
    out.push_str("{PARTITIONSPEC");
    str_field(out, "strategy", &n.strategy);
    list_field(out, "partParams", &n.part_params);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_partition_elem(out: &mut String, n: &PartitionElem) {
    out.push_str("{PARTITIONELEM");
    str_field(out, "name", &n.name);
    node_field(out, "expr", &n.expr);
    list_field(out, "collation", &n.collation);
    list_field(out, "opclass", &n.opclass);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_alias(out: &mut String, n: &Alias) {
    out.push_str("{ALIAS");
    str_field(out, "aliasname", &n.aliasname);
    list_field(out, "colnames", &n.colnames);
    out.push('}');
}

fn write_role_spec(out: &mut String, n: &RoleSpec) {
    out.push_str("{ROLESPEC");
    int_field(out, "roletype", n.roletype as i64);
    str_field(out, "rolename", &n.rolename);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_function_parameter(out: &mut String, n: &FunctionParameter) {
    out.push_str("{FUNCTIONPARAMETER");
    str_field(out, "name", &n.name);
    if let Some(tn) = &n.arg_type {
        out.push_str(" :argType ");
        write_type_name(out, tn);
    }
    char_field(out, "mode", (n.mode as u8) as char);
    node_field(out, "defexpr", &n.defexpr);
    out.push('}');
}

fn write_access_priv(out: &mut String, n: &AccessPriv) {
    out.push_str("{ACCESSPRIV");
    str_field(out, "priv_name", &n.priv_name);
    list_field(out, "cols", &n.cols);
    out.push('}');
}

fn write_object_with_args(out: &mut String, n: &ObjectWithArgs) {
    out.push_str("{OBJECTWITHARGS");
    list_field(out, "objname", &n.objname);
    list_field(out, "objargs", &n.objargs);
    bool_field(out, "args_unspecified", n.args_unspecified);
    out.push('}');
}

fn write_trigger_transition(out: &mut String, n: &TriggerTransition) {
    out.push_str("{TRIGGERTRANSITION");
    str_field(out, "name", &n.name);
    bool_field(out, "isNew", n.is_new);
    bool_field(out, "isTable", n.is_table);
    out.push('}');
}

fn write_vacuum_relation(out: &mut String, n: &VacuumRelation) {
    out.push_str("{VACUUMRELATION");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    list_field(out, "va_cols", &n.va_cols);
    out.push('}');
}

// ---------------------------------------------------------------------------
// administrative statements

fn write_variable_set_stmt(out: &mut String, n: &VariableSetStmt) {
    out.push_str("{VARIABLESETSTMT");
    int_field(out, "kind", n.kind as i64);
    str_field(out, "name", &n.name);
    list_field(out, "args", &n.args);
    bool_field(out, "is_local", n.is_local);
    out.push('}');
}

fn write_variable_show_stmt(out: &mut String, n: &VariableShowStmt) {
    out.push_str("{VARIABLESHOWSTMT");
    str_field(out, "name", &n.name);
    out.push('}');
}

fn write_explain_stmt(out: &mut String, n: &ExplainStmt) {
    out.push_str("{EXPLAINSTMT");
    node_field(out, "query", &n.query);
    list_field(out, "options", &n.options);
    out.push('}');
}

fn write_copy_stmt(out: &mut String, n: &CopyStmt) {
    out.push_str("{COPYSTMT");
    if let Some(rel) = &n.relation {
        out.push_str(" :relation ");
        write_range_var(out, rel);
    }
    node_field(out, "query", &n.query);
    list_field(out, "attlist", &n.attlist);
    bool_field(out, "is_from", n.is_from);
    bool_field(out, "is_program", n.is_program);
    str_field(out, "filename", &n.filename);
    list_field(out, "options", &n.options);
    node_field(out, "whereClause", &n.where_clause);
    out.push('}');
}

fn write_grant_stmt(out: &mut String, n: &GrantStmt) {
    out.push_str("{GRANTSTMT");
    bool_field(out, "is_grant", n.is_grant);
    int_field(out, "targtype", n.targtype as i64);
    int_field(out, "objtype", n.objtype as i64);
    list_field(out, "objects", &n.objects);
    list_field(out, "privileges", &n.privileges);
    list_field(out, "grantees", &n.grantees);
    bool_field(out, "grant_option", n.grant_option);
    if let Some(grantor) = &n.grantor {
        out.push_str(" :grantor ");
        write_role_spec(out, grantor);
    }
    int_field(out, "behavior", n.behavior as i64);
    out.push('}');
}

fn write_grant_role_stmt(out: &mut String, n: &GrantRoleStmt) {
    out.push_str("{GRANTROLESTMT");
    list_field(out, "granted_roles", &n.granted_roles);
    list_field(out, "grantee_roles", &n.grantee_roles);
    bool_field(out, "is_grant", n.is_grant);
    list_field(out, "opt", &n.opt);
    if let Some(grantor) = &n.grantor {
        out.push_str(" :grantor ");
        write_role_spec(out, grantor);
    }
    int_field(out, "behavior", n.behavior as i64);
    out.push('}');
}

fn write_lock_stmt(out: &mut String, n: &LockStmt) {
    out.push_str("{LOCKSTMT");
    list_field(out, "relations", &n.relations);
    int_field(out, "mode", n.mode as i64);
    bool_field(out, "nowait", n.nowait);
    out.push('}');
}

fn write_vacuum_stmt(out: &mut String, n: &VacuumStmt) {
    out.push_str("{VACUUMSTMT");
    list_field(out, "options", &n.options);
    list_field(out, "rels", &n.rels);
    bool_field(out, "is_vacuumcmd", n.is_vacuumcmd);
    out.push('}');
}

// ---------------------------------------------------------------------------
// other statements

fn write_do_stmt(out: &mut String, n: &DoStmt) {
    out.push_str("{DOSTMT");
    list_field(out, "args", &n.args);
    out.push('}');
}

fn write_call_stmt(out: &mut String, n: &CallStmt) {
    out.push_str("{CALLSTMT");
    if let Some(funccall) = &n.funccall {
        out.push_str(" :funccall ");
        write_func_call(out, funccall);
    }
    out.push('}');
}

fn write_notify_stmt(out: &mut String, n: &NotifyStmt) {
    out.push_str("{NOTIFYSTMT");
    str_field(out, "conditionname", &n.conditionname);
    str_field(out, "payload", &n.payload);
    out.push('}');
}

fn write_listen_stmt(out: &mut String, n: &ListenStmt) {
    out.push_str("{LISTENSTMT");
    str_field(out, "conditionname", &n.conditionname);
    out.push('}');
}

fn write_unlisten_stmt(out: &mut String, n: &UnlistenStmt) {
    out.push_str("{UNLISTENSTMT");
    str_field(out, "conditionname", &n.conditionname);
    out.push('}');
}

fn write_discard_stmt(out: &mut String, n: &DiscardStmt) {
    out.push_str("{DISCARDSTMT");
    int_field(out, "target", n.target as i64);
    out.push('}');
}

fn write_prepare_stmt(out: &mut String, n: &PrepareStmt) {
    out.push_str("{PREPARESTMT");
    str_field(out, "name", &n.name);
    list_field(out, "argtypes", &n.argtypes);
    node_field(out, "query", &n.query);
    out.push('}');
}

fn write_execute_stmt(out: &mut String, n: &ExecuteStmt) {
    out.push_str("{EXECUTESTMT");
    str_field(out, "name", &n.name);
    list_field(out, "params", &n.params);
    out.push('}');
}

fn write_deallocate_stmt(out: &mut String, n: &DeallocateStmt) {
    out.push_str("{DEALLOCATESTMT");
    str_field(out, "name", &n.name);
    bool_field(out, "isall", n.isall);
    int_field(out, "location", n.location as i64);
    out.push('}');
}

fn write_declare_cursor_stmt(out: &mut String, n: &DeclareCursorStmt) {
    out.push_str("{DECLARECURSORSTMT");
    str_field(out, "portalname", &n.portalname);
    int_field(out, "options", n.options as i64);
    node_field(out, "query", &n.query);
    out.push('}');
}

fn write_close_portal_stmt(out: &mut String, n: &ClosePortalStmt) {
    out.push_str("{CLOSEPORTALSTMT");
    str_field(out, "portalname", &n.portalname);
    out.push('}');
}

fn write_fetch_stmt(out: &mut String, n: &FetchStmt) {
    out.push_str("{FETCHSTMT");
    int_field(out, "direction", n.direction as i64);
    int_field(out, "howMany", n.how_many);
    str_field(out, "portalname", &n.portalname);
    bool_field(out, "ismove", n.ismove);
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_and_string_values() {
        assert_eq!(node_to_string(&Node::Integer(Integer { ival: 42 })), "42");
        assert_eq!(
            node_to_string(&Node::String(StringValue { sval: "hello".into() })),
            "\"hello\""
        );
        assert_eq!(
            node_to_string(&Node::String(StringValue { sval: "a\"b\\c".into() })),
            "\"a\\\"b\\\\c\""
        );
    }

    #[test]
    fn lists_and_nil() {
        let list = Node::List(vec![
            Node::Integer(Integer { ival: 1 }),
            Node::Integer(Integer { ival: 2 }),
            Node::Integer(Integer { ival: 3 }),
        ]);
        assert_eq!(node_to_string(&list), "(1 2 3)");
        assert_eq!(node_to_string(&Node::Null), "<>");
        assert_eq!(node_to_string(&Node::List(vec![Node::Null])), "(<>)");
    }

    #[test]
    fn select_stmt_fields() {
        let stmt = SelectStmt {
            target_list: Some(vec![Node::ResTarget(Box::new(ResTarget {
                val: Some(Node::AConst(Box::new(AConst {
                    val: Some(Node::Integer(Integer { ival: 1 })),
                    ..Default::default()
                }))),
                ..Default::default()
            }))]),
            ..Default::default()
        };
        let dump = node_to_string(&Node::SelectStmt(Box::new(stmt)));
        assert!(dump.starts_with("{SELECTSTMT"));
        assert!(dump.contains(":targetList"));
        assert!(dump.contains("{A_CONST :val 1"));
    }

    #[test]
    fn range_var_fields() {
        let rv = RangeVar { relname: "users".into(), location: 14, ..Default::default() };
        let dump = node_to_string(&Node::RangeVar(Box::new(rv)));
        assert_eq!(
            dump,
            "{RANGEVAR :relname \"users\" :inh true :relpersistence p :location 14}"
        );
    }

    #[test]
    fn serialization_is_idempotent() {
        let stmt = Node::SelectStmt(Box::new(SelectStmt {
            from_clause: Some(vec![Node::RangeVar(Box::new(RangeVar {
                relname: "t".into(),
                ..Default::default()
            }))]),
            ..Default::default()
        }));
        assert_eq!(node_to_string(&stmt), node_to_string(&stmt));
    }
}
