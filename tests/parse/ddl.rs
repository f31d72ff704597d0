//! DDL statements: CREATE/ALTER/DROP and friends.

use super::*;

#[test]
fn it_parses_create_table() {
    let stmt = parse_stmt(
        "CREATE TABLE users (id integer PRIMARY KEY, name varchar(255) NOT NULL, email text)",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    assert_eq!(create.relation.as_ref().unwrap().relname, "users");
    assert!(!create.if_not_exists);
    let elts = create.table_elts.as_ref().unwrap();
    assert_eq!(elts.len(), 3);

    let id = cast!(&elts[0], Node::ColumnDef);
    assert_eq!(id.colname, "id");
    let id_type = id.type_name.as_ref().unwrap();
    assert_eq!(
        cast!(&id_type.names.as_ref().unwrap()[1], Node::String).sval,
        "int4"
    );
    let id_cons = id.constraints.as_ref().unwrap();
    assert_eq!(cast!(&id_cons[0], Node::Constraint).contype, ConstrType::Primary);

    let name = cast!(&elts[1], Node::ColumnDef);
    let name_type = name.type_name.as_ref().unwrap();
    assert_eq!(
        cast!(&name_type.names.as_ref().unwrap()[1], Node::String).sval,
        "varchar"
    );
    assert_eq!(int_const(&name_type.typmods.as_ref().unwrap()[0]), 255);
    let name_cons = name.constraints.as_ref().unwrap();
    assert_eq!(cast!(&name_cons[0], Node::Constraint).contype, ConstrType::NotNull);
}

#[test]
fn it_parses_temp_and_unlogged_tables() {
    let stmt = parse_stmt("CREATE TEMP TABLE scratch (a int)");
    let create = cast!(&stmt, Node::CreateStmt);
    assert_eq!(create.relation.as_ref().unwrap().relpersistence, 't');

    let stmt = parse_stmt("CREATE UNLOGGED TABLE fast (a int)");
    let create = cast!(&stmt, Node::CreateStmt);
    assert_eq!(create.relation.as_ref().unwrap().relpersistence, 'u');
}

#[test]
fn it_parses_if_not_exists_and_options() {
    let stmt = parse_stmt(
        "CREATE TABLE IF NOT EXISTS t (a int) WITH (fillfactor = 70) ON COMMIT DROP TABLESPACE fast",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    assert!(create.if_not_exists);
    let options = create.options.as_ref().unwrap();
    let opt = cast!(&options[0], Node::DefElem);
    assert_eq!(opt.defname, "fillfactor");
    assert_eq!(cast!(opt.arg.as_ref().unwrap(), Node::Integer).ival, 70);
    assert_eq!(create.oncommit, OnCommitAction::Drop);
    assert_eq!(create.tablespacename, "fast");
}

#[test]
fn it_parses_table_constraints() {
    let stmt = parse_stmt(
        "CREATE TABLE t (a int, b int, \
         CONSTRAINT t_pk PRIMARY KEY (a), \
         UNIQUE NULLS NOT DISTINCT (b), \
         CHECK (a > 0), \
         FOREIGN KEY (b) REFERENCES other (id) MATCH FULL ON DELETE SET NULL ON UPDATE CASCADE)",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    let elts = create.table_elts.as_ref().unwrap();

    let pk = cast!(&elts[2], Node::Constraint);
    assert_eq!(pk.contype, ConstrType::Primary);
    assert_eq!(pk.conname, "t_pk");
    assert_eq!(pk.keys.as_ref().unwrap().len(), 1);

    let unique = cast!(&elts[3], Node::Constraint);
    assert_eq!(unique.contype, ConstrType::Unique);
    assert!(unique.nulls_not_distinct);

    let check = cast!(&elts[4], Node::Constraint);
    assert_eq!(check.contype, ConstrType::Check);
    assert!(check.raw_expr.is_some());

    let fk = cast!(&elts[5], Node::Constraint);
    assert_eq!(fk.contype, ConstrType::Foreign);
    assert_eq!(fk.pktable.as_ref().unwrap().relname, "other");
    assert_eq!(fk.fk_attrs.as_ref().unwrap().len(), 1);
    assert_eq!(fk.pk_attrs.as_ref().unwrap().len(), 1);
    assert_eq!(fk.fk_matchtype, 'f');
    assert_eq!(fk.fk_del_action, 'n');
    assert_eq!(fk.fk_upd_action, 'c');
}

#[test]
fn it_parses_constraint_attributes() {
    let stmt = parse_stmt(
        "CREATE TABLE t (a int, FOREIGN KEY (a) REFERENCES o (id) DEFERRABLE INITIALLY DEFERRED NOT VALID)",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    let fk = cast!(&create.table_elts.as_ref().unwrap()[1], Node::Constraint);
    assert!(fk.deferrable);
    assert!(fk.initdeferred);
    assert!(fk.skip_validation);
    assert!(!fk.initially_valid);
}

#[test]
fn it_parses_column_defaults_and_generated() {
    let stmt = parse_stmt(
        "CREATE TABLE t (a int DEFAULT 0, b int GENERATED ALWAYS AS (a * 2) STORED, \
         c int GENERATED BY DEFAULT AS IDENTITY (START WITH 10))",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    let elts = create.table_elts.as_ref().unwrap();

    let a = cast!(&elts[0], Node::ColumnDef);
    let default = cast!(&a.constraints.as_ref().unwrap()[0], Node::Constraint);
    assert_eq!(default.contype, ConstrType::Default);
    assert_eq!(int_const(default.raw_expr.as_ref().unwrap()), 0);

    let b = cast!(&elts[1], Node::ColumnDef);
    let generated = cast!(&b.constraints.as_ref().unwrap()[0], Node::Constraint);
    assert_eq!(generated.contype, ConstrType::Generated);
    assert_eq!(generated.generated_when, 'a');

    let c = cast!(&elts[2], Node::ColumnDef);
    let identity = cast!(&c.constraints.as_ref().unwrap()[0], Node::Constraint);
    assert_eq!(identity.contype, ConstrType::Identity);
    assert_eq!(identity.generated_when, 'd');
    let start = cast!(&identity.options.as_ref().unwrap()[0], Node::DefElem);
    assert_eq!(start.defname, "start");
}

#[test]
fn it_parses_table_like() {
    let stmt = parse_stmt("CREATE TABLE copy (LIKE original INCLUDING ALL EXCLUDING INDEXES)");
    let create = cast!(&stmt, Node::CreateStmt);
    let like = cast!(&create.table_elts.as_ref().unwrap()[0], Node::TableLikeClause);
    assert_eq!(like.relation.as_ref().unwrap().relname, "original");
    assert_eq!(like.options & CREATE_TABLE_LIKE_INDEXES, 0);
    assert_ne!(like.options & CREATE_TABLE_LIKE_DEFAULTS, 0);
}

#[test]
fn it_parses_inherits_and_partition_by() {
    let stmt = parse_stmt(
        "CREATE TABLE child (extra text) INHERITS (parent) PARTITION BY RANGE (created_at)",
    );
    let create = cast!(&stmt, Node::CreateStmt);
    assert_eq!(create.inh_relations.as_ref().unwrap().len(), 1);
    let spec = create.partspec.as_ref().unwrap();
    assert_eq!(spec.strategy, "range");
    let elem = cast!(&spec.part_params.as_ref().unwrap()[0], Node::PartitionElem);
    assert_eq!(elem.name, "created_at");
}

#[test]
fn it_parses_create_table_as() {
    let stmt = parse_stmt("CREATE TABLE bak (a, b) AS SELECT x, y FROM t WITH NO DATA");
    let ctas = cast!(&stmt, Node::CreateTableAsStmt);
    assert_eq!(ctas.objtype, ObjectType::Table);
    assert!(!ctas.is_select_into);
    let into = ctas.into.as_ref().unwrap();
    assert_eq!(into.rel.as_ref().unwrap().relname, "bak");
    assert_eq!(into.col_names.as_ref().unwrap().len(), 2);
    assert!(into.skip_data);
}

#[test]
fn it_parses_create_index() {
    let stmt = parse_stmt(
        "CREATE UNIQUE INDEX CONCURRENTLY idx ON t USING btree (a DESC NULLS LAST, lower(b), (c + 1)) \
         INCLUDE (d) WITH (fillfactor = 90) WHERE c > 0",
    );
    let index = cast!(&stmt, Node::IndexStmt);
    assert!(index.unique);
    assert!(index.concurrent);
    assert_eq!(index.idxname, "idx");
    assert_eq!(index.access_method, "btree");

    let params = index.index_params.as_ref().unwrap();
    assert_eq!(params.len(), 3);
    let first = cast!(&params[0], Node::IndexElem);
    assert_eq!(first.name, "a");
    assert_eq!(first.ordering, SortByDir::Desc);
    assert_eq!(first.nulls_ordering, SortByNulls::Last);
    let second = cast!(&params[1], Node::IndexElem);
    assert!(second.expr.is_some());
    assert!(second.name.is_empty());
    let third = cast!(&params[2], Node::IndexElem);
    assert!(matches!(third.expr.as_ref().unwrap(), Node::AExpr(_)));

    assert_eq!(index.index_including_params.as_ref().unwrap().len(), 1);
    assert!(index.where_clause.is_some());
}

#[test]
fn it_parses_index_opclass() {
    let stmt = parse_stmt("CREATE INDEX ON t (a text_pattern_ops)");
    let index = cast!(&stmt, Node::IndexStmt);
    assert!(index.idxname.is_empty());
    let elem = cast!(&index.index_params.as_ref().unwrap()[0], Node::IndexElem);
    assert_eq!(
        cast!(&elem.opclass.as_ref().unwrap()[0], Node::String).sval,
        "text_pattern_ops"
    );
}

#[test]
fn it_parses_create_view() {
    let stmt = parse_stmt(
        "CREATE OR REPLACE VIEW v (a, b) AS SELECT 1, 2 WITH CASCADED CHECK OPTION",
    );
    let view = cast!(&stmt, Node::ViewStmt);
    assert!(view.replace);
    assert_eq!(view.view.as_ref().unwrap().relname, "v");
    assert_eq!(view.aliases.as_ref().unwrap().len(), 2);
    assert_eq!(view.with_check_option, ViewCheckOption::CascadedCheckOption);
    assert!(matches!(view.query.as_ref().unwrap(), Node::SelectStmt(_)));
}

#[test]
fn it_parses_create_materialized_view() {
    let stmt = parse_stmt("CREATE MATERIALIZED VIEW mv USING heap AS SELECT * FROM t WITH NO DATA");
    let ctas = cast!(&stmt, Node::CreateTableAsStmt);
    assert_eq!(ctas.objtype, ObjectType::Matview);
    let into = ctas.into.as_ref().unwrap();
    assert_eq!(into.access_method, "heap");
    assert!(into.skip_data);
}

#[test]
fn it_parses_refresh_materialized_view() {
    let stmt = parse_stmt("REFRESH MATERIALIZED VIEW CONCURRENTLY mv WITH DATA");
    let refresh = cast!(&stmt, Node::RefreshMatViewStmt);
    assert!(refresh.concurrent);
    assert!(!refresh.skip_data);
    assert_eq!(refresh.relation.as_ref().unwrap().relname, "mv");
}

#[test]
fn it_parses_create_function() {
    let stmt = parse_stmt(
        "CREATE OR REPLACE FUNCTION add(a integer, b integer DEFAULT 0) RETURNS integer \
         AS 'select a + b' LANGUAGE sql IMMUTABLE STRICT PARALLEL SAFE",
    );
    let func = cast!(&stmt, Node::CreateFunctionStmt);
    assert!(func.replace);
    assert!(!func.is_procedure);
    let params = func.parameters.as_ref().unwrap();
    assert_eq!(params.len(), 2);
    let a = cast!(&params[0], Node::FunctionParameter);
    assert_eq!(a.name, "a");
    assert_eq!(a.mode, FunctionParameterMode::Default);
    let b = cast!(&params[1], Node::FunctionParameter);
    assert!(b.defexpr.is_some());
    let ret = func.return_type.as_ref().unwrap();
    assert_eq!(cast!(&ret.names.as_ref().unwrap()[1], Node::String).sval, "int4");

    let options = func.options.as_ref().unwrap();
    let names: Vec<&str> = options
        .iter()
        .map(|o| cast!(o, Node::DefElem).defname.as_str())
        .collect();
    assert_eq!(names, vec!["as", "language", "volatility", "strict", "parallel"]);
}

#[test]
fn it_parses_function_returns_table() {
    let stmt = parse_stmt(
        "CREATE FUNCTION pairs() RETURNS TABLE (a int, b text) LANGUAGE sql AS 'select 1, ''x'''",
    );
    let func = cast!(&stmt, Node::CreateFunctionStmt);
    let ret = func.return_type.as_ref().unwrap();
    assert!(ret.setof);
    assert_eq!(cast!(&ret.names.as_ref().unwrap()[1], Node::String).sval, "record");
    let params = func.parameters.as_ref().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(
        cast!(&params[0], Node::FunctionParameter).mode,
        FunctionParameterMode::Table
    );
}

#[test]
fn it_parses_create_procedure() {
    let stmt = parse_stmt("CREATE PROCEDURE ping() LANGUAGE sql AS 'select 1'");
    let func = cast!(&stmt, Node::CreateFunctionStmt);
    assert!(func.is_procedure);
    assert!(func.return_type.is_none());
}

#[test]
fn it_parses_alter_function() {
    let stmt = parse_stmt("ALTER FUNCTION add(integer, integer) STABLE");
    let alter = cast!(&stmt, Node::AlterFunctionStmt);
    assert_eq!(alter.objtype, ObjectType::Function);
    let func = alter.func.as_ref().unwrap();
    assert_eq!(func.objargs.as_ref().unwrap().len(), 2);
    assert!(!func.args_unspecified);
}

#[test]
fn it_parses_create_sequence() {
    let stmt = parse_stmt(
        "CREATE SEQUENCE seq INCREMENT BY 2 MINVALUE 1 MAXVALUE 100 START WITH 10 CACHE 5 NO CYCLE OWNED BY t.id",
    );
    let seq = cast!(&stmt, Node::CreateSeqStmt);
    let options = seq.options.as_ref().unwrap();
    let names: Vec<&str> = options
        .iter()
        .map(|o| cast!(o, Node::DefElem).defname.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["increment", "minvalue", "maxvalue", "start", "cache", "cycle", "owned_by"]
    );
    let cycle = cast!(&options[5], Node::DefElem);
    assert_eq!(cast!(cycle.arg.as_ref().unwrap(), Node::Boolean).boolval, false);
}

#[test]
fn it_parses_alter_sequence() {
    let stmt = parse_stmt("ALTER SEQUENCE IF EXISTS seq RESTART WITH 100");
    let alter = cast!(&stmt, Node::AlterSeqStmt);
    assert!(alter.missing_ok);
    let restart = cast!(&alter.options.as_ref().unwrap()[0], Node::DefElem);
    assert_eq!(restart.defname, "restart");
    assert_eq!(cast!(restart.arg.as_ref().unwrap(), Node::Integer).ival, 100);
}

#[test]
fn it_parses_alter_table_commands() {
    let stmt = parse_stmt(
        "ALTER TABLE t ADD COLUMN IF NOT EXISTS c text, \
         DROP COLUMN old CASCADE, \
         ALTER COLUMN a TYPE bigint USING a::bigint, \
         ALTER COLUMN b SET DEFAULT 0, \
         ALTER COLUMN b DROP NOT NULL, \
         ADD CONSTRAINT chk CHECK (a > 0), \
         VALIDATE CONSTRAINT chk, \
         OWNER TO admin",
    );
    let alter = cast!(&stmt, Node::AlterTableStmt);
    assert_eq!(alter.objtype, ObjectType::Table);
    let cmds = alter.cmds.as_ref().unwrap();
    assert_eq!(cmds.len(), 8);

    let add = cast!(&cmds[0], Node::AlterTableCmd);
    assert_eq!(add.subtype, AlterTableType::AddColumn);
    assert!(add.missing_ok);

    let drop = cast!(&cmds[1], Node::AlterTableCmd);
    assert_eq!(drop.subtype, AlterTableType::DropColumn);
    assert_eq!(drop.name, "old");
    assert_eq!(drop.behavior, DropBehavior::Cascade);

    let retype = cast!(&cmds[2], Node::AlterTableCmd);
    assert_eq!(retype.subtype, AlterTableType::AlterColumnType);
    let coldef = cast!(retype.def.as_ref().unwrap(), Node::ColumnDef);
    assert!(coldef.raw_default.is_some());

    let default = cast!(&cmds[3], Node::AlterTableCmd);
    assert_eq!(default.subtype, AlterTableType::ColumnDefault);
    assert!(default.def.is_some());

    let drop_not_null = cast!(&cmds[4], Node::AlterTableCmd);
    assert_eq!(drop_not_null.subtype, AlterTableType::DropNotNull);

    let add_constraint = cast!(&cmds[5], Node::AlterTableCmd);
    assert_eq!(add_constraint.subtype, AlterTableType::AddConstraint);

    let validate = cast!(&cmds[6], Node::AlterTableCmd);
    assert_eq!(validate.subtype, AlterTableType::ValidateConstraint);
    assert_eq!(validate.name, "chk");

    let owner = cast!(&cmds[7], Node::AlterTableCmd);
    assert_eq!(owner.subtype, AlterTableType::ChangeOwner);
    assert_eq!(owner.newowner.as_ref().unwrap().rolename, "admin");
}

#[test]
fn it_parses_alter_table_rename() {
    let stmt = parse_stmt("ALTER TABLE t RENAME COLUMN a TO b");
    let rename = cast!(&stmt, Node::RenameStmt);
    assert_eq!(rename.rename_type, ObjectType::Column);
    assert_eq!(rename.relation_type, ObjectType::Table);
    assert_eq!(rename.subname, "a");
    assert_eq!(rename.newname, "b");

    let stmt = parse_stmt("ALTER TABLE IF EXISTS t RENAME TO t2");
    let rename = cast!(&stmt, Node::RenameStmt);
    assert_eq!(rename.rename_type, ObjectType::Table);
    assert!(rename.missing_ok);
    assert_eq!(rename.newname, "t2");
}

#[test]
fn it_parses_drop_statements() {
    let stmt = parse_stmt("DROP TABLE IF EXISTS a, b.c CASCADE");
    let drop = cast!(&stmt, Node::DropStmt);
    assert_eq!(drop.remove_type, ObjectType::Table);
    assert!(drop.missing_ok);
    assert_eq!(drop.behavior, DropBehavior::Cascade);
    let objects = drop.objects.as_ref().unwrap();
    assert_eq!(objects.len(), 2);
    let second = cast!(&objects[1], Node::List);
    assert_eq!(second.len(), 2);

    let stmt = parse_stmt("DROP INDEX CONCURRENTLY idx");
    let drop = cast!(&stmt, Node::DropStmt);
    assert_eq!(drop.remove_type, ObjectType::Index);
    assert!(drop.concurrent);

    let stmt = parse_stmt("DROP FUNCTION add(integer, integer)");
    let drop = cast!(&stmt, Node::DropStmt);
    assert_eq!(drop.remove_type, ObjectType::Function);
    assert!(matches!(drop.objects.as_ref().unwrap()[0], Node::ObjectWithArgs(_)));

    let stmt = parse_stmt("DROP TYPE mood RESTRICT");
    let drop = cast!(&stmt, Node::DropStmt);
    assert_eq!(drop.remove_type, ObjectType::Type);
    assert!(matches!(drop.objects.as_ref().unwrap()[0], Node::TypeName(_)));

    let stmt = parse_stmt("DROP TRIGGER trg ON t");
    let drop = cast!(&stmt, Node::DropStmt);
    assert_eq!(drop.remove_type, ObjectType::Trigger);
    let object = cast!(&drop.objects.as_ref().unwrap()[0], Node::List);
    assert_eq!(cast!(&object[1], Node::String).sval, "trg");
}

#[test]
fn it_parses_drop_role_and_database() {
    let stmt = parse_stmt("DROP ROLE IF EXISTS alice, bob");
    let drop = cast!(&stmt, Node::DropRoleStmt);
    assert!(drop.missing_ok);
    assert_eq!(drop.roles.as_ref().unwrap().len(), 2);

    let stmt = parse_stmt("DROP DATABASE appdb WITH (FORCE)");
    let drop = cast!(&stmt, Node::DropdbStmt);
    assert_eq!(drop.dbname, "appdb");
    assert!(drop.options.is_some());
}

#[test]
fn it_parses_truncate() {
    let stmt = parse_stmt("TRUNCATE TABLE a, b RESTART IDENTITY CASCADE");
    let truncate = cast!(&stmt, Node::TruncateStmt);
    assert_eq!(truncate.relations.as_ref().unwrap().len(), 2);
    assert!(truncate.restart_seqs);
    assert_eq!(truncate.behavior, DropBehavior::Cascade);
}

#[test]
fn it_parses_comment_on() {
    let stmt = parse_stmt("COMMENT ON TABLE users IS 'people'");
    let comment = cast!(&stmt, Node::CommentStmt);
    assert_eq!(comment.objtype, ObjectType::Table);
    assert_eq!(comment.comment, "people");

    let stmt = parse_stmt("COMMENT ON COLUMN users.name IS NULL");
    let comment = cast!(&stmt, Node::CommentStmt);
    assert_eq!(comment.objtype, ObjectType::Column);
    assert!(comment.comment.is_empty());
    let object = cast!(comment.object.as_ref().unwrap(), Node::List);
    assert_eq!(object.len(), 2);
}

#[test]
fn it_parses_create_schema() {
    let stmt = parse_stmt("CREATE SCHEMA IF NOT EXISTS app AUTHORIZATION owner_role");
    let schema = cast!(&stmt, Node::CreateSchemaStmt);
    assert!(schema.if_not_exists);
    assert_eq!(schema.schemaname, "app");
    assert_eq!(schema.authrole.as_ref().unwrap().rolename, "owner_role");
}

#[test]
fn it_parses_create_schema_with_elements() {
    let stmt = parse_stmt("CREATE SCHEMA app CREATE TABLE t (a int) CREATE VIEW v AS SELECT 1");
    let schema = cast!(&stmt, Node::CreateSchemaStmt);
    let elts = schema.schema_elts.as_ref().unwrap();
    assert_eq!(elts.len(), 2);
    assert!(matches!(elts[0], Node::CreateStmt(_)));
    assert!(matches!(elts[1], Node::ViewStmt(_)));
}

#[test]
fn it_parses_create_domain() {
    let stmt = parse_stmt("CREATE DOMAIN posint AS integer CHECK (VALUE > 0) NOT NULL");
    let domain = cast!(&stmt, Node::CreateDomainStmt);
    assert_eq!(
        cast!(&domain.domainname.as_ref().unwrap()[0], Node::String).sval,
        "posint"
    );
    let constraints = domain.constraints.as_ref().unwrap();
    assert_eq!(constraints.len(), 2);
    assert_eq!(cast!(&constraints[0], Node::Constraint).contype, ConstrType::Check);
    assert_eq!(cast!(&constraints[1], Node::Constraint).contype, ConstrType::NotNull);
}

#[test]
fn it_parses_create_trigger() {
    let stmt = parse_stmt(
        "CREATE TRIGGER audit AFTER INSERT OR UPDATE OF name ON users \
         REFERENCING NEW TABLE AS newrows FOR EACH ROW WHEN (true) \
         EXECUTE FUNCTION log_change('tag')",
    );
    let trig = cast!(&stmt, Node::CreateTrigStmt);
    assert_eq!(trig.trigname, "audit");
    assert_eq!(trig.timing, 0);
    assert_ne!(trig.events & TRIGGER_TYPE_INSERT, 0);
    assert_ne!(trig.events & TRIGGER_TYPE_UPDATE, 0);
    assert_eq!(trig.columns.as_ref().unwrap().len(), 1);
    assert!(trig.row);
    assert!(trig.when_clause.is_some());
    let transition = cast!(&trig.transition_rels.as_ref().unwrap()[0], Node::TriggerTransition);
    assert!(transition.is_new);
    assert!(transition.is_table);
    assert_eq!(trig.args.as_ref().unwrap().len(), 1);
}

#[test]
fn it_parses_create_rule() {
    let stmt = parse_stmt("CREATE RULE protect AS ON DELETE TO t DO INSTEAD NOTHING");
    let rule = cast!(&stmt, Node::RuleStmt);
    assert_eq!(rule.rulename, "protect");
    assert_eq!(rule.event, CmdType::Delete);
    assert!(rule.instead);
    assert!(rule.actions.is_none());
}

#[test]
fn it_parses_create_role() {
    let stmt = parse_stmt("CREATE ROLE app WITH LOGIN PASSWORD 'secret' CONNECTION LIMIT 10");
    let role = cast!(&stmt, Node::CreateRoleStmt);
    assert_eq!(role.stmt_type, RoleStmtType::Role);
    assert_eq!(role.role, "app");
    let options = role.options.as_ref().unwrap();
    let names: Vec<&str> = options
        .iter()
        .map(|o| cast!(o, Node::DefElem).defname.as_str())
        .collect();
    assert_eq!(names, vec!["login", "password", "connectionlimit"]);
}

#[test]
fn it_parses_create_user_as_role() {
    let stmt = parse_stmt("CREATE USER admin SUPERUSER");
    let role = cast!(&stmt, Node::CreateRoleStmt);
    assert_eq!(role.stmt_type, RoleStmtType::User);
    let superuser = cast!(&role.options.as_ref().unwrap()[0], Node::DefElem);
    assert_eq!(superuser.defname, "superuser");
}

#[test]
fn it_parses_create_database() {
    let stmt = parse_stmt("CREATE DATABASE appdb WITH OWNER = admin ENCODING 'UTF8'");
    let db = cast!(&stmt, Node::CreatedbStmt);
    assert_eq!(db.dbname, "appdb");
    let options = db.options.as_ref().unwrap();
    assert_eq!(cast!(&options[0], Node::DefElem).defname, "owner");
    assert_eq!(cast!(&options[1], Node::DefElem).defname, "encoding");
}

#[test]
fn it_parses_create_extension() {
    let stmt = parse_stmt("CREATE EXTENSION IF NOT EXISTS hstore WITH SCHEMA public CASCADE");
    let ext = cast!(&stmt, Node::CreateExtensionStmt);
    assert!(ext.if_not_exists);
    assert_eq!(ext.extname, "hstore");
    assert_eq!(ext.options.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_create_enum_and_composite_types() {
    let stmt = parse_stmt("CREATE TYPE mood AS ENUM ('sad', 'ok', 'happy')");
    let create_enum = cast!(&stmt, Node::CreateEnumStmt);
    assert_eq!(create_enum.vals.as_ref().unwrap().len(), 3);

    let stmt = parse_stmt("CREATE TYPE pair AS (x int, y int)");
    let composite = cast!(&stmt, Node::CompositeTypeStmt);
    assert_eq!(composite.typevar.as_ref().unwrap().relname, "pair");
    assert_eq!(composite.coldeflist.as_ref().unwrap().len(), 2);
}

#[test]
fn it_parses_alter_role() {
    let stmt = parse_stmt("ALTER ROLE app WITH NOLOGIN");
    let alter = cast!(&stmt, Node::AlterRoleStmt);
    assert_eq!(alter.role.as_ref().unwrap().rolename, "app");
    let opt = cast!(&alter.options.as_ref().unwrap()[0], Node::DefElem);
    assert_eq!(opt.defname, "login");
    assert_eq!(cast!(opt.arg.as_ref().unwrap(), Node::Boolean).boolval, false);
}
