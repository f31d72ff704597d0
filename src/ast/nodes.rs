//! Native Rust AST node types for PostgreSQL parse trees.
//!
//! These types mirror the raw parse tree structure PostgreSQL builds in
//! parsenodes.h/primnodes.h, using idiomatic Rust patterns: one flat `Node`
//! enum with boxed per-node structs instead of tag-prefixed C structs.
//!
//! Two conventions matter for dump compatibility:
//!
//! * List-valued fields are `Option<Vec<Node>>`, preserving PostgreSQL's
//!   distinction between "no list" (NIL) and "a list with zero elements".
//!   A NIL element *inside* a list (e.g. the marker produced by a plain
//!   `SELECT DISTINCT`) is represented by [`Node::Null`].
//! * Constant nodes store literals exactly as tokenized; floats keep their
//!   source spelling as a string.

use serde::{Deserialize, Serialize};

use crate::ast::enums::*;

/// Source location: byte offset into the query string, or -1 if unknown.
pub type ParseLoc = i32;

/// Top-level parse result containing all parsed statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// List of parsed statements
    pub stmts: Vec<RawStmt>,
}

/// A raw statement wrapper with source location information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStmt {
    /// The statement node
    pub stmt: Node,
    /// Byte offset in source where the statement starts
    pub stmt_location: ParseLoc,
    /// Length in bytes; 0 means "rest of string"
    pub stmt_len: ParseLoc,
}

/// The main AST node enum containing all possible node types.
///
/// This flat enum eliminates the need for downcasting: matching over it is
/// exhaustive and compiler-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // Primitive value types
    Integer(Integer),
    Float(Float),
    Boolean(Boolean),
    String(StringValue),
    BitString(BitString),
    /// A NIL list element or empty node
    Null,

    // List type
    List(Vec<Node>),

    // Statement types
    RawStmt(Box<RawStmt>),
    SelectStmt(Box<SelectStmt>),
    InsertStmt(Box<InsertStmt>),
    UpdateStmt(Box<UpdateStmt>),
    DeleteStmt(Box<DeleteStmt>),
    MergeStmt(Box<MergeStmt>),

    // DDL statements
    CreateStmt(Box<CreateStmt>),
    AlterTableStmt(Box<AlterTableStmt>),
    AlterTableCmd(Box<AlterTableCmd>),
    DropStmt(Box<DropStmt>),
    TruncateStmt(Box<TruncateStmt>),
    CommentStmt(Box<CommentStmt>),
    IndexStmt(Box<IndexStmt>),
    CreateSchemaStmt(Box<CreateSchemaStmt>),
    ViewStmt(Box<ViewStmt>),
    CreateFunctionStmt(Box<CreateFunctionStmt>),
    AlterFunctionStmt(Box<AlterFunctionStmt>),
    CreateSeqStmt(Box<CreateSeqStmt>),
    AlterSeqStmt(Box<AlterSeqStmt>),
    CreateDomainStmt(Box<CreateDomainStmt>),
    CreateTableAsStmt(Box<CreateTableAsStmt>),
    RefreshMatViewStmt(Box<RefreshMatViewStmt>),
    CreateTrigStmt(Box<CreateTrigStmt>),
    RuleStmt(Box<RuleStmt>),
    CreateRoleStmt(Box<CreateRoleStmt>),
    AlterRoleStmt(Box<AlterRoleStmt>),
    DropRoleStmt(Box<DropRoleStmt>),
    CreatedbStmt(Box<CreatedbStmt>),
    DropdbStmt(Box<DropdbStmt>),
    CreateExtensionStmt(Box<CreateExtensionStmt>),
    CreateEnumStmt(Box<CreateEnumStmt>),
    CompositeTypeStmt(Box<CompositeTypeStmt>),
    RenameStmt(Box<RenameStmt>),

    // Transaction statement
    TransactionStmt(Box<TransactionStmt>),

    // Expression types
    AExpr(Box<AExpr>),
    ColumnRef(Box<ColumnRef>),
    ParamRef(Box<ParamRef>),
    AConst(Box<AConst>),
    TypeCast(Box<TypeCast>),
    CollateClause(Box<CollateClause>),
    FuncCall(Box<FuncCall>),
    AStar(AStar),
    AIndices(Box<AIndices>),
    AIndirection(Box<AIndirection>),
    AArrayExpr(Box<AArrayExpr>),
    SubLink(Box<SubLink>),
    BoolExpr(Box<BoolExpr>),
    NullTest(Box<NullTest>),
    BooleanTest(Box<BooleanTest>),
    CaseExpr(Box<CaseExpr>),
    CaseWhen(Box<CaseWhen>),
    CoalesceExpr(Box<CoalesceExpr>),
    MinMaxExpr(Box<MinMaxExpr>),
    SqlValueFunction(Box<SqlValueFunction>),
    RowExpr(Box<RowExpr>),
    NamedArgExpr(Box<NamedArgExpr>),
    GroupingFunc(Box<GroupingFunc>),
    GroupingSet(Box<GroupingSet>),
    MultiAssignRef(Box<MultiAssignRef>),
    SetToDefault(Box<SetToDefault>),
    CurrentOfExpr(Box<CurrentOfExpr>),

    // Target/Result types
    ResTarget(Box<ResTarget>),

    // Table/Range types
    RangeVar(Box<RangeVar>),
    RangeSubselect(Box<RangeSubselect>),
    RangeFunction(Box<RangeFunction>),
    JoinExpr(Box<JoinExpr>),

    // Clause types
    SortBy(Box<SortBy>),
    WindowDef(Box<WindowDef>),
    WithClause(Box<WithClause>),
    CommonTableExpr(Box<CommonTableExpr>),
    IntoClause(Box<IntoClause>),
    OnConflictClause(Box<OnConflictClause>),
    InferClause(Box<InferClause>),
    LockingClause(Box<LockingClause>),
    MergeWhenClause(Box<MergeWhenClause>),

    // Type-related
    TypeName(Box<TypeName>),
    ColumnDef(Box<ColumnDef>),
    Constraint(Box<Constraint>),
    DefElem(Box<DefElem>),
    IndexElem(Box<IndexElem>),
    TableLikeClause(Box<TableLikeClause>),
    PartitionSpec(Box<PartitionSpec>),
    PartitionElem(Box<PartitionElem>),

    // Alias and role types
    Alias(Box<Alias>),
    RoleSpec(Box<RoleSpec>),

    // Other commonly used types
    FunctionParameter(Box<FunctionParameter>),
    AccessPriv(Box<AccessPriv>),
    ObjectWithArgs(Box<ObjectWithArgs>),
    TriggerTransition(Box<TriggerTransition>),
    VacuumRelation(Box<VacuumRelation>),

    // Administrative statements
    VariableSetStmt(Box<VariableSetStmt>),
    VariableShowStmt(Box<VariableShowStmt>),
    ExplainStmt(Box<ExplainStmt>),
    CopyStmt(Box<CopyStmt>),
    GrantStmt(Box<GrantStmt>),
    GrantRoleStmt(Box<GrantRoleStmt>),
    LockStmt(Box<LockStmt>),
    VacuumStmt(Box<VacuumStmt>),

    // Other statements
    DoStmt(Box<DoStmt>),
    CallStmt(Box<CallStmt>),
    NotifyStmt(Box<NotifyStmt>),
    ListenStmt(Box<ListenStmt>),
    UnlistenStmt(Box<UnlistenStmt>),
    CheckPointStmt(CheckPointStmt),
    DiscardStmt(Box<DiscardStmt>),
    PrepareStmt(Box<PrepareStmt>),
    ExecuteStmt(Box<ExecuteStmt>),
    DeallocateStmt(Box<DeallocateStmt>),
    DeclareCursorStmt(Box<DeclareCursorStmt>),
    ClosePortalStmt(Box<ClosePortalStmt>),
    FetchStmt(Box<FetchStmt>),
}

// ============================================================================
// Primitive value types
// ============================================================================

/// Integer value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Integer {
    pub ival: i64,
}

/// Float value (stored as string to preserve precision)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Float {
    pub fval: String,
}

/// Boolean value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boolean {
    pub boolval: bool,
}

/// String value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringValue {
    pub sval: String,
}

/// Bit string value; the first character carries the radix prefix
/// (`b` for binary, `x` for hex), as in PostgreSQL's own value node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitString {
    pub bsval: String,
}

/// A star (*) in a column reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AStar;

// ============================================================================
// Core statement types
// ============================================================================

/// SELECT statement, also used for VALUES lists and set-operation trees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectStmt {
    /// NIL, list of DISTINCT ON exprs, or a list holding a single
    /// Node::Null for plain SELECT DISTINCT
    pub distinct_clause: Option<Vec<Node>>,
    /// target for SELECT INTO
    pub into_clause: Option<Box<IntoClause>>,
    /// the target list (of ResTarget)
    pub target_list: Option<Vec<Node>>,
    pub from_clause: Option<Vec<Node>>,
    pub where_clause: Option<Node>,
    pub group_clause: Option<Vec<Node>>,
    /// GROUP BY DISTINCT?
    pub group_distinct: bool,
    pub having_clause: Option<Node>,
    /// WINDOW window_name AS (...), ...
    pub window_clause: Option<Vec<Node>>,

    /// untransformed list of expression lists, for VALUES
    pub values_lists: Option<Vec<Node>>,

    /// sort clause (a list of SortBy's)
    pub sort_clause: Option<Vec<Node>>,
    /// number of result tuples to skip
    pub limit_offset: Option<Node>,
    /// number of result tuples to return
    pub limit_count: Option<Node>,
    pub limit_option: LimitOption,
    /// FOR UPDATE (list of LockingClause's)
    pub locking_clause: Option<Vec<Node>>,
    pub with_clause: Option<Box<WithClause>>,

    /// type of set op, for upper-level SelectStmts
    pub op: SetOperation,
    /// ALL specified?
    pub all: bool,
    pub larg: Option<Box<SelectStmt>>,
    pub rarg: Option<Box<SelectStmt>>,
}

/// INSERT statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertStmt {
    pub relation: Option<Box<RangeVar>>,
    /// optional: names of the target columns
    pub cols: Option<Vec<Node>>,
    /// the source SELECT/VALUES, or None for DEFAULT VALUES
    pub select_stmt: Option<Node>,
    pub on_conflict_clause: Option<Box<OnConflictClause>>,
    pub returning_list: Option<Vec<Node>>,
    pub with_clause: Option<Box<WithClause>>,
    pub override_: OverridingKind,
}

/// UPDATE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub relation: Option<Box<RangeVar>>,
    /// the target list (of ResTarget)
    pub target_list: Option<Vec<Node>>,
    pub where_clause: Option<Node>,
    /// optional FROM clause for more tables
    pub from_clause: Option<Vec<Node>>,
    pub returning_list: Option<Vec<Node>>,
    pub with_clause: Option<Box<WithClause>>,
}

/// DELETE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub relation: Option<Box<RangeVar>>,
    /// optional USING clause for more tables
    pub using_clause: Option<Vec<Node>>,
    pub where_clause: Option<Node>,
    pub returning_list: Option<Vec<Node>>,
    pub with_clause: Option<Box<WithClause>>,
}

/// MERGE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeStmt {
    /// target relation to merge into
    pub relation: Option<Box<RangeVar>>,
    pub source_relation: Option<Node>,
    pub join_condition: Option<Node>,
    /// list of MergeWhenClause, in source order
    pub merge_when_clauses: Option<Vec<Node>>,
    pub returning_list: Option<Vec<Node>>,
    pub with_clause: Option<Box<WithClause>>,
}

/// One WHEN clause of a MERGE statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeWhenClause {
    pub kind: MergeMatchKind,
    /// WHEN ... AND condition, if any
    pub condition: Option<Node>,
    pub command_type: CmdType,
    pub override_: OverridingKind,
    /// SET targets for UPDATE, column list for INSERT
    pub target_list: Option<Vec<Node>>,
    /// VALUES for INSERT; None for UPDATE/DELETE
    pub values: Option<Vec<Node>>,
}

// ============================================================================
// DDL statement types
// ============================================================================

/// CREATE TABLE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateStmt {
    pub relation: Option<Box<RangeVar>>,
    /// column definitions (ColumnDef) and table constraints
    pub table_elts: Option<Vec<Node>>,
    /// relations to inherit from (RangeVar)
    pub inh_relations: Option<Vec<Node>>,
    /// PARTITION BY clause
    pub partspec: Option<Box<PartitionSpec>>,
    pub of_typename: Option<Box<TypeName>>,
    pub constraints: Option<Vec<Node>>,
    /// options from WITH clause
    pub options: Option<Vec<Node>>,
    pub oncommit: OnCommitAction,
    pub tablespacename: String,
    /// table access method
    pub access_method: String,
    pub if_not_exists: bool,
}

/// ALTER TABLE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub relation: Option<Box<RangeVar>>,
    /// list of subcommands (AlterTableCmd)
    pub cmds: Option<Vec<Node>>,
    pub objtype: ObjectType,
    pub missing_ok: bool,
}

/// A subcommand of ALTER TABLE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlterTableCmd {
    pub subtype: AlterTableType,
    /// column, constraint, or trigger to act on
    pub name: String,
    pub num: i16,
    pub newowner: Option<Box<RoleSpec>>,
    /// definition of new column, index, constraint, etc.
    pub def: Option<Node>,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
}

/// DROP statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropStmt {
    /// list of names
    pub objects: Option<Vec<Node>>,
    pub remove_type: ObjectType,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
    pub concurrent: bool,
}

/// TRUNCATE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruncateStmt {
    pub relations: Option<Vec<Node>>,
    pub restart_seqs: bool,
    pub behavior: DropBehavior,
}

/// COMMENT ON statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentStmt {
    pub objtype: ObjectType,
    /// qualified name of the object
    pub object: Option<Node>,
    /// comment to set, or empty to drop
    pub comment: String,
}

/// CREATE INDEX statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexStmt {
    pub idxname: String,
    pub relation: Option<Box<RangeVar>>,
    /// name of access method (eg. btree)
    pub access_method: String,
    pub table_space: String,
    /// columns to index: a list of IndexElem
    pub index_params: Option<Vec<Node>>,
    /// additional INCLUDE columns: a list of IndexElem
    pub index_including_params: Option<Vec<Node>>,
    pub options: Option<Vec<Node>>,
    /// partial-index predicate
    pub where_clause: Option<Node>,
    pub unique: bool,
    pub nulls_not_distinct: bool,
    pub primary: bool,
    pub isconstraint: bool,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub concurrent: bool,
    pub if_not_exists: bool,
}

/// CREATE SCHEMA statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSchemaStmt {
    pub schemaname: String,
    pub authrole: Option<Box<RoleSpec>>,
    /// schema components (list of parsetrees)
    pub schema_elts: Option<Vec<Node>>,
    pub if_not_exists: bool,
}

/// CREATE VIEW statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewStmt {
    pub view: Option<Box<RangeVar>>,
    /// target column names
    pub aliases: Option<Vec<Node>>,
    /// the SELECT query (as a raw parse tree)
    pub query: Option<Node>,
    pub replace: bool,
    pub options: Option<Vec<Node>>,
    pub with_check_option: ViewCheckOption,
}

/// CREATE FUNCTION / CREATE PROCEDURE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFunctionStmt {
    pub is_procedure: bool,
    pub replace: bool,
    pub funcname: Option<Vec<Node>>,
    /// list of FunctionParameter
    pub parameters: Option<Vec<Node>>,
    pub return_type: Option<Box<TypeName>>,
    /// list of DefElem
    pub options: Option<Vec<Node>>,
    pub sql_body: Option<Node>,
}

/// A parameter in CREATE FUNCTION.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    pub arg_type: Option<Box<TypeName>>,
    pub mode: FunctionParameterMode,
    pub defexpr: Option<Node>,
}

/// ALTER FUNCTION/PROCEDURE/ROUTINE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlterFunctionStmt {
    pub objtype: ObjectType,
    pub func: Option<Box<ObjectWithArgs>>,
    /// list of DefElem
    pub actions: Option<Vec<Node>>,
}

/// CREATE SEQUENCE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSeqStmt {
    pub sequence: Option<Box<RangeVar>>,
    /// list of DefElem
    pub options: Option<Vec<Node>>,
    pub for_identity: bool,
    pub if_not_exists: bool,
}

/// ALTER SEQUENCE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlterSeqStmt {
    pub sequence: Option<Box<RangeVar>>,
    pub options: Option<Vec<Node>>,
    pub for_identity: bool,
    pub missing_ok: bool,
}

/// CREATE DOMAIN statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDomainStmt {
    pub domainname: Option<Vec<Node>>,
    pub type_name: Option<Box<TypeName>>,
    pub coll_clause: Option<Box<CollateClause>>,
    pub constraints: Option<Vec<Node>>,
}

/// CREATE TABLE AS / CREATE MATERIALIZED VIEW statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTableAsStmt {
    pub query: Option<Node>,
    pub into: Option<Box<IntoClause>>,
    pub objtype: ObjectType,
    pub is_select_into: bool,
    pub if_not_exists: bool,
}

/// REFRESH MATERIALIZED VIEW statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshMatViewStmt {
    pub concurrent: bool,
    pub skip_data: bool,
    pub relation: Option<Box<RangeVar>>,
}

/// CREATE TRIGGER statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTrigStmt {
    pub replace: bool,
    pub isconstraint: bool,
    pub trigname: String,
    pub relation: Option<Box<RangeVar>>,
    pub funcname: Option<Vec<Node>>,
    /// arguments to the trigger function (String nodes)
    pub args: Option<Vec<Node>>,
    /// ROW or STATEMENT trigger
    pub row: bool,
    /// BEFORE, AFTER, or INSTEAD (TRIGGER_TYPE bits)
    pub timing: i16,
    /// INSERT, UPDATE, DELETE, TRUNCATE (TRIGGER_TYPE bits)
    pub events: i16,
    /// UPDATE OF column names, or NIL for all columns
    pub columns: Option<Vec<Node>>,
    pub when_clause: Option<Node>,
    /// list of TriggerTransition
    pub transition_rels: Option<Vec<Node>>,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub constrrel: Option<Box<RangeVar>>,
}

/// A transition table specification in CREATE TRIGGER.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerTransition {
    pub name: String,
    pub is_new: bool,
    pub is_table: bool,
}

/// CREATE RULE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStmt {
    pub relation: Option<Box<RangeVar>>,
    pub rulename: String,
    pub where_clause: Option<Node>,
    pub event: CmdType,
    pub instead: bool,
    pub actions: Option<Vec<Node>>,
    pub replace: bool,
}

/// CREATE ROLE/USER/GROUP statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRoleStmt {
    pub stmt_type: RoleStmtType,
    pub role: String,
    pub options: Option<Vec<Node>>,
}

/// ALTER ROLE/USER/GROUP statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlterRoleStmt {
    pub role: Option<Box<RoleSpec>>,
    pub options: Option<Vec<Node>>,
    /// +1 = add members, -1 = drop members
    pub action: i32,
}

/// DROP ROLE/USER/GROUP statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropRoleStmt {
    /// list of RoleSpec
    pub roles: Option<Vec<Node>>,
    pub missing_ok: bool,
}

/// CREATE DATABASE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedbStmt {
    pub dbname: String,
    pub options: Option<Vec<Node>>,
}

/// DROP DATABASE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdbStmt {
    pub dbname: String,
    pub missing_ok: bool,
    pub options: Option<Vec<Node>>,
}

/// CREATE EXTENSION statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExtensionStmt {
    pub extname: String,
    pub if_not_exists: bool,
    pub options: Option<Vec<Node>>,
}

/// CREATE TYPE ... AS ENUM statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEnumStmt {
    pub type_name: Option<Vec<Node>>,
    /// enum values (list of String)
    pub vals: Option<Vec<Node>>,
}

/// CREATE TYPE name AS (column_list) statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeTypeStmt {
    pub typevar: Option<Box<RangeVar>>,
    pub coldeflist: Option<Vec<Node>>,
}

/// ALTER ... RENAME statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenameStmt {
    pub rename_type: ObjectType,
    pub relation_type: ObjectType,
    pub relation: Option<Box<RangeVar>>,
    pub object: Option<Node>,
    /// name of contained object (column, rule, trigger)
    pub subname: String,
    pub newname: String,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
}

// ============================================================================
// Transaction statement
// ============================================================================

/// Transaction control statement (BEGIN, COMMIT, ROLLBACK, etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionStmt {
    pub kind: TransactionStmtKind,
    /// for BEGIN/START TRANSACTION
    pub options: Option<Vec<Node>>,
    /// for SAVEPOINT, ROLLBACK TO, RELEASE
    pub savepoint_name: String,
    /// for two-phase commit
    pub gid: String,
    /// AND CHAIN option
    pub chain: bool,
    pub location: ParseLoc,
}

// ============================================================================
// Expression types
// ============================================================================

/// An expression with an operator (e.g., "a + b", "x = 1")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AExpr {
    pub kind: AExprKind,
    /// possibly-qualified name of the operator
    pub name: Option<Vec<Node>>,
    pub lexpr: Option<Node>,
    pub rexpr: Option<Node>,
    pub location: ParseLoc,
}

/// Column reference (e.g., "table.column")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// field names (String nodes) or AStar
    pub fields: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// Parameter reference ($1, $2, etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamRef {
    pub number: i32,
    pub location: ParseLoc,
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AConst {
    /// Integer, Float, Boolean, String or BitString node; None if isnull
    pub val: Option<Node>,
    pub isnull: bool,
    pub location: ParseLoc,
}

/// Type cast expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeCast {
    pub arg: Option<Node>,
    pub type_name: Option<Box<TypeName>>,
    pub location: ParseLoc,
}

/// COLLATE clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollateClause {
    pub arg: Option<Node>,
    pub collname: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// Function call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuncCall {
    pub funcname: Option<Vec<Node>>,
    pub args: Option<Vec<Node>>,
    /// ORDER BY inside aggregate args (list of SortBy)
    pub agg_order: Option<Vec<Node>>,
    pub agg_filter: Option<Node>,
    pub over: Option<Box<WindowDef>>,
    pub agg_within_group: bool,
    /// argument was really '*'
    pub agg_star: bool,
    pub agg_distinct: bool,
    pub func_variadic: bool,
    pub funcformat: CoercionForm,
    pub location: ParseLoc,
}

/// Array subscript or slice bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AIndices {
    pub is_slice: bool,
    pub lidx: Option<Node>,
    pub uidx: Option<Node>,
}

/// Array subscripting or field selection applied to a non-column expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AIndirection {
    pub arg: Option<Node>,
    /// subscripts and/or field names and/or '*'
    pub indirection: Option<Vec<Node>>,
}

/// ARRAY[] constructor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AArrayExpr {
    pub elements: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// Subquery appearing in an expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubLink {
    pub sub_link_type: SubLinkType,
    pub sub_link_id: i32,
    /// outer-query test for ANY/ALL/ROWCOMPARE
    pub testexpr: Option<Node>,
    /// originally specified operator name
    pub oper_name: Option<Vec<Node>>,
    pub subselect: Option<Node>,
    pub location: ParseLoc,
}

/// Boolean expression (AND, OR, NOT)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolExpr {
    pub boolop: BoolExprType,
    pub args: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// IS [NOT] NULL test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NullTest {
    pub arg: Option<Node>,
    pub nulltesttype: NullTestType,
    pub argisrow: bool,
    pub location: ParseLoc,
}

/// IS [NOT] TRUE/FALSE/UNKNOWN test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanTest {
    pub arg: Option<Node>,
    pub booltesttype: BoolTestType,
    pub location: ParseLoc,
}

/// CASE expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    /// implicit comparison argument; None for searched CASE
    pub arg: Option<Node>,
    /// the WHEN clauses (list of CaseWhen)
    pub args: Option<Vec<Node>>,
    /// the ELSE result; None when no ELSE was written
    pub defresult: Option<Node>,
    pub location: ParseLoc,
}

/// One WHEN clause in a CASE expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseWhen {
    pub expr: Option<Node>,
    pub result: Option<Node>,
    pub location: ParseLoc,
}

/// COALESCE expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoalesceExpr {
    pub args: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// GREATEST or LEAST expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxExpr {
    pub op: MinMaxOp,
    pub args: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// SQL-standard function that doesn't use call syntax (CURRENT_DATE etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlValueFunction {
    pub op: SvfOp,
    /// typmod to apply, or -1
    pub typmod: i32,
    pub location: ParseLoc,
}

/// ROW() or (a, b, c) expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowExpr {
    pub args: Option<Vec<Node>>,
    pub row_format: CoercionForm,
    pub colnames: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// A named argument in a function call (name => value)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedArgExpr {
    pub arg: Option<Node>,
    pub name: String,
    /// argument's number in positional notation, -1 in raw trees
    pub argnumber: i32,
    pub location: ParseLoc,
}

/// GROUPING(...) expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingFunc {
    pub args: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// CUBE, ROLLUP, or GROUPING SETS clause element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingSet {
    pub kind: GroupingSetKind,
    pub content: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// Element of the row source in UPDATE SET (a, b) = row-expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiAssignRef {
    /// the row-valued expression
    pub source: Option<Node>,
    /// column number for this target (1..n)
    pub colno: i32,
    /// number of targets in the construct
    pub ncolumns: i32,
}

/// DEFAULT marker in INSERT/UPDATE expressions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetToDefault {
    pub location: ParseLoc,
}

/// WHERE CURRENT OF cursor_name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentOfExpr {
    pub cursor_name: String,
    pub cursor_param: i32,
}

// ============================================================================
// Target / range table entries
// ============================================================================

/// A result target in a SELECT target list, or a column name with optional
/// indirection in INSERT/UPDATE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResTarget {
    /// column label or name, or empty
    pub name: String,
    /// subscripts, field names, and '*'
    pub indirection: Option<Vec<Node>>,
    /// the value expression to compute or assign
    pub val: Option<Node>,
    pub location: ParseLoc,
}

/// Table or sequence reference in a FROM clause or DDL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeVar {
    pub catalogname: String,
    pub schemaname: String,
    pub relname: String,
    /// expand relation by inheritance?
    pub inh: bool,
    /// see RELPERSISTENCE_* codes
    pub relpersistence: char,
    pub alias: Option<Box<Alias>>,
    pub location: ParseLoc,
}

impl Default for RangeVar {
    fn default() -> Self {
        RangeVar {
            catalogname: String::new(),
            schemaname: String::new(),
            relname: String::new(),
            inh: true,
            relpersistence: RELPERSISTENCE_PERMANENT,
            alias: None,
            location: -1,
        }
    }
}

/// Table alias (AS clause), with optional column aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub aliasname: String,
    pub colnames: Option<Vec<Node>>,
}

/// Subquery appearing in a FROM clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeSubselect {
    pub lateral: bool,
    pub subquery: Option<Node>,
    pub alias: Option<Box<Alias>>,
}

/// Function call appearing in a FROM clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFunction {
    pub lateral: bool,
    /// WITH ORDINALITY suffix?
    pub ordinality: bool,
    pub is_rowsfrom: bool,
    /// per-function [funcexpr, coldeflist] pairs
    pub functions: Option<Vec<Node>>,
    pub alias: Option<Box<Alias>>,
    pub coldeflist: Option<Vec<Node>>,
}

/// JOIN expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinExpr {
    pub jointype: JoinType,
    pub is_natural: bool,
    pub larg: Option<Node>,
    pub rarg: Option<Node>,
    /// USING column names, if any
    pub using_clause: Option<Vec<Node>>,
    /// alias attached to USING, if any
    pub join_using_alias: Option<Box<Alias>>,
    /// ON qualification, if any
    pub quals: Option<Node>,
    pub alias: Option<Box<Alias>>,
    pub rtindex: i32,
}

// ============================================================================
// Clause types
// ============================================================================

/// ORDER BY clause item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortBy {
    pub node: Option<Node>,
    pub sortby_dir: SortByDir,
    pub sortby_nulls: SortByNulls,
    /// operator name, for SORTBY_USING
    pub use_op: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// Window definition (WINDOW clause entry or OVER clause)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowDef {
    /// window name being defined (empty in OVER clause)
    pub name: String,
    /// referenced window name, if any
    pub refname: String,
    pub partition_clause: Option<Vec<Node>>,
    pub order_clause: Option<Vec<Node>>,
    /// FRAMEOPTION_* bits
    pub frame_options: i32,
    pub start_offset: Option<Node>,
    pub end_offset: Option<Node>,
    pub location: ParseLoc,
}

/// WITH clause (common table expressions)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithClause {
    /// list of CommonTableExpr
    pub ctes: Option<Vec<Node>>,
    pub recursive: bool,
    pub location: ParseLoc,
}

/// A single CTE in a WITH clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonTableExpr {
    pub ctename: String,
    pub aliascolnames: Option<Vec<Node>>,
    pub ctematerialized: CteMaterialize,
    pub ctequery: Option<Node>,
    pub location: ParseLoc,
}

/// SELECT INTO / CREATE TABLE AS target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntoClause {
    pub rel: Option<Box<RangeVar>>,
    pub col_names: Option<Vec<Node>>,
    pub access_method: String,
    pub options: Option<Vec<Node>>,
    pub on_commit: OnCommitAction,
    pub table_space_name: String,
    /// true for WITH NO DATA
    pub skip_data: bool,
}

/// ON CONFLICT clause of INSERT
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnConflictClause {
    pub action: OnConflictAction,
    pub infer: Option<Box<InferClause>>,
    /// SET clause for DO UPDATE
    pub target_list: Option<Vec<Node>>,
    pub where_clause: Option<Node>,
    pub location: ParseLoc,
}

/// ON CONFLICT index inference clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferClause {
    /// IndexElems to infer unique index
    pub index_elems: Option<Vec<Node>>,
    pub where_clause: Option<Node>,
    pub conname: String,
    pub location: ParseLoc,
}

/// FOR UPDATE/SHARE clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockingClause {
    pub locked_rels: Option<Vec<Node>>,
    pub strength: LockClauseStrength,
    pub wait_policy: LockWaitPolicy,
}

// ============================================================================
// Type-related support nodes
// ============================================================================

/// A data type name, possibly qualified, with modifiers and array bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeName {
    /// qualified name (list of String nodes)
    pub names: Option<Vec<Node>>,
    pub setof: bool,
    /// %TYPE specified?
    pub pct_type: bool,
    /// type modifier expression(s)
    pub typmods: Option<Vec<Node>>,
    /// prespecified type modifier
    pub typemod: i32,
    /// array bounds (list of Integer, -1 = unspecified)
    pub array_bounds: Option<Vec<Node>>,
    pub location: ParseLoc,
}

impl Default for TypeName {
    fn default() -> Self {
        TypeName {
            names: None,
            setof: false,
            pct_type: false,
            typmods: None,
            typemod: -1,
            array_bounds: None,
            location: -1,
        }
    }
}

/// A column definition in CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub colname: String,
    pub type_name: Option<Box<TypeName>>,
    pub compression: String,
    pub inhcount: i32,
    pub is_local: bool,
    pub is_not_null: bool,
    pub is_from_type: bool,
    /// attstorage setting, or '\0' for default
    pub storage: char,
    pub raw_default: Option<Node>,
    /// attidentity setting, or '\0'
    pub identity: char,
    /// attgenerated setting, or '\0'
    pub generated: char,
    pub coll_clause: Option<Box<CollateClause>>,
    pub constraints: Option<Vec<Node>>,
    pub location: ParseLoc,
}

impl Default for ColumnDef {
    fn default() -> Self {
        ColumnDef {
            colname: String::new(),
            type_name: None,
            compression: String::new(),
            inhcount: 0,
            is_local: true,
            is_not_null: false,
            is_from_type: false,
            storage: '\0',
            raw_default: None,
            identity: '\0',
            generated: '\0',
            coll_clause: None,
            constraints: None,
            location: -1,
        }
    }
}

/// A constraint definition, both the column and table forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub contype: ConstrType,
    /// constraint name, or empty if unnamed
    pub conname: String,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub is_no_inherit: bool,
    /// CHECK or DEFAULT expression (raw parse tree)
    pub raw_expr: Option<Node>,
    /// ALWAYS or BY DEFAULT ('a'/'d'), for identity and generated columns
    pub generated_when: char,
    /// UNIQUE NULLS NOT DISTINCT?
    pub nulls_not_distinct: bool,
    /// PRIMARY KEY/UNIQUE column names
    pub keys: Option<Vec<Node>>,
    /// INCLUDE column names
    pub including: Option<Vec<Node>>,
    pub options: Option<Vec<Node>>,
    /// existing index to use (USING INDEX), or empty
    pub indexname: String,
    pub indexspace: String,
    pub access_method: String,
    /// WHERE for exclusion constraints
    pub where_clause: Option<Node>,
    /// the table a FOREIGN KEY references
    pub pktable: Option<Box<RangeVar>>,
    pub fk_attrs: Option<Vec<Node>>,
    pub pk_attrs: Option<Vec<Node>>,
    /// FULL, PARTIAL, SIMPLE ('f'/'p'/'s')
    pub fk_matchtype: char,
    pub fk_upd_action: char,
    pub fk_del_action: char,
    pub fk_del_set_cols: Option<Vec<Node>>,
    /// NOT VALID specified?
    pub skip_validation: bool,
    pub initially_valid: bool,
    pub location: ParseLoc,
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint {
            contype: ConstrType::default(),
            conname: String::new(),
            deferrable: false,
            initdeferred: false,
            is_no_inherit: false,
            raw_expr: None,
            generated_when: '\0',
            nulls_not_distinct: false,
            keys: None,
            including: None,
            options: None,
            indexname: String::new(),
            indexspace: String::new(),
            access_method: String::new(),
            where_clause: None,
            pktable: None,
            fk_attrs: None,
            pk_attrs: None,
            fk_matchtype: '\0',
            fk_upd_action: '\0',
            fk_del_action: '\0',
            fk_del_set_cols: None,
            skip_validation: false,
            initially_valid: true,
            location: -1,
        }
    }
}

/// A generic name/value definition element (options lists everywhere).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefElem {
    pub defnamespace: String,
    pub defname: String,
    pub arg: Option<Node>,
    pub defaction: DefElemAction,
    pub location: ParseLoc,
}

/// A column or expression in an index definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexElem {
    /// name of attribute to index, or empty
    pub name: String,
    /// expression to index, or None
    pub expr: Option<Node>,
    pub indexcolname: String,
    pub collation: Option<Vec<Node>>,
    pub opclass: Option<Vec<Node>>,
    pub opclassopts: Option<Vec<Node>>,
    pub ordering: SortByDir,
    pub nulls_ordering: SortByNulls,
}

/// LIKE clause in CREATE TABLE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableLikeClause {
    pub relation: Option<Box<RangeVar>>,
    /// OR of TableLikeOption flags
    pub options: u32,
}

// TableLikeOption bits (parsenodes.h).
pub const CREATE_TABLE_LIKE_COMMENTS: u32 = 1 << 0;
pub const CREATE_TABLE_LIKE_COMPRESSION: u32 = 1 << 1;
pub const CREATE_TABLE_LIKE_CONSTRAINTS: u32 = 1 << 2;
pub const CREATE_TABLE_LIKE_DEFAULTS: u32 = 1 << 3;
pub const CREATE_TABLE_LIKE_GENERATED: u32 = 1 << 4;
pub const CREATE_TABLE_LIKE_IDENTITY: u32 = 1 << 5;
pub const CREATE_TABLE_LIKE_INDEXES: u32 = 1 << 6;
pub const CREATE_TABLE_LIKE_STATISTICS: u32 = 1 << 7;
pub const CREATE_TABLE_LIKE_STORAGE: u32 = 1 << 8;
pub const CREATE_TABLE_LIKE_ALL: u32 = 0x7FFF_FFFF;

/// PARTITION BY clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionSpec {
    /// "range", "list" or "hash"
    pub strategy: String,
    /// list of PartitionElem
    pub part_params: Option<Vec<Node>>,
    pub location: ParseLoc,
}

/// A single partition key column or expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionElem {
    pub name: String,
    pub expr: Option<Node>,
    pub collation: Option<Vec<Node>>,
    pub opclass: Option<Vec<Node>>,
    pub location: ParseLoc,
}

// ============================================================================
// Role / privilege support nodes
// ============================================================================

/// A role name or pseudo-role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub roletype: RoleSpecType,
    /// filled only for ROLESPEC_CSTRING
    pub rolename: String,
    pub location: ParseLoc,
}

/// A single privilege in GRANT/REVOKE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessPriv {
    /// privilege name, or empty for ALL PRIVILEGES
    pub priv_name: String,
    /// column list (String nodes)
    pub cols: Option<Vec<Node>>,
}

/// A function/operator name with argument types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectWithArgs {
    pub objname: Option<Vec<Node>>,
    /// argument types (list of TypeName)
    pub objargs: Option<Vec<Node>>,
    /// true if no argument list was given
    pub args_unspecified: bool,
}

// ============================================================================
// Administrative statements
// ============================================================================

/// SET variable statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableSetStmt {
    pub kind: VariableSetKind,
    pub name: String,
    pub args: Option<Vec<Node>>,
    pub is_local: bool,
}

/// SHOW variable statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableShowStmt {
    pub name: String,
}

/// EXPLAIN statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplainStmt {
    pub query: Option<Node>,
    /// list of DefElem
    pub options: Option<Vec<Node>>,
}

/// COPY statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyStmt {
    pub relation: Option<Box<RangeVar>>,
    /// the query, for COPY (query) TO
    pub query: Option<Node>,
    /// list of column names, or NIL for all
    pub attlist: Option<Vec<Node>>,
    pub is_from: bool,
    pub is_program: bool,
    /// filename, or empty for STDIN/STDOUT
    pub filename: String,
    pub options: Option<Vec<Node>>,
    /// WHERE condition (COPY FROM only)
    pub where_clause: Option<Node>,
}

/// GRANT and REVOKE statements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantStmt {
    /// true = GRANT, false = REVOKE
    pub is_grant: bool,
    pub targtype: GrantTargetType,
    pub objtype: ObjectType,
    pub objects: Option<Vec<Node>>,
    /// list of AccessPriv; NIL means ALL PRIVILEGES
    pub privileges: Option<Vec<Node>>,
    pub grantees: Option<Vec<Node>>,
    pub grant_option: bool,
    pub grantor: Option<Box<RoleSpec>>,
    pub behavior: DropBehavior,
}

/// GRANT role TO role / REVOKE role FROM role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantRoleStmt {
    /// roles to grant/revoke (AccessPriv nodes)
    pub granted_roles: Option<Vec<Node>>,
    /// member roles (RoleSpec nodes)
    pub grantee_roles: Option<Vec<Node>>,
    pub is_grant: bool,
    /// grant options (list of DefElem)
    pub opt: Option<Vec<Node>>,
    pub grantor: Option<Box<RoleSpec>>,
    pub behavior: DropBehavior,
}

/// LOCK TABLE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockStmt {
    pub relations: Option<Vec<Node>>,
    /// lock mode (lockdefs.h constants)
    pub mode: i32,
    pub nowait: bool,
}

/// VACUUM or ANALYZE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacuumStmt {
    /// list of DefElem
    pub options: Option<Vec<Node>>,
    /// list of VacuumRelation, or NIL for all
    pub rels: Option<Vec<Node>>,
    /// true for VACUUM, false for ANALYZE
    pub is_vacuumcmd: bool,
}

/// A single relation in VACUUM/ANALYZE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacuumRelation {
    pub relation: Option<Box<RangeVar>>,
    /// list of column names, or NIL for all
    pub va_cols: Option<Vec<Node>>,
}

// ============================================================================
// Other statements
// ============================================================================

/// DO statement (anonymous code block)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoStmt {
    /// list of DefElem
    pub args: Option<Vec<Node>>,
}

/// CALL statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
    pub funccall: Option<Box<FuncCall>>,
}

/// NOTIFY statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifyStmt {
    pub conditionname: String,
    pub payload: String,
}

/// LISTEN statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenStmt {
    pub conditionname: String,
}

/// UNLISTEN statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlistenStmt {
    /// empty string means UNLISTEN *
    pub conditionname: String,
}

/// CHECKPOINT statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPointStmt;

/// DISCARD statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscardStmt {
    pub target: DiscardMode,
}

/// PREPARE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepareStmt {
    pub name: String,
    /// list of TypeName
    pub argtypes: Option<Vec<Node>>,
    pub query: Option<Node>,
}

/// EXECUTE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteStmt {
    pub name: String,
    pub params: Option<Vec<Node>>,
}

/// DEALLOCATE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeallocateStmt {
    /// name of plan to deallocate, or empty for ALL
    pub name: String,
    pub isall: bool,
    pub location: ParseLoc,
}

/// DECLARE cursor statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclareCursorStmt {
    pub portalname: String,
    /// bitmask of CURSOR_OPT_*
    pub options: i32,
    pub query: Option<Node>,
}

/// CLOSE cursor statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosePortalStmt {
    /// empty string means CLOSE ALL
    pub portalname: String,
}

/// FETCH or MOVE statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchStmt {
    pub direction: FetchDirection,
    /// number of rows, or FETCH_ALL
    pub how_many: i64,
    pub portalname: String,
    pub ismove: bool,
}
