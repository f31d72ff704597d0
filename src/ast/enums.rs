//! Enumerations used by parse tree nodes.
//!
//! The integer encoding of every enum here matches PostgreSQL's own
//! definitions (parsenodes.h, primnodes.h, lockdefs.h), because the dump
//! output writes most of these fields as bare integers and is compared
//! byte-for-byte against PostgreSQL's nodeToString() output.

use serde::{Deserialize, Serialize};

/// The type of a query command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmdType {
    #[default]
    Unknown = 0,
    Select = 1,
    Update = 2,
    Insert = 3,
    Delete = 4,
    Merge = 5,
    Utility = 6,
    Nothing = 7,
}

/// Set operation (UNION, INTERSECT, EXCEPT) on a SelectStmt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperation {
    #[default]
    None = 0,
    Union = 1,
    Intersect = 2,
    Except = 3,
}

/// LIMIT clause variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitOption {
    /// FETCH FIRST ... ONLY, or plain LIMIT
    #[default]
    Count = 0,
    /// FETCH FIRST ... WITH TIES
    WithTies = 1,
}

/// Sort ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortByDir {
    #[default]
    Default = 0,
    Asc = 1,
    Desc = 2,
    /// Not allowed in CREATE INDEX
    Using = 3,
}

/// NULLS FIRST/LAST option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortByNulls {
    #[default]
    Default = 0,
    First = 1,
    Last = 2,
}

/// Join types, matching PostgreSQL's JoinType.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    #[default]
    Inner = 0,
    Left = 1,
    Full = 2,
    Right = 3,
    Semi = 4,
    Anti = 5,
    RightSemi = 6,
    RightAnti = 7,
    UniqueOuter = 8,
    UniqueInner = 9,
}

/// AND/OR/NOT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolExprType {
    #[default]
    And = 0,
    Or = 1,
    Not = 2,
}

/// Kinds of A_Expr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AExprKind {
    /// Normal operator
    #[default]
    Op = 0,
    /// scalar op ANY (array)
    OpAny = 1,
    /// scalar op ALL (array)
    OpAll = 2,
    /// IS DISTINCT FROM - name must be "="
    Distinct = 3,
    /// IS NOT DISTINCT FROM - name must be "="
    NotDistinct = 4,
    /// NULLIF - name must be "="
    Nullif = 5,
    /// [NOT] IN - name must be "=" or "<>"
    In = 6,
    /// [NOT] LIKE - name must be "~~" or "!~~"
    Like = 7,
    /// [NOT] ILIKE - name must be "~~*" or "!~~*"
    Ilike = 8,
    /// [NOT] SIMILAR - name must be "~" or "!~"
    Similar = 9,
    /// name must be "BETWEEN"
    Between = 10,
    /// name must be "NOT BETWEEN"
    NotBetween = 11,
    /// name must be "BETWEEN SYMMETRIC"
    BetweenSym = 12,
    /// name must be "NOT BETWEEN SYMMETRIC"
    NotBetweenSym = 13,
}

/// OVERRIDING clause in INSERT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverridingKind {
    #[default]
    NotSet = 0,
    UserValue = 1,
    SystemValue = 2,
}

/// ON COMMIT action for temporary tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnCommitAction {
    #[default]
    Noop = 0,
    PreserveRows = 1,
    DeleteRows = 2,
    Drop = 3,
}

/// Constraint types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstrType {
    #[default]
    Null = 0,
    NotNull = 1,
    Default = 2,
    Identity = 3,
    Generated = 4,
    Check = 5,
    Primary = 6,
    Unique = 7,
    Exclusion = 8,
    Foreign = 9,
    AttrDeferrable = 10,
    AttrNotDeferrable = 11,
    AttrDeferred = 12,
    AttrImmediate = 13,
}

/// How to display a coercion or function call node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoercionForm {
    #[default]
    ExplicitCall = 0,
    ExplicitCast = 1,
    ImplicitCast = 2,
    SqlSyntax = 3,
}

/// RESTRICT vs CASCADE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropBehavior {
    #[default]
    Restrict = 0,
    Cascade = 1,
}

/// Object kinds, used by DROP, COMMENT, GRANT and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    AccessMethod = 0,
    Aggregate = 1,
    Amop = 2,
    Amproc = 3,
    Attribute = 4,
    Cast = 5,
    Column = 6,
    Collation = 7,
    Conversion = 8,
    Database = 9,
    Default = 10,
    Defacl = 11,
    Domain = 12,
    Domconstraint = 13,
    EventTrigger = 14,
    Extension = 15,
    Fdw = 16,
    ForeignServer = 17,
    ForeignTable = 18,
    Function = 19,
    Index = 20,
    Language = 21,
    Largeobject = 22,
    Matview = 23,
    Opclass = 24,
    Operator = 25,
    Opfamily = 26,
    ParameterAcl = 27,
    Policy = 28,
    Procedure = 29,
    Publication = 30,
    PublicationNamespace = 31,
    PublicationRel = 32,
    Role = 33,
    Routine = 34,
    Rule = 35,
    Schema = 36,
    Sequence = 37,
    StatisticExt = 38,
    Subscription = 39,
    Tabconstraint = 40,
    Table = 41,
    Tablespace = 42,
    Transform = 43,
    Trigger = 44,
    TsConfiguration = 45,
    TsDictionary = 46,
    TsParser = 47,
    TsTemplate = 48,
    Type = 49,
    UserMapping = 50,
    View = 51,
}

/// Kinds of SubLink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubLinkType {
    #[default]
    Exists = 0,
    All = 1,
    Any = 2,
    Rowcompare = 3,
    Expr = 4,
    Multiexpr = 5,
    Array = 6,
    /// for SubPlans only
    Cte = 7,
}

/// Role specification kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleSpecType {
    /// role name as string
    #[default]
    CString = 0,
    CurrentRole = 1,
    CurrentUser = 2,
    SessionUser = 3,
    Public = 4,
}

/// ALTER TABLE subcommand types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlterTableType {
    #[default]
    AddColumn = 0,
    AddColumnToView = 1,
    ColumnDefault = 2,
    CookedColumnDefault = 3,
    DropNotNull = 4,
    SetNotNull = 5,
    SetExpression = 6,
    DropExpression = 7,
    CheckNotNull = 8,
    SetStatistics = 9,
    SetOptions = 10,
    ResetOptions = 11,
    SetStorage = 12,
    SetCompression = 13,
    DropColumn = 14,
    AddIndex = 15,
    ReAddIndex = 16,
    AddConstraint = 17,
    ReAddConstraint = 18,
    ReAddDomainConstraint = 19,
    AlterConstraint = 20,
    ValidateConstraint = 21,
    AddIndexConstraint = 22,
    DropConstraint = 23,
    ReAddComment = 24,
    AlterColumnType = 25,
    AlterColumnGenericOptions = 26,
    ChangeOwner = 27,
    ClusterOn = 28,
    DropCluster = 29,
    SetLogged = 30,
    SetUnLogged = 31,
    DropOids = 32,
    SetAccessMethod = 33,
    SetTableSpace = 34,
    SetRelOptions = 35,
    ResetRelOptions = 36,
    ReplaceRelOptions = 37,
    EnableTrig = 38,
    EnableAlwaysTrig = 39,
    EnableReplicaTrig = 40,
    DisableTrig = 41,
    EnableTrigAll = 42,
    DisableTrigAll = 43,
    EnableTrigUser = 44,
    DisableTrigUser = 45,
    EnableRule = 46,
    EnableAlwaysRule = 47,
    EnableReplicaRule = 48,
    DisableRule = 49,
    AddInherit = 50,
    DropInherit = 51,
    AddOf = 52,
    DropOf = 53,
    ReplicaIdentity = 54,
    EnableRowSecurity = 55,
    DisableRowSecurity = 56,
    ForceRowSecurity = 57,
    NoForceRowSecurity = 58,
    GenericOptions = 59,
    AttachPartition = 60,
    DetachPartition = 61,
    DetachPartitionFinalize = 62,
    AddIdentity = 63,
    SetIdentity = 64,
    DropIdentity = 65,
    ReAddStatistics = 66,
}

/// FOR UPDATE/SHARE strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockClauseStrength {
    #[default]
    None = 0,
    ForKeyShare = 1,
    ForShare = 2,
    ForNoKeyUpdate = 3,
    ForUpdate = 4,
}

/// NOWAIT / SKIP LOCKED option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockWaitPolicy {
    /// default behavior: wait for the lock
    #[default]
    Block = 0,
    /// SKIP LOCKED
    Skip = 1,
    /// NOWAIT
    Error = 2,
}

/// CTE materialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CteMaterialize {
    #[default]
    Default = 0,
    Always = 1,
    Never = 2,
}

/// DISCARD target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardMode {
    #[default]
    All = 0,
    Plans = 1,
    Sequences = 2,
    Temp = 3,
}

/// SET variable kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableSetKind {
    /// SET var = value
    #[default]
    SetValue = 0,
    /// SET var TO DEFAULT
    SetDefault = 1,
    /// SET var FROM CURRENT
    SetCurrent = 2,
    /// special case for SET TRANSACTION
    SetMulti = 3,
    /// RESET var
    Reset = 4,
    /// RESET ALL
    ResetAll = 5,
}

/// CREATE ROLE/USER/GROUP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleStmtType {
    #[default]
    Role = 0,
    User = 1,
    Group = 2,
}

/// Transaction statement kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStmtKind {
    #[default]
    Begin = 0,
    Start = 1,
    Commit = 2,
    Rollback = 3,
    Savepoint = 4,
    Release = 5,
    RollbackTo = 6,
    Prepare = 7,
    CommitPrepared = 8,
    RollbackPrepared = 9,
}

/// FETCH/MOVE direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchDirection {
    #[default]
    Forward = 0,
    Backward = 1,
    Absolute = 2,
    Relative = 3,
}

/// Special FetchStmt row count meaning "all rows" (LONG_MAX).
pub const FETCH_ALL: i64 = 0x7FFF_FFFF_FFFF_FFFF;

/// IS [NOT] NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullTestType {
    #[default]
    IsNull = 0,
    IsNotNull = 1,
}

/// IS [NOT] TRUE/FALSE/UNKNOWN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolTestType {
    #[default]
    IsTrue = 0,
    IsNotTrue = 1,
    IsFalse = 2,
    IsNotFalse = 3,
    IsUnknown = 4,
    IsNotUnknown = 5,
}

/// GREATEST vs LEAST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinMaxOp {
    #[default]
    Greatest = 0,
    Least = 1,
}

/// Kind of a grouping set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupingSetKind {
    #[default]
    Empty = 0,
    Simple = 1,
    Rollup = 2,
    Cube = 3,
    Sets = 4,
}

/// ON CONFLICT action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnConflictAction {
    #[default]
    None = 0,
    Nothing = 1,
    Update = 2,
}

/// Grant target type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantTargetType {
    /// grant on specific named objects
    #[default]
    Object = 0,
    /// grant on all objects in given schemas
    AllInSchema = 1,
    /// ALTER DEFAULT PRIVILEGES
    Defaults = 2,
}

/// MERGE WHEN clause match kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeMatchKind {
    #[default]
    Matched = 0,
    NotMatchedBySource = 1,
    NotMatchedByTarget = 2,
}

/// Action of ALTER ... OPTIONS items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefElemAction {
    #[default]
    Unspec = 0,
    Set = 1,
    Add = 2,
    Drop = 3,
}

/// SQL-standard value functions without call syntax (CURRENT_DATE etc).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SvfOp {
    #[default]
    CurrentDate = 0,
    CurrentTime = 1,
    CurrentTimeN = 2,
    CurrentTimestamp = 3,
    CurrentTimestampN = 4,
    Localtime = 5,
    LocaltimeN = 6,
    Localtimestamp = 7,
    LocaltimestampN = 8,
    CurrentRole = 9,
    CurrentUser = 10,
    User = 11,
    SessionUser = 12,
    CurrentCatalog = 13,
    CurrentSchema = 14,
}

/// WITH CHECK OPTION on views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCheckOption {
    #[default]
    NoCheckOption = 0,
    LocalCheckOption = 1,
    CascadedCheckOption = 2,
}

/// Function parameter modes. The encoding is the character code PostgreSQL
/// stores in pg_proc.proargmodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionParameterMode {
    #[default]
    In = b'i' as isize,
    Out = b'o' as isize,
    InOut = b'b' as isize,
    Variadic = b'v' as isize,
    Table = b't' as isize,
    Default = b'd' as isize,
}

// Lock mode constants (lockdefs.h).
pub const NO_LOCK: i32 = 0;
pub const ACCESS_SHARE_LOCK: i32 = 1;
pub const ROW_SHARE_LOCK: i32 = 2;
pub const ROW_EXCLUSIVE_LOCK: i32 = 3;
pub const SHARE_UPDATE_EXCLUSIVE_LOCK: i32 = 4;
pub const SHARE_LOCK: i32 = 5;
pub const SHARE_ROW_EXCLUSIVE_LOCK: i32 = 6;
pub const EXCLUSIVE_LOCK: i32 = 7;
pub const ACCESS_EXCLUSIVE_LOCK: i32 = 8;

// Cursor option bits (parsenodes.h).
pub const CURSOR_OPT_BINARY: i32 = 0x0001;
pub const CURSOR_OPT_SCROLL: i32 = 0x0002;
pub const CURSOR_OPT_NO_SCROLL: i32 = 0x0004;
pub const CURSOR_OPT_INSENSITIVE: i32 = 0x0008;
pub const CURSOR_OPT_ASENSITIVE: i32 = 0x0010;
pub const CURSOR_OPT_HOLD: i32 = 0x0020;
pub const CURSOR_OPT_FAST_PLAN: i32 = 0x0100;

// Trigger type bits (trigger.h).
pub const TRIGGER_TYPE_ROW: i16 = 1 << 0;
pub const TRIGGER_TYPE_BEFORE: i16 = 1 << 1;
pub const TRIGGER_TYPE_INSERT: i16 = 1 << 2;
pub const TRIGGER_TYPE_DELETE: i16 = 1 << 3;
pub const TRIGGER_TYPE_UPDATE: i16 = 1 << 4;
pub const TRIGGER_TYPE_TRUNCATE: i16 = 1 << 5;
pub const TRIGGER_TYPE_INSTEAD: i16 = 1 << 6;
/// default: not BEFORE, not INSTEAD
pub const TRIGGER_TYPE_AFTER: i16 = 0;

// ConstraintAttributeSpec bits (gram.y).
pub const CAS_NOT_DEFERRABLE: i32 = 1 << 0;
pub const CAS_DEFERRABLE: i32 = 1 << 1;
pub const CAS_INITIALLY_IMMEDIATE: i32 = 1 << 2;
pub const CAS_INITIALLY_DEFERRED: i32 = 1 << 3;
pub const CAS_NOT_VALID: i32 = 1 << 4;
pub const CAS_NO_INHERIT: i32 = 1 << 5;

// WindowDef frame option bits (parsenodes.h).
pub const FRAMEOPTION_NONDEFAULT: i32 = 0x00001;
pub const FRAMEOPTION_RANGE: i32 = 0x00002;
pub const FRAMEOPTION_ROWS: i32 = 0x00004;
pub const FRAMEOPTION_GROUPS: i32 = 0x00008;
pub const FRAMEOPTION_BETWEEN: i32 = 0x00010;
pub const FRAMEOPTION_START_UNBOUNDED_PRECEDING: i32 = 0x00020;
pub const FRAMEOPTION_END_UNBOUNDED_PRECEDING: i32 = 0x00040;
pub const FRAMEOPTION_START_UNBOUNDED_FOLLOWING: i32 = 0x00080;
pub const FRAMEOPTION_END_UNBOUNDED_FOLLOWING: i32 = 0x00100;
pub const FRAMEOPTION_START_CURRENT_ROW: i32 = 0x00200;
pub const FRAMEOPTION_END_CURRENT_ROW: i32 = 0x00400;
pub const FRAMEOPTION_START_OFFSET_PRECEDING: i32 = 0x00800;
pub const FRAMEOPTION_END_OFFSET_PRECEDING: i32 = 0x01000;
pub const FRAMEOPTION_START_OFFSET_FOLLOWING: i32 = 0x02000;
pub const FRAMEOPTION_END_OFFSET_FOLLOWING: i32 = 0x04000;
pub const FRAMEOPTION_EXCLUDE_CURRENT_ROW: i32 = 0x08000;
pub const FRAMEOPTION_EXCLUDE_GROUP: i32 = 0x10000;
pub const FRAMEOPTION_EXCLUDE_TIES: i32 = 0x20000;

pub const FRAMEOPTION_START_OFFSET: i32 =
    FRAMEOPTION_START_OFFSET_PRECEDING | FRAMEOPTION_START_OFFSET_FOLLOWING;
pub const FRAMEOPTION_END_OFFSET: i32 =
    FRAMEOPTION_END_OFFSET_PRECEDING | FRAMEOPTION_END_OFFSET_FOLLOWING;
pub const FRAMEOPTION_DEFAULTS: i32 =
    FRAMEOPTION_RANGE | FRAMEOPTION_START_UNBOUNDED_PRECEDING | FRAMEOPTION_END_CURRENT_ROW;

// Interval field masks (datetime.h), used in INTERVAL type modifiers.
pub const INTERVAL_MASK_YEAR: i32 = 1 << 2;
pub const INTERVAL_MASK_MONTH: i32 = 1 << 1;
pub const INTERVAL_MASK_DAY: i32 = 1 << 3;
pub const INTERVAL_MASK_HOUR: i32 = 1 << 10;
pub const INTERVAL_MASK_MINUTE: i32 = 1 << 11;
pub const INTERVAL_MASK_SECOND: i32 = 1 << 12;
pub const INTERVAL_FULL_RANGE: i32 = 0x7FFF;

// Relation persistence codes (pg_class.h).
pub const RELPERSISTENCE_PERMANENT: char = 'p';
pub const RELPERSISTENCE_UNLOGGED: char = 'u';
pub const RELPERSISTENCE_TEMP: char = 't';

// Foreign key match types and actions (parsenodes.h).
pub const FKCONSTR_MATCH_FULL: char = 'f';
pub const FKCONSTR_MATCH_PARTIAL: char = 'p';
pub const FKCONSTR_MATCH_SIMPLE: char = 's';

pub const FKCONSTR_ACTION_NOACTION: char = 'a';
pub const FKCONSTR_ACTION_RESTRICT: char = 'r';
pub const FKCONSTR_ACTION_CASCADE: char = 'c';
pub const FKCONSTR_ACTION_SETNULL: char = 'n';
pub const FKCONSTR_ACTION_SETDEFAULT: char = 'd';

// Generated column / identity codes (pg_attribute.h).
pub const ATTRIBUTE_IDENTITY_ALWAYS: char = 'a';
pub const ATTRIBUTE_IDENTITY_BY_DEFAULT: char = 'd';
pub const ATTRIBUTE_GENERATED_STORED: char = 's';
