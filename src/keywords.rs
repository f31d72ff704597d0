//! The SQL keyword table.
//!
//! One entry per keyword PostgreSQL recognizes, with the same category
//! split the backend grammar uses: the category decides where a keyword may
//! still be used as an identifier (column name, type name, function name),
//! which is what makes `SELECT inner.x FROM (...) AS inner` an error while
//! `SELECT abort.x FROM abort` parses fine.
//!
//! The table is a sorted static slice shared by every parse; lookups are
//! binary searches over the lowercased identifier text.

/// Keyword categories, matching PostgreSQL's keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    /// Usable as any identifier
    Unreserved,
    /// Usable as a column/table name but not as a function or type name
    ColName,
    /// Usable as a function or type name but not as a column/table name
    TypeFuncName,
    /// Not usable as an identifier at all (except quoted, or as a label)
    Reserved,
}

/// All recognized SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Abort,
    Absolute,
    Access,
    Action,
    Add,
    Admin,
    After,
    Aggregate,
    All,
    Also,
    Alter,
    Always,
    Analyse,
    Analyze,
    And,
    Any,
    Array,
    As,
    Asc,
    Asensitive,
    Assertion,
    Assignment,
    Asymmetric,
    At,
    Atomic,
    Attach,
    Attribute,
    Authorization,
    Backward,
    Before,
    Begin,
    Between,
    Bigint,
    Binary,
    Bit,
    Boolean,
    Both,
    Breadth,
    By,
    Cache,
    Call,
    Called,
    Cascade,
    Cascaded,
    Case,
    Cast,
    Catalog,
    Chain,
    Char,
    Character,
    Characteristics,
    Check,
    Checkpoint,
    Class,
    Close,
    Cluster,
    Coalesce,
    Collate,
    Collation,
    Column,
    Columns,
    Comment,
    Comments,
    Commit,
    Committed,
    Compression,
    Concurrently,
    Configuration,
    Conflict,
    Connection,
    Constraint,
    Constraints,
    Content,
    Continue,
    Conversion,
    Copy,
    Cost,
    Create,
    Cross,
    Csv,
    Cube,
    Current,
    CurrentCatalog,
    CurrentDate,
    CurrentRole,
    CurrentSchema,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Cursor,
    Cycle,
    Data,
    Database,
    Day,
    Deallocate,
    Dec,
    Decimal,
    Declare,
    Default,
    Defaults,
    Deferrable,
    Deferred,
    Definer,
    Delete,
    Delimiter,
    Delimiters,
    Depends,
    Depth,
    Desc,
    Detach,
    Dictionary,
    Disable,
    Discard,
    Distinct,
    Do,
    Document,
    Domain,
    Double,
    Drop,
    Each,
    Else,
    Enable,
    Encoding,
    Encrypted,
    End,
    Enum,
    Escape,
    Event,
    Except,
    Exclude,
    Excluding,
    Exclusive,
    Execute,
    Exists,
    Explain,
    Expression,
    Extension,
    External,
    Extract,
    False,
    Family,
    Fetch,
    Filter,
    Finalize,
    First,
    Float,
    Following,
    For,
    Force,
    Foreign,
    Format,
    Forward,
    Freeze,
    From,
    Full,
    Function,
    Functions,
    Generated,
    Global,
    Grant,
    Granted,
    Greatest,
    Group,
    Grouping,
    Groups,
    Handler,
    Having,
    Header,
    Hold,
    Hour,
    Identity,
    If,
    Ilike,
    Immediate,
    Immutable,
    Implicit,
    Import,
    In,
    Include,
    Including,
    Increment,
    Indent,
    Index,
    Indexes,
    Inherit,
    Inherits,
    Initially,
    Inline,
    Inner,
    Inout,
    Input,
    Insensitive,
    Insert,
    Instead,
    Int,
    Integer,
    Intersect,
    Interval,
    Into,
    Invoker,
    Is,
    Isnull,
    Isolation,
    Join,
    Key,
    Keys,
    Label,
    Language,
    Large,
    Last,
    Lateral,
    Leading,
    Leakproof,
    Least,
    Left,
    Level,
    Like,
    Limit,
    Listen,
    Load,
    Local,
    Localtime,
    Localtimestamp,
    Location,
    Lock,
    Locked,
    Logged,
    Mapping,
    Match,
    Matched,
    Materialized,
    Maxvalue,
    Merge,
    Method,
    Minute,
    Minvalue,
    Mode,
    Month,
    Move,
    Name,
    Names,
    National,
    Natural,
    Nchar,
    New,
    Next,
    No,
    None,
    Not,
    Nothing,
    Notify,
    Notnull,
    Nowait,
    Null,
    Nullif,
    Nulls,
    Numeric,
    Object,
    Of,
    Off,
    Offset,
    Oids,
    Old,
    On,
    Only,
    Operator,
    Option,
    Options,
    Or,
    Order,
    Ordinality,
    Others,
    Out,
    Outer,
    Over,
    Overlay,
    Overriding,
    Owned,
    Owner,
    Parallel,
    Parser,
    Partial,
    Partition,
    Password,
    Placing,
    Plans,
    Policy,
    Position,
    Preceding,
    Precision,
    Prepare,
    Prepared,
    Preserve,
    Primary,
    Prior,
    Privileges,
    Procedural,
    Procedure,
    Procedures,
    Program,
    Publication,
    Quote,
    Range,
    Read,
    Real,
    Reassign,
    Recursive,
    Ref,
    References,
    Referencing,
    Refresh,
    Reindex,
    Relative,
    Release,
    Rename,
    Repeatable,
    Replace,
    Replica,
    Reset,
    Restart,
    Restrict,
    Return,
    Returning,
    Returns,
    Revoke,
    Right,
    Role,
    Rollback,
    Rollup,
    Routine,
    Routines,
    Row,
    Rows,
    Rule,
    Savepoint,
    Schema,
    Schemas,
    Scroll,
    Search,
    Second,
    Security,
    Select,
    Sequence,
    Sequences,
    Serializable,
    Server,
    Session,
    SessionUser,
    Set,
    Setof,
    Sets,
    Share,
    Show,
    Similar,
    Simple,
    Skip,
    Smallint,
    Snapshot,
    Some,
    Source,
    Sql,
    Stable,
    Start,
    Statement,
    Statistics,
    Stdin,
    Stdout,
    Storage,
    Stored,
    Strict,
    Subscription,
    Substring,
    Support,
    Symmetric,
    Sysid,
    System,
    SystemUser,
    Table,
    Tables,
    Tablespace,
    Target,
    Temp,
    Template,
    Temporary,
    Text,
    Then,
    Ties,
    Time,
    Timestamp,
    To,
    Trailing,
    Transaction,
    Trigger,
    Trim,
    True,
    Truncate,
    Trusted,
    Type,
    Types,
    Unbounded,
    Uncommitted,
    Unencrypted,
    Union,
    Unique,
    Unknown,
    Unlisten,
    Unlogged,
    Until,
    Update,
    User,
    Using,
    Vacuum,
    Valid,
    Validate,
    Validator,
    Value,
    Values,
    Varchar,
    Variadic,
    Varying,
    Verbose,
    Version,
    View,
    Views,
    Volatile,
    When,
    Where,
    Window,
    With,
    Within,
    Without,
    Work,
    Wrapper,
    Write,
    Year,
    Yes,
    Zone,
}

impl Keyword {
    /// Looks up a lowercased identifier in the keyword table.
    pub fn lookup(ident: &str) -> Option<Keyword> {
        KEYWORDS
            .binary_search_by(|entry| entry.0.cmp(ident))
            .ok()
            .map(|idx| KEYWORDS[idx].1)
    }

    /// The grammar category of this keyword.
    pub fn category(self) -> KeywordCategory {
        use Keyword::*;
        match self {
            All | Analyse | Analyze | And | Any | Array | As | Asc | Asymmetric | Both | Case
            | Cast | Check | Collate | Column | Constraint | Create | CurrentCatalog
            | CurrentDate | CurrentRole | CurrentTime | CurrentTimestamp | CurrentUser
            | Default | Deferrable | Desc | Distinct | Do | Else | End | Except | Fetch | False
            | For | Foreign | From | Grant | Group | Having | In | Initially | Intersect
            | Into | Lateral | Leading | Limit | Localtime | Localtimestamp | Not | Null
            | Offset | On | Only | Or | Order | Placing | Primary | References | Returning
            | Select | SessionUser | Some | Symmetric | SystemUser | Table | Then | To
            | Trailing | True | Union | Unique | User | Using | Variadic | When | Where
            | Window | With => KeywordCategory::Reserved,
            Authorization | Binary | Collation | Concurrently | Cross | CurrentSchema
            | Freeze | Full | Ilike | Inner | Is | Isnull | Join | Left | Like | Natural
            | Notnull | Outer | Right | Similar | Verbose => KeywordCategory::TypeFuncName,
            Between | Bigint | Bit | Boolean | Char | Character | Coalesce | Dec | Decimal
            | Exists | Extract | Float | Greatest | Grouping | Inout | Int | Integer
            | Interval | Least | National | Nchar | None | Nullif | Numeric | Out | Overlay
            | Position | Precision | Real | Row | Setof | Smallint | Substring | Time
            | Timestamp | Trim | Values | Varchar => KeywordCategory::ColName,
            _ => KeywordCategory::Unreserved,
        }
    }
}

/// The keyword table, sorted by spelling for binary search.
static KEYWORDS: &[(&str, Keyword)] = &[
    ("abort", Keyword::Abort),
    ("absolute", Keyword::Absolute),
    ("access", Keyword::Access),
    ("action", Keyword::Action),
    ("add", Keyword::Add),
    ("admin", Keyword::Admin),
    ("after", Keyword::After),
    ("aggregate", Keyword::Aggregate),
    ("all", Keyword::All),
    ("also", Keyword::Also),
    ("alter", Keyword::Alter),
    ("always", Keyword::Always),
    ("analyse", Keyword::Analyse),
    ("analyze", Keyword::Analyze),
    ("and", Keyword::And),
    ("any", Keyword::Any),
    ("array", Keyword::Array),
    ("as", Keyword::As),
    ("asc", Keyword::Asc),
    ("asensitive", Keyword::Asensitive),
    ("assertion", Keyword::Assertion),
    ("assignment", Keyword::Assignment),
    ("asymmetric", Keyword::Asymmetric),
    ("at", Keyword::At),
    ("atomic", Keyword::Atomic),
    ("attach", Keyword::Attach),
    ("attribute", Keyword::Attribute),
    ("authorization", Keyword::Authorization),
    ("backward", Keyword::Backward),
    ("before", Keyword::Before),
    ("begin", Keyword::Begin),
    ("between", Keyword::Between),
    ("bigint", Keyword::Bigint),
    ("binary", Keyword::Binary),
    ("bit", Keyword::Bit),
    ("boolean", Keyword::Boolean),
    ("both", Keyword::Both),
    ("breadth", Keyword::Breadth),
    ("by", Keyword::By),
    ("cache", Keyword::Cache),
    ("call", Keyword::Call),
    ("called", Keyword::Called),
    ("cascade", Keyword::Cascade),
    ("cascaded", Keyword::Cascaded),
    ("case", Keyword::Case),
    ("cast", Keyword::Cast),
    ("catalog", Keyword::Catalog),
    ("chain", Keyword::Chain),
    ("char", Keyword::Char),
    ("character", Keyword::Character),
    ("characteristics", Keyword::Characteristics),
    ("check", Keyword::Check),
    ("checkpoint", Keyword::Checkpoint),
    ("class", Keyword::Class),
    ("close", Keyword::Close),
    ("cluster", Keyword::Cluster),
    ("coalesce", Keyword::Coalesce),
    ("collate", Keyword::Collate),
    ("collation", Keyword::Collation),
    ("column", Keyword::Column),
    ("columns", Keyword::Columns),
    ("comment", Keyword::Comment),
    ("comments", Keyword::Comments),
    ("commit", Keyword::Commit),
    ("committed", Keyword::Committed),
    ("compression", Keyword::Compression),
    ("concurrently", Keyword::Concurrently),
    ("configuration", Keyword::Configuration),
    ("conflict", Keyword::Conflict),
    ("connection", Keyword::Connection),
    ("constraint", Keyword::Constraint),
    ("constraints", Keyword::Constraints),
    ("content", Keyword::Content),
    ("continue", Keyword::Continue),
    ("conversion", Keyword::Conversion),
    ("copy", Keyword::Copy),
    ("cost", Keyword::Cost),
    ("create", Keyword::Create),
    ("cross", Keyword::Cross),
    ("csv", Keyword::Csv),
    ("cube", Keyword::Cube),
    ("current", Keyword::Current),
    ("current_catalog", Keyword::CurrentCatalog),
    ("current_date", Keyword::CurrentDate),
    ("current_role", Keyword::CurrentRole),
    ("current_schema", Keyword::CurrentSchema),
    ("current_time", Keyword::CurrentTime),
    ("current_timestamp", Keyword::CurrentTimestamp),
    ("current_user", Keyword::CurrentUser),
    ("cursor", Keyword::Cursor),
    ("cycle", Keyword::Cycle),
    ("data", Keyword::Data),
    ("database", Keyword::Database),
    ("day", Keyword::Day),
    ("deallocate", Keyword::Deallocate),
    ("dec", Keyword::Dec),
    ("decimal", Keyword::Decimal),
    ("declare", Keyword::Declare),
    ("default", Keyword::Default),
    ("defaults", Keyword::Defaults),
    ("deferrable", Keyword::Deferrable),
    ("deferred", Keyword::Deferred),
    ("definer", Keyword::Definer),
    ("delete", Keyword::Delete),
    ("delimiter", Keyword::Delimiter),
    ("delimiters", Keyword::Delimiters),
    ("depends", Keyword::Depends),
    ("depth", Keyword::Depth),
    ("desc", Keyword::Desc),
    ("detach", Keyword::Detach),
    ("dictionary", Keyword::Dictionary),
    ("disable", Keyword::Disable),
    ("discard", Keyword::Discard),
    ("distinct", Keyword::Distinct),
    ("do", Keyword::Do),
    ("document", Keyword::Document),
    ("domain", Keyword::Domain),
    ("double", Keyword::Double),
    ("drop", Keyword::Drop),
    ("each", Keyword::Each),
    ("else", Keyword::Else),
    ("enable", Keyword::Enable),
    ("encoding", Keyword::Encoding),
    ("encrypted", Keyword::Encrypted),
    ("end", Keyword::End),
    ("enum", Keyword::Enum),
    ("escape", Keyword::Escape),
    ("event", Keyword::Event),
    ("except", Keyword::Except),
    ("exclude", Keyword::Exclude),
    ("excluding", Keyword::Excluding),
    ("exclusive", Keyword::Exclusive),
    ("execute", Keyword::Execute),
    ("exists", Keyword::Exists),
    ("explain", Keyword::Explain),
    ("expression", Keyword::Expression),
    ("extension", Keyword::Extension),
    ("external", Keyword::External),
    ("extract", Keyword::Extract),
    ("false", Keyword::False),
    ("family", Keyword::Family),
    ("fetch", Keyword::Fetch),
    ("filter", Keyword::Filter),
    ("finalize", Keyword::Finalize),
    ("first", Keyword::First),
    ("float", Keyword::Float),
    ("following", Keyword::Following),
    ("for", Keyword::For),
    ("force", Keyword::Force),
    ("foreign", Keyword::Foreign),
    ("format", Keyword::Format),
    ("forward", Keyword::Forward),
    ("freeze", Keyword::Freeze),
    ("from", Keyword::From),
    ("full", Keyword::Full),
    ("function", Keyword::Function),
    ("functions", Keyword::Functions),
    ("generated", Keyword::Generated),
    ("global", Keyword::Global),
    ("grant", Keyword::Grant),
    ("granted", Keyword::Granted),
    ("greatest", Keyword::Greatest),
    ("group", Keyword::Group),
    ("grouping", Keyword::Grouping),
    ("groups", Keyword::Groups),
    ("handler", Keyword::Handler),
    ("having", Keyword::Having),
    ("header", Keyword::Header),
    ("hold", Keyword::Hold),
    ("hour", Keyword::Hour),
    ("identity", Keyword::Identity),
    ("if", Keyword::If),
    ("ilike", Keyword::Ilike),
    ("immediate", Keyword::Immediate),
    ("immutable", Keyword::Immutable),
    ("implicit", Keyword::Implicit),
    ("import", Keyword::Import),
    ("in", Keyword::In),
    ("include", Keyword::Include),
    ("including", Keyword::Including),
    ("increment", Keyword::Increment),
    ("indent", Keyword::Indent),
    ("index", Keyword::Index),
    ("indexes", Keyword::Indexes),
    ("inherit", Keyword::Inherit),
    ("inherits", Keyword::Inherits),
    ("initially", Keyword::Initially),
    ("inline", Keyword::Inline),
    ("inner", Keyword::Inner),
    ("inout", Keyword::Inout),
    ("input", Keyword::Input),
    ("insensitive", Keyword::Insensitive),
    ("insert", Keyword::Insert),
    ("instead", Keyword::Instead),
    ("int", Keyword::Int),
    ("integer", Keyword::Integer),
    ("intersect", Keyword::Intersect),
    ("interval", Keyword::Interval),
    ("into", Keyword::Into),
    ("invoker", Keyword::Invoker),
    ("is", Keyword::Is),
    ("isnull", Keyword::Isnull),
    ("isolation", Keyword::Isolation),
    ("join", Keyword::Join),
    ("key", Keyword::Key),
    ("keys", Keyword::Keys),
    ("label", Keyword::Label),
    ("language", Keyword::Language),
    ("large", Keyword::Large),
    ("last", Keyword::Last),
    ("lateral", Keyword::Lateral),
    ("leading", Keyword::Leading),
    ("leakproof", Keyword::Leakproof),
    ("least", Keyword::Least),
    ("left", Keyword::Left),
    ("level", Keyword::Level),
    ("like", Keyword::Like),
    ("limit", Keyword::Limit),
    ("listen", Keyword::Listen),
    ("load", Keyword::Load),
    ("local", Keyword::Local),
    ("localtime", Keyword::Localtime),
    ("localtimestamp", Keyword::Localtimestamp),
    ("location", Keyword::Location),
    ("lock", Keyword::Lock),
    ("locked", Keyword::Locked),
    ("logged", Keyword::Logged),
    ("mapping", Keyword::Mapping),
    ("match", Keyword::Match),
    ("matched", Keyword::Matched),
    ("materialized", Keyword::Materialized),
    ("maxvalue", Keyword::Maxvalue),
    ("merge", Keyword::Merge),
    ("method", Keyword::Method),
    ("minute", Keyword::Minute),
    ("minvalue", Keyword::Minvalue),
    ("mode", Keyword::Mode),
    ("month", Keyword::Month),
    ("move", Keyword::Move),
    ("name", Keyword::Name),
    ("names", Keyword::Names),
    ("national", Keyword::National),
    ("natural", Keyword::Natural),
    ("nchar", Keyword::Nchar),
    ("new", Keyword::New),
    ("next", Keyword::Next),
    ("no", Keyword::No),
    ("none", Keyword::None),
    ("not", Keyword::Not),
    ("nothing", Keyword::Nothing),
    ("notify", Keyword::Notify),
    ("notnull", Keyword::Notnull),
    ("nowait", Keyword::Nowait),
    ("null", Keyword::Null),
    ("nullif", Keyword::Nullif),
    ("nulls", Keyword::Nulls),
    ("numeric", Keyword::Numeric),
    ("object", Keyword::Object),
    ("of", Keyword::Of),
    ("off", Keyword::Off),
    ("offset", Keyword::Offset),
    ("oids", Keyword::Oids),
    ("old", Keyword::Old),
    ("on", Keyword::On),
    ("only", Keyword::Only),
    ("operator", Keyword::Operator),
    ("option", Keyword::Option),
    ("options", Keyword::Options),
    ("or", Keyword::Or),
    ("order", Keyword::Order),
    ("ordinality", Keyword::Ordinality),
    ("others", Keyword::Others),
    ("out", Keyword::Out),
    ("outer", Keyword::Outer),
    ("over", Keyword::Over),
    ("overlay", Keyword::Overlay),
    ("overriding", Keyword::Overriding),
    ("owned", Keyword::Owned),
    ("owner", Keyword::Owner),
    ("parallel", Keyword::Parallel),
    ("parser", Keyword::Parser),
    ("partial", Keyword::Partial),
    ("partition", Keyword::Partition),
    ("password", Keyword::Password),
    ("placing", Keyword::Placing),
    ("plans", Keyword::Plans),
    ("policy", Keyword::Policy),
    ("position", Keyword::Position),
    ("preceding", Keyword::Preceding),
    ("precision", Keyword::Precision),
    ("prepare", Keyword::Prepare),
    ("prepared", Keyword::Prepared),
    ("preserve", Keyword::Preserve),
    ("primary", Keyword::Primary),
    ("prior", Keyword::Prior),
    ("privileges", Keyword::Privileges),
    ("procedural", Keyword::Procedural),
    ("procedure", Keyword::Procedure),
    ("procedures", Keyword::Procedures),
    ("program", Keyword::Program),
    ("publication", Keyword::Publication),
    ("quote", Keyword::Quote),
    ("range", Keyword::Range),
    ("read", Keyword::Read),
    ("real", Keyword::Real),
    ("reassign", Keyword::Reassign),
    ("recursive", Keyword::Recursive),
    ("ref", Keyword::Ref),
    ("references", Keyword::References),
    ("referencing", Keyword::Referencing),
    ("refresh", Keyword::Refresh),
    ("reindex", Keyword::Reindex),
    ("relative", Keyword::Relative),
    ("release", Keyword::Release),
    ("rename", Keyword::Rename),
    ("repeatable", Keyword::Repeatable),
    ("replace", Keyword::Replace),
    ("replica", Keyword::Replica),
    ("reset", Keyword::Reset),
    ("restart", Keyword::Restart),
    ("restrict", Keyword::Restrict),
    ("return", Keyword::Return),
    ("returning", Keyword::Returning),
    ("returns", Keyword::Returns),
    ("revoke", Keyword::Revoke),
    ("right", Keyword::Right),
    ("role", Keyword::Role),
    ("rollback", Keyword::Rollback),
    ("rollup", Keyword::Rollup),
    ("routine", Keyword::Routine),
    ("routines", Keyword::Routines),
    ("row", Keyword::Row),
    ("rows", Keyword::Rows),
    ("rule", Keyword::Rule),
    ("savepoint", Keyword::Savepoint),
    ("schema", Keyword::Schema),
    ("schemas", Keyword::Schemas),
    ("scroll", Keyword::Scroll),
    ("search", Keyword::Search),
    ("second", Keyword::Second),
    ("security", Keyword::Security),
    ("select", Keyword::Select),
    ("sequence", Keyword::Sequence),
    ("sequences", Keyword::Sequences),
    ("serializable", Keyword::Serializable),
    ("server", Keyword::Server),
    ("session", Keyword::Session),
    ("session_user", Keyword::SessionUser),
    ("set", Keyword::Set),
    ("setof", Keyword::Setof),
    ("sets", Keyword::Sets),
    ("share", Keyword::Share),
    ("show", Keyword::Show),
    ("similar", Keyword::Similar),
    ("simple", Keyword::Simple),
    ("skip", Keyword::Skip),
    ("smallint", Keyword::Smallint),
    ("snapshot", Keyword::Snapshot),
    ("some", Keyword::Some),
    ("source", Keyword::Source),
    ("sql", Keyword::Sql),
    ("stable", Keyword::Stable),
    ("start", Keyword::Start),
    ("statement", Keyword::Statement),
    ("statistics", Keyword::Statistics),
    ("stdin", Keyword::Stdin),
    ("stdout", Keyword::Stdout),
    ("storage", Keyword::Storage),
    ("stored", Keyword::Stored),
    ("strict", Keyword::Strict),
    ("subscription", Keyword::Subscription),
    ("substring", Keyword::Substring),
    ("support", Keyword::Support),
    ("symmetric", Keyword::Symmetric),
    ("sysid", Keyword::Sysid),
    ("system", Keyword::System),
    ("system_user", Keyword::SystemUser),
    ("table", Keyword::Table),
    ("tables", Keyword::Tables),
    ("tablespace", Keyword::Tablespace),
    ("target", Keyword::Target),
    ("temp", Keyword::Temp),
    ("template", Keyword::Template),
    ("temporary", Keyword::Temporary),
    ("text", Keyword::Text),
    ("then", Keyword::Then),
    ("ties", Keyword::Ties),
    ("time", Keyword::Time),
    ("timestamp", Keyword::Timestamp),
    ("to", Keyword::To),
    ("trailing", Keyword::Trailing),
    ("transaction", Keyword::Transaction),
    ("trigger", Keyword::Trigger),
    ("trim", Keyword::Trim),
    ("true", Keyword::True),
    ("truncate", Keyword::Truncate),
    ("trusted", Keyword::Trusted),
    ("type", Keyword::Type),
    ("types", Keyword::Types),
    ("unbounded", Keyword::Unbounded),
    ("uncommitted", Keyword::Uncommitted),
    ("unencrypted", Keyword::Unencrypted),
    ("union", Keyword::Union),
    ("unique", Keyword::Unique),
    ("unknown", Keyword::Unknown),
    ("unlisten", Keyword::Unlisten),
    ("unlogged", Keyword::Unlogged),
    ("until", Keyword::Until),
    ("update", Keyword::Update),
    ("user", Keyword::User),
    ("using", Keyword::Using),
    ("vacuum", Keyword::Vacuum),
    ("valid", Keyword::Valid),
    ("validate", Keyword::Validate),
    ("validator", Keyword::Validator),
    ("value", Keyword::Value),
    ("values", Keyword::Values),
    ("varchar", Keyword::Varchar),
    ("variadic", Keyword::Variadic),
    ("varying", Keyword::Varying),
    ("verbose", Keyword::Verbose),
    ("version", Keyword::Version),
    ("view", Keyword::View),
    ("views", Keyword::Views),
    ("volatile", Keyword::Volatile),
    ("when", Keyword::When),
    ("where", Keyword::Where),
    ("window", Keyword::Window),
    ("with", Keyword::With),
    ("within", Keyword::Within),
    ("without", Keyword::Without),
    ("work", Keyword::Work),
    ("wrapper", Keyword::Wrapper),
    ("write", Keyword::Write),
    ("year", Keyword::Year),
    ("yes", Keyword::Yes),
    ("zone", Keyword::Zone),
];
