//! DDL grammar: the CREATE / ALTER / DROP family, COMMENT and TRUNCATE.

use super::*;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn parse_create_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Create)?;

        let mut replace = false;
        if self.at_kw(Keyword::Or) {
            self.advance()?;
            self.expect_kw(Keyword::Replace)?;
            replace = true;
        }

        let mut persistence = RELPERSISTENCE_PERMANENT;
        if matches!(self.cur_keyword(), Some(Keyword::Global | Keyword::Local)) {
            self.advance()?;
            persistence = RELPERSISTENCE_TEMP;
            if !self.accept_kw(Keyword::Temporary)? {
                self.expect_kw(Keyword::Temp)?;
            }
        } else if matches!(self.cur_keyword(), Some(Keyword::Temporary | Keyword::Temp)) {
            self.advance()?;
            persistence = RELPERSISTENCE_TEMP;
        } else if self.at_kw(Keyword::Unlogged) {
            self.advance()?;
            persistence = RELPERSISTENCE_UNLOGGED;
        }

        match self.cur_keyword() {
            Some(Keyword::Table) => self.parse_create_table(persistence),
            Some(Keyword::Sequence) => self.parse_create_sequence(persistence),
            Some(Keyword::View) => self.parse_create_view(replace, persistence),
            Some(Keyword::Materialized) => {
                self.advance()?;
                self.parse_create_matview()
            }
            Some(Keyword::Unique) => {
                self.advance()?;
                self.parse_create_index(true)
            }
            Some(Keyword::Index) => self.parse_create_index(false),
            Some(Keyword::Function) => self.parse_create_function(replace, false),
            Some(Keyword::Procedure) => self.parse_create_function(replace, true),
            Some(Keyword::Schema) => self.parse_create_schema(),
            Some(Keyword::Domain) => self.parse_create_domain(),
            Some(Keyword::Rule) => self.parse_create_rule(replace),
            Some(Keyword::Trigger) => self.parse_create_trigger(replace, false),
            Some(Keyword::Constraint) => {
                self.advance()?;
                self.parse_create_trigger(replace, true)
            }
            Some(Keyword::Role) => self.parse_create_role(RoleStmtType::Role),
            Some(Keyword::User) => self.parse_create_role(RoleStmtType::User),
            Some(Keyword::Group) => self.parse_create_role(RoleStmtType::Group),
            Some(Keyword::Database) => self.parse_createdb(),
            Some(Keyword::Extension) => self.parse_create_extension(),
            Some(Keyword::Type) => self.parse_create_type(),
            _ => self.syntax_error(),
        }
    }

    fn accept_if_not_exists(&mut self) -> Result<bool> {
        if self.at_kw(Keyword::If) {
            self.advance()?;
            self.expect_kw(Keyword::Not)?;
            self.expect_kw(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn accept_if_exists(&mut self) -> Result<bool> {
        if self.at_kw(Keyword::If) {
            self.advance()?;
            self.expect_kw(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(super) fn opt_drop_behavior(&mut self) -> Result<DropBehavior> {
        if self.accept_kw(Keyword::Cascade)? {
            return Ok(DropBehavior::Cascade);
        }
        let _ = self.accept_kw(Keyword::Restrict)?;
        Ok(DropBehavior::Restrict)
    }

    // -----------------------------------------------------------------------
    // CREATE TABLE

    fn parse_create_table(&mut self, persistence: char) -> Result<Node> {
        self.expect_kw(Keyword::Table)?;
        let if_not_exists = self.accept_if_not_exists()?;
        let mut rel = self.qualified_name()?;
        rel.relpersistence = persistence;

        // CREATE TABLE name AS query
        if self.at_kw(Keyword::As) {
            return self.parse_create_table_as(rel, None, if_not_exists);
        }

        let mut of_typename = None;
        let table_elts;
        if self.accept_kw(Keyword::Of)? {
            of_typename = Some(Box::new(self.parse_typename()?));
            if self.accept(TokenKind::LParen)? {
                if self.kind() != TokenKind::RParen {
                    table_elts = Some(self.table_elt_list()?);
                } else {
                    table_elts = Some(Vec::new());
                }
                self.expect(TokenKind::RParen)?;
            } else {
                table_elts = None;
            }
        } else {
            self.expect(TokenKind::LParen)?;
            if self.kind() == TokenKind::RParen {
                self.advance()?;
                table_elts = Some(Vec::new());
            } else {
                // the list is either column definitions, or the target
                // column names of CREATE TABLE ... AS when a bare name list
                // is followed by AS
                match self.table_elts_or_name_list()? {
                    TableEltsOrNames::Elts(elts) => {
                        self.expect(TokenKind::RParen)?;
                        table_elts = Some(elts);
                    }
                    TableEltsOrNames::Names(names) => {
                        self.expect(TokenKind::RParen)?;
                        return self.parse_create_table_as(rel, Some(names), if_not_exists);
                    }
                }
            }
        }
        let mut stmt = CreateStmt {
            relation: Some(Box::new(rel)),
            table_elts,
            of_typename,
            if_not_exists,
            ..Default::default()
        };

        if self.accept_kw(Keyword::Inherits)? {
            self.expect(TokenKind::LParen)?;
            stmt.inh_relations = Some(self.qualified_name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::Partition) {
            self.advance()?;
            self.expect_kw(Keyword::By)?;
            stmt.partspec = Some(Box::new(self.parse_partition_spec()?));
        }
        if self.accept_kw(Keyword::Using)? {
            stmt.access_method = self.col_id()?;
        }
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            stmt.options = Some(self.rel_option_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::On) {
            self.advance()?;
            self.expect_kw(Keyword::Commit)?;
            stmt.oncommit = if self.accept_kw(Keyword::Drop)? {
                OnCommitAction::Drop
            } else if self.accept_kw(Keyword::Delete)? {
                self.expect_kw(Keyword::Rows)?;
                OnCommitAction::DeleteRows
            } else {
                self.expect_kw(Keyword::Preserve)?;
                self.expect_kw(Keyword::Rows)?;
                OnCommitAction::PreserveRows
            };
        }
        if self.accept_kw(Keyword::Tablespace)? {
            stmt.tablespacename = self.col_id()?;
        }
        Ok(Node::CreateStmt(Box::new(stmt)))
    }

    /// Disambiguates the parenthesized list after CREATE TABLE name: a
    /// column definition always carries a type after its name, while a bare
    /// name followed by ',' or ')' means the list is CREATE TABLE AS target
    /// column names.
    fn table_elts_or_name_list(&mut self) -> Result<TableEltsOrNames> {
        if matches!(
            self.cur_keyword(),
            Some(
                Keyword::Like
                    | Keyword::Constraint
                    | Keyword::Check
                    | Keyword::Unique
                    | Keyword::Primary
                    | Keyword::Foreign
            )
        ) {
            return Ok(TableEltsOrNames::Elts(self.table_elt_list()?));
        }
        let name_loc = self.loc();
        let first_name = self.col_id()?;
        if matches!(self.kind(), TokenKind::Comma | TokenKind::RParen) {
            let mut names = vec![make_string(first_name)];
            while self.accept(TokenKind::Comma)? {
                names.push(make_string(self.col_id()?));
            }
            return Ok(TableEltsOrNames::Names(names));
        }
        let mut elts = vec![self.column_def_rest(first_name, name_loc)?];
        while self.accept(TokenKind::Comma)? {
            elts.push(self.table_elt()?);
        }
        Ok(TableEltsOrNames::Elts(elts))
    }

    fn parse_create_table_as(
        &mut self,
        rel: RangeVar,
        col_names: Option<Vec<Node>>,
        if_not_exists: bool,
    ) -> Result<Node> {
        self.expect_kw(Keyword::As)?;
        let query = self.parse_preparable_stmt()?;
        let mut into = IntoClause { rel: Some(Box::new(rel)), col_names, ..Default::default() };
        if self.at_kw(Keyword::With) {
            self.advance()?;
            if self.accept_kw(Keyword::No)? {
                self.expect_kw(Keyword::Data)?;
                into.skip_data = true;
            } else {
                self.expect_kw(Keyword::Data)?;
            }
        }
        Ok(Node::CreateTableAsStmt(Box::new(CreateTableAsStmt {
            query: Some(query),
            into: Some(Box::new(into)),
            objtype: ObjectType::Table,
            is_select_into: false,
            if_not_exists,
        })))
    }

    fn table_elt_list(&mut self) -> Result<Vec<Node>> {
        let mut elts = vec![self.table_elt()?];
        while self.accept(TokenKind::Comma)? {
            elts.push(self.table_elt()?);
        }
        Ok(elts)
    }

    fn table_elt(&mut self) -> Result<Node> {
        match self.cur_keyword() {
            Some(Keyword::Like) => {
                let loc = self.loc();
                self.advance()?;
                let _ = loc;
                let rel = self.qualified_name()?;
                let mut options = 0u32;
                loop {
                    let including = if self.accept_kw(Keyword::Including)? {
                        true
                    } else if self.accept_kw(Keyword::Excluding)? {
                        false
                    } else {
                        break;
                    };
                    let bit = match self.cur_keyword() {
                        Some(Keyword::Comments) => CREATE_TABLE_LIKE_COMMENTS,
                        Some(Keyword::Compression) => CREATE_TABLE_LIKE_COMPRESSION,
                        Some(Keyword::Constraints) => CREATE_TABLE_LIKE_CONSTRAINTS,
                        Some(Keyword::Defaults) => CREATE_TABLE_LIKE_DEFAULTS,
                        Some(Keyword::Generated) => CREATE_TABLE_LIKE_GENERATED,
                        Some(Keyword::Identity) => CREATE_TABLE_LIKE_IDENTITY,
                        Some(Keyword::Indexes) => CREATE_TABLE_LIKE_INDEXES,
                        Some(Keyword::Statistics) => CREATE_TABLE_LIKE_STATISTICS,
                        Some(Keyword::Storage) => CREATE_TABLE_LIKE_STORAGE,
                        Some(Keyword::All) => CREATE_TABLE_LIKE_ALL,
                        _ => return self.syntax_error(),
                    };
                    self.advance()?;
                    if including {
                        options |= bit;
                    } else {
                        options &= !bit;
                    }
                }
                Ok(Node::TableLikeClause(Box::new(TableLikeClause {
                    relation: Some(Box::new(rel)),
                    options,
                })))
            }
            Some(
                Keyword::Constraint
                | Keyword::Check
                | Keyword::Unique
                | Keyword::Primary
                | Keyword::Foreign,
            ) => self.table_constraint(),
            _ => self.column_def(),
        }
    }

    fn column_def(&mut self) -> Result<Node> {
        let loc = self.loc();
        let colname = self.col_id()?;
        self.column_def_rest(colname, loc)
    }

    fn column_def_rest(&mut self, colname: String, loc: ParseLoc) -> Result<Node> {
        let tn = self.parse_typename()?;
        let mut col = ColumnDef {
            colname,
            type_name: Some(Box::new(tn)),
            location: loc,
            ..Default::default()
        };
        let mut constraints = Vec::new();
        loop {
            if self.at_kw(Keyword::Collate) {
                let coll_loc = self.loc();
                self.advance()?;
                col.coll_clause = Some(Box::new(CollateClause {
                    arg: None,
                    collname: Some(self.any_name()?),
                    location: coll_loc,
                }));
                continue;
            }
            match self.column_constraint()? {
                Some(constraint) => constraints.push(constraint),
                None => break,
            }
        }
        if !constraints.is_empty() {
            col.constraints = Some(constraints);
        }
        Ok(Node::ColumnDef(Box::new(col)))
    }

    fn column_constraint(&mut self) -> Result<Option<Node>> {
        let mut conname = String::new();
        let mut con_loc = self.loc();
        if self.at_kw(Keyword::Constraint) {
            self.advance()?;
            conname = self.col_id()?;
        } else {
            con_loc = self.loc();
        }

        let constraint = match self.cur_keyword() {
            Some(Keyword::Not) => {
                self.advance()?;
                if self.accept_kw(Keyword::Null)? {
                    Constraint { contype: ConstrType::NotNull, location: con_loc, ..Default::default() }
                } else if self.accept_kw(Keyword::Deferrable)? {
                    Constraint {
                        contype: ConstrType::AttrNotDeferrable,
                        location: con_loc,
                        ..Default::default()
                    }
                } else {
                    return self.syntax_error();
                }
            }
            Some(Keyword::Null) => {
                self.advance()?;
                Constraint { contype: ConstrType::Null, location: con_loc, ..Default::default() }
            }
            Some(Keyword::Unique) => {
                self.advance()?;
                let nulls_not_distinct = self.accept_unique_nulls_treatment()?;
                Constraint {
                    contype: ConstrType::Unique,
                    nulls_not_distinct,
                    location: con_loc,
                    ..Default::default()
                }
            }
            Some(Keyword::Primary) => {
                self.advance()?;
                self.expect_kw(Keyword::Key)?;
                Constraint { contype: ConstrType::Primary, location: con_loc, ..Default::default() }
            }
            Some(Keyword::Check) => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let expr = self.parse_a_expr()?;
                self.expect(TokenKind::RParen)?;
                let mut c = Constraint {
                    contype: ConstrType::Check,
                    raw_expr: Some(expr),
                    location: con_loc,
                    ..Default::default()
                };
                if self.at_kw(Keyword::No) {
                    self.advance()?;
                    self.expect_kw(Keyword::Inherit)?;
                    c.is_no_inherit = true;
                }
                c
            }
            Some(Keyword::Default) => {
                self.advance()?;
                let expr = self.parse_b_expr()?;
                Constraint {
                    contype: ConstrType::Default,
                    raw_expr: Some(expr),
                    location: con_loc,
                    ..Default::default()
                }
            }
            Some(Keyword::References) => {
                self.advance()?;
                let mut c = self.references_spec(con_loc)?;
                c.contype = ConstrType::Foreign;
                c
            }
            Some(Keyword::Generated) => {
                self.advance()?;
                let generated_when = if self.accept_kw(Keyword::Always)? {
                    ATTRIBUTE_IDENTITY_ALWAYS
                } else {
                    self.expect_kw(Keyword::By)?;
                    self.expect_kw(Keyword::Default)?;
                    ATTRIBUTE_IDENTITY_BY_DEFAULT
                };
                self.expect_kw(Keyword::As)?;
                if self.accept_kw(Keyword::Identity)? {
                    let mut c = Constraint {
                        contype: ConstrType::Identity,
                        generated_when,
                        location: con_loc,
                        ..Default::default()
                    };
                    if self.accept(TokenKind::LParen)? {
                        c.options = Some(self.seq_opt_list()?);
                        self.expect(TokenKind::RParen)?;
                    }
                    c
                } else {
                    self.expect(TokenKind::LParen)?;
                    let expr = self.parse_a_expr()?;
                    self.expect(TokenKind::RParen)?;
                    self.expect_kw(Keyword::Stored)?;
                    Constraint {
                        contype: ConstrType::Generated,
                        generated_when,
                        raw_expr: Some(expr),
                        location: con_loc,
                        ..Default::default()
                    }
                }
            }
            Some(Keyword::Deferrable) => {
                self.advance()?;
                Constraint {
                    contype: ConstrType::AttrDeferrable,
                    location: con_loc,
                    ..Default::default()
                }
            }
            Some(Keyword::Initially) => {
                self.advance()?;
                let contype = if self.accept_kw(Keyword::Deferred)? {
                    ConstrType::AttrDeferred
                } else {
                    self.expect_kw(Keyword::Immediate)?;
                    ConstrType::AttrImmediate
                };
                Constraint { contype, location: con_loc, ..Default::default() }
            }
            _ => {
                if !conname.is_empty() {
                    return self.syntax_error();
                }
                return Ok(None);
            }
        };
        let mut constraint = constraint;
        constraint.conname = conname;
        Ok(Some(Node::Constraint(Box::new(constraint))))
    }

    fn accept_unique_nulls_treatment(&mut self) -> Result<bool> {
        // UNIQUE NULLS [NOT] DISTINCT; NULLS arrives reclassified
        if self.accept(TokenKind::NullsLa)? {
            let not = self.accept_kw(Keyword::Not)?;
            self.expect_kw(Keyword::Distinct)?;
            return Ok(not);
        }
        Ok(false)
    }

    /// REFERENCES target, shared between column and table foreign keys.
    fn references_spec(&mut self, location: ParseLoc) -> Result<Constraint> {
        let pktable = self.qualified_name()?;
        let mut c = Constraint {
            pktable: Some(Box::new(pktable)),
            fk_matchtype: FKCONSTR_MATCH_SIMPLE,
            fk_upd_action: FKCONSTR_ACTION_NOACTION,
            fk_del_action: FKCONSTR_ACTION_NOACTION,
            location,
            ..Default::default()
        };
        if self.accept(TokenKind::LParen)? {
            c.pk_attrs = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.accept_kw(Keyword::Match)? {
            c.fk_matchtype = if self.accept_kw(Keyword::Full)? {
                FKCONSTR_MATCH_FULL
            } else if self.accept_kw(Keyword::Partial)? {
                FKCONSTR_MATCH_PARTIAL
            } else {
                self.expect_kw(Keyword::Simple)?;
                FKCONSTR_MATCH_SIMPLE
            };
        }
        while self.at_kw(Keyword::On) {
            self.advance()?;
            if self.accept_kw(Keyword::Update)? {
                let (action, _) = self.key_action(false)?;
                c.fk_upd_action = action;
            } else {
                self.expect_kw(Keyword::Delete)?;
                let (action, set_cols) = self.key_action(true)?;
                c.fk_del_action = action;
                c.fk_del_set_cols = set_cols;
            }
        }
        Ok(c)
    }

    fn key_action(&mut self, allow_set_cols: bool) -> Result<(char, Option<Vec<Node>>)> {
        match self.cur_keyword() {
            Some(Keyword::No) => {
                self.advance()?;
                self.expect_kw(Keyword::Action)?;
                Ok((FKCONSTR_ACTION_NOACTION, None))
            }
            Some(Keyword::Restrict) => {
                self.advance()?;
                Ok((FKCONSTR_ACTION_RESTRICT, None))
            }
            Some(Keyword::Cascade) => {
                self.advance()?;
                Ok((FKCONSTR_ACTION_CASCADE, None))
            }
            Some(Keyword::Set) => {
                self.advance()?;
                let action = if self.accept_kw(Keyword::Null)? {
                    FKCONSTR_ACTION_SETNULL
                } else {
                    self.expect_kw(Keyword::Default)?;
                    FKCONSTR_ACTION_SETDEFAULT
                };
                let mut set_cols = None;
                if allow_set_cols && self.accept(TokenKind::LParen)? {
                    set_cols = Some(self.name_list()?);
                    self.expect(TokenKind::RParen)?;
                }
                Ok((action, set_cols))
            }
            _ => self.syntax_error(),
        }
    }

    fn table_constraint(&mut self) -> Result<Node> {
        let mut conname = String::new();
        let mut con_loc = self.loc();
        if self.at_kw(Keyword::Constraint) {
            self.advance()?;
            conname = self.col_id()?;
            con_loc = self.loc();
        }

        let mut c = match self.cur_keyword() {
            Some(Keyword::Check) => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let expr = self.parse_a_expr()?;
                self.expect(TokenKind::RParen)?;
                Constraint {
                    contype: ConstrType::Check,
                    raw_expr: Some(expr),
                    location: con_loc,
                    ..Default::default()
                }
            }
            Some(Keyword::Unique) => {
                self.advance()?;
                let nulls_not_distinct = self.accept_unique_nulls_treatment()?;
                self.expect(TokenKind::LParen)?;
                let keys = self.name_list()?;
                self.expect(TokenKind::RParen)?;
                let mut c = Constraint {
                    contype: ConstrType::Unique,
                    nulls_not_distinct,
                    keys: Some(keys),
                    location: con_loc,
                    ..Default::default()
                };
                self.index_constraint_tail(&mut c)?;
                c
            }
            Some(Keyword::Primary) => {
                self.advance()?;
                self.expect_kw(Keyword::Key)?;
                self.expect(TokenKind::LParen)?;
                let keys = self.name_list()?;
                self.expect(TokenKind::RParen)?;
                let mut c = Constraint {
                    contype: ConstrType::Primary,
                    keys: Some(keys),
                    location: con_loc,
                    ..Default::default()
                };
                self.index_constraint_tail(&mut c)?;
                c
            }
            Some(Keyword::Foreign) => {
                self.advance()?;
                self.expect_kw(Keyword::Key)?;
                self.expect(TokenKind::LParen)?;
                let fk_attrs = self.name_list()?;
                self.expect(TokenKind::RParen)?;
                self.expect_kw(Keyword::References)?;
                let mut c = self.references_spec(con_loc)?;
                c.contype = ConstrType::Foreign;
                c.fk_attrs = Some(fk_attrs);
                c
            }
            _ => return self.syntax_error(),
        };

        // trailing constraint attributes
        loop {
            match self.cur_keyword() {
                Some(Keyword::Deferrable) => {
                    self.advance()?;
                    c.deferrable = true;
                }
                Some(Keyword::Not) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Deferrable)? {
                        c.deferrable = false;
                    } else {
                        self.expect_kw(Keyword::Valid)?;
                        c.skip_validation = true;
                        c.initially_valid = false;
                    }
                }
                Some(Keyword::Initially) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Deferred)? {
                        c.initdeferred = true;
                    } else {
                        self.expect_kw(Keyword::Immediate)?;
                        c.initdeferred = false;
                    }
                }
                Some(Keyword::No) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Inherit)?;
                    c.is_no_inherit = true;
                }
                _ => break,
            }
        }
        c.conname = conname;
        Ok(Node::Constraint(Box::new(c)))
    }

    /// INCLUDE / WITH / USING INDEX TABLESPACE on unique and primary key
    /// constraints.
    fn index_constraint_tail(&mut self, c: &mut Constraint) -> Result<()> {
        if self.accept_kw(Keyword::Include)? {
            self.expect(TokenKind::LParen)?;
            c.including = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            c.options = Some(self.rel_option_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::Using) {
            self.advance()?;
            self.expect_kw(Keyword::Index)?;
            self.expect_kw(Keyword::Tablespace)?;
            c.indexspace = self.col_id()?;
        }
        Ok(())
    }

    /// Option lists of the form `name [= value]`, used by WITH clauses on
    /// tables, indexes and constraints.
    fn rel_option_list(&mut self) -> Result<Vec<Node>> {
        let mut options = vec![self.rel_option()?];
        while self.accept(TokenKind::Comma)? {
            options.push(self.rel_option()?);
        }
        Ok(options)
    }

    fn rel_option(&mut self) -> Result<Node> {
        let loc = self.loc();
        let first = self.col_label()?;
        let mut elem = DefElem { defname: first, location: loc, ..Default::default() };
        if self.accept(TokenKind::Dot)? {
            elem.defnamespace = elem.defname;
            elem.defname = self.col_label()?;
        }
        if self.accept(TokenKind::Eq)? {
            elem.arg = Some(self.def_arg()?);
        }
        Ok(Node::DefElem(Box::new(elem)))
    }

    /// A definition argument: a type name, reserved word, operator, numeric
    /// or string constant.
    pub(super) fn def_arg(&mut self) -> Result<Node> {
        match self.kind() {
            TokenKind::SConst => {
                let text = self.advance()?.text;
                Ok(make_string(text))
            }
            TokenKind::IConst | TokenKind::FConst | TokenKind::Minus | TokenKind::Plus => {
                self.numeric_only()
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance()?;
                Ok(Node::Boolean(Boolean { boolval: true }))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance()?;
                Ok(Node::Boolean(Boolean { boolval: false }))
            }
            TokenKind::Keyword(Keyword::On | Keyword::Off) => {
                let text = self.advance()?.text;
                Ok(make_string(text))
            }
            _ => {
                let tn = self.parse_typename()?;
                // a bare single name reads better as a plain string
                if let TypeName {
                    names: Some(names),
                    typmods: None,
                    array_bounds: None,
                    setof: false,
                    pct_type: false,
                    ..
                } = &tn
                {
                    if names.len() == 1 {
                        return Ok(names[0].clone());
                    }
                }
                Ok(Node::TypeName(Box::new(tn)))
            }
        }
    }

    fn parse_partition_spec(&mut self) -> Result<PartitionSpec> {
        let loc = self.loc();
        let strategy = self.col_id()?;
        self.expect(TokenKind::LParen)?;
        let mut params = vec![self.partition_elem()?];
        while self.accept(TokenKind::Comma)? {
            params.push(self.partition_elem()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(PartitionSpec { strategy, part_params: Some(params), location: loc })
    }

    fn partition_elem(&mut self) -> Result<Node> {
        let loc = self.loc();
        let mut elem = PartitionElem { location: loc, ..Default::default() };
        if self.kind() == TokenKind::LParen {
            self.advance()?;
            elem.expr = Some(self.parse_a_expr()?);
            self.expect(TokenKind::RParen)?;
        } else if self.at_col_id() && matches!(self.peek2()?.kind, TokenKind::Comma | TokenKind::RParen | TokenKind::Keyword(Keyword::Collate))
        {
            elem.name = self.col_id()?;
        } else {
            elem.expr = Some(self.parse_c_expr()?);
        }
        if self.at_kw(Keyword::Collate) {
            self.advance()?;
            elem.collation = Some(self.any_name()?);
        }
        if self.at_col_id() {
            elem.opclass = Some(self.any_name()?);
        }
        Ok(Node::PartitionElem(Box::new(elem)))
    }

    // -----------------------------------------------------------------------
    // CREATE INDEX

    fn parse_create_index(&mut self, unique: bool) -> Result<Node> {
        self.expect_kw(Keyword::Index)?;
        let concurrent = self.accept_kw(Keyword::Concurrently)?;
        let mut stmt = IndexStmt { unique, concurrent, ..Default::default() };
        stmt.if_not_exists = self.accept_if_not_exists()?;
        if self.at_col_id() {
            stmt.idxname = self.col_id()?;
        }
        self.expect_kw(Keyword::On)?;
        stmt.relation = Some(Box::new(self.relation_expr()?));
        if self.accept_kw(Keyword::Using)? {
            stmt.access_method = self.col_id()?;
        }
        self.expect(TokenKind::LParen)?;
        stmt.index_params = Some(self.index_elem_list()?);
        self.expect(TokenKind::RParen)?;
        if self.accept_kw(Keyword::Include)? {
            self.expect(TokenKind::LParen)?;
            stmt.index_including_params = Some(self.index_elem_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.accept(TokenKind::NullsLa)? {
            let not = self.accept_kw(Keyword::Not)?;
            self.expect_kw(Keyword::Distinct)?;
            stmt.nulls_not_distinct = not;
        }
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            stmt.options = Some(self.rel_option_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.accept_kw(Keyword::Tablespace)? {
            stmt.table_space = self.col_id()?;
        }
        if self.accept_kw(Keyword::Where)? {
            stmt.where_clause = Some(self.parse_a_expr()?);
        }
        Ok(Node::IndexStmt(Box::new(stmt)))
    }

    pub(super) fn index_elem_list(&mut self) -> Result<Vec<Node>> {
        let mut elems = vec![self.index_elem()?];
        while self.accept(TokenKind::Comma)? {
            elems.push(self.index_elem()?);
        }
        Ok(elems)
    }

    fn index_elem(&mut self) -> Result<Node> {
        let mut elem = IndexElem::default();
        if self.kind() == TokenKind::LParen {
            self.advance()?;
            elem.expr = Some(self.parse_a_expr()?);
            self.expect(TokenKind::RParen)?;
        } else if self.at_col_id() && self.peek2()?.kind != TokenKind::LParen {
            elem.name = self.col_id()?;
        } else {
            elem.expr = Some(self.parse_c_expr()?);
        }
        if self.at_kw(Keyword::Collate) {
            self.advance()?;
            elem.collation = Some(self.any_name()?);
        }
        if self.at_col_id() {
            elem.opclass = Some(self.any_name()?);
            if self.accept(TokenKind::LParen)? {
                elem.opclassopts = Some(self.rel_option_list()?);
                self.expect(TokenKind::RParen)?;
            }
        }
        match self.cur_keyword() {
            Some(Keyword::Asc) => {
                self.advance()?;
                elem.ordering = SortByDir::Asc;
            }
            Some(Keyword::Desc) => {
                self.advance()?;
                elem.ordering = SortByDir::Desc;
            }
            _ => {}
        }
        if self.accept(TokenKind::NullsLa)? {
            if self.accept_kw(Keyword::First)? {
                elem.nulls_ordering = SortByNulls::First;
            } else {
                self.expect_kw(Keyword::Last)?;
                elem.nulls_ordering = SortByNulls::Last;
            }
        }
        Ok(Node::IndexElem(Box::new(elem)))
    }

    // -----------------------------------------------------------------------
    // CREATE VIEW / MATERIALIZED VIEW

    fn parse_create_view(&mut self, replace: bool, persistence: char) -> Result<Node> {
        self.expect_kw(Keyword::View)?;
        let mut view = self.qualified_name()?;
        view.relpersistence = persistence;
        let mut stmt = ViewStmt { view: Some(Box::new(view)), replace, ..Default::default() };
        if self.accept(TokenKind::LParen)? {
            stmt.aliases = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            stmt.options = Some(self.rel_option_list()?);
            self.expect(TokenKind::RParen)?;
        }
        self.expect_kw(Keyword::As)?;
        stmt.query = Some(Node::SelectStmt(self.parse_select_stmt(None)?));
        if self.at_kw(Keyword::With) {
            self.advance()?;
            stmt.with_check_option = if self.accept_kw(Keyword::Cascaded)? {
                ViewCheckOption::CascadedCheckOption
            } else if self.accept_kw(Keyword::Local)? {
                ViewCheckOption::LocalCheckOption
            } else {
                ViewCheckOption::CascadedCheckOption
            };
            self.expect_kw(Keyword::Check)?;
            self.expect_kw(Keyword::Option)?;
        }
        Ok(Node::ViewStmt(Box::new(stmt)))
    }

    fn parse_create_matview(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::View)?;
        let if_not_exists = self.accept_if_not_exists()?;
        let rel = self.qualified_name()?;
        let mut into = IntoClause { rel: Some(Box::new(rel)), ..Default::default() };
        if self.accept(TokenKind::LParen)? {
            into.col_names = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.accept_kw(Keyword::Using)? {
            into.access_method = self.col_id()?;
        }
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            into.options = Some(self.rel_option_list()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.accept_kw(Keyword::Tablespace)? {
            into.table_space_name = self.col_id()?;
        }
        self.expect_kw(Keyword::As)?;
        let query = self.parse_preparable_stmt()?;
        if self.at_kw(Keyword::With) {
            self.advance()?;
            if self.accept_kw(Keyword::No)? {
                self.expect_kw(Keyword::Data)?;
                into.skip_data = true;
            } else {
                self.expect_kw(Keyword::Data)?;
            }
        }
        Ok(Node::CreateTableAsStmt(Box::new(CreateTableAsStmt {
            query: Some(query),
            into: Some(Box::new(into)),
            objtype: ObjectType::Matview,
            is_select_into: false,
            if_not_exists,
        })))
    }

    pub(super) fn parse_refresh_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Refresh)?;
        self.expect_kw(Keyword::Materialized)?;
        self.expect_kw(Keyword::View)?;
        let concurrent = self.accept_kw(Keyword::Concurrently)?;
        let rel = self.qualified_name()?;
        let mut skip_data = false;
        if self.at_kw(Keyword::With) {
            self.advance()?;
            if self.accept_kw(Keyword::No)? {
                self.expect_kw(Keyword::Data)?;
                skip_data = true;
            } else {
                self.expect_kw(Keyword::Data)?;
            }
        }
        Ok(Node::RefreshMatViewStmt(Box::new(RefreshMatViewStmt {
            concurrent,
            skip_data,
            relation: Some(Box::new(rel)),
        })))
    }

    // -----------------------------------------------------------------------
    // CREATE FUNCTION / PROCEDURE

    fn parse_create_function(&mut self, replace: bool, is_procedure: bool) -> Result<Node> {
        self.advance()?;
        let funcname = self.any_name()?;
        let mut stmt = CreateFunctionStmt {
            is_procedure,
            replace,
            funcname: Some(funcname),
            ..Default::default()
        };

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.kind() != TokenKind::RParen {
            params.push(self.function_parameter(false)?);
            while self.accept(TokenKind::Comma)? {
                params.push(self.function_parameter(false)?);
            }
        }
        self.expect(TokenKind::RParen)?;

        if self.accept_kw(Keyword::Returns)? {
            if self.at_kw(Keyword::Table) {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let mut table_params = vec![self.function_parameter(true)?];
                while self.accept(TokenKind::Comma)? {
                    table_params.push(self.function_parameter(true)?);
                }
                self.expect(TokenKind::RParen)?;
                let mut return_type = if table_params.len() == 1 {
                    match &table_params[0] {
                        Node::FunctionParameter(p) => {
                            p.arg_type.as_deref().cloned().unwrap_or_default()
                        }
                        _ => TypeName::default(),
                    }
                } else {
                    system_type("record", -1)
                };
                return_type.setof = true;
                stmt.return_type = Some(Box::new(return_type));
                params.extend(table_params);
            } else {
                stmt.return_type = Some(Box::new(self.parse_typename()?));
            }
        }
        if !params.is_empty() {
            stmt.parameters = Some(params);
        }

        stmt.options = Some(self.createfunc_opt_list()?);
        Ok(Node::CreateFunctionStmt(Box::new(stmt)))
    }

    fn function_parameter(&mut self, table_mode: bool) -> Result<Node> {
        let mut mode = if table_mode {
            FunctionParameterMode::Table
        } else {
            FunctionParameterMode::Default
        };
        if !table_mode {
            match self.cur_keyword() {
                Some(Keyword::In) => {
                    self.advance()?;
                    mode = FunctionParameterMode::In;
                    if self.accept_kw(Keyword::Out)? {
                        mode = FunctionParameterMode::InOut;
                    }
                }
                Some(Keyword::Out) => {
                    self.advance()?;
                    mode = FunctionParameterMode::Out;
                }
                Some(Keyword::Inout) => {
                    self.advance()?;
                    mode = FunctionParameterMode::InOut;
                }
                Some(Keyword::Variadic) => {
                    self.advance()?;
                    mode = FunctionParameterMode::Variadic;
                }
                _ => {}
            }
        }

        // a parameter name is present when the next token can still start a
        // type
        let mut name = String::new();
        if self.param_name_ahead()? {
            name = self.type_function_name()?;
        }
        let arg_type = self.parse_typename()?;
        let mut param = FunctionParameter {
            name,
            arg_type: Some(Box::new(arg_type)),
            mode,
            ..Default::default()
        };
        if self.accept_kw(Keyword::Default)? || self.accept(TokenKind::Eq)? {
            param.defexpr = Some(self.parse_a_expr()?);
        }
        Ok(Node::FunctionParameter(Box::new(param)))
    }

    fn param_name_ahead(&mut self) -> Result<bool> {
        let name_like = matches!(self.kind(), TokenKind::Ident)
            || matches!(
                self.cur_keyword().map(|kw| kw.category()),
                Some(KeywordCategory::Unreserved)
            );
        if !name_like {
            return Ok(false);
        }
        let next = self.peek2()?.kind;
        Ok(!matches!(
            next,
            TokenKind::Comma
                | TokenKind::RParen
                | TokenKind::Dot
                | TokenKind::LBracket
                | TokenKind::Percent
                | TokenKind::Eq
                | TokenKind::Keyword(Keyword::Default)
        ))
    }

    fn createfunc_opt_list(&mut self) -> Result<Vec<Node>> {
        let mut options = Vec::new();
        loop {
            let loc = self.loc();
            let elem = match self.cur_keyword() {
                Some(Keyword::As) => {
                    self.advance()?;
                    let mut defs = vec![make_string(self.sconst()?)];
                    if self.accept(TokenKind::Comma)? {
                        defs.push(make_string(self.sconst()?));
                    }
                    DefElem {
                        defname: "as".into(),
                        arg: Some(Node::List(defs)),
                        location: loc,
                        ..Default::default()
                    }
                }
                Some(Keyword::Language) => {
                    self.advance()?;
                    let lang = self.non_reserved_word_or_sconst()?;
                    DefElem {
                        defname: "language".into(),
                        arg: Some(make_string(lang)),
                        location: loc,
                        ..Default::default()
                    }
                }
                Some(Keyword::Immutable) => {
                    self.advance()?;
                    make_def_elem("volatility", make_string("immutable"), loc)
                }
                Some(Keyword::Stable) => {
                    self.advance()?;
                    make_def_elem("volatility", make_string("stable"), loc)
                }
                Some(Keyword::Volatile) => {
                    self.advance()?;
                    make_def_elem("volatility", make_string("volatile"), loc)
                }
                Some(Keyword::Strict) => {
                    self.advance()?;
                    make_def_elem("strict", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::Called) => {
                    self.advance()?;
                    self.expect_kw(Keyword::On)?;
                    self.expect_kw(Keyword::Null)?;
                    self.expect_kw(Keyword::Input)?;
                    make_def_elem("strict", Node::Boolean(Boolean { boolval: false }), loc)
                }
                Some(Keyword::Returns) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Null)?;
                    self.expect_kw(Keyword::On)?;
                    self.expect_kw(Keyword::Null)?;
                    self.expect_kw(Keyword::Input)?;
                    make_def_elem("strict", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::External | Keyword::Security) => {
                    if self.at_kw(Keyword::External) {
                        self.advance()?;
                    }
                    self.expect_kw(Keyword::Security)?;
                    let definer = if self.accept_kw(Keyword::Definer)? {
                        true
                    } else {
                        self.expect_kw(Keyword::Invoker)?;
                        false
                    };
                    make_def_elem("security", Node::Boolean(Boolean { boolval: definer }), loc)
                }
                Some(Keyword::Leakproof) => {
                    self.advance()?;
                    make_def_elem("leakproof", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::Not) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Leakproof)?;
                    make_def_elem("leakproof", Node::Boolean(Boolean { boolval: false }), loc)
                }
                Some(Keyword::Cost) => {
                    self.advance()?;
                    let value = self.numeric_only()?;
                    make_def_elem("cost", value, loc)
                }
                Some(Keyword::Rows) => {
                    self.advance()?;
                    let value = self.numeric_only()?;
                    make_def_elem("rows", value, loc)
                }
                Some(Keyword::Parallel) => {
                    self.advance()?;
                    let value = self.col_id()?;
                    make_def_elem("parallel", make_string(value), loc)
                }
                Some(Keyword::Window) => {
                    self.advance()?;
                    make_def_elem("windowfunc", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::Support) => {
                    self.advance()?;
                    let name = self.any_name()?;
                    make_def_elem("support", Node::List(name), loc)
                }
                _ => break,
            };
            options.push(Node::DefElem(Box::new(elem)));
        }
        Ok(options)
    }

    fn parse_alter_function(&mut self, objtype: ObjectType) -> Result<Node> {
        let func = self.function_with_argtypes()?;
        if self.at_kw(Keyword::Rename) {
            self.advance()?;
            self.expect_kw(Keyword::To)?;
            let newname = self.col_id()?;
            return Ok(Node::RenameStmt(Box::new(RenameStmt {
                rename_type: objtype,
                object: Some(Node::ObjectWithArgs(Box::new(func))),
                newname,
                ..Default::default()
            })));
        }
        let actions = self.createfunc_opt_list()?;
        if actions.is_empty() {
            return self.syntax_error();
        }
        let _ = self.accept_kw(Keyword::Restrict)?;
        Ok(Node::AlterFunctionStmt(Box::new(AlterFunctionStmt {
            objtype,
            func: Some(Box::new(func)),
            actions: Some(actions),
        })))
    }

    pub(super) fn function_with_argtypes(&mut self) -> Result<ObjectWithArgs> {
        let objname = self.any_name()?;
        let mut owa = ObjectWithArgs { objname: Some(objname), ..Default::default() };
        if self.accept(TokenKind::LParen)? {
            let mut argtypes = Vec::new();
            if self.kind() != TokenKind::RParen {
                loop {
                    // modes and parameter names are accepted and discarded;
                    // only the types identify the function
                    match self.cur_keyword() {
                        Some(Keyword::In | Keyword::Out | Keyword::Inout | Keyword::Variadic) => {
                            self.advance()?;
                        }
                        _ => {}
                    }
                    if self.param_name_ahead()? {
                        self.type_function_name()?;
                    }
                    argtypes.push(Node::TypeName(Box::new(self.parse_typename()?)));
                    if !self.accept(TokenKind::Comma)? {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen)?;
            owa.objargs = Some(argtypes);
        } else {
            owa.args_unspecified = true;
        }
        Ok(owa)
    }

    // -----------------------------------------------------------------------
    // CREATE SEQUENCE

    fn parse_create_sequence(&mut self, persistence: char) -> Result<Node> {
        self.expect_kw(Keyword::Sequence)?;
        let if_not_exists = self.accept_if_not_exists()?;
        let mut rel = self.qualified_name()?;
        rel.relpersistence = persistence;
        let options = self.seq_opt_list()?;
        Ok(Node::CreateSeqStmt(Box::new(CreateSeqStmt {
            sequence: Some(Box::new(rel)),
            options: if options.is_empty() { None } else { Some(options) },
            if_not_exists,
            ..Default::default()
        })))
    }

    pub(super) fn seq_opt_list(&mut self) -> Result<Vec<Node>> {
        let mut options = Vec::new();
        loop {
            let loc = self.loc();
            let elem = match self.cur_keyword() {
                Some(Keyword::As) => {
                    self.advance()?;
                    let tn = self.simple_typename()?;
                    make_def_elem("as", Node::TypeName(Box::new(tn)), loc)
                }
                Some(Keyword::Increment) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::By)?;
                    let value = self.numeric_only()?;
                    make_def_elem("increment", value, loc)
                }
                Some(Keyword::Minvalue) => {
                    self.advance()?;
                    let value = self.numeric_only()?;
                    make_def_elem("minvalue", value, loc)
                }
                Some(Keyword::Maxvalue) => {
                    self.advance()?;
                    let value = self.numeric_only()?;
                    make_def_elem("maxvalue", value, loc)
                }
                Some(Keyword::Start) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::With)?;
                    let value = self.numeric_only()?;
                    make_def_elem("start", value, loc)
                }
                Some(Keyword::Restart) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::With)?;
                    if matches!(
                        self.kind(),
                        TokenKind::IConst | TokenKind::FConst | TokenKind::Minus | TokenKind::Plus
                    ) {
                        let value = self.numeric_only()?;
                        make_def_elem("restart", value, loc)
                    } else {
                        DefElem { defname: "restart".into(), location: loc, ..Default::default() }
                    }
                }
                Some(Keyword::Cache) => {
                    self.advance()?;
                    let value = self.numeric_only()?;
                    make_def_elem("cache", value, loc)
                }
                Some(Keyword::Cycle) => {
                    self.advance()?;
                    make_def_elem("cycle", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::No) => {
                    self.advance()?;
                    match self.cur_keyword() {
                        Some(Keyword::Minvalue) => {
                            self.advance()?;
                            DefElem {
                                defname: "minvalue".into(),
                                location: loc,
                                ..Default::default()
                            }
                        }
                        Some(Keyword::Maxvalue) => {
                            self.advance()?;
                            DefElem {
                                defname: "maxvalue".into(),
                                location: loc,
                                ..Default::default()
                            }
                        }
                        Some(Keyword::Cycle) => {
                            self.advance()?;
                            make_def_elem("cycle", Node::Boolean(Boolean { boolval: false }), loc)
                        }
                        _ => return self.syntax_error(),
                    }
                }
                Some(Keyword::Owned) => {
                    self.advance()?;
                    self.expect_kw(Keyword::By)?;
                    let owner = if self.at_kw(Keyword::None) {
                        self.advance()?;
                        vec![make_string("none")]
                    } else {
                        self.any_name()?
                    };
                    make_def_elem("owned_by", Node::List(owner), loc)
                }
                _ => break,
            };
            options.push(Node::DefElem(Box::new(elem)));
        }
        Ok(options)
    }

    // -----------------------------------------------------------------------
    // CREATE SCHEMA / DOMAIN / RULE / TRIGGER / ROLE / DATABASE / EXTENSION /
    // TYPE

    fn parse_create_schema(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Schema)?;
        let if_not_exists = self.accept_if_not_exists()?;
        let mut stmt = CreateSchemaStmt { if_not_exists, ..Default::default() };
        if self.at_kw(Keyword::Authorization) {
            self.advance()?;
            stmt.authrole = Some(Box::new(self.role_spec()?));
        } else {
            stmt.schemaname = self.col_id()?;
            if self.accept_kw(Keyword::Authorization)? {
                stmt.authrole = Some(Box::new(self.role_spec()?));
            }
        }
        // embedded schema elements run until the statement ends
        let mut elts = Vec::new();
        while matches!(self.cur_keyword(), Some(Keyword::Create | Keyword::Grant)) {
            elts.push(self.parse_stmt()?);
        }
        if !elts.is_empty() {
            stmt.schema_elts = Some(elts);
        }
        Ok(Node::CreateSchemaStmt(Box::new(stmt)))
    }

    fn parse_create_domain(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Domain)?;
        let domainname = self.any_name()?;
        let _ = self.accept_kw(Keyword::As)?;
        let tn = self.parse_typename()?;
        let mut stmt = CreateDomainStmt {
            domainname: Some(domainname),
            type_name: Some(Box::new(tn)),
            ..Default::default()
        };
        let mut constraints = Vec::new();
        loop {
            if self.at_kw(Keyword::Collate) {
                let loc = self.loc();
                self.advance()?;
                stmt.coll_clause = Some(Box::new(CollateClause {
                    arg: None,
                    collname: Some(self.any_name()?),
                    location: loc,
                }));
                continue;
            }
            match self.column_constraint()? {
                Some(constraint) => constraints.push(constraint),
                None => break,
            }
        }
        if !constraints.is_empty() {
            stmt.constraints = Some(constraints);
        }
        Ok(Node::CreateDomainStmt(Box::new(stmt)))
    }

    fn parse_create_rule(&mut self, replace: bool) -> Result<Node> {
        self.expect_kw(Keyword::Rule)?;
        let rulename = self.col_id()?;
        self.expect_kw(Keyword::As)?;
        self.expect_kw(Keyword::On)?;
        let event = match self.cur_keyword() {
            Some(Keyword::Select) => CmdType::Select,
            Some(Keyword::Update) => CmdType::Update,
            Some(Keyword::Insert) => CmdType::Insert,
            Some(Keyword::Delete) => CmdType::Delete,
            _ => return self.syntax_error(),
        };
        self.advance()?;
        self.expect_kw(Keyword::To)?;
        let rel = self.qualified_name()?;
        let mut stmt = RuleStmt {
            relation: Some(Box::new(rel)),
            rulename,
            event,
            replace,
            ..Default::default()
        };
        if self.accept_kw(Keyword::Where)? {
            stmt.where_clause = Some(self.parse_a_expr()?);
        }
        self.expect_kw(Keyword::Do)?;
        if self.accept_kw(Keyword::Instead)? {
            stmt.instead = true;
        } else {
            let _ = self.accept_kw(Keyword::Also)?;
        }
        if self.accept_kw(Keyword::Nothing)? {
            stmt.actions = None;
        } else if self.accept(TokenKind::LParen)? {
            let mut actions = Vec::new();
            loop {
                while self.kind() == TokenKind::Semicolon {
                    self.advance()?;
                }
                if self.kind() == TokenKind::RParen {
                    break;
                }
                actions.push(self.parse_rule_action()?);
            }
            self.expect(TokenKind::RParen)?;
            stmt.actions = Some(actions);
        } else {
            stmt.actions = Some(vec![self.parse_rule_action()?]);
        }
        Ok(Node::RuleStmt(Box::new(stmt)))
    }

    fn parse_rule_action(&mut self) -> Result<Node> {
        match self.cur_keyword() {
            Some(Keyword::Notify) => self.parse_notify_stmt(),
            _ => self.parse_preparable_stmt(),
        }
    }

    fn parse_create_trigger(&mut self, replace: bool, isconstraint: bool) -> Result<Node> {
        self.expect_kw(Keyword::Trigger)?;
        let trigname = self.col_id()?;
        let mut stmt = CreateTrigStmt {
            replace,
            isconstraint,
            trigname,
            timing: TRIGGER_TYPE_AFTER,
            ..Default::default()
        };

        match self.cur_keyword() {
            Some(Keyword::Before) => {
                self.advance()?;
                stmt.timing = TRIGGER_TYPE_BEFORE;
            }
            Some(Keyword::After) => {
                self.advance()?;
                stmt.timing = TRIGGER_TYPE_AFTER;
            }
            Some(Keyword::Instead) => {
                self.advance()?;
                self.expect_kw(Keyword::Of)?;
                stmt.timing = TRIGGER_TYPE_INSTEAD;
            }
            _ => return self.syntax_error(),
        }

        let mut events: i16 = 0;
        loop {
            match self.cur_keyword() {
                Some(Keyword::Insert) => {
                    self.advance()?;
                    events |= TRIGGER_TYPE_INSERT;
                }
                Some(Keyword::Delete) => {
                    self.advance()?;
                    events |= TRIGGER_TYPE_DELETE;
                }
                Some(Keyword::Truncate) => {
                    self.advance()?;
                    events |= TRIGGER_TYPE_TRUNCATE;
                }
                Some(Keyword::Update) => {
                    self.advance()?;
                    events |= TRIGGER_TYPE_UPDATE;
                    if self.accept_kw(Keyword::Of)? {
                        stmt.columns = Some(self.name_list()?);
                    }
                }
                _ => return self.syntax_error(),
            }
            if !self.accept_kw(Keyword::Or)? {
                break;
            }
        }
        stmt.events = events;

        self.expect_kw(Keyword::On)?;
        stmt.relation = Some(Box::new(self.qualified_name()?));

        if isconstraint {
            if self.accept_kw(Keyword::From)? {
                stmt.constrrel = Some(Box::new(self.qualified_name()?));
            }
            loop {
                if self.accept_kw(Keyword::Deferrable)? {
                    stmt.deferrable = true;
                } else if self.at_kw(Keyword::Not) {
                    self.advance()?;
                    self.expect_kw(Keyword::Deferrable)?;
                } else if self.accept_kw(Keyword::Initially)? {
                    if self.accept_kw(Keyword::Deferred)? {
                        stmt.initdeferred = true;
                    } else {
                        self.expect_kw(Keyword::Immediate)?;
                    }
                } else {
                    break;
                }
            }
        }

        if self.accept_kw(Keyword::Referencing)? {
            let mut rels = Vec::new();
            loop {
                let is_new = if self.accept_kw(Keyword::New)? {
                    true
                } else if self.accept_kw(Keyword::Old)? {
                    false
                } else {
                    break;
                };
                let is_table = if self.accept_kw(Keyword::Table)? {
                    true
                } else {
                    self.expect_kw(Keyword::Row)?;
                    false
                };
                let _ = self.accept_kw(Keyword::As)?;
                let name = self.col_id()?;
                rels.push(Node::TriggerTransition(Box::new(TriggerTransition {
                    name,
                    is_new,
                    is_table,
                })));
            }
            stmt.transition_rels = Some(rels);
        }

        if self.accept_kw(Keyword::For)? {
            let _ = self.accept_kw(Keyword::Each)?;
            if self.accept_kw(Keyword::Row)? {
                stmt.row = true;
            } else {
                self.expect_kw(Keyword::Statement)?;
            }
        }
        if self.accept_kw(Keyword::When)? {
            self.expect(TokenKind::LParen)?;
            stmt.when_clause = Some(self.parse_a_expr()?);
            self.expect(TokenKind::RParen)?;
        }
        self.expect_kw(Keyword::Execute)?;
        if !self.accept_kw(Keyword::Function)? {
            self.expect_kw(Keyword::Procedure)?;
        }
        stmt.funcname = Some(self.any_name()?);
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.kind() != TokenKind::RParen {
            loop {
                let text = match self.kind() {
                    TokenKind::SConst | TokenKind::IConst | TokenKind::FConst => {
                        self.advance()?.text
                    }
                    _ => self.col_label()?,
                };
                args.push(make_string(text));
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        if !args.is_empty() {
            stmt.args = Some(args);
        }
        Ok(Node::CreateTrigStmt(Box::new(stmt)))
    }

    fn parse_create_role(&mut self, stmt_type: RoleStmtType) -> Result<Node> {
        self.advance()?;
        let role = self.role_id()?;
        let _ = self.accept_kw(Keyword::With)?;
        let options = self.role_opt_list()?;
        Ok(Node::CreateRoleStmt(Box::new(CreateRoleStmt {
            stmt_type,
            role,
            options: if options.is_empty() { None } else { Some(options) },
        })))
    }

    fn role_opt_list(&mut self) -> Result<Vec<Node>> {
        let mut options = Vec::new();
        loop {
            let loc = self.loc();
            let elem = match self.cur_keyword() {
                Some(Keyword::Password) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Null)? {
                        DefElem { defname: "password".into(), location: loc, ..Default::default() }
                    } else {
                        make_def_elem("password", make_string(self.sconst()?), loc)
                    }
                }
                Some(Keyword::Encrypted) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Password)?;
                    make_def_elem("password", make_string(self.sconst()?), loc)
                }
                Some(Keyword::Connection) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Limit)?;
                    let value = self.signed_iconst()?;
                    make_def_elem("connectionlimit", Node::Integer(Integer { ival: value }), loc)
                }
                Some(Keyword::Valid) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Until)?;
                    make_def_elem("validUntil", make_string(self.sconst()?), loc)
                }
                Some(Keyword::Inherit) => {
                    self.advance()?;
                    make_def_elem("inherit", Node::Boolean(Boolean { boolval: true }), loc)
                }
                Some(Keyword::In) => {
                    self.advance()?;
                    if !self.accept_kw(Keyword::Role)? {
                        self.expect_kw(Keyword::Group)?;
                    }
                    make_def_elem("addroleto", Node::List(self.role_list()?), loc)
                }
                Some(Keyword::Role) => {
                    self.advance()?;
                    make_def_elem("rolemembers", Node::List(self.role_list()?), loc)
                }
                Some(Keyword::Admin) => {
                    self.advance()?;
                    make_def_elem("adminmembers", Node::List(self.role_list()?), loc)
                }
                Some(Keyword::Sysid) => {
                    self.advance()?;
                    let value = self.iconst()?;
                    make_def_elem("sysid", Node::Integer(Integer { ival: value }), loc)
                }
                Some(Keyword::User) => {
                    self.advance()?;
                    make_def_elem("rolemembers", Node::List(self.role_list()?), loc)
                }
                _ if self.kind() == TokenKind::Ident => {
                    let flag = self.cur.text.clone();
                    let elem = match flag.as_str() {
                        "superuser" | "createdb" | "createrole" | "login" | "replication"
                        | "bypassrls" => {
                            make_def_elem(&flag, Node::Boolean(Boolean { boolval: true }), loc)
                        }
                        "nosuperuser" | "nocreatedb" | "nocreaterole" | "nologin"
                        | "noreplication" | "nobypassrls" | "noinherit" => make_def_elem(
                            flag.trim_start_matches("no"),
                            Node::Boolean(Boolean { boolval: false }),
                            loc,
                        ),
                        _ => break,
                    };
                    self.advance()?;
                    elem
                }
                _ => break,
            };
            options.push(Node::DefElem(Box::new(elem)));
        }
        Ok(options)
    }

    fn parse_createdb(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Database)?;
        let dbname = self.col_id()?;
        let _ = self.accept_kw(Keyword::With)?;
        let mut options = Vec::new();
        loop {
            let loc = self.loc();
            if !self.at_col_id() && self.cur_keyword().is_none() {
                break;
            }
            if matches!(self.kind(), TokenKind::Semicolon | TokenKind::Eof) {
                break;
            }
            let defname = match self.cur_keyword() {
                Some(Keyword::Connection) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Limit)?;
                    "connection_limit".to_string()
                }
                Some(Keyword::Encoding | Keyword::Location | Keyword::Owner | Keyword::Tablespace | Keyword::Template) => {
                    self.advance()?.text
                }
                _ => {
                    if self.kind() == TokenKind::Ident {
                        self.advance()?.text
                    } else {
                        break;
                    }
                }
            };
            let _ = self.accept(TokenKind::Eq)?;
            let arg = match self.kind() {
                TokenKind::Keyword(Keyword::Default) => {
                    self.advance()?;
                    None
                }
                TokenKind::SConst => Some(make_string(self.advance()?.text)),
                TokenKind::IConst | TokenKind::FConst | TokenKind::Minus => {
                    Some(self.numeric_only()?)
                }
                _ => Some(make_string(self.non_reserved_word()?)),
            };
            options.push(Node::DefElem(Box::new(DefElem {
                defname,
                arg,
                location: loc,
                ..Default::default()
            })));
        }
        Ok(Node::CreatedbStmt(Box::new(CreatedbStmt {
            dbname,
            options: if options.is_empty() { None } else { Some(options) },
        })))
    }

    fn parse_create_extension(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Extension)?;
        let if_not_exists = self.accept_if_not_exists()?;
        let extname = self.col_id()?;
        let _ = self.accept_kw(Keyword::With)?;
        let mut options = Vec::new();
        loop {
            let loc = self.loc();
            match self.cur_keyword() {
                Some(Keyword::Schema) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "schema",
                        make_string(self.col_id()?),
                        loc,
                    ))));
                }
                Some(Keyword::Version) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "new_version",
                        make_string(self.non_reserved_word_or_sconst()?),
                        loc,
                    ))));
                }
                Some(Keyword::Cascade) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "cascade",
                        Node::Boolean(Boolean { boolval: true }),
                        loc,
                    ))));
                }
                _ => break,
            }
        }
        Ok(Node::CreateExtensionStmt(Box::new(CreateExtensionStmt {
            extname,
            if_not_exists,
            options: if options.is_empty() { None } else { Some(options) },
        })))
    }

    fn parse_create_type(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Type)?;
        let name = self.any_name()?;
        self.expect_kw(Keyword::As)?;
        if self.accept_kw(Keyword::Enum)? {
            self.expect(TokenKind::LParen)?;
            let mut vals = Vec::new();
            if self.kind() != TokenKind::RParen {
                vals.push(make_string(self.sconst()?));
                while self.accept(TokenKind::Comma)? {
                    vals.push(make_string(self.sconst()?));
                }
            }
            self.expect(TokenKind::RParen)?;
            return Ok(Node::CreateEnumStmt(Box::new(CreateEnumStmt {
                type_name: Some(name),
                vals: Some(vals),
            })));
        }
        self.expect(TokenKind::LParen)?;
        let mut coldefs = Vec::new();
        if self.kind() != TokenKind::RParen {
            coldefs.push(self.composite_type_elem()?);
            while self.accept(TokenKind::Comma)? {
                coldefs.push(self.composite_type_elem()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        let typevar = range_var_from_any_name(&name);
        Ok(Node::CompositeTypeStmt(Box::new(CompositeTypeStmt {
            typevar: Some(Box::new(typevar)),
            coldeflist: Some(coldefs),
        })))
    }

    fn composite_type_elem(&mut self) -> Result<Node> {
        let loc = self.loc();
        let colname = self.col_id()?;
        let tn = self.parse_typename()?;
        let mut col = ColumnDef {
            colname,
            type_name: Some(Box::new(tn)),
            location: loc,
            ..Default::default()
        };
        if self.at_kw(Keyword::Collate) {
            let coll_loc = self.loc();
            self.advance()?;
            col.coll_clause = Some(Box::new(CollateClause {
                arg: None,
                collname: Some(self.any_name()?),
                location: coll_loc,
            }));
        }
        Ok(Node::ColumnDef(Box::new(col)))
    }

    // -----------------------------------------------------------------------
    // ALTER

    pub(super) fn parse_alter_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Alter)?;
        match self.cur_keyword() {
            Some(Keyword::Table) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let rel = self.relation_expr()?;
                self.parse_alter_table_rest(rel, ObjectType::Table, missing_ok)
            }
            Some(Keyword::Index) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let rel = self.relation_expr()?;
                self.parse_alter_table_rest(rel, ObjectType::Index, missing_ok)
            }
            Some(Keyword::View) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let rel = self.relation_expr()?;
                self.parse_alter_table_rest(rel, ObjectType::View, missing_ok)
            }
            Some(Keyword::Materialized) => {
                self.advance()?;
                self.expect_kw(Keyword::View)?;
                let missing_ok = self.accept_if_exists()?;
                let rel = self.relation_expr()?;
                self.parse_alter_table_rest(rel, ObjectType::Matview, missing_ok)
            }
            Some(Keyword::Sequence) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let rel = self.relation_expr()?;
                if self.at_kw(Keyword::Rename) {
                    self.advance()?;
                    self.expect_kw(Keyword::To)?;
                    let newname = self.col_id()?;
                    return Ok(Node::RenameStmt(Box::new(RenameStmt {
                        rename_type: ObjectType::Sequence,
                        relation: Some(Box::new(rel)),
                        newname,
                        missing_ok,
                        ..Default::default()
                    })));
                }
                let options = self.seq_opt_list()?;
                Ok(Node::AlterSeqStmt(Box::new(AlterSeqStmt {
                    sequence: Some(Box::new(rel)),
                    options: if options.is_empty() { None } else { Some(options) },
                    missing_ok,
                    ..Default::default()
                })))
            }
            Some(Keyword::Function) => {
                self.advance()?;
                self.parse_alter_function(ObjectType::Function)
            }
            Some(Keyword::Procedure) => {
                self.advance()?;
                self.parse_alter_function(ObjectType::Procedure)
            }
            Some(Keyword::Routine) => {
                self.advance()?;
                self.parse_alter_function(ObjectType::Routine)
            }
            Some(Keyword::Role | Keyword::User) => {
                self.advance()?;
                let role = self.role_spec()?;
                let _ = self.accept_kw(Keyword::With)?;
                let options = self.role_opt_list()?;
                Ok(Node::AlterRoleStmt(Box::new(AlterRoleStmt {
                    role: Some(Box::new(role)),
                    options: if options.is_empty() { None } else { Some(options) },
                    action: 1,
                })))
            }
            Some(Keyword::Group) => {
                self.advance()?;
                let role = self.role_spec()?;
                let action = if self.accept_kw(Keyword::Add)? {
                    1
                } else {
                    self.expect_kw(Keyword::Drop)?;
                    -1
                };
                self.expect_kw(Keyword::User)?;
                let members = self.role_list()?;
                let loc = self.loc();
                Ok(Node::AlterRoleStmt(Box::new(AlterRoleStmt {
                    role: Some(Box::new(role)),
                    options: Some(vec![Node::DefElem(Box::new(make_def_elem(
                        "rolemembers",
                        Node::List(members),
                        loc,
                    )))]),
                    action,
                })))
            }
            _ => self.syntax_error(),
        }
    }

    fn parse_alter_table_rest(
        &mut self,
        rel: RangeVar,
        objtype: ObjectType,
        missing_ok: bool,
    ) -> Result<Node> {
        if self.at_kw(Keyword::Rename) {
            self.advance()?;
            if self.accept_kw(Keyword::To)? {
                let newname = self.col_id()?;
                return Ok(Node::RenameStmt(Box::new(RenameStmt {
                    rename_type: objtype,
                    relation: Some(Box::new(rel)),
                    newname,
                    missing_ok,
                    ..Default::default()
                })));
            }
            if self.accept_kw(Keyword::Constraint)? {
                let subname = self.col_id()?;
                self.expect_kw(Keyword::To)?;
                let newname = self.col_id()?;
                return Ok(Node::RenameStmt(Box::new(RenameStmt {
                    rename_type: ObjectType::Tabconstraint,
                    relation_type: objtype,
                    relation: Some(Box::new(rel)),
                    subname,
                    newname,
                    missing_ok,
                    ..Default::default()
                })));
            }
            let _ = self.accept_kw(Keyword::Column)?;
            let subname = self.col_id()?;
            self.expect_kw(Keyword::To)?;
            let newname = self.col_id()?;
            return Ok(Node::RenameStmt(Box::new(RenameStmt {
                rename_type: ObjectType::Column,
                relation_type: objtype,
                relation: Some(Box::new(rel)),
                subname,
                newname,
                missing_ok,
                ..Default::default()
            })));
        }

        let mut cmds = vec![self.alter_table_cmd()?];
        while self.accept(TokenKind::Comma)? {
            cmds.push(self.alter_table_cmd()?);
        }
        Ok(Node::AlterTableStmt(Box::new(AlterTableStmt {
            relation: Some(Box::new(rel)),
            cmds: Some(cmds),
            objtype,
            missing_ok,
        })))
    }

    fn alter_table_cmd(&mut self) -> Result<Node> {
        match self.cur_keyword() {
            Some(Keyword::Add) => {
                self.advance()?;
                match self.cur_keyword() {
                    Some(
                        Keyword::Constraint
                        | Keyword::Check
                        | Keyword::Unique
                        | Keyword::Primary
                        | Keyword::Foreign,
                    ) => {
                        let def = self.table_constraint()?;
                        Ok(make_at_cmd(AlterTableType::AddConstraint, Some(def)))
                    }
                    _ => {
                        let _ = self.accept_kw(Keyword::Column)?;
                        let missing_ok = self.accept_if_not_exists()?;
                        let def = self.column_def()?;
                        let mut cmd = AlterTableCmd {
                            subtype: AlterTableType::AddColumn,
                            def: Some(def),
                            missing_ok,
                            ..Default::default()
                        };
                        cmd.behavior = DropBehavior::Restrict;
                        Ok(Node::AlterTableCmd(Box::new(cmd)))
                    }
                }
            }
            Some(Keyword::Drop) => {
                self.advance()?;
                if self.accept_kw(Keyword::Constraint)? {
                    let missing_ok = self.accept_if_exists()?;
                    let name = self.col_id()?;
                    let behavior = self.opt_drop_behavior()?;
                    return Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                        subtype: AlterTableType::DropConstraint,
                        name,
                        behavior,
                        missing_ok,
                        ..Default::default()
                    })));
                }
                let _ = self.accept_kw(Keyword::Column)?;
                let missing_ok = self.accept_if_exists()?;
                let name = self.col_id()?;
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                    subtype: AlterTableType::DropColumn,
                    name,
                    behavior,
                    missing_ok,
                    ..Default::default()
                })))
            }
            Some(Keyword::Alter) => {
                self.advance()?;
                let _ = self.accept_kw(Keyword::Column)?;
                let name = self.col_id()?;
                match self.cur_keyword() {
                    Some(Keyword::Type) => {
                        self.advance()?;
                        self.alter_column_type(name)
                    }
                    Some(Keyword::Set) => {
                        self.advance()?;
                        match self.cur_keyword() {
                            Some(Keyword::Data) => {
                                self.advance()?;
                                self.expect_kw(Keyword::Type)?;
                                self.alter_column_type(name)
                            }
                            Some(Keyword::Default) => {
                                self.advance()?;
                                let expr = self.parse_a_expr()?;
                                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                                    subtype: AlterTableType::ColumnDefault,
                                    name,
                                    def: Some(expr),
                                    ..Default::default()
                                })))
                            }
                            Some(Keyword::Not) => {
                                self.advance()?;
                                self.expect_kw(Keyword::Null)?;
                                Ok(make_at_cmd_named(AlterTableType::SetNotNull, name))
                            }
                            Some(Keyword::Statistics) => {
                                self.advance()?;
                                let value = self.signed_iconst()?;
                                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                                    subtype: AlterTableType::SetStatistics,
                                    name,
                                    def: Some(Node::Integer(Integer { ival: value })),
                                    ..Default::default()
                                })))
                            }
                            Some(Keyword::Storage) => {
                                self.advance()?;
                                let storage = self.col_id()?;
                                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                                    subtype: AlterTableType::SetStorage,
                                    name,
                                    def: Some(make_string(storage)),
                                    ..Default::default()
                                })))
                            }
                            Some(Keyword::Compression) => {
                                self.advance()?;
                                let method = self.col_id()?;
                                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                                    subtype: AlterTableType::SetCompression,
                                    name,
                                    def: Some(make_string(method)),
                                    ..Default::default()
                                })))
                            }
                            _ => self.syntax_error(),
                        }
                    }
                    Some(Keyword::Drop) => {
                        self.advance()?;
                        match self.cur_keyword() {
                            Some(Keyword::Default) => {
                                self.advance()?;
                                Ok(make_at_cmd_named(AlterTableType::ColumnDefault, name))
                            }
                            Some(Keyword::Not) => {
                                self.advance()?;
                                self.expect_kw(Keyword::Null)?;
                                Ok(make_at_cmd_named(AlterTableType::DropNotNull, name))
                            }
                            _ => self.syntax_error(),
                        }
                    }
                    _ => self.syntax_error(),
                }
            }
            Some(Keyword::Validate) => {
                self.advance()?;
                self.expect_kw(Keyword::Constraint)?;
                let name = self.col_id()?;
                Ok(make_at_cmd_named(AlterTableType::ValidateConstraint, name))
            }
            Some(Keyword::Owner) => {
                self.advance()?;
                self.expect_kw(Keyword::To)?;
                let role = self.role_spec()?;
                Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
                    subtype: AlterTableType::ChangeOwner,
                    newowner: Some(Box::new(role)),
                    ..Default::default()
                })))
            }
            Some(Keyword::Set) => {
                self.advance()?;
                match self.cur_keyword() {
                    Some(Keyword::Tablespace) => {
                        self.advance()?;
                        let name = self.col_id()?;
                        Ok(make_at_cmd_named(AlterTableType::SetTableSpace, name))
                    }
                    Some(Keyword::Logged) => {
                        self.advance()?;
                        Ok(make_at_cmd(AlterTableType::SetLogged, None))
                    }
                    Some(Keyword::Unlogged) => {
                        self.advance()?;
                        Ok(make_at_cmd(AlterTableType::SetUnLogged, None))
                    }
                    _ => {
                        self.expect(TokenKind::LParen)?;
                        let options = self.rel_option_list()?;
                        self.expect(TokenKind::RParen)?;
                        Ok(make_at_cmd(
                            AlterTableType::SetRelOptions,
                            Some(Node::List(options)),
                        ))
                    }
                }
            }
            Some(Keyword::Reset) => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let options = self.rel_option_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(make_at_cmd(AlterTableType::ResetRelOptions, Some(Node::List(options))))
            }
            Some(Keyword::Enable) => {
                self.advance()?;
                match self.cur_keyword() {
                    Some(Keyword::Trigger) => {
                        self.advance()?;
                        if self.accept_kw(Keyword::All)? {
                            Ok(make_at_cmd(AlterTableType::EnableTrigAll, None))
                        } else if self.accept_kw(Keyword::User)? {
                            Ok(make_at_cmd(AlterTableType::EnableTrigUser, None))
                        } else {
                            let name = self.col_id()?;
                            Ok(make_at_cmd_named(AlterTableType::EnableTrig, name))
                        }
                    }
                    Some(Keyword::Always) => {
                        self.advance()?;
                        self.expect_kw(Keyword::Trigger)?;
                        let name = self.col_id()?;
                        Ok(make_at_cmd_named(AlterTableType::EnableAlwaysTrig, name))
                    }
                    Some(Keyword::Replica) => {
                        self.advance()?;
                        self.expect_kw(Keyword::Trigger)?;
                        let name = self.col_id()?;
                        Ok(make_at_cmd_named(AlterTableType::EnableReplicaTrig, name))
                    }
                    Some(Keyword::Rule) => {
                        self.advance()?;
                        let name = self.col_id()?;
                        Ok(make_at_cmd_named(AlterTableType::EnableRule, name))
                    }
                    Some(Keyword::Row) => {
                        self.advance()?;
                        self.expect_kw(Keyword::Level)?;
                        self.expect_kw(Keyword::Security)?;
                        Ok(make_at_cmd(AlterTableType::EnableRowSecurity, None))
                    }
                    _ => self.syntax_error(),
                }
            }
            Some(Keyword::Disable) => {
                self.advance()?;
                match self.cur_keyword() {
                    Some(Keyword::Trigger) => {
                        self.advance()?;
                        if self.accept_kw(Keyword::All)? {
                            Ok(make_at_cmd(AlterTableType::DisableTrigAll, None))
                        } else if self.accept_kw(Keyword::User)? {
                            Ok(make_at_cmd(AlterTableType::DisableTrigUser, None))
                        } else {
                            let name = self.col_id()?;
                            Ok(make_at_cmd_named(AlterTableType::DisableTrig, name))
                        }
                    }
                    Some(Keyword::Rule) => {
                        self.advance()?;
                        let name = self.col_id()?;
                        Ok(make_at_cmd_named(AlterTableType::DisableRule, name))
                    }
                    Some(Keyword::Row) => {
                        self.advance()?;
                        self.expect_kw(Keyword::Level)?;
                        self.expect_kw(Keyword::Security)?;
                        Ok(make_at_cmd(AlterTableType::DisableRowSecurity, None))
                    }
                    _ => self.syntax_error(),
                }
            }
            Some(Keyword::Inherit) => {
                self.advance()?;
                let rel = self.qualified_name()?;
                Ok(make_at_cmd(AlterTableType::AddInherit, Some(Node::RangeVar(Box::new(rel)))))
            }
            Some(Keyword::No) => {
                self.advance()?;
                self.expect_kw(Keyword::Inherit)?;
                let rel = self.qualified_name()?;
                Ok(make_at_cmd(AlterTableType::DropInherit, Some(Node::RangeVar(Box::new(rel)))))
            }
            Some(Keyword::Cluster) => {
                self.advance()?;
                self.expect_kw(Keyword::On)?;
                let name = self.col_id()?;
                Ok(make_at_cmd_named(AlterTableType::ClusterOn, name))
            }
            _ => self.syntax_error(),
        }
    }

    fn alter_column_type(&mut self, name: String) -> Result<Node> {
        let tn = self.parse_typename()?;
        let mut col = ColumnDef {
            type_name: Some(Box::new(tn)),
            is_local: true,
            location: -1,
            ..Default::default()
        };
        if self.at_kw(Keyword::Collate) {
            let loc = self.loc();
            self.advance()?;
            col.coll_clause = Some(Box::new(CollateClause {
                arg: None,
                collname: Some(self.any_name()?),
                location: loc,
            }));
        }
        if self.accept_kw(Keyword::Using)? {
            col.raw_default = Some(self.parse_a_expr()?);
        }
        Ok(Node::AlterTableCmd(Box::new(AlterTableCmd {
            subtype: AlterTableType::AlterColumnType,
            name,
            def: Some(Node::ColumnDef(Box::new(col))),
            ..Default::default()
        })))
    }

    // -----------------------------------------------------------------------
    // DROP

    pub(super) fn parse_drop_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Drop)?;
        match self.cur_keyword() {
            Some(Keyword::Role | Keyword::User | Keyword::Group) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let roles = self.role_list()?;
                Ok(Node::DropRoleStmt(Box::new(DropRoleStmt {
                    roles: Some(roles),
                    missing_ok,
                })))
            }
            Some(Keyword::Database) => {
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let dbname = self.col_id()?;
                let mut options = None;
                if self.at_kw(Keyword::With) {
                    self.advance()?;
                    self.expect(TokenKind::LParen)?;
                    let loc = self.loc();
                    self.expect_kw(Keyword::Force)?;
                    options = Some(vec![Node::DefElem(Box::new(DefElem {
                        defname: "force".into(),
                        location: loc,
                        ..Default::default()
                    }))]);
                    self.expect(TokenKind::RParen)?;
                }
                Ok(Node::DropdbStmt(Box::new(DropdbStmt { dbname, missing_ok, options })))
            }
            Some(Keyword::Trigger | Keyword::Rule) => {
                let remove_type = if self.at_kw(Keyword::Trigger) {
                    ObjectType::Trigger
                } else {
                    ObjectType::Rule
                };
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let name = self.col_id()?;
                self.expect_kw(Keyword::On)?;
                let mut object = self.any_name()?;
                object.push(make_string(name));
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::DropStmt(Box::new(DropStmt {
                    objects: Some(vec![Node::List(object)]),
                    remove_type,
                    behavior,
                    missing_ok,
                    concurrent: false,
                })))
            }
            Some(
                Keyword::Function | Keyword::Procedure | Keyword::Routine | Keyword::Aggregate,
            ) => {
                let remove_type = match self.cur_keyword() {
                    Some(Keyword::Function) => ObjectType::Function,
                    Some(Keyword::Procedure) => ObjectType::Procedure,
                    Some(Keyword::Routine) => ObjectType::Routine,
                    _ => ObjectType::Aggregate,
                };
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let mut objects = vec![Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?))];
                while self.accept(TokenKind::Comma)? {
                    objects.push(Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?)));
                }
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::DropStmt(Box::new(DropStmt {
                    objects: Some(objects),
                    remove_type,
                    behavior,
                    missing_ok,
                    concurrent: false,
                })))
            }
            Some(Keyword::Domain | Keyword::Type) => {
                let remove_type = if self.at_kw(Keyword::Domain) {
                    ObjectType::Domain
                } else {
                    ObjectType::Type
                };
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let mut objects = vec![Node::TypeName(Box::new(self.parse_typename()?))];
                while self.accept(TokenKind::Comma)? {
                    objects.push(Node::TypeName(Box::new(self.parse_typename()?)));
                }
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::DropStmt(Box::new(DropStmt {
                    objects: Some(objects),
                    remove_type,
                    behavior,
                    missing_ok,
                    concurrent: false,
                })))
            }
            Some(Keyword::Schema | Keyword::Extension) => {
                let remove_type = if self.at_kw(Keyword::Schema) {
                    ObjectType::Schema
                } else {
                    ObjectType::Extension
                };
                self.advance()?;
                let missing_ok = self.accept_if_exists()?;
                let mut objects = vec![make_string(self.col_id()?)];
                while self.accept(TokenKind::Comma)? {
                    objects.push(make_string(self.col_id()?));
                }
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::DropStmt(Box::new(DropStmt {
                    objects: Some(objects),
                    remove_type,
                    behavior,
                    missing_ok,
                    concurrent: false,
                })))
            }
            _ => {
                let (remove_type, concurrent) = match self.cur_keyword() {
                    Some(Keyword::Table) => (ObjectType::Table, false),
                    Some(Keyword::Sequence) => (ObjectType::Sequence, false),
                    Some(Keyword::View) => (ObjectType::View, false),
                    Some(Keyword::Materialized) => {
                        self.advance()?;
                        (ObjectType::Matview, false)
                    }
                    Some(Keyword::Index) => {
                        self.advance()?;
                        let concurrent = self.accept_kw(Keyword::Concurrently)?;
                        (ObjectType::Index, concurrent)
                    }
                    _ => return self.syntax_error(),
                };
                if remove_type != ObjectType::Index {
                    self.advance()?;
                }
                let missing_ok = self.accept_if_exists()?;
                let objects = self.any_name_list()?;
                let behavior = self.opt_drop_behavior()?;
                Ok(Node::DropStmt(Box::new(DropStmt {
                    objects: Some(objects),
                    remove_type,
                    behavior,
                    missing_ok,
                    concurrent,
                })))
            }
        }
    }

    // -----------------------------------------------------------------------
    // TRUNCATE and COMMENT

    pub(super) fn parse_truncate_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Truncate)?;
        let _ = self.accept_kw(Keyword::Table)?;
        let mut relations = vec![Node::RangeVar(Box::new(self.relation_expr()?))];
        while self.accept(TokenKind::Comma)? {
            relations.push(Node::RangeVar(Box::new(self.relation_expr()?)));
        }
        let mut restart_seqs = false;
        if self.accept_kw(Keyword::Restart)? {
            self.expect_kw(Keyword::Identity)?;
            restart_seqs = true;
        } else if self.accept_kw(Keyword::Continue)? {
            self.expect_kw(Keyword::Identity)?;
        }
        let behavior = self.opt_drop_behavior()?;
        Ok(Node::TruncateStmt(Box::new(TruncateStmt {
            relations: Some(relations),
            restart_seqs,
            behavior,
        })))
    }

    pub(super) fn parse_comment_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Comment)?;
        self.expect_kw(Keyword::On)?;
        let (objtype, object) = match self.cur_keyword() {
            Some(Keyword::Column) => {
                self.advance()?;
                (ObjectType::Column, Node::List(self.any_name()?))
            }
            Some(Keyword::Table) => {
                self.advance()?;
                (ObjectType::Table, Node::List(self.any_name()?))
            }
            Some(Keyword::View) => {
                self.advance()?;
                (ObjectType::View, Node::List(self.any_name()?))
            }
            Some(Keyword::Materialized) => {
                self.advance()?;
                self.expect_kw(Keyword::View)?;
                (ObjectType::Matview, Node::List(self.any_name()?))
            }
            Some(Keyword::Index) => {
                self.advance()?;
                (ObjectType::Index, Node::List(self.any_name()?))
            }
            Some(Keyword::Sequence) => {
                self.advance()?;
                (ObjectType::Sequence, Node::List(self.any_name()?))
            }
            Some(Keyword::Schema) => {
                self.advance()?;
                (ObjectType::Schema, make_string(self.col_id()?))
            }
            Some(Keyword::Database) => {
                self.advance()?;
                (ObjectType::Database, make_string(self.col_id()?))
            }
            Some(Keyword::Extension) => {
                self.advance()?;
                (ObjectType::Extension, make_string(self.col_id()?))
            }
            Some(Keyword::Role) => {
                self.advance()?;
                (ObjectType::Role, make_string(self.col_id()?))
            }
            Some(Keyword::Function) => {
                self.advance()?;
                (
                    ObjectType::Function,
                    Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?)),
                )
            }
            Some(Keyword::Procedure) => {
                self.advance()?;
                (
                    ObjectType::Procedure,
                    Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?)),
                )
            }
            Some(Keyword::Type) => {
                self.advance()?;
                (ObjectType::Type, Node::TypeName(Box::new(self.parse_typename()?)))
            }
            Some(Keyword::Domain) => {
                self.advance()?;
                (ObjectType::Domain, Node::TypeName(Box::new(self.parse_typename()?)))
            }
            Some(Keyword::Constraint) => {
                self.advance()?;
                let name = self.col_id()?;
                self.expect_kw(Keyword::On)?;
                if self.accept_kw(Keyword::Domain)? {
                    let mut object = self.any_name()?;
                    object.push(make_string(name));
                    (ObjectType::Domconstraint, Node::List(object))
                } else {
                    let mut object = self.any_name()?;
                    object.push(make_string(name));
                    (ObjectType::Tabconstraint, Node::List(object))
                }
            }
            Some(Keyword::Trigger) => {
                self.advance()?;
                let name = self.col_id()?;
                self.expect_kw(Keyword::On)?;
                let mut object = self.any_name()?;
                object.push(make_string(name));
                (ObjectType::Trigger, Node::List(object))
            }
            Some(Keyword::Rule) => {
                self.advance()?;
                let name = self.col_id()?;
                self.expect_kw(Keyword::On)?;
                let mut object = self.any_name()?;
                object.push(make_string(name));
                (ObjectType::Rule, Node::List(object))
            }
            _ => return self.syntax_error(),
        };
        self.expect_kw(Keyword::Is)?;
        let comment = if self.accept_kw(Keyword::Null)? {
            String::new()
        } else {
            self.sconst()?
        };
        Ok(Node::CommentStmt(Box::new(CommentStmt {
            objtype,
            object: Some(object),
            comment,
        })))
    }
}

// ---------------------------------------------------------------------------

enum TableEltsOrNames {
    Elts(Vec<Node>),
    Names(Vec<Node>),
}

pub(super) fn make_def_elem(defname: &str, arg: Node, location: ParseLoc) -> DefElem {
    DefElem { defname: defname.to_string(), arg: Some(arg), location, ..Default::default() }
}

fn make_at_cmd(subtype: AlterTableType, def: Option<Node>) -> Node {
    Node::AlterTableCmd(Box::new(AlterTableCmd { subtype, def, ..Default::default() }))
}

fn make_at_cmd_named(subtype: AlterTableType, name: String) -> Node {
    Node::AlterTableCmd(Box::new(AlterTableCmd { subtype, name, ..Default::default() }))
}

fn range_var_from_any_name(name: &[Node]) -> RangeVar {
    let part = |node: &Node| match node {
        Node::String(s) => s.sval.clone(),
        _ => String::new(),
    };
    let mut rv = RangeVar::default();
    match name.len() {
        1 => rv.relname = part(&name[0]),
        2 => {
            rv.schemaname = part(&name[0]);
            rv.relname = part(&name[1]);
        }
        _ => {
            if name.len() >= 3 {
                rv.catalogname = part(&name[0]);
                rv.schemaname = part(&name[1]);
                rv.relname = part(&name[2]);
            }
        }
    }
    rv
}
