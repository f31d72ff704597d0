//! Utility statement grammar: transaction control, SET/SHOW/RESET, EXPLAIN,
//! COPY, GRANT/REVOKE, LOCK, VACUUM/ANALYZE, prepared statements, cursors,
//! and the notification statements.

use super::ddl::make_def_elem;
use super::*;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    // -----------------------------------------------------------------------
    // transactions

    pub(super) fn parse_transaction_stmt(&mut self) -> Result<Node> {
        let loc = self.loc();
        let mut stmt = TransactionStmt { location: loc, ..Default::default() };
        match self.cur_keyword() {
            Some(Keyword::Begin) => {
                self.advance()?;
                self.accept_transaction_keyword()?;
                stmt.kind = TransactionStmtKind::Begin;
                stmt.options = self.transaction_mode_list()?;
            }
            Some(Keyword::Start) => {
                self.advance()?;
                self.expect_kw(Keyword::Transaction)?;
                stmt.kind = TransactionStmtKind::Start;
                stmt.options = self.transaction_mode_list()?;
            }
            Some(Keyword::Commit | Keyword::End) => {
                self.advance()?;
                self.accept_transaction_keyword()?;
                if self.at_kw(Keyword::Prepared) {
                    self.advance()?;
                    stmt.kind = TransactionStmtKind::CommitPrepared;
                    stmt.gid = self.sconst()?;
                } else {
                    stmt.kind = TransactionStmtKind::Commit;
                    stmt.chain = self.opt_transaction_chain()?;
                }
            }
            Some(Keyword::Rollback | Keyword::Abort) => {
                self.advance()?;
                self.accept_transaction_keyword()?;
                if self.at_kw(Keyword::Prepared) {
                    self.advance()?;
                    stmt.kind = TransactionStmtKind::RollbackPrepared;
                    stmt.gid = self.sconst()?;
                } else if self.at_kw(Keyword::To) {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::Savepoint)?;
                    stmt.kind = TransactionStmtKind::RollbackTo;
                    stmt.savepoint_name = self.col_id()?;
                } else {
                    stmt.kind = TransactionStmtKind::Rollback;
                    stmt.chain = self.opt_transaction_chain()?;
                }
            }
            Some(Keyword::Savepoint) => {
                self.advance()?;
                stmt.kind = TransactionStmtKind::Savepoint;
                stmt.savepoint_name = self.col_id()?;
            }
            Some(Keyword::Release) => {
                self.advance()?;
                let _ = self.accept_kw(Keyword::Savepoint)?;
                stmt.kind = TransactionStmtKind::Release;
                stmt.savepoint_name = self.col_id()?;
            }
            Some(Keyword::Prepare) => {
                self.advance()?;
                self.expect_kw(Keyword::Transaction)?;
                stmt.kind = TransactionStmtKind::Prepare;
                stmt.gid = self.sconst()?;
            }
            _ => return self.syntax_error(),
        }
        Ok(Node::TransactionStmt(Box::new(stmt)))
    }

    fn accept_transaction_keyword(&mut self) -> Result<()> {
        if !self.accept_kw(Keyword::Transaction)? {
            let _ = self.accept_kw(Keyword::Work)?;
        }
        Ok(())
    }

    fn opt_transaction_chain(&mut self) -> Result<bool> {
        if self.at_kw(Keyword::And) {
            self.advance()?;
            if self.accept_kw(Keyword::No)? {
                self.expect_kw(Keyword::Chain)?;
                return Ok(false);
            }
            self.expect_kw(Keyword::Chain)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn transaction_mode_list(&mut self) -> Result<Option<Vec<Node>>> {
        let mut modes = Vec::new();
        loop {
            let loc = self.loc();
            match self.cur_keyword() {
                Some(Keyword::Isolation) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Level)?;
                    let level = match self.cur_keyword() {
                        Some(Keyword::Serializable) => {
                            self.advance()?;
                            "serializable"
                        }
                        Some(Keyword::Repeatable) => {
                            self.advance()?;
                            self.expect_kw(Keyword::Read)?;
                            "repeatable read"
                        }
                        Some(Keyword::Read) => {
                            self.advance()?;
                            if self.accept_kw(Keyword::Committed)? {
                                "read committed"
                            } else {
                                self.expect_kw(Keyword::Uncommitted)?;
                                "read uncommitted"
                            }
                        }
                        _ => return self.syntax_error(),
                    };
                    modes.push(Node::DefElem(Box::new(make_def_elem(
                        "transaction_isolation",
                        make_str_const(level, loc),
                        loc,
                    ))));
                }
                Some(Keyword::Read) => {
                    self.advance()?;
                    let read_only = if self.accept_kw(Keyword::Only)? {
                        1
                    } else {
                        self.expect_kw(Keyword::Write)?;
                        0
                    };
                    modes.push(Node::DefElem(Box::new(make_def_elem(
                        "transaction_read_only",
                        make_int_const(read_only, loc),
                        loc,
                    ))));
                }
                Some(Keyword::Deferrable) => {
                    self.advance()?;
                    modes.push(Node::DefElem(Box::new(make_def_elem(
                        "transaction_deferrable",
                        make_int_const(1, loc),
                        loc,
                    ))));
                }
                Some(Keyword::Not) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Deferrable)?;
                    modes.push(Node::DefElem(Box::new(make_def_elem(
                        "transaction_deferrable",
                        make_int_const(0, loc),
                        loc,
                    ))));
                }
                _ => break,
            }
            let _ = self.accept(TokenKind::Comma)?;
        }
        if modes.is_empty() {
            return Ok(None);
        }
        Ok(Some(modes))
    }

    // -----------------------------------------------------------------------
    // SET / RESET / SHOW

    pub(super) fn parse_set_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Set)?;
        let mut stmt = VariableSetStmt::default();
        if self.accept_kw(Keyword::Local)? {
            stmt.is_local = true;
        } else {
            let _ = self.accept_kw(Keyword::Session)?;
        }

        match self.cur_keyword() {
            Some(Keyword::Time) => {
                self.advance()?;
                self.expect_kw(Keyword::Zone)?;
                stmt.name = "timezone".to_string();
                match self.cur_keyword() {
                    Some(Keyword::Default | Keyword::Local) => {
                        self.advance()?;
                        stmt.kind = VariableSetKind::SetDefault;
                    }
                    Some(Keyword::Interval) => {
                        let value = self.parse_a_expr()?;
                        stmt.kind = VariableSetKind::SetValue;
                        stmt.args = Some(vec![value]);
                    }
                    _ => {
                        stmt.kind = VariableSetKind::SetValue;
                        stmt.args = Some(vec![self.var_value()?]);
                    }
                }
            }
            Some(Keyword::Transaction) => {
                self.advance()?;
                stmt.kind = VariableSetKind::SetMulti;
                stmt.name = "TRANSACTION".to_string();
                stmt.args = self.transaction_mode_list()?;
            }
            // SET SESSION CHARACTERISTICS AS TRANSACTION; the leading
            // SESSION was already taken as the session/local prefix
            Some(Keyword::Characteristics) => {
                self.advance()?;
                self.expect_kw(Keyword::As)?;
                self.expect_kw(Keyword::Transaction)?;
                stmt.kind = VariableSetKind::SetMulti;
                stmt.name = "SESSION CHARACTERISTICS".to_string();
                stmt.args = self.transaction_mode_list()?;
            }
            _ => {
                stmt.name = self.var_name()?;
                if self.accept_kw(Keyword::From)? {
                    self.expect_kw(Keyword::Current)?;
                    stmt.kind = VariableSetKind::SetCurrent;
                } else {
                    if !self.accept_kw(Keyword::To)? {
                        self.expect(TokenKind::Eq)?;
                    }
                    if self.accept_kw(Keyword::Default)? {
                        stmt.kind = VariableSetKind::SetDefault;
                    } else {
                        stmt.kind = VariableSetKind::SetValue;
                        let mut args = vec![self.var_value()?];
                        while self.accept(TokenKind::Comma)? {
                            args.push(self.var_value()?);
                        }
                        stmt.args = Some(args);
                    }
                }
            }
        }
        Ok(Node::VariableSetStmt(Box::new(stmt)))
    }

    fn var_name(&mut self) -> Result<String> {
        let mut name = self.col_id()?;
        while self.accept(TokenKind::Dot)? {
            name.push('.');
            name.push_str(&self.col_id()?);
        }
        Ok(name)
    }

    /// A SET value: boolean-ish words, identifiers, strings or numbers.
    fn var_value(&mut self) -> Result<Node> {
        let loc = self.loc();
        match self.kind() {
            TokenKind::Keyword(Keyword::True) => {
                self.advance()?;
                Ok(make_str_const("true", loc))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance()?;
                Ok(make_str_const("false", loc))
            }
            TokenKind::Keyword(Keyword::On) => {
                self.advance()?;
                Ok(make_str_const("on", loc))
            }
            TokenKind::SConst => Ok(make_str_const(self.advance()?.text, loc)),
            TokenKind::IConst | TokenKind::FConst | TokenKind::Minus | TokenKind::Plus => {
                let value = self.numeric_only()?;
                Ok(Node::AConst(Box::new(AConst { val: Some(value), isnull: false, location: loc })))
            }
            _ => {
                let word = self.non_reserved_word()?;
                Ok(make_str_const(word, loc))
            }
        }
    }

    pub(super) fn parse_reset_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Reset)?;
        let mut stmt = VariableSetStmt::default();
        if self.accept_kw(Keyword::All)? {
            stmt.kind = VariableSetKind::ResetAll;
        } else if self.at_kw(Keyword::Time) {
            self.advance()?;
            self.expect_kw(Keyword::Zone)?;
            stmt.kind = VariableSetKind::Reset;
            stmt.name = "timezone".to_string();
        } else {
            stmt.kind = VariableSetKind::Reset;
            stmt.name = self.var_name()?;
        }
        Ok(Node::VariableSetStmt(Box::new(stmt)))
    }

    pub(super) fn parse_show_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Show)?;
        let name = if self.accept_kw(Keyword::All)? {
            "all".to_string()
        } else if self.at_kw(Keyword::Time) {
            self.advance()?;
            self.expect_kw(Keyword::Zone)?;
            "timezone".to_string()
        } else if self.at_kw(Keyword::Transaction) {
            self.advance()?;
            self.expect_kw(Keyword::Isolation)?;
            self.expect_kw(Keyword::Level)?;
            "transaction_isolation".to_string()
        } else {
            self.var_name()?
        };
        Ok(Node::VariableShowStmt(Box::new(VariableShowStmt { name })))
    }

    // -----------------------------------------------------------------------
    // EXPLAIN

    pub(super) fn parse_explain_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Explain)?;
        let mut options = Vec::new();
        if self.kind() == TokenKind::LParen {
            self.advance()?;
            loop {
                let loc = self.loc();
                let defname = if self.kind() == TokenKind::FormatLa {
                    self.advance()?.text
                } else {
                    self.col_label()?
                };
                let arg = match self.kind() {
                    TokenKind::Comma | TokenKind::RParen => None,
                    _ => Some(self.def_arg()?),
                };
                options.push(Node::DefElem(Box::new(DefElem {
                    defname,
                    arg,
                    location: loc,
                    ..Default::default()
                })));
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        } else {
            loop {
                let loc = self.loc();
                if self.accept_kw(Keyword::Analyze)? || self.accept_kw(Keyword::Analyse)? {
                    options.push(Node::DefElem(Box::new(DefElem {
                        defname: "analyze".into(),
                        location: loc,
                        ..Default::default()
                    })));
                } else if self.accept_kw(Keyword::Verbose)? {
                    options.push(Node::DefElem(Box::new(DefElem {
                        defname: "verbose".into(),
                        location: loc,
                        ..Default::default()
                    })));
                } else {
                    break;
                }
            }
        }
        let query = self.parse_explainable_stmt()?;
        Ok(Node::ExplainStmt(Box::new(ExplainStmt {
            query: Some(query),
            options: if options.is_empty() { None } else { Some(options) },
        })))
    }

    fn parse_explainable_stmt(&mut self) -> Result<Node> {
        match self.cur_keyword() {
            Some(Keyword::Create | Keyword::Declare | Keyword::Execute | Keyword::Refresh) => {
                self.parse_stmt()
            }
            _ => self.parse_preparable_stmt(),
        }
    }

    // -----------------------------------------------------------------------
    // COPY

    pub(super) fn parse_copy_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Copy)?;
        let mut stmt = CopyStmt::default();
        let mut legacy_binary = false;

        if self.kind() == TokenKind::LParen {
            self.advance()?;
            stmt.query = Some(self.parse_preparable_stmt()?);
            self.expect(TokenKind::RParen)?;
        } else {
            legacy_binary = self.accept_kw(Keyword::Binary)?;
            stmt.relation = Some(Box::new(self.qualified_name()?));
            if self.accept(TokenKind::LParen)? {
                stmt.attlist = Some(self.name_list()?);
                self.expect(TokenKind::RParen)?;
            }
        }

        stmt.is_from = if self.accept_kw(Keyword::From)? {
            true
        } else {
            self.expect_kw(Keyword::To)?;
            false
        };

        if self.accept_kw(Keyword::Program)? {
            stmt.is_program = true;
            stmt.filename = self.sconst()?;
        } else if self.accept_kw(Keyword::Stdin)? || self.accept_kw(Keyword::Stdout)? {
            // filename stays empty for stdin/stdout
        } else {
            stmt.filename = self.sconst()?;
        }

        let mut options = Vec::new();
        if legacy_binary {
            options.push(Node::DefElem(Box::new(DefElem {
                defname: "format".into(),
                arg: Some(make_string("binary")),
                ..Default::default()
            })));
        }

        let _ = self.accept_kw(Keyword::With)?;
        if self.kind() == TokenKind::LParen {
            self.advance()?;
            loop {
                options.push(self.copy_generic_option()?);
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        } else {
            self.copy_legacy_options(&mut options)?;
        }
        if !options.is_empty() {
            stmt.options = Some(options);
        }

        if stmt.is_from && self.accept_kw(Keyword::Where)? {
            stmt.where_clause = Some(self.parse_a_expr()?);
        }
        Ok(Node::CopyStmt(Box::new(stmt)))
    }

    /// One element of the modern parenthesized COPY option list. FORMAT
    /// arrives as the lookahead-reclassified token when JSON follows.
    fn copy_generic_option(&mut self) -> Result<Node> {
        let loc = self.loc();
        let defname = if self.kind() == TokenKind::FormatLa {
            self.advance()?.text
        } else {
            self.col_label()?
        };
        let arg = match self.kind() {
            TokenKind::Comma | TokenKind::RParen => None,
            TokenKind::Star => {
                self.advance()?;
                Some(Node::AStar(AStar))
            }
            TokenKind::LParen => {
                self.advance()?;
                let names = self.name_list()?;
                self.expect(TokenKind::RParen)?;
                Some(Node::List(names))
            }
            _ => Some(self.def_arg()?),
        };
        Ok(Node::DefElem(Box::new(DefElem { defname, arg, location: loc, ..Default::default() })))
    }

    fn copy_legacy_options(&mut self, options: &mut Vec<Node>) -> Result<()> {
        loop {
            let loc = self.loc();
            match self.cur_keyword() {
                Some(Keyword::Binary) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "format",
                        make_string("binary"),
                        loc,
                    ))));
                }
                Some(Keyword::Csv) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "format",
                        make_string("csv"),
                        loc,
                    ))));
                }
                Some(Keyword::Freeze) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "freeze",
                        Node::Boolean(Boolean { boolval: true }),
                        loc,
                    ))));
                }
                Some(Keyword::Delimiter) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::As)?;
                    let value = self.sconst()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "delimiter",
                        make_string(value),
                        loc,
                    ))));
                }
                Some(Keyword::Null) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::As)?;
                    let value = self.sconst()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "null",
                        make_string(value),
                        loc,
                    ))));
                }
                Some(Keyword::Header) => {
                    self.advance()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "header",
                        Node::Boolean(Boolean { boolval: true }),
                        loc,
                    ))));
                }
                Some(Keyword::Quote) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::As)?;
                    let value = self.sconst()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "quote",
                        make_string(value),
                        loc,
                    ))));
                }
                Some(Keyword::Escape) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::As)?;
                    let value = self.sconst()?;
                    options.push(Node::DefElem(Box::new(make_def_elem(
                        "escape",
                        make_string(value),
                        loc,
                    ))));
                }
                _ => return Ok(()),
            }
        }
    }

    // -----------------------------------------------------------------------
    // GRANT / REVOKE

    pub(super) fn parse_grant_stmt(&mut self, is_grant: bool) -> Result<Node> {
        self.advance()?;

        let mut grant_option_for = false;
        if !is_grant && self.at_kw(Keyword::Grant) {
            self.advance()?;
            self.expect_kw(Keyword::Option)?;
            self.expect_kw(Keyword::For)?;
            grant_option_for = true;
        }
        let mut admin_option_for = false;
        if !is_grant && self.at_kw(Keyword::Admin) {
            self.advance()?;
            self.expect_kw(Keyword::Option)?;
            self.expect_kw(Keyword::For)?;
            admin_option_for = true;
        }

        // ALL [PRIVILEGES] means an empty privilege list
        let privileges = if self.at_kw(Keyword::All)
            && self.peek2()?.kind != TokenKind::Keyword(Keyword::Tables)
            && self.peek2()?.kind != TokenKind::Keyword(Keyword::Sequences)
            && self.peek2()?.kind != TokenKind::Keyword(Keyword::Functions)
        {
            self.advance()?;
            let _ = self.accept_kw(Keyword::Privileges)?;
            if self.accept(TokenKind::LParen)? {
                let cols = self.name_list()?;
                self.expect(TokenKind::RParen)?;
                Some(vec![Node::AccessPriv(Box::new(AccessPriv {
                    priv_name: String::new(),
                    cols: Some(cols),
                }))])
            } else {
                None
            }
        } else {
            let mut privs = vec![self.privilege()?];
            while self.accept(TokenKind::Comma)? {
                privs.push(self.privilege()?);
            }
            Some(privs)
        };

        if self.at_kw(Keyword::On) {
            self.advance()?;
            return self.parse_grant_on(is_grant, grant_option_for, privileges);
        }

        // GRANT role TO role / REVOKE role FROM role
        let mut stmt = GrantRoleStmt {
            granted_roles: privileges,
            is_grant,
            ..Default::default()
        };
        if is_grant {
            self.expect_kw(Keyword::To)?;
        } else {
            self.expect_kw(Keyword::From)?;
        }
        stmt.grantee_roles = Some(self.role_list()?);
        if is_grant && self.at_kw(Keyword::With) {
            self.advance()?;
            let loc = self.loc();
            if self.accept_kw(Keyword::Admin)? {
                self.expect_kw(Keyword::Option)?;
                stmt.opt = Some(vec![Node::DefElem(Box::new(make_def_elem(
                    "admin",
                    Node::Boolean(Boolean { boolval: true }),
                    loc,
                )))]);
            } else if self.accept_kw(Keyword::Inherit)? {
                let value = self.accept_boolean_word()?;
                stmt.opt = Some(vec![Node::DefElem(Box::new(make_def_elem(
                    "inherit",
                    Node::Boolean(Boolean { boolval: value }),
                    loc,
                )))]);
            } else {
                return self.syntax_error();
            }
        }
        if admin_option_for {
            stmt.opt = Some(vec![Node::DefElem(Box::new(make_def_elem(
                "admin",
                Node::Boolean(Boolean { boolval: false }),
                self.loc(),
            )))]);
        }
        if self.accept_kw(Keyword::Granted)? {
            self.expect_kw(Keyword::By)?;
            stmt.grantor = Some(Box::new(self.role_spec()?));
        }
        if !is_grant {
            stmt.behavior = self.opt_drop_behavior()?;
        }
        Ok(Node::GrantRoleStmt(Box::new(stmt)))
    }

    fn accept_boolean_word(&mut self) -> Result<bool> {
        if self.accept_kw(Keyword::True)? {
            return Ok(true);
        }
        self.expect_kw(Keyword::False)?;
        Ok(false)
    }

    fn parse_grant_on(
        &mut self,
        is_grant: bool,
        grant_option_for: bool,
        privileges: Option<Vec<Node>>,
    ) -> Result<Node> {
        let mut stmt = GrantStmt {
            is_grant,
            privileges,
            grant_option: grant_option_for,
            ..Default::default()
        };

        if self.accept_kw(Keyword::All)? {
            // GRANT ... ON ALL TABLES/SEQUENCES/FUNCTIONS IN SCHEMA
            stmt.targtype = GrantTargetType::AllInSchema;
            stmt.objtype = match self.cur_keyword() {
                Some(Keyword::Tables) => ObjectType::Table,
                Some(Keyword::Sequences) => ObjectType::Sequence,
                Some(Keyword::Functions) => ObjectType::Function,
                Some(Keyword::Procedures) => ObjectType::Procedure,
                Some(Keyword::Routines) => ObjectType::Routine,
                _ => return self.syntax_error(),
            };
            self.advance()?;
            self.expect_kw(Keyword::In)?;
            self.expect_kw(Keyword::Schema)?;
            let mut schemas = vec![make_string(self.col_id()?)];
            while self.accept(TokenKind::Comma)? {
                schemas.push(make_string(self.col_id()?));
            }
            stmt.objects = Some(schemas);
        } else {
            match self.cur_keyword() {
                Some(Keyword::Table) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Table;
                    stmt.objects = Some(self.any_name_list()?);
                }
                Some(Keyword::Sequence) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Sequence;
                    stmt.objects = Some(self.any_name_list()?);
                }
                Some(Keyword::Database) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Database;
                    stmt.objects = Some(self.string_name_list()?);
                }
                Some(Keyword::Schema) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Schema;
                    stmt.objects = Some(self.string_name_list()?);
                }
                Some(Keyword::Function) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Function;
                    stmt.objects = Some(self.function_with_argtypes_list()?);
                }
                Some(Keyword::Procedure) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Procedure;
                    stmt.objects = Some(self.function_with_argtypes_list()?);
                }
                Some(Keyword::Routine) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Routine;
                    stmt.objects = Some(self.function_with_argtypes_list()?);
                }
                Some(Keyword::Tablespace) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Tablespace;
                    stmt.objects = Some(self.string_name_list()?);
                }
                Some(Keyword::Type) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Type;
                    stmt.objects = Some(self.any_name_list()?);
                }
                Some(Keyword::Domain) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Domain;
                    stmt.objects = Some(self.any_name_list()?);
                }
                Some(Keyword::Language) => {
                    self.advance()?;
                    stmt.objtype = ObjectType::Language;
                    stmt.objects = Some(self.string_name_list()?);
                }
                _ => {
                    // plain relation list defaults to tables
                    stmt.objtype = ObjectType::Table;
                    stmt.objects = Some(self.any_name_list()?);
                }
            }
        }

        if is_grant {
            self.expect_kw(Keyword::To)?;
        } else {
            self.expect_kw(Keyword::From)?;
        }
        stmt.grantees = Some(self.role_list()?);

        if is_grant && self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect_kw(Keyword::Grant)?;
            self.expect_kw(Keyword::Option)?;
            stmt.grant_option = true;
        }
        if self.accept_kw(Keyword::Granted)? {
            self.expect_kw(Keyword::By)?;
            stmt.grantor = Some(Box::new(self.role_spec()?));
        }
        if !is_grant {
            stmt.behavior = self.opt_drop_behavior()?;
        }
        Ok(Node::GrantStmt(Box::new(stmt)))
    }

    fn string_name_list(&mut self) -> Result<Vec<Node>> {
        let mut names = vec![make_string(self.col_id()?)];
        while self.accept(TokenKind::Comma)? {
            names.push(make_string(self.col_id()?));
        }
        Ok(names)
    }

    fn function_with_argtypes_list(&mut self) -> Result<Vec<Node>> {
        let mut funcs = vec![Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?))];
        while self.accept(TokenKind::Comma)? {
            funcs.push(Node::ObjectWithArgs(Box::new(self.function_with_argtypes()?)));
        }
        Ok(funcs)
    }

    /// A privilege name with an optional column list.
    fn privilege(&mut self) -> Result<Node> {
        let priv_name = match self.cur_keyword() {
            Some(Keyword::Select | Keyword::References | Keyword::Create | Keyword::Alter) => {
                let mut name = self.advance()?.text;
                // ALTER SYSTEM is a two-word privilege
                if name == "alter" {
                    self.expect_kw(Keyword::System)?;
                    name = "alter system".to_string();
                }
                name
            }
            _ => self.non_reserved_word()?,
        };
        let mut cols = None;
        if self.accept(TokenKind::LParen)? {
            cols = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        Ok(Node::AccessPriv(Box::new(AccessPriv { priv_name, cols })))
    }

    // -----------------------------------------------------------------------
    // LOCK

    pub(super) fn parse_lock_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Lock)?;
        let _ = self.accept_kw(Keyword::Table)?;
        let mut relations = vec![Node::RangeVar(Box::new(self.relation_expr()?))];
        while self.accept(TokenKind::Comma)? {
            relations.push(Node::RangeVar(Box::new(self.relation_expr()?)));
        }
        let mut mode = ACCESS_EXCLUSIVE_LOCK;
        if self.accept_kw(Keyword::In)? {
            mode = match self.cur_keyword() {
                Some(Keyword::Access) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Share)? {
                        ACCESS_SHARE_LOCK
                    } else {
                        self.expect_kw(Keyword::Exclusive)?;
                        ACCESS_EXCLUSIVE_LOCK
                    }
                }
                Some(Keyword::Row) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Share)? {
                        ROW_SHARE_LOCK
                    } else {
                        self.expect_kw(Keyword::Exclusive)?;
                        ROW_EXCLUSIVE_LOCK
                    }
                }
                Some(Keyword::Share) => {
                    self.advance()?;
                    if self.accept_kw(Keyword::Update)? {
                        self.expect_kw(Keyword::Exclusive)?;
                        SHARE_UPDATE_EXCLUSIVE_LOCK
                    } else if self.accept_kw(Keyword::Row)? {
                        self.expect_kw(Keyword::Exclusive)?;
                        SHARE_ROW_EXCLUSIVE_LOCK
                    } else {
                        SHARE_LOCK
                    }
                }
                Some(Keyword::Exclusive) => {
                    self.advance()?;
                    EXCLUSIVE_LOCK
                }
                _ => return self.syntax_error(),
            };
            self.expect_kw(Keyword::Mode)?;
        }
        let nowait = self.accept_kw(Keyword::Nowait)?;
        Ok(Node::LockStmt(Box::new(LockStmt { relations: Some(relations), mode, nowait })))
    }

    // -----------------------------------------------------------------------
    // VACUUM / ANALYZE

    pub(super) fn parse_vacuum_stmt(&mut self, is_vacuumcmd: bool) -> Result<Node> {
        self.advance()?;
        let mut options = Vec::new();

        if self.kind() == TokenKind::LParen {
            self.advance()?;
            loop {
                let loc = self.loc();
                let defname = match self.cur_keyword() {
                    Some(Keyword::Analyze | Keyword::Analyse) => {
                        self.advance()?;
                        "analyze".to_string()
                    }
                    Some(Keyword::Verbose) => {
                        self.advance()?;
                        "verbose".to_string()
                    }
                    Some(Keyword::Freeze) => {
                        self.advance()?;
                        "freeze".to_string()
                    }
                    Some(Keyword::Full) => {
                        self.advance()?;
                        "full".to_string()
                    }
                    _ => self.non_reserved_word()?,
                };
                let arg = match self.kind() {
                    TokenKind::Comma | TokenKind::RParen => None,
                    _ => Some(self.def_arg()?),
                };
                options.push(Node::DefElem(Box::new(DefElem {
                    defname,
                    arg,
                    location: loc,
                    ..Default::default()
                })));
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        } else {
            loop {
                let loc = self.loc();
                let defname = match self.cur_keyword() {
                    Some(Keyword::Full) if is_vacuumcmd => "full",
                    Some(Keyword::Freeze) if is_vacuumcmd => "freeze",
                    Some(Keyword::Verbose) => "verbose",
                    Some(Keyword::Analyze | Keyword::Analyse) if is_vacuumcmd => "analyze",
                    _ => break,
                };
                self.advance()?;
                options.push(Node::DefElem(Box::new(DefElem {
                    defname: defname.to_string(),
                    location: loc,
                    ..Default::default()
                })));
            }
        }

        let mut rels = Vec::new();
        while self.at_col_id() {
            let rel = self.qualified_name()?;
            let mut vr = VacuumRelation { relation: Some(Box::new(rel)), va_cols: None };
            if self.accept(TokenKind::LParen)? {
                vr.va_cols = Some(self.name_list()?);
                self.expect(TokenKind::RParen)?;
            }
            rels.push(Node::VacuumRelation(Box::new(vr)));
            if !self.accept(TokenKind::Comma)? {
                break;
            }
        }

        Ok(Node::VacuumStmt(Box::new(VacuumStmt {
            options: if options.is_empty() { None } else { Some(options) },
            rels: if rels.is_empty() { None } else { Some(rels) },
            is_vacuumcmd,
        })))
    }

    // -----------------------------------------------------------------------
    // prepared statements

    pub(super) fn parse_prepare_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Prepare)?;
        let name = self.col_id()?;
        let mut argtypes = None;
        if self.accept(TokenKind::LParen)? {
            let mut types = vec![Node::TypeName(Box::new(self.parse_typename()?))];
            while self.accept(TokenKind::Comma)? {
                types.push(Node::TypeName(Box::new(self.parse_typename()?)));
            }
            self.expect(TokenKind::RParen)?;
            argtypes = Some(types);
        }
        self.expect_kw(Keyword::As)?;
        let query = self.parse_preparable_stmt()?;
        Ok(Node::PrepareStmt(Box::new(PrepareStmt { name, argtypes, query: Some(query) })))
    }

    pub(super) fn parse_execute_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Execute)?;
        let name = self.col_id()?;
        let mut params = None;
        if self.accept(TokenKind::LParen)? {
            params = Some(self.expr_list()?);
            self.expect(TokenKind::RParen)?;
        }
        Ok(Node::ExecuteStmt(Box::new(ExecuteStmt { name, params })))
    }

    pub(super) fn parse_deallocate_stmt(&mut self) -> Result<Node> {
        let loc = self.loc();
        self.expect_kw(Keyword::Deallocate)?;
        let _ = self.accept_kw(Keyword::Prepare)?;
        if self.accept_kw(Keyword::All)? {
            return Ok(Node::DeallocateStmt(Box::new(DeallocateStmt {
                name: String::new(),
                isall: true,
                location: loc,
            })));
        }
        let name = self.col_id()?;
        Ok(Node::DeallocateStmt(Box::new(DeallocateStmt { name, isall: false, location: loc })))
    }

    // -----------------------------------------------------------------------
    // cursors

    pub(super) fn parse_declare_cursor_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Declare)?;
        let portalname = self.col_id()?;
        let mut options = 0;
        loop {
            match self.cur_keyword() {
                Some(Keyword::Binary) => {
                    self.advance()?;
                    options |= CURSOR_OPT_BINARY;
                }
                Some(Keyword::Insensitive) => {
                    self.advance()?;
                    options |= CURSOR_OPT_INSENSITIVE;
                }
                Some(Keyword::Asensitive) => {
                    self.advance()?;
                    options |= CURSOR_OPT_ASENSITIVE;
                }
                Some(Keyword::Scroll) => {
                    self.advance()?;
                    options |= CURSOR_OPT_SCROLL;
                }
                Some(Keyword::No) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Scroll)?;
                    options |= CURSOR_OPT_NO_SCROLL;
                }
                _ => break,
            }
        }
        self.expect_kw(Keyword::Cursor)?;
        if self.at_kw(Keyword::With) {
            self.advance()?;
            self.expect_kw(Keyword::Hold)?;
            options |= CURSOR_OPT_HOLD;
        } else if self.at_kw(Keyword::Without) || self.kind() == TokenKind::WithoutLa {
            self.advance()?;
            self.expect_kw(Keyword::Hold)?;
        }
        self.expect_kw(Keyword::For)?;
        let query = Node::SelectStmt(self.parse_select_stmt(None)?);
        Ok(Node::DeclareCursorStmt(Box::new(DeclareCursorStmt {
            portalname,
            options,
            query: Some(query),
        })))
    }

    pub(super) fn parse_fetch_stmt(&mut self, ismove: bool) -> Result<Node> {
        self.advance()?;
        let mut stmt = FetchStmt { ismove, how_many: 1, ..Default::default() };

        match self.cur_keyword() {
            Some(Keyword::Next) => {
                self.advance()?;
            }
            Some(Keyword::Prior) => {
                self.advance()?;
                stmt.direction = FetchDirection::Backward;
            }
            Some(Keyword::First) => {
                self.advance()?;
                stmt.direction = FetchDirection::Absolute;
            }
            Some(Keyword::Last) => {
                self.advance()?;
                stmt.direction = FetchDirection::Absolute;
                stmt.how_many = -1;
            }
            Some(Keyword::Absolute) => {
                self.advance()?;
                stmt.direction = FetchDirection::Absolute;
                stmt.how_many = self.signed_iconst()?;
            }
            Some(Keyword::Relative) => {
                self.advance()?;
                stmt.direction = FetchDirection::Relative;
                stmt.how_many = self.signed_iconst()?;
            }
            Some(Keyword::All) => {
                self.advance()?;
                stmt.how_many = FETCH_ALL;
            }
            Some(Keyword::Forward) => {
                self.advance()?;
                if self.accept_kw(Keyword::All)? {
                    stmt.how_many = FETCH_ALL;
                } else if matches!(self.kind(), TokenKind::IConst | TokenKind::Minus | TokenKind::Plus)
                {
                    stmt.how_many = self.signed_iconst()?;
                }
            }
            Some(Keyword::Backward) => {
                self.advance()?;
                stmt.direction = FetchDirection::Backward;
                if self.accept_kw(Keyword::All)? {
                    stmt.how_many = FETCH_ALL;
                } else if matches!(self.kind(), TokenKind::IConst | TokenKind::Minus | TokenKind::Plus)
                {
                    stmt.how_many = self.signed_iconst()?;
                }
            }
            _ => {
                if matches!(self.kind(), TokenKind::IConst | TokenKind::Minus | TokenKind::Plus) {
                    stmt.how_many = self.signed_iconst()?;
                }
            }
        }

        if !self.accept_kw(Keyword::From)? {
            let _ = self.accept_kw(Keyword::In)?;
        }
        stmt.portalname = self.col_id()?;
        Ok(Node::FetchStmt(Box::new(stmt)))
    }

    pub(super) fn parse_close_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Close)?;
        if self.accept_kw(Keyword::All)? {
            return Ok(Node::ClosePortalStmt(Box::new(ClosePortalStmt {
                portalname: String::new(),
            })));
        }
        let portalname = self.col_id()?;
        Ok(Node::ClosePortalStmt(Box::new(ClosePortalStmt { portalname })))
    }

    // -----------------------------------------------------------------------
    // notifications and other small statements

    pub(super) fn parse_discard_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Discard)?;
        let target = match self.cur_keyword() {
            Some(Keyword::All) => DiscardMode::All,
            Some(Keyword::Plans) => DiscardMode::Plans,
            Some(Keyword::Sequences) => DiscardMode::Sequences,
            Some(Keyword::Temp | Keyword::Temporary) => DiscardMode::Temp,
            _ => return self.syntax_error(),
        };
        self.advance()?;
        Ok(Node::DiscardStmt(Box::new(DiscardStmt { target })))
    }

    pub(super) fn parse_listen_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Listen)?;
        let conditionname = self.col_id()?;
        Ok(Node::ListenStmt(Box::new(ListenStmt { conditionname })))
    }

    pub(super) fn parse_unlisten_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Unlisten)?;
        if self.accept(TokenKind::Star)? {
            return Ok(Node::UnlistenStmt(Box::new(UnlistenStmt {
                conditionname: String::new(),
            })));
        }
        let conditionname = self.col_id()?;
        Ok(Node::UnlistenStmt(Box::new(UnlistenStmt { conditionname })))
    }

    pub(super) fn parse_notify_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Notify)?;
        let conditionname = self.col_id()?;
        let payload = if self.accept(TokenKind::Comma)? {
            self.sconst()?
        } else {
            String::new()
        };
        Ok(Node::NotifyStmt(Box::new(NotifyStmt { conditionname, payload })))
    }

    pub(super) fn parse_do_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Do)?;
        let mut args = Vec::new();
        loop {
            let loc = self.loc();
            match self.kind() {
                TokenKind::SConst => {
                    let code = self.advance()?.text;
                    args.push(Node::DefElem(Box::new(make_def_elem(
                        "as",
                        make_string(code),
                        loc,
                    ))));
                }
                TokenKind::Keyword(Keyword::Language) => {
                    self.advance()?;
                    let lang = self.non_reserved_word_or_sconst()?;
                    args.push(Node::DefElem(Box::new(make_def_elem(
                        "language",
                        make_string(lang),
                        loc,
                    ))));
                }
                _ => break,
            }
        }
        if args.is_empty() {
            return self.syntax_error();
        }
        Ok(Node::DoStmt(Box::new(DoStmt { args: Some(args) })))
    }

    pub(super) fn parse_call_stmt(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::Call)?;
        let loc = self.loc();
        let funcname: Vec<Node> = self.any_name()?;
        let call = self.parse_func_call(funcname, loc)?;
        match call {
            Node::FuncCall(fc) => Ok(Node::CallStmt(Box::new(CallStmt { funccall: Some(fc) }))),
            _ => self.syntax_error(),
        }
    }
}
