//! The SQL grammar.
//!
//! A hand-written recursive-descent parser over the lexer's token stream,
//! with a precedence-climbing expression grammar (expr.rs) and one-token
//! lookahead reclassification at the token-feed boundary, the same device
//! PostgreSQL's base_yylex uses to resolve grammar ambiguities like
//! `TIMESTAMP WITHOUT TIME ZONE` vs the identifier `without`.
//!
//! Tokens are pulled lazily, one at a time; nodes are built bottom-up and
//! never mutated once a production completes.

mod ddl;
mod dml;
mod expr;
mod select;
mod utility;

use crate::ast::*;
use crate::keywords::{Keyword, KeywordCategory};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::{ParseError, Result};

/// Nested parenthesized expressions, CASE arms and subqueries deeper than
/// this fail cleanly instead of overflowing the call stack.
const MAX_NESTING: u32 = 1000;

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The current token, already reclassified.
    cur: Token,
    /// The token after `cur`, pulled early when reclassification had to
    /// peek. Not yet reclassified itself.
    buffered: Option<Token>,
    depth: u32,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(input),
            cur: Token { kind: TokenKind::Eof, text: String::new(), ival: None, loc: 0 },
            buffered: None,
            depth: 0,
        }
    }

    /// Parses the whole input as a semicolon-separated statement list.
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<RawStmt>> {
        self.fill()?;
        let mut stmts = Vec::new();
        loop {
            while self.kind() == TokenKind::Semicolon {
                self.advance()?;
            }
            if self.kind() == TokenKind::Eof {
                return Ok(stmts);
            }
            let start = self.cur.loc;
            let stmt = self.parse_stmt()?;
            match self.kind() {
                TokenKind::Semicolon => {
                    let len = (self.cur.loc - start) as ParseLoc;
                    self.advance()?;
                    stmts.push(RawStmt { stmt, stmt_location: start as ParseLoc, stmt_len: len });
                }
                TokenKind::Eof => {
                    stmts.push(RawStmt { stmt, stmt_location: start as ParseLoc, stmt_len: 0 });
                }
                _ => return self.syntax_error(),
            }
        }
    }

    // -----------------------------------------------------------------------
    // token plumbing

    /// Loads the next token into `cur`, applying the one-token lookahead
    /// replacements PostgreSQL's parser layer performs before the grammar
    /// sees the stream.
    fn fill(&mut self) -> Result<()> {
        let mut tok = match self.buffered.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };

        let wants_peek = matches!(
            tok.kind,
            TokenKind::Keyword(
                Keyword::Not | Keyword::Nulls | Keyword::With | Keyword::Without | Keyword::Format
            )
        );
        if wants_peek {
            let next = self.lexer.next_token()?;
            tok.kind = match (tok.kind, next.kind) {
                (
                    TokenKind::Keyword(Keyword::Not),
                    TokenKind::Keyword(
                        Keyword::Between
                        | Keyword::In
                        | Keyword::Like
                        | Keyword::Ilike
                        | Keyword::Similar,
                    ),
                ) => TokenKind::NotLa,
                (
                    TokenKind::Keyword(Keyword::Nulls),
                    TokenKind::Keyword(
                        Keyword::First | Keyword::Last | Keyword::Distinct | Keyword::Not,
                    ),
                ) => TokenKind::NullsLa,
                (
                    TokenKind::Keyword(Keyword::With),
                    TokenKind::Keyword(Keyword::Time | Keyword::Ordinality),
                ) => TokenKind::WithLa,
                (TokenKind::Keyword(Keyword::Without), TokenKind::Keyword(Keyword::Time)) => {
                    TokenKind::WithoutLa
                }
                (TokenKind::Keyword(Keyword::Format), _) if next.text == "json" => {
                    TokenKind::FormatLa
                }
                (kind, _) => kind,
            };
            self.buffered = Some(next);
        }
        self.cur = tok;
        Ok(())
    }

    /// Consumes the current token, returning it.
    fn advance(&mut self) -> Result<Token> {
        let tok = std::mem::replace(
            &mut self.cur,
            Token { kind: TokenKind::Eof, text: String::new(), ival: None, loc: 0 },
        );
        self.fill()?;
        Ok(tok)
    }

    fn kind(&self) -> TokenKind {
        self.cur.kind
    }

    fn loc(&self) -> ParseLoc {
        self.cur.loc as ParseLoc
    }

    /// Peeks at the token after the current one, without reclassification.
    fn peek2(&mut self) -> Result<&Token> {
        if self.buffered.is_none() {
            self.buffered = Some(self.lexer.next_token()?);
        }
        Ok(self.buffered.as_ref().unwrap())
    }

    fn at_kw(&self, kw: Keyword) -> bool {
        self.cur.kind == TokenKind::Keyword(kw)
    }

    fn accept_kw(&mut self, kw: Keyword) -> Result<bool> {
        if self.at_kw(kw) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect_kw(&mut self, kw: Keyword) -> Result<()> {
        if self.at_kw(kw) {
            self.advance()?;
            return Ok(());
        }
        self.syntax_error()
    }

    fn accept(&mut self, kind: TokenKind) -> Result<bool> {
        if self.cur.kind == kind {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.cur.kind == kind {
            return self.advance();
        }
        self.syntax_error()
    }

    fn syntax_error<T>(&self) -> Result<T> {
        self.error_at(self.cur.loc, "")
    }

    fn error_at<T>(&self, position: usize, message: &str) -> Result<T> {
        let message = if !message.is_empty() {
            message.to_string()
        } else if self.cur.kind == TokenKind::Eof {
            "syntax error at end of input".to_string()
        } else {
            format!("syntax error at or near \"{}\"", self.cur.text)
        };
        Err(ParseError { message, position })
    }

    fn check_depth(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError {
                message: "statement nesting too deep".to_string(),
                position: self.cur.loc,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // -----------------------------------------------------------------------
    // identifier classification

    /// The keyword behind the current token, looking through the lookahead
    /// reclassifications.
    fn cur_keyword(&self) -> Option<Keyword> {
        match self.cur.kind {
            TokenKind::Keyword(kw) => Some(kw),
            TokenKind::NotLa => Some(Keyword::Not),
            TokenKind::NullsLa => Some(Keyword::Nulls),
            TokenKind::WithLa => Some(Keyword::With),
            TokenKind::WithoutLa => Some(Keyword::Without),
            TokenKind::FormatLa => Some(Keyword::Format),
            _ => None,
        }
    }

    /// Can the current token be a ColId (table, column, variable name)?
    fn at_col_id(&self) -> bool {
        match self.cur.kind {
            TokenKind::Ident => true,
            _ => match self.cur_keyword() {
                Some(kw) => matches!(
                    kw.category(),
                    KeywordCategory::Unreserved | KeywordCategory::ColName
                ),
                None => false,
            },
        }
    }

    /// Consumes a ColId: an identifier, an unreserved keyword, or a
    /// column-name keyword.
    fn col_id(&mut self) -> Result<String> {
        if self.at_col_id() {
            return Ok(self.advance()?.text);
        }
        self.syntax_error()
    }

    /// Consumes a name usable as a type or function name: an identifier, an
    /// unreserved keyword, or a type/function-name keyword.
    fn type_function_name(&mut self) -> Result<String> {
        let ok = match self.cur.kind {
            TokenKind::Ident => true,
            _ => match self.cur_keyword() {
                Some(kw) => matches!(
                    kw.category(),
                    KeywordCategory::Unreserved | KeywordCategory::TypeFuncName
                ),
                None => false,
            },
        };
        if ok {
            return Ok(self.advance()?.text);
        }
        self.syntax_error()
    }

    /// Consumes a ColLabel: an identifier or any keyword at all.
    fn col_label(&mut self) -> Result<String> {
        if self.cur.kind == TokenKind::Ident || self.cur_keyword().is_some() {
            return Ok(self.advance()?.text);
        }
        self.syntax_error()
    }

    /// Consumes a NonReservedWord: anything but a fully reserved keyword.
    fn non_reserved_word(&mut self) -> Result<String> {
        let ok = match self.cur.kind {
            TokenKind::Ident => true,
            _ => match self.cur_keyword() {
                Some(kw) => kw.category() != KeywordCategory::Reserved,
                None => false,
            },
        };
        if ok {
            return Ok(self.advance()?.text);
        }
        self.syntax_error()
    }

    fn non_reserved_word_or_sconst(&mut self) -> Result<String> {
        if self.cur.kind == TokenKind::SConst {
            return Ok(self.advance()?.text);
        }
        self.non_reserved_word()
    }

    fn sconst(&mut self) -> Result<String> {
        Ok(self.expect(TokenKind::SConst)?.text)
    }

    fn iconst(&mut self) -> Result<i64> {
        let tok = self.expect(TokenKind::IConst)?;
        Ok(tok.ival.unwrap_or(0))
    }

    /// Signed integer constant, for sequence options and FETCH counts.
    fn signed_iconst(&mut self) -> Result<i64> {
        if self.accept(TokenKind::Minus)? {
            return Ok(-self.iconst()?);
        }
        let _ = self.accept(TokenKind::Plus)?;
        self.iconst()
    }

    /// NumericOnly: a possibly-signed integer or float constant node.
    fn numeric_only(&mut self) -> Result<Node> {
        let negate = if self.accept(TokenKind::Minus)? {
            true
        } else {
            let _ = self.accept(TokenKind::Plus)?;
            false
        };
        match self.kind() {
            TokenKind::IConst => {
                let value = self.iconst()?;
                Ok(Node::Integer(Integer { ival: if negate { -value } else { value } }))
            }
            TokenKind::FConst => {
                let text = self.advance()?.text;
                Ok(Node::Float(Float {
                    fval: if negate { format!("-{text}") } else { text },
                }))
            }
            _ => self.syntax_error(),
        }
    }

    // -----------------------------------------------------------------------
    // names

    /// Parses a possibly-qualified relation name into a RangeVar.
    fn qualified_name(&mut self) -> Result<RangeVar> {
        let loc = self.loc();
        let first = self.col_id()?;
        let mut rv = RangeVar { relname: first, location: loc, ..Default::default() };
        if self.accept(TokenKind::Dot)? {
            let second = self.col_label()?;
            if self.accept(TokenKind::Dot)? {
                rv.catalogname = rv.relname;
                rv.schemaname = second;
                rv.relname = self.col_label()?;
            } else {
                rv.schemaname = rv.relname;
                rv.relname = second;
            }
        }
        Ok(rv)
    }

    /// Parses a dotted name into a list of String nodes.
    fn any_name(&mut self) -> Result<Vec<Node>> {
        let mut parts = vec![make_string(self.col_id()?)];
        while self.accept(TokenKind::Dot)? {
            parts.push(make_string(self.col_label()?));
        }
        Ok(parts)
    }

    fn any_name_list(&mut self) -> Result<Vec<Node>> {
        let mut names = vec![Node::List(self.any_name()?)];
        while self.accept(TokenKind::Comma)? {
            names.push(Node::List(self.any_name()?));
        }
        Ok(names)
    }

    /// A comma-separated list of ColIds as String nodes.
    fn name_list(&mut self) -> Result<Vec<Node>> {
        let mut names = vec![make_string(self.col_id()?)];
        while self.accept(TokenKind::Comma)? {
            names.push(make_string(self.col_id()?));
        }
        Ok(names)
    }

    fn qualified_name_list(&mut self) -> Result<Vec<Node>> {
        let mut rels = vec![Node::RangeVar(Box::new(self.qualified_name()?))];
        while self.accept(TokenKind::Comma)? {
            rels.push(Node::RangeVar(Box::new(self.qualified_name()?)));
        }
        Ok(rels)
    }

    /// `[ONLY] name ['*']`, the relation form used by UPDATE/DELETE/LOCK.
    fn relation_expr(&mut self) -> Result<RangeVar> {
        if self.accept_kw(Keyword::Only)? {
            let mut rv = if self.accept(TokenKind::LParen)? {
                let rv = self.qualified_name()?;
                self.expect(TokenKind::RParen)?;
                rv
            } else {
                self.qualified_name()?
            };
            rv.inh = false;
            Ok(rv)
        } else {
            let rv = self.qualified_name()?;
            let _ = self.accept(TokenKind::Star)?;
            Ok(rv)
        }
    }

    /// `relation_expr [[AS] alias]` without a column alias list.
    fn relation_expr_opt_alias(&mut self) -> Result<RangeVar> {
        let mut rv = self.relation_expr()?;
        if self.accept_kw(Keyword::As)? {
            rv.alias = Some(Box::new(Alias { aliasname: self.col_id()?, colnames: None }));
        } else if self.at_col_id() && !self.at_kw(Keyword::Set) {
            // a bare "set" here is UPDATE's SET keyword, not an alias
            rv.alias = Some(Box::new(Alias { aliasname: self.col_id()?, colnames: None }));
        }
        Ok(rv)
    }

    /// A RoleSpec: a role name or one of the pseudo-roles.
    fn role_spec(&mut self) -> Result<RoleSpec> {
        let loc = self.loc();
        let spec = match self.cur_keyword() {
            Some(Keyword::CurrentRole) => {
                self.advance()?;
                RoleSpec { roletype: RoleSpecType::CurrentRole, location: loc, ..Default::default() }
            }
            Some(Keyword::CurrentUser) => {
                self.advance()?;
                RoleSpec { roletype: RoleSpecType::CurrentUser, location: loc, ..Default::default() }
            }
            Some(Keyword::SessionUser) => {
                self.advance()?;
                RoleSpec { roletype: RoleSpecType::SessionUser, location: loc, ..Default::default() }
            }
            _ => {
                let name = self.role_id()?;
                if name == "public" {
                    RoleSpec { roletype: RoleSpecType::Public, location: loc, ..Default::default() }
                } else {
                    RoleSpec {
                        roletype: RoleSpecType::CString,
                        rolename: name,
                        location: loc,
                    }
                }
            }
        };
        Ok(spec)
    }

    fn role_id(&mut self) -> Result<String> {
        self.col_id()
    }

    fn role_list(&mut self) -> Result<Vec<Node>> {
        let mut roles = vec![Node::RoleSpec(Box::new(self.role_spec()?))];
        while self.accept(TokenKind::Comma)? {
            roles.push(Node::RoleSpec(Box::new(self.role_spec()?)));
        }
        Ok(roles)
    }

    // -----------------------------------------------------------------------
    // type names

    /// Parses a full Typename: optional SETOF, base type, modifiers and
    /// array bounds.
    fn parse_typename(&mut self) -> Result<TypeName> {
        let setof = self.accept_kw(Keyword::Setof)?;
        let mut tn = self.simple_typename()?;
        tn.setof = setof;

        if self.at_kw(Keyword::Array) {
            self.advance()?;
            if self.accept(TokenKind::LBracket)? {
                let bound = self.iconst()?;
                self.expect(TokenKind::RBracket)?;
                tn.array_bounds = Some(vec![Node::Integer(Integer { ival: bound })]);
            } else {
                tn.array_bounds = Some(vec![Node::Integer(Integer { ival: -1 })]);
            }
        } else if self.kind() == TokenKind::LBracket {
            let mut bounds = Vec::new();
            while self.accept(TokenKind::LBracket)? {
                if self.kind() == TokenKind::IConst {
                    bounds.push(Node::Integer(Integer { ival: self.iconst()? }));
                } else {
                    bounds.push(Node::Integer(Integer { ival: -1 }));
                }
                self.expect(TokenKind::RBracket)?;
            }
            tn.array_bounds = Some(bounds);
        }
        Ok(tn)
    }

    /// The keyword-driven system types plus generic qualified names. System
    /// type keywords map to their pg_catalog names the way PostgreSQL's
    /// grammar maps them, so the tree matches what the backend builds.
    fn simple_typename(&mut self) -> Result<TypeName> {
        let loc = self.loc();
        let kw = self.cur_keyword();
        match kw {
            Some(Keyword::Int | Keyword::Integer) => {
                self.advance()?;
                Ok(system_type("int4", loc))
            }
            Some(Keyword::Smallint) => {
                self.advance()?;
                Ok(system_type("int2", loc))
            }
            Some(Keyword::Bigint) => {
                self.advance()?;
                Ok(system_type("int8", loc))
            }
            Some(Keyword::Real) => {
                self.advance()?;
                Ok(system_type("float4", loc))
            }
            Some(Keyword::Float) => {
                self.advance()?;
                if self.accept(TokenKind::LParen)? {
                    let precision = self.iconst()?;
                    self.expect(TokenKind::RParen)?;
                    if precision < 1 || precision > 53 {
                        return self.error_at(loc as usize, "precision for type float must be between 1 and 53");
                    }
                    if precision <= 24 {
                        Ok(system_type("float4", loc))
                    } else {
                        Ok(system_type("float8", loc))
                    }
                } else {
                    Ok(system_type("float8", loc))
                }
            }
            Some(Keyword::Double) => {
                self.advance()?;
                self.expect_kw(Keyword::Precision)?;
                Ok(system_type("float8", loc))
            }
            Some(Keyword::Decimal | Keyword::Dec | Keyword::Numeric) => {
                self.advance()?;
                let mut tn = system_type("numeric", loc);
                tn.typmods = self.opt_type_modifiers()?;
                Ok(tn)
            }
            Some(Keyword::Boolean) => {
                self.advance()?;
                Ok(system_type("bool", loc))
            }
            Some(Keyword::Bit) => {
                self.advance()?;
                let varying = self.accept_kw(Keyword::Varying)?;
                let mut tn = system_type(if varying { "varbit" } else { "bit" }, loc);
                tn.typmods = self.opt_type_modifiers()?;
                Ok(tn)
            }
            Some(Keyword::Character | Keyword::Char | Keyword::Nchar) => {
                self.advance()?;
                let varying = self.accept_kw(Keyword::Varying)?;
                let mut tn = system_type(if varying { "varchar" } else { "bpchar" }, loc);
                tn.typmods = self.opt_type_modifiers()?;
                Ok(tn)
            }
            Some(Keyword::National) => {
                self.advance()?;
                if !self.accept_kw(Keyword::Character)? {
                    self.expect_kw(Keyword::Char)?;
                }
                let varying = self.accept_kw(Keyword::Varying)?;
                let mut tn = system_type(if varying { "varchar" } else { "bpchar" }, loc);
                tn.typmods = self.opt_type_modifiers()?;
                Ok(tn)
            }
            Some(Keyword::Varchar) => {
                self.advance()?;
                let mut tn = system_type("varchar", loc);
                tn.typmods = self.opt_type_modifiers()?;
                Ok(tn)
            }
            Some(Keyword::Time) => {
                self.advance()?;
                let typmods = self.opt_precision_modifier()?;
                let with_tz = self.opt_timezone()?;
                let mut tn = system_type(if with_tz { "timetz" } else { "time" }, loc);
                tn.typmods = typmods;
                Ok(tn)
            }
            Some(Keyword::Timestamp) => {
                self.advance()?;
                let typmods = self.opt_precision_modifier()?;
                let with_tz = self.opt_timezone()?;
                let mut tn = system_type(if with_tz { "timestamptz" } else { "timestamp" }, loc);
                tn.typmods = typmods;
                Ok(tn)
            }
            Some(Keyword::Interval) => {
                self.advance()?;
                let mut tn = system_type("interval", loc);
                tn.typmods = self.opt_interval()?;
                Ok(tn)
            }
            _ => {
                let mut names = vec![make_string(self.type_function_name()?)];
                while self.accept(TokenKind::Dot)? {
                    names.push(make_string(self.col_label()?));
                }
                let mut tn = TypeName { names: Some(names), location: loc, ..Default::default() };
                if self.kind() == TokenKind::Percent {
                    self.advance()?;
                    self.expect_kw(Keyword::Type)?;
                    tn.pct_type = true;
                } else {
                    tn.typmods = self.opt_type_modifiers()?;
                }
                Ok(tn)
            }
        }
    }

    fn opt_type_modifiers(&mut self) -> Result<Option<Vec<Node>>> {
        if self.accept(TokenKind::LParen)? {
            let mods = self.expr_list()?;
            self.expect(TokenKind::RParen)?;
            return Ok(Some(mods));
        }
        Ok(None)
    }

    fn opt_precision_modifier(&mut self) -> Result<Option<Vec<Node>>> {
        if self.accept(TokenKind::LParen)? {
            let precision = self.iconst()?;
            self.expect(TokenKind::RParen)?;
            return Ok(Some(vec![Node::Integer(Integer { ival: precision })]));
        }
        Ok(None)
    }

    /// `WITH TIME ZONE` (true) / `WITHOUT TIME ZONE` (false) / nothing.
    fn opt_timezone(&mut self) -> Result<bool> {
        if self.accept(TokenKind::WithLa)? {
            self.expect_kw(Keyword::Time)?;
            self.expect_kw(Keyword::Zone)?;
            return Ok(true);
        }
        if self.accept(TokenKind::WithoutLa)? {
            self.expect_kw(Keyword::Time)?;
            self.expect_kw(Keyword::Zone)?;
        }
        Ok(false)
    }

    /// INTERVAL field selection, as the typmod mask PostgreSQL encodes.
    fn opt_interval(&mut self) -> Result<Option<Vec<Node>>> {
        let mask = match self.cur_keyword() {
            Some(Keyword::Year) => {
                self.advance()?;
                if self.accept_kw(Keyword::To)? {
                    self.expect_kw(Keyword::Month)?;
                    INTERVAL_MASK_YEAR | INTERVAL_MASK_MONTH
                } else {
                    INTERVAL_MASK_YEAR
                }
            }
            Some(Keyword::Month) => {
                self.advance()?;
                INTERVAL_MASK_MONTH
            }
            Some(Keyword::Day) => {
                self.advance()?;
                if self.accept_kw(Keyword::To)? {
                    match self.cur_keyword() {
                        Some(Keyword::Hour) => {
                            self.advance()?;
                            INTERVAL_MASK_DAY | INTERVAL_MASK_HOUR
                        }
                        Some(Keyword::Minute) => {
                            self.advance()?;
                            INTERVAL_MASK_DAY | INTERVAL_MASK_HOUR | INTERVAL_MASK_MINUTE
                        }
                        Some(Keyword::Second) => {
                            self.advance()?;
                            INTERVAL_MASK_DAY
                                | INTERVAL_MASK_HOUR
                                | INTERVAL_MASK_MINUTE
                                | INTERVAL_MASK_SECOND
                        }
                        _ => return self.syntax_error(),
                    }
                } else {
                    INTERVAL_MASK_DAY
                }
            }
            Some(Keyword::Hour) => {
                self.advance()?;
                if self.accept_kw(Keyword::To)? {
                    match self.cur_keyword() {
                        Some(Keyword::Minute) => {
                            self.advance()?;
                            INTERVAL_MASK_HOUR | INTERVAL_MASK_MINUTE
                        }
                        Some(Keyword::Second) => {
                            self.advance()?;
                            INTERVAL_MASK_HOUR | INTERVAL_MASK_MINUTE | INTERVAL_MASK_SECOND
                        }
                        _ => return self.syntax_error(),
                    }
                } else {
                    INTERVAL_MASK_HOUR
                }
            }
            Some(Keyword::Minute) => {
                self.advance()?;
                if self.accept_kw(Keyword::To)? {
                    self.expect_kw(Keyword::Second)?;
                    INTERVAL_MASK_MINUTE | INTERVAL_MASK_SECOND
                } else {
                    INTERVAL_MASK_MINUTE
                }
            }
            Some(Keyword::Second) => {
                self.advance()?;
                if self.accept(TokenKind::LParen)? {
                    let precision = self.iconst()?;
                    self.expect(TokenKind::RParen)?;
                    return Ok(Some(vec![
                        Node::Integer(Integer { ival: INTERVAL_MASK_SECOND as i64 }),
                        Node::Integer(Integer { ival: precision }),
                    ]));
                }
                INTERVAL_MASK_SECOND
            }
            _ => {
                if self.accept(TokenKind::LParen)? {
                    let precision = self.iconst()?;
                    self.expect(TokenKind::RParen)?;
                    return Ok(Some(vec![
                        Node::Integer(Integer { ival: INTERVAL_FULL_RANGE as i64 }),
                        Node::Integer(Integer { ival: precision }),
                    ]));
                }
                return Ok(None);
            }
        };
        Ok(Some(vec![Node::Integer(Integer { ival: mask as i64 })]))
    }

    // -----------------------------------------------------------------------
    // statement dispatch

    fn parse_stmt(&mut self) -> Result<Node> {
        self.check_depth()?;
        let stmt = self.parse_stmt_inner();
        self.leave();
        stmt
    }

    fn parse_stmt_inner(&mut self) -> Result<Node> {
        match self.kind() {
            TokenKind::LParen => {
                return Ok(Node::SelectStmt(self.parse_select_stmt(None)?));
            }
            TokenKind::WithLa => {
                // WITH reclassified before TIME/ORDINALITY still opens a CTE
                // list when the next name happens to be one of those words
                let with = self.parse_with_clause()?;
                return self.parse_stmt_after_with(with);
            }
            _ => {}
        }
        let Some(kw) = self.cur_keyword() else {
            return self.syntax_error();
        };
        match kw {
            Keyword::Select | Keyword::Values | Keyword::Table => {
                Ok(Node::SelectStmt(self.parse_select_stmt(None)?))
            }
            Keyword::With => {
                let with = self.parse_with_clause()?;
                self.parse_stmt_after_with(with)
            }
            Keyword::Insert => self.parse_insert_stmt(None),
            Keyword::Update => self.parse_update_stmt(None),
            Keyword::Delete => self.parse_delete_stmt(None),
            Keyword::Merge => self.parse_merge_stmt(None),
            Keyword::Create => self.parse_create_stmt(),
            Keyword::Alter => self.parse_alter_stmt(),
            Keyword::Drop => self.parse_drop_stmt(),
            Keyword::Truncate => self.parse_truncate_stmt(),
            Keyword::Comment => self.parse_comment_stmt(),
            Keyword::Grant => self.parse_grant_stmt(true),
            Keyword::Revoke => self.parse_grant_stmt(false),
            Keyword::Lock => self.parse_lock_stmt(),
            Keyword::Vacuum => self.parse_vacuum_stmt(true),
            Keyword::Analyze | Keyword::Analyse => self.parse_vacuum_stmt(false),
            Keyword::Explain => self.parse_explain_stmt(),
            Keyword::Copy => self.parse_copy_stmt(),
            Keyword::Set => self.parse_set_stmt(),
            Keyword::Reset => self.parse_reset_stmt(),
            Keyword::Show => self.parse_show_stmt(),
            Keyword::Begin
            | Keyword::Start
            | Keyword::Commit
            | Keyword::End
            | Keyword::Rollback
            | Keyword::Abort
            | Keyword::Savepoint
            | Keyword::Release => self.parse_transaction_stmt(),
            Keyword::Prepare => {
                if self.peek2()?.kind == TokenKind::Keyword(Keyword::Transaction) {
                    self.parse_transaction_stmt()
                } else {
                    self.parse_prepare_stmt()
                }
            }
            Keyword::Execute => self.parse_execute_stmt(),
            Keyword::Deallocate => self.parse_deallocate_stmt(),
            Keyword::Declare => self.parse_declare_cursor_stmt(),
            Keyword::Fetch => self.parse_fetch_stmt(false),
            Keyword::Move => self.parse_fetch_stmt(true),
            Keyword::Close => self.parse_close_stmt(),
            Keyword::Discard => self.parse_discard_stmt(),
            Keyword::Listen => self.parse_listen_stmt(),
            Keyword::Unlisten => self.parse_unlisten_stmt(),
            Keyword::Notify => self.parse_notify_stmt(),
            Keyword::Checkpoint => {
                self.advance()?;
                Ok(Node::CheckPointStmt(CheckPointStmt))
            }
            Keyword::Do => self.parse_do_stmt(),
            Keyword::Call => self.parse_call_stmt(),
            Keyword::Refresh => self.parse_refresh_stmt(),
            _ => self.syntax_error(),
        }
    }

    /// A statement allowed inside CTEs, PREPARE, COPY and EXPLAIN:
    /// SELECT/VALUES/TABLE, INSERT, UPDATE, DELETE or MERGE.
    pub(super) fn parse_preparable_stmt(&mut self) -> Result<Node> {
        if self.kind() == TokenKind::LParen {
            return Ok(Node::SelectStmt(self.parse_select_stmt(None)?));
        }
        match self.cur_keyword() {
            Some(Keyword::Select | Keyword::Values | Keyword::Table | Keyword::With) => {
                Ok(Node::SelectStmt(self.parse_select_stmt(None)?))
            }
            Some(Keyword::Insert) => self.parse_insert_stmt(None),
            Some(Keyword::Update) => self.parse_update_stmt(None),
            Some(Keyword::Delete) => self.parse_delete_stmt(None),
            Some(Keyword::Merge) => self.parse_merge_stmt(None),
            _ => {
                if self.kind() == TokenKind::WithLa {
                    return Ok(Node::SelectStmt(self.parse_select_stmt(None)?));
                }
                self.syntax_error()
            }
        }
    }

    fn parse_stmt_after_with(&mut self, with: WithClause) -> Result<Node> {
        match self.cur_keyword() {
            Some(Keyword::Select | Keyword::Values | Keyword::Table) => {
                Ok(Node::SelectStmt(self.parse_select_stmt(Some(with))?))
            }
            Some(Keyword::Insert) => self.parse_insert_stmt(Some(with)),
            Some(Keyword::Update) => self.parse_update_stmt(Some(with)),
            Some(Keyword::Delete) => self.parse_delete_stmt(Some(with)),
            Some(Keyword::Merge) => self.parse_merge_stmt(Some(with)),
            _ => {
                if self.kind() == TokenKind::LParen {
                    return Ok(Node::SelectStmt(self.parse_select_stmt(Some(with))?));
                }
                self.syntax_error()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// node construction helpers shared by the grammar modules

pub(crate) fn make_string(s: impl Into<String>) -> Node {
    Node::String(StringValue { sval: s.into() })
}

pub(crate) fn system_type(name: &str, location: ParseLoc) -> TypeName {
    TypeName {
        names: Some(vec![make_string("pg_catalog"), make_string(name)]),
        location,
        ..Default::default()
    }
}

pub(crate) fn system_func_name(name: &str) -> Vec<Node> {
    vec![make_string("pg_catalog"), make_string(name)]
}

pub(crate) fn make_int_const(ival: i64, location: ParseLoc) -> Node {
    Node::AConst(Box::new(AConst {
        val: Some(Node::Integer(Integer { ival })),
        isnull: false,
        location,
    }))
}

pub(crate) fn make_str_const(sval: impl Into<String>, location: ParseLoc) -> Node {
    Node::AConst(Box::new(AConst {
        val: Some(make_string(sval)),
        isnull: false,
        location,
    }))
}

pub(crate) fn make_bool_const(boolval: bool, location: ParseLoc) -> Node {
    Node::AConst(Box::new(AConst {
        val: Some(Node::Boolean(Boolean { boolval })),
        isnull: false,
        location,
    }))
}

pub(crate) fn make_null_const(location: ParseLoc) -> Node {
    Node::AConst(Box::new(AConst { val: None, isnull: true, location }))
}

/// AND expressions are flattened into n-ary BoolExprs during parsing, the
/// way PostgreSQL's makeAndExpr does.
pub(crate) fn make_and_expr(lexpr: Node, rexpr: Node, location: ParseLoc) -> Node {
    if let Node::BoolExpr(mut be) = lexpr {
        if be.boolop == BoolExprType::And {
            if let Some(args) = &mut be.args {
                args.push(rexpr);
                return Node::BoolExpr(be);
            }
        }
        return Node::BoolExpr(Box::new(BoolExpr {
            boolop: BoolExprType::And,
            args: Some(vec![Node::BoolExpr(be), rexpr]),
            location,
        }));
    }
    Node::BoolExpr(Box::new(BoolExpr {
        boolop: BoolExprType::And,
        args: Some(vec![lexpr, rexpr]),
        location,
    }))
}

pub(crate) fn make_or_expr(lexpr: Node, rexpr: Node, location: ParseLoc) -> Node {
    if let Node::BoolExpr(mut be) = lexpr {
        if be.boolop == BoolExprType::Or {
            if let Some(args) = &mut be.args {
                args.push(rexpr);
                return Node::BoolExpr(be);
            }
        }
        return Node::BoolExpr(Box::new(BoolExpr {
            boolop: BoolExprType::Or,
            args: Some(vec![Node::BoolExpr(be), rexpr]),
            location,
        }));
    }
    Node::BoolExpr(Box::new(BoolExpr {
        boolop: BoolExprType::Or,
        args: Some(vec![lexpr, rexpr]),
        location,
    }))
}

pub(crate) fn make_not_expr(arg: Node, location: ParseLoc) -> Node {
    Node::BoolExpr(Box::new(BoolExpr {
        boolop: BoolExprType::Not,
        args: Some(vec![arg]),
        location,
    }))
}

pub(crate) fn make_a_expr(
    kind: AExprKind,
    name: &str,
    lexpr: Option<Node>,
    rexpr: Option<Node>,
    location: ParseLoc,
) -> Node {
    Node::AExpr(Box::new(AExpr {
        kind,
        name: Some(vec![make_string(name)]),
        lexpr,
        rexpr,
        location,
    }))
}
