//! INSERT, UPDATE, DELETE and MERGE grammar.

use super::*;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn parse_insert_stmt(&mut self, with: Option<WithClause>) -> Result<Node> {
        self.expect_kw(Keyword::Insert)?;
        self.expect_kw(Keyword::Into)?;
        let mut rel = self.qualified_name()?;
        if self.accept_kw(Keyword::As)? {
            rel.alias = Some(Box::new(Alias { aliasname: self.col_id()?, colnames: None }));
        }

        let mut stmt = InsertStmt {
            relation: Some(Box::new(rel)),
            with_clause: with.map(Box::new),
            ..Default::default()
        };

        // a '(' can open either the column list or a parenthesized select
        if self.kind() == TokenKind::LParen && !self.paren_opens_select()? {
            self.advance()?;
            stmt.cols = Some(self.insert_column_list()?);
            self.expect(TokenKind::RParen)?;
        }

        if self.at_kw(Keyword::Overriding) {
            self.advance()?;
            if self.accept_kw(Keyword::System)? {
                stmt.override_ = OverridingKind::SystemValue;
            } else {
                self.expect_kw(Keyword::User)?;
                stmt.override_ = OverridingKind::UserValue;
            }
            self.expect_kw(Keyword::Value)?;
        }

        if self.at_kw(Keyword::Default) {
            self.advance()?;
            self.expect_kw(Keyword::Values)?;
        } else {
            stmt.select_stmt = Some(Node::SelectStmt(self.parse_select_stmt(None)?));
        }

        if self.at_kw(Keyword::On) {
            self.advance()?;
            self.expect_kw(Keyword::Conflict)?;
            stmt.on_conflict_clause = Some(Box::new(self.parse_on_conflict()?));
        }
        stmt.returning_list = self.parse_returning_clause()?;
        Ok(Node::InsertStmt(Box::new(stmt)))
    }

    /// Whether the '(' at the current position starts a select rather than
    /// a column list.
    fn paren_opens_select(&mut self) -> Result<bool> {
        Ok(matches!(
            self.peek2()?.kind,
            TokenKind::Keyword(
                Keyword::Select | Keyword::Values | Keyword::With | Keyword::Table
            ) | TokenKind::LParen
        ))
    }

    fn insert_column_list(&mut self) -> Result<Vec<Node>> {
        let mut cols = vec![self.insert_column_item()?];
        while self.accept(TokenKind::Comma)? {
            cols.push(self.insert_column_item()?);
        }
        Ok(cols)
    }

    fn insert_column_item(&mut self) -> Result<Node> {
        let loc = self.loc();
        let name = self.col_id()?;
        let indirection = self.opt_indirection()?;
        Ok(Node::ResTarget(Box::new(ResTarget {
            name,
            indirection,
            val: None,
            location: loc,
        })))
    }

    fn parse_on_conflict(&mut self) -> Result<OnConflictClause> {
        let loc = self.loc();
        let mut clause = OnConflictClause { location: loc, ..Default::default() };

        if self.kind() == TokenKind::LParen {
            let infer_loc = self.loc();
            self.advance()?;
            let elems = self.index_elem_list()?;
            self.expect(TokenKind::RParen)?;
            let mut infer = InferClause {
                index_elems: Some(elems),
                location: infer_loc,
                ..Default::default()
            };
            if self.accept_kw(Keyword::Where)? {
                infer.where_clause = Some(self.parse_a_expr()?);
            }
            clause.infer = Some(Box::new(infer));
        } else if self.at_kw(Keyword::On) {
            let infer_loc = self.loc();
            self.advance()?;
            self.expect_kw(Keyword::Constraint)?;
            let conname = self.col_id()?;
            clause.infer =
                Some(Box::new(InferClause { conname, location: infer_loc, ..Default::default() }));
        }

        self.expect_kw(Keyword::Do)?;
        if self.accept_kw(Keyword::Nothing)? {
            clause.action = OnConflictAction::Nothing;
        } else {
            self.expect_kw(Keyword::Update)?;
            self.expect_kw(Keyword::Set)?;
            clause.action = OnConflictAction::Update;
            clause.target_list = Some(self.set_clause_list()?);
            if self.accept_kw(Keyword::Where)? {
                clause.where_clause = Some(self.parse_a_expr()?);
            }
        }
        Ok(clause)
    }

    pub(super) fn parse_update_stmt(&mut self, with: Option<WithClause>) -> Result<Node> {
        self.expect_kw(Keyword::Update)?;
        let rel = self.relation_expr_opt_alias()?;
        self.expect_kw(Keyword::Set)?;
        let mut stmt = UpdateStmt {
            relation: Some(Box::new(rel)),
            target_list: Some(self.set_clause_list()?),
            with_clause: with.map(Box::new),
            ..Default::default()
        };
        if self.accept_kw(Keyword::From)? {
            stmt.from_clause = Some(self.parse_from_list()?);
        }
        stmt.where_clause = self.parse_where_or_current_of()?;
        stmt.returning_list = self.parse_returning_clause()?;
        Ok(Node::UpdateStmt(Box::new(stmt)))
    }

    pub(super) fn parse_delete_stmt(&mut self, with: Option<WithClause>) -> Result<Node> {
        self.expect_kw(Keyword::Delete)?;
        self.expect_kw(Keyword::From)?;
        let rel = self.relation_expr_opt_alias()?;
        let mut stmt = DeleteStmt {
            relation: Some(Box::new(rel)),
            with_clause: with.map(Box::new),
            ..Default::default()
        };
        if self.accept_kw(Keyword::Using)? {
            stmt.using_clause = Some(self.parse_from_list()?);
        }
        stmt.where_clause = self.parse_where_or_current_of()?;
        stmt.returning_list = self.parse_returning_clause()?;
        Ok(Node::DeleteStmt(Box::new(stmt)))
    }

    fn parse_where_or_current_of(&mut self) -> Result<Option<Node>> {
        if !self.accept_kw(Keyword::Where)? {
            return Ok(None);
        }
        if self.at_kw(Keyword::Current) {
            self.advance()?;
            self.expect_kw(Keyword::Of)?;
            let cursor_name = self.col_id()?;
            return Ok(Some(Node::CurrentOfExpr(Box::new(CurrentOfExpr {
                cursor_name,
                cursor_param: 0,
            }))));
        }
        Ok(Some(self.parse_a_expr()?))
    }

    /// SET assignments, including the multi-assignment form
    /// `(a, b) = row-source`, where each target carries a MultiAssignRef.
    pub(super) fn set_clause_list(&mut self) -> Result<Vec<Node>> {
        let mut items = self.set_clause()?;
        while self.accept(TokenKind::Comma)? {
            items.extend(self.set_clause()?);
        }
        Ok(items)
    }

    fn set_clause(&mut self) -> Result<Vec<Node>> {
        if self.accept(TokenKind::LParen)? {
            let mut targets = vec![self.set_target()?];
            while self.accept(TokenKind::Comma)? {
                targets.push(self.set_target()?);
            }
            self.expect(TokenKind::RParen)?;
            self.expect(TokenKind::Eq)?;
            let source = self.parse_a_expr()?;
            let ncolumns = targets.len() as i32;
            for (i, target) in targets.iter_mut().enumerate() {
                if let Node::ResTarget(rt) = target {
                    rt.val = Some(Node::MultiAssignRef(Box::new(MultiAssignRef {
                        source: Some(source.clone()),
                        colno: i as i32 + 1,
                        ncolumns,
                    })));
                }
            }
            return Ok(targets);
        }
        let mut target = self.set_target()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_a_expr_or_default()?;
        if let Node::ResTarget(rt) = &mut target {
            rt.val = Some(value);
        }
        Ok(vec![target])
    }

    fn set_target(&mut self) -> Result<Node> {
        let loc = self.loc();
        let name = self.col_id()?;
        let indirection = self.opt_indirection()?;
        Ok(Node::ResTarget(Box::new(ResTarget { name, indirection, val: None, location: loc })))
    }

    pub(super) fn parse_merge_stmt(&mut self, with: Option<WithClause>) -> Result<Node> {
        self.expect_kw(Keyword::Merge)?;
        self.expect_kw(Keyword::Into)?;
        let rel = self.relation_expr_opt_alias()?;
        self.expect_kw(Keyword::Using)?;
        let source = self.parse_table_ref()?;
        self.expect_kw(Keyword::On)?;
        let join_condition = self.parse_a_expr()?;

        let mut when_clauses = Vec::new();
        while self.at_kw(Keyword::When) {
            when_clauses.push(self.parse_merge_when_clause()?);
        }
        if when_clauses.is_empty() {
            return self.syntax_error();
        }

        let mut stmt = MergeStmt {
            relation: Some(Box::new(rel)),
            source_relation: Some(source),
            join_condition: Some(join_condition),
            merge_when_clauses: Some(when_clauses),
            with_clause: with.map(Box::new),
            ..Default::default()
        };
        stmt.returning_list = self.parse_returning_clause()?;
        Ok(Node::MergeStmt(Box::new(stmt)))
    }

    fn parse_merge_when_clause(&mut self) -> Result<Node> {
        self.expect_kw(Keyword::When)?;
        let kind = if self.accept_kw(Keyword::Not)? {
            self.expect_kw(Keyword::Matched)?;
            if self.accept_kw(Keyword::By)? {
                if self.accept_kw(Keyword::Source)? {
                    MergeMatchKind::NotMatchedBySource
                } else {
                    self.expect_kw(Keyword::Target)?;
                    MergeMatchKind::NotMatchedByTarget
                }
            } else {
                MergeMatchKind::NotMatchedByTarget
            }
        } else {
            self.expect_kw(Keyword::Matched)?;
            MergeMatchKind::Matched
        };

        let condition = if self.accept_kw(Keyword::And)? {
            Some(self.parse_a_expr()?)
        } else {
            None
        };
        self.expect_kw(Keyword::Then)?;

        let mut clause = MergeWhenClause { kind, condition, ..Default::default() };
        match self.cur_keyword() {
            Some(Keyword::Update) => {
                self.advance()?;
                self.expect_kw(Keyword::Set)?;
                clause.command_type = CmdType::Update;
                clause.target_list = Some(self.set_clause_list()?);
            }
            Some(Keyword::Delete) => {
                self.advance()?;
                clause.command_type = CmdType::Delete;
            }
            Some(Keyword::Do) => {
                self.advance()?;
                self.expect_kw(Keyword::Nothing)?;
                clause.command_type = CmdType::Nothing;
            }
            Some(Keyword::Insert) => {
                self.advance()?;
                clause.command_type = CmdType::Insert;
                if self.accept(TokenKind::LParen)? {
                    clause.target_list = Some(self.insert_column_list()?);
                    self.expect(TokenKind::RParen)?;
                }
                if self.at_kw(Keyword::Overriding) {
                    self.advance()?;
                    if self.accept_kw(Keyword::System)? {
                        clause.override_ = OverridingKind::SystemValue;
                    } else {
                        self.expect_kw(Keyword::User)?;
                        clause.override_ = OverridingKind::UserValue;
                    }
                    self.expect_kw(Keyword::Value)?;
                }
                if self.accept_kw(Keyword::Default)? {
                    self.expect_kw(Keyword::Values)?;
                } else {
                    self.expect_kw(Keyword::Values)?;
                    self.expect(TokenKind::LParen)?;
                    let mut row = vec![self.parse_a_expr_or_default()?];
                    while self.accept(TokenKind::Comma)? {
                        row.push(self.parse_a_expr_or_default()?);
                    }
                    self.expect(TokenKind::RParen)?;
                    clause.values = Some(row);
                }
            }
            _ => return self.syntax_error(),
        }
        Ok(Node::MergeWhenClause(Box::new(clause)))
    }
}
