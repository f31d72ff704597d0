//! SELECT grammar: simple selects, VALUES, set operations, FROM items and
//! joins, and the trailing ORDER BY / LIMIT / locking clauses.
//!
//! Set operations are parsed by precedence climbing over select operands:
//! INTERSECT binds tighter than UNION/EXCEPT and all are left-associative.
//! ORDER BY and LIMIT after a set operation attach to the outermost node.

use super::*;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a complete select: optional WITH clause, set-operation tree,
    /// and trailing sort/limit/locking clauses attached to the outermost
    /// node.
    pub(crate) fn parse_select_stmt(
        &mut self,
        with: Option<WithClause>,
    ) -> Result<Box<SelectStmt>> {
        self.check_depth()?;
        let result =
            stacker::maybe_grow(64 * 1024, 1024 * 1024, || self.parse_select_stmt_inner(with));
        self.leave();
        result
    }

    fn parse_select_stmt_inner(&mut self, with: Option<WithClause>) -> Result<Box<SelectStmt>> {
        let with = match with {
            Some(with) => Some(with),
            None => {
                if self.at_kw(Keyword::With) || self.kind() == TokenKind::WithLa {
                    Some(self.parse_with_clause()?)
                } else {
                    None
                }
            }
        };
        let mut stmt = self.parse_select_ops(0)?;
        self.parse_select_tail(&mut stmt)?;
        if let Some(with) = with {
            if stmt.with_clause.is_some() {
                return self.error_at(self.cur.loc, "multiple WITH clauses not allowed");
            }
            stmt.with_clause = Some(Box::new(with));
        }
        Ok(stmt)
    }

    /// UNION/EXCEPT bind loosest, INTERSECT tighter, all left-associative.
    fn parse_select_ops(&mut self, min_prec: i32) -> Result<Box<SelectStmt>> {
        let mut left = self.parse_select_operand()?;
        loop {
            let (op, prec) = match self.cur_keyword() {
                Some(Keyword::Union) => (SetOperation::Union, 1),
                Some(Keyword::Except) => (SetOperation::Except, 1),
                Some(Keyword::Intersect) => (SetOperation::Intersect, 2),
                _ => return Ok(left),
            };
            if prec < min_prec {
                return Ok(left);
            }
            self.advance()?;
            let all = if self.accept_kw(Keyword::All)? {
                true
            } else {
                let _ = self.accept_kw(Keyword::Distinct)?;
                false
            };
            let right = self.parse_select_ops(prec + 1)?;
            left = Box::new(SelectStmt {
                op,
                all,
                larg: Some(left),
                rarg: Some(right),
                ..Default::default()
            });
        }
    }

    fn parse_select_operand(&mut self) -> Result<Box<SelectStmt>> {
        if self.accept(TokenKind::LParen)? {
            let stmt = self.parse_select_stmt(None)?;
            self.expect(TokenKind::RParen)?;
            return Ok(stmt);
        }
        self.parse_simple_select()
    }

    fn parse_simple_select(&mut self) -> Result<Box<SelectStmt>> {
        match self.cur_keyword() {
            Some(Keyword::Values) => self.parse_values_clause(),
            Some(Keyword::Table) => {
                self.advance()?;
                let star_loc = self.loc();
                let rel = self.relation_expr()?;
                let target = Node::ResTarget(Box::new(ResTarget {
                    val: Some(Node::ColumnRef(Box::new(ColumnRef {
                        fields: Some(vec![Node::AStar(AStar)]),
                        location: star_loc,
                    }))),
                    location: star_loc,
                    ..Default::default()
                }));
                Ok(Box::new(SelectStmt {
                    target_list: Some(vec![target]),
                    from_clause: Some(vec![Node::RangeVar(Box::new(rel))]),
                    ..Default::default()
                }))
            }
            Some(Keyword::Select) => {
                self.advance()?;
                let mut stmt = SelectStmt::default();

                if self.accept_kw(Keyword::Distinct)? {
                    if self.accept_kw(Keyword::On)? {
                        self.expect(TokenKind::LParen)?;
                        stmt.distinct_clause = Some(self.expr_list()?);
                        self.expect(TokenKind::RParen)?;
                    } else {
                        stmt.distinct_clause = Some(vec![Node::Null]);
                    }
                } else {
                    let _ = self.accept_kw(Keyword::All)?;
                }

                if self.at_target_list_start() {
                    stmt.target_list = Some(self.parse_target_list()?);
                }
                if self.at_kw(Keyword::Into) {
                    stmt.into_clause = Some(Box::new(self.parse_into_clause()?));
                }
                if self.accept_kw(Keyword::From)? {
                    stmt.from_clause = Some(self.parse_from_list()?);
                }
                if self.accept_kw(Keyword::Where)? {
                    stmt.where_clause = Some(self.parse_a_expr()?);
                }
                if self.at_kw(Keyword::Group) {
                    self.advance()?;
                    self.expect_kw(Keyword::By)?;
                    if self.accept_kw(Keyword::Distinct)? {
                        stmt.group_distinct = true;
                    } else {
                        let _ = self.accept_kw(Keyword::All)?;
                    }
                    stmt.group_clause = Some(self.group_by_list()?);
                }
                if self.accept_kw(Keyword::Having)? {
                    stmt.having_clause = Some(self.parse_a_expr()?);
                }
                if self.at_kw(Keyword::Window) {
                    self.advance()?;
                    stmt.window_clause = Some(self.parse_window_clause()?);
                }
                Ok(Box::new(stmt))
            }
            _ => self.syntax_error(),
        }
    }

    fn parse_values_clause(&mut self) -> Result<Box<SelectStmt>> {
        self.expect_kw(Keyword::Values)?;
        let mut rows = Vec::new();
        loop {
            self.expect(TokenKind::LParen)?;
            let mut row = vec![self.parse_a_expr_or_default()?];
            while self.accept(TokenKind::Comma)? {
                row.push(self.parse_a_expr_or_default()?);
            }
            self.expect(TokenKind::RParen)?;
            rows.push(Node::List(row));
            if !self.accept(TokenKind::Comma)? {
                break;
            }
        }
        Ok(Box::new(SelectStmt { values_lists: Some(rows), ..Default::default() }))
    }

    /// The target list is optional; it is absent when the next token
    /// already belongs to a later clause.
    fn at_target_list_start(&self) -> bool {
        !matches!(
            self.kind(),
            TokenKind::Eof
                | TokenKind::Semicolon
                | TokenKind::RParen
                | TokenKind::Keyword(
                    Keyword::From
                        | Keyword::Into
                        | Keyword::Where
                        | Keyword::Group
                        | Keyword::Having
                        | Keyword::Window
                        | Keyword::Order
                        | Keyword::Limit
                        | Keyword::Offset
                        | Keyword::Fetch
                        | Keyword::For
                        | Keyword::Union
                        | Keyword::Intersect
                        | Keyword::Except
                        | Keyword::Returning
                        | Keyword::On
                )
        )
    }

    pub(crate) fn parse_target_list(&mut self) -> Result<Vec<Node>> {
        let mut targets = vec![self.parse_target_el()?];
        while self.accept(TokenKind::Comma)? {
            targets.push(self.parse_target_el()?);
        }
        Ok(targets)
    }

    fn parse_target_el(&mut self) -> Result<Node> {
        let loc = self.loc();
        if self.kind() == TokenKind::Star {
            self.advance()?;
            return Ok(Node::ResTarget(Box::new(ResTarget {
                val: Some(Node::ColumnRef(Box::new(ColumnRef {
                    fields: Some(vec![Node::AStar(AStar)]),
                    location: loc,
                }))),
                location: loc,
                ..Default::default()
            })));
        }
        let val = self.parse_a_expr()?;
        let name = if self.accept_kw(Keyword::As)? {
            self.col_label()?
        } else if self.at_bare_col_label() {
            self.advance()?.text
        } else {
            String::new()
        };
        Ok(Node::ResTarget(Box::new(ResTarget {
            name,
            val: Some(val),
            location: loc,
            ..Default::default()
        })))
    }

    /// Column labels without AS: identifiers and any keyword that cannot
    /// continue the surrounding clause.
    fn at_bare_col_label(&self) -> bool {
        match self.kind() {
            TokenKind::Ident => true,
            _ => match self.cur_keyword() {
                Some(kw) => matches!(
                    kw.category(),
                    KeywordCategory::Unreserved
                        | KeywordCategory::ColName
                        | KeywordCategory::TypeFuncName
                ),
                None => false,
            },
        }
    }

    // -----------------------------------------------------------------------
    // INTO (SELECT INTO)

    fn parse_into_clause(&mut self) -> Result<IntoClause> {
        self.expect_kw(Keyword::Into)?;
        let mut persistence = RELPERSISTENCE_PERMANENT;
        match self.cur_keyword() {
            Some(Keyword::Temporary | Keyword::Temp) => {
                self.advance()?;
                persistence = RELPERSISTENCE_TEMP;
                let _ = self.accept_kw(Keyword::Table)?;
            }
            Some(Keyword::Local | Keyword::Global) => {
                self.advance()?;
                if !self.accept_kw(Keyword::Temporary)? {
                    self.expect_kw(Keyword::Temp)?;
                }
                persistence = RELPERSISTENCE_TEMP;
                let _ = self.accept_kw(Keyword::Table)?;
            }
            Some(Keyword::Unlogged) => {
                self.advance()?;
                persistence = RELPERSISTENCE_UNLOGGED;
                let _ = self.accept_kw(Keyword::Table)?;
            }
            Some(Keyword::Table) => {
                self.advance()?;
            }
            _ => {}
        }
        let mut rel = self.qualified_name()?;
        rel.relpersistence = persistence;
        Ok(IntoClause { rel: Some(Box::new(rel)), ..Default::default() })
    }

    // -----------------------------------------------------------------------
    // FROM items

    pub(crate) fn parse_from_list(&mut self) -> Result<Vec<Node>> {
        let mut items = vec![self.parse_table_ref()?];
        while self.accept(TokenKind::Comma)? {
            items.push(self.parse_table_ref()?);
        }
        Ok(items)
    }

    /// A from-item with any number of chained joins, built left-deep: each
    /// new join becomes the parent with the prior result as its left arg.
    pub(crate) fn parse_table_ref(&mut self) -> Result<Node> {
        let mut node = self.parse_table_ref_primary()?;
        loop {
            if self.at_kw(Keyword::Cross) {
                self.advance()?;
                self.expect_kw(Keyword::Join)?;
                let rarg = self.parse_table_ref_primary()?;
                node = Node::JoinExpr(Box::new(JoinExpr {
                    jointype: JoinType::Inner,
                    larg: Some(node),
                    rarg: Some(rarg),
                    ..Default::default()
                }));
                continue;
            }

            let natural = self.at_kw(Keyword::Natural);
            if natural {
                self.advance()?;
            }
            let jointype = match self.cur_keyword() {
                Some(Keyword::Join) => {
                    self.advance()?;
                    JoinType::Inner
                }
                Some(Keyword::Inner) => {
                    self.advance()?;
                    self.expect_kw(Keyword::Join)?;
                    JoinType::Inner
                }
                Some(Keyword::Left) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::Outer)?;
                    self.expect_kw(Keyword::Join)?;
                    JoinType::Left
                }
                Some(Keyword::Right) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::Outer)?;
                    self.expect_kw(Keyword::Join)?;
                    JoinType::Right
                }
                Some(Keyword::Full) => {
                    self.advance()?;
                    let _ = self.accept_kw(Keyword::Outer)?;
                    self.expect_kw(Keyword::Join)?;
                    JoinType::Full
                }
                _ => {
                    if natural {
                        return self.syntax_error();
                    }
                    return Ok(node);
                }
            };

            let rarg = self.parse_table_ref_primary()?;
            let mut join = JoinExpr {
                jointype,
                is_natural: natural,
                larg: Some(node),
                rarg: Some(rarg),
                ..Default::default()
            };
            if !natural {
                if self.accept_kw(Keyword::Using)? {
                    self.expect(TokenKind::LParen)?;
                    join.using_clause = Some(self.name_list()?);
                    self.expect(TokenKind::RParen)?;
                    if self.accept_kw(Keyword::As)? {
                        join.join_using_alias =
                            Some(Box::new(Alias { aliasname: self.col_id()?, colnames: None }));
                    }
                } else {
                    self.expect_kw(Keyword::On)?;
                    join.quals = Some(self.parse_a_expr()?);
                }
            }
            node = Node::JoinExpr(Box::new(join));
        }
    }

    fn parse_table_ref_primary(&mut self) -> Result<Node> {
        let lateral = self.accept_kw(Keyword::Lateral)?;

        if self.kind() == TokenKind::LParen {
            self.advance()?;
            if self.at_select_intro() {
                let subquery = self.parse_select_stmt(None)?;
                self.expect(TokenKind::RParen)?;
                let alias = self.opt_alias_clause()?;
                return Ok(Node::RangeSubselect(Box::new(RangeSubselect {
                    lateral,
                    subquery: Some(Node::SelectStmt(subquery)),
                    alias,
                })));
            }
            // parenthesized join
            let inner = self.parse_table_ref()?;
            self.expect(TokenKind::RParen)?;
            let alias = self.opt_alias_clause()?;
            if let Some(alias) = alias {
                match inner {
                    Node::JoinExpr(mut join) => {
                        join.alias = Some(alias);
                        return Ok(Node::JoinExpr(join));
                    }
                    Node::RangeVar(mut rv) => {
                        rv.alias = Some(alias);
                        return Ok(Node::RangeVar(rv));
                    }
                    Node::RangeSubselect(mut sub) => {
                        sub.alias = Some(alias);
                        return Ok(Node::RangeSubselect(sub));
                    }
                    other => return Ok(other),
                }
            }
            return Ok(inner);
        }

        if self.at_kw(Keyword::Only) {
            let mut rv = self.relation_expr()?;
            rv.alias = self.opt_alias_clause()?;
            return Ok(Node::RangeVar(Box::new(rv)));
        }

        // relation or table function; a '(' after the (possibly qualified)
        // name decides
        let loc = self.loc();
        let first = self.col_id()?;
        let mut parts = vec![first];
        while self.kind() == TokenKind::Dot {
            self.advance()?;
            parts.push(self.col_label()?);
        }

        if self.kind() == TokenKind::LParen {
            let funcname = parts.into_iter().map(make_string).collect();
            let funcexpr = self.parse_func_call(funcname, loc)?;
            let mut rf = RangeFunction {
                lateral,
                functions: Some(vec![Node::List(vec![funcexpr, Node::Null])]),
                ..Default::default()
            };
            if self.accept(TokenKind::WithLa)? {
                self.expect_kw(Keyword::Ordinality)?;
                rf.ordinality = true;
            }
            let (alias, coldeflist) = self.func_alias_clause()?;
            rf.alias = alias;
            rf.coldeflist = coldeflist;
            return Ok(Node::RangeFunction(Box::new(rf)));
        }

        let mut rv = RangeVar { location: loc, ..Default::default() };
        match parts.len() {
            1 => rv.relname = parts.pop().unwrap(),
            2 => {
                rv.relname = parts.pop().unwrap();
                rv.schemaname = parts.pop().unwrap();
            }
            _ => {
                rv.relname = parts.pop().unwrap();
                rv.schemaname = parts.pop().unwrap();
                rv.catalogname = parts.pop().unwrap();
            }
        }
        let _ = self.accept(TokenKind::Star)?;
        rv.alias = self.opt_alias_clause()?;
        Ok(Node::RangeVar(Box::new(rv)))
    }

    pub(crate) fn opt_alias_clause(&mut self) -> Result<Option<Box<Alias>>> {
        let aliasname = if self.accept_kw(Keyword::As)? {
            self.col_id()?
        } else if self.at_col_id() {
            self.col_id()?
        } else {
            return Ok(None);
        };
        let mut alias = Alias { aliasname, colnames: None };
        if self.accept(TokenKind::LParen)? {
            alias.colnames = Some(self.name_list()?);
            self.expect(TokenKind::RParen)?;
        }
        Ok(Some(Box::new(alias)))
    }

    /// Alias clause for table functions, which may carry a column
    /// definition list instead of (or after) the alias name.
    fn func_alias_clause(&mut self) -> Result<(Option<Box<Alias>>, Option<Vec<Node>>)> {
        let explicit_as = self.accept_kw(Keyword::As)?;
        if explicit_as && self.kind() == TokenKind::LParen {
            // AS (coldef, ...) with no alias name
            self.advance()?;
            let coldefs = self.table_func_element_list()?;
            self.expect(TokenKind::RParen)?;
            return Ok((None, Some(coldefs)));
        }
        if !explicit_as && !self.at_col_id() {
            return Ok((None, None));
        }
        let aliasname = self.col_id()?;
        let mut alias = Alias { aliasname, colnames: None };
        if self.accept(TokenKind::LParen)? {
            // a name list gives column aliases, a name-and-type list gives
            // a column definition list
            if self.peek2()?.kind == TokenKind::Comma || self.peek2()?.kind == TokenKind::RParen {
                alias.colnames = Some(self.name_list()?);
                self.expect(TokenKind::RParen)?;
                return Ok((Some(Box::new(alias)), None));
            }
            let coldefs = self.table_func_element_list()?;
            self.expect(TokenKind::RParen)?;
            return Ok((Some(Box::new(alias)), Some(coldefs)));
        }
        Ok((Some(Box::new(alias)), None))
    }

    fn table_func_element_list(&mut self) -> Result<Vec<Node>> {
        let mut defs = vec![self.table_func_element()?];
        while self.accept(TokenKind::Comma)? {
            defs.push(self.table_func_element()?);
        }
        Ok(defs)
    }

    fn table_func_element(&mut self) -> Result<Node> {
        let loc = self.loc();
        let colname = self.col_id()?;
        let tn = self.parse_typename()?;
        Ok(Node::ColumnDef(Box::new(ColumnDef {
            colname,
            type_name: Some(Box::new(tn)),
            location: loc,
            ..Default::default()
        })))
    }

    // -----------------------------------------------------------------------
    // GROUP BY

    fn group_by_list(&mut self) -> Result<Vec<Node>> {
        let mut items = vec![self.group_by_item()?];
        while self.accept(TokenKind::Comma)? {
            items.push(self.group_by_item()?);
        }
        Ok(items)
    }

    fn group_by_item(&mut self) -> Result<Node> {
        let loc = self.loc();
        match self.cur_keyword() {
            Some(Keyword::Rollup) => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let content = self.expr_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::GroupingSet(Box::new(GroupingSet {
                    kind: GroupingSetKind::Rollup,
                    content: Some(content),
                    location: loc,
                })))
            }
            Some(Keyword::Cube) => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let content = self.expr_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::GroupingSet(Box::new(GroupingSet {
                    kind: GroupingSetKind::Cube,
                    content: Some(content),
                    location: loc,
                })))
            }
            Some(Keyword::Grouping) => {
                if self.peek2()?.kind != TokenKind::Keyword(Keyword::Sets) {
                    // GROUPING(...) the function, not GROUPING SETS
                    return self.parse_a_expr();
                }
                self.advance()?;
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let content = self.group_by_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::GroupingSet(Box::new(GroupingSet {
                    kind: GroupingSetKind::Sets,
                    content: Some(content),
                    location: loc,
                })))
            }
            _ => {
                if self.kind() == TokenKind::LParen && self.peek2()?.kind == TokenKind::RParen {
                    self.advance()?;
                    self.advance()?;
                    return Ok(Node::GroupingSet(Box::new(GroupingSet {
                        kind: GroupingSetKind::Empty,
                        content: None,
                        location: loc,
                    })));
                }
                self.parse_a_expr()
            }
        }
    }

    // -----------------------------------------------------------------------
    // WINDOW clause

    fn parse_window_clause(&mut self) -> Result<Vec<Node>> {
        let mut defs = vec![self.window_definition()?];
        while self.accept(TokenKind::Comma)? {
            defs.push(self.window_definition()?);
        }
        Ok(defs)
    }

    fn window_definition(&mut self) -> Result<Node> {
        let name = self.col_id()?;
        self.expect_kw(Keyword::As)?;
        let mut def = self.parse_window_specification()?;
        def.name = name;
        Ok(Node::WindowDef(Box::new(def)))
    }

    // -----------------------------------------------------------------------
    // ORDER BY

    pub(crate) fn sortby_list(&mut self) -> Result<Vec<Node>> {
        let mut items = vec![self.parse_sortby()?];
        while self.accept(TokenKind::Comma)? {
            items.push(self.parse_sortby()?);
        }
        Ok(items)
    }

    fn parse_sortby(&mut self) -> Result<Node> {
        let node = self.parse_a_expr()?;
        let mut sortby = SortBy { node: Some(node), location: -1, ..Default::default() };
        match self.cur_keyword() {
            Some(Keyword::Using) => {
                sortby.location = self.loc();
                self.advance()?;
                sortby.sortby_dir = SortByDir::Using;
                sortby.use_op = Some(self.any_operator_name()?);
            }
            Some(Keyword::Asc) => {
                self.advance()?;
                sortby.sortby_dir = SortByDir::Asc;
            }
            Some(Keyword::Desc) => {
                self.advance()?;
                sortby.sortby_dir = SortByDir::Desc;
            }
            _ => {}
        }
        if self.accept(TokenKind::NullsLa)? {
            if self.accept_kw(Keyword::First)? {
                sortby.sortby_nulls = SortByNulls::First;
            } else {
                self.expect_kw(Keyword::Last)?;
                sortby.sortby_nulls = SortByNulls::Last;
            }
        }
        Ok(Node::SortBy(Box::new(sortby)))
    }

    /// An operator name for ORDER BY ... USING: a bare operator token.
    fn any_operator_name(&mut self) -> Result<Vec<Node>> {
        match self.kind() {
            TokenKind::Op
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::LessEquals
            | TokenKind::GreaterEquals
            | TokenKind::NotEquals
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret => Ok(vec![make_string(self.advance()?.text)]),
            _ => self.syntax_error(),
        }
    }

    // -----------------------------------------------------------------------
    // trailing clauses: ORDER BY, LIMIT/OFFSET/FETCH, FOR locking

    fn parse_select_tail(&mut self, stmt: &mut SelectStmt) -> Result<()> {
        let mut seen_limit = false;
        let mut seen_offset = false;
        let mut locking: Vec<Node> = Vec::new();
        loop {
            match self.cur_keyword() {
                Some(Keyword::Order) => {
                    if stmt.sort_clause.is_some() {
                        return self.error_at(self.cur.loc, "multiple ORDER BY clauses not allowed");
                    }
                    self.advance()?;
                    self.expect_kw(Keyword::By)?;
                    stmt.sort_clause = Some(self.sortby_list()?);
                }
                Some(Keyword::Limit) => {
                    if seen_limit {
                        return self.error_at(self.cur.loc, "multiple LIMIT clauses not allowed");
                    }
                    seen_limit = true;
                    self.advance()?;
                    if !self.accept_kw(Keyword::All)? {
                        stmt.limit_count = Some(self.parse_a_expr()?);
                    }
                    stmt.limit_option = LimitOption::Count;
                }
                Some(Keyword::Offset) => {
                    if seen_offset {
                        return self.error_at(self.cur.loc, "multiple OFFSET clauses not allowed");
                    }
                    seen_offset = true;
                    self.advance()?;
                    stmt.limit_offset = Some(self.parse_a_expr()?);
                    if !self.accept_kw(Keyword::Row)? {
                        let _ = self.accept_kw(Keyword::Rows)?;
                    }
                }
                Some(Keyword::Fetch) => {
                    if seen_limit {
                        return self.error_at(self.cur.loc, "multiple LIMIT clauses not allowed");
                    }
                    seen_limit = true;
                    self.advance()?;
                    if !self.accept_kw(Keyword::First)? {
                        self.expect_kw(Keyword::Next)?;
                    }
                    let count = if matches!(self.cur_keyword(), Some(Keyword::Row | Keyword::Rows))
                    {
                        make_int_const(1, -1)
                    } else {
                        self.parse_c_expr()?
                    };
                    if !self.accept_kw(Keyword::Row)? {
                        self.expect_kw(Keyword::Rows)?;
                    }
                    if self.accept_kw(Keyword::Only)? {
                        stmt.limit_option = LimitOption::Count;
                    } else {
                        self.expect_kw(Keyword::With)?;
                        self.expect_kw(Keyword::Ties)?;
                        stmt.limit_option = LimitOption::WithTies;
                    }
                    stmt.limit_count = Some(count);
                }
                Some(Keyword::For) => {
                    self.advance()?;
                    let strength = match self.cur_keyword() {
                        Some(Keyword::Update) => {
                            self.advance()?;
                            LockClauseStrength::ForUpdate
                        }
                        Some(Keyword::No) => {
                            self.advance()?;
                            self.expect_kw(Keyword::Key)?;
                            self.expect_kw(Keyword::Update)?;
                            LockClauseStrength::ForNoKeyUpdate
                        }
                        Some(Keyword::Share) => {
                            self.advance()?;
                            LockClauseStrength::ForShare
                        }
                        Some(Keyword::Key) => {
                            self.advance()?;
                            self.expect_kw(Keyword::Share)?;
                            LockClauseStrength::ForKeyShare
                        }
                        _ => return self.syntax_error(),
                    };
                    let mut clause = LockingClause { strength, ..Default::default() };
                    if self.accept_kw(Keyword::Of)? {
                        clause.locked_rels = Some(self.qualified_name_list()?);
                    }
                    if self.accept_kw(Keyword::Nowait)? {
                        clause.wait_policy = LockWaitPolicy::Error;
                    } else if self.accept_kw(Keyword::Skip)? {
                        self.expect_kw(Keyword::Locked)?;
                        clause.wait_policy = LockWaitPolicy::Skip;
                    }
                    locking.push(Node::LockingClause(Box::new(clause)));
                }
                _ => break,
            }
        }
        if !locking.is_empty() {
            stmt.locking_clause = Some(locking);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // WITH clause

    pub(crate) fn parse_with_clause(&mut self) -> Result<WithClause> {
        let loc = self.loc();
        if !self.accept(TokenKind::WithLa)? {
            self.expect_kw(Keyword::With)?;
        }
        let recursive = self.accept_kw(Keyword::Recursive)?;
        let mut ctes = vec![self.parse_cte()?];
        while self.accept(TokenKind::Comma)? {
            ctes.push(self.parse_cte()?);
        }
        Ok(WithClause { ctes: Some(ctes), recursive, location: loc })
    }

    fn parse_cte(&mut self) -> Result<Node> {
        let loc = self.loc();
        let ctename = self.col_id()?;
        let aliascolnames = if self.accept(TokenKind::LParen)? {
            let names = self.name_list()?;
            self.expect(TokenKind::RParen)?;
            Some(names)
        } else {
            None
        };
        self.expect_kw(Keyword::As)?;
        let ctematerialized = if self.accept_kw(Keyword::Materialized)? {
            CteMaterialize::Always
        } else if self.at_kw(Keyword::Not)
            && self.peek2()?.kind == TokenKind::Keyword(Keyword::Materialized)
        {
            self.advance()?;
            self.advance()?;
            CteMaterialize::Never
        } else {
            CteMaterialize::Default
        };
        self.expect(TokenKind::LParen)?;
        let ctequery = self.parse_preparable_stmt()?;
        self.expect(TokenKind::RParen)?;
        Ok(Node::CommonTableExpr(Box::new(CommonTableExpr {
            ctename,
            aliascolnames,
            ctematerialized,
            ctequery: Some(ctequery),
            location: loc,
        })))
    }

    /// RETURNING clause, shared by INSERT/UPDATE/DELETE/MERGE.
    pub(crate) fn parse_returning_clause(&mut self) -> Result<Option<Vec<Node>>> {
        if self.accept_kw(Keyword::Returning)? {
            return Ok(Some(self.parse_target_list()?));
        }
        Ok(None)
    }
}
