//! Expression grammar: precedence climbing over the operator table.
//!
//! The precedence ladder follows PostgreSQL's declarations in its grammar:
//! OR < AND < NOT < IS < comparison < LIKE/BETWEEN/IN < generic operators <
//! `+ -` < `* / %` < `^` < AT < COLLATE < unary minus, with `::` casts and
//! subscripting bound tightest in the postfix position.
//!
//! `b_expr` is the restricted expression PostgreSQL uses where a trailing
//! keyword must terminate the expression (column DEFAULT values and the
//! like): no AND/OR/NOT, no IS tests, no LIKE/BETWEEN/IN family.

use super::*;
use crate::lexer::TokenKind;

const PREC_OR: i32 = 1;
const PREC_AND: i32 = 2;
const PREC_NOT: i32 = 3;
const PREC_IS: i32 = 4;
const PREC_CMP: i32 = 5;
const PREC_LIKE: i32 = 6;
const PREC_OP: i32 = 7;
const PREC_ADD: i32 = 8;
const PREC_MUL: i32 = 9;
const PREC_EXP: i32 = 10;
const PREC_AT: i32 = 11;
const PREC_COLLATE: i32 = 12;
const PREC_UNARY: i32 = 13;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExprMode {
    /// Full a_expr
    A,
    /// Restricted b_expr
    B,
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_a_expr(&mut self) -> Result<Node> {
        self.parse_expr_prec(0, ExprMode::A)
    }

    pub(crate) fn parse_b_expr(&mut self) -> Result<Node> {
        self.parse_expr_prec(0, ExprMode::B)
    }

    /// An a_expr, or the DEFAULT marker where the caller allows it
    /// (INSERT VALUES rows, UPDATE SET values).
    pub(crate) fn parse_a_expr_or_default(&mut self) -> Result<Node> {
        if self.at_kw(Keyword::Default) {
            let loc = self.loc();
            self.advance()?;
            return Ok(Node::SetToDefault(Box::new(SetToDefault { location: loc })));
        }
        self.parse_a_expr()
    }

    pub(crate) fn expr_list(&mut self) -> Result<Vec<Node>> {
        let mut items = vec![self.parse_a_expr()?];
        while self.accept(TokenKind::Comma)? {
            items.push(self.parse_a_expr()?);
        }
        Ok(items)
    }

    /// Does the current token introduce a (sub-)select?
    pub(crate) fn at_select_intro(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::WithLa
                | TokenKind::Keyword(
                    Keyword::Select | Keyword::Values | Keyword::With | Keyword::Table
                )
        )
    }

    fn parse_expr_prec(&mut self, min_prec: i32, mode: ExprMode) -> Result<Node> {
        self.check_depth()?;
        // deeply nested expressions recurse here; grow the stack up to the
        // nesting limit instead of overflowing
        let result =
            stacker::maybe_grow(64 * 1024, 1024 * 1024, || self.parse_expr_prec_inner(min_prec, mode));
        self.leave();
        result
    }

    fn parse_expr_prec_inner(&mut self, min_prec: i32, mode: ExprMode) -> Result<Node> {
        let loc = self.loc();

        // prefix operators
        let mut lhs = match self.kind() {
            TokenKind::Keyword(Keyword::Not) | TokenKind::NotLa if mode == ExprMode::A => {
                self.advance()?;
                let arg = self.parse_expr_prec(PREC_NOT, mode)?;
                make_not_expr(arg, loc)
            }
            TokenKind::Minus => {
                self.advance()?;
                let operand = self.parse_expr_prec(PREC_UNARY, mode)?;
                negate(operand, loc)
            }
            TokenKind::Plus => {
                self.advance()?;
                let operand = self.parse_expr_prec(PREC_UNARY, mode)?;
                make_a_expr(AExprKind::Op, "+", None, Some(operand), loc)
            }
            TokenKind::Op => {
                let op = self.advance()?.text;
                let operand = self.parse_expr_prec(PREC_UNARY, mode)?;
                make_a_expr(AExprKind::Op, &op, None, Some(operand), loc)
            }
            _ => self.parse_c_expr()?,
        };

        // postfix and infix operators
        loop {
            match self.kind() {
                TokenKind::Typecast => {
                    let cast_loc = self.loc();
                    self.advance()?;
                    let tn = self.parse_typename()?;
                    lhs = Node::TypeCast(Box::new(TypeCast {
                        arg: Some(lhs),
                        type_name: Some(Box::new(tn)),
                        location: cast_loc,
                    }));
                }
                TokenKind::Keyword(Keyword::Collate)
                    if mode == ExprMode::A && PREC_COLLATE >= min_prec =>
                {
                    let coll_loc = self.loc();
                    self.advance()?;
                    let collname = self.any_name()?;
                    lhs = Node::CollateClause(Box::new(CollateClause {
                        arg: Some(lhs),
                        collname: Some(collname),
                        location: coll_loc,
                    }));
                }
                TokenKind::Keyword(Keyword::At) if mode == ExprMode::A && PREC_AT >= min_prec => {
                    let at_loc = self.loc();
                    self.advance()?;
                    if self.accept_kw(Keyword::Local)? {
                        lhs = Node::FuncCall(Box::new(FuncCall {
                            funcname: Some(system_func_name("timezone")),
                            args: Some(vec![lhs]),
                            funcformat: CoercionForm::SqlSyntax,
                            location: at_loc,
                            ..Default::default()
                        }));
                    } else {
                        self.expect_kw(Keyword::Time)?;
                        self.expect_kw(Keyword::Zone)?;
                        let zone = self.parse_expr_prec(PREC_AT + 1, mode)?;
                        lhs = Node::FuncCall(Box::new(FuncCall {
                            funcname: Some(system_func_name("timezone")),
                            args: Some(vec![zone, lhs]),
                            funcformat: CoercionForm::SqlSyntax,
                            location: at_loc,
                            ..Default::default()
                        }));
                    }
                }
                TokenKind::Caret if PREC_EXP >= min_prec => {
                    let op_loc = self.loc();
                    self.advance()?;
                    let rhs = self.parse_expr_prec(PREC_EXP + 1, mode)?;
                    lhs = make_a_expr(AExprKind::Op, "^", Some(lhs), Some(rhs), op_loc);
                }
                TokenKind::Star | TokenKind::Slash | TokenKind::Percent
                    if PREC_MUL >= min_prec =>
                {
                    let op_loc = self.loc();
                    let op = self.advance()?.text;
                    let rhs = self.parse_expr_prec(PREC_MUL + 1, mode)?;
                    lhs = make_a_expr(AExprKind::Op, &op, Some(lhs), Some(rhs), op_loc);
                }
                TokenKind::Plus | TokenKind::Minus if PREC_ADD >= min_prec => {
                    let op_loc = self.loc();
                    let op = self.advance()?.text;
                    let rhs = self.parse_expr_prec(PREC_ADD + 1, mode)?;
                    lhs = make_a_expr(AExprKind::Op, &op, Some(lhs), Some(rhs), op_loc);
                }
                TokenKind::Op if PREC_OP >= min_prec => {
                    let op_loc = self.loc();
                    let op = self.advance()?.text;
                    lhs = self.finish_op_expr(lhs, vec![make_string(op)], op_loc, PREC_OP + 1, mode)?;
                }
                TokenKind::Keyword(Keyword::Operator) if PREC_OP >= min_prec => {
                    let op_loc = self.loc();
                    self.advance()?;
                    self.expect(TokenKind::LParen)?;
                    let name = self.any_operator()?;
                    self.expect(TokenKind::RParen)?;
                    lhs = self.finish_op_expr(lhs, name, op_loc, PREC_OP + 1, mode)?;
                }
                TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::LessEquals
                | TokenKind::GreaterEquals
                | TokenKind::NotEquals
                    if PREC_CMP >= min_prec =>
                {
                    let op_loc = self.loc();
                    let op = self.advance()?.text;
                    lhs =
                        self.finish_op_expr(lhs, vec![make_string(op)], op_loc, PREC_CMP + 1, mode)?;
                }
                TokenKind::Keyword(Keyword::Is)
                | TokenKind::Keyword(Keyword::Isnull)
                | TokenKind::Keyword(Keyword::Notnull)
                    if mode == ExprMode::A && PREC_IS >= min_prec =>
                {
                    lhs = self.parse_is_suffix(lhs)?;
                }
                TokenKind::Keyword(Keyword::Between) if mode == ExprMode::A && PREC_LIKE >= min_prec => {
                    lhs = self.parse_between(lhs, false)?;
                }
                TokenKind::Keyword(Keyword::In) if mode == ExprMode::A && PREC_LIKE >= min_prec => {
                    lhs = self.parse_in(lhs, false)?;
                }
                TokenKind::Keyword(Keyword::Like | Keyword::Ilike | Keyword::Similar)
                    if mode == ExprMode::A && PREC_LIKE >= min_prec =>
                {
                    lhs = self.parse_like(lhs, false)?;
                }
                TokenKind::NotLa if mode == ExprMode::A && PREC_LIKE >= min_prec => {
                    self.advance()?;
                    match self.cur_keyword() {
                        Some(Keyword::Between) => lhs = self.parse_between(lhs, true)?,
                        Some(Keyword::In) => lhs = self.parse_in(lhs, true)?,
                        Some(Keyword::Like | Keyword::Ilike | Keyword::Similar) => {
                            lhs = self.parse_like(lhs, true)?;
                        }
                        _ => return self.syntax_error(),
                    }
                }
                TokenKind::Keyword(Keyword::And) if mode == ExprMode::A && PREC_AND >= min_prec => {
                    let op_loc = self.loc();
                    self.advance()?;
                    let rhs = self.parse_expr_prec(PREC_AND + 1, mode)?;
                    lhs = make_and_expr(lhs, rhs, op_loc);
                }
                TokenKind::Keyword(Keyword::Or) if mode == ExprMode::A && PREC_OR >= min_prec => {
                    let op_loc = self.loc();
                    self.advance()?;
                    let rhs = self.parse_expr_prec(PREC_OR + 1, mode)?;
                    lhs = make_or_expr(lhs, rhs, op_loc);
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// Finishes a binary operator once its name is known: either a plain
    /// A_Expr, or the sublink/array form when ANY/SOME/ALL follows.
    fn finish_op_expr(
        &mut self,
        lhs: Node,
        name: Vec<Node>,
        op_loc: ParseLoc,
        rhs_prec: i32,
        mode: ExprMode,
    ) -> Result<Node> {
        if let Some(kw @ (Keyword::Any | Keyword::Some | Keyword::All)) = self.cur_keyword() {
            let sub_type =
                if kw == Keyword::All { SubLinkType::All } else { SubLinkType::Any };
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            if self.at_select_intro() {
                let subselect = self.parse_select_stmt(None)?;
                self.expect(TokenKind::RParen)?;
                return Ok(Node::SubLink(Box::new(SubLink {
                    sub_link_type: sub_type,
                    testexpr: Some(lhs),
                    oper_name: Some(name),
                    subselect: Some(Node::SelectStmt(subselect)),
                    location: op_loc,
                    ..Default::default()
                })));
            }
            let array = self.parse_a_expr()?;
            self.expect(TokenKind::RParen)?;
            let kind = if sub_type == SubLinkType::All {
                AExprKind::OpAll
            } else {
                AExprKind::OpAny
            };
            return Ok(Node::AExpr(Box::new(AExpr {
                kind,
                name: Some(name),
                lexpr: Some(lhs),
                rexpr: Some(array),
                location: op_loc,
            })));
        }
        let rhs = self.parse_expr_prec(rhs_prec, mode)?;
        Ok(Node::AExpr(Box::new(AExpr {
            kind: AExprKind::Op,
            name: Some(name),
            lexpr: Some(lhs),
            rexpr: Some(rhs),
            location: op_loc,
        })))
    }

    /// `IS [NOT] NULL/TRUE/FALSE/UNKNOWN/DISTINCT FROM`, plus the ISNULL
    /// and NOTNULL shorthands.
    fn parse_is_suffix(&mut self, lhs: Node) -> Result<Node> {
        let loc = self.loc();
        if self.accept_kw(Keyword::Isnull)? {
            return Ok(make_null_test(lhs, NullTestType::IsNull, loc));
        }
        if self.accept_kw(Keyword::Notnull)? {
            return Ok(make_null_test(lhs, NullTestType::IsNotNull, loc));
        }
        self.expect_kw(Keyword::Is)?;
        let negated = self.accept_kw(Keyword::Not)?;
        match self.cur_keyword() {
            Some(Keyword::Null) => {
                self.advance()?;
                let tt = if negated { NullTestType::IsNotNull } else { NullTestType::IsNull };
                Ok(make_null_test(lhs, tt, loc))
            }
            Some(Keyword::True) => {
                self.advance()?;
                let tt = if negated { BoolTestType::IsNotTrue } else { BoolTestType::IsTrue };
                Ok(make_boolean_test(lhs, tt, loc))
            }
            Some(Keyword::False) => {
                self.advance()?;
                let tt = if negated { BoolTestType::IsNotFalse } else { BoolTestType::IsFalse };
                Ok(make_boolean_test(lhs, tt, loc))
            }
            Some(Keyword::Unknown) => {
                self.advance()?;
                let tt =
                    if negated { BoolTestType::IsNotUnknown } else { BoolTestType::IsUnknown };
                Ok(make_boolean_test(lhs, tt, loc))
            }
            Some(Keyword::Distinct) => {
                self.advance()?;
                self.expect_kw(Keyword::From)?;
                let rhs = self.parse_expr_prec(PREC_IS + 1, ExprMode::A)?;
                let kind =
                    if negated { AExprKind::NotDistinct } else { AExprKind::Distinct };
                Ok(make_a_expr(kind, "=", Some(lhs), Some(rhs), loc))
            }
            _ => self.syntax_error(),
        }
    }

    fn parse_between(&mut self, lhs: Node, negated: bool) -> Result<Node> {
        let loc = self.loc();
        self.expect_kw(Keyword::Between)?;
        let symmetric = if self.accept_kw(Keyword::Symmetric)? {
            true
        } else {
            let _ = self.accept_kw(Keyword::Asymmetric)?;
            false
        };
        let lo = self.parse_expr_prec(PREC_LIKE + 1, ExprMode::A)?;
        self.expect_kw(Keyword::And)?;
        let hi = self.parse_expr_prec(PREC_LIKE + 1, ExprMode::A)?;
        let (kind, name) = match (negated, symmetric) {
            (false, false) => (AExprKind::Between, "BETWEEN"),
            (true, false) => (AExprKind::NotBetween, "NOT BETWEEN"),
            (false, true) => (AExprKind::BetweenSym, "BETWEEN SYMMETRIC"),
            (true, true) => (AExprKind::NotBetweenSym, "NOT BETWEEN SYMMETRIC"),
        };
        Ok(make_a_expr(kind, name, Some(lhs), Some(Node::List(vec![lo, hi])), loc))
    }

    /// `[NOT] IN (subquery | expr_list)`. A subquery becomes an ANY sublink;
    /// the NOT form wraps the sublink in a NOT, matching PostgreSQL's
    /// rewrite of `x NOT IN (SELECT ...)` as `NOT (x = ANY (SELECT ...))`.
    fn parse_in(&mut self, lhs: Node, negated: bool) -> Result<Node> {
        let loc = self.loc();
        self.expect_kw(Keyword::In)?;
        self.expect(TokenKind::LParen)?;
        if self.at_select_intro() {
            let subselect = self.parse_select_stmt(None)?;
            self.expect(TokenKind::RParen)?;
            let link = Node::SubLink(Box::new(SubLink {
                sub_link_type: SubLinkType::Any,
                testexpr: Some(lhs),
                subselect: Some(Node::SelectStmt(subselect)),
                location: loc,
                ..Default::default()
            }));
            if negated {
                return Ok(make_not_expr(link, loc));
            }
            return Ok(link);
        }
        let items = self.expr_list()?;
        self.expect(TokenKind::RParen)?;
        let name = if negated { "<>" } else { "=" };
        Ok(make_a_expr(AExprKind::In, name, Some(lhs), Some(Node::List(items)), loc))
    }

    fn parse_like(&mut self, lhs: Node, negated: bool) -> Result<Node> {
        let loc = self.loc();
        let kw = self.cur_keyword().unwrap();
        self.advance()?;
        if kw == Keyword::Similar {
            self.expect_kw(Keyword::To)?;
        }
        let pattern = self.parse_expr_prec(PREC_LIKE + 1, ExprMode::A)?;
        let escape = if self.accept_kw(Keyword::Escape)? {
            Some(self.parse_expr_prec(PREC_LIKE + 1, ExprMode::A)?)
        } else {
            None
        };
        let (kind, name) = match (kw, negated) {
            (Keyword::Like, false) => (AExprKind::Like, "~~"),
            (Keyword::Like, true) => (AExprKind::Like, "!~~"),
            (Keyword::Ilike, false) => (AExprKind::Ilike, "~~*"),
            (Keyword::Ilike, true) => (AExprKind::Ilike, "!~~*"),
            (Keyword::Similar, false) => (AExprKind::Similar, "~"),
            (Keyword::Similar, true) => (AExprKind::Similar, "!~"),
            _ => unreachable!(),
        };
        let rexpr = if kw == Keyword::Similar {
            // SIMILAR TO always goes through similar_to_escape
            let mut args = vec![pattern];
            if let Some(esc) = escape {
                args.push(esc);
            }
            Node::FuncCall(Box::new(FuncCall {
                funcname: Some(system_func_name("similar_to_escape")),
                args: Some(args),
                location: loc,
                ..Default::default()
            }))
        } else if let Some(esc) = escape {
            Node::FuncCall(Box::new(FuncCall {
                funcname: Some(system_func_name("like_escape")),
                args: Some(vec![pattern, esc]),
                location: loc,
                ..Default::default()
            }))
        } else {
            pattern
        };
        Ok(make_a_expr(kind, name, Some(lhs), Some(rexpr), loc))
    }

    /// A qualified operator name inside OPERATOR( ... ).
    fn any_operator(&mut self) -> Result<Vec<Node>> {
        let mut name = Vec::new();
        while self.at_col_id() {
            name.push(make_string(self.col_id()?));
            self.expect(TokenKind::Dot)?;
        }
        let op = match self.kind() {
            TokenKind::Op
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::LessEquals
            | TokenKind::GreaterEquals
            | TokenKind::NotEquals => self.advance()?.text,
            _ => return self.syntax_error(),
        };
        name.push(make_string(op));
        Ok(name)
    }

    // -----------------------------------------------------------------------
    // primary expressions

    pub(super) fn parse_c_expr(&mut self) -> Result<Node> {
        let loc = self.loc();
        match self.kind() {
            TokenKind::IConst => {
                let tok = self.advance()?;
                Ok(make_int_const(tok.ival.unwrap_or(0), loc))
            }
            TokenKind::FConst => {
                let tok = self.advance()?;
                Ok(Node::AConst(Box::new(AConst {
                    val: Some(Node::Float(Float { fval: tok.text })),
                    isnull: false,
                    location: loc,
                })))
            }
            TokenKind::SConst => {
                let tok = self.advance()?;
                Ok(make_str_const(tok.text, loc))
            }
            TokenKind::BConst | TokenKind::XConst => {
                let tok = self.advance()?;
                Ok(Node::AConst(Box::new(AConst {
                    val: Some(Node::BitString(BitString { bsval: tok.text })),
                    isnull: false,
                    location: loc,
                })))
            }
            TokenKind::Param => {
                let tok = self.advance()?;
                let param = Node::ParamRef(Box::new(ParamRef {
                    number: tok.ival.unwrap_or(0) as i32,
                    location: loc,
                }));
                self.wrap_indirection(param)
            }
            TokenKind::LParen => self.parse_paren_expr(loc),
            TokenKind::Keyword(kw) => self.parse_keyword_expr(kw, loc),
            TokenKind::Ident => self.parse_columnref_or_func(loc),
            _ => self.syntax_error(),
        }
    }

    fn parse_keyword_expr(&mut self, kw: Keyword, loc: ParseLoc) -> Result<Node> {
        match kw {
            Keyword::True | Keyword::False => {
                self.advance()?;
                Ok(make_bool_const(kw == Keyword::True, loc))
            }
            Keyword::Null => {
                self.advance()?;
                Ok(make_null_const(loc))
            }
            Keyword::Case => self.parse_case_expr(loc),
            Keyword::Exists => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let subselect = self.parse_select_stmt(None)?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::SubLink(Box::new(SubLink {
                    sub_link_type: SubLinkType::Exists,
                    subselect: Some(Node::SelectStmt(subselect)),
                    location: loc,
                    ..Default::default()
                })))
            }
            Keyword::Array => {
                self.advance()?;
                if self.accept(TokenKind::LParen)? {
                    let subselect = self.parse_select_stmt(None)?;
                    self.expect(TokenKind::RParen)?;
                    return Ok(Node::SubLink(Box::new(SubLink {
                        sub_link_type: SubLinkType::Array,
                        subselect: Some(Node::SelectStmt(subselect)),
                        location: loc,
                        ..Default::default()
                    })));
                }
                self.parse_array_literal(loc)
            }
            Keyword::Row => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let args = if self.kind() == TokenKind::RParen {
                    Vec::new()
                } else {
                    self.expr_list()?
                };
                self.expect(TokenKind::RParen)?;
                Ok(Node::RowExpr(Box::new(RowExpr {
                    args: Some(args),
                    row_format: CoercionForm::ExplicitCall,
                    colnames: None,
                    location: loc,
                })))
            }
            Keyword::Grouping => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let args = self.expr_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::GroupingFunc(Box::new(GroupingFunc { args: Some(args), location: loc })))
            }
            Keyword::Cast => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let arg = self.parse_a_expr()?;
                self.expect_kw(Keyword::As)?;
                let tn = self.parse_typename()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::TypeCast(Box::new(TypeCast {
                    arg: Some(arg),
                    type_name: Some(Box::new(tn)),
                    location: loc,
                })))
            }
            Keyword::Coalesce => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let args = self.expr_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::CoalesceExpr(Box::new(CoalesceExpr { args: Some(args), location: loc })))
            }
            Keyword::Greatest | Keyword::Least => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let args = self.expr_list()?;
                self.expect(TokenKind::RParen)?;
                let op = if kw == Keyword::Greatest { MinMaxOp::Greatest } else { MinMaxOp::Least };
                Ok(Node::MinMaxExpr(Box::new(MinMaxExpr { op, args: Some(args), location: loc })))
            }
            Keyword::Nullif => {
                self.advance()?;
                self.expect(TokenKind::LParen)?;
                let lexpr = self.parse_a_expr()?;
                self.expect(TokenKind::Comma)?;
                let rexpr = self.parse_a_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(make_a_expr(AExprKind::Nullif, "=", Some(lexpr), Some(rexpr), loc))
            }
            Keyword::Extract => self.parse_extract(loc),
            Keyword::Position => self.parse_position(loc),
            Keyword::Substring => self.parse_substring(loc),
            Keyword::Trim => self.parse_trim(loc),
            Keyword::Overlay => self.parse_overlay(loc),

            Keyword::CurrentDate => {
                self.advance()?;
                Ok(make_svf(SvfOp::CurrentDate, -1, loc))
            }
            Keyword::CurrentTime => {
                self.advance()?;
                self.svf_with_precision(SvfOp::CurrentTime, SvfOp::CurrentTimeN, loc)
            }
            Keyword::CurrentTimestamp => {
                self.advance()?;
                self.svf_with_precision(SvfOp::CurrentTimestamp, SvfOp::CurrentTimestampN, loc)
            }
            Keyword::Localtime => {
                self.advance()?;
                self.svf_with_precision(SvfOp::Localtime, SvfOp::LocaltimeN, loc)
            }
            Keyword::Localtimestamp => {
                self.advance()?;
                self.svf_with_precision(SvfOp::Localtimestamp, SvfOp::LocaltimestampN, loc)
            }
            Keyword::CurrentRole => {
                self.advance()?;
                Ok(make_svf(SvfOp::CurrentRole, -1, loc))
            }
            Keyword::CurrentUser => {
                self.advance()?;
                Ok(make_svf(SvfOp::CurrentUser, -1, loc))
            }
            Keyword::SessionUser => {
                self.advance()?;
                Ok(make_svf(SvfOp::SessionUser, -1, loc))
            }
            Keyword::User => {
                self.advance()?;
                Ok(make_svf(SvfOp::User, -1, loc))
            }
            Keyword::CurrentCatalog => {
                self.advance()?;
                Ok(make_svf(SvfOp::CurrentCatalog, -1, loc))
            }
            Keyword::CurrentSchema => {
                self.advance()?;
                Ok(make_svf(SvfOp::CurrentSchema, -1, loc))
            }
            Keyword::SystemUser => {
                self.advance()?;
                Ok(Node::FuncCall(Box::new(FuncCall {
                    funcname: Some(system_func_name("system_user")),
                    funcformat: CoercionForm::SqlSyntax,
                    location: loc,
                    ..Default::default()
                })))
            }

            // typed literals like `integer '42'` or `timestamp '...'`
            Keyword::Int
            | Keyword::Integer
            | Keyword::Smallint
            | Keyword::Bigint
            | Keyword::Real
            | Keyword::Float
            | Keyword::Decimal
            | Keyword::Dec
            | Keyword::Numeric
            | Keyword::Boolean
            | Keyword::Bit
            | Keyword::Character
            | Keyword::Char
            | Keyword::Varchar
            | Keyword::National
            | Keyword::Nchar
            | Keyword::Time
            | Keyword::Timestamp => self.parse_const_typename_literal(),
            Keyword::Double => {
                // DOUBLE PRECISION starts a typed literal; a lone "double"
                // is an ordinary identifier
                if self.peek2()?.kind == TokenKind::Keyword(Keyword::Precision) {
                    self.parse_const_typename_literal()
                } else {
                    self.parse_columnref_or_func(loc)
                }
            }
            Keyword::Interval => self.parse_const_interval(loc),

            _ => self.parse_columnref_or_func(loc),
        }
    }

    /// `typename 'literal'`: a string constant cast to the named type.
    fn parse_const_typename_literal(&mut self) -> Result<Node> {
        let tn = self.simple_typename()?;
        let type_loc = tn.location;
        let str_loc = self.loc();
        let sval = self.sconst()?;
        Ok(Node::TypeCast(Box::new(TypeCast {
            arg: Some(make_str_const(sval, str_loc)),
            type_name: Some(Box::new(tn)),
            location: type_loc,
        })))
    }

    /// INTERVAL literals put the field spec after the string:
    /// `INTERVAL '1' HOUR`, `INTERVAL '1.5' SECOND (2)`, `INTERVAL (3) '...'`.
    fn parse_const_interval(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Interval)?;
        let mut tn = system_type("interval", loc);
        if self.accept(TokenKind::LParen)? {
            let precision = self.iconst()?;
            self.expect(TokenKind::RParen)?;
            let str_loc = self.loc();
            let sval = self.sconst()?;
            tn.typmods = Some(vec![
                Node::Integer(Integer { ival: INTERVAL_FULL_RANGE as i64 }),
                Node::Integer(Integer { ival: precision }),
            ]);
            return Ok(Node::TypeCast(Box::new(TypeCast {
                arg: Some(make_str_const(sval, str_loc)),
                type_name: Some(Box::new(tn)),
                location: loc,
            })));
        }
        let str_loc = self.loc();
        let sval = self.sconst()?;
        tn.typmods = self.opt_interval()?;
        Ok(Node::TypeCast(Box::new(TypeCast {
            arg: Some(make_str_const(sval, str_loc)),
            type_name: Some(Box::new(tn)),
            location: loc,
        })))
    }

    fn svf_with_precision(
        &mut self,
        plain: SvfOp,
        with_precision: SvfOp,
        loc: ParseLoc,
    ) -> Result<Node> {
        if self.accept(TokenKind::LParen)? {
            let typmod = self.iconst()?;
            self.expect(TokenKind::RParen)?;
            return Ok(make_svf(with_precision, typmod as i32, loc));
        }
        Ok(make_svf(plain, -1, loc))
    }

    fn parse_paren_expr(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect(TokenKind::LParen)?;
        if self.at_select_intro() {
            let subselect = self.parse_select_stmt(None)?;
            self.expect(TokenKind::RParen)?;
            let link = Node::SubLink(Box::new(SubLink {
                sub_link_type: SubLinkType::Expr,
                subselect: Some(Node::SelectStmt(subselect)),
                location: loc,
                ..Default::default()
            }));
            return self.wrap_indirection(link);
        }
        let first = self.parse_a_expr()?;
        if self.kind() == TokenKind::Comma {
            let mut args = vec![first];
            while self.accept(TokenKind::Comma)? {
                args.push(self.parse_a_expr()?);
            }
            self.expect(TokenKind::RParen)?;
            return Ok(Node::RowExpr(Box::new(RowExpr {
                args: Some(args),
                row_format: CoercionForm::ImplicitCast,
                colnames: None,
                location: loc,
            })));
        }
        self.expect(TokenKind::RParen)?;
        self.wrap_indirection(first)
    }

    /// Wraps an expression in A_Indirection if subscripts or field
    /// selections follow it.
    fn wrap_indirection(&mut self, arg: Node) -> Result<Node> {
        let indirection = self.opt_indirection()?;
        match indirection {
            Some(items) => Ok(Node::AIndirection(Box::new(AIndirection {
                arg: Some(arg),
                indirection: Some(items),
            }))),
            None => Ok(arg),
        }
    }

    /// Trailing `.field`, `.*` and `[subscript]` items.
    pub(crate) fn opt_indirection(&mut self) -> Result<Option<Vec<Node>>> {
        let mut items = Vec::new();
        loop {
            if self.kind() == TokenKind::Dot {
                self.advance()?;
                if self.accept(TokenKind::Star)? {
                    items.push(Node::AStar(AStar));
                } else {
                    items.push(make_string(self.col_label()?));
                }
            } else if self.kind() == TokenKind::LBracket {
                items.push(self.parse_subscript()?);
            } else {
                break;
            }
        }
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items))
    }

    fn parse_subscript(&mut self) -> Result<Node> {
        self.expect(TokenKind::LBracket)?;
        let mut indices = AIndices::default();
        if self.kind() != TokenKind::Colon {
            indices.uidx = Some(self.parse_a_expr()?);
        }
        if self.accept(TokenKind::Colon)? {
            indices.is_slice = true;
            indices.lidx = indices.uidx.take();
            if self.kind() != TokenKind::RBracket {
                indices.uidx = Some(self.parse_a_expr()?);
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Node::AIndices(Box::new(indices)))
    }

    fn parse_case_expr(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Case)?;
        let arg = if self.at_kw(Keyword::When) { None } else { Some(self.parse_a_expr()?) };
        let mut whens = Vec::new();
        while self.at_kw(Keyword::When) {
            let when_loc = self.loc();
            self.advance()?;
            let expr = self.parse_a_expr()?;
            self.expect_kw(Keyword::Then)?;
            let result = self.parse_a_expr()?;
            whens.push(Node::CaseWhen(Box::new(CaseWhen {
                expr: Some(expr),
                result: Some(result),
                location: when_loc,
            })));
        }
        if whens.is_empty() {
            return self.syntax_error();
        }
        let defresult = if self.accept_kw(Keyword::Else)? {
            Some(self.parse_a_expr()?)
        } else {
            None
        };
        self.expect_kw(Keyword::End)?;
        Ok(Node::CaseExpr(Box::new(CaseExpr { arg, args: Some(whens), defresult, location: loc })))
    }

    fn parse_array_literal(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect(TokenKind::LBracket)?;
        let mut elements = Vec::new();
        if self.kind() != TokenKind::RBracket {
            loop {
                if self.kind() == TokenKind::LBracket {
                    let inner_loc = self.loc();
                    elements.push(self.parse_array_literal_inner(inner_loc)?);
                } else {
                    elements.push(self.parse_a_expr()?);
                }
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Node::AArrayExpr(Box::new(AArrayExpr { elements: Some(elements), location: loc })))
    }

    fn parse_array_literal_inner(&mut self, loc: ParseLoc) -> Result<Node> {
        self.parse_array_literal(loc)
    }

    // SQL-syntax functions that keep their own grammar but become ordinary
    // FuncCalls on pg_catalog functions in the tree

    fn parse_extract(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Extract)?;
        self.expect(TokenKind::LParen)?;
        let field_loc = self.loc();
        let field = match self.kind() {
            TokenKind::SConst => self.advance()?.text,
            _ => self.col_label()?,
        };
        self.expect_kw(Keyword::From)?;
        let source = self.parse_a_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(Node::FuncCall(Box::new(FuncCall {
            funcname: Some(system_func_name("extract")),
            args: Some(vec![make_str_const(field, field_loc), source]),
            funcformat: CoercionForm::SqlSyntax,
            location: loc,
            ..Default::default()
        })))
    }

    fn parse_position(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Position)?;
        self.expect(TokenKind::LParen)?;
        let needle = self.parse_b_expr()?;
        self.expect_kw(Keyword::In)?;
        let haystack = self.parse_b_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(Node::FuncCall(Box::new(FuncCall {
            funcname: Some(system_func_name("position")),
            args: Some(vec![haystack, needle]),
            funcformat: CoercionForm::SqlSyntax,
            location: loc,
            ..Default::default()
        })))
    }

    fn parse_substring(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Substring)?;
        self.expect(TokenKind::LParen)?;
        let source = self.parse_a_expr()?;
        let args = if self.accept_kw(Keyword::From)? {
            let from = self.parse_a_expr()?;
            if self.accept_kw(Keyword::For)? {
                let count = self.parse_a_expr()?;
                vec![source, from, count]
            } else {
                vec![source, from]
            }
        } else if self.accept_kw(Keyword::For)? {
            let count = self.parse_a_expr()?;
            vec![source, make_int_const(1, -1), count]
        } else {
            let mut args = vec![source];
            while self.accept(TokenKind::Comma)? {
                args.push(self.parse_a_expr()?);
            }
            args
        };
        self.expect(TokenKind::RParen)?;
        Ok(Node::FuncCall(Box::new(FuncCall {
            funcname: Some(system_func_name("substring")),
            args: Some(args),
            funcformat: CoercionForm::SqlSyntax,
            location: loc,
            ..Default::default()
        })))
    }

    fn parse_trim(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Trim)?;
        self.expect(TokenKind::LParen)?;
        let func = if self.accept_kw(Keyword::Leading)? {
            "ltrim"
        } else if self.accept_kw(Keyword::Trailing)? {
            "rtrim"
        } else {
            let _ = self.accept_kw(Keyword::Both)?;
            "btrim"
        };
        // trim_list: [chars] FROM source | source [, chars]
        let args = if self.accept_kw(Keyword::From)? {
            self.expr_list()?
        } else {
            let first = self.parse_a_expr()?;
            if self.accept_kw(Keyword::From)? {
                let mut rest = self.expr_list()?;
                rest.push(first);
                rest
            } else if self.accept(TokenKind::Comma)? {
                let mut args = vec![first];
                args.push(self.parse_a_expr()?);
                args
            } else {
                vec![first]
            }
        };
        self.expect(TokenKind::RParen)?;
        Ok(Node::FuncCall(Box::new(FuncCall {
            funcname: Some(system_func_name(func)),
            args: Some(args),
            funcformat: CoercionForm::SqlSyntax,
            location: loc,
            ..Default::default()
        })))
    }

    fn parse_overlay(&mut self, loc: ParseLoc) -> Result<Node> {
        self.expect_kw(Keyword::Overlay)?;
        self.expect(TokenKind::LParen)?;
        let source = self.parse_a_expr()?;
        self.expect_kw(Keyword::Placing)?;
        let placing = self.parse_a_expr()?;
        self.expect_kw(Keyword::From)?;
        let from = self.parse_a_expr()?;
        let mut args = vec![source, placing, from];
        if self.accept_kw(Keyword::For)? {
            args.push(self.parse_a_expr()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(Node::FuncCall(Box::new(FuncCall {
            funcname: Some(system_func_name("overlay")),
            args: Some(args),
            funcformat: CoercionForm::SqlSyntax,
            location: loc,
            ..Default::default()
        })))
    }

    // -----------------------------------------------------------------------
    // column references and function calls

    fn parse_columnref_or_func(&mut self, loc: ParseLoc) -> Result<Node> {
        let first_is_type_func_only = match self.cur_keyword() {
            Some(kw) => kw.category() == KeywordCategory::TypeFuncName,
            None => false,
        };
        if !self.at_col_id() && !first_is_type_func_only {
            return self.syntax_error();
        }
        let mut fields = vec![make_string(self.advance()?.text)];
        let mut saw_star = false;
        while !saw_star && self.kind() == TokenKind::Dot {
            self.advance()?;
            if self.accept(TokenKind::Star)? {
                fields.push(Node::AStar(AStar));
                saw_star = true;
            } else {
                fields.push(make_string(self.col_label()?));
            }
        }

        if !saw_star && self.kind() == TokenKind::LParen {
            return self.parse_func_call(fields, loc);
        }
        if !saw_star && fields.len() == 1 && self.kind() == TokenKind::SConst {
            // func_name Sconst: a string literal of a named type, e.g.
            // date '2024-01-07'
            if let Node::String(name) = &fields[0] {
                let tn = TypeName {
                    names: Some(vec![make_string(name.sval.clone())]),
                    location: loc,
                    ..Default::default()
                };
                let str_loc = self.loc();
                let sval = self.sconst()?;
                return Ok(Node::TypeCast(Box::new(TypeCast {
                    arg: Some(make_str_const(sval, str_loc)),
                    type_name: Some(Box::new(tn)),
                    location: loc,
                })));
            }
        }
        if first_is_type_func_only {
            // a type/function-name keyword alone is not a column reference
            return self.syntax_error();
        }

        let columnref = Node::ColumnRef(Box::new(ColumnRef { fields: Some(fields), location: loc }));
        if self.kind() == TokenKind::LBracket {
            return self.wrap_indirection(columnref);
        }
        Ok(columnref)
    }

    pub(super) fn parse_func_call(&mut self, funcname: Vec<Node>, loc: ParseLoc) -> Result<Node> {
        self.expect(TokenKind::LParen)?;
        let mut fc = FuncCall {
            funcname: Some(funcname),
            funcformat: CoercionForm::ExplicitCall,
            location: loc,
            ..Default::default()
        };

        if self.accept(TokenKind::Star)? {
            self.expect(TokenKind::RParen)?;
            fc.agg_star = true;
        } else if !self.accept(TokenKind::RParen)? {
            if self.at_kw(Keyword::Distinct) {
                self.advance()?;
                fc.agg_distinct = true;
            } else {
                let _ = self.accept_kw(Keyword::All)?;
            }
            let mut args = Vec::new();
            loop {
                if self.accept_kw(Keyword::Variadic)? {
                    fc.func_variadic = true;
                }
                args.push(self.parse_func_arg()?);
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            if self.at_kw(Keyword::Order) {
                self.advance()?;
                self.expect_kw(Keyword::By)?;
                fc.agg_order = Some(self.sortby_list()?);
            }
            self.expect(TokenKind::RParen)?;
            fc.args = Some(args);
        }

        if self.at_kw(Keyword::Within) {
            self.advance()?;
            self.expect_kw(Keyword::Group)?;
            self.expect(TokenKind::LParen)?;
            self.expect_kw(Keyword::Order)?;
            self.expect_kw(Keyword::By)?;
            fc.agg_order = Some(self.sortby_list()?);
            self.expect(TokenKind::RParen)?;
            fc.agg_within_group = true;
        }
        if self.at_kw(Keyword::Filter) {
            self.advance()?;
            self.expect(TokenKind::LParen)?;
            self.expect_kw(Keyword::Where)?;
            fc.agg_filter = Some(self.parse_a_expr()?);
            self.expect(TokenKind::RParen)?;
        }
        if self.at_kw(Keyword::Over) {
            self.advance()?;
            fc.over = Some(Box::new(self.parse_over_clause()?));
        }
        Ok(Node::FuncCall(Box::new(fc)))
    }

    /// One function argument: an expression, or `name := expr` /
    /// `name => expr` named-argument notation.
    fn parse_func_arg(&mut self) -> Result<Node> {
        if self.at_col_id() || self.cur_keyword().map(|k| k.category()) == Some(KeywordCategory::TypeFuncName)
        {
            let next = self.peek2()?.kind;
            if next == TokenKind::ColonEquals || next == TokenKind::EqualsGreater {
                let loc = self.loc();
                let name = self.advance()?.text;
                self.advance()?;
                let arg = self.parse_a_expr()?;
                return Ok(Node::NamedArgExpr(Box::new(NamedArgExpr {
                    arg: Some(arg),
                    name,
                    argnumber: -1,
                    location: loc,
                })));
            }
        }
        self.parse_a_expr()
    }

    fn parse_over_clause(&mut self) -> Result<WindowDef> {
        if self.kind() == TokenKind::LParen {
            return self.parse_window_specification();
        }
        let loc = self.loc();
        let name = self.col_id()?;
        Ok(WindowDef {
            name,
            frame_options: FRAMEOPTION_DEFAULTS,
            location: loc,
            ..Default::default()
        })
    }

    pub(crate) fn parse_window_specification(&mut self) -> Result<WindowDef> {
        let loc = self.loc();
        self.expect(TokenKind::LParen)?;
        let mut def = WindowDef {
            frame_options: FRAMEOPTION_DEFAULTS,
            location: loc,
            ..Default::default()
        };
        if self.at_col_id()
            && !matches!(
                self.cur_keyword(),
                Some(Keyword::Partition | Keyword::Order | Keyword::Range | Keyword::Rows | Keyword::Groups)
            )
        {
            def.refname = self.col_id()?;
        }
        if self.at_kw(Keyword::Partition) {
            self.advance()?;
            self.expect_kw(Keyword::By)?;
            def.partition_clause = Some(self.expr_list()?);
        }
        if self.at_kw(Keyword::Order) {
            self.advance()?;
            self.expect_kw(Keyword::By)?;
            def.order_clause = Some(self.sortby_list()?);
        }
        if let Some(kw @ (Keyword::Range | Keyword::Rows | Keyword::Groups)) = self.cur_keyword() {
            self.advance()?;
            let mut options = FRAMEOPTION_NONDEFAULT
                | match kw {
                    Keyword::Range => FRAMEOPTION_RANGE,
                    Keyword::Rows => FRAMEOPTION_ROWS,
                    _ => FRAMEOPTION_GROUPS,
                };
            if self.accept_kw(Keyword::Between)? {
                options |= FRAMEOPTION_BETWEEN;
                let (start_bits, start_offset) = self.parse_frame_bound(true)?;
                self.expect_kw(Keyword::And)?;
                let (end_bits, end_offset) = self.parse_frame_bound(false)?;
                options |= start_bits | end_bits;
                def.start_offset = start_offset;
                def.end_offset = end_offset;
            } else {
                let (start_bits, start_offset) = self.parse_frame_bound(true)?;
                options |= start_bits | FRAMEOPTION_END_CURRENT_ROW;
                def.start_offset = start_offset;
            }
            if self.accept_kw(Keyword::Exclude)? {
                if self.accept_kw(Keyword::Current)? {
                    self.expect_kw(Keyword::Row)?;
                    options |= FRAMEOPTION_EXCLUDE_CURRENT_ROW;
                } else if self.accept_kw(Keyword::Group)? {
                    options |= FRAMEOPTION_EXCLUDE_GROUP;
                } else if self.accept_kw(Keyword::Ties)? {
                    options |= FRAMEOPTION_EXCLUDE_TIES;
                } else {
                    self.expect_kw(Keyword::No)?;
                    self.expect_kw(Keyword::Others)?;
                }
            }
            def.frame_options = options;
        }
        self.expect(TokenKind::RParen)?;
        Ok(def)
    }

    fn parse_frame_bound(&mut self, is_start: bool) -> Result<(i32, Option<Node>)> {
        if self.accept_kw(Keyword::Unbounded)? {
            if self.accept_kw(Keyword::Preceding)? {
                let bits = if is_start {
                    FRAMEOPTION_START_UNBOUNDED_PRECEDING
                } else {
                    FRAMEOPTION_END_UNBOUNDED_PRECEDING
                };
                return Ok((bits, None));
            }
            self.expect_kw(Keyword::Following)?;
            let bits = if is_start {
                FRAMEOPTION_START_UNBOUNDED_FOLLOWING
            } else {
                FRAMEOPTION_END_UNBOUNDED_FOLLOWING
            };
            return Ok((bits, None));
        }
        if self.accept_kw(Keyword::Current)? {
            self.expect_kw(Keyword::Row)?;
            let bits =
                if is_start { FRAMEOPTION_START_CURRENT_ROW } else { FRAMEOPTION_END_CURRENT_ROW };
            return Ok((bits, None));
        }
        let offset = self.parse_a_expr()?;
        if self.accept_kw(Keyword::Preceding)? {
            let bits = if is_start {
                FRAMEOPTION_START_OFFSET_PRECEDING
            } else {
                FRAMEOPTION_END_OFFSET_PRECEDING
            };
            return Ok((bits, Some(offset)));
        }
        self.expect_kw(Keyword::Following)?;
        let bits = if is_start {
            FRAMEOPTION_START_OFFSET_FOLLOWING
        } else {
            FRAMEOPTION_END_OFFSET_FOLLOWING
        };
        Ok((bits, Some(offset)))
    }
}

// ---------------------------------------------------------------------------

fn make_null_test(arg: Node, nulltesttype: NullTestType, location: ParseLoc) -> Node {
    Node::NullTest(Box::new(NullTest { arg: Some(arg), nulltesttype, argisrow: false, location }))
}

fn make_boolean_test(arg: Node, booltesttype: BoolTestType, location: ParseLoc) -> Node {
    Node::BooleanTest(Box::new(BooleanTest { arg: Some(arg), booltesttype, location }))
}

fn make_svf(op: SvfOp, typmod: i32, location: ParseLoc) -> Node {
    Node::SqlValueFunction(Box::new(SqlValueFunction { op, typmod, location }))
}

/// Unary minus folds into integer and float constants, the way
/// PostgreSQL's doNegate does, so `-1` is a negative literal rather than
/// an operator expression.
fn negate(operand: Node, location: ParseLoc) -> Node {
    if let Node::AConst(mut ac) = operand {
        match &mut ac.val {
            Some(Node::Integer(i)) => {
                i.ival = -i.ival;
                ac.location = location;
                return Node::AConst(ac);
            }
            Some(Node::Float(f)) => {
                if let Some(stripped) = f.fval.strip_prefix('-') {
                    f.fval = stripped.to_string();
                } else {
                    f.fval = format!("-{}", f.fval);
                }
                ac.location = location;
                return Node::AConst(ac);
            }
            _ => return make_a_expr(AExprKind::Op, "-", None, Some(Node::AConst(ac)), location),
        }
    }
    make_a_expr(AExprKind::Op, "-", None, Some(operand), location)
}

