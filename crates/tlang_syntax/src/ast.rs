//! Syntax tree for tlang programs.
//!
//! The parser builds this tree only for input that analyzes without any diagnostic. It is a closed set of tagged
//! variants; expressions are either a [`Expr::Value`] leaf or an [`Expr::BinaryOp`] node.

use std::fmt;

use tlang_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling (at most five ASCII alphanumerics, leading letter).
pub type Ident = String;

/// `Program Vars Block end`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub vars: Vec<Spanned<Ident>>,
    pub body: Block,
}

/// `Start Statements End`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If(Guarded),
    Iteration(Guarded),
    Read(Spanned<Ident>),
    Print(Expr),
    Put { target: Spanned<Ident>, value: Expr },
}

/// The shared shape of `If` and `Iteration`: a comparison and a single-statement body.
#[derive(Debug, Clone, PartialEq)]
pub struct Guarded {
    pub condition: Condition,
    pub body: Box<Spanned<Statement>>,
}

/// `Expr Op Expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub lhs: Expr,
    pub op: RelOp,
    pub rhs: Expr,
}

/// The `Op` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Gt,
    Eq,
}

impl RelOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Lt => Some(RelOp::Lt),
            OperatorId::Gt => Some(RelOp::Gt),
            OperatorId::EqEq => Some(RelOp::Eq),
            _ => None,
        }
    }

    pub fn operator(self) -> OperatorId {
        match self {
            RelOp::Lt => OperatorId::Lt,
            RelOp::Gt => OperatorId::Gt,
            RelOp::Eq => OperatorId::EqEq,
        }
    }
}

/// The additive operators of `ExprTail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

impl AddOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Plus => Some(AddOp::Add),
            OperatorId::Minus => Some(AddOp::Sub),
            _ => None,
        }
    }

    pub fn operator(self) -> OperatorId {
        match self {
            AddOp::Add => OperatorId::Plus,
            AddOp::Sub => OperatorId::Minus,
        }
    }
}

/// The `R` rule: an identifier or a number literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Ident(Ident),
    /// Digits as written; the front end never interprets their magnitude.
    Number(String),
}

/// Expressions are left-associative chains of `+` / `-` over values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value(Spanned<Value>),
    BinaryOp {
        op: AddOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Value(v) => v.span,
            Expr::BinaryOp { lhs, rhs, .. } => lhs.span().merge(rhs.span()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ident(name) => write!(f, "{name}"),
            Value::Number(digits) => write!(f, "{digits}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(v) => write!(f, "{}", v.node),
            Expr::BinaryOp { op, lhs, rhs } => {
                write!(f, "({} {} {})", lhs, operators::as_str(op.operator()), rhs)
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, operators::as_str(self.op.operator()), self.rhs)
    }
}
