//! Zone expressions and their rewrite into the engine's zone grammar.
//!
//! The engine describes a zone as a flat sequence of signed body references
//! joined by intersection (blank) or union (`OR`). It has no complement of a
//! composite region and no parentheses, so every zone is normalized here:
//!
//! 1. Build a binary [`Expr`] from the base body and its operations,
//!    representing subtraction as intersection with a complemented operand.
//! 2. Push complements down to the leaves with De Morgan's laws.
//! 3. Expand into a sum of products (a list of intersected clauses).
//! 4. Flatten into [`Construction`]s, starting every clause after the first
//!    with a union.

use shield_ir::OperationKind;

/// Whether a region or its complement is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The region itself.
    Plus,
    /// Everything outside the region.
    Minus,
}

impl Sign {
    fn flipped(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    /// Character used in `geo.dat`.
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// Binary set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    /// Points in both operands.
    Intersection,
    /// Points in either operand.
    Union,
}

impl SetOp {
    fn dual(self) -> Self {
        match self {
            Self::Intersection => Self::Union,
            Self::Union => Self::Intersection,
        }
    }

    /// Two-character operator column used in `geo.dat`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Intersection => "  ",
            Self::Union => "OR",
        }
    }
}

/// One entry of a zone description in `geo.dat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construction {
    /// How this entry joins the preceding ones.
    pub op: SetOp,
    /// Body or its complement.
    pub sign: Sign,
    /// Engine body ID.
    pub body: i64,
}

impl Construction {
    fn new(op: SetOp, sign: Sign, body: i64) -> Self {
        Self { op, sign, body }
    }
}

/// Signed body reference inside a clause.
type Literal = (Sign, i64);

/// Set expression over engine body IDs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A body or its complement.
    Body {
        /// Complement marker.
        sign: Sign,
        /// Engine body ID.
        id: i64,
    },
    /// Combination of two sub-expressions, possibly complemented as a whole.
    Node {
        /// Operator.
        op: SetOp,
        /// Complement marker applying to the whole node.
        sign: Sign,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// The region of a single body.
    pub fn body(id: i64) -> Self {
        Self::Body {
            sign: Sign::Plus,
            id,
        }
    }

    /// Fold a zone description, left to right, starting from its base body.
    pub fn from_construction(base: i64, operations: &[(i64, OperationKind)]) -> Self {
        operations
            .iter()
            .fold(Self::body(base), |acc, &(id, kind)| match kind {
                OperationKind::Intersect => acc.combine(SetOp::Intersection, Self::body(id)),
                OperationKind::Union => acc.combine(SetOp::Union, Self::body(id)),
                OperationKind::Subtract => acc.subtract(Self::body(id)),
            })
    }

    /// Union of all given expressions, or `None` when there are none.
    pub fn union_all(exprs: impl IntoIterator<Item = Expr>) -> Option<Self> {
        exprs
            .into_iter()
            .reduce(|acc, expr| acc.combine(SetOp::Union, expr))
    }

    fn combine(self, op: SetOp, right: Expr) -> Self {
        Self::Node {
            op,
            sign: Sign::Plus,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Points of `self` outside `other`.
    pub fn subtract(self, other: Expr) -> Self {
        self.combine(SetOp::Intersection, other.complement())
    }

    fn complement(self) -> Self {
        match self {
            Self::Body { sign, id } => Self::Body {
                sign: sign.flipped(),
                id,
            },
            Self::Node {
                op,
                sign,
                left,
                right,
            } => Self::Node {
                op,
                sign: sign.flipped(),
                left,
                right,
            },
        }
    }

    /// Rewrite so that only leaves carry [`Sign::Minus`].
    fn without_complements(self) -> Self {
        match self {
            Self::Body { .. } => self,
            Self::Node {
                op,
                sign,
                left,
                right,
            } => {
                let (op, left, right) = match sign {
                    Sign::Plus => (op, *left, *right),
                    Sign::Minus => (op.dual(), left.complement(), right.complement()),
                };
                Self::Node {
                    op,
                    sign: Sign::Plus,
                    left: Box::new(left.without_complements()),
                    right: Box::new(right.without_complements()),
                }
            }
        }
    }

    /// Sum-of-products expansion of a complement-free expression.
    fn clauses(&self) -> Vec<Vec<Literal>> {
        match self {
            Self::Body { sign, id } => vec![vec![(*sign, *id)]],
            Self::Node {
                op, left, right, ..
            } => {
                let left = left.clauses();
                let right = right.clauses();
                match op {
                    SetOp::Union => left.into_iter().chain(right).collect(),
                    SetOp::Intersection => {
                        let mut product = Vec::with_capacity(left.len() * right.len());
                        for l in &left {
                            for r in &right {
                                product.push(l.iter().chain(r.iter()).copied().collect());
                            }
                        }
                        product
                    }
                }
            }
        }
    }

    /// Flatten into the `geo.dat` construction sequence.
    pub fn into_constructions(self) -> Vec<Construction> {
        let mut constructions = Vec::new();
        for (i, clause) in self.without_complements().clauses().into_iter().enumerate() {
            for (j, (sign, body)) in clause.into_iter().enumerate() {
                let op = if i > 0 && j == 0 {
                    SetOp::Union
                } else {
                    SetOp::Intersection
                };
                constructions.push(Construction::new(op, sign, body));
            }
        }
        constructions
    }
}
