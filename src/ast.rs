use std::{collections::BTreeSet, fmt};

use crate::interpreter::value::set::Set;

/// An operator symbol of the language.
///
/// Each symbol has a fixed set of arities it may be applied with; what it does
/// depends on the arity it is used at:
///
/// | Symbol | 1 operand | 2 operands | binder |
/// |---|---|---|---|
/// | `+` | union of elements | union | |
/// | `*` | intersection of elements | intersection | |
/// | `-` | symmetric difference of elements | difference | |
/// | `$` | cardinality | | |
/// | `^` | powerset | | |
/// | `<` | | subset | |
/// | `[` | | membership | |
/// | `=` | | equality | |
/// | `#` | | | map |
/// | `?` | | | filter |
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// `+`
    Union,
    /// `*`
    Intersection,
    /// `-`
    Difference,
    /// `$`
    Cardinality,
    /// `^`
    Powerset,
    /// `<`
    Subset,
    /// `[`
    Member,
    /// `=`
    Equal,
    /// `#`
    Map,
    /// `?`
    Filter,
}

impl Operator {
    /// The source symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Union => '+',
            Self::Intersection => '*',
            Self::Difference => '-',
            Self::Cardinality => '$',
            Self::Powerset => '^',
            Self::Subset => '<',
            Self::Member => '[',
            Self::Equal => '=',
            Self::Map => '#',
            Self::Filter => '?',
        }
    }

    /// Whether the operator can be applied to a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self,
                 Self::Union
                 | Self::Intersection
                 | Self::Difference
                 | Self::Cardinality
                 | Self::Powerset)
    }

    /// Whether the operator can be applied to two operands.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self,
                 Self::Union
                 | Self::Intersection
                 | Self::Difference
                 | Self::Subset
                 | Self::Member
                 | Self::Equal)
    }

    /// Whether the operator binds a label over a body (map and filter).
    #[must_use]
    pub const fn is_binder(self) -> bool {
        matches!(self, Self::Map | Self::Filter)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node.
///
/// The same type describes parsed programs and the placeholders produced by
/// partial evaluation, which is why operator nodes carry a `forced` flag: in
/// partial mode only forced operators are applied. The parser never sets it.
///
/// Set literals come in two shapes. A literal whose elements are all reduced
/// is itself reduced and is stored as the finished [`Expr::Set`]; any other
/// literal is an [`Expr::SetLiteral`]. Use [`Expr::collection`] to build
/// either, so that the choice is made once from the children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Expr {
    /// A fully reduced set.
    Set(Set),
    /// A set literal holding at least one unreduced element.
    SetLiteral(BTreeSet<Self>),
    /// Reference to a label, such as `U`.
    Label(String),
    /// A suffix operator applied to one operand, e.g. `S$`.
    Unary {
        /// The operator.
        op:      Operator,
        /// The operand.
        operand: Box<Self>,
        /// Whether partial evaluation must apply this node.
        forced:  bool,
    },
    /// An infix operator applied to two operands, e.g. `A + B`.
    Binary {
        /// The operator.
        op:     Operator,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
        /// Whether partial evaluation must apply this node.
        forced: bool,
    },
    /// A map or filter, e.g. `S#x:(x + 1)`.
    Binder {
        /// The operator, `#` or `?`.
        op:      Operator,
        /// The set being mapped or filtered.
        operand: Box<Self>,
        /// The label bound to each element inside `body`.
        label:   String,
        /// The body evaluated once per element.
        body:    Box<Self>,
        /// Whether partial evaluation must apply this node.
        forced:  bool,
    },
}

impl Expr {
    /// Builds a set literal from its elements.
    ///
    /// Returns [`Expr::Set`] when every element is already reduced and
    /// [`Expr::SetLiteral`] otherwise. Duplicate elements collapse.
    ///
    /// # Example
    /// ```
    /// use mindset::{ast::Expr, interpreter::value::set::Set};
    ///
    /// let reduced = Expr::collection([Expr::Set(Set::ordinal(0)), Expr::Set(Set::ordinal(1))]);
    /// assert_eq!(reduced, Expr::Set(Set::ordinal(2)));
    ///
    /// let pending = Expr::collection([Expr::Set(Set::ordinal(0)), Expr::label("U")]);
    /// assert!(!pending.is_reduced());
    /// ```
    pub fn collection<I: IntoIterator<Item = Self>>(elements: I) -> Self {
        let elements: Vec<Self> = elements.into_iter().collect();

        if elements.iter().all(Self::is_reduced) {
            return Self::Set(elements.into_iter()
                                     .filter_map(|element| match element {
                                         Self::Set(set) => Some(set),
                                         _ => None,
                                     })
                                     .collect());
        }

        Self::SetLiteral(elements.into_iter().collect())
    }

    /// A label reference.
    #[must_use]
    pub fn label(name: &str) -> Self {
        Self::Label(name.to_string())
    }

    /// An unforced suffix operator node.
    #[must_use]
    pub fn unary(op: Operator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand),
                      forced: false }
    }

    /// An unforced infix operator node.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right),
                       forced: false }
    }

    /// An unforced map or filter node.
    #[must_use]
    pub fn binder(op: Operator, operand: Self, label: &str, body: Self) -> Self {
        Self::Binder { op,
                       operand: Box::new(operand),
                       label: label.to_string(),
                       body: Box::new(body),
                       forced: false }
    }

    /// Marks the outermost operator node as forced.
    ///
    /// Sets, literals, and labels are returned unchanged.
    #[must_use]
    pub fn forced(mut self) -> Self {
        match &mut self {
            Self::Unary { forced, .. } | Self::Binary { forced, .. } | Self::Binder { forced, .. } => {
                *forced = true;
            },
            Self::Set(_) | Self::SetLiteral(_) | Self::Label(_) => {},
        }
        self
    }

    /// Whether this node is a finished set.
    #[must_use]
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// The finished set, if this node is one.
    #[must_use]
    pub const fn as_set(&self) -> Option<&Set> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// The elements of this node, if it denotes a collection.
    ///
    /// Finished sets and set literals are collections; labels and operator
    /// nodes are not.
    #[must_use]
    pub fn members(&self) -> Option<BTreeSet<Self>> {
        match self {
            Self::Set(set) => Some(set.iter().cloned().map(Self::Set).collect()),
            Self::SetLiteral(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    /// Truthiness: the empty set is false and anything else is true.
    ///
    /// Unresolved placeholders count as true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.as_set().is_none_or(|set| !set.is_empty())
    }
}

impl From<Set> for Expr {
    fn from(set: Set) -> Self {
        Self::Set(set)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = |forced: &bool| if *forced { "!" } else { "" };

        match self {
            Self::Set(set) => write!(f, "{set}"),
            Self::SetLiteral(elements) => {
                write!(f, "{{")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "}}")
            },
            Self::Label(name) => write!(f, "{name}"),
            Self::Unary { op, operand, forced } => write!(f, "{operand}{}{op}", marker(forced)),
            Self::Binary { op,
                           left,
                           right,
                           forced, } => write!(f, "({left} {}{op} {right})", marker(forced)),
            Self::Binder { op,
                           operand,
                           label,
                           body,
                           forced, } => {
                write!(f, "{operand}{}{op}{label}:({body})", marker(forced))
            },
        }
    }
}
