//! The rule family: design constraints and their compilation.
//!
//! Every rule kind implements the same four capabilities: stable
//! stringification (`Display`), operator identity ([`Rule::operator`]),
//! positive-form compilation, and negative-form compilation. The kinds are a
//! closed sum type so the compiler is exhaustive: adding a rule kind is a
//! compile-time-checked change.
//!
//! Compilation is synchronous, purely functional over the rule and the
//! model, and never mutates either; the returned expression tree is owned by
//! the caller.

pub mod interaction;
pub mod pairing;
pub mod positioning;
pub mod templating;

use std::sync::Arc;

use crate::component::Component;
use crate::constraint::Expr;
use crate::error::CompileError;
use crate::model::Model;

/// Operator identity of a rule kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Then,
    Drives,
    Template,
    Before,
    SameOrientation,
    Forward,
    Reverse,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Then => write!(f, "THEN"),
            Operator::Drives => write!(f, "DRIVES"),
            Operator::Template => write!(f, "TEMPLATE"),
            Operator::Before => write!(f, "BEFORE"),
            Operator::SameOrientation => write!(f, "SAME_ORIENTATION"),
            Operator::Forward => write!(f, "FORWARD"),
            Operator::Reverse => write!(f, "REVERSE"),
        }
    }
}

/// One operand of a pairing rule: a single component, or a logical grouping
/// ("contains any of").
#[derive(Clone, Debug)]
pub enum Operand {
    One(Arc<Component>),
    AnyOf(Vec<Arc<Component>>),
}

impl Operand {
    /// The component ids this operand may match.
    pub fn ids(&self) -> Vec<i32> {
        match self {
            Operand::One(c) => vec![c.id()],
            Operand::AnyOf(cs) => cs.iter().map(|c| c.id()).collect(),
        }
    }
}

impl From<Arc<Component>> for Operand {
    fn from(c: Arc<Component>) -> Self {
        Operand::One(c)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::One(c) => write!(f, "{}", c.name()),
            Operand::AnyOf(cs) => {
                write!(f, "[")?;
                for (i, c) in cs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", c.name())?;
                }
                write!(f, "]")
            }
        }
    }
}

/// One template slot: the set of alternative components allowed at design
/// positions congruent to the slot's offset modulo the template length.
pub type Selection = Vec<Arc<Component>>;

/// The operand shape of each rule kind.
#[derive(Clone, Debug)]
pub enum RuleKind {
    /// "if the design contains A, it also contains B"
    Then { a: Operand, b: Operand },
    /// "A transcriptionally drives B"
    Drives { a: Arc<Component>, b: Arc<Component> },
    /// Ordered part template, matched in non-overlapping windows
    Template { slots: Vec<Selection> },
    /// every occurrence of A is before every occurrence of B
    Before { a: Arc<Component>, b: Arc<Component> },
    /// every co-occurrence of A and B shares one orientation
    SameOrientation { a: Arc<Component>, b: Arc<Component> },
    /// every occurrence of the component reads forward
    Forward { c: Arc<Component> },
    /// every occurrence of the component reads in reverse
    Reverse { c: Arc<Component> },
}

/// One design constraint.
///
/// Immutable after construction except for the negation flag, which the
/// caller may toggle before compilation.
#[derive(Clone, Debug)]
pub struct Rule {
    name: Option<String>,
    negated: bool,
    kind: RuleKind,
}

impl Rule {
    /// Wrap a rule kind into a non-negated, unnamed rule.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            name: None,
            negated: false,
            kind,
        }
    }

    /// A THEN B.
    pub fn then(a: impl Into<Operand>, b: impl Into<Operand>) -> Self {
        Self::new(RuleKind::Then {
            a: a.into(),
            b: b.into(),
        })
    }

    /// A DRIVES B.
    pub fn drives(a: Arc<Component>, b: Arc<Component>) -> Self {
        Self::new(RuleKind::Drives { a, b })
    }

    /// TEMPLATE over the given slots.
    pub fn template(slots: Vec<Selection>) -> Self {
        Self::new(RuleKind::Template { slots })
    }

    /// A BEFORE B.
    pub fn before(a: Arc<Component>, b: Arc<Component>) -> Self {
        Self::new(RuleKind::Before { a, b })
    }

    /// A SAME_ORIENTATION B.
    pub fn same_orientation(a: Arc<Component>, b: Arc<Component>) -> Self {
        Self::new(RuleKind::SameOrientation { a, b })
    }

    /// C FORWARD.
    pub fn forward(c: Arc<Component>) -> Self {
        Self::new(RuleKind::Forward { c })
    }

    /// C REVERSE.
    pub fn reverse(c: Arc<Component>) -> Self {
        Self::new(RuleKind::Reverse { c })
    }

    /// Attach a name (rendered for template rules).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style negation toggle.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Whether the negation flag is set.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Set or clear the negation flag.
    pub fn set_negated(&mut self, negated: bool) {
        self.negated = negated;
    }

    /// The rule's optional name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The rule's operand shape.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The rule's operator identity.
    pub fn operator(&self) -> Operator {
        match &self.kind {
            RuleKind::Then { .. } => Operator::Then,
            RuleKind::Drives { .. } => Operator::Drives,
            RuleKind::Template { .. } => Operator::Template,
            RuleKind::Before { .. } => Operator::Before,
            RuleKind::SameOrientation { .. } => Operator::SameOrientation,
            RuleKind::Forward { .. } => Operator::Forward,
            RuleKind::Reverse { .. } => Operator::Reverse,
        }
    }

    /// Compile the rule, honoring its negation flag.
    pub fn compile(&self, model: &Model) -> Result<Expr, CompileError> {
        if self.negated {
            self.compile_negated(model)
        } else {
            self.compile_positive(model)
        }
    }

    /// Compile the rule's positive form.
    ///
    /// Template rules carry their own negation handling: when the flag is
    /// set this entry point delegates to [`Rule::compile_negated`] instead of
    /// building the positive form. All other kinds ignore the flag here.
    pub fn compile_positive(&self, model: &Model) -> Result<Expr, CompileError> {
        if self.negated && matches!(self.kind, RuleKind::Template { .. }) {
            return self.compile_negated(model);
        }
        self.build_positive(model)
    }

    /// Compile the rule's negative form, independent of the negation flag.
    ///
    /// Always the logical negation of the positive form; failures of the
    /// positive build (e.g. a template with no complete window) propagate
    /// unchanged.
    pub fn compile_negated(&self, model: &Model) -> Result<Expr, CompileError> {
        Ok(Expr::not(self.build_positive(model)?))
    }

    /// The extensional support-table encoding of a template rule: an
    /// equivalent, engine-optimization alternative to the windowed form.
    /// Honors the negation flag by wrapping. `None` for non-template rules.
    pub fn compile_support(&self, model: &Model) -> Option<Result<Expr, CompileError>> {
        match &self.kind {
            RuleKind::Template { slots } => {
                Some(templating::support(self, slots, model).map(|e| {
                    if self.negated {
                        Expr::not(e)
                    } else {
                        e
                    }
                }))
            }
            _ => None,
        }
    }

    fn build_positive(&self, model: &Model) -> Result<Expr, CompileError> {
        match &self.kind {
            RuleKind::Then { a, b } => Ok(pairing::then(a, b, model)),
            RuleKind::Drives { a, b } => Ok(interaction::drives(a, b, model)),
            RuleKind::Template { slots } => templating::windows(self, slots, model),
            RuleKind::Before { a, b } => Ok(positioning::all_before(a, b, model)),
            RuleKind::SameOrientation { a, b } => {
                Ok(positioning::all_same_orientation(a, b, model))
            }
            RuleKind::Forward { c } => Ok(positioning::all_forward(c, model)),
            RuleKind::Reverse { c } => Ok(positioning::all_reverse(c, model)),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "NOT ")?;
        }
        match &self.kind {
            RuleKind::Then { a, b } => write!(f, "{} {} {}", a, self.operator(), b),
            RuleKind::Drives { a, b } => write!(f, "{} {} {}", a, self.operator(), b),
            RuleKind::Before { a, b } => write!(f, "{} {} {}", a, self.operator(), b),
            RuleKind::SameOrientation { a, b } => {
                write!(f, "{} {} {}", a, self.operator(), b)
            }
            RuleKind::Forward { c } => write!(f, "{} {}", c, self.operator()),
            RuleKind::Reverse { c } => write!(f, "{} {}", c, self.operator()),
            RuleKind::Template { slots } => {
                if let Some(name) = &self.name {
                    write!(f, "{} ", name)?;
                }
                write!(f, "{} ", self.operator())?;
                for (i, slot) in slots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (j, c) in slot.iter().enumerate() {
                        if j > 0 {
                            write!(f, "|")?;
                        }
                        write!(f, "{}", c.name())?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    }
}
