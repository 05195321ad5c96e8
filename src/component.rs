//! Part catalogue: part types, components, and the component universe.
//!
//! A `Component` is an immutable identity for one biological part: a unique
//! integer id (the domain value used inside decision variables), a
//! human-readable name, and a categorical part type. Components are interned
//! once per distinct part in a `Universe` and shared by `Arc` across every
//! rule that references them.

use indexmap::IndexMap;
use std::sync::Arc;

/// Categorical part types.
///
/// `Terminator` is the reserved category whose presence between two
/// components blocks adjacency rules like DRIVES.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartType {
    Promoter,
    Rbs,
    Cds,
    Terminator,
}

impl PartType {
    /// All part types, in code order.
    pub const ALL: [PartType; 4] = [
        PartType::Promoter,
        PartType::Rbs,
        PartType::Cds,
        PartType::Terminator,
    ];

    /// The integer code used as the domain value of TYPE variables.
    pub const fn code(self) -> i32 {
        match self {
            PartType::Promoter => 1,
            PartType::Rbs => 2,
            PartType::Cds => 3,
            PartType::Terminator => 4,
        }
    }

    /// Look up a part type by its integer code.
    pub fn from_code(code: i32) -> Option<PartType> {
        PartType::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Look up a part type by its canonical name (e.g. `"TERMINATOR"`).
    pub fn from_name(name: &str) -> Option<PartType> {
        match name {
            "PROMOTER" => Some(PartType::Promoter),
            "RBS" => Some(PartType::Rbs),
            "CDS" => Some(PartType::Cds),
            "TERMINATOR" => Some(PartType::Terminator),
            _ => None,
        }
    }

    /// Infer a part type from a component name, using the leading-letter
    /// convention of design scripts: `p`→Promoter, `r`→Rbs, `t`→Terminator,
    /// anything else (including `c`/`g` genes) → Cds.
    pub fn infer(name: &str) -> PartType {
        match name.chars().next() {
            Some('p') | Some('P') => PartType::Promoter,
            Some('r') | Some('R') => PartType::Rbs,
            Some('t') | Some('T') => PartType::Terminator,
            _ => PartType::Cds,
        }
    }

    /// Whether this is the reserved terminator category.
    pub fn is_terminator(self) -> bool {
        matches!(self, PartType::Terminator)
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartType::Promoter => write!(f, "PROMOTER"),
            PartType::Rbs => write!(f, "RBS"),
            PartType::Cds => write!(f, "CDS"),
            PartType::Terminator => write!(f, "TERMINATOR"),
        }
    }
}

/// One biological part. Immutable after interning.
#[derive(Debug, PartialEq, Eq)]
pub struct Component {
    id: i32,
    name: String,
    part_type: PartType,
}

impl Component {
    /// The unique integer id, used as the domain value of PART variables.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The categorical part type.
    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    /// Whether this component is of the reserved terminator type.
    pub fn is_terminator(&self) -> bool {
        self.part_type.is_terminator()
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The set of all components referenced by one design problem.
///
/// Provides bidirectional mapping between names, ids, and components:
/// - `intern(name, part_type)` → `Arc<Component>` (get or create)
/// - `lookup(name)` → `Option<Arc<Component>>`
/// - `get(id)` → `Option<Arc<Component>>`
///
/// Ids are assigned densely starting at 1, in interning order.
#[derive(Debug, Default)]
pub struct Universe {
    index: IndexMap<String, Arc<Component>>,
}

impl Universe {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self {
            index: IndexMap::new(),
        }
    }

    /// Intern a component, returning the shared handle (creating if new).
    ///
    /// The name is the identity: interning an existing name returns the
    /// existing component and ignores the given part type.
    pub fn intern(&mut self, name: &str, part_type: PartType) -> Arc<Component> {
        if let Some(existing) = self.index.get(name) {
            return Arc::clone(existing);
        }
        let component = Arc::new(Component {
            id: self.index.len() as i32 + 1,
            name: name.to_string(),
            part_type,
        });
        self.index.insert(name.to_string(), Arc::clone(&component));
        component
    }

    /// Intern a component, inferring its part type from its name.
    pub fn intern_inferred(&mut self, name: &str) -> Arc<Component> {
        self.intern(name, PartType::infer(name))
    }

    /// Look up a component by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<Component>> {
        self.index.get(name).map(Arc::clone)
    }

    /// Look up a component by id.
    pub fn get(&self, id: i32) -> Option<Arc<Component>> {
        if id < 1 {
            return None;
        }
        self.index
            .get_index(id as usize - 1)
            .map(|(_, c)| Arc::clone(c))
    }

    /// Number of interned components.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over all components in interning order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Component>> {
        self.index.values()
    }
}
