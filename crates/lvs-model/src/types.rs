use lvs_tlv::Component;

/// Identifies a pattern variable. `0` is the anonymous/wildcard slot;
/// `1..=named_pattern_cnt` are the named tags.
pub type TagId = u64;

/// Dense index into `LvsModel::nodes`.
pub type NodeId = u64;

/// One argument to a user-function call: either a fixed value or a
/// reference to an already-bound tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Literal(Component),
    Ref(TagId),
}

/// A call to a named, externally registered predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFnCall {
    pub fn_id: String,
    pub args: Vec<CallArg>,
}

/// One arm of a constraint disjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOption {
    Literal(Component),
    Ref(TagId),
    Call(UserFnCall),
}

/// A disjunction ("OR") of constraint options; a component satisfies it iff
/// any option is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConstraint {
    pub options: Vec<ConstraintOption>,
}

/// An edge matched by literal equality to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEdge {
    pub dest: NodeId,
    pub value: Component,
}

/// An edge matched by a conjunction ("AND") of constraint disjunctions,
/// optionally binding `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEdge {
    pub dest: NodeId,
    pub tag: TagId,
    pub cons_sets: Vec<PatternConstraint>,
}

/// One node of the schema graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub rule_name: Vec<String>,
    pub v_edges: Vec<ValueEdge>,
    pub p_edges: Vec<PatternEdge>,
    pub sign_cons: Vec<NodeId>,
}

impl Node {
    /// A node is accepting for name-matching iff it carries at least one
    /// rule name.
    pub fn is_accepting(&self) -> bool {
        !self.rule_name.is_empty()
    }
}

/// Human-readable name for a tag, used to render symbolic bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSymbol {
    pub tag: TagId,
    pub ident: String,
}

/// The decoded trust schema: immutable once built, shared by reference
/// across every match/check invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LvsModel {
    pub version: u64,
    pub start_id: NodeId,
    pub named_pattern_cnt: u64,
    pub nodes: Vec<Node>,
    pub symbols: Vec<TagSymbol>,
}

impl LvsModel {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.node(self.start_id)
    }

    /// A tag is named (participates in binding and symbolic lookup) iff it
    /// falls in `1..=named_pattern_cnt`. Everything else, including `0`, is
    /// a wildcard that matches but never binds.
    pub fn is_named_tag(&self, tag: TagId) -> bool {
        tag >= 1 && tag <= self.named_pattern_cnt
    }

    pub fn symbol_ident(&self, tag: TagId) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.tag == tag)
            .map(|s| s.ident.as_str())
    }
}
