use lvs_model::Component;
use lvs_model::TagId;

/// The current binding for every tag, indexed by `TagId`. Index `0` is
/// unused (the anonymous slot never binds); indices `1..=named_pattern_cnt`
/// hold the named tags' current captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings(Vec<Option<Component>>);

impl Bindings {
    /// A fresh, fully-unbound context sized for `named_pattern_cnt` tags.
    pub fn empty(named_pattern_cnt: u64) -> Self {
        Self(vec![None; named_pattern_cnt as usize + 1])
    }

    /// Starts from a caller-supplied context (e.g. the packet name's
    /// bindings, seeded into the key name's match), padding it out to the
    /// requested size if it's shorter and leaving any extra slots alone.
    pub fn seeded(named_pattern_cnt: u64, mut initial: Bindings) -> Self {
        let want = named_pattern_cnt as usize + 1;
        if initial.0.len() < want {
            initial.0.resize(want, None);
        }
        initial
    }

    pub fn get(&self, tag: TagId) -> Option<&Component> {
        self.0.get(tag as usize).and_then(|v| v.as_ref())
    }

    pub fn is_bound(&self, tag: TagId) -> bool {
        self.get(tag).is_some()
    }

    pub fn set(&mut self, tag: TagId, value: Component) {
        if let Some(slot) = self.0.get_mut(tag as usize) {
            *slot = Some(value);
        }
    }

    pub fn clear(&mut self, tag: TagId) {
        if let Some(slot) = self.0.get_mut(tag as usize) {
            *slot = None;
        }
    }

    /// Iterates bound, named tags (`1..=named_pattern_cnt`, so never the
    /// anonymous slot), in tag order.
    pub fn named_bindings(&self) -> impl Iterator<Item = (TagId, &Component)> {
        self.0
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(tag, v)| v.as_ref().map(|c| (tag as TagId, c)))
    }
}

/// Where a node's outgoing-edge scan currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeCursor {
    AtValue,
    AtPattern(usize),
}

/// A registered predicate bank for `Call` constraint options. Implemented by
/// `lvs-checker`'s function registry; kept as a trait here so the matcher
/// doesn't need to depend on how functions are stored or looked up.
pub trait UserFns {
    /// Evaluates `fn_id(value, args)`, or `None` if `fn_id` isn't
    /// registered (the caller turns that into a fatal model error).
    fn call(&self, fn_id: &str, value: &Component, args: &[Component]) -> Option<bool>;
}

/// The matcher reached a `Call` to a function the registry has no entry
/// for. Fatal: it aborts the in-flight match rather than reporting a false
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedFn(pub String);

impl std::fmt::Display for UndefinedFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "call to undefined user function {:?}", self.0)
    }
}

impl std::error::Error for UndefinedFn {}
