use std::collections::HashMap;

use lvs_model::Component;

/// The set of named predicates `Call` constraint options may invoke.
///
/// Built fluently: `FnRegistry::new().register("isPrefix", ...).register(...)`.
pub struct FnRegistry {
    fns: HashMap<String, Box<dyn Fn(&Component, &[Component]) -> bool + Send + Sync>>,
}

impl FnRegistry {
    pub fn new() -> Self {
        Self {
            fns: HashMap::new(),
        }
    }

    /// Registers `name` to `f`. Re-registering a name replaces the
    /// previous entry.
    pub fn register(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&Component, &[Component]) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.fns.insert(name.into(), Box::new(f));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fns.contains_key(name)
    }
}

impl Default for FnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl lvs_match::UserFns for FnRegistry {
    fn call(&self, fn_id: &str, value: &Component, args: &[Component]) -> Option<bool> {
        self.fns.get(fn_id).map(|f| f(value, args))
    }
}
