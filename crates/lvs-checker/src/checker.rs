use std::collections::BTreeMap;

use lvs_match::Bindings;
use lvs_match::Matcher;
use lvs_model::Component;
use lvs_model::LvsModel;
use lvs_model::NodeId;

use crate::error::ModelError;
use crate::error::Result;
use crate::registry::FnRegistry;

/// A single hit from `Checker::match_name`: a node's rule names, plus the
/// symbolic name of every named tag the path bound on the way there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub rule_name: Vec<String>,
    pub bindings: BTreeMap<String, Component>,
}

/// Wires a schema to a function registry and exposes the two public match
/// shapes: `match_name` (rule lookup) and `check` (signing-policy
/// decision).
pub struct Checker {
    model: LvsModel,
    registry: FnRegistry,
}

impl Checker {
    pub fn new(model: LvsModel, registry: FnRegistry) -> Self {
        Self { model, registry }
    }

    pub fn model(&self) -> &LvsModel {
        &self.model
    }

    fn raw_match<'a>(
        &'a self,
        name: &'a [Component],
        initial: Bindings,
    ) -> Matcher<'a> {
        Matcher::new(&self.model, self.model.start_id, name, initial, &self.registry)
    }

    fn empty_bindings(&self) -> Bindings {
        Bindings::empty(self.model.named_pattern_cnt)
    }

    fn bindings_to_named(&self, ctx: &Bindings) -> BTreeMap<String, Component> {
        ctx.named_bindings()
            .filter_map(|(tag, c)| {
                self.model
                    .symbol_ident(tag)
                    .map(|ident| (ident.to_string(), c.clone()))
            })
            .collect()
    }

    /// Every accepting node (non-empty `rule_name`) reachable by a
    /// depth-complete path matching `name`, with its bound tags rendered by
    /// symbolic name. Lazy: stops doing work as soon as the caller stops
    /// pulling from the iterator.
    pub fn match_name<'a>(
        &'a self,
        name: &'a [Component],
    ) -> impl Iterator<Item = Result<MatchEntry>> + 'a {
        let initial = self.empty_bindings();
        self.raw_match(name, initial).filter_map(move |step| {
            let (node_id, ctx) = match step {
                Ok(pair) => pair,
                Err(e) => return Some(Err(ModelError::from(e))),
            };
            let node = self
                .model
                .node(node_id)
                .expect("matcher never yields a node id outside the model's table");
            if node.rule_name.is_empty() {
                return None;
            }
            Some(Ok(MatchEntry {
                rule_name: node.rule_name.clone(),
                bindings: self.bindings_to_named(&ctx),
            }))
        })
    }

    /// Decides whether `key_name` is a permitted signer of `pkt_name` under
    /// this schema: `pkt_name` is matched (considering every depth-complete
    /// node, not only those with a rule name), and for each result,
    /// `key_name` is matched starting from the same bindings; success iff
    /// some resulting key node appears in the packet node's `sign_cons`.
    ///
    /// A `Call` to an unregistered function during either match aborts with
    /// `ModelError` rather than silently returning `false`.
    pub fn check(&self, pkt_name: &[Component], key_name: &[Component]) -> Result<bool> {
        for pkt_step in self.raw_match(pkt_name, self.empty_bindings()) {
            let (pkt_node_id, ctx) = pkt_step?;
            let pkt_node = self
                .model
                .node(pkt_node_id)
                .expect("matcher never yields a node id outside the model's table");

            for key_step in self.raw_match(key_name, ctx.clone()) {
                let (key_node_id, _) = key_step?;
                if sign_cons_contains(&pkt_node.sign_cons, key_node_id) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

fn sign_cons_contains(sign_cons: &[NodeId], id: NodeId) -> bool {
    sign_cons.contains(&id)
}
