use lvs_model::CallArg;
use lvs_model::Component;
use lvs_model::ConstraintOption;
use lvs_model::LvsModel;
use lvs_model::Node;
use lvs_model::NodeId;
use lvs_model::PatternConstraint;
use lvs_model::PatternEdge;
use lvs_model::TagId;

use crate::types::Bindings;
use crate::types::EdgeCursor;
use crate::types::UndefinedFn;
use crate::types::UserFns;

/// Lazily enumerates every `(accepting_node, bindings)` pair reachable by a
/// depth-complete path through the schema that matches `name`, in
/// depth-first, edge-declaration order.
///
/// This is an explicit state machine, not a recursive walk: `stack` plays
/// the role a call stack would in a recursive formulation, so traversal
/// depth is bounded only by `name`'s length, never by Rust's call stack.
pub struct Matcher<'a> {
    model: &'a LvsModel,
    name: &'a [Component],
    user_fns: &'a dyn UserFns,
    ctx: Bindings,
    cur: Option<NodeId>,
    depth: usize,
    cursor: EdgeCursor,
    stack: Vec<(EdgeCursor, Option<TagId>)>,
    poisoned: bool,
}

impl<'a> Matcher<'a> {
    /// Starts a traversal at `start`, against `name`, seeded with `initial`
    /// bindings (pass `Bindings::empty(model.named_pattern_cnt)` for a
    /// from-scratch match; pass a packet match's resulting bindings to seed
    /// a key-name match with the same context).
    pub fn new(
        model: &'a LvsModel,
        start: NodeId,
        name: &'a [Component],
        initial: Bindings,
        user_fns: &'a dyn UserFns,
    ) -> Self {
        Self {
            model,
            name,
            user_fns,
            ctx: Bindings::seeded(model.named_pattern_cnt, initial),
            cur: Some(start),
            depth: 0,
            cursor: EdgeCursor::AtValue,
            stack: Vec::new(),
            poisoned: false,
        }
    }

    fn backtrack(&mut self, node: &'a Node) {
        match self.stack.pop() {
            None => self.cur = None,
            Some((prev_cursor, bound)) => {
                if let Some(t) = bound {
                    self.ctx.clear(t);
                }
                self.cur = node.parent;
                self.cursor = prev_cursor;
                self.depth -= 1;
            }
        }
    }

    /// Tries pattern edge `pe` against component `c`. `Ok(Some(bound))`
    /// means it matched (`bound` is `Some(tag)` iff a new binding was made);
    /// `Ok(None)` means it didn't; `Err` means a `Call` reached an
    /// unregistered function, which is fatal to the whole match.
    fn try_pattern_edge(
        &mut self,
        pe: &'a PatternEdge,
        c: &Component,
    ) -> Result<Option<Option<TagId>>, UndefinedFn> {
        let named = self.model.is_named_tag(pe.tag);
        if named && self.ctx.is_bound(pe.tag) {
            return Ok(if self.ctx.get(pe.tag) == Some(c) {
                Some(None)
            } else {
                None
            });
        }
        if !self.eval_cons_sets(&pe.cons_sets, c)? {
            return Ok(None);
        }
        if named {
            self.ctx.set(pe.tag, c.clone());
            Ok(Some(Some(pe.tag)))
        } else {
            Ok(Some(None))
        }
    }

    fn eval_cons_sets(
        &self,
        cons_sets: &[PatternConstraint],
        c: &Component,
    ) -> Result<bool, UndefinedFn> {
        for cs in cons_sets {
            let mut satisfied = false;
            for opt in &cs.options {
                if self.eval_option(opt, c)? {
                    satisfied = true;
                    break;
                }
            }
            if !satisfied {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn eval_option(&self, opt: &ConstraintOption, c: &Component) -> Result<bool, UndefinedFn> {
        match opt {
            ConstraintOption::Literal(v) => Ok(c == v),
            ConstraintOption::Ref(t) => Ok(self.ctx.get(*t) == Some(c)),
            ConstraintOption::Call(call) => {
                let args: Vec<Component> = call
                    .args
                    .iter()
                    .map(|a| match a {
                        CallArg::Literal(v) => v.clone(),
                        CallArg::Ref(t) => self
                            .ctx
                            .get(*t)
                            .cloned()
                            .unwrap_or_else(|| Component::generic(b"")),
                    })
                    .collect();
                self.user_fns
                    .call(&call.fn_id, c, &args)
                    .ok_or_else(|| UndefinedFn(call.fn_id.clone()))
            }
        }
    }
}

impl<'a> Iterator for Matcher<'a> {
    type Item = Result<(NodeId, Bindings), UndefinedFn>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        loop {
            let node_id = self.cur?;
            let node = self
                .model
                .node(node_id)
                .expect("matcher never holds a node id outside the model's table");

            if self.depth == self.name.len() {
                let result = (node_id, self.ctx.clone());
                self.backtrack(node);
                return Some(Ok(result));
            }

            let c = &self.name[self.depth];
            match self.cursor {
                EdgeCursor::AtValue => {
                    if let Some(ve) = node.v_edges.iter().find(|e| &e.value == c) {
                        self.stack.push((EdgeCursor::AtPattern(0), None));
                        self.cur = Some(ve.dest);
                        self.depth += 1;
                        self.cursor = EdgeCursor::AtValue;
                    } else {
                        self.cursor = EdgeCursor::AtPattern(0);
                    }
                }
                EdgeCursor::AtPattern(i) if i < node.p_edges.len() => {
                    let pe = &node.p_edges[i];
                    self.cursor = EdgeCursor::AtPattern(i + 1);
                    match self.try_pattern_edge(pe, c) {
                        Ok(Some(bound)) => {
                            self.stack.push((self.cursor, bound));
                            self.cur = Some(pe.dest);
                            self.depth += 1;
                            self.cursor = EdgeCursor::AtValue;
                        }
                        Ok(None) => {}
                        Err(e) => {
                            self.poisoned = true;
                            return Some(Err(e));
                        }
                    }
                }
                EdgeCursor::AtPattern(_) => {
                    self.backtrack(node);
                }
            }
        }
    }
}
