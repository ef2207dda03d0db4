use lvs_tlv::Component;
use lvs_tlv::Cursor;

use crate::error::Error;
use crate::error::Result;
use crate::tlv_types as t;
use crate::types::CallArg;
use crate::types::ConstraintOption;
use crate::types::LvsModel;
use crate::types::Node;
use crate::types::PatternConstraint;
use crate::types::PatternEdge;
use crate::types::TagSymbol;
use crate::types::UserFnCall;
use crate::types::ValueEdge;

/// Like `lvs_tlv::read_repeated`, but for element decoders that report a
/// model-level `Error` rather than a bare `lvs_tlv::Error` (everything past
/// the top two primitive fields needs this, since a struct decoder can fail
/// on an unrecognized union tag as well as a malformed primitive).
fn repeated<'a, T>(
    cur: &mut Cursor<'a>,
    expected_type: u64,
    mut decode_one: impl FnMut(&'a [u8]) -> Result<T>,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    while let Some(inner) = lvs_tlv::try_read_block(cur, expected_type)? {
        out.push(decode_one(inner)?);
    }
    Ok(out)
}

/// Decodes a whole schema buffer. Rejects trailing bytes after the last
/// `TAG_SYMBOL` (the one place this decoder enforces full consumption; a
/// struct's own trailing bytes are tolerated, see `parse_node`).
pub fn decode_model(bytes: &[u8]) -> Result<LvsModel> {
    let mut cur = Cursor::new(bytes);

    let version = lvs_tlv::read_natural_block(&mut cur, t::VERSION)?;
    let start_id = lvs_tlv::read_natural_block(&mut cur, t::NODE_ID)?;
    let named_pattern_cnt = lvs_tlv::read_natural_block(&mut cur, t::NAMED_PATTERN_NUM)?;

    let nodes = repeated(&mut cur, t::NODE, parse_node)?;
    let symbols = repeated(&mut cur, t::TAG_SYMBOL, parse_tag_symbol)?;

    if !cur.is_empty() {
        return Err(Error::Tlv(lvs_tlv::Error::TrailingBytes(cur.remaining())));
    }

    let model = LvsModel {
        version,
        start_id,
        named_pattern_cnt,
        nodes,
        symbols,
    };
    validate_shape(&model)?;
    Ok(model)
}

/// Structural checks beyond what a single field's decode can catch:
/// dangling node references, a single well-formed root, and unique symbol
/// identifiers. Mirrors `LvsModel`'s invariants 1-3 and 6.
fn validate_shape(model: &LvsModel) -> Result<()> {
    let node_count = model.nodes.len() as u64;
    let in_range = |id: u64| id < node_count;

    if !in_range(model.start_id) {
        return Err(Error::DanglingNodeId(model.start_id));
    }

    let mut roots = 0;
    for node in &model.nodes {
        if node.parent.is_none() {
            roots += 1;
        }
        if let Some(p) = node.parent {
            if !in_range(p) {
                return Err(Error::DanglingNodeId(p));
            }
        }
        for e in &node.v_edges {
            if !in_range(e.dest) {
                return Err(Error::DanglingNodeId(e.dest));
            }
        }
        for e in &node.p_edges {
            if !in_range(e.dest) {
                return Err(Error::DanglingNodeId(e.dest));
            }
        }
        for &s in &node.sign_cons {
            if !in_range(s) {
                return Err(Error::DanglingNodeId(s));
            }
        }
    }
    if roots != 1 {
        return Err(Error::NotExactlyOneRoot);
    }

    let mut seen = std::collections::HashSet::new();
    for sym in &model.symbols {
        if !seen.insert(sym.ident.clone()) {
            return Err(Error::DuplicateSymbol(sym.ident.clone()));
        }
    }

    Ok(())
}

fn parse_node(inner: &[u8]) -> Result<Node> {
    let mut cur = Cursor::new(inner);
    let id = lvs_tlv::read_natural_block(&mut cur, t::NODE_ID)?;
    let parent = lvs_tlv::try_read_natural_block(&mut cur, t::PARENT_ID)?;
    let rule_name = repeated(&mut cur, t::IDENTIFIER, |s| {
        std::str::from_utf8(s)
            .map(str::to_owned)
            .map_err(|_| Error::Tlv(lvs_tlv::Error::InvalidUtf8))
    })?;
    let v_edges = repeated(&mut cur, t::VALUE_EDGE, parse_value_edge)?;
    let p_edges = repeated(&mut cur, t::PATTERN_EDGE, parse_pattern_edge)?;
    let sign_cons = repeated(&mut cur, t::KEY_NODE_ID, |b| {
        lvs_tlv::decode_natural(b).map_err(Error::from)
    })?;

    Ok(Node {
        id,
        parent,
        rule_name,
        v_edges,
        p_edges,
        sign_cons,
    })
}

fn parse_value_edge(inner: &[u8]) -> Result<ValueEdge> {
    let mut cur = Cursor::new(inner);
    let dest = lvs_tlv::read_natural_block(&mut cur, t::NODE_ID)?;
    let value = lvs_tlv::read_block(&mut cur, t::COMPONENT_VALUE)?;
    Ok(ValueEdge {
        dest,
        value: Component::from_verbatim(value.to_vec()),
    })
}

fn parse_pattern_edge(inner: &[u8]) -> Result<PatternEdge> {
    let mut cur = Cursor::new(inner);
    let dest = lvs_tlv::read_natural_block(&mut cur, t::NODE_ID)?;
    let tag = lvs_tlv::read_natural_block(&mut cur, t::PATTERN_TAG)?;
    let cons_sets = repeated(&mut cur, t::CONSTRAINT, parse_constraint)?;
    Ok(PatternEdge {
        dest,
        tag,
        cons_sets,
    })
}

fn parse_constraint(inner: &[u8]) -> Result<PatternConstraint> {
    let mut cur = Cursor::new(inner);
    let options = repeated(&mut cur, t::CONS_OPTION, parse_cons_option)?;
    Ok(PatternConstraint { options })
}

fn parse_cons_option(inner: &[u8]) -> Result<ConstraintOption> {
    let mut cur = Cursor::new(inner);
    let (tag, value) = lvs_tlv::read_block_any(&mut cur)?;
    match tag {
        t::COMPONENT_VALUE => Ok(ConstraintOption::Literal(Component::from_verbatim(
            value.to_vec(),
        ))),
        t::PATTERN_TAG => Ok(ConstraintOption::Ref(lvs_tlv::decode_natural(value)?)),
        t::USER_FN_CALL => Ok(ConstraintOption::Call(parse_user_fn_call(value)?)),
        other => Err(Error::UnknownUnionTag(other)),
    }
}

fn parse_user_fn_call(inner: &[u8]) -> Result<UserFnCall> {
    let mut cur = Cursor::new(inner);
    let fn_id = lvs_tlv::read_utf8_block(&mut cur, t::USER_FN_ID)?;
    let args = repeated(&mut cur, t::FN_ARGS, parse_call_arg)?;
    Ok(UserFnCall { fn_id, args })
}

fn parse_call_arg(inner: &[u8]) -> Result<CallArg> {
    let mut cur = Cursor::new(inner);
    let (tag, value) = lvs_tlv::read_block_any(&mut cur)?;
    match tag {
        t::COMPONENT_VALUE => Ok(CallArg::Literal(Component::from_verbatim(value.to_vec()))),
        t::PATTERN_TAG => Ok(CallArg::Ref(lvs_tlv::decode_natural(value)?)),
        other => Err(Error::UnknownUnionTag(other)),
    }
}

fn parse_tag_symbol(inner: &[u8]) -> Result<TagSymbol> {
    let mut cur = Cursor::new(inner);
    let tag = lvs_tlv::read_natural_block(&mut cur, t::PATTERN_TAG)?;
    let ident = lvs_tlv::read_utf8_block(&mut cur, t::IDENTIFIER)?;
    Ok(TagSymbol { tag, ident })
}
