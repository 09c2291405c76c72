//! Selector-path resolution over the node tree.

use swatch_core::{DesignNode, VariantPropertyMap};

use crate::selector::{Segment, SelectorPath};

/// Resolve a selector path to the first matching descendant, or `None`.
///
/// Each segment searches depth-first pre-order among the strict descendants
/// of the node reached by the previous segment. Name matching is
/// case-insensitive, after `{Prop}` placeholders are substituted from the
/// instance's variant map. `$` and unrecognized-type segments stay put.
/// A miss at any segment short-circuits; callers treat `None` as "no data
/// for this rule", never as an error.
pub fn resolve_selector<'a>(
    root: &'a DesignNode,
    path: &SelectorPath,
    variants: &VariantPropertyMap,
) -> Option<&'a DesignNode> {
    let mut current = root;
    for segment in path.iter() {
        match segment {
            Segment::Current => {}
            Segment::Node {
                node_type: None, ..
            } => {}
            Segment::Node {
                node_type: Some(node_type),
                name,
            } => {
                let wanted = name
                    .as_ref()
                    .map(|selector| substitute_variants(selector, variants));
                current = current.descendants().find(|node| {
                    node.node_type == *node_type
                        && wanted
                            .as_ref()
                            .map_or(true, |w| node.name.eq_ignore_ascii_case(w))
                })?;
            }
        }
    }
    Some(current)
}

/// Replace `{Prop}` placeholders with the instance's current variant values.
///
/// Property names match case-insensitively; a placeholder naming no known
/// property is left verbatim (it then simply fails to match any node).
fn substitute_variants(selector: &str, variants: &VariantPropertyMap) -> String {
    let mut out = String::with_capacity(selector.len());
    let mut rest = selector;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push('{');
            rest = after;
            continue;
        };
        let token = after[..close].trim();
        match variants
            .iter()
            .find(|(prop, _)| prop.eq_ignore_ascii_case(token))
        {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(&after[..close]);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}
