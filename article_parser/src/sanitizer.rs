//! In-place removal of non-article subtrees and whitespace cleanup.

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use crate::heuristics::NON_CONTENT;

/// Detaches every descendant of `root` that matches the non-content
/// denylist, plus `also_remove` when it sits under `root`. Returns how many
/// subtrees were cut.
///
/// The removal is permanent for this document: a later candidate that
/// overlaps `root` sees the cleaned tree.
pub fn strip_non_content(doc: &mut Html, root: NodeId, also_remove: Option<NodeId>) -> usize {
    let Some(root_ref) = doc.tree.get(root).and_then(ElementRef::wrap) else {
        return 0;
    };

    let mut doomed: Vec<NodeId> = match NON_CONTENT.as_ref() {
        Some(rule) => root_ref
            .select(&rule.selector)
            .map(|el| el.id())
            .filter(|id| *id != root)
            .collect(),
        None => Vec::new(),
    };

    if let Some(extra) = also_remove {
        if is_descendant(doc, extra, root) {
            doomed.push(extra);
        }
    }

    for id in &doomed {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    doomed.len()
}

/// Raw text under `root`, trimmed at both ends but otherwise untouched.
pub fn element_text(doc: &Html, root: NodeId) -> String {
    doc.tree
        .get(root)
        .and_then(ElementRef::wrap)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Collapses every whitespace run (spaces, tabs, newlines, nbsp) into one
/// space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_descendant(doc: &Html, node: NodeId, ancestor: NodeId) -> bool {
    node != ancestor
        && doc
            .tree
            .get(node)
            .is_some_and(|n| n.ancestors().any(|a| a.id() == ancestor))
}
