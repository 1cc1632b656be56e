//! Mock class generation: one block per class with pure virtual members.

use tree_sitter::Node;

use crate::classify::is_pure_virtual;
use crate::locate::find_classes;
use crate::parse::{find_child_by_kind, node_text};
use crate::render::mock_method;
use crate::signature::extract_signature;

/// Member declaration kinds that can carry a pure-virtual specifier.
const MEMBER_KINDS: [&str; 4] = [
    "function_definition",
    "function_declaration",
    "field_declaration",
    "field_definition",
];

/// Collect the concrete member declarations of a class-like node: the
/// children of its member-declaration containers (the body list, for this
/// grammar) that are function or field declarations. Nested classes sit
/// behind their own wrapper declaration and are not unwrapped here; the
/// locator visits them independently.
pub(crate) fn class_members<'tree>(class: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut members = Vec::new();
    for i in 0..class.child_count() {
        if let Some(container) = class.child(i) {
            for j in 0..container.child_count() {
                if let Some(member) = container.child(j) {
                    if MEMBER_KINDS.contains(&member.kind()) {
                        members.push(member);
                    }
                }
            }
        }
    }
    members
}

/// Generate the mock class block for a single class-like node.
///
/// Returns `None` when the class has no pure virtual members; nothing is
/// emitted for such a class, not even an empty block. A class whose name
/// cannot be resolved still produces a block, with an empty placeholder
/// name.
pub fn mock_class(class: &Node, source: &[u8]) -> Option<String> {
    let lines: Vec<String> = class_members(class)
        .into_iter()
        .filter(|member| is_pure_virtual(member))
        .map(|member| mock_method(&extract_signature(&member, source)))
        .collect();

    if lines.is_empty() {
        return None;
    }

    let name = find_child_by_kind(class, "type_identifier")
        .and_then(|name| node_text(&name, source))
        .unwrap_or_default();

    let mut block = String::new();
    block.push_str(&format!("class Mock{} : public {} {{\n", name, name));
    block.push_str("public:\n");
    for line in &lines {
        block.push_str(&format!("  {}\n", line));
    }
    block.push_str("};\n");
    Some(block)
}

/// Generate mock classes for every class in the tree, in document order of
/// discovery, with no separators beyond the blocks' own lines.
pub fn generate(root: Node, source: &[u8]) -> String {
    find_classes(root)
        .filter_map(|class| mock_class(&class, source))
        .collect()
}
