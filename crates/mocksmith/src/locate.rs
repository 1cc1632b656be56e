//! Class discovery: walking the syntax tree for class-like declarations.

use tree_sitter::Node;

/// Lazy depth-first iterator over the class and struct declarations in a
/// tree, in document order.
///
/// Traversal does not stop at a match: a qualifying node is yielded and
/// then descended into, so nested classes come out as independent
/// candidates. The walk keeps an explicit stack rather than recursing, so
/// deeply nested headers cannot overflow the call stack.
pub struct Classes<'tree> {
    stack: Vec<Node<'tree>>,
}

/// Walk the whole tree under `root`, yielding every `class_specifier` and
/// `struct_specifier` node.
pub fn find_classes(root: Node<'_>) -> Classes<'_> {
    Classes { stack: vec![root] }
}

impl<'tree> Iterator for Classes<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reverse push keeps siblings in document order on the stack
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    self.stack.push(child);
                }
            }
            if matches!(node.kind(), "class_specifier" | "struct_specifier") {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{find_child_by_kind, node_text, parse_source};

    fn class_names(source: &str) -> Vec<String> {
        let tree = parse_source(source.as_bytes()).expect("parse");
        find_classes(tree.root_node())
            .map(|class| {
                find_child_by_kind(&class, "type_identifier")
                    .and_then(|name| node_text(&name, source.as_bytes()))
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn yields_classes_in_document_order() {
        let names = class_names("class First {};\nstruct Second {};\nclass Third {};");
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn descends_into_nested_classes() {
        let names = class_names("class Outer {\n    struct Inner {};\n};");
        assert_eq!(names, vec!["Outer", "Inner"]);
    }

    #[test]
    fn finds_forward_declarations() {
        let names = class_names("class Widget;");
        assert_eq!(names, vec!["Widget"]);
    }

    #[test]
    fn header_without_classes_yields_nothing() {
        let names = class_names("int add(int a, int b);\nvoid reset();");
        assert!(names.is_empty());
    }
}
