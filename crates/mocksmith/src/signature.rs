//! Structured signature extraction from member declaration nodes.

use tree_sitter::Node;

use crate::parse::{find_child_by_kind, node_text};
use crate::MethodSignature;

/// Extract a structured signature from a member declaration.
///
/// Extraction is total and best-effort: a missing declarator, identifier,
/// or recognizable return-type token leaves the corresponding field empty
/// rather than failing the class. Only call this for members the
/// classifier has already accepted.
pub fn extract_signature(member: &Node, source: &[u8]) -> MethodSignature {
    MethodSignature {
        name: method_name(member, source),
        return_type: return_type(member, source),
        params: params(member, source),
        is_const: is_const(member, source),
    }
}

/// The first identifier among the function declarator's immediate children.
/// Destructors and operators carry their name in nested nodes and come out
/// as `None`.
fn method_name(member: &Node, source: &[u8]) -> Option<String> {
    let declarator = find_child_by_kind(member, "function_declarator")?;
    for i in 0..declarator.child_count() {
        if let Some(child) = declarator.child(i) {
            if matches!(child.kind(), "identifier" | "field_identifier") {
                return node_text(&child, source);
            }
        }
    }
    None
}

/// The first type-like token among the member's immediate children.
///
/// A positional heuristic: single-token return types (`int`, `Shape`,
/// `std::string`) come out verbatim; decorated ones (`const Shape&`) only
/// as far as their first type token reaches.
fn return_type(member: &Node, source: &[u8]) -> Option<String> {
    for i in 0..member.child_count() {
        if let Some(child) = member.child(i) {
            if matches!(
                child.kind(),
                "type_identifier" | "primitive_type" | "qualified_identifier"
            ) {
                return node_text(&child, source);
            }
        }
    }
    None
}

/// Verbatim parameter declarations from the declarator's parameter list.
fn params(member: &Node, source: &[u8]) -> Vec<String> {
    let mut params = Vec::new();
    if let Some(declarator) = find_child_by_kind(member, "function_declarator") {
        if let Some(list) = find_child_by_kind(&declarator, "parameter_list") {
            for i in 0..list.child_count() {
                if let Some(param) = list.child(i) {
                    if param.kind() == "parameter_declaration" {
                        if let Some(text) = node_text(&param, source) {
                            params.push(text);
                        }
                    }
                }
            }
        }
    }
    params
}

/// Whether the method is const-qualified.
///
/// The grammar hangs a trailing cv-qualifier off the function declarator,
/// after the parameter list, so both the member and its declarator are
/// checked.
fn is_const(member: &Node, source: &[u8]) -> bool {
    for i in 0..member.child_count() {
        if let Some(child) = member.child(i) {
            if child.kind() == "const" {
                return true;
            }
        }
    }

    if let Some(declarator) = find_child_by_kind(member, "function_declarator") {
        for i in 0..declarator.child_count() {
            if let Some(child) = declarator.child(i) {
                match child.kind() {
                    "const" => return true,
                    "type_qualifier" => {
                        if matches!(child.utf8_text(source), Ok("const")) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    false
}
