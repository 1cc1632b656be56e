//! Pure-virtual classification of class member declarations.

use tree_sitter::Node;

/// Decide whether a member declaration syntactically declares a pure
/// virtual method: a `virtual` keyword among its immediate children, plus
/// an `=` token whose very next sibling is a numeric literal.
///
/// The scan over children arms on `=` and tests the next child: a
/// `number_literal` records the pure-specifier match, anything else disarms
/// without recording. Qualifier position is irrelevant, so a trailing
/// `const` or `override` does not affect the result. A member without
/// `virtual` never qualifies, whatever its initializer looks like.
pub fn is_pure_virtual(member: &Node) -> bool {
    let mut has_virtual = false;
    let mut has_pure = false;
    let mut equals_pending = false;

    for i in 0..member.child_count() {
        if let Some(child) = member.child(i) {
            if child.kind() == "virtual" {
                has_virtual = true;
            }
            if child.kind() == "=" {
                equals_pending = true;
            } else if equals_pending {
                if child.kind() == "number_literal" {
                    has_pure = true;
                }
                equals_pending = false;
            }
        }
    }

    has_virtual && has_pure
}
