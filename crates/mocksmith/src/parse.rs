//! Parsing collaborator: turning a header file into a syntax tree.
//!
//! Everything downstream of this module works on an already-built tree plus
//! the original source bytes; no other module touches the parser or the
//! filesystem.

use std::cell::RefCell;
use std::path::Path;

use tree_sitter::{Node, Tree};

use crate::{MockGenError, Result};

// Thread-local parser reuse - avoids creating a new parser per file
thread_local! {
    static CPP_PARSER: RefCell<tree_sitter::Parser> = RefCell::new({
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .expect("tree-sitter-cpp grammar incompatible with tree-sitter version");
        parser
    });
}

/// Parse C++ source bytes into a syntax tree.
///
/// Returns `None` only when the parser itself gives up; malformed C++ still
/// produces a tree (with error nodes), which downstream stages tolerate.
pub fn parse_source(source: &[u8]) -> Option<Tree> {
    CPP_PARSER.with(|parser| parser.borrow_mut().parse(source, None))
}

/// Read a header file and parse it, returning the tree together with the
/// source bytes its node spans index into.
pub fn parse_header(path: &Path) -> Result<(Tree, Vec<u8>)> {
    let source = std::fs::read(path)?;
    match parse_source(&source) {
        Some(tree) => Ok((tree, source)),
        None => {
            tracing::warn!("Failed to parse file: {:?}", path);
            Err(MockGenError::Parse {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Find a child node by its kind.
/// Uses cursor-based iteration for O(n) instead of O(n²) performance.
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            if cursor.node().kind() == kind {
                return Some(cursor.node());
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    None
}

/// Decode a node's byte span against the source buffer.
pub fn node_text(node: &Node, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(|s| s.to_string())
}
