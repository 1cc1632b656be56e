//! mocksmith: gMock mock class generation from C++ headers
//!
//! This crate provides the building blocks for turning an interface header
//! into google-mock test doubles:
//! - Parsing a header into a syntax tree using tree-sitter
//! - Locating class and struct declarations at any nesting depth
//! - Classifying members as pure virtual methods
//! - Extracting structured method signatures
//! - Rendering MOCK_METHOD lines and complete mock class blocks
//!
//! # Examples
//!
//! ```
//! use mocksmith::{generate, parse_source};
//!
//! let source = b"class Shape {
//! public:
//!     virtual double area() const = 0;
//! };
//! ";
//!
//! let tree = parse_source(source).expect("valid C++ parses");
//! let mocks = generate(tree.root_node(), source);
//!
//! assert!(mocks.contains("class MockShape : public Shape {"));
//! assert!(mocks.contains("MOCK_METHOD(double, area, (), (const, override));"));
//! ```

use std::path::PathBuf;

pub mod classify;
pub mod generate;
pub mod locate;
pub mod parse;
pub mod render;
pub mod signature;

// Re-export main entry points
pub use classify::is_pure_virtual;
pub use generate::{generate, mock_class};
pub use locate::find_classes;
pub use parse::{parse_header, parse_source};
pub use render::mock_method;
pub use signature::extract_signature;

/// A structured view of one method signature, built from a member
/// declaration the classifier has accepted.
///
/// Extraction is best-effort: `name` and `return_type` stay `None` when the
/// declaration carries no recognizable identifier or type token, and the
/// renderer substitutes an empty placeholder only at that boundary. `params`
/// holds the verbatim source text of each parameter declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name from the function declarator
    pub name: Option<String>,
    /// Return type token, verbatim from the source
    pub return_type: Option<String>,
    /// Verbatim parameter declarations, in source order
    pub params: Vec<String>,
    /// Whether the method is const-qualified
    pub is_const: bool,
}

/// Errors that can occur before generation starts
#[derive(Debug, thiserror::Error)]
pub enum MockGenError {
    #[error("Failed to read header: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse header: {path}")]
    Parse { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MockGenError>;
