//! Rendering a method signature as a MOCK_METHOD declaration.

use crate::MethodSignature;

/// Render one `MOCK_METHOD(<return>, <name>, (<params>), (<qualifiers>));`
/// line for a pure virtual method.
///
/// A parameter text containing a top-level comma would be counted as two
/// macro arguments, so it is wrapped in parentheses before joining unless
/// it already starts with one (`std::pair<int, int> p` becomes
/// `(std::pair<int, int> p)`). A missing name or return type renders as an
/// empty placeholder.
pub fn mock_method(sig: &MethodSignature) -> String {
    let ret = sig.return_type.as_deref().unwrap_or("");
    let name = sig.name.as_deref().unwrap_or("");

    let params: Vec<String> = sig
        .params
        .iter()
        .map(|param| {
            if needs_parenthesis(param) {
                format!("({})", param)
            } else {
                param.clone()
            }
        })
        .collect();

    let qualifiers = if sig.is_const {
        "const, override"
    } else {
        "override"
    };

    format!(
        "MOCK_METHOD({}, {}, ({}), ({}));",
        ret,
        name,
        params.join(", "),
        qualifiers
    )
}

fn needs_parenthesis(param: &str) -> bool {
    param.contains(", ") && !param.trim_start().starts_with('(')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(
        return_type: Option<&str>,
        name: Option<&str>,
        params: &[&str],
        is_const: bool,
    ) -> MethodSignature {
        MethodSignature {
            name: name.map(String::from),
            return_type: return_type.map(String::from),
            params: params.iter().map(|p| p.to_string()).collect(),
            is_const,
        }
    }

    #[test]
    fn renders_const_methods_with_both_qualifiers() {
        let sig = signature(Some("double"), Some("area"), &[], true);
        assert_eq!(
            mock_method(&sig),
            "MOCK_METHOD(double, area, (), (const, override));"
        );
    }

    #[test]
    fn renders_parameters_in_order() {
        let sig = signature(Some("void"), Some("resize"), &["int w", "int h"], false);
        assert_eq!(
            mock_method(&sig),
            "MOCK_METHOD(void, resize, (int w, int h), (override));"
        );
    }

    #[test]
    fn wraps_parameters_with_top_level_commas() {
        let sig = signature(Some("void"), Some("accept"), &["std::pair<int, int> p"], false);
        assert_eq!(
            mock_method(&sig),
            "MOCK_METHOD(void, accept, ((std::pair<int, int> p)), (override));"
        );
    }

    #[test]
    fn leaves_already_parenthesized_parameters_alone() {
        let sig = signature(Some("void"), Some("call"), &["(int, int) pair"], false);
        assert_eq!(
            mock_method(&sig),
            "MOCK_METHOD(void, call, ((int, int) pair), (override));"
        );
    }

    #[test]
    fn leaves_comma_free_parameters_alone() {
        let sig = signature(Some("void"), Some("store"), &["std::vector<int> items"], false);
        assert_eq!(
            mock_method(&sig),
            "MOCK_METHOD(void, store, (std::vector<int> items), (override));"
        );
    }

    #[test]
    fn missing_name_and_return_type_render_as_empty() {
        let sig = signature(None, None, &[], false);
        assert_eq!(mock_method(&sig), "MOCK_METHOD(, , (), (override));");
    }

    #[test]
    fn rendering_is_deterministic() {
        let sig = signature(Some("int"), Some("next"), &["bool wrap"], true);
        assert_eq!(mock_method(&sig), mock_method(&sig));
    }
}
