//! Rust code generation modules.

pub mod builders;
pub mod enums;
pub mod fixed;
pub mod records;

pub use builders::BuilderGenerator;
pub use enums::EnumGenerator;
pub use fixed::FixedGenerator;
pub use records::{RecordField, RecordGenerator};

use avroforge_schema::AvroSchema;

/// Renders `text` as a raw string literal with enough `#` to hold it.
#[must_use]
pub fn raw_string(text: &str) -> String {
    let mut fence = String::from("#");
    while text.contains(&format!("\"{}", fence)) {
        fence.push('#');
    }
    format!("r{fence}\"{text}\"{fence}")
}

/// Renders a doc comment, one `///` line per documentation line.
pub(crate) fn doc_comment(doc: Option<&str>, fallback: &str, indent: &str) -> String {
    let text = doc.map(str::trim).filter(|doc| !doc.is_empty()).unwrap_or(fallback);
    let mut output = String::new();
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str(&format!("{}///\n", indent));
        } else {
            output.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
    output
}

/// Renders the `AvroObject` impl holding both schema forms.
pub(crate) fn object_impl(type_name: &str, schema: &AvroSchema<'_>) -> String {
    let mut output = String::new();
    output.push_str(&format!("impl AvroObject for {} {{\n", type_name));
    output.push_str(&format!(
        "    const CANONICAL_SCHEMA: &'static str = {};\n",
        raw_string(&schema.to_canonical_json())
    ));
    output.push_str(&format!(
        "    const SCHEMA: &'static str = {};\n",
        raw_string(&schema.to_json())
    ));
    output.push_str("}\n\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_string_fence() {
        assert_eq!(raw_string(r#"{"a":1}"#), r##"r#"{"a":1}"#"##);
        assert_eq!(raw_string(r##"say "#hi"##), r###"r##"say "#hi"##"###);
    }

    #[test]
    fn test_doc_comment() {
        assert_eq!(doc_comment(None, "Fallback.", ""), "/// Fallback.\n");
        assert_eq!(
            doc_comment(Some("First\n\nSecond"), "Fallback.", "    "),
            "    /// First\n    ///\n    /// Second\n"
        );
    }
}
