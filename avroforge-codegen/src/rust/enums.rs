//! Enum code generation.

use super::{doc_comment, object_impl};
use crate::error::CodegenError;
use crate::ident::{escape_ident, type_ident};
use avroforge_schema::AvroSchema;

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    schema: AvroSchema<'a>,
    type_name: String,
    fullname: String,
    symbols: &'a [String],
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the node is not an enum.
    pub fn new(schema: AvroSchema<'a>) -> Result<Self, CodegenError> {
        let (Some(name), Some(fullname), Some(symbols)) =
            (schema.name(), schema.fullname(), schema.symbols())
        else {
            return Err(CodegenError::generation("enum generator needs an enum schema"));
        };
        Ok(Self {
            schema,
            type_name: type_ident(name),
            fullname,
            symbols,
        })
    }

    /// Generates the enum, its lookup tables and trait impls.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let variants: Vec<String> = self.symbols.iter().map(|s| escape_ident(s)).collect();

        output.push_str(&doc_comment(
            self.schema.doc(),
            &format!("`{}` enum.", self.fullname),
            "",
        ));
        output.push_str("#[allow(non_camel_case_types)]\n");
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
        output.push_str(&format!("pub enum {} {{\n", self.type_name));
        for variant in &variants {
            output.push_str(&format!("    {},\n", variant));
        }
        output.push_str("}\n\n");

        output.push_str(&object_impl(&self.type_name, &self.schema));

        // Lookup tables
        let symbols: Vec<String> = self.symbols.iter().map(|s| format!("\"{}\"", s)).collect();
        let values: Vec<String> = variants.iter().map(|v| format!("Self::{}", v)).collect();
        output.push_str(&format!("impl AvroEnum for {} {{\n", self.type_name));
        output.push_str(&format!(
            "    const SYMBOLS: &'static [&'static str] = &[{}];\n",
            symbols.join(", ")
        ));
        output.push_str(&format!(
            "    const VALUES: &'static [Self] = &[{}];\n\n",
            values.join(", ")
        ));
        output.push_str("    fn index(self) -> usize {\n");
        output.push_str("        match self {\n");
        for (index, value) in values.iter().enumerate() {
            output.push_str(&format!("            {} => {},\n", value, index));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl ToDatum for {} {{\n", self.type_name));
        output.push_str("    fn to_datum(&self) -> Datum {\n");
        output.push_str("        self.to_symbol_datum()\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl FromDatum for {} {{\n", self.type_name));
        output.push_str("    fn from_datum(datum: Datum) -> Result<Self, CoreError> {\n");
        output.push_str("        Self::from_symbol_datum(datum)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avroforge_schema::parse_schema;

    const SUIT: &str = r#"{"type":"enum","name":"Suit","namespace":"com.acme",
        "symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}"#;

    #[test]
    fn test_enum_generator_new() {
        let schema = parse_schema(SUIT).expect("Failed to parse");
        assert!(EnumGenerator::new(AvroSchema::from(&schema)).is_ok());
        let record = parse_schema(r#"{"type":"record","name":"R","fields":[]}"#)
            .expect("Failed to parse");
        assert!(EnumGenerator::new(AvroSchema::from(&record)).is_err());
    }

    #[test]
    fn test_generate_enum() {
        let schema = parse_schema(SUIT).expect("Failed to parse");
        let output = EnumGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();

        assert!(output.contains("pub enum Suit {\n    SPADES,\n    HEARTS,\n    DIAMONDS,\n    CLUBS,\n}"));
        assert!(output.contains(r#"&["SPADES", "HEARTS", "DIAMONDS", "CLUBS"]"#));
        assert!(output.contains("&[Self::SPADES, Self::HEARTS, Self::DIAMONDS, Self::CLUBS]"));
        assert!(output.contains("Self::CLUBS => 3,"));
        assert!(output.contains("impl ToDatum for Suit"));
        syn::parse_file(&output).expect("Failed to parse generated enum");
    }

    #[test]
    fn test_keyword_symbols() {
        let schema = parse_schema(r#"{"type":"enum","name":"Kind","symbols":["type","Self"]}"#)
            .expect("Failed to parse");
        let output = EnumGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();
        assert!(output.contains("    r#type,\n    Self_,\n"));
        assert!(output.contains(r#"&["type", "Self"]"#));
        syn::parse_file(&output).expect("Failed to parse generated enum");
    }
}
