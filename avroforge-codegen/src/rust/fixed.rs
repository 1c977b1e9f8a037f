//! Fixed and fixed decimal code generation.

use super::{doc_comment, object_impl};
use crate::error::CodegenError;
use crate::ident::type_ident;
use avroforge_schema::AvroSchema;

/// Generator for fixed-size byte newtypes.
pub struct FixedGenerator<'a> {
    schema: AvroSchema<'a>,
    type_name: String,
    fullname: String,
    size: usize,
    decimal: Option<(u32, u32)>,
}

impl<'a> FixedGenerator<'a> {
    /// Creates a new fixed generator.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the node is not a fixed type.
    pub fn new(schema: AvroSchema<'a>) -> Result<Self, CodegenError> {
        let (Some(name), Some(fullname), Some(size)) =
            (schema.name(), schema.fullname(), schema.size())
        else {
            return Err(CodegenError::generation("fixed generator needs a fixed schema"));
        };
        Ok(Self {
            schema,
            type_name: type_ident(name),
            fullname,
            size,
            decimal: schema.precision().zip(schema.scale()),
        })
    }

    /// Generates the newtype and its trait impls.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let kind = if self.decimal.is_some() {
            "fixed decimal"
        } else {
            "fixed"
        };

        output.push_str(&doc_comment(
            self.schema.doc(),
            &format!("`{}` {}.", self.fullname, kind),
            "",
        ));
        output.push_str("#[allow(non_camel_case_types)]\n");
        output.push_str("#[derive(Debug, Clone, PartialEq, Eq, Hash)]\n");
        output.push_str(&format!("pub struct {}(FixedBytes);\n\n", self.type_name));

        // Default holds SIZE zero bytes
        output.push_str(&format!("impl Default for {} {{\n", self.type_name));
        output.push_str("    fn default() -> Self {\n");
        output.push_str("        Self::zeroed()\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&object_impl(&self.type_name, &self.schema));

        output.push_str(&format!("impl AvroFixed for {} {{\n", self.type_name));
        output.push_str(&format!("    const SIZE: usize = {};\n\n", self.size));
        output.push_str("    fn from_storage(storage: FixedBytes) -> Self {\n");
        output.push_str("        Self(storage)\n");
        output.push_str("    }\n\n");
        output.push_str("    fn storage(&self) -> &FixedBytes {\n");
        output.push_str("        &self.0\n");
        output.push_str("    }\n\n");
        output.push_str("    fn storage_mut(&mut self) -> &mut FixedBytes {\n");
        output.push_str("        &mut self.0\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        if let Some((precision, scale)) = self.decimal {
            output.push_str(&format!("impl AvroFixedDecimal for {} {{\n", self.type_name));
            output.push_str(&format!("    const PRECISION: u32 = {};\n", precision));
            output.push_str(&format!("    const SCALE: u32 = {};\n", scale));
            output.push_str("}\n\n");
        }

        output.push_str(&format!("impl ToDatum for {} {{\n", self.type_name));
        output.push_str("    fn to_datum(&self) -> Datum {\n");
        output.push_str("        self.to_fixed_datum()\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl FromDatum for {} {{\n", self.type_name));
        output.push_str("    fn from_datum(datum: Datum) -> Result<Self, CoreError> {\n");
        output.push_str("        Self::from_fixed_datum(datum)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avroforge_schema::parse_schema;

    #[test]
    fn test_generate_fixed() {
        let schema = parse_schema(r#"{"type":"fixed","name":"MD5","namespace":"com.acme","size":16}"#)
            .expect("Failed to parse");
        let output = FixedGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();

        assert!(output.contains("/// `com.acme.MD5` fixed.\n"));
        assert!(output.contains("pub struct MD5(FixedBytes);"));
        assert!(output.contains("const SIZE: usize = 16;"));
        assert!(output.contains("impl Default for MD5 {\n    fn default() -> Self {\n        Self::zeroed()\n"));
        assert!(!output.contains("derive(Debug, Clone, Default"));
        assert!(!output.contains("AvroFixedDecimal"));
        syn::parse_file(&output).expect("Failed to parse generated fixed");
    }

    #[test]
    fn test_generate_fixed_decimal() {
        let schema = parse_schema(
            r#"{"type":"fixed","name":"Amount","size":16,"logicalType":"decimal","precision":10,"scale":2}"#,
        )
        .expect("Failed to parse");
        let output = FixedGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();

        assert!(output.contains("impl AvroFixedDecimal for Amount"));
        assert!(output.contains("const PRECISION: u32 = 10;"));
        assert!(output.contains("const SCALE: u32 = 2;"));
        syn::parse_file(&output).expect("Failed to parse generated fixed decimal");
    }
}
