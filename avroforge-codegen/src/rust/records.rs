//! Record struct code generation.

use super::{doc_comment, object_impl};
use crate::error::CodegenError;
use crate::ident::{escape_ident, method_ident, setter_ident, type_ident};
use crate::signature::{TypeSignature, compile_type_signature};
use avroforge_schema::AvroSchema;

/// Field of a record prepared for generation.
#[derive(Debug, Clone)]
pub struct RecordField<'a> {
    /// Avro field name.
    pub name: &'a str,
    /// Struct field identifier.
    pub ident: String,
    /// Getter and builder method identifier.
    pub method: String,
    /// Mutator identifier.
    pub setter: String,
    /// Rust type of the field.
    pub signature: TypeSignature,
    /// Field documentation.
    pub doc: Option<&'a str>,
}

impl<'a> RecordField<'a> {
    /// Prepares a field node.
    ///
    /// # Errors
    /// Returns the type-signature error of the field type.
    pub fn new(field: &AvroSchema<'a>) -> Result<Self, CodegenError> {
        let name = field
            .field_name()
            .ok_or_else(|| CodegenError::generation("record field is not a field node"))?;
        Ok(Self {
            name,
            ident: escape_ident(name),
            method: method_ident(name),
            setter: setter_ident(name),
            signature: compile_type_signature(field)?,
            doc: field.doc(),
        })
    }
}

/// Generator for record structs.
pub struct RecordGenerator<'a> {
    schema: AvroSchema<'a>,
    type_name: String,
    fullname: String,
    fields: Vec<RecordField<'a>>,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    ///
    /// # Arguments
    /// * `schema` - Record schema node
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` if a field type has no Rust
    /// rendering; a single unsupported field fails the whole record.
    pub fn new(schema: AvroSchema<'a>) -> Result<Self, CodegenError> {
        let (Some(name), Some(fullname), Some(fields)) =
            (schema.name(), schema.fullname(), schema.fields())
        else {
            return Err(CodegenError::generation("record generator needs a record schema"));
        };
        let fields = fields
            .iter()
            .map(RecordField::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            schema,
            type_name: type_ident(name),
            fullname,
            fields,
        })
    }

    /// Rust identifier of the record type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fully qualified Avro name.
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Prepared fields in declared order.
    #[must_use]
    pub fn fields(&self) -> &[RecordField<'a>] {
        &self.fields
    }

    /// Generates the record struct and its trait impls.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_struct());
        output.push_str(&self.generate_inherent_impl());
        output.push_str(&object_impl(&self.type_name, &self.schema));
        output.push_str(&self.generate_record_impl());
        output.push_str(&self.generate_to_datum());
        output.push_str(&self.generate_from_datum());
        output
    }

    fn generate_struct(&self) -> String {
        let mut output = String::new();
        output.push_str(&doc_comment(
            self.schema.doc(),
            &format!("`{}` record.", self.fullname),
            "",
        ));
        output.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
        output.push_str("#[derive(Debug, Clone, PartialEq)]\n");
        output.push_str(&format!("pub struct {} {{\n", self.type_name));
        for field in &self.fields {
            if let Some(doc) = field.doc {
                output.push_str(&doc_comment(Some(doc), "", "    "));
            }
            output.push_str(&format!("    {}: {},\n", field.ident, field.signature));
        }
        output.push_str("}\n\n");
        output
    }

    fn generate_inherent_impl(&self) -> String {
        let mut output = String::new();
        output.push_str("#[allow(non_snake_case, clippy::too_many_arguments)]\n");
        output.push_str(&format!("impl {} {{\n", self.type_name));

        // Constructor
        let params: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.ident, field.signature))
            .collect();
        output.push_str("    /// Creates a record from its field values.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!("    pub fn new({}) -> Self {{\n", params.join(", ")));
        if self.fields.is_empty() {
            output.push_str("        Self {}\n");
        } else {
            output.push_str("        Self {\n");
            for field in &self.fields {
                output.push_str(&format!("            {},\n", field.ident));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n");

        // Accessors
        for field in &self.fields {
            output.push('\n');
            output.push_str(&format!("    /// Returns `{}`.\n", field.name));
            output.push_str("    #[must_use]\n");
            output.push_str(&format!(
                "    pub fn {}(&self) -> &{} {{\n",
                field.method, field.signature
            ));
            output.push_str(&format!("        &self.{}\n", field.ident));
            output.push_str("    }\n\n");

            output.push_str(&format!("    /// Sets `{}`.\n", field.name));
            output.push_str(&format!(
                "    pub fn {}(&mut self, value: {}) {{\n",
                field.setter, field.signature
            ));
            output.push_str(&format!("        self.{} = value;\n", field.ident));
            output.push_str("    }\n");
        }

        output.push_str("}\n\n");
        output
    }

    fn generate_record_impl(&self) -> String {
        let names: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("\"{}\"", field.name))
            .collect();
        let mut output = String::new();
        output.push_str(&format!("impl AvroRecord for {} {{\n", self.type_name));
        output.push_str(&format!(
            "    const FIELDS: &'static [&'static str] = &[{}];\n",
            names.join(", ")
        ));
        output.push_str("}\n\n");
        output
    }

    fn generate_to_datum(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("impl ToDatum for {} {{\n", self.type_name));
        output.push_str("    fn to_datum(&self) -> Datum {\n");
        if self.fields.is_empty() {
            output.push_str("        Datum::Record(RecordDatum::new())\n");
        } else {
            output.push_str(&format!(
                "        let mut record = RecordDatum::with_capacity({});\n",
                self.fields.len()
            ));
            for field in &self.fields {
                output.push_str(&format!(
                    "        record.insert(\"{}\", self.{}.to_datum());\n",
                    field.name, field.ident
                ));
            }
            output.push_str("        Datum::Record(record)\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");
        output
    }

    fn generate_from_datum(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("impl FromDatum for {} {{\n", self.type_name));
        output.push_str("    fn from_datum(datum: Datum) -> Result<Self, CoreError> {\n");
        if self.fields.is_empty() {
            output.push_str(&format!(
                "        RecordDatum::from_datum(datum, \"{}\")?;\n",
                self.fullname
            ));
            output.push_str("        Ok(Self::new())\n");
        } else {
            output.push_str(&format!(
                "        let mut fields = RecordDatum::from_datum(datum, \"{}\")?;\n",
                self.fullname
            ));
            output.push_str("        Ok(Self::new(\n");
            for field in &self.fields {
                output.push_str(&format!(
                    "            fields.take(\"{}\", \"{}\")?,\n",
                    self.fullname, field.name
                ));
            }
            output.push_str("        ))\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avroforge_schema::parse_schema;

    const USER: &str = r#"{
        "type": "record", "name": "User", "namespace": "com.acme",
        "doc": "A site user.",
        "fields": [
            {"name": "name", "type": "string"},
            {"name": "favorite_number", "type": ["int", "null"]},
            {"name": "type", "type": "string", "doc": "Account kind."}
        ]
    }"#;

    #[test]
    fn test_record_generator_new() {
        let schema = parse_schema(USER).expect("Failed to parse");
        let generator = RecordGenerator::new(AvroSchema::from(&schema)).expect("Failed to prepare");
        assert_eq!(generator.type_name(), "User");
        assert_eq!(generator.fullname(), "com.acme.User");
        assert_eq!(generator.fields().len(), 3);
        assert_eq!(generator.fields()[2].ident, "r#type");
        assert_eq!(generator.fields()[2].setter, "set_type");
    }

    #[test]
    fn test_generate_record() {
        let schema = parse_schema(USER).expect("Failed to parse");
        let output = RecordGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();

        assert!(output.contains("/// A site user.\n"));
        assert!(output.contains("pub struct User {"));
        assert!(output.contains("    favorite_number: Option<i32>,"));
        assert!(output.contains(
            "pub fn new(name: String, favorite_number: Option<i32>, r#type: String) -> Self"
        ));
        assert!(output.contains("pub fn r#type(&self) -> &String"));
        assert!(output.contains("pub fn set_type(&mut self, value: String)"));
        assert!(output.contains(r#"&["name", "favorite_number", "type"]"#));
        assert!(output.contains(r#"record.insert("type", self.r#type.to_datum());"#));
        assert!(output.contains(r#"fields.take("com.acme.User", "favorite_number")?,"#));
        assert!(output.contains(r#"const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.User""#));
        syn::parse_file(&output).expect("Failed to parse generated record");
    }

    #[test]
    fn test_generate_empty_record() {
        let schema = parse_schema(r#"{"type":"record","name":"Empty","fields":[]}"#)
            .expect("Failed to parse");
        let output = RecordGenerator::new(AvroSchema::from(&schema))
            .expect("Failed to prepare")
            .generate();
        assert!(output.contains("pub fn new() -> Self"));
        syn::parse_file(&output).expect("Failed to parse generated record");
    }

    #[test]
    fn test_unsupported_field_fails_record() {
        let schema = parse_schema(
            r#"{"type":"record","name":"Wide","fields":[{"name":"value","type":
                ["int","long","float","double","bytes","string","boolean",
                 {"type":"array","items":"int"},{"type":"map","values":"int"}]}]}"#,
        )
        .expect("Failed to parse");
        assert!(matches!(
            RecordGenerator::new(AvroSchema::from(&schema)),
            Err(CodegenError::UnsupportedType { .. })
        ));
    }
}
