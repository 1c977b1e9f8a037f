//! Record builder code generation.

use super::records::RecordGenerator;
use crate::ident::{BUILDER_SUFFIX, bare_ident};

/// Generator for the companion builder of a record.
pub struct BuilderGenerator<'g, 'a> {
    record: &'g RecordGenerator<'a>,
}

impl<'g, 'a> BuilderGenerator<'g, 'a> {
    /// Creates a new builder generator.
    #[must_use]
    pub fn new(record: &'g RecordGenerator<'a>) -> Self {
        Self { record }
    }

    /// Rust identifier of the builder type.
    #[must_use]
    pub fn builder_name(&self) -> String {
        format!("{}{}", bare_ident(self.record.type_name()), BUILDER_SUFFIX)
    }

    /// Generates the builder struct, its chained setters and `RecordBuilder` impl.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let builder_name = self.builder_name();
        let record_name = self.record.type_name();
        let fields = self.record.fields();

        output.push_str(&format!("/// Builder for [`{}`].\n", record_name));
        output.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
        output.push_str("#[derive(Debug, Clone, Default)]\n");
        output.push_str(&format!("pub struct {} {{\n", builder_name));
        for field in fields {
            output.push_str(&format!("    {}: Option<{}>,\n", field.ident, field.signature));
        }
        output.push_str("}\n\n");

        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!("impl {} {{\n", builder_name));
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&format!("    /// Sets `{}`.\n", field.name));
            output.push_str("    #[must_use]\n");
            output.push_str(&format!(
                "    pub fn {}(mut self, value: {}) -> Self {{\n",
                field.method, field.signature
            ));
            output.push_str(&format!("        self.{} = Some(value);\n", field.ident));
            output.push_str("        self\n");
            output.push_str("    }\n");
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl RecordBuilder for {} {{\n", builder_name));
        output.push_str(&format!("    type Record = {};\n\n", record_name));
        output.push_str(&format!(
            "    fn build(self) -> Result<{}, CoreError> {{\n",
            record_name
        ));
        if fields.is_empty() {
            output.push_str(&format!("        Ok({}::new())\n", record_name));
        } else {
            output.push_str(&format!("        Ok({}::new(\n", record_name));
            for field in fields {
                output.push_str(&format!(
                    "            RecordDatum::require(self.{}, \"{}\", \"{}\")?,\n",
                    field.ident,
                    self.record.fullname(),
                    field.name
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
    use avroforge_schema::{AvroSchema, parse_schema};

    #[test]
    fn test_generate_builder() {
        let schema = parse_schema(
            r#"{"type":"record","name":"User","namespace":"com.acme","fields":[
                {"name":"name","type":"string"},
                {"name":"new","type":["null","long"]}
            ]}"#,
        )
        .expect("Failed to parse");
        let record = RecordGenerator::new(AvroSchema::from(&schema)).expect("Failed to prepare");
        let generator = BuilderGenerator::new(&record);
        assert_eq!(generator.builder_name(), "UserBuilder");

        let output = generator.generate();
        assert!(output.contains("pub struct UserBuilder {"));
        assert!(output.contains("    name: Option<String>,"));
        assert!(output.contains("pub fn new_(mut self, value: Option<i64>) -> Self"));
        assert!(output.contains(r#"RecordDatum::require(self.name, "com.acme.User", "name")?,"#));
        assert!(output.find("pub fn name(").expect("name setter")
            < output.find("fn build(").expect("build"));
        syn::parse_file(&output).expect("Failed to parse generated builder");
    }
}
