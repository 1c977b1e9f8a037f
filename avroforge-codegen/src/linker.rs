//! Linker.
//!
//! Assembles compiled namespace cells into a tree of Rust source units keyed
//! by relative path. Generated namespaces import each other through relative
//! `super::` paths and reach the runtime through the tree root, so the tree
//! can be mounted at any module path of the consuming crate.

use crate::compiler::{CompiledNamespaceMap, NamespaceCell};
use crate::ident::{bare_ident, escape_ident};
use crate::imports::{ImportSource, RequiredImports, required_imports};
use avroforge_core::sources::{FILES, SOURCES_DECLARATION};
use avroforge_schema::DEFAULT_NAMESPACE;
use std::collections::{BTreeMap, BTreeSet};

/// Relative path → Rust source.
pub type FileMap = BTreeMap<String, String>;

/// Module name of the runtime inside the generated tree.
pub const RUNTIME_MODULE: &str = "avroforge_core";

/// Unit every generated tree is entered through.
pub const ENTRY_POINT: &str = "mod.rs";

/// Options for [`link_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Driver path written to the `DEFAULT_DRIVER` constant.
    pub driver: String,
    /// Whether to copy the runtime library into the tree.
    pub vendor_runtime: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            driver: avroforge_core::DEFAULT_DRIVER.to_string(),
            vendor_runtime: true,
        }
    }
}

impl LinkOptions {
    /// Creates options with the default driver and a vendored runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default driver path.
    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// Sets whether the runtime is vendored.
    #[must_use]
    pub fn vendor_runtime(mut self, vendor: bool) -> Self {
        self.vendor_runtime = vendor;
        self
    }
}

/// Dotted namespace → module path segments.
fn namespace_segments(namespace: &str) -> Vec<&str> {
    if namespace == DEFAULT_NAMESPACE || namespace.is_empty() {
        Vec::new()
    } else {
        namespace.split('.').collect()
    }
}

/// Relative file path of the unit holding a namespace.
///
/// The default namespace maps to `mod.rs`, `com.acme` to `com/acme/mod.rs`.
#[must_use]
pub fn unit_path(namespace: &str) -> String {
    let mut path: String = namespace_segments(namespace)
        .into_iter()
        .map(|segment| format!("{}/", bare_ident(&escape_ident(segment))))
        .collect();
    path.push_str(ENTRY_POINT);
    path
}

/// Module path from the unit of `namespace` to the tree root.
fn root_prefix(namespace: &str) -> String {
    let depth = namespace_segments(namespace).len();
    if depth == 0 {
        "self".to_string()
    } else {
        vec!["super"; depth].join("::")
    }
}

/// Module path of an import source, relative to the unit of `namespace`.
fn source_path(source: &ImportSource, namespace: &str) -> String {
    match source {
        ImportSource::Runtime => format!("{}::{}", root_prefix(namespace), RUNTIME_MODULE),
        ImportSource::External(path) => path.clone(),
        ImportSource::Namespace(target) => {
            let mut path = root_prefix(namespace);
            for segment in namespace_segments(target) {
                path.push_str("::");
                path.push_str(&escape_ident(segment));
            }
            path
        }
    }
}

/// Renders `use` statements, ordered by module path.
fn render_imports(imports: &RequiredImports, namespace: &str) -> String {
    let mut statements: Vec<(String, String)> = imports
        .iter()
        .filter(|(_, symbols)| !symbols.is_empty())
        .map(|(source, symbols)| {
            let path = source_path(source, namespace);
            let statement = if symbols.len() == 1 {
                let symbol = symbols.iter().next().map(String::as_str).unwrap_or_default();
                format!("use {}::{};\n", path, symbol)
            } else {
                let list: Vec<&str> = symbols.iter().map(String::as_str).collect();
                format!("use {}::{{{}}};\n", path, list.join(", "))
            };
            (path, statement)
        })
        .collect();
    statements.sort();
    statements.into_iter().map(|(_, statement)| statement).collect()
}

/// Links the cells of one namespace into a single unit.
///
/// Cells are ordered by declaration name, unnamed first. Imports of every
/// cell that is unnamed or has a declaration are merged and rendered ahead
/// of the declarations.
///
/// # Arguments
/// * `namespace` - Namespace key of the cells
/// * `cells` - Compiled cells of the namespace
///
/// # Returns
/// The Rust source of the unit, without child module declarations.
#[must_use]
pub fn link_namespace_cells(namespace: &str, cells: &[NamespaceCell<'_>]) -> String {
    let mut ordered: Vec<&NamespaceCell<'_>> = cells.iter().collect();
    ordered.sort_by(|(_, left), (_, right)| {
        let left = left.as_ref().map_or("", |declaration| declaration.name.as_str());
        let right = right.as_ref().map_or("", |declaration| declaration.name.as_str());
        left.cmp(right)
    });

    let imports = ordered
        .iter()
        .filter(|(schema, declaration)| !schema.is_named() || declaration.is_some())
        .map(|(schema, _)| required_imports(schema, namespace))
        .fold(RequiredImports::new(), RequiredImports::union);

    let declarations: Vec<&str> = ordered
        .iter()
        .filter_map(|(_, declaration)| declaration.as_ref())
        .map(|declaration| declaration.source.as_str())
        .collect();
    if declarations.is_empty() {
        return String::new();
    }

    let mut unit = render_imports(&imports, namespace);
    if !unit.is_empty() {
        unit.push('\n');
    }
    unit.push_str(&declarations.join("\n\n"));
    unit.push('\n');
    unit
}

/// Links every namespace into a file map.
///
/// Parent namespaces without declarations get empty units, and every unit
/// declares its child modules.
#[must_use]
pub fn link_namespace_map(map: &CompiledNamespaceMap<'_>) -> FileMap {
    let mut bodies: BTreeMap<Vec<&str>, String> = BTreeMap::new();
    let mut children: BTreeMap<Vec<&str>, BTreeSet<&str>> = BTreeMap::new();

    for (namespace, cells) in map {
        let segments = namespace_segments(namespace);
        let body = link_namespace_cells(namespace, cells);
        tracing::trace!("linked namespace '{}' ({} cells)", namespace, cells.len());
        bodies.entry(segments.clone()).or_default().push_str(&body);

        for depth in 0..segments.len() {
            let parent = segments[..depth].to_vec();
            children.entry(parent.clone()).or_default().insert(segments[depth]);
            bodies.entry(parent).or_default();
        }
    }

    bodies
        .into_iter()
        .map(|(segments, body)| {
            let mut unit = String::new();
            if let Some(modules) = children.get(&segments) {
                for module in modules {
                    unit.push_str(&format!("pub mod {};\n", escape_ident(module)));
                }
                if !body.is_empty() {
                    unit.push('\n');
                }
            }
            unit.push_str(&body);
            let namespace = if segments.is_empty() {
                DEFAULT_NAMESPACE.to_string()
            } else {
                segments.join(".")
            };
            (unit_path(&namespace), unit)
        })
        .collect()
}

/// Prepends the bootstrap fragment to the entry-point unit.
///
/// The fragment mounts the runtime and declares `DEFAULT_DRIVER`. The entry
/// point is created when the map has none.
pub fn inject_bootstrap(files: &mut FileMap, options: &LinkOptions) {
    let runtime = if options.vendor_runtime {
        format!("pub mod {};\n", RUNTIME_MODULE)
    } else {
        format!("pub use ::{};\n", RUNTIME_MODULE)
    };
    let mut bootstrap = runtime;
    bootstrap.push_str("\n/// Driver loaded by default when reading or writing generated types.\n");
    bootstrap.push_str(&format!(
        "pub const DEFAULT_DRIVER: &str = {:?};\n",
        options.driver
    ));

    let entry = files.entry(ENTRY_POINT.to_string()).or_default();
    if !entry.is_empty() {
        bootstrap.push('\n');
    }
    entry.insert_str(0, &bootstrap);
}

/// Merges the runtime library's own files under the runtime module.
///
/// `lib.rs` becomes `mod.rs` and loses its declaration of the source map.
/// Runtime files replace generated units with the same path.
pub fn link_runtime(files: &mut FileMap) {
    for (path, content) in FILES {
        let (path, content) = if *path == "lib.rs" {
            let content: String = content
                .lines()
                .filter(|line| line.trim() != SOURCES_DECLARATION)
                .map(|line| format!("{}\n", line))
                .collect();
            (ENTRY_POINT, content)
        } else {
            (*path, (*content).to_string())
        };
        let target = format!("{}/{}", RUNTIME_MODULE, path);
        if files.insert(target.clone(), content).is_some() {
            tracing::warn!("runtime file '{}' replaces a generated unit", target);
        }
    }
}

/// Links a compiled namespace map into a complete module tree.
///
/// # Arguments
/// * `map` - Compiled namespace map
/// * `options` - Driver and vendoring options
///
/// # Returns
/// Relative path → source for the whole tree.
#[must_use]
pub fn link_module(map: &CompiledNamespaceMap<'_>, options: &LinkOptions) -> FileMap {
    let mut files = link_namespace_map(map);
    inject_bootstrap(&mut files, options);
    if options.vendor_runtime {
        link_runtime(&mut files);
    }
    tracing::debug!(
        "linked {} units (runtime vendored: {})",
        files.len(),
        options.vendor_runtime
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_namespace_map;
    use avroforge_schema::{Schema, parse_namespaces, parse_schema};

    fn parse(json: &str) -> Schema {
        parse_schema(json).expect("Failed to parse")
    }

    fn link(schemas: &[Schema], options: &LinkOptions) -> FileMap {
        let map = parse_namespaces(schemas).expect("Failed to partition");
        let compiled = compile_namespace_map(&map).expect("Failed to compile");
        link_module(&compiled, options)
    }

    #[test]
    fn test_unit_paths() {
        assert_eq!(unit_path("."), "mod.rs");
        assert_eq!(unit_path("com.acme"), "com/acme/mod.rs");
        assert_eq!(unit_path("org.type"), "org/type/mod.rs");
        assert_eq!(source_path(&ImportSource::Runtime, "."), "self::avroforge_core");
        assert_eq!(
            source_path(&ImportSource::Runtime, "com.acme"),
            "super::super::avroforge_core"
        );
        assert_eq!(
            source_path(&ImportSource::Namespace("org.type".into()), "com"),
            "super::org::r#type"
        );
    }

    #[test]
    fn test_link_options_builder() {
        let options = LinkOptions::new().driver("json_driver").vendor_runtime(false);
        assert_eq!(options.driver, "json_driver");
        assert!(!options.vendor_runtime);
        assert_eq!(LinkOptions::default().driver, "apache_avro_binary_driver");
    }

    #[test]
    fn test_cells_sorted_with_imports_first() {
        let schema = parse(
            r#"{"type":"record","name":"Zeta","namespace":"com.acme","fields":[
                {"name":"kind","type":{"type":"enum","name":"Alpha","symbols":["A"]}},
                {"name":"id","type":{"type":"string","logicalType":"uuid"}}
            ]}"#,
        );
        let map = parse_namespaces([&schema]).expect("Failed to partition");
        let compiled = compile_namespace_map(&map).expect("Failed to compile");
        let unit = link_namespace_cells("com.acme", &compiled["com.acme"]);

        assert!(unit.starts_with(
            "use super::super::avroforge_core::{AvroEnum, AvroObject, AvroRecord, CoreError, \
             Datum, FromDatum, RecordBuilder, RecordDatum, ToDatum};\nuse uuid::Uuid;\n\n"
        ));
        let alpha = unit.find("pub enum Alpha").expect("Failed to find Alpha");
        let zeta = unit.find("pub struct Zeta").expect("Failed to find Zeta");
        assert!(alpha < zeta);
    }

    #[test]
    fn test_parents_are_synthesized() {
        let schema = parse(r#"{"type":"enum","name":"Suit","namespace":"com.acme","symbols":["A"]}"#);
        let files = link(&[schema], &LinkOptions::new().vendor_runtime(false));

        let paths: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["com/acme/mod.rs", "com/mod.rs", "mod.rs"]);
        assert_eq!(files["com/mod.rs"], "pub mod acme;\n");
        assert!(files["mod.rs"].starts_with(
            "pub use ::avroforge_core;\n\n/// Driver loaded by default when reading or writing generated types.\n\
             pub const DEFAULT_DRIVER: &str = \"apache_avro_binary_driver\";\n\npub mod com;\n"
        ));
    }

    #[test]
    fn test_runtime_is_vendored() {
        let schema = parse(r#"{"type":"fixed","name":"MD5","size":16}"#);
        let files = link(&[schema], &LinkOptions::new().driver("json_driver"));

        let root = &files["mod.rs"];
        assert!(root.starts_with("pub mod avroforge_core;\n"));
        assert!(root.contains("pub const DEFAULT_DRIVER: &str = \"json_driver\";"));
        assert!(root.contains("use self::avroforge_core::{"));

        let runtime = &files["avroforge_core/mod.rs"];
        assert!(runtime.contains("pub mod datum;"));
        assert!(!runtime.contains(SOURCES_DECLARATION));
        assert!(files.contains_key("avroforge_core/union.rs"));
        assert!(!files.contains_key("avroforge_core/lib.rs"));
        assert!(!files.contains_key("avroforge_core/sources.rs"));
    }

    #[test]
    fn test_units_parse_as_rust() {
        let schema = parse(
            r#"{"type":"record","name":"ComTest","namespace":"com.acme","fields":[
                {"name":"other","type":{"type":"record","name":"OrgTest","namespace":"org.acme",
                    "fields":[{"name":"tags","type":{"type":"map","values":"long"}}]}},
                {"name":"choice","type":["null","int","string"]}
            ]}"#,
        );
        let files = link(&[schema], &LinkOptions::new());
        assert!(files["com/acme/mod.rs"].contains("use super::super::org::acme::OrgTest;\n"));
        assert!(files["org/acme/mod.rs"].contains("use std::collections::HashMap;\n"));
        for (path, source) in &files {
            syn::parse_file(source).unwrap_or_else(|err| panic!("{} does not parse: {}", path, err));
        }
    }
}
