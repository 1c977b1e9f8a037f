//! Namespace partitioning.
//!
//! Flattens a forest of schema trees into a map from namespace to every node
//! that lives there, children before the parents that contain them.

use crate::error::SchemaError;
use crate::types::MAX_SCHEMA_DEPTH;
use crate::wrapper::AvroSchema;
use std::collections::BTreeMap;

/// Key used for the default (empty) namespace.
pub const DEFAULT_NAMESPACE: &str = ".";

/// Namespace → nodes in post-order.
pub type NamespaceMap<'a> = BTreeMap<String, Vec<AvroSchema<'a>>>;

/// Buckets every node of every root by its owning namespace.
///
/// Named nodes are keyed by their own namespace. Unnamed nodes, including
/// by-name references, take the namespace of their nearest named ancestor.
/// Fragments from different roots are concatenated per key in encounter
/// order; no deduplication happens here.
///
/// # Arguments
/// * `roots` - Root schemas in input order
///
/// # Returns
/// The namespace map for the whole forest.
///
/// # Errors
/// Returns `SchemaError::DepthExceeded` if a tree nests deeper than
/// [`MAX_SCHEMA_DEPTH`].
pub fn parse_namespaces<'a, I, S>(roots: I) -> Result<NamespaceMap<'a>, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<AvroSchema<'a>>,
{
    let mut map = NamespaceMap::new();
    for root in roots {
        let root = root.into();
        visit(root, DEFAULT_NAMESPACE, 0, &mut map)?;
        tracing::trace!(
            "partitioned root '{}'",
            root.fullname().unwrap_or_else(|| root.type_name().to_string())
        );
    }
    tracing::debug!("namespace map has {} namespaces", map.len());
    Ok(map)
}

/// Returns the map key of a node given the namespace it would inherit.
#[must_use]
pub fn owning_namespace(schema: &AvroSchema<'_>, ambient: &str) -> String {
    if schema.is_named() {
        schema
            .namespace()
            .unwrap_or(DEFAULT_NAMESPACE)
            .to_string()
    } else {
        ambient.to_string()
    }
}

fn visit<'a>(
    schema: AvroSchema<'a>,
    ambient: &str,
    depth: usize,
    map: &mut NamespaceMap<'a>,
) -> Result<(), SchemaError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(SchemaError::DepthExceeded {
            limit: MAX_SCHEMA_DEPTH,
        });
    }

    let namespace = owning_namespace(&schema, ambient);
    for child in schema {
        visit(child, &namespace, depth + 1, map)?;
    }
    map.entry(namespace).or_default().push(schema);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;
    use crate::types::{PrimitiveType, Schema};

    fn com_test() -> Schema {
        parse_schema(
            r#"{
                "type": "record", "name": "ComTest", "namespace": "com.acme",
                "fields": [
                    {"name": "other", "type": {
                        "type": "record", "name": "OrgTest", "namespace": "org.acme",
                        "fields": [{"name": "id", "type": "long"}]
                    }},
                    {"name": "label", "type": "string"}
                ]
            }"#,
        )
        .expect("Failed to parse")
    }

    #[test]
    fn test_partition_by_own_namespace() {
        let schema = com_test();
        let map = parse_namespaces([&schema]).expect("Failed to partition");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["com.acme", "org.acme"]);

        let org: Vec<Option<&str>> = map["org.acme"].iter().map(AvroSchema::name).collect();
        assert_eq!(org, vec![None, Some("OrgTest")]);
        let com: Vec<&str> = map["com.acme"].iter().map(AvroSchema::type_name).collect();
        assert_eq!(com, vec!["string", "record"]);
    }

    #[test]
    fn test_post_order() {
        let schema = parse_schema(
            r#"{
                "type": "record", "name": "Outer",
                "fields": [
                    {"name": "a", "type": {"type": "enum", "name": "Suit", "symbols": ["X"]}},
                    {"name": "b", "type": {"type": "array", "items": "Suit"}}
                ]
            }"#,
        )
        .expect("Failed to parse");
        let map = parse_namespaces([&schema]).expect("Failed to partition");
        let nodes = &map[DEFAULT_NAMESPACE];
        let order: Vec<&str> = nodes.iter().map(AvroSchema::type_name).collect();
        assert_eq!(order, vec!["enum", "enum", "array", "record"]);
        assert!(nodes[1].reference().is_some());
        assert_eq!(nodes.last().and_then(AvroSchema::name), Some("Outer"));
    }

    #[test]
    fn test_unnamed_root_uses_default_namespace() {
        let schema = Schema::map(Schema::primitive(PrimitiveType::Int));
        let map = parse_namespaces([&schema]).expect("Failed to partition");
        assert_eq!(map.len(), 1);
        assert_eq!(map[DEFAULT_NAMESPACE].len(), 2);
    }

    #[test]
    fn test_forest_concatenates_without_dedup() {
        let first = com_test();
        let second = com_test();
        let map = parse_namespaces([&first, &second]).expect("Failed to partition");
        let records = map["org.acme"]
            .iter()
            .filter(|node| node.name() == Some("OrgTest"))
            .count();
        assert_eq!(records, 2);
        assert!(map["com.acme"][1].ptr_eq(&AvroSchema::wrap(&first)));
    }

    #[test]
    fn test_depth_exceeded() {
        let mut schema = Schema::primitive(PrimitiveType::Int);
        for _ in 0..=MAX_SCHEMA_DEPTH {
            schema = Schema::array(schema);
        }
        assert!(matches!(
            parse_namespaces([&schema]),
            Err(SchemaError::DepthExceeded { .. })
        ));
    }
}
