use super::super::super::avroforge_core::{AvroObject, AvroRecord, CoreError, Datum, FromDatum, RecordBuilder, RecordDatum, ToDatum};

/// `com.acme.lists.LinkedNode` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedNode {
    value: i32,
    next: Option<Box<LinkedNode>>,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl LinkedNode {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(value: i32, next: Option<Box<LinkedNode>>) -> Self {
        Self {
            value,
            next,
        }
    }

    /// Returns `value`.
    #[must_use]
    pub fn value(&self) -> &i32 {
        &self.value
    }

    /// Sets `value`.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Returns `next`.
    #[must_use]
    pub fn next(&self) -> &Option<Box<LinkedNode>> {
        &self.next
    }

    /// Sets `next`.
    pub fn set_next(&mut self, value: Option<Box<LinkedNode>>) {
        self.next = value;
    }
}

impl AvroObject for LinkedNode {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.lists.LinkedNode","type":"record","fields":[{"name":"value","type":"int"},{"name":"next","type":["null","com.acme.lists.LinkedNode"]}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"LinkedNode","namespace":"com.acme.lists","fields":[{"name":"value","type":"int"},{"name":"next","type":["null","com.acme.lists.LinkedNode"]}]}"#;
}

impl AvroRecord for LinkedNode {
    const FIELDS: &'static [&'static str] = &["value", "next"];
}

impl ToDatum for LinkedNode {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(2);
        record.insert("value", self.value.to_datum());
        record.insert("next", self.next.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for LinkedNode {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "com.acme.lists.LinkedNode")?;
        Ok(Self::new(
            fields.take("com.acme.lists.LinkedNode", "value")?,
            fields.take("com.acme.lists.LinkedNode", "next")?,
        ))
    }
}

/// Builder for [`LinkedNode`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct LinkedNodeBuilder {
    value: Option<i32>,
    next: Option<Option<Box<LinkedNode>>>,
}

#[allow(non_snake_case)]
impl LinkedNodeBuilder {
    /// Sets `value`.
    #[must_use]
    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets `next`.
    #[must_use]
    pub fn next(mut self, value: Option<Box<LinkedNode>>) -> Self {
        self.next = Some(value);
        self
    }
}

impl RecordBuilder for LinkedNodeBuilder {
    type Record = LinkedNode;

    fn build(self) -> Result<LinkedNode, CoreError> {
        Ok(LinkedNode::new(
            RecordDatum::require(self.value, "com.acme.lists.LinkedNode", "value")?,
            RecordDatum::require(self.next, "com.acme.lists.LinkedNode", "next")?,
        ))
    }
}
