use chrono::{DateTime, Utc};
use super::super::avroforge_core::{AvroFixed, AvroObject, AvroRecord, CoreError, Datum, FixedBytes, FromDatum, RecordBuilder, RecordDatum, ToDatum};

/// `org.acme.Digest` fixed.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(FixedBytes);

impl Default for Digest {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl AvroObject for Digest {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"org.acme.Digest","type":"fixed","size":4}"#;
    const SCHEMA: &'static str = r#"{"type":"fixed","name":"Digest","namespace":"org.acme","size":4}"#;
}

impl AvroFixed for Digest {
    const SIZE: usize = 4;

    fn from_storage(storage: FixedBytes) -> Self {
        Self(storage)
    }

    fn storage(&self) -> &FixedBytes {
        &self.0
    }

    fn storage_mut(&mut self) -> &mut FixedBytes {
        &mut self.0
    }
}

impl ToDatum for Digest {
    fn to_datum(&self) -> Datum {
        self.to_fixed_datum()
    }
}

impl FromDatum for Digest {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_fixed_datum(datum)
    }
}

/// `org.acme.OrgTest` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct OrgTest {
    created: DateTime<Utc>,
    digest: Digest,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl OrgTest {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(created: DateTime<Utc>, digest: Digest) -> Self {
        Self {
            created,
            digest,
        }
    }

    /// Returns `created`.
    #[must_use]
    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }

    /// Sets `created`.
    pub fn set_created(&mut self, value: DateTime<Utc>) {
        self.created = value;
    }

    /// Returns `digest`.
    #[must_use]
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Sets `digest`.
    pub fn set_digest(&mut self, value: Digest) {
        self.digest = value;
    }
}

impl AvroObject for OrgTest {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"org.acme.OrgTest","type":"record","fields":[{"name":"created","type":"long"},{"name":"digest","type":{"name":"org.acme.Digest","type":"fixed","size":4}}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"OrgTest","namespace":"org.acme","fields":[{"name":"created","type":{"type":"long","logicalType":"timestamp-millis"}},{"name":"digest","type":{"type":"fixed","name":"Digest","size":4}}]}"#;
}

impl AvroRecord for OrgTest {
    const FIELDS: &'static [&'static str] = &["created", "digest"];
}

impl ToDatum for OrgTest {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(2);
        record.insert("created", self.created.to_datum());
        record.insert("digest", self.digest.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for OrgTest {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "org.acme.OrgTest")?;
        Ok(Self::new(
            fields.take("org.acme.OrgTest", "created")?,
            fields.take("org.acme.OrgTest", "digest")?,
        ))
    }
}

/// Builder for [`OrgTest`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct OrgTestBuilder {
    created: Option<DateTime<Utc>>,
    digest: Option<Digest>,
}

#[allow(non_snake_case)]
impl OrgTestBuilder {
    /// Sets `created`.
    #[must_use]
    pub fn created(mut self, value: DateTime<Utc>) -> Self {
        self.created = Some(value);
        self
    }

    /// Sets `digest`.
    #[must_use]
    pub fn digest(mut self, value: Digest) -> Self {
        self.digest = Some(value);
        self
    }
}

impl RecordBuilder for OrgTestBuilder {
    type Record = OrgTest;

    fn build(self) -> Result<OrgTest, CoreError> {
        Ok(OrgTest::new(
            RecordDatum::require(self.created, "org.acme.OrgTest", "created")?,
            RecordDatum::require(self.digest, "org.acme.OrgTest", "digest")?,
        ))
    }
}
