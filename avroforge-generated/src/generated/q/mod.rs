use super::avroforge_core::{AvroEnum, AvroFixed, AvroObject, AvroRecord, CoreError, Datum, FixedBytes, FromDatum, RecordBuilder, RecordDatum, ToDatum};

/// `q.Datum` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Datum_ {
    v: i32,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl Datum_ {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(v: i32) -> Self {
        Self {
            v,
        }
    }

    /// Returns `v`.
    #[must_use]
    pub fn v(&self) -> &i32 {
        &self.v
    }

    /// Sets `v`.
    pub fn set_v(&mut self, value: i32) {
        self.v = value;
    }
}

impl AvroObject for Datum_ {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"q.Datum","type":"record","fields":[{"name":"v","type":"int"}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"Datum","namespace":"q","fields":[{"name":"v","type":"int"}]}"#;
}

impl AvroRecord for Datum_ {
    const FIELDS: &'static [&'static str] = &["v"];
}

impl ToDatum for Datum_ {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(1);
        record.insert("v", self.v.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for Datum_ {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "q.Datum")?;
        Ok(Self::new(
            fields.take("q.Datum", "v")?,
        ))
    }
}

/// Builder for [`Datum_`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct Datum_Builder {
    v: Option<i32>,
}

#[allow(non_snake_case)]
impl Datum_Builder {
    /// Sets `v`.
    #[must_use]
    pub fn v(mut self, value: i32) -> Self {
        self.v = Some(value);
        self
    }
}

impl RecordBuilder for Datum_Builder {
    type Record = Datum_;

    fn build(self) -> Result<Datum_, CoreError> {
        Ok(Datum_::new(
            RecordDatum::require(self.v, "q.Datum", "v")?,
        ))
    }
}

/// `q.Ok` fixed.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ok_(FixedBytes);

impl Default for Ok_ {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl AvroObject for Ok_ {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"q.Ok","type":"fixed","size":4}"#;
    const SCHEMA: &'static str = r#"{"type":"fixed","name":"Ok","namespace":"q","size":4}"#;
}

impl AvroFixed for Ok_ {
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

impl ToDatum for Ok_ {
    fn to_datum(&self) -> Datum {
        self.to_fixed_datum()
    }
}

impl FromDatum for Ok_ {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_fixed_datum(datum)
    }
}

/// `q.ResultBuilder` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBuilder_ {
    x: i32,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl ResultBuilder_ {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(x: i32) -> Self {
        Self {
            x,
        }
    }

    /// Returns `x`.
    #[must_use]
    pub fn x(&self) -> &i32 {
        &self.x
    }

    /// Sets `x`.
    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
}

impl AvroObject for ResultBuilder_ {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"q.ResultBuilder","type":"record","fields":[{"name":"x","type":"int"}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"ResultBuilder","namespace":"q","fields":[{"name":"x","type":"int"}]}"#;
}

impl AvroRecord for ResultBuilder_ {
    const FIELDS: &'static [&'static str] = &["x"];
}

impl ToDatum for ResultBuilder_ {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(1);
        record.insert("x", self.x.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for ResultBuilder_ {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "q.ResultBuilder")?;
        Ok(Self::new(
            fields.take("q.ResultBuilder", "x")?,
        ))
    }
}

/// Builder for [`ResultBuilder_`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct ResultBuilder_Builder {
    x: Option<i32>,
}

#[allow(non_snake_case)]
impl ResultBuilder_Builder {
    /// Sets `x`.
    #[must_use]
    pub fn x(mut self, value: i32) -> Self {
        self.x = Some(value);
        self
    }
}

impl RecordBuilder for ResultBuilder_Builder {
    type Record = ResultBuilder_;

    fn build(self) -> Result<ResultBuilder_, CoreError> {
        Ok(ResultBuilder_::new(
            RecordDatum::require(self.x, "q.ResultBuilder", "x")?,
        ))
    }
}

/// `q.Result` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Result_ {
    ok: bool,
    data: Datum_,
    maybe: Option<Box<Datum_>>,
    checksum: Ok_,
    label: String_,
    builder: ResultBuilder_,
    r#type: String,
    new: i64,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl Result_ {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(ok: bool, data: Datum_, maybe: Option<Box<Datum_>>, checksum: Ok_, label: String_, builder: ResultBuilder_, r#type: String, new: i64) -> Self {
        Self {
            ok,
            data,
            maybe,
            checksum,
            label,
            builder,
            r#type,
            new,
        }
    }

    /// Returns `ok`.
    #[must_use]
    pub fn ok(&self) -> &bool {
        &self.ok
    }

    /// Sets `ok`.
    pub fn set_ok(&mut self, value: bool) {
        self.ok = value;
    }

    /// Returns `data`.
    #[must_use]
    pub fn data(&self) -> &Datum_ {
        &self.data
    }

    /// Sets `data`.
    pub fn set_data(&mut self, value: Datum_) {
        self.data = value;
    }

    /// Returns `maybe`.
    #[must_use]
    pub fn maybe(&self) -> &Option<Box<Datum_>> {
        &self.maybe
    }

    /// Sets `maybe`.
    pub fn set_maybe(&mut self, value: Option<Box<Datum_>>) {
        self.maybe = value;
    }

    /// Returns `checksum`.
    #[must_use]
    pub fn checksum(&self) -> &Ok_ {
        &self.checksum
    }

    /// Sets `checksum`.
    pub fn set_checksum(&mut self, value: Ok_) {
        self.checksum = value;
    }

    /// Returns `label`.
    #[must_use]
    pub fn label(&self) -> &String_ {
        &self.label
    }

    /// Sets `label`.
    pub fn set_label(&mut self, value: String_) {
        self.label = value;
    }

    /// Returns `builder`.
    #[must_use]
    pub fn builder(&self) -> &ResultBuilder_ {
        &self.builder
    }

    /// Sets `builder`.
    pub fn set_builder(&mut self, value: ResultBuilder_) {
        self.builder = value;
    }

    /// Returns `type`.
    #[must_use]
    pub fn r#type(&self) -> &String {
        &self.r#type
    }

    /// Sets `type`.
    pub fn set_type(&mut self, value: String) {
        self.r#type = value;
    }

    /// Returns `new`.
    #[must_use]
    pub fn new_(&self) -> &i64 {
        &self.new
    }

    /// Sets `new`.
    pub fn set_new(&mut self, value: i64) {
        self.new = value;
    }
}

impl AvroObject for Result_ {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"q.Result","type":"record","fields":[{"name":"ok","type":"boolean"},{"name":"data","type":{"name":"q.Datum","type":"record","fields":[{"name":"v","type":"int"}]}},{"name":"maybe","type":["null","q.Datum"]},{"name":"checksum","type":{"name":"q.Ok","type":"fixed","size":4}},{"name":"label","type":{"name":"q.String","type":"enum","symbols":["A","B"]}},{"name":"builder","type":{"name":"q.ResultBuilder","type":"record","fields":[{"name":"x","type":"int"}]}},{"name":"type","type":"string"},{"name":"new","type":"long"}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"Result","namespace":"q","fields":[{"name":"ok","type":"boolean"},{"name":"data","type":{"type":"record","name":"Datum","fields":[{"name":"v","type":"int"}]}},{"name":"maybe","type":["null","q.Datum"]},{"name":"checksum","type":{"type":"fixed","name":"Ok","size":4}},{"name":"label","type":{"type":"enum","name":"String","symbols":["A","B"]}},{"name":"builder","type":{"type":"record","name":"ResultBuilder","fields":[{"name":"x","type":"int"}]}},{"name":"type","type":"string"},{"name":"new","type":"long"}]}"#;
}

impl AvroRecord for Result_ {
    const FIELDS: &'static [&'static str] = &["ok", "data", "maybe", "checksum", "label", "builder", "type", "new"];
}

impl ToDatum for Result_ {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(8);
        record.insert("ok", self.ok.to_datum());
        record.insert("data", self.data.to_datum());
        record.insert("maybe", self.maybe.to_datum());
        record.insert("checksum", self.checksum.to_datum());
        record.insert("label", self.label.to_datum());
        record.insert("builder", self.builder.to_datum());
        record.insert("type", self.r#type.to_datum());
        record.insert("new", self.new.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for Result_ {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "q.Result")?;
        Ok(Self::new(
            fields.take("q.Result", "ok")?,
            fields.take("q.Result", "data")?,
            fields.take("q.Result", "maybe")?,
            fields.take("q.Result", "checksum")?,
            fields.take("q.Result", "label")?,
            fields.take("q.Result", "builder")?,
            fields.take("q.Result", "type")?,
            fields.take("q.Result", "new")?,
        ))
    }
}

/// Builder for [`Result_`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct Result_Builder {
    ok: Option<bool>,
    data: Option<Datum_>,
    maybe: Option<Option<Box<Datum_>>>,
    checksum: Option<Ok_>,
    label: Option<String_>,
    builder: Option<ResultBuilder_>,
    r#type: Option<String>,
    new: Option<i64>,
}

#[allow(non_snake_case)]
impl Result_Builder {
    /// Sets `ok`.
    #[must_use]
    pub fn ok(mut self, value: bool) -> Self {
        self.ok = Some(value);
        self
    }

    /// Sets `data`.
    #[must_use]
    pub fn data(mut self, value: Datum_) -> Self {
        self.data = Some(value);
        self
    }

    /// Sets `maybe`.
    #[must_use]
    pub fn maybe(mut self, value: Option<Box<Datum_>>) -> Self {
        self.maybe = Some(value);
        self
    }

    /// Sets `checksum`.
    #[must_use]
    pub fn checksum(mut self, value: Ok_) -> Self {
        self.checksum = Some(value);
        self
    }

    /// Sets `label`.
    #[must_use]
    pub fn label(mut self, value: String_) -> Self {
        self.label = Some(value);
        self
    }

    /// Sets `builder`.
    #[must_use]
    pub fn builder(mut self, value: ResultBuilder_) -> Self {
        self.builder = Some(value);
        self
    }

    /// Sets `type`.
    #[must_use]
    pub fn r#type(mut self, value: String) -> Self {
        self.r#type = Some(value);
        self
    }

    /// Sets `new`.
    #[must_use]
    pub fn new_(mut self, value: i64) -> Self {
        self.new = Some(value);
        self
    }
}

impl RecordBuilder for Result_Builder {
    type Record = Result_;

    fn build(self) -> Result<Result_, CoreError> {
        Ok(Result_::new(
            RecordDatum::require(self.ok, "q.Result", "ok")?,
            RecordDatum::require(self.data, "q.Result", "data")?,
            RecordDatum::require(self.maybe, "q.Result", "maybe")?,
            RecordDatum::require(self.checksum, "q.Result", "checksum")?,
            RecordDatum::require(self.label, "q.Result", "label")?,
            RecordDatum::require(self.builder, "q.Result", "builder")?,
            RecordDatum::require(self.r#type, "q.Result", "type")?,
            RecordDatum::require(self.new, "q.Result", "new")?,
        ))
    }
}

/// `q.String` enum.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum String_ {
    A,
    B,
}

impl AvroObject for String_ {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"q.String","type":"enum","symbols":["A","B"]}"#;
    const SCHEMA: &'static str = r#"{"type":"enum","name":"String","namespace":"q","symbols":["A","B"]}"#;
}

impl AvroEnum for String_ {
    const SYMBOLS: &'static [&'static str] = &["A", "B"];
    const VALUES: &'static [Self] = &[Self::A, Self::B];

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl ToDatum for String_ {
    fn to_datum(&self) -> Datum {
        self.to_symbol_datum()
    }
}

impl FromDatum for String_ {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_symbol_datum(datum)
    }
}
