pub mod lists;

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use super::super::avroforge_core::{AvroEnum, AvroFixed, AvroFixedDecimal, AvroObject, AvroRecord, CoreError, Datum, FixedBytes, FromDatum, RecordBuilder, RecordDatum, ToDatum, Union2};
use super::super::org::acme::OrgTest;
use uuid::Uuid;

/// `com.acme.Amount` fixed decimal.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount(FixedBytes);

impl Default for Amount {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl AvroObject for Amount {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.Amount","type":"fixed","size":16}"#;
    const SCHEMA: &'static str = r#"{"type":"fixed","name":"Amount","namespace":"com.acme","size":16,"logicalType":"decimal","precision":10,"scale":2}"#;
}

impl AvroFixed for Amount {
    const SIZE: usize = 16;

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

impl AvroFixedDecimal for Amount {
    const PRECISION: u32 = 10;
    const SCALE: u32 = 2;
}

impl ToDatum for Amount {
    fn to_datum(&self) -> Datum {
        self.to_fixed_datum()
    }
}

impl FromDatum for Amount {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_fixed_datum(datum)
    }
}

/// `com.acme.ComTest` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct ComTest {
    org: OrgTest,
    history: Vec<Box<OrgTest>>,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl ComTest {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(org: OrgTest, history: Vec<Box<OrgTest>>) -> Self {
        Self {
            org,
            history,
        }
    }

    /// Returns `org`.
    #[must_use]
    pub fn org(&self) -> &OrgTest {
        &self.org
    }

    /// Sets `org`.
    pub fn set_org(&mut self, value: OrgTest) {
        self.org = value;
    }

    /// Returns `history`.
    #[must_use]
    pub fn history(&self) -> &Vec<Box<OrgTest>> {
        &self.history
    }

    /// Sets `history`.
    pub fn set_history(&mut self, value: Vec<Box<OrgTest>>) {
        self.history = value;
    }
}

impl AvroObject for ComTest {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.ComTest","type":"record","fields":[{"name":"org","type":{"name":"org.acme.OrgTest","type":"record","fields":[{"name":"created","type":"long"},{"name":"digest","type":{"name":"org.acme.Digest","type":"fixed","size":4}}]}},{"name":"history","type":{"type":"array","items":"org.acme.OrgTest"}}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"ComTest","namespace":"com.acme","fields":[{"name":"org","type":{"type":"record","name":"OrgTest","namespace":"org.acme","fields":[{"name":"created","type":{"type":"long","logicalType":"timestamp-millis"}},{"name":"digest","type":{"type":"fixed","name":"Digest","size":4}}]}},{"name":"history","type":{"type":"array","items":"org.acme.OrgTest"}}]}"#;
}

impl AvroRecord for ComTest {
    const FIELDS: &'static [&'static str] = &["org", "history"];
}

impl ToDatum for ComTest {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(2);
        record.insert("org", self.org.to_datum());
        record.insert("history", self.history.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for ComTest {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "com.acme.ComTest")?;
        Ok(Self::new(
            fields.take("com.acme.ComTest", "org")?,
            fields.take("com.acme.ComTest", "history")?,
        ))
    }
}

/// Builder for [`ComTest`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct ComTestBuilder {
    org: Option<OrgTest>,
    history: Option<Vec<Box<OrgTest>>>,
}

#[allow(non_snake_case)]
impl ComTestBuilder {
    /// Sets `org`.
    #[must_use]
    pub fn org(mut self, value: OrgTest) -> Self {
        self.org = Some(value);
        self
    }

    /// Sets `history`.
    #[must_use]
    pub fn history(mut self, value: Vec<Box<OrgTest>>) -> Self {
        self.history = Some(value);
        self
    }
}

impl RecordBuilder for ComTestBuilder {
    type Record = ComTest;

    fn build(self) -> Result<ComTest, CoreError> {
        Ok(ComTest::new(
            RecordDatum::require(self.org, "com.acme.ComTest", "org")?,
            RecordDatum::require(self.history, "com.acme.ComTest", "history")?,
        ))
    }
}

/// `com.acme.MD5` fixed.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MD5(FixedBytes);

impl Default for MD5 {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl AvroObject for MD5 {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.MD5","type":"fixed","size":16}"#;
    const SCHEMA: &'static str = r#"{"type":"fixed","name":"MD5","namespace":"com.acme","size":16}"#;
}

impl AvroFixed for MD5 {
    const SIZE: usize = 16;

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

impl ToDatum for MD5 {
    fn to_datum(&self) -> Datum {
        self.to_fixed_datum()
    }
}

impl FromDatum for MD5 {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_fixed_datum(datum)
    }
}

/// `com.acme.Payment` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    id: Uuid,
    suit: Suit,
    checksum: MD5,
    amount: Amount,
    created: DateTime<Utc>,
    day: NaiveDate,
    tags: HashMap<String, i64>,
    history: Vec<i32>,
    note: Option<Union2<i64, String>>,
    raw: Bytes,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl Payment {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(id: Uuid, suit: Suit, checksum: MD5, amount: Amount, created: DateTime<Utc>, day: NaiveDate, tags: HashMap<String, i64>, history: Vec<i32>, note: Option<Union2<i64, String>>, raw: Bytes) -> Self {
        Self {
            id,
            suit,
            checksum,
            amount,
            created,
            day,
            tags,
            history,
            note,
            raw,
        }
    }

    /// Returns `id`.
    #[must_use]
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Sets `id`.
    pub fn set_id(&mut self, value: Uuid) {
        self.id = value;
    }

    /// Returns `suit`.
    #[must_use]
    pub fn suit(&self) -> &Suit {
        &self.suit
    }

    /// Sets `suit`.
    pub fn set_suit(&mut self, value: Suit) {
        self.suit = value;
    }

    /// Returns `checksum`.
    #[must_use]
    pub fn checksum(&self) -> &MD5 {
        &self.checksum
    }

    /// Sets `checksum`.
    pub fn set_checksum(&mut self, value: MD5) {
        self.checksum = value;
    }

    /// Returns `amount`.
    #[must_use]
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Sets `amount`.
    pub fn set_amount(&mut self, value: Amount) {
        self.amount = value;
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

    /// Returns `day`.
    #[must_use]
    pub fn day(&self) -> &NaiveDate {
        &self.day
    }

    /// Sets `day`.
    pub fn set_day(&mut self, value: NaiveDate) {
        self.day = value;
    }

    /// Returns `tags`.
    #[must_use]
    pub fn tags(&self) -> &HashMap<String, i64> {
        &self.tags
    }

    /// Sets `tags`.
    pub fn set_tags(&mut self, value: HashMap<String, i64>) {
        self.tags = value;
    }

    /// Returns `history`.
    #[must_use]
    pub fn history(&self) -> &Vec<i32> {
        &self.history
    }

    /// Sets `history`.
    pub fn set_history(&mut self, value: Vec<i32>) {
        self.history = value;
    }

    /// Returns `note`.
    #[must_use]
    pub fn note(&self) -> &Option<Union2<i64, String>> {
        &self.note
    }

    /// Sets `note`.
    pub fn set_note(&mut self, value: Option<Union2<i64, String>>) {
        self.note = value;
    }

    /// Returns `raw`.
    #[must_use]
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// Sets `raw`.
    pub fn set_raw(&mut self, value: Bytes) {
        self.raw = value;
    }
}

impl AvroObject for Payment {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.Payment","type":"record","fields":[{"name":"id","type":"string"},{"name":"suit","type":{"name":"com.acme.Suit","type":"enum","symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}},{"name":"checksum","type":{"name":"com.acme.MD5","type":"fixed","size":16}},{"name":"amount","type":{"name":"com.acme.Amount","type":"fixed","size":16}},{"name":"created","type":"long"},{"name":"day","type":"int"},{"name":"tags","type":{"type":"map","values":"long"}},{"name":"history","type":{"type":"array","items":"int"}},{"name":"note","type":["null","string","long"]},{"name":"raw","type":"bytes"}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"Payment","namespace":"com.acme","fields":[{"name":"id","type":{"type":"string","logicalType":"uuid"}},{"name":"suit","type":{"type":"enum","name":"Suit","symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}},{"name":"checksum","type":{"type":"fixed","name":"MD5","size":16}},{"name":"amount","type":{"type":"fixed","name":"Amount","size":16,"logicalType":"decimal","precision":10,"scale":2}},{"name":"created","type":{"type":"long","logicalType":"timestamp-millis"}},{"name":"day","type":{"type":"int","logicalType":"date"}},{"name":"tags","type":{"type":"map","values":"long"}},{"name":"history","type":{"type":"array","items":"int"}},{"name":"note","type":["null","string","long"]},{"name":"raw","type":"bytes"}]}"#;
}

impl AvroRecord for Payment {
    const FIELDS: &'static [&'static str] = &["id", "suit", "checksum", "amount", "created", "day", "tags", "history", "note", "raw"];
}

impl ToDatum for Payment {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(10);
        record.insert("id", self.id.to_datum());
        record.insert("suit", self.suit.to_datum());
        record.insert("checksum", self.checksum.to_datum());
        record.insert("amount", self.amount.to_datum());
        record.insert("created", self.created.to_datum());
        record.insert("day", self.day.to_datum());
        record.insert("tags", self.tags.to_datum());
        record.insert("history", self.history.to_datum());
        record.insert("note", self.note.to_datum());
        record.insert("raw", self.raw.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for Payment {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "com.acme.Payment")?;
        Ok(Self::new(
            fields.take("com.acme.Payment", "id")?,
            fields.take("com.acme.Payment", "suit")?,
            fields.take("com.acme.Payment", "checksum")?,
            fields.take("com.acme.Payment", "amount")?,
            fields.take("com.acme.Payment", "created")?,
            fields.take("com.acme.Payment", "day")?,
            fields.take("com.acme.Payment", "tags")?,
            fields.take("com.acme.Payment", "history")?,
            fields.take("com.acme.Payment", "note")?,
            fields.take("com.acme.Payment", "raw")?,
        ))
    }
}

/// Builder for [`Payment`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct PaymentBuilder {
    id: Option<Uuid>,
    suit: Option<Suit>,
    checksum: Option<MD5>,
    amount: Option<Amount>,
    created: Option<DateTime<Utc>>,
    day: Option<NaiveDate>,
    tags: Option<HashMap<String, i64>>,
    history: Option<Vec<i32>>,
    note: Option<Option<Union2<i64, String>>>,
    raw: Option<Bytes>,
}

#[allow(non_snake_case)]
impl PaymentBuilder {
    /// Sets `id`.
    #[must_use]
    pub fn id(mut self, value: Uuid) -> Self {
        self.id = Some(value);
        self
    }

    /// Sets `suit`.
    #[must_use]
    pub fn suit(mut self, value: Suit) -> Self {
        self.suit = Some(value);
        self
    }

    /// Sets `checksum`.
    #[must_use]
    pub fn checksum(mut self, value: MD5) -> Self {
        self.checksum = Some(value);
        self
    }

    /// Sets `amount`.
    #[must_use]
    pub fn amount(mut self, value: Amount) -> Self {
        self.amount = Some(value);
        self
    }

    /// Sets `created`.
    #[must_use]
    pub fn created(mut self, value: DateTime<Utc>) -> Self {
        self.created = Some(value);
        self
    }

    /// Sets `day`.
    #[must_use]
    pub fn day(mut self, value: NaiveDate) -> Self {
        self.day = Some(value);
        self
    }

    /// Sets `tags`.
    #[must_use]
    pub fn tags(mut self, value: HashMap<String, i64>) -> Self {
        self.tags = Some(value);
        self
    }

    /// Sets `history`.
    #[must_use]
    pub fn history(mut self, value: Vec<i32>) -> Self {
        self.history = Some(value);
        self
    }

    /// Sets `note`.
    #[must_use]
    pub fn note(mut self, value: Option<Union2<i64, String>>) -> Self {
        self.note = Some(value);
        self
    }

    /// Sets `raw`.
    #[must_use]
    pub fn raw(mut self, value: Bytes) -> Self {
        self.raw = Some(value);
        self
    }
}

impl RecordBuilder for PaymentBuilder {
    type Record = Payment;

    fn build(self) -> Result<Payment, CoreError> {
        Ok(Payment::new(
            RecordDatum::require(self.id, "com.acme.Payment", "id")?,
            RecordDatum::require(self.suit, "com.acme.Payment", "suit")?,
            RecordDatum::require(self.checksum, "com.acme.Payment", "checksum")?,
            RecordDatum::require(self.amount, "com.acme.Payment", "amount")?,
            RecordDatum::require(self.created, "com.acme.Payment", "created")?,
            RecordDatum::require(self.day, "com.acme.Payment", "day")?,
            RecordDatum::require(self.tags, "com.acme.Payment", "tags")?,
            RecordDatum::require(self.history, "com.acme.Payment", "history")?,
            RecordDatum::require(self.note, "com.acme.Payment", "note")?,
            RecordDatum::require(self.raw, "com.acme.Payment", "raw")?,
        ))
    }
}

/// `com.acme.Suit` enum.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    SPADES,
    HEARTS,
    DIAMONDS,
    CLUBS,
}

impl AvroObject for Suit {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.Suit","type":"enum","symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}"#;
    const SCHEMA: &'static str = r#"{"type":"enum","name":"Suit","namespace":"com.acme","symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}"#;
}

impl AvroEnum for Suit {
    const SYMBOLS: &'static [&'static str] = &["SPADES", "HEARTS", "DIAMONDS", "CLUBS"];
    const VALUES: &'static [Self] = &[Self::SPADES, Self::HEARTS, Self::DIAMONDS, Self::CLUBS];

    fn index(self) -> usize {
        match self {
            Self::SPADES => 0,
            Self::HEARTS => 1,
            Self::DIAMONDS => 2,
            Self::CLUBS => 3,
        }
    }
}

impl ToDatum for Suit {
    fn to_datum(&self) -> Datum {
        self.to_symbol_datum()
    }
}

impl FromDatum for Suit {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        Self::from_symbol_datum(datum)
    }
}

/// A registered user.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    favorite_number: Option<i32>,
    favorite_color: Option<String>,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl User {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(name: String, favorite_number: Option<i32>, favorite_color: Option<String>) -> Self {
        Self {
            name,
            favorite_number,
            favorite_color,
        }
    }

    /// Returns `name`.
    #[must_use]
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Sets `name`.
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    /// Returns `favorite_number`.
    #[must_use]
    pub fn favorite_number(&self) -> &Option<i32> {
        &self.favorite_number
    }

    /// Sets `favorite_number`.
    pub fn set_favorite_number(&mut self, value: Option<i32>) {
        self.favorite_number = value;
    }

    /// Returns `favorite_color`.
    #[must_use]
    pub fn favorite_color(&self) -> &Option<String> {
        &self.favorite_color
    }

    /// Sets `favorite_color`.
    pub fn set_favorite_color(&mut self, value: Option<String>) {
        self.favorite_color = value;
    }
}

impl AvroObject for User {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"com.acme.User","type":"record","fields":[{"name":"name","type":"string"},{"name":"favorite_number","type":["int","null"]},{"name":"favorite_color","type":["string","null"]}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"User","namespace":"com.acme","doc":"A registered user.","fields":[{"name":"name","type":"string"},{"name":"favorite_number","type":["int","null"]},{"name":"favorite_color","type":["string","null"]}]}"#;
}

impl AvroRecord for User {
    const FIELDS: &'static [&'static str] = &["name", "favorite_number", "favorite_color"];
}

impl ToDatum for User {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(3);
        record.insert("name", self.name.to_datum());
        record.insert("favorite_number", self.favorite_number.to_datum());
        record.insert("favorite_color", self.favorite_color.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for User {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "com.acme.User")?;
        Ok(Self::new(
            fields.take("com.acme.User", "name")?,
            fields.take("com.acme.User", "favorite_number")?,
            fields.take("com.acme.User", "favorite_color")?,
        ))
    }
}

/// Builder for [`User`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    name: Option<String>,
    favorite_number: Option<Option<i32>>,
    favorite_color: Option<Option<String>>,
}

#[allow(non_snake_case)]
impl UserBuilder {
    /// Sets `name`.
    #[must_use]
    pub fn name(mut self, value: String) -> Self {
        self.name = Some(value);
        self
    }

    /// Sets `favorite_number`.
    #[must_use]
    pub fn favorite_number(mut self, value: Option<i32>) -> Self {
        self.favorite_number = Some(value);
        self
    }

    /// Sets `favorite_color`.
    #[must_use]
    pub fn favorite_color(mut self, value: Option<String>) -> Self {
        self.favorite_color = Some(value);
        self
    }
}

impl RecordBuilder for UserBuilder {
    type Record = User;

    fn build(self) -> Result<User, CoreError> {
        Ok(User::new(
            RecordDatum::require(self.name, "com.acme.User", "name")?,
            RecordDatum::require(self.favorite_number, "com.acme.User", "favorite_number")?,
            RecordDatum::require(self.favorite_color, "com.acme.User", "favorite_color")?,
        ))
    }
}
