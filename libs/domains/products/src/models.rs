use mongodb::bson::oid::ObjectId;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

/// Identifier assigned to a product by its store.
///
/// Parsed from the `{id}` path segment and written back as the `id` field of
/// every response. The relational store uses serial integers, the document
/// store uses [`DocumentId`].
pub trait ProductId:
    Clone
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Serialize
    + DeserializeOwned
    + PartialEq
    + Send
    + Sync
    + 'static
{
}

impl ProductId for i32 {}

impl ProductId for DocumentId {}

/// MongoDB `ObjectId` rendered as its 24-character hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[schema(value_type = String, example = "65f1c0a2b3d4e5f601234567")]
pub struct DocumentId(pub ObjectId);

impl DocumentId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = mongodb::bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

fn discard<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(), D::Error> {
    IgnoredAny::deserialize(deserializer).map(|_| ())
}

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product<Id> {
    /// Store-assigned identifier
    pub id: Id,
    pub name: String,
    pub price: f64,
}

/// Request body for create and update
///
/// Replaces `name` and `price` wholesale; there are no partial updates. A
/// body may carry the full record shape: its `id` is accepted and discarded,
/// the stored id always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductInput {
    #[serde(rename = "id", default, skip_serializing, deserialize_with = "discard")]
    #[schema(ignore)]
    ignored_id: (),

    #[validate(length(min = 1))]
    #[schema(example = "test name")]
    pub name: String,

    /// Defaults to 0 when omitted
    #[serde(default)]
    #[validate(range(min = 0.0))]
    #[schema(example = 11.12)]
    pub price: f64,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            ignored_id: (),
            name: name.into(),
            price,
        }
    }

    /// Attach an identifier, producing the record this input describes
    pub fn into_product<Id>(self, id: Id) -> Product<Id> {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
