use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A set file as published by MTGJSON. Only the fields we carry over are read.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MtgSet {
    pub name: String,
    #[serde(default, deserialize_with = "present")]
    pub total_set_size: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub code: Option<Value>,
    pub cards: Vec<MtgCard>,
    pub tokens: Vec<MtgToken>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MtgCard {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub types: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub sub_types: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub converted_mana_cost: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub mana_cost: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub rarity: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub power: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub toughness: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub colors: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub color_identity: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub flavor_text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub uuid: Option<Value>,
}

// Token subtypes are spelled `subtypes`, unlike the card `subTypes`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MtgToken {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub color_identity: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub colors: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub power: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub toughness: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub types: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub subtypes: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub uuid: Option<Value>,
}

/// Keeps an explicit JSON `null` as `Some(Value::Null)` so that only a missing
/// key ends up as `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
