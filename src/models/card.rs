use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use serde_json::Value;

/// A value that is either a whole number or a symbol such as `R`, `X` or `*`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ManaValue {
    Int(i64),
    /// A whole number outside the `i64` range.
    Whole(f64),
    Symbol(String),
}

impl Display for ManaValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ManaValue::Int(n) => write!(f, "{}", n),
            ManaValue::Whole(n) => write!(f, "{}", n),
            ManaValue::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ManaValue {
    fn from(n: i64) -> Self {
        ManaValue::Int(n)
    }
}

impl From<&str> for ManaValue {
    fn from(s: &str) -> Self {
        ManaValue::Symbol(s.to_string())
    }
}

// Pass-through fields are skipped when the source record lacks them, while the
// normalized ones always serialize, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_mana_cost: Option<Value>,
    pub mana_cost: Vec<ManaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Value>,
    pub power: Option<ManaValue>,
    pub toughness: Option<ManaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_identity: Option<Value>,
    pub abilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_identity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Value>,
    pub power: Option<ManaValue>,
    pub toughness: Option<ManaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtypes: Option<Value>,
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    pub cards: Vec<Card>,
    pub tokens: Vec<Token>,
}
