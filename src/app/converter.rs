use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::models::card::{Card, ManaValue, Set, Token};
use crate::models::mtg_json::{MtgCard, MtgSet, MtgToken};
use crate::opt::*;

lazy_static! {
    static ref MANA_SYMBOL: Regex = Regex::new(r"\{(.*?)\}").unwrap();
    static ref LEADING_DIGITS: Regex = Regex::new(r"^[+-]?[0-9]+").unwrap();
}

/// Turns `"1"` into `1`, keeps `"R"` as `"R"`, and maps a missing value to `None`.
///
/// A string counts as a number when it parses to a finite float that equals
/// the integer its leading digits spell out. So `"2.0"` and `"1e0"` become
/// numbers while `"1.5"`, `"*"` and `"1e3"` stay strings.
pub fn convert_to_int(value: Option<&str>) -> Option<ManaValue> {
    let value = value?;

    match whole_number(value.trim()) {
        Some(n) => Some(whole(n)),
        None => Some(ManaValue::Symbol(value.to_string())),
    }
}

fn whole_number(text: &str) -> Option<f64> {
    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    let leading = LEADING_DIGITS.find(text)?.as_str().parse::<f64>().ok()?;

    (float == leading).then_some(float)
}

fn whole(n: f64) -> ManaValue {
    if n >= i64::MIN as f64 && n < i64::MAX as f64 {
        ManaValue::Int(n as i64)
    } else {
        ManaValue::Whole(n)
    }
}

/// Same as [`convert_to_int`] but for raw JSON, where power and toughness may
/// already be numbers.
pub fn normalize_value(value: Option<&Value>) -> Option<ManaValue> {
    match value? {
        Value::String(s) => convert_to_int(Some(s.as_str())),
        Value::Number(n) => n.as_i64().map(ManaValue::Int).or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(whole)
        }),
        _ => None,
    }
}

/// `{2}{R}{R}` becomes `[2, "R", "R"]`. Text outside braces is ignored.
pub fn convert_mana_cost(mana_cost: Option<&str>) -> Vec<ManaValue> {
    let Some(mana_cost) = mana_cost else {
        return Vec::new();
    };

    MANA_SYMBOL
        .captures_iter(mana_cost)
        .filter_map(|caps| convert_to_int(caps.get(1).map(|m| m.as_str())))
        .collect()
}

/// One entry per line of rules text. `None` means the card has no text at all.
pub fn convert_abilities(text: Option<&str>) -> Option<Vec<String>> {
    text.map(|text| text.split('\n').map(String::from).collect())
}

fn as_str(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

pub fn convert_card(mtg_card: MtgCard) -> Card {
    let mana_cost = convert_mana_cost(as_str(&mtg_card.mana_cost));
    let power = normalize_value(mtg_card.power.as_ref());
    let toughness = normalize_value(mtg_card.toughness.as_ref());
    let abilities = convert_abilities(as_str(&mtg_card.text));

    Card {
        name: mtg_card.name,
        types: mtg_card.types,
        sub_type: mtg_card.sub_types,
        converted_mana_cost: mtg_card.converted_mana_cost,
        mana_cost,
        rarity: mtg_card.rarity,
        power,
        toughness,
        colors: mtg_card.colors,
        color_identity: mtg_card.color_identity,
        abilities,
        flavor_text: mtg_card.flavor_text,
        uuid: mtg_card.uuid,
    }
}

pub fn convert_token(mtg_token: MtgToken) -> Token {
    let power = normalize_value(mtg_token.power.as_ref());
    let toughness = normalize_value(mtg_token.toughness.as_ref());
    let text = convert_abilities(as_str(&mtg_token.text));

    Token {
        name: mtg_token.name,
        color_identity: mtg_token.color_identity,
        colors: mtg_token.colors,
        power,
        toughness,
        types: mtg_token.types,
        subtypes: mtg_token.subtypes,
        text,
        uuid: mtg_token.uuid,
    }
}

pub fn convert_cards(mtg_cards: Vec<MtgCard>) -> Vec<Card> {
    mtg_cards.into_iter().map(convert_card).collect()
}

pub fn convert_tokens(mtg_tokens: Vec<MtgToken>) -> Vec<Token> {
    mtg_tokens.into_iter().map(convert_token).collect()
}

/// Cuts an MTGJSON set down to our own format.
pub fn convert_json(mtg_json: MtgSet) -> Set {
    log_if(
        &format!(
            "Converting {} cards and {} tokens from [{}]",
            mtg_json.cards.len(),
            mtg_json.tokens.len(),
            mtg_json.name
        ),
        DbgFlg::Convert,
    );

    Set {
        name: mtg_json.name,
        set_size: mtg_json.total_set_size,
        code: mtg_json.code,
        cards: convert_cards(mtg_json.cards),
        tokens: convert_tokens(mtg_json.tokens),
    }
}
