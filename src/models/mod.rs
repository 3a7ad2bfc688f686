pub mod card;
pub mod mtg_json;
