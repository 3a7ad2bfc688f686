use std::path::PathBuf;

use crate::context::Config;
use crate::error::Res;

mod card_loader;
mod converter;
mod output;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub set_name: String,
    pub card_count: usize,
    pub token_count: usize,
    pub output_path: PathBuf,
}

/// Reads an MTGJSON set from the input directory, converts it and saves it in
/// the output directory.
pub fn convert_file(config: &Config, file_name: &str) -> Res<ConvertSummary> {
    let mtg_json = card_loader::get_json_from_file(config, file_name)?;
    let set = converter::convert_json(mtg_json);
    let output_path = output::write_to_output(config, &set)?;

    Ok(ConvertSummary {
        set_name: set.name,
        card_count: set.cards.len(),
        token_count: set.tokens.len(),
        output_path,
    })
}
