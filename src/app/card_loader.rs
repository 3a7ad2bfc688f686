use crate::context::Config;
use crate::error::{ConvertError, Res};
use crate::models::mtg_json::MtgSet;
use crate::opt::*;

/// Reads `file_name` from the input directory and parses it as an MTGJSON set.
pub fn get_json_from_file(config: &Config, file_name: &str) -> Res<MtgSet> {
    let path = config.input_path(file_name);
    log_if(&format!("Reading {}", path.display()), DbgFlg::Load);

    let set_data = std::fs::read_to_string(&path).map_err(|source| ConvertError::ReadInput {
        path: path.clone(),
        source,
    })?;
    let mtg_json: MtgSet = serde_json::from_str(&set_data)
        .map_err(|source| ConvertError::ParseInput { path, source })?;

    log_if(
        &format!(
            "Loaded [{}] with {} cards and {} tokens",
            mtg_json.name,
            mtg_json.cards.len(),
            mtg_json.tokens.len()
        ),
        DbgFlg::Load,
    );

    Ok(mtg_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_config() -> (TempDir, Config) {
        let dir = TempDir::new().expect("Failed to create a temp dir");
        let config = Config::beside(dir.path());
        fs::create_dir_all(&config.input_dir).expect("Failed to create input dir");
        (dir, config)
    }

    #[test]
    fn test_load_set() {
        let (_dir, config) = create_config();
        fs::write(
            config.input_path("TST.json"),
            r#"{"name":"Test","totalSetSize":2,"code":"TST","cards":[{"name":"A"},{"name":"B"}],"tokens":[]}"#,
        )
        .unwrap();

        let mtg_json = get_json_from_file(&config, "TST.json").unwrap();

        assert_eq!(mtg_json.name, "Test");
        assert_eq!(mtg_json.cards.len(), 2);
        assert!(mtg_json.tokens.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let (_dir, config) = create_config();

        let err = get_json_from_file(&config, "missing.json").unwrap_err();

        assert!(matches!(err, ConvertError::ReadInput { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let (_dir, config) = create_config();
        fs::write(config.input_path("bad.json"), "{\"name\": ").unwrap();

        let err = get_json_from_file(&config, "bad.json").unwrap_err();

        assert!(matches!(err, ConvertError::ParseInput { .. }));
    }
}
