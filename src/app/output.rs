use std::path::PathBuf;

use crate::context::Config;
use crate::error::{ConvertError, Res};
use crate::models::card::Set;
use crate::opt::*;

/// Writes the converted set to `<output dir>/<set name>` as compact JSON.
pub fn write_to_output(config: &Config, set: &Set) -> Res<PathBuf> {
    let path = config.output_path(&set.name)?;
    let set_text = serde_json::to_string(set)?;

    log_if(
        &format!("Writing {} bytes to {}", set_text.len(), path.display()),
        DbgFlg::Write,
    );

    std::fs::write(&path, set_text).map_err(|source| ConvertError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn empty_set(name: &str) -> Set {
        Set {
            name: name.to_string(),
            set_size: None,
            code: None,
            cards: Vec::new(),
            tokens: Vec::new(),
        }
    }

    #[test]
    fn test_write_named_after_set() {
        let dir = TempDir::new().expect("Failed to create a temp dir");
        let config = Config::beside(dir.path());
        fs::create_dir_all(&config.output_dir).unwrap();

        let path = write_to_output(&config, &empty_set("Test")).unwrap();

        assert_eq!(path, config.output_dir.join("Test"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            r#"{"name":"Test","cards":[],"tokens":[]}"#
        );
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = TempDir::new().expect("Failed to create a temp dir");
        let config = Config::beside(dir.path());

        let err = write_to_output(&config, &empty_set("Test")).unwrap_err();

        assert!(matches!(err, ConvertError::WriteOutput { .. }));
    }

    #[test]
    fn test_unsafe_name_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create a temp dir");
        let config = Config::beside(dir.path());
        fs::create_dir_all(&config.output_dir).unwrap();

        let err = write_to_output(&config, &empty_set("../Test")).unwrap_err();

        assert!(matches!(err, ConvertError::InvalidSetName(_)));
        assert!(!dir.path().join("Test").exists());
    }
}
