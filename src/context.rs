use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Res};

const INPUT_DIR_NAME: &str = "input";
const OUTPUT_DIR_NAME: &str = "output";

/// Where set files are read from and where converted sets are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Config {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// `input/` and `output/` next to the given directory.
    pub fn beside(base_dir: &Path) -> Self {
        Config::new(base_dir.join(INPUT_DIR_NAME), base_dir.join(OUTPUT_DIR_NAME))
    }

    /// Fills in any missing directory from the ones alongside the running binary.
    pub fn resolve(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Res<Self> {
        if let (Some(input_dir), Some(output_dir)) = (&input_dir, &output_dir) {
            return Ok(Config::new(input_dir, output_dir));
        }

        let defaults = Config::beside(&program_dir()?);
        Ok(Config {
            input_dir: input_dir.unwrap_or(defaults.input_dir),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
        })
    }

    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// The set name becomes the output file name, so it must not be able to
    /// step outside the output directory.
    pub fn output_path(&self, set_name: &str) -> Res<PathBuf> {
        if !is_plain_file_name(set_name) {
            return Err(ConvertError::InvalidSetName(set_name.to_string()));
        }
        Ok(self.output_dir.join(set_name))
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn program_dir() -> Res<PathBuf> {
    let exe = std::env::current_exe().map_err(ConvertError::ProgramDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConvertError::ProgramDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })
}
