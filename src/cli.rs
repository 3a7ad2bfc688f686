use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

use crate::context::Config;
use crate::error::Res;

const FILE_ARG: &str = "file";
const INPUT_DIR_ARG: &str = "input-dir";
const OUTPUT_DIR_ARG: &str = "output-dir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file_name: String,
    pub config: Config,
}

pub fn parse<I, T>(args: I) -> Result<Invocation, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cli().try_get_matches_from(args)?;
    Ok(invocation(&matches)?)
}

fn invocation(matches: &ArgMatches) -> Res<Invocation> {
    let file_name = matches
        .get_one::<String>(FILE_ARG)
        .cloned()
        .unwrap_or_default();
    let config = Config::resolve(
        matches.get_one::<PathBuf>(INPUT_DIR_ARG).cloned(),
        matches.get_one::<PathBuf>(OUTPUT_DIR_ARG).cloned(),
    )?;

    Ok(Invocation { file_name, config })
}

fn cli() -> Command {
    Command::new("mtgjson-convert")
        .about("Convert an MTGJSON set file into the simplified set format")
        .arg(
            Arg::new(FILE_ARG)
                .value_name("FILE")
                .help("Name of the set file inside the input directory")
                .required(true),
        )
        .arg(
            Arg::new(INPUT_DIR_ARG)
                .long(INPUT_DIR_ARG)
                .value_name("DIR")
                .env("MTGJSON_INPUT_DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to read set files from [default: input/ beside the binary]"),
        )
        .arg(
            Arg::new(OUTPUT_DIR_ARG)
                .long(OUTPUT_DIR_ARG)
                .value_name("DIR")
                .env("MTGJSON_OUTPUT_DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to write converted sets to [default: output/ beside the binary]"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_parse_with_dirs() {
        let invocation = parse([
            "mtgjson-convert",
            "M20.json",
            "--input-dir",
            "sets",
            "--output-dir",
            "converted",
        ])
        .unwrap();

        assert_eq!(invocation.file_name, "M20.json");
        assert_eq!(invocation.config, Config::new("sets", "converted"));
    }

    // The only test that sets the env vars, so nothing else observes them.
    #[test]
    fn test_parse_env_dirs() {
        std::env::set_var("MTGJSON_INPUT_DIR", "from_env");
        std::env::set_var("MTGJSON_OUTPUT_DIR", "out_env");

        let from_env = parse(["mtgjson-convert", "M20.json"]).unwrap();
        let flag_wins = parse(["mtgjson-convert", "M20.json", "--input-dir", "flag"]).unwrap();

        std::env::remove_var("MTGJSON_INPUT_DIR");
        std::env::remove_var("MTGJSON_OUTPUT_DIR");

        let defaults = parse(["mtgjson-convert", "M20.json"]).unwrap();

        assert_eq!(from_env.config, Config::new("from_env", "out_env"));
        assert_eq!(flag_wins.config, Config::new("flag", "out_env"));
        assert!(defaults.config.input_dir.ends_with("input"));
        assert!(defaults.config.output_dir.ends_with("output"));
    }

    #[test]
    fn test_parse_requires_file() {
        assert!(parse(["mtgjson-convert", "--input-dir", "sets"]).is_err());
    }
}
