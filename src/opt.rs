use std::collections::HashMap;
use std::env;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Display, EnumIter, Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum DbgFlg {
    #[strum(serialize = "DBG_FLG_LOAD")]
    Load,
    #[strum(serialize = "DBG_FLG_CONVERT")]
    Convert,
    #[strum(serialize = "DBG_FLG_WRITE")]
    Write,
}

lazy_static! {
    pub static ref DBG_FLG_DEFAULTS: HashMap<DbgFlg, bool> = HashMap::from([
        (DbgFlg::Load, false),
        (DbgFlg::Convert, false),
        (DbgFlg::Write, false),
    ]);
}

pub fn log_if(s: &str, flg: DbgFlg) {
    if checkflag(flg) {
        println!("{} {}", utc_now(), s);
    }
}

/// Names of the flags currently switched on, for the startup banner.
pub fn enabled_flags() -> Vec<String> {
    DbgFlg::iter()
        .filter(|flg| checkflag(*flg))
        .map(|flg| flg.to_string())
        .collect()
}

fn utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn checkflag(flg: DbgFlg) -> bool {
    env::var(flg.to_string())
        .ok()
        .map_or_else(
            || DBG_FLG_DEFAULTS.get(&flg).copied().unwrap_or(false),
            |s| parse_flag(&s),
        )
}

fn parse_flag(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_names() {
        assert_eq!(DbgFlg::Load.to_string(), "DBG_FLG_LOAD");
        assert_eq!(DbgFlg::Convert.to_string(), "DBG_FLG_CONVERT");
        assert_eq!(DbgFlg::Write.to_string(), "DBG_FLG_WRITE");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_every_flag_has_default() {
        for flg in DbgFlg::iter() {
            assert!(DBG_FLG_DEFAULTS.contains_key(&flg));
        }
    }
}
