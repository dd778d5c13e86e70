// turkmorph-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use turkmorph_tr::{InterpretingAnalyzer, LoaderOptions};

/// Environment variable naming the dictionary file.
pub const DICT_ENV: &str = "TURKMORPH_DICT";

/// Command-line settings common to all tools.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommonArgs {
    pub dict_path: Option<String>,
    /// Arguments not consumed by the common options.
    pub rest: Vec<String>,
}

/// Resolve the dictionary file: explicit argument first, then `TURKMORPH_DICT`.
pub fn dictionary_path(dict_path: Option<&str>) -> Result<PathBuf, String> {
    if let Some(p) = dict_path {
        return Ok(PathBuf::from(p));
    }
    match std::env::var(DICT_ENV) {
        Ok(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        _ => Err(format!(
            "no dictionary given; pass -d PATH or set {DICT_ENV}"
        )),
    }
}

/// Load the dictionary and build an analyzer over it.
pub fn load_analyzer(dict_path: Option<&str>) -> Result<InterpretingAnalyzer, String> {
    let path = dictionary_path(dict_path)?;
    turkmorph_tr::load_analyzer(&path, &LoaderOptions::default())
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Parse a `--dict=PATH`, `--dict PATH` or `-d PATH` argument.
pub fn parse_dict_path(args: &[String]) -> Result<CommonArgs, String> {
    let mut parsed = CommonArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict=") {
            parsed.dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            match iter.next() {
                Some(val) => parsed.dict_path = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            parsed.rest.push(arg.clone());
        }
    }

    Ok(parsed)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check for a boolean flag such as `--json`.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
