use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Flag names that may also be spelled with a single leading dash.
const SINGLE_DASH_FLAGS: &[&str] = &["input", "output", "help", "version"];

/// Write the plain text of a PDF document into a JSON file.
#[derive(Debug, Parser)]
#[command(name = "pdf2json", about, version)]
pub struct Cli {
    /// Path to the input PDF file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(OsString))]
    pub input: Option<OsString>,

    /// Path to the output JSON file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(OsString))]
    pub output: Option<OsString>,
}

impl Cli {
    /// Input path, empty if the flag was not given or given empty.
    pub fn input_path(&self) -> PathBuf {
        self.input.clone().map(PathBuf::from).unwrap_or_default()
    }

    /// Output path, empty if the flag was not given or given empty.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().map(PathBuf::from).unwrap_or_default()
    }
}

/// Rewrite `-input`, `-output=...` and friends to their `--` form.
///
/// The first item (the program name) and everything after a bare `--`
/// pass through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        if arg.to_str().and_then(single_dash_name).is_some() {
            let mut long = OsString::from("-");
            long.push(&arg);
            out.push(long);
        } else {
            out.push(arg);
        }
    }

    out
}

/// The flag name if `arg` is a known flag written with one dash.
fn single_dash_name(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name).then_some(name)
}
