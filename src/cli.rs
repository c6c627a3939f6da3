// src/cli.rs
use std::path::PathBuf;

use crate::config::options::AppOptions;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Profile(String),
    Pages { sheet: String, inventory: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub source: Source,
    pub out: Option<PathBuf>,
    pub options: AppOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Params),
}

pub const HELP: &str = include_str!("cli_help.txt");

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut profile: Option<String> = None;
    let mut sheet: Option<String> = None;
    let mut inventory: Option<String> = None;
    let mut out: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--sheet" => sheet = Some(args.next().ok_or("Missing value for --sheet")?),
            "--inventory" => inventory = Some(args.next().ok_or("Missing value for --inventory")?),
            "--no-desc" => options.render.with_descriptions = false,
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 { return Err("Timeout must be at least 1 second".into()); }
                options.fetch.timeout_secs = v;
            }
            "-h" | "--help" => return Ok(Command::Help),
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            url => {
                if profile.is_some() {
                    return Err(format!("Unexpected extra argument: {}", url).into());
                }
                profile = Some(s!(url));
            }
        }
    }

    let source = match (profile, sheet, inventory) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err("Give either a profile link or --sheet/--inventory, not both".into());
        }
        (Some(p), None, None) => Source::Profile(p),
        (None, Some(sheet), Some(inventory)) => Source::Pages { sheet, inventory },
        (None, Some(_), None) | (None, None, Some(_)) => {
            return Err("--sheet and --inventory must be given together".into());
        }
        (None, None, None) => return Err("Missing profile link (see --help)".into()),
    };

    Ok(Command::Run(Params { source, out, options }))
}

#[cfg(feature = "cli")]
pub fn run() -> color_eyre::Result<()> {
    use color_eyre::eyre::{eyre, WrapErr};

    use crate::{core::HttpFetcher, file, runner};

    let params = match parse_args(std::env::args().skip(1)).map_err(|e| eyre!(e))? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(p) => p,
    };

    let fetcher = HttpFetcher::new(&params.options.fetch)
        .map_err(|e| eyre!(e))
        .wrap_err("could not set up HTTP client")?;
    let mut progress = CliProgress;
    let render = &params.options.render;

    let post = match &params.source {
        Source::Profile(url) => runner::build(&fetcher, url, render, Some(&mut progress)),
        Source::Pages { sheet, inventory } => {
            runner::build_from_pages(&fetcher, sheet, inventory, render, Some(&mut progress))
        }
    }
    .map_err(|e| eyre!(e))
    .wrap_err("build failed")?;

    match &params.out {
        Some(path) => {
            let written = file::write_output(path, &post).map_err(|e| eyre!(e))?;
            eprintln!("Wrote {}", written.display());
        }
        None => println!("{post}"),
    }
    Ok(())
}

/// Progress lines go to stderr so stdout stays pipeable.
#[cfg(feature = "cli")]
struct CliProgress;

#[cfg(feature = "cli")]
impl crate::progress::Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}
