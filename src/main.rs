//! Main entry point for the ard-aktuell CLI application.

use ard_aktuell::consent::Prompt;
use ard_aktuell::error::AppError;
use ard_aktuell::feeds::{ItemDump, NoFeeds};
use ard_aktuell::navigator::{FeedSource, Navigator, Opened};
use ard_aktuell::quality::AUDIO_ONLY_TIER;
use ard_aktuell::registry::Registry;
use ard_aktuell::settings::{ARCHIVE, FileSettings, LayeredSettings, QUALITY};
use ard_aktuell::ui::{LineRenderer, TerminalPrompt};
use clap::Parser;
use log::{debug, info};
use std::io::{self, Stdout};
use std::path::PathBuf;

/// Command-line arguments for the ard-aktuell application.
#[derive(Parser, Debug)]
#[command(
    name = "ard-aktuell",
    version,
    about = "Browse the ARD tagesschau podcasts",
    long_about = "List the tagesschau broadcasts, browse their archives and pick stream URLs in the preferred quality."
)]
struct Args {
    /// Menu path, e.g. "/" for the broadcasts or "/3" for one archive
    #[arg(default_value = "/")]
    path: String,

    /// Quality tier for this run: 0-3 video (best to smallest), 4 audio only
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=AUDIO_ONLY_TIER as i64))]
    quality: Option<u32>,

    /// Browse whole archives (true) or play only the latest items (false) for this run
    #[arg(short, long, value_name = "BOOL")]
    archive: Option<bool>,

    /// Open the Nth entry listed under the path instead of the path itself
    #[arg(short, long, value_name = "N")]
    entry: Option<usize>,

    /// JSON file with feed items to serve for every feed
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Accept the disclaimer without asking
    #[arg(short, long)]
    yes: bool,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,
}

/// Answers every question with yes.
struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _heading: &str, _body: &str) -> bool {
        true
    }
}

fn run<F: FeedSource>(
    args: &Args,
    settings: LayeredSettings<FileSettings>,
    feeds: F,
) -> Result<(), AppError> {
    let renderer: LineRenderer<Stdout> = LineRenderer::new(io::stdout());
    let mut navigator = Navigator::new(Registry::builtin(), settings, feeds, renderer);

    let agreed = if args.yes {
        navigator.check_consent(&mut AssumeYes)
    } else {
        navigator.check_consent(&mut TerminalPrompt)
    };
    if !agreed {
        return Ok(());
    }

    let opened = match args.entry {
        Some(index) => {
            let (entries, complete) = navigator.entries(&args.path);
            if !complete {
                eprintln!("Warning: '{}' was only partially resolved.", args.path);
            }
            let entry = entries.get(index).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "no entry {} under '{}' ({} listed)",
                    index,
                    args.path,
                    entries.len()
                ))
            })?;
            debug!("Opening entry {} ('{}')", index, entry.name);
            navigator.open_entry(entry)?
        }
        None => navigator.open(&args.path)?,
    };

    match opened {
        Opened::Listing(listing) => {
            if !listing.complete {
                eprintln!("Warning: '{}' was only partially resolved.", args.path);
            }
            debug!("Listed {} entries", listing.entries);
        }
        Opened::Play(Some(entry)) => {
            println!("{}\n{}", entry.label, entry.stream_url);
            if !entry.plot.is_empty() {
                println!("\n{}", entry.plot);
            }
        }
        Opened::Play(None) => println!("Nothing to play."),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Log level set to {:?}", log_level);

    let file_settings = match &args.settings {
        Some(path) => FileSettings::open(path.clone())?,
        None => FileSettings::open_default()?,
    };

    // Command-line values apply to this run only.
    let mut settings = LayeredSettings::new(file_settings);
    if let Some(quality) = args.quality {
        settings.overrides = settings.overrides.with(QUALITY, &quality.to_string());
    }
    if let Some(archive) = args.archive {
        settings.overrides = settings.overrides.with(ARCHIVE, &archive.to_string());
    }

    match &args.items {
        Some(path) => {
            info!("Serving feed items from {}", path.display());
            run(&args, settings, ItemDump::load(path)?)?
        }
        None => run(&args, settings, NoFeeds)?,
    }

    Ok(())
}
