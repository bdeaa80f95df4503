use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use parlor::config::Config;
use parlor::dict::{FileDictionary, WordList};
use parlor::rng::StdRngSource;
use parlor::ui::{self, App, Screen};

#[derive(Parser)]
#[command(name = "parlor", version, about = "Three little terminal games")]
struct Cli {
    /// App to open directly (defaults to the launcher menu).
    #[command(subcommand)]
    app: Option<AppChoice>,

    /// Path to a config file (defaults to ~/.config/parlor/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the start-word list for the word game.
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum AppChoice {
    /// Flag-guessing quiz.
    Quiz,
    /// Bill-splitting calculator.
    Split,
    /// Word-derivation game.
    Scramble,
}

impl AppChoice {
    fn screen(self) -> Screen {
        match self {
            AppChoice::Quiz => Screen::Quiz,
            AppChoice::Split => Screen::Split,
            AppChoice::Scramble => Screen::Scramble,
        }
    }
}

fn main() -> anyhow::Result<()> {
    parlor::logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    // The word game cannot run without its start words: treat a failed
    // load as an unrecoverable startup fault.
    let words_path = cli.words.as_ref().or(config.scramble.words_path.as_ref());
    let words = match words_path {
        Some(path) => WordList::load(path)
            .with_context(|| format!("loading start words from {}", path.display()))?,
        None => WordList::embedded().context("loading bundled start words")?,
    };

    let checker = FileDictionary::load(&config.scramble.dictionary_path).with_context(|| {
        format!(
            "loading dictionary from {} (set scramble.dictionary_path in the config to change it)",
            config.scramble.dictionary_path.display()
        )
    })?;
    tracing::info!(
        words = words.len(),
        dictionary = checker.len(),
        "assets loaded"
    );

    let screen = cli.app.map(AppChoice::screen).unwrap_or(Screen::Menu);
    let app = App::new(
        words,
        Box::new(checker),
        Box::new(StdRngSource::new()),
        config.scramble.language.clone(),
        screen,
    );

    ui::run(app, Duration::from_millis(config.tick_rate_ms)).context("running UI")?;
    Ok(())
}
