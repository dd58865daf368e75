//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell words from the letters of a root word.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use word_scramble::{
    commands::{check_words, find_hints, run_simple, survey_roots},
    config::{GameConfig, load_config},
    dictionary::WordListDictionary,
    game::Game,
    logging::{self, LogTarget},
    output::{print_check_result, print_hints_result, print_survey_result},
    wordlists::{DICTIONARY, START_WORDS, WordList, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (TOML); ignored if missing
    #[arg(short, long, global = true, default_value = "word_scramble.toml")]
    config: PathBuf,

    /// Root word list, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary word list, one word per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Dictionary language tag (default: en)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Seed for picking root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write diagnostics here instead of stderr (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Submit words to a round on a given root word and report each outcome
    Check {
        /// The root word for the round
        #[arg(short, long)]
        root: String,

        /// Words to submit, in order
        candidates: Vec<String>,
    },

    /// List every playable word for a root word
    Hints {
        /// The root word to search
        #[arg(short, long)]
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Rank the root word list by how many words each root offers
    Survey {
        /// Number of roots to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },
}

impl Cli {
    /// Overlay command-line flags on the config file
    fn apply_to(&self, mut config: GameConfig) -> Result<GameConfig> {
        if let Some(path) = &self.start_words {
            config.start_words = Some(path.clone());
        }
        if let Some(path) = &self.dictionary {
            config.dictionary = Some(path.clone());
        }
        if let Some(language) = &self.language {
            config.language.clone_from(language);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Load root words from the configured file, or the embedded list
///
/// An empty pool is fatal: no round could ever start.
fn load_start_words(path: Option<&Path>) -> Result<WordList> {
    let list = match path {
        Some(path) => WordList::load(path)
            .with_context(|| format!("Could not load root words from {}", path.display()))?,
        None => WordList::from_slice(START_WORDS),
    };
    ensure!(!list.is_empty(), "No root words available to start a game");
    Ok(list)
}

/// Load the dictionary from the configured file, or the embedded list
fn load_dictionary(path: Option<&Path>, language: &str) -> Result<WordListDictionary> {
    let words = match path {
        Some(path) => word_scramble::wordlists::loader::load_from_file(path)
            .with_context(|| format!("Could not load dictionary from {}", path.display()))?,
        None => words_from_slice(DICTIONARY),
    };
    Ok(WordListDictionary::new(language, words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let owns_terminal = matches!(cli.command, None | Some(Commands::Play));
    logging::init(LogTarget::select(cli.log_file.as_deref(), owns_terminal))?;

    let config = cli.apply_to(load_config(&cli.config)?)?;
    debug!(?config, "loaded configuration");

    let start_words = load_start_words(config.start_words.as_deref())?;
    let dictionary = load_dictionary(config.dictionary.as_deref(), &config.language)?;
    info!(
        root_words = start_words.len(),
        dictionary_words = dictionary.len(),
        language = %config.language,
        "word lists ready"
    );

    let game = Game::new(&start_words, &dictionary, config.language.as_str());
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(game, rng),
        Commands::Simple => run_simple(&game, &mut rng),
        Commands::Check { root, candidates } => {
            let result = check_words(&game, &root, &candidates)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Hints { root, limit } => {
            let result = find_hints(&game, &root, dictionary.words())?;
            print_hints_result(&result, limit);
            Ok(())
        }
        Commands::Survey { top } => {
            let result = survey_roots(&game, dictionary.words());
            print_survey_result(&result, top);
            Ok(())
        }
    }
}

fn run_play_command(game: Game<'_, WordList, WordListDictionary>, rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(game, rng)?;
    run_tui(app)
}
