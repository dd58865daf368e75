//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is a candidate word unless
//! it starts with a colon.

use crate::dictionary::Dictionary;
use crate::game::{Game, GameSession};
use crate::output::formatters::{describe_outcome, found_label, length_badge, points_label};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error, or if a round cannot be
/// started because the word list is empty.
pub fn run_simple<S, D, R>(game: &Game<'_, S, D>, rng: &mut R) -> Result<()>
where
    S: WordSource + ?Sized,
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, rng, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive a game from any line source
///
/// Returns the session as it stood when input ran out or the player quit.
///
/// # Errors
///
/// Returns an error on I/O failure or if a round cannot be started.
pub fn play_lines<S, D, R, I, O>(
    game: &Game<'_, S, D>,
    rng: &mut R,
    input: I,
    mut out: O,
) -> Result<GameSession>
where
    S: WordSource + ?Sized,
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut session = game.start_new_game(rng)?;

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "WORD SCRAMBLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nSpell words of 3+ letters using the letters of the root word.")?;
    writeln!(out, "{HELP}\n")?;
    announce_round(&mut out, &session)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n{} {}\n", "Final score:".bold(), session.score())?;
                break;
            }
            ":new" | ":n" => {
                game.restart(&mut session, rng)?;
                writeln!(out, "\n🔄 New game started!")?;
                announce_round(&mut out, &session)?;
            }
            ":words" | ":w" => print_words(&mut out, &session)?,
            ":help" | ":h" => writeln!(out, "{HELP}")?,
            _ => {
                let outcome = game.submit_word(&mut session, &line);
                if let Some(text) = describe_outcome(&outcome, session.root_word()) {
                    if outcome.is_accepted() {
                        writeln!(out, "✅ {}", text.green())?;
                    } else {
                        writeln!(out, "❌ {}", text.red())?;
                    }
                }
            }
        }
    }

    Ok(session)
}

fn announce_round<O: Write>(out: &mut O, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "Root word: {}\n",
        session.root_word().to_uppercase().bright_yellow().bold()
    )
}

fn print_words<O: Write>(out: &mut O, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", found_label(session.used_words().len()).bold())?;
    for word in session.used_words() {
        writeln!(out, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(out, "{}", points_label(session.score()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(lines: &str) -> (GameSession, String) {
        let source = WordList::from_slice(&["stream"]);
        let dictionary = |word: &str, _: &str| ["team", "mate", "meat"].contains(&word);
        let game = Game::new(&source, &dictionary, "en");
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();

        let session = play_lines(&game, &mut rng, Cursor::new(lines.to_string()), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_and_rejects_lines() {
        let (session, output) = play("team\nTeam\ncat\n\nmate\n");

        assert_eq!(session.used_words(), ["mate", "team"]);
        assert_eq!(session.score(), 8);
        assert!(output.contains("Word used already"));
        assert!(output.contains("You can't spell that word from stream!"));
    }

    #[test]
    fn quit_stops_reading() {
        let (session, output) = play("team\n:quit\nmate\n");

        assert_eq!(session.used_words(), ["team"]);
        assert!(output.contains("Final score:"));
    }

    #[test]
    fn new_resets_round() {
        let (session, output) = play("team\n:new\nmeat\n");

        assert_eq!(session.used_words(), ["meat"]);
        assert_eq!(session.score(), 4);
        assert!(output.contains("New game started"));
    }

    #[test]
    fn words_lists_progress() {
        let (_, output) = play("team\n:words\n");

        assert!(output.contains("1 word found"));
        assert!(output.contains("④ team"));
        assert!(output.contains("You have 4 points"));
    }

    #[test]
    fn empty_pool_fails_to_start() {
        let source = WordList::default();
        let dictionary = |_: &str, _: &str| true;
        let game = Game::new(&source, &dictionary, "en");
        let mut rng = StdRng::seed_from_u64(1);

        let result = play_lines(&game, &mut rng, Cursor::new(String::new()), Vec::new());
        assert!(result.is_err());
    }
}
