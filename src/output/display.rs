//! Display functions for command results

use super::formatters::{describe_outcome, found_label, length_badge, points_label};
use crate::commands::{CheckResult, HintsResult, SurveyResult};
use crate::core::letter_count;
use colored::Colorize;

/// Print the result of checking a list of candidates
pub fn print_check_result(result: &CheckResult) {
    let root_word = result.session.root_word();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", root_word.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        match describe_outcome(&entry.outcome, root_word) {
            Some(text) if entry.outcome.is_accepted() => {
                println!("  {} {:<12} {}", "✅".green(), entry.candidate, text.green());
            }
            Some(text) => {
                println!("  {} {:<12} {}", "❌".red(), entry.candidate, text.red());
            }
            None => println!("  {} {}", "·".bright_black(), "(empty, ignored)".bright_black()),
        }
    }

    println!(
        "\n{} | {}",
        found_label(result.session.used_words().len()),
        points_label(result.session.score()).bright_yellow().bold()
    );
}

/// Print the playable words for a root word
pub fn print_hints_result(result: &HintsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS FOR".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} playable, {} points available\n",
        result.words.len().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("   {} {word}", length_badge(letter_count(word)));
    }

    if shown < result.words.len() {
        println!(
            "   {}",
            format!("… and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the ranked root-word survey
pub fn print_survey_result(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pool:".bright_cyan().bold());
    println!("   Root words:       {}", result.roots.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words()).bright_yellow().bold()
    );
    println!("   Dead roots:       {}", result.dead_roots());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let best = result.roots.first().map_or(0, |r| r.max_score);
    println!("\n📈 {}", "Richest roots:".bright_cyan().bold());
    for summary in result.roots.iter().take(top) {
        // Bars are scaled to the richest root
        let bar_width = if best == 0 {
            0
        } else {
            summary.max_score * 30 / best
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(30 - bar_width).bright_black()
        );
        println!(
            "   {:<12} {bar} {:4} pts {:4} words",
            summary.root_word, summary.max_score, summary.word_count
        );
    }
}
