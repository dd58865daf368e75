//! Survey command
//!
//! Ranks the root-word pool by how much each root has to offer.

use super::hints::find_hints;
use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::wordlists::WordSource;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::warn;

/// How rich a single root word is
pub struct RootSummary {
    pub root_word: String,
    pub word_count: usize,
    pub max_score: usize,
}

/// Result of surveying the pool
pub struct SurveyResult {
    /// Summaries, richest root first
    pub roots: Vec<RootSummary>,
    pub duration: Duration,
}

impl SurveyResult {
    /// Roots with nothing playable
    #[must_use]
    pub fn dead_roots(&self) -> usize {
        self.roots.iter().filter(|r| r.word_count == 0).count()
    }

    #[must_use]
    pub fn average_words(&self) -> f64 {
        if self.roots.is_empty() {
            return 0.0;
        }
        let total: usize = self.roots.iter().map(|r| r.word_count).sum();
        total as f64 / self.roots.len() as f64
    }
}

/// Summarize every root word in the game's pool against `vocabulary`
pub fn survey_roots<S, D>(game: &Game<'_, S, D>, vocabulary: &[String]) -> SurveyResult
where
    S: WordSource + Sync + ?Sized,
    D: Dictionary + Sync + ?Sized,
{
    let start = Instant::now();

    let mut roots: Vec<RootSummary> = game
        .source()
        .pool()
        .par_iter()
        .filter_map(|root| match find_hints(game, root, vocabulary) {
            Ok(hints) => Some(RootSummary {
                root_word: hints.root_word,
                word_count: hints.words.len(),
                max_score: hints.max_score,
            }),
            Err(err) => {
                warn!(root_word = %root, error = %err, "skipping root word");
                None
            }
        })
        .collect();

    roots.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| b.word_count.cmp(&a.word_count))
            .then_with(|| a.root_word.cmp(&b.root_word))
    });

    SurveyResult {
        roots,
        duration: start.elapsed(),
    }
}
