//! Fuzzy scoring and ranking of memories against a free-text query.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::memories::Memory;

/// A memory annotated with its fuzzy-search score and matched positions.
///
/// Produced only by [`get_matches`]; a higher score is a stronger match. The
/// position lists hold the character indexes that matched the query in the
/// command and description fields respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub memory: Memory,
    pub score: i64,
    pub command_positions: Vec<usize>,
    pub description_positions: Vec<usize>,
}

impl Match {
    fn unscored(memory: &Memory) -> Self {
        Self {
            memory: memory.clone(),
            score: 0,
            command_positions: Vec::new(),
            description_positions: Vec::new(),
        }
    }
}

/// Scores and ranks memories against a query.
///
/// An empty query returns every memory with score zero, in catalog order.
/// Otherwise the command and description fields are scored independently; a
/// memory matching in either field is kept, one matching in both has its two
/// scores summed, and the result is sorted descending by total score. Ties
/// keep catalog order so the ranking is deterministic.
pub fn get_matches(memories: &[Memory], query: &str) -> Vec<Match> {
    if query.is_empty() {
        return memories.iter().map(Match::unscored).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(usize, Match)> = Vec::new();

    for (index, memory) in memories.iter().enumerate() {
        let command_match = matcher.fuzzy_indices(&memory.command, query);
        let description_match = matcher.fuzzy_indices(&memory.description, query);

        if command_match.is_none() && description_match.is_none() {
            continue;
        }

        let mut result = Match::unscored(memory);
        if let Some((score, positions)) = command_match {
            result.score += score;
            result.command_positions = positions;
        }
        if let Some((score, positions)) = description_match {
            result.score += score;
            result.description_positions = positions;
        }

        scored.push((index, result));
    }

    scored.sort_by(|(left_index, left), (right_index, right)| {
        right.score.cmp(&left.score).then(left_index.cmp(right_index))
    });

    scored.into_iter().map(|(_, result)| result).collect()
}
