//! Result types shared by all guess strategies

use rand::Rng;
use rand::prelude::IndexedRandom;

/// Leaves tied for the smallest worst-case bucket
///
/// Never empty: an exhausted clade is reported as [`GuessOutcome::NoCandidates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestGuesses {
    guesses: Vec<String>,
    worst_case: usize,
    candidates: usize,
}

impl BestGuesses {
    pub(crate) fn new(guesses: Vec<String>, worst_case: usize, candidates: usize) -> Self {
        debug_assert!(!guesses.is_empty(), "best guesses are never empty");
        Self {
            guesses,
            worst_case,
            candidates,
        }
    }

    /// All tied guesses, in candidate order
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Largest number of candidates that can remain after any of these guesses
    #[must_use]
    pub const fn worst_case(&self) -> usize {
        self.worst_case
    }

    /// Number of live candidates the guesses were chosen from
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// First tied guess in candidate order
    #[must_use]
    pub fn first(&self) -> &str {
        &self.guesses[0]
    }

    /// Pick one of the tied guesses
    pub fn pick(&self, tie_break: TieBreak) -> &str {
        match tie_break {
            TieBreak::First => self.first(),
            TieBreak::Random => self.choose(&mut rand::rng()),
        }
    }

    /// Pick one of the tied guesses uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.guesses.choose(rng).map_or_else(|| self.first(), String::as_str)
    }

    /// Tied guesses other than `chosen`
    pub fn alternatives<'a>(&'a self, chosen: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.guesses
            .iter()
            .map(String::as_str)
            .filter(move |g| *g != chosen)
    }
}

/// Result of asking a strategy for the next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Best(BestGuesses),
    /// Every species of the requested clade has been eliminated
    NoCandidates,
}

impl GuessOutcome {
    #[must_use]
    pub fn best(self) -> Option<BestGuesses> {
        match self {
            Self::Best(best) => Some(best),
            Self::NoCandidates => None,
        }
    }
}

/// How a caller settles ties between equally good guesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// First tied guess in candidate order (deterministic)
    #[default]
    First,
    /// Uniformly random among tied guesses
    Random,
}

impl TieBreak {
    /// Parse from a CLI name; anything other than "first" is random
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First,
            _ => Self::Random,
        }
    }
}
