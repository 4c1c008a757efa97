//! Sentence scoring and top-n selection.

use crate::frequency::FrequencyTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Cumulative score of every sentence, indexed by sentence position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingTable {
    scores: Vec<f64>,
}

impl RankingTable {
    /// Scores each tokenized sentence against a frequency table.
    ///
    /// A sentence's score is the sum of the weights of its tokens, counting
    /// repeated tokens every time they occur.
    pub fn build<S: AsRef<str>>(table: &FrequencyTable, sentences: &[Vec<S>]) -> Self {
        let scores = sentences.iter().map(|tokens| table.score(tokens)).collect();
        Self { scores }
    }

    /// Creates a table from precomputed scores.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score of sentence `index`, or 0.0 if out of range.
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// All scores in sentence order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if there are no sentences.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// A sentence competing for a place in the summary.
///
/// Ordered so that the better candidate compares greater: a higher score
/// wins, and among equal scores the earlier sentence wins.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: f64,
    index: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Selects the highest-scoring sentences from a [`RankingTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceRanker;

impl SentenceRanker {
    /// Returns the indices of the `n` best sentences, best first.
    ///
    /// Equal scores are broken by position: the sentence that appears first
    /// in the document is preferred. If `n` exceeds the number of sentences,
    /// every sentence is returned.
    pub fn select(&self, ranking: &RankingTable, n: usize) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }

        // Min-heap holding the current best n; its root is the weakest.
        let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(n + 1);
        for (index, &score) in ranking.scores().iter().enumerate() {
            let candidate = Candidate { score, index };
            if heap.len() < n {
                heap.push(Reverse(candidate));
            } else if let Some(Reverse(weakest)) = heap.peek() {
                if candidate > *weakest {
                    heap.pop();
                    heap.push(Reverse(candidate));
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(candidate)| candidate.index)
            .collect()
    }
}
