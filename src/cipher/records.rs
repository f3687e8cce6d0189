// src/cipher/records.rs

use crate::model::Layer;
use serde::Serialize;
use std::collections::HashMap;

/// Receives every step-log line synchronously, in production order.
///
/// Any `FnMut(&str)` closure is an observer.
pub trait StepObserver {
    fn on_step(&mut self, line: &str);
}

impl<F> StepObserver for F
where
    F: FnMut(&str),
{
    fn on_step(&mut self, line: &str) {
        self(line)
    }
}

pub(crate) const SEPARATOR: &str = "--------------------------------------------------";

/// Ordered step log that forwards each line to an optional observer.
pub(crate) struct StepLog<'o> {
    lines: Vec<String>,
    observer: Option<&'o mut dyn StepObserver>,
}

impl<'o> StepLog<'o> {
    pub(crate) fn new(observer: Option<&'o mut dyn StepObserver>) -> Self {
        Self {
            lines: Vec::new(),
            observer,
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_step(&line);
        }
        self.lines.push(line);
    }

    pub(crate) fn separator(&mut self) {
        self.push(SEPARATOR);
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Per-call occurrence counts. Owned by one encrypt/decrypt call only.
#[derive(Debug, Default, Clone)]
pub struct UsageCounter {
    counts: HashMap<char, usize>,
}

impl UsageCounter {
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Bumps the count and returns the new value.
    pub fn increment(&mut self, letter: char) -> usize {
        let count = self.counts.entry(letter).or_insert(0);
        *count += 1;
        *count
    }

    /// Layer the next occurrence of `letter` will use.
    pub fn next_layer(&self, letter: char) -> Layer {
        Layer::for_occurrence(self.count(letter) + 1)
    }
}

/// One transformed plaintext letter (encrypt side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub letter: char,
    pub layer: Layer,
    pub element_symbol: String,
    pub orbital: String,
    pub outer_shell_count: u32,
    pub shift: i64,
}

/// A letter/layer pair that would shift onto the decoded target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub letter: char,
    pub layer: Layer,
    pub element_symbol: String,
    pub orbital: String,
    pub outer_shell_count: u32,
    pub shift: i64,
}

/// Emitted by decrypt when a coordinate had more than one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeRecord {
    pub coordinate: String,
    /// Ascending by layer
    pub candidates: Vec<Candidate>,
    pub selected_letter: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encryption {
    pub result: String,
    pub steps: Vec<String>,
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decryption {
    pub result: String,
    pub steps: Vec<String>,
    pub alternatives: Vec<AlternativeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_counter_layers() {
        let mut usage = UsageCounter::default();
        assert_eq!(usage.count('A'), 0);
        assert_eq!(usage.next_layer('A'), Layer::First);
        assert_eq!(usage.increment('A'), 1);
        assert_eq!(usage.next_layer('A'), Layer::Second);
        usage.increment('A');
        assert_eq!(usage.next_layer('A'), Layer::Third);
        usage.increment('A');
        assert_eq!(usage.next_layer('A'), Layer::First);
        assert_eq!(usage.count('B'), 0);
    }

    #[test]
    fn test_step_log_feeds_observer_in_order() {
        let mut seen = Vec::new();
        let mut observer = |line: &str| seen.push(line.to_string());
        let mut log = StepLog::new(Some(&mut observer));
        log.push("one");
        log.separator();
        log.push(String::from("two"));
        let lines = log.into_lines();

        assert_eq!(lines, vec!["one", SEPARATOR, "two"]);
        assert_eq!(seen, lines);
    }
}
