//! Empirical value distributions
//!
//! A [`Distribution`] counts how often each decoded value occurs and reports
//! the relative frequencies. Only observed values are present, so every
//! probability is strictly positive.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::AnalysisError;

/// Relative frequency of each distinct value in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    counts: BTreeMap<u64, usize>,
    total: usize,
}

impl Distribution {
    /// Count occurrences of each distinct value.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] for an empty slice, which would
    /// otherwise divide by zero.
    pub fn from_values(values: &[u64]) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut counts = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            total: values.len(),
        })
    }

    /// Number of values the distribution was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false: empty inputs are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrences of `value` (0 if never observed).
    pub fn count(&self, value: u64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Relative frequency of `value`, or `None` if it never occurred.
    pub fn probability(&self, value: u64) -> Option<f64> {
        self.counts
            .get(&value)
            .map(|&count| count as f64 / self.total as f64)
    }

    /// `(value, probability)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        let total = self.total as f64;
        self.counts
            .iter()
            .map(move |(&value, &count)| (value, count as f64 / total))
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn counts(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    pub fn probabilities(&self) -> BTreeMap<u64, f64> {
        self.iter().collect()
    }

    /// Shannon entropy in bits per value.
    ///
    /// Ranges from 0 (a single repeated value) to `log2(len())` (all
    /// observed values equally likely).
    pub fn entropy(&self) -> f64 {
        let h: f64 = self.iter().map(|(_, p)| p * p.log2()).sum();
        // Avoid reporting -0.0 for a single-valued distribution
        if h == 0.0 {
            0.0
        } else {
            -h
        }
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Distribution", 4)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("entropy", &self.entropy())?;
        state.serialize_field("counts", &self.counts)?;
        state.serialize_field("probabilities", &self.probabilities())?;
        state.end()
    }
}

/// Relative frequency of each distinct value in `values`.
///
/// Shorthand for [`Distribution::from_values`] followed by
/// [`Distribution::probabilities`].
pub fn distribution(values: &[u64]) -> Result<BTreeMap<u64, f64>, AnalysisError> {
    Distribution::from_values(values).map(|d| d.probabilities())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::BTreeSet;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_distribution_example() {
        let dist = distribution(&[0, 0, 1, 1, 1]).unwrap();
        assert_eq!(dist.len(), 2);
        assert!((dist[&0] - 0.4).abs() < EPSILON);
        assert!((dist[&1] - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_distribution_empty_input() {
        assert_eq!(distribution(&[]), Err(AnalysisError::EmptyInput));
        assert_eq!(Distribution::from_values(&[]), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_distribution_single_value() {
        let dist = Distribution::from_values(&[7; 10]).unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.total(), 10);
        assert_eq!(dist.count(7), 10);
        assert_eq!(dist.probability(7), Some(1.0));
        assert_eq!(dist.entropy(), 0.0);
    }

    #[test]
    fn test_distribution_normalized_and_complete() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(1..2000);
            let values: Vec<u64> = (0..len).map(|_| rng.gen_range(0..256)).collect();
            let dist = Distribution::from_values(&values).unwrap();

            let sum: f64 = dist.iter().map(|(_, p)| p).sum();
            assert!((sum - 1.0).abs() < EPSILON, "sum was {sum}");
            assert!(dist.iter().all(|(_, p)| p > 0.0 && p <= 1.0));

            let keys: BTreeSet<u64> = dist.iter().map(|(v, _)| v).collect();
            let distinct: BTreeSet<u64> = values.iter().copied().collect();
            assert_eq!(keys, distinct);
        }
    }

    #[test]
    fn test_unobserved_value() {
        let dist = Distribution::from_values(&[1, 2, 3]).unwrap();
        assert_eq!(dist.count(4), 0);
        assert_eq!(dist.probability(4), None);
    }

    #[test]
    fn test_entropy_uniform() {
        let values: Vec<u64> = (0..16).collect();
        let dist = Distribution::from_values(&values).unwrap();
        assert!((dist.entropy() - 4.0).abs() < EPSILON);

        let bits = Distribution::from_values(&[0, 1, 0, 1]).unwrap();
        assert!((bits.entropy() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let dist = Distribution::from_values(&[9, 3, 5, 3]).unwrap();
        let keys: Vec<u64> = dist.counts().map(|(v, _)| v).collect();
        assert_eq!(keys, vec![3, 5, 9]);
    }

    #[test]
    fn test_serialize() {
        let dist = Distribution::from_values(&[0, 0, 1, 1, 1]).unwrap();
        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["counts"]["1"], 3);
        assert_eq!(json["probabilities"]["0"], 0.4);
    }
}
