//! Benchmark variant tags, names, and default domains.

use serde::{Deserialize, Serialize};

/// One of the ten benchmark objective functions.
///
/// An immutable tag; the formula table lives in the evaluation dispatch so
/// an unknown variant is impossible by construction.
///
/// # Examples
///
/// ```
/// use stochbench::problem::Benchmark;
///
/// let f = Benchmark::DeJong1;
/// assert_eq!(f.evaluate(&[0.0, 0.0, 0.0]), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Benchmark {
    Schwefel,
    /// De Jong's first function (the sphere).
    #[serde(alias = "sphere", alias = "dejong1")]
    DeJong1,
    Rosenbrock,
    Rastrigin,
    #[serde(alias = "griewank")]
    Griewangk,
    #[serde(alias = "sine_envelope")]
    SineEnvelopeSineWave,
    #[serde(alias = "stretch_v")]
    StretchVSineWave,
    #[serde(alias = "ackley1")]
    AckleyOne,
    #[serde(alias = "ackley2")]
    AckleyTwo,
    #[serde(alias = "eggholder")]
    EggHolder,
}

impl Benchmark {
    /// All ten variants, in catalog order (indices 1..=10).
    pub const ALL: [Benchmark; 10] = [
        Benchmark::Schwefel,
        Benchmark::DeJong1,
        Benchmark::Rosenbrock,
        Benchmark::Rastrigin,
        Benchmark::Griewangk,
        Benchmark::SineEnvelopeSineWave,
        Benchmark::StretchVSineWave,
        Benchmark::AckleyOne,
        Benchmark::AckleyTwo,
        Benchmark::EggHolder,
    ];

    /// Resolves a 1-based catalog index.
    pub fn from_index(index: usize) -> Option<Benchmark> {
        if (1..=Self::ALL.len()).contains(&index) {
            Some(Self::ALL[index - 1])
        } else {
            None
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Benchmark::Schwefel => "Schwefel",
            Benchmark::DeJong1 => "De Jong 1",
            Benchmark::Rosenbrock => "Rosenbrock",
            Benchmark::Rastrigin => "Rastrigin",
            Benchmark::Griewangk => "Griewangk",
            Benchmark::SineEnvelopeSineWave => "Sine Envelope Sine Wave",
            Benchmark::StretchVSineWave => "Stretch V Sine Wave",
            Benchmark::AckleyOne => "Ackley One",
            Benchmark::AckleyTwo => "Ackley Two",
            Benchmark::EggHolder => "Egg Holder",
        }
    }

    /// Short token used in tabular output.
    pub fn short_name(self) -> &'static str {
        match self {
            Benchmark::Schwefel => "Schwefel",
            Benchmark::DeJong1 => "DeJong1",
            Benchmark::Rosenbrock => "Rosenbrock",
            Benchmark::Rastrigin => "Rastrigin",
            Benchmark::Griewangk => "Griewank",
            Benchmark::SineEnvelopeSineWave => "SineEnv",
            Benchmark::StretchVSineWave => "StretchV",
            Benchmark::AckleyOne => "Ackley1",
            Benchmark::AckleyTwo => "Ackley2",
            Benchmark::EggHolder => "EggHolder",
        }
    }

    /// Standard default domain `(min, max)` for population-style callers.
    ///
    /// The search algorithms take bounds explicitly and never consult this.
    pub fn recommended_range(self) -> (f64, f64) {
        match self {
            Benchmark::Schwefel => (-512.0, 512.0),
            Benchmark::DeJong1 => (-100.0, 100.0),
            Benchmark::Rosenbrock => (-100.0, 100.0),
            Benchmark::Rastrigin => (-30.0, 30.0),
            Benchmark::Griewangk => (-500.0, 500.0),
            Benchmark::SineEnvelopeSineWave => (-30.0, 30.0),
            Benchmark::StretchVSineWave => (-30.0, 30.0),
            Benchmark::AckleyOne => (-32.0, 32.0),
            Benchmark::AckleyTwo => (-32.0, 32.0),
            Benchmark::EggHolder => (-500.0, 500.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_indices() {
        assert_eq!(Benchmark::from_index(1), Some(Benchmark::Schwefel));
        assert_eq!(Benchmark::from_index(2), Some(Benchmark::DeJong1));
        assert_eq!(Benchmark::from_index(10), Some(Benchmark::EggHolder));
        assert_eq!(Benchmark::from_index(0), None);
        assert_eq!(Benchmark::from_index(11), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Benchmark::ALL.iter().enumerate() {
            for b in &Benchmark::ALL[i + 1..] {
                assert_ne!(a.short_name(), b.short_name());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_recommended_range_is_ordered() {
        for f in Benchmark::ALL {
            let (lo, hi) = f.recommended_range();
            assert!(lo < hi, "{}: {lo} >= {hi}", f.name());
        }
    }

    #[test]
    fn test_serde_names_and_aliases() {
        let f: Benchmark = serde_json::from_str("\"schwefel\"").unwrap();
        assert_eq!(f, Benchmark::Schwefel);
        let f: Benchmark = serde_json::from_str("\"sphere\"").unwrap();
        assert_eq!(f, Benchmark::DeJong1);
        let f: Benchmark = serde_json::from_str("\"ackley2\"").unwrap();
        assert_eq!(f, Benchmark::AckleyTwo);
        let f: Benchmark = serde_json::from_str("\"egg_holder\"").unwrap();
        assert_eq!(f, Benchmark::EggHolder);
    }
}
