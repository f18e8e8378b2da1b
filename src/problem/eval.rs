//! Objective function evaluation dispatch.

use super::Benchmark;
use std::f64::consts::{E, PI};

impl Benchmark {
    /// Evaluates the objective for a solution vector.
    ///
    /// Returns NaN only for the invalid zero-dimension case; legitimate
    /// fitness values may be arbitrarily large or small but are never NaN.
    /// The pairwise-term variants (Rosenbrock through Egg Holder) sum zero
    /// terms when `x.len() == 1` and yield `0.0`.
    pub fn evaluate(self, x: &[f64]) -> f64 {
        let m = x.len();
        if m == 0 {
            return f64::NAN;
        }

        match self {
            Benchmark::Schwefel => {
                let sum: f64 = x.iter().map(|&xi| -xi * xi.abs().sqrt().sin()).sum();
                418.9829 * m as f64 + sum
            }

            Benchmark::DeJong1 => x.iter().map(|&xi| xi * xi).sum(),

            Benchmark::Rosenbrock => x
                .windows(2)
                .map(|w| {
                    let a = w[0] * w[0] - w[1];
                    let b = 1.0 - w[0];
                    100.0 * a * a + b * b
                })
                .sum(),

            Benchmark::Rastrigin => {
                let sum: f64 = x
                    .iter()
                    .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
                    .sum();
                10.0 * m as f64 + sum
            }

            Benchmark::Griewangk => {
                let mut sum = 0.0;
                let mut prod = 1.0;
                for (i, &xi) in x.iter().enumerate() {
                    sum += xi * xi / 4000.0;
                    prod *= (xi / ((i + 1) as f64).sqrt()).cos();
                }
                1.0 + sum - prod
            }

            Benchmark::SineEnvelopeSineWave => {
                let sum: f64 = x
                    .windows(2)
                    .map(|w| {
                        let a = w[0] * w[0] + w[1] * w[1];
                        let num = (a - 0.5).sin().powi(2);
                        let den = (1.0 + 0.001 * a).powi(2);
                        0.5 + num / den
                    })
                    .sum();
                -sum
            }

            Benchmark::StretchVSineWave => x
                .windows(2)
                .map(|w| {
                    let a = w[0] * w[0] + w[1] * w[1];
                    let term = a.powf(0.25) * (50.0 * a.powf(0.1)).sin().powi(2) + 1.0;
                    term * term
                })
                .sum(),

            Benchmark::AckleyOne => x
                .windows(2)
                .map(|w| {
                    let a = (w[0] * w[0] + w[1] * w[1]).sqrt();
                    (-0.2f64).exp() * a + 3.0 * ((2.0 * w[0]).cos() + (2.0 * w[1]).sin())
                })
                .sum(),

            Benchmark::AckleyTwo => x
                .windows(2)
                .map(|w| {
                    let a = ((w[0] * w[0] + w[1] * w[1]) / 2.0).sqrt();
                    20.0 + E
                        - 20.0 * (0.2 * a).exp()
                        - (0.5 * ((2.0 * PI * w[0]).cos() + (2.0 * PI * w[1]).cos())).exp()
                })
                .sum(),

            Benchmark::EggHolder => x
                .windows(2)
                .map(|w| {
                    let (xi, xj) = (w[0], w[1]);
                    let t1 = -xi * (xi - xj - 47.0).abs().sqrt().sin();
                    let t2 = -(xj + 47.0) * (xj + 47.0 + xi / 2.0).abs().sqrt().sin();
                    t1 + t2
                })
                .sum(),
        }
    }
}
