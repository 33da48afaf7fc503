//! Activation functions a neuron can be built with.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sigmoid: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Closed set of activation kinds, resolved once when a neuron is built.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivationKind {
    #[default]
    Sigmoid,
}

impl ActivationKind {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            ActivationKind::Sigmoid => sigmoid(x),
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationKind::Sigmoid => write!(f, "sigmoid"),
        }
    }
}

impl FromStr for ActivationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            other => Err(format!("unknown activation: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_symmetric_and_bounded() {
        for &x in &[0.1, 1.0, 5.0, 30.0] {
            assert_relative_eq!(sigmoid(x) + sigmoid(-x), 1.0, epsilon = 1e-12);
            assert!(sigmoid(x) > 0.5 && sigmoid(x) <= 1.0);
        }
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn kind_parses_and_prints() {
        let kind: ActivationKind = " Sigmoid ".parse().unwrap();
        assert_eq!(kind, ActivationKind::Sigmoid);
        assert_eq!(kind.to_string(), "sigmoid");
        assert!("relu".parse::<ActivationKind>().is_err());
        assert_eq!(kind.apply(0.0), 0.5);
    }
}
