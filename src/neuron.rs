//! A single linear unit with a bias and one weight per input feature.
use crate::activations::ActivationKind;

/// One class's discriminant: `act(w·x - bias)`.
///
/// The weight buffer is sized at construction and only ever changed through
/// [`Neuron::update_weights`].
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    bias: f64,
    weights: Vec<f64>,
    activation: ActivationKind,
}

impl Neuron {
    /// Zero weights, zero bias, sigmoid activation.
    pub fn new(num_inputs: usize) -> Self {
        Self::from_parts(vec![0.0; num_inputs], 0.0, ActivationKind::Sigmoid)
    }

    pub fn from_parts(weights: Vec<f64>, bias: f64, activation: ActivationKind) -> Self {
        Self {
            bias,
            weights,
            activation,
        }
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn activation(&self) -> ActivationKind {
        self.activation
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Computes `act(sum(w[i] * x[i]) - bias)`.
    ///
    /// `inputs` must have exactly one value per weight; a mismatch is a
    /// programmer error and panics.
    pub fn activate(&self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.weights.len(), "input width mismatch");
        let z = self
            .weights
            .iter()
            .enumerate()
            .fold(-self.bias, |sum, (i, &w)| sum + w * inputs[i]);
        self.activation.apply(z)
    }

    /// Moves the neuron along `delta` (target - predicted):
    /// `bias -= lr * delta`, `w[i] += lr * delta * x[i]`.
    pub fn update_weights(&mut self, inputs: &[f64], learning_rate: f64, delta: f64) {
        debug_assert_eq!(inputs.len(), self.weights.len(), "input width mismatch");
        let step = learning_rate * delta;
        self.bias -= step;
        for (i, w) in self.weights.iter_mut().enumerate() {
            *w += step * inputs[i];
        }
    }
}
