//! A flat bank of neurons, one per class, and the recognizer built on it.
use crate::activations::ActivationKind;
use crate::neuron::Neuron;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How neuron weights are filled at construction. Biases always start at 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum Initializer {
    #[default]
    Zeros,
    /// U(-limit, limit) from a seeded RNG, so runs are reproducible.
    Uniform { limit: f64, seed: u64 },
}

/// Index of the largest value; ties go to the lowest index.
///
/// Only a strictly greater value replaces the current maximum. Returns 0 for
/// an empty slice.
pub fn index_max_element(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0usize, |max_i, (i, &v)| if v > values[max_i] { i } else { max_i })
}

/// Single-layer perceptron. Neuron `i` scores class `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    neurons: Vec<Neuron>,
}

impl Perceptron {
    /// All-zero perceptron with `num_classes` sigmoid neurons of `num_inputs` weights.
    pub fn new(num_classes: usize, num_inputs: usize) -> Self {
        Self::with_initializer(num_classes, num_inputs, &Initializer::Zeros)
    }

    pub fn with_initializer(num_classes: usize, num_inputs: usize, init: &Initializer) -> Self {
        let neurons = match *init {
            Initializer::Zeros => (0..num_classes).map(|_| Neuron::new(num_inputs)).collect(),
            Initializer::Uniform { limit, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..num_classes)
                    .map(|_| {
                        let weights = (0..num_inputs)
                            .map(|_| if limit > 0.0 { rng.gen_range(-limit..limit) } else { 0.0 })
                            .collect();
                        Neuron::from_parts(weights, 0.0, ActivationKind::Sigmoid)
                    })
                    .collect()
            }
        };
        Self { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_classes(&self) -> usize {
        self.neurons.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::num_inputs)
    }

    /// One independent sigmoid score per class, in class order. Not a distribution.
    pub fn activate(&self, inputs: &[f64]) -> Vec<f64> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    /// Highest-scoring class for a feature vector.
    pub fn class_number(&self, inputs: &[f64]) -> usize {
        index_max_element(&self.activate(inputs))
    }

    /// Applies `delta` to the neuron of `class_number`. Panics if the class is out of range.
    pub fn update_weights(&mut self, inputs: &[f64], class_number: usize, delta: f64, learning_rate: f64) {
        self.neurons[class_number].update_weights(inputs, learning_rate, delta);
    }

    /// Labels each feature row (no label column), preserving order.
    pub fn recognize<R: AsRef<[f64]>>(&self, rows: &[R]) -> Vec<usize> {
        rows.iter().map(|row| self.class_number(row.as_ref())).collect()
    }
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activation = self
            .neurons
            .first()
            .map_or(ActivationKind::default(), Neuron::activation);
        write!(
            f,
            "Perceptron: {} inputs -> {} classes ({})",
            self.num_inputs(),
            self.num_classes(),
            activation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_resolve_to_the_lowest_index() {
        assert_eq!(index_max_element(&[0.2, 0.9, 0.9, 0.1]), 1);
        assert_eq!(index_max_element(&[0.5, 0.5]), 0);
        assert_eq!(index_max_element(&[0.1, 0.2, 0.3]), 2);
        // the running max must be tracked, not just the first element
        assert_eq!(index_max_element(&[0.1, 0.8, 0.3, 0.5]), 1);
        assert_eq!(index_max_element(&[]), 0);
    }

    #[test]
    fn fresh_perceptron_scores_one_half_everywhere() {
        let p = Perceptron::new(4, 3);
        assert_eq!(p.num_classes(), 4);
        assert_eq!(p.num_inputs(), 3);
        assert_eq!(p.activate(&[0.3, 0.7, 1.0]), vec![0.5; 4]);
        assert_eq!(p.class_number(&[0.3, 0.7, 1.0]), 0);
    }

    #[test]
    fn update_touches_only_the_selected_neuron() {
        let mut p = Perceptron::new(3, 2);
        p.update_weights(&[1.0, 0.5], 2, 1.0, 0.5);
        assert_eq!(p.neurons()[0], Neuron::new(2));
        assert_eq!(p.neurons()[1], Neuron::new(2));
        assert_eq!(p.neurons()[2].weights(), &[0.5, 0.25]);
        assert_eq!(p.neurons()[2].bias(), -0.5);
        assert_eq!(p.class_number(&[1.0, 0.5]), 2);
    }

    #[test]
    #[should_panic]
    fn update_out_of_range_class_panics() {
        let mut p = Perceptron::new(2, 2);
        p.update_weights(&[1.0, 1.0], 2, 0.5, 0.1);
    }

    #[test]
    fn recognize_returns_one_label_per_row() {
        let mut p = Perceptron::new(3, 2);
        p.update_weights(&[0.0, 1.0], 1, 1.0, 1.0);
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(p.recognize(&empty).is_empty());

        let rows = vec![vec![0.0, 1.0], vec![0.0, 0.0], vec![0.2, 0.9], vec![1.0, 1.0]];
        let labels = p.recognize(&rows);
        assert_eq!(labels.len(), rows.len());
        assert!(labels.iter().all(|&l| l < p.num_classes()));
        assert_eq!(labels[0], 1);
    }

    #[test]
    fn uniform_init_is_seeded_and_bounded() {
        let init = Initializer::Uniform { limit: 0.05, seed: 7 };
        let a = Perceptron::with_initializer(3, 10, &init);
        let b = Perceptron::with_initializer(3, 10, &init);
        assert_eq!(a, b);
        for n in a.neurons() {
            assert_eq!(n.bias(), 0.0);
            assert!(n.weights().iter().all(|w| w.abs() < 0.05));
        }
        assert_ne!(a, Perceptron::new(3, 10));
    }

    #[test]
    fn display_summarises_shape() {
        let p = Perceptron::new(10, 784);
        assert_eq!(p.to_string(), "Perceptron: 784 inputs -> 10 classes (sigmoid)");
    }
}
