//! Metrics for evaluating a trained perceptron on labeled examples.
use crate::datasets::Example;
use crate::perceptron::Perceptron;

/// Accuracy
pub fn accuracy(perceptron: &Perceptron, examples: &[Example]) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let correct = examples
        .iter()
        .filter(|e| perceptron.class_number(&e.features) == e.label)
        .count();
    correct as f64 / examples.len() as f64
}

/// Confusion matrix indexed `[true][predicted]`. Labels outside `num_classes` are skipped.
pub fn confusion_matrix(perceptron: &Perceptron, examples: &[Example], num_classes: usize) -> Vec<Vec<usize>> {
    let mut cm = vec![vec![0; num_classes]; num_classes];
    for example in examples {
        let pred_class = perceptron.class_number(&example.features);
        if example.label < num_classes && pred_class < num_classes {
            cm[example.label][pred_class] += 1;
        }
    }
    cm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained() -> Perceptron {
        let mut p = Perceptron::new(2, 2);
        p.update_weights(&[1.0, 0.0], 0, 1.0, 1.0);
        p.update_weights(&[0.0, 1.0], 1, 1.0, 1.0);
        p
    }

    #[test]
    fn accuracy_counts_matches() {
        let p = trained();
        let data = vec![
            Example::new(0, vec![1.0, 0.0]),
            Example::new(1, vec![0.0, 1.0]),
            Example::new(1, vec![1.0, 0.0]),
            Example::new(0, vec![0.0, 1.0]),
        ];
        assert_eq!(accuracy(&p, &data), 0.5);
        assert_eq!(accuracy(&p, &[]), 0.0);
    }

    #[test]
    fn confusion_matrix_rows_are_true_labels() {
        let p = trained();
        let data = vec![
            Example::new(0, vec![1.0, 0.0]),
            Example::new(0, vec![0.0, 1.0]),
            Example::new(1, vec![0.0, 1.0]),
        ];
        assert_eq!(confusion_matrix(&p, &data, 2), vec![vec![1, 1], vec![0, 1]]);
    }
}
