//! Epoch-level training loop for a [`Perceptron`].
use crate::datasets::{one_hot, Example};
use crate::perceptron::{index_max_element, Perceptron};
use log::{debug, info};

/// Outcome of one pass over the training set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub correct: usize,
    pub total: usize,
}

impl EpochReport {
    /// Fraction of rows classified correctly before their update; 0 for an empty pass.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Receives a report after every epoch.
pub trait EpochObserver {
    fn on_epoch(&mut self, report: &EpochReport);
}

impl<F: FnMut(&EpochReport)> EpochObserver for F {
    fn on_epoch(&mut self, report: &EpochReport) {
        self(report)
    }
}

/// Default observer: one `info!` line per epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

/// The progress line [`LogObserver`] emits for one epoch.
pub fn epoch_line(report: &EpochReport) -> String {
    format!("Epoch: {}; Right recognized: {:.6}", report.epoch, report.accuracy())
}

impl EpochObserver for LogObserver {
    fn on_epoch(&mut self, report: &EpochReport) {
        info!("{}", epoch_line(report));
    }
}

/// Every epoch report of a run, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub epochs: Vec<EpochReport>,
}

impl TrainingHistory {
    pub fn last(&self) -> Option<&EpochReport> {
        self.epochs.last()
    }

    pub fn final_accuracy(&self) -> Option<f64> {
        self.last().map(EpochReport::accuracy)
    }
}

/// Drives sequential online training of a borrowed perceptron.
pub struct Trainer<'a> {
    perceptron: &'a mut Perceptron,
    learning_rate: f64,
    observer: Box<dyn EpochObserver + 'a>,
}

impl<'a> Trainer<'a> {
    pub fn new(perceptron: &'a mut Perceptron, learning_rate: f64) -> Self {
        Self {
            perceptron,
            learning_rate,
            observer: Box::new(LogObserver),
        }
    }

    /// Replaces the default logging observer.
    pub fn with_observer<O: EpochObserver + 'a>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Runs exactly `max_epochs` passes over `train_data`; no early stopping.
    pub fn train(&mut self, train_data: &[Example], max_epochs: usize) -> TrainingHistory {
        let mut history = TrainingHistory::default();
        for epoch in 0..max_epochs {
            let correct = self.train_epoch(train_data, epoch);
            let report = EpochReport {
                epoch,
                correct,
                total: train_data.len(),
            };
            self.observer.on_epoch(&report);
            history.epochs.push(report);
        }
        history
    }

    /// One pass in row order. Returns how many rows were classified correctly
    /// before their own update.
    ///
    /// All class deltas of a row come from a single activation snapshot taken
    /// before any neuron of that row is touched. Rows are applied one after
    /// another, so row `n + 1` sees the weights left by row `n`.
    pub fn train_epoch(&mut self, train_data: &[Example], epoch: usize) -> usize {
        let num_classes = self.perceptron.num_classes();
        let mut right_recognized = 0;
        for example in train_data {
            let activation_result = self.perceptron.activate(&example.features);
            if index_max_element(&activation_result) == example.label {
                right_recognized += 1;
            }

            let target = one_hot(example.label, num_classes);
            for (class_number, (&t, &r)) in target.iter().zip(&activation_result).enumerate() {
                let delta = t - r;
                if delta != 0.0 {
                    self.perceptron
                        .update_weights(&example.features, class_number, delta, self.learning_rate);
                }
            }
        }
        debug!("epoch {}: {}/{} right", epoch, right_recognized, train_data.len());
        right_recognized
    }
}
