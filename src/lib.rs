//! A single-layer perceptron classifier for flattened grayscale images.
//!
//! - One sigmoid neuron per class, trained with online one-vs-all updates
//! - Epoch loop with per-epoch accuracy reporting through an observer
//! - CSV loaders, min-max scaling and a CSV result writer

pub mod activations;
pub mod config;
pub mod datasets;
pub mod metrics;
pub mod neuron;
pub mod output;
pub mod perceptron;
pub mod trainer;
pub mod utils;

pub use activations::{sigmoid, ActivationKind};
pub use config::PerceptronConfig;
pub use datasets::{
    features_only, load_rows, load_rows_from_reader, normalize, normalize_features, one_hot,
    split_labeled, Example,
};
pub use metrics::{accuracy, confusion_matrix};
pub use neuron::Neuron;
pub use output::{write_predictions, write_predictions_to};
pub use perceptron::{index_max_element, Initializer, Perceptron};
pub use trainer::{epoch_line, EpochObserver, EpochReport, LogObserver, Trainer, TrainingHistory};
pub use utils::{confusion_table, summary_table};
