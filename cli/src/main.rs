// cli/src/main.rs
use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::info;
use primitive_perceptron::{
    accuracy, confusion_matrix, confusion_table, features_only, load_rows, normalize,
    normalize_features, split_labeled, summary_table, write_predictions, Initializer, Perceptron,
    PerceptronConfig, Trainer,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Init {
    Zeros,
    Uniform,
}

#[derive(Parser, Debug)]
#[command(
    name = "perceptron",
    about = "Train a single-layer perceptron on labeled CSV images and label a test set"
)]
struct Args {
    /// Training CSV: header line, then `label,pixel0,..` rows (.gz accepted)
    #[arg(long, value_name = "PATH")]
    train: PathBuf,

    /// CSV to label after training
    #[arg(long, value_name = "PATH")]
    test: Option<PathBuf>,

    /// Where predicted labels are written
    #[arg(long, value_name = "PATH", default_value = "results.csv")]
    output: PathBuf,

    /// Max training rows to read (0 = all)
    #[arg(long, default_value_t = 10000)]
    train_limit: usize,

    /// Max test rows to read (0 = all)
    #[arg(long, default_value_t = 0)]
    test_limit: usize,

    /// Image width in pixels
    #[arg(long, default_value_t = 28)]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 28)]
    height: usize,

    /// Number of classes
    #[arg(long, default_value_t = 10)]
    classes: usize,

    #[arg(long, default_value_t = 0.001)]
    learning_rate: f64,

    #[arg(long, default_value_t = 10)]
    epochs: usize,

    /// Raw feature maximum used for scaling (255 for 8-bit pixels)
    #[arg(long, default_value_t = 255.0)]
    max_value: f64,

    /// The test CSV has a label column; report accuracy on it
    #[arg(long, default_value_t = false)]
    test_has_labels: bool,

    /// Weight initialisation
    #[arg(long, value_enum, default_value_t = Init::Zeros)]
    init: Init,

    /// Half-width of the uniform initialisation range
    #[arg(long, default_value_t = 0.01)]
    init_limit: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn limit(n: usize) -> Option<usize> {
    (n > 0).then_some(n)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = PerceptronConfig::for_images(
        args.classes,
        args.width,
        args.height,
        args.learning_rate,
        args.epochs,
    )?;
    config.validate()?;
    if !(args.max_value.is_finite() && args.max_value > 0.0) {
        return Err(anyhow!("Max value must be positive, got {}", args.max_value));
    }

    let mut rows = load_rows(&args.train, limit(args.train_limit))?;
    normalize(&mut rows, args.max_value);
    let train = split_labeled(rows, config.num_inputs, config.num_classes)?;

    let init = match args.init {
        Init::Zeros => Initializer::Zeros,
        Init::Uniform => Initializer::Uniform {
            limit: args.init_limit,
            seed: args.seed,
        },
    };
    let mut perceptron = Perceptron::with_initializer(config.num_classes, config.num_inputs, &init);
    info!("{}", perceptron);

    let history = Trainer::new(&mut perceptron, config.learning_rate).train(&train, config.max_epochs);
    info!("Training summary:\n{}", summary_table(&history.epochs));

    let Some(test_path) = args.test else {
        return Ok(());
    };
    let mut rows = load_rows(&test_path, limit(args.test_limit))?;
    let features = if args.test_has_labels {
        normalize(&mut rows, args.max_value);
        let test = split_labeled(rows, config.num_inputs, config.num_classes)?;
        info!("Test accuracy: {:.2}%", accuracy(&perceptron, &test) * 100.0);
        let cm = confusion_matrix(&perceptron, &test, config.num_classes);
        info!("Confusion matrix:\n{}", confusion_table(&cm));
        test.into_iter().map(|e| e.features).collect()
    } else {
        normalize_features(&mut rows, args.max_value);
        features_only(rows, config.num_inputs)?
    };

    let labels = perceptron.recognize(&features);
    write_predictions(&args.output, &labels)?;
    Ok(())
}
