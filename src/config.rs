//! Run-wide dimensions and hyperparameters, validated before any perceptron is built.
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptronConfig {
    pub num_classes: usize,
    /// Image width times height.
    pub num_inputs: usize,
    pub learning_rate: f64,
    pub max_epochs: usize,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            num_classes: 10,
            num_inputs: 28 * 28,
            learning_rate: 0.001,
            max_epochs: 10,
        }
    }
}

impl PerceptronConfig {
    /// Config for `width x height` images.
    pub fn for_images(
        num_classes: usize,
        width: usize,
        height: usize,
        learning_rate: f64,
        max_epochs: usize,
    ) -> Result<Self> {
        let num_inputs = width
            .checked_mul(height)
            .ok_or_else(|| anyhow!("Image size {}x{} overflows", width, height))?;
        Ok(Self {
            num_classes,
            num_inputs,
            learning_rate,
            max_epochs,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_classes == 0 {
            return Err(anyhow!("Number of classes must be positive"));
        }
        if self.num_inputs == 0 {
            return Err(anyhow!("Number of inputs (width x height) must be positive"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(anyhow!(
                "Learning rate must be in (0, 1], got {}",
                self.learning_rate
            ));
        }
        if self.max_epochs == 0 {
            return Err(anyhow!("Number of epochs must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PerceptronConfig::default();
        assert_eq!(config.num_inputs, 784);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = PerceptronConfig::default();
        let bad = [
            PerceptronConfig { num_classes: 0, ..base.clone() },
            PerceptronConfig { num_inputs: 0, ..base.clone() },
            PerceptronConfig { learning_rate: 0.0, ..base.clone() },
            PerceptronConfig { learning_rate: 1.5, ..base.clone() },
            PerceptronConfig { learning_rate: f64::NAN, ..base.clone() },
            PerceptronConfig { max_epochs: 0, ..base.clone() },
        ];
        for config in &bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
        assert!(PerceptronConfig { learning_rate: 1.0, ..base }.validate().is_ok());
    }

    #[test]
    fn image_dimensions_multiply() {
        let config = PerceptronConfig::for_images(2, 3, 4, 0.1, 1).unwrap();
        assert_eq!(config.num_inputs, 12);
        assert!(PerceptronConfig::for_images(2, usize::MAX, 2, 0.1, 1).is_err());
    }
}
