use rand::Rng;

use crate::activation::sigmoid;

/// A single sigmoid neuron.
///
/// `weights` and `previous_update` always have the same length: the input
/// count of the owning layer.
#[derive(Debug, Clone)]
pub struct Unit {
    weights: Vec<f64>,
    previous_update: Vec<f64>,
    bias: f64,
    output: f64,
}

impl Unit {
    /// Draws the bias and every weight uniformly from [-1, 1).
    pub fn random<R: Rng + ?Sized>(input_count: usize, rng: &mut R) -> Unit {
        let bias = rng.gen_range(-1.0..1.0);
        let weights = (0..input_count).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Unit::from_parameters(weights, bias)
    }

    /// Builds a unit with known parameters and a zeroed momentum history.
    pub fn from_parameters(weights: Vec<f64>, bias: f64) -> Unit {
        let previous_update = vec![0.0; weights.len()];
        Unit {
            weights,
            previous_update,
            bias,
            output: 0.0,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn previous_update(&self) -> &[f64] {
        &self.previous_update
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Last activated value. Zero until the first `activate` call.
    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    pub fn activate(&mut self, weighted_sum: f64) {
        self.output = sigmoid(weighted_sum);
    }

    /// bias + Σ weight[i]·input[i]
    pub(crate) fn weighted_sum(&self, input: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(input.iter())
            .fold(self.bias, |acc, (w, x)| acc + w * x)
    }

    /// Applies the momentum delta rule for one training step.
    ///
    /// Returns Σ weight[i]·neuron_error over the *corrected* weights, which the
    /// caller folds into the error carried to the layer upstream.
    pub(crate) fn correct(
        &mut self,
        input: &[f64],
        neuron_error: f64,
        learning_rate: f64,
        momentum: f64,
    ) -> f64 {
        let neuron_learn = learning_rate * neuron_error;
        self.bias += neuron_learn;

        let mut carried = 0.0;
        for ((weight, previous), x) in self
            .weights
            .iter_mut()
            .zip(self.previous_update.iter_mut())
            .zip(input.iter())
        {
            let delta = neuron_learn * x + *previous * momentum;
            *weight += delta;
            *previous = delta;
            carried += *weight * neuron_error;
        }
        carried
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_unit_has_parallel_vectors_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let unit = Unit::random(5, &mut rng);
        assert_eq!(unit.weights().len(), 5);
        assert_eq!(unit.previous_update(), &[0.0; 5]);
        assert!(unit.weights().iter().all(|w| (-1.0..1.0).contains(w)));
        assert!((-1.0..1.0).contains(&unit.bias()));
    }

    #[test]
    fn same_seed_gives_same_parameters() {
        let a = Unit::random(3, &mut StdRng::seed_from_u64(42));
        let b = Unit::random(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.bias(), b.bias());
    }

    #[test]
    fn activate_stores_sigmoid() {
        let mut unit = Unit::from_parameters(vec![0.5, 0.5], 0.0);
        let sum = unit.weighted_sum(&[1.0, 1.0]);
        assert_relative_eq!(sum, 1.0);
        unit.activate(sum);
        assert_relative_eq!(unit.output(), 0.7310585786300049, epsilon = 1e-12);
    }

    #[test]
    fn correct_applies_momentum_and_records_delta() {
        let mut unit = Unit::from_parameters(vec![0.0, 1.0], 0.0);

        let carried = unit.correct(&[1.0, 0.5], 0.5, 1.0, 0.0);
        assert_relative_eq!(unit.bias(), 0.5);
        assert_eq!(unit.weights(), &[0.5, 1.25]);
        assert_eq!(unit.previous_update(), &[0.5, 0.25]);
        // (0.5 + 1.25) * 0.5
        assert_relative_eq!(carried, 0.875);

        unit.correct(&[1.0, 0.5], 0.0, 1.0, 0.5);
        assert_eq!(unit.weights(), &[0.75, 1.375]);
        assert_eq!(unit.previous_update(), &[0.25, 0.125]);
        assert_relative_eq!(unit.bias(), 0.5);
    }
}
