use rand::Rng;

use crate::error::{Error, Result};
use crate::layers::unit::Unit;

/// A fully connected group of units that all read the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    units: Vec<Unit>,
    input: Vec<f64>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(input_count: usize, neuron_count: usize, rng: &mut R) -> Layer {
        let units = (0..neuron_count)
            .map(|_| Unit::random(input_count, rng))
            .collect();
        Layer {
            units,
            input: vec![0.0; input_count],
        }
    }

    /// Builds a layer from pre-made units. Every unit must have
    /// `input_count` weights.
    pub fn from_units(input_count: usize, units: Vec<Unit>) -> Result<Layer> {
        if let Some(unit) = units.iter().find(|u| u.input_count() != input_count) {
            return Err(Error::InputLengthMismatch {
                expected: input_count,
                actual: unit.input_count(),
            });
        }
        Ok(Layer {
            units,
            input: vec![0.0; input_count],
        })
    }

    pub fn neuron_count(&self) -> usize {
        self.units.len()
    }

    pub fn input_count(&self) -> usize {
        self.input.len()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.input_count() {
            return Err(Error::InputLengthMismatch {
                expected: self.input_count(),
                actual: values.len(),
            });
        }
        self.input.copy_from_slice(values);
        Ok(())
    }

    /// Activates every unit from the current input buffer.
    pub fn calculate(&mut self) {
        let input = &self.input;
        for unit in &mut self.units {
            let sum = unit.weighted_sum(input);
            unit.activate(sum);
        }
    }

    pub fn output(&self) -> Vec<f64> {
        self.units.iter().map(Unit::output).collect()
    }

    /// Runs the delta rule over every unit, in order.
    ///
    /// `neuron_error(n, output)` supplies the error signal for unit `n`. The
    /// return value is the single scalar accumulated across all units and all
    /// their weights, handed to the next layer upstream.
    pub(crate) fn correct<F>(&mut self, learning_rate: f64, momentum: f64, mut neuron_error: F) -> f64
    where
        F: FnMut(usize, f64) -> f64,
    {
        let input = &self.input;
        self.units
            .iter_mut()
            .enumerate()
            .map(|(n, unit)| {
                let error = neuron_error(n, unit.output());
                unit.correct(input, error, learning_rate, momentum)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> Layer {
        Layer::from_units(
            2,
            vec![
                Unit::from_parameters(vec![0.5, -0.5], 0.1),
                Unit::from_parameters(vec![1.0, 2.0], -1.0),
                Unit::from_parameters(vec![0.0, 0.0], 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn shape_accessors() {
        let layer = Layer::new(4, 3, &mut StdRng::seed_from_u64(1));
        assert_eq!(layer.input_count(), 4);
        assert_eq!(layer.neuron_count(), 3);
        assert!(layer.units().iter().all(|u| u.weights().len() == 4));
    }

    #[test]
    fn set_input_rejects_wrong_length() {
        let mut layer = fixture();
        let err = layer.set_input(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, Error::InputLengthMismatch { expected: 2, actual: 3 });
        assert_eq!(layer.input(), &[0.0, 0.0]);
    }

    #[test]
    fn calculate_matches_direct_sigmoid() {
        let mut layer = fixture();
        layer.set_input(&[1.0, 0.5]).unwrap();
        layer.calculate();
        let out = layer.output();
        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[0], sigmoid(0.1 + 0.5 - 0.25));
        assert_relative_eq!(out[1], sigmoid(-1.0 + 1.0 + 1.0));
        assert_relative_eq!(out[2], 0.5);
    }

    #[test]
    fn from_units_rejects_ragged_units() {
        let err = Layer::from_units(2, vec![Unit::from_parameters(vec![1.0], 0.0)]).unwrap_err();
        assert_eq!(err, Error::InputLengthMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn correct_sums_carried_error_over_all_units() {
        let mut layer = Layer::from_units(
            1,
            vec![
                Unit::from_parameters(vec![1.0], 0.0),
                Unit::from_parameters(vec![2.0], 0.0),
            ],
        )
        .unwrap();
        layer.set_input(&[0.0]).unwrap();
        // Zero input leaves the weights unchanged, only the biases move.
        let carried = layer.correct(1.0, 0.0, |n, _| if n == 0 { 1.0 } else { 0.5 });
        assert_relative_eq!(carried, 1.0 * 1.0 + 2.0 * 0.5);
        assert_relative_eq!(layer.units()[0].bias(), 1.0);
        assert_relative_eq!(layer.units()[1].bias(), 0.5);
    }
}
