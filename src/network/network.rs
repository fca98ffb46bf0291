use rand::Rng;

use crate::activation::sigmoid_derivative;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;

/// A chain of hidden sigmoid layers ending in an output layer, trained online
/// with momentum backpropagation.
#[derive(Debug, Clone)]
pub struct Network {
    hidden_layers: Vec<Layer>,
    output_layer: Layer,
}

impl Network {
    /// Builds a randomly initialised network using the thread-local RNG.
    pub fn new(input_count: usize, output_count: usize, hidden_layer_sizes: &[usize]) -> Network {
        Network::with_rng(input_count, output_count, hidden_layer_sizes, &mut rand::thread_rng())
    }

    /// Builds a network drawing every weight and bias from `rng`.
    ///
    /// Each hidden layer takes the previous layer's neuron count as its input
    /// count, starting from `input_count`; the output layer follows the last
    /// hidden layer.
    pub fn with_rng<R: Rng + ?Sized>(
        input_count: usize,
        output_count: usize,
        hidden_layer_sizes: &[usize],
        rng: &mut R,
    ) -> Network {
        let mut current_input_count = input_count;
        let mut hidden_layers = Vec::with_capacity(hidden_layer_sizes.len());
        for &neuron_count in hidden_layer_sizes {
            hidden_layers.push(Layer::new(current_input_count, neuron_count, rng));
            current_input_count = neuron_count;
        }
        let output_layer = Layer::new(current_input_count, output_count, rng);

        tracing::debug!(
            input_count,
            output_count,
            hidden = ?hidden_layer_sizes,
            "network initialised"
        );

        Network {
            hidden_layers,
            output_layer,
        }
    }

    /// Assembles a network from existing layers, checking that each layer's
    /// neuron count feeds the next layer's input count.
    pub fn from_layers(hidden_layers: Vec<Layer>, output_layer: Layer) -> Result<Network> {
        let mut layers = hidden_layers.iter().chain(std::iter::once(&output_layer));
        if let Some(first) = layers.next() {
            let mut previous = first.neuron_count();
            for layer in layers {
                if layer.input_count() != previous {
                    return Err(Error::InputLengthMismatch {
                        expected: previous,
                        actual: layer.input_count(),
                    });
                }
                previous = layer.neuron_count();
            }
        }
        Ok(Network {
            hidden_layers,
            output_layer,
        })
    }

    pub fn input_count(&self) -> usize {
        self.hidden_layers
            .first()
            .unwrap_or(&self.output_layer)
            .input_count()
    }

    pub fn output_count(&self) -> usize {
        self.output_layer.neuron_count()
    }

    pub fn hidden_layers(&self) -> &[Layer] {
        &self.hidden_layers
    }

    pub fn output_layer(&self) -> &Layer {
        &self.output_layer
    }

    /// Output vector of the most recent forward pass.
    pub fn output(&self) -> Vec<f64> {
        self.output_layer.output()
    }

    /// Forward pass. Each layer's output becomes the next layer's input.
    pub fn propagate(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;

        let mut layer_input = input.to_vec();
        for layer in &mut self.hidden_layers {
            layer.set_input(&layer_input)?;
            layer.calculate();
            layer_input = layer.output();
        }

        self.output_layer.set_input(&layer_input)?;
        self.output_layer.calculate();

        Ok(self.output())
    }

    /// One online training step on a single example.
    ///
    /// Returns the signed sum of `expected[n] - output[n]` over the output
    /// units, measured before the correction. It is not a magnitude and is not
    /// bounded by 1.
    ///
    /// Hidden layers are corrected from last to first with a single scalar
    /// error per layer: every unit in a hidden layer receives the same
    /// carried error, scaled only by its own sigmoid derivative.
    pub fn train(
        &mut self,
        input: &[f64],
        expected_output: &[f64],
        learning_rate: f64,
        momentum: f64,
    ) -> Result<f64> {
        self.check_input(input)?;
        if expected_output.len() != self.output_count() {
            return Err(Error::OutputLengthMismatch {
                expected: self.output_count(),
                actual: expected_output.len(),
            });
        }

        self.propagate(input)?;

        let mut output_error = 0.0;
        let mut carried = self.output_layer.correct(learning_rate, momentum, |n, output| {
            let delta_error = expected_output[n] - output;
            output_error += delta_error;
            delta_error * sigmoid_derivative(output)
        });

        for layer in self.hidden_layers.iter_mut().rev() {
            let upstream = carried;
            carried = layer.correct(learning_rate, momentum, |_, output| {
                upstream * sigmoid_derivative(output)
            });
        }

        Ok(output_error)
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_count() {
            return Err(Error::InputLengthMismatch {
                expected: self.input_count(),
                actual: input.len(),
            });
        }
        Ok(())
    }
}
