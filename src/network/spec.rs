use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::network::network::Network;

/// Architecture of a network, independent of any trained weights.
///
/// Only the topology is stored; building a `Network` from a spec always
/// draws fresh parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_count: usize,
    pub output_count: usize,
    /// Neuron count of each hidden layer, input side first.
    #[serde(default)]
    pub hidden_layers: Vec<usize>,
}

impl NetworkSpec {
    pub fn new(input_count: usize, output_count: usize, hidden_layers: Vec<usize>) -> Self {
        NetworkSpec {
            input_count,
            output_count,
            hidden_layers,
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Network {
        Network::with_rng(self.input_count, self.output_count, &self.hidden_layers, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
