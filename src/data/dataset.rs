use serde::{Deserialize, Serialize};

use crate::data::life::survives;

pub const PATTERN_COUNT: usize = 1 << 9;

/// One labelled training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

/// Cells of pattern `x`, most significant bit first.
pub fn pattern(x: usize) -> [f64; 9] {
    let mut cells = [0.0; 9];
    for (i, cell) in cells.iter_mut().enumerate() {
        if (x >> (8 - i)) & 1 == 1 {
            *cell = 1.0;
        }
    }
    cells
}

/// Every 3x3 neighbourhood, labelled with the Game of Life rule.
pub fn life_dataset() -> Vec<Sample> {
    (0..PATTERN_COUNT)
        .map(|x| {
            let cells = pattern(x);
            Sample {
                input: cells.to_vec(),
                expected: vec![survives(&cells)],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_patterns_in_order() {
        let samples = life_dataset();
        assert_eq!(samples.len(), 512);
        assert_eq!(samples[0].input, vec![0.0; 9]);
        assert_eq!(samples[1].input, vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(samples[256].input[0], 1.0);
        assert_eq!(samples[511].input, vec![1.0; 9]);
    }

    #[test]
    fn labels_match_rule() {
        let samples = life_dataset();
        // 0b111_000_000: dead centre, three neighbours on the top row.
        assert_eq!(samples[0b111_000_000].expected, vec![1.0]);
        assert_eq!(samples[0].expected, vec![0.0]);
        assert_eq!(samples[511].expected, vec![0.0]);
    }

    #[test]
    fn live_label_count() {
        // Births: C(8,3) = 56. Survivals: C(8,2) + C(8,3) = 84.
        let live = life_dataset().iter().filter(|s| s.expected[0] == 1.0).count();
        assert_eq!(live, 140);
    }
}
