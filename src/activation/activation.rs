/// Logistic sigmoid: 1 / (1 + e^-x).
///
/// Saturates towards 0 or 1 for large |x| instead of overflowing, so any
/// finite input maps into the open interval (0, 1) up to f64 rounding.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed in terms of its *output* `y`:
/// σ'(x) = y·(1 − y) where y = σ(x).
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
