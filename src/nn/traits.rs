//! Neural network traits for policy and value prediction.
//!
//! The network itself lives outside this crate (typically in Python). These
//! traits are the seam an implementation plugs into.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[layers, height, width]` for boards.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// One `height x width` layer, if `shape` is three-dimensional.
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&[f32]> {
        let [layers, height, width] = self.shape[..] else {
            return None;
        };
        let size = height * width;
        (index < layers).then(|| &self.tensor[index * size..(index + 1) * size])
    }
}

/// Combined policy-value network.
///
/// `predict` takes a canonical-form encoding (the mover is always +1) and
/// returns a policy over the full action space plus the mover's value
/// estimate in `[-1, 1]`.
pub trait PolicyValueNetwork: Send + Sync {
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32);

    /// Batch prediction for multiple states (optional optimization).
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<(Vec<f32>, f32)> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Uniform policy, zero value (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicyZeroValue {
    action_space_size: usize,
}

impl UniformPolicyZeroValue {
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyValueNetwork for UniformPolicyZeroValue {
    fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, f32) {
        if self.action_space_size == 0 {
            return (vec![], 0.0);
        }
        let prob = 1.0 / self.action_space_size as f32;
        (vec![prob; self.action_space_size], 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_layers() {
        let state = EncodedState::new((0..12).map(|v| v as f32).collect(), vec![3, 2, 2]);
        assert_eq!(state.len(), 12);
        assert_eq!(state.layer(0), Some(&[0.0, 1.0, 2.0, 3.0][..]));
        assert_eq!(state.layer(2), Some(&[8.0, 9.0, 10.0, 11.0][..]));
        assert_eq!(state.layer(3), None);

        let flat = EncodedState::new(vec![1.0, 2.0], vec![2]);
        assert_eq!(flat.layer(0), None);
    }

    #[test]
    fn test_uniform_policy_zero_value() {
        let net = UniformPolicyZeroValue::new(4);
        let encoded = EncodedState::new(vec![0.0; 4], vec![4]);
        let (policy, value) = net.predict(&encoded);

        assert_eq!(policy, vec![0.25; 4]);
        assert_eq!(value, 0.0);
        assert_eq!(net.predict_batch(&[encoded.clone(), encoded]).len(), 2);
    }

    #[test]
    fn test_uniform_policy_zero_actions() {
        let net = UniformPolicyZeroValue::default();
        let (policy, _) = net.predict(&EncodedState::new(vec![], vec![0]));
        assert!(policy.is_empty());
    }

    #[test]
    fn test_serialization() {
        let state = EncodedState::new(vec![1.0, -1.0], vec![2]);
        let json = serde_json::to_string(&state).unwrap();
        let back: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
