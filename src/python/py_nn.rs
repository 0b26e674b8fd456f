//! Neural network bridge for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::nn::{EncodedState, PolicyValueNetwork};

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    #[new]
    fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        Self(EncodedState::new(tensor, shape))
    }

    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python-implemented PolicyValueNetwork wrapper.
///
/// The callable receives an `EncodedState` and returns
/// `(policy: list[float], value: float)`.
#[pyclass(name = "PolicyValueNetwork")]
pub struct PyPolicyValueNetwork {
    callback: PyObject,
    action_space_size: usize,
}

#[pymethods]
impl PyPolicyValueNetwork {
    #[new]
    fn new(callback: PyObject, action_space_size: usize) -> Self {
        Self {
            callback,
            action_space_size,
        }
    }

    /// Call the network on an encoded state.
    fn predict(&self, py: Python<'_>, encoded: &PyEncodedState) -> PyResult<(Vec<f32>, f32)> {
        self.callback.call1(py, (encoded.clone(),))?.extract(py)
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        self.action_space_size
    }
}

impl PyPolicyValueNetwork {
    /// A second bridge to the same Python callable.
    pub(crate) fn from_handle(py: Python<'_>, handle: &Py<Self>) -> Self {
        let network = handle.borrow(py);
        Self {
            callback: network.callback.clone_ref(py),
            action_space_size: network.action_space_size,
        }
    }

    fn fallback_prediction(&self) -> (Vec<f32>, f32) {
        let size = self.action_space_size.max(1);
        (vec![1.0 / size as f32; self.action_space_size], 0.0)
    }
}

impl PolicyValueNetwork for PyPolicyValueNetwork {
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32) {
        Python::with_gil(|py| {
            let py_encoded = PyEncodedState(encoded.clone());
            match self.callback.call1(py, (py_encoded,)) {
                Ok(result) => match result.extract::<(Vec<f32>, f32)>(py) {
                    Ok(prediction) => prediction,
                    Err(e) => {
                        eprintln!("PolicyValueNetwork: failed to extract result: {e}");
                        self.fallback_prediction()
                    }
                },
                Err(e) => {
                    eprintln!("PolicyValueNetwork: predict() call failed: {e}");
                    self.fallback_prediction()
                }
            }
        })
    }
}

// SAFETY: the callback is only touched inside `Python::with_gil`, and
// `PyObject` reference counting is sound under the GIL. The remaining field
// is plain data.
//
// INVARIANT: any new method that accesses `self.callback` must hold the GIL.
unsafe impl Send for PyPolicyValueNetwork {}
unsafe impl Sync for PyPolicyValueNetwork {}
