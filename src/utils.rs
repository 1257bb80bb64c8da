#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

#[cfg(feature = "python-bindings")]
use crate::rhythm::core::{params::OscillatorParams, resetting::ResettingMethod};

#[cfg(feature = "python-bindings")]
pub fn extract_resetting_method(resetting: Option<&str>) -> PyResult<ResettingMethod> {
    let name = resetting.unwrap_or("fixed").to_lowercase();
    let method = match name.as_str() {
        "fixed" | "fixed_length" => ResettingMethod::fixed_length(),
        "variable" | "variable_length" => ResettingMethod::variable_length(),
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid resetting method {:?} (expected 'fixed' or 'variable')",
                other
            )));
        }
    };
    Ok(method)
}

#[cfg(feature = "python-bindings")]
pub fn build_oscillator_params(
    alpha: f64, beta: f64, t0: f64, w0: f64, resetting: Option<&str>,
) -> PyResult<OscillatorParams> {
    let method = extract_resetting_method(resetting)?;

    // OscillatorParams::new -> ParamResult<OscillatorParams> -> PyErr
    let params = OscillatorParams::new(alpha, beta, t0, w0, method)?;

    Ok(params)
}
