//! Small helpers that live next to the solver: base64 encoded `f64` arrays and a couple
//! of trivial string/number functions used to smoke test bindings.
pub mod demo_functions;
pub mod float_array_codec;
