//! # Base64 encoded float arrays
//!
//! Arrays of `f64` travel as base64 text (standard alphabet, padded) of their little-endian
//! bytes. Trailing bytes that do not make a whole `f64` are dropped on decoding.
use crate::BurgersBVP::PicardSolver::BVPError;
use base64::{Engine as _, engine::general_purpose};
use log::info;

const F64_SIZE: usize = std::mem::size_of::<f64>();

/// little-endian bytes → `f64`
pub fn float64_from_byte_slice(bytes: &[u8; F64_SIZE]) -> f64 {
    f64::from_le_bytes(*bytes)
}

/// base64 text → array of `f64`
pub fn float64_slice_from_base64_string(text: &str) -> Result<Vec<f64>, BVPError> {
    let bytes = general_purpose::STANDARD.decode(text)?;
    let values = bytes
        .chunks_exact(F64_SIZE)
        .map(|chunk| {
            let mut buf = [0u8; F64_SIZE];
            buf.copy_from_slice(chunk);
            float64_from_byte_slice(&buf)
        })
        .collect();
    Ok(values)
}

/// array of `f64` → base64 text
pub fn base64_string_from_float64_slice(values: &[f64]) -> String {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes the array, adds 1.0 to every element and encodes it back
pub fn increment_slice_elements(text: &str) -> Result<String, BVPError> {
    info!("increment_slice_elements called");
    let values = float64_slice_from_base64_string(text)?;
    let incremented: Vec<f64> = values.iter().map(|v| v + 1.0).collect();
    Ok(base64_string_from_float64_slice(&incremented))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_slice_elements() {
        // [1.1, 2.2] -> [2.1, 3.2]
        let result = increment_slice_elements("mpmZmZmZ8T+amZmZmZkBQA==").unwrap();
        assert_eq!(result, "zczMzMzMAECamZmZmZkJQA==");
    }

    #[test]
    fn test_decode_encode() {
        let values = float64_slice_from_base64_string("mpmZmZmZ8T+amZmZmZkBQA==").unwrap();
        assert_eq!(values, vec![1.1, 2.2]);
        assert_eq!(
            base64_string_from_float64_slice(&values),
            "mpmZmZmZ8T+amZmZmZkBQA=="
        );
    }

    #[test]
    fn test_empty_and_partial_input() {
        assert_eq!(increment_slice_elements("").unwrap(), "");
        // 9 bytes: one full f64 (1.0) and one dangling byte
        let mut bytes = 1.0f64.to_le_bytes().to_vec();
        bytes.push(0xff);
        let text = general_purpose::STANDARD.encode(bytes);
        assert_eq!(float64_slice_from_base64_string(&text).unwrap(), vec![1.0]);
        assert_eq!(
            increment_slice_elements(&text).unwrap(),
            base64_string_from_float64_slice(&[2.0])
        );
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            increment_slice_elements("not base64 at all!"),
            Err(BVPError::Encoding(_))
        ));
    }
}
