//! WebAssembly bindings for JavaScript callers.
//!
//! Rating lists arrive as `Float64Array` (or a plain number array) so a
//! fractional JavaScript value is rejected instead of truncated. Errors
//! surface as `Error` objects carrying the Rust error message.

use crate::bilateral::Disability;
use crate::combine::RatingCombiner;
use wasm_bindgen::prelude::*;

#[derive(serde::Deserialize)]
struct DisabilityInput {
    label: String,
    rating: f64,
}

/// Official combined rating for a list of percentages.
#[wasm_bindgen(js_name = combineRatings)]
pub fn combine_ratings(ratings: Vec<f64>) -> Result<u8, JsError> {
    Ok(RatingCombiner::default().combine(ratings)?.value())
}

/// Whole-person value before rounding to the nearest 10.
#[wasm_bindgen(js_name = combinedValue)]
pub fn combined_value(ratings: Vec<f64>) -> Result<u8, JsError> {
    Ok(RatingCombiner::default().combined_value(ratings)?.value())
}

/// Step-by-step combination, as a plain object.
#[wasm_bindgen(js_name = combineWithTrace)]
pub fn combine_with_trace(ratings: Vec<f64>) -> Result<JsValue, JsError> {
    let trace = RatingCombiner::default().combine_with_trace(ratings)?;
    serde_wasm_bindgen::to_value(&trace).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen(js_name = combineBilateral)]
pub fn combine_bilateral(left: f64, right: f64) -> Result<u8, JsError> {
    Ok(RatingCombiner::default().combine_bilateral(left, right)?.value())
}

#[wasm_bindgen(js_name = normalizeRating)]
pub fn normalize_rating(raw: f64) -> u8 {
    crate::combine::normalize(raw).value()
}

/// Combines `[{ label, rating }, ...]`, pairing left/right sides by label.
#[wasm_bindgen(js_name = combineDisabilities)]
pub fn combine_disabilities(input: JsValue) -> Result<u8, JsError> {
    let inputs: Vec<DisabilityInput> =
        serde_wasm_bindgen::from_value(input).map_err(|e| JsError::new(&e.to_string()))?;
    let disabilities = inputs
        .into_iter()
        .map(|d| Disability::new(d.label, d.rating))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RatingCombiner::default()
        .combine_disabilities(&disabilities)
        .value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_match_engine() {
        assert_eq!(combine_ratings(vec![50.0, 30.0]).ok(), Some(70));
        assert_eq!(combined_value(vec![50.0, 30.0]).ok(), Some(65));
        assert_eq!(combine_bilateral(20.0, 10.0).ok(), Some(30));
        assert_eq!(normalize_rating(30.8), 30);
    }
}
