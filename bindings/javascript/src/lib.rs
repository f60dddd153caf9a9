//! JavaScript/TypeScript bindings for building identifier matching
//!
//! Thin wrapper around `buildingid-core` compiled to WebAssembly.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

/// Normalize a building's address and postcode into its matching identifier.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Output contains only [a-z0-9], or is empty
///
/// @param address - Building address, without the flat number
/// @param postcode - Postcode, in any casing or spacing
/// @returns Canonical identifier ("" if nothing survives normalization)
#[wasm_bindgen(js_name = "normalizeForMatching")]
pub fn normalize_for_matching(address: &str, postcode: &str) -> String {
    buildingid_core::normalize_for_matching(address, postcode)
}

/// Check whether a string is a well-formed building identifier.
///
/// @param identifier - Candidate identifier
/// @returns true iff non-empty and made only of lowercase ASCII letters and digits
#[wasm_bindgen(js_name = "isValidBuildingIdentifier")]
pub fn is_valid_building_identifier(identifier: &str) -> bool {
    buildingid_core::is_valid_building_identifier(identifier)
}

/// Group registrations by building.
///
/// @param records - JSON array of { address, postcode } objects
/// @returns JSON string: { groups: [{ identifier, records }], unmatched: [...] }
/// @throws Error if the input is not a JSON array of records
#[wasm_bindgen(js_name = "groupBuildings")]
pub fn group_buildings(records: &str) -> Result<String, JsError> {
    let records = buildingid_core::grouping::parse_records(records)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let groups = buildingid_core::group_by_building(&records);
    serde_json::to_string_pretty(&groups)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
