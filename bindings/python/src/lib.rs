//! Python bindings for building identifier matching
//!
//! Thin wrapper around `buildingid-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Normalize a building's address and postcode into its matching identifier.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Output contains only [a-z0-9], or is empty
///
/// Args:
///     address: Building address, without the flat number
///     postcode: Postcode, in any casing or spacing
///
/// Returns:
///     Canonical identifier ("" if nothing survives normalization)
#[pyfunction]
fn normalize_for_matching(address: &str, postcode: &str) -> String {
    buildingid_core::normalize_for_matching(address, postcode)
}

/// Check whether a string is a well-formed building identifier.
///
/// Args:
///     identifier: Candidate identifier
///
/// Returns:
///     True iff non-empty and made only of lowercase ASCII letters and digits
#[pyfunction]
fn is_valid_building_identifier(identifier: &str) -> bool {
    buildingid_core::is_valid_building_identifier(identifier)
}

/// Group registrations by building.
///
/// Args:
///     records: JSON array of {"address": ..., "postcode": ...} objects
///
/// Returns:
///     JSON string:
///     {
///         "groups": [{"identifier": "...", "records": [indices]}],
///         "unmatched": [indices]
///     }
///
/// Raises:
///     ValueError: If the input is not a JSON array of records
#[pyfunction]
fn group_buildings(records: &str) -> PyResult<String> {
    let records = buildingid_core::grouping::parse_records(records)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let groups = buildingid_core::group_by_building(&records);
    serde_json::to_string_pretty(&groups)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// Building identifier Python module
#[pymodule]
fn buildingid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_for_matching, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_building_identifier, m)?)?;
    m.add_function(wrap_pyfunction!(group_buildings, m)?)?;
    Ok(())
}
