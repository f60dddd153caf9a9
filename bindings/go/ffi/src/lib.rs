//! C-FFI layer for building identifier matching — used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `buildingid-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `bid_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Result from a fallible FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `bid_free_string()`.
#[repr(C)]
pub struct BidResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl BidResult {
    fn ok(value: String) -> Self {
        let c = CString::new(value).unwrap_or_default();
        BidResult {
            result: c.into_raw(),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        let c = CString::new(msg).unwrap_or_default();
        BidResult {
            result: std::ptr::null_mut(),
            error: c.into_raw(),
        }
    }
}

/// Helper: convert a C string pointer to a Rust &str.
/// Returns None if the pointer is null or not valid UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Normalize a building's address and postcode into its matching identifier.
///
/// The identifier may be the empty string for degenerate input.
///
/// # Safety
/// `address` and `postcode` must be valid null-terminated UTF-8 C strings.
/// The caller must free the returned strings with `bid_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn bid_normalize_for_matching(
    address: *const c_char,
    postcode: *const c_char,
) -> BidResult {
    let address = match cstr_to_str(address) {
        Some(s) => s,
        None => return BidResult::err("null or invalid UTF-8 address".into()),
    };
    let postcode = match cstr_to_str(postcode) {
        Some(s) => s,
        None => return BidResult::err("null or invalid UTF-8 postcode".into()),
    };

    BidResult::ok(buildingid_core::normalize_for_matching(address, postcode))
}

/// Check whether a string is a well-formed building identifier.
///
/// Null or non-UTF-8 input is reported as invalid.
///
/// # Safety
/// `identifier` must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn bid_is_valid_building_identifier(identifier: *const c_char) -> bool {
    match cstr_to_str(identifier) {
        Some(s) => buildingid_core::is_valid_building_identifier(s),
        None => false,
    }
}

/// Group registrations by building.
/// Input is a JSON array of `{"address", "postcode"}` records.
/// Returns JSON: { "groups": [{"identifier", "records"}], "unmatched": [...] }
///
/// # Safety
/// `records` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `bid_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn bid_group_buildings(records: *const c_char) -> BidResult {
    let records = match cstr_to_str(records) {
        Some(s) => s,
        None => return BidResult::err("null or invalid UTF-8 input".into()),
    };

    let records = match buildingid_core::grouping::parse_records(records) {
        Ok(records) => records,
        Err(e) => return BidResult::err(e.to_string()),
    };

    let groups = buildingid_core::group_by_building(&records);
    match serde_json::to_string_pretty(&groups) {
        Ok(json) => BidResult::ok(json),
        Err(e) => BidResult::err(format!("Serialization error: {}", e)),
    }
}

/// Free a string previously returned by a `bid_*` FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a `bid_*` FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn bid_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
