use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

/// Build a repayment schedule from a wire-format request (term as
/// years + months, convention as `payment_type`).
#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let wire: loan_calc_core::amortization::ScheduleRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let request = wire.into_loan_request().map_err(to_napi_error)?;
    let output =
        loan_calc_core::amortization::build_schedule(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Same as `build_schedule`, with all currency values rounded to whole
/// units for display.
#[napi]
pub fn build_schedule_rounded(input_json: String) -> NapiResult<String> {
    let wire: loan_calc_core::amortization::ScheduleRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let request = wire.into_loan_request().map_err(to_napi_error)?;
    let mut output =
        loan_calc_core::amortization::build_schedule(&request).map_err(to_napi_error)?;
    output.result = output.result.rounded_to_unit();
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rate estimation
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_rate(input_json: String) -> NapiResult<String> {
    let input: loan_calc_core::rate_estimate::RateEstimateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_calc_core::rate_estimate::estimate_rate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
