//! Machine-readable JSON proof documents
//!
//! The document embeds everything an independent verifier needs: the
//! statistics, the API URL to re-fetch them, and the signature hash with
//! the exact timestamp it was computed over.

use crate::errors::AppResult;
use crate::types::ReportModel;
use serde_json::json;

/// Base URL of the package page on npmjs.com
pub fn npm_package_url(package: &str) -> String {
    format!("https://www.npmjs.com/package/{}", package)
}

/// API URL anyone can call to re-fetch the signed point total
pub fn verification_url(model: &ReportModel) -> String {
    format!(
        "https://api.npmjs.org/downloads/point/{}:{}/{}",
        model.range.start, model.range.end, model.package
    )
}

/// Render the proof document as pretty-printed JSON
pub fn render(model: &ReportModel) -> AppResult<String> {
    let mut statistics = json!({
        "start_date": model.total.start.to_string(),
        "end_date": model.total.end.to_string(),
        "total_downloads": model.total.downloads,
    });

    // Aggregates only appear when a daily series was fetched
    if model.has_series() {
        statistics["daily"] = serde_json::to_value(&model.daily)?;
        statistics["weekly"] = serde_json::to_value(&model.weekly)?;
        statistics["monthly"] = serde_json::to_value(&model.monthly)?;
    }

    let proof = json!({
        "proof_version": "1.0",
        "generated_at": model.token.timestamp(),
        "package": {
            "name": model.package,
            "npm_url": npm_package_url(&model.package),
        },
        "statistics": statistics,
        "verification": {
            "api_url": verification_url(model),
            "signature_hash": model.token.hash,
            "verification_method": "Anyone can verify by calling the API URL above",
        },
        "metadata": {
            "report_type": "npm_download_statistics_proof",
            "data_source": "Official NPM Registry API",
            "api_documentation": "https://github.com/npm/registry/blob/master/docs/download-counts.md",
        },
    });

    Ok(serde_json::to_string_pretty(&proof)?)
}
