//! Report rendering and output generation
//!
//! Consumes a finished [`ReportModel`](crate::types::ReportModel); never
//! re-derives buckets or re-signs. Supports Console, JSON, and HTML output
//! formats via the [`ReportRenderer`] facade.

pub mod console;
pub mod html;
pub mod json;

use crate::errors::AppResult;
use crate::types::ReportModel;

/// Output format options for proof documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Html,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

// Display is what clap uses to show the default value in --help
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Facade for all report rendering operations
pub struct ReportRenderer;

impl ReportRenderer {
    /// Render a proof document in the requested format
    pub fn render(model: &ReportModel, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => json::render(model),
            OutputFormat::Html => Ok(html::render(model)),
        }
    }

    /// Proof document filename for one (package, start, end) triple
    ///
    /// Unique within a batch run: the planner never emits duplicate
    /// (start, end) pairs, so filenames cannot collide.
    pub fn proof_filename(model: &ReportModel, format: OutputFormat) -> String {
        format!(
            "npm_downloads_proof_{}_{}_to_{}.{}",
            model.package,
            model.range.start,
            model.range.end,
            format.extension()
        )
    }
}

/// Format number with thousand separators for display
///
/// # Examples
///
/// ```
/// # use npm_downloads_proof::render::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
