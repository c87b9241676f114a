//! Standalone HTML proof documents
//!
//! The page is self-contained (inline CSS, Chart.js from CDN when charts
//! are present) so it can be opened in a browser and saved as a PDF for
//! submission.

use crate::render::format_number;
use crate::render::json::{npm_package_url, verification_url};
use crate::types::ReportModel;

/// Render the proof document as a standalone HTML page
pub fn render(model: &ReportModel) -> String {
    let downloads = format_number(model.total.downloads);
    let timestamp = model.token.timestamp();
    let api_url = verification_url(model);
    let npm_url = npm_package_url(&model.package);

    let charts = if model.has_series() {
        chart_section(model)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NPM Download Statistics Proof - {package}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
            max-width: 900px;
            margin: 40px auto;
            padding: 20px;
            background: #f5f5f5;
            color: #333;
        }}
        .container {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            padding: 40px;
        }}
        .header {{
            text-align: center;
            border-bottom: 3px solid #cb3837;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }}
        .header h1 {{ color: #cb3837; margin: 0 0 10px 0; }}
        .header .subtitle {{ color: #666; font-size: 18px; }}
        .stats-box {{
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            border-radius: 8px;
            text-align: center;
            margin: 30px 0;
        }}
        .stats-box .number {{ font-size: 64px; font-weight: bold; margin: 10px 0; }}
        .stats-box .label {{ font-size: 20px; opacity: 0.9; }}
        .info-section {{
            margin: 25px 0;
            padding: 20px;
            background: #f8f9fa;
            border-left: 4px solid #cb3837;
            border-radius: 4px;
        }}
        .info-section h3 {{ margin-top: 0; color: #cb3837; }}
        .info-row {{
            display: flex;
            justify-content: space-between;
            padding: 10px 0;
            border-bottom: 1px solid #e0e0e0;
        }}
        .info-row:last-child {{ border-bottom: none; }}
        .info-label {{ font-weight: 600; color: #555; }}
        .info-value {{ color: #333; font-family: 'Courier New', monospace; }}
        .verification {{
            background: #e8f5e9;
            border: 2px solid #4caf50;
            border-radius: 8px;
            padding: 20px;
            margin: 30px 0;
        }}
        .verification h3 {{ color: #2e7d32; margin-top: 0; }}
        .chart-section {{ margin: 30px 0; }}
        .chart-tabs {{ text-align: center; margin-bottom: 15px; }}
        .chart-tab {{
            padding: 8px 18px;
            margin: 0 4px;
            border: 1px solid #ccc;
            border-radius: 4px;
            background: white;
            cursor: pointer;
        }}
        .footer {{
            text-align: center;
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #ddd;
            color: #666;
            font-size: 14px;
        }}
        @media print {{
            body {{ background: white; margin: 0; padding: 0; }}
            .container {{ box-shadow: none; }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>NPM Download Statistics</h1>
            <div class="subtitle">Official Verification Report</div>
        </div>

        <div class="stats-box">
            <div class="label">Total Downloads</div>
            <div class="number">{downloads}</div>
            <div class="label">{start} to {end}</div>
        </div>

        <div class="info-section">
            <h3>Package Information</h3>
            <div class="info-row">
                <span class="info-label">Package Name:</span>
                <span class="info-value">{package}</span>
            </div>
            <div class="info-row">
                <span class="info-label">Start Date:</span>
                <span class="info-value">{start}</span>
            </div>
            <div class="info-row">
                <span class="info-label">End Date:</span>
                <span class="info-value">{end}</span>
            </div>
            <div class="info-row">
                <span class="info-label">Total Downloads:</span>
                <span class="info-value">{downloads}</span>
            </div>
        </div>
{charts}
        <div class="verification">
            <h3>Verification Information</h3>
            <div class="info-row">
                <span class="info-label">Report Generated:</span>
                <span class="info-value">{timestamp}</span>
            </div>
            <div class="info-row">
                <span class="info-label">Data Source:</span>
                <span class="info-value">Official NPM Registry API</span>
            </div>
            <div class="info-row">
                <span class="info-label">Verification Hash:</span>
                <span class="info-value">{short_hash}</span>
            </div>
            <p style="margin-top: 15px; font-size: 14px;">
                <strong>How to Verify:</strong> Anyone can confirm this data by visiting the API URL below
                or by using the NPM Registry's official download statistics API.
            </p>
        </div>

        <div class="info-section">
            <h3>Official Links</h3>
            <div style="margin: 10px 0;">
                <strong>NPM Package:</strong><br>
                <a href="{npm_url}" target="_blank">{npm_url}</a>
            </div>
            <div style="margin: 10px 0;">
                <strong>API Verification URL:</strong><br>
                <a href="{api_url}" target="_blank" style="word-break: break-all; font-size: 12px;">{api_url}</a>
            </div>
        </div>

        <div class="footer">
            <p>
                Generated on {timestamp}<br>
                Data source: <a href="https://api.npmjs.org">NPM Registry API</a>
            </p>
        </div>
    </div>
</body>
</html>"#,
        package = model.package,
        downloads = downloads,
        start = model.total.start,
        end = model.total.end,
        timestamp = timestamp,
        short_hash = model.token.short(),
        npm_url = npm_url,
        api_url = api_url,
        charts = charts,
    )
}

/// Interactive daily/weekly/monthly chart block (only when a series exists)
fn chart_section(model: &ReportModel) -> String {
    let daily: Vec<serde_json::Value> = model
        .daily
        .as_ref()
        .map(|series| {
            series
                .points
                .iter()
                .map(|p| serde_json::json!({"label": p.date.format("%m-%d").to_string(), "downloads": p.count}))
                .collect()
        })
        .unwrap_or_default();
    let weekly: Vec<serde_json::Value> = model
        .weekly
        .iter()
        .map(|b| serde_json::json!({"label": b.label, "downloads": b.total}))
        .collect();
    let monthly: Vec<serde_json::Value> = model
        .monthly
        .iter()
        .map(|b| serde_json::json!({"label": b.label, "downloads": b.total}))
        .collect();

    let weekly_display = if weekly.len() > 1 { "inline-block" } else { "none" };
    let monthly_display = if monthly.len() > 1 { "inline-block" } else { "none" };

    format!(
        r#"
        <div class="chart-section">
            <div class="chart-tabs">
                <button class="chart-tab" onclick="showChart('daily')">Daily</button>
                <button class="chart-tab" onclick="showChart('weekly')" style="display: {weekly_display};">Weekly</button>
                <button class="chart-tab" onclick="showChart('monthly')" style="display: {monthly_display};">Monthly</button>
            </div>
            <canvas id="downloadsChart"></canvas>
        </div>
        <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
        <script>
            const dailyData = {daily_json};
            const weeklyData = {weekly_json};
            const monthlyData = {monthly_json};
            let chart = null;

            function showChart(view) {{
                const source = view === 'weekly' ? weeklyData
                    : view === 'monthly' ? monthlyData
                    : dailyData;
                if (chart) chart.destroy();
                chart = new Chart(document.getElementById('downloadsChart'), {{
                    type: 'bar',
                    data: {{
                        labels: source.map(d => d.label),
                        datasets: [{{
                            label: 'Downloads',
                            data: source.map(d => d.downloads),
                            backgroundColor: '#667eea'
                        }}]
                    }},
                    options: {{ plugins: {{ legend: {{ display: false }} }} }}
                }});
            }}

            showChart('daily');
        </script>"#,
        daily_json = serde_json::Value::Array(daily),
        weekly_json = serde_json::Value::Array(weekly),
        monthly_json = serde_json::Value::Array(monthly),
        weekly_display = weekly_display,
        monthly_display = monthly_display,
    )
}
