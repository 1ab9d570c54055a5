//! Number formatting rules for display.

/// Marker shown for metrics that could not be extracted.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// Insert thousands separators into a non-negative decimal rendering.
fn group_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

fn signed(value: f64, body: String) -> String {
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// `$X,XXX.XX`
pub fn format_currency(value: f64) -> String {
    format!("${}", signed(value, group_thousands(value, 2)))
}

/// `$X.XB` / `$X.XM` by magnitude, plain dollars below a million.
pub fn format_compact_currency(value: f64) -> String {
    if value.abs() >= 1e9 {
        format!("${}B", signed(value, group_thousands(value / 1e9, 1)))
    } else if value.abs() >= 1e6 {
        format!("${}M", signed(value, group_thousands(value / 1e6, 1)))
    } else {
        format!("${}", signed(value, group_thousands(value, 0)))
    }
}

/// Fractional input, one decimal: `0.154` -> `15.4%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Two decimals with the ratio suffix: `1.5` -> `1.50x`
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Render a named key metric with its display rule.
pub fn format_metric(name: &str, value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    match name {
        "Current Price" => format_currency(value),
        "Market Cap" | "Revenue" | "Net Income" => format_compact_currency(value),
        "ROE" => format_percent(value),
        "P/E Ratio" | "Debt/Equity" | "Current Ratio" => format_ratio(value),
        _ => group_thousands(value, 2),
    }
}
