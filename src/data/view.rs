use super::model::{AdDataset, Channel};
use super::stats::{self, Histogram};

// ---------------------------------------------------------------------------
// Derived view: everything the UI renders for one channel selection
// ---------------------------------------------------------------------------

/// Bin count for both distribution histograms.
pub const HISTOGRAM_BINS: usize = 30;

/// The four headline statistics for the selected channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Pearson correlation with sales, rounded to 3 decimals.
    pub correlation: f64,
    pub mean_spend: f64,
    pub max_spend: f64,
    pub mean_sales: f64,
}

/// Scatter data with the fitted trendline.
#[derive(Debug, Clone)]
pub struct ScatterView {
    /// One `[spend, sales]` point per observation, in row order.
    pub points: Vec<[f64; 2]>,
    /// OLS line endpoints at the spend column's min and max.
    /// None when the fit is degenerate (under 2 rows or zero spend variance).
    pub trendline: Option<[[f64; 2]; 2]>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Paired histograms of the selected channel's spend and of sales.
#[derive(Debug, Clone)]
pub struct DistributionView {
    pub spend: Histogram,
    pub spend_title: String,
    pub sales: Histogram,
    pub sales_title: String,
}

/// The full derived view for one channel selection.
#[derive(Debug, Clone)]
pub struct ChannelView {
    pub channel: Channel,
    pub scatter: ScatterView,
    pub distribution: DistributionView,
    pub stats: ChannelStats,
}

/// Recompute the derived view for one channel.
///
/// Pure function of (table, channel): every call rebuilds the charts and
/// statistics from the full columns, with no filtering or sampling.
pub fn channel_view(dataset: &AdDataset, channel: Channel) -> ChannelView {
    let spend = dataset.spend_column(channel);
    let sales = dataset.sales_column();

    let stats = ChannelStats {
        correlation: round3(stats::pearson(&spend, &sales)),
        mean_spend: stats::mean(&spend),
        max_spend: stats::max(&spend),
        mean_sales: stats::mean(&sales),
    };

    let points: Vec<[f64; 2]> = spend.iter().zip(&sales).map(|(&x, &y)| [x, y]).collect();
    let trendline = stats::linear_fit(&spend, &sales).map(|fit| {
        let x0 = stats::min(&spend);
        let x1 = stats::max(&spend);
        [[x0, fit.at(x0)], [x1, fit.at(x1)]]
    });

    ChannelView {
        channel,
        scatter: ScatterView {
            points,
            trendline,
            title: format!("Relación entre Inversión en {channel} y Ventas"),
            x_label: format!("Inversión en {channel} (miles de $)"),
            y_label: "Ventas (miles de $)".to_string(),
        },
        distribution: DistributionView {
            spend: stats::histogram(&spend, HISTOGRAM_BINS),
            spend_title: format!("Distribución de Inversión en {channel}"),
            sales: stats::histogram(&sales, HISTOGRAM_BINS),
            sales_title: "Distribución de Ventas".to_string(),
        },
        stats,
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Format a value as thousands of dollars: `$1,234.56K`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value:.2}K");
    }
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac_part}K", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
