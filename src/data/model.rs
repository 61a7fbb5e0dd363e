use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Channel – one of the three advertising media
// ---------------------------------------------------------------------------

/// An advertising channel whose spend is compared against sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Channel {
    #[default]
    Tv,
    Radio,
    Newspaper,
}

impl Channel {
    /// All channels, in dropdown order.
    pub const ALL: [Channel; 3] = [Channel::Tv, Channel::Radio, Channel::Newspaper];

    /// Column name as it appears in the source file.
    pub fn column_name(self) -> &'static str {
        match self {
            Channel::Tv => "TV",
            Channel::Radio => "Radio",
            Channel::Newspaper => "Newspaper",
        }
    }

    /// Label shown in the channel selector.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Tv => "TV",
            Channel::Radio => "Radio",
            Channel::Newspaper => "Periódico",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation (one row of the source table).
///
/// Deserialized by column name, so the source file's leading index column and
/// any other extra columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "TV")]
    pub tv: f64,
    #[serde(rename = "Radio")]
    pub radio: f64,
    #[serde(rename = "Newspaper")]
    pub newspaper: f64,
    #[serde(rename = "Sales")]
    pub sales: f64,
}

impl Observation {
    /// Spend on the given channel.
    pub fn spend(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Tv => self.tv,
            Channel::Radio => self.radio,
            Channel::Newspaper => self.newspaper,
        }
    }
}

// ---------------------------------------------------------------------------
// AdDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded table. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct AdDataset {
    /// All observations (rows), in source-file order.
    pub observations: Vec<Observation>,
}

impl AdDataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        AdDataset { observations }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Spend column for the given channel, in row order.
    pub fn spend_column(&self, channel: Channel) -> Vec<f64> {
        self.observations.iter().map(|o| o.spend(channel)).collect()
    }

    /// Sales column, in row order.
    pub fn sales_column(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.sales).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_column_matches_channel() {
        let ds = AdDataset::new(vec![
            Observation {
                tv: 1.0,
                radio: 2.0,
                newspaper: 3.0,
                sales: 4.0,
            },
            Observation {
                tv: 5.0,
                radio: 6.0,
                newspaper: 7.0,
                sales: 8.0,
            },
        ]);

        assert_eq!(ds.spend_column(Channel::Tv), vec![1.0, 5.0]);
        assert_eq!(ds.spend_column(Channel::Radio), vec![2.0, 6.0]);
        assert_eq!(ds.spend_column(Channel::Newspaper), vec![3.0, 7.0]);
        assert_eq!(ds.sales_column(), vec![4.0, 8.0]);
    }

    #[test]
    fn channel_names() {
        assert_eq!(Channel::Tv.column_name(), "TV");
        assert_eq!(Channel::Newspaper.column_name(), "Newspaper");
        assert_eq!(Channel::Newspaper.label(), "Periódico");
        assert_eq!(Channel::default(), Channel::Tv);
    }
}
