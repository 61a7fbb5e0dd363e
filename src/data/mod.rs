/// Data layer: core types, loading, and derived statistics.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AdDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ AdDataset  │  Vec<Observation>, column access
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  derive charts + stats for the selected channel
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
pub mod view;
