/// Data layer: core types, loading, and query/aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site index, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  evaluate(criteria) → pie + scatter chart data
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
