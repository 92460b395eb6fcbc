/// Data layer: roster rows, parsing, filtering, and queries.
///
/// Architecture:
/// ```text
///  cohort_data.txt  (first|last|house|advisor|cohort_or_flag)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  stream lines → Row (fails on wrong field count)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  cohort predicate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  houses, cohorts, rosters, duplicates, housemates
///   └──────────┘
/// ```
///
/// Each query reopens the file; nothing is shared between calls.

pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
