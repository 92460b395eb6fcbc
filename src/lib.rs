//! Read-only queries over pipe-delimited house and cohort roster files.

pub mod config;
pub mod data;
pub mod error;

pub use data::filter::CohortFilter;
pub use data::loader::{load_rows, open_rows, RowReader};
pub use data::model::{Enrollment, Group, House, HouseRosters, Row, RowSummary};
pub use data::query::{
    all_rows, cohort_for, distinct_houses, duplicated_last_names, housemates_of,
    rosters_by_house, students_by_cohort,
};
pub use error::{Result, RosterError};
