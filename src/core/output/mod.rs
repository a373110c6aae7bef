//! Output writers.
//!
//! - [`write_csv`] / [`to_csv`] - quote-non-numeric CSV, one row per join event
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatjoins::Result<()> {
//! use chatjoins::core::output::{to_csv, write_csv};
//!
//! let records = vec![];
//! write_csv(&records, "TestChat.csv")?;
//!
//! // Or get as a string
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! ```

mod csv_writer;

pub use csv_writer::{to_csv, write_csv};
