//! Small parsing helpers shared by indexer implementations.
//!
//! Trackers return most numbers as text, timestamps in loosely specified
//! formats and quality only inside the release title. These helpers turn
//! that into typed values with well-defined behavior on bad input.

mod dates;
mod de;
mod numbers;
mod quality;
mod text;

pub use dates::{parse_utc_date, DateParseError};
pub use de::opt_string_or_number;
pub use numbers::{coerce_u32, coerce_u64};
pub use quality::tv_category_from_title;
pub use text::{contains_ignore_case, list_contains_ignore_case};
