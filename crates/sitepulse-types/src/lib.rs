pub mod domain;
pub mod envelope;
pub mod raw_list;
pub mod telemetry;

pub use domain::*;
pub use envelope::{ApiEnvelope, Paginated};
pub use raw_list::{RawList, normalized_list};
pub use telemetry::*;
