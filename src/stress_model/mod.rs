pub mod batch;
pub mod pipeline;
pub mod record;

pub use batch::{compute_series, compute_series_par};
pub use pipeline::compute;
pub use record::{DailyObservation, DailyResult};
