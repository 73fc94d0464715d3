mod io;
mod record;
mod store;

pub use record::MetricRecord;
pub use store::MetricStore;
