mod metric;
mod scale;

pub use metric::Metric;
pub use scale::{NO_DATA_COLOR, PALETTE, Scale};
