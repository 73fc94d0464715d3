mod classify;
mod legend;
mod style;
mod validate;

pub use classify::classify;
pub use legend::{Legend, LegendEntry, build_legend};
pub use style::{Style, StyleOptions, StyleProvider};
pub use validate::{is_valid, is_valid_for};
