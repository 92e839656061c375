//! Statistics - Base/current value pairs and clamped health

mod hp;
mod line;
mod statistic;

pub use hp::Hp;
pub use line::StatLine;
pub use statistic::Statistic;
