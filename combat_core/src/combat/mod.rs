//! Combat resolution - Apply damage to actors and group them into teams

mod encounter;
mod resolution;
mod result;

pub use encounter::Combat;
pub use resolution::resolve_damage;
pub use result::DamageReport;
