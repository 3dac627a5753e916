//! Static lookup tables used by the chain resolver
//!
//! - [`OverrideTable`]: full chain text → title, highest priority
//! - [`TitleTable`]: (generation, gender, last hop) → title, for the arithmetic fallback

mod overrides;
mod titles;

pub use overrides::OverrideTable;
pub use titles::{generic_title, TitleKey, TitleTable, UNKNOWN_RELATION};
