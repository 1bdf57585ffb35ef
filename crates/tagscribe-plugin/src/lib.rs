//! Plugin contract for Tagscribe.
//!
//! - [`Plugin`]: Base trait for all plugins
//! - [`ChangelogRenderer`]: Type table plus the two Markdown render callbacks
//! - [`Clock`]: Source of the current UTC date

mod clock;
mod traits;

pub use clock::{Clock, FixedClock, SystemClock};
pub use traits::Plugin;
pub use traits::renderer::ChangelogRenderer;
