//! Screen controllers
//!
//! One controller per console screen. They are deliberately thin: hold
//! the current filter and snapshot, validate form payloads, submit
//! through the typed client, then invalidate and reload. All of them
//! follow the same fetch-after-mutation cycle the menu editor uses.

pub mod carousel;
pub mod episodes;
pub mod roles;
pub mod series;
pub mod tags;
pub mod tasks;

pub use carousel::CarouselScreen;
pub use episodes::EpisodeScreen;
pub use roles::RoleScreen;
pub use series::SeriesScreen;
pub use tags::TagScreen;
pub use tasks::TaskScreen;
