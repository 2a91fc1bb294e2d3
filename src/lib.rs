pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod pager;
pub mod state;
pub mod timer;
pub mod viewport;

pub use carousel::Carousel;
pub use config::{CarouselConfig, DotMode, PagerConfig};
pub use engine::{Headless, Recorder, Render};
pub use error::{Error, Result};
pub use layout::{Frame, Geometry, TrackLayout, Translation};
pub use pager::RevealPager;
pub use viewport::Breakpoints;
