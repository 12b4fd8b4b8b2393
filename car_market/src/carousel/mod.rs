mod driver;
mod errors;
mod state;

pub use driver::{CarouselScroller, run_carousel, spawn_carousel};
pub use errors::ScrollError;
pub use state::Carousel;
