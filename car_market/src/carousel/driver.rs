use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, interval_at};

use crate::config::CAROUSEL_INTERVAL;
use crate::task::{ScreenTasks, TaskHandle};

use super::errors::ScrollError;
use super::state::Carousel;

/// The list view the carousel scrolls
#[async_trait]
pub trait CarouselScroller: Send + Sync + 'static {
    async fn scroll_to_index(&self, index: usize) -> Result<(), ScrollError>;
}

/// Advance `carousel` every `period` and ask `scroller` to follow.
///
/// Runs until cancelled. Scroll failures are logged and otherwise ignored;
/// the index has already moved on and the next tick tries the next item.
pub async fn run_carousel(
    carousel: Arc<Mutex<Carousel>>,
    scroller: Arc<dyn CarouselScroller>,
    period: Duration,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    loop {
        ticker.tick().await;
        let next = carousel.lock().await.tick();
        let Some(index) = next else {
            continue;
        };
        if let Err(e) = scroller.scroll_to_index(index).await {
            tracing::warn!("Carousel scroll failed: {}", e);
        }
    }
}

/// Start the carousel as a task of `tasks`, at the configured interval
pub fn spawn_carousel(
    tasks: &ScreenTasks,
    carousel: Arc<Mutex<Carousel>>,
    scroller: Arc<dyn CarouselScroller>,
) -> TaskHandle<()> {
    tasks.spawn(run_carousel(carousel, scroller, *CAROUSEL_INTERVAL))
}
