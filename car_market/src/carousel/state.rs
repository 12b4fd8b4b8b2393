/// Auto-advancing index over the carousel items.
///
/// Dragging does not stop the timer; it only makes ticks skip until the
/// drag is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    auto_scroll: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            auto_scroll: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll
    }

    pub fn begin_drag(&mut self) {
        self.auto_scroll = false;
    }

    pub fn end_drag(&mut self) {
        self.auto_scroll = true;
    }

    /// Advance on a timer tick. Returns the index to scroll to, or `None`
    /// while a drag is in progress.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.auto_scroll || self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }
}
