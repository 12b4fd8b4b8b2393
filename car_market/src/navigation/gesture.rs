use super::route::Route;

/// Minimum horizontal travel before a drag is treated as a swipe
const CAPTURE_DISTANCE: f32 = 20.0;
/// Leftward travel at release that triggers back navigation
const BACK_SWIPE_DISTANCE: f32 = 50.0;

/// Horizontal drag on the identity screens, as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Accumulated horizontal distance since the touch started
    pub dx: f32,
    /// Latest vertical position of the touch
    pub move_y: f32,
}

impl SwipeGesture {
    pub fn new(dx: f32, move_y: f32) -> Self {
        Self { dx, move_y }
    }

    fn in_lower_half(&self, screen_height: f32) -> bool {
        self.move_y > screen_height / 2.0
    }

    /// Whether the screen should take over the touch
    pub fn should_capture(&self, screen_height: f32) -> bool {
        self.dx.abs() > CAPTURE_DISTANCE && self.in_lower_half(screen_height)
    }

    /// Whether releasing the touch here means "go back"
    pub fn is_back_swipe(&self, screen_height: f32) -> bool {
        self.dx < -BACK_SWIPE_DISTANCE && self.in_lower_half(screen_height)
    }

    /// Where a back swipe released on `from` leads, if anywhere
    pub fn back_destination(&self, from: &Route, screen_height: f32) -> Option<Route> {
        if !self.is_back_swipe(screen_height) {
            return None;
        }
        match from {
            Route::AuthOptions => Some(Route::Home),
            Route::Login | Route::Register { .. } => Some(Route::AuthOptions),
            _ => None,
        }
    }
}
