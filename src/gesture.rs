//! Touch gesture tracking primitives.
//!
//! This module provides the data types recorded during a touch gesture and the
//! pure decision functions applied to them:
//! - `TouchSample` - a single recorded touch position with its timestamp
//! - `GestureState` - the owned per-gesture state with an explicit
//!   create/mutate/reset lifecycle
//! - Classification and qualification predicates as stateless functions
//!
//! Two distinct thresholds govern swipe recognition and must not be conflated:
//! - Classification (here, hard-coded): is an in-progress gesture horizontal
//!   at all? Requires `|dx| > |dy| * 1.5` and `|dx| > 20` px.
//! - Qualification (configurable, see `SwipeConfig`): is a completed gesture
//!   strong enough to navigate? Either distance or velocity alone suffices.

/// Ratio by which horizontal displacement must dominate vertical displacement
/// for a gesture to classify as horizontal.
pub const HORIZONTAL_RATIO: f32 = 1.5;

/// Minimum horizontal displacement in pixels before a gesture shows
/// horizontal intent. Independent of the configurable navigation threshold.
pub const MIN_INTENT_PX: f32 = 20.0;

/// A single recorded touch position and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Horizontal position in pixels
    pub x: f32,
    /// Vertical position in pixels
    pub y: f32,
    /// Timestamp in milliseconds (monotonic within a gesture)
    pub timestamp_ms: f64,
}

impl TouchSample {
    /// Creates a touch sample from position and timestamp.
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }
}

/// Resolved horizontal intent of an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    /// No horizontal intent recognized
    #[default]
    None,
    /// Finger moving toward smaller x (advance to the next page)
    Left,
    /// Finger moving toward larger x (retreat to the previous page)
    Right,
}

/// Per-gesture tracking state.
///
/// Created empty at touch-down, mutated in place through touch-move events,
/// consumed at touch-end to decide navigation, then reset. Never persists
/// across gestures. Only the first touch point of a gesture is tracked;
/// simultaneous touches are ignored (single-pointer gesture model).
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Sample recorded at gesture start
    start: Option<TouchSample>,
    /// Most recent sample seen during the gesture
    current: Option<TouchSample>,
    /// Platform id of the touch point this gesture tracks
    tracked_touch: Option<u64>,
    /// Whether the gesture has been classified as horizontal
    active: bool,
    /// Resolved horizontal direction
    direction: SwipeDirection,
    /// Absolute horizontal displacement since gesture start, always >= 0
    distance_px: f32,
}

impl GestureState {
    /// Creates an empty gesture state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins tracking a gesture from the given touch point.
    pub fn begin(&mut self, touch_id: u64, sample: TouchSample) {
        self.start = Some(sample);
        self.current = Some(sample);
        self.tracked_touch = Some(touch_id);
        self.active = false;
        self.direction = SwipeDirection::None;
        self.distance_px = 0.0;
    }

    /// Records a new current sample for the tracked touch point.
    pub fn update_current(&mut self, sample: TouchSample) {
        self.current = Some(sample);
    }

    /// Marks the gesture as classified horizontal with the given direction
    /// and displacement.
    pub fn mark_horizontal(&mut self, direction: SwipeDirection, distance_px: f32) {
        self.active = true;
        self.direction = direction;
        self.distance_px = distance_px.abs();
    }

    /// Resets to the empty state. Safe to call repeatedly.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ===== Queries =====

    /// Returns the gesture start sample, if a gesture is being tracked.
    pub fn start(&self) -> Option<TouchSample> {
        self.start
    }

    /// Returns the most recent sample seen during the gesture.
    pub fn current(&self) -> Option<TouchSample> {
        self.current
    }

    /// Returns the id of the touch point this gesture tracks.
    pub fn tracked_touch(&self) -> Option<u64> {
        self.tracked_touch
    }

    /// Returns true while a gesture classified as horizontal is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the resolved horizontal direction.
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Returns the absolute horizontal displacement since gesture start.
    pub fn distance_px(&self) -> f32 {
        self.distance_px
    }
}

/// Classification pre-filter: decides whether an in-progress gesture is
/// horizontal at all.
///
/// True iff horizontal displacement dominates vertical displacement by
/// `HORIZONTAL_RATIO` and exceeds `MIN_INTENT_PX`.
pub fn is_horizontal(delta_x: f32, delta_y: f32) -> bool {
    delta_x.abs() > delta_y.abs() * HORIZONTAL_RATIO && delta_x.abs() > MIN_INTENT_PX
}

/// Resolves the swipe direction from a horizontal displacement.
///
/// Positive displacement is a rightward swipe, negative is leftward.
/// Zero displacement resolves to `SwipeDirection::None`.
pub fn resolve_direction(delta_x: f32) -> SwipeDirection {
    if delta_x > 0.0 {
        SwipeDirection::Right
    } else if delta_x < 0.0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::None
    }
}

/// Qualification: decides whether a completed gesture is strong enough to
/// trigger navigation.
///
/// Either threshold alone suffices: displacement above
/// `distance_threshold_px`, or speed above `velocity_threshold_px_per_ms`.
/// Degenerate elapsed times follow float semantics: positive displacement
/// over zero time has infinite velocity and qualifies, zero displacement
/// over zero time yields NaN and does not.
pub fn qualifies(
    delta_x: f32,
    delta_t_ms: f64,
    distance_threshold_px: f32,
    velocity_threshold_px_per_ms: f32,
) -> bool {
    let meets_distance = delta_x.abs() > distance_threshold_px;
    let velocity = delta_x.abs() as f64 / delta_t_ms;
    let meets_velocity = velocity > velocity_threshold_px_per_ms as f64;
    meets_distance || meets_velocity
}
