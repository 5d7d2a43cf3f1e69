//! Swipe navigation controller.
//!
//! Interprets a touch gesture as a horizontal swipe-navigation intent and,
//! when it qualifies, moves the current route to the adjacent entry of the
//! route list. Routing and haptics are supplied by the caller through the
//! `Router` and `Haptics` traits, so the controller never reaches into
//! ambient state and can be exercised with fakes.
//!
//! Event ordering is assumed to be start -> moves -> end-or-cancel, delivered
//! synchronously on the UI thread. A missing start is tolerated: move and end
//! without a prior start are safe no-ops. Nothing on this path panics; an
//! uncaught error here would break input handling for the whole application.

use crate::content;
use crate::gesture::{self, GestureState, SwipeDirection, TouchSample};

/// Route access supplied by the surrounding application.
pub trait Router {
    /// Returns the current route identifier.
    fn current_route(&self) -> &str;
    /// Requests a change to the given route.
    fn navigate_to(&mut self, route: &str);
}

/// Optional short vibration pulse emitted when a swipe navigates.
pub trait Haptics {
    /// Fire-and-forget pulse; implementations must not block.
    fn pulse(&mut self);
}

/// Haptics implementation for platforms without a vibration capability.
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self) {}
}

/// Configuration for swipe recognition and the navigable route list.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Minimum horizontal displacement for a low-velocity swipe to navigate
    pub distance_threshold_px: f32,
    /// Minimum horizontal speed for a short swipe to navigate
    pub velocity_threshold_px_per_ms: f32,
    /// When false, gesture state is still tracked but completion never
    /// triggers navigation
    pub navigation_enabled: bool,
    /// Ordered route list; order defines swipe adjacency
    pub routes: Vec<String>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold_px: 100.0,
            velocity_threshold_px_per_ms: 0.5,
            navigation_enabled: true,
            routes: content::default_routes(),
        }
    }
}

/// Read-only snapshot of the current position within the route list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    /// Position of the current route, None if it is not in the route list
    pub current_index: Option<usize>,
    /// Number of routes in the list
    pub total_routes: usize,
    /// True if a leftward swipe could move to the next route
    pub can_advance: bool,
    /// True if a rightward swipe could move to the previous route
    pub can_retreat: bool,
}

/// Classifies touch gestures and drives route changes.
///
/// Owns the per-gesture state; collaborators are passed in at the call sites
/// that need them.
pub struct SwipeNavigationController {
    config: SwipeConfig,
    gesture: GestureState,
}

impl Default for SwipeNavigationController {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeNavigationController {
    /// Creates a controller with the given configuration.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            gesture: GestureState::new(),
        }
    }

    /// Returns the live gesture state for visual feedback consumers.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Returns the configured route list.
    pub fn routes(&self) -> &[String] {
        &self.config.routes
    }

    /// Enables or disables navigation on gesture completion.
    pub fn set_navigation_enabled(&mut self, enabled: bool) {
        self.config.navigation_enabled = enabled;
    }

    /// Records the start of a touch gesture.
    ///
    /// Only the first touch point is tracked; touch-start events for
    /// additional simultaneous points are ignored.
    pub fn on_touch_start(&mut self, touch_id: u64, sample: TouchSample) {
        if self.gesture.tracked_touch().is_some() {
            return;
        }
        self.gesture.begin(touch_id, sample);
    }

    /// Processes a touch movement.
    ///
    /// Returns true when the gesture has been classified as horizontal and
    /// the caller should suppress default scroll/pan behavior for it.
    /// A move without a prior start, or for an untracked touch point, is a
    /// no-op returning false.
    pub fn on_touch_move(&mut self, touch_id: u64, sample: TouchSample) -> bool {
        let Some(start) = self.gesture.start() else {
            return false;
        };
        if self.gesture.tracked_touch() != Some(touch_id) {
            return false;
        }

        self.gesture.update_current(sample);

        let delta_x = sample.x - start.x;
        let delta_y = sample.y - start.y;
        if gesture::is_horizontal(delta_x, delta_y) {
            self.gesture
                .mark_horizontal(gesture::resolve_direction(delta_x), delta_x);
            return true;
        }
        false
    }

    /// Completes the gesture and navigates if it qualifies.
    ///
    /// Returns true if a navigation was issued. The gesture state is reset
    /// regardless of the outcome. Without a prior start this only resets.
    pub fn on_touch_end(
        &mut self,
        now_ms: f64,
        router: &mut dyn Router,
        haptics: &mut dyn Haptics,
    ) -> bool {
        let (Some(start), Some(current)) = (self.gesture.start(), self.gesture.current()) else {
            self.gesture.reset();
            return false;
        };

        let delta_x = current.x - start.x;
        let delta_t_ms = now_ms - start.timestamp_ms;

        let mut navigated = false;
        if self.config.navigation_enabled
            && gesture::qualifies(
                delta_x,
                delta_t_ms,
                self.config.distance_threshold_px,
                self.config.velocity_threshold_px_per_ms,
            )
        {
            if delta_x > 0.0 {
                navigated = self.retreat(router, haptics);
            } else if delta_x < 0.0 {
                navigated = self.advance(router, haptics);
            }
        }

        self.gesture.reset();
        navigated
    }

    /// Cancels the gesture unconditionally. Never navigates; idempotent.
    pub fn on_touch_cancel(&mut self) {
        self.gesture.reset();
    }

    /// Moves to the next route in the list, if there is one.
    ///
    /// Returns true and emits a haptic pulse on success. At the end of the
    /// list, or when the current route is unknown, nothing happens.
    pub fn advance(&self, router: &mut dyn Router, haptics: &mut dyn Haptics) -> bool {
        let Some(index) = self.route_index(router) else {
            return false;
        };
        if index + 1 >= self.config.routes.len() {
            return false;
        }
        let target = self.config.routes[index + 1].clone();
        router.navigate_to(&target);
        haptics.pulse();
        true
    }

    /// Moves to the previous route in the list, if there is one.
    ///
    /// Returns true and emits a haptic pulse on success. At the start of the
    /// list, or when the current route is unknown, nothing happens.
    pub fn retreat(&self, router: &mut dyn Router, haptics: &mut dyn Haptics) -> bool {
        let Some(index) = self.route_index(router) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        let target = self.config.routes[index - 1].clone();
        router.navigate_to(&target);
        haptics.pulse();
        true
    }

    /// Returns the current navigation position, recomputed from the live
    /// router on every call and independent of in-progress gesture state.
    pub fn navigation_context(&self, router: &dyn Router) -> NavigationContext {
        let total = self.config.routes.len();
        let current_index = self.route_index_of(router.current_route());
        NavigationContext {
            current_index,
            total_routes: total,
            can_advance: current_index.map_or(false, |i| i + 1 < total),
            can_retreat: current_index.map_or(false, |i| i > 0),
        }
    }

    fn route_index(&self, router: &dyn Router) -> Option<usize> {
        self.route_index_of(router.current_route())
    }

    fn route_index_of(&self, route: &str) -> Option<usize> {
        self.config.routes.iter().position(|r| r == route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeRouter {
        current: String,
        visited: Vec<String>,
    }

    impl FakeRouter {
        fn at(route: &str) -> Self {
            Self {
                current: route.to_string(),
                visited: Vec::new(),
            }
        }
    }

    impl Router for FakeRouter {
        fn current_route(&self) -> &str {
            &self.current
        }

        fn navigate_to(&mut self, route: &str) {
            self.current = route.to_string();
            self.visited.push(route.to_string());
        }
    }

    #[derive(Default)]
    struct CountingHaptics {
        pulses: usize,
    }

    impl Haptics for CountingHaptics {
        fn pulse(&mut self) {
            self.pulses += 1;
        }
    }

    fn test_controller() -> SwipeNavigationController {
        SwipeNavigationController::new(SwipeConfig {
            routes: vec![
                "/".to_string(),
                "/about".to_string(),
                "/services".to_string(),
            ],
            ..SwipeConfig::default()
        })
    }

    fn sample(x: f32, y: f32, t_ms: f64) -> TouchSample {
        TouchSample::new(x, y, t_ms)
    }

    #[test]
    fn fast_left_swipe_advances_and_pulses() {
        // Scenario A: at /about, 150 px leftward in 100 ms
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 1000.0));
        let suppress = controller.on_touch_move(0, sample(150.0, 200.0, 1080.0));
        assert!(suppress);
        assert!(controller.gesture().is_active());
        assert_eq!(controller.gesture().direction(), SwipeDirection::Left);
        assert_eq!(controller.gesture().distance_px(), 150.0);

        let navigated = controller.on_touch_end(1100.0, &mut router, &mut haptics);
        assert!(navigated);
        assert_eq!(router.current, "/services");
        assert_eq!(haptics.pulses, 1);
        assert!(!controller.gesture().is_active());
    }

    #[test]
    fn weak_swipe_is_ignored() {
        // Scenario B: 50 px over 200 ms meets neither threshold
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 1000.0));
        controller.on_touch_move(0, sample(250.0, 200.0, 1150.0));

        let navigated = controller.on_touch_end(1200.0, &mut router, &mut haptics);
        assert!(!navigated);
        assert_eq!(router.current, "/about");
        assert_eq!(haptics.pulses, 0);
    }

    #[test]
    fn rightward_swipe_at_first_route_is_absorbed() {
        // Scenario C: retreat past index 0 is silently absorbed
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(100.0, 200.0, 1000.0));
        controller.on_touch_move(0, sample(300.0, 200.0, 1050.0));
        let navigated = controller.on_touch_end(1100.0, &mut router, &mut haptics);

        assert!(!navigated);
        assert_eq!(router.current, "/");
        assert_eq!(haptics.pulses, 0);
        assert_eq!(controller.gesture().start(), None);
    }

    #[test]
    fn vertical_dominant_move_stays_inactive() {
        // Scenario D: dy=100, dx=80 fails the 1.5x ratio
        let mut controller = test_controller();

        controller.on_touch_start(0, sample(100.0, 100.0, 0.0));
        let suppress = controller.on_touch_move(0, sample(180.0, 200.0, 50.0));

        assert!(!suppress);
        assert!(!controller.gesture().is_active());
        assert_eq!(controller.gesture().direction(), SwipeDirection::None);
    }

    #[test]
    fn slow_long_swipe_navigates_by_distance() {
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        // 150 px over a full second: velocity 0.15 px/ms, distance carries it
        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        controller.on_touch_move(0, sample(150.0, 200.0, 900.0));
        assert!(controller.on_touch_end(1000.0, &mut router, &mut haptics));
        assert_eq!(router.current, "/services");
    }

    #[test]
    fn round_trip_returns_to_origin() {
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        // Leftward swipe: /about -> /services
        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        controller.on_touch_move(0, sample(100.0, 200.0, 80.0));
        controller.on_touch_end(100.0, &mut router, &mut haptics);
        assert_eq!(router.current, "/services");

        // Rightward swipe: /services -> /about
        controller.on_touch_start(0, sample(100.0, 200.0, 200.0));
        controller.on_touch_move(0, sample(300.0, 200.0, 280.0));
        controller.on_touch_end(300.0, &mut router, &mut haptics);
        assert_eq!(router.current, "/about");
        assert_eq!(haptics.pulses, 2);
    }

    #[test]
    fn disabled_navigation_still_tracks_gesture() {
        let mut controller = test_controller();
        controller.set_navigation_enabled(false);
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        let suppress = controller.on_touch_move(0, sample(100.0, 200.0, 80.0));
        assert!(suppress);
        assert!(controller.gesture().is_active());
        assert_eq!(controller.gesture().distance_px(), 200.0);

        let navigated = controller.on_touch_end(100.0, &mut router, &mut haptics);
        assert!(!navigated);
        assert_eq!(router.current, "/about");
        assert!(router.visited.is_empty());
        assert_eq!(haptics.pulses, 0);
    }

    #[test]
    fn move_and_end_without_start_are_no_ops() {
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        assert!(!controller.on_touch_move(0, sample(100.0, 100.0, 0.0)));
        assert!(!controller.on_touch_end(100.0, &mut router, &mut haptics));
        assert_eq!(router.current, "/about");
        assert!(!controller.gesture().is_active());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut controller = test_controller();

        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        controller.on_touch_move(0, sample(100.0, 200.0, 80.0));
        assert!(controller.gesture().is_active());

        controller.on_touch_cancel();
        let after_first = controller.gesture().clone();
        controller.on_touch_cancel();

        assert!(!controller.gesture().is_active());
        assert_eq!(controller.gesture().start(), after_first.start());
        assert_eq!(controller.gesture().distance_px(), 0.0);
    }

    #[test]
    fn second_touch_point_is_ignored() {
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        // A second finger lands and moves far; it must not affect the gesture
        controller.on_touch_start(1, sample(500.0, 200.0, 10.0));
        assert!(!controller.on_touch_move(1, sample(100.0, 200.0, 50.0)));
        assert!(!controller.gesture().is_active());

        controller.on_touch_move(0, sample(100.0, 200.0, 80.0));
        assert!(controller.on_touch_end(100.0, &mut router, &mut haptics));
        assert_eq!(router.current, "/services");
    }

    #[test]
    fn any_touch_end_completes_the_tracked_gesture() {
        // End and cancel are not filtered by touch id: a second finger
        // lifting completes the primary gesture, matching document-level
        // end handling. Start and move do filter (see
        // second_touch_point_is_ignored); the asymmetry is intentional.
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/about");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        controller.on_touch_start(1, sample(500.0, 200.0, 10.0));
        controller.on_touch_move(0, sample(100.0, 200.0, 80.0));

        // The second finger lifts; the tracked gesture ends now.
        assert!(controller.on_touch_end(100.0, &mut router, &mut haptics));
        assert_eq!(router.current, "/services");
        assert!(!controller.gesture().is_active());

        // The first finger's own end afterwards finds no gesture.
        assert!(!controller.on_touch_end(120.0, &mut router, &mut haptics));
        assert_eq!(router.current, "/services");
        assert_eq!(haptics.pulses, 1);
    }

    #[test]
    fn unknown_route_never_navigates() {
        let mut controller = test_controller();
        let mut router = FakeRouter::at("/elsewhere");
        let mut haptics = CountingHaptics::default();

        controller.on_touch_start(0, sample(300.0, 200.0, 0.0));
        controller.on_touch_move(0, sample(100.0, 200.0, 50.0));
        let navigated = controller.on_touch_end(100.0, &mut router, &mut haptics);

        assert!(!navigated);
        assert_eq!(router.current, "/elsewhere");
        assert_eq!(haptics.pulses, 0);
    }

    #[test]
    fn navigation_context_flags_match_position() {
        let controller = test_controller();
        let n = controller.routes().len();

        for (i, route) in controller.routes().to_vec().iter().enumerate() {
            let router = FakeRouter::at(route);
            let ctx = controller.navigation_context(&router);
            assert_eq!(ctx.current_index, Some(i));
            assert_eq!(ctx.total_routes, n);
            assert_eq!(ctx.can_retreat, i > 0, "can_retreat at {}", i);
            assert_eq!(ctx.can_advance, i < n - 1, "can_advance at {}", i);
        }
    }

    #[test]
    fn navigation_context_for_unknown_route() {
        let controller = test_controller();
        let router = FakeRouter::at("/elsewhere");
        let ctx = controller.navigation_context(&router);

        assert_eq!(ctx.current_index, None);
        assert!(!ctx.can_advance);
        assert!(!ctx.can_retreat);
    }

    #[test]
    fn default_config_uses_builtin_deck() {
        let controller = SwipeNavigationController::default();
        assert_eq!(controller.routes()[0], "/");
        assert!(controller.routes().len() > 1);
    }
}
