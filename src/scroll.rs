//! Scroll threshold tracking for the navigation bar.

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Derives the "scrolled" flag from raw scroll offsets and reports only crossings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one scroll tick. Returns the new flag when the threshold was crossed,
    /// `None` when the tick changes nothing.
    pub fn observe(&mut self, offset_y: f64) -> Option<bool> {
        let scrolled = offset_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

#[cfg(target_arch = "wasm32")]
pub use subscription::ScrollSubscription;

#[cfg(target_arch = "wasm32")]
mod subscription {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{window, Event, Window};

    /// Window `scroll` listener that is removed when the guard is dropped.
    pub struct ScrollSubscription {
        window: Window,
        closure: Closure<dyn FnMut(Event)>,
    }

    impl ScrollSubscription {
        /// Registers `on_scroll`, called with the window's vertical offset on every tick.
        /// Returns `None` when there is no window or the listener is refused.
        pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = window()?;
            let target = window.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                on_scroll(target.scroll_y().unwrap_or(0.0));
            });

            window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .ok()?;

            Some(Self { window, closure })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_threshold_flips_flag_both_ways() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.scrolled());

        assert_eq!(tracker.observe(0.0), None);
        assert_eq!(tracker.observe(50.0), Some(true));
        assert!(tracker.scrolled());
        assert_eq!(tracker.observe(10.0), Some(false));
        assert!(!tracker.scrolled());
    }

    #[test]
    fn sub_threshold_movement_is_a_no_op() {
        let mut tracker = ScrollTracker::default();
        for offset in [1.0, 5.0, 19.0, 20.0, 3.0] {
            assert_eq!(tracker.observe(offset), None);
        }

        assert_eq!(tracker.observe(21.0), Some(true));
        for offset in [40.0, 300.0, 20.5] {
            assert_eq!(tracker.observe(offset), None);
        }
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut tracker = ScrollTracker::new(20.0);
        assert_eq!(tracker.observe(20.0), None);
        assert!(!tracker.scrolled());
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut tracker = ScrollTracker::new(100.0);
        assert_eq!(tracker.observe(50.0), None);
        assert_eq!(tracker.observe(101.0), Some(true));
        assert_eq!(tracker.threshold(), 100.0);
    }
}
