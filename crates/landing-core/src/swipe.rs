/// Direction a horizontal swipe asks the carousel to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Classify a touch that started at `start_x` and ended at `end_x`.
///
/// Travel must strictly exceed `threshold`. A finger moving left
/// (`start_x > end_x`) pulls the next cards into view.
#[inline]
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    match diff {
        d if d > threshold => Some(SwipeDirection::Next),
        d if d < -threshold => Some(SwipeDirection::Prev),
        _ => None,
    }
}

/// Pairs `touchstart` with the following `touchend` for one track.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    start_x: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture and return `(start_x, end_x)`. A `touchend` with no
    /// recorded start yields `None`.
    pub fn end(&mut self, x: f64) -> Option<(f64, f64)> {
        self.start_x.take().map(|start| (start, x))
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify_swipe(300.0, 250.0, 50.0), None);
        assert_eq!(classify_swipe(300.0, 249.0, 50.0), Some(SwipeDirection::Next));
        assert_eq!(classify_swipe(250.0, 301.0, 50.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn nan_coordinates_never_swipe() {
        assert_eq!(classify_swipe(f64::NAN, 0.0, 50.0), None);
    }

    #[test]
    fn tracker_pairs_start_and_end_once() {
        let mut t = TouchTracker::default();
        assert_eq!(t.end(10.0), None);
        t.start(300.0);
        assert!(t.is_tracking());
        assert_eq!(t.end(240.0), Some((300.0, 240.0)));
        assert!(!t.is_tracking());
        assert_eq!(t.end(240.0), None);
    }
}
