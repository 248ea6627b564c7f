//! Evaluate the average interval between accepted taps.

/// Collect taps and measure their average distance over the whole session.
///
/// Call `trigger` with the current time on every tap. Taps arriving too
/// soon after the last accepted one are refused. Since the mean of
/// consecutive intervals telescopes to the distance between the first and
/// the last tap, only those two are kept, together with the count.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalDetector {
    first: Option<f64>,
    last: Option<f64>,
    minimum_interval: f64,
    accepted: usize,
}

/// The tap arrived too soon after the previous one and was ignored.
///
/// Carries the measured interval in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapRejected {
    pub interval: f64,
}

impl IntervalDetector {
    pub fn new(minimum_interval: f64) -> Self {
        Self {
            minimum_interval,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// This fails with `TapRejected` when `now` is not more than the minimum
    /// interval after the last accepted tap. The detector remains intact.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn trigger(&mut self, now: f64) -> Result<usize, TapRejected> {
        if let Some(last) = self.last {
            let interval = now - last;
            // NOTE: Written so that NaN timestamps are refused as well.
            if !(interval > self.minimum_interval) {
                return Err(TapRejected { interval });
            }
        }

        self.first.get_or_insert(now);
        self.last = Some(now);
        self.accepted += 1;

        Ok(self.accepted)
    }

    pub fn reset(&mut self) {
        self.first = None;
        self.last = None;
        self.accepted = 0;
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn first(&self) -> Option<f64> {
        self.first
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Arithmetic mean of distances between all consecutive accepted taps.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_interval(&self) -> Option<f64> {
        match (self.first, self.last) {
            (Some(first), Some(last)) if self.accepted >= 2 => {
                Some((last - first) / (self.accepted - 1) as f64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_triggered_in_exact_interval_it_measures_it() {
        let mut detector = IntervalDetector::new(10.0);
        for i in 0..8 {
            detector.trigger(f64::from(i) * 500.0).unwrap();
        }
        assert_eq!(detector.mean_interval(), Some(500.0));
    }

    #[test]
    fn when_triggered_in_rough_interval_it_averages_it() {
        let mut detector = IntervalDetector::new(10.0);
        for t in [0.0, 490.0, 1010.0, 1500.0] {
            detector.trigger(t).unwrap();
        }
        assert_relative_eq!(detector.mean_interval().unwrap(), 500.0);
    }

    #[test]
    fn when_triggered_too_fast_it_refuses_the_tap() {
        let mut detector = IntervalDetector::new(10.0);
        detector.trigger(1000.0).unwrap();
        assert_eq!(
            detector.trigger(1010.0),
            Err(TapRejected { interval: 10.0 })
        );
        assert_eq!(detector.trigger(1005.0), Err(TapRejected { interval: 5.0 }));
        assert_eq!(detector.accepted(), 1);
        assert_eq!(detector.last(), Some(1000.0));
        assert_eq!(detector.trigger(1011.0), Ok(2));
    }

    #[test]
    fn when_time_goes_backwards_it_refuses_the_tap() {
        let mut detector = IntervalDetector::new(10.0);
        detector.trigger(1000.0).unwrap();
        assert!(detector.trigger(500.0).is_err());
        assert!(detector.trigger(f64::NAN).is_err());
        assert_eq!(detector.accepted(), 1);
    }

    #[test]
    fn when_triggered_once_it_has_no_interval() {
        let mut detector = IntervalDetector::new(10.0);
        assert_eq!(detector.mean_interval(), None);
        detector.trigger(0.0).unwrap();
        assert_eq!(detector.mean_interval(), None);
    }

    #[test]
    fn when_session_grows_it_averages_all_intervals_since_first_tap() {
        let mut detector = IntervalDetector::new(10.0);
        for t in [0.0, 1000.0, 1100.0, 1200.0] {
            detector.trigger(t).unwrap();
        }
        assert_eq!(detector.accepted(), 4);
        assert_eq!(detector.first(), Some(0.0));
        assert_relative_eq!(detector.mean_interval().unwrap(), 400.0);
    }

    #[test]
    fn when_reset_it_forgets_all_taps() {
        let mut detector = IntervalDetector::new(10.0);
        detector.trigger(0.0).unwrap();
        detector.trigger(500.0).unwrap();
        detector.reset();
        assert_eq!(detector.accepted(), 0);
        assert_eq!(detector.first(), None);
        assert_eq!(detector.last(), None);
        assert_eq!(detector.trigger(2000.0), Ok(1));
        assert_eq!(detector.first(), Some(2000.0));
    }
}
