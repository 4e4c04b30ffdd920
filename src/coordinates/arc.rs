//! Arcs of the ecliptic and the minimal covering arc of a point set

use serde::Serialize;

use super::angle::{normalize, Longitude};
use crate::constants::FULL_CIRCLE;
use crate::{Result, ZodiacalError};

/// A contiguous prograde arc of the ecliptic
///
/// The arc runs from `start` in the direction of increasing longitude for
/// `length` degrees, with `length` in `[0, 360]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    /// Longitude at which the arc begins
    pub start: Longitude,
    /// Extent of the arc in degrees
    pub length: f64,
}

impl Arc {
    /// Creates an arc, clamping the length into `[0, 360]`
    pub fn new(start: Longitude, length: f64) -> Self {
        Arc {
            start,
            length: length.clamp(0.0, FULL_CIRCLE),
        }
    }

    /// The prograde arc from `start` to `end`
    ///
    /// `Arc::between(350°, 10°)` is the 20° arc across the 0° seam, not the
    /// 340° arc the other way round.
    pub fn between(start: Longitude, end: Longitude) -> Self {
        Arc::new(start, normalize(end.degrees() - start.degrees()))
    }

    /// Longitude at which the arc ends
    pub fn end(&self) -> Longitude {
        self.start.rotated(self.length)
    }

    /// Whether `lon` lies on the arc, endpoints included
    pub fn contains(&self, lon: Longitude) -> bool {
        if self.length >= FULL_CIRCLE {
            return true;
        }
        normalize(lon.degrees() - self.start.degrees()) <= self.length
    }

    /// Whether the arc spans no more than `max_deg` degrees
    pub fn within_deg(&self, max_deg: f64) -> bool {
        self.length <= max_deg
    }
}

/// Computes the shortest arc containing every longitude in `angles`
///
/// The distinct longitudes are sorted and the circular gap between each
/// neighbour (wrapping the last round to the first) is measured. The
/// covering arc is the complement of the largest gap: it starts at the
/// longitude just after that gap and spans `360 - gap` degrees. Ties between
/// equal largest gaps go to the earliest in sorted order.
///
/// A single distinct longitude yields a zero-length arc at that point. An
/// empty input is an error, never a zero-length arc.
///
/// # Examples
///
/// ```rust
/// use zodiacal::coordinates::{minimal_covering_arc, Longitude};
///
/// let arc = minimal_covering_arc([10.0, 350.0, 5.0].map(Longitude::from_degrees)).unwrap();
/// assert_eq!(arc.start.degrees(), 350.0);
/// assert_eq!(arc.length, 20.0);
/// ```
pub fn minimal_covering_arc<I>(angles: I) -> Result<Arc>
where
    I: IntoIterator<Item = Longitude>,
{
    let mut sorted: Vec<f64> = angles.into_iter().map(|lon| lon.degrees()).collect();
    if sorted.is_empty() {
        return Err(ZodiacalError::InsufficientData(
            "minimal covering arc needs at least one longitude".to_string(),
        ));
    }
    if let Some(bad) = sorted.iter().find(|deg| !deg.is_finite()) {
        return Err(ZodiacalError::InsufficientData(format!(
            "cannot cover a non-finite longitude ({})",
            bad
        )));
    }

    sorted.sort_by(f64::total_cmp);
    sorted.dedup();

    if sorted.len() == 1 {
        return Ok(Arc::new(Longitude::from_degrees(sorted[0]), 0.0));
    }

    let count = sorted.len();
    let mut largest_gap = f64::NEG_INFINITY;
    let mut after_gap = 0;
    for i in 0..count {
        let next = (i + 1) % count;
        let gap = if next == 0 {
            sorted[0] + FULL_CIRCLE - sorted[i]
        } else {
            sorted[next] - sorted[i]
        };
        if gap > largest_gap {
            largest_gap = gap;
            after_gap = next;
        }
    }

    Ok(Arc::new(
        Longitude::from_degrees(sorted[after_gap]),
        FULL_CIRCLE - largest_gap,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::angle::signed_delta;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn lons(values: &[f64]) -> Vec<Longitude> {
        values.iter().copied().map(Longitude::from_degrees).collect()
    }

    #[test]
    fn test_arc_across_seam() {
        let arc = minimal_covering_arc(lons(&[10.0, 350.0, 5.0])).unwrap();
        assert_abs_diff_eq!(arc.start.degrees(), 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.length, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_evenly_spaced_four() {
        let arc = minimal_covering_arc(lons(&[0.0, 90.0, 180.0, 270.0])).unwrap();
        assert_abs_diff_eq!(arc.length, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_evenly_spaced_three() {
        let arc = minimal_covering_arc(lons(&[0.0, 120.0, 240.0])).unwrap();
        assert_abs_diff_eq!(arc.length, 240.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(&[42.0])]
    #[case(&[42.0, 42.0, 42.0])]
    #[case(&[42.0, 402.0])]
    fn test_single_point_is_zero_length(#[case] values: &[f64]) {
        let arc = minimal_covering_arc(lons(values)).unwrap();
        assert_abs_diff_eq!(arc.start.degrees(), 42.0, epsilon = 1e-9);
        assert_eq!(arc.length, 0.0);
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = minimal_covering_arc(Vec::new());
        assert!(matches!(result, Err(ZodiacalError::InsufficientData(_))));
    }

    #[test]
    fn test_non_finite_input_is_error() {
        let result = minimal_covering_arc(vec![Longitude::from_degrees(f64::NAN)]);
        assert!(matches!(result, Err(ZodiacalError::InsufficientData(_))));
    }

    #[test]
    fn test_naive_span_would_be_wrong() {
        // max - min says 358°, the points are 2° apart
        let arc = minimal_covering_arc(lons(&[359.0, 1.0])).unwrap();
        assert_abs_diff_eq!(arc.length, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.start.degrees(), 359.0, epsilon = 1e-9);
    }

    #[test]
    fn test_covering_arc_contains_every_input() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let n = rng.gen_range(1..12);
            let points: Vec<Longitude> = (0..n)
                .map(|_| Longitude::from_degrees(rng.gen_range(0.0..360.0)))
                .collect();
            let arc = minimal_covering_arc(points.clone()).unwrap();
            assert!(arc.length >= 0.0 && arc.length <= FULL_CIRCLE);
            let widened = Arc::new(arc.start.rotated(-1e-9), arc.length + 2e-9);
            for p in points {
                assert!(widened.contains(p), "{:?} not in {:?}", p, arc);
            }
        }
    }

    #[test]
    fn test_rotation_invariance() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let n = rng.gen_range(2..9);
            let points: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..360.0)).collect();
            let k: f64 = rng.gen_range(-720.0..720.0);

            let base = minimal_covering_arc(lons(&points)).unwrap();
            let shifted: Vec<f64> = points.iter().map(|p| p + k).collect();
            let rotated = minimal_covering_arc(lons(&shifted)).unwrap();

            assert_abs_diff_eq!(base.length, rotated.length, epsilon = 1e-6);
            let start_shift = signed_delta(base.start.rotated(k), rotated.start);
            assert_abs_diff_eq!(start_shift, 0.0, epsilon = 1e-6);
        }
    }

    #[rstest]
    #[case(40.0, 60.0, 47.5, true)]
    #[case(40.0, 60.0, 60.0, true)]
    #[case(40.0, 60.0, 61.0, false)]
    #[case(350.0, 10.0, 0.0, true)]
    #[case(350.0, 10.0, 180.0, false)]
    fn test_between_and_contains(
        #[case] start: f64,
        #[case] end: f64,
        #[case] point: f64,
        #[case] inside: bool,
    ) {
        let arc = Arc::between(Longitude::from_degrees(start), Longitude::from_degrees(end));
        assert_eq!(arc.contains(Longitude::from_degrees(point)), inside);
    }

    #[test]
    fn test_end_wraps() {
        let arc = Arc::new(Longitude::from_degrees(350.0), 20.0);
        assert_abs_diff_eq!(arc.end().degrees(), 10.0, epsilon = 1e-9);
        assert!(arc.within_deg(20.0));
        assert!(!arc.within_deg(19.9));
    }

    #[test]
    fn test_length_clamped() {
        assert_eq!(Arc::new(Longitude::default(), 400.0).length, 360.0);
        assert_eq!(Arc::new(Longitude::default(), -5.0).length, 0.0);
    }
}
