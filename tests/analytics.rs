//! End-to-end checks: providers feeding the zodiac, motion, cluster and
//! conjunction analytics.

use approx::assert_abs_diff_eq;
use rstest::rstest;

use zodiacal::analysis::{cluster, conjunction, Direction, MotionTracker, StationType};
use zodiacal::coordinates::{minimal_covering_arc, Arc, Longitude};
use zodiacal::planetlib::{AnalyticOrbitModel, Body, Position, PositionProvider, PositionTable};
use zodiacal::time::JulianDate;
use zodiacal::zodiac::{to_zodiac, ZodiacSign};
use zodiacal::ZodiacalError;

/// Geocentric-looking Mars: steady drift with a loop that runs backwards
fn looping_mars(day: f64) -> f64 {
    100.0 + 0.5 * day + 40.0 * (day * std::f64::consts::PI / 60.0).sin()
}

fn mars_table(days: &[f64]) -> PositionTable {
    PositionTable::from_positions(days.iter().map(|&d| {
        Position::new(
            Body::Mars,
            JulianDate::J2000 + d,
            Longitude::from_degrees(looping_mars(d)),
            Some(1.0),
        )
    }))
    .unwrap()
}

#[rstest]
#[case(&[10.0, 350.0, 5.0], 350.0, 20.0)]
#[case(&[359.0, 1.0], 359.0, 2.0)]
#[case(&[100.0], 100.0, 0.0)]
fn covering_arc_examples(#[case] points: &[f64], #[case] start: f64, #[case] length: f64) {
    let arc = minimal_covering_arc(points.iter().copied().map(Longitude::from_degrees)).unwrap();
    assert_abs_diff_eq!(arc.start.degrees(), start, epsilon = 1e-9);
    assert_abs_diff_eq!(arc.length, length, epsilon = 1e-9);
}

#[test]
fn evenly_spaced_bodies_leave_one_gap() {
    let arc = minimal_covering_arc([0.0, 90.0, 180.0, 270.0].map(Longitude::from_degrees)).unwrap();
    assert_abs_diff_eq!(arc.length, 270.0, epsilon = 1e-9);
}

#[test]
fn zodiac_of_analytic_saturn_lies_in_rohini_window() {
    // Saturn's J2000 mean longitude is 50.0774°, inside the 40°-60° band
    let model = AnalyticOrbitModel::default();
    let saturn = model.position_of(Body::Saturn, JulianDate::J2000).unwrap();
    let rohini = Arc::between(Longitude::from_degrees(40.0), Longitude::from_degrees(60.0));

    assert!(rohini.contains(saturn.longitude));
    assert_eq!(saturn.zodiac().unwrap().sign, ZodiacSign::Taurus);
    assert_eq!(to_zodiac(Longitude::from_degrees(47.5)).unwrap().sign, ZodiacSign::Taurus);
}

#[test]
fn analytic_mars_is_always_direct_at_three_day_cadence() {
    let model = AnalyticOrbitModel::default();
    let start = JulianDate::from_calendar(-3101, 10, 16.0).unwrap();
    let instants = JulianDate::series(start, 3.0, 30).unwrap();
    let positions: Vec<Position> = model
        .series(Body::Mars, &instants)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    let series = MotionTracker::new().classify_positions(&positions).unwrap();
    assert_eq!(series.samples.len(), 30);
    assert_eq!(series.samples[0].direction, Direction::Unknown);
    assert!(series.samples[1..].iter().all(|s| s.direction == Direction::Direct));
    assert!(series.retrograde_spans().unwrap().is_empty());
}

#[test]
fn coarse_cadence_aliases_the_moon() {
    // 20 days of lunar travel is ~263.6°, which the shortest rotation reads as ~-96°
    let model = AnalyticOrbitModel::default();
    let instants = JulianDate::series(JulianDate::J2000, 20.0, 3).unwrap();
    let positions: Vec<Position> = model
        .series(Body::Moon, &instants)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    let series = MotionTracker::new().classify_positions(&positions).unwrap();
    assert_eq!(series.samples[1].direction, Direction::Retrograde);
}

#[test]
fn tabulated_loop_has_one_retrograde_span() {
    let days: Vec<f64> = (0..40).map(|i| i as f64 * 3.0).collect();
    let table = mars_table(&days);
    let instants: Vec<JulianDate> = days.iter().map(|&d| JulianDate::J2000 + d).collect();
    let positions: Vec<Position> = table
        .series(Body::Mars, &instants)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    let series = MotionTracker::new().classify_positions(&positions).unwrap();
    let spans = series.retrograde_spans().unwrap();
    assert_eq!(spans.len(), 1);
    assert!(spans[0].travel_deg < 0.0);
    assert!(spans[0].from > JulianDate::J2000 + 30.0 && spans[0].until < JulianDate::J2000 + 90.0);

    let stations = series.stations().unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].station_type, StationType::StationRetrograde);
    assert_eq!(stations[1].station_type, StationType::StationDirect);
}

#[test]
fn missing_instant_surfaces_as_unavailable() {
    let table = mars_table(&[0.0, 3.0]);
    let results = table.series(Body::Mars, &[JulianDate::J2000, JulianDate::J2000 + 1.0]);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn classical_bodies_cluster_from_a_batch() {
    let model = AnalyticOrbitModel::default();
    let at = JulianDate::from_calendar(-5560, 10, 16.0).unwrap();
    let mut bodies = Body::CLASSICAL.to_vec();
    bodies.push(Body::Neptune);

    let batch = model.positions_at(&bodies, at);
    let group = cluster::analyze_results(&batch).unwrap();

    assert_eq!(group.members.len(), 7);
    assert_eq!(group.missing, vec![Body::Neptune]);

    let longitudes = batch
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok())
        .map(|p| p.longitude);
    let arc = minimal_covering_arc(longitudes).unwrap();
    assert_eq!(group.arc, arc);
    assert_eq!(group.within_six_signs(), arc.length <= 180.0);
}

#[test]
fn analytic_positions_cannot_claim_an_eclipse() {
    let model = AnalyticOrbitModel::default();
    let at = JulianDate::J2000;
    let sun = model.position_of(Body::Sun, at).unwrap();
    // Moon placed right on the Sun, but the model has no latitude
    let moon = Position::new(Body::Moon, at, sun.longitude.rotated(2.0), None);

    let report = conjunction::ConjunctionEvaluator::default().evaluate(&sun, &moon);
    assert!(report.is_conjunction);
    assert_eq!(report.near_ecliptic, None);
    assert!(!report.eclipse_likely);
}

#[test]
fn reports_serialize_to_json() {
    let at = JulianDate::J2000;
    let sun = Position::new(Body::Sun, at, Longitude::from_degrees(10.0), Some(0.0));
    let moon = Position::new(Body::Moon, at, Longitude::from_degrees(358.0), Some(0.4));
    let report = conjunction::evaluate(&sun, &moon, 15.0, 1.5);

    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["is_conjunction"], true);
    assert_eq!(value["near_ecliptic"], true);
    assert_eq!(value["eclipse_likely"], true);

    let position = serde_json::to_value(moon).unwrap();
    assert_eq!(position["body"], "Moon");
    assert_eq!(position["longitude"], 358.0);
}

#[test]
fn motion_rejects_out_of_order_positions() {
    let positions = vec![
        Position::new(Body::Mars, JulianDate::new(2.0), Longitude::from_degrees(1.0), None),
        Position::new(Body::Mars, JulianDate::new(1.0), Longitude::from_degrees(2.0), None),
    ];
    assert!(matches!(
        MotionTracker::new().classify_positions(&positions),
        Err(ZodiacalError::NonMonotonicInput { index: 1, .. })
    ));
}
