mod common;

use common::{Mod7, TOLERANCE, assert_close, init_tracing, point};
use lazygeo::EvalError;
use lazygeo::algebra::{Decimal, Degrees, Dot, Field, InnerProduct, Predicate, Scalar, Vect};
use lazygeo::geometry::{Circle, Line, Segment, line_point_ordinate, slope};

/// Seeded pseudo-random planar points, drawn through the field itself
fn sample_points(field: &Decimal, count: usize) -> Vec<Vect<f64>> {
    (0..count)
        .map(|_| point(field.random(), field.random()))
        .collect()
}

#[test]
fn sum_with_opposite_is_additive_identity() {
    init_tracing();
    let field = Decimal::seeded(100);
    for v in sample_points(&field, 20) {
        let coords = Vect::sum([v.clone(), Vect::opposite(v)]).coords();
        for coord in coords {
            assert!(field.equals(&coord, &Scalar::AddIdentity).unwrap());
        }
    }

    let exact = Mod7::default();
    let v = Vect::fixed([3u64, 5, 6].map(Scalar::literal));
    let coords = Vect::sum([v.clone(), Vect::opposite(v)]).resolve(&exact);
    assert_eq!(coords, Ok(vec![0, 0, 0]));
}

#[test]
fn add_is_commutative_and_multiplicity_matters() {
    let a = Scalar::literal(2.0);
    let b = Scalar::division(Scalar::literal(1.0), Scalar::literal(3.0));
    let c = Scalar::<f64>::Random;
    assert_eq!(Scalar::sum([a.clone(), b.clone()]), Scalar::sum([b.clone(), a.clone()]));
    assert_eq!(
        Scalar::sum([a.clone(), b.clone(), c.clone()]),
        Scalar::sum([c, a.clone(), b])
    );
    assert_ne!(Scalar::product([a.clone(), a.clone()]), Scalar::product([a]));
}

#[test]
fn angle_is_antisymmetric() {
    let field = Decimal::seeded(101);
    let points = sample_points(&field, 24);
    for pair in points.chunks(2) {
        let forward = Dot.signed_angle(&pair[0], &pair[1], &field).unwrap();
        let backward = Dot.signed_angle(&pair[1], &pair[0], &field).unwrap();
        assert!((forward + backward).abs() < TOLERANCE, "{} vs {}", forward, backward);
        assert!(forward > -180.0 && forward <= 180.0);
    }
}

#[test]
fn rotation_round_trips() {
    let field = Decimal::seeded(102);
    let metric = Dot::shared();
    for v in sample_points(&field, 4) {
        let original = v.resolve(&field).unwrap();
        for degrees in [0.0, 30.0, 90.0, 180.0, 270.0] {
            let there = Vect::rotate(v.clone(), Degrees::Fixed(degrees), metric.clone());
            let back = Vect::rotate(there, Degrees::Fixed(-degrees), metric.clone());
            assert_close(&back.resolve(&field).unwrap(), &original);
        }
    }
}

#[test]
fn rotation_by_quarter_turns() {
    let field = Decimal::seeded(103);
    let v = point(3.0, 4.0);
    let cases = [
        (90.0, [-4.0, 3.0]),
        (180.0, [-3.0, -4.0]),
        (270.0, [4.0, -3.0]),
    ];
    for (degrees, expected) in cases {
        let rotated = Dot.rot(&v, &Degrees::Fixed(degrees));
        assert_close(&rotated.resolve(&field).unwrap(), &expected);
    }
}

#[test]
fn ordinate_matches_line_equation() {
    let field = Decimal::seeded(104);
    for _ in 0..20 {
        let (x0, y0, dy) = (field.random(), field.random(), field.random());
        // keep away from vertical directions
        let dx = field.random().abs() + 0.5;
        let line = Line::new(point(x0, y0), point(dx, dy));
        let a = field.random();
        let expected = (dy / dx) * a + (y0 - x0 * dy / dx);
        let actual = line_point_ordinate(&line, Scalar::literal(a)).value(&field).unwrap();
        assert!((actual - expected).abs() < TOLERANCE, "{} vs {}", actual, expected);
    }
}

#[test]
fn vertical_line_ordinate() {
    let field = Decimal::seeded(105);
    let line = Line::new(point(2.0, 1.0), point(0.0, 3.0));
    for _ in 0..5 {
        assert!(line_point_ordinate(&line, Scalar::literal(2.0)).value(&field).is_ok());
    }
    let elsewhere = line_point_ordinate(&line, Scalar::literal(2.5)).value(&field);
    assert!(matches!(elsewhere, Err(EvalError::State { .. })));
}

#[test]
fn vertical_line_slope_fails() {
    let field = Decimal::seeded(106);
    let line = Line::through(point(-1.0, 0.0), point(-1.0, 4.0));
    assert!(matches!(slope(&line).value(&field), Err(EvalError::State { .. })));
}

#[test]
fn circle_diameter_opposite_endpoint() {
    let field = Decimal::seeded(107);
    let circle = Circle::new(point(0.0, 0.0), Scalar::literal(2.0));
    let diameter = Segment::circle_diameter(&circle, point(2.0, 0.0));
    assert_close(&diameter.end().resolve(&field).unwrap(), &[-2.0, 0.0]);

    let center = point(1.0, -1.0);
    let on_circle = point(4.0, 3.0);
    let circle = Circle::through(center, on_circle.clone(), &Dot);
    let diameter = Segment::circle_diameter(&circle, on_circle);
    assert_close(&diameter.end().resolve(&field).unwrap(), &[-2.0, -5.0]);
}

#[test]
fn circle_diameter_off_circle_fails_lazily() {
    let field = Decimal::seeded(108);
    let circle = Circle::new(point(0.0, 0.0), Scalar::literal(2.0));
    let diameter = Segment::circle_diameter(&circle, point(1.0, 1.0));
    for coord in diameter.end().coords() {
        assert!(matches!(coord.value(&field), Err(EvalError::Construction { .. })));
    }
}

#[test]
fn norm_of_three_four() {
    let field = Decimal::seeded(109);
    let norm = Dot.norm(&point(3.0, 4.0)).value(&field).unwrap();
    assert!((norm - 5.0).abs() < TOLERANCE);
}

#[test]
fn different_never_equals_its_operand() {
    init_tracing();
    let field = Decimal::seeded(110);
    let operand = Scalar::sum([Scalar::literal(1.5), Scalar::literal(2.0)]);
    let different = Scalar::different(operand.clone());
    for _ in 0..50 {
        let value = different.value(&field).unwrap();
        assert!(!field.equal(&value, &3.5));
    }

    let exact = Mod7::default();
    let different = Scalar::different(Scalar::literal(3u64));
    for _ in 0..50 {
        assert_ne!(different.value(&exact), Ok(3));
    }
}

#[test]
fn different_point_stays_off_the_original() {
    let field = Decimal::seeded(111);
    let original = point(0.5, -0.5);
    let moved = lazygeo::geometry::point::different_point(&original);
    for _ in 0..20 {
        let equal = Predicate::VectEquals(moved.clone(), original.clone()).resolve(&field);
        assert_eq!(equal, Ok(false));
    }
}
