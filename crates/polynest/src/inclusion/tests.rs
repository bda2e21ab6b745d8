use super::*;
use crate::generate::{random_polygons, Preset, RandomCfg};
use crate::geom::Polygon;
use crate::pip::{CrossProduct, Method, WindingNumber};
use std::time::Duration;

fn square(lo: f64, hi: f64) -> Polygon {
    Polygon::from_xy(&[(lo, lo), (lo, hi), (hi, hi), (hi, lo)])
}

fn solve_all(polys: &[Polygon]) -> Vec<InclusionMapping> {
    Method::ALL
        .iter()
        .map(|&m| solve_with_method(polys, m, &SolveCfg::default()).unwrap())
        .collect()
}

#[test]
fn inner_square_maps_to_outer() {
    let polys = vec![square(0.0, 5.0), square(1.0, 4.0)];
    for mapping in solve_all(&polys) {
        assert_eq!(mapping.as_slice(), &[None, Some(0)]);
        assert_eq!(mapping.to_string(), "[-1, 0]");
    }
}

#[test]
fn three_nested_outer_first_reports_first_match() {
    let polys = vec![square(0.0, 5.0), square(1.0, 4.0), square(2.0, 3.0)];
    for mapping in solve_all(&polys) {
        // innermost is found inside polygon 0 before polygon 1 is tried
        assert_eq!(mapping.as_slice(), &[None, Some(0), Some(0)]);
    }
}

#[test]
fn three_nested_inner_first_reports_immediate_parents() {
    let polys = vec![square(2.0, 3.0), square(1.0, 4.0), square(0.0, 5.0)];
    for mapping in solve_all(&polys) {
        assert_eq!(mapping.as_slice(), &[Some(1), Some(2), None]);
        assert_eq!(mapping.roots(), vec![2]);
        assert_eq!(mapping.children(2), vec![1]);
    }
}

#[test]
fn disjoint_polygons_have_no_container() {
    let polys = vec![square(0.0, 1.0), square(3.0, 4.0), square(10.0, 20.0)];
    for mapping in solve_all(&polys) {
        assert_eq!(mapping.as_slice(), &[None, None, None]);
        assert_eq!(mapping.to_signed(), vec![-1, -1, -1]);
    }
}

#[test]
fn first_match_wins_over_later_candidates() {
    let polys = vec![square(0.0, 10.0), square(-1.0, 11.0), square(4.0, 6.0)];
    let mapping = solve(&polys, &WindingNumber, &SolveCfg::default()).unwrap();
    assert_eq!(mapping.parent(2), Some(0));
    assert_eq!(mapping.parent(0), Some(1));
}

#[test]
fn empty_polygon_is_skipped_both_ways() {
    let polys = vec![square(0.0, 5.0), Polygon::default(), square(1.0, 4.0)];
    for mapping in solve_all(&polys) {
        assert_eq!(mapping.as_slice(), &[None, None, Some(0)]);
    }
}

#[test]
fn touching_corner_counts_only_for_vertex_short_circuit() {
    // Square 1 starts at square 0's far corner; boundary handling differs.
    let polys = vec![square(0.0, 1.0), square(1.0, 2.0)];
    let cross = solve(&polys, &CrossProduct, &SolveCfg::default()).unwrap();
    let wind = solve(&polys, &WindingNumber, &SolveCfg::default()).unwrap();
    assert_eq!(cross.parent(1), Some(0));
    assert_eq!(wind.parent(1), None);
}

#[test]
fn parallel_matches_sequential() {
    let cfg = RandomCfg {
        polygons: 60,
        points: 12,
        min: -1000,
        max: 1000,
    };
    let random = random_polygons(&cfg, 7).unwrap();
    let nested = Preset::Complex.polygons();
    let large = Preset::Large.polygons();
    let par_cfg = SolveCfg {
        parallel: true,
        ..SolveCfg::default()
    };
    for polys in [&random, &nested, &large] {
        for m in Method::ALL {
            let seq = solve_with_method(polys, m, &SolveCfg::default()).unwrap();
            let par = solve_with_method(polys, m, &par_cfg).unwrap();
            assert_eq!(seq, par, "{m}");
        }
    }
}

#[test]
fn raised_token_cancels() {
    let token = CancelToken::new();
    token.cancel();
    let cfg = SolveCfg {
        cancel: Some(token.clone()),
        ..SolveCfg::default()
    };
    let polys = vec![square(0.0, 5.0), square(1.0, 4.0)];
    assert_eq!(
        solve_with_method(&polys, Method::Cross, &cfg),
        Err(SolveError::Cancelled)
    );
    let par = SolveCfg {
        parallel: true,
        ..cfg
    };
    assert_eq!(
        solve_with_method(&polys, Method::Ray, &par),
        Err(SolveError::Cancelled)
    );
}

#[test]
fn zero_timeout_aborts_non_empty_input() {
    let cfg = SolveCfg {
        timeout: Some(Duration::ZERO),
        ..SolveCfg::default()
    };
    let polys = vec![square(0.0, 5.0), square(1.0, 4.0)];
    assert!(matches!(
        solve_with_method(&polys, Method::Winding, &cfg),
        Err(SolveError::DeadlineExceeded { .. })
    ));
    // nothing to check, nothing to time out
    assert!(solve_with_method(&[], Method::Winding, &cfg).unwrap().is_empty());
}

#[test]
fn generous_timeout_completes() {
    let cfg = SolveCfg {
        timeout: Some(Duration::from_secs(60)),
        ..SolveCfg::default()
    };
    let mapping = solve_with_method(&Preset::Multiple.polygons(), Method::Cross, &cfg).unwrap();
    assert_eq!(mapping.as_slice(), &[None, Some(0)]);
}

#[test]
fn mapping_helpers() {
    let mut m = InclusionMapping::new(3);
    m.set_parent(2, 0);
    assert_eq!(m.len(), 3);
    assert_eq!(m.parent(2), Some(0));
    assert_eq!(m.parent(7), None);
    assert_eq!(m.to_string(), "[-1, -1, 0]");
    assert_eq!(InclusionMapping::default().to_string(), "[]");
}
