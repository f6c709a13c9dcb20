//! Tests for the `ExhaustiveSolver`.

use super::*;
use rstest::{fixture, rstest};
use waymark_core::test_support::{
    CountingCostFunction, FailingCostFunction, LineCostFunction, UnitCostFunction, poi,
};
use waymark_core::{CostError, PointOfInterest};

fn ids(response: &SolveResponse<PointOfInterest>) -> Vec<u64> {
    response.plan.places().iter().map(|place| place.id).collect()
}

fn request(place_ids: &[u64]) -> SolveRequest<PointOfInterest> {
    SolveRequest::new(place_ids.iter().copied().map(poi).collect())
}

#[fixture]
fn line_solver() -> ExhaustiveSolver<CountingCostFunction<LineCostFunction>> {
    ExhaustiveSolver::new(CountingCostFunction::new(LineCostFunction))
}

#[rstest]
fn solve_orders_places_along_the_line(
    line_solver: ExhaustiveSolver<CountingCostFunction<LineCostFunction>>,
) {
    let response = line_solver
        .solve(&request(&[3, 1, 0, 2]))
        .expect("solve should succeed");

    // Both monotone walks cost 3; the one starting from the first place is
    // generated first.
    assert_eq!(ids(&response), vec![3, 2, 1, 0]);
    assert_eq!(response.plan.cost(), 3.0);
    assert_eq!(response.diagnostics.permutations_evaluated, 24);
    assert_eq!(response.diagnostics.cost_evaluations, 12);
    assert_eq!(line_solver.cost_fn.calls(), 12);
}

#[rstest]
fn empty_request_yields_empty_plan(
    line_solver: ExhaustiveSolver<CountingCostFunction<LineCostFunction>>,
) {
    let response = line_solver
        .solve(&request(&[]))
        .expect("solve should succeed");
    assert!(response.plan.is_empty());
    assert_eq!(response.plan.cost(), 0.0);
    assert_eq!(response.diagnostics.permutations_evaluated, 0);
    assert_eq!(line_solver.cost_fn.calls(), 0);
}

#[rstest]
fn single_place_is_returned_without_pricing(
    line_solver: ExhaustiveSolver<CountingCostFunction<LineCostFunction>>,
) {
    let response = line_solver
        .solve(&request(&[7]))
        .expect("solve should succeed");
    assert_eq!(ids(&response), vec![7]);
    assert_eq!(response.plan.cost(), 0.0);
    assert_eq!(response.diagnostics.permutations_evaluated, 1);
    assert_eq!(response.diagnostics.cost_evaluations, 0);
    assert_eq!(line_solver.cost_fn.calls(), 0);
}

#[rstest]
fn oversized_request_is_rejected_before_pricing() {
    let config = ExhaustiveSolverConfig::default().with_max_places(Some(3));
    let solver = ExhaustiveSolver::with_config(CountingCostFunction::new(UnitCostFunction), config);

    let err = solver
        .solve(&request(&[1, 2, 3, 4]))
        .expect_err("expected size limit");

    assert_eq!(err, SolveError::TooManyPlaces { count: 4, limit: 3 });
    assert_eq!(solver.cost_fn.calls(), 0);
}

#[rstest]
fn default_config_limits_request_size() {
    let config = ExhaustiveSolverConfig::default();
    assert_eq!(config.max_places, Some(DEFAULT_MAX_PLACES));
    assert_eq!(config.time_limit, None);
    assert_eq!(config.check_interval, DEFAULT_CHECK_INTERVAL);
}

#[rstest]
fn cost_failure_aborts_the_solve() {
    let solver = ExhaustiveSolver::new(FailingCostFunction::new(1, 2));
    let err = solver
        .solve(&request(&[1, 2, 3]))
        .expect_err("expected cost failure");
    match err {
        SolveError::Cost { from, to, source } => {
            assert_eq!((from, to), (0, 1));
            assert!(matches!(source, CostError::ServiceError { .. }));
        }
        other => panic!("expected Cost error, found {other:?}"),
    }
}

#[rstest]
fn negative_cost_aborts_the_solve() {
    let solver = ExhaustiveSolver::new(
        |_from: &PointOfInterest, _to: &PointOfInterest| -> Result<f64, CostError> { Ok(-2.0) },
    );
    let err = solver
        .solve(&request(&[1, 2]))
        .expect_err("expected invalid cost");
    assert!(matches!(err, SolveError::InvalidCost { from: 0, to: 1, .. }));
}

#[rstest]
fn overflowing_route_totals_fail_instead_of_returning_an_empty_plan() {
    let solver =
        ExhaustiveSolver::new(|_from: &u32, _to: &u32| -> Result<f64, CostError> { Ok(f64::MAX) });
    let err = solver
        .solve(&SolveRequest::new(vec![1, 2, 3]))
        .expect_err("expected overflow");
    assert_eq!(err, SolveError::CostOverflow { count: 3 });
}

#[rstest]
fn two_places_at_maximum_cost_still_plan() {
    let solver =
        ExhaustiveSolver::new(|_from: &u32, _to: &u32| -> Result<f64, CostError> { Ok(f64::MAX) });
    let response = solver
        .solve(&SolveRequest::new(vec![1, 2]))
        .expect("one leg stays finite");
    assert_eq!(response.plan.places(), &[1, 2]);
    assert_eq!(response.plan.cost(), f64::MAX);
}

#[rstest]
#[case(vec![0, 1], 2)]
#[case(vec![0, 1, 2, 0], 4)]
#[case(vec![0, 0, 1], 3)]
#[case(vec![0, 1, 3], 3)]
fn orders_that_do_not_cover_the_request_are_rejected(
    #[case] order: Vec<usize>,
    #[case] actual: usize,
) {
    let outcome = SearchOutcome {
        order,
        cost: 1.0,
        permutations_evaluated: 6,
    };
    let err = plan_from_outcome(&[10_u64, 20, 30], &outcome).expect_err("expected invalid order");
    assert_eq!(
        err,
        SolveError::InvalidOrder {
            expected: 3,
            actual
        }
    );
}

#[rstest]
fn covering_order_becomes_the_plan() {
    let outcome = SearchOutcome {
        order: vec![2, 0, 1],
        cost: 4.0,
        permutations_evaluated: 6,
    };
    let plan = plan_from_outcome(&[10_u64, 20, 30], &outcome).expect("order covers the request");
    assert_eq!(plan.places(), &[30, 10, 20]);
    assert_eq!(plan.cost(), 4.0);
}

#[rstest]
fn cancelled_solve_returns_no_plan(
    line_solver: ExhaustiveSolver<CountingCostFunction<LineCostFunction>>,
) {
    let flag = Arc::new(AtomicBool::new(true));
    let err = line_solver
        .solve_with_cancel(&request(&[1, 2, 3]), Some(flag))
        .expect_err("expected cancellation");
    assert_eq!(err, SolveError::Cancelled);
    assert_eq!(line_solver.cost_fn.calls(), 6);
}

#[rstest]
fn uncancelled_flag_does_not_interrupt(
    line_solver: ExhaustiveSolver<CountingCostFunction<LineCostFunction>>,
) {
    let flag = Arc::new(AtomicBool::new(false));
    let response = line_solver
        .solve_with_cancel(&request(&[2, 0, 1]), Some(flag))
        .expect("solve should succeed");
    assert_eq!(ids(&response), vec![2, 1, 0]);
}

#[rstest]
fn zero_time_limit_aborts_the_solve() {
    let config = ExhaustiveSolverConfig::default()
        .with_time_limit(Duration::ZERO)
        .with_check_interval(1);
    let solver = ExhaustiveSolver::with_config(LineCostFunction, config);
    let err = solver
        .solve(&request(&[1, 2, 3, 4]))
        .expect_err("expected time limit");
    assert_eq!(
        err,
        SolveError::TimeLimitExceeded {
            limit: Duration::ZERO
        }
    );
}

#[rstest]
fn repeated_solves_agree() {
    let solver = ExhaustiveSolver::new(UnitCostFunction);
    let first = solver
        .solve(&request(&[5, 9, 1, 4]))
        .expect("solve should succeed");
    let second = solver
        .solve(&request(&[5, 9, 1, 4]))
        .expect("solve should succeed");
    assert_eq!(first.plan, second.plan);
    assert_eq!(ids(&first), vec![5, 9, 1, 4]);
}

#[rstest]
fn one_solver_serves_concurrent_requests() {
    let solver = ExhaustiveSolver::new(LineCostFunction);
    let (left, right) = std::thread::scope(|scope| {
        let left = scope.spawn(|| solver.solve(&request(&[4, 6, 5])));
        let right = scope.spawn(|| solver.solve(&request(&[10, 30, 20, 40])));
        (
            left.join().expect("thread should not panic"),
            right.join().expect("thread should not panic"),
        )
    });
    let left = left.expect("solve should succeed");
    let right = right.expect("solve should succeed");
    assert_eq!(ids(&left), vec![4, 5, 6]);
    assert_eq!(ids(&right), vec![10, 20, 30, 40]);
    assert_eq!(right.plan.cost(), 30.0);
}

#[rstest]
fn ordered_pairs_counts_directed_legs() {
    assert_eq!(ordered_pairs(0), 0);
    assert_eq!(ordered_pairs(1), 0);
    assert_eq!(ordered_pairs(4), 12);
}
