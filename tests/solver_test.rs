//! Solver construction, bulk accessors and element iteration.

use std::sync::Arc;

use cese::solver::{BoundaryTreatment, Limiter, MarchConfig};
use cese::{
    Error, Grid, InviscidBurgersSolver, LinearScalar, LinearScalarSolver, Plane, Solver,
};

fn grid10() -> Arc<Grid> {
    Arc::new(Grid::new(0.0, 10.0, 10).unwrap())
}

#[test]
fn test_construction() {
    let solver: Solver = Solver::new(grid10(), 2, 0.2).unwrap();
    assert_eq!(solver.nvar(), 2);
    assert_eq!(solver.time_increment(), 0.2);
    assert_eq!(solver.dt(), 0.2);
    assert_eq!(solver.plane(), Plane::Even);
    assert!(!solver.is_prepared());
    assert_eq!(solver.so0().len(), 25 * 2);
    assert_eq!(solver.so1().len(), 25 * 2);
    assert_eq!(solver.cfl().len(), 25);
    assert!(solver.so0().iter().all(|&v| v == 0.0));
}

#[test]
fn test_invalid_nvar() {
    let err = Solver::<cese::NoFlux>::new(grid10(), 0, 0.2).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Solver::Solver(nvar=0) invalid argument: nvar smaller than 1"
    );

    let err = LinearScalarSolver::new(grid10(), 0, 0.2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "LinearScalarSolver::LinearScalarSolver(nvar=0) invalid argument: nvar smaller than 1"
    );
}

#[test]
fn test_invalid_time_increment() {
    let err = InviscidBurgersSolver::new(grid10(), 1, f64::NAN).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_display() {
    let solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(
        solver.to_string(),
        "Solver(grid=Grid(xmin=0, xmax=10, ncelm=10))"
    );
    let solver = InviscidBurgersSolver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(
        solver.to_string(),
        "InviscidBurgersSolver(grid=Grid(xmin=0, xmax=10, ncelm=10))"
    );
}

#[test]
fn test_default_config_per_model() {
    let linear = LinearScalarSolver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(linear.limiter(), Limiter::None);
    assert_eq!(linear.config().boundary, BoundaryTreatment::Periodic);

    let burgers = InviscidBurgersSolver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(burgers.limiter(), Limiter::FluxCorrected);

    let mut burgers = burgers.with_config(MarchConfig::default());
    assert_eq!(burgers.limiter(), Limiter::None);
    burgers.set_config(MarchConfig::default().with_boundary(BoundaryTreatment::Extrapolate));
    assert_eq!(burgers.config().boundary, BoundaryTreatment::Extrapolate);
}

#[test]
fn test_model_parameters() {
    let solver = Solver::with_model(grid10(), 1, 0.2, LinearScalar::new(-2.0)).unwrap();
    assert_eq!(solver.model().velocity, -2.0);
}

#[test]
fn test_set_time_increment() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    solver.set_time_increment(0.4).unwrap();
    assert_eq!(solver.dt(), 0.4);
    assert_eq!(solver.hdt(), 0.2);
    assert_eq!(solver.qdt(), 0.1);
    assert_eq!(solver.selm(0, Plane::Even).unwrap().dt(), 0.4);
}

#[test]
fn test_set_time_increment_rejects_non_finite() {
    let mut solver = LinearScalarSolver::new(grid10(), 1, 0.2).unwrap();
    solver.set_so0(0, &[1.0; 11], Plane::Even).unwrap();

    let err = solver.set_time_increment(f64::NAN).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "LinearScalarSolver::set_time_increment(time_increment=nan) invalid argument: time_increment not finite"
    );
    assert!(solver.set_time_increment(f64::INFINITY).is_err());
    assert_eq!(solver.dt(), 0.2);

    // The solver keeps marching with the old increment
    solver.setup_march();
    solver.march_alpha2(1).unwrap();
    assert!(solver.get_so0(0, Plane::Even).unwrap().iter().all(|v| v.is_finite()));
}

#[test]
fn test_span() {
    let solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(solver.span(Plane::Even), 11);
    assert_eq!(solver.span(Plane::Odd), 10);
}

#[test]
fn test_so0_round_trip_matches_selms() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    let values: Vec<f64> = (0..11).map(|i| (i * i) as f64).collect();
    solver.set_so0(0, &values, Plane::Even).unwrap();

    let bulk = solver.get_so0(0, Plane::Even).unwrap();
    let each: Vec<f64> = solver.selms(Plane::Even).map(|se| se.so0(0)).collect();
    assert_eq!(bulk, values);
    assert_eq!(bulk, each);
    // The odd plane is left alone
    assert!(solver.get_so0(0, Plane::Odd).unwrap().iter().all(|&v| v == 0.0));
}

#[test]
fn test_so1_on_odd_plane() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    let slopes: Vec<f64> = (0..10).map(|i| -(i as f64)).collect();
    solver.set_so1(0, &slopes, Plane::Odd).unwrap();

    let each: Vec<f64> = solver.selms(Plane::Odd).map(|se| se.so1(0)).collect();
    assert_eq!(each, slopes);
    assert_eq!(solver.get_so1(0, Plane::Odd).unwrap(), slopes);
}

#[test]
fn test_channels_are_independent() {
    let mut solver: Solver = Solver::new(grid10(), 2, 0.2).unwrap();
    solver.set_so0(1, &[3.0; 11], Plane::Even).unwrap();
    assert!(solver.get_so0(0, Plane::Even).unwrap().iter().all(|&v| v == 0.0));
    assert!(solver.get_so0(1, Plane::Even).unwrap().iter().all(|&v| v == 3.0));
}

#[test]
fn test_variable_out_of_range() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    for plane in [Plane::Even, Plane::Odd] {
        let err = solver.get_so0(1, plane).unwrap_err();
        assert!(err.is_index_error());
        assert_eq!(err.to_string(), "get_so0(): out of nvar range");
        let err = solver.get_so1(1, plane).unwrap_err();
        assert_eq!(err.to_string(), "get_so1(): out of nvar range");
    }
    assert!(solver.set_so0(1, &[0.0; 11], Plane::Even).is_err());
    assert!(solver.get_so0p(3, Plane::Even).is_err());
}

#[test]
fn test_wrong_length() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    let err = solver.set_so0(0, &[1.0; 3], Plane::Even).unwrap_err();
    assert!(matches!(err, Error::Index(_)));
    assert_eq!(
        err.to_string(),
        "set_so0(): input wrong size (expected 11, got 3)"
    );
    // Odd plane spans one element fewer
    assert!(solver.set_so1(0, &[1.0; 11], Plane::Odd).is_err());
    assert!(solver.set_cfl(&[0.5; 10], Plane::Odd).is_ok());
}

#[test]
fn test_cfl_accessors() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    let cfl: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
    solver.set_cfl(&cfl, Plane::Even).unwrap();
    assert_eq!(solver.get_cfl(Plane::Even), cfl);
    assert_eq!(solver.max_cfl(Plane::Even), 1.0);
    assert_eq!(solver.max_cfl(Plane::Odd), 0.0);
}

#[test]
fn test_coordinates() {
    let solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    let even: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let odd: Vec<f64> = (0..10).map(|i| i as f64 + 0.5).collect();
    assert_eq!(solver.x(Plane::Even), even);
    assert_eq!(solver.xctr(Plane::Even), even);
    assert_eq!(solver.x(Plane::Odd), odd);
    assert_eq!(solver.xctr(Plane::Odd), odd);
}

#[test]
fn test_so0p_of_linear_profile() {
    let mut solver = LinearScalarSolver::new(grid10(), 1, 0.2).unwrap();
    solver.set_so0(0, &[2.0; 11], Plane::Even).unwrap();
    solver.set_so1(0, &[1.0; 11], Plane::Even).unwrap();
    // u - hdt * a * ux with the element centered on its node
    for value in solver.get_so0p(0, Plane::Even).unwrap() {
        assert!((value - 1.9).abs() < 1e-14);
    }
}

#[test]
fn test_iterators() {
    let solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    assert_eq!(solver.celms(Plane::Even).len(), 10);
    assert_eq!(solver.celms(Plane::Odd).len(), 9);
    assert_eq!(solver.selms(Plane::Even).len(), 11);
    assert_eq!(solver.selms(Plane::Odd).len(), 10);

    let indices: Vec<isize> = solver.celms(Plane::Odd).map(|ce| ce.index()).collect();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
    assert!(solver.selms(Plane::Odd).all(|se| se.on_odd_plane()));

    let mut it = solver.selms(Plane::Even);
    assert_eq!(
        it.to_string(),
        "SolverElementIterator(selm, on_even_plane, current=0, nelem=11)"
    );
    assert_eq!(it.by_ref().count(), 11);
    assert!(it.next().is_none());
    assert!(it.next().is_none());
    assert_eq!(
        it.to_string(),
        "SolverElementIterator(selm, on_even_plane, current=11, nelem=11)"
    );
}

#[test]
fn test_clone_shares_grid() {
    let mut solver: Solver = Solver::new(grid10(), 1, 0.2).unwrap();
    solver.set_so0(0, &[1.0; 11], Plane::Even).unwrap();

    let mut copy = solver.clone();
    assert!(copy.shares_grid(&solver));
    copy.set_so0(0, &[2.0; 11], Plane::Even).unwrap();
    // Field data is not shared
    assert_eq!(solver.get_so0(0, Plane::Even).unwrap(), vec![1.0; 11]);

    let own = solver.clone_with_grid();
    assert!(!own.shares_grid(&solver));
    assert_eq!(own.grid(), solver.grid());
    assert_eq!(own.get_so0(0, Plane::Even).unwrap(), vec![1.0; 11]);
}

#[test]
fn test_solvers_share_grid_across_models() {
    let grid = grid10();
    let a = LinearScalarSolver::new(Arc::clone(&grid), 1, 0.2).unwrap();
    let b = InviscidBurgersSolver::new(Arc::clone(&grid), 1, 0.2).unwrap();
    assert!(a.shares_grid(&b));
    assert!(Arc::ptr_eq(a.grid_arc(), &grid));
}

#[test]
fn test_so0p_matches_cursors() {
    let mut solver = InviscidBurgersSolver::new(grid10(), 1, 0.2).unwrap();
    let u: Vec<f64> = (0..10).map(|i| (i as f64 * 0.3).sin()).collect();
    let ux: Vec<f64> = (0..10).map(|i| (i as f64 * 0.3).cos()).collect();
    solver.set_so0(0, &u, Plane::Odd).unwrap();
    solver.set_so1(0, &ux, Plane::Odd).unwrap();

    let each: Vec<f64> = solver.selms(Plane::Odd).map(|se| se.so0p(0)).collect();
    assert_eq!(solver.get_so0p(0, Plane::Odd).unwrap(), each);
}
