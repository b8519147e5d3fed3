use approx::assert_abs_diff_eq;
use submarine::{catalog, Vehicle};

fn ohio() -> Vehicle {
    Vehicle::new(catalog::OHIO, catalog::ohio().unwrap())
}

#[test]
fn ohio_capacity_is_max_minus_empty() {
    let vehicle = ohio();
    assert_eq!(vehicle.constants().ballast_tank_capacity(), 19_764_000.0);
}

#[test]
fn filling_to_capacity_splits_evenly_and_centers_mass() {
    let mut vehicle = ohio();
    let state = vehicle.state_mut();
    state.set_total_water_mass(19_764_000.0);

    assert_eq!(state.water_mass_front_tank(), 9_882_000.0);
    assert_eq!(state.water_mass_back_tank(), 9_882_000.0);
    assert_abs_diff_eq!(state.center_of_mass().z, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(state.center_of_mass().length(), 0.0, epsilon = 1e-4);
}

#[test]
fn overfilling_clamps_tanks_but_records_requested_total() {
    let mut vehicle = ohio();
    let state = vehicle.state_mut();
    state.set_total_water_mass(30_000_000.0);

    assert_eq!(state.water_mass_front_tank(), 9_882_000.0);
    assert_eq!(state.water_mass_back_tank(), 9_882_000.0);
    // The stored total is the raw request, not the clamped tank sum.
    assert_eq!(state.total_water_mass(), 30_000_000.0);
    assert_ne!(
        state.water_mass_front_tank() + state.water_mass_back_tank(),
        state.total_water_mass()
    );
}

#[test]
fn single_tank_setter_skips_capacity_clamp() {
    let mut vehicle = ohio();
    let state = vehicle.state_mut();
    state.set_water_mass_back_tank(2_000_000.0);
    state.set_water_mass_front_tank(5_000_000.0);
    assert_eq!(state.total_water_mass(), 7_000_000.0);
    assert_eq!(state.water_mass_front_tank(), 5_000_000.0);

    // Well past the 9,882,000 kg a tank holds.
    state.set_water_mass_front_tank(15_000_000.0);
    assert_eq!(state.water_mass_front_tank(), 15_000_000.0);
    assert_eq!(state.total_water_mass(), 17_000_000.0);
}

#[test]
fn requests_within_capacity_keep_tank_sum_equal_to_total() {
    let mut vehicle = ohio();
    let capacity = vehicle.constants().ballast_tank_capacity();
    let max_tank = vehicle.constants().max_tank_mass();
    let state = vehicle.state_mut();

    // Start lopsided so the spill paths are exercised.
    state.set_water_mass_front_tank(9_000_000.0);
    state.set_water_mass_back_tank(500_000.0);

    for step in 0..=40 {
        let request = capacity * (step as f32 / 40.0);
        state.set_total_water_mass(request);
        let front = state.water_mass_front_tank();
        let back = state.water_mass_back_tank();
        assert!((0.0..=max_tank).contains(&front), "front {front} out of range");
        assert!((0.0..=max_tank).contains(&back), "back {back} out of range");
        assert_eq!(state.total_water_mass(), request);
        assert_abs_diff_eq!(front + back, request, epsilon = 4.0);
    }
}

#[test]
fn out_of_range_requests_never_leave_tank_bounds() {
    let mut vehicle = ohio();
    let max_tank = vehicle.constants().max_tank_mass();
    let state = vehicle.state_mut();

    for request in [-5.0e7, 4.0e7, -1.0, 0.0, 1.0e9, 12_345_678.0, -3.0e6] {
        state.set_total_water_mass(request);
        assert!(state.water_mass_front_tank() >= 0.0);
        assert!(state.water_mass_front_tank() <= max_tank);
        assert!(state.water_mass_back_tank() >= 0.0);
        assert!(state.water_mass_back_tank() <= max_tank);
        assert_eq!(state.total_water_mass(), request);
    }
}

#[test]
fn overflow_in_one_tank_fills_deficit_in_other() {
    let mut vehicle = ohio();
    let max_tank = vehicle.constants().max_tank_mass();
    let state = vehicle.state_mut();

    state.set_water_mass_front_tank(max_tank);
    state.set_water_mass_back_tank(0.0);
    // +2,000,000 → front candidate overflows by 1,000,000, back takes it.
    state.set_total_water_mass(max_tank + 2_000_000.0);
    assert_eq!(state.water_mass_front_tank(), max_tank);
    assert_eq!(state.water_mass_back_tank(), 2_000_000.0);
}
