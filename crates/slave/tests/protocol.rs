//! Protocol behavior of the slave surface: lifecycle gating, value access,
//! lazy recomputation, logging control, and status queries.

use tether_core::{EventInfo, LogCategory, ModelAdapter, ModelLayout, Status, StatusKind, ValueStore};
use tether_slave::{Phase, RecordingSink, SimulationMode, Slave};

/// Instrumented model with all four variable tables and a derived output.
///
/// Real 2 is recomputed as `reals[0] + reals[1]` by `calculate_values`, and
/// the call count is observable for the recompute-once property.
#[derive(Debug, Default)]
struct TestModel {
    calculate_values_calls: usize,
}

impl ModelAdapter for TestModel {
    fn layout(&self) -> ModelLayout {
        ModelLayout {
            reals: 3,
            integers: 2,
            booleans: 2,
            strings: 2,
            ..ModelLayout::default()
        }
    }

    fn set_start_values(&mut self, values: &mut ValueStore) {
        values.set_real(0, 1.0).unwrap();
        values.set_real(1, 2.0).unwrap();
        values.set_real(2, 0.0).unwrap();
        values.set_integer(0, 7).unwrap();
        values.set_integer(1, 0).unwrap();
        values.set_boolean(0, false).unwrap();
        values.set_boolean(1, true).unwrap();
        values.set_string(0, "alpha").unwrap();
        values.set_string(1, "").unwrap();
    }

    fn calculate_values(&mut self, values: &mut ValueStore) {
        self.calculate_values_calls += 1;
        let sum = values.real(0).unwrap() + values.real(1).unwrap();
        values.set_real(2, sum).unwrap();
    }

    fn calculate_derivatives(&mut self, _values: &mut ValueStore, _time: f64) {}

    fn event_indicator(&self, _values: &ValueStore, _index: usize) -> f64 {
        0.0
    }

    fn activate_events(
        &mut self,
        _values: &mut ValueStore,
        info: &mut EventInfo,
        _time_event: bool,
    ) {
        *info = EventInfo::default();
    }
}

fn instantiated(mode: SimulationMode) -> Slave<TestModel> {
    Slave::instantiate(
        "test",
        mode,
        TestModel::default(),
        Box::new(RecordingSink::new()),
        false,
    )
    .expect("instantiation should succeed")
}

/// Slave driven to initialization mode.
fn initialized(mode: SimulationMode) -> Slave<TestModel> {
    let mut slave = instantiated(mode);
    assert_eq!(slave.setup_experiment(false, 0.0, 0.0, false, 0.0), Status::Ok);
    assert_eq!(slave.enter_initialization_mode(), Status::Ok);
    slave
}

/// Co-simulation slave driven to the step-complete phase.
fn step_ready() -> Slave<TestModel> {
    let mut slave = initialized(SimulationMode::CoSimulation);
    assert_eq!(slave.exit_initialization_mode(), Status::Ok);
    slave
}

#[test]
fn set_then_get_real_round_trips_exactly() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.set_real(&[0, 1], &[2.5, -3.25]), Status::Ok);

    let mut values = [0.0; 2];
    assert_eq!(slave.get_real(&[0, 1], &mut values), Status::Ok);
    assert_eq!(values, [2.5, -3.25]);
}

#[test]
fn untouched_references_keep_their_start_values() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.set_real(&[0], &[10.0]), Status::Ok);

    let mut values = [0.0; 2];
    assert_eq!(slave.get_real(&[0, 1], &mut values), Status::Ok);
    assert_eq!(values[0], 10.0);
    assert_eq!(values[1], 2.0);
}

#[test]
fn recompute_runs_exactly_once_per_write_read_cycle() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    // First read flushes the instantiation-time dirty flag.
    let mut out = [0.0];
    assert_eq!(slave.get_real(&[2], &mut out), Status::Ok);
    let baseline = slave.model().calculate_values_calls;

    assert_eq!(slave.set_real(&[0], &[5.0]), Status::Ok);

    // Any number of reads after one write recomputes exactly once.
    assert_eq!(slave.get_real(&[2], &mut out), Status::Ok);
    assert_eq!(out[0], 7.0);
    let mut int_out = [0];
    assert_eq!(slave.get_integer(&[0], &mut int_out), Status::Ok);
    let mut bool_out = [false];
    assert_eq!(slave.get_boolean(&[1], &mut bool_out), Status::Ok);
    assert_eq!(slave.get_real(&[2], &mut out), Status::Ok);

    assert_eq!(slave.model().calculate_values_calls, baseline + 1);
}

#[test]
fn set_applies_in_order_and_stops_at_first_invalid_reference() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.set_real(&[0, 9, 1], &[5.0, 6.0, 7.0]), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);

    // Reads are still legal in the Error phase: the entry before the invalid
    // reference was applied, the one after it was not.
    let mut values = [0.0; 2];
    assert_eq!(slave.get_real(&[0, 1], &mut values), Status::Ok);
    assert_eq!(values[0], 5.0);
    assert_eq!(values[1], 2.0);
}

#[test]
fn mismatched_slice_lengths_are_rejected() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    let mut too_short = [0.0];
    assert_eq!(slave.get_real(&[0, 1], &mut too_short), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn string_values_round_trip() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.set_string(&[0, 1], &["hello", "world"]), Status::Ok);

    let mut values = [String::new(), String::new()];
    assert_eq!(slave.get_string(&[0, 1], &mut values), Status::Ok);
    assert_eq!(values[0], "hello");
    assert_eq!(values[1], "world");
}

#[test]
fn boolean_and_integer_values_round_trip() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.set_integer(&[1], &[42]), Status::Ok);
    assert_eq!(slave.set_boolean(&[0], &[true]), Status::Ok);

    let mut ints = [0; 2];
    assert_eq!(slave.get_integer(&[0, 1], &mut ints), Status::Ok);
    assert_eq!(ints, [7, 42]);

    let mut bools = [false; 2];
    assert_eq!(slave.get_boolean(&[0, 1], &mut bools), Status::Ok);
    assert_eq!(bools, [true, true]);
}

#[test]
fn getters_are_illegal_before_initialization_mode() {
    let mut slave = instantiated(SimulationMode::CoSimulation);

    let mut values = [0.0];
    assert_eq!(slave.get_real(&[0], &mut values), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn do_step_is_illegal_outside_step_complete() {
    let mut slave = initialized(SimulationMode::CoSimulation);

    assert_eq!(slave.do_step(0.0, 0.01, true), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn do_step_rejects_non_positive_step_size() {
    for bad_step in [0.0, -0.5] {
        let mut slave = step_ready();
        let before = slave.time();

        assert_eq!(slave.do_step(0.0, bad_step, true), Status::Error);
        assert_eq!(slave.phase(), Phase::Error);
        assert_eq!(slave.time(), before);
    }
}

#[test]
fn cancel_step_always_returns_error() {
    // Synchronous slaves are never in the step-in-progress phase, so the
    // cancel operation is rejected everywhere it can be issued.
    let mut slave = instantiated(SimulationMode::CoSimulation);
    assert_eq!(slave.cancel_step(), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);

    let mut slave = step_ready();
    assert_eq!(slave.cancel_step(), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn exit_initialization_routes_by_simulation_mode() {
    let mut me = initialized(SimulationMode::ModelExchange);
    assert_eq!(me.exit_initialization_mode(), Status::Ok);
    assert_eq!(me.phase(), Phase::EventMode);

    let mut cs = initialized(SimulationMode::CoSimulation);
    assert_eq!(cs.exit_initialization_mode(), Status::Ok);
    assert_eq!(cs.phase(), Phase::StepComplete);
}

#[test]
fn terminate_allows_reads_but_not_writes() {
    let mut slave = step_ready();

    assert_eq!(slave.terminate(), Status::Ok);
    assert_eq!(slave.phase(), Phase::Terminated);

    let mut values = [0.0];
    assert_eq!(slave.get_real(&[0], &mut values), Status::Ok);

    assert_eq!(slave.set_real(&[0], &[1.0]), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn reset_restores_start_values() {
    let mut slave = initialized(SimulationMode::CoSimulation);
    assert_eq!(slave.set_real(&[0], &[99.0]), Status::Ok);

    assert_eq!(slave.reset(), Status::Ok);
    assert_eq!(slave.phase(), Phase::Instantiated);

    assert_eq!(slave.enter_initialization_mode(), Status::Ok);
    let mut values = [0.0];
    assert_eq!(slave.get_real(&[0], &mut values), Status::Ok);
    assert_eq!(values[0], 1.0);
}

#[test]
fn unknown_logging_category_yields_warning() {
    let sink = RecordingSink::new();
    let mut slave = Slave::instantiate(
        "test",
        SimulationMode::CoSimulation,
        TestModel::default(),
        Box::new(sink.clone()),
        true,
    )
    .unwrap();

    assert_eq!(
        slave.set_debug_logging(true, &["logError", "logBogus"]),
        Status::Warning
    );

    let complaints: Vec<_> = sink
        .records()
        .into_iter()
        .filter(|record| record.status == Status::Warning)
        .collect();
    assert_eq!(complaints.len(), 1);
    assert!(complaints[0]
        .message
        .contains("logging category 'logBogus' is not supported"));
}

#[test]
fn debug_logging_with_no_categories_toggles_everything() {
    let sink = RecordingSink::new();
    let mut slave = Slave::instantiate(
        "test",
        SimulationMode::CoSimulation,
        TestModel::default(),
        Box::new(sink.clone()),
        false,
    )
    .unwrap();

    // Logging starts disabled: nothing is recorded.
    assert_eq!(slave.setup_experiment(false, 0.0, 0.0, false, 0.0), Status::Ok);
    assert!(sink.records().is_empty());

    assert_eq!(slave.set_debug_logging(true, &[]), Status::Ok);
    assert!(slave.logging_on());
    assert_eq!(slave.enter_initialization_mode(), Status::Ok);
    assert!(!sink.records_for(LogCategory::Call).is_empty());
}

#[test]
fn status_queries_discard_unless_supported() {
    let mut slave = step_ready();

    let mut status = Status::Ok;
    assert_eq!(slave.get_status(StatusKind::DoStep, &mut status), Status::Discard);

    let mut int_value = 0;
    assert_eq!(
        slave.get_integer_status(StatusKind::Pending, &mut int_value),
        Status::Discard
    );

    let mut text = String::new();
    assert_eq!(
        slave.get_string_status(StatusKind::LastSuccessfulTime, &mut text),
        Status::Discard
    );

    // The slave stays usable after a Discard.
    assert_eq!(slave.phase(), Phase::StepComplete);
}

#[test]
fn last_successful_time_reports_current_time() {
    let mut slave = step_ready();
    assert_eq!(slave.do_step(0.0, 0.5, true), Status::Ok);

    let mut time = 0.0;
    assert_eq!(
        slave.get_real_status(StatusKind::LastSuccessfulTime, &mut time),
        Status::Ok
    );
    assert_eq!(time, 0.5);
}

#[test]
fn terminated_status_reports_model_request() {
    let mut slave = step_ready();

    let mut terminated = true;
    assert_eq!(
        slave.get_boolean_status(StatusKind::Terminated, &mut terminated),
        Status::Ok
    );
    assert!(!terminated);
}

#[test]
fn unsupported_operations_error_without_changing_phase() {
    let mut slave = step_ready();

    assert_eq!(slave.save_state(), Status::Error);
    assert_eq!(slave.serialize_state(), Status::Error);
    assert_eq!(slave.get_directional_derivative(), Status::Error);
    assert_eq!(slave.phase(), Phase::StepComplete);
}

#[test]
fn input_derivative_operations_are_rejected() {
    let mut slave = step_ready();

    assert_eq!(
        slave.set_real_input_derivatives(&[0], &[1], &[1.0]),
        Status::Error
    );

    let mut out = [5.0];
    assert_eq!(
        slave.get_real_output_derivatives(&[0], &[1], &mut out),
        Status::Error
    );
    assert_eq!(out, [0.0]);
    assert_eq!(slave.phase(), Phase::StepComplete);
}

#[test]
fn setup_experiment_is_only_legal_once_instantiated() {
    let mut slave = step_ready();

    assert_eq!(slave.setup_experiment(false, 0.0, 0.0, false, 0.0), Status::Error);
    assert_eq!(slave.phase(), Phase::Error);
}

#[test]
fn interface_constants_are_fixed() {
    assert_eq!(tether_slave::INTERFACE_VERSION, "2.0");
    assert_eq!(tether_slave::TYPES_PLATFORM, "default");
}
