use tether_core::{
    EventInfo, LogCategory, LogFilter, LogSink, ModelAdapter, Status, StatusKind, ValueError,
    ValueStore,
};
use tether_solvers::{EventScanner, HeunIntegrator};

use crate::error::InstantiateError;
use crate::operation::Operation;
use crate::phase::Phase;

/// Version string of the implemented interchange interface.
pub const INTERFACE_VERSION: &str = "2.0";

/// Platform identifier for the default (native `f64`) type mapping.
pub const TYPES_PLATFORM: &str = "default";

/// Interface flavor a slave is instantiated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// The master integrates continuous states itself.
    ModelExchange,
    /// The slave advances across communication intervals on its own.
    CoSimulation,
}

/// A simulation slave: one model instance behind the protocol surface.
///
/// Every operation is gated by the call-sequence state machine; an operation
/// invoked outside its legal phases moves the slave to the Error phase and
/// returns [`Status::Error`] without side effects. Getter and setter
/// out-parameters are slices, applied in reference order.
pub struct Slave<M: ModelAdapter> {
    pub(crate) instance_name: String,
    pub(crate) mode: SimulationMode,
    pub(crate) time: f64,
    pub(crate) phase: Phase,
    pub(crate) values: ValueStore,
    pub(crate) model: M,
    pub(crate) integrator: HeunIntegrator,
    pub(crate) scanner: EventScanner,
    pub(crate) event_info: EventInfo,
    pub(crate) filter: LogFilter,
    pub(crate) sink: Box<dyn LogSink>,
    pub(crate) logging_on: bool,
}

impl<M: ModelAdapter> Slave<M> {
    /// Creates a slave wrapping `model`.
    ///
    /// The model's layout is validated and its start values applied; the
    /// slave starts in the Instantiated phase with derived values marked for
    /// recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`InstantiateError`] when the instance name is empty or the
    /// model's layout declares invalid bindings.
    pub fn instantiate(
        instance_name: &str,
        mode: SimulationMode,
        model: M,
        sink: Box<dyn LogSink>,
        logging_on: bool,
    ) -> Result<Self, InstantiateError> {
        if instance_name.is_empty() {
            return Err(InstantiateError::MissingInstanceName);
        }

        let layout = model.layout();
        let values = layout.build()?;

        let mut filter = LogFilter::default();
        filter.set_all(logging_on);

        let mut slave = Self {
            instance_name: instance_name.to_owned(),
            mode,
            time: 0.0,
            phase: Phase::Instantiated,
            integrator: HeunIntegrator::new(layout.states.len()),
            scanner: EventScanner::new(layout.event_indicators),
            event_info: EventInfo::default(),
            values,
            model,
            filter,
            sink,
            logging_on,
        };

        slave.model.set_start_values(&mut slave.values);
        slave.values.mark_dirty();
        slave.log(
            Status::Ok,
            LogCategory::Call,
            &format!("instantiate: {instance_name}"),
        );

        Ok(slave)
    }

    #[must_use]
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    #[must_use]
    pub fn simulation_mode(&self) -> SimulationMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The wrapped model, for inspection.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Whether logging was last enabled, by instantiation or
    /// [`set_debug_logging`](Slave::set_debug_logging).
    #[must_use]
    pub fn logging_on(&self) -> bool {
        self.logging_on
    }

    pub(crate) fn log(&mut self, status: Status, category: LogCategory, message: &str) {
        if self.filter.is_logged(category) {
            self.sink
                .message(&self.instance_name, status, category, message);
        }
    }

    /// Gate shared by every operation: outside the legal phases the slave
    /// moves to Error and the call is rejected.
    pub(crate) fn phase_is_invalid(&mut self, operation: Operation) -> bool {
        if operation.legal_phases().contains(self.phase) {
            return false;
        }
        self.phase = Phase::Error;
        self.log(
            Status::Error,
            LogCategory::Error,
            &format!("{}: illegal call sequence", operation.name()),
        );
        true
    }

    pub(crate) fn count_is_invalid(
        &mut self,
        operation: Operation,
        argument: &str,
        actual: usize,
        expected: usize,
    ) -> bool {
        if actual == expected {
            return false;
        }
        self.phase = Phase::Error;
        self.log(
            Status::Error,
            LogCategory::Error,
            &format!(
                "{}: invalid argument {argument} = {actual}, expected {expected}",
                operation.name()
            ),
        );
        true
    }

    pub(crate) fn reject(&mut self, operation: Operation, error: &ValueError) -> Status {
        self.log(
            Status::Error,
            LogCategory::Error,
            &format!("{}: {error}", operation.name()),
        );
        self.phase = Phase::Error;
        Status::Error
    }

    /// Runs the model's value recomputation once if any values are stale.
    pub(crate) fn refresh_values(&mut self, requested: usize) {
        if requested > 0 && self.values.is_dirty() {
            self.model.calculate_values(&mut self.values);
            self.values.clear_dirty();
        }
    }

    fn unsupported(&mut self, operation: Operation) -> Status {
        if self.phase_is_invalid(operation) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, operation.name());
        self.log(
            Status::Error,
            LogCategory::Error,
            &format!("{}: not implemented", operation.name()),
        );
        Status::Error
    }

    /// Selects categories to log.
    ///
    /// An empty list applies `on` to every category. Unknown category names
    /// are reported through the sink and yield a Warning status.
    pub fn set_debug_logging(&mut self, on: bool, categories: &[&str]) -> Status {
        if self.phase_is_invalid(Operation::SetDebugLogging) {
            return Status::Error;
        }
        self.logging_on = on;
        self.log(Status::Ok, LogCategory::Call, "set_debug_logging");

        self.filter.set_all(false);
        if categories.is_empty() {
            self.filter.set_all(on);
            return Status::Ok;
        }

        let mut status = Status::Ok;
        for name in categories {
            match LogCategory::from_name(name) {
                Some(category) => self.filter.set(category, on),
                None => {
                    // Reported unfiltered: the filter was just rebuilt and
                    // may have silenced the error category.
                    self.sink.message(
                        &self.instance_name,
                        Status::Warning,
                        LogCategory::Error,
                        &format!("logging category '{name}' is not supported"),
                    );
                    status = Status::Warning;
                }
            }
        }
        status
    }

    /// Sets the experiment start time and re-arms event detection.
    pub fn setup_experiment(
        &mut self,
        tolerance_defined: bool,
        tolerance: f64,
        start_time: f64,
        stop_time_defined: bool,
        stop_time: f64,
    ) -> Status {
        if self.phase_is_invalid(Operation::SetupExperiment) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!(
                "setup_experiment: tolerance_defined={tolerance_defined} tolerance={tolerance} \
                 start_time={start_time} stop_time_defined={stop_time_defined} stop_time={stop_time}"
            ),
        );

        self.time = start_time;
        self.scanner.rearm(start_time);

        Status::Ok
    }

    pub fn enter_initialization_mode(&mut self) -> Status {
        if self.phase_is_invalid(Operation::EnterInitializationMode) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "enter_initialization_mode");
        self.phase = Phase::InitializationMode;
        Status::Ok
    }

    /// Leaves initialization: model-exchange slaves continue in event mode,
    /// co-simulation slaves sit between steps.
    pub fn exit_initialization_mode(&mut self) -> Status {
        if self.phase_is_invalid(Operation::ExitInitializationMode) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "exit_initialization_mode");

        // Flush any pending recomputation so derived values are ready.
        if self.values.is_dirty() {
            self.model.calculate_values(&mut self.values);
            self.values.clear_dirty();
        }

        self.phase = match self.mode {
            SimulationMode::ModelExchange => Phase::EventMode,
            SimulationMode::CoSimulation => Phase::StepComplete,
        };
        Status::Ok
    }

    pub fn terminate(&mut self) -> Status {
        if self.phase_is_invalid(Operation::Terminate) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "terminate");
        self.phase = Phase::Terminated;
        Status::Ok
    }

    /// Returns the slave to the Instantiated phase with fresh start values.
    pub fn reset(&mut self) -> Status {
        if self.phase_is_invalid(Operation::Reset) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "reset");

        self.phase = Phase::Instantiated;
        self.model.set_start_values(&mut self.values);
        self.values.mark_dirty();

        Status::Ok
    }

    pub fn get_real(&mut self, references: &[usize], values: &mut [f64]) -> Status {
        if self.phase_is_invalid(Operation::GetReal) {
            return Status::Error;
        }
        if self.count_is_invalid(Operation::GetReal, "values", values.len(), references.len()) {
            return Status::Error;
        }
        self.refresh_values(references.len());

        for (slot, &reference) in values.iter_mut().zip(references) {
            match self.values.real(reference) {
                Ok(value) => {
                    *slot = value;
                    self.log(
                        Status::Ok,
                        LogCategory::Call,
                        &format!("get_real: #r{reference}# = {value}"),
                    );
                }
                Err(error) => return self.reject(Operation::GetReal, &error),
            }
        }
        Status::Ok
    }

    pub fn get_integer(&mut self, references: &[usize], values: &mut [i32]) -> Status {
        if self.phase_is_invalid(Operation::GetInteger) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetInteger,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.refresh_values(references.len());

        for (slot, &reference) in values.iter_mut().zip(references) {
            match self.values.integer(reference) {
                Ok(value) => {
                    *slot = value;
                    self.log(
                        Status::Ok,
                        LogCategory::Call,
                        &format!("get_integer: #i{reference}# = {value}"),
                    );
                }
                Err(error) => return self.reject(Operation::GetInteger, &error),
            }
        }
        Status::Ok
    }

    pub fn get_boolean(&mut self, references: &[usize], values: &mut [bool]) -> Status {
        if self.phase_is_invalid(Operation::GetBoolean) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetBoolean,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.refresh_values(references.len());

        for (slot, &reference) in values.iter_mut().zip(references) {
            match self.values.boolean(reference) {
                Ok(value) => {
                    *slot = value;
                    self.log(
                        Status::Ok,
                        LogCategory::Call,
                        &format!("get_boolean: #b{reference}# = {value}"),
                    );
                }
                Err(error) => return self.reject(Operation::GetBoolean, &error),
            }
        }
        Status::Ok
    }

    pub fn get_string(&mut self, references: &[usize], values: &mut [String]) -> Status {
        if self.phase_is_invalid(Operation::GetString) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetString,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.refresh_values(references.len());

        for index in 0..references.len() {
            let reference = references[index];
            let message = match self.values.string(reference) {
                Ok(text) => {
                    let message = format!("get_string: #s{reference}# = '{text}'");
                    values[index].clear();
                    values[index].push_str(text);
                    message
                }
                Err(error) => return self.reject(Operation::GetString, &error),
            };
            self.log(Status::Ok, LogCategory::Call, &message);
        }
        Status::Ok
    }

    pub fn set_real(&mut self, references: &[usize], values: &[f64]) -> Status {
        if self.phase_is_invalid(Operation::SetReal) {
            return Status::Error;
        }
        if self.count_is_invalid(Operation::SetReal, "values", values.len(), references.len()) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_real: {} references", references.len()),
        );

        // Entries are applied in order; the first invalid reference stops
        // the call with the earlier entries already applied.
        for (&reference, &value) in references.iter().zip(values) {
            if let Err(error) = self.values.set_real(reference, value) {
                return self.reject(Operation::SetReal, &error);
            }
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("set_real: #r{reference}# = {value}"),
            );
        }
        if !references.is_empty() {
            self.values.mark_dirty();
        }
        Status::Ok
    }

    pub fn set_integer(&mut self, references: &[usize], values: &[i32]) -> Status {
        if self.phase_is_invalid(Operation::SetInteger) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::SetInteger,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_integer: {} references", references.len()),
        );

        for (&reference, &value) in references.iter().zip(values) {
            if let Err(error) = self.values.set_integer(reference, value) {
                return self.reject(Operation::SetInteger, &error);
            }
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("set_integer: #i{reference}# = {value}"),
            );
        }
        if !references.is_empty() {
            self.values.mark_dirty();
        }
        Status::Ok
    }

    pub fn set_boolean(&mut self, references: &[usize], values: &[bool]) -> Status {
        if self.phase_is_invalid(Operation::SetBoolean) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::SetBoolean,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_boolean: {} references", references.len()),
        );

        for (&reference, &value) in references.iter().zip(values) {
            if let Err(error) = self.values.set_boolean(reference, value) {
                return self.reject(Operation::SetBoolean, &error);
            }
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("set_boolean: #b{reference}# = {value}"),
            );
        }
        if !references.is_empty() {
            self.values.mark_dirty();
        }
        Status::Ok
    }

    pub fn set_string(&mut self, references: &[usize], values: &[&str]) -> Status {
        if self.phase_is_invalid(Operation::SetString) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::SetString,
            "values",
            values.len(),
            references.len(),
        ) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_string: {} references", references.len()),
        );

        for (&reference, &value) in references.iter().zip(values) {
            if let Err(error) = self.values.set_string(reference, value) {
                return self.reject(Operation::SetString, &error);
            }
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("set_string: #s{reference}# = '{value}'"),
            );
        }
        if !references.is_empty() {
            self.values.mark_dirty();
        }
        Status::Ok
    }

    // --- Model-exchange operations ---

    pub fn enter_event_mode(&mut self) -> Status {
        if self.phase_is_invalid(Operation::EnterEventMode) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "enter_event_mode");
        self.phase = Phase::EventMode;
        Status::Ok
    }

    /// Runs one discrete-state update pass and reports the outcome.
    ///
    /// A scheduled time event that is due at the current time is passed to
    /// the model's activation hook.
    pub fn new_discrete_states(&mut self, info: &mut EventInfo) -> Status {
        if self.phase_is_invalid(Operation::NewDiscreteStates) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "new_discrete_states");

        self.event_info.clear_update_flags();

        let time_event = self.event_info.next_event_time_defined
            && self.event_info.next_event_time <= self.time;

        self.model
            .activate_events(&mut self.values, &mut self.event_info, time_event);

        *info = self.event_info;
        Status::Ok
    }

    pub fn enter_continuous_time_mode(&mut self) -> Status {
        if self.phase_is_invalid(Operation::EnterContinuousTimeMode) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "enter_continuous_time_mode");
        self.phase = Phase::ContinuousTimeMode;
        Status::Ok
    }

    /// Acknowledges a completed master-side integrator step.
    ///
    /// This slave never asks to enter event mode or terminate here; both
    /// out-flags are always cleared.
    pub fn completed_integrator_step(
        &mut self,
        no_set_state_prior: bool,
        enter_event_mode: &mut bool,
        terminate_simulation: &mut bool,
    ) -> Status {
        if self.phase_is_invalid(Operation::CompletedIntegratorStep) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("completed_integrator_step: no_set_state_prior={no_set_state_prior}"),
        );

        *enter_event_mode = false;
        *terminate_simulation = false;
        Status::Ok
    }

    pub fn set_time(&mut self, time: f64) -> Status {
        if self.phase_is_invalid(Operation::SetTime) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_time: time={time}"),
        );
        self.time = time;
        Status::Ok
    }

    pub fn set_continuous_states(&mut self, states: &[f64]) -> Status {
        if self.phase_is_invalid(Operation::SetContinuousStates) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::SetContinuousStates,
            "states",
            states.len(),
            self.values.state_count(),
        ) {
            return Status::Error;
        }

        for (index, &value) in states.iter().enumerate() {
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("set_continuous_states: #state{index}# = {value}"),
            );
            self.values.set_state(index, value);
        }
        Status::Ok
    }

    /// Evaluates and copies out the state derivatives.
    pub fn get_derivatives(&mut self, derivatives: &mut [f64]) -> Status {
        if self.phase_is_invalid(Operation::GetDerivatives) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetDerivatives,
            "derivatives",
            derivatives.len(),
            self.values.state_count(),
        ) {
            return Status::Error;
        }

        self.model.calculate_derivatives(&mut self.values, self.time);

        for (index, slot) in derivatives.iter_mut().enumerate() {
            *slot = self.values.derivative(index);
            let value = *slot;
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("get_derivatives: #deriv{index}# = {value}"),
            );
        }
        Status::Ok
    }

    pub fn get_event_indicators(&mut self, indicators: &mut [f64]) -> Status {
        if self.phase_is_invalid(Operation::GetEventIndicators) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetEventIndicators,
            "indicators",
            indicators.len(),
            self.scanner.indicator_count(),
        ) {
            return Status::Error;
        }

        for (index, slot) in indicators.iter_mut().enumerate() {
            *slot = self.model.event_indicator(&self.values, index);
            let value = *slot;
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("get_event_indicators: z{index} = {value}"),
            );
        }
        Status::Ok
    }

    pub fn get_continuous_states(&mut self, states: &mut [f64]) -> Status {
        if self.phase_is_invalid(Operation::GetContinuousStates) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetContinuousStates,
            "states",
            states.len(),
            self.values.state_count(),
        ) {
            return Status::Error;
        }

        for (index, slot) in states.iter_mut().enumerate() {
            *slot = self.values.state(index);
            let value = *slot;
            self.log(
                Status::Ok,
                LogCategory::Call,
                &format!("get_continuous_states: #state{index}# = {value}"),
            );
        }
        Status::Ok
    }

    /// Nominal state magnitudes; this implementation reports 1.0 for all.
    pub fn get_nominals_of_continuous_states(&mut self, nominals: &mut [f64]) -> Status {
        if self.phase_is_invalid(Operation::GetNominalsOfContinuousStates) {
            return Status::Error;
        }
        if self.count_is_invalid(
            Operation::GetNominalsOfContinuousStates,
            "nominals",
            nominals.len(),
            self.values.state_count(),
        ) {
            return Status::Error;
        }

        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!(
                "get_nominals_of_continuous_states: nominals[0..{}] = 1.0",
                nominals.len()
            ),
        );
        nominals.fill(1.0);
        Status::Ok
    }

    // --- Co-simulation operations ---

    /// Input interpolation is not supported by this slave.
    pub fn set_real_input_derivatives(
        &mut self,
        references: &[usize],
        _orders: &[i32],
        _values: &[f64],
    ) -> Status {
        if self.phase_is_invalid(Operation::SetRealInputDerivatives) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("set_real_input_derivatives: {} references", references.len()),
        );
        self.log(
            Status::Error,
            LogCategory::Error,
            "set_real_input_derivatives: this slave cannot interpolate inputs",
        );
        Status::Error
    }

    /// Output derivatives are not provided by this slave; the output slots
    /// are zeroed.
    pub fn get_real_output_derivatives(
        &mut self,
        references: &[usize],
        _orders: &[i32],
        values: &mut [f64],
    ) -> Status {
        if self.phase_is_invalid(Operation::GetRealOutputDerivatives) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("get_real_output_derivatives: {} references", references.len()),
        );
        self.log(
            Status::Error,
            LogCategory::Error,
            "get_real_output_derivatives: this slave cannot compute output derivatives",
        );

        values.fill(0.0);
        Status::Error
    }

    /// Cancels an asynchronous step.
    ///
    /// A synchronous slave is never in a cancelable in-progress step, so the
    /// gate always rejects this call.
    pub fn cancel_step(&mut self) -> Status {
        if self.phase_is_invalid(Operation::CancelStep) {
            return Status::Error;
        }
        self.log(Status::Ok, LogCategory::Call, "cancel_step");
        self.log(
            Status::Error,
            LogCategory::Error,
            "cancel_step: no asynchronous step is in progress",
        );
        Status::Error
    }

    fn query_status(&mut self, operation: Operation, kind: StatusKind) -> Status {
        if self.phase_is_invalid(operation) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!("{}: status kind = {kind}", operation.name()),
        );

        let detail = match kind {
            StatusKind::DoStep | StatusKind::Pending => {
                "only available while an asynchronous step is pending; this is not the case"
            }
            StatusKind::LastSuccessfulTime | StatusKind::Terminated => {
                "only available after a step returned Discard; this is not the case"
            }
        };
        self.log(
            Status::Error,
            LogCategory::Error,
            &format!("{}: {detail}", operation.name()),
        );
        Status::Discard
    }

    pub fn get_status(&mut self, kind: StatusKind, _value: &mut Status) -> Status {
        self.query_status(Operation::GetStatus, kind)
    }

    /// The last-successful-time kind reports the slave's current time; other
    /// kinds never arise for a synchronous slave and are discarded.
    pub fn get_real_status(&mut self, kind: StatusKind, value: &mut f64) -> Status {
        if kind == StatusKind::LastSuccessfulTime {
            if self.phase_is_invalid(Operation::GetRealStatus) {
                return Status::Error;
            }
            *value = self.time;
            return Status::Ok;
        }
        self.query_status(Operation::GetRealStatus, kind)
    }

    pub fn get_integer_status(&mut self, kind: StatusKind, _value: &mut i32) -> Status {
        self.query_status(Operation::GetIntegerStatus, kind)
    }

    /// The terminated kind reports whether the model requested termination;
    /// other kinds never arise for a synchronous slave and are discarded.
    pub fn get_boolean_status(&mut self, kind: StatusKind, value: &mut bool) -> Status {
        if kind == StatusKind::Terminated {
            if self.phase_is_invalid(Operation::GetBooleanStatus) {
                return Status::Error;
            }
            *value = self.event_info.terminate_simulation;
            return Status::Ok;
        }
        self.query_status(Operation::GetBooleanStatus, kind)
    }

    pub fn get_string_status(&mut self, kind: StatusKind, _value: &mut String) -> Status {
        self.query_status(Operation::GetStringStatus, kind)
    }

    // --- State snapshot / serialization: not implemented by this slave ---

    pub fn save_state(&mut self) -> Status {
        self.unsupported(Operation::SaveState)
    }

    pub fn restore_state(&mut self) -> Status {
        self.unsupported(Operation::RestoreState)
    }

    pub fn free_saved_state(&mut self) -> Status {
        self.unsupported(Operation::FreeSavedState)
    }

    pub fn serialized_state_size(&mut self) -> Status {
        self.unsupported(Operation::SerializedStateSize)
    }

    pub fn serialize_state(&mut self) -> Status {
        self.unsupported(Operation::SerializeState)
    }

    pub fn deserialize_state(&mut self) -> Status {
        self.unsupported(Operation::DeserializeState)
    }

    pub fn get_directional_derivative(&mut self) -> Status {
        self.unsupported(Operation::GetDirectionalDerivative)
    }
}
