use crate::phase::{Phase, PhaseMask};

/// Every phase except `Fatal`.
const ANY_NON_FATAL: PhaseMask = PhaseMask::EMPTY
    .with(Phase::StartEnd)
    .with(Phase::Instantiated)
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::ContinuousTimeMode)
    .with(Phase::StepComplete)
    .with(Phase::StepInProgress)
    .with(Phase::StepFailed)
    .with(Phase::StepCanceled)
    .with(Phase::Terminated)
    .with(Phase::Error);

/// Every live phase: instantiated onward, excluding `StartEnd` and `Fatal`.
const ANY_INSTANTIATED: PhaseMask = PhaseMask::EMPTY
    .with(Phase::Instantiated)
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::ContinuousTimeMode)
    .with(Phase::StepComplete)
    .with(Phase::StepInProgress)
    .with(Phase::StepFailed)
    .with(Phase::StepCanceled)
    .with(Phase::Terminated)
    .with(Phase::Error);

/// Mask of the destroy/reset family: any live phase except a step in
/// progress.
const DESTRUCTIBLE: PhaseMask = PhaseMask::EMPTY
    .with(Phase::Instantiated)
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::ContinuousTimeMode)
    .with(Phase::StepComplete)
    .with(Phase::StepFailed)
    .with(Phase::StepCanceled)
    .with(Phase::Terminated)
    .with(Phase::Error);

const GET_VALUES: PhaseMask = PhaseMask::EMPTY
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::ContinuousTimeMode)
    .with(Phase::StepComplete)
    .with(Phase::StepFailed)
    .with(Phase::StepCanceled)
    .with(Phase::Terminated)
    .with(Phase::Error);

const SET_DISCRETE_VALUES: PhaseMask = PhaseMask::EMPTY
    .with(Phase::Instantiated)
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::StepComplete);

const GET_CONTINUOUS: PhaseMask = PhaseMask::EMPTY
    .with(Phase::InitializationMode)
    .with(Phase::EventMode)
    .with(Phase::ContinuousTimeMode)
    .with(Phase::Terminated)
    .with(Phase::Error);

const GET_QUERY_STATUS: PhaseMask = PhaseMask::EMPTY
    .with(Phase::StepComplete)
    .with(Phase::StepInProgress)
    .with(Phase::StepFailed)
    .with(Phase::Terminated);

/// The protocol operation surface.
///
/// Each operation declares the mask of lifecycle phases in which it is legal;
/// the mask table reproduces the standard's call-sequence state tables and is
/// the contract the validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TypesPlatform,
    Version,
    SetDebugLogging,
    Instantiate,
    FreeInstance,
    SetupExperiment,
    EnterInitializationMode,
    ExitInitializationMode,
    Terminate,
    Reset,
    GetReal,
    GetInteger,
    GetBoolean,
    GetString,
    SetReal,
    SetInteger,
    SetBoolean,
    SetString,
    SaveState,
    RestoreState,
    FreeSavedState,
    SerializedStateSize,
    SerializeState,
    DeserializeState,
    GetDirectionalDerivative,
    EnterEventMode,
    NewDiscreteStates,
    EnterContinuousTimeMode,
    CompletedIntegratorStep,
    SetTime,
    SetContinuousStates,
    GetEventIndicators,
    GetContinuousStates,
    GetDerivatives,
    GetNominalsOfContinuousStates,
    SetRealInputDerivatives,
    GetRealOutputDerivatives,
    DoStep,
    CancelStep,
    GetStatus,
    GetRealStatus,
    GetIntegerStatus,
    GetBooleanStatus,
    GetStringStatus,
}

impl Operation {
    /// All operations, for exhaustive validation.
    pub const ALL: [Operation; 44] = [
        Operation::TypesPlatform,
        Operation::Version,
        Operation::SetDebugLogging,
        Operation::Instantiate,
        Operation::FreeInstance,
        Operation::SetupExperiment,
        Operation::EnterInitializationMode,
        Operation::ExitInitializationMode,
        Operation::Terminate,
        Operation::Reset,
        Operation::GetReal,
        Operation::GetInteger,
        Operation::GetBoolean,
        Operation::GetString,
        Operation::SetReal,
        Operation::SetInteger,
        Operation::SetBoolean,
        Operation::SetString,
        Operation::SaveState,
        Operation::RestoreState,
        Operation::FreeSavedState,
        Operation::SerializedStateSize,
        Operation::SerializeState,
        Operation::DeserializeState,
        Operation::GetDirectionalDerivative,
        Operation::EnterEventMode,
        Operation::NewDiscreteStates,
        Operation::EnterContinuousTimeMode,
        Operation::CompletedIntegratorStep,
        Operation::SetTime,
        Operation::SetContinuousStates,
        Operation::GetEventIndicators,
        Operation::GetContinuousStates,
        Operation::GetDerivatives,
        Operation::GetNominalsOfContinuousStates,
        Operation::SetRealInputDerivatives,
        Operation::GetRealOutputDerivatives,
        Operation::DoStep,
        Operation::CancelStep,
        Operation::GetStatus,
        Operation::GetRealStatus,
        Operation::GetIntegerStatus,
        Operation::GetBooleanStatus,
        Operation::GetStringStatus,
    ];

    /// Name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::TypesPlatform => "types_platform",
            Operation::Version => "version",
            Operation::SetDebugLogging => "set_debug_logging",
            Operation::Instantiate => "instantiate",
            Operation::FreeInstance => "free_instance",
            Operation::SetupExperiment => "setup_experiment",
            Operation::EnterInitializationMode => "enter_initialization_mode",
            Operation::ExitInitializationMode => "exit_initialization_mode",
            Operation::Terminate => "terminate",
            Operation::Reset => "reset",
            Operation::GetReal => "get_real",
            Operation::GetInteger => "get_integer",
            Operation::GetBoolean => "get_boolean",
            Operation::GetString => "get_string",
            Operation::SetReal => "set_real",
            Operation::SetInteger => "set_integer",
            Operation::SetBoolean => "set_boolean",
            Operation::SetString => "set_string",
            Operation::SaveState => "save_state",
            Operation::RestoreState => "restore_state",
            Operation::FreeSavedState => "free_saved_state",
            Operation::SerializedStateSize => "serialized_state_size",
            Operation::SerializeState => "serialize_state",
            Operation::DeserializeState => "deserialize_state",
            Operation::GetDirectionalDerivative => "get_directional_derivative",
            Operation::EnterEventMode => "enter_event_mode",
            Operation::NewDiscreteStates => "new_discrete_states",
            Operation::EnterContinuousTimeMode => "enter_continuous_time_mode",
            Operation::CompletedIntegratorStep => "completed_integrator_step",
            Operation::SetTime => "set_time",
            Operation::SetContinuousStates => "set_continuous_states",
            Operation::GetEventIndicators => "get_event_indicators",
            Operation::GetContinuousStates => "get_continuous_states",
            Operation::GetDerivatives => "get_derivatives",
            Operation::GetNominalsOfContinuousStates => "get_nominals_of_continuous_states",
            Operation::SetRealInputDerivatives => "set_real_input_derivatives",
            Operation::GetRealOutputDerivatives => "get_real_output_derivatives",
            Operation::DoStep => "do_step",
            Operation::CancelStep => "cancel_step",
            Operation::GetStatus => "get_status",
            Operation::GetRealStatus => "get_real_status",
            Operation::GetIntegerStatus => "get_integer_status",
            Operation::GetBooleanStatus => "get_boolean_status",
            Operation::GetStringStatus => "get_string_status",
        }
    }

    /// Phases in which this operation is legal.
    #[must_use]
    pub const fn legal_phases(self) -> PhaseMask {
        match self {
            Operation::TypesPlatform | Operation::Version => ANY_NON_FATAL,

            Operation::SetDebugLogging => ANY_INSTANTIATED,

            Operation::Instantiate => Phase::StartEnd.mask(),

            Operation::FreeInstance
            | Operation::Reset
            | Operation::SaveState
            | Operation::RestoreState
            | Operation::FreeSavedState
            | Operation::SerializedStateSize
            | Operation::SerializeState
            | Operation::DeserializeState => DESTRUCTIBLE,

            Operation::SetupExperiment | Operation::EnterInitializationMode => {
                Phase::Instantiated.mask()
            }

            Operation::ExitInitializationMode => Phase::InitializationMode.mask(),

            Operation::Terminate => Phase::EventMode
                .mask()
                .with(Phase::ContinuousTimeMode)
                .with(Phase::StepComplete)
                .with(Phase::StepFailed),

            Operation::GetReal
            | Operation::GetInteger
            | Operation::GetBoolean
            | Operation::GetString
            | Operation::GetDirectionalDerivative => GET_VALUES,

            Operation::SetReal => Phase::Instantiated
                .mask()
                .with(Phase::InitializationMode)
                .with(Phase::EventMode)
                .with(Phase::ContinuousTimeMode)
                .with(Phase::StepComplete),

            Operation::SetInteger | Operation::SetBoolean | Operation::SetString => {
                SET_DISCRETE_VALUES
            }

            Operation::EnterEventMode => {
                Phase::EventMode.mask().with(Phase::ContinuousTimeMode)
            }

            Operation::NewDiscreteStates | Operation::EnterContinuousTimeMode => {
                Phase::EventMode.mask()
            }

            Operation::CompletedIntegratorStep | Operation::SetContinuousStates => {
                Phase::ContinuousTimeMode.mask()
            }

            Operation::SetTime => Phase::EventMode.mask().with(Phase::ContinuousTimeMode),

            Operation::GetEventIndicators | Operation::GetContinuousStates => GET_CONTINUOUS,

            Operation::GetDerivatives => Phase::EventMode
                .mask()
                .with(Phase::ContinuousTimeMode)
                .with(Phase::Terminated)
                .with(Phase::Error),

            Operation::GetNominalsOfContinuousStates => Phase::Instantiated
                .mask()
                .with(Phase::EventMode)
                .with(Phase::ContinuousTimeMode)
                .with(Phase::Terminated)
                .with(Phase::Error),

            Operation::SetRealInputDerivatives => Phase::Instantiated
                .mask()
                .with(Phase::InitializationMode)
                .with(Phase::StepComplete),

            Operation::GetRealOutputDerivatives => Phase::StepComplete
                .mask()
                .with(Phase::StepFailed)
                .with(Phase::StepCanceled)
                .with(Phase::Terminated)
                .with(Phase::Error),

            Operation::DoStep => Phase::StepComplete.mask(),

            Operation::CancelStep => Phase::StepInProgress.mask(),

            Operation::GetStatus
            | Operation::GetRealStatus
            | Operation::GetIntegerStatus
            | Operation::GetBooleanStatus
            | Operation::GetStringStatus => GET_QUERY_STATUS,
        }
    }
}
