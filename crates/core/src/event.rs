/// Outcome of a discrete-state update, reported by the model's
/// event-activation hook.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct EventInfo {
    /// The model needs another discrete-update pass before integration may
    /// resume.
    pub new_discrete_states_needed: bool,
    /// The model requests that the simulation stop.
    pub terminate_simulation: bool,
    /// Nominal values of the continuous states changed.
    pub nominals_of_continuous_states_changed: bool,
    /// Values of the continuous states changed (e.g. a velocity reversal).
    pub values_of_continuous_states_changed: bool,
    /// `next_event_time` holds a scheduled time event.
    pub next_event_time_defined: bool,
    /// Time of the next known time event, valid when
    /// `next_event_time_defined` is set.
    pub next_event_time: f64,
}

impl EventInfo {
    /// Clears the per-update flags while leaving any scheduled time event in
    /// place.
    pub fn clear_update_flags(&mut self) {
        self.new_discrete_states_needed = false;
        self.terminate_simulation = false;
        self.nominals_of_continuous_states_changed = false;
        self.values_of_continuous_states_changed = false;
    }
}
