use thiserror::Error;

use crate::{EventInfo, ValueStore};

/// A model's declaration of its externally addressable interface.
///
/// Continuous states and their derivatives are bindings into the real table:
/// `states[i]` names the real holding state `i`, `derivatives[i]` the real
/// holding its derivative. Bindings are validated when the layout is built,
/// so a bad declaration fails at construction rather than at the first
/// protocol call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelLayout {
    /// Number of real variables.
    pub reals: usize,
    /// Number of integer variables.
    pub integers: usize,
    /// Number of boolean variables.
    pub booleans: usize,
    /// Number of string variables.
    pub strings: usize,
    /// Real references holding the continuous states.
    pub states: Vec<usize>,
    /// Real references holding the state derivatives, index-aligned with
    /// `states`.
    pub derivatives: Vec<usize>,
    /// Number of event indicators the model evaluates.
    pub event_indicators: usize,
}

/// Errors found while validating a [`ModelLayout`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("state binding {reference} is out of range ({reals} reals declared)")]
    StateOutOfRange { reference: usize, reals: usize },

    #[error("derivative binding {reference} is out of range ({reals} reals declared)")]
    DerivativeOutOfRange { reference: usize, reals: usize },

    #[error("{states} states declared but {derivatives} derivatives")]
    BindingMismatch { states: usize, derivatives: usize },
}

impl ModelLayout {
    /// Validates the bindings and builds the value store they describe.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if a state or derivative binding names a real
    /// that does not exist, or if the state and derivative counts differ.
    pub fn build(&self) -> Result<ValueStore, LayoutError> {
        if self.states.len() != self.derivatives.len() {
            return Err(LayoutError::BindingMismatch {
                states: self.states.len(),
                derivatives: self.derivatives.len(),
            });
        }
        for &reference in &self.states {
            if reference >= self.reals {
                return Err(LayoutError::StateOutOfRange {
                    reference,
                    reals: self.reals,
                });
            }
        }
        for &reference in &self.derivatives {
            if reference >= self.reals {
                return Err(LayoutError::DerivativeOutOfRange {
                    reference,
                    reals: self.reals,
                });
            }
        }

        Ok(ValueStore::new(
            self.reals,
            self.integers,
            self.booleans,
            self.strings,
            self.states.clone(),
            self.derivatives.clone(),
        ))
    }
}

/// Capability interface a concrete model implements to run behind the
/// protocol surface.
///
/// The framework owns the variable tables; the model owns whatever private
/// constants and working data it needs. Every hook receives the store and
/// reads or writes published variables through it.
pub trait ModelAdapter {
    /// Declares the variable tables, state bindings, and event indicators.
    ///
    /// Called once at instantiation; the layout is fixed for the instance's
    /// lifetime.
    fn layout(&self) -> ModelLayout;

    /// Writes the model's start values into the store.
    fn set_start_values(&mut self, values: &mut ValueStore);

    /// Recomputes derived output variables after inputs changed.
    fn calculate_values(&mut self, values: &mut ValueStore);

    /// Evaluates the state derivatives at the current state and time.
    fn calculate_derivatives(&mut self, values: &mut ValueStore, time: f64);

    /// Evaluates one event indicator; a sign change marks a state event.
    fn event_indicator(&self, values: &ValueStore, index: usize) -> f64;

    /// Applies the effect of fired events and reports the discrete-update
    /// outcome.
    ///
    /// `time_event` is set when the update was triggered by a scheduled time
    /// event rather than a state event.
    fn activate_events(&mut self, values: &mut ValueStore, info: &mut EventInfo, time_event: bool);
}
