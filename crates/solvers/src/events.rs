use tether_core::{ModelAdapter, ValueStore};

use crate::{HeunIntegrator, RegulaFalsi};

/// Error tolerance applied to every finder when the scanner is re-armed.
const DEFAULT_ERROR_TOL: f64 = 1.0e-12;

/// Detects and locates state-triggered events within one integration advance.
///
/// One [`RegulaFalsi`] record tracks each event indicator across successive
/// advances. When a crossing is bracketed inside the latest advance, the
/// scanner integrates backward and forward by each secant estimate until the
/// finder reports the exact `0.0` sentinel, leaving the model's time and
/// state at the crossing.
///
/// When more than one indicator crosses within the same advance, crossings
/// are resolved in indicator order, not in time order; only single-crossing
/// advances are guaranteed exact.
#[derive(Debug, Clone)]
pub struct EventScanner {
    finders: Vec<RegulaFalsi>,
    fired: Vec<bool>,
    previous: Vec<f64>,
}

impl EventScanner {
    #[must_use]
    pub fn new(indicator_count: usize) -> Self {
        Self {
            finders: vec![RegulaFalsi::new(DEFAULT_ERROR_TOL); indicator_count],
            fired: vec![false; indicator_count],
            previous: vec![0.0; indicator_count],
        }
    }

    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.finders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    /// Whether indicator `index` fired during the latest scan.
    #[must_use]
    pub fn fired(&self, index: usize) -> bool {
        self.fired[index]
    }

    /// Indicator value snapshotted at the start of the current step.
    #[must_use]
    pub fn previous(&self, index: usize) -> f64 {
        self.previous[index]
    }

    pub fn set_previous(&mut self, index: usize, value: f64) {
        self.previous[index] = value;
    }

    /// Re-arms every finder for a fresh experiment starting at `time`.
    pub fn rearm(&mut self, time: f64) {
        for (finder, fired) in self.finders.iter_mut().zip(&mut self.fired) {
            *fired = false;
            finder.reset(time);
            finder.clear_fires();
            finder.set_error_tol(DEFAULT_ERROR_TOL);
            finder.set_mode(crate::CrossingMode::Any);
        }
    }

    /// Clears a fired indicator after its event has been handled, resetting
    /// its finder at the refined event time.
    pub fn clear_fired(&mut self, index: usize, time: f64) {
        self.previous[index] = 0.0;
        self.finders[index].reset(time);
        self.finders[index].clear_fires();
        self.fired[index] = false;
    }

    /// Scans all indicators after an advance of size `dt` ending at
    /// `event_time`.
    ///
    /// Feeds each indicator's current value to its finder; a time-to-go
    /// within the end offset (`1e-15 × dt`) means a crossing lies inside the
    /// advance, and the refinement loop then re-integrates by each estimate
    /// until the finder reports located. On return `event_time` holds the
    /// refined crossing time and the model state sits at the crossing.
    /// Returns whether any indicator fired.
    #[allow(clippy::float_cmp)]
    pub fn scan<M: ModelAdapter>(
        &mut self,
        model: &mut M,
        values: &mut ValueStore,
        integrator: &mut HeunIntegrator,
        time: &mut f64,
        dt: f64,
        event_time: &mut f64,
    ) -> bool {
        let mut fired_any = false;
        let mut end_offset = 1.0e-15 * dt;

        for index in 0..self.finders.len() {
            let error = model.event_indicator(values, index);
            let mut tgo = self.finders[index].time_to_go(*event_time, error);

            if tgo < end_offset {
                self.finders[index].record_fire();
                self.fired[index] = true;
                fired_any = true;

                // The finder reports exactly 0.0 once the crossing is
                // located; until then, follow each secant estimate.
                while tgo != 0.0 {
                    integrator.step(model, values, time, tgo);

                    end_offset -= tgo;
                    *event_time += tgo;
                    *time = *event_time;

                    let error = model.event_indicator(values, index);
                    tgo = self.finders[index].time_to_go(*event_time, error);
                }
            }
        }

        fired_any
    }
}
