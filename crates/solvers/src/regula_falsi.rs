/// Time to go reported while no zero crossing is bracketed.
pub const BIG_TGO: f64 = 1000.0;

/// Crossing directions a root finder can be armed for.
///
/// The finder reports a located crossing only when the indicator's detected
/// slope is compatible with its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingMode {
    /// Fire only when the indicator crosses zero from above.
    Decreasing,
    /// Fire on any crossing.
    #[default]
    Any,
    /// Fire only when the indicator crosses zero from below.
    Increasing,
}

/// Regula Falsi iteration state for one event indicator.
///
/// Each call to [`time_to_go`](RegulaFalsi::time_to_go) feeds one
/// `(time, error)` sample. Samples with negative error update the lower
/// bracket bound, positive ones the upper bound; once both bounds are set the
/// crossing time is estimated by secant interpolation between them. The
/// return value is an exact sentinel: `0.0` means the crossing has been
/// located, [`BIG_TGO`] means no crossing is bracketed yet.
#[derive(Debug, Clone)]
pub struct RegulaFalsi {
    lower_set: bool,
    upper_set: bool,
    iterations: u32,
    fires: u32,
    x_lower: f64,
    t_lower: f64,
    x_upper: f64,
    t_upper: f64,
    delta_time: f64,
    error: f64,
    last_error: f64,
    last_tgo: f64,
    error_tol: f64,
    mode: CrossingMode,
    function_slope: CrossingMode,
}

impl RegulaFalsi {
    /// Iteration count past which convergence is forced.
    ///
    /// Declaring convergence after this many refinements guarantees the
    /// event search terminates even on a pathological indicator; the
    /// resulting crossing time is then only as good as the last secant
    /// estimate.
    pub const FORCE_CONVERGE_ITERATIONS: u32 = 20;

    #[must_use]
    pub fn new(error_tol: f64) -> Self {
        Self {
            lower_set: false,
            upper_set: false,
            iterations: 0,
            fires: 0,
            x_lower: BIG_TGO,
            t_lower: 0.0,
            x_upper: BIG_TGO,
            t_upper: 0.0,
            delta_time: BIG_TGO,
            error: 0.0,
            last_error: 0.0,
            last_tgo: BIG_TGO,
            error_tol,
            mode: CrossingMode::Any,
            function_slope: CrossingMode::Any,
        }
    }

    /// Clears the brackets and re-anchors both bracket times to `time`.
    ///
    /// Used at experiment setup and after every event firing. Mode, error
    /// tolerance, and the fire count are left untouched.
    pub fn reset(&mut self, time: f64) {
        self.delta_time = BIG_TGO;
        self.lower_set = false;
        self.upper_set = false;
        self.t_lower = time;
        self.t_upper = time;
        self.x_lower = BIG_TGO;
        self.x_upper = BIG_TGO;
        self.iterations = 0;
        self.last_error = 0.0;
    }

    pub fn set_mode(&mut self, mode: CrossingMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> CrossingMode {
        self.mode
    }

    pub fn set_error_tol(&mut self, error_tol: f64) {
        self.error_tol = error_tol;
    }

    #[must_use]
    pub fn error_tol(&self) -> f64 {
        self.error_tol
    }

    /// Number of times the tracked event has fired.
    #[must_use]
    pub fn fires(&self) -> u32 {
        self.fires
    }

    /// Most recent secant estimate, or [`BIG_TGO`] while no bracket is held.
    #[must_use]
    pub fn last_tgo(&self) -> f64 {
        self.last_tgo
    }

    pub fn record_fire(&mut self) {
        self.fires += 1;
    }

    pub fn clear_fires(&mut self) {
        self.fires = 0;
    }

    /// Feeds one `(time, error)` sample and returns the estimated time to go
    /// until the indicator crosses zero.
    ///
    /// Returns exactly `0.0` once the crossing is located (error within
    /// tolerance, or negligible change since the last sample, in a
    /// mode-compatible direction); callers must treat that as the unique
    /// "found" sentinel, not as a tolerance comparison. Returns [`BIG_TGO`]
    /// while only one bound is set. The estimate may be negative when the
    /// latest sample overshot the crossing.
    pub fn time_to_go(&mut self, time: f64, error: f64) -> f64 {
        self.error = error;

        if self.iterations > 0
            && (self.error.abs() < self.error_tol
                || (self.last_error - self.error).abs() < self.error_tol)
        {
            match self.mode {
                CrossingMode::Any => return 0.0,
                CrossingMode::Increasing if self.lower_set => return 0.0,
                CrossingMode::Decreasing if self.upper_set => return 0.0,
                _ => {}
            }
        }

        if self.error < 0.0 {
            self.x_lower = self.error;
            self.t_lower = time;
            self.lower_set = true;
        } else if self.error > 0.0 {
            self.x_upper = self.error;
            self.t_upper = time;
            self.upper_set = true;
        }

        self.iterations += 1;

        if self.upper_set && self.lower_set {
            if self.error.abs() < self.error_tol {
                self.delta_time = 0.0;
            } else {
                let slope = (self.x_upper - self.x_lower) / (self.t_upper - self.t_lower);
                self.delta_time = -self.error / slope;
                if self.iterations > Self::FORCE_CONVERGE_ITERATIONS {
                    // Termination guarantee: declare convergence rather than
                    // keep refining a bracket that will not shrink.
                    self.delta_time = 0.0;
                }
            }

            match self.mode {
                CrossingMode::Any => {
                    self.last_error = self.error;
                    self.last_tgo = self.delta_time;
                    return self.delta_time;
                }
                CrossingMode::Increasing => {
                    if self.function_slope == CrossingMode::Increasing {
                        self.last_error = self.error;
                        self.last_tgo = self.delta_time;
                        return self.delta_time;
                    }
                    // Crossing in the wrong direction: drop the stale bound
                    // and re-arm below.
                    self.lower_set = false;
                }
                CrossingMode::Decreasing => {
                    if self.function_slope == CrossingMode::Decreasing {
                        self.last_error = self.error;
                        self.last_tgo = self.delta_time;
                        return self.delta_time;
                    }
                    self.upper_set = false;
                }
            }
            self.function_slope = CrossingMode::Any;
        } else if self.lower_set {
            self.function_slope = CrossingMode::Increasing;
        } else if self.upper_set {
            self.function_slope = CrossingMode::Decreasing;
        }

        self.iterations = 0;
        self.last_tgo = BIG_TGO;

        BIG_TGO
    }
}
