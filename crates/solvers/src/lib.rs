//! Numeric engines for the tether framework.
//!
//! - [`RegulaFalsi`] — a bracketing secant iteration that estimates the time
//!   to go until an event indicator crosses zero
//! - [`HeunIntegrator`] — the second-order Runge-Kutta predictor-corrector
//!   used for all continuous-state advances
//! - [`EventScanner`] — drives one root finder per event indicator across an
//!   integration advance and refines crossings to near machine precision

mod events;
mod integrator;
mod regula_falsi;

pub use events::EventScanner;
pub use integrator::HeunIntegrator;
pub use regula_falsi::{BIG_TGO, CrossingMode, RegulaFalsi};
