//! Protocol surface for tether slaves.
//!
//! A [`Slave`] wraps a [`ModelAdapter`](tether_core::ModelAdapter) behind the
//! standardized model-exchange / co-simulation operation surface. Every
//! operation is gated by the call-sequence state machine ([`Phase`],
//! [`Operation::legal_phases`]); stepping operations drive the numeric
//! engines from `tether-solvers` against the model.

mod error;
mod operation;
mod phase;
mod sink;
mod slave;
mod step;

pub use error::InstantiateError;
pub use operation::Operation;
pub use phase::{Phase, PhaseMask};
pub use sink::{LogRecord, RecordingSink, TracingSink};
pub use slave::{INTERFACE_VERSION, SimulationMode, Slave, TYPES_PLATFORM};
