//! Example models exercising the tether framework.
//!
//! [`BounceModel`] is the canonical event-driven exercise: a point mass
//! falling onto a floor, with a contact event that reverses its velocity.
//! [`ProjectileModel`] is an event-free ballistic trajectory, useful for
//! driving the model-exchange surface and checking integrator accuracy.

mod bounce;
mod projectile;

pub use bounce::BounceModel;
pub use projectile::ProjectileModel;
