use tether_core::{EventInfo, ModelAdapter, ModelLayout, ValueStore};

/// Ballistic point mass in a vertical plane under constant gravity.
///
/// States are the two position components followed by the two velocity
/// components; there are no event indicators. Published variables: reals
/// `[x, y, vx, vy, ax, ay, gravity]`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileModel {
    pub initial_position: [f64; 2],
    pub initial_velocity: [f64; 2],
}

impl ProjectileModel {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const VX: usize = 2;
    pub const VY: usize = 3;
    pub const AX: usize = 4;
    pub const AY: usize = 5;
    pub const GRAVITY: usize = 6;
}

impl Default for ProjectileModel {
    fn default() -> Self {
        Self {
            initial_position: [0.0, 0.0],
            initial_velocity: [3.0, 4.0],
        }
    }
}

impl ModelAdapter for ProjectileModel {
    fn layout(&self) -> ModelLayout {
        ModelLayout {
            reals: 7,
            states: vec![Self::X, Self::Y, Self::VX, Self::VY],
            derivatives: vec![Self::VX, Self::VY, Self::AX, Self::AY],
            ..ModelLayout::default()
        }
    }

    fn set_start_values(&mut self, values: &mut ValueStore) {
        values.set_real(Self::X, self.initial_position[0]).unwrap();
        values.set_real(Self::Y, self.initial_position[1]).unwrap();
        values.set_real(Self::VX, self.initial_velocity[0]).unwrap();
        values.set_real(Self::VY, self.initial_velocity[1]).unwrap();
        values.set_real(Self::AX, 0.0).unwrap();
        values.set_real(Self::AY, -9.81).unwrap();
        values.set_real(Self::GRAVITY, 9.81).unwrap();
    }

    fn calculate_values(&mut self, values: &mut ValueStore) {
        let gravity = values.real(Self::GRAVITY).unwrap_or(9.81);
        values.set_real(Self::AX, 0.0).unwrap();
        values.set_real(Self::AY, -gravity).unwrap();
    }

    fn calculate_derivatives(&mut self, values: &mut ValueStore, _time: f64) {
        let gravity = values.real(Self::GRAVITY).unwrap_or(9.81);
        values.set_real(Self::AX, 0.0).unwrap();
        values.set_real(Self::AY, -gravity).unwrap();
    }

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
