use tether_core::{EventInfo, ModelAdapter, ModelLayout, ValueStore};

/// Contact is detected when the ball is within this height of the floor.
const CONTACT_TOLERANCE: f64 = 1.0e-8;

/// One-dimensional point mass bouncing on a floor.
///
/// States are position and velocity; the single event indicator is the
/// height above the floor. On contact the velocity reverses, scaled by the
/// coefficient of restitution, and the bounce counter increments.
///
/// Published variables: reals `[position, velocity, acceleration, mass,
/// gravity, restitution, floor]`, integer `[bounce_count]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BounceModel;

impl BounceModel {
    pub const POSITION: usize = 0;
    pub const VELOCITY: usize = 1;
    pub const ACCELERATION: usize = 2;
    pub const MASS: usize = 3;
    pub const GRAVITY: usize = 4;
    pub const RESTITUTION: usize = 5;
    pub const FLOOR: usize = 6;

    /// Integer reference of the bounce counter.
    pub const BOUNCE_COUNT: usize = 0;

    fn height_above_floor(values: &ValueStore) -> f64 {
        values.real(Self::POSITION).unwrap_or(0.0) - values.real(Self::FLOOR).unwrap_or(0.0)
    }
}

impl ModelAdapter for BounceModel {
    fn layout(&self) -> ModelLayout {
        ModelLayout {
            reals: 7,
            integers: 1,
            states: vec![Self::POSITION, Self::VELOCITY],
            derivatives: vec![Self::VELOCITY, Self::ACCELERATION],
            event_indicators: 1,
            ..ModelLayout::default()
        }
    }

    fn set_start_values(&mut self, values: &mut ValueStore) {
        values.set_real(Self::POSITION, 1.0).unwrap();
        values.set_real(Self::VELOCITY, 0.0).unwrap();
        values.set_real(Self::ACCELERATION, -9.81).unwrap();
        values.set_real(Self::MASS, 1.0).unwrap();
        values.set_real(Self::GRAVITY, 9.81).unwrap();
        values.set_real(Self::RESTITUTION, 0.7).unwrap();
        values.set_real(Self::FLOOR, 0.0).unwrap();
        values.set_integer(Self::BOUNCE_COUNT, 0).unwrap();
    }

    fn calculate_values(&mut self, values: &mut ValueStore) {
        let gravity = values.real(Self::GRAVITY).unwrap_or(9.81);
        values.set_real(Self::ACCELERATION, -gravity).unwrap();
    }

    fn calculate_derivatives(&mut self, values: &mut ValueStore, _time: f64) {
        let gravity = values.real(Self::GRAVITY).unwrap_or(9.81);
        values.set_real(Self::ACCELERATION, -gravity).unwrap();
    }

    fn event_indicator(&self, values: &ValueStore, index: usize) -> f64 {
        match index {
            0 => Self::height_above_floor(values),
            _ => 0.0,
        }
    }

    // The time-event flag is ignored: this model schedules no time events.
    fn activate_events(
        &mut self,
        values: &mut ValueStore,
        info: &mut EventInfo,
        _time_event: bool,
    ) {
        *info = EventInfo::default();

        if Self::height_above_floor(values) < CONTACT_TOLERANCE {
            let velocity = values.real(Self::VELOCITY).unwrap_or(0.0);
            let restitution = values.real(Self::RESTITUTION).unwrap_or(0.0);
            values
                .set_real(Self::VELOCITY, -(velocity * restitution))
                .unwrap();

            let bounces = values.integer(Self::BOUNCE_COUNT).unwrap_or(0);
            values.set_integer(Self::BOUNCE_COUNT, bounces + 1).unwrap();

            info.values_of_continuous_states_changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn build() -> (BounceModel, ValueStore) {
        let mut model = BounceModel;
        let mut values = model.layout().build().unwrap();
        model.set_start_values(&mut values);
        (model, values)
    }

    #[test]
    fn indicator_is_height_above_floor() {
        let (model, mut values) = build();

        assert_relative_eq!(model.event_indicator(&values, 0), 1.0);

        values.set_real(BounceModel::POSITION, 0.25).unwrap();
        values.set_real(BounceModel::FLOOR, 0.1).unwrap();
        assert_relative_eq!(model.event_indicator(&values, 0), 0.15);
    }

    #[test]
    fn contact_reverses_velocity_with_restitution() {
        let (mut model, mut values) = build();
        values.set_real(BounceModel::POSITION, 0.0).unwrap();
        values.set_real(BounceModel::VELOCITY, -4.0).unwrap();

        let mut info = EventInfo::default();
        model.activate_events(&mut values, &mut info, false);

        assert_relative_eq!(values.real(BounceModel::VELOCITY).unwrap(), 2.8);
        assert_eq!(values.integer(BounceModel::BOUNCE_COUNT), Ok(1));
        assert!(info.values_of_continuous_states_changed);
        assert!(!info.new_discrete_states_needed);
        assert!(!info.terminate_simulation);
    }

    #[test]
    fn no_contact_leaves_state_alone() {
        let (mut model, mut values) = build();
        values.set_real(BounceModel::VELOCITY, -1.0).unwrap();

        let mut info = EventInfo::default();
        model.activate_events(&mut values, &mut info, false);

        assert_relative_eq!(values.real(BounceModel::VELOCITY).unwrap(), -1.0);
        assert_eq!(values.integer(BounceModel::BOUNCE_COUNT), Ok(0));
        assert!(!info.values_of_continuous_states_changed);
    }

    #[test]
    fn derivatives_bind_velocity_and_acceleration() {
        let (mut model, mut values) = build();
        values.set_real(BounceModel::VELOCITY, -3.0).unwrap();

        model.calculate_derivatives(&mut values, 0.0);

        // State 0 (position) has derivative velocity; state 1 (velocity)
        // has derivative acceleration.
        assert_relative_eq!(values.derivative(0), -3.0);
        assert_relative_eq!(values.derivative(1), -9.81);
    }
}
