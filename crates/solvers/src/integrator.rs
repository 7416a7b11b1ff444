use tether_core::{ModelAdapter, ValueStore};

/// Second-order Runge-Kutta (Heun) predictor-corrector.
///
/// One instance serves a slave for its whole lifetime; the work buffers are
/// sized once from the model layout. The same primitive advances continuous
/// stepping and the event-refinement search, which may call it with negative
/// step sizes.
#[derive(Debug, Clone)]
pub struct HeunIntegrator {
    work_state: Vec<f64>,
    work_deriv: Vec<f64>,
}

impl HeunIntegrator {
    #[must_use]
    pub fn new(state_count: usize) -> Self {
        Self {
            work_state: vec![0.0; state_count],
            work_deriv: vec![0.0; state_count],
        }
    }

    /// Advances the continuous states by `dt`.
    ///
    /// Evaluates derivatives at the current state, takes an Euler predictor
    /// step, re-evaluates at the predicted state, applies the trapezoidal
    /// corrector, and evaluates once more at the corrected state so
    /// derivative outputs always match the states. Deterministic given
    /// identical inputs.
    pub fn step<M: ModelAdapter>(
        &mut self,
        model: &mut M,
        values: &mut ValueStore,
        time: &mut f64,
        dt: f64,
    ) {
        let state_count = values.state_count();

        model.calculate_derivatives(values, *time);

        for i in 0..state_count {
            self.work_state[i] = values.state(i);
            self.work_deriv[i] = values.derivative(i);
        }

        // Euler predictor.
        for i in 0..state_count {
            values.set_state(i, self.work_state[i] + dt * self.work_deriv[i]);
        }

        *time += dt;
        model.calculate_derivatives(values, *time);

        // Trapezoidal corrector.
        let half_dt = dt / 2.0;
        for i in 0..state_count {
            let corrected =
                self.work_state[i] + (self.work_deriv[i] + values.derivative(i)) * half_dt;
            values.set_state(i, corrected);
        }

        model.calculate_derivatives(values, *time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tether_core::{EventInfo, ModelLayout};

    /// Point mass under constant acceleration: reals [position, velocity,
    /// acceleration], states [0, 1], derivatives [1, 2].
    struct ConstantAcceleration {
        acceleration: f64,
        derivative_calls: usize,
    }

    impl ConstantAcceleration {
        fn new(acceleration: f64) -> Self {
            Self {
                acceleration,
                derivative_calls: 0,
            }
        }
    }

    impl ModelAdapter for ConstantAcceleration {
        fn layout(&self) -> ModelLayout {
            ModelLayout {
                reals: 3,
                states: vec![0, 1],
                derivatives: vec![1, 2],
                ..ModelLayout::default()
            }
        }

        fn set_start_values(&mut self, values: &mut ValueStore) {
            values.set_real(0, 0.0).unwrap();
            values.set_real(1, 0.0).unwrap();
            values.set_real(2, self.acceleration).unwrap();
        }

        fn calculate_values(&mut self, _values: &mut ValueStore) {}

        fn calculate_derivatives(&mut self, values: &mut ValueStore, _time: f64) {
            self.derivative_calls += 1;
            values.set_real(2, self.acceleration).unwrap();
        }

        fn event_indicator(&self, _values: &ValueStore, _index: usize) -> f64 {
            0.0
        }

        fn activate_events(
            &mut self,
            _values: &mut ValueStore,
            _info: &mut EventInfo,
            _time_event: bool,
        ) {
        }
    }

    #[test]
    fn reproduces_constant_acceleration_closed_form() {
        let mut model = ConstantAcceleration::new(-9.81);
        let mut values = model.layout().build().unwrap();
        model.set_start_values(&mut values);
        values.set_real(0, 1.0).unwrap();

        let mut integrator = HeunIntegrator::new(values.state_count());
        let mut time = 0.0;
        let dt = 0.01;
        for _ in 0..10 {
            integrator.step(&mut model, &mut values, &mut time, dt);
        }

        // RK2 is exact for quadratic trajectories.
        let t = 0.1;
        assert_relative_eq!(time, t, epsilon = 1.0e-12);
        assert_relative_eq!(
            values.real(0).unwrap(),
            1.0 - 0.5 * 9.81 * t * t,
            epsilon = 1.0e-12
        );
        assert_relative_eq!(values.real(1).unwrap(), -9.81 * t, epsilon = 1.0e-12);
    }

    #[test]
    fn evaluates_derivatives_three_times_per_step() {
        let mut model = ConstantAcceleration::new(-1.0);
        let mut values = model.layout().build().unwrap();
        model.set_start_values(&mut values);

        let mut integrator = HeunIntegrator::new(values.state_count());
        let mut time = 0.0;
        integrator.step(&mut model, &mut values, &mut time, 0.1);

        // Start, predicted state, corrected state.
        assert_eq!(model.derivative_calls, 3);
    }

    #[test]
    fn negative_step_undoes_positive_step() {
        let mut model = ConstantAcceleration::new(-9.81);
        let mut values = model.layout().build().unwrap();
        model.set_start_values(&mut values);
        values.set_real(0, 1.0).unwrap();

        let mut integrator = HeunIntegrator::new(values.state_count());
        let mut time = 0.0;
        integrator.step(&mut model, &mut values, &mut time, 0.01);
        integrator.step(&mut model, &mut values, &mut time, -0.01);

        assert_relative_eq!(time, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(values.real(0).unwrap(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(values.real(1).unwrap(), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let run = || {
            let mut model = ConstantAcceleration::new(-9.81);
            let mut values = model.layout().build().unwrap();
            model.set_start_values(&mut values);
            values.set_real(0, 1.0).unwrap();

            let mut integrator = HeunIntegrator::new(values.state_count());
            let mut time = 0.0;
            for _ in 0..5 {
                integrator.step(&mut model, &mut values, &mut time, 0.02);
            }
            (time, values.real(0).unwrap(), values.real(1).unwrap())
        };

        assert_eq!(run(), run());
    }
}
