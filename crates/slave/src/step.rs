use tether_core::{LogCategory, ModelAdapter, Status};

use crate::operation::Operation;
use crate::phase::Phase;
use crate::slave::Slave;

/// Number of equal sub-frames a communication interval is divided into.
const SUB_FRAMES: usize = 10;

impl<M: ModelAdapter> Slave<M> {
    /// Advances the slave across one communication interval.
    ///
    /// The interval is split into a fixed number of equal frames. Within each
    /// frame the integrator advances by the lesser of the frame remainder
    /// and the distance to the next known time event; after every advance
    /// the event scanner looks for indicator crossings. A fired state event
    /// rewinds time to the refined crossing, resets its finder, and runs the
    /// model's event activation; a time event reached within
    /// `frame_size × 1e-12` does the same activation.
    ///
    /// Returns `Ok` on completion, `Discard` when the model requests
    /// termination during the pre-step discrete update, and `Error` for an
    /// illegal call or a non-positive step size (which also moves the slave
    /// to the Error phase).
    pub fn do_step(
        &mut self,
        current_communication_point: f64,
        step_size: f64,
        no_set_state_prior: bool,
    ) -> Status {
        if self.phase_is_invalid(Operation::DoStep) {
            return Status::Error;
        }
        self.log(
            Status::Ok,
            LogCategory::Call,
            &format!(
                "do_step: communication_point = {current_communication_point}, \
                 step_size = {step_size}, no_set_state_prior = {no_set_state_prior}"
            ),
        );

        if step_size <= 0.0 {
            self.log(
                Status::Error,
                LogCategory::Error,
                &format!("do_step: step size must be > 0, got {step_size}"),
            );
            self.phase = Phase::Error;
            return Status::Error;
        }

        // Snapshot current indicator values as the step's starting point.
        for index in 0..self.scanner.indicator_count() {
            let value = self.model.event_indicator(&self.values, index);
            self.scanner.set_previous(index, value);
        }

        // Drain pending discrete-state updates before integrating, adopting
        // any time event the model schedules.
        let mut next_time_event = current_communication_point + step_size;
        self.event_info.new_discrete_states_needed = true;
        while self.event_info.new_discrete_states_needed {
            self.model
                .activate_events(&mut self.values, &mut self.event_info, false);
            if self.event_info.terminate_simulation {
                return Status::Discard;
            }
            if self.event_info.next_event_time_defined {
                next_time_event = self.event_info.next_event_time;
            }
        }

        self.time = current_communication_point;
        let mut integ_time = current_communication_point;
        let frame_size = step_size / SUB_FRAMES as f64;
        let frame_epsilon = frame_size * 1.0e-12;

        for frame in 1..=SUB_FRAMES {
            let next_frame_time = current_communication_point + frame as f64 * frame_size;

            while integ_time < next_frame_time {
                // Advance to the nearer of the frame boundary and the next
                // known time event.
                let dt = (next_frame_time - integ_time).min(next_time_event - integ_time);

                self.integrator
                    .step(&mut self.model, &mut self.values, &mut self.time, dt);
                integ_time += dt;
                self.time = integ_time;

                let mut state_event = false;
                if !self.scanner.is_empty() {
                    let mut event_time = integ_time;
                    state_event = self.scanner.scan(
                        &mut self.model,
                        &mut self.values,
                        &mut self.integrator,
                        &mut self.time,
                        dt,
                        &mut event_time,
                    );

                    if state_event {
                        // Rewind to the refined event time.
                        integ_time = event_time;
                        self.time = integ_time;

                        for index in 0..self.scanner.indicator_count() {
                            if self.scanner.fired(index) {
                                let time = self.time;
                                self.log(
                                    Status::Ok,
                                    LogCategory::Event,
                                    &format!(
                                        "do_step: state event [{index}] fired at time = {time}"
                                    ),
                                );
                                self.scanner.clear_fired(index, time);
                            }
                        }
                    }
                }

                let time_event = (integ_time - next_time_event).abs() <= frame_epsilon;

                if state_event || time_event {
                    self.model
                        .activate_events(&mut self.values, &mut self.event_info, false);
                    if self.event_info.terminate_simulation {
                        return Status::Discard;
                    }
                    // Adopt a rescheduled time event, or the step cannot
                    // advance past the one just handled.
                    if self.event_info.next_event_time_defined {
                        next_time_event = self.event_info.next_event_time;
                    }
                }
            }
        }

        Status::Ok
    }
}
