//! Platform abstraction layer
//!
//! Input devices live outside the crate; the game only asks for the current
//! key state once per tick.

use crate::sim::TickInput;

/// Per-tick key state provider
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed sequence of inputs, looping at the end
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    script: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<TickInput>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Demo pilot: sweep right while firing, then sweep back
    pub fn sweeping(ticks_per_sweep: usize) -> Self {
        let right = TickInput {
            rotate_right: true,
            fire: true,
            ..Default::default()
        };
        let left = TickInput {
            rotate_left: true,
            fire: true,
            ..Default::default()
        };
        let mut script = vec![right; ticks_per_sweep];
        script.extend(std::iter::repeat_n(left, ticks_per_sweep));
        Self::new(script)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        if self.script.is_empty() {
            return TickInput::default();
        }
        let input = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        input
    }
}

/// Closure input, for quick wiring in hosts and tests
impl<F: FnMut() -> TickInput> InputSource for F {
    fn poll(&mut self) -> TickInput {
        self()
    }
}
