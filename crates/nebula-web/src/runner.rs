use nebula_core::{FixedTimestep, Galaxy, InputEvent, InputQueue, SimConfig, ToneEvent};

/// Frame runner that wires the sim to the browser loop.
///
/// JS pushes input events between frames and calls `tick` once per
/// requestAnimationFrame with the real frame delta; the runner drains input,
/// runs the accumulated fixed steps, and repacks the tone buffer.
pub struct SimRunner {
    galaxy: Galaxy,
    input: InputQueue,
    timestep: FixedTimestep,
    /// Flat buffer of packed tone events for SharedArrayBuffer reads.
    tone_buffer: Vec<f32>,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        Self {
            galaxy: Galaxy::new(config),
            input: InputQueue::new(),
            timestep,
            tone_buffer: Vec::with_capacity(32 * ToneEvent::FLOATS),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: apply input, step the sim, repack tones.
    pub fn tick(&mut self, dt: f32) {
        // Clear per-frame transient data, then apply input: tones emitted by
        // input handling belong to this tick.
        self.galaxy.clear_tones();

        for event in self.input.drain() {
            self.galaxy.handle_event(event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.galaxy.step();
        }

        self.tone_buffer.clear();
        for tone in self.galaxy.tones() {
            self.tone_buffer.extend_from_slice(&tone.to_floats());
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn canvas_ptr(&self) -> *const f32 {
        self.galaxy.canvas().buffer_ptr()
    }

    pub fn canvas_vertex_count(&self) -> u32 {
        self.galaxy.canvas().vertex_count() as u32
    }

    pub fn tones_ptr(&self) -> *const f32 {
        self.tone_buffer.as_ptr()
    }

    pub fn tone_count(&self) -> u32 {
        (self.tone_buffer.len() / ToneEvent::FLOATS) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.galaxy.config().width
    }

    pub fn world_height(&self) -> f32 {
        self.galaxy.config().height
    }

    pub fn vertex_floats(&self) -> u32 {
        nebula_core::CanvasVertex::FLOATS as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_runs_accumulated_steps() {
        let mut runner = SimRunner::new(SimConfig::default());
        assert_eq!(runner.galaxy.frame(), 0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.galaxy.frame(), 1);
        runner.tick(0.1);
        let frame = runner.galaxy.frame();
        assert!((5..=7).contains(&frame), "frame was {}", frame);
    }

    #[test]
    fn huge_delta_is_capped() {
        let mut runner = SimRunner::new(SimConfig::default());
        runner.tick(5.0);
        assert!(runner.galaxy.frame() <= 10);
    }

    #[test]
    fn input_is_applied_before_stepping() {
        let mut runner = SimRunner::new(SimConfig::default());
        let before = runner.galaxy.arena().live_count();
        runner.push_input(InputEvent::PointerDown { x: 300.0, y: 400.0 });
        runner.tick(1.0 / 60.0);
        assert!(runner.galaxy.arena().live_count() > before);
    }

    #[test]
    fn spawn_tone_survives_the_tick_repack() {
        let mut runner = SimRunner::new(SimConfig::default());
        runner.push_input(InputEvent::PointerDown { x: 300.0, y: 400.0 });
        runner.tick(1.0 / 60.0);
        assert!(runner.tone_count() >= 1);
        assert_eq!(
            runner.tone_buffer.len(),
            runner.tone_count() as usize * ToneEvent::FLOATS
        );
    }

    #[test]
    fn canvas_buffer_is_exposed_after_tick() {
        let mut runner = SimRunner::new(SimConfig::default());
        runner.tick(1.0 / 60.0);
        assert!(runner.canvas_vertex_count() > 0);
        assert!(!runner.canvas_ptr().is_null());
    }
}
