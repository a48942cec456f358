pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use nebula_core::{InputEvent, SimConfig};

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Sim not initialized. Call galaxy_init() first.");
        f(runner)
    })
}

fn install(config: SimConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let (w, h) = (config.width, config.height);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(SimRunner::new(config));
    });
    log::info!("nebula-web: initialized {}x{}", w, h);
}

/// Initialize the sim with explicit dimensions and seed.
#[wasm_bindgen]
pub fn galaxy_init(width: f32, height: f32, seed: u32) {
    install(SimConfig {
        width,
        height,
        seed: seed as u64,
        ..SimConfig::default()
    });
}

/// Initialize the sim from a JSON config document.
/// Malformed JSON falls back to defaults rather than failing the page.
#[wasm_bindgen]
pub fn galaxy_init_from_json(json: &str) {
    let config = match SimConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
            log::warn!("invalid config JSON ({}), using defaults", err);
            SimConfig::default()
        }
    };
    install(config);
}

/// Advance the sim by one browser frame of `dt` seconds.
#[wasm_bindgen]
pub fn galaxy_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn galaxy_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn galaxy_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_canvas_ptr() -> *const f32 {
    with_runner(|r| r.canvas_ptr())
}

#[wasm_bindgen]
pub fn get_canvas_vertex_count() -> u32 {
    with_runner(|r| r.canvas_vertex_count())
}

#[wasm_bindgen]
pub fn get_vertex_floats() -> u32 {
    with_runner(|r| r.vertex_floats())
}

#[wasm_bindgen]
pub fn get_tones_ptr() -> *const f32 {
    with_runner(|r| r.tones_ptr())
}

#[wasm_bindgen]
pub fn get_tone_count() -> u32 {
    with_runner(|r| r.tone_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}
