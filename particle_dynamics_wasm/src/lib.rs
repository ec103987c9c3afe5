// particle_dynamics_wasm/src/lib.rs
// Browser-facing handle around a simulation. The page owns the canvas and the
// animation loop; it calls `advance` once per frame and draws `frame()`.

use wasm_bindgen::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use particle_dynamics::simulation::{SimulationConfig, SimulationState};
use particle_dynamics::utils::RENDER_RADIUS;

fn to_js(err: particle_dynamics::utils::SimulationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmSimulation {
    sim: SimulationState,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Builds a random run from a named preset: "gravity", "lennard-jones" or "breathing".
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str, seed: u64) -> Result<WasmSimulation, JsValue> {
        let config = match preset {
            "gravity" => SimulationConfig::gravity_preset(),
            "lennard-jones" => SimulationConfig::lennard_jones_preset(),
            "breathing" => SimulationConfig::breathing_gravity_preset(),
            other => return Err(JsValue::from_str(&format!("Unknown preset: {}", other))),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let sim = SimulationState::random(config, &mut rng).map_err(to_js)?;
        web_sys::console::log_1(&format!("{:?}", sim).into());
        Ok(WasmSimulation { sim })
    }

    #[wasm_bindgen]
    pub fn advance(&mut self) {
        self.sim.advance();
    }

    /// Flat `[x, y, r, g, b, ...]` buffer, five entries per particle.
    #[wasm_bindgen]
    pub fn frame(&self) -> js_sys::Int32Array {
        let flat: Vec<i32> = self
            .sim
            .render_frame()
            .iter()
            .flat_map(|p| [p.x, p.y, p.color.r as i32, p.color.g as i32, p.color.b as i32])
            .collect();
        js_sys::Int32Array::from(flat.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.sim.bounds().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.sim.bounds().height
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> u32 {
        RENDER_RADIUS
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.sim.step_count() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn frame_rate(&self) -> f64 {
        self.sim.config().frame_rate
    }
}
