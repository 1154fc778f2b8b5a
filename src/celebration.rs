//! Celebration Effect
//!
//! Confetti bursts fired when every task is done. The effect is a
//! side-effect-only collaborator behind the [`Celebration`] trait so the
//! controller can run without a browser.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Global from the canvas-confetti script loaded by index.html
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti(options: JsValue) -> Result<JsValue, JsValue>;
}

/// Particles shared across the whole burst sequence
pub const PARTICLE_BUDGET: u32 = 200;

/// Vertical origin of every burst (fraction of viewport height from the top)
pub const ORIGIN_Y: f64 = 0.7;

/// (share of budget in percent, spread, start velocity, decay, scalar)
const BURSTS: [(u32, f64, Option<f64>, Option<f64>, Option<f64>); 5] = [
    (25, 26.0, Some(55.0), None, None),
    (20, 60.0, None, None, None),
    (35, 100.0, None, Some(0.91), Some(0.8)),
    (10, 120.0, Some(25.0), Some(0.92), Some(1.2)),
    (10, 120.0, Some(45.0), None, None),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub y: f64,
}

/// Options for a single confetti call. Unset fields fall back to the
/// provider's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstSpec {
    pub particle_count: u32,
    pub spread: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar: Option<f64>,
    pub origin: Origin,
}

/// The fixed five-burst sequence
pub fn burst_sequence() -> Vec<BurstSpec> {
    BURSTS
        .iter()
        .map(|&(share, spread, start_velocity, decay, scalar)| BurstSpec {
            particle_count: PARTICLE_BUDGET * share / 100,
            spread,
            start_velocity,
            decay,
            scalar,
            origin: Origin { y: ORIGIN_Y },
        })
        .collect()
}

/// Capability to play the celebration effect
pub trait Celebration {
    /// Fire one burst. Fire-and-forget, nothing is returned.
    fn fire(&self, burst: &BurstSpec);

    /// Play the whole burst sequence once
    fn celebrate(&self) {
        for burst in burst_sequence() {
            self.fire(&burst);
        }
    }
}

/// Browser confetti via the global `confetti` function
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfettiCelebration;

impl Celebration for ConfettiCelebration {
    #[cfg(target_arch = "wasm32")]
    fn fire(&self, burst: &BurstSpec) {
        let options = match serde_wasm_bindgen::to_value(burst) {
            Ok(options) => options,
            Err(e) => {
                log::warn!(target: "celebration", "Failed to encode burst: {}", e);
                return;
            }
        };
        if let Err(e) = confetti(options) {
            log::warn!(target: "celebration", "confetti unavailable: {:?}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fire(&self, burst: &BurstSpec) {
        log::debug!(target: "celebration", "confetti skipped off-browser: {} particles", burst.particle_count);
    }
}

/// Does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCelebration;

impl Celebration for NoopCelebration {
    fn fire(&self, _burst: &BurstSpec) {}
}
