//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively)
//! - Seeding the tile RNG
//! - Color-scheme preference

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

use rand_pcg::Pcg32;

use crate::board::rng_from_seed;

/// Fresh tile RNG seeded from the clock (web) or OS entropy (native)
#[cfg(target_arch = "wasm32")]
pub fn entropy_rng() -> Pcg32 {
    rng_from_seed(js_sys::Date::now() as u64)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_rng() -> Pcg32 {
    use rand::Rng;
    rng_from_seed(rand::rng().random())
}

/// Whether the browser asks for a dark color scheme
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> bool {
    false
}
