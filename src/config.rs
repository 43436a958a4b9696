use log::Level;

/// How long the simulator pretends to fetch data before showing results.
pub const SIMULATION_DELAY_MS: u32 = 800;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

/// Fraction of the impact section that must be on screen before the counters start.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.3;

pub const FINAL_WATER_LITERS: u64 = 2_500_000;
pub const FINAL_CO2_TONS: u64 = 1_850;
pub const FINAL_PROPERTIES: u64 = 320;
pub const FINAL_AREA_HECTARES: u64 = 15_000;

pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
pub const HEADER_SCROLLED_OFFSET: i32 = 80;

pub const CONTACT_EMAIL: &str = "contato@agrotech.com.br";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
