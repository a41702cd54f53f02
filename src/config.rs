//! Application-level configuration constants.

/// Credential baked in at build time. Absence (or a junk value) flips the
/// whole app into local calibration mode; nothing else reads the env.
pub const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

// Form defaults
pub const DEFAULT_DPI: i32 = 440;
pub const DEFAULT_REFRESH_RATE: u32 = 60;
pub const REFRESH_RATES: [u32; 4] = [60, 90, 120, 144];

// UI behavior
pub const LOCAL_ANALYSIS_DELAY_MS: u32 = 2_000;
pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const LOADING_TEXT_INTERVAL_MS: u32 = 2_000;

pub const VERSION_TAG: &str = "V8.0.2-RELEASE";
pub const TICKER_IDLE_TEXT: &str =
    "ESTABLISHING LINK... NEURAL CORE V8 ONLINE... STANDBY FOR INSTRUCTIONS...";

pub const LOADING_TEXTS: [&str; 5] = [
    "Profiling device hardware...",
    "Loading aim heuristics...",
    "Searching for the best headshot parameters...",
    "Optimizing aim trajectory...",
    "Checking the pro player database...",
];

/// One entry of the Elite Archive tab.
pub struct ProPreset {
    pub name: &'static str,
    pub device: &'static str,
    pub specialty: &'static str,
    pub settings: [(&'static str, u32); 5],
}

pub const PRO_PRESETS: [ProPreset; 3] = [
    ProPreset {
        name: "Nobru",
        device: "iPhone 15 Pro Max",
        specialty: "King of Movement",
        settings: [
            ("General", 182),
            ("Red Dot", 170),
            ("2x Scope", 164),
            ("4x Scope", 156),
            ("Sniper Scope", 90),
        ],
    },
    ProPreset {
        name: "White444",
        device: "PC / Emulator",
        specialty: "One-Tap Good",
        settings: [
            ("General", 200),
            ("Red Dot", 190),
            ("2x Scope", 180),
            ("4x Scope", 170),
            ("Sniper Scope", 100),
        ],
    },
    ProPreset {
        name: "Ruok FF",
        device: "iPad Pro",
        specialty: "Precision Aim",
        settings: [
            ("General", 190),
            ("Red Dot", 180),
            ("2x Scope", 170),
            ("4x Scope", 160),
            ("Sniper Scope", 80),
        ],
    },
];
