use log::debug;
use std::fmt;

/// Tuning constants for the local sensitivity engine.
pub mod defaults {
    /// Reference touch density everything is normalized against.
    pub const BASE_DPI: f64 = 440.0;
    /// Reference refresh rate for the frequency factor.
    pub const BASE_REFRESH_HZ: f64 = 60.0;
    /// Base sensitivity index on the 200 scale at 60 Hz / 440 DPI.
    pub const BASE_SENSI: f64 = 94.0;
    /// Final scale-up applied to every computed field.
    pub const SCALE_ADJUST: f64 = 1.05;
}

/// Lower clamp for every scaled sensitivity field.
pub const SENSI_MIN: u32 = 10;
/// Upper clamp for every scaled sensitivity field.
pub const SENSI_MAX: u32 = 200;
/// Free look is not scaled, it is always pinned high.
pub const FREE_LOOK: u32 = 150;

/// Platform the game runs on. Each platform gets its own sensitivity
/// correction: iOS sensors are more responsive, mouse input on emulators
/// needs far lower values, Android gets a bump to compensate touch latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DeviceType {
    Android,
    Ios,
    PcEmulator,
    /// Anything we do not recognize. Treated as neutral (multiplier 1.0).
    Other,
}

impl DeviceType {
    /// Map a free-form label to a device type. Unrecognized labels stay
    /// neutral instead of being rejected.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Android" => DeviceType::Android,
            "iOS" => DeviceType::Ios,
            "PC/Emulator" => DeviceType::PcEmulator,
            _ => DeviceType::Other,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            DeviceType::Ios => 0.85,
            DeviceType::PcEmulator => 0.45,
            DeviceType::Android => 1.05,
            DeviceType::Other => 1.0,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceType::Android => "Android",
            DeviceType::Ios => "iOS",
            DeviceType::PcEmulator => "PC/Emulator",
            DeviceType::Other => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Combat style. Aggressive play wants higher sensitivity for shotgun
/// drags, passive play wants lower values for sniper precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayStyle {
    Aggressive,
    Balanced,
    Passive,
}

impl PlayStyle {
    /// Unrecognized labels fall back to the neutral balanced style.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Aggressive" => PlayStyle::Aggressive,
            "Passive" => PlayStyle::Passive,
            _ => PlayStyle::Balanced,
        }
    }

    pub fn style_mod(self) -> f64 {
        match self {
            PlayStyle::Aggressive => 15.0,
            PlayStyle::Passive => -12.0,
            PlayStyle::Balanced => 0.0,
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayStyle::Aggressive => "Aggressive",
            PlayStyle::Balanced => "Balanced",
            PlayStyle::Passive => "Passive",
        };
        write!(f, "{}", label)
    }
}

/// Everything the player tells us about their device and habits.
///
/// `dpi` of zero or below means "unset" and is substituted with
/// [`defaults::BASE_DPI`]; the engine never rejects an input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserConfig {
    pub device_model: String,
    pub device_type: DeviceType,
    pub dpi: i32,
    pub play_style: PlayStyle,
    pub refresh_rate: u32,
}

/// The full recommendation produced for one [`UserConfig`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensiSettings {
    pub general: u32,
    pub red_dot: u32,
    pub scope_2x: u32,
    pub scope_4x: u32,
    pub sniper_scope: u32,
    pub free_look: u32,
    pub graphic_settings: String,
    pub fps_setting: String,
    pub pro_tips: Vec<String>,
}

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Local,
    Remote,
}

impl Provenance {
    pub fn label(self) -> &'static str {
        match self {
            Provenance::Local => "ELITE NEURAL ENGINE (LOCAL MODE)",
            Provenance::Remote => "Gemini AI Neural Cloud",
        }
    }
}

/// Settings plus the human-readable analysis and its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct SensiReport {
    pub settings: SensiSettings,
    pub explanation: String,
    pub source: Provenance,
}

/// Compute the sensitivity recommendation for one configuration.
///
/// Total function: every input is defaulted rather than rejected, so this
/// never fails. Deterministic, no hidden state, safe to call from anywhere.
pub fn compute_settings(config: &UserConfig) -> SensiSettings {
    let refresh_factor = config.refresh_rate as f64 / defaults::BASE_REFRESH_HZ;
    let dpi = if config.dpi > 0 {
        config.dpi as f64
    } else {
        defaults::BASE_DPI
    };
    let dpi_factor = defaults::BASE_DPI / dpi;
    let base_sensi = defaults::BASE_SENSI * refresh_factor * dpi_factor;

    let device_multiplier = config.device_type.multiplier();
    let style_mod = config.play_style.style_mod();

    debug!(
        "base sensi {:.2} (refresh x{:.2}, dpi x{:.2}), device x{:.2}, style {:+}",
        base_sensi, refresh_factor, dpi_factor, device_multiplier, style_mod
    );

    let calc = |base: f64, field_mod: f64| -> u32 {
        let raw = (base + field_mod + style_mod) * device_multiplier * defaults::SCALE_ADJUST;
        clamp_sensi(raw)
    };

    SensiSettings {
        general: calc(base_sensi, 10.0),
        red_dot: calc(base_sensi * 0.95, 5.0),
        scope_2x: calc(base_sensi * 0.88, 2.0),
        scope_4x: calc(base_sensi * 0.82, 0.0),
        sniper_scope: calc(base_sensi * 0.55, -15.0),
        free_look: FREE_LOOK,
        graphic_settings: graphic_settings_for(config.refresh_rate),
        fps_setting: format!("{} FPS (High Frequency)", config.refresh_rate),
        pro_tips: pro_tips_for(config),
    }
}

/// Round to the nearest integer and clamp into the playable range.
#[inline]
pub fn clamp_sensi(value: f64) -> u32 {
    (value.round() as i64).clamp(SENSI_MIN as i64, SENSI_MAX as i64) as u32
}

fn graphic_settings_for(refresh_rate: u32) -> String {
    if refresh_rate >= 90 {
        "Ultra / Max (V-Sync OFF)".to_string()
    } else {
        "Standard / High FPS".to_string()
    }
}

fn pro_tips_for(config: &UserConfig) -> Vec<String> {
    let dpi_label = if config.dpi > 0 {
        config.dpi.to_string()
    } else {
        "Standard".to_string()
    };
    let style_tip = if config.play_style == PlayStyle::Aggressive {
        "Flick the fire button short and fast during shotgun jump-shots.".to_string()
    } else {
        "Stabilization enabled for quick-scope sniper shots.".to_string()
    };
    vec![
        format!(
            "{} touch sampling optimized for {}Hz.",
            config.device_model, config.refresh_rate
        ),
        format!(
            "DPI: {} tuned on the 200 scale to prevent pixel skipping.",
            dpi_label
        ),
        style_tip,
        "Set 'Visual Effects' to 'Classic' in the game settings.".to_string(),
    ]
}

/// Run the local engine and wrap the result with its analysis text.
pub fn local_report(config: &UserConfig) -> SensiReport {
    let settings = compute_settings(config);
    let explanation = format!(
        "Elite neural engine profiled {} at {}Hz. The drag-shot trajectory \
         for the {} style was optimized on the 200 scale.",
        config.device_model, config.refresh_rate, config.play_style
    );
    SensiReport {
        settings,
        explanation,
        source: Provenance::Local,
    }
}

/// Serialize the five scaled fields into the shareable one-liner.
pub fn format_copy_line(settings: &SensiSettings) -> String {
    format!(
        "V8-ELITE: Gen:{} | RD:{} | 2x:{} | 4x:{} | Snip:{}",
        settings.general,
        settings.red_dot,
        settings.scope_2x,
        settings.scope_4x,
        settings.sniper_scope
    )
}

pub mod advisor;

#[cfg(test)]
mod tests {
    use super::*;

    fn config(device_type: DeviceType, dpi: i32, style: PlayStyle, rate: u32) -> UserConfig {
        UserConfig {
            device_model: "TEST".to_string(),
            device_type,
            dpi,
            play_style: style,
            refresh_rate: rate,
        }
    }

    const DEVICE_TYPES: [DeviceType; 4] = [
        DeviceType::Android,
        DeviceType::Ios,
        DeviceType::PcEmulator,
        DeviceType::Other,
    ];
    const STYLES: [PlayStyle; 3] = [
        PlayStyle::Aggressive,
        PlayStyle::Balanced,
        PlayStyle::Passive,
    ];

    #[test]
    fn scaled_fields_stay_inside_bounds() {
        for dpi in [0, 100, 440, 2000] {
            for rate in [60, 90, 120, 144] {
                for device in DEVICE_TYPES {
                    for style in STYLES {
                        let s = compute_settings(&config(device, dpi, style, rate));
                        for val in [s.general, s.red_dot, s.scope_2x, s.scope_4x, s.sniper_scope] {
                            assert!(
                                (SENSI_MIN..=SENSI_MAX).contains(&val),
                                "{val} out of range for dpi={dpi} rate={rate} {device:?} {style:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    // The tip text still names the raw DPI input, so equality is checked on
    // the derived fields only.
    fn derived_fields(s: &SensiSettings) -> ([u32; 6], &str, &str) {
        (
            [
                s.general,
                s.red_dot,
                s.scope_2x,
                s.scope_4x,
                s.sniper_scope,
                s.free_look,
            ],
            &s.graphic_settings,
            &s.fps_setting,
        )
    }

    #[test]
    fn unset_dpi_defaults_to_base() {
        let unset = compute_settings(&config(DeviceType::Android, 0, PlayStyle::Balanced, 120));
        let base = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 120));
        assert_eq!(derived_fields(&unset), derived_fields(&base));
        assert!(unset.pro_tips[1].contains("Standard"));
        assert!(base.pro_tips[1].contains("440"));
    }

    #[test]
    fn negative_dpi_defaults_to_base() {
        let negative = compute_settings(&config(DeviceType::Ios, -50, PlayStyle::Passive, 90));
        let base = compute_settings(&config(DeviceType::Ios, 440, PlayStyle::Passive, 90));
        assert_eq!(derived_fields(&negative), derived_fields(&base));
        assert!(negative.pro_tips[1].contains("Standard"));
    }

    #[test]
    fn ios_general_is_lower_than_android() {
        let ios = compute_settings(&config(DeviceType::Ios, 440, PlayStyle::Balanced, 60));
        let android = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 60));
        assert!(ios.general < android.general);
    }

    #[test]
    fn aggressive_general_not_below_passive() {
        for rate in [60, 90, 120, 144] {
            let aggressive =
                compute_settings(&config(DeviceType::Android, 440, PlayStyle::Aggressive, rate));
            let passive =
                compute_settings(&config(DeviceType::Android, 440, PlayStyle::Passive, rate));
            assert!(aggressive.general >= passive.general);
        }
    }

    #[test]
    fn graphics_preset_follows_refresh_rate() {
        let high = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 144));
        assert_eq!(high.graphic_settings, "Ultra / Max (V-Sync OFF)");
        let mid = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 90));
        assert_eq!(mid.graphic_settings, "Ultra / Max (V-Sync OFF)");
        let low = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 60));
        assert_eq!(low.graphic_settings, "Standard / High FPS");
    }

    #[test]
    fn free_look_is_constant() {
        for dpi in [0, 100, 2000] {
            for style in STYLES {
                let s = compute_settings(&config(DeviceType::PcEmulator, dpi, style, 144));
                assert_eq!(s.free_look, FREE_LOOK);
            }
        }
    }

    #[test]
    fn baseline_android_scenario() {
        // 440 DPI at 60 Hz leaves base sensi at exactly 94.
        let s = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 60));
        assert_eq!(s.general, 115); // round((94 + 10) * 1.05 * 1.05)
        assert_eq!(s.free_look, 150);
        assert_eq!(s.graphic_settings, "Standard / High FPS");
        assert_eq!(s.fps_setting, "60 FPS (High Frequency)");
    }

    #[test]
    fn identical_configs_produce_identical_output() {
        let cfg = config(DeviceType::Ios, 300, PlayStyle::Aggressive, 120);
        assert_eq!(compute_settings(&cfg), compute_settings(&cfg));
        assert_eq!(local_report(&cfg), local_report(&cfg));
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral() {
        assert_eq!(DeviceType::from_label("Switch"), DeviceType::Other);
        assert_eq!(DeviceType::Other.multiplier(), 1.0);
        assert_eq!(PlayStyle::from_label("Chaotic"), PlayStyle::Balanced);
        assert_eq!(PlayStyle::from_label("Chaotic").style_mod(), 0.0);

        assert_eq!(DeviceType::from_label("iOS"), DeviceType::Ios);
        assert_eq!(PlayStyle::from_label("Aggressive"), PlayStyle::Aggressive);
    }

    #[test]
    fn copy_line_serializes_the_five_scaled_fields() {
        let s = compute_settings(&config(DeviceType::Android, 440, PlayStyle::Balanced, 60));
        let line = format_copy_line(&s);
        assert_eq!(
            line,
            format!(
                "V8-ELITE: Gen:{} | RD:{} | 2x:{} | 4x:{} | Snip:{}",
                s.general, s.red_dot, s.scope_2x, s.scope_4x, s.sniper_scope
            )
        );
        assert!(line.starts_with("V8-ELITE: Gen:115"));
    }

    #[test]
    fn pro_tips_are_templated() {
        let aggressive =
            compute_settings(&config(DeviceType::Android, 0, PlayStyle::Aggressive, 120));
        assert_eq!(aggressive.pro_tips.len(), 4);
        assert!(aggressive.pro_tips[0].contains("TEST"));
        assert!(aggressive.pro_tips[0].contains("120Hz"));
        assert!(aggressive.pro_tips[1].contains("Standard"));
        assert!(aggressive.pro_tips[2].contains("jump-shot"));

        let passive = compute_settings(&config(DeviceType::Android, 880, PlayStyle::Passive, 60));
        assert!(passive.pro_tips[1].contains("880"));
        assert!(passive.pro_tips[2].contains("quick-scope"));
    }

    #[test]
    fn local_report_is_labeled_local() {
        let report = local_report(&config(DeviceType::Android, 440, PlayStyle::Balanced, 60));
        assert_eq!(report.source, Provenance::Local);
        assert_eq!(report.source.label(), "ELITE NEURAL ENGINE (LOCAL MODE)");
        assert!(report.explanation.contains("TEST"));
        assert!(report.explanation.contains("Balanced"));
    }

    #[test]
    fn clamp_saturates_at_both_ends() {
        assert_eq!(clamp_sensi(-7.4), SENSI_MIN);
        assert_eq!(clamp_sensi(3.0), SENSI_MIN);
        assert_eq!(clamp_sensi(114.66), 115);
        assert_eq!(clamp_sensi(1121.0), SENSI_MAX);
    }
}
