//! Yew view components for the Neural Aim UI.
//!
//! Stateless renderers take plain slices; anything that owns a bit of UI
//! state (copy feedback, rotating loader text) is a function component.

use crate::config::{
    COPY_FEEDBACK_MS, LOADING_TEXTS, LOADING_TEXT_INTERVAL_MS, PRO_PRESETS, TICKER_IDLE_TEXT,
    VERSION_TAG,
};
use gloo_timers::callback::Timeout;
use log::warn;
use neural_aim::advisor::Trend;
use neural_aim::{format_copy_line, SensiReport, SENSI_MAX};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

/// Sticky top bar with the brand block and the remote/local status badge.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub remote_active: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (dot_class, status) = if props.remote_active {
        ("status-dot online", "HYPERLINK ACTIVE")
    } else {
        ("status-dot offline", "LOCAL NEURAL CALIB")
    };
    html! {
        <header class="header">
            <div class="brand">
                <h1 class="brand-title">{ "NEURAL AIM V8" }</h1>
                <p class="brand-subtitle">{ "ELITE CORE INTERFACE" }</p>
            </div>
            <div class="system-status">
                <span class="status-label">{ "System Status" }</span>
                <div class="status-badge">
                    <span class={dot_class}></span>
                    <span class="status-text">{ status }</span>
                </div>
            </div>
        </header>
    }
}

/// Marquee strip above the header. Falls back to the idle line until the
/// feed arrives (or when remote returned nothing).
pub fn render_trends_ticker(trends: &[Trend]) -> Html {
    html! {
        <div class="ticker">
            <div class="ticker-track">
                if trends.is_empty() {
                    <span class="ticker-item">{ TICKER_IDLE_TEXT }</span>
                } else {
                    { trends.iter().map(|t| html! {
                        <span class="ticker-item">
                            <span class="ticker-dot"></span>
                            { format!("{} :: {}", t.title, t.description) }
                        </span>
                    }).collect::<Html>() }
                }
            </div>
        </div>
    }
}

/// Side panel listing the advisory feed entries.
pub fn render_trends_feed(trends: &[Trend]) -> Html {
    html! {
        <div class="trends-panel">
            <h3 class="trends-title">{ "Neural Feed" }</h3>
            <div class="trends-list">
                { trends.iter().map(|trend| html! {
                    <a class="trend-entry" href={trend.url.clone()}>
                        <h4 class="trend-heading">{ &trend.title }</h4>
                        <p class="trend-description">{ &trend.description }</p>
                    </a>
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Shown while a recommendation is being generated. Rotates through the
/// status lines by chaining one timeout per displayed text.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let text_index = use_state(|| 0usize);
    {
        let text_index = text_index.clone();
        use_effect_with(*text_index, move |&current| {
            let timer = Timeout::new(LOADING_TEXT_INTERVAL_MS, move || {
                text_index.set((current + 1) % LOADING_TEXTS.len());
            });
            move || drop(timer)
        });
    }
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <h3 class="loading-title">{ "CALIBRATING..." }</h3>
            <p class="loading-text">{ LOADING_TEXTS[*text_index] }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub report: Rc<SensiReport>,
    pub on_reset: Callback<MouseEvent>,
}

/// Full result view: the six numeric values with /200 bars, provenance
/// badge, analysis text, graphics rows, pro tips, copy and reset actions.
#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let line = format_copy_line(&props.report.settings);
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let line = line.clone();
            spawn_local(async move {
                let clipboard = gloo_utils::window().navigator().clipboard();
                match JsFuture::from(clipboard.write_text(&line)).await {
                    Ok(_) => copied.set(true),
                    Err(_) => warn!("clipboard write was rejected"),
                }
            });
        })
    };

    // Flip the copy button back after a short confirmation window.
    {
        let copied = copied.clone();
        use_effect_with(*copied, move |&is_copied| {
            let timer =
                is_copied.then(|| Timeout::new(COPY_FEEDBACK_MS, move || copied.set(false)));
            move || drop(timer)
        });
    }

    let settings = &props.report.settings;
    let cells = [
        ("General / 200", settings.general),
        ("Red Dot / 200", settings.red_dot),
        ("2x Scope / 200", settings.scope_2x),
        ("4x Scope / 200", settings.scope_4x),
        ("Sniper Scope", settings.sniper_scope),
        ("Free Look", settings.free_look),
    ];

    html! {
        <div class="result">
            <div class="result-main">
                <div class="result-header">
                    <div>
                        <span class="result-tag">{ "DATA EXTRACTED" }</span>
                        <span class="result-source">{ props.report.source.label() }</span>
                        <h3 class="result-title">{ "ELITE PAYLOAD" }</h3>
                    </div>
                    <button class="btn-copy" onclick={on_copy}>
                        { if *copied { "BUFFERED" } else { "EXTRACT DATA" } }
                    </button>
                </div>
                <div class="stat-grid">
                    { cells.iter().map(|&(label, value)| html! {
                        <div class="stat-cell">
                            <span class="stat-label">{ label }</span>
                            <div class="stat-value">{ value }</div>
                            <div class="stat-bar">
                                <div class="stat-bar-fill"
                                    style={format!("width: {}%", value * 100 / SENSI_MAX)} />
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="result-side">
                <div class="analysis-panel">
                    <h4 class="panel-title">{ "Analysis Log" }</h4>
                    <p class="analysis-text">{ format!("\"{}\"", props.report.explanation) }</p>
                </div>
                <div class="optimized-panel">
                    <h4 class="panel-title">{ "Optimized For" }</h4>
                    <div class="optimized-row">
                        <span>{ "FPS REGEN" }</span>
                        <span>{ &settings.fps_setting }</span>
                    </div>
                    <div class="optimized-row">
                        <span>{ "POST-PROCESS" }</span>
                        <span>{ &settings.graphic_settings }</span>
                    </div>
                </div>
            </div>

            <div class="tips-panel">
                <h4 class="panel-title">{ "NEURAL OPTIMIZATION TIPS" }</h4>
                <div class="tips-grid">
                    { settings.pro_tips.iter().enumerate().map(|(i, tip)| html! {
                        <div class="tip-card">
                            <span class="tip-index">{ format!("LOG_0{}", i + 1) }</span>
                            <p class="tip-text">{ tip }</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="result-actions">
                <button class="btn-reset" onclick={props.on_reset.clone()}>
                    { "Reset Core" }
                </button>
            </div>
        </div>
    }
}

/// The Elite Archive tab: three fixed pro presets on the 200 scale.
pub fn render_pro_presets() -> Html {
    html! {
        <div class="presets-grid">
            { PRO_PRESETS.iter().map(|preset| html! {
                <div class="preset-card">
                    <div class="preset-head">
                        <h4 class="preset-name">{ preset.name }</h4>
                        <p class="preset-specialty">{ preset.specialty }</p>
                    </div>
                    <div class="preset-meta">
                        <p class="preset-device">{ format!("Device: {}", preset.device) }</p>
                        <span class="preset-scale">{ "200 SCALE" }</span>
                    </div>
                    { preset.settings.iter().map(|&(label, value)| html! {
                        <div class="preset-row">
                            <span class="preset-label">{ label }</span>
                            <span class="preset-value">{ value }</span>
                        </div>
                    }).collect::<Html>() }
                </div>
            }).collect::<Html>() }
        </div>
    }
}

/// Footer brand line, also hosts the version tag.
pub fn render_footer() -> Html {
    html! {
        <footer class="footer">
            <p>{ format!("NEURAL AIM V8 // ELITE CORE ENGINE // {}", VERSION_TAG) }</p>
        </footer>
    }
}
