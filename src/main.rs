//! Main module for the Neural Aim application using Yew.
//! Wires UI components, state hooks, and the remote-vs-local side effects.

use gloo_timers::future::TimeoutFuture;
use neural_aim::advisor::{fetch_trends, generate_settings, GeminiAdvisor, Trend};
use neural_aim::{DeviceType, PlayStyle, SensiReport, UserConfig};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{
    render_footer, render_pro_presets, render_trends_feed, render_trends_ticker, Header,
    LoadingScreen, ResultDisplay,
};

/// Which main view is selected while no result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Generator,
    Archive,
}

/// Caption pair shown on the play-style selector cards.
fn style_caption(style: PlayStyle) -> (&'static str, &'static str) {
    match style {
        PlayStyle::Aggressive => ("RUSHER", "CQC OPTIMIZED"),
        PlayStyle::Balanced => ("GHOST", "VERSATILE"),
        PlayStyle::Passive => ("SNIPER", "LR PRECISION"),
    }
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    // The remote capability is built exactly once and handed down; the
    // calculation path itself never looks at the environment.
    let advisor = use_memo((), |_| GeminiAdvisor::new(config::API_KEY.unwrap_or("")));

    let active_tab = use_state(|| Tab::Generator);
    let loading = use_state(|| false);
    let result = use_state(|| None::<Rc<SensiReport>>);
    let trends = use_state(Vec::<Trend>::new);

    // Form state
    let device_model = use_state(String::new);
    let device_type = use_state(|| DeviceType::Android);
    let dpi_text = use_state(|| config::DEFAULT_DPI.to_string());
    let play_style = use_state(|| PlayStyle::Aggressive);
    let refresh_rate = use_state(|| config::DEFAULT_REFRESH_RATE);
    let model_error = use_state(|| None::<String>);

    // Load the advisory feed once on mount.
    {
        let trends = trends.clone();
        let advisor = advisor.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = fetch_trends((*advisor).as_ref()).await;
                trends.set(loaded);
            });
        });
    }

    let on_generate = {
        let advisor = advisor.clone();
        let device_model = device_model.clone();
        let device_type = device_type.clone();
        let dpi_text = dpi_text.clone();
        let play_style = play_style.clone();
        let refresh_rate = refresh_rate.clone();
        let model_error = model_error.clone();
        let loading = loading.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let model = match utils::validate_device_model(&device_model) {
                Ok(model) => {
                    model_error.set(None);
                    model
                }
                Err(message) => {
                    model_error.set(Some(message));
                    return;
                }
            };

            let user_config = UserConfig {
                device_model: model,
                device_type: *device_type,
                dpi: utils::parse_dpi(&dpi_text),
                play_style: *play_style,
                refresh_rate: *refresh_rate,
            };

            loading.set(true);
            let advisor = advisor.clone();
            let result = result.clone();
            let loading = loading.clone();
            spawn_local(async move {
                if advisor.is_none() {
                    // Local mode presents after a short analysis pause.
                    TimeoutFuture::new(config::LOCAL_ANALYSIS_DELAY_MS).await;
                }
                let report = generate_settings((*advisor).as_ref(), &user_config).await;
                result.set(Some(Rc::new(report)));
                loading.set(false);
            });
        })
    };

    let on_reset = {
        let result = result.clone();
        Callback::from(move |_: MouseEvent| result.set(None))
    };

    let model_oninput = {
        let device_model = device_model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            device_model.set(input.value().to_uppercase());
        })
    };

    let dpi_oninput = {
        let dpi_text = dpi_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dpi_text.set(input.value());
        })
    };

    let show_tabs = result.is_none() && !*loading;

    html! {
        <div class="app">
            { render_trends_ticker(&trends) }
            <Header remote_active={advisor.is_some()} />

            <main class="content">
                if show_tabs {
                    <div class="tab-bar">
                        <button
                            class={classes!("tab", (*active_tab == Tab::Generator).then_some("active"))}
                            onclick={
                                let active_tab = active_tab.clone();
                                Callback::from(move |_| active_tab.set(Tab::Generator))
                            }
                        >
                            { "V8 GENERATOR" }
                        </button>
                        <button
                            class={classes!("tab", (*active_tab == Tab::Archive).then_some("active"))}
                            onclick={
                                let active_tab = active_tab.clone();
                                Callback::from(move |_| active_tab.set(Tab::Archive))
                            }
                        >
                            { "ELITE ARCHIVE" }
                        </button>
                    </div>
                }

                if *loading {
                    <LoadingScreen />
                } else if let Some(report) = &*result {
                    <ResultDisplay report={report.clone()} on_reset={on_reset} />
                } else if *active_tab == Tab::Generator {
                    <div class="generator-layout">
                        <div class="form-panel">
                            <div class="form-head">
                                <h2 class="form-title">{ "Parameters" }</h2>
                                <p class="form-subtitle">{ "Input hardware specifications below" }</p>
                                <span class="form-version">{ config::VERSION_TAG }</span>
                            </div>

                            <form onsubmit={on_generate}>
                                <div class="form-group">
                                    <label for="device_model_input">{ "Hardware Signature" }</label>
                                    <input
                                        type="text"
                                        id="device_model_input"
                                        placeholder="e.g. ROG PHONE 8 PRO"
                                        value={(*device_model).clone()}
                                        class={if (*model_error).is_some() { "invalid" } else { "" }}
                                        oninput={model_oninput}
                                    />
                                    if let Some(ref err) = *model_error {
                                        <div class="input-error">{ err }</div>
                                    }
                                </div>

                                <div class="form-group">
                                    <label>{ "Refresh Frequency (Hz)" }</label>
                                    <div class="option-row">
                                        { config::REFRESH_RATES.iter().map(|&rate| {
                                            let refresh_rate = refresh_rate.clone();
                                            let selected = *refresh_rate == rate;
                                            html! {
                                                <button type="button"
                                                    class={classes!("btn-option", selected.then_some("active"))}
                                                    onclick={Callback::from(move |_| refresh_rate.set(rate))}
                                                >
                                                    { rate }
                                                </button>
                                            }
                                        }).collect::<Html>() }
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label>{ "OS Protocol" }</label>
                                    <div class="option-row">
                                        { [DeviceType::Android, DeviceType::Ios, DeviceType::PcEmulator]
                                            .iter().map(|&dt| {
                                                let device_type = device_type.clone();
                                                let selected = *device_type == dt;
                                                html! {
                                                    <button type="button"
                                                        class={classes!("btn-option", selected.then_some("active"))}
                                                        onclick={Callback::from(move |_| device_type.set(dt))}
                                                    >
                                                        { dt.to_string() }
                                                    </button>
                                                }
                                            }).collect::<Html>() }
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label for="dpi_input">{ "Density (DPI)" }</label>
                                    <input
                                        type="number"
                                        id="dpi_input"
                                        value={(*dpi_text).clone()}
                                        oninput={dpi_oninput}
                                    />
                                </div>

                                <div class="form-group">
                                    <label>{ "Combat Heuristic" }</label>
                                    <div class="style-grid">
                                        { [PlayStyle::Aggressive, PlayStyle::Balanced, PlayStyle::Passive]
                                            .iter().map(|&style| {
                                                let play_style = play_style.clone();
                                                let selected = *play_style == style;
                                                let (caption, detail) = style_caption(style);
                                                html! {
                                                    <button type="button"
                                                        class={classes!("style-card", selected.then_some("active"))}
                                                        onclick={Callback::from(move |_| play_style.set(style))}
                                                    >
                                                        <span class="style-caption">{ caption }</span>
                                                        <span class="style-detail">{ detail }</span>
                                                    </button>
                                                }
                                            }).collect::<Html>() }
                                    </div>
                                </div>

                                <button type="submit" class="btn-generate">
                                    { "INITIALIZE V8 ENGINE" }
                                </button>
                            </form>
                        </div>

                        { render_trends_feed(&trends) }
                    </div>
                } else {
                    { render_pro_presets() }
                }
            </main>

            { render_footer() }
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
