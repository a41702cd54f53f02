//! Remote advisory boundary: a generative-AI service may propose settings
//! and a news feed, and every failure collapses into the local engine.
//!
//! The capability is dependency-injected: callers hold an
//! `Option<&impl RemoteAdvisor>` and pass it to [`generate_settings`] /
//! [`fetch_trends`], which are the only places fallback decisions happen.
//! Nothing in here reads process-wide state.

use crate::{clamp_sensi, local_report, Provenance, SensiReport, SensiSettings, UserConfig};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use std::fmt;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const SETTINGS_MODEL: &str = "gemini-3-pro-preview";
const TRENDS_MODEL: &str = "gemini-3-flash-preview";
const TRENDS_PROMPT: &str =
    "List 5 latest Free Fire news focusing on sensitivity, aim, or refresh rate optimization.";

/// One entry of the advisory news feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Trend {
    fn new(title: &str, description: &str, url: &str) -> Self {
        Trend {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }
}

static PLACEHOLDER_TRENDS: Lazy<Vec<Trend>> = Lazy::new(|| {
    vec![
        Trend::new(
            "200 Sensi Meta: Why 120Hz devices need it",
            "Pro guide on high-frequency sensitivity.",
            "#",
        ),
        Trend::new(
            "Neural Engine Update: Local Calibration v2.0",
            "New logic for no-API environments.",
            "#",
        ),
        Trend::new(
            "Touch Latency Fix for Android Users",
            "How to reduce input lag in OB44.",
            "#",
        ),
    ]
});

/// Fixed feed shown when no credential is configured.
pub fn placeholder_trends() -> Vec<Trend> {
    PLACEHOLDER_TRENDS.clone()
}

fn local_mode_trend() -> Trend {
    Trend::new("System: Local Mode", "Running on internal data.", "#")
}

// Error taxonomy is deliberately small: every variant routes to the same
// local fallback, the distinction only matters for the log line.
#[derive(Debug)]
pub enum AdvisorError {
    Transport(String),
    Status(u16),
    MalformedPayload(String),
    EmptyResponse,
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::Transport(msg) => write!(f, "transport error: {}", msg),
            AdvisorError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            AdvisorError::MalformedPayload(msg) => write!(f, "malformed payload: {}", msg),
            AdvisorError::EmptyResponse => write!(f, "response contained no candidates"),
        }
    }
}

impl std::error::Error for AdvisorError {}

/// A remote service that can propose settings and a news feed.
#[allow(async_fn_in_trait)]
pub trait RemoteAdvisor {
    async fn request_settings(&self, config: &UserConfig) -> Result<SensiReport, AdvisorError>;
    async fn fetch_trends(&self) -> Result<Vec<Trend>, AdvisorError>;
}

/// Produce a recommendation, preferring the advisor when one is present.
///
/// This is the single collapse point of the fallback policy: at most one
/// remote attempt, any error is swallowed into the local engine, and the
/// caller only ever observes the provenance label. Never fails.
pub async fn generate_settings<A: RemoteAdvisor>(
    advisor: Option<&A>,
    config: &UserConfig,
) -> SensiReport {
    if let Some(advisor) = advisor {
        match advisor.request_settings(config).await {
            Ok(report) => {
                info!("settings served by {}", report.source.label());
                return report;
            }
            Err(err) => warn!("remote advisor failed, using local engine: {}", err),
        }
    } else {
        debug!("no advisor credential configured, using local engine");
    }
    local_report(config)
}

/// Load the news feed, with the same silent-fallback policy as settings.
pub async fn fetch_trends<A: RemoteAdvisor>(advisor: Option<&A>) -> Vec<Trend> {
    match advisor {
        Some(advisor) => match advisor.fetch_trends().await {
            Ok(trends) => trends,
            Err(err) => {
                warn!("trend feed unavailable: {}", err);
                vec![local_mode_trend()]
            }
        },
        None => placeholder_trends(),
    }
}

/// Advisor backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiAdvisor {
    api_key: String,
}

impl GeminiAdvisor {
    /// Accept the credential only when it looks usable; build systems tend
    /// to bake the literal string "undefined" when the variable is absent.
    pub fn new(api_key: &str) -> Option<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() || api_key == "undefined" || api_key.len() < 10 {
            return None;
        }
        Some(GeminiAdvisor {
            api_key: api_key.to_string(),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent?key={}", API_BASE, model, self.api_key)
    }
}

impl RemoteAdvisor for GeminiAdvisor {
    async fn request_settings(&self, config: &UserConfig) -> Result<SensiReport, AdvisorError> {
        let body = settings_request_body(config).to_string();
        let response = post_json(&self.model_url(SETTINGS_MODEL), &body).await?;
        parse_settings_response(&response)
    }

    async fn fetch_trends(&self) -> Result<Vec<Trend>, AdvisorError> {
        let body = trends_request_body().to_string();
        let response = post_json(&self.model_url(TRENDS_MODEL), &body).await?;
        parse_trends_response(&response)
    }
}

/// Natural-language instruction plus structured-output schema for the
/// eight settings fields and the explanation, on the 0-200 scale.
fn settings_request_body(config: &UserConfig) -> serde_json::Value {
    let prompt = format!(
        "Generate FF sensitivity for {}, DPI: {}, Refresh: {}Hz, Style: {}. \
         SCALE: 0-200. Return JSON.",
        config.device_model, config.dpi, config.refresh_rate, config.play_style
    );
    let number = serde_json::json!({ "type": "NUMBER" });
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "settings": {
                        "type": "OBJECT",
                        "properties": {
                            "general": number,
                            "redDot": number,
                            "scope2x": number,
                            "scope4x": number,
                            "sniperScope": number,
                            "freeLook": number,
                            "graphicSettings": { "type": "STRING" },
                            "fpsSetting": { "type": "STRING" },
                            "proTips": { "type": "ARRAY", "items": { "type": "STRING" } }
                        },
                        "required": [
                            "general", "redDot", "scope2x", "scope4x", "sniperScope",
                            "freeLook", "graphicSettings", "fpsSetting", "proTips"
                        ]
                    },
                    "explanation": { "type": "STRING" }
                },
                "required": ["settings", "explanation"]
            }
        }
    })
}

fn trends_request_body() -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": TRENDS_PROMPT }] }],
        "tools": [{ "googleSearch": {} }]
    })
}

// ──────────────────────────────────────────────────────────────────────────
// Wire format

#[derive(serde::Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default, rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(serde::Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Deserialize)]
struct GroundingMetadata {
    #[serde(default, rename = "groundingChunks")]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(serde::Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(serde::Deserialize)]
struct WebSource {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

/// The JSON document the model is asked to emit inside the first part.
#[derive(serde::Deserialize)]
struct RemotePayload {
    settings: RemoteSettings,
    explanation: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteSettings {
    general: f64,
    red_dot: f64,
    scope_2x: f64,
    scope_4x: f64,
    sniper_scope: f64,
    free_look: f64,
    graphic_settings: String,
    fps_setting: String,
    pro_tips: Vec<String>,
}

impl RemoteSettings {
    // The remote contract does not promise bounded numbers, so the parse
    // path applies the same [10, 200] clamp as the local engine.
    fn into_settings(self) -> SensiSettings {
        SensiSettings {
            general: clamp_sensi(self.general),
            red_dot: clamp_sensi(self.red_dot),
            scope_2x: clamp_sensi(self.scope_2x),
            scope_4x: clamp_sensi(self.scope_4x),
            sniper_scope: clamp_sensi(self.sniper_scope),
            free_look: clamp_sensi(self.free_look),
            graphic_settings: self.graphic_settings,
            fps_setting: self.fps_setting,
            pro_tips: self.pro_tips,
        }
    }
}

fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()
}

fn parse_settings_response(body: &str) -> Result<SensiReport, AdvisorError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| AdvisorError::MalformedPayload(e.to_string()))?;
    let text = first_text(&envelope).ok_or(AdvisorError::EmptyResponse)?;
    let payload: RemotePayload = serde_json::from_str(text)
        .map_err(|e| AdvisorError::MalformedPayload(e.to_string()))?;
    Ok(SensiReport {
        settings: payload.settings.into_settings(),
        explanation: payload.explanation,
        source: Provenance::Remote,
    })
}

fn parse_trends_response(body: &str) -> Result<Vec<Trend>, AdvisorError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| AdvisorError::MalformedPayload(e.to_string()))?;
    let chunks = envelope
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|m| m.grounding_chunks.as_slice())
        .unwrap_or_default();
    let trends = chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Trend {
            title: web.title.clone().unwrap_or_else(|| "FF News".to_string()),
            description: "Latest update from the web.".to_string(),
            url: web.uri.clone().unwrap_or_else(|| "#".to_string()),
        })
        .collect();
    Ok(trends)
}

// ──────────────────────────────────────────────────────────────────────────
// Transport

#[cfg(target_arch = "wasm32")]
async fn post_json(url: &str, body: &str) -> Result<String, AdvisorError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    fn js_error(value: JsValue) -> AdvisorError {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        AdvisorError::Transport(msg)
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = gloo_utils::window();
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| AdvisorError::Transport("fetch did not yield a Response".to_string()))?;
    if !response.ok() {
        return Err(AdvisorError::Status(response.status()));
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| AdvisorError::MalformedPayload("non-text response body".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(_url: &str, _body: &str) -> Result<String, AdvisorError> {
    Err(AdvisorError::Transport(
        "fetch transport is only available in the browser".to_string(),
    ))
}
