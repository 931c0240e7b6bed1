//! Caption retrieval through YouTube's InnerTube player API.

use super::{CaptionFragment, TranscriptProvider};
use crate::config::YoutubeSettings;
use crate::error::{RecapError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, instrument};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const BASE_URL: &str = "https://www.youtube.com";

static API_KEY_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#""INNERTUBE_API_KEY"\s*:\s*"([^"]+)""#).expect("Invalid regex"),
        Regex::new(r#"innertubeApiKey\s*[=:]\s*"([^"]+)""#).expect("Invalid regex"),
    ]
});

// Formatting markup (<font>, <i>, <b>) left over once entities are decoded.
static MARKUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    captions: Option<Captions>,
    #[serde(rename = "playabilityStatus")]
    playability_status: Option<PlayabilityStatus>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    tracklist: Option<Tracklist>,
}

#[derive(Debug, Deserialize)]
struct Tracklist {
    #[serde(rename = "captionTracks")]
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

/// Caption provider backed by YouTube's public web endpoints.
pub struct YoutubeCaptions {
    client: reqwest::Client,
    languages: Vec<String>,
    base_url: String,
}

impl YoutubeCaptions {
    /// Create a provider preferring the given caption languages, in order.
    pub fn new(languages: Vec<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            languages,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Create a provider from configuration.
    pub fn from_settings(settings: &YoutubeSettings) -> Result<Self> {
        Self::new(
            settings.languages.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    async fn fetch_api_key(&self, video_id: &str) -> Result<String> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        debug!("Fetching watch page: {}", watch_url);

        let page = self
            .client
            .get(&watch_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        extract_api_key(&page)
    }

    async fn fetch_tracks(&self, video_id: &str, api_key: &str) -> Result<Vec<CaptionTrack>> {
        let player_url = format!(
            "{}/youtubei/v1/player?key={}&prettyPrint=false",
            self.base_url, api_key
        );

        let body = serde_json::json!({
            "context": {
                "client": {
                    "hl": self.languages.first().map(String::as_str).unwrap_or("en"),
                    "gl": "US",
                    "clientName": "WEB",
                    "clientVersion": "2.20241126.01.00"
                }
            },
            "videoId": video_id
        });

        let response: PlayerResponse = self
            .client
            .post(&player_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(status) = &response.playability_status {
            if status.status.as_deref().is_some_and(|s| s != "OK") {
                return Err(RecapError::Captions(format!(
                    "video {} is unplayable: {}",
                    video_id,
                    status.reason.as_deref().unwrap_or("unknown reason")
                )));
            }
        }

        let tracks = response
            .captions
            .and_then(|c| c.tracklist)
            .and_then(|t| t.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(RecapError::Captions(format!(
                "captions are disabled for video {}",
                video_id
            )));
        }

        Ok(tracks)
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeCaptions {
    #[instrument(skip(self))]
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
        let api_key = self.fetch_api_key(video_id).await?;
        let tracks = self.fetch_tracks(video_id, &api_key).await?;

        let track = select_track(&tracks, &self.languages).ok_or_else(|| {
            RecapError::NoTranscript {
                video_id: video_id.to_string(),
                languages: self.languages.clone(),
            }
        })?;
        debug!("Using caption track: lang={}", track.language_code);

        let xml = self
            .client
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_caption_xml(&xml)
    }
}

/// Pick the first track matching the preferred languages, in preference order.
fn select_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    languages
        .iter()
        .find_map(|lang| tracks.iter().find(|t| &t.language_code == lang))
}

fn extract_api_key(html: &str) -> Result<String> {
    if let Some(caps) = API_KEY_PATTERNS.iter().find_map(|re| re.captures(html)) {
        return Ok(caps[1].to_string());
    }

    if html.contains("class=\"g-recaptcha\"") {
        return Err(RecapError::Captions(
            "YouTube is rate limiting this address (captcha page)".to_string(),
        ));
    }

    Err(RecapError::Captions(
        "could not extract InnerTube API key from watch page".to_string(),
    ))
}

fn parse_caption_xml(xml: &str) -> Result<Vec<CaptionFragment>> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    let mut fragments = Vec::new();
    let mut current: Option<(f64, f64)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                let mut start = 0.0;
                let mut duration = 0.0;
                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value);
                    match attr.key.as_ref() {
                        b"start" => start = value.parse().unwrap_or(0.0),
                        b"dur" => duration = value.parse().unwrap_or(0.0),
                        _ => {}
                    }
                }
                current = Some((start, duration));
                text.clear();
            }
            Ok(Event::Text(ref e)) if current.is_some() => {
                let raw = e
                    .unescape()
                    .map_err(|e| RecapError::Captions(format!("error parsing caption XML: {}", e)))?;
                text.push_str(&raw);
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => {
                if let Some((start, duration)) = current.take() {
                    let decoded = html_escape::decode_html_entities(&text);
                    let plain = MARKUP_REGEX.replace_all(&decoded, "");
                    let plain = plain.trim();
                    if !plain.is_empty() {
                        fragments.push(CaptionFragment::new(plain, start, duration));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RecapError::Captions(format!(
                    "error parsing caption XML: {}",
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(fragments)
}
