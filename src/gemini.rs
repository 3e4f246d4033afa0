//! Generative-AI HTTP adapter for every provider trait.
//!
//! Talks to a Gemini-style `generateContent` endpoint, asks for JSON that
//! follows a response schema, and validates the reply before anything
//! reaches the core. Swapping this for a real routing engine only means
//! implementing the same traits elsewhere.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::GeminiConfig;
use crate::error::ProviderError;
use crate::places::{CulturalLandmark, Place};
use crate::polyline::{BoundingBox, Coordinate};
use crate::route::Route;
use crate::traits::{Geocoder, Language, LandmarkProvider, PlaceCatalog, RouteProvider, SuggestionProvider};

/// Providers are asked for at most this many alternatives.
pub const MAX_ROUTES: usize = 2;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Reuse an existing HTTP client, e.g. one shared with other services.
    pub fn with_http_client(config: GeminiConfig, client: reqwest::blocking::Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn generate(&self, prompt: &str, schema: Option<Value>) -> Result<String, ProviderError> {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });
        if let Some(schema) = schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        candidate_text(response.json::<GenerateResponse>()?)
    }

    fn generate_json<T: DeserializeOwned>(&self, prompt: &str, schema: Value) -> Result<T, ProviderError> {
        let text = self.generate(prompt, Some(schema))?;
        Ok(serde_json::from_str(text.trim())?)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn candidate_text(response: GenerateResponse) -> Result<String, ProviderError> {
    response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ProviderError::Empty)
}

/// Parse and check a route reply. Geometry problems are left to
/// [`crate::route::validate_candidates`]; this only enforces the shape.
pub fn parse_routes(text: &str) -> Result<Vec<Route>, ProviderError> {
    let mut routes: Vec<Route> = serde_json::from_str(text.trim())?;
    if routes.is_empty() {
        return Err(ProviderError::Empty);
    }
    if routes.len() > MAX_ROUTES {
        tracing::debug!(returned = routes.len(), "trimming surplus route alternatives");
        routes.truncate(MAX_ROUTES);
    }
    Ok(routes)
}

fn route_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Short label, e.g. 'Fastest Route'." },
                "summary": { "type": "STRING" },
                "distance": { "type": "STRING", "description": "Formatted distance, e.g. '12.3 km'." },
                "duration": { "type": "STRING", "description": "Formatted duration, e.g. '25 mins'." },
                "polyline": {
                    "type": "ARRAY",
                    "description": "Path geometry as [latitude, longitude] pairs.",
                    "items": { "type": "ARRAY", "items": { "type": "NUMBER" } }
                },
                "steps": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["name", "summary", "distance", "duration", "polyline", "steps"]
        }
    })
}

fn landmark_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "lat": { "type": "NUMBER" },
                "lon": { "type": "NUMBER" }
            },
            "required": ["name", "description", "lat", "lon"]
        }
    })
}

fn place_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "The name of the place." },
                "category": { "type": "STRING", "description": "A single category for the place." },
                "description": { "type": "STRING", "description": "A brief, one-sentence description." }
            },
            "required": ["name", "category", "description"]
        }
    })
}

#[derive(Debug, Deserialize)]
struct Suggestions {
    #[serde(default)]
    suggestions: Vec<String>,
}

fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } } },
        "required": ["suggestions"]
    })
}

#[derive(Debug, Deserialize)]
struct GeocodeReply {
    lat: f64,
    lon: f64,
}

fn geocode_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "lat": { "type": "NUMBER" }, "lon": { "type": "NUMBER" } },
        "required": ["lat", "lon"]
    })
}

impl RouteProvider for GeminiClient {
    fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        language: Language,
    ) -> Result<Vec<Route>, ProviderError> {
        let prompt = format!(
            "Suggest up to {MAX_ROUTES} driving routes in {} from latitude {}, longitude {} to latitude {}, longitude {}. \
             For each route give a name, a one-line summary, the distance, the duration, a polyline of at least 10 \
             [latitude, longitude] points following the roads, and turn-by-turn steps. Respond in {language}.",
            self.config.city, start.lat, start.lon, end.lat, end.lon
        );
        let text = self.generate(&prompt, Some(route_schema()))?;
        parse_routes(&text)
    }
}

impl LandmarkProvider for GeminiClient {
    fn cultural_landmarks(
        &self,
        bounds: &BoundingBox,
        language: Language,
    ) -> Result<Vec<CulturalLandmark>, ProviderError> {
        let prompt = format!(
            "List up to 10 culturally or historically significant landmarks in {} inside the area bounded by \
             north-east ({}, {}) and south-west ({}, {}). Give each a name, a one-sentence description and its \
             latitude and longitude. Respond in {language}.",
            self.config.city,
            bounds.north_east.lat,
            bounds.north_east.lon,
            bounds.south_west.lat,
            bounds.south_west.lon
        );
        let landmarks: Vec<CulturalLandmark> = self.generate_json(&prompt, landmark_schema())?;
        Ok(landmarks.into_iter().filter(|landmark| bounds.contains(landmark.position())).collect())
    }

    fn landmark_details(&self, name: &str, language: Language) -> Result<String, ProviderError> {
        let prompt = format!(
            "Tell a visitor about \"{name}\" in {}: its history, cultural significance and one practical tip. \
             Keep it to three short paragraphs. Respond in {language}.",
            self.config.city
        );
        Ok(self.generate(&prompt, None)?.trim().to_string())
    }
}

impl SuggestionProvider for GeminiClient {
    fn search_suggestions(&self, query: &str, language: Language) -> Result<Vec<String>, ProviderError> {
        let prompt = format!(
            "Provide up to 5 autocomplete suggestions for places, landmarks, or areas in {}, that start with or \
             are related to \"{query}\". Respond in {language}.",
            self.config.city
        );
        let reply: Suggestions = self.generate_json(&prompt, suggestion_schema())?;
        Ok(reply.suggestions)
    }
}

impl Geocoder for GeminiClient {
    fn geocode(&self, place: &str, _language: Language) -> Result<Coordinate, ProviderError> {
        let prompt = format!(
            "Provide the precise latitude and longitude for this location in {}: \"{place}\".",
            self.config.city
        );
        let reply: GeocodeReply = self.generate_json(&prompt, geocode_schema())?;
        if !(-90.0..=90.0).contains(&reply.lat) || !(-180.0..=180.0).contains(&reply.lon) {
            return Err(ProviderError::Schema(format!(
                "coordinates out of range: {}, {}",
                reply.lat, reply.lon
            )));
        }
        Ok(Coordinate::new(reply.lat, reply.lon))
    }
}

impl PlaceCatalog for GeminiClient {
    fn places_by_category(&self, category: &str, language: Language) -> Result<Vec<Place>, ProviderError> {
        let prompt = format!(
            "List 5 popular places in {} under the category \"{category}\". For each place, provide its name, a \
             single category, and a brief one-sentence description. Respond in {language}.",
            self.config.city
        );
        self.generate_json(&prompt, place_schema())
    }
}
