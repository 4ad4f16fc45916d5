use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type RatingsMap = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub date: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub average: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct DateForm {
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct TabForm {
    pub tab: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
}

impl RatingInput {
    pub fn as_raw(&self) -> String {
        match self {
            RatingInput::Number(value) => value.to_string(),
            RatingInput::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveRatingRequest {
    #[serde(default)]
    pub date: String,
    pub rating: RatingInput,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedRatingResponse {
    pub date: String,
    pub rating: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingsResponse {
    pub entries: Vec<RatingEntry>,
    pub summary: Summary,
}
