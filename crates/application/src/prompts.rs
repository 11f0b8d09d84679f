//! Prompt templates for the wind oracle
//!
//! Three prompts drive a query: a web-grounded narrative, a strict JSON
//! extraction of that narrative, and an optional illustration.

use domain::{LocationQuery, WindExtraction};

/// Number of hourly forecast points requested from the oracle
pub const FORECAST_HOURS: usize = 6;

/// Prompt asking for a live wind report with web search enabled
#[must_use]
pub fn narrative_prompt(query: &LocationQuery) -> String {
    format!(
        "Find the current wind conditions for the location: {query}.\n\
         I need precise information:\n\
         1. Current wind speed in km/h.\n\
         2. Wind gusts in km/h.\n\
         3. Wind direction (e.g. Northwest or 315°).\n\
         4. Beaufort scale force (0-12).\n\
         5. A short description of the conditions.\n\
         6. A wind speed forecast for the next {FORECAST_HOURS} hours in hourly steps.\n\n\
         Important: format the answer as readable text I can show to a user, \
         and make sure every speed is given in km/h."
    )
}

/// Prompt asking the oracle to convert a narrative into the wind JSON shape
#[must_use]
pub fn extraction_prompt(query: &LocationQuery, narrative: &str) -> String {
    let location = serde_json::Value::String(query.to_string());
    format!(
        "Extract the data from the following weather text into JSON.\n\
         Text: \"{narrative}\"\n\n\
         Required JSON format:\n\
         {{\n  \
           \"location\": {location},\n  \
           \"speedKmh\": number,\n  \
           \"gustsKmh\": number,\n  \
           \"direction\": \"text\",\n  \
           \"directionDeg\": number (0-360),\n  \
           \"description\": \"short description\",\n  \
           \"beaufortScale\": number (0-12),\n  \
           \"forecast\": [{{\"time\": \"HH:00\", \"speed\": number}}, ...]\n\
         }}\n\
         Respond with JSON only."
    )
}

/// Prompt asking for a photorealistic picture of the conditions
#[must_use]
pub fn illustration_prompt(query: &LocationQuery, extraction: &WindExtraction) -> String {
    format!(
        "A high quality cinematic photograph of the landscape in {query} during a wind speed \
         of {speed} km/h. The visual should reflect a wind force of {beaufort} on the Beaufort \
         scale. Show moving trees, flying debris or calm air depending on the strength. \
         Photorealistic.",
        speed = extraction.speed_kmh,
        beaufort = extraction.beaufort_scale,
    )
}
