//! MCP tool parameter structs with schemars-derived JSON schemas.

use crate::parse::ParseRequest;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ParseNotesParams {
    #[schemars(description = "Raw interview notes, one observation per line works best")]
    pub notes: String,
    #[schemars(description = "Name of the interviewee")]
    pub user_name: Option<String>,
    #[schemars(description = "Region the interviewee works in")]
    pub region: Option<String>,
    #[schemars(description = "Genre focus of the interviewee")]
    pub genre_focus: Option<String>,
    #[schemars(description = "Include a parse summary and pass diagnostics (default false)")]
    pub summary: Option<bool>,
}

impl ParseNotesParams {
    pub fn to_request(&self) -> ParseRequest {
        ParseRequest {
            notes: self.notes.clone(),
            user_name: self.user_name.clone().unwrap_or_default(),
            region: self.region.clone().unwrap_or_default(),
            genre_focus: self.genre_focus.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct KeywordTablesParams {
    #[schemars(description = "Output format: 'yaml' (default) or 'json'")]
    pub format: Option<String>,
}
