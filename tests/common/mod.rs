//! Shared fixtures for journeymap integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use journeymap::{Journey, NoteParser, ParseRequest};

/// A realistic A&R interview write-up touching most phases.
pub const INTERVIEW_NOTES: &str = "\
INTERVIEW NOTES - Nashville A&R

1. Demos come in by email from writers and publishers every day.
- Receive demo as an MP3 attachment, then upload it into Arrow manually.
- Pain: uploading one file at a time is slow and tedious.
TASK: Fill in metadata for each song (writers, splits, BPM, mood).
- Tagging is confusing because the genre tags are unclear.
- \"I never know which mood tag the label wants\" she said.
Search & Discovery
- Search the catalog in Arrow when an artist manager asks for songs.
- Filtering by demo status works well and feels quick.
- Quick pitch over text to the producer with a share link.
- Formal pitch goes out by email with tracking turned on.
- It would be nice to see when the artist actually listens.
- Track pitch status weekly in a spreadsheet.
";

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 14, 16, 0, 0).unwrap()
}

pub fn parse(notes: &str) -> Journey {
    NoteParser::new().parse_at(&ParseRequest::new(notes), fixed_time())
}

pub fn request(notes: &str) -> ParseRequest {
    ParseRequest::new(notes)
        .with_user_name("Morgan")
        .with_region("Nashville")
        .with_genre_focus("Country")
}
