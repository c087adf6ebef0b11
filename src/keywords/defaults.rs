//! Built-in keyword tables
//!
//! Declaration order is match order. Several phases share keywords
//! ("pitch" is in both "Demo Pitching" and "Pitching"), so reordering
//! entries changes output.

use super::{EmotionKeywords, FrequencyKeywords, Keyword, PhaseKeywords};
use crate::journey::{Emotion, Frequency, Phase};

fn words(list: &[&str]) -> Vec<Keyword> {
    list.iter().map(|w| Keyword::from(*w)).collect()
}

fn phase(name: &str, keywords: &[&str]) -> PhaseKeywords {
    PhaseKeywords {
        phase: Phase::from(name),
        keywords: words(keywords),
    }
}

pub(super) fn phases() -> Vec<PhaseKeywords> {
    vec![
        phase(
            "Song Intake",
            &[
                "receive", "intake", "submit", "upload", "ingest", "incoming", "get song",
                "artist sends", "demo comes in", "song submission", "file intake",
                "receive demo", "accept song", "song arrives",
            ],
        ),
        phase(
            "Metadata Entry",
            &[
                "metadata", "meta data", "tag", "categorize", "label data", "enter details",
                "fill in", "data entry", "song information", "track info", "song details",
                "credits", "add information", "input data",
            ],
        ),
        phase(
            "Search & Discovery",
            &[
                "search", "discover", "find", "browse", "look for", "explore catalog",
                "library search", "database search", "catalog browse", "find songs",
                "discovery", "exploration", "looking through",
            ],
        ),
        phase(
            "Demo Pitching",
            &[
                "demo pitch", "informal pitch", "quick pitch", "text pitch", "casual pitch",
                "preliminary pitch", "initial pitch", "early pitch",
            ],
        ),
        phase(
            "Pitching",
            &[
                "pitch", "send to", "recommend", "present", "share with", "propose song",
                "formal pitch", "email pitch", "pitch meeting", "song recommendation",
                "submit to artist", "artist pitch",
            ],
        ),
        phase(
            "Tracking & Other",
            &[
                "track", "follow up", "status", "monitor", "update status", "check status",
                "tracking", "follow-up", "status update", "progress tracking",
            ],
        ),
        phase(
            "Playlist Creation",
            &[
                "playlist", "create playlist", "build playlist", "curate playlist",
                "playlist creation", "make playlist", "playlist building",
            ],
        ),
        phase(
            "Pitch Tracking",
            &[
                "pitch tracking", "track pitches", "pitch status", "pitch follow-up",
                "pitch management", "tracking pitches", "pitch history",
            ],
        ),
        phase(
            "Contact Management",
            &[
                "contact", "contact management", "manage contacts", "artist contact",
                "relationship management", "contact info", "artist info", "contact database",
            ],
        ),
        phase(
            "Team Functionality",
            &[
                "team", "collaborate", "team features", "team functionality", "team tools",
                "collaboration", "team members", "team workflow", "shared access",
            ],
        ),
        phase(
            "Label User Journey",
            &[
                "label user", "label journey", "label workflow", "label perspective",
                "label experience", "label side", "from label perspective",
            ],
        ),
        phase(
            "Global Adoption Challenges",
            &[
                "global", "international", "adoption", "challenges", "global adoption",
                "worldwide", "different regions", "global rollout", "international challenges",
            ],
        ),
        phase(
            "Manual Upload Process",
            &[
                "manual upload", "upload process", "upload workflow", "uploading manually",
                "manual process", "upload steps", "file upload",
            ],
        ),
        phase(
            "Proposed Solutions",
            &[
                "solution", "proposed", "recommendation", "suggestion", "improvement",
                "propose", "could improve", "would help", "feature request", "enhancement",
            ],
        ),
    ]
}

/// Canonical workflow used when no phase keyword occurs in the notes
pub(super) fn default_phases() -> Vec<Phase> {
    [
        "Song Intake",
        "Metadata Entry",
        "Search & Discovery",
        "Pitching",
        "Tracking & Other",
    ]
    .into_iter()
    .map(Phase::from)
    .collect()
}

pub(super) fn tools() -> Vec<Keyword> {
    words(&[
        "Arrow", "WCM", "Tango", "email", "e-mail", "text message", "text",
        "Google Drive", "Dropbox", "Spotify", "Excel", "spreadsheet", "Google Sheets",
        "Slack", "Teams", "Microsoft Teams", "phone", "call", "manual", "manually",
        "paper", "notebook", "SMS", "WhatsApp", "iMessage", "Outlook", "Gmail",
        "CRM", "database", "system", "platform", "tool", "software", "app", "application",
    ])
}

pub(super) fn emotions() -> Vec<EmotionKeywords> {
    let entry = |emotion, list: &[&str]| EmotionKeywords {
        emotion,
        keywords: words(list),
    };
    vec![
        entry(
            Emotion::Frustrated,
            &[
                "frustrat", "annoying", "annoyed", "irritat", "upset", "anger", "bothered",
                "dissatisfied", "unhappy",
            ],
        ),
        entry(
            Emotion::Anxious,
            &[
                "anxious", "worried", "stress", "nervous", "uncertain", "confus", "overwhelm",
                "concern", "uneasy",
            ],
        ),
        entry(
            Emotion::Confident,
            &[
                "confident", "sure", "certain", "easy", "smooth", "straightforward",
                "comfortable", "assured", "clear",
            ],
        ),
        entry(
            Emotion::Satisfied,
            &[
                "satisfied", "happy", "pleased", "good", "works well", "great", "excellent",
                "love", "enjoy",
            ],
        ),
        entry(
            Emotion::Efficient,
            &[
                "efficient", "quick", "fast", "streamlined", "productive", "effective", "rapid",
                "speedy", "optimized",
            ],
        ),
    ]
}

pub(super) fn pain_points() -> Vec<Keyword> {
    words(&[
        "issue", "problem", "difficult", "hard", "challenge", "struggle", "pain",
        "lack", "missing", "can't", "cannot", "unable", "doesn't work", "broken",
        "confusing", "confused", "unclear", "hidden", "buried", "complicated",
        "time consuming", "time-consuming", "slow", "manual", "tedious", "repetitive",
        "frustrat", "annoying", "detrimental", "heavy lift", "constraint", "limitation",
        "inefficient", "cumbersome", "clunky", "awkward", "error", "mistake", "fail",
    ])
}

pub(super) fn opportunities() -> Vec<Keyword> {
    words(&[
        "helpful", "useful", "solution", "improve", "better", "enhancement",
        "feature", "could", "should", "would be nice", "wish", "need", "want",
        "opportunity", "suggestion", "idea", "integration", "automate", "automation",
        "proposed", "recommendation", "streamline", "optimize", "simplify", "easier",
    ])
}

pub(super) fn frequencies() -> Vec<FrequencyKeywords> {
    let entry = |frequency, list: &[&str]| FrequencyKeywords {
        frequency,
        keywords: words(list),
    };
    vec![
        entry(
            Frequency::Daily,
            &["daily", "every day", "each day", "day to day", "per day"],
        ),
        entry(
            Frequency::Weekly,
            &["weekly", "every week", "each week", "per week"],
        ),
        entry(
            Frequency::Monthly,
            &["monthly", "every month", "each month", "per month"],
        ),
        entry(
            Frequency::PerPitch,
            &["per pitch", "each pitch", "every pitch", "per song", "each song"],
        ),
        entry(
            Frequency::Occasional,
            &["occasional", "sometimes", "rarely", "once in a while", "infrequent"],
        ),
    ]
}

pub(super) fn collaborators() -> Vec<Keyword> {
    words(&[
        "artist", "manager", "producer", "label", "executive", "team", "colleague",
        "engineer", "writer", "songwriter", "assistant", "coordinator", "director",
        "A&R", "marketing", "promotion", "legal", "business affairs",
    ])
}
