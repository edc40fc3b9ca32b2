//! Static style tables: every colour decision is a lookup, never logic.

use serde::{Deserialize, Serialize};

use crate::api::{ChangeType, Severity};

/// Semantic colour role, mapped to the front-end theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Info,
    Destructive,
    Muted,
}

pub const SEVERITY_TONES: [(Severity, Tone); 3] = [
    (Severity::Warning, Tone::Warning),
    (Severity::Info, Tone::Info),
    (Severity::Critical, Tone::Destructive),
];

pub const CHANGE_TONES: [(ChangeType, Tone); 3] = [
    (ChangeType::Positive, Tone::Success),
    (ChangeType::Negative, Tone::Destructive),
    (ChangeType::Neutral, Tone::Muted),
];

/// Plan slice colours, assigned in distribution order and cycled past the end.
pub const PLAN_PALETTE: [&str; 4] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444"];

pub const ONLINE_TONE: Tone = Tone::Success;
pub const OFFLINE_TONE: Tone = Tone::Destructive;

pub fn severity_tone(severity: Severity) -> Tone {
    SEVERITY_TONES
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, tone)| *tone)
        .unwrap_or(Tone::Muted)
}

pub fn change_tone(change: ChangeType) -> Tone {
    CHANGE_TONES
        .iter()
        .find(|(c, _)| *c == change)
        .map(|(_, tone)| *tone)
        .unwrap_or(Tone::Muted)
}

pub fn plan_color(index: usize) -> &'static str {
    PLAN_PALETTE[index % PLAN_PALETTE.len()]
}
