use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry status. External data may carry arbitrary strings; anything
/// unrecognized is normalized to `Pending` when it enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EntryStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl EntryStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "completed" => Self::Completed,
            "in-progress" => Self::InProgress,
            _ => Self::Pending,
        }
    }
}

impl<'de> Deserialize<'de> for EntryStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Accepts a number, a numeric string, or nothing at all; anything that does
/// not parse contributes 0 hours instead of failing the whole record.
fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// One logged OJT activity. `date` stays a plain `YYYY-MM-DD` string: it is a
/// local calendar date, never an instant, and a malformed value must degrade
/// gracefully rather than reject the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub owner_id: String,
}

impl Entry {
    /// The calendar day this entry falls on, or `None` when the stored date
    /// does not parse. Callers skip such entries in date-keyed buckets.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Payload for create and update. `id` and `owner_id` are immutable after
/// creation; updates replace every other field.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub hours: f64,
    #[serde(default)]
    pub supervisor: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub owner_id: String,
}

impl EntryDraft {
    pub fn into_entry(self, id: String) -> Entry {
        Entry {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            date: self.date,
            status: self.status,
            hours: self.hours,
            supervisor: self.supervisor.filter(|s| !s.trim().is_empty()),
            skills: normalize_skills(self.skills),
            image_url: self.image_url.filter(|u| !u.trim().is_empty()),
            owner_id: self.owner_id,
        }
    }
}

/// Trims labels, drops empties, suppresses duplicates, keeps first-seen order.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let trimmed = skill.trim();
        if trimmed.is_empty() || kept.iter().any(|s| s == trimmed) {
            continue;
        }
        kept.push(trimmed.to_string());
    }
    kept
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub entries: Vec<Entry>,
}

/// Aggregate statistics recomputed from scratch on every request. A pure
/// function of the entry list, the reference day, and the configured targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub total_entries: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub pending_count: usize,
    pub total_hours: f64,
    pub completion_rate: u8,
    pub overall_progress_pct: u8,
    pub target_hours: f64,
    pub streak_days: u32,
    pub last_active: Option<String>,
    pub weekly_buckets: Vec<WeeklyBucket>,
    pub category_buckets: Vec<CategoryBucket>,
}

/// Hours logged on one day of the current Monday-started week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyBucket {
    pub day: String,
    pub date: String,
    pub hours: f64,
    pub target: f64,
    pub entry_count: usize,
}

/// Completion percentage for entries whose skills match a category keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub id: String,
    pub label: String,
    pub matched: usize,
    pub completed: usize,
    pub completion_pct: u8,
}

/// One cell of a calendar grid. Filler cells from adjacent months carry real
/// day numbers for display continuity but never any entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_normalizes_to_pending() {
        assert_eq!(EntryStatus::from_label("completed"), EntryStatus::Completed);
        assert_eq!(EntryStatus::from_label("in-progress"), EntryStatus::InProgress);
        assert_eq!(EntryStatus::from_label("pending"), EntryStatus::Pending);
        assert_eq!(EntryStatus::from_label("archived"), EntryStatus::Pending);
        assert_eq!(EntryStatus::from_label(""), EntryStatus::Pending);
    }

    #[test]
    fn entry_tolerates_malformed_hours() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "Orientation",
            "date": "2024-01-10",
            "status": "completed",
            "hours": "abc",
            "owner_id": "u1"
        }))
        .unwrap();
        assert_eq!(entry.hours, 0.0);
        assert_eq!(entry.status, EntryStatus::Completed);

        let entry: Entry = serde_json::from_value(serde_json::json!({
            "id": "e2",
            "title": "Orientation",
            "date": "2024-01-10",
            "owner_id": "u1"
        }))
        .unwrap();
        assert_eq!(entry.hours, 0.0);
        assert_eq!(entry.status, EntryStatus::Pending);

        let entry: Entry = serde_json::from_value(serde_json::json!({
            "id": "e3",
            "title": "Orientation",
            "date": "2024-01-10",
            "hours": "6.5",
            "owner_id": "u1"
        }))
        .unwrap();
        assert_eq!(entry.hours, 6.5);
    }

    #[test]
    fn malformed_date_yields_no_day() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "Orientation",
            "date": "not-a-date",
            "owner_id": "u1"
        }))
        .unwrap();
        assert!(entry.day().is_none());
    }

    #[test]
    fn skills_deduplicate_preserving_order() {
        let skills = vec![
            "React.js".to_string(),
            "  SQL ".to_string(),
            "React.js".to_string(),
            "".to_string(),
            "Git".to_string(),
        ];
        assert_eq!(normalize_skills(skills), vec!["React.js", "SQL", "Git"]);
    }
}
