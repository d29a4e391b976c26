use chrono::Weekday;
use std::env;

/// Target constants and category keywords for the derived metrics. Supplied
/// by the caller so the computation itself stays configuration-free.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub target_hours: f64,
    pub weekday_target: f64,
    pub weekend_target: f64,
    pub categories: Vec<Category>,
}

/// A named skill category with its matching keyword. Matching is a
/// case-insensitive substring test in both directions.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub keyword: String,
}

impl Category {
    fn new(id: &str, label: &str, keyword: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            keyword: keyword.to_string(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            target_hours: 500.0,
            weekday_target: 8.0,
            weekend_target: 4.0,
            categories: vec![
                Category::new("technical", "Technical Skills", "technical"),
                Category::new("soft", "Soft Skills", "soft"),
                Category::new("projects", "Projects", "projects"),
                Category::new("documents", "Documentation", "documents"),
            ],
        }
    }
}

impl MetricsConfig {
    /// Defaults overridable through `OJT_TARGET_HOURS`, `OJT_WEEKDAY_TARGET`
    /// and `OJT_WEEKEND_TARGET`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(hours) = env_f64("OJT_TARGET_HOURS") {
            config.target_hours = hours;
        }
        if let Some(hours) = env_f64("OJT_WEEKDAY_TARGET") {
            config.weekday_target = hours;
        }
        if let Some(hours) = env_f64("OJT_WEEKEND_TARGET") {
            config.weekend_target = hours;
        }
        config
    }

    pub fn daily_target(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Sat | Weekday::Sun => self.weekend_target,
            _ => self.weekday_target,
        }
    }
}

fn env_f64(name: &str) -> Option<f64> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
