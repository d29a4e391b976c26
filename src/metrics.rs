use crate::config::MetricsConfig;
use crate::models::{CategoryBucket, DerivedMetrics, Entry, EntryStatus, WeeklyBucket};
use chrono::{Datelike, Duration, Local, NaiveDate};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn compute_metrics_now(entries: &[Entry], config: &MetricsConfig) -> DerivedMetrics {
    compute_metrics(entries, Local::now().date_naive(), config)
}

/// Recomputes every derived statistic from the full entry snapshot. Pure in
/// `entries`, `today` and `config`; never fails for sparse or malformed
/// records, which contribute defaults instead.
pub fn compute_metrics(
    entries: &[Entry],
    today: NaiveDate,
    config: &MetricsConfig,
) -> DerivedMetrics {
    let total_entries = entries.len();
    let completed_count = count_status(entries, EntryStatus::Completed);
    let in_progress_count = count_status(entries, EntryStatus::InProgress);
    let pending_count = total_entries - completed_count - in_progress_count;

    let total_hours: f64 = entries.iter().map(|entry| entry.hours).sum();

    let completion_rate = percent(completed_count, total_entries);
    let overall_progress_pct = progress_pct(total_hours, config.target_hours);

    let sorted_days = distinct_days_desc(entries);
    let streak_days = streak(&sorted_days);
    let last_active = sorted_days.first().map(NaiveDate::to_string);

    DerivedMetrics {
        total_entries,
        completed_count,
        in_progress_count,
        pending_count,
        total_hours,
        completion_rate,
        overall_progress_pct,
        target_hours: config.target_hours,
        streak_days,
        last_active,
        weekly_buckets: weekly_buckets(entries, today, config),
        category_buckets: category_buckets(entries, config),
    }
}

fn count_status(entries: &[Entry], status: EntryStatus) -> usize {
    entries.iter().filter(|entry| entry.status == status).count()
}

/// Integer percentage, rounded half away from zero. Zero when `total` is zero.
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u8
}

/// Hours progress against the target, clamped to `[0, 100]`. A degenerate
/// target (zero or negative) clamps instead of producing a non-finite value.
fn progress_pct(total_hours: f64, target_hours: f64) -> u8 {
    let ratio = if target_hours > 0.0 {
        total_hours / target_hours * 100.0
    } else if total_hours > 0.0 {
        100.0
    } else {
        0.0
    };
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Distinct parseable entry dates, most recent first.
fn distinct_days_desc(entries: &[Entry]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = entries.iter().filter_map(Entry::day).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

/// Walks backward from the most recent entry day, counting consecutive
/// calendar days; the first gap ends the streak. Duplicate same-day entries
/// are already collapsed by the caller.
fn streak(sorted_days: &[NaiveDate]) -> u32 {
    let Some(&most_recent) = sorted_days.first() else {
        return 0;
    };
    let mut streak = 1;
    let mut current = most_recent;
    for &day in &sorted_days[1..] {
        if current - day == Duration::days(1) {
            streak += 1;
            current = day;
        } else {
            break;
        }
    }
    streak
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Hours per day of the week containing `today`, Monday through Sunday.
fn weekly_buckets(entries: &[Entry], today: NaiveDate, config: &MetricsConfig) -> Vec<WeeklyBucket> {
    let start = week_start(today);
    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let mut hours = 0.0;
            let mut entry_count = 0;
            for entry in entries {
                if entry.day() == Some(date) {
                    hours += entry.hours;
                    entry_count += 1;
                }
            }
            WeeklyBucket {
                day: DAY_LABELS[offset as usize].to_string(),
                date: date.to_string(),
                hours,
                target: config.daily_target(date.weekday()),
                entry_count,
            }
        })
        .collect()
}

fn category_buckets(entries: &[Entry], config: &MetricsConfig) -> Vec<CategoryBucket> {
    config
        .categories
        .iter()
        .map(|category| {
            let keyword = category.keyword.to_lowercase();
            let matched: Vec<&Entry> = entries
                .iter()
                .filter(|entry| {
                    entry.skills.iter().any(|skill| {
                        let skill = skill.to_lowercase();
                        skill.contains(&keyword) || keyword.contains(&skill)
                    })
                })
                .collect();
            let completed = matched
                .iter()
                .filter(|entry| entry.status == EntryStatus::Completed)
                .count();
            CategoryBucket {
                id: category.id.clone(),
                label: category.label.clone(),
                matched: matched.len(),
                completed,
                completion_pct: percent(completed, matched.len()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Category;

    fn entry(id: &str, date: &str, status: EntryStatus, hours: f64) -> Entry {
        Entry {
            id: id.to_string(),
            title: format!("entry {id}"),
            description: String::new(),
            date: date.to_string(),
            status,
            hours,
            supervisor: None,
            skills: Vec::new(),
            image_url: None,
            owner_id: "u1".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_yields_zero_defaults() {
        let metrics = compute_metrics(&[], day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(metrics.total_entries, 0);
        assert_eq!(metrics.completion_rate, 0);
        assert_eq!(metrics.total_hours, 0.0);
        assert_eq!(metrics.overall_progress_pct, 0);
        assert_eq!(metrics.streak_days, 0);
        assert_eq!(metrics.last_active, None);
        assert_eq!(metrics.weekly_buckets.len(), 7);
        assert!(metrics.weekly_buckets.iter().all(|b| b.hours == 0.0));
    }

    #[test]
    fn status_counts_partition_total() {
        let entries = vec![
            entry("a", "2024-01-10", EntryStatus::Completed, 8.0),
            entry("b", "2024-01-11", EntryStatus::InProgress, 4.0),
            entry("c", "2024-01-12", EntryStatus::Pending, 2.0),
            entry("d", "2024-01-13", EntryStatus::Pending, 1.0),
        ];
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(
            metrics.completed_count + metrics.in_progress_count + metrics.pending_count,
            metrics.total_entries
        );
        assert_eq!(metrics.completed_count, 1);
        assert_eq!(metrics.completion_rate, 25);
        assert_eq!(metrics.total_hours, 15.0);
    }

    #[test]
    fn progress_pct_caps_at_one_hundred() {
        let entries = vec![entry("a", "2024-01-10", EntryStatus::Completed, 900.0)];
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(metrics.overall_progress_pct, 100);

        let degenerate = MetricsConfig {
            target_hours: 0.0,
            ..MetricsConfig::default()
        };
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &degenerate);
        assert_eq!(metrics.overall_progress_pct, 100);
        let metrics = compute_metrics(&[], day(2024, 1, 20), &degenerate);
        assert_eq!(metrics.overall_progress_pct, 0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let entries = vec![
            entry("a", "2024-01-10", EntryStatus::Completed, 8.0),
            entry("b", "2024-01-11", EntryStatus::Pending, 3.5),
        ];
        let config = MetricsConfig::default();
        let first = compute_metrics(&entries, day(2024, 1, 20), &config);
        let second = compute_metrics(&entries, day(2024, 1, 20), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn streak_breaks_on_first_gap_from_most_recent() {
        let entries = vec![
            entry("a", "2024-01-10", EntryStatus::Completed, 8.0),
            entry("b", "2024-01-11", EntryStatus::Completed, 8.0),
            entry("c", "2024-01-12", EntryStatus::Completed, 8.0),
            entry("d", "2024-01-20", EntryStatus::Completed, 8.0),
        ];
        // The 12-11-10 run does not connect across the 13..19 gap.
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(metrics.streak_days, 1);
    }

    #[test]
    fn streak_counts_consecutive_days_once_each() {
        let entries = vec![
            entry("a", "2024-01-18", EntryStatus::Completed, 8.0),
            entry("b", "2024-01-19", EntryStatus::Completed, 8.0),
            entry("c", "2024-01-19", EntryStatus::Pending, 2.0),
            entry("d", "2024-01-20", EntryStatus::Completed, 8.0),
        ];
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(metrics.streak_days, 3);
    }

    #[test]
    fn weekly_buckets_cover_monday_started_week() {
        // 2024-01-17 is a Wednesday; the containing week starts Mon Jan 15.
        let entries = vec![
            entry("a", "2024-01-15", EntryStatus::Completed, 8.0),
            entry("b", "2024-01-17", EntryStatus::Pending, 4.0),
            entry("c", "2024-01-17", EntryStatus::Pending, 2.0),
            entry("d", "2024-01-22", EntryStatus::Pending, 6.0),
        ];
        let metrics = compute_metrics(&entries, day(2024, 1, 17), &MetricsConfig::default());
        let buckets = &metrics.weekly_buckets;
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].day, "Mon");
        assert_eq!(buckets[0].date, "2024-01-15");
        assert_eq!(buckets[0].hours, 8.0);
        assert_eq!(buckets[2].hours, 6.0);
        assert_eq!(buckets[2].entry_count, 2);
        assert_eq!(buckets[5].target, 4.0);
        assert_eq!(buckets[6].date, "2024-01-21");
        // Jan 22 belongs to the next week.
        assert!(buckets.iter().map(|b| b.hours).sum::<f64>() == 14.0);
    }

    #[test]
    fn category_bucket_matches_keyword_both_directions() {
        let mut reactish = entry("a", "2024-01-10", EntryStatus::Completed, 8.0);
        reactish.skills = vec!["React.js".to_string()];
        let mut pending = entry("b", "2024-01-11", EntryStatus::Pending, 8.0);
        pending.skills = vec!["React.js".to_string()];
        let mut unrelated = entry("c", "2024-01-12", EntryStatus::Completed, 8.0);
        unrelated.skills = vec!["Cooking".to_string()];

        let config = MetricsConfig {
            categories: vec![Category {
                id: "react".to_string(),
                label: "React".to_string(),
                keyword: "react".to_string(),
            }],
            ..MetricsConfig::default()
        };
        let metrics = compute_metrics(
            &[reactish, pending, unrelated],
            day(2024, 1, 20),
            &config,
        );
        let bucket = &metrics.category_buckets[0];
        assert_eq!(bucket.matched, 2);
        assert_eq!(bucket.completed, 1);
        assert_eq!(bucket.completion_pct, 50);
    }

    #[test]
    fn malformed_dates_and_hours_do_not_poison_aggregates() {
        let mut broken = entry("a", "not-a-date", EntryStatus::Completed, 0.0);
        broken.hours = 0.0; // already coerced at the deserialization boundary
        let entries = vec![broken, entry("b", "2024-01-20", EntryStatus::Pending, 4.0)];
        let metrics = compute_metrics(&entries, day(2024, 1, 20), &MetricsConfig::default());
        assert_eq!(metrics.total_entries, 2);
        assert_eq!(metrics.total_hours, 4.0);
        assert_eq!(metrics.streak_days, 1);
        assert_eq!(metrics.last_active.as_deref(), Some("2024-01-20"));
        assert!(metrics.completion_rate <= 100);
    }
}
