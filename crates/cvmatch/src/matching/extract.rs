//! Per-dimension field extraction.
//!
//! Every function returns an `Option`: `None` means "this dimension has
//! no usable representation on at least one side", which the scorer turns
//! into its absent-field policy. Absence is a value here, never an error.

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{CandidateRecord, ExperienceEntry, JobRecord};
use crate::text::{lower_dedup, normspace};

/// Experience clamp: damps data errors (overlapping entries, typo'd dates).
pub const MAX_EXPERIENCE_YEARS: f64 = 40.0;

/// Minimum CV-location length for the substring heuristic, so short
/// tokens like "LA" cannot match inside unrelated words.
pub const MIN_LOCATION_CHARS: usize = 3;

/// Both titles, whitespace-normalized. `None` if either side is empty.
pub fn title_pair(cv: &CandidateRecord, jd: &JobRecord) -> Option<(String, String)> {
    let cv_title = normspace(&cv.basics.current_title);
    let jd_title = normspace(&jd.basics.title);
    if cv_title.is_empty() || jd_title.is_empty() {
        return None;
    }
    Some((cv_title, jd_title))
}

/// Both skill lists, lowercase-deduped. `None` if either side is empty.
pub fn skills_pair(cv: &CandidateRecord, jd: &JobRecord) -> Option<(Vec<String>, Vec<String>)> {
    nonempty_pair(lower_dedup(&cv.skills), lower_dedup(&jd.skills))
}

/// Both certification lists, lowercase-deduped. `None` if either side is empty.
pub fn certifications_pair(
    cv: &CandidateRecord,
    jd: &JobRecord,
) -> Option<(Vec<String>, Vec<String>)> {
    nonempty_pair(
        lower_dedup(&cv.certifications),
        lower_dedup(&jd.required_certifications),
    )
}

fn nonempty_pair(a: Vec<String>, b: Vec<String>) -> Option<(Vec<String>, Vec<String>)> {
    if a.is_empty() || b.is_empty() {
        None
    } else {
        Some((a, b))
    }
}

/// Total CV experience in years, clamped to `[0, MAX_EXPERIENCE_YEARS]`.
///
/// Prefers the parser's `duration_months`; otherwise derives the span in
/// calendar months from `start_date` to `end_date` (or today for current
/// positions). Entries without a start date contribute zero.
pub fn cv_experience_years(cv: &CandidateRecord) -> f64 {
    let today = Utc::now().date_naive();
    let total_months: i64 = cv
        .experience
        .iter()
        .map(|entry| entry_months(entry, today))
        .sum();
    (total_months as f64 / 12.0).clamp(0.0, MAX_EXPERIENCE_YEARS)
}

fn entry_months(entry: &ExperienceEntry, today: NaiveDate) -> i64 {
    if let Some(dm) = entry.duration_months {
        return i64::from(dm);
    }
    let Some(start) = entry.start_date else {
        return 0;
    };
    let end = entry.end_date.unwrap_or(today);
    let months = i64::from(end.year() - start.year()) * 12
        + i64::from(end.month() as i32 - start.month() as i32);
    months.max(0)
}

/// Lowercased CV location needle for the substring heuristic. `None` if
/// empty or shorter than [`MIN_LOCATION_CHARS`].
pub fn location_needle(cv: &CandidateRecord) -> Option<String> {
    let loc = normspace(&cv.basics.location).to_lowercase();
    if loc.chars().count() < MIN_LOCATION_CHARS {
        return None;
    }
    Some(loc)
}

/// Lowercased JD raw text haystack. `None` if empty.
pub fn jd_haystack(jd: &JobRecord) -> Option<String> {
    let text = normspace(&jd.raw_text).to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateBasics, JobBasics};

    fn cv_with_experience(entries: Vec<ExperienceEntry>) -> CandidateRecord {
        CandidateRecord {
            experience: entries,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_pair_absent_when_cv_title_blank() {
        let cv = CandidateRecord {
            basics: CandidateBasics {
                current_title: "   ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let jd = JobRecord {
            basics: JobBasics {
                title: "Engineer".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(title_pair(&cv, &jd).is_none());
    }

    #[test]
    fn test_skills_pair_absent_when_jd_empty() {
        let cv = CandidateRecord {
            skills: vec!["rust".to_string()],
            ..Default::default()
        };
        let jd = JobRecord::default();
        assert!(skills_pair(&cv, &jd).is_none());
    }

    #[test]
    fn test_experience_prefers_duration_months() {
        let cv = cv_with_experience(vec![ExperienceEntry {
            duration_months: Some(36),
            // Dates that would disagree with the pre-computed duration.
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 7, 1),
            ..Default::default()
        }]);
        assert!((cv_experience_years(&cv) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_falls_back_to_dates() {
        let cv = cv_with_experience(vec![ExperienceEntry {
            start_date: NaiveDate::from_ymd_opt(2018, 1, 15),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 10),
            ..Default::default()
        }]);
        // 24 calendar months.
        assert!((cv_experience_years(&cv) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_entry_without_start_contributes_zero() {
        let cv = cv_with_experience(vec![
            ExperienceEntry {
                end_date: NaiveDate::from_ymd_opt(2020, 1, 1),
                ..Default::default()
            },
            ExperienceEntry {
                duration_months: Some(12),
                ..Default::default()
            },
        ]);
        assert!((cv_experience_years(&cv) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_open_ended_entry_counts_up_to_today() {
        let cv = cv_with_experience(vec![ExperienceEntry {
            start_date: NaiveDate::from_ymd_opt(2015, 1, 1),
            ..Default::default()
        }]);
        assert!(cv_experience_years(&cv) >= 10.0);
    }

    #[test]
    fn test_experience_clamped_at_40_years() {
        let cv = cv_with_experience(vec![ExperienceEntry {
            duration_months: Some(1200),
            ..Default::default()
        }]);
        assert_eq!(cv_experience_years(&cv), MAX_EXPERIENCE_YEARS);
    }

    #[test]
    fn test_negative_span_contributes_zero() {
        let cv = cv_with_experience(vec![ExperienceEntry {
            start_date: NaiveDate::from_ymd_opt(2022, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2021, 6, 1),
            ..Default::default()
        }]);
        assert_eq!(cv_experience_years(&cv), 0.0);
    }

    #[test]
    fn test_location_needle_length_floor() {
        let mut cv = CandidateRecord::default();
        cv.basics.location = "NY".to_string();
        assert!(location_needle(&cv).is_none());
        cv.basics.location = " Paris ".to_string();
        assert_eq!(location_needle(&cv).as_deref(), Some("paris"));
    }

    #[test]
    fn test_jd_haystack_lowercases() {
        let jd = JobRecord {
            raw_text: "Office  located in Paris,\nFrance".to_string(),
            ..Default::default()
        };
        assert_eq!(
            jd_haystack(&jd).as_deref(),
            Some("office located in paris, france")
        );
    }
}
