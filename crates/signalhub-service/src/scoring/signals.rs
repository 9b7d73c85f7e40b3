//! The five scoring signals, each a pure function returning a value in
//! [0,1].

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use signalhub_core::types::profile::UserProfile;
use signalhub_entity::history::HistoryEntry;
use signalhub_entity::notification::request::NotificationRequest;
use signalhub_entity::notification::urgency::Urgency;

/// Hours of the day considered good delivery windows.
const PEAK_HOURS: [u32; 9] = [9, 10, 11, 14, 15, 16, 19, 20, 21];

/// Urgency signal: a table lookup on the declared urgency.
pub fn urgency_score(urgency: Urgency) -> f64 {
    urgency.base_score()
}

/// Relevance signal: base 0.5, boosted by interest, role, and location
/// matches, capped at 1.0. Without a profile the base applies.
pub fn relevance_score(request: &NotificationRequest, profile: Option<&UserProfile>) -> f64 {
    let Some(profile) = profile else {
        return 0.5;
    };

    let mut score: f64 = 0.5;

    if profile
        .interests
        .iter()
        .any(|interest| interest.eq_ignore_ascii_case(&request.category))
    {
        score += 0.3;
    }

    if request.target_role.is_some_and(|role| role == profile.role) {
        score += 0.2;
    }

    if let (Some(location), Some(user_location)) = (&request.location, &profile.location) {
        if location.eq_ignore_ascii_case(user_location) {
            score += 0.2;
        }
    }

    score.min(1.0)
}

/// Engagement signal: among prior deliveries sharing an event type or
/// category, the fraction the user interacted with. 0.5 when there is
/// no comparable history.
pub fn engagement_score(request: &NotificationRequest, history: &[HistoryEntry]) -> f64 {
    let similar: Vec<&HistoryEntry> = history
        .iter()
        .filter(|entry| entry.similar_to(&request.event_type, &request.category))
        .collect();

    if similar.is_empty() {
        return 0.5;
    }

    let engaged = similar.iter().filter(|entry| entry.engaged).count();
    engaged as f64 / similar.len() as f64
}

/// Timing signal: average of an hour score and a day score in the
/// recipient's local time.
pub fn timing_score(local_now: DateTime<FixedOffset>) -> f64 {
    let hour_score = if PEAK_HOURS.contains(&local_now.hour()) {
        1.0
    } else {
        0.3
    };

    let day_score = match local_now.weekday().number_from_monday() {
        1..=5 => 1.0,
        _ => 0.7,
    };

    (hour_score + day_score) / 2.0
}

/// Frequency signal: inverse penalty on the number of deliveries to
/// this user inside the trailing window.
pub fn frequency_score(recent_deliveries: usize) -> f64 {
    match recent_deliveries {
        n if n > 10 => 0.1,
        n if n > 5 => 0.5,
        n if n > 2 => 0.8,
        _ => 1.0,
    }
}
