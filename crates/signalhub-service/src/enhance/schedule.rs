//! Delivery time computation.

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

use signalhub_core::config::scoring::ScoringConfig;
use signalhub_core::types::profile::ActivityPattern;
use signalhub_entity::notification::urgency::Urgency;

/// Compute the earliest delivery instant for a notification.
///
/// Critical or explicitly immediate notifications deliver now. Anything
/// else is deferred to the next occurrence of the recipient's first
/// peak hour in their local time, capped at `max_defer_hours` from now.
pub fn optimal_delivery_time(
    urgency: Urgency,
    immediate: bool,
    now: DateTime<Utc>,
    offset: FixedOffset,
    pattern: Option<&ActivityPattern>,
    config: &ScoringConfig,
) -> DateTime<Utc> {
    if urgency.is_critical() || immediate {
        return now;
    }

    let peak_hour = pattern
        .and_then(|p| p.peak_hours.first().copied())
        .unwrap_or(config.default_peak_hour)
        .min(23);

    let local_now = now.with_timezone(&offset);
    let at_peak = local_now
        .with_hour(peak_hour)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0));

    let target_local = match at_peak {
        Some(t) if t > local_now => t,
        Some(t) => t + Duration::days(1),
        None => local_now,
    };

    let cap = now + Duration::hours(config.max_defer_hours);
    target_local.with_timezone(&Utc).clamp(now, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn pattern(peak: u32) -> ActivityPattern {
        ActivityPattern {
            peak_hours: vec![peak],
            active_days: vec![1, 2, 3, 4, 5],
            avg_session_minutes: 20,
        }
    }

    #[test]
    fn test_critical_delivers_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 3, 0, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Critical,
            false,
            now,
            utc_offset(),
            Some(&pattern(18)),
            &ScoringConfig::default(),
        );
        assert_eq!(at, now);
    }

    #[test]
    fn test_immediate_flag_overrides_schedule() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 3, 0, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Low,
            true,
            now,
            utc_offset(),
            Some(&pattern(18)),
            &ScoringConfig::default(),
        );
        assert_eq!(at, now);
    }

    #[test]
    fn test_defers_to_peak_hour_today() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Medium,
            false,
            now,
            utc_offset(),
            Some(&pattern(18)),
            &ScoringConfig::default(),
        );
        assert_eq!(at, Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap());
    }

    #[test]
    fn test_past_peak_hour_rolls_to_tomorrow_capped() {
        // 19:30 with a 10:00 peak hour: next occurrence is 10:00 tomorrow.
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 19, 30, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Medium,
            false,
            now,
            utc_offset(),
            Some(&pattern(10)),
            &ScoringConfig::default(),
        );
        assert_eq!(at, Utc.with_ymd_and_hms(2025, 6, 3, 10, 0, 0).unwrap());
        assert!(at <= now + Duration::hours(24));
    }

    #[test]
    fn test_timezone_offset_applies() {
        // 06:00 UTC is 10:00 at +04:00; peak hour 18 local is 14:00 UTC.
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 6, 0, 0).unwrap();
        let offset = FixedOffset::east_opt(4 * 3600).unwrap();
        let at = optimal_delivery_time(
            Urgency::Medium,
            false,
            now,
            offset,
            Some(&pattern(18)),
            &ScoringConfig::default(),
        );
        assert_eq!(at, Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_pattern_uses_default_peak_hour() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Medium,
            false,
            now,
            utc_offset(),
            None,
            &ScoringConfig::default(),
        );
        // Default peak hour is 10.
        assert_eq!(at, Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_never_before_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        let at = optimal_delivery_time(
            Urgency::Medium,
            false,
            now,
            utc_offset(),
            Some(&pattern(8)),
            &ScoringConfig::default(),
        );
        assert!(at >= now);
    }
}
