//! Channel selection rules.

use std::collections::HashMap;

use signalhub_core::types::channel::Channel;
use signalhub_core::types::profile::ChannelPreferences;
use signalhub_entity::notification::urgency::Urgency;

/// Performance assumed for channels without a recorded score.
const NEUTRAL_PERFORMANCE: f64 = 0.5;
/// Maximum channels for a non-critical notification.
const MAX_CHANNELS: usize = 2;
/// Maximum channels for a critical notification.
const MAX_CHANNELS_CRITICAL: usize = 3;

/// Select and order the delivery channels for a notification.
///
/// Candidates start from the full channel set filtered by the
/// recipient's opt-ins; the urgency extremes replace the candidate set
/// outright. Candidates are then ranked by historical per-channel
/// performance and truncated. The result is never empty: a recipient
/// who opted out of everything still gets the in-app notification.
pub fn select_channels(
    urgency: Urgency,
    preferences: Option<&ChannelPreferences>,
    performance: &HashMap<Channel, f64>,
) -> Vec<Channel> {
    let default_prefs = ChannelPreferences::default();
    let prefs = preferences.unwrap_or(&default_prefs);

    let mut candidates: Vec<Channel> = match urgency {
        Urgency::Critical => vec![Channel::InApp, Channel::Push, Channel::Sms],
        Urgency::High => vec![Channel::InApp, Channel::Push],
        Urgency::Low => vec![Channel::InApp],
        Urgency::Medium | Urgency::Info => Channel::all()
            .into_iter()
            .filter(|channel| prefs.allows(*channel))
            .collect(),
    };

    let score = |channel: &Channel| {
        performance
            .get(channel)
            .copied()
            .unwrap_or(NEUTRAL_PERFORMANCE)
    };
    candidates.sort_by(|a, b| score(b).total_cmp(&score(a)));

    let cap = if urgency.is_critical() {
        MAX_CHANNELS_CRITICAL
    } else {
        MAX_CHANNELS
    };
    candidates.truncate(cap);

    if candidates.is_empty() {
        candidates.push(Channel::InApp);
    }
    candidates
}
