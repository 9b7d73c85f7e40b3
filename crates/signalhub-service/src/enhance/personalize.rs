//! Content personalization rules.

use signalhub_core::types::profile::{Tone, UserProfile};
use signalhub_core::types::role::UserRole;

/// Fallback when a profile has no usable first name.
const GENERIC_NAME: &str = "there";

/// Personalize notification content for a recipient.
///
/// Order matters for reproducibility: role template override, `{name}`
/// substitution, language translation, tone transform. Without a
/// profile the content is returned unchanged.
pub fn personalize(content: &str, event_type: &str, profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return content.to_string();
    };

    let mut out = match role_template(profile.role, event_type) {
        Some(template) => template.to_string(),
        None => content.to_string(),
    };

    let first_name = profile.first_name().unwrap_or(GENERIC_NAME);
    out = out.replace("{name}", first_name);

    if let Some(language) = &profile.preferences.language {
        out = translate(out, language);
    }

    apply_tone(out, profile.preferences.tone)
}

/// Role-specific wording for the common platform events.
fn role_template(role: UserRole, event_type: &str) -> Option<&'static str> {
    match (role, event_type) {
        (UserRole::Worker, "job") => Some("Hi {name}! A new job placement matches your profile."),
        (UserRole::Worker, "profile") => {
            Some("Hi {name}, your profile was viewed by a potential sponsor.")
        }
        (UserRole::Worker, "message") => Some("Hi {name}, you have a new message waiting."),
        (UserRole::Sponsor, "job") => {
            Some("Hi {name}! New candidates are available for your job posting.")
        }
        (UserRole::Sponsor, "profile") => {
            Some("Hi {name}, a worker you follow updated their profile.")
        }
        (UserRole::Sponsor, "message") => {
            Some("Hi {name}, you have a new message from a candidate.")
        }
        (UserRole::Agency, "job") => Some("Hi {name}, a placement request needs your review."),
        (UserRole::Agency, "profile") => {
            Some("Hi {name}, one of your workers updated their documents.")
        }
        (UserRole::Agency, "message") => Some("Hi {name}, you have a new inquiry."),
        _ => None,
    }
}

/// Translation pass-through. Real translation is a host concern; the
/// hook point is kept so the call order stays fixed.
fn translate(content: String, _language: &str) -> String {
    content
}

/// Tone transform: formal softens, casual does the inverse.
fn apply_tone(content: String, tone: Tone) -> String {
    match tone {
        Tone::Neutral => content,
        Tone::Formal => content.replace("Hi", "Dear").replace('!', "."),
        Tone::Casual => content.replace("Dear", "Hi").replace('.', "!"),
    }
}
