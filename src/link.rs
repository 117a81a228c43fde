//! Outbound link construction.
//!
//! `format_messaging_link` builds the `wa.me` deep link used by the
//! WhatsApp contact action. It never fails: a malformed phone number just
//! yields a link with an odd (possibly empty) digit segment.

/// Host of the messaging service the deep link points at.
pub const MESSAGING_HOST: &str = "wa.me";

/// Keep only the ASCII digits of `phone`, dropping `+`, spaces, dashes and
/// any other formatting.
pub fn digits_of(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Build `https://wa.me/<digits>?text=<encoded message>`.
///
/// The message is percent-encoded as UTF-8, so spaces, `&`, `?` and
/// non-ASCII text survive the trip intact.
pub fn format_messaging_link(phone_e164: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        MESSAGING_HOST,
        digits_of(phone_e164),
        urlencoding::encode(message)
    )
}

/// Build a `mailto:` link, optionally with a pre-filled subject.
pub fn format_mailto_link(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) if !subject.is_empty() => {
            format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
        }
        _ => format!("mailto:{}", email),
    }
}
