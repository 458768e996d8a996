//! Speaking rate tiers and SSML payload construction.

/// Named speaking-rate tiers accepted by the `speed` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedTier {
    XxxSlow,
    XxSlow,
    XSlow,
    Slow,
    Medium,
    Fast,
    XFast,
    XxFast,
    XxxFast,
}

impl SpeedTier {
    pub const ALL: [SpeedTier; 9] = [
        Self::XxxSlow,
        Self::XxSlow,
        Self::XSlow,
        Self::Slow,
        Self::Medium,
        Self::Fast,
        Self::XFast,
        Self::XxFast,
        Self::XxxFast,
    ];

    /// Tier name as it appears in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XxxSlow => "xxx-slow",
            Self::XxSlow => "xx-slow",
            Self::XSlow => "x-slow",
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
            Self::XFast => "x-fast",
            Self::XxFast => "xx-fast",
            Self::XxxFast => "xxx-fast",
        }
    }

    /// Prosody rate sent to the provider.
    pub fn rate(&self) -> &'static str {
        match self {
            Self::XxxSlow => "10%",
            Self::XxSlow => "25%",
            Self::XSlow => "50%",
            Self::Slow => "75%",
            Self::Medium => "100%",
            Self::Fast => "125%",
            Self::XFast => "150%",
            Self::XxFast => "175%",
            Self::XxxFast => "200%",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == name)
    }
}

/// Rate used when the caller does not pass `speed`.
pub const DEFAULT_SPEED: &str = "100%";

/// Volume boost applied to every SSML payload.
pub const VOLUME_BOOST: &str = "+20dB";

/// Resolve a `speed` value to a prosody rate.
///
/// Unknown values are passed through untouched so literal percentages such as
/// `"60%"` work. Malformed literals are left for the provider to reject.
pub fn resolve_rate(speed: &str) -> &str {
    match SpeedTier::from_name(speed) {
        Some(tier) => tier.rate(),
        None => speed,
    }
}

/// Escape the five XML-reserved characters.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap `text` in a `<speak><prosody>` envelope with the given rate.
///
/// With `escape` off the text is embedded verbatim, so callers may pass their
/// own SSML tags but are also responsible for keeping the document valid.
/// `escape` applies to `text` only: `rate` is always inserted as given, so a
/// literal speed such as `60%` reaches the provider unchanged.
pub fn build_ssml(text: &str, rate: &str, escape: bool) -> String {
    let body = if escape {
        escape_markup(text)
    } else {
        text.to_string()
    };
    format!(r#"<speak><prosody rate="{rate}" volume="{VOLUME_BOOST}">{body}</prosody></speak>"#)
}
