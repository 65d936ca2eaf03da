//! Embedded sticker icons.
//!
//! Every icon is a 24x24 SVG so stickers share one nominal box; the sprite cache rasterizes them
//! at the pixel size a draw needs.

/// Symbolic keys of the built-in icon set, in picker order.
pub const STICKER_ICONS: [&str; 12] = [
    "heart",
    "star",
    "sparkles",
    "crown",
    "flower",
    "sun",
    "moon",
    "music",
    "fire",
    "smile",
    "lightning",
    "cat",
];

/// SVG source for an icon key, or `None` for unknown keys.
pub fn icon_svg(key: &str) -> Option<&'static str> {
    let src = match key {
        "heart" => HEART,
        "star" => STAR,
        "sparkles" => SPARKLES,
        "crown" => CROWN,
        "flower" => FLOWER,
        "sun" => SUN,
        "moon" => MOON,
        "music" => MUSIC,
        "fire" => FIRE,
        "smile" => SMILE,
        "lightning" => LIGHTNING,
        "cat" => CAT,
        _ => return None,
    };
    Some(src)
}

const HEART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z" fill="#ef4444"/></svg>"##;

const STAR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" fill="#facc15" stroke="#ca8a04" stroke-width="1" stroke-linejoin="round"/></svg>"##;

const SPARKLES: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M10 3l1.8 5.2L17 10l-5.2 1.8L10 17l-1.8-5.2L3 10l5.2-1.8z" fill="#fde047"/><path d="M18 13l.9 2.1L21 16l-2.1.9L18 19l-.9-2.1L15 16l2.1-.9z" fill="#fbbf24"/><path d="M18 2l.6 1.4L20 4l-1.4.6L18 6l-.6-1.4L16 4l1.4-.6z" fill="#fbbf24"/></svg>"##;

const CROWN: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M2 7l5 4 5-7 5 7 5-4-2 12H4z" fill="#eab308" stroke="#a16207" stroke-width="1" stroke-linejoin="round"/><rect x="4" y="19" width="16" height="2" fill="#a16207"/></svg>"##;

const FLOWER: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><g fill="#f472b6"><circle cx="12" cy="6" r="4"/><circle cx="18" cy="12" r="4"/><circle cx="12" cy="18" r="4"/><circle cx="6" cy="12" r="4"/></g><circle cx="12" cy="12" r="3" fill="#facc15"/></svg>"##;

const SUN: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><circle cx="12" cy="12" r="5" fill="#f59e0b"/><g stroke="#f59e0b" stroke-width="2" stroke-linecap="round"><path d="M12 1v3M12 20v3M1 12h3M20 12h3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1"/></g></svg>"##;

const MOON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z" fill="#c7d2fe" stroke="#6366f1" stroke-width="1"/></svg>"##;

const MUSIC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M9 18V5l12-2v13" fill="none" stroke="#8b5cf6" stroke-width="2" stroke-linejoin="round"/><circle cx="6" cy="18" r="3" fill="#8b5cf6"/><circle cx="18" cy="16" r="3" fill="#8b5cf6"/></svg>"##;

const FIRE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M12 2c1 4 6 6 6 12a6 6 0 0 1-12 0c0-3 1.5-5 3-6 0 2 1 3 2 3 0-4-1-6 1-9z" fill="#f97316"/><path d="M12 12c.5 2 3 3 3 5.5a3 3 0 0 1-6 0c0-1.5 1-2.5 1.5-3 .3 1 .8 1.5 1.5 1.5 0-2-.5-3 0-4z" fill="#fde047"/></svg>"##;

const SMILE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="#fde047" stroke="#ca8a04" stroke-width="1"/><circle cx="9" cy="10" r="1.5" fill="#422006"/><circle cx="15" cy="10" r="1.5" fill="#422006"/><path d="M7.5 14a5 5 0 0 0 9 0" fill="none" stroke="#422006" stroke-width="1.5" stroke-linecap="round"/></svg>"##;

const LIGHTNING: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z" fill="#facc15" stroke="#ca8a04" stroke-width="1" stroke-linejoin="round"/></svg>"##;

const CAT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M4 3l4 5h8l4-5v11a8 8 0 0 1-16 0z" fill="#fb923c"/><circle cx="9" cy="13" r="1.3" fill="#1f2937"/><circle cx="15" cy="13" r="1.3" fill="#1f2937"/><path d="M11 16h2l-1 1z" fill="#f472b6"/></svg>"##;

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
