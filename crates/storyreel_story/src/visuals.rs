//! Setting-to-visuals lookup used to anchor the video prompt.

/// Known settings and the props that make them recognisable.
/// Table order decides ties: the first key found in the setting wins.
const VISUAL_MAP: &[(&str, &str)] = &[
    (
        "gas station",
        "gas pumps, neon signs, convenience store, fluorescent lights, fuel dispensers",
    ),
    (
        "coffee shop",
        "espresso machine, wooden tables, warm lighting, coffee cups, barista counter",
    ),
    (
        "space station",
        "metallic corridors, view of stars through windows, control panels, zero gravity elements, futuristic tech",
    ),
    (
        "medieval castle",
        "stone walls, torches, throne room, medieval banners, suits of armor",
    ),
    (
        "hospital",
        "medical equipment, white walls, hospital beds, fluorescent lights, sanitized environment",
    ),
    (
        "school",
        "classroom desks, chalkboard, lockers, hallway, school supplies",
    ),
    (
        "library",
        "bookshelves, reading tables, dim warm lighting, old books, quiet atmosphere",
    ),
    (
        "bar",
        "bar counter, bottles on shelves, dim moody lighting, bar stools, neon beer signs",
    ),
    (
        "restaurant",
        "dining tables, kitchen visible, food service, ambient lighting, customers dining",
    ),
    (
        "office",
        "desk, computer monitors, cubicles, office supplies, professional environment",
    ),
];

/// Theme keywords and the atmosphere they add. A theme can match several.
const THEME_FRAGMENTS: &[(&[&str], &str)] = &[
    (&["horror"], ", dark shadows, ominous atmosphere, eerie lighting"),
    (
        &["christmas"],
        ", christmas decorations, snow visible, festive lights, holiday atmosphere",
    ),
    (
        &["mystery"],
        ", fog effects, mysterious lighting, noir cinematography",
    ),
    (&["comedy"], ", bright colorful lighting, cheerful atmosphere"),
    (
        &["sci-fi", "futuristic"],
        ", neon lights, holographic displays, advanced technology",
    ),
    (&["romantic"], ", soft warm lighting, intimate atmosphere"),
];

/// Build the visual base for a setting and its themes.
///
/// # Examples
///
/// ```
/// use storyreel_story::explicit_video_base;
///
/// let base = explicit_video_base("Gas station", &["Mystery".to_string()]);
/// assert!(base.starts_with("Gas station with gas pumps"));
/// assert!(base.ends_with("noir cinematography"));
///
/// assert_eq!(explicit_video_base("Lighthouse", &[]), "Lighthouse");
/// ```
pub fn explicit_video_base(setting: &str, themes: &[String]) -> String {
    let setting_lower = setting.to_lowercase();
    let mut base = VISUAL_MAP
        .iter()
        .find(|(key, _)| setting_lower.contains(key))
        .map(|(_, visuals)| format!("{} with {}", setting, visuals))
        .unwrap_or_else(|| setting.to_string());

    for theme in themes {
        let theme_lower = theme.to_lowercase();
        for (keywords, fragment) in THEME_FRAGMENTS {
            if keywords.iter().any(|keyword| theme_lower.contains(keyword)) {
                base.push_str(fragment);
            }
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_in_table_order_wins() {
        // "school" precedes "library" in the table
        let base = explicit_video_base("School library", &[]);
        assert!(base.starts_with("School library with classroom desks"));
    }

    #[test]
    fn test_substring_match() {
        // "bar" is found inside "Barn"
        let base = explicit_video_base("Old barn", &[]);
        assert!(base.contains("bar counter"));
    }

    #[test]
    fn test_theme_fragments_follow_theme_order() {
        let themes = vec!["Romantic comedy".to_string(), "Horror".to_string()];
        let base = explicit_video_base("Lighthouse", &themes);
        assert_eq!(
            base,
            "Lighthouse, bright colorful lighting, cheerful atmosphere, soft warm lighting, intimate atmosphere, dark shadows, ominous atmosphere, eerie lighting"
        );
    }

    #[test]
    fn test_futuristic_and_scifi_share_fragment() {
        let base = explicit_video_base("Moon base", &["Futuristic".to_string()]);
        assert!(base.contains("holographic displays"));
        let base = explicit_video_base("Moon base", &["SCI-FI".to_string()]);
        assert!(base.contains("holographic displays"));
    }
}
