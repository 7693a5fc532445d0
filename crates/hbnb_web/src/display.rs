//! Pure formatting helpers for listing and review data.
//!
//! Everything here is plain string/slice manipulation so the rendering
//! fallbacks and the filter predicate can be tested without a browser.

use hbnb_api::response as res;

pub const MISSING_TITLE: &str = "Unnamed place";
pub const MISSING_DESCRIPTION: &str = "No description.";
pub const MISSING_HOST: &str = "Host";
pub const MISSING_AUTHOR: &str = "Anonymous";

const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";

/// Listing title with its fallback.
pub fn title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => MISSING_TITLE,
    }
}

/// Nightly price line; a missing price renders as 0.
pub fn price(price: Option<f64>) -> String {
    format!("${} / night", price.unwrap_or(0.0))
}

/// Host display name from the optional nested owner.
pub fn host(owner: Option<&res::PlaceUser>) -> String {
    let name = owner
        .map(|o| format!("{} {}", o.first_name.trim(), o.last_name.trim()))
        .unwrap_or_default();
    let name = name.trim();
    if name.is_empty() {
        MISSING_HOST.to_string()
    } else {
        name.to_string()
    }
}

/// Review author display name.
pub fn author(user: Option<&res::PlaceUser>) -> String {
    match user {
        Some(user) => {
            let name = host(Some(user));
            if name == MISSING_HOST {
                MISSING_AUTHOR.to_string()
            } else {
                name
            }
        }
        None => MISSING_AUTHOR.to_string(),
    }
}

/// Five-glyph star row for a rating, clamped to the 0..=5 domain.
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!(
        "{}{}",
        STAR_FILLED.repeat(filled),
        STAR_EMPTY.repeat(5 - filled)
    )
}

/// Amenity names with blank entries filtered out.
pub fn amenity_names(amenities: &[res::Amenity]) -> Vec<&str> {
    amenities
        .iter()
        .map(|a| a.name.trim())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether a card with this nightly price is visible under the filter.
pub fn passes_filter(price: f64, max_price: Option<f64>) -> bool {
    max_price.map_or(true, |max| price <= max)
}

/// The review list endpoint is not listing-scoped, so reviews are narrowed
/// down to the current listing here.
pub fn reviews_for_place(reviews: Vec<res::Review>, place_id: &str) -> Vec<res::Review> {
    reviews
        .into_iter()
        .filter(|r| r.place_id == place_id)
        .collect()
}

/// Neutralizes a string for insertion as markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escaped markup for free text, preserving line breaks.
pub fn markup(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

/// Markup for a listing description with its fallback.
pub fn description_markup(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.trim().is_empty() => markup(d),
        _ => MISSING_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn title_substitutes_fallback() {
        assert_eq!(title(Some("Loft")), "Loft");
        assert_eq!(title(None), "Unnamed place");
        assert_eq!(title(Some("")), "Unnamed place");
        assert_eq!(title(Some("   ")), "Unnamed place");
    }

    #[test]
    fn price_substitutes_zero() {
        assert_eq!(price(Some(80.0)), "$80 / night");
        assert_eq!(price(Some(79.5)), "$79.5 / night");
        assert_eq!(price(None), "$0 / night");
    }

    #[test]
    fn host_falls_back_without_owner() {
        assert_eq!(host(None), "Host");
        let blank = res::PlaceUser::default();
        assert_eq!(host(Some(&blank)), "Host");
        let owner = res::PlaceUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(host(Some(&owner)), "Ada Lovelace");
    }

    #[test]
    fn author_falls_back_to_anonymous() {
        assert_eq!(author(None), "Anonymous");
        let user = res::PlaceUser {
            first_name: "Bob".to_string(),
            ..Default::default()
        };
        assert_eq!(author(Some(&user)), "Bob");
    }

    #[test]
    fn stars_total_five_glyphs() {
        for rating in 0..=5 {
            let stars = stars(rating);
            assert_eq!(stars.chars().count(), 5);
            assert_eq!(stars.chars().filter(|&c| c == '★').count() as i32, rating);
        }
        assert_eq!(stars(3), "★★★☆☆");
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(stars(-3), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn blank_amenities_are_filtered() {
        let amenities = vec![
            res::Amenity {
                name: "WiFi".to_string(),
                ..Default::default()
            },
            res::Amenity::default(),
            res::Amenity {
                name: "  ".to_string(),
                ..Default::default()
            },
            res::Amenity {
                name: "Kitchen".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(amenity_names(&amenities), &["WiFi", "Kitchen"]);
    }

    #[test]
    fn no_threshold_shows_everything() {
        assert!(passes_filter(0.0, None));
        assert!(passes_filter(10_000.0, None));
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(passes_filter(80.0, Some(100.0)));
        assert!(passes_filter(100.0, Some(100.0)));
        assert!(!passes_filter(100.01, Some(100.0)));
    }

    #[test]
    fn reviews_are_narrowed_to_the_listing() {
        let reviews = vec![
            res::Review {
                id: "r1".to_string(),
                place_id: "p1".to_string(),
                ..Default::default()
            },
            res::Review {
                id: "r2".to_string(),
                place_id: "p2".to_string(),
                ..Default::default()
            },
            res::Review {
                id: "r3".to_string(),
                place_id: "p1".to_string(),
                ..Default::default()
            },
        ];
        let filtered = reviews_for_place(reviews, "p1");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.place_id == "p1"));
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
        let escaped = escape("<script>alert(\"hi\")</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn markup_preserves_line_breaks() {
        assert_eq!(markup("a\nb"), "a<br>b");
        assert_eq!(markup("<i>\n</i>"), "&lt;i&gt;<br>&lt;/i&gt;");
    }

    #[test]
    fn description_markup_substitutes_fallback() {
        assert_eq!(description_markup(None), "No description.");
        assert_eq!(description_markup(Some(" ")), "No description.");
        assert_eq!(description_markup(Some("Cozy <3")), "Cozy &lt;3");
    }
}
