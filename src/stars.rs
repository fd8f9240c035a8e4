/// Star rating rendering
use crate::formatting::BoxChars;

pub const STAR_COUNT: usize = 5;

/// Five filled/empty flags for a 0-5 rating
///
/// The rating is rounded half toward positive infinity and a missing rating
/// counts as zero. Values outside 0..=5 are clamped by the star count itself.
pub fn star_flags(rating: Option<f64>) -> [bool; STAR_COUNT] {
    let rounded = (rating.unwrap_or(0.0) + 0.5).floor();
    std::array::from_fn(|i| (i as f64) < rounded)
}

/// Render a rating as glyphs, e.g. "★★★☆☆"
pub fn render_stars(rating: Option<f64>, box_chars: &BoxChars) -> String {
    star_flags(rating)
        .iter()
        .map(|&filled| {
            if filled {
                box_chars.star_filled.as_str()
            } else {
                box_chars.star_empty.as_str()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(star_flags(Some(3.4)), [T, T, T, F, F]);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(star_flags(Some(3.5)), [T, T, T, T, F]);
        assert_eq!(star_flags(Some(0.5)), [T, F, F, F, F]);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(star_flags(Some(0.0)), [F; 5]);
        assert_eq!(star_flags(Some(5.0)), [T; 5]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(star_flags(Some(6.0)), [T; 5]);
        assert_eq!(star_flags(Some(-1.0)), [F; 5]);
    }

    #[test]
    fn test_missing_rating_is_zero() {
        assert_eq!(star_flags(None), [F; 5]);
    }

    #[test]
    fn test_render_unicode_and_ascii() {
        assert_eq!(render_stars(Some(2.6), &BoxChars::unicode()), "★★★☆☆");
        assert_eq!(render_stars(Some(2.6), &BoxChars::ascii()), "***..");
        assert_eq!(render_stars(None, &BoxChars::unicode()), "☆☆☆☆☆");
    }
}
