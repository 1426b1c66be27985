//! Smooth in-page anchor scrolling.

/// Element id targeted by an in-page link, or `None` for links that should
/// keep their default behavior (`#`, `#!`, external hrefs).
pub fn target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id == "!" {
        return None;
    }
    Some(id)
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_offset(target_top: f64, page_y: f64, header_height: Option<f64>, fallback: f64) -> f64 {
    let header = header_height.filter(|h| *h > 0.0).unwrap_or(fallback);
    target_top + page_y - header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_links_are_skipped() {
        assert_eq!(target_id("#"), None);
        assert_eq!(target_id("#!"), None);
        assert_eq!(target_id("/about#team"), None);
        assert_eq!(target_id("#team"), Some("team"));
    }

    #[test]
    fn offset_subtracts_header() {
        assert_eq!(scroll_offset(250.0, 1000.0, Some(60.0), 80.0), 1190.0);
        assert_eq!(scroll_offset(250.0, 1000.0, None, 80.0), 1170.0);
    }
}
