//! Active-link tracking for in-page navigation.

/// Visible fraction a section needs before it can become active.
pub const THRESHOLD: f64 = 0.3;
/// Root margin biased towards the top of the viewport.
pub const ROOT_MARGIN: &str = "-80px 0px -80% 0px";
/// Class placed on the active link.
pub const ACTIVE_CLASS: &str = "active";

/// One intersection record, stripped down to what the spy needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    /// `id` of the observed section.
    pub id: String,
    /// Whether the section is intersecting the root.
    pub is_intersecting: bool,
    /// Top edge of the section's bounding rect.
    pub top: f64,
}

/// Which links are active after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkState {
    /// Index into the link list given to [`ScrollSpy::new`].
    pub index: usize,
    /// Whether the link gets [`ACTIVE_CLASS`] and `aria-current="page"`.
    pub active: bool,
}

/// Maps visible sections to nav links.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    link_hrefs: Vec<Option<String>>,
    active_section: Option<String>,
}

impl ScrollSpy {
    /// `link_hrefs` holds each link's raw `href` attribute.
    pub fn new(link_hrefs: Vec<Option<String>>) -> Self {
        Self {
            link_hrefs,
            active_section: None,
        }
    }

    /// Section currently marked active.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Process one observer batch.
    ///
    /// When several sections intersect at once the topmost one wins; equal
    /// tops keep delivery order. Returns `None` when nothing intersects, in
    /// which case the links are left alone.
    pub fn observe(&mut self, entries: &[SectionEntry]) -> Option<Vec<LinkState>> {
        let winner = entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .reduce(|best, entry| if entry.top < best.top { entry } else { best })?;

        let target = format!("#{}", winner.id);
        tracing::debug!(section = %winner.id, "scroll-spy section active");
        self.active_section = Some(winner.id.clone());

        Some(
            self.link_hrefs
                .iter()
                .enumerate()
                .map(|(index, href)| LinkState {
                    index,
                    active: href.as_deref() == Some(target.as_str()),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_intersecting: bool, top: f64) -> SectionEntry {
        SectionEntry {
            id: id.to_string(),
            is_intersecting,
            top,
        }
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(vec![
            Some("#about".to_string()),
            Some("#services".to_string()),
            None,
            Some("/contact".to_string()),
        ])
    }

    fn active(states: &[LinkState]) -> Vec<usize> {
        states.iter().filter(|s| s.active).map(|s| s.index).collect()
    }

    #[test]
    fn single_intersection_activates_matching_link() {
        let mut spy = spy();
        let states = spy.observe(&[entry("services", true, 12.0)]).expect("update");
        assert_eq!(active(&states), vec![1]);
        assert_eq!(spy.active_section(), Some("services"));
    }

    #[test]
    fn topmost_section_wins_ties() {
        let mut spy = spy();
        let states = spy
            .observe(&[entry("services", true, 40.0), entry("about", true, -20.0)])
            .expect("update");
        assert_eq!(active(&states), vec![0]);

        let states = spy
            .observe(&[entry("services", true, 5.0), entry("about", true, 5.0)])
            .expect("update");
        assert_eq!(active(&states), vec![1]);
    }

    #[test]
    fn non_intersecting_batch_changes_nothing() {
        let mut spy = spy();
        spy.observe(&[entry("about", true, 0.0)]);
        assert!(spy.observe(&[entry("about", false, -400.0)]).is_none());
        assert_eq!(spy.active_section(), Some("about"));
    }

    #[test]
    fn section_without_link_clears_all() {
        let mut spy = spy();
        let states = spy.observe(&[entry("hero", true, 0.0)]).expect("update");
        assert!(active(&states).is_empty());
    }
}
