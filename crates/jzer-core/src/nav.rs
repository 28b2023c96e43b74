//! Active-section tracking for the site header.
//!
//! The decision is a pure function of section rectangles and a threshold
//! line. Reading the rectangles from a rendering surface is left to the
//! caller through [`SectionBounds`].

use std::collections::HashMap;

/// Site name used in window titles.
pub const SITE_NAME: &str = "Salon JZER";

/// Vertical extent of a section relative to the viewport top, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// The section spans the threshold line.
    #[must_use]
    pub fn straddles(&self, threshold: f64) -> bool {
        self.top <= threshold && self.bottom > threshold
    }

    /// The section's top edge has scrolled up to (or past) the threshold.
    #[must_use]
    pub fn has_reached(&self, threshold: f64) -> bool {
        self.top <= threshold
    }
}

/// Source of section rectangles, keyed by section element id.
pub trait SectionBounds {
    fn section_bounds(&self, id: &str) -> Option<SectionRect>;
}

impl SectionBounds for HashMap<String, SectionRect> {
    fn section_bounds(&self, id: &str) -> Option<SectionRect> {
        self.get(id).copied()
    }
}

/// When a section counts as a candidate for the active label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchRule {
    /// The section spans the threshold line.
    #[default]
    Straddle,
    /// The section's top is at or above the threshold line.
    Reached,
}

/// Which candidate wins when several match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    #[default]
    First,
    Last,
}

/// A nav entry and the element id of the section it scrolls to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub label: String,
    pub id: String,
}

impl NavSection {
    /// Entry whose section id is the lowercased label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            id: label.to_lowercase(),
        }
    }
}

/// Header entries in priority order.
#[must_use]
pub fn default_sections() -> Vec<NavSection> {
    ["Home", "About", "Stories", "Contact", "Services"]
        .into_iter()
        .map(NavSection::from_label)
        .collect()
}

/// Pick the active section label, if any section matches.
///
/// Sections without known bounds are skipped.
pub fn active_section<'a>(
    sections: &'a [NavSection],
    bounds: &impl SectionBounds,
    threshold: f64,
    rule: MatchRule,
    tie_break: TieBreak,
) -> Option<&'a str> {
    let mut matches = sections.iter().filter(|section| {
        bounds
            .section_bounds(&section.id)
            .is_some_and(|rect| match rule {
                MatchRule::Straddle => rect.straddles(threshold),
                MatchRule::Reached => rect.has_reached(threshold),
            })
    });

    let winner = match tie_break {
        TieBreak::First => matches.next(),
        TieBreak::Last => matches.last(),
    };
    winner.map(|section| section.label.as_str())
}

/// Ticket for one layout measurement, issued by [`NavTracker::begin_measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeasureTicket(u64);

/// Header state: the active label, recomputed on scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTracker {
    sections: Vec<NavSection>,
    active: String,
    threshold: f64,
    rule: MatchRule,
    tie_break: TieBreak,
    issued_measure: u64,
    applied_measure: u64,
}

impl NavTracker {
    /// Tracker whose active label starts at the first section.
    #[must_use]
    pub fn new(sections: Vec<NavSection>, threshold: f64, rule: MatchRule, tie_break: TieBreak) -> Self {
        let active = sections
            .first()
            .map(|section| section.label.clone())
            .unwrap_or_default();
        Self {
            sections,
            active,
            threshold,
            rule,
            tie_break,
            issued_measure: 0,
            applied_measure: 0,
        }
    }

    /// Tracker for the site header: a section is active once its top passes
    /// the middle of the viewport, the lowest such section wins.
    #[must_use]
    pub fn for_viewport(sections: Vec<NavSection>, viewport_height: f64) -> Self {
        Self::new(
            sections,
            viewport_height / 2.0,
            MatchRule::Reached,
            TieBreak::Last,
        )
    }

    #[must_use]
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, label: &str) -> bool {
        self.active == label
    }

    /// Recompute from fresh bounds. Keeps the current label when nothing
    /// matches. Returns `true` when the active label changed.
    pub fn on_scroll(&mut self, bounds: &impl SectionBounds) -> bool {
        let Some(label) = active_section(
            &self.sections,
            bounds,
            self.threshold,
            self.rule,
            self.tie_break,
        ) else {
            return false;
        };
        if label == self.active {
            return false;
        }
        self.active = label.to_string();
        true
    }

    /// Start an asynchronous measurement of the section layout.
    pub fn begin_measure(&mut self) -> MeasureTicket {
        self.issued_measure += 1;
        MeasureTicket(self.issued_measure)
    }

    /// Apply a finished measurement, moving the threshold first when the
    /// viewport was measured too.
    ///
    /// A measurement older than one already applied is dropped, so a slow
    /// read cannot overwrite a newer layout. Returns `true` when the active
    /// label changed.
    pub fn apply_measure(
        &mut self,
        ticket: MeasureTicket,
        threshold: Option<f64>,
        bounds: &impl SectionBounds,
    ) -> bool {
        if ticket.0 <= self.applied_measure {
            tracing::trace!(
                "Dropping stale layout measurement {} (applied {})",
                ticket.0,
                self.applied_measure
            );
            return false;
        }
        self.applied_measure = ticket.0;
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        self.on_scroll(bounds)
    }

    /// Optimistically activate a clicked entry.
    ///
    /// Returns the section id to scroll to, or `None` for unknown labels.
    pub fn select(&mut self, label: &str) -> Option<String> {
        let section = self.sections.iter().find(|section| section.label == label)?;
        self.active = section.label.clone();
        Some(section.id.clone())
    }
}

/// Window title for a route path: `"Salon JZER | Home"` for `/`, otherwise
/// the first path segment capitalised.
#[must_use]
pub fn page_title(path: &str) -> String {
    let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    let mut chars = segment.chars();
    let page = chars.next().map_or_else(
        || "Home".to_string(),
        |first| first.to_uppercase().chain(chars).collect(),
    );
    format!("{SITE_NAME} | {page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(entries: &[(&str, f64, f64)]) -> HashMap<String, SectionRect> {
        entries
            .iter()
            .map(|(id, top, bottom)| ((*id).to_string(), SectionRect::new(*top, *bottom)))
            .collect()
    }

    #[test]
    fn straddle_picks_section_spanning_threshold() {
        let sections = default_sections();
        let layout = bounds(&[
            ("home", -900.0, -100.0),
            ("about", -100.0, 500.0),
            ("stories", 500.0, 1100.0),
        ]);

        let active = active_section(&sections, &layout, 80.0, MatchRule::Straddle, TieBreak::First);
        assert_eq!(active, Some("About"));
    }

    #[test]
    fn straddle_excludes_section_ending_on_threshold() {
        let sections = default_sections();
        let layout = bounds(&[("home", -500.0, 80.0), ("about", 80.0, 600.0)]);

        let active = active_section(&sections, &layout, 80.0, MatchRule::Straddle, TieBreak::First);
        assert_eq!(active, Some("About"));
    }

    #[test]
    fn tie_break_selects_first_or_last_match() {
        let sections = default_sections();
        let layout = bounds(&[
            ("home", -800.0, 0.0),
            ("about", -200.0, 300.0),
            ("stories", 100.0, 700.0),
            ("contact", 700.0, 1200.0),
        ]);

        let first = active_section(&sections, &layout, 360.0, MatchRule::Reached, TieBreak::First);
        let last = active_section(&sections, &layout, 360.0, MatchRule::Reached, TieBreak::Last);
        assert_eq!(first, Some("Home"));
        assert_eq!(last, Some("Stories"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let sections = default_sections();
        let layout = bounds(&[("services", 0.0, 400.0)]);

        let active = active_section(&sections, &layout, 10.0, MatchRule::Straddle, TieBreak::First);
        assert_eq!(active, Some("Services"));
        let empty: HashMap<String, SectionRect> = HashMap::new();
        assert_eq!(
            active_section(&sections, &empty, 10.0, MatchRule::Straddle, TieBreak::First),
            None
        );
    }

    #[test]
    fn tracker_starts_on_first_section_and_follows_scroll() {
        let mut tracker = NavTracker::for_viewport(default_sections(), 800.0);
        assert_eq!(tracker.active(), "Home");

        let changed = tracker.on_scroll(&bounds(&[
            ("home", -1200.0, -400.0),
            ("about", -400.0, 350.0),
            ("stories", 350.0, 900.0),
        ]));

        assert!(changed);
        assert_eq!(tracker.active(), "Stories");
        assert!(tracker.is_active("Stories"));
    }

    #[test]
    fn tracker_keeps_label_when_nothing_matches() {
        let mut tracker = NavTracker::new(default_sections(), 80.0, MatchRule::Straddle, TieBreak::First);
        tracker.select("About");

        assert!(!tracker.on_scroll(&bounds(&[("home", 200.0, 900.0)])));
        assert_eq!(tracker.active(), "About");
    }

    #[test]
    fn tracker_returns_home_when_scrolled_back_to_top() {
        let mut tracker = NavTracker::for_viewport(default_sections(), 800.0);
        tracker.select("Services");

        let at_top = bounds(&[
            ("home", 0.0, 700.0),
            ("about", 700.0, 1300.0),
            ("stories", 1300.0, 1900.0),
        ]);

        assert!(tracker.on_scroll(&at_top));
        assert_eq!(tracker.active(), "Home");
    }

    #[test]
    fn mount_measurement_corrects_initial_label() {
        let mut tracker = NavTracker::for_viewport(default_sections(), 800.0);
        let ticket = tracker.begin_measure();
        let restored = bounds(&[
            ("home", -1400.0, -700.0),
            ("about", -700.0, -100.0),
            ("stories", -100.0, 500.0),
            ("contact", 500.0, 1100.0),
        ]);

        assert!(tracker.apply_measure(ticket, Some(300.0), &restored));
        assert_eq!(tracker.active(), "Stories");
    }

    #[test]
    fn stale_measurement_does_not_overwrite_newer_one() {
        let mut tracker = NavTracker::for_viewport(default_sections(), 800.0);
        let older = tracker.begin_measure();
        let newer = tracker.begin_measure();
        let scrolled_down = bounds(&[
            ("home", -1400.0, -700.0),
            ("about", -700.0, -100.0),
            ("stories", -100.0, 500.0),
        ]);
        let at_top = bounds(&[("home", 0.0, 700.0), ("about", 700.0, 1300.0)]);

        assert!(tracker.apply_measure(newer, None, &scrolled_down));
        assert!(!tracker.apply_measure(older, Some(10_000.0), &at_top));

        assert_eq!(tracker.active(), "Stories");
        assert!(!tracker.apply_measure(newer, None, &at_top));
        assert_eq!(tracker.active(), "Stories");
    }

    #[test]
    fn select_is_optimistic_and_returns_section_id() {
        let mut tracker = NavTracker::for_viewport(default_sections(), 800.0);

        assert_eq!(tracker.select("Contact").as_deref(), Some("contact"));
        assert_eq!(tracker.active(), "Contact");
        assert_eq!(tracker.select("Blog"), None);
        assert_eq!(tracker.active(), "Contact");
    }

    #[test]
    fn measured_threshold_changes_the_decision_line() {
        let layout = bounds(&[("home", -100.0, 300.0), ("about", 300.0, 900.0)]);
        let mut tracker = NavTracker::new(default_sections(), 100.0, MatchRule::Straddle, TieBreak::First);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active(), "Home");

        let ticket = tracker.begin_measure();
        assert!(tracker.apply_measure(ticket, Some(400.0), &layout));
        assert_eq!(tracker.active(), "About");
    }

    #[test]
    fn page_title_capitalises_first_segment() {
        assert_eq!(page_title("/"), "Salon JZER | Home");
        assert_eq!(page_title(""), "Salon JZER | Home");
        assert_eq!(page_title("/admin"), "Salon JZER | Admin");
        assert_eq!(page_title("/admin-upload"), "Salon JZER | Admin-upload");
        assert_eq!(page_title("/home/extra"), "Salon JZER | Home");
    }
}
