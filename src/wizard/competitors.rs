//! Competitor confirmation step state.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::models::Competitor;

/// Candidate competitors and which of them are selected.
#[derive(Debug, Clone)]
pub struct CompetitorSelection {
    candidates: Vec<Competitor>,
    selected: HashSet<String>,
    next_manual_id: u32,
}

impl Default for CompetitorSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl CompetitorSelection {
    /// Seed candidates, all selected.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Seed candidates, with manual ids numbered from `next_manual_id`.
    pub fn starting_at(next_manual_id: u32) -> Self {
        let candidates = Competitor::seed_list();
        let selected = candidates.iter().map(|c| c.id.clone()).collect();
        Self {
            candidates,
            selected,
            next_manual_id: next_manual_id.max(1),
        }
    }

    /// Number the next manual competitor will get.
    pub fn next_manual_id(&self) -> u32 {
        self.next_manual_id
    }

    pub fn candidates(&self) -> &[Competitor] {
        &self.candidates
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Count shown on the confirm button.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flip selection of a known candidate. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if !self.candidates.iter().any(|c| c.id == id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        debug!("Competitor {} selected: {}", id, self.is_selected(id));
    }

    /// Add a competitor from a typed URL and select it. Blank input is ignored.
    pub fn add_manual(&mut self, url: &str) -> Option<&Competitor> {
        if url.trim().is_empty() {
            return None;
        }
        let id = format!("manual-{}", self.next_manual_id);
        self.next_manual_id += 1;

        let competitor = Competitor::from_url(id, url);
        info!("Added competitor {} ({})", competitor.name, competitor.id);
        self.selected.insert(competitor.id.clone());
        self.candidates.push(competitor);
        self.candidates.last()
    }

    /// Selected competitors in candidate order.
    pub fn confirm(&self) -> Vec<Competitor> {
        self.candidates
            .iter()
            .filter(|c| self.selected.contains(&c.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_all_seeds_selected() {
        let selection = CompetitorSelection::new();
        assert_eq!(selection.candidates().len(), 5);
        assert_eq!(selection.selected_count(), 5);
        assert!(selection.candidates().iter().all(|c| selection.is_selected(&c.id)));
    }

    #[test]
    fn test_toggle_updates_count() {
        let mut selection = CompetitorSelection::new();
        selection.toggle("c2");
        assert!(!selection.is_selected("c2"));
        assert_eq!(selection.selected_count(), 4);
        selection.toggle("c2");
        assert!(selection.is_selected("c2"));
        assert_eq!(selection.selected_count(), 5);
    }

    #[test]
    fn test_toggle_unknown_ignored() {
        let mut selection = CompetitorSelection::new();
        selection.toggle("nope");
        assert_eq!(selection.selected_count(), 5);
        assert!(!selection.is_selected("nope"));
    }

    #[test]
    fn test_add_manual() {
        let mut selection = CompetitorSelection::new();
        assert!(selection.add_manual("   ").is_none());

        let added = selection.add_manual("https://www.newcomer.io").cloned().unwrap();
        assert_eq!(added.id, "manual-1");
        assert_eq!(added.name, "www.newcomer.io");
        assert!(selection.is_selected(&added.id));
        assert_eq!(selection.selected_count(), 6);

        let second = selection.add_manual("other.dev").cloned().unwrap();
        assert_ne!(second.id, added.id);
    }

    #[test]
    fn test_starting_at_continues_numbering() {
        let mut selection = CompetitorSelection::starting_at(4);
        let added = selection.add_manual("later.io").cloned().unwrap();
        assert_eq!(added.id, "manual-4");
        assert_eq!(selection.next_manual_id(), 5);
        assert_eq!(CompetitorSelection::starting_at(0).next_manual_id(), 1);
    }

    #[test]
    fn test_confirm_keeps_candidate_order() {
        let mut selection = CompetitorSelection::new();
        selection.add_manual("zeta.com");
        selection.toggle("c1");
        selection.toggle("c4");

        let ids: Vec<String> = selection.confirm().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c2", "c3", "c5", "manual-1"]);
        assert_eq!(ids.len(), selection.selected_count());
    }
}
