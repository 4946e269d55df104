//! Module selection step state.

use std::collections::BTreeSet;

use crate::models::module::{ALL_MODULES, AnalysisModule, ModuleId, required_modules};

/// Selected analysis modules. Required modules are always in the set.
#[derive(Debug, Clone)]
pub struct ModuleSelection {
    selected: BTreeSet<ModuleId>,
}

impl Default for ModuleSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleSelection {
    /// Only the required modules selected.
    pub fn new() -> Self {
        Self {
            selected: required_modules().map(|m| m.id).collect(),
        }
    }

    pub fn is_selected(&self, id: ModuleId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flip an optional module. Returns `false` when the module is required.
    pub fn toggle(&mut self, id: ModuleId) -> bool {
        if id.module().required {
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Enabled modules in catalog order.
    pub fn confirm(&self) -> Vec<AnalysisModule> {
        ALL_MODULES
            .iter()
            .filter(|m| m.required || self.selected.contains(&m.id))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_always_enabled() {
        let mut selection = ModuleSelection::new();
        assert!(selection.is_selected(ModuleId::Seo));
        assert!(!selection.toggle(ModuleId::Seo));
        assert!(!selection.toggle(ModuleId::Seo));
        assert!(selection.is_selected(ModuleId::Seo));

        for module in &ALL_MODULES {
            selection.toggle(module.id);
        }
        let enabled = selection.confirm();
        assert!(required_modules().all(|r| enabled.iter().any(|m| m.id == r.id)));
    }

    #[test]
    fn test_toggle_optional() {
        let mut selection = ModuleSelection::new();
        assert!(selection.toggle(ModuleId::Hiring));
        assert!(selection.is_selected(ModuleId::Hiring));
        assert!(selection.toggle(ModuleId::Hiring));
        assert!(!selection.is_selected(ModuleId::Hiring));
    }

    #[test]
    fn test_confirm_catalog_order() {
        let mut selection = ModuleSelection::new();
        selection.toggle(ModuleId::Content);
        selection.toggle(ModuleId::Traffic);
        let ids: Vec<ModuleId> = selection.confirm().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ModuleId::Seo, ModuleId::Traffic, ModuleId::Content]);
    }
}
