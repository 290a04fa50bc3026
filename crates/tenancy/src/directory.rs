//! Financer directory: the lookup collaborator used during scope resolution.

use std::collections::HashMap;

use benefika_core::{DivisionId, FinancerId};

use crate::hierarchy::Financer;

/// Read-side lookup over the financer population.
///
/// Implemented by whatever storage layer backs the deployment; the in-memory
/// implementation below serves tests and embedded use.
pub trait FinancerDirectory {
    fn financer(&self, id: FinancerId) -> Option<Financer>;

    /// Every financer ID known to the platform (global-scope hydration).
    fn all_financer_ids(&self) -> Vec<FinancerId>;

    /// Every division ID known to the platform (global-scope hydration).
    fn all_division_ids(&self) -> Vec<DivisionId>;
}

/// Resolve an authorization scope from a list of requested financer IDs.
///
/// Returns the deduplicated financer set together with the parent divisions.
/// If *any* requested ID is unknown the whole resolution is empty — a scope
/// is granted entirely or not at all, never partially.
pub fn resolve_scope(
    directory: &dyn FinancerDirectory,
    financer_ids: &[FinancerId],
) -> (Vec<FinancerId>, Vec<DivisionId>) {
    let mut financers: Vec<FinancerId> = Vec::new();
    let mut divisions: Vec<DivisionId> = Vec::new();

    for &id in financer_ids {
        let Some(financer) = directory.financer(id) else {
            return (Vec::new(), Vec::new());
        };
        if !financers.contains(&id) {
            financers.push(id);
        }
        if !divisions.contains(&financer.division_id) {
            divisions.push(financer.division_id);
        }
    }

    (financers, divisions)
}

/// In-memory directory over a fixed financer population.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectory {
    financers: HashMap<FinancerId, Financer>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, financer: Financer) {
        self.financers.insert(financer.id, financer);
    }
}

impl FinancerDirectory for InMemoryDirectory {
    fn financer(&self, id: FinancerId) -> Option<Financer> {
        self.financers.get(&id).cloned()
    }

    fn all_financer_ids(&self) -> Vec<FinancerId> {
        self.financers.keys().copied().collect()
    }

    fn all_division_ids(&self) -> Vec<DivisionId> {
        let mut divisions: Vec<DivisionId> = Vec::new();
        for financer in self.financers.values() {
            if !divisions.contains(&financer.division_id) {
                divisions.push(financer.division_id);
            }
        }
        divisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(financers: &[Financer]) -> InMemoryDirectory {
        let mut directory = InMemoryDirectory::new();
        for financer in financers {
            directory.insert(financer.clone());
        }
        directory
    }

    #[test]
    fn resolve_scope_maps_financers_to_parent_divisions() {
        let division = DivisionId::new();
        let f1 = Financer::new(FinancerId::new(), division, "Acme Benelux");
        let f2 = Financer::new(FinancerId::new(), division, "Acme France");
        let directory = directory_with(&[f1.clone(), f2.clone()]);

        let (financers, divisions) = resolve_scope(&directory, &[f1.id, f2.id]);

        assert_eq!(financers, vec![f1.id, f2.id]);
        assert_eq!(divisions, vec![division]);
    }

    #[test]
    fn resolve_scope_rejects_unknown_financer_entirely() {
        let f1 = Financer::new(FinancerId::new(), DivisionId::new(), "Acme");
        let directory = directory_with(&[f1.clone()]);

        let (financers, divisions) = resolve_scope(&directory, &[f1.id, FinancerId::new()]);

        assert!(financers.is_empty());
        assert!(divisions.is_empty());
    }

    #[test]
    fn resolve_scope_deduplicates_requests() {
        let f1 = Financer::new(FinancerId::new(), DivisionId::new(), "Acme");
        let directory = directory_with(&[f1.clone()]);

        let (financers, _) = resolve_scope(&directory, &[f1.id, f1.id]);

        assert_eq!(financers, vec![f1.id]);
    }
}
