// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ids::IdAllocator;
use crate::ports::{RecordStore, SeedSource};
use crate::state::{InitReport, Notice, RosterSource};
use roster_domain::{
    Department, Employee, EmployeeId, FilterCriteria, NewEmployee, SeedUser, StoredEmployee,
    compute_visible,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Owns the roster for one session.
///
/// The controller is the only writer of the store. Every mutation takes
/// `&mut self` and finishes (including the view recomputation) before it
/// returns, so callers never observe a stale filtered view.
#[derive(Debug)]
pub struct RosterController<S, L> {
    store: S,
    seed: L,
    ids: IdAllocator,
    roster: Vec<Employee>,
    criteria: FilterCriteria,
    visible: Vec<Employee>,
    ready: bool,
    store_unread: bool,
}

impl<S: RecordStore, L: SeedSource> RosterController<S, L> {
    /// Creates an uninitialized controller.
    #[must_use]
    pub const fn new(store: S, seed: L) -> Self {
        Self::with_id_allocator(store, seed, IdAllocator::new())
    }

    /// Creates an uninitialized controller with a custom id allocator.
    #[must_use]
    pub const fn with_id_allocator(store: S, seed: L, ids: IdAllocator) -> Self {
        Self {
            store,
            seed,
            ids,
            roster: Vec::new(),
            criteria: FilterCriteria {
                search_text: String::new(),
                department: None,
            },
            visible: Vec::new(),
            ready: false,
            store_unread: false,
        }
    }

    /// Hydrates the roster.
    ///
    /// A non-empty stored roster wins. An empty or absent one triggers a
    /// single seed fetch whose result is normalized, made active and written
    /// back to the store. A store that cannot be read yields an empty roster
    /// without consulting the seed, and nothing is written until the store
    /// can be read again. Failures are reported as notices; this method
    /// never fails.
    pub async fn initialize(&mut self) -> InitReport {
        let mut notices: Vec<Notice> = Vec::new();

        let (roster, source): (Vec<Employee>, RosterSource) = match self.store.load() {
            Ok(stored) if stored.is_empty() => {
                self.store_unread = false;
                self.import_seed(&mut notices).await
            }
            Ok(stored) => {
                self.store_unread = false;
                (self.assign_stored_ids(stored, &mut notices), RosterSource::Cache)
            }
            Err(err) => {
                warn!(error = %err, "Stored roster unavailable, starting with an empty roster");
                notices.push(Notice::CacheUnavailable {
                    reason: err.to_string(),
                });
                self.store_unread = true;
                (Vec::new(), RosterSource::Empty)
            }
        };

        self.roster = roster;
        self.ready = true;
        self.refresh_view();

        info!(
            source = %source,
            record_count = self.roster.len(),
            notice_count = notices.len(),
            "Roster initialized"
        );

        InitReport {
            source,
            record_count: self.roster.len(),
            notices,
        }
    }

    /// Appends a validated record and persists the whole roster.
    ///
    /// On success the record is part of the roster and, if it matches the
    /// current criteria, of the filtered view.
    ///
    /// If the store could not be read during `initialize()`, it is read
    /// again first and the stored records become the roster, so the save
    /// never replaces records this session has not seen.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `initialize()` has not completed
    /// - The store is still unreadable (nothing is written)
    /// - The store rejected the write (the roster is left unchanged)
    pub fn add(&mut self, candidate: NewEmployee) -> Result<Employee, CoreError> {
        if !self.ready {
            return Err(CoreError::NotInitialized);
        }
        if self.store_unread {
            self.recover_stored_roster()?;
        }

        let roster: &[Employee] = &self.roster;
        let id: EmployeeId = self
            .ids
            .allocate(|id| roster.iter().any(|employee| employee.id == id));
        let employee: Employee = candidate.into_employee(id);

        let mut next: Vec<Employee> = self.roster.clone();
        next.push(employee.clone());
        self.store.save(&next)?;

        self.roster = next;
        self.refresh_view();
        debug!(id = %employee.id, record_count = self.roster.len(), "Employee added");

        Ok(employee)
    }

    /// Replaces the filter criteria and recomputes the view.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh_view();
    }

    /// Replaces the search text and recomputes the view.
    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.criteria.search_text = search_text.into();
        self.refresh_view();
    }

    /// Replaces the department criterion and recomputes the view.
    pub fn set_department_filter(&mut self, department: Option<Department>) {
        self.criteria.department = department;
        self.refresh_view();
    }

    /// Returns the full roster in insertion order.
    #[must_use]
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Returns the records matching the current criteria.
    #[must_use]
    pub fn visible(&self) -> &[Employee] {
        &self.visible
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns whether `initialize()` has completed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Tears the controller down and hands back its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    async fn import_seed(
        &mut self,
        notices: &mut Vec<Notice>,
    ) -> (Vec<Employee>, RosterSource) {
        let users: Vec<SeedUser> = match self.seed.fetch_seed().await {
            Ok(users) => users,
            Err(err) => {
                warn!(error = %err, "Seed import failed, starting with an empty roster");
                notices.push(Notice::SeedFetchFailed {
                    reason: err.to_string(),
                });
                return (Vec::new(), RosterSource::Empty);
            }
        };

        let roster: Vec<Employee> = self.normalize_seed(users);
        info!(record_count = roster.len(), "Imported seed roster");

        if let Err(err) = self.store.save(&roster) {
            warn!(error = %err, "Imported roster could not be persisted");
            notices.push(Notice::SeedNotPersisted {
                reason: err.to_string(),
            });
        }

        (roster, RosterSource::Seed)
    }

    /// Maps seed users onto records, keeping remote ids that are free.
    fn normalize_seed(&mut self, users: Vec<SeedUser>) -> Vec<Employee> {
        let mut taken: HashSet<EmployeeId> = HashSet::with_capacity(users.len());
        let mut roster: Vec<Employee> = Vec::with_capacity(users.len());

        for user in users {
            let id: EmployeeId = match user.id.map(EmployeeId::new) {
                Some(id) if !taken.contains(&id) => id,
                _ => self.ids.allocate(|id| taken.contains(&id)),
            };
            taken.insert(id);
            roster.push(user.into_employee(id));
        }

        roster
    }

    /// Reads the store again after a failed read during `initialize()`.
    fn recover_stored_roster(&mut self) -> Result<(), CoreError> {
        let stored: Vec<StoredEmployee> = self.store.load()?;
        let mut notices: Vec<Notice> = Vec::new();
        let recovered: Vec<Employee> = self.assign_stored_ids(stored, &mut notices);

        info!(
            record_count = recovered.len(),
            notice_count = notices.len(),
            "Stored roster readable again"
        );

        self.roster = recovered;
        self.store_unread = false;
        self.refresh_view();
        Ok(())
    }

    /// Keeps stored ids that are present and unique, and gives every other
    /// stored record a fresh id.
    fn assign_stored_ids(
        &mut self,
        records: Vec<StoredEmployee>,
        notices: &mut Vec<Notice>,
    ) -> Vec<Employee> {
        let mut taken: HashSet<EmployeeId> = records.iter().filter_map(|e| e.id).collect();
        let mut seen: HashSet<EmployeeId> = HashSet::with_capacity(records.len());
        let mut rekeyed: usize = 0;
        let mut roster: Vec<Employee> = Vec::with_capacity(records.len());

        for record in records {
            let id: EmployeeId = match record.id {
                Some(id) if seen.insert(id) => id,
                old_id => {
                    let id: EmployeeId = self.ids.allocate(|id| taken.contains(&id));
                    warn!(?old_id, new_id = %id, "Stored record re-keyed");
                    taken.insert(id);
                    seen.insert(id);
                    rekeyed += 1;
                    id
                }
            };
            roster.push(record.into_employee(id));
        }

        if rekeyed > 0 {
            notices.push(Notice::RecordsRekeyed { count: rekeyed });
        }

        roster
    }

    /// Single recomputation step for every roster or criteria change.
    fn refresh_view(&mut self) {
        self.visible = compute_visible(&self.roster, &self.criteria);
    }
}
