//! Local employee roster.
//!
//! The roster starts as a copy of what the server returned and is then edited
//! purely in memory. Nothing here is written back to the backend; a reload
//! replaces the roster with server data again.
//!
//! Ids handed out by [`IdAllocator`] only ever grow, so deleting an employee
//! never frees its id for a later add.

use thiserror::Error;
use tracing::info;

use crate::api::{Employee, EmployeeId};

/// Errors from roster edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Name is required")]
    MissingName,
    #[error("Rating is required")]
    MissingRating,
    #[error("No employee with id {0}")]
    NotFound(EmployeeId),
    #[error("Employee ids exhausted")]
    IdsExhausted,
}

/// Validated name/rating pair ready to become an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    name: String,
    rating: String,
}

impl EmployeeDraft {
    /// Trim and validate raw form input.
    pub fn new(name: &str, rating: &str) -> Result<Self, RosterError> {
        let name = name.trim();
        let rating = rating.trim();
        if name.is_empty() {
            return Err(RosterError::MissingName);
        }
        if rating.is_empty() {
            return Err(RosterError::MissingRating);
        }
        Ok(Self {
            name: name.to_string(),
            rating: rating.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            rating: self.rating,
        }
    }
}

/// Monotonic id counter.
///
/// `next` is `None` once `EmployeeId::MAX` has been seen or handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<EmployeeId>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    /// Make sure `id` will never be handed out.
    pub fn observe(&mut self, id: EmployeeId) {
        self.next = match (self.next, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    /// The id the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> Option<EmployeeId> {
        self.next
    }

    pub fn allocate(&mut self) -> Result<EmployeeId, RosterError> {
        let id = self.next.ok_or(RosterError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}

/// In-memory employee list with local add/update/delete.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
    ids: IdAllocator,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from server data.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut roster = Self::new();
        roster.replace_all(employees);
        roster
    }

    /// Replace the list with a fresh copy from the server.
    ///
    /// The id counter is only raised, never reset.
    pub fn replace_all(&mut self, employees: Vec<Employee>) {
        for employee in &employees {
            self.ids.observe(employee.id);
        }
        self.employees = employees;
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn next_id(&self) -> Option<EmployeeId> {
        self.ids.peek()
    }

    /// Append a new employee and return it.
    pub fn add(&mut self, draft: EmployeeDraft) -> Result<&Employee, RosterError> {
        let id = self.ids.allocate()?;
        let employee = draft.into_employee(id);
        info!(id, name = %employee.name, rating = %employee.rating, "employee added locally");
        self.employees.push(employee);
        Ok(&self.employees[self.employees.len() - 1])
    }

    /// Overwrite every entry with `id`; the id itself is kept.
    ///
    /// Returns how many entries were replaced.
    pub fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> Result<usize, RosterError> {
        let mut replaced = 0;
        for employee in self.employees.iter_mut().filter(|e| e.id == id) {
            employee.name = draft.name.clone();
            employee.rating = draft.rating.clone();
            replaced += 1;
        }

        if replaced == 0 {
            return Err(RosterError::NotFound(id));
        }

        info!(id, name = %draft.name, rating = %draft.rating, "employee updated locally");
        Ok(replaced)
    }

    /// Remove every entry with `id`, preserving the order of the rest.
    ///
    /// Returns how many entries were removed.
    pub fn delete(&mut self, id: EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let removed = before - self.employees.len();
        if removed > 0 {
            info!(id, removed, "employee deleted locally");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: EmployeeId, name: &str, rating: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            rating: rating.to_string(),
        }
    }

    fn draft(name: &str, rating: &str) -> EmployeeDraft {
        EmployeeDraft::new(name, rating).unwrap()
    }

    #[test]
    fn test_add_appends_with_next_sequential_id() {
        let mut roster = EmployeeRoster::from_employees(vec![emp(1, "Ann", "A")]);
        let added = roster.add(draft("Bob", "B")).unwrap().clone();

        assert_eq!(added, emp(2, "Bob", "B"));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.employees()[1], added);
    }

    #[test]
    fn test_add_to_empty_roster_starts_at_one() {
        let mut roster = EmployeeRoster::new();
        assert_eq!(roster.add(draft("Ann", "A")).unwrap().id, 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut roster =
            EmployeeRoster::from_employees(vec![emp(1, "Ann", "A"), emp(2, "Bob", "B")]);
        roster.delete(1);
        let added = roster.add(draft("Cy", "C")).unwrap().id;

        // A length-derived id would have collided with Bob.
        assert_eq!(added, 3);
        let ids: Vec<_> = roster.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_ids_follow_highest_server_id() {
        let mut roster =
            EmployeeRoster::from_employees(vec![emp(10, "Ann", "A"), emp(4, "Bob", "B")]);
        assert_eq!(roster.add(draft("Cy", "C")).unwrap().id, 11);
    }

    #[test]
    fn test_replace_all_never_lowers_counter() {
        let mut roster = EmployeeRoster::from_employees(vec![emp(5, "Ann", "A")]);
        roster.replace_all(vec![emp(1, "Bob", "B")]);
        assert_eq!(roster.next_id(), Some(6));
    }

    #[test]
    fn test_update_replaces_only_matching_entry() {
        let mut roster = EmployeeRoster::from_employees(vec![
            emp(1, "Ann", "A"),
            emp(2, "Bob", "B"),
            emp(3, "Cy", "C"),
        ]);

        let replaced = roster.update(2, draft("Robert", "A")).unwrap();

        assert_eq!(replaced, 1);
        assert_eq!(roster.len(), 3);
        assert_eq!(
            roster.employees(),
            &[emp(1, "Ann", "A"), emp(2, "Robert", "A"), emp(3, "Cy", "C")]
        );
    }

    #[test]
    fn test_update_replaces_all_duplicates_and_keeps_order() {
        let mut roster = EmployeeRoster::from_employees(vec![
            emp(1, "Ann", "A"),
            emp(2, "Bob", "B"),
            emp(3, "Cy", "C"),
            emp(2, "Bob again", "D"),
            emp(4, "Di", "D"),
        ]);

        let replaced = roster.update(2, draft("Robert", "A")).unwrap();

        assert_eq!(replaced, 2);
        assert_eq!(roster.len(), 5);
        assert_eq!(
            roster.employees(),
            &[
                emp(1, "Ann", "A"),
                emp(2, "Robert", "A"),
                emp(3, "Cy", "C"),
                emp(2, "Robert", "A"),
                emp(4, "Di", "D"),
            ]
        );
    }

    #[test]
    fn test_update_unknown_id() {
        let mut roster = EmployeeRoster::from_employees(vec![emp(1, "Ann", "A")]);
        assert_eq!(
            roster.update(9, draft("X", "Y")),
            Err(RosterError::NotFound(9))
        );
        assert_eq!(roster.employees(), &[emp(1, "Ann", "A")]);
    }

    #[test]
    fn test_delete_removes_all_duplicates_and_keeps_order() {
        let mut roster = EmployeeRoster::from_employees(vec![
            emp(1, "Ann", "A"),
            emp(2, "Bob", "B"),
            emp(3, "Cy", "C"),
            emp(2, "Bob again", "B"),
            emp(4, "Di", "D"),
        ]);

        assert_eq!(roster.delete(2), 2);
        let names: Vec<_> = roster.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cy", "Di"]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut roster = EmployeeRoster::from_employees(vec![emp(1, "Ann", "A")]);
        assert_eq!(roster.delete(42), 0);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_fails_once_ids_are_exhausted() {
        let mut roster = EmployeeRoster::from_employees(vec![emp(EmployeeId::MAX, "Ann", "A")]);

        assert_eq!(roster.next_id(), None);
        assert_eq!(roster.add(draft("Bob", "B")), Err(RosterError::IdsExhausted));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut roster =
            EmployeeRoster::from_employees(vec![emp(EmployeeId::MAX - 1, "Ann", "A")]);

        assert_eq!(roster.add(draft("Bob", "B")).unwrap().id, EmployeeId::MAX);
        assert_eq!(roster.add(draft("Cy", "C")), Err(RosterError::IdsExhausted));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(EmployeeDraft::new("  ", "A"), Err(RosterError::MissingName));
        assert_eq!(EmployeeDraft::new("Ann", ""), Err(RosterError::MissingRating));

        let d = EmployeeDraft::new("  Ann ", " A ").unwrap();
        assert_eq!(d.name(), "Ann");
        assert_eq!(d.rating(), "A");
    }
}
