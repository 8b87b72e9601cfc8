// Employee Entity - record identity and pay calculation
//
// "Employee ID is IDENTITY (never changes), the other fields are VALUES (can change)"
//
// The repository lives next to the entity it manages: an ordered, in-memory
// collection that enforces ID uniqueness and hands out lookups.

use serde::{Deserialize, Serialize};

/// Flat deduction applied when deriving net salary from gross.
pub const TAX_RATE: f64 = 0.10;

// ============================================================================
// EMPLOYEE ENTITY
// ============================================================================

/// A single employee record.
///
/// Identity: `id` (never changes after construction)
/// Values: `name`, `gross_salary`, `department` (salary and department can
/// change through the owning repository)
///
/// Net salary is derived on read from the gross amount, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: i32,
    name: String,
    gross_salary: f64,
    department: String,
}

impl Employee {
    /// Create a new employee record.
    ///
    /// No validation is applied: empty names or departments and negative
    /// salaries are accepted as-is.
    pub fn new(id: i32, name: String, gross_salary: f64, department: String) -> Self {
        Employee {
            id,
            name,
            gross_salary,
            department,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gross_salary(&self) -> f64 {
        self.gross_salary
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Gross salary after the flat 10% deduction. Computed on every call.
    pub fn net_salary(&self) -> f64 {
        self.gross_salary * (1.0 - TAX_RATE)
    }

    pub fn set_gross_salary(&mut self, gross_salary: f64) {
        self.gross_salary = gross_salary;
    }

    pub fn set_department(&mut self, department: String) {
        self.department = department;
    }
}

// ============================================================================
// EMPLOYEE REPOSITORY
// ============================================================================

/// Ordered, in-memory collection of employees with unique IDs.
///
/// Iteration order is insertion order. The repository owns its records
/// exclusively; everything is dropped with it.
#[derive(Debug, Default)]
pub struct EmployeeRepository {
    employees: Vec<Employee>,
}

impl EmployeeRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        EmployeeRepository {
            employees: Vec::new(),
        }
    }

    /// Insert an employee, enforcing ID uniqueness.
    ///
    /// Returns `false` and drops the argument if a record with the same ID
    /// is already present; the collection is left unchanged. Otherwise the
    /// record is appended at the end and `true` is returned. The scan is
    /// linear, which is fine at operator-driven sizes.
    pub fn add(&mut self, employee: Employee) -> bool {
        if self.contains(employee.id()) {
            return false;
        }
        self.employees.push(employee);
        true
    }

    /// Remove the employee with the given ID.
    ///
    /// Returns `true` if a record was removed, `false` if no record matched.
    /// The relative order of the remaining records is preserved.
    pub fn remove(&mut self, id: i32) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id() != id);
        self.employees.len() < before
    }

    /// Look up an employee by ID, returning a mutable reference into the
    /// backing storage.
    ///
    /// The reference borrows the repository, so it cannot outlive the next
    /// `add` or `remove`; the borrow checker enforces that invalidation.
    pub fn find_by_id(&mut self, id: i32) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id() == id)
    }

    /// Re-locate the employee with the given ID and apply `f` to it.
    ///
    /// Returns `true` if the record was found and mutated, `false` otherwise.
    pub fn update<F>(&mut self, id: i32, f: F) -> bool
    where
        F: FnOnce(&mut Employee),
    {
        match self.find_by_id(id) {
            Some(employee) => {
                f(employee);
                true
            }
            None => false,
        }
    }

    /// All employees in insertion order.
    pub fn get_all(&self) -> &[Employee] {
        &self.employees
    }

    /// Check whether a record with the given ID is present.
    pub fn contains(&self, id: i32) -> bool {
        self.employees.iter().any(|e| e.id() == id)
    }

    /// Number of stored employees.
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn employee(id: i32) -> Employee {
        Employee::new(id, format!("Employee {}", id), 1000.0, "Eng".to_string())
    }

    #[test]
    fn test_employee_creation() {
        let emp = Employee::new(7, "Ann".to_string(), 1234.5, "Eng".to_string());

        assert_eq!(emp.id(), 7);
        assert_eq!(emp.name(), "Ann");
        assert_eq!(emp.gross_salary(), 1234.5);
        assert_eq!(emp.department(), "Eng");
    }

    #[test]
    fn test_employee_accepts_unvalidated_values() {
        // No bounds or emptiness checks on construction
        let emp = Employee::new(-1, String::new(), -500.0, String::new());

        assert_eq!(emp.id(), -1);
        assert_eq!(emp.name(), "");
        assert_eq!(emp.gross_salary(), -500.0);
        assert_eq!(emp.department(), "");
    }

    #[test]
    fn test_net_salary_is_ninety_percent_of_gross() {
        let emp = Employee::new(1, "Ann".to_string(), 1000.0, "Eng".to_string());
        assert_eq!(emp.net_salary(), 900.0);

        let zero = Employee::new(2, "Bob".to_string(), 0.0, "HR".to_string());
        assert_eq!(zero.net_salary(), 0.0);
    }

    #[test]
    fn test_net_salary_tracks_gross_updates() {
        let mut emp = Employee::new(2, "Bob".to_string(), 1000.0, "HR".to_string());

        emp.set_gross_salary(2000.0);
        assert_eq!(emp.gross_salary(), 2000.0);
        assert_eq!(emp.net_salary(), 1800.0);
    }

    #[test]
    fn test_setters_mutate_in_place() {
        let mut emp = employee(3);

        emp.set_department("Sales".to_string());
        assert_eq!(emp.department(), "Sales");

        emp.set_gross_salary(42.0);
        assert_eq!(emp.gross_salary(), 42.0);

        // Identity is untouched by value updates
        assert_eq!(emp.id(), 3);
    }

    #[test]
    fn test_employee_serializes_all_fields() {
        let emp = Employee::new(9, "Cleo".to_string(), 1500.0, "Ops".to_string());
        let json = serde_json::to_value(&emp).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["name"], "Cleo");
        assert_eq!(json["gross_salary"], 1500.0);
        assert_eq!(json["department"], "Ops");
    }

    #[test]
    fn test_repository_add_and_get_all() {
        let mut repo = EmployeeRepository::new();
        assert!(repo.is_empty());

        assert!(repo.add(employee(1)));
        assert!(repo.add(employee(2)));
        assert_eq!(repo.count(), 2);

        let ids: Vec<i32> = repo.get_all().iter().map(Employee::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_repository_rejects_duplicate_id() {
        let mut repo = EmployeeRepository::new();

        assert!(repo.add(Employee::new(1, "Ann".to_string(), 1000.0, "Eng".to_string())));
        assert!(!repo.add(Employee::new(1, "Bob".to_string(), 500.0, "HR".to_string())));

        // First record survives untouched
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.get_all()[0].name(), "Ann");
        assert_eq!(repo.get_all()[0].gross_salary(), 1000.0);
    }

    #[test]
    fn test_repository_remove_is_idempotent() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(5));

        assert!(repo.remove(5));
        assert!(!repo.remove(5));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_repository_remove_on_empty() {
        let mut repo = EmployeeRepository::new();
        assert!(!repo.remove(99));
    }

    #[test]
    fn test_repository_remove_preserves_order() {
        let mut repo = EmployeeRepository::new();
        for id in [1, 2, 3, 4] {
            repo.add(employee(id));
        }

        assert!(repo.remove(2));

        let ids: Vec<i32> = repo.get_all().iter().map(Employee::id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_repository_find_by_id() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(2));

        let found = repo.find_by_id(2);
        assert!(found.is_some());
        assert_eq!(found.unwrap().id(), 2);

        assert!(repo.find_by_id(404).is_none());
    }

    #[test]
    fn test_repository_find_allows_mutation_through_reference() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(2));

        repo.find_by_id(2).unwrap().set_gross_salary(2000.0);
        assert_eq!(repo.find_by_id(2).unwrap().net_salary(), 1800.0);
    }

    #[test]
    fn test_repository_find_after_remove() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(5));

        assert!(repo.remove(5));
        assert!(repo.find_by_id(5).is_none());
    }

    #[test]
    fn test_repository_update_relocates_and_mutates() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(8));

        let updated = repo.update(8, |e| e.set_department("Legal".to_string()));
        assert!(updated);
        assert_eq!(repo.find_by_id(8).unwrap().department(), "Legal");
    }

    #[test]
    fn test_repository_update_missing_id_is_noop() {
        let mut repo = EmployeeRepository::new();
        repo.add(employee(1));

        assert!(!repo.update(2, |e| e.set_gross_salary(0.0)));
        assert_eq!(repo.find_by_id(1).unwrap().gross_salary(), 1000.0);
    }

    proptest! {
        // No sequence of adds ever produces two records with the same ID,
        // and add reports false exactly for the IDs already present.
        #[test]
        fn prop_add_sequences_keep_ids_unique(ids in proptest::collection::vec(-50i32..50, 0..60)) {
            let mut repo = EmployeeRepository::new();
            let mut seen = HashSet::new();

            for id in ids {
                let accepted = repo.add(employee(id));
                prop_assert_eq!(accepted, seen.insert(id));
            }

            let stored: Vec<i32> = repo.get_all().iter().map(Employee::id).collect();
            let unique: HashSet<i32> = stored.iter().copied().collect();
            prop_assert_eq!(stored.len(), unique.len());
            prop_assert_eq!(unique, seen);
        }

        #[test]
        fn prop_net_salary_is_gross_times_point_nine(gross in 0.0f64..1.0e9) {
            let mut emp = employee(1);
            emp.set_gross_salary(gross);
            prop_assert_eq!(emp.net_salary(), gross * 0.90);
        }
    }
}
