// Entity Models
//
// Each entity lives with its registry: the record type next to the
// in-memory collection that owns and looks up records of that type.

pub mod employee;

pub use employee::{Employee, EmployeeRepository, TAX_RATE};
