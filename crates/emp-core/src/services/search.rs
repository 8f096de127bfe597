//! In-memory directory search
//!
//! The whole tenant is loaded once and filtered locally.

use crate::domain::Employee;

pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    employees.iter().filter(|e| e.matches_query(query)).collect()
}
