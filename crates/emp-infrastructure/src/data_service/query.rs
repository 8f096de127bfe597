//! Table query builder using the data service's filter syntax
//!
//! `TableQuery::new("employees").eq("tenant_id", 7).order("id", true)`
//! becomes `employees?tenant_id=eq.7&order=id.asc`.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    table: String,
    params: Vec<(String, String)>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// `*` in the pattern matches any run of characters.
    pub fn like(mut self, column: &str, pattern: &str) -> Self {
        self.params.push((column.to_string(), format!("like.{}", pattern)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
