//! Directory Queries
//!
//! Search/filter criteria and the optional sort applied after filtering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::{Department, Employee, PerformanceRating};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Department,
    PerformanceRating,
    HireDate,
    Salary,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Department,
        SortField::PerformanceRating,
        SortField::HireDate,
        SortField::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Department => "department",
            SortField::PerformanceRating => "performanceRating",
            SortField::HireDate => "hireDate",
            SortField::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Department => "Department",
            SortField::PerformanceRating => "Performance Rating",
            SortField::HireDate => "Hire Date",
            SortField::Salary => "Salary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        SortField::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self { field, direction: SortDirection::Asc }
    }

    pub fn desc(field: SortField) -> Self {
        Self { field, direction: SortDirection::Desc }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a
                .full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase()),
            SortField::Department => a.department.as_str().cmp(b.department.as_str()),
            SortField::PerformanceRating => a.performance_rating.cmp(&b.performance_rating),
            SortField::HireDate => a.hire_date.cmp(&b.hire_date),
            SortField::Salary => a.salary.cmp(&b.salary),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Conjunctive search/filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub department: Option<Department>,
    pub performance_rating: Option<PerformanceRating>,
    pub sort: Option<SortOrder>,
}

impl FilterCriteria {
    /// Whether any predicate narrows the collection (sorting alone does not)
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.department.is_some()
            || self.performance_rating.is_some()
    }

    /// Free-text match: case-insensitive substring of full name, email,
    /// department name or any skill. A blank term matches everything.
    pub fn matches_term(&self, employee: &Employee) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        employee.full_name().to_lowercase().contains(&term)
            || employee.email.to_lowercase().contains(&term)
            || employee.department.as_str().to_lowercase().contains(&term)
            || employee
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&term))
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_term(employee)
            && self.department.map_or(true, |d| employee.department == d)
            && self
                .performance_rating
                .map_or(true, |r| employee.performance_rating == r)
    }

    /// Filter (term, then department, then rating) and apply the sort.
    /// The sort is stable, so ties keep collection order.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let mut result: Vec<Employee> = employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        if let Some(order) = self.sort {
            result.sort_by(|a, b| order.compare(a, b));
        }
        result
    }
}
