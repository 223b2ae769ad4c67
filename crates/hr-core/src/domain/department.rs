//! Department Vocabulary
//!
//! The ten fixed departments, with the salary base and skill pool the
//! transformation layer draws from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Department an employee belongs to.
///
/// Serialized as its display name ("Customer Support", not "customer_support")
/// so backend payloads and stored filters read the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
    Sales,
    Finance,
    Operations,
    Legal,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Product,
}

impl Department {
    /// All departments in dropdown order
    pub const ALL: [Department; 10] = [
        Department::Hr,
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Finance,
        Department::Operations,
        Department::Legal,
        Department::It,
        Department::CustomerSupport,
        Department::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Legal => "Legal",
            Department::It => "IT",
            Department::CustomerSupport => "Customer Support",
            Department::Product => "Product",
        }
    }

    /// Annual salary before the experience multiplier
    pub fn base_salary(&self) -> u32 {
        match self {
            Department::Engineering => 80_000,
            Department::Marketing => 65_000,
            Department::Sales => 70_000,
            Department::Finance => 75_000,
            Department::Hr => 60_000,
            Department::Operations => 65_000,
            Department::Legal => 85_000,
            Department::It => 75_000,
            Department::CustomerSupport => 55_000,
            Department::Product => 90_000,
        }
    }

    pub fn skill_pool(&self) -> &'static [&'static str] {
        match self {
            Department::Engineering => &["JavaScript", "React", "Node.js", "TypeScript", "Python", "AWS"],
            Department::Marketing => &["Digital Marketing", "SEO", "Google Ads", "Social Media", "Content Creation"],
            Department::Sales => &["Sales Strategy", "CRM", "Negotiation", "Lead Generation", "Client Relations"],
            Department::Finance => &["Financial Analysis", "Excel", "QuickBooks", "Budgeting", "Risk Management"],
            Department::Hr => &["Recruitment", "Employee Relations", "HRIS", "Compliance", "Training"],
            Department::Operations => &["Process Improvement", "Project Management", "Supply Chain", "Quality Control"],
            Department::Legal => &["Contract Law", "Compliance", "Legal Research", "Risk Assessment"],
            Department::It => &["System Administration", "Network Security", "Cloud Computing", "Technical Support"],
            Department::CustomerSupport => &["Customer Service", "Problem Solving", "Communication", "CRM Systems"],
            Department::Product => &["Product Strategy", "User Research", "Data Analysis", "Agile", "Design Thinking"],
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    /// Accepts the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownDepartment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_round_trip() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>(), Ok(dept));
        }
        assert_eq!("customer support".parse::<Department>(), Ok(Department::CustomerSupport));
        assert!("Janitorial".parse::<Department>().is_err());
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Department::CustomerSupport).unwrap();
        assert_eq!(json, "\"Customer Support\"");
        let back: Department = serde_json::from_str("\"IT\"").unwrap();
        assert_eq!(back, Department::It);
    }

    #[test]
    fn test_every_department_has_skills() {
        for dept in Department::ALL {
            assert!(dept.skill_pool().len() >= 4, "{dept} pool too small");
            assert!(dept.base_salary() > 0);
        }
    }
}
