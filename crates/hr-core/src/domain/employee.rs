//! Employee Entity
//!
//! The central record: identity, contact, compensation, performance and the
//! HR history shown on the detail page. Field names follow the backend's
//! camelCase JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::department::Department;
use super::rating::PerformanceRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
    Probation,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::Probation => "Probation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    pub performance_rating: PerformanceRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Performance,
    Collaboration,
    Leadership,
    Technical,
    Communication,
}

impl FeedbackCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackCategory::Performance => "Performance",
            FeedbackCategory::Collaboration => "Collaboration",
            FeedbackCategory::Leadership => "Leadership",
            FeedbackCategory::Technical => "Technical",
            FeedbackCategory::Communication => "Communication",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub from_employee_id: String,
    pub to_employee_id: String,
    pub message: String,
    pub rating: PerformanceRating,
    pub date: NaiveDate,
    pub category: FeedbackCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_id: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
}

/// Employee record (matches backend `/api/employees` payloads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    #[serde(default)]
    pub avatar: Option<String>,
    pub address: Address,
    #[serde(default)]
    pub bio: String,
    pub department: Department,
    pub performance_rating: PerformanceRating,
    pub salary: u32,
    pub hire_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub project_history: Vec<Project>,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter avatar fallback
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Mean of the feedback ratings, if there is any feedback
    pub fn average_feedback_rating(&self) -> Option<f64> {
        if self.feedback.is_empty() {
            return None;
        }
        let sum: u32 = self.feedback.iter().map(|f| f.rating.value() as u32).sum();
        Some(sum as f64 / self.feedback.len() as f64)
    }
}
