//! Hand-built records for unit tests

use chrono::NaiveDate;

use crate::domain::{Address, Department, EmergencyContact, Employee, EmployeeStatus, PerformanceRating};

pub fn employee(id: &str, department: Department, rating: u8) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: format!("user{}@example.com", id),
        phone: "+1 555-0100".to_string(),
        age: 30,
        avatar: None,
        address: Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "USA".to_string(),
        },
        bio: String::new(),
        department,
        performance_rating: PerformanceRating::new(rating).unwrap(),
        salary: department.base_salary(),
        hire_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        manager_id: None,
        status: EmployeeStatus::Active,
        skills: Vec::new(),
        project_history: Vec::new(),
        feedback: Vec::new(),
        certifications: Vec::new(),
        emergency_contact: EmergencyContact {
            name: "Contact".to_string(),
            relationship: "Parent".to_string(),
            phone: "+1 555-0101".to_string(),
            email: "contact@example.com".to_string(),
        },
    }
}

/// `count` employees with consecutive ids starting at `start`, all in one department
pub fn staff(start: usize, count: usize, department: Department, rating: u8) -> Vec<Employee> {
    (start..start + count)
        .map(|i| employee(&i.to_string(), department, rating))
        .collect()
}
