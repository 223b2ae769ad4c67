//! DummyJSON -> Employee Transformation
//!
//! DummyJSON only knows names, contact details and an address. Everything HR
//! specific (department, salary, rating, skills, history) is synthesized from
//! a seeded random source, so one seed and one "today" always produce the
//! same directory. Treat the output as fixture data, not as facts.

use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Address, Certification, Department, DomainError, EmergencyContact, Employee, EmployeeStatus,
    Feedback, FeedbackCategory, PerformanceRating, Project, ProjectStatus,
};

// ========================
// DummyJSON Wire Types
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DummyAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// One entry of `GET /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DummyUser {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub phone: String,
    pub image: String,
    pub address: DummyAddress,
}

/// `GET /users?limit=N` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DummyUsersResponse {
    #[serde(default)]
    pub users: Vec<DummyUser>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

// ========================
// Rating Band
// ========================

/// Which ratings the synthesizer hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    /// Uniform over 1..=5
    #[default]
    Full,
    /// Uniform over 3..=5
    Upper,
}

impl RatingBand {
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            RatingBand::Full => 1..=5,
            RatingBand::Upper => 3..=5,
        }
    }
}

impl FromStr for RatingBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(RatingBand::Full),
            "upper" => Ok(RatingBand::Upper),
            other => Err(DomainError::InvalidInput(format!("rating band '{}'", other))),
        }
    }
}

// ========================
// Templates
// ========================

struct ProjectTemplate {
    name: &'static str,
    description: &'static str,
    role: &'static str,
    technologies: &'static [&'static str],
}

const PROJECT_TEMPLATES: &[ProjectTemplate] = &[
    ProjectTemplate {
        name: "Digital Transformation Initiative",
        description: "Led the digital transformation project across multiple departments, resulting in 30% efficiency improvement",
        role: "Project Lead",
        technologies: &["Agile", "Jira", "Confluence", "Slack", "Azure DevOps"],
    },
    ProjectTemplate {
        name: "Customer Experience Enhancement",
        description: "Improved customer satisfaction scores by 25% through process optimization and user experience improvements",
        role: "Process Analyst",
        technologies: &["Survey Tools", "Analytics", "CRM", "User Research", "A/B Testing"],
    },
    ProjectTemplate {
        name: "System Migration Project",
        description: "Migrated legacy systems to modern cloud infrastructure, reducing operational costs by 40%",
        role: "Technical Lead",
        technologies: &["AWS", "Docker", "Kubernetes", "Terraform", "CI/CD"],
    },
    ProjectTemplate {
        name: "Marketing Campaign Optimization",
        description: "Increased conversion rates by 40% through targeted campaigns and data-driven insights",
        role: "Campaign Manager",
        technologies: &["Google Ads", "Facebook Ads", "Analytics", "A/B Testing", "Marketing Automation"],
    },
    ProjectTemplate {
        name: "Employee Training Platform",
        description: "Built a training platform used by 500+ employees",
        role: "Product Manager",
        technologies: &["React", "Node.js", "MongoDB", "AWS", "Learning Management System"],
    },
    ProjectTemplate {
        name: "Data Analytics Dashboard",
        description: "Built a real-time analytics dashboard for the executive leadership team",
        role: "Data Analyst",
        technologies: &["Python", "SQL", "Tableau", "Power BI", "Apache Spark"],
    },
    ProjectTemplate {
        name: "Security Infrastructure Upgrade",
        description: "Rolled out multi-factor authentication and advanced threat detection company-wide",
        role: "Security Engineer",
        technologies: &["SIEM", "Firewall", "VPN", "Identity Management", "Penetration Testing"],
    },
    ProjectTemplate {
        name: "Mobile App Development",
        description: "Led development of a customer-facing mobile application with 10,000+ downloads",
        role: "Mobile Developer",
        technologies: &["React Native", "TypeScript", "Firebase", "App Store", "Google Play"],
    },
];

const FEEDBACK_TEMPLATES: &[(&str, FeedbackCategory)] = &[
    ("Excellent work ethic and consistently delivers high-quality results on time.", FeedbackCategory::Performance),
    ("Great team player and always willing to help colleagues with their projects.", FeedbackCategory::Collaboration),
    ("Shows strong leadership potential and takes initiative on challenging projects.", FeedbackCategory::Leadership),
    ("Demonstrates excellent technical skills and creative problem-solving abilities.", FeedbackCategory::Technical),
    ("Communicates effectively with stakeholders and team members across departments.", FeedbackCategory::Communication),
    ("Adapts quickly to new technologies and processes with minimal guidance.", FeedbackCategory::Technical),
    ("Maintains a positive attitude even during challenging project phases.", FeedbackCategory::Performance),
    ("Provides valuable insights and suggestions that improve team processes.", FeedbackCategory::Leadership),
    ("Reliable and dependable team member who can be counted on to deliver.", FeedbackCategory::Performance),
    ("Shows excellent attention to detail and quality in all deliverables.", FeedbackCategory::Technical),
];

/// (name, issuer, category)
const CERTIFICATION_TEMPLATES: &[(&str, &str, &str)] = &[
    ("PMP Certification", "Project Management Institute", "Project Management"),
    ("AWS Certified Solutions Architect", "Amazon Web Services", "Cloud Computing"),
    ("Google Ads Certification", "Google", "Digital Marketing"),
    ("Salesforce Administrator", "Salesforce", "CRM"),
    ("SHRM-CP", "Society for Human Resource Management", "Human Resources"),
    ("CISSP", "ISC2", "Information Security"),
    ("Microsoft Azure Administrator", "Microsoft", "Cloud Computing"),
    ("Google Analytics Individual Qualification", "Google", "Analytics"),
    ("Certified Scrum Master", "Scrum Alliance", "Agile"),
    ("ITIL Foundation", "AXELOS", "IT Service Management"),
    ("Six Sigma Green Belt", "ASQ", "Process Improvement"),
    ("HubSpot Marketing Certification", "HubSpot", "Marketing"),
];

/// Hire dates fall within this many days before "today"
pub const HIRE_WINDOW_DAYS: i64 = 1825;

// ========================
// Synthesizer
// ========================

/// Seeded generator for the HR fields DummyJSON lacks
#[derive(Debug, Clone)]
pub struct Synthesizer {
    rng: StdRng,
    today: NaiveDate,
    rating_band: RatingBand,
}

impl Synthesizer {
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
            rating_band: RatingBand::default(),
        }
    }

    pub fn with_rating_band(mut self, rating_band: RatingBand) -> Self {
        self.rating_band = rating_band;
        self
    }

    /// Map one DummyJSON user into an employee record
    pub fn employee(&mut self, user: &DummyUser) -> Employee {
        let department = *Department::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Department::Engineering);
        let performance_rating = self.rating(self.rating_band.range());
        let hire_date = self.days_ago(HIRE_WINDOW_DAYS);

        let multiplier: f64 = self.rng.gen_range(1.0..=1.5);
        let salary = (department.base_salary() as f64 * multiplier).round() as u32;

        let pool = department.skill_pool();
        let skill_count = self.rng.gen_range(2..=5).min(pool.len());
        let skills = pool
            .choose_multiple(&mut self.rng, skill_count)
            .map(|s| s.to_string())
            .collect();

        let id = user.id.to_string();
        let years = self.rng.gen_range(1..=10);
        let manager_id = self.rng.gen_bool(0.3).then(|| (user.id + 1).to_string());
        let project_history = self.project_history();
        let feedback = self.feedback(&id);
        let certifications = self.certifications();

        Employee {
            bio: format!(
                "{} {} is a {} professional with {} years of experience.",
                user.first_name, user.last_name, department, years
            ),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            age: user.age,
            avatar: Some(user.image.clone()).filter(|url| !url.is_empty()),
            address: Address {
                street: user.address.address.clone(),
                city: user.address.city.clone(),
                state: user.address.state.clone(),
                zip_code: user.address.postal_code.clone(),
                country: "USA".to_string(),
            },
            department,
            performance_rating,
            salary,
            hire_date,
            manager_id,
            status: EmployeeStatus::Active,
            skills,
            project_history,
            feedback,
            certifications,
            emergency_contact: EmergencyContact {
                name: format!("{} {} Sr.", user.first_name, user.last_name),
                relationship: "Parent".to_string(),
                phone: user.phone.clone(),
                email: user.email.clone(),
            },
            id,
        }
    }

    pub fn employees(&mut self, users: &[DummyUser]) -> Vec<Employee> {
        users.iter().map(|user| self.employee(user)).collect()
    }

    fn project_history(&mut self) -> Vec<Project> {
        let count = self.rng.gen_range(2..=5);
        let picked: Vec<&ProjectTemplate> = PROJECT_TEMPLATES
            .choose_multiple(&mut self.rng, count)
            .collect();

        picked
            .into_iter()
            .map(|template| {
                let start_date = self.days_ago(365);
                let duration = self.rng.gen_range(30..=210);
                let end_date = self
                    .rng
                    .gen_bool(0.8)
                    .then(|| start_date + Duration::days(duration));
                let status = if self.rng.gen_bool(0.3) {
                    ProjectStatus::Completed
                } else {
                    ProjectStatus::InProgress
                };
                Project {
                    id: self.short_id(),
                    name: template.name.to_string(),
                    description: template.description.to_string(),
                    start_date,
                    end_date,
                    role: template.role.to_string(),
                    technologies: template.technologies.iter().map(|t| t.to_string()).collect(),
                    status,
                    performance_rating: self.rating(3..=5),
                }
            })
            .collect()
    }

    fn feedback(&mut self, employee_id: &str) -> Vec<Feedback> {
        let count = self.rng.gen_range(2..=5);
        let picked: Vec<&(&str, FeedbackCategory)> = FEEDBACK_TEMPLATES
            .choose_multiple(&mut self.rng, count)
            .collect();

        picked
            .into_iter()
            .map(|(message, category)| Feedback {
                id: self.short_id(),
                from_employee_id: format!("emp-{}", self.rng.gen_range(1..=100)),
                to_employee_id: employee_id.to_string(),
                message: message.to_string(),
                rating: self.rating(4..=5),
                date: self.days_ago(90),
                category: *category,
            })
            .collect()
    }

    fn certifications(&mut self) -> Vec<Certification> {
        let count = self.rng.gen_range(1..=3);
        let picked: Vec<&(&str, &str, &str)> = CERTIFICATION_TEMPLATES
            .choose_multiple(&mut self.rng, count)
            .collect();

        picked
            .into_iter()
            .map(|(name, issuer, category)| {
                let credential: String = self.alphanumeric(8).to_ascii_uppercase();
                Certification {
                    id: self.short_id(),
                    name: name.to_string(),
                    issuer: issuer.to_string(),
                    issue_date: self.days_ago(365),
                    credential_id: format!("CERT-{}", credential),
                    category: category.to_string(),
                }
            })
            .collect()
    }

    fn rating(&mut self, range: RangeInclusive<u8>) -> PerformanceRating {
        let value = self.rng.gen_range(range);
        PerformanceRating::new(value).unwrap_or(PerformanceRating::ALL_DESC[2])
    }

    /// A date in `(today - max_days, today]`
    fn days_ago(&mut self, max_days: i64) -> NaiveDate {
        let back = self.rng.gen_range(0..max_days);
        self.today - Duration::days(back)
    }

    fn short_id(&mut self) -> String {
        self.alphanumeric(9).to_ascii_lowercase()
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn user(id: u32) -> DummyUser {
        DummyUser {
            id,
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            email: "emily.johnson@x.dummyjson.com".to_string(),
            age: 28,
            phone: "+81 965-431-3024".to_string(),
            image: "https://dummyjson.com/icon/emilys/128".to_string(),
            address: DummyAddress {
                address: "626 Main Street".to_string(),
                city: "Phoenix".to_string(),
                state: "Mississippi".to_string(),
                postal_code: "29112".to_string(),
            },
        }
    }

    #[test]
    fn test_same_seed_same_employee() {
        let a = Synthesizer::new(42, today()).employee(&user(1));
        let b = Synthesizer::new(42, today()).employee(&user(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_copied_fields() {
        let emp = Synthesizer::new(1, today()).employee(&user(5));
        assert_eq!(emp.id, "5");
        assert_eq!(emp.full_name(), "Emily Johnson");
        assert_eq!(emp.address.zip_code, "29112");
        assert_eq!(emp.address.country, "USA");
        assert_eq!(emp.emergency_contact.name, "Emily Johnson Sr.");
        assert_eq!(emp.emergency_contact.relationship, "Parent");
        assert_eq!(emp.status, EmployeeStatus::Active);
        assert!(emp.bio.contains(emp.department.as_str()));
    }

    #[test]
    fn test_synthesized_fields_stay_in_bounds() {
        let mut synth = Synthesizer::new(7, today());
        for id in 1..=200 {
            let emp = synth.employee(&user(id));
            let base = emp.department.base_salary();
            assert!(emp.salary >= base && emp.salary as f64 <= base as f64 * 1.5 + 0.5);

            let pool = emp.department.skill_pool();
            assert!(emp.skills.len() >= 2 && emp.skills.len() <= 5);
            assert!(emp.skills.iter().all(|s| pool.contains(&s.as_str())));

            let days_back = (today() - emp.hire_date).num_days();
            assert!((0..HIRE_WINDOW_DAYS).contains(&days_back));

            assert!((2..=5).contains(&emp.project_history.len()));
            assert!((2..=5).contains(&emp.feedback.len()));
            assert!((1..=3).contains(&emp.certifications.len()));
            assert!(emp.feedback.iter().all(|f| f.rating.value() >= 4 && f.to_employee_id == emp.id));
            assert!(emp.certifications.iter().all(|c| c.credential_id.starts_with("CERT-") && c.credential_id.len() == 13));
            if let Some(manager) = &emp.manager_id {
                assert_eq!(manager, &(id + 1).to_string());
            }
        }
    }

    #[test]
    fn test_upper_rating_band() {
        let mut synth = Synthesizer::new(3, today()).with_rating_band(RatingBand::Upper);
        for id in 1..=100 {
            assert!(synth.employee(&user(id)).performance_rating.value() >= 3);
        }
    }

    #[test]
    fn test_full_band_reaches_every_rating() {
        let mut synth = Synthesizer::new(11, today());
        let mut seen = [false; 5];
        for id in 1..=200 {
            let rating = synth.employee(&user(id)).performance_rating.value();
            seen[(rating - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_missing_address_fails_at_decode() {
        let raw = r#"{"id":1,"firstName":"A","lastName":"B","email":"a@b.c","age":30,
                      "phone":"1","image":"","address":{"city":"X"}}"#;
        assert!(serde_json::from_str::<DummyUser>(raw).is_err());
    }

    #[test]
    fn test_rating_band_parse() {
        assert_eq!("Upper".parse::<RatingBand>().unwrap(), RatingBand::Upper);
        assert!("middle".parse::<RatingBand>().is_err());
    }
}
