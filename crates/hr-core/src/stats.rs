//! Workforce Analytics
//!
//! Aggregates for the dashboard summary and the analytics page.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Department, Employee, PerformanceRating};

pub const AGE_RANGES: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];
pub const SALARY_RANGES: [&str; 6] = ["$0-$40k", "$40k-$60k", "$60k-$80k", "$80k-$100k", "$100k-$120k", "$120k+"];

const TOP_PERFORMER_LIMIT: usize = 5;

pub fn age_range(age: u32) -> &'static str {
    match age {
        0..=24 => AGE_RANGES[0],
        25..=34 => AGE_RANGES[1],
        35..=44 => AGE_RANGES[2],
        45..=54 => AGE_RANGES[3],
        _ => AGE_RANGES[4],
    }
}

pub fn salary_range(salary: u32) -> &'static str {
    match salary {
        0..=39_999 => SALARY_RANGES[0],
        40_000..=59_999 => SALARY_RANGES[1],
        60_000..=79_999 => SALARY_RANGES[2],
        80_000..=99_999 => SALARY_RANGES[3],
        100_000..=119_999 => SALARY_RANGES[4],
        _ => SALARY_RANGES[5],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: Department,
    pub count: usize,
    /// 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingShare {
    pub rating: PerformanceRating,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalarySummary {
    pub average: f64,
    /// Element at `len / 2` of the sorted salaries
    pub median: u32,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCount {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerformanceInsights {
    /// Rated 4 or 5
    pub high: usize,
    pub average: usize,
    /// Rated 1 or 2
    pub low: usize,
    /// Rounded share of high performers, 0-100
    pub high_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkforceStats {
    pub total_employees: usize,
    /// Bookmarks that point at a loaded employee
    pub total_bookmarked: usize,
    /// One decimal place
    pub average_rating: f64,
    pub average_salary: u32,
    pub average_age: f64,
    pub active_departments: usize,
    /// Largest first, ties by name
    pub department_breakdown: Vec<DepartmentShare>,
    /// Ascending rating
    pub rating_breakdown: Vec<RatingShare>,
    pub salary: SalarySummary,
    pub age_ranges: Vec<RangeCount>,
    pub salary_ranges: Vec<RangeCount>,
    pub top_performers: Vec<Employee>,
    pub insights: PerformanceInsights,
}

impl WorkforceStats {
    pub fn compute(employees: &[Employee], bookmarked_ids: &BTreeSet<String>) -> Self {
        let total = employees.len();
        if total == 0 {
            return Self::default();
        }
        let share = |count: usize| count as f64 / total as f64 * 100.0;

        let mut by_department: BTreeMap<&'static str, (Department, usize)> = BTreeMap::new();
        let mut by_rating: BTreeMap<PerformanceRating, usize> = BTreeMap::new();
        let mut age_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut salary_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for e in employees {
            by_department.entry(e.department.as_str()).or_insert((e.department, 0)).1 += 1;
            *by_rating.entry(e.performance_rating).or_default() += 1;
            *age_counts.entry(age_range(e.age)).or_default() += 1;
            *salary_counts.entry(salary_range(e.salary)).or_default() += 1;
        }

        let mut department_breakdown: Vec<DepartmentShare> = by_department
            .into_values()
            .map(|(department, count)| DepartmentShare {
                department,
                count,
                percentage: share(count),
            })
            .collect();
        // BTreeMap iteration already gives name order; the stable sort keeps it for ties
        department_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        let rating_breakdown = by_rating
            .into_iter()
            .map(|(rating, count)| RatingShare {
                rating,
                count,
                percentage: share(count),
            })
            .collect();

        let mut salaries: Vec<u32> = employees.iter().map(|e| e.salary).collect();
        salaries.sort_unstable();
        let salary_sum: u64 = salaries.iter().map(|s| *s as u64).sum();
        let salary = SalarySummary {
            average: salary_sum as f64 / total as f64,
            median: salaries[total / 2],
            min: salaries[0],
            max: salaries[total - 1],
        };

        let rating_sum: u32 = employees.iter().map(|e| e.performance_rating.value() as u32).sum();
        let age_sum: u64 = employees.iter().map(|e| e.age as u64).sum();

        let mut top_performers: Vec<Employee> = employees
            .iter()
            .filter(|e| e.performance_rating.value() >= 4)
            .cloned()
            .collect();
        top_performers.sort_by(|a, b| b.performance_rating.cmp(&a.performance_rating));
        top_performers.truncate(TOP_PERFORMER_LIMIT);

        let high = employees.iter().filter(|e| e.performance_rating.value() >= 4).count();
        let low = employees.iter().filter(|e| e.performance_rating.value() <= 2).count();

        Self {
            total_employees: total,
            total_bookmarked: employees
                .iter()
                .filter(|e| bookmarked_ids.contains(&e.id))
                .count(),
            average_rating: (rating_sum as f64 / total as f64 * 10.0).round() / 10.0,
            average_salary: salary.average.round() as u32,
            average_age: age_sum as f64 / total as f64,
            active_departments: department_breakdown.len(),
            department_breakdown,
            rating_breakdown,
            salary,
            age_ranges: AGE_RANGES
                .iter()
                .map(|label| RangeCount { label, count: age_counts.get(label).copied().unwrap_or(0) })
                .collect(),
            salary_ranges: SALARY_RANGES
                .iter()
                .map(|label| RangeCount { label, count: salary_counts.get(label).copied().unwrap_or(0) })
                .collect(),
            top_performers,
            insights: PerformanceInsights {
                high,
                average: total - high - low,
                low,
                high_percentage: (share(high)).round() as u32,
            },
        }
    }

    pub fn largest_department(&self) -> Option<&DepartmentShare> {
        self.department_breakdown.first()
    }

    pub fn department_share(&self, department: Department) -> Option<&DepartmentShare> {
        self.department_breakdown
            .iter()
            .find(|s| s.department == department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{employee, staff};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_zeroed() {
        let stats = WorkforceStats::compute(&[], &BTreeSet::new());
        assert_eq!(stats, WorkforceStats::default());
        assert!(stats.largest_department().is_none());
    }

    #[test]
    fn test_department_percentages() {
        let mut employees = staff(1, 8, Department::Engineering, 4);
        employees.extend(staff(9, 12, Department::Marketing, 3));
        let stats = WorkforceStats::compute(&employees, &BTreeSet::new());

        assert_eq!(stats.total_employees, 20);
        assert_eq!(stats.active_departments, 2);
        let engineering = stats.department_share(Department::Engineering).unwrap();
        assert_eq!(engineering.count, 8);
        assert!((engineering.percentage - 40.0).abs() < 1e-9);
        assert_eq!(stats.largest_department().unwrap().department, Department::Marketing);
    }

    #[test]
    fn test_ratings_salaries_and_insights() {
        let mut employees = vec![
            employee("1", Department::Sales, 5),
            employee("2", Department::Sales, 4),
            employee("3", Department::Sales, 3),
            employee("4", Department::Sales, 1),
        ];
        for (e, salary) in employees.iter_mut().zip([30_000, 50_000, 70_000, 130_000]) {
            e.salary = salary;
        }
        employees[3].age = 60;
        let bookmarks: BTreeSet<String> = ["2", "99"].into_iter().map(String::from).collect();
        let stats = WorkforceStats::compute(&employees, &bookmarks);

        assert_eq!(stats.total_bookmarked, 1);
        assert_eq!(stats.average_rating, 3.3);
        assert_eq!(stats.average_salary, 70_000);
        assert_eq!(stats.salary.median, 70_000);
        assert_eq!((stats.salary.min, stats.salary.max), (30_000, 130_000));
        assert_eq!(
            stats.rating_breakdown.iter().map(|r| (r.rating.value(), r.count)).collect::<Vec<_>>(),
            vec![(1, 1), (3, 1), (4, 1), (5, 1)]
        );
        assert_eq!(stats.insights, PerformanceInsights { high: 2, average: 1, low: 1, high_percentage: 50 });
        let top: Vec<&str> = stats.top_performers.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(top, vec!["1", "2"]);

        let salary_counts: Vec<usize> = stats.salary_ranges.iter().map(|r| r.count).collect();
        assert_eq!(salary_counts, vec![1, 1, 1, 0, 0, 1]);
        let age_counts: Vec<usize> = stats.age_ranges.iter().map(|r| r.count).collect();
        assert_eq!(age_counts, vec![0, 3, 0, 0, 1]);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(age_range(24), "18-24");
        assert_eq!(age_range(25), "25-34");
        assert_eq!(age_range(55), "55+");
        assert_eq!(salary_range(39_999), "$0-$40k");
        assert_eq!(salary_range(120_000), "$120k+");
    }
}
