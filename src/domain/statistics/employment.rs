use super::{HeadlineMetric, PageHeading};
use crate::domain::format::Trend;

pub const HEADING: PageHeading = PageHeading {
    title: "Employment Data",
    subtitle: "Labor market statistics, unemployment rates, and workforce analytics",
};

/// Headcounts in millions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyEmployment {
    pub month: &'static str,
    pub unemployment_rate: f64,
    pub labor_force: f64,
    pub employed: f64,
    pub unemployed: f64,
    pub participation_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorEmployment {
    pub sector: &'static str,
    pub employed: f64,
    pub percentage: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeGroup {
    pub age_group: &'static str,
    pub unemployment_rate: f64,
    pub labor_force: f64,
    pub employed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationLevel {
    pub level: &'static str,
    pub unemployment_rate: f64,
    pub employed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalEmployment {
    pub region: &'static str,
    pub unemployment_rate: f64,
    pub employed: f64,
    pub labor_force: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobVacancy {
    pub sector: &'static str,
    pub vacancies: u64,
    pub fill_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillDemand {
    pub skill: &'static str,
    pub demand: f64,
    pub growth: f64,
}

pub const KEY_METRICS: &[HeadlineMetric] = &[
    HeadlineMetric::new("Unemployment Rate", "3.0%", "-0.1%", Trend::Down, "MoM"),
    HeadlineMetric::new("Labor Force", "16.7M", "+1.2%", Trend::Up, "MoM"),
    HeadlineMetric::new("Employment Rate", "97.0%", "+0.1%", Trend::Up, "MoM"),
    HeadlineMetric::new("Participation Rate", "70.9%", "+0.2%", Trend::Up, "MoM"),
];

pub const MONTHLY: &[MonthlyEmployment] = &[
    MonthlyEmployment { month: "Jan 2024", unemployment_rate: 3.5, labor_force: 16.2, employed: 15.6, unemployed: 0.57, participation_rate: 69.8 },
    MonthlyEmployment { month: "Feb 2024", unemployment_rate: 3.4, labor_force: 16.3, employed: 15.7, unemployed: 0.55, participation_rate: 70.1 },
    MonthlyEmployment { month: "Mar 2024", unemployment_rate: 3.3, labor_force: 16.4, employed: 15.9, unemployed: 0.54, participation_rate: 70.3 },
    MonthlyEmployment { month: "Apr 2024", unemployment_rate: 3.2, labor_force: 16.5, employed: 16.0, unemployed: 0.53, participation_rate: 70.5 },
    MonthlyEmployment { month: "May 2024", unemployment_rate: 3.1, labor_force: 16.6, employed: 16.1, unemployed: 0.51, participation_rate: 70.7 },
    MonthlyEmployment { month: "Jun 2024", unemployment_rate: 3.0, labor_force: 16.7, employed: 16.2, unemployed: 0.50, participation_rate: 70.9 },
];

pub const SECTORS: &[SectorEmployment] = &[
    SectorEmployment { sector: "Services", employed: 9.8, percentage: 60.5, growth: 2.8 },
    SectorEmployment { sector: "Manufacturing", employed: 2.9, percentage: 17.9, growth: 1.9 },
    SectorEmployment { sector: "Agriculture", employed: 1.8, percentage: 11.1, growth: -0.5 },
    SectorEmployment { sector: "Construction", employed: 1.3, percentage: 8.0, growth: 3.2 },
    SectorEmployment { sector: "Mining", employed: 0.4, percentage: 2.5, growth: 1.1 },
];

pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup { age_group: "15-24", unemployment_rate: 8.9, labor_force: 2.1, employed: 1.9 },
    AgeGroup { age_group: "25-34", unemployment_rate: 2.8, labor_force: 4.2, employed: 4.1 },
    AgeGroup { age_group: "35-44", unemployment_rate: 2.1, labor_force: 4.8, employed: 4.7 },
    AgeGroup { age_group: "45-54", unemployment_rate: 1.9, labor_force: 3.9, employed: 3.8 },
    AgeGroup { age_group: "55-64", unemployment_rate: 2.3, labor_force: 1.7, employed: 1.7 },
];

pub const EDUCATION: &[EducationLevel] = &[
    EducationLevel { level: "No Formal Education", unemployment_rate: 2.1, employed: 0.8 },
    EducationLevel { level: "Primary", unemployment_rate: 2.8, employed: 2.1 },
    EducationLevel { level: "Secondary", unemployment_rate: 3.2, employed: 7.8 },
    EducationLevel { level: "Tertiary", unemployment_rate: 3.1, employed: 5.5 },
];

pub const REGIONS: &[RegionalEmployment] = &[
    RegionalEmployment { region: "Klang Valley", unemployment_rate: 2.8, employed: 4.2, labor_force: 4.3 },
    RegionalEmployment { region: "Johor", unemployment_rate: 2.9, employed: 1.8, labor_force: 1.9 },
    RegionalEmployment { region: "Penang", unemployment_rate: 2.7, employed: 0.9, labor_force: 0.9 },
    RegionalEmployment { region: "Perak", unemployment_rate: 3.1, employed: 1.1, labor_force: 1.1 },
    RegionalEmployment { region: "Sarawak", unemployment_rate: 3.4, employed: 1.3, labor_force: 1.3 },
    RegionalEmployment { region: "Sabah", unemployment_rate: 4.1, employed: 1.7, labor_force: 1.8 },
];

pub const VACANCIES: &[JobVacancy] = &[
    JobVacancy { sector: "Services", vacancies: 145_000, fill_rate: 78.2 },
    JobVacancy { sector: "Manufacturing", vacancies: 89_000, fill_rate: 82.5 },
    JobVacancy { sector: "Construction", vacancies: 67_000, fill_rate: 71.3 },
    JobVacancy { sector: "Agriculture", vacancies: 34_000, fill_rate: 65.8 },
    JobVacancy { sector: "Mining", vacancies: 12_000, fill_rate: 85.1 },
];

pub const SKILLS: &[SkillDemand] = &[
    SkillDemand { skill: "Digital Literacy", demand: 92.0, growth: 15.2 },
    SkillDemand { skill: "Data Analysis", demand: 88.0, growth: 22.8 },
    SkillDemand { skill: "Customer Service", demand: 85.0, growth: 8.1 },
    SkillDemand { skill: "Project Management", demand: 82.0, growth: 12.5 },
    SkillDemand { skill: "Technical Skills", demand: 79.0, growth: 18.7 },
    SkillDemand { skill: "Communication", demand: 76.0, growth: 6.3 },
];

/// Sum of open vacancies across sectors.
pub fn total_vacancies() -> u64 {
    VACANCIES.iter().map(|v| v.vacancies).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancies_add_up() {
        assert_eq!(total_vacancies(), 347_000);
    }

    #[test]
    fn unemployment_falls_every_month() {
        assert!(MONTHLY.windows(2).all(|w| w[1].unemployment_rate < w[0].unemployment_rate));
    }
}
