use leptos::*;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::chart::{Series, series_color};
use crate::domain::format::{millions, thousands};
use crate::domain::statistics::column_max;
use crate::domain::statistics::employment::{
    AGE_GROUPS, EDUCATION, HEADING, KEY_METRICS, MONTHLY, REGIONS, SECTORS, SKILLS, VACANCIES,
    total_vacancies,
};
use crate::presentation::components::{
    BarChart, Card, DataTable, DonutChart, GrowthBadge, LineChart, MetricGrid, PageHeader, ShareRow,
    TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumIter)]
pub enum EmploymentTab {
    #[default]
    Overview,
    #[strum(to_string = "By Sector")]
    Sectors,
    Demographics,
    Regional,
    #[strum(to_string = "Skills & Jobs")]
    Skills,
}

const REGION_HEADERS: &[&str] = &["Region", "Unemployment", "Employed", "Labor Force"];

#[component]
pub fn EmploymentData() -> impl IntoView {
    let tab = create_rw_signal(EmploymentTab::default());

    view! {
        <PageHeader heading=HEADING/>
        <MetricGrid metrics=KEY_METRICS/>
        <TabBar active=tab/>
        {move || match tab.get() {
            EmploymentTab::Overview => overview_panel().into_view(),
            EmploymentTab::Sectors => sectors_panel().into_view(),
            EmploymentTab::Demographics => demographics_panel().into_view(),
            EmploymentTab::Regional => regional_panel().into_view(),
            EmploymentTab::Skills => skills_panel().into_view(),
        }}
    }
}

fn overview_panel() -> impl IntoView {
    let months: Vec<&'static str> = MONTHLY.iter().map(|m| m.month).collect();
    let latest = MONTHLY.last().copied();
    view! {
        <Card title="Employment Trends" description="Unemployment rate and labor force participation over time">
            <LineChart
                categories=months
                series=vec![
                    Series::new("Unemployment %", series_color(4), MONTHLY.iter().map(|m| m.unemployment_rate).collect()),
                ]
            />
        </Card>
        {latest.map(|m| {
            view! {
                <Card title="Employment Status" description="Current employment distribution">
                    <DonutChart labels=vec!["Employed", "Unemployed"] values=vec![m.employed, m.unemployed]/>
                    <p class="muted">
                        {format!("Labor force {} · participation {:.1}%", millions(m.labor_force), m.participation_rate)}
                    </p>
                </Card>
            }
        })}
    }
}

fn sectors_panel() -> impl IntoView {
    let max_vacancies = VACANCIES.iter().map(|v| v.vacancies).max().unwrap_or(0) as f64;
    view! {
        <div class="card-grid">
            <Card title="Employment by Sector" description="Distribution of workforce across sectors">
                <DonutChart
                    labels=SECTORS.iter().map(|s| s.sector).collect()
                    values=SECTORS.iter().map(|s| s.percentage).collect()
                />
            </Card>
            <Card title="Sector Employment Growth" description="Year-over-year employment growth by sector">
                <BarChart
                    categories=SECTORS.iter().map(|s| s.sector).collect()
                    series=vec![Series::new("Growth %", series_color(2), SECTORS.iter().map(|s| s.growth).collect())]
                />
            </Card>
        </div>
        <Card title="Job Vacancies & Fill Rates" description="Available positions and recruitment success rates by sector">
            {VACANCIES
                .iter()
                .map(|v| {
                    view! {
                        <ShareRow
                            label=v.sector
                            value_label=format!("{} vacancies · {:.1}% filled", thousands(v.vacancies), v.fill_rate)
                            value=v.vacancies as f64
                            max=max_vacancies
                        />
                    }
                })
                .collect_view()}
            <p class="muted">{format!("Total open positions: {}", thousands(total_vacancies()))}</p>
        </Card>
    }
}

fn demographics_panel() -> impl IntoView {
    view! {
        <Card title="Employment by Age Group" description="Labor force participation and unemployment across age groups">
            <BarChart
                categories=AGE_GROUPS.iter().map(|a| a.age_group).collect()
                series=vec![
                    Series::new("Labor Force (M)", series_color(0), AGE_GROUPS.iter().map(|a| a.labor_force).collect()),
                    Series::new("Employed (M)", series_color(2), AGE_GROUPS.iter().map(|a| a.employed).collect()),
                ]
            />
        </Card>
        <div class="card-grid">
            <Card title="Employment by Education" description="Employment rates across education levels">
                <DonutChart
                    labels=EDUCATION.iter().map(|e| e.level).collect()
                    values=EDUCATION.iter().map(|e| e.employed).collect()
                />
            </Card>
            <Card title="Unemployment by Education" description="Unemployment rates by education level">
                <BarChart
                    categories=EDUCATION.iter().map(|e| e.level).collect()
                    series=vec![Series::new("Unemployment %", series_color(4), EDUCATION.iter().map(|e| e.unemployment_rate).collect())]
                />
            </Card>
        </div>
    }
}

fn regional_panel() -> impl IntoView {
    let rows: Vec<Vec<String>> = REGIONS
        .iter()
        .map(|r| {
            vec![
                r.region.to_string(),
                format!("{:.1}%", r.unemployment_rate),
                millions(r.employed),
                millions(r.labor_force),
            ]
        })
        .collect();
    view! {
        <Card title="Regional Employment" description="Employment statistics across Malaysian regions">
            <BarChart
                categories=REGIONS.iter().map(|r| r.region).collect()
                series=vec![Series::new("Unemployment %", series_color(3), REGIONS.iter().map(|r| r.unemployment_rate).collect())]
            />
        </Card>
        <Card title="Regional Employment Summary" description="Detailed breakdown by region">
            <DataTable headers=REGION_HEADERS rows=rows/>
        </Card>
    }
}

fn skills_panel() -> impl IntoView {
    let max_demand = column_max(SKILLS, |s| s.demand);
    view! {
        <Card title="Skills in Demand" description="Most sought-after skills in the job market">
            {SKILLS
                .iter()
                .map(|s| {
                    view! {
                        <div class="insight">
                            <div style="flex: 1">
                                <ShareRow
                                    label=s.skill
                                    value_label=format!("{:.0}% demand", s.demand)
                                    value=s.demand
                                    max=max_demand
                                    color=series_color(1)
                                />
                            </div>
                            <GrowthBadge value=s.growth/>
                        </div>
                    }
                })
                .collect_view()}
        </Card>
    }
}
