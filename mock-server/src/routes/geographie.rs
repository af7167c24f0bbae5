//! `/api/geographie` routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::types::{
    AccessibilitePharmacies, ChartData, ChartDataset, ChartJs, DataResponse, EvolutionActesAge,
    EvolutionActesRegion, EvolutionDosesAge, EvolutionDosesRegion, RepartitionLieuVaccination,
};
use crate::Dataset;

const YEARS: [&str; 4] = ["2021", "2022", "2023", "2024"];

const YEAR_COLORS: [&str; 4] = [
    "rgba(255, 99, 132, 0.5)",
    "rgba(54, 162, 235, 0.5)",
    "rgba(255, 206, 86, 0.5)",
    "rgba(75, 192, 192, 0.5)",
];

pub fn router() -> Router<Arc<Dataset>> {
    Router::new()
        .route("/accessibilite-pharmacies", get(accessibilite_pharmacies))
        .route("/evolution-actes-age", get(evolution_actes_age))
        .route("/evolution-doses-age", get(evolution_doses_age))
        .route("/evolution-actes-region", get(evolution_actes_region))
        .route("/evolution-doses-region", get(evolution_doses_region))
        .route("/repartition-lieu-vaccination", get(repartition_lieu_vaccination))
}

/// One bar dataset per campaign year over `labels`.
fn year_bars(labels: Vec<String>, per_year: [Vec<Option<i64>>; 4]) -> ChartJs {
    let datasets = YEARS
        .iter()
        .zip(YEAR_COLORS)
        .zip(per_year)
        .map(|((year, color), values)| ChartDataset {
            label: (*year).to_string(),
            data: values.into_iter().map(|v| json!(v)).collect(),
            background_color: Some(color.to_string()),
            ..Default::default()
        })
        .collect();
    ChartJs {
        kind: "bar".to_string(),
        data: ChartData { labels, datasets },
        options: Some(json!({
            "responsive": true,
            "scales": { "y": { "beginAtZero": true } }
        })),
    }
}

fn age_line(label: String, color: &str, values: [Option<i64>; 4]) -> ChartDataset {
    ChartDataset {
        label,
        data: values.iter().map(|v| json!(v)).collect(),
        border_color: Some(color.to_string()),
        tension: Some(0.4),
        ..Default::default()
    }
}

/// First-seen order, no duplicates.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

async fn accessibilite_pharmacies(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<AccessibilitePharmacies>> {
    let rows = data.pharmacies.clone();
    let chartjs = ChartJs {
        kind: "bar".to_string(),
        data: ChartData {
            labels: rows.iter().map(|r| r.code_postal.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Population par pharmacie".to_string(),
                data: rows.iter().map(|r| json!(r.ratio)).collect(),
                background_color: Some("rgba(54, 162, 235, 0.5)".to_string()),
                border_color: Some("rgba(54, 162, 235, 1)".to_string()),
                border_width: Some(1),
                ..Default::default()
            }],
        },
        options: Some(json!({ "indexAxis": "y", "responsive": true })),
    };
    Json(DataResponse {
        question: "Accessibilité des centres de vaccination (pharmacies uniquement) selon la population"
            .to_string(),
        graphique: "Barème".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn evolution_actes_age(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<EvolutionActesAge>> {
    let rows = data.actes_age.clone();
    let mut datasets = Vec::new();
    for row in &rows {
        datasets.push(age_line(
            format!("{} - 65 ans et plus", row.region),
            "rgba(255, 99, 132, 1)",
            [
                row.actes_2021_65_plus,
                row.actes_2022_65_plus,
                row.actes_2023_65_plus,
                row.actes_2024_65_plus,
            ],
        ));
        datasets.push(age_line(
            format!("{} - Moins de 65 ans", row.region),
            "rgba(54, 162, 235, 1)",
            [
                row.actes_2021_moins_65,
                row.actes_2022_moins_65,
                row.actes_2023_moins_65,
                row.actes_2024_moins_65,
            ],
        ));
    }
    let chartjs = ChartJs {
        kind: "line".to_string(),
        data: ChartData {
            labels: YEARS.iter().map(|y| y.to_string()).collect(),
            datasets,
        },
        options: Some(json!({
            "responsive": true,
            "scales": { "y": { "beginAtZero": true } }
        })),
    };
    Json(DataResponse {
        question: "Évolution des actes par âge de 2021 à 2024 selon les régions".to_string(),
        graphique: "Courbes".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn evolution_doses_age(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<EvolutionDosesAge>> {
    let rows = data.doses_age.clone();
    let mut datasets = Vec::new();
    for row in &rows {
        datasets.push(age_line(
            format!("{} - 65 ans et plus", row.region),
            "rgba(255, 99, 132, 1)",
            [
                row.doses_2021_65_plus,
                row.doses_2022_65_plus,
                row.doses_2023_65_plus,
                row.doses_2024_65_plus,
            ],
        ));
        datasets.push(age_line(
            format!("{} - Moins de 65 ans", row.region),
            "rgba(54, 162, 235, 1)",
            [
                row.doses_2021_moins_65,
                row.doses_2022_moins_65,
                row.doses_2023_moins_65,
                row.doses_2024_moins_65,
            ],
        ));
    }
    let chartjs = ChartJs {
        kind: "line".to_string(),
        data: ChartData {
            labels: YEARS.iter().map(|y| y.to_string()).collect(),
            datasets,
        },
        options: Some(json!({
            "responsive": true,
            "scales": { "y": { "beginAtZero": true } }
        })),
    };
    Json(DataResponse {
        question: "Évolution des doses par âge de 2021 à 2024 selon les régions".to_string(),
        graphique: "Courbes".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn evolution_actes_region(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<EvolutionActesRegion>> {
    let rows = data.actes_region.clone();
    let labels = rows.iter().map(|r| r.region.clone()).collect();
    let chartjs = year_bars(
        labels,
        [
            rows.iter().map(|r| r.actes_2021).collect(),
            rows.iter().map(|r| r.actes_2022).collect(),
            rows.iter().map(|r| r.actes_2023).collect(),
            rows.iter().map(|r| r.actes_2024).collect(),
        ],
    );
    Json(DataResponse {
        question: "Évolution actes de vaccination contre la grippe de 2021 à 2024 par région"
            .to_string(),
        graphique: "Graph batons".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn evolution_doses_region(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<EvolutionDosesRegion>> {
    let rows = data.doses_region.clone();
    let labels = rows.iter().map(|r| r.region.clone()).collect();
    let chartjs = year_bars(
        labels,
        [
            rows.iter().map(|r| r.doses_2021).collect(),
            rows.iter().map(|r| r.doses_2022).collect(),
            rows.iter().map(|r| r.doses_2023).collect(),
            rows.iter().map(|r| r.doses_2024).collect(),
        ],
    );
    Json(DataResponse {
        question: "Évolution doses de vaccination contre la grippe de 2021 à 2024 par région"
            .to_string(),
        graphique: "Graph batons".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn repartition_lieu_vaccination(
    State(data): State<Arc<Dataset>>,
) -> Json<DataResponse<RepartitionLieuVaccination>> {
    let rows = data.lieux_vaccination.clone();
    let tranches = distinct(rows.iter().map(|r| r.tranche_age.as_str()));
    let lieux = distinct(rows.iter().map(|r| r.type_lieu_vaccination.as_str()));
    let datasets = lieux
        .iter()
        .map(|lieu| ChartDataset {
            label: lieu.clone(),
            data: tranches
                .iter()
                .map(|tranche| {
                    let count = rows
                        .iter()
                        .filter(|r| &r.type_lieu_vaccination == lieu && &r.tranche_age == tranche)
                        .count();
                    json!(count)
                })
                .collect(),
            ..Default::default()
        })
        .collect();
    let chartjs = ChartJs {
        kind: "bar".to_string(),
        data: ChartData {
            labels: tranches,
            datasets,
        },
        options: Some(json!({
            "responsive": true,
            "scales": {
                "x": { "stacked": true },
                "y": { "stacked": true, "beginAtZero": true }
            }
        })),
    };
    Json(DataResponse {
        question: "Répartition du lieu de vaccination selon la tranche d'âge".to_string(),
        graphique: "Courbe à barres".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}
