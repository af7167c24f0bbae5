//! `/api/logistique` routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::types::{
    ActesDosesRegion, ChartData, ChartDataset, ChartJs, LogistiqueResponse,
    NombrePharmaciesPeriode,
};
use crate::Dataset;

pub fn router() -> Router<Arc<Dataset>> {
    Router::new()
        .route("/actes-doses-region", get(actes_doses_region))
        .route("/nombre-pharmacies-periode", get(nombre_pharmacies_periode))
}

async fn actes_doses_region(
    State(data): State<Arc<Dataset>>,
) -> Json<LogistiqueResponse<ActesDosesRegion>> {
    let rows = data.actes_doses.clone();
    let mut regions: Vec<String> = Vec::new();
    for row in &rows {
        if !regions.contains(&row.region) {
            regions.push(row.region.clone());
        }
    }
    let series = |variable: &str, label: &str, color: &str| ChartDataset {
        label: label.to_string(),
        data: regions
            .iter()
            .map(|region| {
                let valeur = rows
                    .iter()
                    .find(|r| &r.region == region && r.variable_stock == variable)
                    .map(|r| r.valeur);
                json!(valeur)
            })
            .collect(),
        background_color: Some(color.to_string()),
        border_width: Some(1),
        ..Default::default()
    };
    let chartjs = ChartJs {
        kind: "bar".to_string(),
        data: ChartData {
            labels: regions.clone(),
            datasets: vec![
                series("acte_vgp", "Actes de vaccination", "rgba(54, 162, 235, 0.7)"),
                series("doses_j07e1", "Doses distribuées", "rgba(255, 99, 132, 0.7)"),
            ],
        },
        options: Some(json!({
            "responsive": true,
            "scales": { "y": { "beginAtZero": true, "title": { "display": true, "text": "Nombre" } } }
        })),
    };
    Json(LogistiqueResponse {
        question: "Comparaison actes de vaccination vs doses distribuées".to_string(),
        data: rows,
        chartjs,
    })
}

async fn nombre_pharmacies_periode(
    State(data): State<Arc<Dataset>>,
) -> Json<LogistiqueResponse<NombrePharmaciesPeriode>> {
    let mut rows = data.pharmacies_periode.clone();
    // Campaign dates are ISO strings; lexical order is chronological.
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    let chartjs = ChartJs {
        kind: "line".to_string(),
        data: ChartData {
            labels: rows.iter().map(|r| r.date.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Nombre de pharmacies".to_string(),
                data: rows.iter().map(|r| json!(r.valeur)).collect(),
                border_color: Some("rgba(75, 192, 192, 1)".to_string()),
                background_color: Some("rgba(75, 192, 192, 0.2)".to_string()),
                fill: Some(true),
                tension: Some(0.4),
                ..Default::default()
            }],
        },
        options: Some(json!({ "responsive": true, "scales": { "y": { "beginAtZero": true } } })),
    };
    Json(LogistiqueResponse {
        question: "Nombre de pharmacie sur une période/campagne de vaccination".to_string(),
        data: rows,
        chartjs,
    })
}
