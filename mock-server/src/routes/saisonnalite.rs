//! `/api/saisonnalite` routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::types::{
    ChartData, ChartDataset, ChartJs, CorrelationResponse, DataResponse, DonneesMeteo,
};
use crate::Dataset;

pub fn router() -> Router<Arc<Dataset>> {
    Router::new()
        .route("/donnees-meteo", get(donnees_meteo))
        .route("/correlation-meteo-grippe", get(correlation_meteo_grippe))
}

fn temp_series(label: &str, color: &str, values: Vec<Option<f64>>, fill: Option<bool>) -> ChartDataset {
    ChartDataset {
        label: label.to_string(),
        data: values.into_iter().map(|v| json!(v)).collect(),
        border_color: Some(color.to_string()),
        fill,
        tension: Some(0.4),
        ..Default::default()
    }
}

async fn donnees_meteo(State(data): State<Arc<Dataset>>) -> Json<DataResponse<DonneesMeteo>> {
    let rows = data.meteo.clone();
    let labels = rows.iter().map(|r| r.nom_usuel.clone()).collect();
    let datasets = vec![
        temp_series(
            "Moyenne des extrêmes sous abri (TNTXM)",
            "rgba(54, 162, 235, 1)",
            rows.iter().map(|r| r.tntxm).collect(),
            Some(true),
        ),
        temp_series(
            "Minimale au-dessus du sol (TNSOL)",
            "rgba(255, 99, 132, 1)",
            rows.iter().map(|r| r.tnsol).collect(),
            Some(true),
        ),
        temp_series(
            "Moyenne mensuelle (TMM)",
            "rgba(75, 192, 192, 1)",
            rows.iter().map(|r| r.tmm).collect(),
            None,
        ),
    ];
    let chartjs = ChartJs {
        kind: "line".to_string(),
        data: ChartData { labels, datasets },
        options: Some(json!({
            "responsive": true,
            "scales": {
                "y": { "beginAtZero": false, "title": { "display": true, "text": "Température (°C)" } },
                "x": { "title": { "display": true, "text": "Station météorologique" } }
            }
        })),
    };
    Json(DataResponse {
        question: "Analyse de la saisonnalité via données météorologiques".to_string(),
        graphique: "Aires / Courbes".to_string(),
        total: rows.len(),
        data: rows,
        chartjs,
    })
}

async fn correlation_meteo_grippe() -> Json<CorrelationResponse> {
    Json(CorrelationResponse {
        question: "Corrélation température / cas de grippe".to_string(),
        graphique: "Scatter plot + Line chart".to_string(),
        data: Vec::new(),
        message: "À implémenter avec les données réelles".to_string(),
    })
}
