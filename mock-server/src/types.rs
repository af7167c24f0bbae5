//! Wire types served by the mock backend.
//!
//! # Design
//! Shapes follow the real backend's declared response models, not whatever
//! its handlers happen to assemble internally. Two envelope shapes exist:
//! the geographie/saisonnalite endpoints carry `graphique` and `total`,
//! the logistique endpoints do not. Optional numeric fields serialize as
//! `null` when absent, as the backend serializes them.

use serde::{Deserialize, Serialize};

/// Envelope shared by the geographie and saisonnalite endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub question: String,
    pub graphique: String,
    pub data: Vec<T>,
    pub total: usize,
    pub chartjs: ChartJs,
}

/// Envelope returned by the logistique endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogistiqueResponse<T> {
    pub question: String,
    pub data: Vec<T>,
    pub chartjs: ChartJs,
}

/// Placeholder payload for the weather/flu correlation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationResponse {
    pub question: String,
    pub graphique: String,
    pub data: Vec<serde_json::Value>,
    pub message: String,
}

/// Chart.js payload attached to every data response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartJs {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One Chart.js series. Field names follow Chart.js, hence camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// A dashboard user role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub nom: String,
    pub description: String,
}

/// Vaccination acts per region, one row per region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionActesRegion {
    pub region: String,
    pub actes_2021: Option<i64>,
    pub actes_2022: Option<i64>,
    pub actes_2023: Option<i64>,
    pub actes_2024: Option<i64>,
    pub evolution_pct: Option<f64>,
}

/// Distributed doses per region, one row per region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionDosesRegion {
    pub region: String,
    pub doses_2021: Option<i64>,
    pub doses_2022: Option<i64>,
    pub doses_2023: Option<i64>,
    pub doses_2024: Option<i64>,
    pub evolution_pct: Option<f64>,
}

/// Vaccination acts split by age bracket (65+ vs under 65), per region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionActesAge {
    pub region: String,
    pub actes_2021_65_plus: Option<i64>,
    pub actes_2021_moins_65: Option<i64>,
    pub actes_2022_65_plus: Option<i64>,
    pub actes_2022_moins_65: Option<i64>,
    pub actes_2023_65_plus: Option<i64>,
    pub actes_2023_moins_65: Option<i64>,
    pub actes_2024_65_plus: Option<i64>,
    pub actes_2024_moins_65: Option<i64>,
}

/// Distributed doses split by age bracket, per region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionDosesAge {
    pub region: String,
    pub doses_2021_65_plus: Option<i64>,
    pub doses_2021_moins_65: Option<i64>,
    pub doses_2022_65_plus: Option<i64>,
    pub doses_2022_moins_65: Option<i64>,
    pub doses_2023_65_plus: Option<i64>,
    pub doses_2023_moins_65: Option<i64>,
    pub doses_2024_65_plus: Option<i64>,
    pub doses_2024_moins_65: Option<i64>,
}

/// Pharmacy coverage for one postal code. `ratio` is population per
/// pharmacy, rounded to two decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilitePharmacies {
    pub nombre_pharmacies: i64,
    pub population: i64,
    pub code_postal: String,
    pub ratio: f64,
}

/// One recorded vaccination, reduced to venue type and age bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepartitionLieuVaccination {
    pub type_lieu_vaccination: String,
    pub tranche_age: String,
}

/// Weather row keyed by the station-export column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonneesMeteo {
    #[serde(rename = "NOM_USUEL")]
    pub nom_usuel: String,
    #[serde(rename = "TNTXM")]
    pub tntxm: Option<f64>,
    #[serde(rename = "TNSOL")]
    pub tnsol: Option<f64>,
    #[serde(rename = "TMM")]
    pub tmm: Option<f64>,
    pub annees: Option<i32>,
    pub mois: Option<i32>,
    pub taux_grippe: Option<f64>,
    pub incidence_sg_hebdo: Option<f64>,
}

/// Long-format stock row: one variable (`acte_vgp` or `doses_j07e1`) per
/// region per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActesDosesRegion {
    pub region: String,
    pub variable_stock: String,
    pub valeur: i64,
}

/// Pharmacy count on one date of the vaccination campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NombrePharmaciesPeriode {
    pub date: String,
    pub variable_pharmacie: String,
    pub valeur: i64,
}
