//! In-process rendition of the flu-vaccination dashboard backend.
//!
//! # Design
//! Serves the same GET surface as the real backend under the `/api`
//! prefix, from fixture data held in a shared [`Dataset`]. Envelopes and
//! row shapes mirror the backend's declared response models; the client
//! crate's integration tests drive this server over real HTTP.
//! [`recording_app`] answers anything with `200 {}` and keeps a log of
//! request lines so tests can assert exactly what a client sent.

pub mod routes;
pub mod types;

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use types::*;

/// Fixture data behind every endpoint.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub roles: Vec<Role>,
    pub actes_region: Vec<EvolutionActesRegion>,
    pub doses_region: Vec<EvolutionDosesRegion>,
    pub actes_age: Vec<EvolutionActesAge>,
    pub doses_age: Vec<EvolutionDosesAge>,
    pub pharmacies: Vec<AccessibilitePharmacies>,
    pub lieux_vaccination: Vec<RepartitionLieuVaccination>,
    pub meteo: Vec<DonneesMeteo>,
    pub actes_doses: Vec<ActesDosesRegion>,
    pub pharmacies_periode: Vec<NombrePharmaciesPeriode>,
}

impl Dataset {
    /// A small consistent snapshot: three regions, three weather stations,
    /// one campaign month of pharmacy counts.
    pub fn sample() -> Self {
        Self {
            roles: vec![
                role("administrateur", "Gestion des comptes et des référentiels"),
                role("analyste", "Consultation des tableaux de bord"),
                role("pharmacien", "Suivi des stocks et des actes officinaux"),
            ],
            actes_region: vec![
                actes_region("Île-de-France", 2_410_000, 2_515_000, 2_601_000, 2_688_000, 11.5),
                actes_region("Grand Est", 1_120_000, 1_172_000, 1_224_000, 1_270_000, 13.4),
                actes_region("Bretagne", 804_000, 838_000, 871_000, 905_000, 12.6),
            ],
            doses_region: vec![
                doses_region("Île-de-France", 2_600_000, 2_700_000, 2_790_000, 2_875_000, 10.6),
                doses_region("Grand Est", 1_230_000, 1_300_000, 1_350_000, 1_401_000, 13.9),
                doses_region("Bretagne", 880_000, 915_000, 950_000, 986_000, 12.0),
            ],
            actes_age: vec![
                actes_age("Île-de-France", [1_690_000, 720_000, 1_760_000, 755_000, 1_820_000, 781_000, 1_882_000, 806_000]),
                actes_age("Grand Est", [784_000, 336_000, 820_000, 352_000, 857_000, 367_000, 889_000, 381_000]),
                actes_age("Bretagne", [563_000, 241_000, 587_000, 251_000, 610_000, 261_000, 634_000, 271_000]),
            ],
            doses_age: vec![
                doses_age("Île-de-France", [1_820_000, 780_000, 1_890_000, 810_000, 1_953_000, 837_000, 2_012_000, 863_000]),
                doses_age("Grand Est", [861_000, 369_000, 910_000, 390_000, 945_000, 405_000, 980_000, 421_000]),
                doses_age("Bretagne", [616_000, 264_000, 640_000, 275_000, 665_000, 285_000, 690_000, 296_000]),
            ],
            pharmacies: vec![
                pharmacie(12, 25_640, "35000", 2_136.67),
                pharmacie(8, 19_432, "67000", 2_429.0),
                pharmacie(21, 54_210, "75013", 2_581.43),
            ],
            lieux_vaccination: vec![
                lieu("Pharmacie", "65 ans et plus"),
                lieu("Pharmacie", "Moins de 65 ans"),
                lieu("Cabinet médical", "65 ans et plus"),
                lieu("Pharmacie", "65 ans et plus"),
                lieu("Centre de vaccination", "Moins de 65 ans"),
                lieu("Cabinet médical", "65 ans et plus"),
            ],
            meteo: vec![
                meteo("BREST-GUIPAVAS", 9.8, 7.6, 10.2, 142.0, 187.3),
                meteo("STRASBOURG-ENTZHEIM", 3.9, 1.2, 4.4, 171.4, 214.9),
                meteo("PARIS-MONTSOURIS", 5.6, 3.8, 6.1, 158.2, 201.5),
            ],
            actes_doses: vec![
                stock("Île-de-France", "acte_vgp", 2_688_000),
                stock("Île-de-France", "doses_j07e1", 2_875_000),
                stock("Grand Est", "acte_vgp", 1_270_000),
                stock("Grand Est", "doses_j07e1", 1_401_000),
                stock("Bretagne", "acte_vgp", 905_000),
                stock("Bretagne", "doses_j07e1", 986_000),
            ],
            // Deliberately out of order; the handler serves them sorted.
            pharmacies_periode: vec![
                pharmacies_periode("2024-10-07", 18_432),
                pharmacies_periode("2024-10-21", 19_265),
                pharmacies_periode("2024-10-14", 18_910),
                pharmacies_periode("2024-10-28", 19_018),
            ],
        }
    }
}

fn role(nom: &str, description: &str) -> Role {
    Role {
        nom: nom.to_string(),
        description: description.to_string(),
    }
}

fn actes_region(region: &str, a21: i64, a22: i64, a23: i64, a24: i64, pct: f64) -> EvolutionActesRegion {
    EvolutionActesRegion {
        region: region.to_string(),
        actes_2021: Some(a21),
        actes_2022: Some(a22),
        actes_2023: Some(a23),
        actes_2024: Some(a24),
        evolution_pct: Some(pct),
    }
}

fn doses_region(region: &str, d21: i64, d22: i64, d23: i64, d24: i64, pct: f64) -> EvolutionDosesRegion {
    EvolutionDosesRegion {
        region: region.to_string(),
        doses_2021: Some(d21),
        doses_2022: Some(d22),
        doses_2023: Some(d23),
        doses_2024: Some(d24),
        evolution_pct: Some(pct),
    }
}

/// `values` pairs up as (65+, under 65) per year, 2021 through 2024.
fn actes_age(region: &str, values: [i64; 8]) -> EvolutionActesAge {
    EvolutionActesAge {
        region: region.to_string(),
        actes_2021_65_plus: Some(values[0]),
        actes_2021_moins_65: Some(values[1]),
        actes_2022_65_plus: Some(values[2]),
        actes_2022_moins_65: Some(values[3]),
        actes_2023_65_plus: Some(values[4]),
        actes_2023_moins_65: Some(values[5]),
        actes_2024_65_plus: Some(values[6]),
        actes_2024_moins_65: Some(values[7]),
    }
}

fn doses_age(region: &str, values: [i64; 8]) -> EvolutionDosesAge {
    EvolutionDosesAge {
        region: region.to_string(),
        doses_2021_65_plus: Some(values[0]),
        doses_2021_moins_65: Some(values[1]),
        doses_2022_65_plus: Some(values[2]),
        doses_2022_moins_65: Some(values[3]),
        doses_2023_65_plus: Some(values[4]),
        doses_2023_moins_65: Some(values[5]),
        doses_2024_65_plus: Some(values[6]),
        doses_2024_moins_65: Some(values[7]),
    }
}

fn pharmacie(nombre: i64, population: i64, code_postal: &str, ratio: f64) -> AccessibilitePharmacies {
    AccessibilitePharmacies {
        nombre_pharmacies: nombre,
        population,
        code_postal: code_postal.to_string(),
        ratio,
    }
}

fn lieu(type_lieu: &str, tranche: &str) -> RepartitionLieuVaccination {
    RepartitionLieuVaccination {
        type_lieu_vaccination: type_lieu.to_string(),
        tranche_age: tranche.to_string(),
    }
}

fn meteo(station: &str, tntxm: f64, tnsol: f64, tmm: f64, taux: f64, incidence: f64) -> DonneesMeteo {
    DonneesMeteo {
        nom_usuel: station.to_string(),
        tntxm: Some(tntxm),
        tnsol: Some(tnsol),
        tmm: Some(tmm),
        annees: Some(2024),
        mois: Some(1),
        taux_grippe: Some(taux),
        incidence_sg_hebdo: Some(incidence),
    }
}

fn stock(region: &str, variable: &str, valeur: i64) -> ActesDosesRegion {
    ActesDosesRegion {
        region: region.to_string(),
        variable_stock: variable.to_string(),
        valeur,
    }
}

fn pharmacies_periode(date: &str, valeur: i64) -> NombrePharmaciesPeriode {
    NombrePharmaciesPeriode {
        date: date.to_string(),
        variable_pharmacie: "pharmacies_actives".to_string(),
        valeur,
    }
}

pub fn app() -> Router {
    let dataset = Arc::new(Dataset::sample());
    let api = Router::new()
        .route("/health", get(health))
        .route("/roles", get(routes::roles::list))
        .nest("/geographie", routes::geographie::router())
        .nest("/saisonnalite", routes::saisonnalite::router())
        .nest("/logistique", routes::logistique::router());
    Router::new().nest("/api", api).with_state(dataset)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

/// Serve an arbitrary router. Lets test crates run [`recording_app`]
/// without depending on axum directly.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Request lines (`METHOD path` or `METHOD path?query`) seen by
/// [`recording_app`].
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Router that answers every request with `200 {}` and records the
/// request line, so client tests can assert exactly which requests were
/// issued.
pub fn recording_app() -> (Router, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(log.clone());
    (app, log)
}

async fn record(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<serde_json::Value>) {
    let line = match uri.query() {
        Some(query) => format!("{method} {}?{query}", uri.path()),
        None => format!("{method} {}", uri.path()),
    };
    log.lock().expect("request log poisoned").push(line);
    (StatusCode::OK, Json(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_regions_are_consistent_across_tables() {
        let data = Dataset::sample();
        let regions: Vec<&str> = data.actes_region.iter().map(|r| r.region.as_str()).collect();
        assert!(!regions.is_empty());
        assert_eq!(
            regions,
            data.doses_region.iter().map(|r| r.region.as_str()).collect::<Vec<_>>()
        );
        assert_eq!(
            regions,
            data.actes_age.iter().map(|r| r.region.as_str()).collect::<Vec<_>>()
        );
        // Two stock variables per region, in region order.
        assert_eq!(data.actes_doses.len(), regions.len() * 2);
    }

    #[test]
    fn sample_pharmacy_ratios_match_population_per_pharmacy() {
        for row in Dataset::sample().pharmacies {
            let expected = row.population as f64 / row.nombre_pharmacies as f64;
            assert!(
                (row.ratio - expected).abs() < 0.01,
                "ratio for {} off: {} vs {expected}",
                row.code_postal,
                row.ratio
            );
        }
    }

    #[test]
    fn sample_stock_variables_come_in_pairs() {
        let data = Dataset::sample();
        let actes = data.actes_doses.iter().filter(|r| r.variable_stock == "acte_vgp").count();
        let doses = data.actes_doses.iter().filter(|r| r.variable_stock == "doses_j07e1").count();
        assert_eq!(actes, doses);
    }
}
