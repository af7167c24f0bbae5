//! Drives the public client against the live mock backend over real HTTP.
//!
//! # Design
//! Each test binds an ephemeral port, hands the listener to the mock
//! backend on a background thread, then exercises client functions and
//! inspects the raw responses. Failure tests check that `ureq::Error`
//! values arrive untranslated.

use std::net::TcpListener;

use fluvax_client::{Api, ApiConfig, Transport};

/// Start the mock backend on an ephemeral port and return the client base
/// URL pointing at its `/api/` prefix.
fn spawn_backend() -> String {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api/")
}

fn api() -> Api {
    Api::new(&ApiConfig::with_base_url(spawn_backend()))
}

fn body_json(response: &mut ureq::http::Response<ureq::Body>) -> serde_json::Value {
    let text = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn health_passes_through_the_backend_status() {
    let mut response = api().health().unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(&mut response);
    assert_eq!(body["status"], "healthy");
}

#[test]
fn roles_list_returns_the_raw_role_array() {
    let mut response = api().roles().list().unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(&mut response);
    let roles = body.as_array().unwrap();
    assert!(!roles.is_empty());
    assert!(roles[0]["nom"].is_string());
}

#[test]
fn geographie_evolution_actes_region_passes_the_envelope_through() {
    let mut response = api().geographie().evolution_actes_region().unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(&mut response);
    assert_eq!(body["graphique"], "Graph batons");
    assert_eq!(body["total"], body["data"].as_array().unwrap().len());
    assert_eq!(body["chartjs"]["type"], "bar");
    assert!(body["data"][0]["region"].is_string());
}

#[test]
fn geographie_supplementary_endpoints_all_answer() {
    let api = api();
    let geographie = api.geographie();
    for response in [
        geographie.accessibilite_pharmacies(),
        geographie.evolution_actes_age(),
        geographie.evolution_doses_age(),
        geographie.evolution_doses_region(),
        geographie.repartition_lieu_vaccination(),
    ] {
        assert_eq!(response.unwrap().status().as_u16(), 200);
    }
}

#[test]
fn saisonnalite_donnees_meteo_keeps_station_columns() {
    let mut response = api().saisonnalite().donnees_meteo().unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(&mut response);
    assert!(body["data"][0]["NOM_USUEL"].is_string());
    assert_eq!(body["chartjs"]["type"], "line");
}

#[test]
fn saisonnalite_correlation_is_served_verbatim() {
    let mut response = api().saisonnalite().correlation_meteo_grippe().unwrap();
    let body = body_json(&mut response);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert!(body["message"].is_string());
}

#[test]
fn logistique_envelope_arrives_without_graphique_or_total() {
    let api = api();
    let mut response = api.logistique().actes_doses_region().unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(&mut response);
    assert!(body["question"].is_string());
    assert!(body.get("graphique").is_none());
    assert!(body.get("total").is_none());

    let mut response = api.logistique().nombre_pharmacies_periode().unwrap();
    let body = body_json(&mut response);
    assert!(!body["data"].as_array().unwrap().is_empty());
}

#[test]
fn unknown_path_surfaces_as_a_status_error() {
    let transport = Transport::new(&ApiConfig::with_base_url(spawn_backend()));
    let err = transport.get("geographie/does-not-exist").unwrap_err();
    assert!(matches!(err, ureq::Error::StatusCode(404)), "got {err:?}");
}

#[test]
fn unreachable_backend_surfaces_as_a_transport_error() {
    // Bind then immediately drop to get a port nobody is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = Api::new(&ApiConfig::with_base_url(format!("http://127.0.0.1:{port}/api/")));
    let err = api.roles().list().unwrap_err();
    assert!(!matches!(err, ureq::Error::StatusCode(_)), "got {err:?}");
}
