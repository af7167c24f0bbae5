//! Asserts the exact request each client function issues, using the
//! recording backend: one GET per invocation, documented path, no query
//! string, no body-bearing method.

use std::net::TcpListener;

use fluvax_client::{Api, ApiConfig};
use mock_server::RequestLog;

fn spawn_recorder() -> (String, RequestLog) {
    let (app, log) = mock_server::recording_app();

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
            mock_server::serve(listener, app).await
        })
        .unwrap();
    });

    (format!("http://{addr}/api/"), log)
}

#[test]
fn each_function_issues_one_get_to_its_documented_path() {
    let (base_url, log) = spawn_recorder();
    let api = Api::new(&ApiConfig::with_base_url(base_url));

    api.roles().list().unwrap();
    api.geographie().accessibilite_pharmacies().unwrap();
    api.geographie().evolution_actes_age().unwrap();
    api.geographie().evolution_doses_age().unwrap();
    api.geographie().evolution_actes_region().unwrap();
    api.geographie().evolution_doses_region().unwrap();
    api.geographie().repartition_lieu_vaccination().unwrap();
    api.saisonnalite().donnees_meteo().unwrap();
    api.saisonnalite().correlation_meteo_grippe().unwrap();
    api.logistique().actes_doses_region().unwrap();
    api.logistique().nombre_pharmacies_periode().unwrap();
    api.health().unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            "GET /api/roles",
            "GET /api/geographie/accessibilite-pharmacies",
            "GET /api/geographie/evolution-actes-age",
            "GET /api/geographie/evolution-doses-age",
            "GET /api/geographie/evolution-actes-region",
            "GET /api/geographie/evolution-doses-region",
            "GET /api/geographie/repartition-lieu-vaccination",
            "GET /api/saisonnalite/donnees-meteo",
            "GET /api/saisonnalite/correlation-meteo-grippe",
            "GET /api/logistique/actes-doses-region",
            "GET /api/logistique/nombre-pharmacies-periode",
            "GET /api/health",
        ]
    );
}

#[test]
fn repeated_calls_issue_independent_requests() {
    let (base_url, log) = spawn_recorder();
    let api = Api::new(&ApiConfig::with_base_url(base_url));

    api.geographie().evolution_actes_region().unwrap();
    api.geographie().evolution_actes_region().unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], log[1]);
}
