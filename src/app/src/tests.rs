use super::*;
use crate::events::{FanEvent, WifiEvent};
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use crux_http::HttpError;
use serde_json::json;

type Cmd = Command<Effect, Event>;

fn http_requests(cmd: &mut Cmd) -> Vec<Request<HttpRequest>> {
    cmd.effects()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .collect()
}

fn timer_requests(cmd: &mut Cmd) -> Vec<Request<TimerOperation>> {
    cmd.effects()
        .filter_map(|effect| match effect {
            Effect::Timer(request) => Some(request),
            _ => None,
        })
        .collect()
}

/// Resolve `request` and feed every resulting event back into the app
fn respond(cmd: &mut Cmd, mut request: Request<HttpRequest>, result: HttpResult, model: &mut Model) {
    request.resolve(result).expect("resolve http request");
    let events: Vec<Event> = cmd.events().collect();
    for event in events {
        let _ = update::update(event, model);
    }
}

fn ok_json(body: serde_json::Value) -> HttpResult {
    HttpResult::Ok(HttpResponse::ok().json(body).build())
}

#[test]
fn test_initialize_loads_connection_saved_networks_and_scans() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Initialize, &mut model);
    let urls: Vec<String> = http_requests(&mut cmd)
        .into_iter()
        .map(|request| request.operation.url)
        .collect();

    assert!(model.scan.busy);
    assert!(urls.contains(&"https://relative/api/current-connection".to_string()));
    assert!(urls.contains(&"https://relative/api/saved-networks".to_string()));
    assert!(urls.contains(&"https://relative/api/scan".to_string()));
}

#[test]
fn test_scan_dedupes_and_refreshes_status() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Wifi(WifiEvent::Scan), &mut model);
    let mut requests = http_requests(&mut cmd);
    assert_eq!(requests.len(), 1);
    let request = requests.remove(0);
    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/api/scan");

    resolve_scan_with_duplicates(&mut cmd, request, &mut model);

    let listed: Vec<(&str, u8)> = model
        .scan
        .networks
        .iter()
        .map(|network| (network.ssid.as_str(), network.bars()))
        .collect();
    assert_eq!(listed, vec![("A", 4), ("B", 1)]);
    assert!(!model.scan.busy);
}

fn resolve_scan_with_duplicates(cmd: &mut Cmd, mut request: Request<HttpRequest>, model: &mut Model) {
    request
        .resolve(ok_json(json!({
            "ok": true,
            "networks": [
                {"ssid": "A", "signal": 90},
                {"ssid": "A", "signal": 10},
                {"ssid": "B"}
            ]
        })))
        .expect("resolve scan");

    let event = cmd.events().next().expect("scan response event");
    let mut follow_up = update::update(event, model);

    let urls: Vec<String> = http_requests(&mut follow_up)
        .into_iter()
        .map(|request| request.operation.url)
        .collect();
    assert_eq!(urls.len(), 2);
    assert!(urls.contains(&"https://relative/api/current-connection".to_string()));
    assert!(urls.contains(&"https://relative/api/saved-networks".to_string()));
}

#[test]
fn test_scan_transport_error_shows_unavailable() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Wifi(WifiEvent::Scan), &mut model);
    let request = http_requests(&mut cmd).remove(0);
    respond(
        &mut cmd,
        request,
        HttpResult::Err(HttpError::Timeout),
        &mut model,
    );

    assert!(!model.scan.busy);
    assert_eq!(model.scan.listing, ScanListing::Unavailable);
    assert!(model.scan.networks.is_empty());
}

#[test]
fn test_connect_posts_trimmed_credentials() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: " Home ".to_string(),
            password: " secret ".to_string(),
        }),
        &mut model,
    );
    let request = http_requests(&mut cmd).remove(0);

    assert_eq!(request.operation.method, "POST");
    assert_eq!(request.operation.url, "https://relative/api/connect");
    let body: serde_json::Value =
        serde_json::from_slice(&request.operation.body).expect("json body");
    assert_eq!(body, json!({"ssid": "Home", "password": "secret"}));
}

#[test]
fn test_connect_200_with_ok_false_does_not_navigate() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: "Home".to_string(),
            password: "wrong".to_string(),
        }),
        &mut model,
    );
    let request = http_requests(&mut cmd).remove(0);
    respond(
        &mut cmd,
        request,
        ok_json(json!({"ok": false, "error": "bad password"})),
        &mut model,
    );

    assert_eq!(model.navigate_to, None);
    assert!(!model.connect_form.busy);
    let error = model.connection_error.value().expect("connection error");
    assert_eq!(error.ssid, "Home");
    assert_eq!(error.message, "bad password");
}

#[test]
fn test_connect_success_navigates() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: "Home".to_string(),
            password: "secret".to_string(),
        }),
        &mut model,
    );
    let request = http_requests(&mut cmd).remove(0);
    respond(&mut cmd, request, ok_json(json!({"ok": true})), &mut model);

    assert_eq!(model.navigate_to.as_deref(), Some(model::SUCCESS_PAGE));
    assert!(!model.connect_form.busy);
}

#[test]
fn test_connect_error_status_with_ok_true_fails() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: "Home".to_string(),
            password: "secret".to_string(),
        }),
        &mut model,
    );
    let request = http_requests(&mut cmd).remove(0);
    respond(
        &mut cmd,
        request,
        HttpResult::Ok(HttpResponse::status(500).json(json!({"ok": true})).build()),
        &mut model,
    );

    assert_eq!(model.navigate_to, None);
    assert_eq!(
        model.connection_error.value().map(|e| e.message.as_str()),
        Some("Unable to join this network. Please try again.")
    );
}

#[test]
fn test_connect_rejected_with_error_status_shows_backend_error() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: "Home".to_string(),
            password: "wrong".to_string(),
        }),
        &mut model,
    );
    let request = http_requests(&mut cmd).remove(0);
    respond(
        &mut cmd,
        request,
        HttpResult::Ok(
            HttpResponse::status(400)
                .json(json!({"ok": false, "error": "bad password"}))
                .build(),
        ),
        &mut model,
    );

    assert_eq!(model.navigate_to, None);
    assert!(!model.connect_form.busy);
    assert_eq!(
        model.connection_error.value().map(|e| e.message.as_str()),
        Some("bad password")
    );
}

#[test]
fn test_connect_error_dismisses_after_fade() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Wifi(WifiEvent::Connect {
            ssid: String::new(),
            password: String::new(),
        }),
        &mut model,
    );
    let effects: Vec<Effect> = cmd.effects().collect();
    assert!(!effects.iter().any(|effect| matches!(effect, Effect::Http(_))));

    let mut dwell = effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Timer(request) => Some(request),
            _ => None,
        })
        .expect("dwell timer");
    let TimerOperation::Start { id, millis } = dwell.operation.clone();
    assert_eq!(millis, 5000);

    dwell
        .resolve(TimerOutput::Elapsed { id })
        .expect("resolve dwell timer");
    let elapsed = cmd.events().next().expect("timer event");
    let mut fade_cmd = update::update(elapsed, &mut model);
    assert!(model.connection_error.is_fading());

    let mut fade = timer_requests(&mut fade_cmd).remove(0);
    let TimerOperation::Start { id, millis } = fade.operation.clone();
    assert_eq!(millis, 500);
    fade.resolve(TimerOutput::Elapsed { id })
        .expect("resolve fade timer");
    let elapsed = fade_cmd.events().next().expect("fade event");
    let _ = update::update(elapsed, &mut model);

    assert!(!model.connection_error.is_visible());
}

#[test]
fn test_forget_failure_keeps_list_and_alerts() {
    let mut model = Model {
        saved_networks: vec![SavedNetwork {
            ssid: "Cafe".to_string(),
        }],
        ..Default::default()
    };

    let _ = update::update(
        Event::Wifi(WifiEvent::ForgetNetwork {
            ssid: "Cafe".to_string(),
        }),
        &mut model,
    );
    let mut cmd = update::update(Event::Wifi(WifiEvent::ConfirmForget), &mut model);
    let request = http_requests(&mut cmd).remove(0);
    assert_eq!(request.operation.url, "https://relative/api/forget-network");
    respond(
        &mut cmd,
        request,
        ok_json(json!({"ok": false, "error": "busy"})),
        &mut model,
    );

    assert_eq!(model.saved_networks.len(), 1);
    assert_eq!(model.alert.as_deref(), Some("Failed to forget network: busy"));
    assert!(!model.forgetting);
}

#[test]
fn test_disconnect_modal_transitions() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Wifi(WifiEvent::ShowDisconnectModal), &mut model);
    assert_eq!(model.disconnect_modal.phase, ModalPhase::Opening);

    let mut open = timer_requests(&mut cmd).remove(0);
    let TimerOperation::Start { id, millis } = open.operation.clone();
    assert_eq!(millis, 10);
    open.resolve(TimerOutput::Elapsed { id }).expect("resolve");
    let elapsed = cmd.events().next().expect("open event");
    let _ = update::update(elapsed, &mut model);
    assert_eq!(model.disconnect_modal.phase, ModalPhase::Open);

    let mut cmd = update::update(Event::Wifi(WifiEvent::CloseDisconnectModal), &mut model);
    assert_eq!(model.disconnect_modal.phase, ModalPhase::Closing);

    let mut close = timer_requests(&mut cmd).remove(0);
    let TimerOperation::Start { id, millis } = close.operation.clone();
    assert_eq!(millis, 200);
    close.resolve(TimerOutput::Elapsed { id }).expect("resolve");
    let elapsed = cmd.events().next().expect("close event");
    let _ = update::update(elapsed, &mut model);
    assert_eq!(model.disconnect_modal.phase, ModalPhase::Hidden);
}

#[test]
fn test_fan_toggle_transport_error_reenables_controls() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Fan(FanEvent::Toggle), &mut model);
    assert!(model.fan.form.busy);
    let request = http_requests(&mut cmd).remove(0);
    assert_eq!(request.operation.url, "https://relative/api/fan/toggle");

    respond(
        &mut cmd,
        request,
        HttpResult::Ok(HttpResponse::status(502).body("Bad Gateway").build()),
        &mut model,
    );

    assert!(!model.fan.form.busy);
    assert_eq!(
        model.fan.form.error_message.as_deref(),
        Some("Error toggling fan")
    );
}

#[test]
fn test_forget_rejected_with_error_status_shows_backend_error() {
    let mut model = Model {
        saved_networks: vec![SavedNetwork {
            ssid: "Cafe".to_string(),
        }],
        ..Default::default()
    };

    let _ = update::update(
        Event::Wifi(WifiEvent::ForgetNetwork {
            ssid: "Cafe".to_string(),
        }),
        &mut model,
    );
    let mut cmd = update::update(Event::Wifi(WifiEvent::ConfirmForget), &mut model);
    let request = http_requests(&mut cmd).remove(0);
    respond(
        &mut cmd,
        request,
        HttpResult::Ok(
            HttpResponse::status(500)
                .json(json!({"ok": false, "error": "network in use"}))
                .build(),
        ),
        &mut model,
    );

    assert_eq!(model.saved_networks.len(), 1);
    assert_eq!(
        model.alert.as_deref(),
        Some("Failed to forget network: network in use")
    );
}
