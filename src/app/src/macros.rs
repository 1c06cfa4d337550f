/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.active_tab, Tab::Monitor)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.connect_form.ssid, ssid;
///     model.focus, Some(FocusTarget::ConnectPassword)
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests against the device API.
/// The response is handed to `process` and wrapped into the domain event.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The shell replaces this prefix with the device URL.
///
/// # Example
/// ```ignore
/// api_get!(Wifi, WifiEvent, "/api/scan", ScanResponse,
///     process: process_envelope::<ScanPayload>)
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, process: $process:expr) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result = $process(result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for POST requests against the device API.
///
/// # Patterns
///
/// Pattern 1: POST without body
/// ```ignore
/// api_post!(Wifi, WifiEvent, "/api/disconnect-current", DisconnectResponse,
///     process: process_ack)
/// ```
///
/// Pattern 2: POST with JSON body
/// ```ignore
/// api_post!(Wifi, WifiEvent, "/api/forget-network", ForgetResponse,
///     body_json: &ForgetNetworkRequest { ssid },
///     process: process_ack)
/// ```
///
/// A body that cannot be encoded is reported through the response event as a
/// transport error, so the handler re-enables its control as for any failure.
#[macro_export]
macro_rules! api_post {
    // Pattern 1: POST without body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, process: $process:expr) => {
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result = $process(result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };

    // Pattern 2: POST with JSON body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, body_json: $body:expr, process: $process:expr) => {
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result = $process(result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
            Err(e) => crux_core::Command::event($crate::events::Event::$domain(
                $crate::events::$domain_event::$response_event(Err(
                    $crate::types::ApiError::Transport(format!("failed to encode request: {e}")),
                )),
            )),
        }
    };
}
