use connectivity_console_core::{
    AccessPointPanel, ApInfoView, FanPanel, FanStatusView, Model, SIGNAL_BARS, SystemPanel, Tab,
    Timed,
};
use std::fmt::Write;

const BAR_GLYPHS: [char; SIGNAL_BARS as usize] = ['▂', '▄', '▆', '█'];

/// Draw `bars` filled bars out of four
pub fn signal_glyph(bars: u8) -> String {
    BAR_GLYPHS
        .iter()
        .enumerate()
        .map(|(i, glyph)| if i < bars as usize { *glyph } else { '·' })
        .collect()
}

fn mask(password: &str, visible: bool) -> String {
    if visible {
        password.to_string()
    } else {
        "*".repeat(password.chars().count())
    }
}

fn timed_line<T>(timed: &Timed<T>, text: impl Fn(&T) -> String) -> Option<String> {
    timed.value().map(|value| {
        if timed.is_fading() {
            format!("{} (fading)", text(value))
        } else {
            text(value)
        }
    })
}

/// Render the view model as console text
pub fn render(model: &Model) -> String {
    let mut out = String::new();

    let tab = |tab: Tab, label: &str| {
        if model.active_tab == tab {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };
    let _ = writeln!(
        out,
        "{} {} {}",
        tab(Tab::Wifi, "Wi-Fi"),
        tab(Tab::AccessPoint, "Access Point"),
        tab(Tab::Monitor, "Monitor")
    );

    if let Some(banner) = timed_line(&model.banner, |text| text.clone()) {
        let _ = writeln!(out, "{banner}");
    }

    match model.active_tab {
        Tab::Wifi => render_wifi(model, &mut out),
        Tab::AccessPoint => render_access_point(&model.access_point, &mut out),
        Tab::Monitor => render_monitor(&model.system, &model.fan, &mut out),
    }

    if model.disconnect_modal.is_displayed() {
        let ssid = model
            .current_connection
            .as_ref()
            .and_then(|connection| connection.ssid.as_deref())
            .unwrap_or("the current network");
        let _ = writeln!(out);
        if model.disconnecting {
            let _ = writeln!(out, "Disconnecting from {ssid}...");
        } else {
            let _ = writeln!(out, "Disconnect from {ssid}? [y/n]");
        }
    }

    if let Some(ssid) = &model.pending_forget {
        let _ = writeln!(out);
        let _ = writeln!(out, "Forget network \"{ssid}\"? [y/n]");
    }

    if let Some(alert) = &model.alert {
        let _ = writeln!(out);
        let _ = writeln!(out, "! {alert} [ok]");
    }

    out
}

fn render_wifi(model: &Model, out: &mut String) {
    let _ = writeln!(out);
    match &model.current_connection {
        Some(connection) => {
            let _ = write!(
                out,
                "Connected: {} {}",
                connection.ssid.as_deref().unwrap_or("unknown"),
                signal_glyph(connection.bars())
            );
            if let Some(interface) = &connection.interface_name {
                let _ = write!(out, " ({interface})");
            }
            let _ = writeln!(out);
        }
        None => {
            let _ = writeln!(out, "Not connected");
        }
    }

    let _ = writeln!(out);
    if model.scan.busy {
        let _ = writeln!(out, "Available networks (scanning...)");
    } else {
        let _ = writeln!(out, "Available networks");
    }
    if let Some(placeholder) = model.scan.listing.placeholder() {
        let _ = writeln!(out, "  {placeholder}");
    }
    for (i, network) in model.scan.networks.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            signal_glyph(network.bars()),
            network.ssid
        );
    }

    let form = &model.connect_form;
    let _ = writeln!(out);
    let _ = writeln!(out, "Network:  {}", form.ssid);
    let _ = writeln!(
        out,
        "Password: {}",
        mask(&form.password, form.password_visible)
    );
    if let Some(ssid) = &form.connecting_ssid {
        let _ = writeln!(out, "Connecting to {ssid}...");
    }
    if let Some(error) = timed_line(&model.connection_error, |error| {
        format!("{}: {}", error.ssid, error.message)
    }) {
        let _ = writeln!(out, "x {error}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Saved networks");
    if model.saved_networks.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for (i, network) in model.saved_networks.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, network.ssid);
    }
}

fn render_access_point(panel: &AccessPointPanel, out: &mut String) {
    let _ = writeln!(out);
    match &panel.info {
        ApInfoView::NotLoaded => {}
        ApInfoView::Loaded { ssid } => {
            let _ = writeln!(out, "Current AP: {ssid}");
        }
        ApInfoView::Failed(message) => {
            let _ = writeln!(out, "{message}");
        }
    }

    let _ = writeln!(
        out,
        "New password: {}",
        mask(&panel.password, panel.password_visible)
    );
    let _ = writeln!(out, "[{}]", panel.button_label());
    if let Some(error) = &panel.form.error_message {
        let _ = writeln!(out, "x {error}");
    }
    if let Some(success) = &panel.form.success_message {
        let _ = writeln!(out, "{success}");
    }
}

fn render_monitor(system: &SystemPanel, fan: &FanPanel, out: &mut String) {
    let _ = writeln!(out);
    if system.loading && system.status.is_none() {
        let _ = writeln!(out, "Loading system status...");
    } else {
        let status = system.status.clone().unwrap_or_default();
        let _ = writeln!(out, "CPU:         {}", status.cpu_label());
        let _ = writeln!(out, "Memory:      {}", status.memory_label());
        let _ = writeln!(out, "Disk:        {}", status.disk_label());
        let _ = writeln!(out, "Temperature: {}", status.temperature_label());
        let _ = writeln!(out, "Uptime:      {}", status.uptime_label());
    }

    let _ = writeln!(out);
    match &fan.status {
        FanStatusView::NotLoaded => {
            let _ = writeln!(out, "Fan: loading...");
        }
        FanStatusView::Failed(message) => {
            let _ = writeln!(out, "Fan: {message}");
        }
        FanStatusView::Loaded(state) => {
            let _ = writeln!(
                out,
                "Fan: {} {} {}",
                state.icon(),
                state.speed_label,
                state.mode_label()
            );
            let selectors: Vec<String> = state
                .speed_selectors()
                .map(|(speed, active)| {
                    if active {
                        format!("[{speed}]")
                    } else {
                        format!(" {speed} ")
                    }
                })
                .collect();
            let _ = writeln!(out, "Speed: {}", selectors.join(""));
        }
    }
    if fan.form.busy {
        let _ = writeln!(out, "(fan controls disabled)");
    }
    if let Some(notice) = timed_line(&fan.notice, |text| text.clone()) {
        let _ = writeln!(out, "{notice}");
    }
    if let Some(error) = &fan.form.error_message {
        let _ = writeln!(out, "x {error}");
    }
}
