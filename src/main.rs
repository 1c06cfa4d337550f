use anyhow::{Context, Result};
use connectivity_console::{
    config::AppConfig,
    http_client::ReqwestTransport,
    input::{self, HELP, Input},
    render,
    shell::Shell,
};
use connectivity_console_core::{Event, FocusTarget, events::UiEvent};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::get()?;
    info!("device API at {}", config.device.url);

    let transport =
        ReqwestTransport::new(&config.device).context("failed to create device transport")?;
    let (shell, mut render_rx) = Shell::new(transport);

    shell.dispatch(Event::Initialize);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            rendered = render_rx.recv() => {
                if rendered.is_none() {
                    debug!("render channel closed");
                    break;
                }
                // collapse a burst of renders into one redraw
                while render_rx.try_recv().is_ok() {}

                let model = shell.view();
                println!("{}", render::render(&model));

                if let Some(path) = &model.navigate_to {
                    println!("Connected. Continue at {}{path}", config.device.url);
                    break;
                }
                if let Some(FocusTarget::ConnectPassword) = model.focus {
                    println!("enter the network password with: password <secret>");
                    shell.dispatch(Event::Ui(UiEvent::FocusHandled));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    debug!("stdin closed");
                    break;
                };

                match input::parse(&line, &shell.view()) {
                    Ok(Input::Events(events)) => {
                        for event in events {
                            shell.dispatch(event);
                        }
                    }
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Quit) => break,
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    debug!("good bye");

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));

    // stdout belongs to the console view
    builder.target(Target::Stderr).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}
