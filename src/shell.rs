use connectivity_console_core::{App, Effect, Event, Model, TimerOperation, TimerOutput};
use crux_core::Core;
use log::error;
use std::{fmt::Display, sync::Arc, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::http_client::DeviceTransport;

/// Runs the core's effects: HTTP through the transport, timers on tokio,
/// renders as notifications on a channel.
pub struct Shell<T> {
    core: Arc<Core<App>>,
    transport: Arc<T>,
    render_tx: UnboundedSender<()>,
}

impl<T> Clone for Shell<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            transport: Arc::clone(&self.transport),
            render_tx: self.render_tx.clone(),
        }
    }
}

impl<T> Shell<T>
where
    T: DeviceTransport + Send + Sync + 'static,
{
    /// Create a shell and the receiver that is notified whenever the view changed
    pub fn new(transport: T) -> (Self, UnboundedReceiver<()>) {
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let shell = Self {
            core: Arc::new(Core::new()),
            transport: Arc::new(transport),
            render_tx,
        };

        (shell, render_rx)
    }

    pub fn dispatch(&self, event: Event) {
        self.process_effects(self.core.process_event(event));
    }

    pub fn view(&self) -> Model {
        self.core.view()
    }

    fn process_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.process_effect(effect);
        }
    }

    fn process_effect(&self, effect: Effect) {
        match effect {
            Effect::Render(_) => {
                // the receiver is gone once the console loop ended
                let _ = self.render_tx.send(());
            }
            Effect::Http(mut request) => {
                let shell = self.clone();
                tokio::spawn(async move {
                    let result = shell.transport.execute(&request.operation).await;
                    shell.continue_with(shell.core.resolve(&mut request, result));
                });
            }
            Effect::Timer(mut request) => {
                let shell = self.clone();
                tokio::spawn(async move {
                    let TimerOperation::Start { id, millis } = request.operation.clone();
                    tokio::time::sleep(Duration::from_millis(millis)).await;
                    let output = TimerOutput::Elapsed { id };
                    shell.continue_with(shell.core.resolve(&mut request, output));
                });
            }
        }
    }

    fn continue_with<E: Display>(&self, outcome: Result<Vec<Effect>, E>) {
        match outcome {
            Ok(effects) => self.process_effects(effects),
            Err(e) => error!("failed to process effect: {e}"),
        }
    }
}
