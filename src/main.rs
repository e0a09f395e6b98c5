use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use log::{error, info};
use therapist::{store, Therapist};
use tokio::signal::unix::{signal, SignalKind};
use utils::{print_err, ResultExt as _};

mod api;
mod logging;
mod therapist;
mod utils;

type SignalWait = Pin<Box<dyn Future<Output = Result<&'static str>> + Send>>;

fn wait_for(kind: SignalKind, name: &'static str) -> SignalWait {
    Box::pin(async move {
        signal(kind)
            .with_context(|| format!("Cannot listen for {name}"))?
            .recv()
            .await;
        Ok(name)
    })
}

/// Resolves on the first of SIGINT or SIGTERM.
async fn terminate_on_signal() -> Result<()> {
    let waits = [
        wait_for(SignalKind::interrupt(), "SIGINT"),
        wait_for(SignalKind::terminate(), "SIGTERM"),
    ];
    let name = futures_util::future::select_all(waits).await.0?;
    info!("Received {name}");
    Ok(())
}

#[tokio::main]
async fn main() {
    let logger = logging::init();
    let config = store::load_config().or_default_logged("config");
    logging::apply_spec(&logger, &config.log_spec).print_err();
    let therapist = Therapist::new(&config);
    let mut api_task = tokio::spawn(api::serve(config, therapist));

    info!("Running");
    tokio::select! {
        stopped = terminate_on_signal() => {
            stopped.print_err();
            info!("Terminating.");
            api_task.abort();
        }
        finished = &mut api_task => {
            match finished {
                Ok(result) => result.print_err(),
                Err(e) => print_err(&e),
            }
            error!("Api server stopped, terminating.");
            logger.flush();
            std::process::exit(1);
        }
    }
}
