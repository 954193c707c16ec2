//! Groupforms Client - Main entry point
//!
//! Reads the page configuration once, then mounts the create/edit group form.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use anyhow::Context;
use dioxus::prelude::*;
use groupforms_client::{config::read_config, error_reporting, log_error, log_warn, CreateEditGroupForm};
use groupforms_shared::{FormConfig, GroupForm};

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("groupforms_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

fn load() -> anyhow::Result<(FormConfig, GroupForm)> {
    let config = read_config().context("failed to load group form configuration")?;
    let form = GroupForm::new(&config).context("invalid group form configuration")?;

    if let Some(sentry) = &config.sentry {
        if let Err(e) = error_reporting::init(&sentry.dsn, &sentry.release) {
            log_warn!("Crash reporting disabled: {}", e);
        }
    }

    Ok((config, form))
}

#[component]
fn App() -> Element {
    let loaded = use_hook(|| {
        load().map_err(|e| {
            log_error!("{:#}", e);
            format!("{:#}", e)
        })
    });

    match loaded {
        Ok((config, form)) => rsx! {
            for href in config.styles {
                document::Link { rel: "stylesheet", href }
            }
            CreateEditGroupForm { initial: form }
        },
        Err(message) => rsx! {
            div { class: "text-red-error font-bold", role: "alert",
                "Unable to load the group form: {message}"
            }
        },
    }
}
