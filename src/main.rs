//! CRMDesk Console, the headless core of the CRM admin dashboard.
//!
//! Wires the components together and keeps the screen-facing data fresh:
//! the REST client fetches, the feed crate orders, the push channel
//! listens and recovers, and the coordinator routes events to refresh
//! actions. Rendering itself lives elsewhere; here every refresh action
//! reports through tracing.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

use crmdesk_auth::{CredentialRecord, SessionGuard};
use crmdesk_client::{ApiClient, SseTransport};
use crmdesk_core::config::AppConfig;
use crmdesk_feed::activity::DEFAULT_ACTIVITY_LIMIT;
use crmdesk_realtime::RealtimeChannel;
use crmdesk_sync::coordinator::{RefreshAction, RefreshActions};
use crmdesk_sync::SyncCoordinator;

#[tokio::main]
async fn main() {
    let env = std::env::var("CRMDESK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Console error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting CRMDesk v{}", env!("CARGO_PKG_VERSION"));

    // The guard is owned here and handed to the login flow by reference;
    // no ambient global.
    let mut guard = SessionGuard::new(CredentialRecord::from(&config.credentials));
    let snapshot = guard.describe_state();
    tracing::info!(
        user = %config.credentials.username,
        scheme = %config.credentials.digest_scheme,
        attempts = snapshot.attempts,
        "session guard ready"
    );

    let client = Arc::new(ApiClient::new(&config.backend)?);
    let coordinator = Arc::new(SyncCoordinator::new(refresh_actions(&client)));

    let transport = Arc::new(SseTransport::new(&config.backend)?);
    let mut channel = RealtimeChannel::new(transport);
    channel.register(coordinator.clone());
    let channel = Arc::new(channel);

    let cancel = CancellationToken::new();
    let runner = {
        let channel = channel.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { channel.run(cancel).await })
    };

    // Initial load of the landing page.
    coordinator.refresh_active_page().await;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    cancel.cancel();
    let _ = runner.await;

    Ok(())
}

/// Build the refresh callbacks the coordinator dispatches to.
///
/// Each action fetches through the client (demo fallback included) and
/// reports the result; all of them are idempotent and safe to run
/// redundantly.
fn refresh_actions(client: &Arc<ApiClient>) -> RefreshActions {
    RefreshActions {
        dashboard: dashboard_action(client.clone()),
        orders: {
            let client = client.clone();
            simple_action(move || {
                let client = client.clone();
                async move {
                    let orders = client.orders().await;
                    tracing::info!(count = orders.len(), "orders refreshed");
                }
            })
        },
        messages: {
            let client = client.clone();
            simple_action(move || {
                let client = client.clone();
                async move {
                    let messages = client.messages().await;
                    let unread = messages.iter().filter(|m| !m.processed).count();
                    tracing::info!(count = messages.len(), unread, "messages refreshed");
                }
            })
        },
        chat: {
            let client = client.clone();
            simple_action(move || {
                let client = client.clone();
                async move {
                    let conversations = client.chat_orders().await;
                    tracing::info!(count = conversations.len(), "chat conversations refreshed");
                }
            })
        },
        support: {
            let client = client.clone();
            simple_action(move || {
                let client = client.clone();
                async move {
                    let requests = client.support_requests().await;
                    tracing::info!(count = requests.len(), "support requests refreshed");
                }
            })
        },
        reviews: {
            let client = client.clone();
            simple_action(move || {
                let client = client.clone();
                async move {
                    let reviews = client.reviews().await;
                    let rating = client.average_rating().await;
                    tracing::info!(
                        count = reviews.len(),
                        average = rating.average_rating,
                        "reviews refreshed"
                    );
                }
            })
        },
        reload_conversation: {
            let client = client.clone();
            Box::new(move |order_id| {
                let client = client.clone();
                Box::pin(async move {
                    let thread = client.chat_messages(order_id).await;
                    tracing::info!(order_id, messages = thread.len(), "conversation reloaded");
                })
            })
        },
    }
}

fn dashboard_action(client: Arc<ApiClient>) -> RefreshAction {
    simple_action(move || {
        let client = client.clone();
        async move {
            let stats = client.dashboard_stats().await;
            let orders = client.orders().await;
            let messages = client.messages().await;
            let feed = crmdesk_feed::merge_recent(&orders, &messages, DEFAULT_ACTIVITY_LIMIT);
            tracing::info!(
                total_orders = stats.total_orders,
                unread_messages = stats.unread_messages,
                rating = %stats.rating_label(),
                activity_items = feed.len(),
                "dashboard refreshed"
            );
        }
    })
}

fn simple_action<F, Fut>(f: F) -> RefreshAction
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    Box::new(move || Box::pin(f()))
}
