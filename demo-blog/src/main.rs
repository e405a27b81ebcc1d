use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_client::{
    AuthFlow, Gateway, GuardDecision, LoginCredentials, PostService, RouteGuard, SessionStore,
    SharedNotifier, ThemeService, TracingNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gateway = Gateway::from_env()?;
    tracing::info!("Backend address: {}", gateway.base_url());

    let session = SessionStore::new();
    let notifier: SharedNotifier = Arc::new(TracingNotifier);

    let auth = AuthFlow::new(gateway.clone(), session.clone(), notifier.clone());
    let guard = RouteGuard::new(session.clone(), notifier.clone());
    let themes = ThemeService::new(gateway.clone(), session.clone(), notifier.clone());
    let posts = PostService::new(gateway, session.clone(), notifier);

    // An unauthenticated visitor is turned away from protected views
    if guard.check() == GuardDecision::RedirectToLogin {
        tracing::info!("Not logged in yet, guard redirects to the login view");
    }

    let credentials = LoginCredentials {
        login: std::env::var("BLOG_USER").unwrap_or_else(|_| "root@root.com".to_string()),
        password: std::env::var("BLOG_PASSWORD").unwrap_or_else(|_| "rootroot".to_string()),
    };
    auth.login(credentials).await?;

    if guard.check() == GuardDecision::RedirectToLogin {
        return Ok(());
    }

    let theme_list = themes.list().await?;
    tracing::info!("{} themes on the backend", theme_list.len());
    for theme in &theme_list {
        tracing::info!("  #{} {}", theme.id, theme.description);
    }

    let post_list = posts.list().await?;
    tracing::info!("{} posts on the backend", post_list.len());
    for post in &post_list {
        tracing::info!("  #{} {}", post.id, post.title);
    }

    auth.logout();
    tracing::info!("Logged out, session back at sentinel");
    Ok(())
}
