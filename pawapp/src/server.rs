use axum::{
    Extension,
    Router,
    routing::{
        get,
        post,
    },
};
use axum_login::AuthManagerLayerBuilder;
use pawctrl::platform::Platform;
use time::Duration;
use tower::ServiceBuilder;
use tower_sessions::{
    Expiry,
    MemoryStore,
    SessionManagerLayer,
};

pub mod ac;
pub mod animal;
pub mod intake;
pub mod task;

pub use ac::Context;

/// The routes without the layers providing the platform and sessions.
pub fn router() -> Router {
    Router::new()
        .route("/", get(animal::featured))
        .route("/animal_list", get(animal::filter_options))
        .route("/animals", get(animal::list).post(animal::create))
        .route("/animal/{id}", get(animal::detail).post(animal::update))
        .route("/animal/{id}/adopt", post(intake::adopt))
        .route("/animal/{id}/delete", post(animal::delete))
        .route("/animal/{id}/comment", post(animal::comment))
        .route("/volunteer", get(intake::shelters).post(intake::volunteer))
        .route("/login", post(ac::login))
        .route("/logout", post(ac::logout))
        .route("/dashboard", get(task::dashboard))
        .route("/tasks", post(task::create))
        .route("/tasks/filter", post(task::filter))
        .route("/tasks/sort", post(task::filter))
        .route("/task/{id}", get(task::detail).post(task::update))
        .route("/task/{id}/delete", post(task::delete))
        .route("/task/{id}/complete", post(task::complete))
        .route("/task/{id}/reopen", post(task::reopen))
        .route("/task/{id}/comment", post(task::comment))
        .route("/task/{id}/item", post(task::add_item))
        .route("/task/{id}/item/{item_id}/toggle", post(task::toggle_item))
}

/// The complete application, with sessions held in memory.
pub fn app(platform: Platform) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));

    let auth_service = ServiceBuilder::new()
        .layer(
            AuthManagerLayerBuilder::new(
                platform.ac_platform.clone(),
                session_layer,
            ).build()
        );

    router()
        .layer(Extension(platform))
        .layer(auth_service)
}
