#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use curbside::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, model::app::AppState, scheduler::cron::start_scheduler, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await.unwrap();
        let session = startup::connect_to_session(&config).await.unwrap();
        let redis_pool = startup::connect_to_job_tracker(&config).await.unwrap();
        let worker = startup::start_workers(&config, db.clone(), redis_pool.clone())
            .await
            .unwrap();
        let _ = start_scheduler(&db, &worker.queue).await.unwrap();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState {
                db,
                config: config.clone(),
            })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
