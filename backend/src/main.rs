use backend::{setup_database, setup_logger, Config};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("invalid configuration");

    setup_logger(&config).expect("unable to setup logger");

    let pool = setup_database(&config.database_url)
        .await
        .expect("unable to setup database");

    let (addr, server) = warp::serve(backend::api(pool)).bind_with_graceful_shutdown(
        ([0, 0, 0, 0], config.port),
        async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C signal handler");
        },
    );

    tokio::task::spawn(async move {
        log::info!("running server on http://{}/", addr);
        server.await;
        log::info!("server stopped");
    })
    .await
    .expect("failed to start server");
}
