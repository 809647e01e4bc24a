use std::env::set_var;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use lambda_http::{run, Error};
use records_lambda_rs::app::{self, Stores};
use records_lambda_rs::config::{Config, StoreBackend};
use records_lambda_rs::contact::Contact;
use records_lambda_rs::medical::Medical;
use records_lambda_rs::middleware::AuthState;
use records_lambda_rs::store::DynamoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if config.lambda {
        // If you use API Gateway stages, the Rust Runtime will include the stage name
        // as part of the path that your application receives.
        // i.e with: `GET /test-stage/api/v1/contact` without: `GET /api/v1/contact`
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

        // required to enable CloudWatch error logging by the runtime
        lambda_http::tracing::init_default_subscriber();
    } else {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }

    let stores = match config.store_backend {
        StoreBackend::Memory => Stores::in_memory(),
        StoreBackend::DynamoDb => {
            let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            let db_client = Client::new(&aws_config);
            Stores {
                contact: Arc::new(DynamoStore::<Contact>::new(
                    db_client.clone(),
                    &config.table_name,
                )),
                medical: Arc::new(DynamoStore::<Medical>::new(db_client, &config.table_name)),
            }
        }
    };

    tracing::info!(
        backend = ?config.store_backend,
        auth = config.api_token.is_some(),
        docs = config.docs_enabled,
        "starting records service"
    );

    let app = app::router(
        stores,
        AuthState::new(config.api_token.clone()),
        config.docs_enabled,
    );

    if config.lambda {
        return run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
