//! CLI entry point: load login parameters and a private key, run the bearer
//! flow once, and print the resulting access token.

use anyhow::Context as _;
use jwt_bearer_client::{BearerFlow, Config, CredentialContext, Rs256Signer};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use zeroize::Zeroizing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .json()
        .init();

    info!("Starting OAuth JWT bearer login");

    let config = Config::from_env()?;

    // Key bytes are wiped once the signer has parsed them.
    let pem = Zeroizing::new(
        std::fs::read(&config.key_file)
            .with_context(|| format!("reading private key {}", config.key_file.display()))?,
    );
    let signer = Rs256Signer::from_rsa_pem(&pem)?;
    drop(pem);

    let context = CredentialContext::new(config.subject, config.issuer, config.audience)?;
    info!(
        subject = context.subject(),
        audience = context.audience(),
        endpoint = %context.token_endpoint(),
        "Credential context ready"
    );

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("building HTTP client")?;
    let mut flow = BearerFlow::new(context, signer)?
        .with_validity(config.assertion_ttl)
        .with_http_client(http);

    let exchange = flow.authenticate().await?;

    info!(status = exchange.response.status, "Token endpoint responded");
    for (name, value) in &exchange.response.headers {
        debug!(header = name.as_str(), value = value.as_str(), "Response header");
    }
    info!(
        token_type = exchange.grant.token_type().unwrap_or("Bearer"),
        instance_url = exchange.grant.instance_url().unwrap_or(""),
        "Access token issued"
    );

    println!("{}", exchange.grant.access_token());
    Ok(())
}
