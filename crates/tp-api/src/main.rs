#[tokio::main]
async fn main() {
    if let Err(err) = tp_api::run().await {
        tracing::error!(error = %err, "tp-api failed");
        std::process::exit(1);
    }
}
