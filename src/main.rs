use upi_bridge::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}
