//! CLI command implementations.

use color_eyre::eyre::Result;

use emporium_server::{Server, ServerConfig};

/// Start the API server.
pub async fn serve(host: String, port: u16, cors: bool, seed: bool) -> Result<()> {
    tracing::info!("Starting Emporium server...");

    let addr = format!("{host}:{port}").parse()?;
    let config = ServerConfig::builder()
        .addr(addr)
        .cors(cors)
        .seed(seed)
        .build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Display version and build info.
pub fn version() {
    println!("emporium {}", env!("CARGO_PKG_VERSION"));
    println!("  catalog API server");
}
