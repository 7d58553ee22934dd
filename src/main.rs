use xlsx_chat::app;

/// Main entry point for the XLSX-Chat web application.
///
/// Initializes logging and runs the web server. Configuration comes
/// from the environment; see [`xlsx_chat::config::Config`].
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    app::run().await
}
