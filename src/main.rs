#[tokio::main]
async fn main() {
    if let Err(e) = npm_downloads_proof::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
