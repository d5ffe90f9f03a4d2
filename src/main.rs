#[tokio::main]
async fn main() {
    if let Err(err) = livestoq::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
