use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = misfinanzas::args::parse();
    misfinanzas::cli::main(args).await
}
