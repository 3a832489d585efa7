mod batch;
mod cli;
mod infra;
mod routes;
mod server;

use skillgap::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
