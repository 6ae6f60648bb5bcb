mod calculate;
mod cli;
mod infra;
mod routes;
mod server;

use grade_boost::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
