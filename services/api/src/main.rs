use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod jwt;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod validation;

use crate::{
    jwt::{JwtConfig, JwtService},
    repositories::{
        ExpenseRepository, IncomeRepository, InvestmentRepository, LoanRepository, UserRepository,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting finance service");

    // Initialize database connection pool
    let db_config = common::database::DatabaseConfig::from_env()?;
    let pool = common::database::init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(&jwt_config);

    let app_state = AppState {
        jwt_service,
        user_repository: UserRepository::new(pool.clone()),
        expense_repository: ExpenseRepository::new(pool.clone()),
        income_repository: IncomeRepository::new(pool.clone()),
        investment_repository: InvestmentRepository::new(pool.clone()),
        loan_repository: LoanRepository::new(pool.clone()),
        db_pool: pool,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Finance service listening on 0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
