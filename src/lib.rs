pub mod api;
pub mod client;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::experience;
pub use modules::personal_info;
pub use modules::project;
pub use modules::seed;
pub use modules::skill;
pub use modules::technology;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::ContactUseCases;
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::ExperienceUseCases;
use crate::personal_info::adapter::outgoing::PersonalInfoRepositoryPostgres;
use crate::personal_info::application::PersonalInfoUseCases;
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::ProjectUseCases;
use crate::seed::adapter::outgoing::PortfolioSeederPostgres;
use crate::seed::application::ports::incoming::use_cases::SeedPortfolioUseCase;
use crate::seed::application::service::SeedPortfolioService;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::skill::application::SkillUseCases;
use crate::technology::adapter::outgoing::TechnologyRepositoryPostgres;
use crate::technology::application::TechnologyUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub technology: TechnologyUseCases,
    pub contact: ContactUseCases,
    pub personal_info: PersonalInfoUseCases,
    pub seed: Arc<dyn SeedPortfolioUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every use case onto the Postgres adapters sharing one pool.
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        Self {
            project: ProjectUseCases::from_repository(ProjectRepositoryPostgres::new(
                Arc::clone(&db),
            )),
            skill: SkillUseCases::from_repository(SkillRepositoryPostgres::new(Arc::clone(&db))),
            experience: ExperienceUseCases::from_repository(ExperienceRepositoryPostgres::new(
                Arc::clone(&db),
            )),
            technology: TechnologyUseCases::from_repository(TechnologyRepositoryPostgres::new(
                Arc::clone(&db),
            )),
            contact: ContactUseCases::from_repository(ContactRepositoryPostgres::new(
                Arc::clone(&db),
            )),
            personal_info: PersonalInfoUseCases::from_repository(
                PersonalInfoRepositoryPostgres::new(Arc::clone(&db)),
            ),
            seed: Arc::new(SeedPortfolioService::new(PortfolioSeederPostgres::new(db))),
        }
    }
}

/// Registers extractor error handlers, every API route and the docs.
/// `/ready` additionally needs `web::Data<Arc<DatabaseConnection>>`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(custom_json_config())
        .app_data(custom_path_config())
        .app_data(custom_query_config());

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::set_project_status_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Experiences
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_single_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Technologies
    cfg.service(crate::technology::adapter::incoming::web::routes::get_technologies_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::get_single_technology_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::create_technology_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::update_technology_handler);
    cfg.service(crate::technology::adapter::incoming::web::routes::delete_technology_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_single_contact_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_contact_status_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_message_handler);
    // Personal info
    cfg.service(crate::personal_info::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(crate::personal_info::adapter::incoming::web::routes::update_personal_info_handler);
    // Seed
    cfg.service(crate::seed::adapter::incoming::web::routes::seed_portfolio_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
pub async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    info!("Server run on: {} ({})", server_url, config.rust_env);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let state = AppState::from_connection(Arc::clone(&db_arc));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(configure_api)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}
