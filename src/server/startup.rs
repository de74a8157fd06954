use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::AppError,
    router::{self, ApiDoc},
    state::AppState,
};

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info` for this crate and for request traces.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maze=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Assembles the complete HTTP application.
///
/// Merges the API routes into an OpenAPI-aware router, serves the collected document at
/// `OPENAPI_PATH` together with Swagger UI at `/swagger-ui`, and wraps everything in a
/// request tracing layer.
pub fn build_app(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(router::router())
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use rand::{rngs::StdRng, SeedableRng};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    use crate::{
        maze::Maze,
        server::{
            data::{guess::GuessRepository, maze::MazeRepository},
            model::{guess::CreateGuessParam, maze::CreateMazeRecordParam},
        },
    };

    use super::AppError;

    async fn migrated() -> Result<DatabaseConnection, AppError> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        Ok(db)
    }

    #[tokio::test]
    async fn migrations_apply_and_match_entities() -> Result<(), AppError> {
        let db = migrated().await?;

        let generated = Maze::generate(9, 6, &mut StdRng::seed_from_u64(u64::MAX))?;
        let stored = MazeRepository::new(&db)
            .create(CreateMazeRecordParam::from_maze(u64::MAX, &generated))
            .await?;

        let found = MazeRepository::new(&db)
            .find_by_id(stored.id)
            .await?
            .expect("maze stored through migrated schema");
        assert_eq!(found.seed, u64::MAX);
        assert_eq!(found.to_maze()?, generated);

        let guess_repo = GuessRepository::new(&db);
        let guess = guess_repo
            .create(CreateGuessParam {
                maze_id: stored.id,
                guess: generated.secret().to_string(),
                correct: true,
            })
            .await?;

        let guesses = guess_repo.get_by_maze_id(stored.id).await?;
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].id, guess.id);
        assert!(guesses[0].correct);

        Ok(())
    }

    #[tokio::test]
    async fn migrations_roll_back_cleanly() -> Result<(), AppError> {
        let db = migrated().await?;

        Migrator::down(&db, None).await?;
        Migrator::up(&db, None).await?;

        assert!(MazeRepository::new(&db).find_by_id(1).await?.is_none());

        Ok(())
    }
}
