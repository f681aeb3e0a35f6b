// server/src/state.rs
use sqlx::PgPool;

// Handlers only need the pool; each request builds its own generator and context.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
}
