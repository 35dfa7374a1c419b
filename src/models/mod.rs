mod health_status;
mod state;

pub use health_status::HealthStatus;
pub use state::AppState;
