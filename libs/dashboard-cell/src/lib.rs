// =====================================================================================
// DASHBOARD CELL - HEALTH SUMMARY FOR TODAY
// =====================================================================================
//
// Read-only view over the appointment and medication stores: headline counts
// plus short previews of what is coming up.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use handlers::DashboardState;
pub use models::{DashboardQuery, DashboardSummary};
pub use router::dashboard_routes;
pub use services::build_summary;
