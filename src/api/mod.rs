// ==========================================
// Nikora Promo Orders - API Layer
// ==========================================
// Scope: the facade a host application talks to
// Converts layer errors to caller-facing ones and owns
// the run-date and local-default decisions
// ==========================================

// Module declarations
pub mod error;
pub mod promo_api;

// Re-export API types
pub use error::{ApiError, ApiResult};
pub use promo_api::{
    InputOverrides, LocalInputs, PartitionTable, PromoOrderApi, PromoRunResponse,
};
