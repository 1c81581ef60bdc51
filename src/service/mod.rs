mod errors;
mod prediction_service;

pub use errors::EvaluationError;
pub use prediction_service::PredictionService;
