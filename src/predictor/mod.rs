pub mod engine;
pub mod random;
pub mod ratings;
pub mod scoreline;

pub use engine::{Outcome, Prediction, PredictionRequest, Predictor};
