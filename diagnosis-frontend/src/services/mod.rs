pub mod diagnosis;
pub mod knowledge_base;
pub mod metrics;
pub mod predictor;
pub mod vectorizer;

pub use diagnosis::DiagnosisService;
pub use knowledge_base::KnowledgeBase;
pub use predictor::{LinearModel, MockPredictor, Predictor, PredictorError};
pub use vectorizer::SymptomVectorizer;
