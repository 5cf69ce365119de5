pub mod diagnosis;
pub mod features;
pub mod schema;

pub use diagnosis::{Advisory, DiagnosisOutcome, DiseaseProfile};
pub use features::FeatureVector;
pub use schema::SymptomSchema;
