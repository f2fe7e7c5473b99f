pub mod assessment;
pub mod llm;
pub mod scoring;

pub use assessment::AssessmentService;
pub use llm::LlmClient;
