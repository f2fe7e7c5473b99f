pub mod answers;
pub mod catalog;
pub mod config;
pub mod report;

pub use answers::{Answer, BusinessContext, ContextError, QuestionnaireAnswers};
pub use catalog::{Question, QuestionId};
pub use config::Config;
pub use report::*;
