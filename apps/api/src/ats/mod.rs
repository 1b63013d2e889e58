pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod report;
