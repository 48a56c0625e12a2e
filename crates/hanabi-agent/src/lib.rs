pub mod agent;
pub mod features;
pub mod logging;
pub mod view;

pub use agent::{AgentError, KnowledgeAgent};
pub use features::AgentFeatures;
pub use view::BeliefView;
