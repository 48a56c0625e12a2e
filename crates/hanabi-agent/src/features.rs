/// Runtime switches for a [`crate::KnowledgeAgent`], read from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentFeatures {
    log_knowledge: bool,
    strict_contradictions: bool,
}

impl AgentFeatures {
    pub const fn new(log_knowledge: bool, strict_contradictions: bool) -> Self {
        Self {
            log_knowledge,
            strict_contradictions,
        }
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    /// Dump a JSON snapshot of the hand after every observation.
    pub const fn log_knowledge(self) -> bool {
        self.log_knowledge
    }

    /// Treat a contradicting hint as an error instead of a diagnostic.
    pub const fn strict_contradictions(self) -> bool {
        self.strict_contradictions
    }

    pub fn with_strict_contradictions(mut self, enabled: bool) -> Self {
        self.strict_contradictions = enabled;
        self
    }

    pub fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_knowledge = read("HANABI_LOG_KNOWLEDGE")
            .map(|raw| is_truthy(&raw))
            .unwrap_or(false);
        let strict_contradictions = read("HANABI_STRICT")
            .map(|raw| is_truthy(&raw))
            .unwrap_or(false);
        Self {
            log_knowledge,
            strict_contradictions,
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON")
}
