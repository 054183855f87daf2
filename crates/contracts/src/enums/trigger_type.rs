use serde::{Deserialize, Serialize};

/// Типы триггеров workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Email,
    Schedule,
    Webhook,
}

impl TriggerType {
    /// Код типа (как в API и в query-параметрах)
    pub fn code(&self) -> &'static str {
        match self {
            TriggerType::Email => "email",
            TriggerType::Schedule => "schedule",
            TriggerType::Webhook => "webhook",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            TriggerType::Email => "Email Trigger",
            TriggerType::Schedule => "Schedule",
            TriggerType::Webhook => "Webhook",
        }
    }

    /// Путь коллекции в API
    pub fn api_collection(&self) -> &'static str {
        match self {
            TriggerType::Email => "/api/email-receivers",
            TriggerType::Schedule => "/api/cronjobs",
            TriggerType::Webhook => "/api/webhooks",
        }
    }

    pub fn all() -> Vec<TriggerType> {
        vec![TriggerType::Email, TriggerType::Schedule, TriggerType::Webhook]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "email" => Some(TriggerType::Email),
            "schedule" => Some(TriggerType::Schedule),
            "webhook" => Some(TriggerType::Webhook),
            _ => None,
        }
    }
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for t in TriggerType::all() {
            assert_eq!(TriggerType::from_code(t.code()), Some(t));
        }
        assert_eq!(TriggerType::from_code("cron"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TriggerType::Webhook).unwrap();
        assert_eq!(json, "\"webhook\"");
    }
}
