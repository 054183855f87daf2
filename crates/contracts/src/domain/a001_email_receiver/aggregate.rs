use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Email-триггер: входящий адрес, письма на который запускают workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReceiver {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Локальная часть адреса, если задана вручную
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Полный адрес (вычисляется сервером)
    #[serde(default)]
    pub email_address: String,

    /// Workflow, который запускается триггером
    #[serde(rename = "workflow", default)]
    pub workflow_name: String,

    /// Разрешённые отправители; пустой список = любые
    #[serde(default)]
    pub allowed_senders: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl EmailReceiver {
    /// Имя для отображения: name, если задан и не пустой, иначе id
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }

    /// Привязан ли триггер к указанному workflow
    pub fn belongs_to(&self, workflow_id: &str) -> bool {
        self.workflow_name == workflow_id
    }

    /// Форма редактирования, заполненная текущими значениями
    pub fn to_dto(&self) -> EmailReceiverDto {
        EmailReceiverDto {
            id: Some(self.id.clone()),
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            alias: self.alias.clone().unwrap_or_default(),
            workflow_name: self.workflow_name.clone(),
            allowed_senders: self.allowed_senders.clone(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO для создания/обновления email-триггера
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReceiverDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub alias: String,
    #[serde(rename = "workflow")]
    pub workflow_name: String,
    pub allowed_senders: Vec<String>,
}

impl EmailReceiverDto {
    /// Проверка формы перед отправкой на сервер
    pub fn validate(&self) -> Result<(), String> {
        if self.workflow_name.trim().is_empty() {
            return Err("Workflow is required".to_string());
        }

        let alias = self.alias.trim();
        if !alias.is_empty()
            && !alias
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(
                "Alias may only contain lowercase letters, digits, '-' and '_'".to_string(),
            );
        }

        if let Some(bad) = self
            .allowed_senders
            .iter()
            .map(|s| s.trim())
            .find(|s| !is_valid_sender(s))
        {
            return Err(format!("Invalid allowed sender: {}", bad));
        }

        Ok(())
    }

    /// Разбор списка отправителей из поля ввода (через запятую или перевод строки)
    pub fn parse_senders(input: &str) -> Vec<String> {
        input
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Отправитель: полный адрес (`user@example.com`) или домен с маской (`*@example.com`)
fn is_valid_sender(sender: &str) -> bool {
    match sender.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receiver(name: Option<&str>) -> EmailReceiver {
        EmailReceiver {
            id: "er1abc".to_string(),
            name: name.map(str::to_string),
            description: None,
            alias: None,
            email_address: "er1abc@mail.example.com".to_string(),
            workflow_name: "w1xyz".to_string(),
            allowed_senders: vec![],
            created: None,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(receiver(Some("Support inbox")).display_name(), "Support inbox");
        assert_eq!(receiver(None).display_name(), "er1abc");
        assert_eq!(receiver(Some("")).display_name(), "er1abc");
        assert_eq!(receiver(Some("  ")).display_name(), "  ");
    }

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": "er1abc",
            "name": "Support",
            "emailAddress": "support@mail.example.com",
            "workflow": "w1xyz",
            "allowedSenders": ["*@example.com"],
            "created": "2024-03-15T14:02:26Z",
            "links": {"workflow": "/api/workflows/w1xyz"}
        }"#;
        let r: EmailReceiver = serde_json::from_str(json).unwrap();
        assert_eq!(r.email_address, "support@mail.example.com");
        assert!(r.belongs_to("w1xyz"));
        assert!(!r.belongs_to("w2"));
        assert_eq!(r.allowed_senders, vec!["*@example.com".to_string()]);
        assert!(r.created.is_some());
    }

    #[test]
    fn test_validate() {
        let mut dto = receiver(None).to_dto();
        assert_eq!(dto.validate(), Ok(()));

        dto.alias = "Support Team".to_string();
        assert!(dto.validate().is_err());

        dto.alias = "support-team".to_string();
        dto.allowed_senders = vec!["*@example.com".into(), "bob@example.org".into()];
        assert_eq!(dto.validate(), Ok(()));

        dto.allowed_senders.push("example.org".into());
        assert_eq!(
            dto.validate(),
            Err("Invalid allowed sender: example.org".to_string())
        );

        dto.allowed_senders.clear();
        dto.workflow_name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_parse_senders() {
        assert_eq!(
            EmailReceiverDto::parse_senders(" a@x.com, *@y.org\n\n b@z.io ,"),
            vec!["a@x.com", "*@y.org", "b@z.io"]
        );
        assert!(EmailReceiverDto::parse_senders("  ").is_empty());
    }
}
