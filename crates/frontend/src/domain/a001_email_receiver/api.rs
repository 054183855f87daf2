//! API client for email receivers (email workflow triggers).

use crate::shared::api_utils::{api_item_url, api_url};
use contracts::domain::a001_email_receiver::aggregate::{EmailReceiver, EmailReceiverDto};
use contracts::enums::trigger_type::TriggerType;
use gloo_net::http::Request;

/// List all email receivers
pub async fn fetch_all() -> Result<Vec<EmailReceiver>, String> {
    let resp = Request::get(&api_url(TriggerType::Email.api_collection()))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Email receivers bound to one workflow
pub async fn fetch_for_workflow(workflow_id: &str) -> Result<Vec<EmailReceiver>, String> {
    let all = fetch_all().await?;
    Ok(all.into_iter().filter(|r| r.belongs_to(workflow_id)).collect())
}

/// Where a save goes: `POST` to the collection for a new receiver, `PUT` to
/// the item for an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget<'a> {
    Create,
    Update(&'a str),
}

impl<'a> SaveTarget<'a> {
    pub fn for_dto(dto: &'a EmailReceiverDto) -> Self {
        match dto.id.as_deref() {
            Some(id) if !id.is_empty() => SaveTarget::Update(id),
            _ => SaveTarget::Create,
        }
    }
}

/// Create (no id) or update an email receiver
pub async fn save(dto: &EmailReceiverDto) -> Result<EmailReceiver, String> {
    let collection = TriggerType::Email.api_collection();
    let request = match SaveTarget::for_dto(dto) {
        SaveTarget::Update(id) => Request::put(&api_item_url(collection, id)),
        SaveTarget::Create => Request::post(&api_url(collection)),
    };
    let resp = request
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", resp.status(), body));
    }
    resp.json().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_target() {
        let new_form = EmailReceiverDto {
            workflow_name: "w1".into(),
            ..Default::default()
        };
        assert_eq!(SaveTarget::for_dto(&new_form), SaveTarget::Create);

        let blank_id = EmailReceiverDto {
            id: Some(String::new()),
            ..new_form.clone()
        };
        assert_eq!(SaveTarget::for_dto(&blank_id), SaveTarget::Create);

        let existing = EmailReceiverDto {
            id: Some("er1".into()),
            ..new_form
        };
        assert_eq!(SaveTarget::for_dto(&existing), SaveTarget::Update("er1"));
    }
}
