use crate::domain::a001_email_receiver::api;
use contracts::domain::a001_email_receiver::aggregate::{EmailReceiver, EmailReceiverDto};
use leptos::prelude::*;

/// ViewModel for the email receiver edit form
#[derive(Clone, Copy)]
pub struct EmailReceiverDetailsViewModel {
    pub form: RwSignal<EmailReceiverDto>,
    /// Allowed senders as typed by the user, one per line or comma separated
    pub senders_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EmailReceiverDetailsViewModel {
    pub fn new(workflow_id: &str, receiver: Option<&EmailReceiver>) -> Self {
        let dto = initial_form(workflow_id, receiver);
        let senders_text = dto.allowed_senders.join("\n");
        Self {
            form: RwSignal::new(dto),
            senders_text: RwSignal::new(senders_text),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Restore the form from the receiver (dialog reopened after cancel)
    pub fn reset(&self, workflow_id: &str, receiver: Option<&EmailReceiver>) {
        let dto = initial_form(workflow_id, receiver);
        self.senders_text.set(dto.allowed_senders.join("\n"));
        self.form.set(dto);
        self.error.set(None);
    }

    /// Validate and save; `on_saved` runs after the server accepted the form
    pub fn save_command(&self, on_saved: Callback<EmailReceiver>) {
        let mut current = self.form.get_untracked();
        current.allowed_senders = EmailReceiverDto::parse_senders(&self.senders_text.get_untracked());

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    error.set(None);
                    on_saved.run(saved);
                }
                Err(e) => {
                    log::error!("save email receiver: {}", e);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    }
}

fn initial_form(workflow_id: &str, receiver: Option<&EmailReceiver>) -> EmailReceiverDto {
    match receiver {
        Some(r) => r.to_dto(),
        None => EmailReceiverDto {
            workflow_name: workflow_id.to_string(),
            ..Default::default()
        },
    }
}
