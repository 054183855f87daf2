use crate::domain::a001_email_receiver::ui::details::WorkflowEmailDialog;
use crate::shared::components::copy_text::CopyText;
use crate::shared::components::delete_trigger::DeleteWorkflowTrigger;
use contracts::domain::a001_email_receiver::aggregate::EmailReceiver;
use contracts::enums::trigger_type::TriggerType;
use leptos::prelude::*;

/// One email trigger of a workflow: name (or id), copyable address, edit and
/// delete controls. Edits and deletion are handled by the child controls;
/// `on_changed` lets the owning list refresh afterwards.
#[component]
pub fn EmailTriggerEntry(
    receiver: EmailReceiver,
    #[prop(into)] workflow_id: String,
    #[prop(optional)] on_changed: Option<Callback<()>>,
) -> impl IntoView {
    let name = receiver.display_name().to_string();
    let email_address = receiver.email_address.clone();
    let id = receiver.id.clone();

    view! {
        <div class="trigger-entry" style="display: flex; justify-content: space-between; align-items: center;">
            <p>{name}</p>

            <div class="trigger-entry__actions" style="display: flex; gap: 8px;">
                <CopyText
                    text=email_address
                    class="copy-text--plain text-muted text-sm"
                    text_class="p-0"
                    hide_icon=true
                />

                <WorkflowEmailDialog
                    workflow_id=workflow_id
                    email_receiver=receiver
                    on_saved=on_changed.unwrap_or_else(|| Callback::new(|_: ()| {}))
                />

                <DeleteWorkflowTrigger
                    trigger_type=TriggerType::Email
                    id=id
                    on_deleted=on_changed.unwrap_or_else(|| Callback::new(|_: ()| {}))
                />
            </div>
        </div>
    }
}
