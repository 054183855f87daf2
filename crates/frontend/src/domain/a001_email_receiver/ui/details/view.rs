use super::view_model::EmailReceiverDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_email_receiver::aggregate::EmailReceiver;
use leptos::prelude::*;
use thaw::*;

/// Edit dialog for an email trigger of a workflow.
///
/// Without `email_receiver` the dialog creates a new trigger.
#[component]
pub fn WorkflowEmailDialog(
    #[prop(into)] workflow_id: String,
    #[prop(optional)] email_receiver: Option<EmailReceiver>,
    #[prop(optional)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let vm = EmailReceiverDetailsViewModel::new(&workflow_id, email_receiver.as_ref());
    let is_edit = email_receiver.is_some();

    let on_open = move |_| {
        vm.reset(&workflow_id, email_receiver.as_ref());
        open.set(true);
    };

    let on_save = move |_| {
        vm.save_command(Callback::new(move |saved: EmailReceiver| {
            log::info!("email receiver {} saved", saved.id);
            open.set(false);
            if let Some(cb) = on_saved {
                cb.run(());
            }
        }));
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            attr:title=if is_edit { "Edit Email Trigger" } else { "Add Email Trigger" }
            on_click=on_open
        >
            {if is_edit { icon("edit") } else { icon("plus") }}
        </Button>

        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if vm.is_edit_mode() { "Edit Email Trigger" } else { "New Email Trigger" }}
                    </DialogTitle>
                    <DialogContent>
                        {move || vm.error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}

                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form-group">
                                <Label>"Name"</Label>
                                <input
                                    type="text"
                                    prop:value=move || vm.form.get().name
                                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                    placeholder="Support inbox"
                                />
                            </div>

                            <div class="form-group">
                                <Label>"Description"</Label>
                                <textarea
                                    prop:value=move || vm.form.get().description
                                    on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                                    rows="2"
                                />
                            </div>

                            <div class="form-group">
                                <Label>"Alias"</Label>
                                <input
                                    type="text"
                                    prop:value=move || vm.form.get().alias
                                    on:input=move |ev| vm.form.update(|f| f.alias = event_target_value(&ev))
                                    placeholder="support"
                                />
                            </div>

                            <div class="form-group">
                                <Label>"Allowed senders"</Label>
                                <textarea
                                    prop:value=move || vm.senders_text.get()
                                    on:input=move |ev| vm.senders_text.set(event_target_value(&ev))
                                    placeholder="*@example.com"
                                    rows="3"
                                />
                                <small class="text-muted">"One address per line. Leave empty to accept any sender."</small>
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.saving
                            on_click=on_save
                        >
                            "Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
