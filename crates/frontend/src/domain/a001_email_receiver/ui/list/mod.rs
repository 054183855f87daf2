use crate::domain::a001_email_receiver::api;
use crate::domain::a001_email_receiver::ui::details::WorkflowEmailDialog;
use crate::domain::a001_email_receiver::ui::entry::EmailTriggerEntry;
use crate::shared::icons::icon;
use contracts::domain::a001_email_receiver::aggregate::EmailReceiver;
use leptos::prelude::*;

/// Email triggers of one workflow, with an "add" dialog
#[component]
pub fn WorkflowEmailTriggers(#[prop(into)] workflow_id: String) -> impl IntoView {
    let (items, set_items) = signal::<Vec<EmailReceiver>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = {
        let workflow_id = workflow_id.clone();
        move || {
            let workflow_id = workflow_id.clone();
            set_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_for_workflow(&workflow_id).await {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("fetch email receivers: {}", e);
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    fetch();
    let refresh = Callback::new({
        let fetch = fetch.clone();
        move |_: ()| fetch()
    });

    let workflow_for_rows = workflow_id.clone();

    view! {
        <section class="workflow-triggers">
            <div class="header">
                <h3 class="header__title">"Email Triggers"</h3>
                <div class="header__actions">
                    <WorkflowEmailDialog workflow_id=workflow_id.clone() on_saved=refresh />
                    <button class="button button--secondary" on:click=move |_| refresh.run(())>
                        {icon("refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || loading.get()>
                <p class="text-muted">"Loading..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none() && items.get().is_empty()>
                <p class="text-muted">"No email triggers"</p>
            </Show>

            <div class="workflow-triggers__list">
                {move || {
                    let workflow_id = workflow_for_rows.clone();
                    items.get().into_iter().map(|receiver| {
                        view! {
                            <EmailTriggerEntry
                                receiver=receiver
                                workflow_id=workflow_id.clone()
                                on_changed=refresh
                            />
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}
