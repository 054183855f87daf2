//! DeleteWorkflowTrigger — delete button with confirmation dialog for any
//! workflow trigger type.

use crate::shared::api_utils::api_item_url;
use crate::shared::icons::icon;
use contracts::enums::trigger_type::TriggerType;
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DeleteWorkflowTrigger(
    trigger_type: TriggerType,
    #[prop(into)] id: String,
    /// Called after the server confirmed the deletion
    #[prop(optional)]
    on_deleted: Option<Callback<()>>,
) -> impl IntoView {
    let show_confirm = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let id_for_delete = id.clone();
    let on_confirm = move |_| {
        let id = id_for_delete.clone();
        deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match delete_trigger(trigger_type, &id).await {
                Ok(()) => {
                    log::info!("deleted {} trigger {}", trigger_type, id);
                    show_confirm.set(false);
                    if let Some(cb) = on_deleted {
                        cb.run(());
                    }
                }
                Err(e) => error.set(Some(e)),
            }
            deleting.set(false);
        });
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            attr:title=format!("Delete {}", trigger_type.display_name())
            on_click=move |_| {
                error.set(None);
                show_confirm.set(true);
            }
        >
            {icon("delete")}
        </Button>

        <Dialog open=show_confirm>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Delete {}?", trigger_type.display_name())}</DialogTitle>
                    <DialogContent>
                        <p>{format!("The trigger `{}` will be removed permanently.", id)}</p>
                        {move || error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=deleting
                            on_click=on_confirm
                        >
                            "Delete"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| show_confirm.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

async fn delete_trigger(trigger_type: TriggerType, id: &str) -> Result<(), String> {
    let resp = Request::delete(&api_item_url(trigger_type.api_collection(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
