use super::*;

#[component]
/// Dialog overlay closed by its close button or the Escape key.
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:keydown=move |ev| {
                if is_escape(&ev) {
                    on_close.call(());
                }
            }
        >
            <section
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                <header class="ui-modal__header">
                    <h2 class="ui-modal__title">{title}</h2>
                    <Button
                        variant=ButtonVariant::Quiet
                        aria_label="Close"
                        ui_slot="modal-close"
                        on_click=Callback::new(move |_| on_close.call(()))
                    >
                        "×"
                    </Button>
                </header>
                <div class="ui-modal__body">{children()}</div>
            </section>
        </div>
    }
}

#[component]
/// Two-button confirmation shown while `open` is true.
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(default = "Delete")] confirm_label: &'static str,
    #[prop(default = ButtonVariant::Danger)] confirm_variant: ButtonVariant,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = store_value(title);
    let message = store_value(message);
    view! {
        <Show when=move || open.get()>
            <div
                class="ui-confirm"
                role="alertdialog"
                aria-label=title.get_value()
                data-ui-primitive="true"
                data-ui-kind="confirm-dialog"
                on:keydown=move |ev| {
                    if is_escape(&ev) {
                        on_cancel.call(());
                    }
                }
            >
                <h3 class="ui-confirm__title">{title.get_value()}</h3>
                <p class="ui-confirm__message">{message.get_value()}</p>
                <div class="ui-confirm__actions">
                    <Button on_click=Callback::new(move |_| on_cancel.call(()))>"Cancel"</Button>
                    <Button
                        variant=confirm_variant
                        ui_slot="confirm"
                        on_click=Callback::new(move |_| on_confirm.call(()))
                    >
                        {confirm_label}
                    </Button>
                </div>
            </div>
        </Show>
    }
}
