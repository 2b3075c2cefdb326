use gloo_timers::callback::Timeout;
use log::{debug, info};
use stylist::yew::styled_component;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::capture::{CaptureAction, CaptureState, DialogPhase};
use crate::config;

/// Dialog state plus the 2 s auto-close after a successful submission.
///
/// The pending timer lives inside an effect keyed on `(accepted, session)`, so
/// closing or reopening the dialog drops it before it can fire.
#[hook]
pub fn use_capture_dialog() -> UseReducerHandle<CaptureState> {
    let dialog = use_reducer(CaptureState::default);

    {
        let dispatcher = dialog.dispatcher();
        use_effect_with_deps(
            move |&(accepted, session)| {
                let timeout = accepted.then(|| {
                    debug!("Scheduling auto-close for session {}", session);
                    Timeout::new(config::AUTO_CLOSE_DELAY_MS, move || {
                        dispatcher.dispatch(CaptureAction::AutoClose { session });
                    })
                });
                // Dropping a Timeout cancels it
                move || drop(timeout)
            },
            (dialog.is_accepted(), dialog.session()),
        );
    }

    dialog
}

#[derive(Properties, PartialEq)]
pub struct CaptureDialogProps {
    pub state: CaptureState,
    pub on_email_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[styled_component(CaptureDialog)]
pub fn capture_dialog(props: &CaptureDialogProps) -> Html {
    let CaptureDialogProps { state, on_email_input, on_submit, on_close } = props;

    if !state.is_visible() {
        return html! {};
    }

    let onclose = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Capture dialog dismissed");
            on_close.emit(());
        })
    };

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = {
        let on_email_input = on_email_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email_input.emit(input.value());
        })
    };

    let error = state.error();

    html! {
        <div class={css!(r#"
            position: fixed;
            inset: 0;
            background: rgba(0, 0, 0, 0.75);
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 50;
            padding: 1rem;
        "#)}>
            <div class={css!(r#"
                position: relative;
                width: 100%;
                max-width: 28rem;
                padding: 2rem;
                background: #1F2937;
                border: 1px solid #374151;
                border-radius: 0.75rem;
                color: #fff;

                .dialog-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9CA3AF;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .dialog-close:hover {
                    color: #fff;
                }
                label {
                    display: block;
                    font-size: 0.875rem;
                    color: #D1D5DB;
                    margin-bottom: 0.5rem;
                }
                input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    background: #374151;
                    border: 1px solid #4B5563;
                    border-radius: 0.5rem;
                    color: #fff;
                }
                input.invalid {
                    border-color: #EF4444;
                }
                .dialog-error {
                    color: #F87171;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .dialog-submit {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.75rem 1.5rem;
                    background: #ea9b25;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .dialog-submit:hover {
                    background: #d18a1f;
                }
                .dialog-success {
                    text-align: center;
                }
                .dialog-check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #ea9b25;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
            "#)}>
                <button class="dialog-close" onclick={onclose} aria-label="Cerrar">{"×"}</button>
                {
                    if state.phase() == DialogPhase::Success {
                        html! {
                            <div class="dialog-success">
                                <div class="dialog-check">{"✓"}</div>
                                <h3>{"¡Perfecto!"}</h3>
                                <p>{"Te has registrado exitosamente. Pronto recibirás más información."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <h3>{"Regístrate al evento gratuito"}</h3>
                                <p>{"Ingresa tu correo electrónico para asegurar tu lugar en esta sesión exclusiva."}</p>
                                <form {onsubmit} novalidate={true}>
                                    <label for="capture-email">{"Correo electrónico"}</label>
                                    <input
                                        type="email"
                                        id="capture-email"
                                        class={classes!(error.is_some().then_some("invalid"))}
                                        value={state.email().to_string()}
                                        placeholder="tu-email@ejemplo.com"
                                        {oninput}
                                    />
                                    if let Some(error) = error {
                                        <p class="dialog-error">{error.to_string()}</p>
                                    }
                                    <button type="submit" class="dialog-submit">{"Enviar"}</button>
                                </form>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
