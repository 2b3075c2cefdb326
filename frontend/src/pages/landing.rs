use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::capture::CaptureAction;
use crate::components::capture_dialog::{use_capture_dialog, CaptureDialog};
use crate::config;

#[function_component(Landing)]
pub fn landing() -> Html {
    let dialog = use_capture_dialog();
    // Draft typed into the hero card. Never validated, never forwarded to the dialog.
    let inline_email = use_state(String::new);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_dialog = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening capture dialog from call-to-action button");
            dialog.dispatch(CaptureAction::Open);
        })
    };

    let on_inline_submit = {
        let dialog = dialog.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Opening capture dialog from hero form");
            dialog.dispatch(CaptureAction::Open);
        })
    };

    let on_inline_input = {
        let inline_email = inline_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inline_email.set(input.value());
        })
    };

    let on_email_input = {
        let dialog = dialog.clone();
        Callback::from(move |email: String| dialog.dispatch(CaptureAction::UpdateEmail(email)))
    };

    let on_submit = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.dispatch(CaptureAction::Submit))
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.dispatch(CaptureAction::Close))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #0A0F1A;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .section-background {
                        position: absolute;
                        inset: 0;
                    }
                    .section-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.1;
                    }
                    .section-background::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: rgba(10, 15, 26, 0.8);
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 2rem 1rem;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                        margin-left: auto;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                        line-height: 1.2;
                    }
                    .highlight {
                        color: #ea9b25;
                    }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        color: #D1D5DB;
                        line-height: 1.6;
                    }
                    .registration-card {
                        background: linear-gradient(135deg, #1a2332, #0f1419);
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(234, 155, 37, 0.2);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .registration-card h3 {
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    }
                    .registration-card h2 {
                        color: #ea9b25;
                        font-size: 1.5rem;
                        font-weight: 900;
                        letter-spacing: 0.05em;
                    }
                    .card-lines {
                        display: flex;
                        gap: 0.5rem;
                        margin: 0.5rem 0 1.5rem;
                    }
                    .card-lines div {
                        flex: 1;
                        height: 2px;
                        background: linear-gradient(to right, #ea9b25, transparent);
                    }
                    .card-lines div:last-child {
                        background: linear-gradient(to left, #ea9b25, transparent);
                    }
                    .inline-form input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        background: rgba(55, 65, 81, 0.5);
                        border: 1px solid #4B5563;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-weight: 500;
                    }
                    .cta-button {
                        width: 100%;
                        padding: 1rem 1.5rem;
                        background: linear-gradient(to right, #ea9b25, #f4a935);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        border: none;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        box-shadow: 0 0 20px rgba(234, 155, 37, 0.3);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .cta-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 30px rgba(234, 155, 37, 0.4);
                    }
                    .schedule {
                        padding: 4rem 1rem;
                    }
                    .schedule-panel {
                        max-width: 56rem;
                        margin: 0 auto;
                        background: #111827;
                        border: 1px solid #1F2937;
                        border-radius: 0.75rem;
                        padding: 3rem 2rem;
                    }
                    .schedule-date {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .schedule-date h2 {
                        font-size: 3.5rem;
                        margin: 0;
                    }
                    .schedule-date h2.highlight {
                        font-size: 2.75rem;
                    }
                    .schedule-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .schedule-entry {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                        background: #0A0F1A;
                        border: 1px solid rgba(234, 155, 37, 0.2);
                        border-radius: 0.75rem;
                        font-weight: 600;
                        box-shadow: 0 0 20px rgba(234, 155, 37, 0.2);
                    }
                    .schedule-entry img {
                        width: 4rem;
                        height: 3rem;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        border: 2px solid rgba(234, 155, 37, 0.3);
                    }
                    .worldwide {
                        text-align: center;
                        padding: 1rem 1.5rem;
                        margin-bottom: 1.5rem;
                        border: 1px solid rgba(234, 155, 37, 0.2);
                        border-radius: 0.75rem;
                        font-size: 1.125rem;
                    }
                    .details {
                        position: relative;
                        padding: 4rem 1rem;
                    }
                    .details-content {
                        position: relative;
                        z-index: 1;
                        max-width: 40rem;
                        margin-left: auto;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        color: #D1D5DB;
                    }
                    .details-content strong {
                        color: #fff;
                    }
                    .details-quote {
                        margin: 2rem 0;
                        padding: 1rem;
                        border-left: 4px solid #ea9b25;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, rgba(234, 155, 37, 0.2), transparent);
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-align: center;
                    }
                    .details-cta {
                        position: relative;
                        z-index: 1;
                        max-width: 40rem;
                        margin: 3rem 0 2rem auto;
                    }
                "#}
            </style>

            // Hero Section
            <section class="hero">
                <div class="section-background">
                    <img src={config::HERO_BACKGROUND} alt="Background" />
                </div>
                <div class="hero-content">
                    <h1>
                        {"Descubrirás como eliminar grasa y volver a tener el "}
                        <span class="highlight">{"mejor cuerpo de tu vida"}</span>
                        {" en 28 días"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Pierde de 3 a 10 kilos en solo 28 días, sin dietas extremas ni entrenar cada día. \
                          Solo 30 minutos, 3 veces por semana, con el método que ya transformó la vida de más de "}
                        <strong>{"10.000 mujeres mayores de 30 años"}</strong>
                        {"."}
                    </p>

                    <div class="registration-card">
                        <h3>{"REGÍSTRATE CON TU CORREO A LA SESIÓN"}</h3>
                        <h2>{"TOTALMENTE GRATIS"}</h2>
                        <div class="card-lines">
                            <div></div>
                            <div></div>
                        </div>
                        <form class="inline-form" onsubmit={on_inline_submit} novalidate={true}>
                            <input
                                type="email"
                                value={(*inline_email).clone()}
                                oninput={on_inline_input}
                                placeholder="INGRESA TU CORREO ELECTRÓNICO"
                            />
                            <button type="submit" class="cta-button">
                                {"¡QUIERO REGISTRARME A LA SESIÓN! →"}
                            </button>
                        </form>
                    </div>
                </div>
            </section>

            // Date & Schedule Section
            <section class="schedule">
                <div class="schedule-panel">
                    <div class="schedule-date">
                        <h2>{config::EVENT_WEEKDAY}</h2>
                        <h2 class="highlight">{config::EVENT_DATE}</h2>
                    </div>

                    <div class="schedule-grid">
                        { for config::SCHEDULE.iter().map(|entry| html! {
                            <div class="schedule-entry" key={entry.time.to_string()}>
                                <span class="highlight">{entry.time}</span>
                                <img src={entry.flag} alt="Flag" />
                                <span>{entry.city()}</span>
                            </div>
                        }) }
                    </div>

                    <div class="worldwide">
                        <p>{"Disponible en todo el mundo"}</p>
                    </div>
                    <button class="cta-button" onclick={open_dialog.clone()}>
                        {"Click aquí para unirte →"}
                    </button>
                </div>
            </section>

            // Session Details Section
            <section class="details">
                <div class="section-background">
                    <img src={config::DETAILS_BACKGROUND} alt="Background" />
                </div>
                <div class="details-content">
                    <h2>{"¿De qué hablaremos en esta sesión?"}</h2>
                    <p>
                        {"Después de más de "}
                        <strong>{"20 años transformando cuerpos reales"}</strong>
                        {" y acompañar a más de "}
                        <strong>{"10.000 mujeres"}</strong>
                        {"…"}
                    </p>
                    <p>
                        {"Quiero mostrarte el método más realista, humano y eficaz para volver a sentirte bien \
                          en tu cuerpo, sin dietas extremas ni entrenamientos imposibles."}
                    </p>
                    <p>
                        {"Un enfoque que te permitirá "}
                        <strong>{"perder de 3 a 10 kilos en 28 días"}</strong>
                        {", ganar energía real y "}
                        <strong>{"recuperar tu autoestima"}</strong>
                        {"… entrenando desde casa solo 30 minutos, 3 veces por semana, con una rutina que se adapta a ti, "}
                        <strong>{"y no tú a ella"}</strong>
                        {"."}
                    </p>
                    <p>
                        {"Esta clase es para mujeres reales. Mujeres con poco tiempo, con responsabilidades, \
                          con hijos o con mil cosas en la cabeza…"}
                    </p>
                    <div class="details-quote">
                        {"Pero con ganas de volver a tener su mejor versión física."}
                    </div>
                    <p>
                        {"Todo lo que me tomó años entender, después de mis embarazos, mi propio cambio físico y \
                          mental, y el trabajo con miles de mujeres, lo voy a entregarte en esta clase gratuita."}
                    </p>
                    <p>
                        {"Esto "}
                        <strong>{"no es un reto, ni un entrenamiento más"}</strong>
                        {". Es la "}
                        <strong>{"primera y única vez"}</strong>
                        {" que revelo públicamente mi método completo, en vivo."}
                    </p>
                    <p>{"Y créeme… si estás aquí, no es casualidad."}</p>
                </div>
                <div class="details-cta">
                    <button class="cta-button" onclick={open_dialog}>
                        {"Click aquí para unirte →"}
                    </button>
                </div>
            </section>

            <CaptureDialog
                state={(*dialog).clone()}
                {on_email_input}
                {on_submit}
                {on_close}
            />
        </div>
    }
}
