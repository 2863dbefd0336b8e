use leptos::{component, view, IntoView};

use crate::auth::{EMAIL_FIELD, PASSWORD_FIELD};
use crate::paths;

/// swaps the submit button for its pending twin while the sign in runs
const ON_SUBMIT: &str = "this.querySelector('.submit').replaceWith(document.getElementById('login-pending').content.cloneNode(true))";

#[component]
pub fn SubmitButton(pending: bool) -> impl IntoView {
    let label = if pending { "Entrando..." } else { "Entrar" };
    let spinner = pending.then(|| view! { <span class="spinner" aria-hidden="true"></span> });

    view! {
        <button class="button primary gradient-green submit" type="submit" disabled=pending>
            {spinner}
            {label}
        </button>
    }
}

/// `error` is shown exactly as the sign in action produced it, `invalid` names
/// the input it is about when there is one
#[component]
pub fn LoginForm(
    error: Option<String>,
    invalid: Option<&'static str>,
    email: String,
) -> impl IntoView {
    let error = error.map(|message| view! { <div class="form-error" role="alert">{message}</div> });
    let flag = move |field: &'static str| (invalid == Some(field)).then_some("true");

    view! {
        <div class="login">
            <a href={paths::HOME} class="brand">
                <span class="brand-mark gradient-green">"⚽"</span>
                <span class="brand-name">"PeladaFC"</span>
            </a>
            <div class="card">
                <h1>"Bem-vindo de volta!"</h1>
                <p class="card-description">
                    "Entre na sua conta para continuar organizando suas peladas"
                </p>
                <form class="login-form" method="post" action={paths::LOGIN} onsubmit=ON_SUBMIT>
                    {error}
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="seu@email.com"
                            value=email
                            aria-invalid={flag(EMAIL_FIELD)}
                            required
                        />
                    </div>
                    <div class="field">
                        <label for="password">"Senha"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            aria-invalid={flag(PASSWORD_FIELD)}
                            required
                        />
                    </div>
                    <SubmitButton pending=false/>
                    <template id="login-pending">
                        <SubmitButton pending=true/>
                    </template>
                    <p class="card-meta">
                        "Não tem uma conta? "
                        <a href={paths::SIGN_UP}>"Cadastre-se"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
