use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::api;
use crate::api::auth::Credentials;
use crate::components::{use_session, SessionStatus};
use crate::error::ApiError;

/// Message shown when the server rejects the credentials.
const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
/// Message for everything else (network down, server error).
const SIGN_IN_FAILED_MESSAGE: &str = "Sign in failed. Please try again.";

fn sign_in_error_message(err: &ApiError) -> &'static str {
    match err.status_code() {
        Some(401) | Some(403) => BAD_CREDENTIALS_MESSAGE,
        _ => SIGN_IN_FAILED_MESSAGE,
    }
}

/// Username/password form shown to signed-out visitors.
#[component]
pub fn LoginView() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut session = use_session();

    let mut submit = move || {
        if submitting() {
            return;
        }

        let credentials = Credentials {
            username: username.read().trim().to_string(),
            password: password.read().clone(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            error_message.set(Some("Enter your username and password.".to_string()));
            return;
        }

        submitting.set(true);
        error_message.set(None);

        spawn(async move {
            match api::auth::login(&credentials).await {
                Ok(user) => {
                    info!("signed in as {}", user.username);
                    session.set(SessionStatus::SignedIn(user));
                }
                Err(err) => {
                    error!("sign-in failed: {}", err);
                    error_message.set(Some(sign_in_error_message(&err).to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            submit();
        }
    };

    let error_text = error_message.read().clone();
    let button_label = if submitting() { "Signing in…" } else { "Sign in" };

    rsx! {
        section { class: "el-login",
            div { class: "el-login-card",
                h1 { class: "el-login-title", "Experts Land" }
                p { class: "el-login-subtitle", "Sign in to continue" }

                div { class: "el-field",
                    label { class: "el-field-label", "Username" }
                    input {
                        class: "el-input",
                        r#type: "text",
                        value: "{username}",
                        disabled: submitting(),
                        oninput: move |evt| username.set(evt.value()),
                        onkeypress: handle_keypress,
                    }
                }

                div { class: "el-field",
                    label { class: "el-field-label", "Password" }
                    input {
                        class: "el-input",
                        r#type: "password",
                        value: "{password}",
                        disabled: submitting(),
                        oninput: move |evt| password.set(evt.value()),
                        onkeypress: handle_keypress,
                    }
                }

                {error_text.map(|message| rsx! {
                    p { class: "el-error-text", "{message}" }
                })}

                button {
                    class: "el-btn el-btn--primary el-login-submit",
                    disabled: submitting(),
                    onclick: move |_| submit(),
                    "{button_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_credentials_get_the_specific_message() {
        assert_eq!(
            sign_in_error_message(&ApiError::Status(401)),
            BAD_CREDENTIALS_MESSAGE
        );
        assert_eq!(
            sign_in_error_message(&ApiError::Status(403)),
            BAD_CREDENTIALS_MESSAGE
        );
    }

    #[test]
    fn test_other_failures_get_the_generic_message() {
        assert_eq!(
            sign_in_error_message(&ApiError::Status(500)),
            SIGN_IN_FAILED_MESSAGE
        );
        assert_eq!(
            sign_in_error_message(&ApiError::Transport("connect refused".into())),
            SIGN_IN_FAILED_MESSAGE
        );
        assert_eq!(
            sign_in_error_message(&ApiError::Decode("bad shape".into())),
            SIGN_IN_FAILED_MESSAGE
        );
    }
}
