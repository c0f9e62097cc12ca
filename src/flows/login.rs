//! Login flow
//!
//! Looks the username up in the store and compares the password. No session
//! is created; the keep-logged-in flag only changes the confirmation text.

use log::{debug, info};

use crate::auth::credentials::LoginForm;
use crate::auth::results::{Field, Form, FormOutcome};
use crate::auth::validator::{trim_input, validate_login};
use crate::presentation::Presenter;
use crate::storage::{KeyValueStorage, UserStore};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_SUCCESS_PERSISTENT: &str = "Login successful! You will stay logged in.";

/// Checks `form` against the stored users.
///
/// An unknown username and a wrong password produce different messages.
pub fn submit_login<S, P>(store: &UserStore<S>, form: &LoginForm, presenter: &mut P) -> FormOutcome
where
    S: KeyValueStorage,
    P: Presenter,
{
    let username = trim_input(&form.username);
    debug!("Login submitted for {:?}", username);

    let user = if username.is_empty() {
        None
    } else {
        store.find_by_username(username)
    };
    let error = match validate_login(username, &form.password, user) {
        Ok(user) => {
            presenter.clear_field_highlight(Field::Username);
            presenter.clear_field_highlight(Field::Password);
            info!("User {} logged in", user.username);

            let message = if form.keep_logged_in {
                LOGIN_SUCCESS_PERSISTENT
            } else {
                LOGIN_SUCCESS
            };
            presenter.clear_error();
            presenter.reset_form(Form::Login);
            presenter.show_success(message);

            return FormOutcome::Accepted {
                message: message.to_string(),
            };
        }
        Err(error) => error,
    };

    // Password errors are only reachable once the username was found.
    if error.field() == Field::Password {
        presenter.clear_field_highlight(Field::Username);
    }
    presenter.highlight_field(error.field());
    presenter.show_error(error.message(), error.field());
    info!("Login rejected on {}: {}", error.field(), error);

    FormOutcome::Rejected { error }
}
