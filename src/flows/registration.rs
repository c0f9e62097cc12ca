//! Registration flow
//!
//! Runs the registration checks in a fixed order, stops at the first failure
//! and stores a new user once every check has passed.

use log::{debug, info};

use crate::auth::credentials::{RegistrationForm, UserRecord};
use crate::auth::results::{Field, Form, FormOutcome};
use crate::auth::validator::{
    trim_input, validate_email, validate_password, validate_username,
};
use crate::error::{StoreError, ValidationError};
use crate::presentation::Presenter;
use crate::storage::{KeyValueStorage, UserStore};

pub const REGISTRATION_SUCCESS: &str = "You have successfully registered.";

/// Validates `form` and, if it passes, appends the new user to `store`.
///
/// Validation failures are returned as `FormOutcome::Rejected`; only a
/// failed write is an `Err`, in which case the form is left untouched.
pub fn submit_registration<S, P>(
    store: &mut UserStore<S>,
    form: &RegistrationForm,
    presenter: &mut P,
) -> Result<FormOutcome, StoreError>
where
    S: KeyValueStorage,
    P: Presenter,
{
    let username = trim_input(&form.username);
    let email = trim_input(&form.email);
    debug!("Registration submitted for {:?}", username);

    if let Err(error) = check_fields(store, form, username, email, presenter) {
        info!("Registration rejected on {}: {}", error.field(), error);
        presenter.show_error(error.message(), error.field());
        return Ok(FormOutcome::Rejected { error });
    }

    store.append(UserRecord::new(username, email, &form.password))?;

    presenter.clear_error();
    presenter.reset_form(Form::Registration);
    presenter.show_success(REGISTRATION_SUCCESS);
    info!("Registered user {}", username.to_lowercase());

    Ok(FormOutcome::Accepted {
        message: REGISTRATION_SUCCESS.to_string(),
    })
}

/// Evaluates every registration check in order, updating highlights as it goes.
fn check_fields<S, P>(
    store: &UserStore<S>,
    form: &RegistrationForm,
    username: &str,
    email: &str,
    presenter: &mut P,
) -> Result<(), ValidationError>
where
    S: KeyValueStorage,
    P: Presenter,
{
    // The confirmation highlight is cleared whenever it is not the failing field.
    if let Err(error) = check_identity(store, form, username, email, presenter) {
        presenter.clear_field_highlight(Field::PasswordConfirmation);
        return Err(error);
    }

    if form.password != form.password_confirmation {
        presenter.highlight_field(Field::PasswordConfirmation);
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    presenter.clear_field_highlight(Field::PasswordConfirmation);

    if !form.terms_accepted {
        presenter.highlight_field(Field::Terms);
        return Err(ValidationError::TermsNotAccepted);
    }

    Ok(())
}

fn check_identity<S, P>(
    store: &UserStore<S>,
    form: &RegistrationForm,
    username: &str,
    email: &str,
    presenter: &mut P,
) -> Result<(), ValidationError>
where
    S: KeyValueStorage,
    P: Presenter,
{
    let users = store.load_all();
    mark(presenter, Field::Username, validate_username(username, &users))?;
    mark(presenter, Field::Email, validate_email(email))?;
    mark(
        presenter,
        Field::Password,
        validate_password(&form.password, username),
    )
}

fn mark<P: Presenter>(
    presenter: &mut P,
    field: Field,
    result: Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match &result {
        Ok(()) => presenter.clear_field_highlight(field),
        Err(_) => presenter.highlight_field(field),
    }
    result
}
