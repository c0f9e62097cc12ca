//! Interactive console
//!
//! Reads commands and form fields line by line and runs one flow per
//! submission. Submissions are handled one at a time, which keeps the
//! store's read-append-write sequence serialized.

use log::{info, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::auth::credentials::{LoginForm, RegistrationForm};
use crate::commands::{Command, parse_command, parse_flag};
use crate::error::AppError;
use crate::error::handlers::{ErrorCategory, error_category, handle_error};
use crate::flows::{submit_login, submit_registration};
use crate::presentation::TerminalPresenter;
use crate::storage::{KeyValueStorage, UserStore};

const HELP: &str = "Commands: REGISTER (R), LOGIN (L), USERS, HELP, QUIT (Q)";

pub struct Console<S, W: Write> {
    store: UserStore<S>,
    presenter: TerminalPresenter<W>,
}

impl<S: KeyValueStorage, W: Write> Console<S, W> {
    pub fn new(store: UserStore<S>, presenter: TerminalPresenter<W>) -> Self {
        Self { store, presenter }
    }

    pub fn store(&self) -> &UserStore<S> {
        &self.store
    }

    pub fn presenter(&self) -> &TerminalPresenter<W> {
        &self.presenter
    }

    /// Runs until QUIT or end of input.
    pub async fn run<R>(&mut self, reader: &mut R) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.presenter.write_line("Welcome to RAX Forms");
        self.presenter.write_line(HELP);

        loop {
            let Some(line) = self.read_field(reader, "rax-forms").await? else {
                info!("Input closed, leaving console");
                return Ok(());
            };

            match parse_command(&line) {
                Command::Register => {
                    let Some(form) = self.read_registration(reader).await? else {
                        return Ok(());
                    };
                    if let Err(e) = submit_registration(&mut self.store, &form, &mut self.presenter)
                    {
                        let err = AppError::from(e);
                        handle_error(&err);
                        if error_category(&err) == ErrorCategory::Fatal {
                            return Err(err);
                        }
                        self.presenter
                            .write_line("Error: registration could not be saved, please try again.");
                    }
                }
                Command::Login => {
                    let Some(form) = self.read_login(reader).await? else {
                        return Ok(());
                    };
                    submit_login(&self.store, &form, &mut self.presenter);
                }
                Command::Users => self.list_users(),
                Command::Help => self.presenter.write_line(HELP),
                Command::Quit => {
                    self.presenter.write_line("Goodbye");
                    return Ok(());
                }
                Command::Unknown(raw) if raw.is_empty() => {}
                Command::Unknown(raw) => {
                    warn!("Unknown console command: {}", raw);
                    self.presenter
                        .write_line(&format!("Unknown command: {}. {}", raw, HELP));
                }
            }
        }
    }

    async fn read_registration<R>(
        &mut self,
        reader: &mut R,
    ) -> Result<Option<RegistrationForm>, AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut form = RegistrationForm::default();
        let fields: [(&str, &mut String); 4] = [
            ("Username", &mut form.username),
            ("Email", &mut form.email),
            ("Password", &mut form.password),
            ("Confirm password", &mut form.password_confirmation),
        ];
        for (label, slot) in fields {
            match self.read_field(reader, label).await? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }

        match self
            .read_field(reader, "Accept the terms and conditions? (y/n)")
            .await?
        {
            Some(answer) => form.terms_accepted = parse_flag(&answer),
            None => return Ok(None),
        }

        Ok(Some(form))
    }

    async fn read_login<R>(&mut self, reader: &mut R) -> Result<Option<LoginForm>, AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        let Some(username) = self.read_field(reader, "Username").await? else {
            return Ok(None);
        };
        let Some(password) = self.read_field(reader, "Password").await? else {
            return Ok(None);
        };
        let Some(keep) = self.read_field(reader, "Keep me logged in? (y/n)").await? else {
            return Ok(None);
        };

        Ok(Some(LoginForm {
            username,
            password,
            keep_logged_in: parse_flag(&keep),
        }))
    }

    /// Prompts for one value. Only the line ending is stripped; `None` means
    /// the input was closed.
    async fn read_field<R>(&mut self, reader: &mut R, label: &str) -> Result<Option<String>, AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.presenter.prompt(label);

        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            return Ok(None);
        }

        let value = line.strip_suffix('\n').unwrap_or(line.as_str());
        let value = value.strip_suffix('\r').unwrap_or(value);
        Ok(Some(value.to_string()))
    }

    fn list_users(&mut self) {
        let users = self.store.load_all();
        if users.is_empty() {
            self.presenter.write_line("No registered users.");
            return;
        }

        for user in &users {
            self.presenter
                .write_line(&format!("{} <{}>", user.username, user.email));
        }
    }
}
