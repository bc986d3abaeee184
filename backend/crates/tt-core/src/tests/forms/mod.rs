mod inputs;
mod password_reset_form;
mod registration_form;
