mod credential_store;
mod session_state;
