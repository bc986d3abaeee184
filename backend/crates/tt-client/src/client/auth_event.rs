/// Broadcast by the pipeline whenever the server rejects a request with 401.
///
/// Tokens are already cleared when the event is sent; listeners only need to
/// update whatever they show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Unauthorized { path: String },
}
