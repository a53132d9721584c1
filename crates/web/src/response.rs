/// The response value passed to route handlers alongside the [`Request`](crate::Request).
///
/// It carries no state yet; status and headers of `/app` responses are fixed by the
/// server. Handlers receive it so that their signature stays stable once it grows.
#[derive(Debug, Clone, Default)]
pub struct Response {
    _reserved: (),
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }
}
