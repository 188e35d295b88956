//! src/pages/mod.rs
pub mod reset_password;
pub mod verify;

/// Deferred mount of a form whose construction depends on the page's query
/// string. Until the location is known the page renders a placeholder
/// skeleton; once it resolves, the interactive form takes its place.
pub enum Mount<T> {
    Pending,
    Ready(T),
}

impl<T> Mount<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Mount::Pending)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Mount::Ready(form) => Some(form),
            Mount::Pending => None,
        }
    }
}

fn query_param(url: &url::Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
