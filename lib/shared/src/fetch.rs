use std::fmt::Display;

/// Outcome of a one-shot asynchronous load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T: Clone> FetchState<T> {
    /// Converts the value held by a reactive resource: `None` while the
    /// future is still running.
    pub fn from_outcome<E: Display>(outcome: Option<&Result<T, E>>) -> Self {
        match outcome {
            None => FetchState::Pending,
            Some(Ok(value)) => FetchState::Loaded(value.clone()),
            Some(Err(e)) => FetchState::Failed(e.to_string()),
        }
    }
}

impl<T> FetchState<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Pending => FetchState::Pending,
            FetchState::Loaded(value) => FetchState::Loaded(f(value)),
            FetchState::Failed(e) => FetchState::Failed(e),
        }
    }
}
