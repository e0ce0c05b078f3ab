/// State of an input the user still has to pick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    Unselected,
    Selected(T),
}

impl<T> Selection<T> {
    /// Resolve to the picked value, or `err` when nothing was picked.
    pub fn resolve<E>(self, err: E) -> Result<T, E> {
        match self {
            Selection::Selected(v) => Ok(v),
            Selection::Unselected => Err(err),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Selected(v),
            None => Selection::Unselected,
        }
    }
}

/// Build the "was it done?" selection from the pair of CLI flags.
/// clap keeps the two flags mutually exclusive.
pub fn status_from_flags(done: bool, skipped: bool) -> Selection<bool> {
    if done {
        Selection::Selected(true)
    } else if skipped {
        Selection::Selected(false)
    } else {
        Selection::Unselected
    }
}
