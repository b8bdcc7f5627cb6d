//! Interfaces between the command layer and whatever shows feedback.

/// Trait for telling the user how a save went.
pub trait FeedbackPresenter {
    /// Show an informational confirmation.
    fn present_info(&mut self, title: &str, body: &str);

    /// Show an error.
    fn present_error(&mut self, title: &str, body: &str);
}

/// Null presenter (discards all feedback).
pub struct NullPresenter;

impl FeedbackPresenter for NullPresenter {
    fn present_info(&mut self, _title: &str, _body: &str) {}
    fn present_error(&mut self, _title: &str, _body: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_presenter() {
        let mut presenter = NullPresenter;
        presenter.present_info("Success", "ok");
        presenter.present_error("Error", "bad");
    }
}
