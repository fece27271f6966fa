use crate::components::Banner;
use std::time::Duration;
use todo_core::Notice;
use todo_domain::{PresentationPort, TaskList};

/// Presentation side of the controller for the terminal UI.
///
/// Drawing happens on the next frame from the controller's list, so
/// `render` only records that the view changed. Notices become a banner
/// that the tick loop hides once it is older than the configured TTL.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    banner: Option<Banner>,
    len: usize,
    renders: u64,
}

impl TuiPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Drop the banner once it has been visible for `ttl`.
    pub fn expire(&mut self, ttl: Duration) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(ttl)) {
            self.banner = None;
        }
    }

    /// Length of the list at the last render.
    pub fn rendered_len(&self) -> usize {
        self.len
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl PresentationPort for TuiPresenter {
    fn render(&mut self, tasks: &TaskList) {
        self.len = tasks.len();
        self.renders += 1;
    }

    fn notify(&mut self, notice: Notice) {
        self.banner = Some(Banner::new(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_notify_replaces_banner() {
        let mut presenter = TuiPresenter::new();
        presenter.notify(Notice::EmptyTask);
        presenter.notify(Notice::NothingToRedo);
        assert_eq!(presenter.banner().unwrap().notice, Notice::NothingToRedo);
    }

    #[test]
    fn test_expire_keeps_fresh_banner() {
        let mut presenter = TuiPresenter::new();
        presenter.notify(Notice::EmptyList);
        presenter.expire(Duration::from_secs(2));
        assert!(presenter.banner().is_some());
    }

    #[test]
    fn test_expire_hides_old_banner() {
        let mut presenter = TuiPresenter::new();
        presenter.notify(Notice::EmptyList);
        if let Some(banner) = presenter.banner.as_mut() {
            banner.created_at = Instant::now() - Duration::from_secs(5);
        }
        presenter.expire(Duration::from_secs(2));
        assert!(presenter.banner().is_none());
    }

    #[test]
    fn test_render_tracks_length() {
        let mut presenter = TuiPresenter::new();
        let mut tasks = TaskList::new();
        tasks.add("a");
        presenter.render(&tasks);
        assert_eq!(presenter.rendered_len(), 1);
        assert_eq!(presenter.render_count(), 1);
    }
}
