use super::constants::MAX_TOASTS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub(in crate::app) id: u64,
    pub(in crate::app) title: String,
    pub(in crate::app) body: String,
    pub(in crate::app) created_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    pub(in crate::app) items: Vec<Toast>,
    pub(in crate::app) next_id: u64,
}

impl ToastState {
    /// Newest toast last; the oldest one is dropped past the cap.
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>, now: Instant) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id: self.next_id,
            title: title.into(),
            body: body.into(),
            created_at: now,
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn expire(&mut self, now: Instant, lifetime: Duration) -> usize {
        let before = self.items.len();
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created_at) < lifetime);
        before - self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct WindowState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = Instant::now();
        let mut toasts = ToastState::default();
        toasts.push("a", "first", start);
        toasts.push("b", "second", start + Duration::from_secs(3));
        assert_eq!(toasts.expire(start + Duration::from_secs(5), Duration::from_secs(5)), 1);
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].title, "b");
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_cap() {
        let now = Instant::now();
        let mut toasts = ToastState::default();
        let ids: Vec<u64> = (0..MAX_TOASTS + 2)
            .map(|i| toasts.push(format!("t{i}"), "", now))
            .collect();
        assert_eq!(toasts.items.len(), MAX_TOASTS);
        assert_eq!(toasts.items[0].id, ids[2]);
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let now = Instant::now();
        let mut toasts = ToastState::default();
        let first = toasts.push("a", "", now);
        let second = toasts.push("b", "", now);
        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].id, second);
    }
}
