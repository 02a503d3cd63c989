// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notification sequence and every pending
//! dismiss timer. Notifications enter through [`Manager::notify`], and leave
//! through exactly one removal path, reached either by an explicit dismiss
//! request or by their timer elapsing.

use super::clock::{Clock, DismissTimer, SystemClock};
use super::notification::{Kind, Notification, NotificationId};
use crate::config::{Config, DEFAULT_AUTO_DISMISS_MS};
use crate::diagnostics::{DiagnosticsHandle, NotificationEvent};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by id.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Why an entry left the active sequence. Presentation-invisible; only the
/// diagnostics event differs.
#[derive(Debug, Clone, Copy)]
enum RemovalCause {
    Manual,
    Expired,
}

/// An active notification together with its auto-removal timer.
///
/// The timer lives and dies with the entry: removing the entry drops the
/// timer, which is what cancellation means here.
#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: DismissTimer,
}

/// Manages the ordered sequence of active notifications.
///
/// New notifications append to the end; the sequence is never reordered, so
/// iteration order always equals creation order. There is no cap on how many
/// notifications can be active at once — stacking is the renderer's concern.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    /// Active notifications in creation order (oldest first).
    active: VecDeque<Entry>,
    /// Source of the next id. Monotonic, never reset, so ids are never reused.
    next_id: u64,
    /// Visible duration applied by [`Manager::notify`].
    auto_dismiss: Duration,
    clock: C,
    /// Optional diagnostics handle for recording lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager<SystemClock> {
    /// Creates an empty manager with the default 5s auto-dismiss duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a manager with the auto-dismiss duration taken from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().auto_dismiss(config.auto_dismiss())
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager reading time from `clock`.
    ///
    /// Tests pass a [`ManualClock`](crate::test_utils::ManualClock) here to
    /// control expiry deterministically.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            active: VecDeque::new(),
            next_id: 0,
            auto_dismiss: Duration::from_millis(DEFAULT_AUTO_DISMISS_MS),
            clock,
            diagnostics: None,
        }
    }

    /// Sets the visible duration applied to subsequent `notify` calls.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss = duration;
        self
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Posts a notification and schedules its automatic removal.
    ///
    /// The notification is appended to the end of the active sequence and
    /// receives a fresh id, returned so the caller can dismiss it early.
    pub fn notify(&mut self, kind: Kind, message: impl Into<String>) -> NotificationId {
        self.notify_for(kind, message, self.auto_dismiss)
    }

    /// Posts a notification with an explicit visible duration.
    ///
    /// Entries with diverging durations expire independently; expiry order is
    /// not required to match creation order.
    pub fn notify_for(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        delay: Duration,
    ) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, kind, message);
        let now = self.clock.now();

        if let Some(handle) = &self.diagnostics {
            handle.record(NotificationEvent::Posted {
                id,
                kind,
                message: notification.message().to_string(),
                at: now,
            });
        }

        self.active.push_back(Entry {
            notification,
            timer: DismissTimer::arm(now, delay),
        });

        id
    }

    /// Posts a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Success, message)
    }

    /// Posts an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Error, message)
    }

    /// Posts an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Info, message)
    }

    /// Posts a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(Kind::Warning, message)
    }

    /// Dismisses a notification by its id, cancelling its pending timer.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an unknown or already-removed id is a no-op; the call is safe to
    /// repeat with stale ids.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id, RemovalCause::Manual)
    }

    /// Processes a tick, removing every notification whose timer has elapsed.
    ///
    /// Should be called periodically (e.g. every 100ms from an iced time
    /// subscription). Expiry is checked against deadlines, so a late tick
    /// delays removal but never loses it.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let due: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|entry| entry.timer.is_due(now))
            .map(|entry| entry.notification.id())
            .collect();

        for id in due {
            self.remove(id, RemovalCause::Expired);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the active notifications in creation order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|entry| &entry.notification)
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notification is active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts can use this to decide whether a tick subscription is worth
    /// keeping alive.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active
            .iter()
            .map(|entry| entry.timer.deadline())
            .min()
    }

    /// Removes all active notifications and their timers.
    pub fn clear(&mut self) {
        let ids: Vec<NotificationId> = self.active().map(Notification::id).collect();
        for id in ids {
            self.remove(id, RemovalCause::Manual);
        }
    }

    /// The single removal path shared by manual dismissal and timer expiry.
    ///
    /// Dropping the entry drops its timer, so cancellation is synchronous
    /// with removal: a removed notification has no pending deadline left that
    /// could fire later.
    fn remove(&mut self, id: NotificationId, cause: RemovalCause) -> bool {
        let Some(pos) = self
            .active
            .iter()
            .position(|entry| entry.notification.id() == id)
        else {
            return false;
        };

        self.active.remove(pos);

        if let Some(handle) = &self.diagnostics {
            let at = self.clock.now();
            let event = match cause {
                RemovalCause::Manual => NotificationEvent::Dismissed { id, at },
                RemovalCause::Expired => NotificationEvent::Expired { id, at },
            };
            handle.record(event);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::test_utils::ManualClock;
    use std::collections::HashSet;

    fn manager_with_clock() -> (ManualClock, Manager<ManualClock>) {
        let clock = ManualClock::new();
        let manager = Manager::with_clock(clock.clone());
        (clock, manager)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn notify_appends_in_creation_order() {
        let mut manager = Manager::new();
        manager.notify(Kind::Error, "first");
        manager.notify(Kind::Success, "second");
        manager.notify(Kind::Info, "third");

        let messages: Vec<_> = manager.active().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn notify_never_reorders_by_kind() {
        let mut manager = Manager::new();
        let kinds = [Kind::Warning, Kind::Success, Kind::Error, Kind::Info];
        let ids: Vec<_> = kinds
            .iter()
            .map(|&kind| manager.notify(kind, "x"))
            .collect();

        let observed: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(observed, ids);
    }

    #[test]
    fn ten_thousand_notifies_produce_distinct_ids() {
        let mut manager = Manager::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(manager.notify(Kind::Info, "burst")));
        }
        assert_eq!(seen.len(), 10_000);
        assert_eq!(manager.active_count(), 10_000);
    }

    #[test]
    fn dismiss_removes_exactly_that_entry() {
        let mut manager = Manager::new();
        let a = manager.notify(Kind::Info, "a");
        let b = manager.notify(Kind::Info, "b");
        let c = manager.notify(Kind::Info, "c");

        assert!(manager.dismiss(b));

        let remaining: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = Manager::new();
        let id = manager.notify(Kind::Success, "kept");

        // An id that was never issued by this manager.
        let stale = NotificationId::from_raw(999);
        assert!(!manager.dismiss(stale));
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.active().next().map(Notification::id), Some(id));
    }

    #[test]
    fn double_dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.notify(Kind::Warning, "once");

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn notify_then_dismiss_round_trips_to_empty() {
        let mut manager = Manager::new();
        let id = manager.notify(Kind::Info, "fleeting");
        manager.dismiss(id);

        assert!(!manager.has_notifications());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn auto_removal_happens_between_4999_and_5001_ms() {
        let (clock, mut manager) = manager_with_clock();
        manager.notify(Kind::Success, "timed");

        clock.advance(Duration::from_millis(4999));
        manager.tick();
        assert_eq!(manager.active_count(), 1);

        clock.advance(Duration::from_millis(2));
        manager.tick();
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn manual_dismiss_cancels_the_timer() {
        let (clock, mut manager) = manager_with_clock();
        let mut collector = DiagnosticsCollector::default();
        manager.set_diagnostics(collector.handle());

        let id = manager.notify(Kind::Info, "closed early");
        manager.dismiss(id);

        // A tick past the original deadline must not observe the entry again.
        clock.advance(Duration::from_millis(10_000));
        manager.tick();
        collector.process_pending();

        let events: Vec<_> = collector.iter().cloned().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], NotificationEvent::Posted { .. }));
        assert!(matches!(events[1], NotificationEvent::Dismissed { .. }));
    }

    #[test]
    fn diverging_delays_expire_independently() {
        let (clock, mut manager) = manager_with_clock();
        let slow = manager.notify_for(Kind::Info, "slow", Duration::from_millis(5000));
        let fast = manager.notify_for(Kind::Info, "fast", Duration::from_millis(1000));

        clock.advance(Duration::from_millis(1000));
        manager.tick();

        let remaining: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(remaining, vec![slow]);
        assert!(!manager.dismiss(fast));
    }

    #[test]
    fn expiry_and_dismissal_share_one_removal_path() {
        let (clock, mut manager) = manager_with_clock();
        let mut collector = DiagnosticsCollector::default();
        manager.set_diagnostics(collector.handle());

        let expired = manager.notify(Kind::Info, "times out");
        clock.advance(Duration::from_millis(5001));
        let dismissed = manager.notify(Kind::Info, "closed by user");

        manager.tick();
        manager.dismiss(dismissed);
        collector.process_pending();

        let removals: Vec<_> = collector
            .iter()
            .filter(|e| !matches!(e, NotificationEvent::Posted { .. }))
            .cloned()
            .collect();
        assert_eq!(
            removals,
            vec![
                NotificationEvent::Expired {
                    id: expired,
                    at: removals[0].at()
                },
                NotificationEvent::Dismissed {
                    id: dismissed,
                    at: removals[1].at()
                },
            ]
        );
        assert!(!manager.has_notifications());
    }

    #[test]
    fn scenario_success_toast_lifecycle() {
        let mut manager = Manager::new();
        let n1 = manager.notify(Kind::Success, "Settings saved");

        let snapshot: Vec<_> = manager.active().collect();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id(), n1);
        assert_eq!(snapshot[0].kind(), Kind::Success);
        assert_eq!(snapshot[0].message(), "Settings saved");

        manager.dismiss(n1);
        assert_eq!(manager.active().count(), 0);
    }

    #[test]
    fn scenario_dismissing_first_leaves_second() {
        let mut manager = Manager::new();
        let n1 = manager.notify(Kind::Error, "Failed");
        let n2 = manager.notify(Kind::Info, "Loading");

        let order: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(order, vec![n1, n2]);

        manager.dismiss(n1);
        let order: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(order, vec![n2]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut manager = Manager::new();
        let first = manager.notify(Kind::Info, "one");
        manager.dismiss(first);

        let second = manager.notify(Kind::Info, "two");
        assert_ne!(first, second);
    }

    #[test]
    fn tick_with_nothing_due_changes_nothing() {
        let (clock, mut manager) = manager_with_clock();
        manager.notify(Kind::Info, "patient");

        clock.advance(Duration::from_millis(100));
        manager.tick();
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn next_deadline_returns_the_earliest() {
        let (clock, mut manager) = manager_with_clock();
        let start = clock.now();
        manager.notify_for(Kind::Info, "later", Duration::from_millis(5000));
        manager.notify_for(Kind::Info, "sooner", Duration::from_millis(1000));

        assert_eq!(
            manager.next_deadline(),
            Some(start + Duration::from_millis(1000))
        );
    }

    #[test]
    fn clear_removes_all_and_cancels_timers() {
        let (clock, mut manager) = manager_with_clock();
        for i in 0..5 {
            manager.notify(Kind::Info, format!("test-{i}"));
        }

        manager.clear();
        assert_eq!(manager.active_count(), 0);

        clock.advance(Duration::from_millis(10_000));
        manager.tick();
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let (clock, mut manager) = manager_with_clock();
        let closed = manager.notify(Kind::Info, "closed");
        manager.notify(Kind::Info, "expires");

        manager.handle_message(&Message::Dismiss(closed));
        assert_eq!(manager.active_count(), 1);

        clock.advance(Duration::from_millis(5001));
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn from_config_uses_configured_duration() {
        let config = Config {
            auto_dismiss_ms: Some(1000),
            event_capacity: None,
        };
        let mut manager = Manager::from_config(&config);
        let start = std::time::Instant::now();
        manager.notify(Kind::Info, "short-lived");

        let deadline = manager.next_deadline().expect("deadline must be armed");
        let delay = deadline - start;
        assert!(
            delay > Duration::from_millis(900) && delay <= Duration::from_millis(1100),
            "delay was {delay:?}"
        );
    }
}
