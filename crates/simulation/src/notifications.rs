//! Notification channel for the UI boundary.
//!
//! Simulation systems emit [`NotificationEvent`]s; they are collected into a
//! bounded [`NotificationLog`] stamped with the in-game time, which the
//! display layer reads. Nothing in the core consumes the log itself.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::time_of_day::GameClock;

/// Oldest entries are dropped past this size.
const LOG_CAPACITY: usize = 100;

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPriority {
    /// Game-ending or city-wide emergencies.
    Emergency,
    /// Significant warnings (failed save, rejected placement).
    Warning,
    /// Noteworthy situations that need attention.
    Attention,
    /// General information (load results, milestones).
    Info,
    /// Good news.
    Positive,
}

impl NotificationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Emergency => "EMERGENCY",
            NotificationPriority::Warning => "WARNING",
            NotificationPriority::Attention => "ATTENTION",
            NotificationPriority::Info => "INFO",
            NotificationPriority::Positive => "POSITIVE",
        }
    }
}

/// A notification emitted by a simulation system.
#[derive(Event, Debug, Clone)]
pub struct NotificationEvent {
    pub text: String,
    pub priority: NotificationPriority,
}

/// A collected notification with in-game timing.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub priority: NotificationPriority,
    pub day: u32,
    pub hour: f32,
}

/// Bounded history of collected notifications.
#[derive(Resource, Debug, Default)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationLog {
    pub fn push(&mut self, event: &NotificationEvent, clock: &GameClock) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Notification {
            id,
            text: event.text.clone(),
            priority: event.priority,
            day: clock.day,
            hour: clock.hour,
        });
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }
}

/// Drains pending notification events into the log. Runs in `Update` so
/// notifications emitted during save/load (when the fixed-tick sets are
/// gated off) are still collected.
pub fn collect_notifications(
    mut events: EventReader<NotificationEvent>,
    clock: Res<GameClock>,
    mut log: ResMut<NotificationLog>,
) {
    for event in events.read() {
        log.push(event, &clock);
    }
}

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationLog>()
            .add_event::<NotificationEvent>()
            .add_systems(Update, collect_notifications);
    }
}
