use crate::reply::{demo_response, Role};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub origin: Origin,
}

/// Append-only message history for one role. The widget never merges
/// or clears a list; it only grows.
#[derive(Debug, Default)]
pub struct MessageList {
    messages: Vec<Message>,
}

impl MessageList {
    fn append(&mut self, text: String, origin: Origin) {
        self.messages.push(Message { text, origin });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reply scheduled at submission time. Role and text are captured
/// when the user sends, so a later tab switch cannot reroute it.
#[derive(Debug)]
struct PendingReply {
    due: Instant,
    role: Role,
    text: String,
}

#[derive(Debug, Clone)]
pub struct ChatWidgetConfig {
    pub reply_delay: Duration,
    pub initial_role: Role,
}

impl Default for ChatWidgetConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            initial_role: Role::Student,
        }
    }
}

/// UI-agnostic chat state: one message list per role, the input
/// buffer, and the not-yet-fired demo replies. The GUI and the CLI
/// loop both drive this.
pub struct ChatWidget {
    role: Role,
    input: String,
    teacher_list: MessageList,
    student_list: MessageList,
    pending: Vec<PendingReply>,
    reply_delay: Duration,
}

impl ChatWidget {
    pub fn new(config: ChatWidgetConfig) -> Result<Self, String> {
        if config.reply_delay.is_zero() {
            return Err("reply delay must be greater than zero".to_string());
        }
        Ok(Self {
            role: config.initial_role,
            input: String::new(),
            teacher_list: MessageList::default(),
            student_list: MessageList::default(),
            pending: Vec::new(),
            reply_delay: config.reply_delay,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Tab-change handler. Only affects messages submitted afterwards.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn messages(&self, role: Role) -> &MessageList {
        match role {
            Role::Teacher => &self.teacher_list,
            Role::Student => &self.student_list,
        }
    }

    fn list_mut(&mut self, role: Role) -> &mut MessageList {
        match role {
            Role::Teacher => &mut self.teacher_list,
            Role::Student => &mut self.student_list,
        }
    }

    /// Handle a send. Whitespace-only input is skipped entirely: no
    /// message, no scheduled reply. Returns whether a message went out.
    pub fn submit(&mut self, now: Instant) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return false;
        }

        let role = self.role;
        self.list_mut(role).append(text.clone(), Origin::User);
        self.input.clear();
        self.pending.push(PendingReply {
            due: now + self.reply_delay,
            role,
            text,
        });
        true
    }

    /// Append the demo reply for every pending entry whose deadline has
    /// passed, earliest first. Returns how many replies were appended.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut due: Vec<PendingReply> = Vec::new();
        let mut still_waiting: Vec<PendingReply> = Vec::new();
        for entry in self.pending.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                still_waiting.push(entry);
            }
        }
        self.pending = still_waiting;

        due.sort_by_key(|e| e.due);
        let count = due.len();
        for entry in due {
            let reply = demo_response(entry.role, &entry.text).to_string();
            self.list_mut(entry.role).append(reply, Origin::Assistant);
        }
        count
    }

    /// Earliest pending deadline, if any. The GUI uses this to schedule
    /// a repaint instead of spinning.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|e| e.due).min()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop every scheduled reply; called on teardown so nothing fires
    /// into a view that no longer exists. Returns how many were dropped.
    pub fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ChatWidget {
        ChatWidget::new(ChatWidgetConfig::default()).unwrap()
    }

    #[test]
    fn zero_delay_rejected() {
        let config = ChatWidgetConfig {
            reply_delay: Duration::ZERO,
            ..ChatWidgetConfig::default()
        };
        assert!(ChatWidget::new(config).is_err());
    }

    #[test]
    fn submit_appends_user_message_and_schedules_reply() {
        let mut w = widget();
        let t0 = Instant::now();
        w.input_mut().push_str("I need help understanding this");
        assert!(w.submit(t0));

        let list = w.messages(Role::Student);
        assert_eq!(list.len(), 1);
        let msg = list.iter().next().unwrap();
        assert_eq!(msg.origin, Origin::User);
        assert_eq!(msg.text, "I need help understanding this");
        assert!(w.input().is_empty());
        assert_eq!(w.pending_len(), 1);

        // Nothing fires before the deadline.
        assert_eq!(w.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(w.messages(Role::Student).len(), 1);

        assert_eq!(w.poll(t0 + Duration::from_millis(1000)), 1);
        let list = w.messages(Role::Student);
        assert_eq!(list.len(), 2);
        let reply = list.iter().last().unwrap();
        assert_eq!(reply.origin, Origin::Assistant);
        assert!(reply.text.starts_with("I can definitely help explain"));
        assert_eq!(w.pending_len(), 0);
    }

    #[test]
    fn whitespace_submission_is_a_no_op() {
        let mut w = widget();
        let t0 = Instant::now();
        w.input_mut().push_str("   \t  ");
        assert!(!w.submit(t0));
        assert!(w.messages(Role::Student).is_empty());
        assert!(w.messages(Role::Teacher).is_empty());
        assert_eq!(w.pending_len(), 0);
    }

    #[test]
    fn input_trimmed_before_append() {
        let mut w = widget();
        let t0 = Instant::now();
        w.input_mut().push_str("  hello  ");
        assert!(w.submit(t0));
        assert_eq!(w.messages(Role::Student).iter().next().unwrap().text, "hello");
    }

    #[test]
    fn reply_uses_role_at_submission_time() {
        let mut w = widget();
        let t0 = Instant::now();
        w.set_role(Role::Teacher);
        w.input_mut().push_str("Can you help me plan a lesson?");
        w.submit(t0);

        // Switching tabs while the reply is in flight must not reroute it.
        w.set_role(Role::Student);
        assert_eq!(w.poll(t0 + Duration::from_secs(2)), 1);

        assert!(w.messages(Role::Student).is_empty());
        let teacher = w.messages(Role::Teacher);
        assert_eq!(teacher.len(), 2);
        let reply = teacher.iter().last().unwrap();
        assert!(reply.text.starts_with("I can help create a lesson plan"));
    }

    #[test]
    fn role_switch_routes_each_message_to_its_own_list() {
        let mut w = widget();
        let t0 = Instant::now();

        w.set_role(Role::Teacher);
        w.input_mut().push_str("lesson ideas");
        w.submit(t0);

        w.set_role(Role::Student);
        w.input_mut().push_str("career advice");
        w.submit(t0);

        w.poll(t0 + Duration::from_secs(2));

        assert_eq!(w.messages(Role::Teacher).len(), 2);
        assert_eq!(w.messages(Role::Student).len(), 2);
    }

    #[test]
    fn overlapping_submissions_fire_independently_in_due_order() {
        let mut w = widget();
        let t0 = Instant::now();

        w.input_mut().push_str("first question");
        w.submit(t0);
        w.input_mut().push_str("second question");
        w.submit(t0 + Duration::from_millis(300));
        assert_eq!(w.pending_len(), 2);

        // Only the first has expired.
        assert_eq!(w.poll(t0 + Duration::from_millis(1100)), 1);
        assert_eq!(w.pending_len(), 1);

        assert_eq!(w.poll(t0 + Duration::from_millis(1400)), 1);
        let texts: Vec<&str> = w
            .messages(Role::Student)
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts[..2],
            ["first question", "second question"],
            "user messages keep submission order"
        );
        assert_eq!(w.messages(Role::Student).len(), 4);
    }

    #[test]
    fn next_due_reports_earliest_deadline() {
        let mut w = widget();
        let t0 = Instant::now();
        assert!(w.next_due().is_none());

        w.input_mut().push_str("one");
        w.submit(t0);
        w.input_mut().push_str("two");
        w.submit(t0 + Duration::from_millis(500));

        assert_eq!(w.next_due(), Some(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn cancel_drops_scheduled_replies() {
        let mut w = widget();
        let t0 = Instant::now();
        w.input_mut().push_str("anything");
        w.submit(t0);

        assert_eq!(w.cancel_pending(), 1);
        assert_eq!(w.poll(t0 + Duration::from_secs(5)), 0);
        assert_eq!(w.messages(Role::Student).len(), 1);
    }
}
