// Singleton - friends chat service.
// View controllers subscribe to the one chat service and get every new and
// removed message batch. The service holds weak references, so a subscription
// lasts as long as its subscriber.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub text: String,
}

impl Message {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

pub trait MessageSubscriber: Send + Sync {
    fn name(&self) -> &'static str;

    fn accept_new(&self, _messages: &[Message], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} accepted 'new messages'.", self.name())?;
        Ok(())
    }

    fn accept_removed(&self, _messages: &[Message], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} accepted 'removed messages'.", self.name())?;
        Ok(())
    }
}

pub trait MessageService {
    fn add(&self, subscriber: &Arc<dyn MessageSubscriber>, out: &mut dyn Write) -> Result<()>;
}

type Subscription = Weak<dyn MessageSubscriber>;

#[derive(Default)]
pub struct FriendsChatService {
    subscribers: Mutex<Vec<Subscription>>,
}

static SERVICE: Lazy<FriendsChatService> = Lazy::new(FriendsChatService::default);

/// Held for a whole scenario run; runs share the one subscriber list.
static RUN: Mutex<()> = Mutex::new(());

impl FriendsChatService {
    pub fn instance() -> &'static FriendsChatService {
        &SERVICE
    }

    /// Live subscribers; dead subscriptions are pruned on the way.
    fn live(&self) -> Vec<Arc<dyn MessageSubscriber>> {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|weak| weak.strong_count() > 0);
        subscribers.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn subscriber_count(&self) -> usize {
        self.live().len()
    }

    fn start_fetching(&self, out: &mut dyn Write) -> Result<()> {
        let new_messages = [
            Message::new(0, "Text0"),
            Message::new(5, "Text5"),
            Message::new(9, "Text9"),
        ];
        let removed_messages = [Message::new(1, "Text1")];

        self.received_new(&new_messages, out)?;
        self.received_removed(&removed_messages, out)
    }

    pub fn received_new(&self, messages: &[Message], out: &mut dyn Write) -> Result<()> {
        for subscriber in self.live() {
            subscriber.accept_new(messages, out)?;
        }
        Ok(())
    }

    pub fn received_removed(&self, messages: &[Message], out: &mut dyn Write) -> Result<()> {
        for subscriber in self.live() {
            subscriber.accept_removed(messages, out)?;
        }
        Ok(())
    }
}

impl MessageService for FriendsChatService {
    fn add(&self, subscriber: &Arc<dyn MessageSubscriber>, out: &mut dyn Write) -> Result<()> {
        debug!(subscriber = subscriber.name(), "subscribing");
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::downgrade(subscriber));
        self.start_fetching(out)
    }
}

/// Shared start-up of both view controllers.
fn start_receive_messages(
    subscriber: &Arc<dyn MessageSubscriber>,
    service: &dyn MessageService,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{} starts receive messages.", subscriber.name())?;
    service.add(subscriber, out)
}

pub struct MessagesListVc;

impl MessageSubscriber for MessagesListVc {
    fn name(&self) -> &'static str {
        "MessagesListVC"
    }
}

pub struct ChatVc;

impl MessageSubscriber for ChatVc {
    fn name(&self) -> &'static str {
        "ChatVC"
    }
}

/// Runs are serialized: concurrent callers would otherwise see each other's
/// view controllers on the shared service.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let _guard = RUN.lock().unwrap_or_else(PoisonError::into_inner);
    let list_vc: Arc<dyn MessageSubscriber> = Arc::new(MessagesListVc);
    let chat_vc: Arc<dyn MessageSubscriber> = Arc::new(ChatVc);
    let service = FriendsChatService::instance();

    start_receive_messages(&list_vc, service, out)?;

    writeln!(out)?;

    start_receive_messages(&chat_vc, service, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "MessagesListVC starts receive messages.\n\
             MessagesListVC accepted 'new messages'.\n\
             MessagesListVC accepted 'removed messages'.\n\
             \n\
             ChatVC starts receive messages.\n\
             MessagesListVC accepted 'new messages'.\n\
             ChatVC accepted 'new messages'.\n\
             MessagesListVC accepted 'removed messages'.\n\
             ChatVC accepted 'removed messages'.\n";

    fn capture() -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output() {
        assert_eq!(capture(), EXPECTED);
    }

    #[test]
    fn test_concurrent_runs_keep_their_own_subscribers() {
        let outputs: Vec<String> = crossbeam::scope(|s| {
            let workers: Vec<_> = (0..8).map(|_| s.spawn(|_| capture())).collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        })
        .unwrap();

        assert!(outputs.iter().all(|text| text == EXPECTED));
    }

    #[test]
    fn test_subscription_ends_with_subscriber() {
        let service = FriendsChatService::default();
        let mut sink = Vec::new();

        let chat: Arc<dyn MessageSubscriber> = Arc::new(ChatVc);
        service.add(&chat, &mut sink).unwrap();
        assert_eq!(service.subscriber_count(), 1);

        drop(chat);
        assert_eq!(service.subscriber_count(), 0);
    }
}
