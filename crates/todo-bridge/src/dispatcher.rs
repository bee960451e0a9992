//! Command Dispatcher
//!
//! Turns user intents into [`Command`] payloads and hands them to the host.
//! Delivery is fire-and-forget: the host never answers a command, its
//! effect shows up later as a snapshot on the sink.

use serde::Serialize;

use crate::error::BridgeResult;
use crate::schema::{encode_log_arg, join_log_text, Command};
use crate::view_model::{Phase, ViewModel};

/// Host-provided delivery primitive.
///
/// `send` must return without waiting for the host. There is no result:
/// a dropped payload is indistinguishable from one the host ignored.
pub trait HostChannel {
    fn send(&self, payload: String);
}

impl<F> HostChannel for F
where
    F: Fn(String),
{
    fn send(&self, payload: String) {
        self(payload)
    }
}

/// What the dispatcher knows after handing a payload over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Payload handed to the channel. The host gives no acknowledgement, so
    /// treat the command as pending until a snapshot reflects it.
    Unconfirmed,
    /// Payload could not be encoded and was not sent (`log` only)
    Dropped,
}

/// View-side command sender
#[derive(Debug)]
pub struct CommandDispatcher<C> {
    channel: C,
    view: ViewModel,
}

impl<C: HostChannel> CommandDispatcher<C> {
    pub fn new(channel: C, view: ViewModel) -> Self {
        Self { channel, view }
    }

    /// Read-only view-model this dispatcher was built with
    pub fn view_model(&self) -> &ViewModel {
        &self.view
    }

    /// Encode and send any command
    pub fn dispatch(&self, command: &Command) -> BridgeResult<Delivery> {
        let payload = command.encode()?;
        log::debug!("dispatch {}", payload);
        self.channel.send(payload);
        Ok(Delivery::Unconfirmed)
    }

    /// Tell the host the view is ready for snapshots
    pub fn init(&self) -> BridgeResult<Delivery> {
        let delivery = self.dispatch(&Command::Init)?;
        let previous = self.view.note_init_sent();
        if previous != Phase::Uninitialized {
            log::warn!("init sent again while {:?}", previous);
        }
        Ok(delivery)
    }

    /// Send diagnostic text built from homogeneous values.
    ///
    /// Use [`bridge_log!`](crate::bridge_log) for mixed argument types.
    pub fn log<I, T>(&self, values: I) -> Delivery
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        self.log_encoded(values.into_iter().map(|v| encode_log_arg(&v)))
    }

    /// Send diagnostic text from arguments already encoded by
    /// [`encode_log_arg`]
    pub fn log_encoded<I, S>(&self, parts: I) -> Delivery
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = join_log_text(parts);
        self.dispatch(&Command::Log { text }).unwrap_or_else(|e| {
            log::warn!("log command dropped: {}", e);
            Delivery::Dropped
        })
    }

    /// Ask the host to append a task. Empty names are forwarded as is.
    pub fn add_task(&self, name: impl Into<String>) -> BridgeResult<Delivery> {
        self.dispatch(&Command::AddTask { name: name.into() })
    }

    pub fn clear_done_tasks(&self) -> BridgeResult<Delivery> {
        self.dispatch(&Command::ClearDoneTasks)
    }

    /// Ask the host to set the done flag of the task at `index`.
    ///
    /// `done` is the desired new state; callers negate the current flag
    /// themselves. `index` is a position in the last applied snapshot.
    pub fn mark_task(&self, index: usize, done: bool) -> BridgeResult<Delivery> {
        if self.view.phase() == Phase::Live {
            let len = self.view.len();
            if index >= len {
                log::warn!("markTask index {} outside last snapshot of {} tasks", index, len);
            }
        }
        self.dispatch(&Command::MarkTask { index, done })
    }
}

/// Send a `log` command with any number of serializable arguments.
///
/// ```
/// # use todo_bridge::{bridge_log, CommandDispatcher, ViewStateSink};
/// # use todo_bridge::testing::RecordingChannel;
/// # let channel = RecordingChannel::new();
/// # let dispatcher = CommandDispatcher::new(channel.clone(), ViewStateSink::new().view_model());
/// bridge_log!(dispatcher, 1, "x", [true]);
/// assert_eq!(channel.payloads()[0], r#"{"cmd":"log","text":"1 \"x\" [true]"}"#);
/// ```
#[macro_export]
macro_rules! bridge_log {
    ($dispatcher:expr $(, $value:expr)* $(,)?) => {{
        let parts: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$($crate::encode_log_arg(&$value)),*];
        $dispatcher.log_encoded(parts)
    }};
}
