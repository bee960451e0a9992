//! Todo Bridge
//!
//! The narrow channel between a todo view running in a webview and the host
//! process that owns the task list.
//!
//! - [`CommandDispatcher`]: view → host, fire-and-forget commands
//! - [`ViewStateSink`]: host → view, whole-list snapshots
//! - [`ViewModel`]: the read-only mirror the rendering layer reads
//!
//! ```
//! use todo_bridge::{bridge_log, CommandDispatcher, Phase, Task, ViewStateSink};
//! use todo_bridge::testing::RecordingChannel;
//!
//! let sink = ViewStateSink::new();
//! let channel = RecordingChannel::new();
//! let dispatcher = CommandDispatcher::new(channel.clone(), sink.view_model());
//!
//! dispatcher.init().unwrap();
//! dispatcher.add_task("buy milk").unwrap();
//! bridge_log!(dispatcher, 1, "x");
//!
//! // Nothing changes locally until the host pushes.
//! assert!(dispatcher.view_model().is_empty());
//!
//! sink.apply_json(r#"[{"name":"buy milk","done":false}]"#).unwrap();
//! assert_eq!(dispatcher.view_model().tasks(), vec![Task::new("buy milk")]);
//! assert_eq!(dispatcher.view_model().phase(), Phase::Live);
//! assert_eq!(channel.payloads().len(), 3);
//! ```

mod dispatcher;
mod error;
mod schema;
mod sink;
mod snapshot;
mod view_model;

pub mod testing;


pub use dispatcher::{CommandDispatcher, Delivery, HostChannel};
pub use error::{BridgeError, BridgeResult};
pub use schema::{encode_log_arg, join_log_text, Command, Task};
pub use sink::ViewStateSink;
pub use snapshot::{decode_snapshot, tasks_from_value};
pub use view_model::{Phase, ViewModel};

/// Name of the single host command that receives encoded payloads
pub const INVOKE_COMMAND: &str = "bridge_invoke";

/// Argument name under which the payload text travels to [`INVOKE_COMMAND`]
pub const PAYLOAD_ARG: &str = "payload";

/// Event the host emits with the full task list
pub const SNAPSHOT_EVENT: &str = "tasks-snapshot";
