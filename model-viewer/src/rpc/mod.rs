//! JSON-RPC 2.0 bridge between the viewer and the page embedding it.
//!
//! When the viewer runs inside an iframe, the host page talks to it through
//! `postMessage`: it can reset the view or query the current pivot state,
//! and it is told when the viewer is ready or when the model fails to load.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Viewer (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! Native builds run the same systems; outgoing messages are simply dropped.
//!
//! ## Requests
//!
//! - `reset_view`: put the pivot back to its initial yaw, pitch, offset and zoom
//! - `get_view_state`: returns `{ yaw, pitch, offset: [x, y], zoom }`
//!
//! ## Notifications
//!
//! - `model_loaded`: `{ title, path, fit_scale, size }` once the model is framed
//! - `model_load_failed`: `{ path, error }`
//! - `viewer_ready`: interaction is live
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32603`: Internal error

/// Request handling, outgoing queues and the WASM message listener.
pub mod web_rpc;
