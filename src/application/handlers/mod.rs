//! Application handlers - use cases composing the ports.

mod reset_password;
mod share_admin;
mod share_gate;

pub use reset_password::{ResetPasswordCommand, ResetPasswordHandler};
pub use share_admin::{
    CreateShareCommand, CreateShareHandler, DeleteShareHandler, ListSharesHandler,
    ShareAdminError,
};
pub use share_gate::{ResolveShareHandler, ShareGateError, ShareView, SubmitPasswordHandler};
