//! Authentication UI module
//!
//! Reactive auth context, login/register forms and the route guard
//! component.

mod context;
mod guard;
mod login_form;
mod register_form;

pub use context::{AuthContext, login, logout, provide_auth_context, register, use_auth_context};
pub use guard::ProtectedRoute;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;

pub use crate::core::session::SessionState;
