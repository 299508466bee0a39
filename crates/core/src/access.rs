//! Route authorization decisions.
//!
//! The HTTP middleware gathers the facts (is there a session, what did the
//! role lookup return) and asks [`decide`] what to do with the request. The
//! decision is pure so every branch can be tested without a server.

use crate::roles::RoleResolution;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const FORBIDDEN_PATH: &str = "/forbidden";
pub const LOGOUT_PATH: &str = "/logout";

/// Everything at or below this prefix requires the admin role.
pub const ADMIN_PREFIX: &str = "/admin";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH, SIGNUP_PATH];

/// Paths still open to a session whose role lookup failed.
const UNKNOWN_ROLE_PATHS: &[&str] = &[FORBIDDEN_PATH, LOGOUT_PATH];

/// Who is making the request, as far as the gate can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Authenticated(RoleResolution),
}

/// Terminal outcome for one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Allow,
    RedirectLogin,
    RedirectForbidden,
}

impl GateOutcome {
    /// Redirect target, if the request is not allowed through.
    pub fn location(self) -> Option<&'static str> {
        match self {
            GateOutcome::Allow => None,
            GateOutcome::RedirectLogin => Some(LOGIN_PATH),
            GateOutcome::RedirectForbidden => Some(FORBIDDEN_PATH),
        }
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&normalize(path))
}

/// `/admin` and anything below `/admin/`. `/administrator` is not matched.
pub fn is_admin_path(path: &str) -> bool {
    let path = normalize(path);
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide the outcome for `path` requested by `principal`.
///
/// A role lookup that could not complete ([`RoleResolution::Unknown`]) never
/// yields [`GateOutcome::Allow`] on a protected path. Such a principal can
/// still reach the public pages, `/forbidden` and `/logout`.
pub fn decide(path: &str, principal: Principal) -> GateOutcome {
    match principal {
        Principal::Anonymous => {
            if is_public_path(path) {
                GateOutcome::Allow
            } else {
                GateOutcome::RedirectLogin
            }
        }
        Principal::Authenticated(RoleResolution::Unknown) => {
            if is_public_path(path) || UNKNOWN_ROLE_PATHS.contains(&normalize(path)) {
                GateOutcome::Allow
            } else {
                GateOutcome::RedirectForbidden
            }
        }
        Principal::Authenticated(resolution) => {
            if is_admin_path(path) && !resolution.is_admin() {
                GateOutcome::RedirectForbidden
            } else {
                GateOutcome::Allow
            }
        }
    }
}

/// Drop a single trailing slash so `/login/` and `/login` classify the same.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
