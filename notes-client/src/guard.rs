//! The navigation guard: a pure decision over (path, token) applied on
//! every navigation, before any page logic runs.

pub const ROOT: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Dashboard,
    Login,
}

impl Target {
    pub fn path(&self) -> &'static str {
        match self {
            Target::Dashboard => DASHBOARD,
            Target::Login => LOGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Target),
}

/// Decides a navigation. Malformed tokens (blank, whitespace) count as absent.
pub fn check(path: &str, token: Option<&str>) -> Decision {
    let authenticated = token.is_some_and(|t| !t.trim().is_empty());

    if path == ROOT {
        return Decision::Redirect(if authenticated { Target::Dashboard } else { Target::Login });
    }

    if (path == DASHBOARD || path.starts_with("/dashboard/")) && !authenticated {
        return Decision::Redirect(Target::Login);
    }

    if (path == LOGIN || path == REGISTER) && authenticated {
        return Decision::Redirect(Target::Dashboard);
    }

    Decision::Allow
}
