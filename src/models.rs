use crate::constants::FALLBACK_DISPLAY_NAME;

/// Which sign-in card variant is shown while nobody is signed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
    Forgot,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "LOGIN",
            AuthMode::Signup => "SIGNUP",
            AuthMode::Forgot => "FORGOT",
        }
    }

    /// Card title for this variant
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Sign Up",
            AuthMode::Forgot => "Forgot Password",
        }
    }

    /// Label of the submit button when no submission is in flight
    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup | AuthMode::Forgot => "Create Account",
        }
    }

    /// Footer link text
    pub fn toggle_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Sign Up",
            AuthMode::Signup | AuthMode::Forgot => "Already have an account? Sign In",
        }
    }

    /// Target of the footer link
    pub fn toggled(&self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup | AuthMode::Forgot => AuthMode::Login,
        }
    }
}

/// A signed-in user. Only the email is stored; the display name is derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Session { email: email.into() }
    }

    pub fn name(&self) -> &str {
        display_name(&self.email)
    }

    /// Upper-cased first character of the display name, for the avatar
    pub fn initial(&self) -> String {
        self.name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Everything before the first `@`, or "User" when that part is empty.
pub fn display_name(email: &str) -> &str {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        FALLBACK_DISPLAY_NAME
    } else {
        local
    }
}

/// Providers offered on the social-login card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
    GitHub,
    Apple,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 4] = [
        SocialProvider::Google,
        SocialProvider::Facebook,
        SocialProvider::GitHub,
        SocialProvider::Apple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
            SocialProvider::GitHub => "GitHub",
            SocialProvider::Apple => "Apple",
        }
    }
}

// ============================================================================
// Dashboard content (static, illustrative only)
// ============================================================================

/// Accent used by dashboard cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Blue,
    Purple,
    Orange,
}

/// Status dot of an activity entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Warning,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub time: &'static str,
    pub description: &'static str,
    pub status: ActivityStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub accent: Accent,
}

/// Entries of the dashboard sidebar; the last one signs out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarItem {
    #[default]
    Overview,
    Notifications,
    Discovery,
    Account,
    Settings,
    Logout,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 6] = [
        SidebarItem::Overview,
        SidebarItem::Notifications,
        SidebarItem::Discovery,
        SidebarItem::Account,
        SidebarItem::Settings,
        SidebarItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarItem::Overview => "Overview",
            SidebarItem::Notifications => "Notifications",
            SidebarItem::Discovery => "Discovery",
            SidebarItem::Account => "Account",
            SidebarItem::Settings => "Settings",
            SidebarItem::Logout => "Logout",
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            SidebarItem::Notifications => Some("3"),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|item| item == self).unwrap_or(0)
    }

    pub fn next(&self) -> SidebarItem {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> SidebarItem {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub const STAT_CARDS: [StatCard; 3] = [
    StatCard {
        title: "Current Revenue",
        value: "$48,920.00",
        trend: "+8.2%",
        accent: Accent::Emerald,
    },
    StatCard {
        title: "Team Velocity",
        value: "84%",
        trend: "+4.1%",
        accent: Accent::Blue,
    },
    StatCard {
        title: "System Health",
        value: "Stable",
        trend: "Normal",
        accent: Accent::Purple,
    },
];

pub const ACTIVITY_LOG: [ActivityEntry; 3] = [
    ActivityEntry {
        title: "Deployment: Edge-01",
        time: "2h ago",
        description: "Successfully deployed v2.4.0 to Tokyo-01 cluster.",
        status: ActivityStatus::Success,
    },
    ActivityEntry {
        title: "Security Alert",
        time: "5h ago",
        description: "Unusual login attempt blocked from 192.168.1.1.",
        status: ActivityStatus::Warning,
    },
    ActivityEntry {
        title: "Sync Complete",
        time: "1d ago",
        description: "Database synchronization with backup node finished.",
        status: ActivityStatus::Info,
    },
];

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Metrics",
        accent: Accent::Purple,
    },
    QuickAction {
        label: "Directory",
        accent: Accent::Emerald,
    },
    QuickAction {
        label: "Incidents",
        accent: Accent::Orange,
    },
    QuickAction {
        label: "Auth API",
        accent: Accent::Blue,
    },
];
