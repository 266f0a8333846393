//! Resource state badges and collection modes.

/// Badge color a state renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateColor {
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Danger,
    Dark,
}

impl StateColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            StateColor::Primary => "primary",
            StateColor::Secondary => "secondary",
            StateColor::Info => "info",
            StateColor::Success => "success",
            StateColor::Warning => "warning",
            StateColor::Danger => "danger",
            StateColor::Dark => "dark",
        }
    }
}

/// What a collector run picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    All,
    Create,
    Update,
}

impl CollectMode {
    pub const fn value(self) -> &'static str {
        match self {
            CollectMode::All => "ALL",
            CollectMode::Create => "CREATE",
            CollectMode::Update => "UPDATE",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CollectMode::All => "All",
            CollectMode::Create => "Create",
            CollectMode::Update => "Update",
        }
    }
}

/// Membership state of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    Enabled,
    Disabled,
    Unidentified,
}

impl MemberState {
    pub const fn message(self) -> &'static str {
        match self {
            MemberState::Enabled => "Enabled",
            MemberState::Disabled => "Disabled",
            MemberState::Unidentified => "Unidentified",
        }
    }

    pub const fn color(self) -> StateColor {
        match self {
            MemberState::Enabled => StateColor::Primary,
            MemberState::Disabled => StateColor::Info,
            MemberState::Unidentified => StateColor::Secondary,
        }
    }
}

/// Lifecycle state of a managed server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    InService,
    Maintenance,
    Closed,
    Deleted,
}

impl ServerState {
    pub const fn message(self) -> &'static str {
        match self {
            ServerState::InService => "In-Service",
            ServerState::Maintenance => "Maintenance",
            ServerState::Closed => "Closed",
            ServerState::Deleted => "Deleted",
        }
    }

    pub const fn color(self) -> StateColor {
        match self {
            ServerState::InService => StateColor::Success,
            ServerState::Maintenance => StateColor::Warning,
            ServerState::Closed => StateColor::Dark,
            ServerState::Deleted => StateColor::Danger,
        }
    }
}

/// Connection state of a resource collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    New,
    Active,
    Disconnected,
    Duplicated,
    Unmanaged,
}

impl CollectorState {
    pub const fn message(self) -> &'static str {
        match self {
            CollectorState::New => "New",
            CollectorState::Active => "Active",
            CollectorState::Disconnected => "Disconnected",
            CollectorState::Duplicated => "Duplicated",
            CollectorState::Unmanaged => "Unmanaged",
        }
    }

    pub const fn color(self) -> StateColor {
        match self {
            CollectorState::New => StateColor::Info,
            CollectorState::Active => StateColor::Primary,
            CollectorState::Disconnected => StateColor::Danger,
            CollectorState::Duplicated => StateColor::Warning,
            CollectorState::Unmanaged => StateColor::Secondary,
        }
    }
}
