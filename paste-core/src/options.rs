//! Options menu: share, rate, feedback
//!
//! Each option maps to a title and, given what the device can present, to the
//! platform action Swift should perform.

use crate::interface::DeviceCapabilities;

pub const OPTIONS_TITLE: &str = "Options";
pub const SEARCH_TITLE: &str = "Emoji Search";

pub const SHARE_MESSAGE: &str =
    "Download Paste, an app that lets you find emoji faster than ever: bit.ly/usepaste";
pub const APP_STORE_URL: &str = "https://itunes.apple.com/app/paste-emoji-search/id1070640289";
pub const FEEDBACK_EMAIL: &str = "usepaste@gmail.com";
pub const FEEDBACK_SUBJECT: &str = "[Paste Feedback]";

/// Menu rows, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum MenuOption {
    Share,
    Rate,
    Feedback,
}

/// Platform action for a tapped option
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MenuAction {
    /// Present the SMS composer prefilled with `body`
    ComposeMessage { body: String },
    /// Present the system share sheet with `body`
    ShareSheet { body: String },
    OpenUrl { url: String },
    /// Present the mail composer
    ComposeMail { recipients: Vec<String>, subject: String },
    /// Show a plain alert with an OK button
    Alert { title: String, message: String },
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Share, MenuOption::Rate, MenuOption::Feedback];

    pub fn title(self) -> &'static str {
        match self {
            MenuOption::Share => "Share with Friends",
            MenuOption::Rate => "Rate on the App Store",
            MenuOption::Feedback => "Send Feedback",
        }
    }

    /// Row of this option in the menu table
    pub fn row(self) -> u64 {
        match self {
            MenuOption::Share => 0,
            MenuOption::Rate => 1,
            MenuOption::Feedback => 2,
        }
    }

    pub fn action(self, capabilities: DeviceCapabilities) -> MenuAction {
        match self {
            MenuOption::Share if capabilities.can_send_text => MenuAction::ComposeMessage {
                body: SHARE_MESSAGE.to_string(),
            },
            MenuOption::Share => MenuAction::ShareSheet {
                body: SHARE_MESSAGE.to_string(),
            },
            MenuOption::Rate => MenuAction::OpenUrl {
                url: APP_STORE_URL.to_string(),
            },
            MenuOption::Feedback if capabilities.can_send_mail => MenuAction::ComposeMail {
                recipients: vec![FEEDBACK_EMAIL.to_string()],
                subject: FEEDBACK_SUBJECT.to_string(),
            },
            MenuOption::Feedback => MenuAction::Alert {
                title: MenuOption::Feedback.title().to_string(),
                message: format!("Email us at {}", FEEDBACK_EMAIL),
            },
        }
    }
}

// uniffi enums can't carry methods, so the menu is exported as free functions

/// All options in display order
#[uniffi::export]
pub fn menu_options() -> Vec<MenuOption> {
    MenuOption::ALL.to_vec()
}

#[uniffi::export]
pub fn menu_option_at(row: u64) -> Option<MenuOption> {
    MenuOption::ALL.into_iter().find(|option| option.row() == row)
}

#[uniffi::export]
pub fn menu_title(option: MenuOption) -> String {
    option.title().to_string()
}

#[uniffi::export]
pub fn menu_action(option: MenuOption, capabilities: DeviceCapabilities) -> MenuAction {
    option.action(capabilities)
}

#[uniffi::export]
pub fn options_screen_title() -> String {
    OPTIONS_TITLE.to_string()
}

#[uniffi::export]
pub fn search_screen_title() -> String {
    SEARCH_TITLE.to_string()
}
