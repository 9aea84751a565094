pub(crate) mod activity_card;
pub(crate) mod header;
pub(crate) mod login_modal;
pub(crate) mod message_banner;
pub(crate) mod roster_list;
pub(crate) mod signup_form;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use header::Header;
pub use login_modal::LoginModal;
pub use message_banner::MessageBanner;
pub use roster_list::RosterList;
pub use signup_form::SignupForm;
