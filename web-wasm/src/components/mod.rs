pub mod filter_bar;
pub mod header;
pub mod pairing_card;
pub mod preview_input;
pub mod upgrade_banner;
pub mod upgrade_modal;
