pub mod auto_refresh;
pub mod history_modal;
