pub mod backup_panel;
pub mod level_up_modal;
pub mod player_level;
