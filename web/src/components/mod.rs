pub mod alarm_icon;
pub mod guard;
pub mod log_panel;
pub mod sidebar;
pub mod video_player;
