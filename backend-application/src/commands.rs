pub mod event_commands;
