mod app_helper;

mod cli_manager;

mod command;

pub(crate) mod common;

mod encode_command;
pub(crate) use encode_command::EncodeCommand;

mod enumerate_command;
pub(crate) use enumerate_command::EnumerateCommand;

mod writable_string;
