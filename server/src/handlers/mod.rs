pub mod parse_handlers;
