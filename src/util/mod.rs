pub mod fetcher;
pub mod html;
pub mod parser;
pub mod webhook;
