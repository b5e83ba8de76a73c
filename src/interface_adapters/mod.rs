// Interface adapters: wire protocol, HTTP client and I/O surfaces.

pub mod clients;
pub mod display;
pub mod protocol;
pub mod scanner;
