pub mod http_gateway;
pub mod terminal;

pub use http_gateway::HttpMaterialsGateway;
pub use terminal::{TerminalConsole, TerminalView};
