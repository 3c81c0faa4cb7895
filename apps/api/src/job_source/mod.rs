// Job Source Resolver: decides whether the job input is a link to parse or
// pasted text, and normalizes the result. All parser calls go through JobParser.

pub mod parser_client;
pub mod resolver;

pub use parser_client::{HttpJobParser, JobParser};
pub use resolver::resolve_job;
