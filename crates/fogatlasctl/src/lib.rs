//! fogatlasctl: command line client for the FogAtlas orchestrator
//!
//! The binary parses the command line and hands the parsed arguments to the
//! handlers in [`commands`], which talk to the orchestrator through any
//! [`FogAtlasApi`](fogatlas_client::FogAtlasApi) implementation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod render;
pub mod resource;

use std::io::Write;

use fogatlas_client::FogAtlasApi;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{CtlError, Result};
pub use render::{Render, Response};
pub use resource::ResourceKind;

/// Route a parsed command to its handler
///
/// # Errors
/// Returns the error of the handler; failed items of bulk commands are not
/// errors.
pub async fn dispatch<A: FogAtlasApi, W: Write>(
    api: &A,
    command: &Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Get(args) => commands::get::execute(api, args, out).await,
        Commands::Put(args) => commands::put::execute(api, args, out).await,
        Commands::Patch(args) => commands::patch::execute(api, args, out).await,
        Commands::Delete(args) => commands::delete::execute(api, args, out).await,
        Commands::PutAll(args) => commands::put_all::execute(api, args, out).await.map(|_| ()),
        Commands::DeleteAll(args) => {
            commands::delete_all::execute(api, args, out).await.map(|_| ())
        }
    }
}
