//! Nomad Language Server
//!
//! Speaks the Language Server Protocol over stdio and delegates the actual
//! work to the schema-driven resolver modules in the library crate.

use clap::Parser;
use tower_lsp::{LspService, Server};

use nomad_ls::backend::Backend;

/// Command line arguments accepted by the server binary.
#[derive(Debug, Parser)]
#[command(name = "nomad-ls", version, about = "Language server for Nomad job specification files")]
struct Args {
    /// Communicate over stdio. This is the only supported transport; the
    /// flag is accepted because editors pass it when spawning servers.
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    if args.stdio {
        log::debug!("client requested the stdio transport");
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
