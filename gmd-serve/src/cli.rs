use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Port the dashboard is served on unless `--port` says otherwise.
pub const DEFAULT_PORT: u16 = 8088;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gmd-serve",
    version,
    about = "Serve the Gap Minder dashboard"
)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Directory holding the built dashboard bundle (index.html, wasm, assets)
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub dist: PathBuf,
}
