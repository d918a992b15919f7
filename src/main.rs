// Copyright 2022 Asen Lazarov

use std::error::Error;
use std::io::Write;

use clap::Parser;
use log::{info, warn};
use url::Url;

pub use conf::*;

mod conf;

pub type DynError = Box<dyn Error + Send + Sync>;
pub type DynBoxWrite = Box<dyn Write>;

fn print_endpoint(endpoint: &Url, outp: &mut DynBoxWrite) -> Result<(), DynError> {
    outp.write(format!("scheme={}", endpoint.scheme()).as_bytes())?;
    if let Some(host) = endpoint.host_str() {
        outp.write(format!(" host={}", host).as_bytes())?;
    }
    // the port is shown only when the address carries one explicitly,
    // applying the 514 default is up to the consuming syslog subsystem
    if let Some(port) = endpoint.port() {
        outp.write(format!(" port={}", port).as_bytes())?;
    }
    outp.write("\n".as_bytes())?;
    Ok(())
}

fn main() -> Result<(), DynError> {
    env_logger::init();
    let args: MyArgs = MyArgs::parse();
    let conf = LogdestConfig::new(args)?;
    match conf.resolve_syslog_addr()? {
        Some(endpoint) => {
            if endpoint.scheme() != "udp" && endpoint.scheme() != "tcp" {
                warn!("Unexpected syslog transport: {}", endpoint.scheme());
            }
            info!("Resolved syslog address: {}", &endpoint);
            if !conf.check_only() {
                let mut outp: DynBoxWrite = conf.get_outp()?;
                print_endpoint(&endpoint, &mut outp)?;
                outp.flush()?;
            }
        }
        None => {
            info!("No syslog address configured, forwarding is disabled");
        }
    }
    Ok(())
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    MyArgs::command().debug_assert()
}
