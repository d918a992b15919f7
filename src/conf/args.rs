use crate::conf::external::ExternalConfig;
use crate::DynError;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "logdest")]
#[clap(author = "Asen Lazarov <asen.lazarov@gmail.com>")]
#[clap(version = "0.1")]
#[clap(about = "A tool to validate syslog forwarding configuration", long_about = None)]
pub struct MyArgs {
    /// Address of the syslog server to forward logs to.
    /// Must be in the format transport://host[:port],
    /// where transport is udp or tcp.
    /// port defaults to 514 if not specified
    #[clap(long, hide = true)]
    pub syslog_address: Option<String>,

    /// Output destination for the resolved endpoint
    #[clap(short, long)]
    pub output: Option<String>,

    /// Yaml config file to use for default values
    /// command line options still override conf values
    #[clap(short, long)]
    pub conf: Option<String>,

    /// Only validate the configuration, do not print the endpoint
    #[clap(long)]
    pub check_only: bool,
}

impl MyArgs {
    pub fn get_external_conf(&self) -> Result<ExternalConfig, DynError> {
        if self.conf.is_some() {
            let pc = ExternalConfig::from_yaml_file(self.conf.as_ref().unwrap().as_str())?;
            Ok(pc)
        } else {
            Ok(ExternalConfig::empty())
        }
    }
}
