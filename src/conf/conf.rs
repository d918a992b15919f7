use crate::{ConfigError, DynBoxWrite, DynError, MyArgs, SyslogConfig};
use std::fs;
use std::io::{self, BufWriter};
use url::Url;

macro_rules! args_or_external_opt_default {
    ($a:expr,$b:expr, $prop:ident, $def: expr) => {
        if $a.$prop.is_some() {
            $a.$prop.as_ref().unwrap()
        } else {
            if ($b.$prop.is_some()) {
                $b.$prop.as_ref().unwrap()
            } else {
                $def
            }
        }
    };
}

macro_rules! args_or_external_bool_default {
    ($a:expr,$b:expr, $prop:ident, $def: expr) => {
        if $a.$prop {
            $a.$prop
        } else {
            if ($b.$prop.is_some()) {
                $b.$prop.unwrap()
            } else {
                $def
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct LogdestConfig {
    syslog: SyslogConfig,
    output: String,
    check_only: bool,
}

impl LogdestConfig {
    pub fn new(args: MyArgs) -> Result<LogdestConfig, DynError> {
        let external_conf = args.get_external_conf()?;
        let syslog_address =
            args_or_external_opt_default!(&args, &external_conf, syslog_address, "");
        let syslog = SyslogConfig::new(syslog_address);
        let output = args_or_external_opt_default!(&args, &external_conf, output, "-");
        if output.is_empty() {
            let my_err: DynError =
                Box::new(ConfigError::new("Output destination may not be empty"));
            return Err(my_err);
        }
        let check_only = args_or_external_bool_default!(&args, &external_conf, check_only, false);
        Ok(Self {
            syslog,
            output: output.to_string(),
            check_only,
        })
    }

    pub fn syslog(&self) -> &SyslogConfig {
        &self.syslog
    }

    pub fn resolve_syslog_addr(&self) -> Result<Option<Url>, DynError> {
        self.syslog.resolve_addr()
    }

    pub fn check_only(&self) -> bool {
        self.check_only
    }

    pub fn get_outp(&self) -> Result<DynBoxWrite, DynError> {
        let writer: DynBoxWrite = if &self.output == "-" {
            Box::new(BufWriter::new(io::stdout()))
        } else {
            Box::new(BufWriter::new(fs::File::create(&self.output)?))
        };
        Ok(writer)
    }
}
