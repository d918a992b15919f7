use crate::DynError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufReader;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalConfig {
    pub syslog_address: Option<String>,
    pub output: Option<String>,
    pub check_only: Option<bool>,
}

impl ExternalConfig {
    pub fn from_yaml_file(fname: &str) -> Result<ExternalConfig, DynError> {
        let rdr = BufReader::new(fs::File::open(fname)?);
        match serde_yaml::from_reader(rdr) {
            Ok(pc) => Ok(pc),
            Err(e) => Err(Box::new(e)),
        }
    }

    pub fn empty() -> Self {
        Self {
            syslog_address: None,
            output: None,
            check_only: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::conf::external::ExternalConfig;
    use std::path::PathBuf;

    #[test]
    fn test_empty_deser() {
        let yaml = ":";
        let pc: ExternalConfig = serde_yaml::from_str(&yaml).unwrap();
        println!("{:?}", pc)
    }

    #[test]
    fn test_deser() {
        let yaml = "syslog_address: udp://localhost:514\n";
        let pc: ExternalConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(pc.syslog_address.as_deref(), Some("udp://localhost:514"));
    }

    #[test]
    fn test_example_config() {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("config_examples/syslog.yml");

        let pc = ExternalConfig::from_yaml_file(d.to_str().unwrap()).unwrap();
        println!("{:?}", pc)
    }
}
