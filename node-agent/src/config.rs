use config::{Config, ConfigError, Environment, File};
use domain_resource::model::vo::{NodeIdentity, ResourceConfig};
use serde::*;
use uuid::Uuid;

/// Environment variable holding the config file path, without extension.
pub const CONFIG_PATH_ENV: &str = "NODE_AGENT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub resources: ResourceConfig,
    #[serde(default = "Default::default")]
    pub agent: NodeConfig,
    #[serde(default = "Default::default")]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "NodeConfig::default_node_id")]
    pub node_id: Uuid,
    #[serde(default = "Default::default")]
    pub stacks: Vec<String>,
    #[serde(default = "NodeConfig::default_zone")]
    pub zone: String,
    /// Seconds between two capacity reports.
    #[serde(default = "NodeConfig::default_report_interval")]
    pub report_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "TelemetryConfig::default_level")]
    pub level: String,
    #[serde(default = "Default::default")]
    pub json: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_id: Self::default_node_id(),
            stacks: Default::default(),
            zone: Self::default_zone(),
            report_interval: Self::default_report_interval(),
        }
    }
}

impl NodeConfig {
    pub fn default_node_id() -> Uuid {
        Uuid::new_v4()
    }
    pub fn default_zone() -> String {
        "default".to_string()
    }
    pub fn default_report_interval() -> u64 {
        60
    }

    pub fn identity(&self) -> NodeIdentity {
        NodeIdentity {
            id: self.node_id,
            stacks: self.stacks.clone(),
            zone: self.zone.clone(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: Default::default(),
        }
    }
}

impl TelemetryConfig {
    pub fn default_level() -> String {
        "info".to_string()
    }
}

/// Reads `config.yaml` (or the file named by [`CONFIG_PATH_ENV`]) and
/// `NODE_AGENT__*` overrides, e.g. `NODE_AGENT__RESOURCES__MEMORY_MB`.
pub fn build_config() -> Result<Config, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
    Config::builder()
        .add_source(File::with_name(&path).required(false))
        .add_source(Environment::with_prefix("NODE_AGENT").separator("__").try_parsing(true))
        .build()
}

pub fn load(config: Config) -> Result<AgentConfig, ConfigError> {
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use config::FileFormat;
    use domain_resource::model::{entity::InstanceState, vo::ResourceCapacity};
    use indoc::indoc;

    use super::*;

    fn parse(yaml: &str) -> Result<AgentConfig, ConfigError> {
        let config = Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)).build()?;
        load(config)
    }

    #[test]
    fn test_full_config() {
        let config = parse(indoc! {"
            resources:
              memory_mb: 600
              memory_overcommit_factor: 4
              disk_mb: 4000
              disk_overcommit_factor: 2
              disk_active_states: [RUNNING, CRASHED]
            agent:
              node_id: 26da107c-edbe-4b6e-b99c-21c633dae8b0
              stacks: [cflinuxfs4]
              zone: z1
              report_interval: 5
            telemetry:
              level: debug
              json: true
        "})
        .unwrap();

        let capacity = ResourceCapacity::try_from(&config.resources).unwrap();
        assert_eq!(capacity.nominal_memory(), 2400);
        assert_eq!(capacity.nominal_disk(), 8000);
        assert_eq!(
            config.resources.disk_active_states,
            vec![InstanceState::Running, InstanceState::Crashed]
        );
        assert_eq!(
            config.resources.memory_active_states,
            ResourceConfig::default_memory_active_states()
        );
        let identity = config.agent.identity();
        assert_eq!(identity.id.to_string(), "26da107c-edbe-4b6e-b99c-21c633dae8b0");
        assert_eq!(identity.stacks, vec!["cflinuxfs4".to_string()]);
        assert_eq!(identity.zone, "z1");
        assert_eq!(config.agent.report_interval, 5);
        assert_eq!(config.telemetry.level, "debug");
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_defaults() {
        let config = parse(indoc! {"
            resources:
              memory_mb: 8192
              memory_overcommit_factor: 1.5
              disk_mb: 16384
              disk_overcommit_factor: 1
        "})
        .unwrap();

        assert_eq!(config.agent.zone, "default");
        assert_eq!(config.agent.report_interval, 60);
        assert!(config.agent.stacks.is_empty());
        assert_eq!(config.telemetry.level, "info");
        assert!(!config.telemetry.json);
        let capacity = ResourceCapacity::try_from(&config.resources).unwrap();
        assert_eq!(capacity.nominal_memory(), 12288);
    }

    #[test]
    fn test_missing_capacity_setting() {
        let result = parse(indoc! {"
            resources:
              memory_mb: 600
              memory_overcommit_factor: 4
              disk_mb: 4000
        "});
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_state() {
        let result = parse(indoc! {"
            resources:
              memory_mb: 600
              memory_overcommit_factor: 4
              disk_mb: 4000
              disk_overcommit_factor: 2
              memory_active_states: [EVACUATING]
        "});
        assert!(result.is_err());
    }
}
