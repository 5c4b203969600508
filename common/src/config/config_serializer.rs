use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML settings, optionally written below a `#` comment header.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigSerializer {
    header: Option<String>,
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
        }
    }
}

/// True when every line is blank or a comment, e.g. a file the user emptied by hand.
fn has_no_settings(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let body = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Cannot write settings as YAML: {}", e))?;

        let Some(header) = &self.header else {
            return Ok(body);
        };
        let mut out = String::new();
        for line in header.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&body);
        Ok(out)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let content = if has_no_settings(content) { "{}" } else { content };
        serde_yaml_ng::from_str(content).map_err(|e| format!("Cannot read YAML settings: {}", e))
    }
}
