use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default deck file to present when none is given on the command line
    #[serde(default)]
    pub deck_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Capture mouse events (tooltip click and hover support)
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Counter animation configuration
    #[serde(default)]
    pub counter: CounterConfig,
    /// Reveal-on-scroll configuration
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mouse: default_true(),
            scroll: ScrollConfig::default(),
            counter: CounterConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Easing curve used by the smooth-scroll animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump to the target on the final frame
    None,
    Linear,
    Cubic,
    Quintic,
    #[serde(rename = "ease-out")]
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Tick interval while animating
    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(self.animation_fps))
        }
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count-up duration for statistic counters in milliseconds
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
    /// Count-up duration for the ROI result block
    #[serde(default = "default_result_duration")]
    pub result_duration_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
            result_duration_ms: default_result_duration(),
        }
    }
}

impl CounterConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn result_duration(&self) -> Duration {
        Duration::from_millis(self.result_duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a block's rows that must be inside the viewport
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Rows excluded at the bottom of the viewport when testing visibility
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_rows: u16,
    /// Delay between consecutive timeline reveals in milliseconds
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin_rows: default_bottom_margin(),
            stagger_ms: default_stagger(),
        }
    }
}

impl RevealConfig {
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl AppConfig {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/promodeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("promodeck")
            .join("config.toml")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_result_duration() -> u64 {
    3000
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_bottom_margin() -> u16 {
    3
}

fn default_stagger() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.ui.mouse);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.counter.duration_ms, 2000);
        assert_eq!(config.ui.counter.result_duration_ms, 3000);
        assert_eq!(config.ui.reveal.stagger_ms, 200);
        assert_eq!(config.ui.reveal.bottom_margin_rows, 3);
        assert!((config.ui.reveal.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 100

            [ui.scroll]
            smooth_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.ui.scroll.smooth_enabled);
        assert!(!config.ui.scroll.is_smooth());
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.ui.counter.duration_ms, 2000);
    }

    #[test]
    fn test_easing_names() {
        let config: UiConfig = toml::from_str(
            r#"
            [scroll]
            easing = "ease-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
    }

    #[test]
    fn test_animation_tick_fallback() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick(), Duration::from_millis(16));
    }
}
