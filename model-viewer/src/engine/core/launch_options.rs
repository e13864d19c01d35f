use bevy::prelude::*;

/// Launch-time overrides for the viewer configuration: command-line flags
/// on native builds, URL query parameters on the web.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub model_path: Option<String>,
    pub title: Option<String>,
    pub profile: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "model-viewer", about = "Orbit, pan and zoom a single glTF model")]
pub struct LaunchArgs {
    /// glTF or GLB file, relative to the assets directory
    #[arg(long)]
    pub model: Option<String>,

    /// Title shown above the model
    #[arg(long)]
    pub title: Option<String>,

    /// Interaction profile: "direct" or "entity"
    #[arg(long)]
    pub profile: Option<String>,

    /// Viewer config asset (*.viewer.json), relative to the assets directory
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<LaunchArgs> for ConfigOverrides {
    fn from(args: LaunchArgs) -> Self {
        Self {
            config_path: args.config,
            model_path: args.model,
            title: args.title,
            profile: args.profile,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn collect_overrides() -> ConfigOverrides {
    use clap::Parser;
    LaunchArgs::parse().into()
}

#[cfg(target_arch = "wasm32")]
pub fn collect_overrides() -> ConfigOverrides {
    let Some(search) = web_sys::window().and_then(|window| window.location().search().ok())
    else {
        return ConfigOverrides::default();
    };

    match web_sys::UrlSearchParams::new_with_str(&search) {
        Ok(params) => ConfigOverrides {
            config_path: params.get("config"),
            model_path: params.get("model"),
            title: params.get("title"),
            profile: params.get("profile"),
        },
        Err(_) => ConfigOverrides::default(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_all_flags() {
        let args = LaunchArgs::try_parse_from([
            "model-viewer",
            "--model",
            "models/Fox.glb",
            "--title",
            "Fox",
            "--profile",
            "direct",
            "--config",
            "kiosk.viewer.json",
        ])
        .unwrap();

        let overrides = ConfigOverrides::from(args);
        assert_eq!(overrides.model_path.as_deref(), Some("models/Fox.glb"));
        assert_eq!(overrides.title.as_deref(), Some("Fox"));
        assert_eq!(overrides.profile.as_deref(), Some("direct"));
        assert_eq!(overrides.config_path.as_deref(), Some("kiosk.viewer.json"));
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let args = LaunchArgs::try_parse_from(["model-viewer"]).unwrap();
        assert_eq!(ConfigOverrides::from(args), ConfigOverrides::default());
    }
}
