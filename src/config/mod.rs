// SPDX-License-Identifier: MPL-2.0
//! Site configuration: the per-deployment description of a restaurant site.
//!
//! One `SiteConfig` exists per deployed site. It is supplied whole to the
//! page composition at startup and is read-only from the perspective of
//! every section variant. Loading falls back to the built-in sample site
//! when no configuration file is present.

pub mod defaults;

use crate::error::{ConfigError, Result};
use crate::theme::ThemeId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "site.toml";
const APP_NAME: &str = "Tafel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: Address,
}

/// Weekdays in display order, with chrome-translation keys for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Weekday::Monday => "weekday-monday",
            Weekday::Tuesday => "weekday-tuesday",
            Weekday::Wednesday => "weekday-wednesday",
            Weekday::Thursday => "weekday-thursday",
            Weekday::Friday => "weekday-friday",
            Weekday::Saturday => "weekday-saturday",
            Weekday::Sunday => "weekday-sunday",
        }
    }
}

/// One free-form display string per weekday. The text is not parsed as
/// structured time; "17:00 - 23:00" and "Ruhetag" are equally valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl WeeklyHours {
    /// Entries in weekday order for rendering.
    pub fn entries(&self) -> [(Weekday, &str); 7] {
        [
            (Weekday::Monday, self.monday.as_str()),
            (Weekday::Tuesday, self.tuesday.as_str()),
            (Weekday::Wednesday, self.wednesday.as_str()),
            (Weekday::Thursday, self.thursday.as_str()),
            (Weekday::Friday, self.friday.as_str()),
            (Weekday::Saturday, self.saturday.as_str()),
            (Weekday::Sunday, self.sunday.as_str()),
        ]
    }
}

/// Module selection: one variant identifier per role. The about and gallery
/// roles may be left out; a missing identifier for any other role is a
/// configuration error reported by [`SiteConfig::validate`], not a parse
/// error, so the message can name the role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modules {
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub gallery: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

/// A required role's identifier, or the error naming the role.
pub fn required<'a>(
    id: &'a Option<String>,
    role: &'static str,
) -> std::result::Result<&'a str, ConfigError> {
    id.as_deref().ok_or(ConfigError::MissingSection(role))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub reservations: bool,
    pub menu_cms: bool,
    pub multi_language: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            reservations: false,
            menu_cms: false,
            multi_language: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub restaurant_name: String,
    pub tagline: String,
    pub description: String,
    pub contact: Contact,
    pub hours: WeeklyHours,
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde(default)]
    pub maps_embed_url: Option<String>,
    pub theme: ThemeId,
    pub modules: Modules,
    #[serde(default)]
    pub features: Features,
}

impl SiteConfig {
    /// Checks every module selection against the variant registries.
    ///
    /// An unknown identifier is a deployment defect; composition must not
    /// proceed past it.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        use crate::sections::{about, contact, footer, gallery, header, hero, menu};

        hero::Variant::resolve(required(&self.modules.hero, hero::ROLE)?)?;
        header::Variant::resolve(required(&self.modules.header, header::ROLE)?)?;
        menu::Variant::resolve(required(&self.modules.menu, menu::ROLE)?)?;
        if let Some(id) = &self.modules.about {
            about::Variant::resolve(id)?;
        }
        if let Some(id) = &self.modules.gallery {
            gallery::Variant::resolve(id)?;
        }
        contact::Variant::resolve(required(&self.modules.contact, contact::ROLE)?)?;
        footer::Variant::resolve(required(&self.modules.footer, footer::ROLE)?)?;
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        defaults::site_config()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<SiteConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SiteConfig::default())
}

pub fn save(config: &SiteConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
