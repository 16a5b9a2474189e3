use crate::features::codec::DEFAULT_JPEG_QUALITY;
use crate::gps::DEFAULT_JITTER_RADIUS_M;
use crate::time::OffsetSource;
use crate::{GeoStamper, GeostampError};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 10_000;
pub const DEFAULT_BODY_LIMIT_MB: usize = 25;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Service settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `PORT` (default 10000).
    pub port: u16,
    /// `GEOSTAMP_UTC_OFFSET`: `±HH:MM`, an IANA zone, or `auto` (default `+01:00`).
    pub offset: OffsetSource,
    /// `GEOSTAMP_JITTER` (default true).
    pub apply_jitter: bool,
    /// `GEOSTAMP_JITTER_RADIUS_M` (default 2).
    pub jitter_radius_m: f64,
    /// `GEOSTAMP_CAPTURE_METADATA` (default true).
    pub include_capture_metadata: bool,
    /// `GEOSTAMP_JPEG_QUALITY` (default 75).
    pub jpeg_quality: u8,
    /// `GEOSTAMP_BODY_LIMIT_MB` (default 25), stored in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            offset: OffsetSource::default(),
            apply_jitter: true,
            jitter_radius_m: DEFAULT_JITTER_RADIUS_M,
            include_capture_metadata: true,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            body_limit_bytes: DEFAULT_BODY_LIMIT_MB * 1024 * 1024,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_bool(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None => Ok(default),
        Some("1" | "true" | "TRUE" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "FALSE" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let body_limit_mb = parse(
            "GEOSTAMP_BODY_LIMIT_MB",
            lookup("GEOSTAMP_BODY_LIMIT_MB"),
            DEFAULT_BODY_LIMIT_MB,
        )?;
        Ok(Self {
            port: parse("PORT", lookup("PORT"), defaults.port)?,
            offset: parse(
                "GEOSTAMP_UTC_OFFSET",
                lookup("GEOSTAMP_UTC_OFFSET"),
                defaults.offset,
            )?,
            apply_jitter: parse_bool(
                "GEOSTAMP_JITTER",
                lookup("GEOSTAMP_JITTER"),
                defaults.apply_jitter,
            )?,
            jitter_radius_m: parse(
                "GEOSTAMP_JITTER_RADIUS_M",
                lookup("GEOSTAMP_JITTER_RADIUS_M"),
                defaults.jitter_radius_m,
            )?,
            include_capture_metadata: parse_bool(
                "GEOSTAMP_CAPTURE_METADATA",
                lookup("GEOSTAMP_CAPTURE_METADATA"),
                defaults.include_capture_metadata,
            )?,
            jpeg_quality: parse(
                "GEOSTAMP_JPEG_QUALITY",
                lookup("GEOSTAMP_JPEG_QUALITY"),
                defaults.jpeg_quality,
            )?,
            body_limit_bytes: body_limit_mb.saturating_mul(1024 * 1024),
        })
    }

    /// The stamping pipeline these settings describe.
    pub fn stamper(&self) -> Result<GeoStamper, GeostampError> {
        GeoStamper::builder()
            .offset(self.offset)
            .apply_jitter(self.apply_jitter)
            .jitter_radius_m(self.jitter_radius_m)
            .include_capture_metadata(self.include_capture_metadata)
            .jpeg_quality(self.jpeg_quality)
            .build()
    }
}
