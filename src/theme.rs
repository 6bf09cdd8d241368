//! Visual theming
//!
//! Purely cosmetic: nothing here reaches the simulation. Themes use the
//! same camelCase layout records as the web environment files, with CSS
//! style strings such as `"20%"` and `"80px"`. Anything missing or
//! malformed is dropped rather than reported.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A CSS-ish length: `"20%"`, `"80px"`, `"12"` or a bare number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f32),
    Text(String),
}

impl CssValue {
    /// Numeric part, ignoring a `%` or `px` suffix
    pub fn number(&self) -> Option<f32> {
        let value = match self {
            CssValue::Number(n) => *n,
            CssValue::Text(s) => {
                let s = s.trim();
                let s = s
                    .strip_suffix('%')
                    .or_else(|| s.strip_suffix("px"))
                    .unwrap_or(s);
                s.trim().parse::<f32>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    fn fraction(&self) -> Option<f32> {
        self.number().map(|n| n / 100.0)
    }
}

// Field-level fallbacks: a value of the wrong shape reads as absent

fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_name<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(lenient::<D, String>(de)?.unwrap_or_default())
}

fn lenient_flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(lenient::<D, bool>(de)?.unwrap_or(false))
}

/// Keeps the entries that parse; anything but an array reads as `None`
fn lenient_list<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(de)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn lenient_vec<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_list(de)?.unwrap_or_default())
}

/// Cloud layout entry, anchored from the left or the right edge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudSpec {
    #[serde(deserialize_with = "lenient")]
    pub top: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub left: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub right: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub opacity: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSpec {
    #[serde(deserialize_with = "lenient")]
    pub top: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub left: Option<CssValue>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<CssValue>,
}

/// Theme configuration record
///
/// The default is an empty theme: no colours, clouds or stars. Use
/// [`Theme::day`] or [`Theme::night`] for a full preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(deserialize_with = "lenient_name")]
    pub name: String,
    /// CSS background (may be a gradient)
    #[serde(deserialize_with = "lenient")]
    pub background: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ground_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cloud_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(alias = "pipeColor", deserialize_with = "lenient")]
    pub obstacle_color: Option<String>,
    #[serde(alias = "pipeBorderColor", deserialize_with = "lenient")]
    pub obstacle_border_color: Option<String>,
    #[serde(alias = "cloudPositions", deserialize_with = "lenient_vec")]
    pub clouds: Vec<CloudSpec>,
    #[serde(deserialize_with = "lenient_flag")]
    pub has_stars: bool,
    #[serde(alias = "starPositions", deserialize_with = "lenient_list")]
    pub stars: Option<Vec<StarSpec>>,
}

fn text(s: &str) -> Option<CssValue> {
    Some(CssValue::Text(s.to_string()))
}

fn cloud(top: &str, anchor: Anchor, w: &str, h: &str, opacity: f32) -> CloudSpec {
    let (left, right) = match anchor {
        Anchor::Left(x) => (text(x), None),
        Anchor::Right(x) => (None, text(x)),
    };
    CloudSpec {
        top: text(top),
        left,
        right,
        width: text(w),
        height: text(h),
        opacity: Some(opacity),
    }
}

enum Anchor<'a> {
    Left(&'a str),
    Right(&'a str),
}

fn star(top: &str, left: &str, size: &str) -> StarSpec {
    StarSpec {
        top: text(top),
        left: text(left),
        size: text(size),
    }
}

impl Theme {
    /// Bright sky preset
    pub fn day() -> Self {
        Self {
            name: "day".into(),
            background: Some(
                "linear-gradient(to bottom, #87CEEB 0%, #98D8E8 50%, #B0E0E6 100%)".into(),
            ),
            ground_color: Some("#8FBC8F".into()),
            cloud_color: Some("rgba(255, 255, 255, 0.8)".into()),
            text_color: Some("#2D5016".into()),
            obstacle_color: Some("#228B22".into()),
            obstacle_border_color: Some("#006400".into()),
            clouds: vec![
                cloud("20%", Anchor::Left("5%"), "80px", "48px", 0.6),
                cloud("32%", Anchor::Right("8%"), "64px", "40px", 0.6),
                cloud("40%", Anchor::Left("50%"), "96px", "56px", 0.6),
                cloud("15%", Anchor::Left("70%"), "72px", "44px", 0.5),
                cloud("45%", Anchor::Right("25%"), "88px", "52px", 0.4),
            ],
            has_stars: false,
            stars: None,
        }
    }

    /// Dark sky preset with stars
    pub fn night() -> Self {
        Self {
            name: "night".into(),
            background: Some(
                "linear-gradient(to bottom, #0B1026 0%, #1B2750 60%, #2C3E70 100%)".into(),
            ),
            ground_color: Some("#2F4F2F".into()),
            cloud_color: Some("rgba(200, 200, 230, 0.25)".into()),
            text_color: Some("#E0E6FF".into()),
            obstacle_color: Some("#2E5E3E".into()),
            obstacle_border_color: Some("#1C3A26".into()),
            clouds: vec![
                cloud("25%", Anchor::Left("15%"), "70px", "40px", 0.3),
                cloud("38%", Anchor::Right("12%"), "90px", "50px", 0.25),
            ],
            has_stars: true,
            stars: Some(vec![
                star("8%", "12%", "2px"),
                star("14%", "33%", "3px"),
                star("6%", "58%", "2px"),
                star("22%", "77%", "2px"),
                star("11%", "91%", "3px"),
                star("30%", "46%", "2px"),
            ]),
        }
    }

    /// Parse a theme record
    ///
    /// Fields of the wrong shape and unusable list entries are dropped one
    /// by one; only JSON that is not an object at all falls back to the day
    /// preset.
    pub fn from_json_lenient(json: &str) -> Self {
        match serde_json::from_str::<Theme>(json) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("Ignoring malformed theme ({}), using day preset", e);
                Self::day()
            }
        }
    }

    /// Sun for the day theme, moon for anything else
    pub fn celestial_color(&self) -> &'static str {
        if self.name == "day" {
            "#FFD700"
        } else {
            "#F5F5DC"
        }
    }

    /// Cloud positions in playfield pixels; incomplete entries are skipped
    pub fn cloud_placements(&self, width: f32, height: f32) -> Vec<CloudPlacement> {
        self.clouds
            .iter()
            .filter_map(|c| {
                let x = match (&c.left, &c.right) {
                    (Some(left), _) => left.fraction()? * width,
                    (None, Some(right)) => (1.0 - right.fraction()?) * width,
                    (None, None) => return None,
                };
                Some(CloudPlacement {
                    x,
                    y: c.top.as_ref()?.fraction()? * height,
                    width: c.width.as_ref()?.number()?,
                    height: c.height.as_ref()?.number()?,
                    opacity: c.opacity.unwrap_or(1.0).clamp(0.0, 1.0),
                })
            })
            .collect()
    }

    /// Star positions in playfield pixels; empty unless `has_stars`
    pub fn star_placements(&self, width: f32, height: f32) -> Vec<StarPlacement> {
        if !self.has_stars {
            return Vec::new();
        }
        self.stars
            .iter()
            .flatten()
            .filter_map(|s| {
                Some(StarPlacement {
                    x: s.left.as_ref()?.fraction()? * width,
                    y: s.top.as_ref()?.fraction()? * height,
                    size: s.size.as_ref()?.number()?,
                })
            })
            .collect()
    }

    /// Flatten into absolute positions for a renderer
    pub fn resolve(&self, width: f32, height: f32) -> ResolvedTheme {
        ResolvedTheme {
            name: self.name.clone(),
            background: self.background.clone(),
            ground_color: self.ground_color.clone(),
            cloud_color: self.cloud_color.clone(),
            text_color: self.text_color.clone(),
            obstacle_color: self.obstacle_color.clone(),
            obstacle_border_color: self.obstacle_border_color.clone(),
            celestial_color: self.celestial_color(),
            clouds: self.cloud_placements(width, height),
            stars: self.star_placements(width, height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarPlacement {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Theme with every layout string resolved to pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTheme {
    pub name: String,
    pub background: Option<String>,
    pub ground_color: Option<String>,
    pub cloud_color: Option<String>,
    pub text_color: Option<String>,
    pub obstacle_color: Option<String>,
    pub obstacle_border_color: Option<String>,
    pub celestial_color: &'static str,
    pub clouds: Vec<CloudPlacement>,
    pub stars: Vec<StarPlacement>,
}

impl ResolvedTheme {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
