//! User preferences and their normalization into [`Settings`].
//!
//! The page hands over a loosely typed preferences object. Numbers and flags
//! in it are coerced the way the browser would coerce them (`Number(..)` and
//! truthiness), so a malformed number never fails loading: it turns into NaN
//! and shows up as such in the rendered transform.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::error::{ConfigError, js_message};

/// Name of the global the host page defines before the app starts.
pub const GLOBAL_NAME: &str = "MiniVideoMe";

/// One loosely typed preference value.
///
/// Unlike `serde_json::Value` this keeps NaN and the infinities, which a
/// page object may carry.
#[derive(Clone, Debug, PartialEq)]
pub enum PrefValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PrefValue>),
    /// Contents are irrelevant: objects coerce to NaN and are truthy.
    Object,
}

impl<'de> Deserialize<'de> for PrefValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PrefValueVisitor)
    }
}

struct PrefValueVisitor;

impl<'de> Visitor<'de> for PrefValueVisitor {
    type Value = PrefValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a preference value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<PrefValue, E> {
        Ok(PrefValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PrefValue, E> {
        Ok(PrefValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PrefValue, E> {
        Ok(PrefValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PrefValue, E> {
        Ok(PrefValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PrefValue, E> {
        Ok(PrefValue::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PrefValue, E> {
        Ok(PrefValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<PrefValue, E> {
        Ok(PrefValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<PrefValue, E> {
        Ok(PrefValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<PrefValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        PrefValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<PrefValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(PrefValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<PrefValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(PrefValue::Object)
    }
}

/// Keeps an explicit `null` distinct from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<PrefValue>, D::Error>
where
    D: Deserializer<'de>,
{
    PrefValue::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCamera {
    #[serde(default, deserialize_with = "present")]
    pub width: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub height: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub frame_rate: Option<PrefValue>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawAnchor {
    #[serde(default, deserialize_with = "present")]
    pub x: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub y: Option<PrefValue>,
}

/// Preferences exactly as the host page provides them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPreferences {
    pub camera: RawCamera,
    #[serde(default, deserialize_with = "present")]
    pub flip_horizontal: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub rounded: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub zoom: Option<PrefValue>,
    #[serde(default)]
    pub anchor: RawAnchor,
    #[serde(default, deserialize_with = "present")]
    pub border_color_css: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub show_border: Option<PrefValue>,
    #[serde(default, deserialize_with = "present")]
    pub clip_path: Option<PrefValue>,
}

impl RawPreferences {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a page object directly, keeping NaN and the infinities.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

/// Normalized, immutable view settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: f64,
    pub height: f64,
    pub frame_rate: f64,
    pub flip_horizontal: bool,
    pub rounded: bool,
    pub show_border: bool,
    /// Initial zoom factor.
    pub scale: f64,
    /// Initial horizontal offset, in percent of the video size.
    pub anchor_x: f64,
    /// Initial vertical offset, in percent of the video size.
    pub anchor_y: f64,
    pub border_color_css: Option<String>,
    pub clip_path: Option<String>,
}

impl Settings {
    /// Border color, if one is configured. An empty string counts as unset.
    pub fn border_color(&self) -> Option<&str> {
        self.border_color_css.as_deref().filter(|c| !c.is_empty())
    }

    /// Clip path, if one is configured. An empty string counts as unset.
    pub fn clip_path(&self) -> Option<&str> {
        self.clip_path.as_deref().filter(|c| !c.is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            frame_rate: 30.0,
            flip_horizontal: false,
            rounded: false,
            show_border: false,
            scale: 1.0,
            anchor_x: 0.0,
            anchor_y: 0.0,
            border_color_css: None,
            clip_path: None,
        }
    }
}

/// Normalizes raw preferences. Never fails; bad numbers become NaN.
pub fn load_settings(raw: &RawPreferences) -> Settings {
    Settings {
        width: to_number(raw.camera.width.as_ref()),
        height: to_number(raw.camera.height.as_ref()),
        frame_rate: to_number(raw.camera.frame_rate.as_ref()),
        flip_horizontal: truthy(raw.flip_horizontal.as_ref()),
        rounded: truthy(raw.rounded.as_ref()),
        show_border: truthy(raw.show_border.as_ref()),
        scale: number_or(raw.zoom.as_ref(), 1.0),
        anchor_x: number_or(raw.anchor.x.as_ref(), 0.0),
        anchor_y: number_or(raw.anchor.y.as_ref(), 0.0),
        border_color_css: css_string(raw.border_color_css.as_ref()),
        clip_path: css_string(raw.clip_path.as_ref()),
    }
}

/// Reads `window.MiniVideoMe.config` and normalizes it.
///
/// The config may be a plain object or a JSON string holding one.
pub fn from_window(window: &Window) -> Result<Settings, ConfigError> {
    let global = js_sys::Reflect::get(window, &JsValue::from_str(GLOBAL_NAME))
        .map_err(|e| ConfigError::Js(js_message(&e)))?;
    if global.is_undefined() || global.is_null() {
        return Err(ConfigError::MissingGlobal(GLOBAL_NAME));
    }
    let config = js_sys::Reflect::get(&global, &JsValue::from_str("config"))
        .map_err(|e| ConfigError::Js(js_message(&e)))?;
    if config.is_undefined() || config.is_null() {
        return Err(ConfigError::MissingGlobal("MiniVideoMe.config"));
    }
    let raw = match config.as_string() {
        Some(json) => RawPreferences::from_json(&json)?,
        None => RawPreferences::from_js(config)?,
    };
    Ok(load_settings(&raw))
}

/// Browser `Number(value)`; an absent value is NaN.
pub fn to_number(value: Option<&PrefValue>) -> f64 {
    value.map_or(f64::NAN, number_of)
}

/// Browser `Number(value ?? default)`.
pub fn number_or(value: Option<&PrefValue>, default: f64) -> f64 {
    match value {
        None | Some(PrefValue::Null) => default,
        Some(v) => number_of(v),
    }
}

/// Browser truthiness.
pub fn truthy(value: Option<&PrefValue>) -> bool {
    match value {
        None | Some(PrefValue::Null) => false,
        Some(PrefValue::Bool(b)) => *b,
        Some(PrefValue::Number(n)) => *n != 0.0 && !n.is_nan(),
        Some(PrefValue::String(s)) => !s.is_empty(),
        Some(PrefValue::Array(_) | PrefValue::Object) => true,
    }
}

/// Only strings are usable as CSS values; anything else counts as unset.
fn css_string(value: Option<&PrefValue>) -> Option<String> {
    match value {
        Some(PrefValue::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_of(value: &PrefValue) -> f64 {
    match value {
        PrefValue::Null => 0.0,
        PrefValue::Bool(b) => f64::from(u8::from(*b)),
        PrefValue::Number(n) => *n,
        PrefValue::String(s) => parse_number(s),
        // Arrays go through their string form: [] is "", [x] is String(x).
        PrefValue::Array(items) => match items.as_slice() {
            [] | [PrefValue::Null] => 0.0,
            [item @ (PrefValue::Number(_) | PrefValue::String(_) | PrefValue::Array(_))] => {
                number_of(item)
            }
            _ => f64::NAN,
        },
        PrefValue::Object => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &t[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }
    // f64::from_str also accepts "inf" and "nan", which the browser does not.
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    t.parse().unwrap_or(f64::NAN)
}
