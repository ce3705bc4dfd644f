// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const COLUMN_COUNT_RANGE: RangeInclusive<u32> = 1..=6;
pub const GRID_GAP_RANGE: RangeInclusive<u32> = 0..=200;
pub const CONTAINER_PADDING_RANGE: RangeInclusive<u32> = 0..=64;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=24;
pub const BORDER_WIDTH_RANGE: RangeInclusive<u32> = 0..=4;
pub const BORDER_RADIUS_RANGE: RangeInclusive<u32> = 0..=24;
pub const CARD_HEIGHT_RANGE: RangeInclusive<u32> = 200..=500;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex colour pattern is valid")
});

/// 结果页的布局模式
///
/// 与 [`Settings`] 分开持久化，默认 `basic`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Basic,
    Masonry,
    Coverflow,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Basic, LayoutMode::Masonry, LayoutMode::Coverflow];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Basic => "basic",
            LayoutMode::Masonry => "masonry",
            LayoutMode::Coverflow => "coverflow",
        }
    }

    /// 布局选择面板上显示的标题和说明
    pub fn label(&self) -> (&'static str, &'static str) {
        match self {
            LayoutMode::Basic => ("Basic Grid", "Simple and clean grid layout"),
            LayoutMode::Masonry => ("Masonry", "Pinterest-style dynamic grid"),
            LayoutMode::Coverflow => ("Coverflow", "Immersive carousel experience"),
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => Ok(LayoutMode::Basic),
            "masonry" => Ok(LayoutMode::Masonry),
            "coverflow" => Ok(LayoutMode::Coverflow),
            other => Err(format!("Unknown layout mode: {}", other)),
        }
    }
}

/// 卡片可选字体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    #[serde(rename = "Open Sans")]
    OpenSans,
    Montserrat,
    Poppins,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::OpenSans,
        FontFamily::Montserrat,
        FontFamily::Poppins,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Poppins => "Poppins",
        }
    }

    /// CSS `font-family` value with a generic fallback.
    pub fn css(&self) -> String {
        format!("'{}', sans-serif", self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .iter()
            .copied()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("Unsupported font family: {}", s))
    }
}

/// 展示配置
///
/// 所有数值字段都有声明的取值范围，从存储读取或经补丁更新后
/// 都会被钳制回范围内。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub layout: LayoutSettings,
    pub page: PageSettings,
    pub card: CardSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub column_count: u32,
    pub grid_gap: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            column_count: 3,
            grid_gap: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    pub container_padding: u32,
    pub background_image: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            container_padding: 32,
            background_image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSettings {
    pub font: FontSettings,
    pub border: BorderSettings,
    pub height: u32,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            font: FontSettings::default(),
            border: BorderSettings::default(),
            height: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub family: FontFamily,
    pub size: u32,
    pub color: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: FontFamily::Inter,
            size: 16,
            color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderSettings {
    pub width: u32,
    pub color: String,
    pub radius: u32,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            width: 1,
            color: "#ffffff33".to_string(),
            radius: 12,
        }
    }
}

pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// 背景图片只接受可解码的 base64 `data:` URI 或 http(s) URL
pub fn is_valid_background_image(value: &str) -> bool {
    if let Some(rest) = value.strip_prefix("data:") {
        return match rest.split_once(";base64,") {
            Some((mime, payload)) => {
                mime.starts_with("image/") && !payload.is_empty() && STANDARD.decode(payload).is_ok()
            }
            None => false,
        };
    }
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn clamp_i64(value: i64, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start() as i64, *range.end() as i64) as u32
}

impl Settings {
    /// 将所有数值字段钳制回声明范围，并丢弃无效的颜色和背景
    ///
    /// 返回被修正的字段路径。
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let mut repaired = Vec::new();
        let defaults = Settings::default();

        let mut fix = |field: &mut u32, range: RangeInclusive<u32>, path: &'static str| {
            if !range.contains(field) {
                *field = clamp_i64(*field as i64, &range);
                repaired.push(path);
            }
        };
        fix(&mut self.layout.column_count, COLUMN_COUNT_RANGE, "layout.columnCount");
        fix(&mut self.layout.grid_gap, GRID_GAP_RANGE, "layout.gridGap");
        fix(
            &mut self.page.container_padding,
            CONTAINER_PADDING_RANGE,
            "page.containerPadding",
        );
        fix(&mut self.card.font.size, FONT_SIZE_RANGE, "card.font.size");
        fix(&mut self.card.border.width, BORDER_WIDTH_RANGE, "card.border.width");
        fix(&mut self.card.border.radius, BORDER_RADIUS_RANGE, "card.border.radius");
        fix(&mut self.card.height, CARD_HEIGHT_RANGE, "card.height");

        if !is_valid_color(&self.card.font.color) {
            self.card.font.color = defaults.card.font.color.clone();
            repaired.push("card.font.color");
        }
        if !is_valid_color(&self.card.border.color) {
            self.card.border.color = defaults.card.border.color.clone();
            repaired.push("card.border.color");
        }
        if let Some(image) = &self.page.background_image {
            if !is_valid_background_image(image) {
                self.page.background_image = None;
                repaired.push("page.backgroundImage");
            }
        }

        repaired
    }

    /// 从存储中的 JSON 逐字段恢复配置
    ///
    /// 缺失或类型错误的字段单独回退为默认值，超出范围的数值被钳制。
    /// 返回恢复后的配置以及被修正的字段路径。
    pub fn from_stored(value: &Value) -> (Settings, Vec<&'static str>) {
        let defaults = Settings::default();
        let mut repaired = Vec::new();

        let mut number = |pointer: &'static str, range: RangeInclusive<u32>, default: u32| {
            match value.pointer(pointer).and_then(Value::as_f64) {
                Some(raw) if raw.is_finite() => {
                    let rounded = raw.round() as i64;
                    let clamped = clamp_i64(rounded, &range);
                    if clamped as i64 != rounded || rounded as f64 != raw {
                        repaired.push(pointer);
                    }
                    clamped
                }
                _ => {
                    repaired.push(pointer);
                    default
                }
            }
        };

        let column_count = number(
            "/layout/columnCount",
            COLUMN_COUNT_RANGE,
            defaults.layout.column_count,
        );
        let grid_gap = number("/layout/gridGap", GRID_GAP_RANGE, defaults.layout.grid_gap);
        let container_padding = number(
            "/page/containerPadding",
            CONTAINER_PADDING_RANGE,
            defaults.page.container_padding,
        );
        let font_size = number("/card/font/size", FONT_SIZE_RANGE, defaults.card.font.size);
        let border_width = number(
            "/card/border/width",
            BORDER_WIDTH_RANGE,
            defaults.card.border.width,
        );
        let border_radius = number(
            "/card/border/radius",
            BORDER_RADIUS_RANGE,
            defaults.card.border.radius,
        );
        let height = number("/card/height", CARD_HEIGHT_RANGE, defaults.card.height);

        let mut color = |pointer: &'static str, default: &str| match value
            .pointer(pointer)
            .and_then(Value::as_str)
        {
            Some(raw) if is_valid_color(raw) => raw.to_string(),
            _ => {
                repaired.push(pointer);
                default.to_string()
            }
        };
        let font_color = color("/card/font/color", &defaults.card.font.color);
        let border_color = color("/card/border/color", &defaults.card.border.color);

        let family = match value
            .pointer("/card/font/family")
            .and_then(Value::as_str)
            .map(FontFamily::from_str)
        {
            Some(Ok(family)) => family,
            _ => {
                repaired.push("/card/font/family");
                defaults.card.font.family
            }
        };

        let background_image = match value.pointer("/page/backgroundImage") {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) if raw.is_empty() => None,
            Some(Value::String(raw)) if is_valid_background_image(raw) => Some(raw.clone()),
            Some(_) => {
                repaired.push("/page/backgroundImage");
                None
            }
        };

        let settings = Settings {
            layout: LayoutSettings {
                column_count,
                grid_gap,
            },
            page: PageSettings {
                container_padding,
                background_image,
            },
            card: CardSettings {
                font: FontSettings {
                    family,
                    size: font_size,
                    color: font_color,
                },
                border: BorderSettings {
                    width: border_width,
                    color: border_color,
                    radius: border_radius,
                },
                height,
            },
        };

        (settings, repaired)
    }

    /// 深度合并一个部分更新，然后钳制
    ///
    /// 数值被钳制到范围内；无效的颜色或背景被拒绝，保留当前值。
    /// 返回被钳制或拒绝的字段路径。
    pub fn merge(&mut self, patch: SettingsPatch) -> Vec<&'static str> {
        let mut rejected = Vec::new();

        if let Some(layout) = patch.layout {
            if let Some(v) = layout.column_count {
                self.layout.column_count = clamp_i64(v, &COLUMN_COUNT_RANGE);
            }
            if let Some(v) = layout.grid_gap {
                self.layout.grid_gap = clamp_i64(v, &GRID_GAP_RANGE);
            }
        }
        if let Some(page) = patch.page {
            if let Some(v) = page.container_padding {
                self.page.container_padding = clamp_i64(v, &CONTAINER_PADDING_RANGE);
            }
            match page.background_image {
                Some(Some(image)) if !image.is_empty() => {
                    if is_valid_background_image(&image) {
                        self.page.background_image = Some(image);
                    } else {
                        rejected.push("page.backgroundImage");
                    }
                }
                Some(_) => self.page.background_image = None,
                None => {}
            }
        }
        if let Some(card) = patch.card {
            if let Some(font) = card.font {
                if let Some(v) = font.family {
                    self.card.font.family = v;
                }
                if let Some(v) = font.size {
                    self.card.font.size = clamp_i64(v, &FONT_SIZE_RANGE);
                }
                if let Some(v) = font.color {
                    if is_valid_color(&v) {
                        self.card.font.color = v;
                    } else {
                        rejected.push("card.font.color");
                    }
                }
            }
            if let Some(border) = card.border {
                if let Some(v) = border.width {
                    self.card.border.width = clamp_i64(v, &BORDER_WIDTH_RANGE);
                }
                if let Some(v) = border.color {
                    if is_valid_color(&v) {
                        self.card.border.color = v;
                    } else {
                        rejected.push("card.border.color");
                    }
                }
                if let Some(v) = border.radius {
                    self.card.border.radius = clamp_i64(v, &BORDER_RADIUS_RANGE);
                }
            }
            if let Some(v) = card.height {
                self.card.height = clamp_i64(v, &CARD_HEIGHT_RANGE);
            }
        }

        rejected.extend(self.sanitize());
        rejected
    }
}

/// [`Settings`] 的部分更新
///
/// 数值使用 `i64` 以便负数或超范围的输入在合并时被钳制，而不是在反序列化时失败。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub layout: Option<LayoutPatch>,
    pub page: Option<PagePatch>,
    pub card: Option<CardPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPatch {
    pub column_count: Option<i64>,
    pub grid_gap: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePatch {
    pub container_padding: Option<i64>,
    /// `Some(None)` clears the background; an absent key leaves it unchanged.
    #[serde(deserialize_with = "deserialize_present")]
    pub background_image: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPatch {
    pub font: Option<FontPatch>,
    pub border: Option<BorderPatch>,
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontPatch {
    pub family: Option<FontFamily>,
    pub size: Option<i64>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderPatch {
    pub width: Option<i64>,
    pub color: Option<String>,
    pub radius: Option<i64>,
}

// A present key (even `null`) becomes `Some(_)`; serde's `default` covers the absent case.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
