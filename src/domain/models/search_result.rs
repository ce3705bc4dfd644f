// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单个图片搜索结果
///
/// 由 Normalizer 从搜索提供方的原始条目生成，创建之后字段不再修改，
/// 只会被重新排序或删除。`link` 是结果在 Result Store 中的身份键。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: Option<String>,
    pub favicon: String,
    pub source: String,
    pub date: Option<String>,
}

impl SearchResult {
    /// Identity key used for reordering and modal selection.
    pub fn id(&self) -> &str {
        &self.link
    }
}

/// 用户为本次查询选择的平台
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSelection {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

impl PlatformSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: None,
            is_selected: false,
        }
    }

    pub fn selected(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: Some(username.into()),
            is_selected: true,
        }
    }

    /// 返回 `site:<platform>.com <username>` 子句
    ///
    /// 只有被选中且用户名非空的平台才会贡献子句。
    pub fn site_clause(&self) -> Option<String> {
        if !self.is_selected {
            return None;
        }
        let username = self.username.as_deref().map(str::trim).unwrap_or("");
        if username.is_empty() {
            return None;
        }
        let domain: String = self
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if domain.is_empty() {
            return None;
        }
        Some(format!("site:{}.com {}", domain, username))
    }
}

/// 平台目录条目
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlatformInfo {
    pub name: &'static str,
    pub icon: &'static str,
}

/// 搜索界面提供的社交平台目录
pub const PLATFORM_CATALOG: &[PlatformInfo] = &[
    PlatformInfo { name: "Instagram", icon: "/icons/instagram.svg" },
    PlatformInfo { name: "TikTok", icon: "/icons/tiktok.svg" },
    PlatformInfo { name: "Youtube", icon: "/icons/youtube.svg" },
    PlatformInfo { name: "Spotify", icon: "/icons/spotify.svg" },
    PlatformInfo { name: "Facebook", icon: "/icons/facebook.svg" },
    PlatformInfo { name: "SubStack", icon: "/icons/substack.svg" },
    PlatformInfo { name: "SoundCloud", icon: "/icons/soundcloud.svg" },
    PlatformInfo { name: "Calendly", icon: "/icons/calendly.svg" },
    PlatformInfo { name: "X", icon: "/icons/x.svg" },
    PlatformInfo { name: "Reddit", icon: "/icons/reddit.svg" },
    PlatformInfo { name: "LinkedIn", icon: "/icons/linkedin.svg" },
    PlatformInfo { name: "Twitch", icon: "/icons/twitch.svg" },
    PlatformInfo { name: "Vimeo", icon: "/icons/vimeo.svg" },
    PlatformInfo { name: "Discord", icon: "/icons/discord.svg" },
    PlatformInfo { name: "Medium", icon: "/icons/medium.svg" },
    PlatformInfo { name: "Threads", icon: "/icons/threads.svg" },
    PlatformInfo { name: "BlueSky", icon: "/icons/bluesky.svg" },
    PlatformInfo { name: "SnapChat", icon: "/icons/snapchat.svg" },
    PlatformInfo { name: "Pinterest", icon: "/icons/pinterest.svg" },
    PlatformInfo { name: "Amazon", icon: "/icons/amazon.svg" },
];

/// 以目录生成默认（全部未选中）的平台列表
pub fn default_platforms() -> Vec<PlatformSelection> {
    PLATFORM_CATALOG
        .iter()
        .map(|info| PlatformSelection::new(info.name))
        .collect()
}
